//! External items referenced by the [`reg!`](crate::reg!) expansion.

pub use paste::paste;
