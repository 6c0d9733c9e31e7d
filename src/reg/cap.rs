//! Access capabilities.
//!
//! A capability is a set of three permissions: *read*, *write* and
//! *configure*. It is encoded entirely in the type system as a triple of
//! [`typenum`] bits, so a handle carrying a capability is still zero-sized and
//! every permission check is resolved by the trait solver.
//!
//! ```
//! use drone_capreg::reg::cap::{All, Grants, Read, ReadWrite, Write};
//!
//! fn assert_grants<G: Grants<Q>, Q: drone_capreg::reg::cap::Capability>() {}
//!
//! assert_grants::<All, ReadWrite>();
//! assert_grants::<ReadWrite, Write>();
//! assert_grants::<Read, Read>();
//! ```

use core::marker::PhantomData;
use typenum::{Bit, B0, B1};

/// Type-level capability set.
///
/// Implemented only by [`Caps`]. Never instantiated.
pub trait Capability: 'static {
    /// Read permission bit.
    type Read: Bit;

    /// Write permission bit.
    type Write: Bit;

    /// Configure permission bit.
    type Config: Bit;
}

/// Capability set built from three permission bits.
pub struct Caps<R: Bit, W: Bit, C: Bit>(PhantomData<(R, W, C)>);

impl<R: Bit + 'static, W: Bit + 'static, C: Bit + 'static> Capability for Caps<R, W, C> {
    type Config = C;
    type Read = R;
    type Write = W;
}

/// No access. Public constants of such handles are still usable.
pub type Nothing = Caps<B0, B0, B0>;

/// Read-only access.
pub type Read = Caps<B1, B0, B0>;

/// Write-only access.
pub type Write = Caps<B0, B1, B0>;

/// Configuration-only access.
pub type Config = Caps<B0, B0, B1>;

/// Read and write access.
pub type ReadWrite = Caps<B1, B1, B0>;

/// Read and configuration access.
pub type ReadConfig = Caps<B1, B0, B1>;

/// Write and configuration access.
pub type WriteConfig = Caps<B0, B1, B1>;

/// Unrestricted access.
pub type All = Caps<B1, B1, B1>;

// {{{ Implies
/// Bit implication: `Self` set implies `B` set.
pub trait Implies<B: Bit>: Bit {}

impl Implies<B0> for B0 {}
impl Implies<B1> for B0 {}
impl Implies<B1> for B1 {}

// }}}
// {{{ Grants
/// Capability subsumption: `Self` grants every permission of `Q`.
#[diagnostic::on_unimplemented(
    message = "capability `{Self}` does not grant `{Q}`",
    label = "the handle was not granted the capability this operation requires"
)]
pub trait Grants<Q: Capability>: Capability {}

impl<G, Q> Grants<Q> for G
where
    G: Capability,
    Q: Capability,
    Q::Read: Implies<G::Read>,
    Q::Write: Implies<G::Write>,
    Q::Config: Implies<G::Config>,
{
}

// }}}
// {{{ Readable
/// Capability that includes read permission.
pub trait Readable: Grants<Read> {}

impl<G: Grants<Read>> Readable for G {}

// }}}
// {{{ Writable
/// Capability that includes write permission.
pub trait Writable: Grants<Write> {}

impl<G: Grants<Write>> Writable for G {}

// }}}
// {{{ Configurable
/// Capability that includes configure permission.
pub trait Configurable: Grants<Config> {}

impl<G: Grants<Config>> Configurable for G {}

// }}}


mod compile_tests {
    //! ```compile_fail
    //! use drone_capreg::reg::cap::{Capability, Grants, ReadConfig, Write};
    //! fn grants<G: Grants<Q>, Q: Capability>() {}
    //! grants::<ReadConfig, Write>();
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::reg::cap::{Capability, Grants, Read, WriteConfig};
    //! fn grants<G: Grants<Q>, Q: Capability>() {}
    //! grants::<WriteConfig, Read>();
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::reg::cap::{Capability, Config, Grants, ReadWrite};
    //! fn grants<G: Grants<Q>, Q: Capability>() {}
    //! grants::<Config, ReadWrite>();
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::reg::cap::{Capability, Config, Grants, ReadWrite};
    //! fn grants<G: Grants<Q>, Q: Capability>() {}
    //! grants::<ReadWrite, Config>();
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::reg::cap::{Capability, Grants, Nothing, Read};
    //! fn grants<G: Grants<Q>, Q: Capability>() {}
    //! grants::<Nothing, Read>();
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::reg::cap::{All, Capability, Grants, ReadConfig};
    //! fn grants<G: Grants<Q>, Q: Capability>() {}
    //! grants::<ReadConfig, All>();
    //! ```
}
