use crate::reg::atomic::AtomicWord;
use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr, Sub};
use core::sync::atomic::{AtomicU16, AtomicU32};

/// Raw register word.
pub trait RegRaw
where
    Self: Debug
        + Copy
        + Default
        + Eq
        + Send
        + Sync
        + 'static
        + Not<Output = Self>
        + Sub<Output = Self>
        + BitOr<Output = Self>
        + BitXor<Output = Self>
        + BitAnd<Output = Self>
        + Shl<u32, Output = Self>
        + Shr<u32, Output = Self>,
{
    /// Atomic cell with the same layout as the word.
    type Atomic: AtomicWord<Raw = Self> + 'static;

    /// Size of the word in bits.
    const BITS: u32;

    /// All bits cleared.
    const ZERO: Self;

    /// The lowest bit set.
    const ONE: Self;

    /// All bits set.
    const MAX: Self;

    /// Returns `width` contiguous set bits starting at `offset`.
    ///
    /// A `width` covering the whole word yields [`RegRaw::MAX`] without
    /// shifting by the word size.
    #[inline]
    fn mask(offset: u32, width: u32) -> Self {
        if width >= Self::BITS {
            Self::MAX
        } else {
            ((Self::ONE << width) - Self::ONE) << offset
        }
    }

    /// Views the word at `ptr` as an atomic cell.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes for `'a` and aligned for
    /// `Self::Atomic`, and every concurrent access to it must be atomic.
    unsafe fn as_atomic<'a>(ptr: *mut Self) -> &'a Self::Atomic;
}

macro_rules! impl_reg_raw {
    ($type:ty, $atomic:ty) => {
        impl RegRaw for $type {
            type Atomic = $atomic;

            const BITS: u32 = <$type>::BITS;
            const MAX: $type = <$type>::MAX;
            const ONE: $type = 1;
            const ZERO: $type = 0;

            #[inline]
            unsafe fn as_atomic<'a>(ptr: *mut $type) -> &'a $atomic {
                unsafe { <$atomic>::from_ptr(ptr) }
            }
        }
    };
}

impl_reg_raw!(u32, AtomicU32);
impl_reg_raw!(u16, AtomicU16);
