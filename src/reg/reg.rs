use crate::reg::atomic::AtomicFieldUpdater;
use crate::reg::cap::{Capability, Grants, ReadWrite, Readable, Writable};
use crate::reg::raw::RegRaw;
use core::ptr::{read_volatile, write_volatile};

/// Memory-mapped register token.
///
/// Types which implement this trait should be zero-sized. The token carries
/// the register's address, word size and granted capability, none of which
/// occupies memory.
///
/// # Safety
///
/// [`Reg::as_ptr`] must return a pointer valid for volatile and atomic
/// accesses of `Self::Raw` for the whole program lifetime.
pub unsafe trait Reg: Sized + Copy + Default {
    /// Raw word type, `u16` or `u32`.
    type Raw: RegRaw;

    /// Capability granted to the register.
    type Access: Capability;

    /// Memory address of the register.
    const ADDRESS: usize;

    /// Returns a pointer to the register word.
    #[inline]
    fn as_ptr() -> *mut Self::Raw {
        Self::ADDRESS as *mut Self::Raw
    }
}

/// Disambiguation for `Reg::Raw`.
pub type RegRawOf<R> = <R as Reg>::Raw;

#[inline]
pub(crate) fn load<R: Reg>() -> R::Raw {
    unsafe { read_volatile(R::as_ptr()) }
}

#[inline]
pub(crate) fn store<R: Reg>(value: R::Raw) {
    unsafe { write_volatile(R::as_ptr(), value) }
}

#[inline]
pub(crate) fn update_atomic<R: Reg>(mask: R::Raw, offset: u32, value: R::Raw) {
    let word = unsafe { <R::Raw as RegRaw>::as_atomic(R::as_ptr()) };
    AtomicFieldUpdater::new(word).update(mask, offset, value);
}

/// Register that can read its value.
pub trait RReg: Reg {
    /// Reads the current word.
    fn get(&self) -> Self::Raw;
}

/// Register that can write its value.
pub trait WReg: Reg {
    /// Writes `value` to the register.
    fn set(&self, value: Self::Raw);

    /// Flips the bits set in `value`.
    ///
    /// This is a plain read-modify-write, not safe against preemption.
    fn toggle(&self, value: Self::Raw);
}

/// Read-write register.
pub trait RwReg: RReg + WReg {}

/// Atomic operations for read-write register.
pub trait RwRegAtomic: RwReg {
    /// Replaces the bits selected by `mask` with `value << offset`, repeating
    /// the update if it was interrupted in the middle.
    fn modify_atomic(&self, mask: Self::Raw, offset: u32, value: Self::Raw);
}

impl<R> RReg for R
where
    R: Reg,
    R::Access: Readable,
{
    #[inline]
    fn get(&self) -> R::Raw {
        load::<R>()
    }
}

impl<R> WReg for R
where
    R: Reg,
    R::Access: Writable,
{
    #[inline]
    fn set(&self, value: R::Raw) {
        store::<R>(value);
    }

    #[inline]
    fn toggle(&self, value: R::Raw) {
        store::<R>(load::<R>() ^ value);
    }
}

impl<R> RwReg for R where R: RReg + WReg {}

impl<R> RwRegAtomic for R
where
    R: RwReg,
    R::Access: Grants<ReadWrite>,
{
    #[inline]
    fn modify_atomic(&self, mask: R::Raw, offset: u32, value: R::Raw) {
        update_atomic::<R>(mask, offset, value);
    }
}
