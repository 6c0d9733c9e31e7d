use crate::reg::cap::{Capability, Readable, Writable};
use crate::reg::raw::RegRaw;
use crate::reg::reg::{load, store, update_atomic, RegRawOf, RwReg};
use crate::reg::set::RegSchema;
use crate::reg::Reg;

/// Register field token.
///
/// A field is a contiguous bit range of its parent register. Its capability
/// is independent of the register's: a read-only field of a read-write
/// register can only be read through the field token.
///
/// # Safety
///
/// `OFFSET + WIDTH` must not exceed the parent register's word size, and
/// `WIDTH` must be at least one.
pub unsafe trait RegField: Sized + Copy + Default {
    /// Parent register.
    type Reg: Reg;

    /// Capability granted to the field.
    type Access: Capability;

    /// Group tag shared by all fields of the parent register.
    type Schema: RegSchema<Reg = Self::Reg>;

    /// Bit offset of the field.
    const OFFSET: u32;

    /// Bit width of the field.
    const WIDTH: u32;

    /// Returns the field bits of the parent register word.
    #[inline]
    fn mask() -> FieldRaw<Self> {
        <FieldRaw<Self> as RegRaw>::mask(Self::OFFSET, Self::WIDTH)
    }
}

/// Disambiguation for `RegField::Reg::Raw`.
pub type FieldRaw<F> = RegRawOf<<F as RegField>::Reg>;

#[inline]
pub(crate) fn read_field<F: RegField>() -> FieldRaw<F> {
    (load::<F::Reg>() & F::mask()) >> F::OFFSET
}

#[inline]
pub(crate) fn write_field<F: RegField>(value: FieldRaw<F>) {
    store::<F::Reg>(load::<F::Reg>() & !F::mask() | value << F::OFFSET);
}

/// Register field that can read its value.
pub trait RRegField: RegField {
    /// Reads the field bits, shifted down to bit zero.
    fn get(&self) -> FieldRaw<Self>;
}

/// Register field that can write its value.
pub trait WRegField: RegField {
    /// Replaces the field bits with `value`.
    ///
    /// This is a plain read-modify-write of the whole register word. Another
    /// context modifying the same word between the read and the write loses
    /// its update, so use it only with exclusive access to the register, or
    /// use [`WRegFieldAtomic::set_atomic`].
    fn set(&self, value: FieldRaw<Self>);
}

/// Atomic operations for writable field of read-write register.
pub trait WRegFieldAtomic: WRegField
where
    Self::Reg: RwReg,
{
    /// Replaces the field bits with `value`, repeating the update if it was
    /// interrupted in the middle.
    fn set_atomic(&self, value: FieldRaw<Self>);
}

impl<F> RRegField for F
where
    F: RegField,
    F::Access: Readable,
{
    #[inline]
    fn get(&self) -> FieldRaw<F> {
        read_field::<F>()
    }
}

impl<F> WRegField for F
where
    F: RegField,
    F::Access: Writable,
{
    #[inline]
    fn set(&self, value: FieldRaw<F>) {
        write_field::<F>(value);
    }
}

impl<F> WRegFieldAtomic for F
where
    F: WRegField,
    F::Reg: RwReg,
{
    #[inline]
    fn set_atomic(&self, value: FieldRaw<F>) {
        update_atomic::<F::Reg>(F::mask(), F::OFFSET, value);
    }
}
