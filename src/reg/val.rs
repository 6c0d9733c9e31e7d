use crate::reg::cap::{Readable, Writable};
use crate::reg::field::{write_field, FieldRaw, RegField, WRegFieldAtomic};
use crate::reg::reg::{load, RwReg};
use core::fmt;
use core::marker::PhantomData;

/// Named constant value of a register field.
///
/// Values are declared once per field by the chip map, usually through
/// [`reg!`](crate::reg!), and composed into [`RegFieldSet`]s.
///
/// The value must fit within the field width. It is not clamped.
///
/// [`RegFieldSet`]: crate::reg::RegFieldSet
pub struct FieldValue<F: RegField> {
    value: FieldRaw<F>,
    field: PhantomData<F>,
}

impl<F: RegField> FieldValue<F> {
    /// Binds `value` to the field `F`.
    #[inline]
    pub const fn new(value: FieldRaw<F>) -> Self {
        Self { value, field: PhantomData }
    }

    /// Returns the value, unshifted.
    #[inline]
    pub fn value(&self) -> FieldRaw<F> {
        self.value
    }

    /// Returns the field mask within the register word.
    #[inline]
    pub fn mask(&self) -> FieldRaw<F> {
        F::mask()
    }

    /// Returns the value shifted to the field offset.
    #[inline]
    pub fn bits(&self) -> FieldRaw<F> {
        self.value << F::OFFSET
    }

    /// Writes the value to the field with a plain read-modify-write.
    #[inline]
    pub fn set(&self)
    where
        F::Access: Writable,
    {
        write_field::<F>(self.value);
    }

    /// Writes the value to the field, repeating the update if it was
    /// interrupted in the middle.
    #[inline]
    pub fn set_atomic(&self)
    where
        F: WRegFieldAtomic,
        F::Reg: RwReg,
    {
        F::default().set_atomic(self.value);
    }

    /// Returns `true` if the field currently holds the value.
    #[inline]
    pub fn is_set(&self) -> bool
    where
        F::Access: Readable,
    {
        load::<F::Reg>() & F::mask() == self.bits()
    }

    /// Returns `true` if `word` holds the value in the field bits.
    #[inline]
    pub fn is_set_in(&self, word: FieldRaw<F>) -> bool {
        word & F::mask() == self.bits()
    }
}

impl<F: RegField> Clone for FieldValue<F> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: RegField> Copy for FieldValue<F> {}

impl<F: RegField> PartialEq for FieldValue<F> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<F: RegField> Eq for FieldValue<F> {}

impl<F: RegField> fmt::Debug for FieldValue<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValue")
            .field("offset", &F::OFFSET)
            .field("width", &F::WIDTH)
            .field("value", &self.value)
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl<F: RegField> defmt::Format for FieldValue<F>
where
    FieldRaw<F>: defmt::Format,
{
    fn format(&self, fmt: defmt::Formatter<'_>) {
        defmt::write!(
            fmt,
            "FieldValue {{ offset: {}, width: {}, value: {} }}",
            F::OFFSET,
            F::WIDTH,
            self.value
        );
    }
}
