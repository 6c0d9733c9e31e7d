use crate::reg::cap::{Readable, Writable};
use crate::reg::field::RegField;
use crate::reg::raw::RegRaw;
use crate::reg::reg::{load, store, RegRawOf};
use crate::reg::val::FieldValue;
use crate::reg::Reg;
use core::fmt;
use core::marker::PhantomData;

/// Group tag of a register's fields.
///
/// Every register declares its own tag type, so values of two registers with
/// identical layouts are still distinct.
pub trait RegSchema: 'static {
    /// The register the fields belong to.
    type Reg: Reg;
}

/// Disambiguation for `RegSchema::Reg::Raw`.
pub type SchemaRaw<S> = RegRawOf<<S as RegSchema>::Reg>;

/// One or more field values of the register tagged with `S`.
///
/// Implemented for [`FieldValue`] and for tuples of up to twelve
/// `FieldValues` sharing the same tag.
#[diagnostic::on_unimplemented(
    message = "`{Self}` mixes field values of different registers",
    label = "every value in a field set must belong to the register tagged `{S}`"
)]
pub trait FieldValues<S: RegSchema>: Copy {
    /// Returns the union of the member field masks.
    fn mask(&self) -> SchemaRaw<S>;

    /// Returns the union of the member values shifted to their offsets.
    fn bits(&self) -> SchemaRaw<S>;
}

impl<F: RegField> FieldValues<F::Schema> for FieldValue<F> {
    #[inline]
    fn mask(&self) -> SchemaRaw<F::Schema> {
        FieldValue::mask(self)
    }

    #[inline]
    fn bits(&self) -> SchemaRaw<F::Schema> {
        FieldValue::bits(self)
    }
}

/// Field values whose fields all grant write access.
#[diagnostic::on_unimplemented(
    message = "`{Self}` includes a value of a field without write access",
    label = "every field in a written set must be writable"
)]
pub trait WritableValues<S: RegSchema>: FieldValues<S> {}

/// Field values whose fields all grant read access.
#[diagnostic::on_unimplemented(
    message = "`{Self}` includes a value of a field without read access",
    label = "every field in a checked set must be readable"
)]
pub trait ReadableValues<S: RegSchema>: FieldValues<S> {}

impl<F: RegField> WritableValues<F::Schema> for FieldValue<F> where F::Access: Writable {}

impl<F: RegField> ReadableValues<F::Schema> for FieldValue<F> where F::Access: Readable {}

macro_rules! field_values_tuple {
    ($($name:ident),+) => {
        impl<S: RegSchema, $($name: FieldValues<S>),+> FieldValues<S> for ($($name,)+) {
            #[inline]
            #[allow(non_snake_case)]
            fn mask(&self) -> SchemaRaw<S> {
                let ($($name,)+) = self;
                <SchemaRaw<S> as RegRaw>::ZERO $(| $name.mask())+
            }

            #[inline]
            #[allow(non_snake_case)]
            fn bits(&self) -> SchemaRaw<S> {
                let ($($name,)+) = self;
                <SchemaRaw<S> as RegRaw>::ZERO $(| $name.bits())+
            }
        }

        impl<S: RegSchema, $($name: WritableValues<S>),+> WritableValues<S> for ($($name,)+) {}

        impl<S: RegSchema, $($name: ReadableValues<S>),+> ReadableValues<S> for ($($name,)+) {}
    };
}

field_values_tuple!(A);
field_values_tuple!(A, B);
field_values_tuple!(A, B, C);
field_values_tuple!(A, B, C, D);
field_values_tuple!(A, B, C, D, E);
field_values_tuple!(A, B, C, D, E, F);
field_values_tuple!(A, B, C, D, E, F, G);
field_values_tuple!(A, B, C, D, E, F, G, H);
field_values_tuple!(A, B, C, D, E, F, G, H, I);
field_values_tuple!(A, B, C, D, E, F, G, H, I, J);
field_values_tuple!(A, B, C, D, E, F, G, H, I, J, K);
field_values_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

/// Several values of one register, applied in a single read-modify-write.
///
/// The members are checked to share the register's tag `S` when the set is
/// constructed; mixing values of two registers does not compile.
///
/// ```
/// use drone_capreg::reg::prelude::*;
///
/// drone_capreg::reg! {
///     pub mod GPIOA_CRL;
///     0x4001_0800 u32 ReadWrite sim 0x4444_4444;
///     CRL0 { 0 4 ReadWrite; OUT_PP_50MHZ = 0b0011 }
///     CRL1 { 4 4 ReadWrite; OUT_PP_2MHZ = 0b0010 }
///     CRL7 { 28 4 ReadWrite; IN_FLOAT = 0b0100 }
/// }
///
/// let set = gpioa_crl::Set::new((
///     gpioa_crl::crl0::OUT_PP_50MHZ,
///     gpioa_crl::crl1::OUT_PP_2MHZ,
///     gpioa_crl::crl7::IN_FLOAT,
/// ));
/// set.set();
/// assert!(set.is_set());
/// assert_eq!(gpioa_crl::Reg.get(), 0x4444_4423);
/// ```
pub struct RegFieldSet<S: RegSchema, V: FieldValues<S>> {
    values: V,
    schema: PhantomData<S>,
}

impl<S: RegSchema, V: FieldValues<S>> RegFieldSet<S, V> {
    /// Groups `values` of the register tagged `S`.
    #[inline]
    pub const fn new(values: V) -> Self {
        Self { values, schema: PhantomData }
    }

    /// Returns the member values.
    #[inline]
    pub fn values(&self) -> V {
        self.values
    }

    /// Returns the union of the member field masks.
    #[inline]
    pub fn mask(&self) -> SchemaRaw<S> {
        self.values.mask()
    }

    /// Returns the union of the member values shifted to their offsets.
    #[inline]
    pub fn bits(&self) -> SchemaRaw<S> {
        self.values.bits()
    }

    /// Writes all member values with one plain read-modify-write.
    ///
    /// Requires write access to the register and to every member field. Bits
    /// outside the members' fields are preserved. The update is not safe
    /// against preemption.
    #[inline]
    pub fn set(&self)
    where
        <S::Reg as Reg>::Access: Writable,
        V: WritableValues<S>,
    {
        store::<S::Reg>(load::<S::Reg>() & !self.mask() | self.bits());
    }

    /// Returns `true` if every member field currently holds its value.
    ///
    /// Requires read access to the register and to every member field.
    #[inline]
    pub fn is_set(&self) -> bool
    where
        <S::Reg as Reg>::Access: Readable,
        V: ReadableValues<S>,
    {
        load::<S::Reg>() & self.mask() == self.bits()
    }
}

impl<S: RegSchema, V: FieldValues<S>> Clone for RegFieldSet<S, V> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: RegSchema, V: FieldValues<S>> Copy for RegFieldSet<S, V> {}

impl<S: RegSchema, V: FieldValues<S>> fmt::Debug for RegFieldSet<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegFieldSet")
            .field("address", &<S::Reg as Reg>::ADDRESS)
            .field("mask", &self.mask())
            .field("bits", &self.bits())
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl<S: RegSchema, V: FieldValues<S>> defmt::Format for RegFieldSet<S, V>
where
    SchemaRaw<S>: defmt::Format,
{
    fn format(&self, fmt: defmt::Formatter<'_>) {
        defmt::write!(
            fmt,
            "RegFieldSet {{ address: {=usize:#x}, mask: {}, bits: {} }}",
            <S::Reg as Reg>::ADDRESS,
            self.mask(),
            self.bits()
        );
    }
}
