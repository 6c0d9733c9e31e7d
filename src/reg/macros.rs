/// Defines a memory-mapped register with its fields and named field values.
///
/// ```
/// use drone_capreg::reg::prelude::*;
///
/// drone_capreg::reg! {
///     /// APB2 peripheral clock enable register.
///     pub mod RCC_APB2ENR; // register module name
///
///     0x4002_1018 // memory address
///     u32 // word type
///     ReadWrite; // granted capability
///
///     /// I/O port A clock enable.
///     IOPAEN { // field name
///         2 // offset
///         1 // width
///         ReadWrite; // granted capability
///         DISABLE = 0, // named values
///         ENABLE = 1,
///     }
/// }
///
/// fn main() {
///     assert_eq!(<rcc_apb2enr::Reg as Reg>::ADDRESS, 0x4002_1018);
///     assert_eq!(<rcc_apb2enr::Iopaen as RegField>::mask(), 0b100);
///     assert_eq!(rcc_apb2enr::iopaen::ENABLE.bits(), 0b100);
/// }
/// ```
///
/// The macro emits a module named after the register in lower case, holding:
///
/// * `Reg` - the register token;
/// * `Schema` - the tag grouping the register's fields;
/// * `Set<V>` - a [`RegFieldSet`](crate::reg::RegFieldSet) bound to `Schema`;
/// * a field token per field, named in upper camel case;
/// * a module per field, named in lower case, with a
///   [`FieldValue`](crate::reg::FieldValue) constant per named value.
///
/// Appending `sim <reset value>` after the capability backs the register with
/// a static [`SimWord`](crate::reg::SimWord) instead of the hardware address.
/// This lets the register paths run on a host machine:
///
/// ```
/// use drone_capreg::reg::prelude::*;
///
/// drone_capreg::reg! {
///     pub mod GPIOA_ODR;
///     0x4001_080C u32 ReadWrite sim 0;
///     ODR0 { 0 1 ReadWrite; LOW = 0, HIGH = 1 }
/// }
///
/// fn main() {
///     gpioa_odr::odr0::HIGH.set();
///     assert!(gpioa_odr::odr0::HIGH.is_set());
///     assert_eq!(gpioa_odr::Reg.get(), 1);
/// }
/// ```
#[macro_export]
macro_rules! reg {
    (@as_ptr $raw:ident) => {};
    (@as_ptr $raw:ident $reset:literal) => {
        #[inline]
        fn as_ptr() -> *mut $raw {
            static MEMORY: $crate::reg::SimWord<$raw> = $crate::reg::SimWord::new($reset);
            MEMORY.as_ptr()
        }
    };
    (
        $(#[$reg_meta:meta])*
        $vis:vis mod $name:ident;
        $address:literal $raw:ident $access:ident $(sim $reset:literal)?;
        $(
            $(#[$field_meta:meta])*
            $field:ident {
                $offset:literal $width:literal $field_access:ident
                $(; $($(#[$value_meta:meta])* $value:ident = $bits:literal),* $(,)?)?
            }
        )*
    ) => {
        $crate::reexport::paste! {
            $(#[$reg_meta])*
            #[allow(dead_code)]
            $vis mod [<$name:lower>] {
                /// Register token.
                #[derive(Clone, Copy, Default, Debug)]
                pub struct Reg;

                unsafe impl $crate::reg::Reg for Reg {
                    type Access = $crate::reg::cap::$access;
                    type Raw = $raw;

                    const ADDRESS: usize = $address;

                    $crate::reg!(@as_ptr $raw $($reset)?);
                }

                /// Tag of the register's fields.
                #[derive(Clone, Copy, Default, Debug)]
                pub struct Schema;

                impl $crate::reg::RegSchema for Schema {
                    type Reg = Reg;
                }

                /// Field values of this register applied together.
                pub type Set<V> = $crate::reg::RegFieldSet<Schema, V>;

                $(
                    $(#[$field_meta])*
                    #[derive(Clone, Copy, Default, Debug)]
                    pub struct [<$field:camel>];

                    unsafe impl $crate::reg::RegField for [<$field:camel>] {
                        type Access = $crate::reg::cap::$field_access;
                        type Reg = Reg;
                        type Schema = Schema;

                        const OFFSET: u32 = $offset;
                        const WIDTH: u32 = $width;
                    }

                    const _: () = assert!(
                        $width > 0 && $offset + $width <= <$raw>::BITS,
                        concat!("field ", stringify!($field), " does not fit the register"),
                    );

                    $(#[$field_meta])*
                    pub mod [<$field:lower>] {
                        $($(
                            $(#[$value_meta])*
                            pub const $value: $crate::reg::FieldValue<super::[<$field:camel>]> =
                                $crate::reg::FieldValue::new($bits);
                        )*)?
                    }
                )*
            }
        }
    };
}
