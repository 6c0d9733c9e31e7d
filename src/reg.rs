//! Memory-mapped registers.
//!
//! # Registers, Fields and Values
//!
//! Registers are declared by chip maps with the [`reg!`](crate::reg!) macro.
//! Each register is a zero-sized token carrying its address, word type and
//! granted [capability](cap). Each field carries its own capability, and each
//! named field value is a constant bound to its field.
//!
//! ```
//! use drone_capreg::reg::prelude::*;
//!
//! drone_capreg::reg! {
//!     /// Port input data register.
//!     pub mod GPIOB_IDR;
//!     0x4001_0C08 u32 Read sim 0x0000_0002;
//!     IDR0 { 0 1 Read; LOW = 0, HIGH = 1 }
//!     IDR1 { 1 1 Read; LOW = 0, HIGH = 1 }
//! }
//!
//! drone_capreg::reg! {
//!     /// Port bit set/reset register.
//!     pub mod GPIOB_BSRR;
//!     0x4001_0C10 u32 Write sim 0;
//!     BS0 { 0 1 Write; SET = 1 }
//!     BR0 { 16 1 Write; RESET = 1 }
//! }
//!
//! fn main() {
//!     assert_eq!(gpiob_idr::Reg.get(), 0b10);
//!     assert_eq!(gpiob_idr::Idr1.get(), 1);
//!     assert!(gpiob_idr::idr0::LOW.is_set());
//!     gpiob_bsrr::Reg.set(0b1);
//!     gpiob_bsrr::br0::RESET.set();
//!     assert_eq!(core::mem::size_of_val(&gpiob_idr::Reg), 0);
//! }
//! ```
//!
//! # Capabilities
//!
//! Every operation states the capability it needs. Calling it on a handle
//! whose capability does not grant it is a compile error, so the checks cost
//! nothing at run time.
//!
//! # Concurrency
//!
//! [`WReg::set`], [`WRegField::set`], [`FieldValue::set`] and
//! [`RegFieldSet::set`] access the register with a plain load and store. They
//! are not safe against an interrupt handler modifying the same word in the
//! middle. [`RwRegAtomic::modify_atomic`] and [`WRegFieldAtomic::set_atomic`]
//! use the [`AtomicFieldUpdater`] instead.

pub mod atomic;
pub mod cap;
pub mod prelude;

mod field;
mod macros;
mod raw;
#[allow(clippy::module_inception)]
mod reg;
mod set;
mod sim;
mod val;

pub use self::{
    atomic::{AtomicFieldUpdater, AtomicWord},
    field::*,
    raw::RegRaw,
    reg::{RReg, Reg, RegRawOf, RwReg, RwRegAtomic, WReg},
    set::*,
    sim::SimWord,
    val::FieldValue,
};

mod compile_tests {
    //! ```compile_fail
    //! use drone_capreg::reg::prelude::*;
    //! drone_capreg::reg!(pub mod TST_WO_REG; 0xDEAD_BEEC u32 Write sim 0; TST_BIT { 0 1 Write });
    //! fn main() {
    //!     tst_wo_reg::Reg.get();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::reg::prelude::*;
    //! drone_capreg::reg!(pub mod TST_RO_REG; 0xDEAD_BEEC u32 Read sim 0; TST_BIT { 0 1 Read });
    //! fn main() {
    //!     tst_ro_reg::Reg.set(1);
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::reg::prelude::*;
    //! drone_capreg::reg!(pub mod TST_RO_REG; 0xDEAD_BEEC u32 Read sim 0; TST_BIT { 0 1 Read });
    //! fn main() {
    //!     tst_ro_reg::Reg.toggle(1);
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::reg::prelude::*;
    //! drone_capreg::reg!(pub mod TST_NONE_REG; 0xDEAD_BEEC u32 Nothing sim 0; TST_BIT { 0 1 Nothing });
    //! fn main() {
    //!     tst_none_reg::Reg.get();
    //! }
    //! ```
    //!
    //! ```
    //! use drone_capreg::reg::prelude::*;
    //! drone_capreg::reg!(pub mod TST_RW_REG; 0xDEAD_BEEC u32 ReadWrite sim 0; TST_BIT { 0 1 ReadWrite });
    //! fn main() {
    //!     tst_rw_reg::Reg.set(tst_rw_reg::Reg.get());
    //!     tst_rw_reg::Reg.toggle(1);
    //!     tst_rw_reg::Reg.modify_atomic(1, 0, 0);
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::reg::prelude::*;
    //! drone_capreg::reg!(pub mod TST_RW_REG; 0xDEAD_BEEC u32 ReadWrite sim 0; TST_BIT { 0 1 Write });
    //! fn main() {
    //!     tst_rw_reg::TstBit.get();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::reg::prelude::*;
    //! drone_capreg::reg!(pub mod TST_RW_REG; 0xDEAD_BEEC u32 ReadWrite sim 0; TST_BIT { 0 1 Read });
    //! fn main() {
    //!     tst_rw_reg::TstBit.set(1);
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::reg::prelude::*;
    //! drone_capreg::reg!(pub mod TST_WO_REG; 0xDEAD_BEEC u32 Write sim 0; TST_BIT { 0 1 Write });
    //! fn main() {
    //!     tst_wo_reg::Reg.modify_atomic(1, 0, 0);
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::reg::prelude::*;
    //! drone_capreg::reg!(pub mod TST_WO_REG; 0xDEAD_BEEC u32 Write sim 0; TST_BIT { 0 1 Write });
    //! fn main() {
    //!     tst_wo_reg::TstBit.set_atomic(1);
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::reg::prelude::*;
    //! drone_capreg::reg! {
    //!     pub mod TST_RW_REG; 0xDEAD_BEEC u32 ReadWrite sim 0;
    //!     TST_BIT { 0 1 Write; ON = 1 }
    //! }
    //! fn main() {
    //!     tst_rw_reg::tst_bit::ON.is_set();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::reg::prelude::*;
    //! drone_capreg::reg! {
    //!     pub mod TST_RW_REG; 0xDEAD_BEEC u32 ReadWrite sim 0;
    //!     TST_BIT { 0 1 Read; ON = 1 }
    //! }
    //! fn main() {
    //!     tst_rw_reg::tst_bit::ON.set();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::reg::prelude::*;
    //! drone_capreg::reg! {
    //!     pub mod GPIOA_CRL; 0x4001_0800 u32 ReadWrite sim 0;
    //!     CRL0 { 0 4 ReadWrite; OUT = 0b0011 }
    //! }
    //! drone_capreg::reg! {
    //!     pub mod GPIOB_CRL; 0x4001_0C00 u32 ReadWrite sim 0;
    //!     CRL1 { 4 4 ReadWrite; OUT = 0b0011 }
    //! }
    //! fn main() {
    //!     gpioa_crl::Set::new((gpioa_crl::crl0::OUT, gpiob_crl::crl1::OUT)).set();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::reg::prelude::*;
    //! drone_capreg::reg! {
    //!     pub mod GPIOA_CRL; 0x4001_0800 u32 ReadWrite sim 0;
    //!     CRL0 { 0 4 ReadWrite; OUT = 0b0011 }
    //! }
    //! drone_capreg::reg! {
    //!     pub mod GPIOA_CRH; 0x4001_0804 u32 ReadWrite sim 0;
    //!     CRH0 { 0 4 ReadWrite; OUT = 0b0011 }
    //! }
    //! fn main() {
    //!     gpioa_crl::Set::new((gpioa_crl::crl0::OUT, gpioa_crh::crh0::OUT)).set();
    //! }
    //! ```
    //!
    //! ```
    //! use drone_capreg::reg::prelude::*;
    //! drone_capreg::reg! {
    //!     pub mod GPIOA_CRL; 0x4001_0800 u32 ReadWrite sim 0;
    //!     CRL0 { 0 4 ReadWrite; OUT = 0b0011 }
    //!     CRL1 { 4 4 ReadWrite; OUT = 0b0011 }
    //! }
    //! fn main() {
    //!     gpioa_crl::Set::new((gpioa_crl::crl0::OUT, gpioa_crl::crl1::OUT)).set();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::reg::prelude::*;
    //! drone_capreg::reg! {
    //!     pub mod TST_RO_REG; 0xDEAD_BEEC u32 Read sim 0;
    //!     TST_BIT { 0 1 ReadWrite; ON = 1 }
    //! }
    //! fn main() {
    //!     tst_ro_reg::Set::new((tst_ro_reg::tst_bit::ON,)).set();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::reg::prelude::*;
    //! drone_capreg::reg! {
    //!     pub mod TST_RW_REG; 0xDEAD_BEEC u32 ReadWrite sim 0;
    //!     STATUS { 0 1 Read; CLR = 0 }
    //!     CONTROL { 1 1 ReadWrite; ON = 1 }
    //! }
    //! fn main() {
    //!     tst_rw_reg::Set::new((tst_rw_reg::control::ON, tst_rw_reg::status::CLR)).set();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::reg::prelude::*;
    //! drone_capreg::reg! {
    //!     pub mod TST_RW_REG; 0xDEAD_BEEC u32 ReadWrite sim 0;
    //!     TRIGGER { 0 1 Write; FIRE = 1 }
    //!     CONTROL { 1 1 ReadWrite; ON = 1 }
    //! }
    //! fn main() {
    //!     tst_rw_reg::Set::new((tst_rw_reg::control::ON, tst_rw_reg::trigger::FIRE)).is_set();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! drone_capreg::reg! {
    //!     pub mod TST_REG; 0xDEAD_BEEC u16 ReadWrite sim 0;
    //!     TST_BITS { 12 8 ReadWrite }
    //! }
    //! fn main() {}
    //! ```
}
