//! General-purpose I/O ports and pins.
//!
//! A chip map describes each bank by implementing [`Port`] for a zero-sized
//! type, naming the bank's registers. Pins are then taken from the port with
//! a compile-time index and a capability:
//!
//! ```
//! use drone_capreg::gpio::{Port, Pull};
//! use drone_capreg::reg::prelude::*;
//! use drone_capreg::typenum::{U0, U1};
//!
//! drone_capreg::reg!(pub mod GPIOA_CRL; 0x4001_0800 u32 ReadWrite sim 0x4444_4444;);
//! drone_capreg::reg!(pub mod GPIOA_CRH; 0x4001_0804 u32 ReadWrite sim 0x4444_4444;);
//! drone_capreg::reg!(pub mod GPIOA_IDR; 0x4001_0808 u32 Read sim 0;);
//! drone_capreg::reg!(pub mod GPIOA_ODR; 0x4001_080C u32 ReadWrite sim 0;);
//! drone_capreg::reg!(pub mod GPIOA_BSRR; 0x4001_0810 u32 Write sim 0;);
//!
//! #[derive(Clone, Copy, Default)]
//! struct GpioA;
//!
//! impl Port for GpioA {
//!     type Crl = gpioa_crl::Reg;
//!     type Crh = gpioa_crh::Reg;
//!     type Idr = gpioa_idr::Reg;
//!     type Odr = gpioa_odr::Reg;
//!     type Bsrr = gpioa_bsrr::Reg;
//!
//!     const OUTPUT_MODE: u32 = 0b0011;
//!     const INPUT_PULL_MODE: u32 = 0b1000;
//! }
//!
//! fn main() {
//!     let led = GpioA.pin::<U0, All>();
//!     led.config_output();
//!     led.set();
//!     assert_eq!(gpioa_crl::Reg.get(), 0x4444_4443);
//!     assert_eq!(core::mem::size_of_val(&led), 0);
//!
//!     let button = GpioA.pin::<U1, Config>();
//!     button.config_input(Pull::Down);
//!     assert_eq!(gpioa_crl::Reg.get(), 0x4444_4483);
//!
//!     let button = GpioA.pin::<U1, ReadConfig>().narrow::<Read>();
//!     assert!(button.is_low());
//! }
//! ```

mod pin;
mod port;

pub use self::{
    pin::{Pin, PinIndex, Pull},
    port::{Port, PortWidth, MODE_WIDTH},
};

mod compile_tests {
    //! ```
    //! use drone_capreg::gpio::{Port, Pull};
    //! use drone_capreg::reg::prelude::*;
    //! use drone_capreg::typenum::U0;
    //! drone_capreg::reg!(pub mod GPIOA_CRL; 0x4001_0800 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_CRH; 0x4001_0804 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_IDR; 0x4001_0808 u32 Read sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_ODR; 0x4001_080C u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_BSRR; 0x4001_0810 u32 Write sim 0;);
    //! #[derive(Clone, Copy, Default)]
    //! struct GpioA;
    //! impl Port for GpioA {
    //!     type Crl = gpioa_crl::Reg;
    //!     type Crh = gpioa_crh::Reg;
    //!     type Idr = gpioa_idr::Reg;
    //!     type Odr = gpioa_odr::Reg;
    //!     type Bsrr = gpioa_bsrr::Reg;
    //!     const OUTPUT_MODE: u32 = 0b0011;
    //!     const INPUT_PULL_MODE: u32 = 0b1000;
    //! }
    //! fn main() {
    //!     GpioA.pin::<U0, Config>().config_input(Pull::Up);
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::gpio::{Port, Pull};
    //! use drone_capreg::reg::prelude::*;
    //! use drone_capreg::typenum::U0;
    //! drone_capreg::reg!(pub mod GPIOA_CRL; 0x4001_0800 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_CRH; 0x4001_0804 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_IDR; 0x4001_0808 u32 Read sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_ODR; 0x4001_080C u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_BSRR; 0x4001_0810 u32 Write sim 0;);
    //! #[derive(Clone, Copy, Default)]
    //! struct GpioA;
    //! impl Port for GpioA {
    //!     type Crl = gpioa_crl::Reg;
    //!     type Crh = gpioa_crh::Reg;
    //!     type Idr = gpioa_idr::Reg;
    //!     type Odr = gpioa_odr::Reg;
    //!     type Bsrr = gpioa_bsrr::Reg;
    //!     const OUTPUT_MODE: u32 = 0b0011;
    //!     const INPUT_PULL_MODE: u32 = 0b1000;
    //! }
    //! fn main() {
    //!     GpioA.pin::<U0, Read>().reset();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::gpio::{Port, Pull};
    //! use drone_capreg::reg::prelude::*;
    //! use drone_capreg::typenum::U0;
    //! drone_capreg::reg!(pub mod GPIOA_CRL; 0x4001_0800 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_CRH; 0x4001_0804 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_IDR; 0x4001_0808 u32 Read sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_ODR; 0x4001_080C u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_BSRR; 0x4001_0810 u32 Write sim 0;);
    //! #[derive(Clone, Copy, Default)]
    //! struct GpioA;
    //! impl Port for GpioA {
    //!     type Crl = gpioa_crl::Reg;
    //!     type Crh = gpioa_crh::Reg;
    //!     type Idr = gpioa_idr::Reg;
    //!     type Odr = gpioa_odr::Reg;
    //!     type Bsrr = gpioa_bsrr::Reg;
    //!     const OUTPUT_MODE: u32 = 0b0011;
    //!     const INPUT_PULL_MODE: u32 = 0b1000;
    //! }
    //! fn main() {
    //!     GpioA.pin::<U0, Read>().config_output();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::gpio::{Port, Pull};
    //! use drone_capreg::reg::prelude::*;
    //! use drone_capreg::typenum::U0;
    //! drone_capreg::reg!(pub mod GPIOA_CRL; 0x4001_0800 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_CRH; 0x4001_0804 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_IDR; 0x4001_0808 u32 Read sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_ODR; 0x4001_080C u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_BSRR; 0x4001_0810 u32 Write sim 0;);
    //! #[derive(Clone, Copy, Default)]
    //! struct GpioA;
    //! impl Port for GpioA {
    //!     type Crl = gpioa_crl::Reg;
    //!     type Crh = gpioa_crh::Reg;
    //!     type Idr = gpioa_idr::Reg;
    //!     type Odr = gpioa_odr::Reg;
    //!     type Bsrr = gpioa_bsrr::Reg;
    //!     const OUTPUT_MODE: u32 = 0b0011;
    //!     const INPUT_PULL_MODE: u32 = 0b1000;
    //! }
    //! fn main() {
    //!     GpioA.pin::<U0, Write>().get();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::gpio::{Port, Pull};
    //! use drone_capreg::reg::prelude::*;
    //! use drone_capreg::typenum::U0;
    //! drone_capreg::reg!(pub mod GPIOA_CRL; 0x4001_0800 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_CRH; 0x4001_0804 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_IDR; 0x4001_0808 u32 Read sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_ODR; 0x4001_080C u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_BSRR; 0x4001_0810 u32 Write sim 0;);
    //! #[derive(Clone, Copy, Default)]
    //! struct GpioA;
    //! impl Port for GpioA {
    //!     type Crl = gpioa_crl::Reg;
    //!     type Crh = gpioa_crh::Reg;
    //!     type Idr = gpioa_idr::Reg;
    //!     type Odr = gpioa_odr::Reg;
    //!     type Bsrr = gpioa_bsrr::Reg;
    //!     const OUTPUT_MODE: u32 = 0b0011;
    //!     const INPUT_PULL_MODE: u32 = 0b1000;
    //! }
    //! fn main() {
    //!     GpioA.pin::<U0, Config>().set();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::gpio::{Port, Pull};
    //! use drone_capreg::reg::prelude::*;
    //! use drone_capreg::typenum::U0;
    //! drone_capreg::reg!(pub mod GPIOA_CRL; 0x4001_0800 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_CRH; 0x4001_0804 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_IDR; 0x4001_0808 u32 Read sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_ODR; 0x4001_080C u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_BSRR; 0x4001_0810 u32 Write sim 0;);
    //! #[derive(Clone, Copy, Default)]
    //! struct GpioA;
    //! impl Port for GpioA {
    //!     type Crl = gpioa_crl::Reg;
    //!     type Crh = gpioa_crh::Reg;
    //!     type Idr = gpioa_idr::Reg;
    //!     type Odr = gpioa_odr::Reg;
    //!     type Bsrr = gpioa_bsrr::Reg;
    //!     const OUTPUT_MODE: u32 = 0b0011;
    //!     const INPUT_PULL_MODE: u32 = 0b1000;
    //! }
    //! fn main() {
    //!     GpioA.pin::<U0, Config>().reset();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::gpio::{Port, Pull};
    //! use drone_capreg::reg::prelude::*;
    //! use drone_capreg::typenum::U0;
    //! drone_capreg::reg!(pub mod GPIOA_CRL; 0x4001_0800 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_CRH; 0x4001_0804 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_IDR; 0x4001_0808 u32 Read sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_ODR; 0x4001_080C u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_BSRR; 0x4001_0810 u32 Write sim 0;);
    //! #[derive(Clone, Copy, Default)]
    //! struct GpioA;
    //! impl Port for GpioA {
    //!     type Crl = gpioa_crl::Reg;
    //!     type Crh = gpioa_crh::Reg;
    //!     type Idr = gpioa_idr::Reg;
    //!     type Odr = gpioa_odr::Reg;
    //!     type Bsrr = gpioa_bsrr::Reg;
    //!     const OUTPUT_MODE: u32 = 0b0011;
    //!     const INPUT_PULL_MODE: u32 = 0b1000;
    //! }
    //! fn main() {
    //!     GpioA.pin::<U0, Config>().toggle();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::gpio::{Port, Pull};
    //! use drone_capreg::reg::prelude::*;
    //! use drone_capreg::typenum::U0;
    //! drone_capreg::reg!(pub mod GPIOA_CRL; 0x4001_0800 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_CRH; 0x4001_0804 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_IDR; 0x4001_0808 u32 Read sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_ODR; 0x4001_080C u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_BSRR; 0x4001_0810 u32 Write sim 0;);
    //! #[derive(Clone, Copy, Default)]
    //! struct GpioA;
    //! impl Port for GpioA {
    //!     type Crl = gpioa_crl::Reg;
    //!     type Crh = gpioa_crh::Reg;
    //!     type Idr = gpioa_idr::Reg;
    //!     type Odr = gpioa_odr::Reg;
    //!     type Bsrr = gpioa_bsrr::Reg;
    //!     const OUTPUT_MODE: u32 = 0b0011;
    //!     const INPUT_PULL_MODE: u32 = 0b1000;
    //! }
    //! fn main() {
    //!     GpioA.pin::<U0, Config>().get();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::gpio::{Port, Pull};
    //! use drone_capreg::reg::prelude::*;
    //! use drone_capreg::typenum::U0;
    //! drone_capreg::reg!(pub mod GPIOA_CRL; 0x4001_0800 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_CRH; 0x4001_0804 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_IDR; 0x4001_0808 u32 Read sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_ODR; 0x4001_080C u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_BSRR; 0x4001_0810 u32 Write sim 0;);
    //! #[derive(Clone, Copy, Default)]
    //! struct GpioA;
    //! impl Port for GpioA {
    //!     type Crl = gpioa_crl::Reg;
    //!     type Crh = gpioa_crh::Reg;
    //!     type Idr = gpioa_idr::Reg;
    //!     type Odr = gpioa_odr::Reg;
    //!     type Bsrr = gpioa_bsrr::Reg;
    //!     const OUTPUT_MODE: u32 = 0b0011;
    //!     const INPUT_PULL_MODE: u32 = 0b1000;
    //! }
    //! fn main() {
    //!     GpioA.pin::<U0, ReadWrite>().config_input(Pull::Up);
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::gpio::{Port, Pull};
    //! use drone_capreg::reg::prelude::*;
    //! use drone_capreg::typenum::U0;
    //! drone_capreg::reg!(pub mod GPIOA_CRL; 0x4001_0800 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_CRH; 0x4001_0804 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_IDR; 0x4001_0808 u32 Read sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_ODR; 0x4001_080C u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_BSRR; 0x4001_0810 u32 Write sim 0;);
    //! #[derive(Clone, Copy, Default)]
    //! struct GpioA;
    //! impl Port for GpioA {
    //!     type Crl = gpioa_crl::Reg;
    //!     type Crh = gpioa_crh::Reg;
    //!     type Idr = gpioa_idr::Reg;
    //!     type Odr = gpioa_odr::Reg;
    //!     type Bsrr = gpioa_bsrr::Reg;
    //!     const OUTPUT_MODE: u32 = 0b0011;
    //!     const INPUT_PULL_MODE: u32 = 0b1000;
    //! }
    //! fn main() {
    //!     GpioA.pin::<U0, ReadWrite>().config_output();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::gpio::{Port, Pull};
    //! use drone_capreg::reg::prelude::*;
    //! use drone_capreg::typenum::U0;
    //! drone_capreg::reg!(pub mod GPIOA_CRL; 0x4001_0800 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_CRH; 0x4001_0804 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_IDR; 0x4001_0808 u32 Read sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_ODR; 0x4001_080C u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_BSRR; 0x4001_0810 u32 Write sim 0;);
    //! #[derive(Clone, Copy, Default)]
    //! struct GpioA;
    //! impl Port for GpioA {
    //!     type Crl = gpioa_crl::Reg;
    //!     type Crh = gpioa_crh::Reg;
    //!     type Idr = gpioa_idr::Reg;
    //!     type Odr = gpioa_odr::Reg;
    //!     type Bsrr = gpioa_bsrr::Reg;
    //!     const OUTPUT_MODE: u32 = 0b0011;
    //!     const INPUT_PULL_MODE: u32 = 0b1000;
    //! }
    //! fn main() {
    //!     GpioA.pin::<U0, Read>().narrow::<ReadWrite>();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::gpio::{Port, Pull};
    //! use drone_capreg::reg::prelude::*;
    //! use drone_capreg::typenum::U0;
    //! drone_capreg::reg!(pub mod GPIOA_CRL; 0x4001_0800 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_CRH; 0x4001_0804 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_IDR; 0x4001_0808 u32 Read sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_ODR; 0x4001_080C u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_BSRR; 0x4001_0810 u32 Write sim 0;);
    //! #[derive(Clone, Copy, Default)]
    //! struct GpioA;
    //! impl Port for GpioA {
    //!     type Crl = gpioa_crl::Reg;
    //!     type Crh = gpioa_crh::Reg;
    //!     type Idr = gpioa_idr::Reg;
    //!     type Odr = gpioa_odr::Reg;
    //!     type Bsrr = gpioa_bsrr::Reg;
    //!     const OUTPUT_MODE: u32 = 0b0011;
    //!     const INPUT_PULL_MODE: u32 = 0b1000;
    //! }
    //! fn main() {
    //!     GpioA.pin::<U0, Config>().narrow::<Read>();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::gpio::{Port, Pull};
    //! use drone_capreg::reg::prelude::*;
    //! use drone_capreg::typenum::U16;
    //! drone_capreg::reg!(pub mod GPIOA_CRL; 0x4001_0800 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_CRH; 0x4001_0804 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_IDR; 0x4001_0808 u32 Read sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_ODR; 0x4001_080C u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_BSRR; 0x4001_0810 u32 Write sim 0;);
    //! #[derive(Clone, Copy, Default)]
    //! struct GpioA;
    //! impl Port for GpioA {
    //!     type Crl = gpioa_crl::Reg;
    //!     type Crh = gpioa_crh::Reg;
    //!     type Idr = gpioa_idr::Reg;
    //!     type Odr = gpioa_odr::Reg;
    //!     type Bsrr = gpioa_bsrr::Reg;
    //!     const OUTPUT_MODE: u32 = 0b0011;
    //!     const INPUT_PULL_MODE: u32 = 0b1000;
    //! }
    //! fn main() {
    //!     GpioA.pin::<U16, All>();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::gpio::{Port, Pull};
    //! use drone_capreg::reg::prelude::*;
    //! use drone_capreg::typenum::U17;
    //! drone_capreg::reg!(pub mod GPIOA_CRL; 0x4001_0800 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_CRH; 0x4001_0804 u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_IDR; 0x4001_0808 u32 Read sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_ODR; 0x4001_080C u32 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_BSRR; 0x4001_0810 u32 Write sim 0;);
    //! #[derive(Clone, Copy, Default)]
    //! struct GpioA;
    //! impl Port for GpioA {
    //!     type Crl = gpioa_crl::Reg;
    //!     type Crh = gpioa_crh::Reg;
    //!     type Idr = gpioa_idr::Reg;
    //!     type Odr = gpioa_odr::Reg;
    //!     type Bsrr = gpioa_bsrr::Reg;
    //!     const OUTPUT_MODE: u32 = 0b0011;
    //!     const INPUT_PULL_MODE: u32 = 0b1000;
    //! }
    //! fn main() {
    //!     GpioA.pin::<U17, All>();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_capreg::gpio::{Port, Pull};
    //! use drone_capreg::reg::prelude::*;
    //! use drone_capreg::typenum::U0;
    //! drone_capreg::reg!(pub mod GPIOA_CRL; 0x4001_0800 u16 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_CRH; 0x4001_0804 u16 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_IDR; 0x4001_0808 u16 Read sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_ODR; 0x4001_080C u16 ReadWrite sim 0;);
    //! drone_capreg::reg!(pub mod GPIOA_BSRR; 0x4001_0810 u16 Write sim 0;);
    //! #[derive(Clone, Copy, Default)]
    //! struct GpioA;
    //! impl Port for GpioA {
    //!     type Crl = gpioa_crl::Reg;
    //!     type Crh = gpioa_crh::Reg;
    //!     type Idr = gpioa_idr::Reg;
    //!     type Odr = gpioa_odr::Reg;
    //!     type Bsrr = gpioa_bsrr::Reg;
    //!     const OUTPUT_MODE: u16 = 0b0011;
    //!     const INPUT_PULL_MODE: u16 = 0b1000;
    //! }
    //! fn main() {
    //!     GpioA.pin::<U0, All>().config_output();
    //! }
    //! ```
}
