use drone_capreg::gpio::{Pin, Port, Pull};
use drone_capreg::reg::prelude::*;
use drone_capreg::typenum::{U0, U1, U3, U5, U7, U9, U15};

/// Declares a simulated 16-pin bank in its own module.
///
/// `settle` plays the part of the port hardware: it consumes the pending
/// set/reset request into the output data register and mirrors the outputs
/// on the inputs, as if every pin were looped back.
macro_rules! sim_port {
    ($bank:ident) => {
        #[allow(dead_code)]
        mod $bank {
            use drone_capreg::gpio::Port;
            use drone_capreg::reg::Reg as _;

            drone_capreg::reg!(pub mod CRL; 0x4001_0800 u32 ReadWrite sim 0x4444_4444;);
            drone_capreg::reg!(pub mod CRH; 0x4001_0804 u32 ReadWrite sim 0x4444_4444;);
            drone_capreg::reg!(pub mod IDR; 0x4001_0808 u32 Read sim 0;);
            drone_capreg::reg!(pub mod ODR; 0x4001_080C u32 ReadWrite sim 0;);
            drone_capreg::reg!(pub mod BSRR; 0x4001_0810 u32 Write sim 0;);

            #[derive(Clone, Copy, Default, Debug)]
            pub struct Bank;

            impl Port for Bank {
                type Crl = crl::Reg;
                type Crh = crh::Reg;
                type Idr = idr::Reg;
                type Odr = odr::Reg;
                type Bsrr = bsrr::Reg;

                const OUTPUT_MODE: u32 = 0b0011;
                const INPUT_PULL_MODE: u32 = 0b1000;
            }

            pub fn bsrr() -> u32 {
                unsafe { *bsrr::Reg::as_ptr() }
            }

            pub fn odr() -> u32 {
                unsafe { *odr::Reg::as_ptr() }
            }

            pub fn settle() {
                unsafe {
                    let request = *bsrr::Reg::as_ptr();
                    *bsrr::Reg::as_ptr() = 0;
                    let output = odr::Reg::as_ptr();
                    *output = *output & !(request >> 16) | request & 0xFFFF;
                    *idr::Reg::as_ptr() = *output;
                }
            }
        }
    };
}

sim_port!(bank_led);
sim_port!(bank_pull);
sim_port!(bank_halves);
sim_port!(bank_toggle);
sim_port!(bank_port);
sim_port!(bank_narrow);
sim_port!(bank_every_pin);

#[test]
fn allmighty_pin() {
    let led = bank_led::Bank.pin::<U0, All>();
    led.config_output();
    assert_eq!(bank_led::crl::Reg.get(), 0x4444_4443);
    led.set();
    assert_eq!(bank_led::bsrr(), 0x0000_0001);
    bank_led::settle();
    assert_eq!(led.get(), 1);
    assert!(led.is_high());
    led.reset();
    assert_eq!(bank_led::bsrr(), 0x0001_0000);
    bank_led::settle();
    assert_eq!(led.get(), 0);
    assert!(led.is_low());
}

#[test]
fn input_pull() {
    let button = Pin::<bank_pull::Bank, U5, Config>::default();
    button.config_input(Pull::Up);
    assert_eq!(bank_pull::crl::Reg.get(), 0x4484_4444);
    assert_eq!(bank_pull::bsrr(), 1 << 5);
    bank_pull::settle();
    assert_eq!(bank_pull::odr(), 1 << 5);
    button.config_input(Pull::Down);
    assert_eq!(bank_pull::bsrr(), 1 << 21);
    bank_pull::settle();
    assert_eq!(bank_pull::odr(), 0);
    assert_eq!(Pull::default(), Pull::Up);
}

#[test]
fn control_register_halves() {
    bank_halves::Bank.pin::<U7, Config>().config_output();
    assert_eq!(bank_halves::crl::Reg.get(), 0x3444_4444);
    assert_eq!(bank_halves::crh::Reg.get(), 0x4444_4444);
    bank_halves::Bank.pin::<U9, Config>().config_output();
    assert_eq!(bank_halves::crl::Reg.get(), 0x3444_4444);
    assert_eq!(bank_halves::crh::Reg.get(), 0x4444_4434);
    bank_halves::Bank.pin::<U15, Config>().config_input(Pull::Down);
    assert_eq!(bank_halves::crh::Reg.get(), 0x8444_4434);
    assert_eq!(bank_halves::bsrr(), 1 << 31);
}

#[test]
fn toggle() {
    let pin = bank_toggle::Bank.pin::<U3, Write>();
    pin.toggle();
    assert_eq!(bank_toggle::odr(), 0b1000);
    pin.toggle();
    assert_eq!(bank_toggle::odr(), 0);
}

#[test]
fn port_operations() {
    let port = bank_port::Bank;
    port.set(0b11);
    assert_eq!(bank_port::bsrr(), 0b11);
    port.reset(0b11);
    assert_eq!(bank_port::bsrr(), 0b11 << 16);
    bank_port::settle();
    port.toggle(0x8001);
    bank_port::settle();
    assert_eq!(port.get(), 0x8001);
    port.set_output(8);
    assert_eq!(bank_port::crh::Reg.get(), 0x4444_4443);
    port.set_input(0);
    assert_eq!(bank_port::crl::Reg.get(), 0x4444_4448);
    port.configure(15, 0b0001);
    assert_eq!(bank_port::crh::Reg.get(), 0x1444_4443);
}

#[test]
fn narrow() {
    let pin = bank_narrow::Bank.pin::<U1, All>();
    pin.set();
    bank_narrow::settle();
    let input = pin.narrow::<Read>();
    assert!(input.is_high());
    assert_eq!(input.mask(), 0b10);
    assert_eq!(format!("{input:?}"), "Pin { index: 1 }");
    assert_eq!(core::mem::size_of_val(&input), 0);
}

#[test]
fn every_pin_has_its_own_nibble_and_bits() {
    let port = bank_every_pin::Bank;
    for index in 0..16 {
        port.set_output(index);
        let crl = bank_every_pin::crl::Reg.get();
        let crh = bank_every_pin::crh::Reg.get();
        let configured = 48 - (crl.count_zeros() + crh.count_zeros());
        assert_eq!(configured, index + 1);
        port.reset(1 << index);
        assert_eq!(bank_every_pin::bsrr(), 1 << (index + 16));
        port.set(1 << index);
        assert_eq!(bank_every_pin::bsrr(), 1 << index);
    }
    assert_eq!(bank_every_pin::crl::Reg.get(), 0x3333_3333);
    assert_eq!(bank_every_pin::crh::Reg.get(), 0x3333_3333);
}
