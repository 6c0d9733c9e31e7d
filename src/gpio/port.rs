use crate::gpio::pin::{Pin, PinIndex};
use crate::reg::cap::Capability;
use crate::reg::{RReg, RegRaw, RwRegAtomic, WReg};
use typenum::{Unsigned, U16};

/// Number of pins in a bank.
pub type PortWidth = U16;

/// Bit width of a pin configuration field in the control registers.
pub const MODE_WIDTH: u32 = 4;

const PINS_PER_CONTROL: u32 = u32::BITS / MODE_WIDTH;

const _: () = assert!(2 * PortWidth::U32 == u32::BITS);
const _: () = assert!(2 * PINS_PER_CONTROL == PortWidth::U32);

/// General-purpose I/O bank of sixteen pins over 32-bit registers.
///
/// A chip map implements this trait for a zero-sized bank type by naming the
/// bank's registers. All the operations are provided.
///
/// The set/reset register encodes a request to set pin `n` as bit `n`, and a
/// request to reset pin `n` as bit `n + 16`. Each control register holds the
/// 4-bit configuration fields of eight pins.
pub trait Port: Sized + Copy + Default {
    /// Configuration register for pins 0 to 7.
    type Crl: RwRegAtomic<Raw = u32>;

    /// Configuration register for pins 8 to 15.
    type Crh: RwRegAtomic<Raw = u32>;

    /// Input data register.
    type Idr: RReg<Raw = u32>;

    /// Output data register.
    type Odr: WReg<Raw = u32>;

    /// Bit set/reset register.
    type Bsrr: WReg<Raw = u32>;

    /// Configuration field value for a push-pull output.
    const OUTPUT_MODE: u32;

    /// Configuration field value for an input with pull-up or pull-down.
    const INPUT_PULL_MODE: u32;

    /// Reads the input data of all pins.
    #[inline]
    fn get(&self) -> u32 {
        Self::Idr::default().get()
    }

    /// Writes `bits` to the set/reset register.
    ///
    /// Bits in the low half set the corresponding pins, bits in the high half
    /// reset the pin sixteen positions lower.
    #[inline]
    fn set(&self, bits: u32) {
        Self::Bsrr::default().set(bits);
    }

    /// Resets the pins selected by the low half of `bits`.
    #[inline]
    fn reset(&self, bits: u32) {
        self.set(bits << PortWidth::U32);
    }

    /// Flips the output data of the pins selected by `bits`.
    #[inline]
    fn toggle(&self, bits: u32) {
        Self::Odr::default().toggle(bits);
    }

    /// Configures pin `index` as a push-pull output.
    #[inline]
    fn set_output(&self, index: u32) {
        self.configure(index, Self::OUTPUT_MODE);
    }

    /// Configures pin `index` as an input with a pull resistor.
    ///
    /// The pull direction follows the pin's output data bit.
    #[inline]
    fn set_input(&self, index: u32) {
        self.configure(index, Self::INPUT_PULL_MODE);
    }

    /// Writes `mode` to the configuration field of pin `index`.
    ///
    /// The update is atomic with respect to other pins' configuration fields
    /// in the same register, which may be changed from interrupt handlers.
    #[inline]
    fn configure(&self, index: u32, mode: u32) {
        debug_assert!(index < PortWidth::U32);
        let offset = index % PINS_PER_CONTROL * MODE_WIDTH;
        let mask = u32::mask(offset, MODE_WIDTH);
        if index < PINS_PER_CONTROL {
            Self::Crl::default().modify_atomic(mask, offset, mode);
        } else {
            Self::Crh::default().modify_atomic(mask, offset, mode);
        }
    }

    /// Returns a handle to pin `N` with capability `C`.
    #[inline]
    fn pin<N, C>(self) -> Pin<Self, N, C>
    where
        N: PinIndex,
        C: Capability,
    {
        Pin::new(self)
    }
}
