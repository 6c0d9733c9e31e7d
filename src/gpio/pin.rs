use crate::gpio::port::{Port, PortWidth};
use crate::reg::cap::{Capability, Configurable, Grants, Readable, Writable};
use core::fmt;
use core::marker::PhantomData;
use typenum::{IsLess, True, Unsigned};

/// Pin number `Self` within a bank of [`PortWidth`] pins.
#[diagnostic::on_unimplemented(
    message = "pin index `{Self}` is out of range for a 16-pin port",
    label = "the pin index must be less than 16"
)]
pub trait PinIndex: Unsigned {}

impl<N> PinIndex for N where N: Unsigned + IsLess<PortWidth, Output = True> {}

/// Pull resistor direction of an input pin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// Pull towards the supply.
    #[default]
    Up,
    /// Pull towards the ground.
    Down,
}

/// Single pin `N` of port `P`, usable as far as capability `C` allows.
///
/// The handle is zero-sized. The pin index is checked against the port width
/// at compile time.
pub struct Pin<P: Port, N: PinIndex, C: Capability> {
    port: P,
    _marker: PhantomData<(N, C)>,
}

impl<P: Port, N: PinIndex, C: Capability> Pin<P, N, C> {
    /// Creates a handle to the pin.
    #[inline]
    pub fn new(port: P) -> Self {
        Self { port, _marker: PhantomData }
    }

    /// Returns the pin's port.
    #[inline]
    pub fn port(&self) -> P {
        self.port
    }

    /// Returns the single-bit mask of the pin within the port word.
    #[inline]
    pub fn mask(&self) -> u32 {
        1 << N::U32
    }

    /// Reads the pin input level, `0` or `1`.
    #[inline]
    pub fn get(&self) -> u32
    where
        C: Readable,
    {
        (self.port.get() & self.mask()) >> N::U32
    }

    /// Returns `true` if the pin input is high.
    #[inline]
    pub fn is_high(&self) -> bool
    where
        C: Readable,
    {
        self.get() != 0
    }

    /// Returns `true` if the pin input is low.
    #[inline]
    pub fn is_low(&self) -> bool
    where
        C: Readable,
    {
        !self.is_high()
    }

    /// Drives the pin high.
    #[inline]
    pub fn set(&self)
    where
        C: Writable,
    {
        self.drive_high();
    }

    /// Drives the pin low.
    #[inline]
    pub fn reset(&self)
    where
        C: Writable,
    {
        self.drive_low();
    }

    /// Flips the pin output.
    #[inline]
    pub fn toggle(&self)
    where
        C: Writable,
    {
        self.port.toggle(self.mask());
    }

    /// Configures the pin as a push-pull output.
    #[inline]
    pub fn config_output(&self)
    where
        C: Configurable,
    {
        self.port.set_output(N::U32);
    }

    /// Configures the pin as an input with the `pull` resistor.
    ///
    /// The pull direction is selected through the output data bit, so this
    /// touches the set/reset register even for handles without write access.
    #[inline]
    pub fn config_input(&self, pull: Pull)
    where
        C: Configurable,
    {
        self.port.set_input(N::U32);
        match pull {
            Pull::Up => self.drive_high(),
            Pull::Down => self.drive_low(),
        }
    }

    /// Converts the handle into one with a capability `D` granted by `C`.
    #[inline]
    pub fn narrow<D>(self) -> Pin<P, N, D>
    where
        C: Grants<D>,
        D: Capability,
    {
        Pin::new(self.port)
    }

    #[inline]
    fn drive_high(&self) {
        self.port.set(self.mask());
    }

    #[inline]
    fn drive_low(&self) {
        self.port.reset(self.mask());
    }
}

impl<P: Port, N: PinIndex, C: Capability> Clone for Pin<P, N, C> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Port, N: PinIndex, C: Capability> Copy for Pin<P, N, C> {}

impl<P: Port, N: PinIndex, C: Capability> Default for Pin<P, N, C> {
    #[inline]
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<P: Port, N: PinIndex, C: Capability> fmt::Debug for Pin<P, N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pin").field("index", &N::U32).finish()
    }
}

#[cfg(feature = "defmt")]
impl<P: Port, N: PinIndex, C: Capability> defmt::Format for Pin<P, N, C> {
    fn format(&self, fmt: defmt::Formatter<'_>) {
        defmt::write!(fmt, "Pin {{ index: {} }}", N::U32);
    }
}
