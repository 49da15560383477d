//! GPIO input abstractions
//!
//! Provides the digital input trait that chip-specific HALs implement,
//! plus helpers for mapping electrical levels to "pressed".

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip. Reads are assumed to be instantaneous and
/// side-effect free.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

impl<P: InputPin + ?Sized> InputPin for &P {
    fn is_high(&self) -> bool {
        (**self).is_high()
    }
}

/// Electrical level that means "switch closed"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Pressed reads high (pull-down wiring)
    #[default]
    High,
    /// Pressed reads low (pull-up wiring, switch to ground)
    Low,
}

impl ActiveLevel {
    /// Map a raw level to a pressed/released classification
    pub const fn is_active(self, high: bool) -> bool {
        match self {
            ActiveLevel::High => high,
            ActiveLevel::Low => !high,
        }
    }
}

/// Inverting wrapper for active-low inputs
///
/// Reports `is_high()` when the underlying pin is low, so a switch wired
/// to ground with a pull-up reads as "high when pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveLow<P> {
    pin: P,
}

impl<P: InputPin> ActiveLow<P> {
    /// Wrap a pin
    pub const fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> InputPin for ActiveLow<P> {
    fn is_high(&self) -> bool {
        self.pin.is_low()
    }
}

/// Electrical location of a switch: GPIO port and pin number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PortPin {
    /// Port index (GPIOA = 0, GPIOB = 1, ...)
    pub port: u8,
    /// Pin number within the port (0-31)
    pub pin: u8,
}

impl PortPin {
    /// Create a new port/pin location
    pub const fn new(port: u8, pin: u8) -> Self {
        Self { port, pin }
    }

    /// Bit mask of this pin in a port input register
    ///
    /// Pins above 31 have no bit and return 0.
    pub const fn mask(&self) -> u32 {
        if self.pin < 32 {
            1 << self.pin
        } else {
            0
        }
    }
}

/// Whole-port input register access
///
/// For chips where reading a full port input data register is the
/// natural operation (STM32 `IDR`, RP2040 `GPIO_IN`, ...).
pub trait PortInput {
    /// Read the input data register of `port`
    ///
    /// Unknown ports read as all-low.
    fn read_port(&mut self, port: u8) -> u32;

    /// Check if a single pin reads high
    fn is_pin_high(&mut self, location: PortPin) -> bool {
        self.read_port(location.port) & location.mask() != 0
    }
}
