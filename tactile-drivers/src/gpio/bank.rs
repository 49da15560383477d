//! Pin bank readers
//!
//! A bank owns a fixed array of input pins; the button location is the
//! index into that array.

use embedded_hal::digital::InputPin;
use tactile_core::PortReader;
use tactile_hal::ActiveLevel;

/// Port reader over `embedded-hal` input pins
///
/// Read errors are reported as "not pressed" and counted, since the
/// engine's sampling path cannot fail. A sustained error therefore looks
/// like a released button.
pub struct PinBank<P, const N: usize> {
    pins: [P; N],
    active: [ActiveLevel; N],
    read_errors: u32,
}

impl<P: InputPin, const N: usize> PinBank<P, N> {
    /// Create a bank where every pin shares one active level
    pub fn new(pins: [P; N], active: ActiveLevel) -> Self {
        Self::with_levels(pins, [active; N])
    }

    /// Create a bank with an individual active level per pin
    pub fn with_levels(pins: [P; N], active: [ActiveLevel; N]) -> Self {
        Self {
            pins,
            active,
            read_errors: 0,
        }
    }

    /// Number of failed pin reads since creation
    pub fn read_errors(&self) -> u32 {
        self.read_errors
    }

    /// Release the pins
    pub fn release(self) -> [P; N] {
        self.pins
    }
}

impl<P: InputPin, const N: usize> PortReader<usize> for PinBank<P, N> {
    fn is_pressed(&mut self, location: &usize) -> bool {
        let index = *location;
        let Some(pin) = self.pins.get_mut(index) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("No pin at index {}", index);
            return false;
        };

        match pin.is_high() {
            Ok(high) => self.active[index].is_active(high),
            Err(_) => {
                self.read_errors = self.read_errors.saturating_add(1);
                #[cfg(feature = "defmt")]
                defmt::warn!("Pin {} read failed", index);
                false
            }
        }
    }
}

/// Port reader over `tactile-hal` input pins
pub struct HalPinBank<P, const N: usize> {
    pins: [P; N],
    active: [ActiveLevel; N],
}

impl<P: tactile_hal::InputPin, const N: usize> HalPinBank<P, N> {
    /// Create a bank where every pin shares one active level
    pub fn new(pins: [P; N], active: ActiveLevel) -> Self {
        Self {
            pins,
            active: [active; N],
        }
    }

    /// Create a bank with an individual active level per pin
    pub fn with_levels(pins: [P; N], active: [ActiveLevel; N]) -> Self {
        Self { pins, active }
    }

    /// Release the pins
    pub fn release(self) -> [P; N] {
        self.pins
    }
}

impl<P: tactile_hal::InputPin, const N: usize> PortReader<usize> for HalPinBank<P, N> {
    fn is_pressed(&mut self, location: &usize) -> bool {
        self.pins
            .get(*location)
            .map(|pin| self.active[*location].is_active(pin.is_high()))
            .unwrap_or(false)
    }
}
