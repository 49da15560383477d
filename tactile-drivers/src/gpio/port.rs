//! Register-level port reader
//!
//! Buttons are addressed by [`PortPin`] and sampled by reading the whole
//! port input register, the way a vendor `ReadPin(port, pin)` call does.

use tactile_core::PortReader;
use tactile_hal::{ActiveLevel, PortInput, PortPin};

/// Port reader over whole-port input registers
pub struct PortBank<P> {
    ports: P,
    active: ActiveLevel,
}

impl<P: PortInput> PortBank<P> {
    /// Create a reader with one active level for all buttons
    pub fn new(ports: P, active: ActiveLevel) -> Self {
        Self { ports, active }
    }

    /// Active level of the buttons
    pub fn active_level(&self) -> ActiveLevel {
        self.active
    }

    /// Release the register access
    pub fn release(self) -> P {
        self.ports
    }
}

impl<P: PortInput> PortReader<PortPin> for PortBank<P> {
    fn is_pressed(&mut self, location: &PortPin) -> bool {
        let high = self.ports.is_pin_high(*location);
        self.active.is_active(high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use tactile_core::config::{ButtonConfig, EngineConfig};
    use tactile_core::{ButtonEngine, ButtonEvent};

    /// Mock GPIOA/GPIOB input data registers
    struct MockRegisters<'a> {
        idr: &'a [Cell<u32>; 2],
    }

    impl PortInput for MockRegisters<'_> {
        fn read_port(&mut self, port: u8) -> u32 {
            self.idr.get(port as usize).map(Cell::get).unwrap_or(0)
        }
    }

    #[test]
    fn test_active_high_port() {
        let idr = [Cell::new(0), Cell::new(1 << 13)];
        let mut bank = PortBank::new(MockRegisters { idr: &idr }, ActiveLevel::High);

        assert!(bank.is_pressed(&PortPin::new(1, 13)));
        assert!(!bank.is_pressed(&PortPin::new(0, 13)));
        assert!(!bank.is_pressed(&PortPin::new(4, 13)));
    }

    #[test]
    fn test_active_low_port() {
        let idr = [Cell::new(u32::MAX), Cell::new(u32::MAX)];
        let mut bank = PortBank::new(MockRegisters { idr: &idr }, ActiveLevel::Low);
        assert_eq!(bank.active_level(), ActiveLevel::Low);

        assert!(!bank.is_pressed(&PortPin::new(0, 0)));
        idr[0].set(!0b1);
        assert!(bank.is_pressed(&PortPin::new(0, 0)));
        assert!(!bank.is_pressed(&PortPin::new(0, 1)));
    }

    #[test]
    fn test_port_bank_drives_engine() {
        let idr = [Cell::new(0), Cell::new(0)];
        let bank = PortBank::new(MockRegisters { idr: &idr }, ActiveLevel::High);
        let buttons = [
            ButtonConfig::new(PortPin::new(0, 0)),
            ButtonConfig::new(PortPin::new(1, 1)).with_long_press_ms(2050),
        ];

        let mut engine: ButtonEngine<PortPin, _, (), 2> =
            ButtonEngine::with_config(EngineConfig::new(bank).with_sink(()), &buttons).unwrap();

        // Hold GPIOB pin 1 for 1.5s: long for the default, short for the override
        idr[0].set(0b1);
        idr[1].set(0b10);
        for _ in 0..150 {
            engine.tick();
        }
        idr[0].set(0);
        idr[1].set(0);
        for _ in 0..5 {
            engine.tick();
        }

        assert_eq!(engine.event_get(0), ButtonEvent::Long);
        assert_eq!(engine.event_get(1), ButtonEvent::Short);
        assert_eq!(engine.location(1), Some(&PortPin::new(1, 1)));
    }
}
