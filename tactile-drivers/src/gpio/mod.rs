//! GPIO-backed port readers
//!
//! Each reader maps the engine's opaque location to a pin and applies
//! the pin's [`ActiveLevel`](tactile_hal::ActiveLevel) so the engine
//! only ever sees "pressed" / "not pressed".

pub mod bank;
pub mod port;

pub use bank::{HalPinBank, PinBank};
pub use port::PortBank;
