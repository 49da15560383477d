//! Board-agnostic core logic for polled button input
//!
//! This crate contains everything that turns raw switch samples into
//! press gestures without depending on a specific MCU:
//!
//! - Configuration types and tick resolution
//! - Per-button debounce / long-press state machine
//! - Multi-button engine driven by a periodic `tick()`
//! - Port reader and event sink traits
//!
//! # Example
//!
//! ```
//! use tactile_core::config::{ButtonConfig, EngineConfig};
//! use tactile_core::engine::ButtonEngine;
//! use tactile_core::events::ButtonEvent;
//!
//! let buttons = [ButtonConfig::new(0u8), ButtonConfig::new(1u8).with_long_press_ms(2000)];
//! let config = EngineConfig::new(|pin: &u8| *pin == 0);
//!
//! let mut engine: ButtonEngine<u8, _, _, 4> = ButtonEngine::new();
//! engine.configure(config, &buttons).unwrap();
//!
//! // Call every 10 ms from a timer or main loop
//! for _ in 0..150 {
//!     engine.tick();
//! }
//! assert_eq!(engine.event_get(0), ButtonEvent::Long);
//! assert_eq!(engine.event_get(1), ButtonEvent::None);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod engine;
pub mod events;
pub mod traits;

pub use config::{ButtonConfig, ConfigError, EngineConfig, TimingConfig};
pub use engine::ButtonEngine;
pub use events::{ButtonEvent, Transition};
pub use traits::{Callbacks, EventSink, PortReader};
