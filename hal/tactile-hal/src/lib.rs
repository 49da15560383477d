//! Tactile Hardware Abstraction Layer
//!
//! This crate defines the digital input traits that chip-specific code
//! implements so the button engine can sample switches without knowing
//! which MCU it runs on.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (tactile-firmware, etc.)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tactile-core (debounce + gestures)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tactile-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input sampling
//! - [`gpio::PortInput`] - Whole-port input register reads
//! - [`gpio::ActiveLow`] - Inverting adapter for pull-up wired switches

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

// Re-export key traits at crate root for convenience
pub use gpio::{ActiveLevel, ActiveLow, InputPin, PortInput, PortPin};
