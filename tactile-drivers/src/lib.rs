//! Port reader implementations
//!
//! This crate provides concrete implementations of the
//! [`PortReader`](tactile_core::PortReader) trait for common ways of
//! getting at switch levels:
//!
//! - [`gpio::PinBank`] - array of `embedded-hal` 1.0 input pins
//! - [`gpio::HalPinBank`] - array of `tactile-hal` input pins
//! - [`gpio::PortBank`] - whole-port registers addressed by `(port, pin)`

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
