//! Configuration types
//!
//! Engine and per-button settings, plus the conversion of millisecond
//! durations into tick counts.

pub mod timing;
pub mod types;

pub use timing::*;
pub use types::*;
