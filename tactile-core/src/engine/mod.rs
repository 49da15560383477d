//! Button engine
//!
//! [`ButtonState`] is the per-button debounce and timing state machine;
//! [`ButtonEngine`] owns one per configured button and advances them all
//! on every `tick()`.

pub mod button;
pub mod scheduler;

pub use button::ButtonState;
pub use scheduler::ButtonEngine;
