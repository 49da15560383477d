//! Inter-task communication channels
//!
//! Button transitions leave the sampling task through a bounded channel
//! so the 10ms tick never waits on a consumer.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use tactile_core::Transition;

/// Channel capacity for button events
const BUTTON_CHANNEL_SIZE: usize = 8;

/// A transition of one button
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub struct ButtonMessage {
    /// Index of the button in the configured list
    pub button: u8,
    /// What happened
    pub transition: Transition,
}

/// Button transitions from the sampling task
pub static BUTTON_EVENTS: Channel<CriticalSectionRawMutex, ButtonMessage, BUTTON_CHANNEL_SIZE> =
    Channel::new();
