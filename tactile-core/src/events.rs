//! Button events
//!
//! [`ButtonEvent`] is the latched, pollable classification of the last
//! completed gesture. [`Transition`] is the edge reported to the event
//! sink on the tick where it happens.

/// Last classified gesture of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Nothing classified yet
    #[default]
    None,
    /// Pressed and released before the long press time
    Short,
    /// Held for at least the long press time
    Long,
}

/// Edge produced by a single tick of a button state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Debounced release of a press shorter than the long press time
    ShortRelease,
    /// Long press time reached while still held
    LongPress,
    /// Debounced release after a long press
    LongRelease,
}

impl Transition {
    /// Latched event this transition leaves behind
    pub fn event(&self) -> ButtonEvent {
        match self {
            Transition::ShortRelease => ButtonEvent::Short,
            Transition::LongPress | Transition::LongRelease => ButtonEvent::Long,
        }
    }
}
