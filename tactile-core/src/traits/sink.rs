//! Event notification hooks

use crate::events::Transition;

/// Receives gesture transitions from the engine
///
/// Every hook is optional: the default bodies do nothing. Hooks run
/// synchronously inside `tick()`, so they should be short and must not
/// block. `index` is the zero-based position of the button in the
/// configured list.
pub trait EventSink {
    /// A press shorter than the long press time was released
    fn on_short_release(&mut self, _index: usize) {}

    /// A held button reached its long press time
    fn on_long_press(&mut self, _index: usize) {}

    /// A long press was released
    fn on_long_release(&mut self, _index: usize) {}

    /// Route a transition to the matching hook
    fn dispatch(&mut self, index: usize, transition: Transition) {
        match transition {
            Transition::ShortRelease => self.on_short_release(index),
            Transition::LongPress => self.on_long_press(index),
            Transition::LongRelease => self.on_long_release(index),
        }
    }
}

/// Sink that ignores everything (polling-only use)
impl EventSink for () {}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn on_short_release(&mut self, index: usize) {
        (**self).on_short_release(index)
    }

    fn on_long_press(&mut self, index: usize) {
        (**self).on_long_press(index)
    }

    fn on_long_release(&mut self, index: usize) {
        (**self).on_long_release(index)
    }
}

/// Plain function callback
pub type EventCallback = fn(usize);

/// Optional function-pointer callbacks
///
/// Unset callbacks are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct Callbacks {
    /// Called on a short press release
    pub short_release: Option<EventCallback>,
    /// Called once when a long press is detected
    pub long_press: Option<EventCallback>,
    /// Called on a long press release
    pub long_release: Option<EventCallback>,
}

impl Callbacks {
    /// No callbacks registered
    pub const fn new() -> Self {
        Self {
            short_release: None,
            long_press: None,
            long_release: None,
        }
    }

    /// Register the short release callback
    pub const fn with_short_release(mut self, callback: EventCallback) -> Self {
        self.short_release = Some(callback);
        self
    }

    /// Register the long press callback
    pub const fn with_long_press(mut self, callback: EventCallback) -> Self {
        self.long_press = Some(callback);
        self
    }

    /// Register the long release callback
    pub const fn with_long_release(mut self, callback: EventCallback) -> Self {
        self.long_release = Some(callback);
        self
    }
}

impl EventSink for Callbacks {
    fn on_short_release(&mut self, index: usize) {
        if let Some(callback) = self.short_release {
            callback(index);
        }
    }

    fn on_long_press(&mut self, index: usize) {
        if let Some(callback) = self.long_press {
            callback(index);
        }
    }

    fn on_long_release(&mut self, index: usize) {
        if let Some(callback) = self.long_release {
            callback(index);
        }
    }
}
