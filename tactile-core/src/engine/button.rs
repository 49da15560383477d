//! Per-button debounce and long-press state machine
//!
//! One [`ButtonState`] tracks one switch. Each call to [`ButtonState::update`]
//! consumes a single raw sample and may return the [`Transition`] it caused.
//!
//! ```text
//!            pressed x debounce            held x long_press
//!   Idle ─────────────────────────► Locked ──────────────────► Locked (long)
//!    ▲                                 │                             │
//!    │        released x debounce      │   released x debounce       │
//!    └─────────── ShortRelease ◄───────┘   LongRelease ──────────────┘
//! ```
//!
//! The same `lock_count` counter confirms the press (counting up) and the
//! release (counting back down), so a dropout shorter than the debounce
//! window during a hold does not end the press.

use crate::events::{ButtonEvent, Transition};

/// Debounce and timing state of a single button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonState {
    /// Press confirmed and release not yet confirmed
    locked: bool,
    /// Debounce counter, never above the debounce threshold
    lock_count: u16,
    /// Held ticks since lock, never above the long press threshold
    long_count: u16,
    /// Set on pressed samples; released samples leave it unchanged
    prev_pressed: bool,
    /// Last classified gesture
    last_event: ButtonEvent,
}

impl ButtonState {
    /// Create a zeroed state
    pub const fn new() -> Self {
        Self {
            locked: false,
            lock_count: 0,
            long_count: 0,
            prev_pressed: false,
            last_event: ButtonEvent::None,
        }
    }

    /// Advance by one sample
    ///
    /// # Arguments
    /// - `pressed`: raw sample for this tick
    /// - `debounce_ticks`: samples needed to confirm a press or release (>= 1)
    /// - `long_press_ticks`: held samples needed for a long press (>= 1)
    ///
    /// Returns the transition that happened on this tick, if any.
    pub fn update(
        &mut self,
        pressed: bool,
        debounce_ticks: u16,
        long_press_ticks: u16,
    ) -> Option<Transition> {
        if pressed {
            self.on_pressed(debounce_ticks, long_press_ticks)
        } else {
            self.on_released(long_press_ticks)
        }
    }

    fn on_pressed(&mut self, debounce_ticks: u16, long_press_ticks: u16) -> Option<Transition> {
        if !self.locked {
            self.lock_count = self.lock_count.saturating_add(1).min(debounce_ticks);
            if self.lock_count >= debounce_ticks {
                self.locked = true;
            }
        }

        // Hold time needs a confirmed lock and a previous pressed sample;
        // the long count saturates instead of wrapping
        let counts_hold = self.locked && self.prev_pressed;
        self.prev_pressed = true;

        if counts_hold && self.long_count < long_press_ticks {
            self.long_count += 1;
            if self.long_count == long_press_ticks {
                return Some(self.latch(Transition::LongPress));
            }
        }

        None
    }

    fn on_released(&mut self, long_press_ticks: u16) -> Option<Transition> {
        if !self.locked {
            // Counters track consecutive samples, so a bounce that never
            // locked starts over
            self.lock_count = 0;
            self.long_count = 0;
            return None;
        }

        self.lock_count = self.lock_count.saturating_sub(1);
        if self.lock_count > 0 {
            return None;
        }

        self.locked = false;
        let transition = if self.long_count < long_press_ticks {
            self.latch(Transition::ShortRelease)
        } else {
            // Already latched as long at the threshold
            Transition::LongRelease
        };
        self.long_count = 0;
        Some(transition)
    }

    fn latch(&mut self, transition: Transition) -> Transition {
        self.last_event = transition.event();
        transition
    }

    /// Check if a press is currently confirmed
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Current debounce counter
    pub fn lock_count(&self) -> u16 {
        self.lock_count
    }

    /// Current hold counter
    pub fn long_count(&self) -> u16 {
        self.long_count
    }

    /// Check if a pressed sample has been seen
    ///
    /// Released samples leave this alone, so a dropout during a hold does
    /// not cost hold time once the button reads pressed again.
    pub fn prev_pressed(&self) -> bool {
        self.prev_pressed
    }

    /// Last classified gesture
    pub fn last_event(&self) -> ButtonEvent {
        self.last_event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DEBOUNCE: u16 = 2;
    const LONG: u16 = 100;

    fn run(state: &mut ButtonState, pressed: bool, ticks: usize) -> heapless::Vec<Transition, 8> {
        let mut out = heapless::Vec::new();
        for _ in 0..ticks {
            if let Some(t) = state.update(pressed, DEBOUNCE, LONG) {
                out.push(t).unwrap();
            }
        }
        out
    }

    #[test]
    fn test_starts_idle() {
        let state = ButtonState::new();
        assert!(!state.is_locked());
        assert_eq!(state.lock_count(), 0);
        assert_eq!(state.long_count(), 0);
        assert_eq!(state.last_event(), ButtonEvent::None);
        assert_eq!(state, ButtonState::default());
    }

    #[test]
    fn test_bounce_is_ignored() {
        let mut state = ButtonState::new();
        // One pressed sample, shorter than the debounce window
        assert!(run(&mut state, true, 1).is_empty());
        assert!(!state.is_locked());
        assert!(run(&mut state, false, 10).is_empty());
        assert_eq!(state.last_event(), ButtonEvent::None);
    }

    #[test]
    fn test_locks_after_debounce() {
        let mut state = ButtonState::new();
        run(&mut state, true, 1);
        assert!(!state.is_locked());
        run(&mut state, true, 1);
        assert!(state.is_locked());
        assert_eq!(state.lock_count(), DEBOUNCE);
    }

    #[test]
    fn test_short_press() {
        let mut state = ButtonState::new();
        assert!(run(&mut state, true, 4).is_empty());

        // First released sample only counts down
        assert_eq!(state.update(false, DEBOUNCE, LONG), None);
        assert!(state.is_locked());

        assert_eq!(
            state.update(false, DEBOUNCE, LONG),
            Some(Transition::ShortRelease)
        );
        assert!(!state.is_locked());
        assert_eq!(state.last_event(), ButtonEvent::Short);
    }

    #[test]
    fn test_long_press_fires_once() {
        let mut state = ButtonState::new();
        // Tick 1 starts the lock, ticks 2..=101 count the hold
        assert!(run(&mut state, true, 100).is_empty());
        assert_eq!(state.long_count(), 99);

        assert_eq!(
            state.update(true, DEBOUNCE, LONG),
            Some(Transition::LongPress)
        );
        assert_eq!(state.last_event(), ButtonEvent::Long);

        // Holding longer does not fire again and does not overflow
        assert!(run(&mut state, true, 500).is_empty());
        assert_eq!(state.long_count(), LONG);

        let released = run(&mut state, false, 5);
        assert_eq!(released.as_slice(), &[Transition::LongRelease]);
        assert_eq!(state.last_event(), ButtonEvent::Long);
    }

    #[test]
    fn test_dropout_during_hold_is_absorbed() {
        let mut state = ButtonState::new();
        run(&mut state, true, 10);

        // Single-sample dropout
        assert!(run(&mut state, false, 1).is_empty());
        assert!(state.is_locked());

        assert!(run(&mut state, true, 10).is_empty());
        assert!(state.is_locked());
        assert_eq!(state.last_event(), ButtonEvent::None);
    }

    #[test]
    fn test_dropout_keeps_previous_sample() {
        let mut state = ButtonState::new();
        assert!(!state.prev_pressed());
        run(&mut state, true, 50);
        assert_eq!(state.long_count(), 49);

        run(&mut state, false, 1);
        assert!(state.prev_pressed());
        assert_eq!(state.long_count(), 49);

        // Tick 52 counts hold time again, tick 102 reaches the threshold
        assert!(run(&mut state, true, 50).is_empty());
        assert_eq!(state.long_count(), 99);
        assert_eq!(
            state.update(true, DEBOUNCE, LONG),
            Some(Transition::LongPress)
        );
    }

    #[test]
    fn test_repress_counts_hold_from_first_sample() {
        let mut state = ButtonState::new();
        for _ in 0..5 {
            state.update(true, 1, 3);
        }
        assert_eq!(state.update(false, 1, 3), Some(Transition::LongRelease));
        assert_eq!(state.update(false, 1, 3), None);
        assert!(state.prev_pressed());

        // Single-tick debounce locks on the first sample, which already
        // follows a pressed one
        assert_eq!(state.update(true, 1, 3), None);
        assert!(state.is_locked());
        assert_eq!(state.long_count(), 1);
    }

    #[test]
    fn test_hold_count_resets_between_presses() {
        let mut state = ButtonState::new();
        run(&mut state, true, 150);
        run(&mut state, false, 2);
        assert_eq!(state.long_count(), 0);

        // Immediate re-press is classified on its own
        let transitions = run(&mut state, true, 10);
        assert!(transitions.is_empty());
        let transitions = run(&mut state, false, 2);
        assert_eq!(transitions.as_slice(), &[Transition::ShortRelease]);
        assert_eq!(state.last_event(), ButtonEvent::Short);
    }

    #[test]
    fn test_single_tick_debounce() {
        let mut state = ButtonState::new();
        assert_eq!(state.update(true, 1, 3), None);
        assert!(state.is_locked());
        // First pressed sample did not count as hold time
        assert_eq!(state.long_count(), 0);

        assert_eq!(state.update(true, 1, 3), None);
        assert_eq!(state.update(true, 1, 3), None);
        assert_eq!(state.update(true, 1, 3), Some(Transition::LongPress));
        assert_eq!(state.update(false, 1, 3), Some(Transition::LongRelease));
    }

    proptest! {
        #[test]
        fn prop_counters_stay_bounded(
            samples in proptest::collection::vec(any::<bool>(), 0..400),
            debounce in 1u16..6,
            long in 1u16..60,
        ) {
            let mut state = ButtonState::new();
            for pressed in samples {
                state.update(pressed, debounce, long);
                prop_assert!(state.lock_count() <= debounce);
                prop_assert!(state.long_count() <= long);
                if !state.is_locked() {
                    prop_assert!(state.lock_count() < debounce);
                }
            }
        }

        #[test]
        fn prop_long_press_precedes_long_release(
            samples in proptest::collection::vec(any::<bool>(), 0..400),
            debounce in 1u16..6,
            long in 1u16..60,
        ) {
            let mut state = ButtonState::new();
            let mut long_pending = false;
            for pressed in samples {
                match state.update(pressed, debounce, long) {
                    Some(Transition::LongPress) => {
                        prop_assert!(!long_pending);
                        long_pending = true;
                    }
                    Some(Transition::LongRelease) => {
                        prop_assert!(long_pending);
                        long_pending = false;
                    }
                    Some(Transition::ShortRelease) => {
                        prop_assert!(!long_pending);
                        prop_assert_eq!(state.last_event(), ButtonEvent::Short);
                    }
                    None => {}
                }
            }
        }

        #[test]
        fn prop_short_pulses_never_lock(
            pulses in proptest::collection::vec(1usize..4, 0..50),
        ) {
            // Debounce of 4: every pressed run is shorter than the window
            let mut state = ButtonState::new();
            for len in pulses {
                for _ in 0..len {
                    prop_assert_eq!(state.update(true, 4, 10), None);
                }
                prop_assert!(!state.is_locked());
                for _ in 0..len {
                    prop_assert_eq!(state.update(false, 4, 10), None);
                }
            }
            prop_assert_eq!(state.last_event(), ButtonEvent::None);
        }
    }
}
