//! Multi-button engine
//!
//! Holds the configured buttons and their state machines, samples each
//! one through the port reader on every tick, and forwards transitions to
//! the event sink.
//!
//! The engine has no timer. `tick()` must be called once per configured
//! sampling period; the caller's cadence is the time base. It never
//! blocks and never fails, so it is safe to call from a timer interrupt
//! as long as the caller serialises access to the engine.

use heapless::Vec;

use crate::config::{ButtonConfig, ConfigError, EngineConfig, Timing, MAX_BUTTONS};
use crate::events::ButtonEvent;
use crate::traits::{EventSink, PortReader};

use super::button::ButtonState;

/// A configured button and its runtime state
#[derive(Debug, Clone)]
struct Button<L> {
    /// Electrical location passed to the port reader
    location: L,
    /// Resolved long press threshold
    long_press_ticks: u16,
    /// Debounce / timing state
    state: ButtonState,
}

/// Collaborators and timing captured at configuration time
struct Runtime<R, S> {
    timing: Timing,
    reader: R,
    sink: S,
}

/// Polled button engine for up to `N` buttons
///
/// # Type parameters
/// - `L`: electrical location type (pin number, `(port, pin)`, ...)
/// - `R`: port reader
/// - `S`: event sink
/// - `N`: button capacity
pub struct ButtonEngine<L, R, S, const N: usize> {
    runtime: Option<Runtime<R, S>>,
    buttons: Vec<Button<L>, N>,
}

impl<L, R, S, const N: usize> Default for ButtonEngine<L, R, S, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, R, S, const N: usize> ButtonEngine<L, R, S, N> {
    /// Create an unconfigured engine
    ///
    /// Ticking an unconfigured engine does nothing and every query
    /// reports [`ButtonEvent::None`].
    pub const fn new() -> Self {
        Self {
            runtime: None,
            buttons: Vec::new(),
        }
    }

    /// Check if `configure()` has succeeded
    pub fn is_configured(&self) -> bool {
        self.runtime.is_some()
    }

    /// Number of configured buttons
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    /// Check if no buttons are configured
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Resolved timing, if configured
    pub fn timing(&self) -> Option<&Timing> {
        self.runtime.as_ref().map(|rt| &rt.timing)
    }

    /// Last classified gesture of a button
    ///
    /// Out-of-range indices report [`ButtonEvent::None`]; this does not
    /// prove the button exists.
    pub fn event_get(&self, index: usize) -> ButtonEvent {
        self.buttons
            .get(index)
            .map(|b| b.state.last_event())
            .unwrap_or_default()
    }

    /// Check if a button currently has a confirmed press
    pub fn is_held(&self, index: usize) -> bool {
        self.buttons
            .get(index)
            .map(|b| b.state.is_locked())
            .unwrap_or(false)
    }

    /// Full state of a button
    pub fn state(&self, index: usize) -> Option<&ButtonState> {
        self.buttons.get(index).map(|b| &b.state)
    }

    /// Electrical location of a button
    pub fn location(&self, index: usize) -> Option<&L> {
        self.buttons.get(index).map(|b| &b.location)
    }

    /// Long press threshold of a button in ticks
    pub fn long_press_ticks(&self, index: usize) -> Option<u16> {
        self.buttons.get(index).map(|b| b.long_press_ticks)
    }

    /// Event sink, if configured
    pub fn sink(&self) -> Option<&S> {
        self.runtime.as_ref().map(|rt| &rt.sink)
    }

    /// Mutable event sink, if configured
    pub fn sink_mut(&mut self) -> Option<&mut S> {
        self.runtime.as_mut().map(|rt| &mut rt.sink)
    }

    /// Mutable port reader, if configured
    pub fn reader_mut(&mut self) -> Option<&mut R> {
        self.runtime.as_mut().map(|rt| &mut rt.reader)
    }
}

impl<L, R, S, const N: usize> ButtonEngine<L, R, S, N>
where
    L: Clone,
    R: PortReader<L>,
    S: EventSink,
{
    /// Create and configure an engine in one step
    pub fn with_config(
        config: EngineConfig<R, S>,
        buttons: &[ButtonConfig<L>],
    ) -> Result<Self, ConfigError> {
        let mut engine = Self::new();
        engine.configure(config, buttons)?;
        Ok(engine)
    }

    /// Configure the engine
    ///
    /// Applies timing defaults, resolves each button's long press
    /// threshold and zeroes every button state. Replaces any previous
    /// configuration, discarding its history.
    ///
    /// On error the engine is left untouched.
    pub fn configure(
        &mut self,
        config: EngineConfig<R, S>,
        buttons: &[ButtonConfig<L>],
    ) -> Result<(), ConfigError> {
        let reader = config.port_reader.ok_or(ConfigError::MissingPortReader)?;
        if buttons.is_empty() {
            return Err(ConfigError::NoButtons);
        }
        let capacity = N.min(MAX_BUTTONS);
        if buttons.len() > capacity {
            return Err(ConfigError::TooManyButtons {
                requested: buttons.len(),
                capacity,
            });
        }

        let timing = Timing::resolve(config.timing);

        let mut configured = Vec::new();
        for button in buttons {
            let entry = Button {
                location: button.location.clone(),
                long_press_ticks: timing
                    .ticks(button.effective_long_press_ms(timing.long_press_ms)),
                state: ButtonState::new(),
            };
            configured
                .push(entry)
                .map_err(|_| ConfigError::TooManyButtons {
                    requested: buttons.len(),
                    capacity,
                })?;
        }

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Configured {} buttons: period={}ms debounce={} ticks long={} ticks",
            configured.len(),
            timing.sample_period_ms,
            timing.debounce_ticks,
            timing.long_press_ticks
        );

        self.buttons = configured;
        self.runtime = Some(Runtime {
            timing,
            reader,
            sink: config.sink,
        });
        Ok(())
    }

    /// Sample and advance every button once
    ///
    /// Buttons are processed in index order, so sink callbacks for
    /// different buttons within one tick arrive in that order.
    pub fn tick(&mut self) {
        let Some(runtime) = self.runtime.as_mut() else {
            return;
        };
        let debounce_ticks = runtime.timing.debounce_ticks;

        for (index, button) in self.buttons.iter_mut().enumerate() {
            let pressed = runtime.reader.is_pressed(&button.location);
            let transition = button
                .state
                .update(pressed, debounce_ticks, button.long_press_ticks);

            if let Some(transition) = transition {
                #[cfg(feature = "defmt")]
                defmt::debug!("Button {}: {}", index, transition);

                runtime.sink.dispatch(index, transition);
            }
        }
    }
}
