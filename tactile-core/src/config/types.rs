//! Engine and button configuration types
//!
//! Every duration field treats zero as "use the default", matching how
//! the configuration is usually written: only the values that differ
//! from the defaults are spelled out.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::Callbacks;

/// Default sampling period (time between `tick()` calls)
pub const DEFAULT_SAMPLE_PERIOD_MS: u16 = 10;

/// Default contact debounce time
pub const DEFAULT_DEBOUNCE_MS: u16 = 20;

/// Default hold time before a press counts as long
pub const DEFAULT_LONG_PRESS_MS: u16 = 1000;

/// Maximum number of buttons a single engine may drive
pub const MAX_BUTTONS: usize = 255;

/// Configuration errors reported by `ButtonEngine::configure`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// No port reader was supplied
    MissingPortReader,
    /// The button list is empty
    NoButtons,
    /// More buttons than the engine can hold
    TooManyButtons {
        /// Number of buttons requested
        requested: usize,
        /// Capacity of the engine
        capacity: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingPortReader => f.write_str("port reader is missing"),
            ConfigError::NoButtons => f.write_str("at least one button is required"),
            ConfigError::TooManyButtons {
                requested,
                capacity,
            } => write!(
                f,
                "{} buttons requested, capacity is {}",
                requested, capacity
            ),
        }
    }
}

/// Engine-wide timing settings in milliseconds
///
/// Zero fields fall back to [`DEFAULT_SAMPLE_PERIOD_MS`],
/// [`DEFAULT_DEBOUNCE_MS`] and [`DEFAULT_LONG_PRESS_MS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingConfig {
    /// Interval between `tick()` calls
    pub sample_period_ms: u16,
    /// Time a level must be stable before it is trusted
    pub debounce_ms: u16,
    /// Default hold time for a long press
    pub long_press_ms: u16,
}

impl TimingConfig {
    /// Create a timing config with explicit values
    pub const fn new(sample_period_ms: u16, debounce_ms: u16, long_press_ms: u16) -> Self {
        Self {
            sample_period_ms,
            debounce_ms,
            long_press_ms,
        }
    }

    /// Replace zero fields with the defaults
    pub const fn with_defaults(self) -> Self {
        Self {
            sample_period_ms: or_default(self.sample_period_ms, DEFAULT_SAMPLE_PERIOD_MS),
            debounce_ms: or_default(self.debounce_ms, DEFAULT_DEBOUNCE_MS),
            long_press_ms: or_default(self.long_press_ms, DEFAULT_LONG_PRESS_MS),
        }
    }
}

/// Per-button configuration
///
/// `location` identifies the physical input and is handed to the
/// [`PortReader`](crate::traits::PortReader) unchanged. It can be a pin
/// number, a `(port, pin)` pair, or anything else the reader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonConfig<L> {
    /// Electrical location of the switch
    pub location: L,
    /// Individual long press time (0 = engine default)
    pub long_press_ms: u16,
}

impl<L> ButtonConfig<L> {
    /// Create a button using the engine's default long press time
    pub const fn new(location: L) -> Self {
        Self {
            location,
            long_press_ms: 0,
        }
    }

    /// Override the long press time for this button
    pub fn with_long_press_ms(mut self, long_press_ms: u16) -> Self {
        self.long_press_ms = long_press_ms;
        self
    }

    /// Effective long press time given the engine default
    pub const fn effective_long_press_ms(&self, default_ms: u16) -> u16 {
        or_default(self.long_press_ms, default_ms)
    }
}

/// Complete engine configuration
///
/// Bundles the timing settings with the collaborators the engine calls
/// into: the port reader (required) and the event sink (optional hooks).
pub struct EngineConfig<R, S = Callbacks> {
    /// Timing settings
    pub timing: TimingConfig,
    /// Reads the raw pressed state of a button location
    pub port_reader: Option<R>,
    /// Receives short-release / long-press / long-release notifications
    pub sink: S,
}

impl<R> EngineConfig<R, Callbacks> {
    /// Create a config with default timing and no callbacks
    pub fn new(port_reader: R) -> Self {
        Self {
            timing: TimingConfig::default(),
            port_reader: Some(port_reader),
            sink: Callbacks::new(),
        }
    }
}

impl<R, S> EngineConfig<R, S> {
    /// Set the timing settings
    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// Replace the event sink
    pub fn with_sink<S2>(self, sink: S2) -> EngineConfig<R, S2> {
        EngineConfig {
            timing: self.timing,
            port_reader: self.port_reader,
            sink,
        }
    }
}

impl<R, S: Default> Default for EngineConfig<R, S> {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            port_reader: None,
            sink: S::default(),
        }
    }
}

const fn or_default(value: u16, default: u16) -> u16 {
    if value == 0 {
        default
    } else {
        value
    }
}
