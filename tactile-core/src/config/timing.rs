//! Millisecond to tick conversion
//!
//! The engine has no clock of its own: one `tick()` call is one sampling
//! period. All durations are converted into tick counts once, at
//! configuration time.

use super::types::TimingConfig;

/// Timing settings resolved into tick counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Interval between `tick()` calls
    pub sample_period_ms: u16,
    /// Debounce time
    pub debounce_ms: u16,
    /// Default long press time
    pub long_press_ms: u16,
    /// Consecutive samples needed to confirm a press or release
    pub debounce_ticks: u16,
    /// Consecutive held samples for a default long press
    pub long_press_ticks: u16,
}

impl Timing {
    /// Resolve a timing config, applying defaults to zero fields
    pub fn resolve(config: TimingConfig) -> Self {
        let config = config.with_defaults();
        let period = config.sample_period_ms;

        Self {
            sample_period_ms: period,
            debounce_ms: config.debounce_ms,
            long_press_ms: config.long_press_ms,
            debounce_ticks: ms_to_ticks(config.debounce_ms, period),
            long_press_ticks: ms_to_ticks(config.long_press_ms, period),
        }
    }

    /// Convert a duration to ticks at this sampling period
    ///
    /// Durations shorter than one period resolve to a single tick.
    pub fn ticks(&self, duration_ms: u16) -> u16 {
        ms_to_ticks(duration_ms, self.sample_period_ms)
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::resolve(TimingConfig::default())
    }
}

fn ms_to_ticks(duration_ms: u16, period_ms: u16) -> u16 {
    let ticks = duration_ms / period_ms.max(1);
    if ticks == 0 {
        #[cfg(feature = "defmt")]
        defmt::warn!(
            "{}ms is shorter than the {}ms sample period, using 1 tick",
            duration_ms,
            period_ms
        );
        return 1;
    }
    ticks
}
