//! Button sampling task
//!
//! Owns the button engine and ticks it from an embassy `Ticker` at the
//! configured sampling period. Transitions are pushed to
//! [`BUTTON_EVENTS`] without waiting; if the consumer falls behind the
//! event is dropped and logged rather than stalling the sample clock.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Ticker};

use tactile_core::config::{ButtonConfig, EngineConfig, TimingConfig};
use tactile_core::{ButtonEngine, EventSink, Transition};
use tactile_drivers::gpio::PinBank;
use tactile_hal::ActiveLevel;

use crate::channels::{ButtonMessage, BUTTON_EVENTS};

/// Number of buttons on the board
pub const BUTTON_COUNT: usize = 3;

/// Sampling period in milliseconds
const SAMPLE_PERIOD_MS: u16 = 10;

/// Contact debounce time in milliseconds
const DEBOUNCE_MS: u16 = 20;

/// Default long press time in milliseconds
const LONG_PRESS_MS: u16 = 1000;

/// Long press time of the "reset" button (index 2)
const RESET_LONG_PRESS_MS: u16 = 3000;

/// Forwards engine transitions to the button channel
struct ChannelSink;

impl ChannelSink {
    fn publish(&mut self, index: usize, transition: Transition) {
        let msg = ButtonMessage {
            button: index as u8,
            transition,
        };
        if BUTTON_EVENTS.try_send(msg).is_err() {
            warn!("Button channel full, dropped {}", msg);
        }
    }
}

impl EventSink for ChannelSink {
    fn on_short_release(&mut self, index: usize) {
        self.publish(index, Transition::ShortRelease);
    }

    fn on_long_press(&mut self, index: usize) {
        self.publish(index, Transition::LongPress);
    }

    fn on_long_release(&mut self, index: usize) {
        self.publish(index, Transition::LongRelease);
    }
}

/// Button task - samples all buttons every sampling period
#[embassy_executor::task]
pub async fn button_task(pins: [Input<'static>; BUTTON_COUNT]) {
    info!("Button task started");

    let buttons = [
        ButtonConfig::new(0),
        ButtonConfig::new(1),
        ButtonConfig::new(2).with_long_press_ms(RESET_LONG_PRESS_MS),
    ];

    // Switches close to ground against the internal pull-ups
    let reader = PinBank::new(pins, ActiveLevel::Low);
    let config = EngineConfig::new(reader)
        .with_timing(TimingConfig::new(SAMPLE_PERIOD_MS, DEBOUNCE_MS, LONG_PRESS_MS))
        .with_sink(ChannelSink);

    let mut engine: ButtonEngine<usize, _, _, BUTTON_COUNT> =
        match ButtonEngine::with_config(config, &buttons) {
            Ok(engine) => engine,
            Err(e) => {
                error!("Button configuration rejected: {}", e);
                return;
            }
        };

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_PERIOD_MS as u64));

    loop {
        ticker.next().await;
        engine.tick();
    }
}
