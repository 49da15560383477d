//! Indicator task
//!
//! Consumes button transitions and reflects them on the status LED:
//! a short press toggles it, a long press turns it on until release.

use defmt::*;
use embassy_rp::gpio::Output;

use tactile_core::Transition;

use crate::channels::BUTTON_EVENTS;

/// Indicator task - drives the status LED from button events
#[embassy_executor::task]
pub async fn indicator_task(mut led: Output<'static>) {
    info!("Indicator task started");

    loop {
        let msg = BUTTON_EVENTS.receive().await;

        match msg.transition {
            Transition::ShortRelease => {
                info!("Button {} short press", msg.button);
                led.toggle();
            }
            Transition::LongPress => {
                info!("Button {} long press", msg.button);
                led.set_high();
            }
            Transition::LongRelease => {
                info!("Button {} long release", msg.button);
                led.set_low();
            }
        }
    }
}
