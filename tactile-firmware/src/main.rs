//! Tactile - button engine demo firmware
//!
//! Samples three switches on an RP2040 every 10ms and reports short
//! presses, long presses and long releases over RTT, mirroring them on
//! the on-board LED.
//!
//! Wiring: switches from GPIO2, GPIO3 and GPIO4 to ground (internal
//! pull-ups enabled), LED on GPIO25.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use {defmt_rtt as _, panic_probe as _};

mod channels;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tactile firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let pins: [Input<'static>; tasks::BUTTON_COUNT] = [
        Input::new(p.PIN_2, Pull::Up),
        Input::new(p.PIN_3, Pull::Up),
        Input::new(p.PIN_4, Pull::Up),
    ];
    let led = Output::new(p.PIN_25, Level::Low);

    spawner.spawn(tasks::indicator_task(led)).unwrap();
    spawner.spawn(tasks::button_task(pins)).unwrap();

    info!("All tasks spawned");
}
