//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod buttons;
pub mod indicator;

pub use buttons::{button_task, BUTTON_COUNT};
pub use indicator::indicator_task;
