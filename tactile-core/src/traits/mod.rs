//! Collaborator traits
//!
//! These traits define the interface between the engine and the code
//! around it: where samples come from and where events go.

pub mod reader;
pub mod sink;

pub use reader::PortReader;
pub use sink::{Callbacks, EventSink};
