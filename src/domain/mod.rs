//! Domain models for Stardock
//!
//! Contains the three document kinds and their merge rules,
//! without any I/O concerns.

mod ship;
mod log;
mod terminal;
mod stardate;

pub use ship::{Ship, FleetMembership};
pub use log::{prepend_section, CaptainsLog, LogEntry};
pub use terminal::{TerminalSession, Room};
pub use stardate::stardate;
