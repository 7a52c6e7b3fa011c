//! Stardock - sidecar metadata files for project directories
//!
//! Stardock annotates a directory with three small markdown documents,
//! each YAML frontmatter plus a free-text body: a ship document
//! (identity, tags, fleet memberships), a captain's log (newest-first
//! timestamped entries) and a terminal session (saved room layout).
//! Cross-directory queries shell out to ripgrep and find.

pub mod domain;
pub mod storage;
pub mod discovery;
pub mod cli;

pub use domain::{CaptainsLog, FleetMembership, LogEntry, Room, Ship, TerminalSession};
pub use storage::{DocKind, DockStore};
