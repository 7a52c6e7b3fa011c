//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Command Groups
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | Ship | Directory identity | `ship init`, `ship add-tag`, `ship show` |
//! | Log | Chronological record | `captainslog init`, `captainslog add` |
//! | Terminal | Session layouts | `terminal add`, `terminal restore` |
//! | Discovery | Cross-directory queries | `search`, `discover` |
//!
//! Top-level `add`, `remove` and `fleet` are aliases for the matching
//! `ship` subcommands.
//!
//! All commands support `--format text|json` and `--verbose`; the target
//! directory defaults to the current one and can be overridden with `-C`.
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod ship;
mod log_cmd;
mod terminal_cmd;
mod search_cmd;
mod discover;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
