//! Discovery: content search and ship scanning via external tools
//!
//! Both collaborators are narrow capability traits so commands can be
//! tested against in-memory fakes while the real implementations shell
//! out to `rg` and `find`.

mod finder;
mod ripgrep;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use finder::FindScan;
pub use ripgrep::RipgrepSearch;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("'{tool}' is not installed or not on PATH. Install it to use this command.")]
    Missing { tool: &'static str },

    #[error("Failed to run '{tool}': {source}")]
    Spawn {
        tool: &'static str,
        source: std::io::Error,
    },

    #[error("'{tool}' failed: {stderr}")]
    Failed { tool: &'static str, stderr: String },
}

/// Recursive content search restricted to the document file names
pub trait FileSearch {
    /// Returns paths of documents under `root` whose content matches `query`
    fn search(&self, root: &Path, query: &str) -> Result<Vec<PathBuf>, ToolError>;
}

/// Bounded-depth scan for ship documents
pub trait ShipFinder {
    /// Returns ship document paths in `root` and its immediate subdirectories
    fn find_ships(&self, root: &Path) -> Result<Vec<PathBuf>, ToolError>;
}
