//! Ship scanning backed by find(1)

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::storage::DocKind;

use super::{ShipFinder, ToolError};

const TOOL: &str = "find";

/// `ShipFinder` implementation shelling out to `find`
///
/// Depth is capped at 2: the root itself plus immediate subdirectories.
pub struct FindScan;

impl FindScan {
    pub fn new() -> Result<Self, ToolError> {
        which::which(TOOL).map_err(|_| ToolError::Missing { tool: TOOL })?;
        Ok(Self)
    }
}

impl ShipFinder for FindScan {
    fn find_ships(&self, root: &Path) -> Result<Vec<PathBuf>, ToolError> {
        let output = Command::new(TOOL)
            .arg(root)
            .args(["-maxdepth", "2", "-type", "f", "-name"])
            .arg(DocKind::Ship.file_name())
            .output()
            .map_err(|source| ToolError::Spawn {
                tool: TOOL,
                source,
            })?;

        if !output.status.success() {
            return Err(ToolError::Failed {
                tool: TOOL,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let mut paths: Vec<PathBuf> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect();
        paths.sort();
        Ok(paths)
    }
}
