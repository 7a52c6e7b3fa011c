//! Content search backed by ripgrep

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::storage::DocKind;

use super::{FileSearch, ToolError};

const TOOL: &str = "rg";

/// `FileSearch` implementation shelling out to `rg`
pub struct RipgrepSearch;

impl RipgrepSearch {
    /// Fails early when ripgrep is not installed
    pub fn new() -> Result<Self, ToolError> {
        which::which(TOOL).map_err(|_| ToolError::Missing { tool: TOOL })?;
        Ok(Self)
    }
}

impl FileSearch for RipgrepSearch {
    fn search(&self, root: &Path, query: &str) -> Result<Vec<PathBuf>, ToolError> {
        let mut cmd = Command::new(TOOL);
        cmd.args(["--files-with-matches", "--fixed-strings", "--no-messages"]);
        for kind in [DocKind::Ship, DocKind::CaptainsLog, DocKind::Terminal] {
            cmd.arg("--glob").arg(kind.file_name());
        }
        cmd.arg("--").arg(query).arg(root);

        let output = cmd.output().map_err(|source| ToolError::Spawn {
            tool: TOOL,
            source,
        })?;

        // exit code 1 means "no matches", which is a normal empty result
        if !output.status.success() && output.status.code() != Some(1) {
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
