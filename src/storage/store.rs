//! Document store
//!
//! Each document kind maps to a fixed file name within a directory.
//! Loads return `None` for an absent file; saves render the full
//! document in memory, write it to a temp file and rename over the
//! target, so a failed write never truncates the previous content.
//!
//! The store does not fill defaults for missing fields; the serde
//! layer on the document types owns that.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::frontmatter::{self, FrontmatterError};
use crate::domain::{CaptainsLog, Ship, TerminalSession};

/// The three document kinds, one fixed file name each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKind {
    Ship,
    CaptainsLog,
    Terminal,
}

impl DocKind {
    /// Fixed file name for this kind
    pub fn file_name(&self) -> &'static str {
        match self {
            DocKind::Ship => "Σship.md",
            DocKind::CaptainsLog => "Δcaptainslog.md",
            DocKind::Terminal => "∫terminal.md",
        }
    }

    /// Subcommand that creates this kind, used in error guidance
    pub fn init_command(&self) -> &'static str {
        match self {
            DocKind::Ship => "stardock ship init",
            DocKind::CaptainsLog => "stardock captainslog init",
            DocKind::Terminal => "stardock terminal init",
        }
    }
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocKind::Ship => write!(f, "ship document"),
            DocKind::CaptainsLog => write!(f, "captain's log"),
            DocKind::Terminal => write!(f, "terminal session"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} already exists at {}. Use --force to overwrite.", path.display())]
    AlreadyExists { kind: DocKind, path: PathBuf },

    #[error("No {kind} in {}. Run '{}' first.", dir.display(), kind.init_command())]
    NotFound { kind: DocKind, dir: PathBuf },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: FrontmatterError,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Store for the sidecar documents of one directory
pub struct DockStore {
    dir: PathBuf,
}

impl DockStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing a document kind
    pub fn path(&self, kind: DocKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    pub fn exists(&self, kind: DocKind) -> bool {
        self.path(kind).exists()
    }

    /// Loads a document, or `None` if the file does not exist
    pub fn load<T: DeserializeOwned>(
        &self,
        kind: DocKind,
    ) -> Result<Option<(T, String)>, StoreError> {
        let path = self.path(kind);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io { path, source: e }),
        };

        frontmatter::parse(&text)
            .map(Some)
            .map_err(|source| StoreError::Parse { path, source })
    }

    /// Loads a document that must exist
    pub fn require<T: DeserializeOwned>(&self, kind: DocKind) -> Result<(T, String), StoreError> {
        self.load(kind)?.ok_or_else(|| StoreError::NotFound {
            kind,
            dir: self.dir.clone(),
        })
    }

    /// Saves a document, overwriting any existing file
    pub fn save<T: Serialize>(
        &self,
        kind: DocKind,
        meta: &T,
        body: &str,
    ) -> Result<(), StoreError> {
        let path = self.path(kind);
        let text = frontmatter::render(meta, body).map_err(|source| StoreError::Parse {
            path: path.clone(),
            source,
        })?;

        // temp file + rename keeps the old content intact on failure
        let temp_path = path.with_extension("md.tmp");
        fs::write(&temp_path, &text).map_err(|source| StoreError::Io {
            path: temp_path.clone(),
            source,
        })?;
        fs::rename(&temp_path, &path).map_err(|source| StoreError::Io { path, source })?;

        Ok(())
    }

    /// Creates a document, failing if it already exists unless `force`
    pub fn create<T: Serialize>(
        &self,
        kind: DocKind,
        meta: &T,
        body: &str,
        force: bool,
    ) -> Result<(), StoreError> {
        let path = self.path(kind);
        if path.exists() && !force {
            return Err(StoreError::AlreadyExists { kind, path });
        }
        self.save(kind, meta, body)
    }

    // Typed convenience wrappers

    pub fn load_ship(&self) -> Result<Option<(Ship, String)>, StoreError> {
        self.load(DocKind::Ship)
    }

    pub fn require_ship(&self) -> Result<(Ship, String), StoreError> {
        self.require(DocKind::Ship)
    }

    pub fn require_log(&self) -> Result<(CaptainsLog, String), StoreError> {
        self.require(DocKind::CaptainsLog)
    }

    pub fn require_terminal(&self) -> Result<(TerminalSession, String), StoreError> {
        self.require(DocKind::Terminal)
    }
}
