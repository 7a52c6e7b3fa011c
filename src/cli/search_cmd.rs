//! Content search across document files
//!
//! Runs ripgrep over the fixed document file names under a root, then
//! re-loads each hit to report which tags, topics or fleet names matched.

use std::path::Path;

use anyhow::Result;

use super::output::Output;
use crate::discovery::{FileSearch, RipgrepSearch};
use crate::domain::{CaptainsLog, Ship};
use crate::storage::{self, DocKind};

/// Per-file detail of what matched
#[derive(Debug, serde::Serialize)]
struct SearchHit {
    path: String,
    matched: Vec<String>,
}

pub fn run(output: &Output, root: &Path, query: &str) -> Result<()> {
    let searcher = RipgrepSearch::new()?;
    run_with(&searcher, output, root, query)
}

fn run_with(searcher: &dyn FileSearch, output: &Output, root: &Path, query: &str) -> Result<()> {
    output.verbose(&format!("Searching {} for '{}'", root.display(), query));
    let paths = searcher.search(root, query)?;

    let mut hits = Vec::new();
    for path in paths {
        hits.push(SearchHit {
            matched: matched_fields(&path, query)?,
            path: path.display().to_string(),
        });
    }

    if output.is_json() {
        output.data(&hits);
        return Ok(());
    }

    if hits.is_empty() {
        output.line("No matches");
        return Ok(());
    }

    for hit in &hits {
        output.line(&hit.path);
        for detail in &hit.matched {
            output.line(&format!("  {}", detail));
        }
    }
    Ok(())
}

/// Reports tags/topics/fleet names of a document that contain the query
fn matched_fields(path: &Path, query: &str) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    let query = query.to_lowercase();
    let contains = |value: &str| value.to_lowercase().contains(&query);

    let name = path.file_name().map(|n| n.to_string_lossy().into_owned());
    let mut matched = Vec::new();

    match name.as_deref() {
        Some(n) if n == DocKind::Ship.file_name() => {
            let (ship, _): (Ship, String) = storage::parse(&text)?;
            for tag in ship.tags.iter().filter(|t| contains(t)) {
                matched.push(format!("tag: {}", tag));
            }
            for fleet in ship.fleets.iter().filter(|f| contains(&f.name)) {
                matched.push(format!("fleet: {}", fleet.name));
            }
        }
        Some(n) if n == DocKind::CaptainsLog.file_name() => {
            let (log, _): (CaptainsLog, String) = storage::parse(&text)?;
            for topic in log.topics.iter().filter(|t| contains(t)) {
                matched.push(format!("topic: {}", topic));
            }
        }
        _ => {}
    }

    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::ToolError;
    use crate::storage::DockStore;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// In-memory stand-in for ripgrep
    struct FakeSearch(Vec<PathBuf>);

    impl FileSearch for FakeSearch {
        fn search(&self, _root: &Path, _query: &str) -> Result<Vec<PathBuf>, ToolError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn reports_matching_tags_and_fleets() {
        let dir = TempDir::new().unwrap();
        let store = DockStore::new(dir.path());

        let mut ship = Ship::new("uss-test", "demo");
        ship.add_tags(&["rust", "cli"]);
        ship.upsert_fleet("rust-armada", None, None, None);
        store
            .save(DocKind::Ship, &ship, &ship.initial_body())
            .unwrap();

        let matched = matched_fields(&store.path(DocKind::Ship), "rust").unwrap();
        assert_eq!(matched, vec!["tag: rust", "fleet: rust-armada"]);
    }

    #[test]
    fn reports_matching_topics() {
        let dir = TempDir::new().unwrap();
        let store = DockStore::new(dir.path());

        let mut log = CaptainsLog::new("uss-test");
        log.merge_topics(&["engines", "crew"]);
        store
            .save(DocKind::CaptainsLog, &log, &log.initial_body())
            .unwrap();

        let matched = matched_fields(&store.path(DocKind::CaptainsLog), "ENG").unwrap();
        assert_eq!(matched, vec!["topic: engines"]);
    }

    #[test]
    fn fake_searcher_drives_the_command() {
        let dir = TempDir::new().unwrap();
        let store = DockStore::new(dir.path());
        let ship = Ship::new("uss-test", "demo");
        store
            .save(DocKind::Ship, &ship, &ship.initial_body())
            .unwrap();

        let searcher = FakeSearch(vec![store.path(DocKind::Ship)]);
        let output = Output::new(crate::cli::OutputFormat::Text, false);
        run_with(&searcher, &output, dir.path(), "uss").unwrap();
    }
}
