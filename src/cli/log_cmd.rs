//! Captain's log CLI commands

use std::path::Path;

use anyhow::Result;
use chrono::Local;
use clap::Subcommand;

use super::output::Output;
use super::ship::directory_name;
use crate::domain::{prepend_section, CaptainsLog, LogEntry};
use crate::storage::{DocKind, DockStore};

#[derive(Subcommand)]
pub enum LogCommands {
    /// Create the captain's log for this directory
    Init {
        /// Overwrite an existing log
        #[arg(long)]
        force: bool,
    },

    /// Add a log entry
    Add {
        /// Entry title
        title: String,

        /// Impact level (low, medium, high, ...)
        #[arg(long, default_value = "low")]
        impact: String,

        /// Entry type (note, decision, incident, ...)
        #[arg(long = "type", default_value = "note")]
        entry_type: String,

        /// Free-text entry content
        #[arg(long, default_value = "")]
        content: String,

        /// Comma-separated topics to merge into the topic set
        #[arg(long)]
        topics: Option<String>,
    },
}

pub fn run(cmd: LogCommands, dir: &Path, output: &Output) -> Result<()> {
    match cmd {
        LogCommands::Init { force } => init(dir, output, force),
        LogCommands::Add {
            title,
            impact,
            entry_type,
            content,
            topics,
        } => add(dir, output, &title, impact, entry_type, &content, topics.as_deref()),
    }
}

fn init(dir: &Path, output: &Output, force: bool) -> Result<()> {
    let store = DockStore::new(dir);

    // ship name comes from the ship document when there is one
    let ship_name = match store.load_ship()? {
        Some((ship, _)) => ship.shipname,
        None => directory_name(dir),
    };

    let log = CaptainsLog::new(ship_name);
    store.create(DocKind::CaptainsLog, &log, &log.initial_body(), force)?;

    output.success(&format!("Captain's log opened for '{}'", log.ship));
    Ok(())
}

fn add(
    dir: &Path,
    output: &Output,
    title: &str,
    impact: String,
    entry_type: String,
    content: &str,
    topics: Option<&str>,
) -> Result<()> {
    let store = DockStore::new(dir);
    let (mut log, body) = store.require_log()?;

    let mut entry = LogEntry::new(Local::now().date_naive(), title);
    entry.impact = impact;
    entry.entry_type = entry_type;

    if let Some(topics) = topics {
        let tokens: Vec<&str> = topics
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        log.merge_topics(&tokens);
    }

    let section = entry.render_section(content);
    let stardate = entry.stardate.clone();
    log.prepend_entry(entry);
    let body = prepend_section(&section, &body);

    store.save(DocKind::CaptainsLog, &log, &body)?;

    output.success(&format!("Log entry recorded (stardate {})", stardate));
    Ok(())
}
