//! Captain's log document model
//!
//! The log is an append-to-front chronological record: new entries are
//! prepended both to the frontmatter entry list and, as rendered markdown
//! sections, to the body. The two stay in lockstep because they are only
//! ever written together.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::stardate::stardate;

fn default_type() -> String {
    "note".to_string()
}

fn default_impact() -> String {
    "low".to_string()
}

/// A single log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: NaiveDate,

    /// `<year>.<day-of-year>` derived from `date`
    pub stardate: String,

    #[serde(rename = "type", default = "default_type")]
    pub entry_type: String,

    #[serde(default = "default_impact")]
    pub impact: String,

    pub title: String,
}

impl LogEntry {
    /// Creates an entry for the given date, defaulting type and impact
    pub fn new(date: NaiveDate, title: impl Into<String>) -> Self {
        Self {
            date,
            stardate: stardate(date),
            entry_type: default_type(),
            impact: default_impact(),
            title: title.into(),
        }
    }

    /// Renders the markdown section for this entry
    pub fn render_section(&self, content: &str) -> String {
        format!(
            "## {} - {}\n\n**Impact:** {} | **Type:** {}\n\n{}\n\n---\n",
            self.date,
            self.title,
            self.impact.to_uppercase(),
            self.entry_type,
            content,
        )
    }
}

/// A captain's log document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptainsLog {
    /// Ship name captured at creation time
    #[serde(default)]
    pub ship: String,

    /// Topic set: union-merged, deduplicated, first-occurrence order
    #[serde(default)]
    pub topics: Vec<String>,

    /// Entries, newest first
    #[serde(default)]
    pub entries: Vec<LogEntry>,
}

impl CaptainsLog {
    /// Creates an empty log for the named ship
    pub fn new(ship: impl Into<String>) -> Self {
        Self {
            ship: ship.into(),
            topics: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Initial body for a freshly created log document
    pub fn initial_body(&self) -> String {
        format!("# Captain's Log: {}\n", self.ship)
    }

    /// Prepends an entry, keeping the newest-first invariant
    pub fn prepend_entry(&mut self, entry: LogEntry) {
        self.entries.insert(0, entry);
    }

    /// Unions new topics into the topic set
    pub fn merge_topics<S: AsRef<str>>(&mut self, topics: &[S]) {
        for topic in topics {
            let topic = topic.as_ref();
            if !self.topics.iter().any(|t| t == topic) {
                self.topics.push(topic.to_string());
            }
        }
    }
}

/// Prepends a rendered entry section to an existing body
///
/// Section order in the body always matches entry order in the
/// frontmatter, so the newest section goes first.
pub fn prepend_section(section: &str, body: &str) -> String {
    format!("{}\n{}", section.trim_end(), body)
}
