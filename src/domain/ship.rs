//! Ship document model
//!
//! The ship document records a directory's identity: name, purpose,
//! tags and fleet memberships. It is stored as a markdown file with
//! YAML frontmatter.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_status() -> String {
    "active".to_string()
}

fn default_role() -> String {
    "member".to_string()
}

/// Membership of a ship in a named fleet
///
/// `name` is the unique key within a ship's fleet list. `star` is an
/// optional single-glyph decoration shown in summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetMembership {
    pub name: String,

    #[serde(default)]
    pub rank: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star: Option<String>,

    #[serde(default = "default_role")]
    pub role: String,
}

impl FleetMembership {
    /// Creates a membership with default rank and role
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rank: 0,
            star: None,
            role: default_role(),
        }
    }
}

/// A ship document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    #[serde(default)]
    pub shipname: String,

    #[serde(default)]
    pub purpose: String,

    #[serde(default)]
    pub tech_stack: Vec<String>,

    /// Free-form status string, "active" for new ships
    #[serde(default = "default_status")]
    pub status: String,

    /// Creation date (YYYY-MM-DD)
    #[serde(default)]
    pub created: Option<NaiveDate>,

    /// Tag set: insertion order preserved, no duplicates
    #[serde(default)]
    pub tags: Vec<String>,

    /// Fleet memberships, ordered, unique by name
    #[serde(default)]
    pub fleets: Vec<FleetMembership>,

    /// Arbitrary named commands, preserved verbatim
    #[serde(default)]
    pub commands: BTreeMap<String, String>,
}

impl Ship {
    /// Creates a new ship with today's date and empty collections
    pub fn new(shipname: impl Into<String>, purpose: impl Into<String>) -> Self {
        Self {
            shipname: shipname.into(),
            purpose: purpose.into(),
            tech_stack: Vec::new(),
            status: default_status(),
            created: Some(Local::now().date_naive()),
            tags: Vec::new(),
            fleets: Vec::new(),
            commands: BTreeMap::new(),
        }
    }

    /// Initial markdown body for a freshly created ship document
    pub fn initial_body(&self) -> String {
        format!("# {}\n\n## Purpose\n\n{}\n", self.shipname, self.purpose)
    }

    /// Unions new tags into the tag set
    ///
    /// Duplicates are dropped; first-occurrence order is preserved.
    pub fn add_tags<S: AsRef<str>>(&mut self, tags: &[S]) {
        for tag in tags {
            let tag = tag.as_ref();
            if !self.tags.iter().any(|t| t == tag) {
                self.tags.push(tag.to_string());
            }
        }
    }

    /// Removes tags from the tag set
    ///
    /// Tags not present are silently ignored.
    pub fn remove_tags<S: AsRef<str>>(&mut self, tags: &[S]) {
        self.tags
            .retain(|t| !tags.iter().any(|r| r.as_ref() == t));
    }

    /// Adds or updates a fleet membership
    ///
    /// Matches by fleet name. On an existing membership, only the fields
    /// that were explicitly supplied are overwritten; omitted options keep
    /// their prior values. A new membership gets defaults for anything
    /// omitted.
    pub fn upsert_fleet(
        &mut self,
        name: &str,
        rank: Option<u32>,
        star: Option<String>,
        role: Option<String>,
    ) {
        if let Some(existing) = self.fleets.iter_mut().find(|f| f.name == name) {
            if let Some(rank) = rank {
                existing.rank = rank;
            }
            if let Some(star) = star {
                existing.star = Some(star);
            }
            if let Some(role) = role {
                existing.role = role;
            }
        } else {
            let mut membership = FleetMembership::new(name);
            if let Some(rank) = rank {
                membership.rank = rank;
            }
            membership.star = star;
            if let Some(role) = role {
                membership.role = role;
            }
            self.fleets.push(membership);
        }
    }

    /// Removes a fleet membership by name; absent names are a no-op
    pub fn remove_fleet(&mut self, name: &str) {
        self.fleets.retain(|f| f.name != name);
    }

    /// Returns the star of the highest-rank fleet membership
    ///
    /// Ties are broken by first occurrence in stored order. Returns an
    /// empty string when there are no fleets or the top membership has
    /// no star.
    pub fn flagship_star(&self) -> &str {
        let mut best: Option<&FleetMembership> = None;
        for fleet in &self.fleets {
            match best {
                Some(b) if fleet.rank <= b.rank => {}
                _ => best = Some(fleet),
            }
        }
        best.and_then(|f| f.star.as_deref()).unwrap_or("")
    }
}
