//! Terminal session document model
//!
//! A terminal session is a saved list of named "rooms" (folder plus
//! optional command) for restoring a multi-pane working layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_folder() -> String {
    ".".to_string()
}

fn default_autostart() -> bool {
    true
}

/// One pane of a saved layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Working folder relative to the session directory
    #[serde(default = "default_folder")]
    pub folder: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    #[serde(default = "default_autostart")]
    pub autostart: bool,
}

impl Room {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            folder: default_folder(),
            command: None,
            autostart: default_autostart(),
        }
    }
}

/// A terminal session document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalSession {
    #[serde(default)]
    pub session_name: String,

    /// Refreshed on every room addition
    #[serde(default)]
    pub last_active: Option<DateTime<Utc>>,

    /// Rooms in creation order; names are not deduplicated
    #[serde(default)]
    pub rooms: Vec<Room>,
}

impl TerminalSession {
    /// Creates an empty session with the current time as `last_active`
    pub fn new(session_name: impl Into<String>) -> Self {
        Self {
            session_name: session_name.into(),
            last_active: Some(Utc::now()),
            rooms: Vec::new(),
        }
    }

    /// Initial body for a freshly created session document
    pub fn initial_body(&self) -> String {
        format!("# Terminal session: {}\n", self.session_name)
    }

    /// Appends a room and refreshes `last_active`
    pub fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
        self.last_active = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_room_defaults() {
        let room = Room::new("editor");
        assert_eq!(room.description, "");
        assert_eq!(room.folder, ".");
        assert_eq!(room.command, None);
        assert!(room.autostart);
    }

    #[test]
    fn add_room_appends_without_dedup() {
        let mut session = TerminalSession::new("default");
        session.add_room(Room::new("editor"));
        session.add_room(Room::new("editor"));
        assert_eq!(session.rooms.len(), 2);
    }

    #[test]
    fn add_room_refreshes_last_active() {
        let mut session = TerminalSession::new("default");
        let before = session.last_active;
        session.add_room(Room::new("editor"));
        assert!(session.last_active >= before);
    }
}
