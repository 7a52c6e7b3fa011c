//! Terminal session CLI commands

use std::path::Path;

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use crate::domain::{Room, TerminalSession};
use crate::storage::{DocKind, DockStore};

#[derive(Subcommand)]
pub enum TerminalCommands {
    /// Create the terminal session for this directory
    Init {
        /// Overwrite an existing session
        #[arg(long)]
        force: bool,

        /// Session name
        #[arg(long, default_value = "default")]
        session_name: String,
    },

    /// Append a room to the session
    Add {
        /// Room name
        name: String,

        /// Room description
        #[arg(long, default_value = "")]
        description: String,

        /// Working folder relative to this directory
        #[arg(long, default_value = ".")]
        folder: String,

        /// Command to run in the room
        #[arg(long)]
        command: Option<String>,

        /// Start the room automatically on restore
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        autostart: bool,
    },

    /// List rooms in stored order
    List,

    /// Print instructions for restoring the saved layout
    Restore,
}

pub fn run(cmd: TerminalCommands, dir: &Path, output: &Output) -> Result<()> {
    match cmd {
        TerminalCommands::Init { force, session_name } => init(dir, output, force, session_name),
        TerminalCommands::Add {
            name,
            description,
            folder,
            command,
            autostart,
        } => add(dir, output, name, description, folder, command, autostart),
        TerminalCommands::List => list(dir, output),
        TerminalCommands::Restore => restore(dir, output),
    }
}

fn init(dir: &Path, output: &Output, force: bool, session_name: String) -> Result<()> {
    let store = DockStore::new(dir);
    let session = TerminalSession::new(session_name);
    store.create(DocKind::Terminal, &session, &session.initial_body(), force)?;

    output.success(&format!("Terminal session '{}' saved", session.session_name));
    Ok(())
}

fn add(
    dir: &Path,
    output: &Output,
    name: String,
    description: String,
    folder: String,
    command: Option<String>,
    autostart: bool,
) -> Result<()> {
    let store = DockStore::new(dir);
    let (mut session, body) = store.require_terminal()?;

    let room = Room {
        name,
        description,
        folder,
        command,
        autostart,
    };
    let room_name = room.name.clone();
    session.add_room(room);

    store.save(DocKind::Terminal, &session, &body)?;

    output.success(&format!(
        "Room '{}' added to session '{}'",
        room_name, session.session_name
    ));
    Ok(())
}

fn list(dir: &Path, output: &Output) -> Result<()> {
    let store = DockStore::new(dir);
    let (session, _body) = store.require_terminal()?;

    if output.is_json() {
        output.data(&session);
        return Ok(());
    }

    output.line(&format!("Session: {}", session.session_name));
    if session.rooms.is_empty() {
        output.line("No rooms saved");
        return Ok(());
    }

    for (i, room) in session.rooms.iter().enumerate() {
        let mut line = format!("{}. {} ({})", i + 1, room.name, room.folder);
        if !room.description.is_empty() {
            line.push_str(&format!(" - {}", room.description));
        }
        output.line(&line);
    }
    Ok(())
}

fn restore(dir: &Path, output: &Output) -> Result<()> {
    let store = DockStore::new(dir);
    let (session, _body) = store.require_terminal()?;

    if session.rooms.is_empty() {
        output.success("Nothing to restore: the session has no rooms");
        return Ok(());
    }

    let base = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());

    output.line(&format!("To restore session '{}':", session.session_name));
    for room in &session.rooms {
        let folder = Path::new(&room.folder);
        let resolved = if folder.is_absolute() {
            folder.to_path_buf()
        } else {
            base.join(folder)
        };

        let mut line = format!("  {}: cd {}", room.name, resolved.display());
        if let Some(command) = &room.command {
            line.push_str(&format!(" && {}", command));
        }
        if !room.autostart {
            line.push_str("  (manual start)");
        }
        output.line(&line);
    }
    Ok(())
}
