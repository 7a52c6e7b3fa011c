//! Ship CLI commands

use std::path::Path;

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use crate::domain::Ship;
use crate::storage::{DocKind, DockStore};

#[derive(Subcommand)]
pub enum ShipCommands {
    /// Create the ship document for this directory
    Init {
        /// Overwrite an existing ship document
        #[arg(long)]
        force: bool,

        /// Ship name (defaults to the directory name)
        #[arg(long)]
        shipname: Option<String>,

        /// One-line purpose statement
        #[arg(long)]
        purpose: Option<String>,
    },

    /// Add tags
    AddTag {
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Remove tags (absent tags are ignored)
    RemoveTag {
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Add or update a fleet membership
    FleetAdd {
        /// Fleet name
        name: String,

        /// Rank within the fleet (non-negative)
        #[arg(long)]
        rank: Option<u32>,

        /// Star glyph shown in summaries
        #[arg(long)]
        star: Option<String>,

        /// Role within the fleet
        #[arg(long)]
        role: Option<String>,
    },

    /// Remove a fleet membership
    FleetRemove {
        /// Fleet name
        name: String,
    },

    /// Show the ship document
    Show,
}

pub fn run(cmd: ShipCommands, dir: &Path, output: &Output) -> Result<()> {
    match cmd {
        ShipCommands::Init {
            force,
            shipname,
            purpose,
        } => init(dir, output, force, shipname, purpose),
        ShipCommands::AddTag { tags } => add_tags(dir, output, &tags),
        ShipCommands::RemoveTag { tags } => remove_tags(dir, output, &tags),
        ShipCommands::FleetAdd {
            name,
            rank,
            star,
            role,
        } => fleet_add(dir, output, &name, rank, star, role),
        ShipCommands::FleetRemove { name } => fleet_remove(dir, output, &name),
        ShipCommands::Show => show(dir, output),
    }
}

/// Name to use for a ship when none is given: the directory's own name
pub fn directory_name(dir: &Path) -> String {
    let resolved = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ship".to_string())
}

fn init(
    dir: &Path,
    output: &Output,
    force: bool,
    shipname: Option<String>,
    purpose: Option<String>,
) -> Result<()> {
    let store = DockStore::new(dir);
    let shipname = shipname.unwrap_or_else(|| directory_name(dir));
    let purpose = purpose.unwrap_or_else(|| "A new ship".to_string());

    let ship = Ship::new(shipname, purpose);
    store.create(DocKind::Ship, &ship, &ship.initial_body(), force)?;

    output.success(&format!("Ship '{}' commissioned", ship.shipname));
    Ok(())
}

pub fn add_tags(dir: &Path, output: &Output, tags: &[String]) -> Result<()> {
    let store = DockStore::new(dir);
    let (mut ship, body) = store.require_ship()?;

    ship.add_tags(tags);
    store.save(DocKind::Ship, &ship, &body)?;

    output.success(&format!("Tags: {}", ship.tags.join(", ")));
    Ok(())
}

pub fn remove_tags(dir: &Path, output: &Output, tags: &[String]) -> Result<()> {
    let store = DockStore::new(dir);
    let (mut ship, body) = store.require_ship()?;

    ship.remove_tags(tags);
    store.save(DocKind::Ship, &ship, &body)?;

    if ship.tags.is_empty() {
        output.success("No tags remaining");
    } else {
        output.success(&format!("Remaining tags: {}", ship.tags.join(", ")));
    }
    Ok(())
}

pub fn fleet_add(
    dir: &Path,
    output: &Output,
    name: &str,
    rank: Option<u32>,
    star: Option<String>,
    role: Option<String>,
) -> Result<()> {
    let store = DockStore::new(dir);
    let (mut ship, body) = store.require_ship()?;

    ship.upsert_fleet(name, rank, star, role);
    store.save(DocKind::Ship, &ship, &body)?;

    output.success(&format!(
        "Ship '{}' assigned to fleet '{}'",
        ship.shipname, name
    ));
    Ok(())
}

fn fleet_remove(dir: &Path, output: &Output, name: &str) -> Result<()> {
    let store = DockStore::new(dir);
    let (mut ship, body) = store.require_ship()?;

    ship.remove_fleet(name);
    store.save(DocKind::Ship, &ship, &body)?;

    output.success(&format!("Ship '{}' left fleet '{}'", ship.shipname, name));
    Ok(())
}

fn show(dir: &Path, output: &Output) -> Result<()> {
    let store = DockStore::new(dir);
    let (ship, _body) = store.require_ship()?;

    if output.is_json() {
        output.data(&ship);
        return Ok(());
    }

    output.line(&format!("Ship:    {}", ship.shipname));
    output.line(&format!("Purpose: {}", ship.purpose));
    output.line(&format!("Status:  {}", ship.status));
    if let Some(created) = ship.created {
        output.line(&format!("Created: {}", created));
    }
    if !ship.tech_stack.is_empty() {
        output.line(&format!("Stack:   {}", ship.tech_stack.join(", ")));
    }
    output.line(&format!("Tags:    {}", ship.tags.join(", ")));

    if !ship.fleets.is_empty() {
        output.line("Fleets:");
        for fleet in &ship.fleets {
            let star = fleet.star.as_deref().unwrap_or("");
            output.line(&format!(
                "  {} {} (rank {}, {})",
                star, fleet.name, fleet.rank, fleet.role
            ));
        }
    }

    if !ship.commands.is_empty() {
        output.line("Commands:");
        for (name, command) in &ship.commands {
            output.line(&format!("  {}: {}", name, command));
        }
    }

    Ok(())
}
