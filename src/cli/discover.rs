//! Ship discovery across neighboring directories
//!
//! Scans the target directory and its immediate subdirectories for ship
//! documents and prints a one-block summary per ship.

use std::path::Path;

use anyhow::Result;

use super::output::Output;
use crate::discovery::{FindScan, ShipFinder};
use crate::domain::Ship;
use crate::storage::DockStore;

#[derive(Debug, serde::Serialize)]
struct ShipSummary {
    directory: String,
    shipname: String,
    status: String,
    tags: Vec<String>,
    fleets: Vec<String>,
    star: String,
}

pub fn run(dir: &Path, output: &Output) -> Result<()> {
    let finder = FindScan::new()?;
    run_with(&finder, dir, output)
}

fn run_with(finder: &dyn ShipFinder, dir: &Path, output: &Output) -> Result<()> {
    let paths = finder.find_ships(dir)?;
    output.verbose(&format!("Found {} ship document(s)", paths.len()));

    let mut summaries = Vec::new();
    for path in paths {
        let ship_dir = path.parent().unwrap_or(dir);
        let store = DockStore::new(ship_dir);
        let (ship, _body) = store.require_ship()?;
        summaries.push(summarize(ship_dir, &ship));
    }

    if output.is_json() {
        output.data(&summaries);
        return Ok(());
    }

    if summaries.is_empty() {
        output.line("No ships found");
        return Ok(());
    }

    for summary in &summaries {
        let star = if summary.star.is_empty() {
            String::new()
        } else {
            format!(" {}", summary.star)
        };
        output.line(&format!(
            "{}{} [{}] ({})",
            summary.shipname, star, summary.status, summary.directory
        ));
        if !summary.tags.is_empty() {
            output.line(&format!("  tags: {}", summary.tags.join(", ")));
        }
        if !summary.fleets.is_empty() {
            output.line(&format!("  fleets: {}", summary.fleets.join(", ")));
        }
        output.blank();
    }
    Ok(())
}

fn summarize(dir: &Path, ship: &Ship) -> ShipSummary {
    ShipSummary {
        directory: dir.display().to_string(),
        shipname: ship.shipname.clone(),
        status: ship.status.clone(),
        tags: ship.tags.clone(),
        fleets: ship
            .fleets
            .iter()
            .map(|f| format!("{} (rank {})", f.name, f.rank))
            .collect(),
        star: ship.flagship_star().to_string(),
    }
}
