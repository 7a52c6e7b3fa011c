//! Storage layer: frontmatter codec and per-directory document store

mod frontmatter;
mod store;

pub use frontmatter::{parse, render, FrontmatterError};
pub use store::{DocKind, DockStore, StoreError};
