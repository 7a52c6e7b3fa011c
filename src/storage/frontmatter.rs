//! Frontmatter codec
//!
//! Documents are a YAML header between `---` delimiter lines followed by
//! a free-text markdown body. A document without a header is legal: the
//! metadata is then whatever the target type's field defaults say.
//!
//! Rendering is round-trip stable: `render` output fed back through
//! `parse` yields the same metadata and body, and rendering those again
//! reproduces the bytes.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("Frontmatter opened with '---' but never closed")]
    Unterminated,

    #[error("Malformed frontmatter: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Raw split of a document into header and body
enum Split<'a> {
    /// Leading `---` block present
    Document { header: &'a str, body: &'a str },
    /// No header; the whole text is body
    BodyOnly(&'a str),
}

fn split(text: &str) -> Result<Split<'_>, FrontmatterError> {
    let Some(rest) = text.strip_prefix("---\n") else {
        return Ok(Split::BodyOnly(text));
    };

    // closing delimiter must sit on its own line
    let (header, after) = if let Some(r) = rest.strip_prefix("---") {
        ("", r)
    } else {
        match rest.find("\n---") {
            Some(pos) => (&rest[..pos + 1], &rest[pos + 4..]),
            None => return Err(FrontmatterError::Unterminated),
        }
    };

    let body = after.strip_prefix('\n').unwrap_or(after);
    Ok(Split::Document { header, body })
}

/// Parses a document into typed metadata and its markdown body
pub fn parse<T: DeserializeOwned>(text: &str) -> Result<(T, String), FrontmatterError> {
    let (header, body) = match split(text)? {
        Split::Document { header, body } => (header, body),
        Split::BodyOnly(body) => ("", body),
    };

    let yaml = if header.trim().is_empty() { "{}" } else { header };
    let meta = serde_yaml::from_str(yaml)?;
    Ok((meta, body.trim().to_string()))
}

/// Renders typed metadata and a body back into document text
pub fn render<T: Serialize>(meta: &T, body: &str) -> Result<String, FrontmatterError> {
    let yaml = serde_yaml::to_string(meta)?;
    Ok(format!("---\n{}---\n\n{}\n", yaml, body.trim()))
}
