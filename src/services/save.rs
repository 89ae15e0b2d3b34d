//! Local scoped save — write-only persistence of a diagram-plus-source
//! pair under a timestamp-derived key.
//!
//! No read-back, migration, or eviction is defined; this is a convenience
//! feature and imposes no invariant on the rest of the system.

use std::path::Path;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("save directory create failed: {0}")]
    CreateDir(std::io::Error),

    #[error("save payload serialize failed: {0}")]
    Serialize(serde_json::Error),

    #[error("save write failed: {0}")]
    Write(std::io::Error),
}

/// The persisted payload: the diagram source and the raw architecture text
/// it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedDiagram {
    pub diagram: String,
    pub raw: String,
}

/// Serialize `{ diagram, raw }` as pretty JSON under a timestamp-derived
/// key in `dir`, creating the directory if needed. Returns the key.
///
/// # Errors
///
/// Returns a [`SaveError`] if the directory or file cannot be written.
pub fn save_diagram(dir: &Path, diagram: &str, raw: &str) -> Result<String, SaveError> {
    std::fs::create_dir_all(dir).map_err(SaveError::CreateDir)?;

    let key = save_key(OffsetDateTime::now_utc());
    let payload = SavedDiagram { diagram: diagram.to_owned(), raw: raw.to_owned() };
    let json = serde_json::to_string_pretty(&payload).map_err(SaveError::Serialize)?;

    std::fs::write(dir.join(format!("{key}.json")), json).map_err(SaveError::Write)?;
    Ok(key)
}

/// `diagram-<timestamp>`, with colons flattened so the key doubles as a
/// portable file name.
fn save_key(now: OffsetDateTime) -> String {
    let stamp = now
        .format(&Rfc3339)
        .unwrap_or_else(|_| now.unix_timestamp().to_string());
    format!("diagram-{}", stamp.replace(':', "-"))
}

#[cfg(test)]
#[path = "save_test.rs"]
mod tests;
