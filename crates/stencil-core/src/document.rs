use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, StencilError};

const METADATA_FENCE: &str = "---";

/// Declared metadata of a snippet document. Every key is optional; a document
/// without a metadata block is plain template text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub vars: Vec<VarSpec>,
}

/// One placeholder declaration. Declared as an array of tables so the
/// document carries declaration order, which is also the resolution order.
#[derive(Debug, Clone, Deserialize)]
pub struct VarSpec {
    pub name: String,
    pub label: String,
    pub default: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Document {
    pub metadata: Metadata,
    pub body: String,
}

/// Load a snippet document from disk, splitting metadata from template body
pub fn load(path: &Path) -> Result<Document> {
    let raw = fs::read_to_string(path)?;
    parse(&raw).map_err(|message| StencilError::Load {
        path: path.to_path_buf(),
        message,
    })
}

/// Split raw document text into an optional TOML metadata block, fenced by
/// `---` lines at the top of the file, and the template body after it.
fn parse(raw: &str) -> std::result::Result<Document, String> {
    if raw.lines().next().map(str::trim_end) != Some(METADATA_FENCE) {
        return Ok(Document {
            metadata: Metadata::default(),
            body: raw.to_string(),
        });
    }

    let after_open = &raw[raw.find('\n').map(|i| i + 1).unwrap_or(raw.len())..];
    let (header, body) =
        split_at_closing_fence(after_open).ok_or_else(|| "unterminated metadata block".to_string())?;

    let metadata: Metadata = toml::from_str(header).map_err(|e| e.to_string())?;

    Ok(Document {
        metadata,
        body: body.to_string(),
    })
}

fn split_at_closing_fence(text: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.trim_end() == METADATA_FENCE {
            return Some((&text[..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}
