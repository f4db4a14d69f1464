use crate::error::Result;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const SNIPPET_EXTENSION: &str = "j2";
pub const DEFAULT_ICON: &str = "images/icon.png";
pub const SNIPPETS_DIR_ENV: &str = "STENCIL_SNIPPETS";

/// Get the snippet directory searched by default
pub fn get_snippets_dir() -> PathBuf {
    if let Ok(dir) = env::var(SNIPPETS_DIR_ENV) {
        return PathBuf::from(dir);
    }

    env::var("HOME")
        .map(|home| PathBuf::from(home).join(".stencil").join("snippets"))
        .unwrap_or_else(|_| PathBuf::from(".stencil/snippets"))
}

/// Ensure the snippet directory exists
pub fn ensure_snippets_dir() -> Result<PathBuf> {
    let dir = get_snippets_dir();
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}
