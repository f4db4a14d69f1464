use std::path::PathBuf;

use serde::Serialize;

use crate::config::{DEFAULT_ICON, SNIPPET_EXTENSION};
use crate::document::{self, Document};
use crate::error::Result;
use crate::variables::{Variable, VariableStore};

const DESCRIPTION_PREVIEW_CHARS: usize = 40;

/// A loaded snippet: display fields computed once from the document, plus
/// the live variable-resolution state for one usage session.
#[derive(Debug, Clone)]
pub struct Snippet {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub path: PathBuf,
    pub variables: VariableStore,
}

impl Snippet {
    /// Load a snippet document. `name` is the fallback display name (the
    /// document's root-relative path) used when the metadata declares none.
    pub fn load(name: &str, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let doc = document::load(&path)?;
        Ok(Self::from_document(name, path, doc))
    }

    fn from_document(name: &str, path: PathBuf, doc: Document) -> Self {
        let Document { metadata, body } = doc;

        let name = metadata.name.unwrap_or_else(|| strip_extension(name));
        let description = metadata
            .description
            .unwrap_or_else(|| body.chars().take(DESCRIPTION_PREVIEW_CHARS).collect());
        let icon = metadata.icon.unwrap_or_else(|| DEFAULT_ICON.to_string());
        let variables = VariableStore::from_specs(&metadata.vars);

        Self {
            name,
            description,
            icon,
            path,
            variables,
        }
    }

    /// First declared variable still waiting for a value, if any
    pub fn next_unresolved(&self) -> Option<&Variable> {
        self.variables.next_unresolved()
    }

    /// Record a value for a declared variable
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.variables.set_value(name, value)
    }

    /// Effective value by name, empty for undeclared names
    pub fn effective_value(&self, name: &str) -> String {
        self.variables.effective_value(name)
    }

    pub fn summary(&self) -> SnippetSummary {
        SnippetSummary {
            name: self.name.clone(),
            description: self.description.clone(),
            icon: self.icon.clone(),
            path: self.path.clone(),
        }
    }
}

/// Serializable discovery record for one snippet
#[derive(Debug, Clone, Serialize)]
pub struct SnippetSummary {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub path: PathBuf,
}

fn strip_extension(name: &str) -> String {
    let suffix = format!(".{}", SNIPPET_EXTENSION);
    name.strip_suffix(&suffix).unwrap_or(name).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_snippet(dir: &TempDir, rel: &str, content: &str) -> PathBuf {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn defaults_derive_from_path_and_body() {
        let dir = TempDir::new().unwrap();
        let path = write_snippet(
            &dir,
            "react/component.j2",
            "A somewhat long template body that keeps going past forty characters\n",
        );

        let snippet = Snippet::load("react/component.j2", &path).unwrap();
        assert_eq!(snippet.name, "react/component");
        assert_eq!(snippet.description.chars().count(), 40);
        assert_eq!(snippet.icon, DEFAULT_ICON);
        assert!(snippet.variables.is_empty());
    }

    #[test]
    fn metadata_overrides_derived_fields() {
        let dir = TempDir::new().unwrap();
        let path = write_snippet(
            &dir,
            "note.j2",
            concat!(
                "---\n",
                "name = \"Daily Note\"\n",
                "description = \"Journal header\"\n",
                "icon = \"images/note.png\"\n",
                "[[vars]]\n",
                "name = \"mood\"\n",
                "label = \"Mood\"\n",
                "---\n",
                "# {{ date(\"today\") }}\n",
            ),
        );

        let snippet = Snippet::load("note.j2", &path).unwrap();
        assert_eq!(snippet.name, "Daily Note");
        assert_eq!(snippet.description, "Journal header");
        assert_eq!(snippet.icon, "images/note.png");
        assert_eq!(snippet.variables.len(), 1);
    }

    #[test]
    fn reload_yields_identical_display_fields() {
        let dir = TempDir::new().unwrap();
        let path = write_snippet(&dir, "go.j2", "package {{ vars(\"pkg\") }}\n");

        let first = Snippet::load("go.j2", &path).unwrap();
        let second = Snippet::load("go.j2", &path).unwrap();
        assert_eq!(first.name, second.name);
        assert_eq!(first.description, second.description);
        assert_eq!(first.icon, second.icon);
    }
}
