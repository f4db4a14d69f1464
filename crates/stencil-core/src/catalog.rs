use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::SNIPPET_EXTENSION;
use crate::search::Ranker;
use crate::snippet::Snippet;

/// Discover snippet documents under `root`, ordered by fuzzy relevance to
/// `query`.
///
/// Every call walks the filesystem fresh; nothing is cached, so externally
/// edited snippets show up immediately. A document that fails to load is
/// skipped with a logged diagnostic rather than aborting the batch. A
/// missing root or an empty directory yields an empty vector.
pub fn discover(root: &Path, query: &str) -> Vec<Snippet> {
    let names = collect_snippet_names(root);
    debug!(root = %root.display(), count = names.len(), "scanned snippet directory");

    let ranked = Ranker::new().rank(query, names);

    let mut snippets = Vec::with_capacity(ranked.len());
    for name in ranked {
        let path = root.join(&name);
        match Snippet::load(&name, &path) {
            Ok(snippet) => snippets.push(snippet),
            Err(error) => warn!(path = %path.display(), %error, "skipping unloadable snippet"),
        }
    }

    snippets
}

/// Root-relative paths of all snippet files under `root`, sorted so the
/// pre-ranking order is deterministic regardless of directory walk order.
fn collect_snippet_names(root: &Path) -> Vec<String> {
    let mut names: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|ext| ext == SNIPPET_EXTENSION)
        })
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .ok()
                .map(|rel| rel.to_string_lossy().into_owned())
        })
        .collect();

    names.sort();
    names
}
