//! Fuzzy ranking of snippet candidates against a query string, built on the
//! Smith-Waterman matcher from nucleo.

use nucleo_matcher::{Config, Matcher, Utf32String};

pub struct Ranker {
    matcher: Matcher,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ranker {
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
        }
    }

    /// Fuzzy relevance of one candidate; 0 when nothing matches
    pub fn score(&mut self, query: &str, candidate: &str) -> u32 {
        if query.is_empty() {
            return 0;
        }

        let haystack = Utf32String::from(candidate);
        let needle = Utf32String::from(query);

        self.matcher
            .fuzzy_match(haystack.slice(..), needle.slice(..))
            .map(|score| score as u32)
            .unwrap_or(0)
    }

    /// Reorder `items` by descending relevance to `query`.
    ///
    /// Always a permutation of the input. The sort is stable, so equal
    /// scores (including every item under an empty query) keep their input
    /// order.
    pub fn rank(&mut self, query: &str, items: Vec<String>) -> Vec<String> {
        let mut scored: Vec<(u32, String)> = items
            .into_iter()
            .map(|item| (self.score(query, &item), item))
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));

        scored.into_iter().map(|(_, item)| item).collect()
    }
}
