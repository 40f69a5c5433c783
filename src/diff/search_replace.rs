use std::fmt;
use tracing::debug;

/// A literal search/replace pair
///
/// Matching is an exact substring test. No whitespace tolerance, no regex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution<'a> {
    /// Text to look for
    pub search: &'a str,
    /// Text every occurrence of `search` is replaced with
    pub replace: &'a str,
}

impl fmt::Display for Substitution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "<<<<<<< SEARCH")?;
        writeln!(f, "{}", self.search)?;
        writeln!(f, "=======")?;
        writeln!(f, "{}", self.replace)?;
        writeln!(f, ">>>>>>> REPLACE")
    }
}

impl<'a> Substitution<'a> {
    pub const fn new(search: &'a str, replace: &'a str) -> Self {
        Self { search, replace }
    }

    /// Whether `search` occurs verbatim in `content`
    pub fn is_present(&self, content: &str) -> bool {
        content.contains(self.search)
    }

    /// Replace every occurrence, returning `None` when there is nothing to replace
    pub fn apply(&self, content: &str) -> Option<String> {
        if !self.is_present(content) {
            return None;
        }
        let occurrences = content.matches(self.search).count();
        debug!("Replacing {} occurrence(s) of:\n{}", occurrences, self);
        Some(content.replace(self.search, self.replace))
    }
}

/// Result of folding a list of substitutions over some content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionResult {
    /// Content after every step ran
    pub content: String,
    /// How many of the substitutions found their search text
    pub matched: usize,
}

/// Apply substitutions left to right
///
/// Each step sees the output of the previous one, not the original text.
pub fn apply_in_order(content: &str, substitutions: &[Substitution<'_>]) -> SubstitutionResult {
    let mut updated = content.to_string();
    let mut matched = 0;

    for (index, substitution) in substitutions.iter().enumerate() {
        match substitution.apply(&updated) {
            Some(next) => {
                debug!("Substitution {} matched", index + 1);
                updated = next;
                matched += 1;
            }
            None => debug!("Substitution {} not found", index + 1),
        }
    }

    SubstitutionResult {
        content: updated,
        matched,
    }
}
