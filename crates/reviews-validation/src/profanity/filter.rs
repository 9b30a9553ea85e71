use aho_corasick::AhoCorasick;

use reviews_core::errors::ConfigError;
use reviews_core::ProfanityChecker;

/// Case-insensitive substring matcher over a fixed term list.
///
/// All terms are searched in one pass. Matches are reported in term-list
/// order, each term at most once.
#[derive(Debug, Clone)]
pub struct ProfanityFilter {
    terms: Vec<String>,
    matcher: AhoCorasick,
}

impl ProfanityFilter {
    pub fn new<I, S>(terms: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        if terms.iter().any(|t| t.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "content.profanities".to_string(),
                message: "terms must not be blank".to_string(),
            });
        }
        let patterns: Vec<String> = terms.iter().map(|t| t.to_lowercase()).collect();
        let matcher = AhoCorasick::new(&patterns).map_err(|e| ConfigError::ValidationFailed {
            field: "content.profanities".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { terms, matcher })
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Terms found in `comment`.
    pub fn find(&self, comment: &str) -> Vec<String> {
        let haystack = comment.to_lowercase();
        let mut hits = vec![false; self.terms.len()];
        for m in self.matcher.find_overlapping_iter(&haystack) {
            hits[m.pattern().as_usize()] = true;
        }
        self.terms
            .iter()
            .zip(hits)
            .filter(|(_, hit)| *hit)
            .map(|(term, _)| term.clone())
            .collect()
    }
}

impl ProfanityChecker for ProfanityFilter {
    fn disallowed_terms(&self, comment: &str) -> Vec<String> {
        self.find(comment)
    }
}
