//! Disallowed-term lookup for comments.

/// Finds disallowed terms in a comment.
pub trait ProfanityChecker: Send + Sync {
    /// Disallowed terms contained in `comment`, in the checker's own term
    /// order. Empty when the comment is clean.
    fn disallowed_terms(&self, comment: &str) -> Vec<String>;

    fn is_clean(&self, comment: &str) -> bool {
        self.disallowed_terms(comment).is_empty()
    }
}
