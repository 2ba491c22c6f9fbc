//! POS-tagged token value type shared across the engine.

use serde::{Deserialize, Serialize};

/// A single token with its part-of-speech tag, as produced by the
/// tokenizer/tagger collaborator.
///
/// The engine never inspects tag semantics itself; tags are opaque strings
/// matched by grammar rule constraints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedWord {
    /// Surface text of the token.
    pub word: String,
    /// Part-of-speech tag (e.g. `NNP`, `MD`, `VB`).
    pub tag: String,
}

impl TaggedWord {
    /// Create a tagged token.
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}
