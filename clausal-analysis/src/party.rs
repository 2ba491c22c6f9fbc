//! Party lookup helpers and the party-identifier contract.

use serde::{Deserialize, Serialize};

use clausal::MentionCluster;

/// The first cluster containing `name` (exact match), or a singleton
/// fallback cluster holding only `name`.
pub fn cluster_for(clusters: &[MentionCluster], name: &str) -> MentionCluster {
    clusters
        .iter()
        .find(|cluster| cluster.contains(name))
        .cloned()
        .unwrap_or_else(|| MentionCluster::singleton(name))
}

/// The two negotiating parties as reported by the party-identifier
/// collaborator, with its raw confidence scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyPair {
    /// The counter-party ("them").
    pub them: String,
    /// The reader's party ("you").
    pub you: String,
    /// Raw identification scores in `[0, 14]`, them first.
    pub confidence: (f32, f32),
}

impl PartyPair {
    /// Both confidences as display percentages.
    pub fn normalized_confidence(&self) -> (u8, u8) {
        (
            normalize_confidence(self.confidence.0),
            normalize_confidence(self.confidence.1),
        )
    }
}

/// Normalize a raw party-identifier score (`[0, 14]`) to a percentage:
/// `min(100, round((raw / 14)^2 * 100))`.
pub fn normalize_confidence(raw: f32) -> u8 {
    let scaled = (raw / 14.0).powi(2) * 100.0;
    scaled.round().min(100.0) as u8
}
