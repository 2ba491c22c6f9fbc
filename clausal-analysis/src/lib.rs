//! Clause analyzers for contract text.
//!
//! Three sibling analyzers share one engine and differ only in their
//! grammar template and recognized result labels:
//!
//! - **Responsibility** - duties a party takes on ("Acme shall deliver")
//! - **Liability** - exposure and disclaimers ("IN NO EVENT WILL WEST BE
//!   LIABLE")
//! - **Termination** - rights to end the agreement ("Acme may terminate")
//!
//! An analyzer is constructed once per document with the POS-tagged
//! sentences, the coreference clusters, and the two negotiating parties.
//! Querying [`ClauseAnalyzer::results`] with a party mention (or
//! [`BOTH_PARTIES`]) renders that party's grammar, chunk-parses every
//! sentence, and collects `sentence index -> sublabel` findings; each key
//! is computed at most once and cached.
//!
//! ```
//! use clausal::TaggedWord;
//! use clausal_analysis::ClauseAnalyzer;
//!
//! let sentence = vec![
//!     TaggedWord::new("Acme", "NNP"),
//!     TaggedWord::new("shall", "MD"),
//!     TaggedWord::new("deliver", "VB"),
//! ];
//! let mut analyzer = ClauseAnalyzer::responsibility(vec![sentence], vec![], "Acme", "Zenith");
//! let findings = analyzer.results("Acme").unwrap();
//! assert_eq!(findings[&0], "ABSOLUTE_RESPONSIBILITY");
//! ```

mod analyzer;
mod party;
mod templates;

pub use analyzer::{AnalyzeError, AnalyzerKind, AnalyzerSpec, ClauseAnalyzer, BOTH_PARTIES};
pub use party::{cluster_for, normalize_confidence, PartyPair};

#[cfg(test)]
mod tests {
    mod analyzer;
    mod party;
    mod scenarios;
}
