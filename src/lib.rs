//! Chunk-grammar engine for party-attributed clause extraction.
//!
//! `clausal` is the symbolic core shared by the analysis plugins:
//!
//! - [`Mention`] / [`MentionCluster`] - textual aliases of a party and the
//!   coreference groups that tie them together
//! - [`PartyPattern`] - whole-word, case-insensitive alternation over a
//!   party's aliases
//! - [`GrammarTemplateRenderer`] - substitutes party alternations into a
//!   grammar template over the fixed variable set `{party_mentions, both}`
//! - [`GrammarRuleSet`] - the textual chunk-rule syntax, compiled once
//! - [`ChunkParser`] - a deterministic rule-based shallow parser producing a
//!   [`ChunkTree`] over POS-tagged tokens
//!
//! Sentence splitting, tokenization, POS tagging, and coreference grouping
//! are collaborator contracts: callers hand in [`TaggedWord`] sequences and
//! [`MentionCluster`]s, and get labeled trees back. The engine performs no
//! I/O and holds no state beyond what its constructors receive.
//!
//! Higher layers live in sibling crates: `clausal-analysis` (the
//! responsibility/liability/termination clause analyzers) and
//! `clausal-references` (URL/email/domain/citation extraction).

mod chunk;
mod grammar;
mod mention;
mod parser;
mod pattern;
mod tagged;
mod template;

pub use chunk::{ChunkNode, ChunkTree};
pub use grammar::{
    Constraint, GrammarRule, GrammarRuleSet, GrammarSyntaxError, Quantifier, RuleElement,
};
pub use mention::{Mention, MentionCluster};
pub use parser::ChunkParser;
pub use pattern::PartyPattern;
pub use tagged::TaggedWord;
pub use template::{GrammarTemplateRenderer, TemplateError};

#[cfg(test)]
mod tests {
    mod chunk_parser;
    mod grammar;
    mod mention;
    mod pattern;
    mod template;
}
