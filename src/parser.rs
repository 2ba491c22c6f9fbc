//! Deterministic rule-based shallow parsing.
//!
//! [`ChunkParser`] evaluates a [`GrammarRuleSet`] over one POS-tagged
//! sentence. Rules run in declared order; each rule scans the current unit
//! sequence left to right, turning the longest match at each position into
//! a labeled chunk and resuming after it (non-overlapping). Chunks built
//! by earlier rules are atomic units for later rules, which is what makes
//! compositional grammars work (a `BOTH_PARTIES` rule over two
//! already-labeled `PARTY` chunks, for example).
//!
//! There is no backtracking across rules and no randomness: the same rule
//! set and sentence always produce an identical tree.

use crate::chunk::{ChunkNode, ChunkTree};
use crate::grammar::{Constraint, GrammarRule, GrammarRuleSet, Quantifier, RuleElement};
use crate::tagged::TaggedWord;

/// A shallow parser over one compiled rule set.
///
/// Construction is cheap; the expensive part (regex compilation) already
/// happened in [`GrammarRuleSet::parse`]. `parse` is total: a compiled
/// rule set cannot fail on any sentence.
#[derive(Debug, Clone)]
pub struct ChunkParser {
    rules: GrammarRuleSet,
}

impl ChunkParser {
    /// Wrap a compiled rule set.
    pub fn new(rules: GrammarRuleSet) -> Self {
        Self { rules }
    }

    /// The rule set this parser evaluates.
    pub fn rules(&self) -> &GrammarRuleSet {
        &self.rules
    }

    /// Parse one sentence into a fresh, caller-owned chunk tree.
    pub fn parse(&self, sentence: &[TaggedWord]) -> ChunkTree {
        let mut units: Vec<ChunkNode> = sentence
            .iter()
            .map(|token| ChunkNode::Leaf {
                word: token.word.clone(),
                tag: token.tag.clone(),
            })
            .collect();

        for rule in self.rules.rules() {
            units = apply_rule(rule, units);
        }

        ChunkTree { nodes: units }
    }
}

/// One left-to-right, non-overlapping pass of a single rule.
fn apply_rule(rule: &GrammarRule, units: Vec<ChunkNode>) -> Vec<ChunkNode> {
    let mut out = Vec::with_capacity(units.len());
    let mut i = 0;
    while i < units.len() {
        match match_elements(&rule.elements, &units, i) {
            // Zero-width matches (all-optional rules) never chunk.
            Some(end) if end > i => {
                out.push(ChunkNode::Labeled {
                    label: rule.label.clone(),
                    children: units[i..end].to_vec(),
                });
                i = end;
            }
            _ => {
                out.push(units[i].clone());
                i += 1;
            }
        }
    }
    out
}

/// Match an element sequence starting at `pos`, greedily preferring the
/// longest occurrence of each element, with backtracking inside the rule
/// only. Returns the end position of the match.
fn match_elements(elements: &[RuleElement], units: &[ChunkNode], pos: usize) -> Option<usize> {
    let (head, rest) = match elements.split_first() {
        Some(split) => split,
        None => return Some(pos),
    };

    match head.quantifier {
        Quantifier::One => {
            for end in occurrence_ends(&head.constraint, units, pos) {
                if let Some(done) = match_elements(rest, units, end) {
                    return Some(done);
                }
            }
            None
        }
        Quantifier::Optional => {
            for end in occurrence_ends(&head.constraint, units, pos) {
                if let Some(done) = match_elements(rest, units, end) {
                    return Some(done);
                }
            }
            match_elements(rest, units, pos)
        }
        Quantifier::OneOrMore => match_repeat(head, rest, units, pos, false),
        Quantifier::ZeroOrMore => match_repeat(head, rest, units, pos, true),
    }
}

/// Greedy repetition: take another occurrence while possible, falling back
/// to the tail once the minimum count is satisfied.
fn match_repeat(
    head: &RuleElement,
    rest: &[RuleElement],
    units: &[ChunkNode],
    pos: usize,
    min_met: bool,
) -> Option<usize> {
    for end in occurrence_ends(&head.constraint, units, pos) {
        if let Some(done) = match_repeat(head, rest, units, end, true) {
            return Some(done);
        }
    }
    if min_met {
        match_elements(rest, units, pos)
    } else {
        None
    }
}

/// Possible end positions (descending width) for one occurrence of a
/// constraint at `pos`.
///
/// Tag constraints consume exactly one unit, matching a leaf's tag or a
/// chunk's label. Word constraints consume leaves only, widest span first,
/// matched against their space-joined text.
fn occurrence_ends(constraint: &Constraint, units: &[ChunkNode], pos: usize) -> Vec<usize> {
    match constraint {
        Constraint::Tag(regex) => match units.get(pos) {
            Some(ChunkNode::Leaf { tag, .. }) if regex.is_match(tag) => vec![pos + 1],
            Some(ChunkNode::Labeled { label, .. }) if regex.is_match(label) => vec![pos + 1],
            _ => Vec::new(),
        },
        Constraint::Word { regex, max_span } => {
            let limit = (*max_span).min(units.len().saturating_sub(pos));
            let mut ends = Vec::new();
            'span: for span in (1..=limit).rev() {
                let mut joined = String::new();
                for unit in &units[pos..pos + span] {
                    match unit {
                        ChunkNode::Leaf { word, .. } => {
                            if !joined.is_empty() {
                                joined.push(' ');
                            }
                            joined.push_str(word);
                        }
                        ChunkNode::Labeled { .. } => continue 'span,
                    }
                }
                if regex.is_match(&joined) {
                    ends.push(pos + span);
                }
            }
            ends
        }
    }
}
