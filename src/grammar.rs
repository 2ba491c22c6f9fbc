//! Textual chunk-rule syntax and its compiled form.
//!
//! A rule set is a sequence of lines, evaluated in declared order:
//!
//! ```text
//! # comment
//! PARTY: {"\b(?:Acme Corp\.|Acme)\b"}
//! RESPONSIBILITY: {<PARTY> <MD> <RB>? <VB.*>+}
//! ```
//!
//! Each rule is a label plus a brace-delimited sequence of constraints
//! with optional `?`/`*`/`+` quantifiers:
//!
//! - `<PAT>` matches one unit by POS tag (for a leaf) or by chunk label
//!   (for an already-labeled chunk), via a full-match regex.
//! - `"PAT"` matches leaf token text case-insensitively; a pattern
//!   containing spaces may span several adjacent leaves, matched against
//!   their space-joined text.
//!
//! Labels may repeat across rules (alternative productions). Every inner
//! regex compiles here, at parse time, so chunking a sentence can never
//! fail afterwards: malformed rule text is an authoring bug surfaced as a
//! [`GrammarSyntaxError`] before any sentence is touched.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Recognizes `LABEL: {body}` rule lines.
static RULE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z][A-Z0-9_]*)\s*:\s*\{(.*)\}\s*$").expect("rule line regex is valid")
});

/// Errors raised while parsing rule-set text.
#[derive(Debug, Error)]
pub enum GrammarSyntaxError {
    /// The line is not of the form `LABEL: {...}`.
    #[error("grammar line {line}: expected `LABEL: {{...}}`, got `{text}`")]
    MalformedRule {
        /// 1-based line number within the rule-set text.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// A `<...>` or `"..."` constraint with no closing delimiter.
    #[error("grammar line {line}: unterminated `{open}` constraint")]
    UnterminatedConstraint {
        /// 1-based line number within the rule-set text.
        line: usize,
        /// The opening delimiter.
        open: char,
    },

    /// A quantifier with no constraint in front of it.
    #[error("grammar line {line}: quantifier `{quantifier}` has no preceding constraint")]
    DanglingQuantifier {
        /// 1-based line number within the rule-set text.
        line: usize,
        /// The dangling quantifier character.
        quantifier: char,
    },

    /// A character that starts neither a constraint nor a quantifier.
    #[error("grammar line {line}: unexpected character `{found}` in rule body")]
    UnexpectedCharacter {
        /// 1-based line number within the rule-set text.
        line: usize,
        /// The unexpected character.
        found: char,
    },

    /// A rule with an empty `{}` body.
    #[error("grammar line {line}: rule body is empty")]
    EmptyRule {
        /// 1-based line number within the rule-set text.
        line: usize,
    },

    /// An inner tag/word pattern that is not a valid regex.
    #[error("grammar line {line}: invalid pattern `{pattern}`: {source}")]
    BadPattern {
        /// 1-based line number within the rule-set text.
        line: usize,
        /// The pattern text as written in the rule.
        pattern: String,
        /// The regex compilation failure.
        source: regex::Error,
    },
}

/// How many times one constraint may match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// Exactly once (no suffix).
    One,
    /// Zero or one (`?`).
    Optional,
    /// Zero or more (`*`).
    ZeroOrMore,
    /// One or more (`+`).
    OneOrMore,
}

/// A single constraint within a rule body.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// `<PAT>`: full-match over a leaf's tag or a chunk's label.
    Tag(Regex),
    /// `"PAT"`: case-insensitive full-match over leaf token text,
    /// possibly spanning up to `max_span` adjacent leaves.
    Word {
        /// Compiled case-insensitive, anchored pattern.
        regex: Regex,
        /// Widest leaf span this pattern could cover (whitespace count
        /// in the pattern plus one).
        max_span: usize,
    },
}

/// One quantified constraint.
#[derive(Debug, Clone)]
pub struct RuleElement {
    /// The constraint to satisfy.
    pub constraint: Constraint,
    /// How many consecutive times it may/must match.
    pub quantifier: Quantifier,
}

/// A named rule: a label and the element sequence that produces it.
#[derive(Debug, Clone)]
pub struct GrammarRule {
    /// Chunk label assigned to each span this rule matches.
    pub label: String,
    /// Constraints in match order.
    pub elements: Vec<RuleElement>,
}

/// An ordered, immutable list of compiled chunk rules.
#[derive(Debug, Clone, Default)]
pub struct GrammarRuleSet {
    rules: Vec<GrammarRule>,
}

impl GrammarRuleSet {
    /// Parse and compile rule-set text.
    ///
    /// Blank lines and `#` comments are skipped. Any syntactic or regex
    /// problem fails the whole rule set with the offending line number.
    pub fn parse(text: &str) -> Result<Self, GrammarSyntaxError> {
        let mut rules = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let captures =
                RULE_LINE
                    .captures(trimmed)
                    .ok_or_else(|| GrammarSyntaxError::MalformedRule {
                        line,
                        text: trimmed.to_string(),
                    })?;
            let label = captures[1].to_string();
            let elements = parse_elements(&captures[2], line)?;
            if elements.is_empty() {
                return Err(GrammarSyntaxError::EmptyRule { line });
            }
            rules.push(GrammarRule { label, elements });
        }
        Ok(Self { rules })
    }

    /// Rules in declared order.
    pub fn rules(&self) -> &[GrammarRule] {
        &self.rules
    }

    /// Whether the rule set contains no rules at all.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Tokenize and compile one rule body.
fn parse_elements(body: &str, line: usize) -> Result<Vec<RuleElement>, GrammarSyntaxError> {
    let mut elements: Vec<RuleElement> = Vec::new();
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {}
            '<' => {
                let mut pattern = String::new();
                loop {
                    match chars.next() {
                        Some('>') => break,
                        Some(inner) => pattern.push(inner),
                        None => {
                            return Err(GrammarSyntaxError::UnterminatedConstraint {
                                line,
                                open: '<',
                            })
                        }
                    }
                }
                let regex = compile_anchored(&pattern, false, line)?;
                elements.push(RuleElement {
                    constraint: Constraint::Tag(regex),
                    quantifier: Quantifier::One,
                });
            }
            '"' => {
                let mut pattern = String::new();
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            // Keep the escape: `\"` is a valid regex literal.
                            Some(escaped) => {
                                pattern.push('\\');
                                pattern.push(escaped);
                            }
                            None => {
                                return Err(GrammarSyntaxError::UnterminatedConstraint {
                                    line,
                                    open: '"',
                                })
                            }
                        },
                        Some(inner) => pattern.push(inner),
                        None => {
                            return Err(GrammarSyntaxError::UnterminatedConstraint {
                                line,
                                open: '"',
                            })
                        }
                    }
                }
                let max_span = pattern.matches(' ').count() + 1;
                let regex = compile_anchored(&pattern, true, line)?;
                elements.push(RuleElement {
                    constraint: Constraint::Word { regex, max_span },
                    quantifier: Quantifier::One,
                });
            }
            '?' | '*' | '+' => {
                let element = elements.last_mut().ok_or(
                    GrammarSyntaxError::DanglingQuantifier {
                        line,
                        quantifier: c,
                    },
                )?;
                if element.quantifier != Quantifier::One {
                    return Err(GrammarSyntaxError::DanglingQuantifier {
                        line,
                        quantifier: c,
                    });
                }
                element.quantifier = match c {
                    '?' => Quantifier::Optional,
                    '*' => Quantifier::ZeroOrMore,
                    _ => Quantifier::OneOrMore,
                };
            }
            other => {
                return Err(GrammarSyntaxError::UnexpectedCharacter { line, found: other });
            }
        }
    }

    Ok(elements)
}

/// Compile an inner pattern as a full match, optionally case-insensitive.
fn compile_anchored(
    pattern: &str,
    case_insensitive: bool,
    line: usize,
) -> Result<Regex, GrammarSyntaxError> {
    let flags = if case_insensitive { "(?i)" } else { "" };
    Regex::new(&format!("{}^(?:{})$", flags, pattern)).map_err(|source| {
        GrammarSyntaxError::BadPattern {
            line,
            pattern: pattern.to_string(),
            source,
        }
    })
}
