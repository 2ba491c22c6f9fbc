//! Whole-word alternation patterns over party aliases.

use regex::Regex;

use crate::mention::MentionCluster;

/// Pattern text guaranteed never to match a non-empty token.
///
/// `$` can only be followed by `^` on the empty string, and tokens are
/// never empty.
const NEVER_MATCH: &str = "$^";

/// A case-insensitive whole-word alternation over a party's aliases.
///
/// The compiled regex is built once in the constructor and carried by
/// value; there are no process-global singletons. An empty cluster yields
/// a pattern that never matches (rather than failing to compile or
/// matching everything).
#[derive(Debug, Clone)]
pub struct PartyPattern {
    pattern: String,
    regex: Option<Regex>,
}

impl PartyPattern {
    /// Build a pattern over a single canonical name in four case variants:
    /// as-given, lowercase, Title Case, and UPPERCASE.
    pub fn for_name(name: &str) -> Self {
        let mut variants = vec![name.to_string()];
        for variant in [name.to_lowercase(), title_case(name), name.to_uppercase()] {
            if !variants.contains(&variant) {
                variants.push(variant);
            }
        }
        Self::from_alternatives(&variants)
    }

    /// Build a pattern over every alias in a cluster.
    pub fn for_cluster(cluster: &MentionCluster) -> Self {
        Self::from_alternatives(cluster.all_forms())
    }

    fn from_alternatives(forms: &[String]) -> Self {
        if forms.is_empty() {
            return Self {
                pattern: NEVER_MATCH.to_string(),
                regex: None,
            };
        }

        // Longer aliases first so "Acme Corp." wins over "Acme" under the
        // regex engine's leftmost-first alternation.
        let mut ordered: Vec<&String> = forms.iter().collect();
        ordered.sort_by(|a, b| b.len().cmp(&a.len()));

        let pattern = ordered
            .iter()
            .map(|form| boundary_wrapped(form))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&format!("(?i)(?:{})", pattern))
            .expect("escaped alternation is always a valid regex");

        Self {
            pattern,
            regex: Some(regex),
        }
    }

    /// The alternation pattern text, suitable for interpolation into a
    /// grammar template's word constraint.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Case-insensitive whole-word search in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        match &self.regex {
            Some(regex) => regex.is_match(text),
            None => false,
        }
    }

    /// Whether this pattern was built from an empty cluster and can never
    /// match anything.
    pub fn never_matches(&self) -> bool {
        self.regex.is_none()
    }
}

/// Escape one alias, asserting `\b` only at edges that end on a word
/// character. An alias ending in punctuation ("Acme Corp.") has no word
/// boundary after the dot, so a trailing `\b` there would make the alias
/// unmatchable.
fn boundary_wrapped(form: &str) -> String {
    let escaped = regex::escape(form);
    let leading = if form.starts_with(|c: char| c.is_alphanumeric() || c == '_') {
        r"\b"
    } else {
        ""
    };
    let trailing = if form.ends_with(|c: char| c.is_alphanumeric() || c == '_') {
        r"\b"
    } else {
        ""
    };
    format!("{}{}{}", leading, escaped, trailing)
}

/// Uppercase the first letter of each whitespace-separated word, lowering
/// the rest ("acme CORP." -> "Acme Corp.").
fn title_case(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
