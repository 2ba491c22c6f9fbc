//! Layered reference extraction over raw sentence text.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use regex::Regex;
use serde::{Deserialize, Serialize};

use clausal::{ChunkParser, GrammarRuleSet, GrammarSyntaxError, TaggedWord};

/// Chunk label for standards designations (ISO 9001, RFC 2119, ...).
const STANDARD_LABEL: &str = "STANDARD";
/// Chunk label for section/act citations.
const CITATION_LABEL: &str = "CITATION";

/// Grammar for the citation pass, run over POS-tagged tokens.
const CITATION_GRAMMAR: &str = r#"
STANDARD: {"iso|iec|ieee|ansi|din|astm|rfc|bs" "[0-9][0-9:.-]*"}
CITATION: {"section|article|clause" "[0-9][0-9a-z:.()-]*" "of" <DT> <NNP>+}
"#;

/// Punctuation never considered part of a reference at its end.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?'];

/// What kind of external reference was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceKind {
    /// A full URL with an explicit scheme.
    Url,
    /// An email address.
    Email,
    /// A bare domain name with no scheme.
    Domain,
    /// A standards designation (ISO 9001, RFC 2119, ...).
    Standard,
    /// Any other citation form.
    Other,
}

/// An external reference found in document text.
///
/// Equality and hashing cover `(form, kind)` only: the same reference
/// found twice compares equal regardless of where it occurred. The
/// retained `offset`/`sentence_index` are the first-seen occurrence's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reference {
    /// The reference text as it appeared.
    pub form: String,
    /// The kind of reference.
    pub kind: ReferenceKind,
    /// Byte offset of `form` within its sentence.
    pub offset: usize,
    /// Index of the sentence the reference was found in.
    pub sentence_index: usize,
}

impl PartialEq for Reference {
    fn eq(&self, other: &Self) -> bool {
        self.form == other.form && self.kind == other.kind
    }
}

impl Eq for Reference {}

impl Hash for Reference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.form.hash(state);
        self.kind.hash(state);
    }
}

/// Extracts external references from one document.
///
/// Constructed per document and run once via [`analyze`](Self::analyze).
/// All patterns and the citation grammar are compiled here, in the
/// constructor, and held by the instance; nothing global is consulted.
pub struct ReferenceExtractor {
    sentences: Vec<String>,
    tagged: Vec<Vec<TaggedWord>>,
    parties: Vec<String>,
    url: Regex,
    email: Regex,
    domain: Regex,
    citation_parser: ChunkParser,
}

impl ReferenceExtractor {
    /// Create an extractor over the document's sentences.
    ///
    /// `tagged` carries per-sentence POS-tagged tokens for the citation
    /// pass; sentences without tagged tokens skip that pass only.
    /// `parties` are the known party names whose bare repetitions are
    /// suppressed from the results.
    pub fn new(
        sentences: Vec<String>,
        tagged: Vec<Vec<TaggedWord>>,
        parties: Vec<String>,
    ) -> Result<Self, GrammarSyntaxError> {
        let url = Regex::new(r#"(?i)\bhttps?://[^\s<>"')\]]+"#)
            .expect("URL pattern is valid");
        let email = Regex::new(r"(?i)\b[a-z0-9._%+-]+@[a-z0-9](?:[a-z0-9.-]*[a-z0-9])?\.[a-z]{2,}\b")
            .expect("email pattern is valid");
        let domain = Regex::new(
            r"(?i)\b(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+(?:com|net|org|edu|gov|mil|int|io|co|ai|app|dev|info|biz|us|uk|de|fr|eu|ca|au|jp)\b",
        )
        .expect("domain pattern is valid");
        let citation_parser = ChunkParser::new(GrammarRuleSet::parse(CITATION_GRAMMAR)?);

        Ok(Self {
            sentences,
            tagged,
            parties,
            url,
            email,
            domain,
            citation_parser,
        })
    }

    /// Run every pass over every sentence and return the deduplicated
    /// references in first-seen document order.
    pub fn analyze(&self) -> Vec<Reference> {
        let mut seen: HashSet<(String, ReferenceKind)> = HashSet::new();
        let mut out = Vec::new();

        for (index, sentence) in self.sentences.iter().enumerate() {
            let mut found = Vec::new();
            let mut working = sentence.clone();

            // Strictly ordered, each pass blanking its spans so the next
            // cannot re-match inside them.
            self.regex_pass(&self.url, ReferenceKind::Url, &mut working, index, &mut found);
            self.regex_pass(&self.email, ReferenceKind::Email, &mut working, index, &mut found);
            self.domain_pass(&working, index, &mut found);
            self.citation_pass(sentence, index, &mut found);

            for reference in found {
                if self.is_party_name(&reference.form) {
                    continue;
                }
                if seen.insert((reference.form.clone(), reference.kind)) {
                    out.push(reference);
                }
            }
        }

        out
    }

    /// One regex pass: record matches, then blank their spans in the
    /// working copy with equal-length whitespace.
    fn regex_pass(
        &self,
        regex: &Regex,
        kind: ReferenceKind,
        working: &mut String,
        sentence_index: usize,
        found: &mut Vec<Reference>,
    ) {
        let mut spans = Vec::new();
        for m in regex.find_iter(working) {
            let trimmed = m.as_str().trim_end_matches(TRAILING_PUNCTUATION);
            if trimmed.is_empty() {
                continue;
            }
            let span = (m.start(), m.start() + trimmed.len());
            found.push(Reference {
                form: trimmed.to_string(),
                kind,
                offset: span.0,
                sentence_index,
            });
            spans.push(span);
        }

        if !spans.is_empty() {
            let mut bytes = working.clone().into_bytes();
            for (start, end) in spans {
                bytes[start..end].fill(b' ');
            }
            // Match spans sit on char boundaries, so byte-wise blanking
            // keeps the copy valid UTF-8 and every later offset stable.
            *working = String::from_utf8(bytes).expect("blanking preserves UTF-8");
        }
    }

    /// The bare-domain pass over the twice-blanked copy, with the
    /// `www.`-noise filter applied.
    fn domain_pass(&self, working: &str, sentence_index: usize, found: &mut Vec<Reference>) {
        for m in self.domain.find_iter(working) {
            let form = m.as_str();
            let lowered = form.to_lowercase();
            if let Some(rest) = lowered.strip_prefix("www.") {
                if rest.len() <= 7 {
                    continue;
                }
            }
            found.push(Reference {
                form: form.to_string(),
                kind: ReferenceKind::Domain,
                offset: m.start(),
                sentence_index,
            });
        }
    }

    /// The citation pass: chunk-parse the tagged tokens and map each
    /// STANDARD/CITATION chunk back to its span in the raw sentence.
    fn citation_pass(&self, sentence: &str, sentence_index: usize, found: &mut Vec<Reference>) {
        let tokens = match self.tagged.get(sentence_index) {
            Some(tokens) if !tokens.is_empty() => tokens,
            _ => return,
        };

        let tree = self.citation_parser.parse(tokens);
        for node in tree.find_labeled(|label| label == STANDARD_LABEL || label == CITATION_LABEL) {
            let words: Vec<&str> = node.leaves().iter().map(|(word, _)| *word).collect();
            let (start, end) = match locate_span(sentence, &words) {
                Some(span) => span,
                // Tokens that cannot be found verbatim (tagger
                // normalization) just drop this chunk.
                None => continue,
            };
            let kind = if node.label() == Some(STANDARD_LABEL) {
                ReferenceKind::Standard
            } else {
                ReferenceKind::Other
            };
            found.push(Reference {
                form: sentence[start..end].to_string(),
                kind,
                offset: start,
                sentence_index,
            });
        }
    }

    fn is_party_name(&self, form: &str) -> bool {
        let lowered = form.to_lowercase();
        self.parties.iter().any(|party| party.to_lowercase() == lowered)
    }
}

/// Find `words` in order within `sentence`, returning the byte span from
/// the first word's start to the last word's end.
fn locate_span(sentence: &str, words: &[&str]) -> Option<(usize, usize)> {
    let mut cursor = 0;
    let mut start = None;
    for word in words {
        let pos = sentence[cursor..].find(word)? + cursor;
        if start.is_none() {
            start = Some(pos);
        }
        cursor = pos + word.len();
    }
    start.map(|s| (s, cursor))
}
