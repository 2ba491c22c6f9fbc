//! Minimal grammar-template rendering.
//!
//! Analyzer grammars are fixed text templates specialized to the current
//! document's parties at query time. The template language is deliberately
//! tiny and sandboxed for auditability - two variables, interpolation, and
//! an `if`/`else` conditional - rather than a general templating library:
//!
//! ```text
//! PARTY: {"{{ party_mentions }}"}
//! {% if both %}
//! BOTH_PARTIES: {<PARTY> "and" <PARTY>}
//! {% endif %}
//! ```
//!
//! The only variables are `party_mentions` (the cluster's alias
//! alternation) and `both` (whether the combined-parties variant is being
//! rendered). Referencing anything else is an authoring bug and fails with
//! [`TemplateError::UnknownVariable`] naming the offender - even inside a
//! branch that would not render.

use thiserror::Error;

use crate::mention::MentionCluster;
use crate::pattern::PartyPattern;

/// Errors raised while rendering a grammar template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// The template referenced a variable outside `{party_mentions, both}`.
    #[error("unknown template variable `{name}`; expected `party_mentions` or `both`")]
    UnknownVariable {
        /// The offending variable name.
        name: String,
    },

    /// An opening `{{` or `{%` with no matching close.
    #[error("unclosed `{open}` tag in grammar template")]
    UnclosedTag {
        /// The opening delimiter that was never closed.
        open: String,
    },

    /// A `{% ... %}` directive that is not `if [not] VAR`, `else`, or
    /// `endif`.
    #[error("malformed template directive `{{% {directive} %}}`")]
    MalformedDirective {
        /// Text inside the directive delimiters.
        directive: String,
    },

    /// `else`/`endif` with no open `if`, or a second `else` for one `if`.
    #[error("unexpected template directive `{{% {directive} %}}`")]
    UnexpectedDirective {
        /// Text inside the directive delimiters.
        directive: String,
    },

    /// An `if` block left open at end of template.
    #[error("missing `{{% endif %}}` in grammar template")]
    MissingEndIf,
}

/// Renders an analyzer grammar template against one party cluster.
///
/// The renderer owns the template text; each [`render`](Self::render) call
/// substitutes a fresh party alternation, so one renderer serves every
/// party key of its analyzer.
#[derive(Debug, Clone)]
pub struct GrammarTemplateRenderer {
    template: String,
}

/// One open `{% if %}` block during rendering.
struct Frame {
    parent_emitting: bool,
    condition: bool,
    seen_else: bool,
}

impl GrammarTemplateRenderer {
    /// Create a renderer over raw grammar template text.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Render the template for `cluster`, producing concrete rule-set text.
    ///
    /// `both` selects the combined-parties variant; `cluster` should then
    /// be the union cluster covering both parties.
    pub fn render(&self, cluster: &MentionCluster, both: bool) -> Result<String, TemplateError> {
        let party_pattern = PartyPattern::for_cluster(cluster);
        let mut output = String::with_capacity(self.template.len());
        let mut frames: Vec<Frame> = Vec::new();
        let mut emitting = true;
        let mut rest = self.template.as_str();

        while let Some(open) = find_tag(rest) {
            let (literal, tag_start) = rest.split_at(open.position);
            if emitting {
                output.push_str(literal);
            }

            let body_start = &tag_start[2..];
            let close = body_start
                .find(open.close)
                .ok_or_else(|| TemplateError::UnclosedTag {
                    open: open.open.to_string(),
                })?;
            let inner = body_start[..close].trim();
            rest = &body_start[close + 2..];

            match open.open {
                "{{" => {
                    let substituted = match inner {
                        "party_mentions" => party_pattern.pattern().to_string(),
                        "both" => both.to_string(),
                        other => {
                            return Err(TemplateError::UnknownVariable {
                                name: other.to_string(),
                            })
                        }
                    };
                    if emitting {
                        output.push_str(&substituted);
                    }
                }
                _ => {
                    emitting = self.directive(
                        inner,
                        &mut frames,
                        emitting,
                        both,
                        !cluster.is_empty(),
                    )?;
                }
            }
        }

        if !frames.is_empty() {
            return Err(TemplateError::MissingEndIf);
        }
        output.push_str(rest);
        Ok(output)
    }

    /// Apply one `{% ... %}` directive, returning the new emitting state.
    fn directive(
        &self,
        inner: &str,
        frames: &mut Vec<Frame>,
        emitting: bool,
        both: bool,
        party_nonempty: bool,
    ) -> Result<bool, TemplateError> {
        let tokens: Vec<&str> = inner.split_whitespace().collect();
        match tokens.as_slice() {
            ["if", rest @ ..] => {
                let (negated, name) = match rest {
                    ["not", name] => (true, *name),
                    [name] => (false, *name),
                    _ => {
                        return Err(TemplateError::MalformedDirective {
                            directive: inner.to_string(),
                        })
                    }
                };
                // Validate the variable even when this branch is dead.
                let value = match name {
                    "both" => both,
                    "party_mentions" => party_nonempty,
                    other => {
                        return Err(TemplateError::UnknownVariable {
                            name: other.to_string(),
                        })
                    }
                };
                let condition = value != negated;
                frames.push(Frame {
                    parent_emitting: emitting,
                    condition,
                    seen_else: false,
                });
                Ok(emitting && condition)
            }
            ["else"] => {
                let frame = frames
                    .last_mut()
                    .ok_or_else(|| TemplateError::UnexpectedDirective {
                        directive: inner.to_string(),
                    })?;
                if frame.seen_else {
                    return Err(TemplateError::UnexpectedDirective {
                        directive: inner.to_string(),
                    });
                }
                frame.seen_else = true;
                Ok(frame.parent_emitting && !frame.condition)
            }
            ["endif"] => {
                let frame = frames
                    .pop()
                    .ok_or_else(|| TemplateError::UnexpectedDirective {
                        directive: inner.to_string(),
                    })?;
                Ok(frame.parent_emitting)
            }
            _ => Err(TemplateError::MalformedDirective {
                directive: inner.to_string(),
            }),
        }
    }
}

struct TagOpen {
    position: usize,
    open: &'static str,
    close: &'static str,
}

/// Locate the earliest `{{` or `{%` in `text`. Single braces (rule-set
/// syntax) pass through as literal text.
fn find_tag(text: &str) -> Option<TagOpen> {
    let interp = text.find("{{");
    let directive = text.find("{%");
    match (interp, directive) {
        (Some(i), Some(d)) if i < d => Some(TagOpen {
            position: i,
            open: "{{",
            close: "}}",
        }),
        (Some(_) | None, Some(d)) => Some(TagOpen {
            position: d,
            open: "{%",
            close: "%}",
        }),
        (Some(i), None) => Some(TagOpen {
            position: i,
            open: "{{",
            close: "}}",
        }),
        (None, None) => None,
    }
}
