//! Party mentions and coreference clusters.
//!
//! A contract names each party many ways ("Acme Corp.", "Acme", "the
//! Company"). The coreference collaborator groups those aliases into
//! [`MentionCluster`]s; the analyzers then treat one cluster as one party
//! when generating grammars.

use serde::{Deserialize, Serialize};

/// One textual occurrence of a name/alias referring to an entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mention {
    /// Surface form of the mention, exactly as it appeared.
    pub form: String,
}

impl Mention {
    /// Create a mention from its surface form.
    pub fn new(form: impl Into<String>) -> Self {
        Self { form: form.into() }
    }
}

/// A set of aliases judged to co-refer to one entity.
///
/// Forms keep insertion order and are deduplicated by exact string
/// equality. Membership is exact-match, not fuzzy: `contains("Acme")`
/// does not imply `contains("acme")`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionCluster {
    forms: Vec<String>,
}

impl MentionCluster {
    /// Create an empty cluster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cluster holding a single alias.
    pub fn singleton(form: impl Into<String>) -> Self {
        let mut cluster = Self::new();
        cluster.add_form(form);
        cluster
    }

    /// Create a cluster from an ordered sequence of aliases.
    pub fn from_forms<I, S>(forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cluster = Self::new();
        for form in forms {
            cluster.add_form(form);
        }
        cluster
    }

    /// Add an alias; a no-op when the exact form is already present.
    pub fn add_form(&mut self, form: impl Into<String>) {
        let form = form.into();
        if !self.forms.contains(&form) {
            self.forms.push(form);
        }
    }

    /// In-place union with another cluster, returning `self` for chaining.
    ///
    /// Merging is commutative in the resulting membership (ordering follows
    /// the receiver) and idempotent; merging with an empty cluster is a
    /// no-op.
    pub fn merge(&mut self, other: &MentionCluster) -> &mut Self {
        for form in &other.forms {
            self.add_form(form.clone());
        }
        self
    }

    /// All aliases in insertion order.
    pub fn all_forms(&self) -> &[String] {
        &self.forms
    }

    /// Exact-match membership test; this is what makes a cluster the
    /// "key" for a party lookup.
    pub fn contains(&self, form: &str) -> bool {
        self.forms.iter().any(|f| f == form)
    }

    /// Whether the cluster holds no aliases at all.
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Number of distinct aliases.
    pub fn len(&self) -> usize {
        self.forms.len()
    }
}
