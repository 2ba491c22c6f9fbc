//! The clause analyzer: render -> parse -> walk, memoized per party key.

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use clausal::{
    ChunkParser, GrammarRuleSet, GrammarSyntaxError, GrammarTemplateRenderer, MentionCluster,
    TaggedWord, TemplateError,
};

use crate::party::cluster_for;
use crate::templates::{
    LIABILITY_LABELS, LIABILITY_TEMPLATE, RESPONSIBILITY_LABELS, RESPONSIBILITY_TEMPLATE,
    TERMINATION_LABELS, TERMINATION_TEMPLATE,
};

/// Cache key requesting findings attributed to both parties jointly.
pub const BOTH_PARTIES: &str = "both";

/// Which clause family an analyzer extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalyzerKind {
    /// Duties a party takes on.
    Responsibility,
    /// Exposure and disclaimers of exposure.
    Liability,
    /// Rights to end the agreement.
    Termination,
}

impl AnalyzerKind {
    /// The grammar template and result labels for this kind.
    pub fn spec(self) -> AnalyzerSpec {
        match self {
            AnalyzerKind::Responsibility => AnalyzerSpec {
                template: RESPONSIBILITY_TEMPLATE,
                result_labels: RESPONSIBILITY_LABELS,
            },
            AnalyzerKind::Liability => AnalyzerSpec {
                template: LIABILITY_TEMPLATE,
                result_labels: LIABILITY_LABELS,
            },
            AnalyzerKind::Termination => AnalyzerSpec {
                template: TERMINATION_TEMPLATE,
                result_labels: TERMINATION_LABELS,
            },
        }
    }
}

/// What distinguishes one analyzer from its siblings: a grammar template
/// plus the set of rule labels that count as findings. A value, not a
/// trait - the three analyzers are one type parameterized by this.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerSpec {
    /// Grammar template text referencing `party_mentions` and `both`.
    pub template: &'static str,
    /// Rule labels reported as findings; everything else (helper chunks
    /// like `PARTY`) is scaffolding.
    pub result_labels: &'static [&'static str],
}

/// Errors raised while computing a party's findings.
///
/// Both variants are authoring bugs in a built-in template and are fatal;
/// per-sentence chunking itself is total and never aborts a document.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The analyzer's template failed to render.
    #[error("grammar template failed to render: {0}")]
    Template(#[from] TemplateError),
    /// The rendered rule-set text failed to compile.
    #[error("generated grammar failed to compile: {0}")]
    Grammar(#[from] GrammarSyntaxError),
}

/// Findings for one party key: sentence index -> sublabel.
pub type Findings = BTreeMap<usize, String>;

/// Extracts clause findings from one document, attributed per party.
///
/// Constructed once per `(document, them_party, you_party)`; stateless
/// across documents. The only mutable state is the per-key results cache,
/// so sharing one instance across threads requires external
/// serialization - independent instances need no coordination.
pub struct ClauseAnalyzer {
    kind: AnalyzerKind,
    renderer: GrammarTemplateRenderer,
    result_labels: &'static [&'static str],
    sentences: Vec<Vec<TaggedWord>>,
    clusters: Vec<MentionCluster>,
    them_party: String,
    you_party: String,
    cache: HashMap<String, Findings>,
}

impl ClauseAnalyzer {
    /// Create an analyzer of the given kind over a tagged document.
    pub fn new(
        kind: AnalyzerKind,
        sentences: Vec<Vec<TaggedWord>>,
        clusters: Vec<MentionCluster>,
        them_party: impl Into<String>,
        you_party: impl Into<String>,
    ) -> Self {
        let spec = kind.spec();
        Self {
            kind,
            renderer: GrammarTemplateRenderer::new(spec.template),
            result_labels: spec.result_labels,
            sentences,
            clusters,
            them_party: them_party.into(),
            you_party: you_party.into(),
            cache: HashMap::new(),
        }
    }

    /// A responsibility analyzer.
    pub fn responsibility(
        sentences: Vec<Vec<TaggedWord>>,
        clusters: Vec<MentionCluster>,
        them_party: impl Into<String>,
        you_party: impl Into<String>,
    ) -> Self {
        Self::new(
            AnalyzerKind::Responsibility,
            sentences,
            clusters,
            them_party,
            you_party,
        )
    }

    /// A liability analyzer.
    pub fn liability(
        sentences: Vec<Vec<TaggedWord>>,
        clusters: Vec<MentionCluster>,
        them_party: impl Into<String>,
        you_party: impl Into<String>,
    ) -> Self {
        Self::new(
            AnalyzerKind::Liability,
            sentences,
            clusters,
            them_party,
            you_party,
        )
    }

    /// A termination analyzer.
    pub fn termination(
        sentences: Vec<Vec<TaggedWord>>,
        clusters: Vec<MentionCluster>,
        them_party: impl Into<String>,
        you_party: impl Into<String>,
    ) -> Self {
        Self::new(
            AnalyzerKind::Termination,
            sentences,
            clusters,
            them_party,
            you_party,
        )
    }

    /// Which clause family this analyzer extracts.
    pub fn kind(&self) -> AnalyzerKind {
        self.kind
    }

    /// The "them" party name this analyzer was constructed with.
    pub fn them_party(&self) -> &str {
        &self.them_party
    }

    /// The "you" party name this analyzer was constructed with.
    pub fn you_party(&self) -> &str {
        &self.you_party
    }

    /// Findings for a party key, computed on first access and cached.
    ///
    /// `key` is either a mention text (looked up in the coreference
    /// clusters, falling back to a singleton cluster) or [`BOTH_PARTIES`]
    /// for the joint variant. Computing one key never disturbs mappings
    /// already cached under other keys.
    pub fn results(&mut self, key: &str) -> Result<&Findings, AnalyzeError> {
        if !self.cache.contains_key(key) {
            let findings = self.compute(key)?;
            self.cache.insert(key.to_string(), findings);
        }
        Ok(self.cache.entry(key.to_string()).or_default())
    }

    /// The cluster that would back a query for `key`.
    pub fn party_cluster_for(&self, key: &str) -> MentionCluster {
        if key == BOTH_PARTIES {
            self.union_cluster()
        } else {
            cluster_for(&self.clusters, key)
        }
    }

    /// Union cluster covering both parties, reusing existing clusters
    /// where they already contain a party's name.
    fn union_cluster(&self) -> MentionCluster {
        let mut union = cluster_for(&self.clusters, &self.them_party);
        let you = cluster_for(&self.clusters, &self.you_party);
        union.merge(&you);
        union
    }

    fn compute(&self, key: &str) -> Result<Findings, AnalyzeError> {
        let (cluster, both) = if key == BOTH_PARTIES {
            (self.union_cluster(), true)
        } else {
            (cluster_for(&self.clusters, key), false)
        };

        let rendered = self.renderer.render(&cluster, both)?;
        let rules = GrammarRuleSet::parse(&rendered)?;
        let parser = ChunkParser::new(rules);

        let mut findings = Findings::new();
        for (index, sentence) in self.sentences.iter().enumerate() {
            let tree = parser.parse(sentence);
            tree.walk(|node| {
                if let Some(label) = node.label() {
                    if self.result_labels.iter().any(|known| *known == label) {
                        // First finding in depth-first order wins.
                        findings.entry(index).or_insert_with(|| label.to_string());
                    }
                }
            });
        }
        Ok(findings)
    }
}
