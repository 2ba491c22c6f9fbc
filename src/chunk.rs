//! Labeled chunk trees produced by the parser.

/// A node in a chunk tree: either a flat POS-tagged leaf or a labeled
/// chunk covering child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkNode {
    /// An unchunked token.
    Leaf {
        /// Surface text of the token.
        word: String,
        /// Part-of-speech tag.
        tag: String,
    },
    /// A span matched by a grammar rule.
    Labeled {
        /// The matching rule's label.
        label: String,
        /// Covered units, in sentence order.
        children: Vec<ChunkNode>,
    },
}

impl ChunkNode {
    /// The chunk label, or `None` for a leaf.
    pub fn label(&self) -> Option<&str> {
        match self {
            ChunkNode::Leaf { .. } => None,
            ChunkNode::Labeled { label, .. } => Some(label),
        }
    }

    /// Whether this node is a flat token.
    pub fn is_leaf(&self) -> bool {
        matches!(self, ChunkNode::Leaf { .. })
    }

    /// All `(word, tag)` leaf pairs under this node, in sentence order.
    pub fn leaves(&self) -> Vec<(&str, &str)> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<(&'a str, &'a str)>) {
        match self {
            ChunkNode::Leaf { word, tag } => out.push((word, tag)),
            ChunkNode::Labeled { children, .. } => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }
}

/// The shallow parse of one sentence: an ordered forest of chunks and
/// flat leaves. Produced fresh per parse call and owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChunkTree {
    /// Top-level nodes in sentence order.
    pub nodes: Vec<ChunkNode>,
}

impl ChunkTree {
    /// Depth-first pre-order visit of every node.
    pub fn walk<'a, F: FnMut(&'a ChunkNode)>(&'a self, mut visit: F) {
        for node in &self.nodes {
            walk_node(node, &mut visit);
        }
    }

    /// All nodes (depth-first pre-order) whose label satisfies `pred`.
    pub fn find_labeled<P: Fn(&str) -> bool>(&self, pred: P) -> Vec<&ChunkNode> {
        let mut found = Vec::new();
        self.walk(|node| {
            if node.label().map(&pred).unwrap_or(false) {
                found.push(node);
            }
        });
        found
    }
}

fn walk_node<'a, F: FnMut(&'a ChunkNode)>(node: &'a ChunkNode, visit: &mut F) {
    visit(node);
    if let ChunkNode::Labeled { children, .. } = node {
        for child in children {
            walk_node(child, visit);
        }
    }
}
