use serde::{Deserialize, Serialize};

/// Relation label carried by the starting node of a traversal.
pub const ROOT_RELATION: &str = "root";

/// One node of the answer tree.
///
/// `resource` is the graph node reached at this point in the traversal and
/// `relation` is the relation that produced it (`"root"` for the starting
/// node). Children are kept in the order the store returned the values, so
/// the tree records which value came from which hop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerNode {
    pub resource: String,
    pub relation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AnswerNode>,
}

impl AnswerNode {
    /// Create a leaf node with the given resource and relation.
    pub fn leaf(resource: impl Into<String>, relation: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            relation: relation.into(),
            children: Vec::new(),
        }
    }

    /// Create a node whose relation label has not been assigned yet.
    ///
    /// The relation that produced a node is known to the caller, not the
    /// callee, so the resolver returns unlabeled nodes and the caller stamps
    /// the label when appending the child.
    pub(crate) fn unlabeled(resource: impl Into<String>) -> Self {
        Self::leaf(resource, "")
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.relation == ROOT_RELATION
    }

    /// Collect the final answer of every root-to-leaf path.
    ///
    /// Depth-first, left-to-right, which is the order values were returned
    /// at each hop. Deterministic for a deterministic client.
    pub fn flatten(&self) -> Vec<String> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves(&self, leaves: &mut Vec<String>) {
        if self.is_leaf() {
            leaves.push(self.resource.clone());
            return;
        }
        for child in &self.children {
            child.collect_leaves(leaves);
        }
    }

    /// Enumerate every root-to-leaf path, excluding this node itself.
    ///
    /// Each path lists the nodes reached at hop 1, 2, ... in traversal
    /// order; paths that terminated early on a sentinel are shorter than the
    /// full query path. A childless root yields a single empty path.
    pub fn paths(&self) -> Vec<Vec<&AnswerNode>> {
        let mut paths = Vec::new();
        let mut current = Vec::new();
        self.collect_paths(&mut current, &mut paths);
        paths
    }

    fn collect_paths<'a>(
        &'a self,
        current: &mut Vec<&'a AnswerNode>,
        paths: &mut Vec<Vec<&'a AnswerNode>>,
    ) {
        if self.is_leaf() {
            paths.push(current.clone());
            return;
        }
        for child in &self.children {
            current.push(child);
            child.collect_paths(current, paths);
            current.pop();
        }
    }
}
