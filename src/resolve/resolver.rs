//! Hop-by-hop fan-out traversal.
//!
//! Each hop asks the graph client one (resource, relation) question and
//! recurses into every returned value with the remaining query path. The
//! result is a tree: different branches may terminate at different depths,
//! and the tree keeps the provenance of every leaf (which value came from
//! which hop).

use futures_util::future::{join_all, BoxFuture};

use crate::names;
use crate::resolve::tree::{AnswerNode, ROOT_RELATION};
use crate::sparql::{GraphClient, QueryResult, ERROR, UNKNOWN};

/// Resolve a multi-hop query and return the answer tree.
///
/// `entity` is the starting entity: either a bare name (expanded into the
/// canonical resource form before the first hop) or an already-qualified
/// link. `relations` is the ordered query path; an empty path returns a
/// single root leaf.
///
/// A hop failure or missing value terminates only its own branch, as an
/// `ERROR` or `UNKNOWN` leaf. The returned tree is owned by the caller and
/// never mutated afterwards.
pub async fn resolve<C: GraphClient + ?Sized>(
    client: &C,
    entity: &str,
    relations: &[String],
) -> AnswerNode {
    let is_link = entity.starts_with("http://") || entity.starts_with("https://");
    let resource = if is_link {
        entity.to_string()
    } else {
        names::resource(entity)
    };

    let mut root = resolve_branch(client, resource, relations, is_link).await;
    root.relation = ROOT_RELATION.to_string();
    root
}

/// Resolve one branch of the traversal.
///
/// Returns an unlabeled node: the relation that produced a node is owned by
/// the caller, which stamps it when appending the child (the top level
/// stamps `"root"`).
///
/// Sibling branches share no mutable state, so the per-value recursions run
/// concurrently; `join_all` yields them in input order, which keeps child
/// ordering identical to the order the store returned the values.
fn resolve_branch<'a, C: GraphClient + ?Sized>(
    client: &'a C,
    resource: String,
    path: &'a [String],
    resource_is_link: bool,
) -> BoxFuture<'a, AnswerNode> {
    Box::pin(async move {
        // Base case: the path is exhausted, or an earlier hop already
        // reported missing data for this branch.
        if path.is_empty() || resource == UNKNOWN {
            return AnswerNode::unlabeled(resource);
        }

        let relation = &path[0];
        let rest = &path[1..];

        let mut node = AnswerNode::unlabeled(resource.clone());
        match client.query(&resource, relation, resource_is_link).await {
            QueryResult::Error => {
                node.children.push(AnswerNode::leaf(ERROR, relation.clone()));
            }
            QueryResult::Unknown => {
                node.children.push(AnswerNode::leaf(UNKNOWN, relation.clone()));
            }
            QueryResult::Values(values) => {
                let branches = values
                    .into_iter()
                    .map(|value| resolve_branch(client, value, rest, true));
                for mut child in join_all(branches).await {
                    child.relation = relation.clone();
                    node.children.push(child);
                }
            }
        }
        node
    })
}

/// Resolve a query and return only the final answers, one per complete
/// root-to-leaf path, in traversal order.
pub async fn resolve_flat<C: GraphClient + ?Sized>(
    client: &C,
    entity: &str,
    relations: &[String],
) -> Vec<String> {
    resolve(client, entity, relations).await.flatten()
}
