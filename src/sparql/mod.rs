//! Graph query client: single-hop relation lookups against a remote
//! SPARQL endpoint.
//!
//! One call answers one question: "does `resource` have `relation`, and if
//! so, what are the values?" Everything the endpoint can do wrong is
//! normalized into [`QueryResult`] so the resolver never has to handle
//! transport failures mid-traversal.

mod client;

pub use client::SparqlClient;

use async_trait::async_trait;

/// Sentinel resource value for "the store has no data for this pair".
pub const UNKNOWN: &str = "UNKNOWN";

/// Sentinel resource value for "the remote call failed".
pub const ERROR: &str = "ERROR";

/// Outcome of one single-hop query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    /// Non-empty, order-preserving values as returned by the store.
    /// Empty strings are discarded; duplicates are preserved.
    Values(Vec<String>),
    /// The store returned no bindings. A normal outcome, not a failure.
    Unknown,
    /// The remote call could not be completed or returned an unparseable
    /// response. Terminates only the branch that issued it.
    Error,
}

/// Single-hop graph lookup.
///
/// `resource_is_link` is true when the resource was discovered via a previous
/// hop and is already a fully-qualified link; false only for the original
/// query root, which still needs expansion into the canonical resource IRI.
#[async_trait]
pub trait GraphClient: Send + Sync {
    async fn query(&self, resource: &str, relation: &str, resource_is_link: bool) -> QueryResult;
}
