//! Read-only graph interface used by the conflict resolver

use super::GraphEdge;

/// Structural queries the resolver needs from a graph
///
/// Keys are normalized by implementors, so raw labels may be passed in.
/// Unknown nodes are never an error: they have no successors and no edges.
/// Not `Send`: `GraphView` implements it while holding a read guard.
pub trait GraphQuery {
    /// Whether a node with this key exists
    fn has_node(&self, key: &str) -> bool;

    /// Direct successors of a node, in edge insertion order
    fn successors(&self, key: &str) -> Vec<String>;

    /// Edge metadata for an ordered pair
    fn edge(&self, source: &str, target: &str) -> Option<GraphEdge>;
}
