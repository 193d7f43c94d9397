//! Bounded breadth-first path search
//!
//! Unlike a visited-set BFS this returns every walk from source to target of
//! at most `max_depth` nodes. Different routes to the same condition can carry
//! different severities, so all of them are evidence. Walks may pass through
//! the same node more than once; the depth bound keeps the search finite.

use crate::graph::GraphQuery;
use crate::matching::normalize;
use std::collections::VecDeque;

/// Longest path, in nodes, considered for indirect conflicts
pub const MAX_PATH_DEPTH: usize = 3;

/// Find all paths from `source` to `target` with at most `max_depth` nodes
///
/// Paths are returned in discovery order (shortest first) as normalized node
/// keys. A path stops at its first arrival at `target`. Returns nothing when
/// either endpoint is missing from the graph.
pub fn find_paths<G: GraphQuery + ?Sized>(
    graph: &G,
    source: &str,
    target: &str,
    max_depth: usize,
) -> Vec<Vec<String>> {
    let source = normalize(source);
    let target = normalize(target);

    if !graph.has_node(&source) || !graph.has_node(&target) {
        return Vec::new();
    }

    let mut paths = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back((source.clone(), vec![source]));

    while let Some((current, path)) = queue.pop_front() {
        if path.len() > max_depth {
            continue;
        }

        if current == target {
            paths.push(path);
            continue;
        }

        // extending would exceed the bound
        if path.len() == max_depth {
            continue;
        }

        for next in graph.successors(&current) {
            let mut extended = path.clone();
            extended.push(next.clone());
            queue.push_back((next, extended));
        }
    }

    paths
}
