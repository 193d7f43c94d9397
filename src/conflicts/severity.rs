//! Path severity aggregation

use crate::graph::GraphQuery;
use crate::models::Severity;

/// Worst severity of a set of edges; `Low` when there are none
///
/// Order-independent: any `High` makes the result `High`.
pub fn aggregate<I>(severities: I) -> Severity
where
    I: IntoIterator<Item = Severity>,
{
    severities.into_iter().max().unwrap_or(Severity::Low)
}

/// Severity of a path of node keys, from the edges between consecutive nodes
///
/// Paths shorter than two nodes have no edges and are `Low`. A missing edge
/// counts as `Medium`.
pub fn path_severity<G: GraphQuery + ?Sized>(graph: &G, path: &[String]) -> Severity {
    if path.len() < 2 {
        return Severity::Low;
    }

    aggregate(path.windows(2).map(|pair| {
        graph
            .edge(&pair[0], &pair[1])
            .map_or(Severity::Medium, |edge| edge.severity)
    }))
}
