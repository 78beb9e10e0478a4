//! Const-evaluable checks for graph-theory facts the `Dag` relies on.
//!
//! [`debug_check`] turns a failed check into a debug-build panic; release
//! builds skip it.

/// Panics in debug builds when `holds` is false.
#[inline(always)]
pub(crate) fn debug_check(holds: bool, fact: &str) {
    debug_assert!(holds, "dag invariant broken: {fact}");
}

/// A topological order of a finite DAG lists every vertex exactly once.
///
/// **Theorem**: A finite directed graph has a topological ordering covering
/// all of its vertices iff it is acyclic.
///
/// **Proof sketch**: Every finite DAG has a vertex with in-degree zero;
/// removing it leaves a DAG, so repeated removal empties the graph. Conversely
/// a vertex on a cycle never reaches in-degree zero and is never emitted.
pub const fn topological_order_is_complete(order_len: usize, vertex_count: usize) -> bool {
    order_len == vertex_count
}

/// A simple DAG on `n` vertices has at most `n(n-1)/2` edges.
///
/// **Theorem**: Fix a topological order. Every edge goes from an earlier
/// vertex to a later one, and each unordered pair carries at most one edge.
pub const fn edge_count_within_bound(vertex_count: usize, edge_count: usize) -> bool {
    if vertex_count < 2 {
        return edge_count == 0;
    }
    edge_count <= vertex_count * (vertex_count - 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_count_bound() {
        assert!(edge_count_within_bound(0, 0));
        assert!(!edge_count_within_bound(1, 1));
        assert!(edge_count_within_bound(4, 6));
        assert!(!edge_count_within_bound(4, 7));
    }

    #[test]
    fn test_topological_order_is_complete() {
        assert!(topological_order_is_complete(3, 3));
        assert!(!topological_order_is_complete(2, 3));
    }
}
