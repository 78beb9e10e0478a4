//! Topological sorts.
//!
//! Both sorts work on a payload-free scratch copy of the graph and detach
//! vertices from it as they are emitted, so the graph itself is never
//! touched. The results borrow vertices from the original graph.

use std::collections::BTreeMap;

use super::dag::{math_proofs, Dag};
use super::vertex::Vertex;
use crate::trace::dag_trace;

impl<V> Dag<V> {
    /// Returns the vertices in a topological order.
    ///
    /// Each pass scans the remaining vertices, detaches every one without
    /// parents and appends it to the output in scan order. The scan follows
    /// hash-map iteration order, so when several vertices are ready at once
    /// their relative order is **not deterministic** across graphs or runs.
    /// Use [`Dag::topological_sort_stable`] for a reproducible order.
    pub fn topological_sort(&self) -> Vec<&Vertex<V>> {
        let mut scratch = self.skeleton();
        let mut order = Vec::with_capacity(scratch.len());

        while !scratch.is_empty() {
            let ready: Vec<String> = scratch.roots().map(|v| v.id().to_owned()).collect();
            if ready.is_empty() {
                break;
            }
            for id in ready {
                scratch.remove_vertex(&id);
                order.push(id);
            }
        }

        self.resolve(&order)
    }

    /// Returns the vertices in the topological order that always emits the
    /// smallest ready id next.
    ///
    /// Ready vertices (no remaining parents) wait in a pool ordered by id.
    /// Each step pops the smallest, detaches it from its children and adds
    /// any child left without parents to the pool. The output is fully
    /// determined by the graph.
    ///
    /// # Example
    ///
    /// ```
    /// use keyed_dag::Dag;
    ///
    /// let mut dag = Dag::new();
    /// for id in ["c", "b", "a"] {
    ///     dag.add_vertex(id, ()).unwrap();
    /// }
    /// dag.add_edge("c", "a").unwrap();
    ///
    /// let ids: Vec<&str> = dag
    ///     .topological_sort_stable()
    ///     .into_iter()
    ///     .map(|v| v.id())
    ///     .collect();
    /// assert_eq!(ids, ["b", "c", "a"]);
    /// ```
    pub fn topological_sort_stable(&self) -> Vec<&Vertex<V>> {
        let mut scratch = self.skeleton();
        let mut pool: BTreeMap<String, Vertex<()>> = BTreeMap::new();
        let mut order = Vec::with_capacity(scratch.len());

        let ready: Vec<String> = scratch.roots().map(|v| v.id().to_owned()).collect();
        for id in ready {
            if let Some(vertex) = scratch.vertices.remove(&id) {
                pool.insert(id, vertex);
            }
        }

        while let Some((id, vertex)) = pool.pop_first() {
            for child in vertex.children() {
                let freed = match scratch.vertices.get_mut(child) {
                    Some(c) => {
                        c.remove_parent(&id);
                        c.is_root()
                    }
                    None => false,
                };
                if freed {
                    if let Some(c) = scratch.vertices.remove(child) {
                        pool.insert(child.clone(), c);
                    }
                }
            }
            order.push(id);
        }

        self.resolve(&order)
    }

    fn resolve(&self, order: &[String]) -> Vec<&Vertex<V>> {
        let sorted: Vec<&Vertex<V>> = order
            .iter()
            .filter_map(|id| self.vertices.get(id.as_str()))
            .collect();

        math_proofs::debug_check(
            math_proofs::topological_order_is_complete(sorted.len(), self.len()),
            "topological order must cover every vertex",
        );
        dag_trace!(vertices = sorted.len(), "topological sort");
        sorted
    }
}
