//! A string-keyed directed acyclic graph with caller payloads.
//!
//! Vertices live in a single map from id to [`Vertex`]; adjacency lists store
//! ids only. Every edge is recorded on both endpoints (the child list of the
//! source and the parent list of the target) and the two are always updated
//! together.
//!
//! ## Concurrency
//!
//! `Dag` has no internal locking. Concurrent mutation, or reads racing a
//! mutation, need external synchronization supplied by the caller.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(1)\) | Hash insert |
//! | `remove_vertex` | \(O(\sum \deg)\) | Strips the id from every neighbour |
//! | `add_edge` | \(O(n + m)\) | Reachability search for cycle prevention |
//! | `remove_edge` | \(O(\deg)\) | |
//! | `edge_exists` | \(O(\deg)\) | Short-circuits when the target has no parents |

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::error::{DagError, DagResult};
use super::vertex::Vertex;
use crate::trace::{dag_debug, dag_trace};

pub mod math_proofs;

/// A directed acyclic graph keyed by string ids.
///
/// # Example
///
/// ```
/// use keyed_dag::{Dag, DagError};
///
/// let mut dag = Dag::new();
/// dag.add_vertex("fetch", 1).unwrap();
/// dag.add_vertex("build", 2).unwrap();
/// dag.add_edge("fetch", "build").unwrap();
///
/// assert!(dag.edge_exists("fetch", "build").unwrap());
/// assert!(matches!(dag.add_edge("build", "fetch"), Err(DagError::Cycle { .. })));
/// ```
pub struct Dag<V> {
    pub(crate) vertices: HashMap<String, Vertex<V>>,
}

impl<V> Dag<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
        }
    }

    /// Creates an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vertex::out_degree).sum()
    }

    /// Returns true if a vertex with this id is present.
    pub fn contains_vertex(&self, id: &str) -> bool {
        self.vertices.contains_key(id)
    }

    /// Returns a read-only view of the vertex with this id.
    pub fn vertex(&self, id: &str) -> Option<&Vertex<V>> {
        self.vertices.get(id)
    }

    /// Iterates over all vertices in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<V>> {
        self.vertices.values()
    }

    /// Iterates over vertices without parents in unspecified order.
    pub fn roots(&self) -> impl Iterator<Item = &Vertex<V>> {
        self.vertices.values().filter(|v| v.is_root())
    }

    /// Inserts a vertex with no edges.
    ///
    /// # Errors
    /// [`DagError::VertexExists`] if the id is already present. The existing
    /// vertex is left untouched.
    pub fn add_vertex(&mut self, id: impl Into<String>, value: V) -> DagResult<()> {
        let id = id.into();
        if self.vertices.contains_key(&id) {
            return Err(DagError::vertex_exists(id));
        }

        dag_trace!(vertex = %id, "add vertex");
        self.vertices.insert(id.clone(), Vertex::new(id, value));
        Ok(())
    }

    /// Removes a vertex and every edge touching it, returning its payload
    /// handle.
    ///
    /// The handle is still shared with any copy of the graph that holds the
    /// same vertex. Removing an absent id is a no-op and returns `None`.
    pub fn remove_vertex(&mut self, id: &str) -> Option<Rc<V>> {
        let vertex = self.vertices.remove(id)?;

        for parent in vertex.parents() {
            if let Some(p) = self.vertices.get_mut(parent) {
                p.remove_child(id);
            }
        }
        for child in vertex.children() {
            if let Some(c) = self.vertices.get_mut(child) {
                c.remove_parent(id);
            }
        }

        dag_trace!(
            vertex = %id,
            parents = vertex.in_degree(),
            children = vertex.out_degree(),
            "remove vertex"
        );
        Some(vertex.into_shared_value())
    }

    /// Adds the edge `from -> to`.
    ///
    /// # Errors
    /// - [`DagError::Cycle`] if `from == to`.
    /// - [`DagError::VertexNotExists`] if either endpoint is absent.
    /// - [`DagError::EdgeExists`] if the edge is already present.
    /// - [`DagError::Cycle`] if `from` is reachable from `to`.
    pub fn add_edge(&mut self, from: &str, to: &str) -> DagResult<()> {
        if from == to {
            dag_debug!(from, to, "rejected self-loop");
            return Err(DagError::cycle(from, to));
        }

        let has_child = self.require(from)?.has_child(to);
        self.require(to)?;

        if has_child {
            return Err(DagError::edge_exists(from, to));
        }

        if self.depth_first_search(to, from) {
            dag_debug!(from, to, "rejected edge closing a cycle");
            return Err(DagError::cycle(from, to));
        }

        if let Some(v) = self.vertices.get_mut(from) {
            v.push_child(to.to_owned());
        }
        if let Some(v) = self.vertices.get_mut(to) {
            v.push_parent(from.to_owned());
        }

        dag_trace!(from, to, "add edge");
        Ok(())
    }

    /// Removes the edge `from -> to`.
    ///
    /// Removing an absent edge between present vertices is a no-op.
    ///
    /// # Errors
    /// [`DagError::VertexNotExists`] if either endpoint is absent.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> DagResult<()> {
        self.require(from)?;
        self.require(to)?;

        if let Some(v) = self.vertices.get_mut(to) {
            v.remove_parent(from);
        }
        if let Some(v) = self.vertices.get_mut(from) {
            v.remove_child(to);
        }

        dag_trace!(from, to, "remove edge");
        Ok(())
    }

    /// Returns true if the edge `from -> to` is present.
    ///
    /// # Errors
    /// [`DagError::VertexNotExists`] if either endpoint is absent.
    pub fn edge_exists(&self, from: &str, to: &str) -> DagResult<bool> {
        let from_vertex = self.require(from)?;
        let to_vertex = self.require(to)?;

        if to_vertex.is_root() {
            return Ok(false);
        }

        Ok(from_vertex.has_child(to))
    }

    /// Produces a shallow copy: independent vertex records and adjacency
    /// lists in the same order, sharing each payload with `self`.
    ///
    /// Payloads are never cloned, only their `Rc` handles. The result always
    /// compares equal to `self`.
    pub fn copy(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
        }
    }

    /// Copies the topology without payloads.
    pub(crate) fn skeleton(&self) -> Dag<()> {
        Dag {
            vertices: self
                .vertices
                .iter()
                .map(|(id, v)| (id.clone(), v.skeleton()))
                .collect(),
        }
    }

    fn require(&self, id: &str) -> DagResult<&Vertex<V>> {
        self.vertices
            .get(id)
            .ok_or_else(|| DagError::vertex_not_exists(id))
    }

    /// Validates the structural invariants of the graph.
    ///
    /// This method checks that:
    /// 1. Every map key matches the id stored in its vertex
    /// 2. Every adjacency entry names a present vertex
    /// 3. Edges are recorded on both endpoints, once, and never as self-loops
    /// 4. The edge count fits a simple DAG
    ///
    /// Returns `true` if all invariants hold.
    pub fn validate_invariants(&self) -> bool {
        for (key, vertex) in &self.vertices {
            if key != vertex.id() {
                return false;
            }

            for (i, child) in vertex.children().iter().enumerate() {
                if child == key || vertex.children()[..i].contains(child) {
                    return false;
                }
                match self.vertices.get(child) {
                    Some(c) if c.parents().iter().filter(|p| *p == key).count() == 1 => {}
                    _ => return false,
                }
            }

            for parent in vertex.parents() {
                match self.vertices.get(parent) {
                    Some(p) if p.has_child(key) => {}
                    _ => return false,
                }
            }
        }

        let parent_links: usize = self.vertices.values().map(Vertex::in_degree).sum();
        let edges = self.edge_count();
        parent_links == edges && math_proofs::edge_count_within_bound(self.len(), edges)
    }
}

impl<V> Default for Dag<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for Dag<V> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

/// Two graphs are equal when they hold the same ids and every vertex has the
/// same parent and child sequences, order included. Payloads are not compared.
impl<V> PartialEq for Dag<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.vertices.iter().all(|(id, v)| {
                other
                    .vertices
                    .get(id)
                    .is_some_and(|other_v| v.same_links(other_v))
            })
    }
}

impl<V> Eq for Dag<V> {}

impl<V: fmt::Debug> fmt::Debug for Dag<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&String> = self.vertices.keys().collect();
        ids.sort();
        f.debug_list()
            .entries(ids.into_iter().filter_map(|id| self.vertices.get(id)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(ids: &[&str]) -> Dag<usize> {
        let mut dag = Dag::new();
        for (i, id) in ids.iter().enumerate() {
            dag.add_vertex(*id, i).unwrap();
        }
        for pair in ids.windows(2) {
            dag.add_edge(pair[0], pair[1]).unwrap();
        }
        dag
    }

    #[test]
    fn test_add_vertex_rejects_duplicates() {
        let mut dag = Dag::new();
        dag.add_vertex("a", 1).unwrap();
        assert_eq!(dag.add_vertex("a", 2), Err(DagError::vertex_exists("a")));
        assert_eq!(*dag.vertex("a").unwrap().value(), 1);
        assert_eq!(dag.len(), 1);
    }

    #[test]
    fn test_add_edge_links_both_endpoints() {
        let dag = chain(&["a", "b"]);
        assert_eq!(dag.vertex("a").unwrap().children(), ["b"]);
        assert_eq!(dag.vertex("b").unwrap().parents(), ["a"]);
        assert_eq!(dag.edge_count(), 1);
        assert!(dag.validate_invariants());
    }

    #[test]
    fn test_add_edge_errors() {
        let mut dag = chain(&["a", "b", "c"]);

        assert_eq!(dag.add_edge("a", "a"), Err(DagError::cycle("a", "a")));
        assert_eq!(
            dag.add_edge("a", "zz"),
            Err(DagError::vertex_not_exists("zz"))
        );
        assert_eq!(
            dag.add_edge("zz", "a"),
            Err(DagError::vertex_not_exists("zz"))
        );
        assert_eq!(dag.add_edge("a", "b"), Err(DagError::edge_exists("a", "b")));
        assert_eq!(dag.add_edge("b", "a"), Err(DagError::cycle("b", "a")));
        assert_eq!(dag.add_edge("c", "a"), Err(DagError::cycle("c", "a")));

        assert_eq!(dag.vertex("a").unwrap().children(), ["b"]);
        assert_eq!(dag.edge_count(), 2);
        assert!(dag.validate_invariants());
    }

    #[test]
    fn test_self_loop_checked_before_existence() {
        let mut dag: Dag<()> = Dag::new();
        assert_eq!(dag.add_edge("x", "x"), Err(DagError::cycle("x", "x")));
    }

    #[test]
    fn test_remove_vertex_strips_all_links() {
        let mut dag = chain(&["a", "b", "c"]);
        dag.add_edge("a", "c").unwrap();

        assert_eq!(dag.remove_vertex("b").as_deref(), Some(&1));
        assert!(!dag.contains_vertex("b"));
        assert_eq!(dag.vertex("a").unwrap().children(), ["c"]);
        assert_eq!(dag.vertex("c").unwrap().parents(), ["a"]);
        assert!(dag.validate_invariants());

        assert_eq!(dag.remove_vertex("b"), None);
        assert_eq!(dag.len(), 2);
    }

    #[test]
    fn test_remove_edge() {
        let mut dag = chain(&["a", "b"]);
        dag.remove_edge("a", "b").unwrap();
        assert!(!dag.edge_exists("a", "b").unwrap());
        assert!(dag.vertex("a").unwrap().children().is_empty());
        assert!(dag.vertex("b").unwrap().parents().is_empty());

        // absent edge is a no-op
        dag.remove_edge("a", "b").unwrap();
        assert_eq!(
            dag.remove_edge("a", "nope"),
            Err(DagError::vertex_not_exists("nope"))
        );
    }

    #[test]
    fn test_edge_exists() {
        let dag = chain(&["a", "b", "c"]);
        assert!(dag.edge_exists("a", "b").unwrap());
        assert!(!dag.edge_exists("b", "a").unwrap());
        assert!(!dag.edge_exists("a", "c").unwrap());
        assert_eq!(
            dag.edge_exists("a", "nope"),
            Err(DagError::vertex_not_exists("nope"))
        );
    }

    #[test]
    fn test_copy_is_equal_and_independent() {
        let original = chain(&["a", "b", "c"]);
        let mut copy = original.copy();
        assert_eq!(copy, original);

        copy.remove_vertex("b");
        assert_ne!(copy, original);
        assert_eq!(original.len(), 3);
        assert!(original.edge_exists("a", "b").unwrap());
    }

    #[test]
    fn test_validate_invariants_spots_one_sided_edge() {
        let mut dag = chain(&["a", "b"]);
        assert!(dag.validate_invariants());

        if let Some(c) = dag.vertices.get_mut("b") {
            c.push_child("a".to_string());
        }
        assert!(!dag.validate_invariants());
    }

    #[test]
    fn test_copy_shares_payload_allocation() {
        let mut dag = Dag::new();
        dag.add_vertex("a", vec![1u8; 1024]).unwrap();
        let copy = dag.copy();

        let ours = dag.vertex("a").unwrap();
        let theirs = copy.vertex("a").unwrap();
        assert_eq!(ours.value().as_ptr(), theirs.value().as_ptr());
        assert!(Rc::ptr_eq(ours.shared_value(), theirs.shared_value()));
    }

    #[test]
    fn test_removed_payload_outlives_graph_in_copy() {
        let mut dag = Dag::new();
        dag.add_vertex("a", String::from("payload")).unwrap();
        let copy = dag.copy();

        let removed = dag.remove_vertex("a").unwrap();
        assert_eq!(removed.as_str(), "payload");
        assert_eq!(Rc::strong_count(&removed), 2);
        assert_eq!(copy.vertex("a").unwrap().value(), "payload");
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let mut left: Dag<()> = Dag::new();
        let mut right: Dag<()> = Dag::new();
        for id in ["a", "b", "c"] {
            left.add_vertex(id, ()).unwrap();
            right.add_vertex(id, ()).unwrap();
        }
        left.add_edge("a", "b").unwrap();
        left.add_edge("a", "c").unwrap();
        right.add_edge("a", "c").unwrap();
        right.add_edge("a", "b").unwrap();

        assert_ne!(left, right);
    }

    #[test]
    fn test_equality_ignores_payload() {
        let mut left = Dag::new();
        let mut right = Dag::new();
        left.add_vertex("a", 1).unwrap();
        right.add_vertex("a", 2).unwrap();
        assert_eq!(left, right);
    }

    #[test]
    fn test_roots() {
        let mut dag = chain(&["a", "b"]);
        dag.add_vertex("lonely", 9).unwrap();
        let mut roots: Vec<&str> = dag.roots().map(Vertex::id).collect();
        roots.sort_unstable();
        assert_eq!(roots, ["a", "lonely"]);
    }

    #[test]
    fn test_skeleton_matches_topology() {
        let dag = chain(&["a", "b", "c"]);
        let skeleton = dag.skeleton();
        assert_eq!(skeleton.len(), 3);
        assert!(skeleton.edge_exists("b", "c").unwrap());
    }
}
