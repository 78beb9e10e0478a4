//! Reachability over child edges.
//!
//! [`Descendants`] is an iterator-based depth-first traversal. It marks
//! vertices when they are pushed, so each vertex is yielded at most once even
//! if the graph were ever left inconsistent.

use std::collections::HashSet;

use super::dag::Dag;
use super::vertex::Vertex;

/// A depth-first iterator over every vertex reachable from a start vertex.
///
/// The start vertex itself is not yielded. Children are visited in
/// adjacency-list order.
pub struct Descendants<'a, V> {
    graph: &'a Dag<V>,
    visited: HashSet<&'a str>,
    stack: Vec<&'a str>,
}

impl<'a, V> Descendants<'a, V> {
    /// Creates a traversal starting below `start`.
    ///
    /// An unknown `start` yields nothing.
    pub fn new(graph: &'a Dag<V>, start: &str) -> Self {
        let mut this = Self {
            graph,
            visited: HashSet::new(),
            stack: Vec::new(),
        };

        if let Some(vertex) = graph.vertex(start) {
            this.push_children(vertex);
        }

        this
    }

    fn push_children(&mut self, vertex: &'a Vertex<V>) {
        for child in vertex.children().iter().rev() {
            if self.visited.insert(child.as_str()) {
                self.stack.push(child.as_str());
            }
        }
    }
}

impl<'a, V> Iterator for Descendants<'a, V> {
    type Item = &'a Vertex<V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let id = self.stack.pop()?;
            // Dangling ids are skipped rather than trusted.
            if let Some(vertex) = self.graph.vertex(id) {
                self.push_children(vertex);
                return Some(vertex);
            }
        }
    }
}

impl<V> Dag<V> {
    /// Returns a depth-first iterator over the vertices reachable from `start`.
    pub fn descendants(&self, start: &str) -> Descendants<'_, V> {
        Descendants::new(self, start)
    }

    /// Returns the ids of every vertex reachable from `start`.
    ///
    /// Runs in \(O(n + m)\). An unknown `start` yields an empty set.
    pub fn reachable(&self, start: &str) -> HashSet<&str> {
        self.descendants(start).map(Vertex::id).collect()
    }

    /// Returns true if `to` is reachable from `from` along child edges.
    ///
    /// `from` only counts as reachable from itself through a cycle, which a
    /// valid graph never contains.
    pub fn depth_first_search(&self, from: &str, to: &str) -> bool {
        self.descendants(from).any(|v| v.id() == to)
    }
}
