//! Vertex records.
//!
//! A vertex holds a shared handle to its payload and two adjacency lists of
//! vertex ids. The lists hold keys, never references, so every traversal
//! re-resolves through the owning [`Dag`](crate::Dag).

use std::rc::Rc;

/// A uniquely keyed vertex with a caller payload.
///
/// `parents` lists the vertices with an edge into this one and `children`
/// lists the vertices this one has an edge into. Both keep insertion order.
///
/// The payload sits behind an `Rc`; copies of a graph point at the same
/// payload allocation.
#[derive(Debug)]
pub struct Vertex<V> {
    id: String,
    value: Rc<V>,
    parents: Vec<String>,
    children: Vec<String>,
}

impl<V> Vertex<V> {
    pub(crate) fn new(id: String, value: V) -> Self {
        Self {
            id,
            value: Rc::new(value),
            parents: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Returns the vertex id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the caller payload.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the shared payload handle.
    pub fn shared_value(&self) -> &Rc<V> {
        &self.value
    }

    /// Returns the ids of vertices with an edge into this one.
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    /// Returns the ids of vertices this one has an edge into.
    pub fn children(&self) -> &[String] {
        &self.children
    }

    /// Returns the number of incoming edges.
    pub fn in_degree(&self) -> usize {
        self.parents.len()
    }

    /// Returns the number of outgoing edges.
    pub fn out_degree(&self) -> usize {
        self.children.len()
    }

    /// Returns true if no edge points into this vertex.
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    pub(crate) fn has_child(&self, id: &str) -> bool {
        self.children.iter().any(|c| c == id)
    }

    pub(crate) fn push_child(&mut self, id: String) {
        self.children.push(id);
    }

    pub(crate) fn push_parent(&mut self, id: String) {
        self.parents.push(id);
    }

    pub(crate) fn remove_child(&mut self, id: &str) {
        remove_all(&mut self.children, id);
    }

    pub(crate) fn remove_parent(&mut self, id: &str) {
        remove_all(&mut self.parents, id);
    }

    /// Same id and identical parent/child sequences. Payloads are ignored.
    pub(crate) fn same_links(&self, other: &Vertex<V>) -> bool {
        self.id == other.id && self.parents == other.parents && self.children == other.children
    }

    pub(crate) fn into_shared_value(self) -> Rc<V> {
        self.value
    }

    /// Copies the record without its payload.
    pub(crate) fn skeleton(&self) -> Vertex<()> {
        Vertex {
            id: self.id.clone(),
            value: Rc::new(()),
            parents: self.parents.clone(),
            children: self.children.clone(),
        }
    }
}

impl<V> Clone for Vertex<V> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            value: Rc::clone(&self.value),
            parents: self.parents.clone(),
            children: self.children.clone(),
        }
    }
}

/// Removes every occurrence of `id`, walking from the back so in-place
/// shrinking never skips an entry.
fn remove_all(list: &mut Vec<String>, id: &str) {
    for i in (0..list.len()).rev() {
        if list[i] == id {
            list.remove(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vertex_has_no_links() {
        let v = Vertex::new("a".to_string(), 7);
        assert_eq!(v.id(), "a");
        assert_eq!(*v.value(), 7);
        assert!(v.parents().is_empty());
        assert!(v.children().is_empty());
        assert!(v.is_root());
    }

    #[test]
    fn test_remove_child_keeps_order() {
        let mut v = Vertex::new("a".to_string(), ());
        for c in ["b", "c", "d"] {
            v.push_child(c.to_string());
        }
        v.remove_child("c");
        assert_eq!(v.children(), ["b", "d"]);
        assert_eq!(v.out_degree(), 2);

        v.remove_child("missing");
        assert_eq!(v.children(), ["b", "d"]);
    }

    #[test]
    fn test_remove_all_handles_adjacent_duplicates() {
        let mut list: Vec<String> = ["x", "y", "y", "z", "y"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        remove_all(&mut list, "y");
        assert_eq!(list, ["x", "z"]);
    }

    #[test]
    fn test_clone_shares_payload() {
        let v = Vertex::new("a".to_string(), vec![0u8; 64]);
        let w = v.clone();
        assert!(Rc::ptr_eq(v.shared_value(), w.shared_value()));
        assert_eq!(Rc::strong_count(v.shared_value()), 2);
    }

    #[test]
    fn test_same_links_ignores_payload() {
        let mut a = Vertex::new("a".to_string(), 1);
        let mut b = Vertex::new("a".to_string(), 2);
        a.push_parent("p".to_string());
        b.push_parent("p".to_string());
        assert!(a.same_links(&b));

        b.push_child("c".to_string());
        assert!(!a.same_links(&b));
    }
}
