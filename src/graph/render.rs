//! Indented tree dump of a graph.

use std::fmt::{self, Write};

use super::dag::Dag;
use super::vertex::Vertex;

impl<V> Dag<V> {
    /// Renders every root and its descendants as an indented tree.
    ///
    /// Roots appear in ascending id order and each tree is followed by a blank
    /// line. Children are rendered depth-first in adjacency-list order; a
    /// vertex reachable along several paths is printed once per path.
    ///
    /// ```
    /// use keyed_dag::Dag;
    ///
    /// let mut dag = Dag::new();
    /// for id in ["a", "b", "c"] {
    ///     dag.add_vertex(id, ()).unwrap();
    /// }
    /// dag.add_edge("a", "b").unwrap();
    /// dag.add_edge("a", "c").unwrap();
    ///
    /// assert_eq!(dag.render(), "a\n    |b\n    c\n\n");
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_tree(&self, out: &mut impl Write) -> fmt::Result {
        let mut roots: Vec<&Vertex<V>> = self.roots().collect();
        roots.sort_by(|a, b| a.id().cmp(b.id()));

        for root in roots {
            self.write_vertex(out, root, "")?;
            out.write_char('\n')?;
        }
        Ok(())
    }

    fn write_vertex(&self, out: &mut impl Write, vertex: &Vertex<V>, prefix: &str) -> fmt::Result {
        writeln!(out, "{prefix}{}", vertex.id())?;

        let last = vertex.children().len().saturating_sub(1);
        for (i, child) in vertex.children().iter().enumerate() {
            let Some(child) = self.vertex(child) else {
                continue;
            };
            let child_prefix = if i == last {
                format!("{prefix}    ")
            } else {
                format!("{prefix}    |")
            };
            self.write_vertex(out, child, &child_prefix)?;
        }
        Ok(())
    }
}

impl<V> fmt::Display for Dag<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested_tree() {
        let mut dag = Dag::new();
        for id in ["v-1", "v-2", "v-3", "v-4"] {
            dag.add_vertex(id, ()).unwrap();
        }
        dag.add_edge("v-1", "v-2").unwrap();
        dag.add_edge("v-1", "v-3").unwrap();
        dag.add_edge("v-2", "v-4").unwrap();

        let expected = "v-1\n    |v-2\n    |    v-4\n    v-3\n\n";
        assert_eq!(dag.render(), expected);
        assert_eq!(dag.to_string(), expected);
    }

    #[test]
    fn test_render_roots_sorted() {
        let mut dag = Dag::new();
        dag.add_vertex("b", ()).unwrap();
        dag.add_vertex("a", ()).unwrap();
        assert_eq!(dag.render(), "a\n\nb\n\n");
    }

    #[test]
    fn test_render_empty() {
        let dag: Dag<()> = Dag::new();
        assert_eq!(dag.render(), "");
    }
}
