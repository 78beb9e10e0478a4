//! # `keyed_dag` - String-Keyed Directed Acyclic Graph
//!
//! An in-memory DAG whose vertices are identified by unique string ids and
//! carry an opaque caller payload. Edges are directed, at most one per
//! ordered pair, and every insertion that would close a cycle is rejected.
//!
//! ## Guarantees
//!
//! - **Bidirectional adjacency**: edge `a -> b` exists iff `b` is in the
//!   children of `a` and `a` is in the parents of `b`. Both sides are always
//!   updated together.
//! - **Acyclicity**: `add_edge(a, b)` fails with [`DagError::Cycle`] when `a`
//!   is reachable from `b`, including the self-loop case.
//! - **Idempotent removal**: removing an absent vertex or edge is a no-op.
//! - **Non-mutating sorts**: both topological sorts run on a scratch copy.
//!
//! ## Architecture
//!
//! The graph owns one map from id to [`Vertex`]. Adjacency lists hold ids,
//! not references, and every traversal re-resolves through the map. There
//! are no reference cycles. Payloads sit behind `Rc`, so copying a graph
//! clones the records and shares the payloads.
//!
//! ### Concurrency
//!
//! Nothing here locks. Payload handles are `Rc`, so a `Dag` is neither `Send`
//! nor `Sync` and stays on the thread that built it. Callers that share one
//! graph across parts of that thread coordinate access themselves, for
//! example through a `RefCell<Dag<V>>`.
//!
//! ### Cargo Features
//!
//! - `tracing`: emit `tracing` events for mutations, rejected edges and
//!   sorts. Off by default, in which case the crate never logs.
//!
//! ## Example
//!
//! ```rust
//! use keyed_dag::{Dag, DagError};
//!
//! let mut dag = Dag::new();
//! for id in ["v-1", "v-2", "v-3", "v-4", "v-5", "v-6"] {
//!     dag.add_vertex(id, ()).unwrap();
//! }
//! dag.add_edge("v-4", "v-2").unwrap();
//! dag.add_edge("v-2", "v-1").unwrap();
//!
//! assert_eq!(dag.add_edge("v-1", "v-4"), Err(DagError::cycle("v-1", "v-4")));
//!
//! let order: Vec<&str> = dag
//!     .topological_sort_stable()
//!     .into_iter()
//!     .map(|v| v.id())
//!     .collect();
//! assert_eq!(order, ["v-3", "v-4", "v-2", "v-1", "v-5", "v-6"]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod graph;
mod trace;

pub use graph::{Dag, DagError, DagResult, Descendants, Vertex};
