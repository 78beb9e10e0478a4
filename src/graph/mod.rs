//! String-keyed DAG storage and its algorithms.
//!
//! - `dag`: the [`Dag`] store, mutation protocol, copy and equality
//! - `vertex`: [`Vertex`] records and adjacency-list maintenance
//! - `algorithms`: depth-first reachability
//! - `topological`: order-agnostic and stable topological sorts
//! - `render`: indented tree dump

pub mod algorithms;
pub mod dag;
mod error;
mod render;
mod topological;
mod vertex;

pub use algorithms::Descendants;
pub use dag::Dag;
pub use error::{DagError, DagResult};
pub use vertex::Vertex;
