//! Core database trait for graph storage
//!
//! Renderers read nodes and edges through this trait so they do not depend
//! on how the graph is built.

use anyhow::Result;

/// Storage interface for diagram graphs
///
/// Nodes and edges are yielded in a stable order; renderers rely on it for
/// byte-identical output.
pub trait Database {
    /// The node data type for this database
    type Node: Clone;

    /// The edge data type for this database
    type Edge: Clone;

    /// Add a node to the database
    fn add_node(&mut self, node: Self::Node) -> Result<()>;

    /// Add an edge to the database
    fn add_edge(&mut self, edge: Self::Edge) -> Result<()>;

    /// Get a node by name
    fn get_node(&self, id: &str) -> Option<&Self::Node>;

    /// Iterate over all nodes
    fn nodes(&self) -> impl Iterator<Item = &Self::Node>;

    /// Iterate over all edges
    fn edges(&self) -> impl Iterator<Item = &Self::Edge>;

    /// Clear all data from the database
    fn clear(&mut self);

    /// Get the number of nodes
    fn node_count(&self) -> usize;

    /// Get the number of edges
    fn edge_count(&self) -> usize;
}
