pub mod edge;
pub mod node;
pub mod snapshot;

pub use edge::*;
pub use node::*;
pub use snapshot::*;

/// Number of edges leaving `node_id`.
pub fn outgoing_count(edges: &[Edge], node_id: &str) -> usize {
    edges.iter().filter(|e| e.source == node_id).count()
}

/// Number of edges entering `node_id`.
pub fn incoming_count(edges: &[Edge], node_id: &str) -> usize {
    edges.iter().filter(|e| e.target == node_id).count()
}
