use super::{Edge, Node};
use crate::error::GraphError;
use ahash::AHashSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// The node and edge arrays exchanged with the diagramming host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    /// Parses and validates a snapshot from the host's JSON.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        let snapshot: GraphSnapshot =
            serde_json::from_str(json).map_err(|e| GraphError::JsonParseError(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String, GraphError> {
        serde_json::to_string_pretty(self).map_err(|e| GraphError::JsonParseError(e.to_string()))
    }

    /// Structural sanity only: unique node ids, edges between existing nodes,
    /// and payloads shaped like their node type. Connection rules are not
    /// re-applied to imported edges.
    pub fn validate(&self) -> Result<(), GraphError> {
        if let Some(dup) = self.nodes.iter().map(|n| n.id.as_str()).duplicates().next() {
            return Err(GraphError::DuplicateNodeId(dup.to_string()));
        }

        for node in &self.nodes {
            if let Some(category) = node.category() {
                if node.data.category() != Some(category) {
                    return Err(GraphError::PayloadMismatch {
                        node_id: node.id.clone(),
                        type_name: node.node_type.clone(),
                    });
                }
            }
        }

        let ids: AHashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !ids.contains(endpoint.as_str()) {
                    return Err(GraphError::NodeNotFound {
                        edge_id: edge.id.clone(),
                        missing_node_id: endpoint.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
