use thiserror::Error;

/// Reasons a proposed connection is refused.
///
/// A rejection is never fatal: the canvas simply leaves its state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    #[error("Node '{0}' does not exist on the canvas")]
    NodeNotFound(String),

    #[error("Node '{node_id}' has no connection rules for type '{type_name}'")]
    UnknownNodeType { node_id: String, type_name: String },

    #[error("Node '{source_type}' cannot connect to '{target_type}'")]
    TargetNotAllowed {
        source_type: String,
        target_type: String,
    },

    #[error("Node '{node_id}' already has {count} outgoing connection(s), the maximum allowed")]
    OutgoingLimitReached { node_id: String, count: usize },

    #[error("Node '{node_id}' already has {count} incoming connection(s), the maximum allowed")]
    IncomingLimitReached { node_id: String, count: usize },

    #[error("Rate of change node '{0}' already has both operands connected")]
    OperandSlotsFull(String),

    #[error("Handle '{handle}' is not an {direction} handle of node '{node_id}'")]
    InvalidHandle {
        node_id: String,
        handle: String,
        direction: &'static str,
    },

    #[error("An edge from '{source_id}' to '{target_id}' on handle '{target_handle}' already exists")]
    DuplicateEdge {
        source_id: String,
        target_id: String,
        target_handle: String,
    },

    #[error("No connection is being dragged")]
    NoActiveGesture,
}

/// Errors raised while importing a graph snapshot from the diagramming host.
#[derive(Error, Debug, Clone)]
pub enum GraphError {
    #[error("Failed to parse graph JSON: {0}")]
    JsonParseError(String),

    #[error("Node id '{0}' appears more than once")]
    DuplicateNodeId(String),

    #[error("Node '{node_id}' of type '{type_name}' carries data of a different node type")]
    PayloadMismatch { node_id: String, type_name: String },

    #[error("Edge '{edge_id}' references node '{missing_node_id}', which was not found")]
    NodeNotFound {
        edge_id: String,
        missing_node_id: String,
    },
}
