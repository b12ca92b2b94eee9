use crate::catalog::{LEFT_OPERAND_HANDLE, OUTPUT_HANDLE, RIGHT_OPERAND_HANDLE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of generated edge ids, as the diagramming host spells it.
pub const EDGE_ID_PREFIX: &str = "reactflow__edge-";

/// A directed edge between two node handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub source_handle: String,
    pub target_handle: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub selected: bool,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        source_handle: impl Into<String>,
        target: impl Into<String>,
        target_handle: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            source_handle: source_handle.into(),
            target_handle: target_handle.into(),
            selected: false,
        }
    }

    /// The id the canvas gives an edge created by a connection gesture,
    /// before any suffix needed to keep it unique.
    pub fn derive_id(source: &str, source_handle: &str, target: &str, target_handle: &str) -> String {
        format!(
            "{}{}-{}-{}-{}",
            EDGE_ID_PREFIX, source, source_handle, target, target_handle
        )
    }

    /// Whether this edge joins the same two handles as `other`.
    pub fn same_endpoints(&self, other: &Edge) -> bool {
        self.source == other.source
            && self.source_handle == other.source_handle
            && self.target == other.target
            && self.target_handle == other.target_handle
    }
}

/// A connection proposed by the host when the user releases an edge drag.
///
/// Handles are optional, as the host may not report which handle was hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub source_handle: Option<String>,
    #[serde(default)]
    pub target_handle: Option<String>,
}

impl Connection {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            source_handle: None,
            target_handle: None,
        }
    }

    pub fn with_source_handle(mut self, handle: impl Into<String>) -> Self {
        self.source_handle = Some(handle.into());
        self
    }

    pub fn with_target_handle(mut self, handle: impl Into<String>) -> Self {
        self.target_handle = Some(handle.into());
        self
    }

    pub fn source_handle_or_default(&self) -> &str {
        self.source_handle.as_deref().unwrap_or(OUTPUT_HANDLE)
    }
}

/// One of the two input slots of a rate-of-change node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandSlot {
    Left,
    Right,
}

impl OperandSlot {
    pub fn handle(self) -> &'static str {
        match self {
            OperandSlot::Left => LEFT_OPERAND_HANDLE,
            OperandSlot::Right => RIGHT_OPERAND_HANDLE,
        }
    }

    pub fn from_handle(handle: &str) -> Option<Self> {
        match handle {
            LEFT_OPERAND_HANDLE => Some(OperandSlot::Left),
            RIGHT_OPERAND_HANDLE => Some(OperandSlot::Right),
            _ => None,
        }
    }
}

impl fmt::Display for OperandSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.handle())
    }
}
