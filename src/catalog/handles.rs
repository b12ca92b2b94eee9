use super::category::NodeCategory;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const OUTPUT_HANDLE: &str = "output";
pub const INPUT_HANDLE: &str = "input";
pub const LEFT_OPERAND_HANDLE: &str = "leftOperand";
pub const RIGHT_OPERAND_HANDLE: &str = "rightOperand";

/// Whether edges leave or enter through a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleKind {
    Source,
    Target,
}

impl fmt::Display for HandleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandleKind::Source => f.write_str("output"),
            HandleKind::Target => f.write_str("input"),
        }
    }
}

/// Side of the node card a handle is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleSide {
    Top,
    Bottom,
}

/// A named attachment point on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandleSpec {
    pub id: &'static str,
    pub kind: HandleKind,
    pub side: HandleSide,
}

const fn source(id: &'static str) -> HandleSpec {
    HandleSpec {
        id,
        kind: HandleKind::Source,
        side: HandleSide::Bottom,
    }
}

const fn target(id: &'static str) -> HandleSpec {
    HandleSpec {
        id,
        kind: HandleKind::Target,
        side: HandleSide::Top,
    }
}

const VALUE_SOURCE_HANDLES: &[HandleSpec] = &[source(OUTPUT_HANDLE)];
const RATE_OF_CHANGE_HANDLES: &[HandleSpec] = &[
    target(LEFT_OPERAND_HANDLE),
    target(RIGHT_OPERAND_HANDLE),
    source(OUTPUT_HANDLE),
];
const CONDITION_HANDLES: &[HandleSpec] = &[target(INPUT_HANDLE), source(OUTPUT_HANDLE)];
const SIGNAL_HANDLES: &[HandleSpec] = &[target(INPUT_HANDLE)];

/// The handle layout of a category, inputs first.
pub fn handles_for(category: NodeCategory) -> &'static [HandleSpec] {
    match category {
        NodeCategory::RelativeTimeValue | NodeCategory::DailyAggregation => VALUE_SOURCE_HANDLES,
        NodeCategory::RateOfChange => RATE_OF_CHANGE_HANDLES,
        NodeCategory::Condition => CONDITION_HANDLES,
        NodeCategory::Signal => SIGNAL_HANDLES,
    }
}

/// Looks up a handle of `kind` named `id` on `category`.
pub fn find_handle(category: NodeCategory, id: &str, kind: HandleKind) -> Option<HandleSpec> {
    handles_for(category)
        .iter()
        .copied()
        .find(|h| h.id == id && h.kind == kind)
}

/// The handle an incoming edge lands on when the host did not name one.
pub fn default_input_handle(category: NodeCategory) -> Option<&'static str> {
    handles_for(category)
        .iter()
        .find(|h| h.kind == HandleKind::Target)
        .map(|h| h.id)
}
