//! Connection legality: the static per-category rule table, plus slot
//! assignment for the two-input rate-of-change node.

mod slots;
mod table;

pub use slots::{assign_operand_slot, operand_occupancy};
pub use table::{ConnectionRule, Limit, rule_for};

use crate::catalog::NodeCategory;
use crate::error::ConnectionError;
use crate::graph::{Edge, Node, incoming_count, outgoing_count};

/// Decides whether an edge from `source` to `target` may be added to `edges`.
///
/// Pure: the same nodes and edges always give the same answer. Checks run in
/// a fixed order and the first failing one is reported:
///
/// 1. both node types have a rule entry;
/// 2. a rate-of-change target still reports a free operand slot;
/// 3. the target category is an allowed downstream of the source;
/// 4. the source is below its outgoing limit;
/// 5. the target is below its required-input count.
pub fn check_connection(source: &Node, target: &Node, edges: &[Edge]) -> Result<(), ConnectionError> {
    let source_rule = rule_for(&source.node_type).ok_or_else(|| ConnectionError::UnknownNodeType {
        node_id: source.id.clone(),
        type_name: source.node_type.clone(),
    })?;
    let target_rule = rule_for(&target.node_type).ok_or_else(|| ConnectionError::UnknownNodeType {
        node_id: target.id.clone(),
        type_name: target.node_type.clone(),
    })?;
    // Both tags resolved through the rule table, so they are catalog categories.
    let Some(target_category) = target.category() else {
        return Err(ConnectionError::UnknownNodeType {
            node_id: target.id.clone(),
            type_name: target.node_type.clone(),
        });
    };

    if target_category == NodeCategory::RateOfChange {
        if let Some(data) = target.data.as_rate_of_change() {
            if !data.has_free_slot() {
                return Err(ConnectionError::OperandSlotsFull(target.id.clone()));
            }
        }
    }

    if !source_rule.allows_target(target_category) {
        return Err(ConnectionError::TargetNotAllowed {
            source_type: source.node_type.clone(),
            target_type: target.node_type.clone(),
        });
    }

    let outgoing = outgoing_count(edges, &source.id);
    if !source_rule.max_outgoing.admits(outgoing) {
        return Err(ConnectionError::OutgoingLimitReached {
            node_id: source.id.clone(),
            count: outgoing,
        });
    }

    let incoming = incoming_count(edges, &target.id);
    if incoming >= target_rule.required_inputs {
        return Err(ConnectionError::IncomingLimitReached {
            node_id: target.id.clone(),
            count: incoming,
        });
    }

    Ok(())
}

/// Boolean form of [`check_connection`].
pub fn is_legal(source: &Node, target: &Node, edges: &[Edge]) -> bool {
    check_connection(source, target, edges).is_ok()
}
