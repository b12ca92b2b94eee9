use crate::error::ConnectionError;
use crate::graph::{Edge, OperandSlot};
use log::warn;

/// Picks the operand slot a new edge into rate-of-change node `target_id` occupies.
///
/// Slots fill in arrival order: left first, then right. The upstream node's
/// category plays no part in the choice.
pub fn assign_operand_slot(target_id: &str, edges: &[Edge]) -> Result<OperandSlot, ConnectionError> {
    let occupied = |slot: OperandSlot| {
        edges
            .iter()
            .any(|e| e.target == target_id && e.target_handle == slot.handle())
    };

    if !occupied(OperandSlot::Left) {
        Ok(OperandSlot::Left)
    } else if !occupied(OperandSlot::Right) {
        Ok(OperandSlot::Right)
    } else {
        warn!("Rate of change node '{}' already has two operands connected", target_id);
        Err(ConnectionError::OperandSlotsFull(target_id.to_string()))
    }
}

/// Current occupancy of both slots of `target_id`, as `(left, right)`.
pub fn operand_occupancy(target_id: &str, edges: &[Edge]) -> (bool, bool) {
    edges
        .iter()
        .filter(|e| e.target == target_id)
        .fold((false, false), |(left, right), e| {
            match OperandSlot::from_handle(&e.target_handle) {
                Some(OperandSlot::Left) => (true, right),
                Some(OperandSlot::Right) => (left, true),
                None => (left, right),
            }
        })
}
