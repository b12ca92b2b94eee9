//! Tests for the connection rule table and operand slot assignment.
mod common;
use common::*;
use signalflow::catalog::NodePayload;
use signalflow::prelude::*;
use signalflow::rules::{assign_operand_slot, operand_occupancy};

use signalflow::catalog::NodeCategory::*;

#[test]
fn test_rule_table_entries() {
    let rtv = rule_for("relativeTimeValue").unwrap();
    assert_eq!(rtv.can_connect_to, &[RateOfChange]);
    assert_eq!(rtv.max_outgoing, Limit::Unbounded);
    assert_eq!(rtv.required_inputs, 0);

    let daily = rule_for("dailyAggregation").unwrap();
    assert_eq!(daily.can_connect_to, &[RateOfChange]);
    assert_eq!(daily.max_outgoing, Limit::Unbounded);

    let roc = rule_for("rateOfChange").unwrap();
    assert_eq!(roc.can_connect_to, &[Condition]);
    assert_eq!(roc.max_outgoing, Limit::AtMost(1));
    assert_eq!(roc.required_inputs, 2);

    let condition = rule_for("condition").unwrap();
    assert_eq!(condition.can_connect_to, &[Signal]);
    assert_eq!(condition.max_outgoing, Limit::AtMost(1));
    assert_eq!(condition.required_inputs, 1);

    let signal = rule_for("signal").unwrap();
    assert!(signal.can_connect_to.is_empty());
    assert!(signal.is_terminal());
    assert_eq!(signal.required_inputs, 1);

    assert!(rule_for("movingAverage").is_none());
}

#[test]
fn test_legal_pairs_on_empty_graph() {
    let legal = [
        (RelativeTimeValue, RateOfChange),
        (DailyAggregation, RateOfChange),
        (RateOfChange, Condition),
        (Condition, Signal),
    ];

    for source_category in NodeCategory::ALL {
        for target_category in NodeCategory::ALL {
            let source = node("a", source_category);
            let target = node("b", target_category);
            let expected = legal.contains(&(source_category, target_category));
            assert_eq!(
                is_legal(&source, &target, &[]),
                expected,
                "{} -> {}",
                source_category,
                target_category
            );
        }
    }
}

#[test]
fn test_check_is_idempotent() {
    let source = node("1", RelativeTimeValue);
    let target = node("3", RateOfChange);
    let edges = vec![edge("2", "3", "leftOperand")];

    let first = check_connection(&source, &target, &edges);
    let second = check_connection(&source, &target, &edges);
    assert_eq!(first, second);
    assert!(first.is_ok());
}

#[test]
fn test_unknown_type_is_denied() {
    let unknown = Node::new("x", "movingAverage", Position::default());
    let roc = node("r", RateOfChange);

    assert_eq!(
        check_connection(&unknown, &roc, &[]),
        Err(ConnectionError::UnknownNodeType {
            node_id: "x".to_string(),
            type_name: "movingAverage".to_string(),
        })
    );
    assert!(!is_legal(&roc, &unknown, &[]));
}

#[test]
fn test_target_not_allowed() {
    let source = node("1", RelativeTimeValue);
    let target = node("4", Condition);
    assert!(matches!(
        check_connection(&source, &target, &[]),
        Err(ConnectionError::TargetNotAllowed { .. })
    ));
}

#[test]
fn test_outgoing_limit() {
    let roc = node("3", RateOfChange);
    let condition = node("6", Condition);
    let edges = vec![edge("3", "4", "input")];

    assert_eq!(
        check_connection(&roc, &condition, &edges),
        Err(ConnectionError::OutgoingLimitReached {
            node_id: "3".to_string(),
            count: 1,
        })
    );
}

#[test]
fn test_incoming_limit() {
    let roc = node("7", RateOfChange);
    let condition = node("4", Condition);
    let edges = vec![edge("3", "4", "input")];

    assert_eq!(
        check_connection(&roc, &condition, &edges),
        Err(ConnectionError::IncomingLimitReached {
            node_id: "4".to_string(),
            count: 1,
        })
    );
}

#[test]
fn test_signal_is_never_a_source() {
    let signal = node("5", Signal);
    for category in NodeCategory::ALL {
        let target = node("t", category);
        assert!(!is_legal(&signal, &target, &[]));
    }
}

#[test]
fn test_unbounded_sources_accept_many_edges() {
    let source = node("src", DailyAggregation);
    let mut edges = Vec::new();
    for i in 0..25 {
        let target = node(&format!("roc{}", i), RateOfChange);
        assert!(is_legal(&source, &target, &edges), "edge #{}", i);
        edges.push(edge("src", &target.id, "leftOperand"));
    }
}

#[test]
fn test_rate_of_change_flags_block_when_both_slots_report_occupied() {
    let source = node("1", RelativeTimeValue);
    let mut target = node("3", RateOfChange);
    if let NodePayload::RateOfChange(data) = &mut target.data {
        data.has_left_operand = true;
        data.has_right_operand = true;
    }

    // No edges recorded, yet the node's own wiring flags say it is full.
    assert_eq!(
        check_connection(&source, &target, &[]),
        Err(ConnectionError::OperandSlotsFull("3".to_string()))
    );
}

#[test]
fn test_rate_of_change_flags_with_one_slot_free() {
    let source = node("1", RelativeTimeValue);
    let mut target = node("3", RateOfChange);
    if let NodePayload::RateOfChange(data) = &mut target.data {
        data.has_left_operand = true;
    }
    let edges = vec![edge("2", "3", "leftOperand")];
    assert!(is_legal(&source, &target, &edges));
}

#[test]
fn test_operand_slots_fill_left_then_right() {
    let mut edges = Vec::new();
    assert_eq!(assign_operand_slot("3", &edges), Ok(OperandSlot::Left));

    edges.push(edge("1", "3", "leftOperand"));
    assert_eq!(assign_operand_slot("3", &edges), Ok(OperandSlot::Right));

    edges.push(edge("2", "3", "rightOperand"));
    assert_eq!(
        assign_operand_slot("3", &edges),
        Err(ConnectionError::OperandSlotsFull("3".to_string()))
    );
}

#[test]
fn test_freed_left_slot_is_reused_first() {
    let edges = vec![edge("2", "3", "rightOperand")];
    assert_eq!(assign_operand_slot("3", &edges), Ok(OperandSlot::Left));
    assert_eq!(operand_occupancy("3", &edges), (false, true));
    // Edges into other nodes do not count.
    assert_eq!(operand_occupancy("9", &edges), (false, false));
}
