use crate::catalog::*;
use crate::graph::{Edge, Node, Position};

/// The example flow a new canvas starts with:
/// 30-second trade count vs its 5-day high, > 50% → "High Trade Count Velocity".
pub fn seed_nodes() -> Vec<Node> {
    vec![
        Node::new("1", NodeCategory::RelativeTimeValue.tag(), Position::new(50.0, 50.0)).with_data(
            NodePayload::RelativeTimeValue(RelativeTimeValueData {
                field_name: "tradeCount".to_string(),
                time_point: TimePoint::new(30.0, TimeUnit::Second),
            }),
        ),
        Node::new("2", NodeCategory::DailyAggregation.tag(), Position::new(50.0, 200.0)).with_data(
            NodePayload::DailyAggregation(DailyAggregationData {
                field_name: "tradeCount".to_string(),
                time_range: TimeRange {
                    start: TimePoint::new(5.0, TimeUnit::Day),
                    end: TimePoint::new(1.0, TimeUnit::Day),
                },
                aggregation_type: AggregationType::High,
            }),
        ),
        Node::new("3", NodeCategory::RateOfChange.tag(), Position::new(350.0, 125.0)).with_data(
            NodePayload::RateOfChange(RateOfChangeData {
                left_operand: OperandRef {
                    category: NodeCategory::RelativeTimeValue,
                },
                right_operand: OperandRef {
                    category: NodeCategory::DailyAggregation,
                },
                is_expanded: true,
                has_left_operand: false,
                has_right_operand: false,
            }),
        ),
        Node::new("4", NodeCategory::Condition.tag(), Position::new(650.0, 125.0)),
        Node::new("5", NodeCategory::Signal.tag(), Position::new(950.0, 125.0)).with_data(
            NodePayload::Signal(SignalData {
                name: "High Trade Count Velocity".to_string(),
                description:
                    "Signals when current 30-second trade count velocity vs 5-day high is above threshold"
                        .to_string(),
            }),
        ),
    ]
}

pub fn seed_edges() -> Vec<Edge> {
    vec![
        Edge::new("e1-3", "1", OUTPUT_HANDLE, "3", LEFT_OPERAND_HANDLE),
        Edge::new("e2-3", "2", OUTPUT_HANDLE, "3", RIGHT_OPERAND_HANDLE),
        Edge::new("e3-4", "3", OUTPUT_HANDLE, "4", INPUT_HANDLE),
        Edge::new("e4-5", "4", OUTPUT_HANDLE, "5", INPUT_HANDLE),
    ]
}
