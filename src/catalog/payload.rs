use super::category::NodeCategory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit of a relative time offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
        };
        f.write_str(name)
    }
}

/// A point in time expressed as an offset back from now.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub value: f64,
    pub unit: TimeUnit,
}

impl TimePoint {
    pub fn new(value: f64, unit: TimeUnit) -> Self {
        Self { value, unit }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: TimePoint,
    pub end: TimePoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationType {
    High,
    Low,
}

impl fmt::Display for AggregationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregationType::High => f.write_str("high"),
            AggregationType::Low => f.write_str("low"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonOperator {
    Eq,
    Gt,
    Lt,
    Gte,
    Lte,
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ComparisonOperator::Eq => "eq",
            ComparisonOperator::Gt => "gt",
            ComparisonOperator::Lt => "lt",
            ComparisonOperator::Gte => "gte",
            ComparisonOperator::Lte => "lte",
        };
        f.write_str(tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub operator: ComparisonOperator,
    pub threshold: f64,
}

/// The expected category feeding one side of a rate-of-change node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperandRef {
    #[serde(rename = "type")]
    pub category: NodeCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelativeTimeValueData {
    pub field_name: String,
    pub time_point: TimePoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAggregationData {
    pub field_name: String,
    pub time_range: TimeRange,
    pub aggregation_type: AggregationType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateOfChangeData {
    pub left_operand: OperandRef,
    pub right_operand: OperandRef,
    /// Whether the operand handles are shown. Nodes start expanded.
    #[serde(default = "expanded_by_default")]
    pub is_expanded: bool,
    /// Mirrors whether an edge currently occupies the `leftOperand` slot.
    #[serde(default)]
    pub has_left_operand: bool,
    /// Mirrors whether an edge currently occupies the `rightOperand` slot.
    #[serde(default)]
    pub has_right_operand: bool,
}

fn expanded_by_default() -> bool {
    true
}

impl RateOfChangeData {
    /// `true` while at least one operand slot can still take an edge.
    pub fn has_free_slot(&self) -> bool {
        !(self.has_left_operand && self.has_right_operand)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionData {
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalData {
    pub name: String,
    pub description: String,
}

/// Payload of a node whose type is not in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmptyData {}

/// Category-specific node data.
///
/// Serialized untagged: the owning node's `type` field carries the category,
/// the payload itself is the bare `data` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodePayload {
    RelativeTimeValue(RelativeTimeValueData),
    DailyAggregation(DailyAggregationData),
    RateOfChange(RateOfChangeData),
    Condition(ConditionData),
    Signal(SignalData),
    Empty(EmptyData),
}

impl NodePayload {
    /// The default payload a freshly dropped node of `category` receives.
    pub fn default_for(category: NodeCategory) -> Self {
        match category {
            NodeCategory::RelativeTimeValue => NodePayload::RelativeTimeValue(RelativeTimeValueData {
                field_name: "newField".to_string(),
                time_point: TimePoint::new(30.0, TimeUnit::Second),
            }),
            NodeCategory::DailyAggregation => NodePayload::DailyAggregation(DailyAggregationData {
                field_name: "newField".to_string(),
                time_range: TimeRange {
                    start: TimePoint::new(5.0, TimeUnit::Day),
                    end: TimePoint::new(1.0, TimeUnit::Day),
                },
                aggregation_type: AggregationType::High,
            }),
            NodeCategory::RateOfChange => NodePayload::RateOfChange(RateOfChangeData {
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
            NodeCategory::Condition => NodePayload::Condition(ConditionData {
                condition: Condition {
                    operator: ComparisonOperator::Gt,
                    threshold: 50.0,
                },
            }),
            NodeCategory::Signal => NodePayload::Signal(SignalData {
                name: "New Signal".to_string(),
                description: "Signal Description".to_string(),
            }),
        }
    }

    /// Like [`NodePayload::default_for`], but keyed by a raw type tag.
    /// Unrecognised tags get an empty payload.
    pub fn for_tag(tag: &str) -> Self {
        match NodeCategory::from_tag(tag) {
            Some(category) => Self::default_for(category),
            None => NodePayload::Empty(EmptyData::default()),
        }
    }

    /// The category this payload shape belongs to, `None` for [`NodePayload::Empty`].
    pub fn category(&self) -> Option<NodeCategory> {
        match self {
            NodePayload::RelativeTimeValue(_) => Some(NodeCategory::RelativeTimeValue),
            NodePayload::DailyAggregation(_) => Some(NodeCategory::DailyAggregation),
            NodePayload::RateOfChange(_) => Some(NodeCategory::RateOfChange),
            NodePayload::Condition(_) => Some(NodeCategory::Condition),
            NodePayload::Signal(_) => Some(NodeCategory::Signal),
            NodePayload::Empty(_) => None,
        }
    }

    pub fn as_rate_of_change(&self) -> Option<&RateOfChangeData> {
        match self {
            NodePayload::RateOfChange(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_rate_of_change_mut(&mut self) -> Option<&mut RateOfChangeData> {
        match self {
            NodePayload::RateOfChange(data) => Some(data),
            _ => None,
        }
    }
}
