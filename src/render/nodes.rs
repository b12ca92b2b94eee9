use super::NodeRenderer;
use super::card::{HandleView, NodeCard, format_number};
use crate::catalog::{
    AggregationType, HandleKind, NodeCategory, NodePayload, TimePoint, handles_for, palette_entry,
};
use crate::graph::Node;

fn handle_views(category: NodeCategory, inputs_visible: bool) -> Vec<HandleView> {
    handles_for(category)
        .iter()
        .map(|spec| HandleView {
            spec: *spec,
            visible: inputs_visible || spec.kind == HandleKind::Source,
        })
        .collect()
}

fn ago(point: &TimePoint) -> String {
    let plural = if point.value == 1.0 { "" } else { "s" };
    format!("{} {}{} ago", format_number(point.value), point.unit, plural)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(super) struct RelativeTimeValueRenderer;

impl NodeRenderer for RelativeTimeValueRenderer {
    fn category(&self) -> NodeCategory {
        NodeCategory::RelativeTimeValue
    }

    fn render(&self, node: &Node) -> Option<NodeCard> {
        let NodePayload::RelativeTimeValue(data) = &node.data else {
            return None;
        };
        Some(NodeCard {
            title: palette_entry(self.category()).label.to_string(),
            lines: vec![
                format!("Field: {}", data.field_name),
                format!("Time: {}", ago(&data.time_point)),
            ],
            accent: "#3b82f6",
            handles: handle_views(self.category(), true),
        })
    }
}

pub(super) struct DailyAggregationRenderer;

impl NodeRenderer for DailyAggregationRenderer {
    fn category(&self) -> NodeCategory {
        NodeCategory::DailyAggregation
    }

    fn render(&self, node: &Node) -> Option<NodeCard> {
        let NodePayload::DailyAggregation(data) = &node.data else {
            return None;
        };
        let range = &data.time_range;
        let title = match data.aggregation_type {
            AggregationType::High => "Historical High",
            AggregationType::Low => "Historical Low",
        };
        Some(NodeCard {
            title: title.to_string(),
            lines: vec![
                format!("Field: {}", data.field_name),
                format!(
                    "Range: {} to {}",
                    format_number(range.end.value),
                    ago(&range.start)
                ),
                format!("Type: {}", capitalize(&data.aggregation_type.to_string())),
            ],
            accent: "#10b981",
            handles: handle_views(self.category(), true),
        })
    }
}

pub(super) struct RateOfChangeRenderer;

impl NodeRenderer for RateOfChangeRenderer {
    fn category(&self) -> NodeCategory {
        NodeCategory::RateOfChange
    }

    fn render(&self, node: &Node) -> Option<NodeCard> {
        let data = node.data.as_rate_of_change()?;
        Some(NodeCard {
            title: format!(
                "Rate of Change [{}]",
                if data.is_expanded { "Collapse" } else { "Expand" }
            ),
            lines: vec![
                "Operation: Percentage Change".to_string(),
                "Compares current vs historical values".to_string(),
            ],
            accent: "#7c3aed",
            // Collapsed nodes hide their operand handles; the output stays.
            handles: handle_views(self.category(), data.is_expanded),
        })
    }
}

pub(super) struct ConditionRenderer;

impl NodeRenderer for ConditionRenderer {
    fn category(&self) -> NodeCategory {
        NodeCategory::Condition
    }

    fn render(&self, node: &Node) -> Option<NodeCard> {
        let NodePayload::Condition(data) = &node.data else {
            return None;
        };
        Some(NodeCard {
            title: "Threshold Check".to_string(),
            lines: vec![format!(
                "Condition: {} {}%",
                data.condition.operator,
                format_number(data.condition.threshold)
            )],
            accent: "#f97316",
            handles: handle_views(self.category(), true),
        })
    }
}

pub(super) struct SignalRenderer;

impl NodeRenderer for SignalRenderer {
    fn category(&self) -> NodeCategory {
        NodeCategory::Signal
    }

    fn render(&self, node: &Node) -> Option<NodeCard> {
        let NodePayload::Signal(data) = &node.data else {
            return None;
        };
        Some(NodeCard {
            title: data.name.clone(),
            lines: vec![data.description.clone()],
            accent: "#ef4444",
            handles: handle_views(self.category(), true),
        })
    }
}
