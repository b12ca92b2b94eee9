use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five fixed node kinds a signal flow is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeCategory {
    /// A field value sampled at a point relative to now ("Current Value").
    RelativeTimeValue,
    /// A daily high/low over a relative range ("Historical Value").
    DailyAggregation,
    /// Percentage change between a left and a right operand.
    RateOfChange,
    /// Threshold check on an upstream value.
    Condition,
    /// Terminal output: a named, described alert.
    Signal,
}

impl NodeCategory {
    /// All categories, in palette order.
    pub const ALL: [NodeCategory; 5] = [
        NodeCategory::RelativeTimeValue,
        NodeCategory::DailyAggregation,
        NodeCategory::RateOfChange,
        NodeCategory::Condition,
        NodeCategory::Signal,
    ];

    /// The wire tag used for node `type` fields and drag payloads.
    pub fn tag(self) -> &'static str {
        match self {
            NodeCategory::RelativeTimeValue => "relativeTimeValue",
            NodeCategory::DailyAggregation => "dailyAggregation",
            NodeCategory::RateOfChange => "rateOfChange",
            NodeCategory::Condition => "condition",
            NodeCategory::Signal => "signal",
        }
    }

    /// Resolves a wire tag; `None` for anything outside the catalog.
    pub fn from_tag(tag: &str) -> Option<Self> {
        NodeCategory::ALL.into_iter().find(|c| c.tag() == tag)
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for NodeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeCategory::from_tag(s).ok_or_else(|| format!("unknown node category '{}'", s))
    }
}
