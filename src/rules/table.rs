use crate::catalog::NodeCategory;
use ahash::AHashMap;
use once_cell::sync::Lazy;

/// Upper bound on a node's outgoing edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Unbounded,
    AtMost(usize),
}

impl Limit {
    /// Whether a node already holding `count` edges may take one more.
    pub fn admits(self, count: usize) -> bool {
        match self {
            Limit::Unbounded => true,
            Limit::AtMost(max) => count < max,
        }
    }
}

/// Connectivity constraints of one node category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionRule {
    pub can_connect_to: &'static [NodeCategory],
    pub max_outgoing: Limit,
    /// Inputs the node needs; also the most incoming edges it accepts.
    pub required_inputs: usize,
}

impl ConnectionRule {
    pub fn allows_target(&self, category: NodeCategory) -> bool {
        self.can_connect_to.contains(&category)
    }

    pub fn is_terminal(&self) -> bool {
        self.max_outgoing == Limit::AtMost(0)
    }
}

macro_rules! define_connection_rules {
    ( $( $category:expr => {
            connects_to: [ $( $to:expr ),* ],
            max_outgoing: $max:expr,
            required_inputs: $inputs:expr $(,)?
        } ),* $(,)? ) => {
        fn build_rule_table() -> AHashMap<&'static str, ConnectionRule> {
            let mut table = AHashMap::new();
            $(
                table.insert(
                    $category.tag(),
                    ConnectionRule {
                        can_connect_to: &[ $( $to ),* ],
                        max_outgoing: $max,
                        required_inputs: $inputs,
                    },
                );
            )*
            table
        }
    };
}

define_connection_rules! {
    NodeCategory::RelativeTimeValue => {
        connects_to: [NodeCategory::RateOfChange],
        max_outgoing: Limit::Unbounded,
        required_inputs: 0,
    },
    NodeCategory::DailyAggregation => {
        connects_to: [NodeCategory::RateOfChange],
        max_outgoing: Limit::Unbounded,
        required_inputs: 0,
    },
    NodeCategory::RateOfChange => {
        connects_to: [NodeCategory::Condition],
        max_outgoing: Limit::AtMost(1),
        required_inputs: 2,
    },
    NodeCategory::Condition => {
        connects_to: [NodeCategory::Signal],
        max_outgoing: Limit::AtMost(1),
        required_inputs: 1,
    },
    NodeCategory::Signal => {
        connects_to: [],
        max_outgoing: Limit::AtMost(0),
        required_inputs: 1,
    },
}

/// Keyed by node type tag so nodes with unrecognised tags find no rule.
static RULES: Lazy<AHashMap<&'static str, ConnectionRule>> = Lazy::new(build_rule_table);

/// The rule for a node type tag, `None` if the tag is not in the catalog.
pub fn rule_for(node_type: &str) -> Option<&'static ConnectionRule> {
    RULES.get(node_type)
}
