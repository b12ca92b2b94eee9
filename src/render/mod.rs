//! Category → renderer mapping handed to the diagramming host.

mod card;
mod nodes;

pub use card::{HandleView, NodeCard, format_number};

use crate::catalog::NodeCategory;
use crate::graph::Node;
use ahash::AHashMap;
use nodes::*;

/// Turns one category of node into the card the host paints.
pub trait NodeRenderer: Send + Sync {
    fn category(&self) -> NodeCategory;

    /// Renders `node`, or `None` when its payload does not belong to this category.
    fn render(&self, node: &Node) -> Option<NodeCard>;
}

/// Renderers keyed by node type tag.
pub struct RendererRegistry {
    renderers: AHashMap<String, Box<dyn NodeRenderer>>,
}

impl RendererRegistry {
    /// A registry holding the built-in renderer of every category.
    pub fn new() -> Self {
        let mut registry = Self {
            renderers: AHashMap::new(),
        };
        registry.register(Box::new(RelativeTimeValueRenderer));
        registry.register(Box::new(DailyAggregationRenderer));
        registry.register(Box::new(RateOfChangeRenderer));
        registry.register(Box::new(ConditionRenderer));
        registry.register(Box::new(SignalRenderer));
        registry
    }

    /// Installs `renderer`, replacing whatever its category had before.
    pub fn register(&mut self, renderer: Box<dyn NodeRenderer>) {
        self.renderers
            .insert(renderer.category().tag().to_string(), renderer);
    }

    pub fn get(&self, node_type: &str) -> Option<&dyn NodeRenderer> {
        self.renderers.get(node_type).map(|r| &**r)
    }

    /// Renders `node` with the renderer of its type; `None` for unknown types.
    pub fn render(&self, node: &Node) -> Option<NodeCard> {
        self.get(&node.node_type)?.render(node)
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::new()
    }
}
