use super::Canvas;
use super::seed::{seed_edges, seed_nodes};
use crate::error::GraphError;
use crate::graph::{GraphSnapshot, Position};
use crate::render::{NodeRenderer, RendererRegistry};

/// Offset subtracted from pixel drop coordinates so the node lands centred
/// under the cursor.
pub const DEFAULT_DROP_OFFSET: Position = Position { x: 100.0, y: 50.0 };

/// Configures the initial state of a [`Canvas`].
pub struct CanvasBuilder {
    seed_graph: bool,
    snapshot: Option<GraphSnapshot>,
    drop_offset: Position,
    renderers: RendererRegistry,
}

impl CanvasBuilder {
    pub fn new() -> Self {
        Self {
            seed_graph: true,
            snapshot: None,
            drop_offset: DEFAULT_DROP_OFFSET,
            renderers: RendererRegistry::new(),
        }
    }

    /// Whether to start from the example flow. On by default.
    pub fn with_seed_graph(mut self, enabled: bool) -> Self {
        self.seed_graph = enabled;
        self
    }

    /// Starts from `snapshot` instead of the example flow.
    pub fn with_snapshot(mut self, snapshot: GraphSnapshot) -> Self {
        self.snapshot = Some(snapshot);
        self
    }

    pub fn with_drop_offset(mut self, offset: Position) -> Self {
        self.drop_offset = offset;
        self
    }

    /// Replaces the built-in renderer of the renderer's category.
    pub fn with_renderer(mut self, renderer: Box<dyn NodeRenderer>) -> Self {
        self.renderers.register(renderer);
        self
    }

    pub fn build(self) -> Result<Canvas, GraphError> {
        let (nodes, edges) = match self.snapshot {
            Some(snapshot) => {
                snapshot.validate()?;
                (snapshot.nodes, snapshot.edges)
            }
            None if self.seed_graph => (seed_nodes(), seed_edges()),
            None => (Vec::new(), Vec::new()),
        };
        Ok(Canvas::from_parts(
            nodes,
            edges,
            self.drop_offset,
            self.renderers,
        ))
    }
}

impl Default for CanvasBuilder {
    fn default() -> Self {
        Self::new()
    }
}
