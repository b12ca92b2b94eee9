//! The canvas controller: owns the node and edge collections of an editing
//! session and turns host gestures into rule-checked mutations.

mod builder;
mod events;
mod gesture;
pub mod seed;

pub use builder::{CanvasBuilder, DEFAULT_DROP_OFFSET};
pub use events::{CanvasEvent, EdgeChange, Listener, NodeChange};
pub use gesture::ConnectionGesture;

use crate::catalog::{HandleKind, NodeCategory, default_input_handle, find_handle};
use crate::error::{ConnectionError, GraphError};
use crate::graph::{Connection, Edge, GraphSnapshot, Node, Position};
use crate::render::{NodeCard, RendererRegistry};
use crate::rules::{assign_operand_slot, check_connection, operand_occupancy};
use log::{debug, warn};

pub struct Canvas {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    /// Suffix of the next generated node id. Only ever grows.
    next_node_number: usize,
    drop_offset: Position,
    gesture: ConnectionGesture,
    renderers: RendererRegistry,
    listeners: Vec<Listener>,
}

impl Canvas {
    /// A canvas holding the example flow.
    pub fn new() -> Self {
        Self::from_parts(
            seed::seed_nodes(),
            seed::seed_edges(),
            DEFAULT_DROP_OFFSET,
            RendererRegistry::new(),
        )
    }

    pub fn builder() -> CanvasBuilder {
        CanvasBuilder::new()
    }

    /// Restores a canvas from a host snapshot, rejecting structurally broken ones.
    pub fn from_snapshot(snapshot: GraphSnapshot) -> Result<Self, GraphError> {
        CanvasBuilder::new().with_snapshot(snapshot).build()
    }

    pub(crate) fn from_parts(
        nodes: Vec<Node>,
        edges: Vec<Edge>,
        drop_offset: Position,
        renderers: RendererRegistry,
    ) -> Self {
        let mut canvas = Self {
            next_node_number: nodes.len() + 1,
            nodes,
            edges,
            drop_offset,
            gesture: ConnectionGesture::Idle,
            renderers,
            listeners: Vec::new(),
        };
        let ids: Vec<String> = canvas.nodes.iter().map(|n| n.id.clone()).collect();
        for id in &ids {
            canvas.refresh_operand_flags(id);
        }
        canvas
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn gesture(&self) -> &ConnectionGesture {
        &self.gesture
    }

    pub fn renderers(&self) -> &RendererRegistry {
        &self.renderers
    }

    /// Registers a callback run after every state change.
    pub fn subscribe(&mut self, listener: impl FnMut(&CanvasEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&mut self, event: CanvasEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }

    // --- Node instantiation ---

    /// Adds a node of `node_type` with that type's default payload at `position`.
    ///
    /// Ids take the form `{type}_{n}`. `n` starts one past the node count the
    /// canvas was created with and never goes back, so deleting a node cannot
    /// cause a later id to be handed out twice.
    pub fn add_node(&mut self, node_type: &str, position: Position) -> String {
        let id = loop {
            let candidate = format!("{}_{}", node_type, self.next_node_number);
            self.next_node_number += 1;
            if self.node(&candidate).is_none() {
                break candidate;
            }
        };
        if NodeCategory::from_tag(node_type).is_none() {
            warn!("Adding node '{}' of unknown type '{}' with an empty payload", id, node_type);
        }
        self.nodes.push(Node::new(id.clone(), node_type, position));
        debug!("Added node '{}' at ({}, {})", id, position.x, position.y);
        self.emit(CanvasEvent::NodeAdded(id.clone()));
        id
    }

    /// Handles a palette entry dropped on the canvas.
    ///
    /// `payload` is the string carried on the drag channel and `client` the
    /// pixel drop point. An empty payload means the drop carried nothing of
    /// ours and is ignored.
    pub fn drop_palette_entry(&mut self, payload: &str, client: Position) -> Option<String> {
        if payload.is_empty() {
            return None;
        }
        let position = Position::new(client.x - self.drop_offset.x, client.y - self.drop_offset.y);
        Some(self.add_node(payload, position))
    }

    // --- Connections ---

    /// Full legality check of `connection` against the current state.
    pub fn check_connection(&self, connection: &Connection) -> Result<(), ConnectionError> {
        let (source, target) = self.endpoints(connection)?;

        if let (Some(category), Some(handle)) = (source.category(), &connection.source_handle) {
            if find_handle(category, handle, HandleKind::Source).is_none() {
                return Err(ConnectionError::InvalidHandle {
                    node_id: source.id.clone(),
                    handle: handle.clone(),
                    direction: "output",
                });
            }
        }

        check_connection(source, target, &self.edges)
    }

    /// The host's `isValidConnection` callback.
    pub fn validate_connection(&self, connection: &Connection) -> bool {
        self.check_connection(connection).is_ok()
    }

    /// The host's `onConnect` callback: adds the edge if it is legal.
    ///
    /// On rejection nothing changes and the reason is logged and returned.
    pub fn connect(&mut self, connection: Connection) -> Result<String, ConnectionError> {
        match self.try_connect(&connection) {
            Ok(edge) => {
                let id = edge.id.clone();
                let target = edge.target.clone();
                debug!(
                    "Connected '{}' -> '{}' on '{}'",
                    edge.source, edge.target, edge.target_handle
                );
                self.edges.push(edge);
                self.emit(CanvasEvent::EdgeAdded(id.clone()));
                if self.refresh_operand_flags(&target) {
                    self.emit(CanvasEvent::NodesChanged);
                }
                Ok(id)
            }
            Err(err) => {
                warn!(
                    "Rejected connection '{}' -> '{}': {}",
                    connection.source, connection.target, err
                );
                Err(err)
            }
        }
    }

    /// Validates `connection` and builds the edge it would add, without mutating.
    fn try_connect(&self, connection: &Connection) -> Result<Edge, ConnectionError> {
        self.check_connection(connection)?;
        let (_, target) = self.endpoints(connection)?;

        let target_handle = match target.category() {
            Some(NodeCategory::RateOfChange) => {
                assign_operand_slot(&target.id, &self.edges)?.handle().to_string()
            }
            Some(category) => match &connection.target_handle {
                Some(handle) if find_handle(category, handle, HandleKind::Target).is_some() => {
                    handle.clone()
                }
                Some(handle) => {
                    return Err(ConnectionError::InvalidHandle {
                        node_id: target.id.clone(),
                        handle: handle.clone(),
                        direction: "input",
                    });
                }
                None => default_input_handle(category)
                    .unwrap_or_default()
                    .to_string(),
            },
            None => {
                return Err(ConnectionError::UnknownNodeType {
                    node_id: target.id.clone(),
                    type_name: target.node_type.clone(),
                });
            }
        };

        let source_handle = connection.source_handle_or_default();
        let base_id = Edge::derive_id(&connection.source, source_handle, &connection.target, &target_handle);
        let edge = Edge::new(
            self.unused_edge_id(base_id),
            connection.source.clone(),
            source_handle,
            connection.target.clone(),
            target_handle,
        );
        if self.edges.iter().any(|e| e.same_endpoints(&edge)) {
            return Err(ConnectionError::DuplicateEdge {
                source_id: edge.source,
                target_id: edge.target,
                target_handle: edge.target_handle,
            });
        }
        Ok(edge)
    }

    /// `base` if no edge uses it yet, otherwise `base` with the first free `-{n}` suffix.
    fn unused_edge_id(&self, base: String) -> String {
        if self.edge(&base).is_none() {
            return base;
        }
        let mut n = 1;
        loop {
            let candidate = format!("{}-{}", base, n);
            if self.edge(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }

    fn endpoints(&self, connection: &Connection) -> Result<(&Node, &Node), ConnectionError> {
        let source = self
            .node(&connection.source)
            .ok_or_else(|| ConnectionError::NodeNotFound(connection.source.clone()))?;
        let target = self
            .node(&connection.target)
            .ok_or_else(|| ConnectionError::NodeNotFound(connection.target.clone()))?;
        Ok((source, target))
    }

    // --- Connection gesture ---

    /// Starts dragging a new edge out of `source_handle` on `node_id`.
    /// Any gesture already in progress is abandoned.
    pub fn begin_connection(&mut self, node_id: &str, source_handle: &str) -> Result<(), ConnectionError> {
        let node = self
            .node(node_id)
            .ok_or_else(|| ConnectionError::NodeNotFound(node_id.to_string()))?;
        if let Some(category) = node.category() {
            if find_handle(category, source_handle, HandleKind::Source).is_none() {
                return Err(ConnectionError::InvalidHandle {
                    node_id: node_id.to_string(),
                    handle: source_handle.to_string(),
                    direction: "output",
                });
            }
        }
        self.gesture = ConnectionGesture::Dragging {
            source: node_id.to_string(),
            source_handle: source_handle.to_string(),
        };
        Ok(())
    }

    /// Releases the dragged edge over `target_id`. The gesture always ends,
    /// whether or not an edge was added.
    pub fn complete_connection(
        &mut self,
        target_id: &str,
        target_handle: Option<&str>,
    ) -> Result<String, ConnectionError> {
        let ConnectionGesture::Dragging {
            source,
            source_handle,
        } = std::mem::take(&mut self.gesture)
        else {
            return Err(ConnectionError::NoActiveGesture);
        };

        let mut connection = Connection::new(source, target_id).with_source_handle(source_handle);
        connection.target_handle = target_handle.map(str::to_string);
        self.connect(connection)
    }

    /// Drops the dragged edge outside any target. Returns whether a gesture was active.
    pub fn cancel_connection(&mut self) -> bool {
        std::mem::take(&mut self.gesture).is_dragging()
    }

    // --- Host container updates ---

    pub fn apply_node_changes(&mut self, changes: Vec<NodeChange>) {
        let mut nodes_changed = false;
        let mut edges_changed = false;

        for change in changes {
            match change {
                NodeChange::Position { id, position } => {
                    if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
                        node.position = position;
                        nodes_changed = true;
                    }
                }
                NodeChange::Select { id, selected } => {
                    if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
                        node.selected = selected;
                        nodes_changed = true;
                    }
                }
                NodeChange::Remove { id } => {
                    let before = self.nodes.len();
                    self.nodes.retain(|n| n.id != id);
                    if self.nodes.len() == before {
                        continue;
                    }
                    nodes_changed = true;
                    let removed = self.remove_edges_where(|e| e.source == id || e.target == id);
                    edges_changed |= !removed.is_empty();
                    for edge in &removed {
                        self.refresh_operand_flags(&edge.target);
                    }
                    debug!("Removed node '{}' and {} attached edge(s)", id, removed.len());
                }
            }
        }

        if nodes_changed {
            self.emit(CanvasEvent::NodesChanged);
        }
        if edges_changed {
            self.emit(CanvasEvent::EdgesChanged);
        }
    }

    pub fn apply_edge_changes(&mut self, changes: Vec<EdgeChange>) {
        let mut edges_changed = false;
        let mut nodes_changed = false;

        for change in changes {
            match change {
                EdgeChange::Select { id, selected } => {
                    if let Some(edge) = self.edges.iter_mut().find(|e| e.id == id) {
                        edge.selected = selected;
                        edges_changed = true;
                    }
                }
                EdgeChange::Remove { id } => {
                    for edge in self.remove_edges_where(|e| e.id == id) {
                        edges_changed = true;
                        nodes_changed |= self.refresh_operand_flags(&edge.target);
                    }
                }
            }
        }

        if edges_changed {
            self.emit(CanvasEvent::EdgesChanged);
        }
        if nodes_changed {
            self.emit(CanvasEvent::NodesChanged);
        }
    }

    fn remove_edges_where(&mut self, predicate: impl Fn(&Edge) -> bool) -> Vec<Edge> {
        let (removed, kept): (Vec<Edge>, Vec<Edge>) = std::mem::take(&mut self.edges)
            .into_iter()
            .partition(|e| predicate(e));
        self.edges = kept;
        removed
    }

    /// Flips the expand/collapse toggle of a rate-of-change node.
    /// Returns the new state, `None` if `node_id` is not a rate-of-change node.
    pub fn toggle_expanded(&mut self, node_id: &str) -> Option<bool> {
        let data = self
            .nodes
            .iter_mut()
            .find(|n| n.id == node_id)?
            .data
            .as_rate_of_change_mut()?;
        data.is_expanded = !data.is_expanded;
        let expanded = data.is_expanded;
        self.emit(CanvasEvent::NodesChanged);
        Some(expanded)
    }

    /// Syncs a rate-of-change node's operand flags with its incoming edges.
    /// Returns whether anything changed.
    fn refresh_operand_flags(&mut self, node_id: &str) -> bool {
        let (left, right) = operand_occupancy(node_id, &self.edges);
        let Some(data) = self
            .nodes
            .iter_mut()
            .find(|n| n.id == node_id)
            .and_then(|n| n.data.as_rate_of_change_mut())
        else {
            return false;
        };
        let changed = data.has_left_operand != left || data.has_right_operand != right;
        data.has_left_operand = left;
        data.has_right_operand = right;
        changed
    }

    // --- Rendering ---

    pub fn render_node(&self, node_id: &str) -> Option<NodeCard> {
        self.renderers.render(self.node(node_id)?)
    }

    /// Cards for every node the registry knows how to draw, in canvas order.
    pub fn render_all(&self) -> Vec<(String, NodeCard)> {
        self.nodes
            .iter()
            .filter_map(|n| Some((n.id.clone(), self.renderers.render(n)?)))
            .collect()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
