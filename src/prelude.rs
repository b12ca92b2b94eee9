//! Prelude module for convenient imports
//!
//! Re-exports the types needed to drive a canvas from a host integration.
//!
//! # Example
//!
//! ```rust
//! use signalflow::prelude::*;
//!
//! let canvas = Canvas::builder().with_seed_graph(false).build().unwrap();
//! assert!(canvas.nodes().is_empty());
//! ```

// Controller
pub use crate::canvas::{Canvas, CanvasBuilder, CanvasEvent, ConnectionGesture, EdgeChange, NodeChange};

// Catalog
pub use crate::catalog::{NodeCategory, NodePayload, PaletteEntry, palette};

// Graph model
pub use crate::graph::{Connection, Edge, GraphSnapshot, Node, OperandSlot, Position};

// Rules
pub use crate::rules::{ConnectionRule, Limit, check_connection, is_legal, rule_for};

// Rendering
pub use crate::render::{NodeCard, NodeRenderer, RendererRegistry};

// Error types
pub use crate::error::{ConnectionError, GraphError};
