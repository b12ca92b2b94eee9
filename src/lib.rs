//! # signalflow - Editing Core for Node-Based Signal Definitions
//!
//! **signalflow** holds the logic behind a visual editor in which financial
//! signals are assembled from a small palette of typed nodes: current and
//! historical values feed a rate-of-change node, whose result is checked
//! against a threshold, which in turn raises a named signal.
//!
//! Painting, panning and hit-testing belong to the diagramming host. This
//! crate decides what the host is allowed to do with the graph:
//!
//! 1.  **Catalog** ([`catalog`]): the five node categories, their default
//!     payloads, handles and palette entries.
//! 2.  **Rules** ([`rules`]): a static per-category rule table consulted on
//!     every proposed edge, plus arrival-order slot assignment for the
//!     two-input rate-of-change node.
//! 3.  **Canvas** ([`canvas`]): the controller owning the node and edge
//!     collections, wired to the host's drop and connect callbacks.
//! 4.  **Render** ([`render`]): one renderer per category producing the card
//!     the host draws for a node.
//!
//! The graph is only assembled and structurally validated, never evaluated.
//!
//! ## Quick Start
//!
//! ```rust
//! use signalflow::prelude::*;
//!
//! // Starts with the example flow: 1,2 -> 3 -> 4 -> 5.
//! let mut canvas = Canvas::new();
//!
//! // A palette drop creates a node carrying its category's defaults.
//! let condition = canvas
//!     .drop_palette_entry("condition", Position::new(400.0, 300.0))
//!     .expect("non-empty drag payload");
//! assert_eq!(condition, "condition_6");
//!
//! // The threshold node already feeds the signal; a second edge is refused.
//! let rejected = canvas.connect(Connection::new("4", "5"));
//! assert!(matches!(rejected, Err(ConnectionError::OutgoingLimitReached { .. })));
//! ```

pub mod canvas;
pub mod catalog;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod render;
pub mod rules;
