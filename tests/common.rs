//! Common test utilities for building canvases and graph fixtures.
use signalflow::prelude::*;

/// A canvas holding the example flow: 1,2 -> 3 -> 4 -> 5.
#[allow(dead_code)]
pub fn seeded_canvas() -> Canvas {
    Canvas::new()
}

/// A canvas with no nodes or edges.
#[allow(dead_code)]
pub fn empty_canvas() -> Canvas {
    Canvas::builder()
        .with_seed_graph(false)
        .build()
        .expect("an empty canvas always builds")
}

/// Drops a palette entry of `category` at the origin and returns the new node id.
#[allow(dead_code)]
pub fn drop_node(canvas: &mut Canvas, category: NodeCategory) -> String {
    canvas
        .drop_palette_entry(category.tag(), Position::new(100.0, 50.0))
        .expect("palette drops carry a payload")
}

/// A standalone node of `category` with its default payload.
#[allow(dead_code)]
pub fn node(id: &str, category: NodeCategory) -> Node {
    Node::new(id, category.tag(), Position::default())
}

/// An edge leaving `source`'s output handle.
#[allow(dead_code)]
pub fn edge(source: &str, target: &str, target_handle: &str) -> Edge {
    Edge::new(
        format!("e{}-{}", source, target),
        source,
        "output",
        target,
        target_handle,
    )
}

/// A React-Flow-shaped snapshot of a small two-node flow.
#[allow(dead_code)]
pub const CONDITION_TO_SIGNAL_JSON: &str = r#"{
    "nodes": [
        {
            "id": "c",
            "type": "condition",
            "position": { "x": 0, "y": 0 },
            "data": { "condition": { "operator": "lte", "threshold": 12.5 } }
        },
        {
            "id": "s",
            "type": "signal",
            "position": { "x": 300, "y": 0 },
            "data": { "name": "Dip", "description": "Fires on a dip" }
        }
    ],
    "edges": [
        { "id": "ec-s", "source": "c", "target": "s", "sourceHandle": "output", "targetHandle": "input" }
    ]
}"#;
