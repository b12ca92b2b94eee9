//! Tests for node renderers and the renderer registry.
mod common;
use common::*;
use signalflow::catalog::HandleKind;
use signalflow::prelude::*;
use signalflow::render::format_number;

#[test]
fn test_registry_covers_every_category() {
    let registry = RendererRegistry::new();
    assert_eq!(registry.len(), 5);
    for category in NodeCategory::ALL {
        let renderer = registry.get(category.tag()).unwrap();
        assert_eq!(renderer.category(), category);
    }
    assert!(registry.get("movingAverage").is_none());
}

#[test]
fn test_seed_cards() {
    let canvas = seeded_canvas();

    let current = canvas.render_node("1").unwrap();
    assert_eq!(current.title, "Current Value");
    assert_eq!(current.lines, vec!["Field: tradeCount", "Time: 30 seconds ago"]);
    assert_eq!(current.accent, "#3b82f6");

    let historical = canvas.render_node("2").unwrap();
    assert_eq!(historical.title, "Historical High");
    assert_eq!(
        historical.lines,
        vec!["Field: tradeCount", "Range: 1 to 5 days ago", "Type: High"]
    );

    let condition = canvas.render_node("4").unwrap();
    assert_eq!(condition.lines, vec!["Condition: gt 50%"]);

    let signal = canvas.render_node("5").unwrap();
    assert_eq!(signal.title, "High Trade Count Velocity");
    assert!(signal.visible_handles(HandleKind::Source).next().is_none());
}

#[test]
fn test_collapsed_rate_of_change_hides_operand_handles() {
    let mut canvas = seeded_canvas();

    let expanded = canvas.render_node("3").unwrap();
    let inputs: Vec<_> = expanded
        .visible_handles(HandleKind::Target)
        .map(|h| h.id)
        .collect();
    assert_eq!(inputs, vec!["leftOperand", "rightOperand"]);

    canvas.toggle_expanded("3");
    let collapsed = canvas.render_node("3").unwrap();
    assert_eq!(collapsed.visible_handles(HandleKind::Target).count(), 0);
    assert_eq!(collapsed.visible_handles(HandleKind::Source).count(), 1);
}

#[test]
fn test_dropped_rate_of_change_starts_expanded() {
    let mut canvas = empty_canvas();
    let roc = drop_node(&mut canvas, NodeCategory::RateOfChange);

    let card = canvas.render_node(&roc).unwrap();
    assert_eq!(card.title, "Rate of Change [Collapse]");
    assert_eq!(card.visible_handles(HandleKind::Target).count(), 2);
}

#[test]
fn test_card_display() {
    let canvas = seeded_canvas();
    let text = canvas.render_node("4").unwrap().to_string();

    assert!(text.contains("| Threshold Check"));
    assert!(text.contains("(input)"));
    assert!(text.contains("(output)"));
    // Input row above the box, output row below it.
    assert!(text.find("(input)").unwrap() < text.find("(output)").unwrap());
}

#[test]
fn test_card_border_fits_non_ascii_text() {
    let card = NodeCard {
        title: "Überhitzung".to_string(),
        lines: vec!["Kurs fällt ≥ 5 %".to_string()],
        accent: "#ef4444",
        handles: vec![],
    };
    let text = card.to_string();
    let widths: Vec<usize> = text.lines().map(|l| l.chars().count()).collect();
    assert!(widths.iter().all(|w| *w == widths[0]), "{}", text);
}

#[test]
fn test_format_number() {
    assert_eq!(format_number(50.0), "50");
    assert_eq!(format_number(12.5), "12.5");
    assert_eq!(format_number(1e20), "100000000000000000000");
    assert_eq!(format_number(f64::INFINITY), "inf");
}

#[test]
fn test_unknown_nodes_are_not_rendered() {
    let mut canvas = seeded_canvas();
    let id = canvas
        .drop_palette_entry("movingAverage", Position::default())
        .unwrap();
    assert!(canvas.render_node(&id).is_none());
    assert_eq!(canvas.render_all().len(), 5);
}

struct PlainSignalRenderer;

impl NodeRenderer for PlainSignalRenderer {
    fn category(&self) -> NodeCategory {
        NodeCategory::Signal
    }

    fn render(&self, node: &Node) -> Option<NodeCard> {
        Some(NodeCard {
            title: format!("signal {}", node.id),
            lines: vec![],
            accent: "#000000",
            handles: vec![],
        })
    }
}

#[test]
fn test_custom_renderer_replaces_builtin() {
    let canvas = Canvas::builder()
        .with_renderer(Box::new(PlainSignalRenderer))
        .build()
        .unwrap();

    assert_eq!(canvas.renderers().len(), 5);
    assert_eq!(canvas.render_node("5").unwrap().title, "signal 5");
    assert_eq!(canvas.render_node("4").unwrap().title, "Threshold Check");
}
