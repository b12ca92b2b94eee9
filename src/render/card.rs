use crate::catalog::{HandleKind, HandleSide, HandleSpec};
use itertools::Itertools;
use std::fmt;

/// A handle as it appears on a rendered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleView {
    pub spec: HandleSpec,
    pub visible: bool,
}

/// Renderer output for one node: what the host paints inside the node box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeCard {
    pub title: String,
    pub lines: Vec<String>,
    /// CSS hex colour of the border, title and handles.
    pub accent: &'static str,
    pub handles: Vec<HandleView>,
}

impl NodeCard {
    pub fn visible_handles(&self, kind: HandleKind) -> impl Iterator<Item = &HandleSpec> {
        self.handles
            .iter()
            .filter(move |h| h.visible && h.spec.kind == kind)
            .map(|h| &h.spec)
    }

    fn handle_row(&self, side: HandleSide) -> Option<String> {
        let row = self
            .handles
            .iter()
            .filter(|h| h.visible && h.spec.side == side)
            .map(|h| format!("({})", h.spec.id))
            .join(" ");
        (!row.is_empty()).then_some(row)
    }
}

impl fmt::Display for NodeCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top = self.handle_row(HandleSide::Top);
        let bottom = self.handle_row(HandleSide::Bottom);
        // Padding counts chars, so the width must too.
        let width = std::iter::once(&self.title)
            .chain(&self.lines)
            .chain(&top)
            .chain(&bottom)
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(0);
        let border = format!("+{}+", "-".repeat(width + 2));

        if let Some(top) = &top {
            writeln!(f, "  {:^width$}", top, width = width)?;
        }
        writeln!(f, "{}", border)?;
        writeln!(f, "| {:<width$} |", self.title, width = width)?;
        for line in &self.lines {
            writeln!(f, "| {:<width$} |", line, width = width)?;
        }
        write!(f, "{}", border)?;
        if let Some(bottom) = &bottom {
            write!(f, "\n  {:^width$}", bottom, width = width)?;
        }
        Ok(())
    }
}

/// Formats a number the way cards show it: whole numbers without a fraction.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}
