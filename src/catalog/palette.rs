use super::category::NodeCategory;

/// MIME type under which the dragged category tag travels.
pub const DRAG_MIME_TYPE: &str = "application/reactflow";

/// One draggable entry in the "Add Nodes" sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub category: NodeCategory,
    pub label: &'static str,
}

impl PaletteEntry {
    /// The string placed on the drag channel when this entry is picked up.
    pub fn drag_payload(&self) -> &'static str {
        self.category.tag()
    }
}

pub const PALETTE: [PaletteEntry; 5] = [
    PaletteEntry {
        category: NodeCategory::RelativeTimeValue,
        label: "Current Value",
    },
    PaletteEntry {
        category: NodeCategory::DailyAggregation,
        label: "Historical Value",
    },
    PaletteEntry {
        category: NodeCategory::RateOfChange,
        label: "Rate of Change",
    },
    PaletteEntry {
        category: NodeCategory::Condition,
        label: "Threshold Check",
    },
    PaletteEntry {
        category: NodeCategory::Signal,
        label: "Signal",
    },
];

pub fn palette() -> &'static [PaletteEntry] {
    &PALETTE
}

pub fn palette_entry(category: NodeCategory) -> &'static PaletteEntry {
    // PALETTE is laid out in declaration order of `NodeCategory`.
    &PALETTE[category as usize]
}
