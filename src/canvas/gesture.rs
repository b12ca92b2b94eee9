/// State of the edge-drag gesture in progress, if any.
///
/// `Idle → Dragging → Idle`; whether the release produced an edge is the
/// result of [`super::Canvas::complete_connection`], not a lingering state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionGesture {
    #[default]
    Idle,
    Dragging { source: String, source_handle: String },
}

impl ConnectionGesture {
    pub fn is_dragging(&self) -> bool {
        matches!(self, ConnectionGesture::Dragging { .. })
    }
}
