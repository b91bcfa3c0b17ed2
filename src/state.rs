use egui::{Color32, Rect};

use crate::path::{PathRef, SignaturePath};

/// Where the current signing session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Empty,
    Drawing,
    /// The bitmap was handed to the save callback
    Finished,
    /// The cancel callback fired
    Cancelled,
}

/// Everything the controller owns for one mounted widget
#[derive(Debug, Clone)]
pub struct WidgetState {
    pub session: SessionState,
    pub path: PathRef,
    pub color: Color32,
    /// Surface rectangle in local space, refreshed on every layout pass
    pub bounds: Rect,
}

impl WidgetState {
    pub fn new(color: Color32) -> Self {
        Self {
            session: SessionState::Empty,
            path: SignaturePath::new_ref(),
            color,
            bounds: Rect::NOTHING,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}
