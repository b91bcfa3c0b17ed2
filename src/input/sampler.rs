use egui::{Pos2, Rect};

use crate::geometry::distance;
use crate::path::SignaturePath;

/// What a pointer move did to the path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// A new vertex was appended
    Recorded,
    /// Too close to the last recorded vertex
    Filtered,
    /// Outside the surface; the current stroke was ended
    OutOfBounds,
}

/// Decides which pointer positions become path vertices.
#[derive(Debug, Clone)]
pub struct PointSampler {
    threshold: f32,
    last_recorded: Option<Pos2>,
}

impl PointSampler {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            last_recorded: None,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn last_recorded(&self) -> Option<Pos2> {
        self.last_recorded
    }

    pub fn on_pointer_move(
        &mut self,
        location: Pos2,
        bounds: Rect,
        path: &mut SignaturePath,
    ) -> Sample {
        if !bounds.contains(location) {
            path.add_break();
            return Sample::OutOfBounds;
        }

        let far_enough = self
            .last_recorded
            .is_none_or(|last| distance(last, location) > self.threshold);
        if !far_enough {
            return Sample::Filtered;
        }

        path.add_vertex(location);
        self.last_recorded = Some(location);
        Sample::Recorded
    }

    /// End the current gesture: the next vertex starts a new stroke.
    pub fn on_pointer_up(&mut self, path: &mut SignaturePath) {
        path.add_break();
        self.last_recorded = None;
    }

    pub fn reset(&mut self) {
        self.last_recorded = None;
    }
}
