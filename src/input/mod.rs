use egui::{Pos2, Rect, Response};

mod sampler;
pub use sampler::{PointSampler, Sample};

use crate::geometry::to_local;

/// Pointer events delivered to the signature surface.
///
/// Positions are in surface-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The pointer moved while pressed (possibly outside the surface)
    PointerMove { position: Pos2 },
    /// The pointer was lifted, ending the gesture
    PointerUp,
}

/// Handles converting egui drag responses into our domain-specific InputEvents
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    surface_rect: Rect,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(surface_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            surface_rect,
        }
    }

    /// Update the surface rectangle (e.g. if the layout changed)
    pub fn set_surface_rect(&mut self, rect: Rect) {
        self.surface_rect = rect;
    }

    pub fn surface_rect(&self) -> Rect {
        self.surface_rect
    }

    /// Process the surface's response for this frame and generate our InputEvents
    pub fn process_response(&mut self, response: &Response) -> Vec<InputEvent> {
        let pointer_pos = if response.dragged() {
            response.interact_pointer_pos()
        } else {
            None
        };
        self.process(pointer_pos, response.drag_stopped())
    }

    /// Core of [`Self::process_response`], fed with the pressed pointer
    /// position (screen space) and whether the drag ended this frame.
    pub fn process(&mut self, pressed_pos: Option<Pos2>, released: bool) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if let Some(pos) = pressed_pos {
            // Only report actual movement
            if Some(pos) != self.last_pointer_pos {
                events.push(InputEvent::PointerMove {
                    position: to_local(pos, self.surface_rect),
                });
            }
            self.last_pointer_pos = Some(pos);
        }

        if released {
            events.push(InputEvent::PointerUp);
            self.last_pointer_pos = None;
        }

        events
    }
}
