use egui::{Align, Align2, Color32, FontId, Layout, Sense, Stroke, Ui, Vec2};
use image::RgbaImage;
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::SignatureConfig;
use crate::controller::SignatureController;
use crate::geometry::local_bounds;
use crate::input::InputHandler;
use crate::renderer;

/// How a signing session ended
#[derive(Debug, Clone, PartialEq)]
pub enum SignatureOutcome {
    Saved(RgbaImage),
    Cancelled,
}

/// egui front end for a [`SignatureController`]: the capture surface plus
/// the Done / Redo / Cancel row.
#[derive(Debug)]
pub struct SignaturePad {
    controller: SignatureController,
    input: InputHandler,
    outcome: Rc<RefCell<Option<SignatureOutcome>>>,
}

impl SignaturePad {
    /// A pad whose results are returned from [`Self::show`].
    pub fn new(config: SignatureConfig) -> Self {
        let outcome = Rc::new(RefCell::new(None));

        let saved = Rc::clone(&outcome);
        let cancelled = Rc::clone(&outcome);
        let controller = SignatureController::new(
            config,
            move |image| *saved.borrow_mut() = Some(SignatureOutcome::Saved(image)),
            move || *cancelled.borrow_mut() = Some(SignatureOutcome::Cancelled),
        );

        Self {
            controller,
            input: InputHandler::default(),
            outcome,
        }
    }

    /// A pad that reports results only through the controller's callbacks.
    pub fn with_controller(controller: SignatureController) -> Self {
        Self {
            controller,
            input: InputHandler::default(),
            outcome: Rc::new(RefCell::new(None)),
        }
    }

    pub fn controller(&self) -> &SignatureController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SignatureController {
        &mut self.controller
    }

    /// Show the pad. Returns the outcome in the frame the session ends.
    pub fn show(&mut self, ui: &mut Ui) -> Option<SignatureOutcome> {
        self.surface(ui);
        ui.add_space(4.0);
        self.actions(ui);
        self.outcome.borrow_mut().take()
    }

    fn surface(&mut self, ui: &mut Ui) {
        let config = self.controller.config().clone();
        let size = Vec2::new(ui.available_width(), config.surface_height);
        let (response, painter) = ui.allocate_painter(size, Sense::drag());
        let rect = response.rect;

        self.input.set_surface_rect(rect);
        self.controller.set_bounds(local_bounds(rect.size()));

        for event in self.input.process_response(&response) {
            self.controller.handle_event(&event);
        }

        painter.rect_filled(rect, config.corner_radius, Color32::WHITE);

        if self.controller.is_empty() {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                &config.placeholder,
                FontId::proportional(18.0),
                Color32::GRAY,
            );
        } else {
            renderer::paint(
                &painter,
                &self.controller.vector_path(),
                rect.min,
                Stroke::new(config.preview_line_width, self.controller.color()),
            );
        }

        painter.rect_stroke(
            rect,
            config.corner_radius,
            Stroke::new(1.0, config.border_color),
        );
    }

    fn actions(&mut self, ui: &mut Ui) {
        let config = self.controller.config();
        let (done, clear, cancel) = (
            config.done_label.clone(),
            config.clear_label.clone(),
            config.cancel_label.clone(),
        );

        ui.columns(3, |columns| {
            if columns[0].button(done).clicked() {
                if let Err(err) = self.controller.finish() {
                    log::error!("Failed to produce signature image: {}", err);
                }
            }
            columns[1].with_layout(Layout::top_down(Align::Center), |ui| {
                if ui.button(clear).clicked() {
                    self.controller.clear();
                }
            });
            columns[2].with_layout(Layout::right_to_left(Align::Min), |ui| {
                if ui.button(cancel).clicked() {
                    self.controller.cancel();
                }
            });
        });
    }
}
