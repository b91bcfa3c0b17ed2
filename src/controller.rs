use egui::{Color32, Rect};
use image::RgbaImage;
use std::sync::Arc;

use crate::config::SignatureConfig;
use crate::curve::{self, VectorPath};
use crate::error::Result;
use crate::event::{EventBus, SignatureEvent};
use crate::input::{InputEvent, PointSampler, Sample};
use crate::path::{PathRef, SignaturePath};
use crate::persistence::{DocumentDirStore, ImageStore};
use crate::renderer::{self, StrokeStyle};
use crate::state::{SessionState, WidgetState};

type SaveCallback = Box<dyn FnMut(RgbaImage)>;
type CancelCallback = Box<dyn FnMut()>;

/// Drives one signature surface: samples pointer input into the path,
/// and turns the path into a bitmap on finish.
///
/// Exactly one of the save or cancel callbacks fires per session; clearing
/// fires neither. After finish or cancel the controller is back to an
/// empty session, ready for reuse.
pub struct SignatureController {
    config: SignatureConfig,
    state: WidgetState,
    sampler: PointSampler,
    store: Option<Box<dyn ImageStore>>,
    event_bus: EventBus,
    on_save: SaveCallback,
    on_cancel: CancelCallback,
}

impl std::fmt::Debug for SignatureController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureController")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("sampler", &self.sampler)
            .field("persisting", &self.store.is_some())
            .field("event_bus", &self.event_bus)
            .finish()
    }
}

impl SignatureController {
    pub fn new(
        config: SignatureConfig,
        on_save: impl FnMut(RgbaImage) + 'static,
        on_cancel: impl FnMut() + 'static,
    ) -> Self {
        let store: Option<Box<dyn ImageStore>> = match (config.save_signature, &config.save_dir) {
            (true, Some(dir)) => Some(Box::new(DocumentDirStore::new(dir.clone()))),
            _ => None,
        };

        Self {
            state: WidgetState::new(config.color),
            sampler: PointSampler::new(config.sample_threshold),
            store,
            event_bus: EventBus::new(),
            on_save: Box::new(on_save),
            on_cancel: Box::new(on_cancel),
            config,
        }
    }

    /// Replace the persistence target for finished signatures.
    pub fn with_store(mut self, store: impl ImageStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    pub fn config(&self) -> &SignatureConfig {
        &self.config
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn session(&self) -> SessionState {
        self.state.session
    }

    /// Shared handle to the current path; stays valid across a clear.
    pub fn path(&self) -> PathRef {
        Arc::clone(&self.state.path)
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn color(&self) -> Color32 {
        self.state.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.state.color = color;
    }

    /// Report the surface's extent in local space.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.state.bounds = bounds;
    }

    pub fn events(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn vector_path(&self) -> VectorPath {
        curve::build(&self.state.path, self.config.smoothing)
    }

    fn transition(&mut self, new: SessionState) {
        let old = self.state.session;
        if old == new {
            return;
        }
        log::debug!("Signature session {:?} -> {:?}", old, new);
        self.state.session = new;
        self.event_bus.emit(SignatureEvent::StateChanged { old, new });
    }

    fn reset(&mut self) {
        self.state.path = SignaturePath::new_ref();
        self.sampler.reset();
        self.transition(SessionState::Empty);
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> Option<Sample> {
        let path = Arc::make_mut(&mut self.state.path);
        match *event {
            InputEvent::PointerMove { position } => {
                let sample = self
                    .sampler
                    .on_pointer_move(position, self.state.bounds, path);
                let count = path.len();

                match sample {
                    Sample::Recorded => {
                        self.transition(SessionState::Drawing);
                        self.event_bus
                            .emit(SignatureEvent::VertexRecorded { count });
                    }
                    Sample::OutOfBounds => {
                        log::debug!("Pointer left the surface at {:?}", position);
                        self.event_bus
                            .emit(SignatureEvent::StrokeBroken { index: count });
                    }
                    Sample::Filtered => {}
                }
                Some(sample)
            }
            InputEvent::PointerUp => {
                self.sampler.on_pointer_up(path);
                let index = path.len();
                self.event_bus.emit(SignatureEvent::StrokeBroken { index });
                None
            }
        }
    }

    /// Rasterize the signature at its drawn width and the configured height.
    pub fn render_image(&self) -> Result<RgbaImage> {
        let (width, height) = renderer::raster_size(&self.state.path, self.config.output_height);
        let style = StrokeStyle::new(self.state.color, self.config.raster_line_width)
            .with_background(self.config.background);
        Ok(renderer::rasterize(&self.vector_path(), &style, width, height)?)
    }

    /// Rasterize, optionally persist, and hand the bitmap to the save callback.
    ///
    /// Persistence failures are logged and otherwise ignored. On a
    /// rasterization error no callback fires and the path is kept.
    pub fn finish(&mut self) -> Result<()> {
        let image = self.render_image()?;
        log::info!(
            "Finished signature: {} vertices, {}x{} px",
            self.state.path.len(),
            image.width(),
            image.height()
        );

        if let Some(store) = self.store.as_mut() {
            if let Err(err) = store.store(&image) {
                log::warn!("Failed to persist signature: {}", err);
            }
        }

        self.transition(SessionState::Finished);
        self.event_bus.emit(SignatureEvent::Finished {
            width: image.width(),
            height: image.height(),
        });
        (self.on_save)(image);

        self.reset();
        Ok(())
    }

    /// Discard the drawing without notifying the host.
    pub fn clear(&mut self) {
        log::info!("Cleared signature ({} vertices)", self.state.path.len());
        self.reset();
        self.event_bus.emit(SignatureEvent::Cleared);
    }

    /// Abandon the session and notify the host.
    pub fn cancel(&mut self) {
        log::info!("Cancelled signature");
        self.transition(SessionState::Cancelled);
        self.event_bus.emit(SignatureEvent::Cancelled);
        (self.on_cancel)();

        self.reset();
    }
}
