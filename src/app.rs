use crate::config::SignatureConfig;
use crate::renderer::Renderer;
use crate::widgets::{SignatureOutcome, SignaturePad};

/// Demo host: shows the last captured signature and opens the pad on demand.
///
/// We derive Deserialize/Serialize so we can persist the pad config on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct DemoApp {
    config: SignatureConfig,
    // Texture uploads need the egui context
    #[serde(skip)]
    renderer: Option<Renderer>,
    #[serde(skip)]
    pad: Option<SignaturePad>,
    #[serde(skip)]
    signature: Option<egui::TextureHandle>,
}

impl Default for DemoApp {
    fn default() -> Self {
        Self {
            config: SignatureConfig::default(),
            renderer: None,
            pad: None,
            signature: None,
        }
    }
}

impl DemoApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        if let Err(err) = app.config.validate() {
            log::warn!("Ignoring stored config: {}", err);
            app.config = SignatureConfig::default();
        }

        app.renderer = Some(Renderer::new(&cc.egui_ctx));
        app
    }

    pub fn with_config(mut self, config: SignatureConfig) -> Self {
        self.config = config;
        self
    }

    fn handle_outcome(&mut self, outcome: SignatureOutcome) {
        match outcome {
            SignatureOutcome::Saved(image) if image.width() == 0 => {
                log::info!("Signature was empty");
                self.signature = None;
            }
            SignatureOutcome::Saved(image) => {
                self.signature = self
                    .renderer
                    .as_ref()
                    .map(|renderer| renderer.create_texture(&image, "signature"));
            }
            SignatureOutcome::Cancelled => {}
        }
        self.pad = None;
    }
}

impl eframe::App for DemoApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                match &self.signature {
                    Some(texture) => {
                        ui.add(egui::Image::new(texture).max_height(200.0));
                    }
                    None => {
                        ui.heading("Not signed yet");
                    }
                }

                ui.add_space(12.0);
                if ui.button("✏ Sign").clicked() && self.pad.is_none() {
                    self.pad = Some(SignaturePad::new(self.config.clone()));
                }
            });
        });

        let mut outcome = None;
        if let Some(pad) = &mut self.pad {
            egui::Window::new("Signature")
                .collapsible(false)
                .resizable(false)
                .default_width(500.0)
                .show(ctx, |ui| {
                    outcome = pad.show(ui);
                });
        }

        if let Some(outcome) = outcome {
            self.handle_outcome(outcome);
        }
    }
}
