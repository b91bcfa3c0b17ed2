#![warn(clippy::all, rust_2018_idioms)]

use signature_pad::{DemoApp, SignatureConfig};

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    // An optional JSON config path as the only argument
    let config = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => match SignatureConfig::from_json(&json) {
                Ok(config) => Some(config),
                Err(err) => {
                    log::error!("Invalid config {}: {}", path, err);
                    None
                }
            },
            Err(err) => {
                log::error!("Failed to read config {}: {}", path, err);
                None
            }
        },
        None => None,
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 520.0])
            .with_min_inner_size([400.0, 440.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Signature Pad",
        native_options,
        Box::new(move |cc| {
            let app = DemoApp::new(cc);
            Ok(Box::new(match config {
                Some(config) => app.with_config(config),
                None => app,
            }))
        }),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
