#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod controller;
pub mod curve;
pub mod error;
pub mod event;
pub mod geometry;
pub mod input;
pub mod path;
pub mod persistence;
pub mod renderer;
pub mod state;
pub mod widgets;

pub use app::DemoApp;
pub use config::SignatureConfig;
pub use controller::SignatureController;
pub use curve::{PathCommand, Smoothing, VectorPath};
pub use error::{ConfigError, PersistenceError, RenderError, SignatureError};
pub use event::{EventBus, EventHandler, SignatureEvent};
pub use input::{InputEvent, InputHandler, PointSampler, Sample};
pub use path::{PathRef, SignaturePath};
pub use persistence::{DocumentDirStore, ImageStore};
pub use renderer::{Renderer, StrokeStyle};
pub use state::{SessionState, WidgetState};
pub use widgets::{SignatureOutcome, SignaturePad};
