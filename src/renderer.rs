// src/renderer.rs
use egui::epaint::QuadraticBezierShape;
use egui::{Color32, Painter, Pos2, Shape, Stroke};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Transform};

use crate::curve::{PathCommand, VectorPath};
use crate::error::RenderError;
use crate::geometry::{to_raster, to_screen};
use crate::path::SignaturePath;

/// Styling applied when rasterizing a finished signature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color32,
    pub width: f32,
    pub background: Option<Color32>,
}

impl StrokeStyle {
    pub fn new(color: Color32, width: f32) -> Self {
        Self {
            color,
            width,
            background: None,
        }
    }

    pub fn with_background(mut self, background: Option<Color32>) -> Self {
        self.background = background;
        self
    }
}

/// Converts a vector path into egui shapes positioned on screen
///
/// Args:
///     vector (VectorPath): The commands to convert, in surface-local space
///     origin (Pos2): Screen position of the surface's top-left corner
///     stroke (Stroke): Width and color of the preview line
///
/// Returns:
///     Vec<Shape>: One shape per drawn segment; moves produce nothing
pub fn screen_shapes(vector: &VectorPath, origin: Pos2, stroke: Stroke) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(vector.len());
    let mut pen: Option<Pos2> = None;

    for command in vector.commands() {
        match *command {
            PathCommand::MoveTo(to) => pen = Some(to),
            PathCommand::LineTo(to) => {
                if let Some(from) = pen {
                    shapes.push(Shape::line_segment(
                        [to_screen(from, origin), to_screen(to, origin)],
                        stroke,
                    ));
                }
                pen = Some(to);
            }
            PathCommand::QuadTo { ctrl, end } => {
                if let Some(from) = pen {
                    shapes.push(
                        QuadraticBezierShape::from_points_stroke(
                            [
                                to_screen(from, origin),
                                to_screen(ctrl, origin),
                                to_screen(end, origin),
                            ],
                            false,
                            Color32::TRANSPARENT,
                            stroke,
                        )
                        .into(),
                    );
                }
                pen = Some(end);
            }
        }
    }

    shapes
}

/// Draws the live preview of a signature
pub fn paint(painter: &Painter, vector: &VectorPath, origin: Pos2, stroke: Stroke) {
    painter.extend(screen_shapes(vector, origin, stroke));
}

/// Output bitmap size for `path`: as wide as the rightmost vertex, rounded
/// up to whole pixels, and `height` tall.
pub fn raster_size(path: &SignaturePath, height: u32) -> (u32, u32) {
    (path.max_x().max(0.0).ceil() as u32, height)
}

fn skia_color(color: Color32) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

fn skia_path(vector: &VectorPath) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();

    for command in vector.commands() {
        match *command {
            PathCommand::MoveTo(to) => {
                let (x, y) = to_raster(to);
                builder.move_to(x, y);
            }
            PathCommand::LineTo(to) => {
                let (x, y) = to_raster(to);
                builder.line_to(x, y);
            }
            PathCommand::QuadTo { ctrl, end } => {
                let (cx, cy) = to_raster(ctrl);
                let (x, y) = to_raster(end);
                builder.quad_to(cx, cy, x, y);
            }
        }
    }

    builder.finish()
}

/// Strokes `vector` onto a fresh `width` x `height` canvas.
///
/// A zero-sized canvas yields an empty image of that size. The result is
/// straight (non-premultiplied) RGBA.
pub fn rasterize(
    vector: &VectorPath,
    style: &StrokeStyle,
    width: u32,
    height: u32,
) -> Result<RgbaImage, RenderError> {
    if width == 0 || height == 0 {
        return Ok(RgbaImage::new(width, height));
    }

    let mut pixmap =
        Pixmap::new(width, height).ok_or(RenderError::InvalidDimensions { width, height })?;

    if let Some(background) = style.background {
        pixmap.fill(skia_color(background));
    }

    if let Some(path) = skia_path(vector) {
        let mut paint = Paint::default();
        paint.set_color(skia_color(style.color));
        paint.anti_alias = true;

        let stroke = tiny_skia::Stroke {
            width: style.width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    let data: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let c = pixel.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    RgbaImage::from_raw(width, height, data).ok_or(RenderError::InvalidDimensions { width, height })
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Uploads finished signatures as egui textures for display
#[derive(Debug, Clone)]
pub struct Renderer {
    ctx: egui::Context,
}

impl Renderer {
    pub fn new(ctx: &egui::Context) -> Self {
        Self { ctx: ctx.clone() }
    }

    pub fn create_texture(&self, image: &RgbaImage, name: &str) -> egui::TextureHandle {
        let size = [image.width() as usize, image.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
        self.ctx
            .load_texture(name, color_image, egui::TextureOptions::LINEAR)
    }
}
