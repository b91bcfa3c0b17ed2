use egui::{Pos2, Rect, Vec2};

/// Convert a screen position into the drawing surface's local space.
///
/// All recorded vertices live in local space, with the origin at the
/// top-left corner of the surface.
pub fn to_local(screen_pos: Pos2, surface: Rect) -> Pos2 {
    (screen_pos - surface.min).to_pos2()
}

/// Convert a local position back into screen space for live painting.
pub fn to_screen(local_pos: Pos2, origin: Pos2) -> Pos2 {
    origin + local_pos.to_vec2()
}

/// The surface rectangle expressed in its own local space.
pub fn local_bounds(size: Vec2) -> Rect {
    Rect::from_min_size(Pos2::ZERO, size)
}

/// Convert a local position into raster (pixel) space.
///
/// Local units map 1:1 onto pixels, with the pixel grid anchored at the
/// surface origin.
pub fn to_raster(pos: Pos2) -> (f32, f32) {
    (pos.x, pos.y)
}

pub fn midpoint(a: Pos2, b: Pos2) -> Pos2 {
    Pos2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

pub fn distance(a: Pos2, b: Pos2) -> f32 {
    (b - a).length()
}
