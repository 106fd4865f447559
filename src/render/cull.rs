use crate::spatial::{rect_overlaps, Transform};
use macroquad::prelude::*;

/// Visible region of the map in scaled map coordinates.
///
/// The region starts at the transform's translation and spans the viewport
/// size, i.e. it is exactly the part of the map that lands in
/// `[0, size]` after [`map_draw_pos`](crate::spatial::map_draw_pos).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    region: Rect,
    scale: f32,
}

impl Viewport {
    /// Region of `size` at the transform's translation.
    pub fn new(transform: Transform, size: Vec2) -> Self {
        Viewport {
            region: Rect::new(
                transform.translation.x,
                transform.translation.y,
                size.x,
                size.y,
            ),
            scale: transform.scale,
        }
    }

    /// Visible rectangle in scaled map coordinates.
    pub fn region(&self) -> Rect {
        self.region
    }

    /// True when any part of `bounds`, scaled, touches the region.
    pub fn is_visible(&self, bounds: Rect) -> bool {
        let scaled = Rect::new(
            bounds.x * self.scale,
            bounds.y * self.scale,
            bounds.w * self.scale,
            bounds.h * self.scale,
        );
        rect_overlaps(&self.region, &scaled)
    }
}
