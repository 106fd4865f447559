//! Coordinate helpers shared by map construction, drawing and queries.
//!
//! Map coordinates are y-up: row 0 of a layer sits at the top of the map,
//! at `y == map height`.

use macroquad::prelude::*;

/// Translation plus uniform scale, mapping map coordinates to draw coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Camera offset, subtracted after scaling.
    pub translation: Vec2,
    /// Uniform scale applied to both axes.
    pub scale: f32,
}

impl Transform {
    /// No translation, scale 1.
    pub const IDENTITY: Transform = Transform {
        translation: Vec2::ZERO,
        scale: 1.0,
    };

    /// Transform from a translation and a uniform scale.
    pub fn new(translation: Vec2, scale: f32) -> Self {
        Transform { translation, scale }
    }

    /// Identity transform moved by `translation`.
    pub fn moved(translation: Vec2) -> Self {
        Transform::new(translation, 1.0)
    }

    /// Same translation with a different scale.
    pub fn scaled(self, scale: f32) -> Self {
        Transform { scale, ..self }
    }

    /// Reads a matrix transform. Only the translation and the `x_axis.x`
    /// slot (uniform scale) are used; rotation and shear are ignored.
    pub fn from_affine(affine: Affine2) -> Self {
        Transform {
            translation: affine.translation,
            scale: affine.matrix2.x_axis.x,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::IDENTITY
    }
}

impl From<Affine2> for Transform {
    fn from(affine: Affine2) -> Self {
        Transform::from_affine(affine)
    }
}

/// Translates a map position into a draw position.
#[inline]
pub fn map_draw_pos(pos: Vec2, transform: Transform) -> Vec2 {
    pos * transform.scale - transform.translation
}

/// Rounds a tileset image size down to a whole number of tiles on each axis.
pub fn round_tileset_size(tileset_size: Vec2, tile_size: Vec2) -> Vec2 {
    if tile_size.x <= 0.0 || tile_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    let cols = (tileset_size.x / tile_size.x).floor();
    let rows = (tileset_size.y / tile_size.y).floor();
    vec2(tile_size.x * cols, tile_size.y * rows)
}

/// Closed containment test: points on any edge are inside.
#[inline]
pub fn rect_contains(rect: &Rect, point: Vec2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.w
        && point.y >= rect.y
        && point.y <= rect.y + rect.h
}

/// Closed overlap test; rectangles sharing only an edge overlap.
#[inline]
pub fn rect_overlaps(a: &Rect, b: &Rect) -> bool {
    a.x <= b.x + b.w && b.x <= a.x + a.w && a.y <= b.y + b.h && b.y <= a.y + a.h
}

/// Converts a y-up draw position of a sprite of `size` into the y-down
/// screen position of its top-left corner, for a target `height` tall.
#[inline]
pub fn flip_to_screen(dest: Vec2, size: Vec2, height: f32) -> Vec2 {
    vec2(dest.x, height - dest.y - size.y)
}
