use crate::spatial::Transform;
use macroquad::prelude::*;

/// Smallest zoom factor accepted by [`Camera::zoom_out`].
pub const MIN_ZOOM: f32 = 0.25;
/// Largest zoom factor accepted by [`Camera::zoom_in`].
pub const MAX_ZOOM: f32 = 4.0;

/// Direction of a one-tile camera step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pan {
    /// +y
    Up,
    /// -y
    Down,
    /// -x
    Left,
    /// +x
    Right,
}

/// Camera state owned by the host loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Offset of the view in scaled map coordinates.
    pub position: Vec2,
    /// Uniform zoom factor.
    pub zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Camera {
    /// Moves the camera by one tile.
    pub fn pan(&mut self, dir: Pan, tile_size: Vec2) {
        match dir {
            Pan::Up => self.position.y += tile_size.y,
            Pan::Down => self.position.y -= tile_size.y,
            Pan::Left => self.position.x -= tile_size.x,
            Pan::Right => self.position.x += tile_size.x,
        }
    }

    /// Increases the zoom by `step`, up to [`MAX_ZOOM`].
    pub fn zoom_in(&mut self, step: f32) {
        self.zoom = (self.zoom + step).min(MAX_ZOOM);
    }

    /// Decreases the zoom by `step`, down to [`MIN_ZOOM`].
    pub fn zoom_out(&mut self, step: f32) {
        self.zoom = (self.zoom - step).max(MIN_ZOOM);
    }

    /// Transform to pass to [`Map::draw`](crate::Map::draw).
    pub fn transform(&self) -> Transform {
        Transform::new(self.position, self.zoom)
    }

    /// Converts a y-up screen point into map coordinates.
    pub fn screen_to_map(&self, point: Vec2) -> Vec2 {
        (point + self.position) / self.zoom
    }

    /// Reads WSAD/arrow keys and `+`/`-` and updates the camera.
    ///
    /// Must be called from inside the macroquad frame loop.
    pub fn handle_keys(&mut self, tile_size: Vec2, zoom_step: f32) {
        if is_key_pressed(KeyCode::W) || is_key_pressed(KeyCode::Up) {
            self.pan(Pan::Up, tile_size);
        }
        if is_key_pressed(KeyCode::D) || is_key_pressed(KeyCode::Right) {
            self.pan(Pan::Right, tile_size);
        }
        if is_key_pressed(KeyCode::S) || is_key_pressed(KeyCode::Down) {
            self.pan(Pan::Down, tile_size);
        }
        if is_key_pressed(KeyCode::A) || is_key_pressed(KeyCode::Left) {
            self.pan(Pan::Left, tile_size);
        }
        if is_key_pressed(KeyCode::Equal) || is_key_pressed(KeyCode::KpAdd) {
            self.zoom_in(zoom_step);
        }
        if is_key_pressed(KeyCode::Minus) || is_key_pressed(KeyCode::KpSubtract) {
            self.zoom_out(zoom_step);
        }
    }
}

/// Mouse position flipped into y-up screen coordinates.
pub fn mouse_position_y_up() -> Vec2 {
    let (x, y) = mouse_position();
    vec2(x, screen_height() - y)
}
