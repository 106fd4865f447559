use macroquad::prelude::*;

/// A region of one of the map's tilesets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// Index into [`Map::tilesets`](crate::Map::tilesets).
    pub tileset: usize,
    /// Source rectangle in tileset image pixels.
    pub src: Rect,
}

/// Struct for map tile.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    sprite: Sprite,
    bounds: Rect,
}

impl Tile {
    pub(crate) fn new(sprite: Sprite, pos: Vec2) -> Self {
        let bounds = Rect::new(pos.x, pos.y, sprite.src.w, sprite.src.h);
        Tile { sprite, bounds }
    }

    /// Tileset region drawn for this tile.
    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    /// Bottom-left corner in map coordinates.
    pub fn position(&self) -> Vec2 {
        self.bounds.point()
    }

    /// Placement rectangle in map coordinates (y up).
    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}
