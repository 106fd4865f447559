use crate::error::LayerError;
use crate::tile::{Sprite, Tile};
use crate::tileset::Tileset;
use macroquad::logging::warn;
use macroquad::prelude::*;
use std::collections::HashMap;

/// Map geometry and tileset registry needed to place tiles.
pub(crate) struct LayerContext<'m> {
    pub tile_size: Vec2,
    pub map_size: Vec2,
    pub tilesets: &'m [Tileset],
    pub tileset_ids: &'m HashMap<String, usize>,
}

/// One occupied grid cell: tileset name and tile id local to that tileset.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cell<'a> {
    pub tileset: &'a str,
    pub id: u32,
}

/// Struct for map layer.
#[derive(Debug, Clone)]
pub struct Layer {
    name: String,
    tiles: Vec<Tile>,
}

impl Layer {
    /// Builds a layer from a row-major grid `width` cells wide.
    /// `None` cells are empty and produce no tile.
    pub(crate) fn from_cells<'a, I>(
        ctx: &LayerContext<'_>,
        name: &str,
        width: usize,
        cells: I,
    ) -> Result<Self, LayerError>
    where
        I: IntoIterator<Item = Option<Cell<'a>>>,
    {
        let mut tiles = Vec::new();
        for (idx, cell) in cells.into_iter().enumerate() {
            let Some(cell) = cell else {
                continue;
            };
            let &ts_idx = ctx
                .tileset_ids
                .get(cell.tileset)
                .ok_or_else(|| LayerError::UnknownTileset(cell.tileset.to_owned()))?;
            let tileset = &ctx.tilesets[ts_idx];

            let src = tileset.frame(cell.id);
            if src.w == 0.0 {
                warn!(
                    "Layer '{}': tile id {} is outside tileset '{}'",
                    name,
                    cell.id,
                    tileset.name()
                );
            }

            let col = (idx % width) as f32;
            let row = (idx / width) as f32;
            let pos = vec2(
                col * ctx.tile_size.x,
                ctx.map_size.y - row * ctx.tile_size.y,
            );

            tiles.push(Tile::new(
                Sprite {
                    tileset: ts_idx,
                    src,
                },
                pos,
            ));
        }

        Ok(Layer {
            name: name.to_owned(),
            tiles,
        })
    }

    /// Builds a layer from a parsed TMX tile layer.
    pub(crate) fn from_tiled(
        ctx: &LayerContext<'_>,
        source: &tiled::Map,
        name: &str,
        layer: tiled::TileLayer<'_>,
    ) -> Result<Self, LayerError> {
        let tiled::TileLayer::Finite(grid) = layer else {
            return Err(LayerError::Infinite);
        };

        let width = grid.width();
        let height = grid.height();
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let cell = grid.get_tile(x as i32, y as i32).map(|tile| {
                    let tileset = source
                        .tilesets()
                        .get(tile.tileset_index())
                        .map(|ts| ts.name.as_str())
                        .unwrap_or_default();
                    Cell {
                        tileset,
                        id: tile.id(),
                    }
                });
                cells.push(cell);
            }
        }

        Self::from_cells(ctx, name, width as usize, cells)
    }

    /// Layer name from the TMX data.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All layer tiles, in grid order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}
