use crate::error::MapError;
use crate::layer::{Layer, LayerContext};
use crate::loader::tmx_loader::{load_picture, load_tmx};
use crate::render::{Batch, BatchSprite, RenderTarget, Viewport};
use crate::spatial::{map_draw_pos, rect_contains, Transform};
use crate::tileset::Tileset;
use anyhow::Context;
use macroquad::logging::{debug, info, warn};
use macroquad::prelude::*;
use std::collections::HashMap;
use std::path::Path;

/// Graphical representation of a TMX map.
///
/// All tiles are built once by [`Map::load`]. Drawing only refills the
/// per-tileset batches and hands them to a [`RenderTarget`].
pub struct Map {
    source: tiled::Map,
    tilesets: Vec<Tileset>,
    tileset_ids: HashMap<String, usize>,
    batches: Vec<Batch>,
    tile_size: Vec2,
    tile_count: Vec2,
    size: Vec2,
    layers: Vec<Layer>,
}

impl Map {
    /// Loads a map from the `.tmx` file at `path`.
    ///
    /// Tileset images are decoded eagerly; GPU textures are uploaded on the
    /// first draw, so this can run before a window exists.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let source = load_tmx(path)?;
        let map = Self::from_tiled(source)?;
        info!(
            "Loaded map {}: {} layers, {} tilesets",
            path.display(),
            map.layers.len(),
            map.tilesets.len()
        );
        Ok(map)
    }

    /// Builds a map from already parsed TMX data.
    pub fn from_tiled(source: tiled::Map) -> Result<Self, MapError> {
        let tile_size = vec2(source.tile_width as f32, source.tile_height as f32);
        let tile_count = vec2(source.width as f32, source.height as f32);
        let size = (tile_size * tile_count).trunc();

        let mut tilesets = Vec::with_capacity(source.tilesets().len());
        let mut tileset_ids = HashMap::new();
        for ts in source.tilesets() {
            let tileset = load_tileset(ts, tile_size).map_err(|e| MapError::Tileset {
                name: ts.name.clone(),
                source: e,
            })?;
            debug!(
                "Tileset '{}': {} tiles",
                tileset.name(),
                tileset.frame_count()
            );
            if tileset_ids.insert(ts.name.clone(), tilesets.len()).is_some() {
                warn!("Duplicate tileset name '{}', the last one wins", ts.name);
            }
            tilesets.push(tileset);
        }
        let batches = (0..tilesets.len()).map(Batch::new).collect();

        let ctx = LayerContext {
            tile_size,
            map_size: size,
            tilesets: &tilesets,
            tileset_ids: &tileset_ids,
        };
        let mut layers = Vec::new();
        for layer in source.layers() {
            build_layers(&ctx, &source, layer, &mut layers)?;
        }

        Ok(Map {
            source,
            tilesets,
            tileset_ids,
            batches,
            tile_size,
            tile_count,
            size,
            layers,
        })
    }

    /// Draws the whole map.
    pub fn draw<T>(&mut self, target: &mut T, transform: Transform)
    where
        T: RenderTarget + ?Sized,
    {
        self.fill_batches(transform, None);
        self.flush(target);
    }

    /// Draws only tiles overlapping a `viewport_size` region at the
    /// transform's translation.
    pub fn draw_part<T>(&mut self, target: &mut T, transform: Transform, viewport_size: Vec2)
    where
        T: RenderTarget + ?Sized,
    {
        let viewport = Viewport::new(transform, viewport_size);
        self.fill_batches(transform, Some(viewport));
        self.flush(target);
    }

    fn fill_batches(&mut self, transform: Transform, viewport: Option<Viewport>) {
        for batch in &mut self.batches {
            batch.clear();
        }
        for layer in &self.layers {
            for tile in layer.tiles() {
                if let Some(vp) = &viewport {
                    if !vp.is_visible(tile.bounds()) {
                        continue;
                    }
                }
                let sprite = tile.sprite();
                let Some(batch) = self.batches.get_mut(sprite.tileset) else {
                    continue;
                };
                batch.push(BatchSprite {
                    src: sprite.src,
                    dest: map_draw_pos(tile.position(), transform),
                    scale: transform.scale,
                });
            }
        }
    }

    // Each batch is submitted once, in the order its tileset is first met.
    fn flush<T>(&self, target: &mut T)
    where
        T: RenderTarget + ?Sized,
    {
        let mut drawn = vec![false; self.batches.len()];
        for layer in &self.layers {
            for tile in layer.tiles() {
                let idx = tile.sprite().tileset;
                if drawn.get(idx).copied().unwrap_or(true) {
                    continue;
                }
                drawn[idx] = true;
                target.draw_batch(&self.tilesets[idx], &self.batches[idx]);
            }
        }
    }

    /// Size of a single tile in pixels.
    pub fn tile_size(&self) -> Vec2 {
        self.tile_size
    }

    /// Columns and rows.
    pub fn tile_count(&self) -> Vec2 {
        self.tile_count
    }

    /// Size of the whole map in pixels.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// All tile layers, bottom first.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// First layer called `name`.
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name() == name)
    }

    /// Tilesets in TMX order; [`Sprite::tileset`](crate::Sprite::tileset) indexes this.
    pub fn tilesets(&self) -> &[Tileset] {
        &self.tilesets
    }

    /// Tileset registered under `name`.
    pub fn tileset(&self, name: &str) -> Option<&Tileset> {
        self.tileset_ids.get(name).map(|&idx| &self.tilesets[idx])
    }

    /// Batches as filled by the last draw call.
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    /// Parsed TMX data the map was built from.
    pub fn source(&self) -> &tiled::Map {
        &self.source
    }

    /// Topmost layer with a tile at `pos` (map coordinates).
    pub fn position_layer(&self, pos: Vec2) -> Option<&Layer> {
        let mut found = None;
        for layer in &self.layers {
            for tile in layer.tiles() {
                if rect_contains(&tile.bounds(), pos) {
                    found = Some(layer);
                }
            }
        }
        found
    }

    /// Whether the first (ground) layer has a tile at `pos`.
    pub fn passable(&self, pos: Vec2) -> bool {
        match self.layers.first() {
            Some(ground) => ground
                .tiles()
                .iter()
                .any(|t| rect_contains(&t.bounds(), pos)),
            None => false,
        }
    }
}

fn load_tileset(ts: &tiled::Tileset, tile_size: Vec2) -> anyhow::Result<Tileset> {
    let image = ts
        .image
        .as_ref()
        .with_context(|| format!("Tileset {} has no single image", ts.name))?;
    let picture = load_picture(&image.source)?;
    Ok(Tileset::new(ts.name.clone(), picture, tile_size))
}

// Group layers are flattened in document order.
fn build_layers(
    ctx: &LayerContext<'_>,
    source: &tiled::Map,
    layer: tiled::Layer<'_>,
    out: &mut Vec<Layer>,
) -> Result<(), MapError> {
    match layer.layer_type() {
        tiled::LayerType::Tiles(tiles) => {
            let built =
                Layer::from_tiled(ctx, source, &layer.name, tiles).map_err(|e| MapError::Layer {
                    name: layer.name.clone(),
                    source: e,
                })?;
            out.push(built);
        }
        tiled::LayerType::Group(group) => {
            for child in group.layers() {
                build_layers(ctx, source, child, out)?;
            }
        }
        _ => debug!("Skipping layer '{}': no tiles", layer.name),
    }
    Ok(())
}
