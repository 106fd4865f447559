// tests/common/mod.rs
#![allow(dead_code)]

use macroquad_tmx::{Batch, BatchSprite, RenderTarget, Tileset};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// 32×32 opaque RGBA PNG: four 16×16 tiles.
pub const TILES_32_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x20, 0x00, 0x00, 0x00, 0x20, 0x08, 0x06, 0x00, 0x00, 0x00, 0x73, 0x7a, 0x7a,
    0xf4, 0x00, 0x00, 0x00, 0x2f, 0x49, 0x44, 0x41, 0x54, 0x78, 0xda, 0xed, 0xce, 0x21, 0x01, 0x00,
    0x00, 0x08, 0x03, 0x30, 0x82, 0x11, 0x8c, 0x88, 0xb4, 0x82, 0x18, 0x37, 0x13, 0xf3, 0xab, 0x9d,
    0xbe, 0xa4, 0x12, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10,
    0x10, 0x48, 0x07, 0x1e, 0xae, 0x3e, 0xec, 0x88, 0x37, 0x54, 0x6e, 0x21, 0x00, 0x00, 0x00, 0x00,
    0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

/// Tiles per fixture tileset, as declared in the TMX.
pub const TILESET_TILE_COUNT: u32 = 4;

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn temp_dir() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock went backwards")
        .as_nanos();
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!("mq_tmx_{nanos}_{n}"));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

pub fn write_png(dir: &Path, name: &str) {
    fs::write(dir.join(name), TILES_32_PNG).expect("failed to write png");
}

/// Fixture tileset: `(name, image file)`.
pub type TilesetDef<'a> = (&'a str, &'a str);
/// Fixture tile layer: `(name, gids)`; gid 0 is an empty cell.
pub type LayerDef<'a> = (&'a str, &'a [u32]);

/// Renders an orthogonal, finite TMX document with 16×16 tiles.
///
/// Tileset `i` gets first gid `1 + 4 * i`.
pub fn tmx(width: u32, height: u32, tilesets: &[TilesetDef], layers: &[LayerDef]) -> String {
    let mut out = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <map version=\"1.10\" tiledversion=\"1.10.2\" orientation=\"orthogonal\" \
         renderorder=\"right-down\" width=\"{width}\" height=\"{height}\" \
         tilewidth=\"16\" tileheight=\"16\" infinite=\"0\" nextlayerid=\"{}\" nextobjectid=\"1\">\n",
        layers.len() + 1
    );
    for (i, (name, image)) in tilesets.iter().enumerate() {
        let first_gid = 1 + TILESET_TILE_COUNT * i as u32;
        out.push_str(&format!(
            " <tileset firstgid=\"{first_gid}\" name=\"{name}\" tilewidth=\"16\" tileheight=\"16\" \
             tilecount=\"{TILESET_TILE_COUNT}\" columns=\"2\">\n  \
             <image source=\"{image}\" width=\"32\" height=\"32\"/>\n </tileset>\n"
        ));
    }
    for (i, (name, gids)) in layers.iter().enumerate() {
        assert_eq!(gids.len() as u32, width * height, "layer {name} has wrong size");
        let rows: Vec<String> = gids
            .chunks(width as usize)
            .map(|row| {
                row.iter()
                    .map(|g| g.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect();
        out.push_str(&format!(
            " <layer id=\"{}\" name=\"{name}\" width=\"{width}\" height=\"{height}\">\n  \
             <data encoding=\"csv\">\n{}\n</data>\n </layer>\n",
            i + 1,
            rows.join(",\n")
        ));
    }
    out.push_str("</map>\n");
    out
}

/// Writes `tmx` plus one PNG per tileset image into a fresh directory and
/// returns the map path.
pub fn write_map(width: u32, height: u32, tilesets: &[TilesetDef], layers: &[LayerDef]) -> PathBuf {
    let dir = temp_dir();
    for (_, image) in tilesets {
        write_png(&dir, image);
    }
    let path = dir.join("map.tmx");
    fs::write(&path, tmx(width, height, tilesets, layers)).expect("failed to write map");
    path
}

/// Records every batch submission instead of drawing it.
#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<(String, Vec<BatchSprite>)>,
}

impl Recorder {
    pub fn tileset_order(&self) -> Vec<&str> {
        self.calls.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn sprite_count(&self) -> usize {
        self.calls.iter().map(|(_, s)| s.len()).sum()
    }
}

impl RenderTarget for Recorder {
    fn draw_batch(&mut self, tileset: &Tileset, batch: &Batch) {
        self.calls
            .push((tileset.name().to_owned(), batch.sprites().to_vec()));
    }
}
