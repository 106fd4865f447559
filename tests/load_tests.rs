// tests/load_tests.rs

mod common;

use common::{temp_dir, write_map, write_png};
use macroquad_tmx::{LayerError, Map, MapError};
use std::fs;

#[test]
fn missing_map_file_is_a_load_error() {
    let dir = temp_dir();
    let err = Map::load(dir.join("nowhere.tmx")).err().expect("expected error");
    assert!(matches!(err, MapError::Load { .. }));
}

#[test]
fn malformed_map_is_a_load_error() {
    let dir = temp_dir();
    let path = dir.join("map.tmx");
    fs::write(&path, "<map orientation=\"orthogonal\"><layer").unwrap();

    let err = Map::load(&path).err().expect("expected error");
    assert!(matches!(err, MapError::Load { .. }));
}

#[test]
fn missing_tileset_image_names_the_tileset() {
    let dir = temp_dir();
    let tmx = common::tmx(2, 2, &[("walls", "walls.png")], &[("ground", &[1, 1, 1, 1])]);
    let path = dir.join("map.tmx");
    fs::write(&path, tmx).unwrap();

    let err = Map::load(&path).err().expect("expected error");
    match err {
        MapError::Tileset { ref name, .. } => assert_eq!(name, "walls"),
        other => panic!("expected Tileset error, got {:?}", other),
    }
    assert!(err.to_string().contains("walls.png"));
}

#[test]
fn undecodable_tileset_image_is_a_tileset_error() {
    let dir = temp_dir();
    fs::write(dir.join("terrain.png"), b"not an image").unwrap();
    let tmx = common::tmx(1, 1, &[("terrain", "terrain.png")], &[("ground", &[1])]);
    let path = dir.join("map.tmx");
    fs::write(&path, tmx).unwrap();

    let err = Map::load(&path).err().expect("expected error");
    assert!(matches!(err, MapError::Tileset { ref name, .. } if name == "terrain"));
}

#[test]
fn second_tileset_failure_is_reported() {
    let dir = temp_dir();
    write_png(&dir, "grass.png");
    let tmx = common::tmx(
        1,
        1,
        &[("grass", "grass.png"), ("water", "water.png")],
        &[("ground", &[1])],
    );
    let path = dir.join("map.tmx");
    fs::write(&path, tmx).unwrap();

    let err = Map::load(&path).err().expect("expected error");
    assert!(matches!(err, MapError::Tileset { ref name, .. } if name == "water"));
}

#[test]
fn infinite_layer_is_a_layer_error() {
    let dir = temp_dir();
    write_png(&dir, "terrain.png");
    let chunk = vec!["1"; 256].join(",");
    let tmx = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<map version="1.10" tiledversion="1.10.2" orientation="orthogonal" renderorder="right-down" width="16" height="16" tilewidth="16" tileheight="16" infinite="1" nextlayerid="2" nextobjectid="1">
 <tileset firstgid="1" name="terrain" tilewidth="16" tileheight="16" tilecount="4" columns="2">
  <image source="terrain.png" width="32" height="32"/>
 </tileset>
 <layer id="1" name="endless" width="16" height="16">
  <data encoding="csv">
   <chunk x="0" y="0" width="16" height="16">
{chunk}
</chunk>
  </data>
 </layer>
</map>
"#
    );
    let path = dir.join("map.tmx");
    fs::write(&path, tmx).unwrap();

    let err = Map::load(&path).err().expect("expected error");
    match err {
        MapError::Layer { name, source } => {
            assert_eq!(name, "endless");
            assert_eq!(source, LayerError::Infinite);
        }
        other => panic!("expected Layer error, got {:?}", other),
    }
}

#[test]
fn loaded_map_keeps_parsed_source() {
    let path = write_map(2, 1, &[("terrain", "terrain.png")], &[("ground", &[1, 0])]);
    let map = Map::load(&path).unwrap();

    assert_eq!(map.source().width, 2);
    assert_eq!(map.source().tilesets().len(), 1);
    assert_eq!(map.tilesets()[0].name(), "terrain");
    assert_eq!(map.tileset("terrain").map(|t| t.frame_count()), Some(4));
    assert!(map.tileset("missing").is_none());
}
