// Renders a TMX map.
use macroquad::prelude::*;
use macroquad_tmx::{Map, ScreenTarget, Transform, ViewerConfig};

const CONFIG: &str = "assets/viewer.json";

fn window_conf() -> Conf {
    ViewerConfig::load_or_default(CONFIG)
        .unwrap_or_default()
        .window_conf("TMX map")
}

#[macroquad::main(window_conf)]
async fn main() {
    let cfg = ViewerConfig::load_or_default(CONFIG).expect("Failed to read viewer config");
    let mut map = Map::load(&cfg.map_path).expect("Failed to load map");
    let mut target = ScreenTarget::new();

    loop {
        clear_background(BLACK);

        map.draw(&mut target, Transform::IDENTITY);

        draw_text(&format!("FPS: {}", get_fps()), 20.0, 30.0, 30.0, RED);
        next_frame().await;
    }
}
