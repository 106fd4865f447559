// Renders a TMX map with a camera moved one tile per WSAD/arrow key press.
use macroquad::prelude::*;
use macroquad_tmx::{Camera, Map, ScreenTarget, ViewerConfig};

const CONFIG: &str = "assets/viewer.json";

fn window_conf() -> Conf {
    ViewerConfig::load_or_default(CONFIG)
        .unwrap_or_default()
        .window_conf("TMX map camera")
}

#[macroquad::main(window_conf)]
async fn main() {
    let cfg = ViewerConfig::load_or_default(CONFIG).expect("Failed to read viewer config");
    let mut map = Map::load(&cfg.map_path).expect("Failed to load map");
    let mut target = ScreenTarget::new();
    let mut camera = Camera::default();

    loop {
        clear_background(BLACK);

        // Only what fits on screen is batched.
        let screen = vec2(screen_width(), screen_height());
        map.draw_part(&mut target, camera.transform(), screen);

        // zoom_step of 0 keeps the zoom at 1
        camera.handle_keys(map.tile_size(), 0.0);

        next_frame().await;
    }
}
