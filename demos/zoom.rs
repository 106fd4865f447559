// Renders a TMX map with a moveable camera and +/- zoom.
use macroquad::prelude::*;
use macroquad_tmx::{Camera, Map, ScreenTarget, ViewerConfig};

const CONFIG: &str = "assets/viewer.json";

fn window_conf() -> Conf {
    ViewerConfig::load_or_default(CONFIG)
        .unwrap_or_default()
        .window_conf("TMX map zoom")
}

#[macroquad::main(window_conf)]
async fn main() {
    let cfg = ViewerConfig::load_or_default(CONFIG).expect("Failed to read viewer config");
    let mut map = Map::load(&cfg.map_path).expect("Failed to load map");
    let mut target = ScreenTarget::new();
    let mut camera = Camera::default();

    loop {
        clear_background(BLACK);

        let screen = vec2(screen_width(), screen_height());
        map.draw_part(&mut target, camera.transform(), screen);

        camera.handle_keys(map.tile_size(), cfg.zoom_step);

        draw_text(
            &format!("zoom: {:.2}", camera.zoom),
            20.0,
            30.0,
            30.0,
            WHITE,
        );
        next_frame().await;
    }
}
