// Shows the layer under the mouse cursor while the camera moves.
use macroquad::prelude::*;
use macroquad_tmx::{mouse_position_y_up, Camera, Map, ScreenTarget, ViewerConfig};

const CONFIG: &str = "assets/viewer.json";

fn window_conf() -> Conf {
    ViewerConfig::load_or_default(CONFIG)
        .unwrap_or_default()
        .window_conf("TMX map layers and camera")
}

#[macroquad::main(window_conf)]
async fn main() {
    let cfg = ViewerConfig::load_or_default(CONFIG).expect("Failed to read viewer config");
    let mut map = Map::load(&cfg.map_path).expect("Failed to load map");
    let mut target = ScreenTarget::new();
    let mut camera = Camera::default();

    loop {
        clear_background(BLACK);

        map.draw(&mut target, camera.transform());

        let mouse = camera.screen_to_map(mouse_position_y_up());
        let info = match map.position_layer(mouse) {
            Some(layer) if map.passable(mouse) => format!("{} (passable)", layer.name()),
            Some(layer) => layer.name().to_owned(),
            None => String::new(),
        };
        draw_text(&info, 20.0, screen_height() - 20.0, 30.0, WHITE);

        camera.handle_keys(map.tile_size(), cfg.zoom_step);

        next_frame().await;
    }
}
