// Shows the name of the map layer under the mouse cursor.
use macroquad::prelude::*;
use macroquad_tmx::{mouse_position_y_up, Map, ScreenTarget, Transform, ViewerConfig};

const CONFIG: &str = "assets/viewer.json";

fn window_conf() -> Conf {
    ViewerConfig::load_or_default(CONFIG)
        .unwrap_or_default()
        .window_conf("TMX map layers")
}

#[macroquad::main(window_conf)]
async fn main() {
    let cfg = ViewerConfig::load_or_default(CONFIG).expect("Failed to read viewer config");
    let mut map = Map::load(&cfg.map_path).expect("Failed to load map");
    let mut target = ScreenTarget::new();

    loop {
        clear_background(BLACK);

        map.draw(&mut target, Transform::IDENTITY);

        // Identity transform: screen and map coordinates match once y is flipped.
        let mouse = mouse_position_y_up();
        if let Some(layer) = map.position_layer(mouse) {
            draw_text(layer.name(), 20.0, screen_height() - 20.0, 30.0, WHITE);
        }

        next_frame().await;
    }
}
