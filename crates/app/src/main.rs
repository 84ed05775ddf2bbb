use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use campus::config::CampusConfig;

#[cfg(target_arch = "wasm32")]
mod web_query;

fn main() {
    let config = campus_config();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Campus Map".to_string(),
                resolution: (1280.0, 800.0).into(),
                present_mode: PresentMode::AutoVsync,
                fit_canvas_to_parent: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
            unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
        })
        .insert_resource(ClearColor(Color::srgb(0.93, 0.93, 0.9)))
        .insert_resource(config)
        .add_plugins((campus::CampusPlugin, rendering::RenderingPlugin, ui::UiPlugin))
        .run();
}

/// Environment overrides, with the asset root pinned to the directory Bevy
/// serves assets from so documents and images come from the same place.
#[cfg(not(target_arch = "wasm32"))]
fn campus_config() -> CampusConfig {
    let mut config = CampusConfig::from_env();
    if std::env::var_os("CAMPUS_ASSET_ROOT").is_none() {
        config.asset_root =
            bevy::asset::io::file::FileAssetReader::get_base_path().join("assets");
    }
    config
}

#[cfg(target_arch = "wasm32")]
fn campus_config() -> CampusConfig {
    let floor = web_query::query_floor().unwrap_or(campus::config::DEFAULT_FLOOR);
    CampusConfig::for_floor(floor)
}
