//! Floor image and the map-pixel to world mapping.
//!
//! Map pixels have their origin at the top-left of the floor image with y
//! growing downward. World space is the same with y flipped, so the image
//! sprite is anchored at its top-left corner on the world origin.

use bevy::asset::AssetLoadFailedEvent;
use bevy::prelude::*;
use bevy::sprite::Anchor;

use campus::config::{CampusConfig, MapExtent};

use crate::camera::{clamp_focus, map_center, MapCamera};

pub const FLOOR_Z: f32 = 0.0;

#[derive(Component)]
pub struct FloorImage;

#[derive(Resource, Debug, Default)]
pub struct FloorImageHandle(pub Handle<Image>);

pub fn map_to_world(map: Vec2) -> Vec2 {
    Vec2::new(map.x, -map.y)
}

pub fn world_to_map(world: Vec2) -> Vec2 {
    Vec2::new(world.x, -world.y)
}

pub fn spawn_floor_image(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<CampusConfig>,
) {
    let handle: Handle<Image> = asset_server.load(config.map_image.clone());
    info!("Loading floor image {}", config.map_image);
    commands.spawn((
        FloorImage,
        Sprite {
            image: handle.clone(),
            anchor: Anchor::TopLeft,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, FLOOR_Z),
    ));
    commands.insert_resource(FloorImageHandle(handle));
}

/// Adopt the real image size as the map extent once it has loaded. Percent
/// positions, route lines and the camera bounds all follow.
pub fn sync_map_extent(
    images: Res<Assets<Image>>,
    floor: Res<FloorImageHandle>,
    mut extent: ResMut<MapExtent>,
    mut camera: ResMut<MapCamera>,
) {
    let Some(image) = images.get(&floor.0) else {
        return;
    };
    let size = image.size_f32();
    if size.x <= 0.0 || size.y <= 0.0 || size == extent.size() {
        return;
    }
    debug!("Floor image is {}x{}", size.x, size.y);
    *extent = MapExtent {
        width: size.x,
        height: size.y,
    };
    camera.focus = clamp_focus(map_center(&extent), &extent);
}

pub fn log_image_failures(mut failures: EventReader<AssetLoadFailedEvent<Image>>) {
    for failure in failures.read() {
        warn!("Image {} failed to load: {}", failure.path, failure.error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_and_world_are_mirrored_on_y() {
        let map = Vec2::new(120.0, 80.0);
        let world = map_to_world(map);
        assert_eq!(world, Vec2::new(120.0, -80.0));
        assert_eq!(world_to_map(world), map);
    }
}
