//! Left-click marker picking.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use campus::config::{MapExtent, MARKER_RADIUS};
use campus::markers::{Marker, MarkerClicked};

use crate::camera::{LeftClickDrag, MapCameraTag};
use crate::egui_input_guard::egui_wants_pointer;
use crate::map_view::world_to_map;

/// Closest candidate within `radius` of `point`, all in map pixels.
pub fn nearest_within<T: Copy>(
    candidates: impl IntoIterator<Item = (T, Vec2)>,
    point: Vec2,
    radius: f32,
) -> Option<T> {
    candidates
        .into_iter()
        .map(|(item, pos)| (item, pos.distance_squared(point)))
        .filter(|(_, dist_sq)| *dist_sq <= radius * radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(item, _)| item)
}

/// Send [`MarkerClicked`] when the left button is released over a marker
/// without having dragged the map.
#[allow(clippy::too_many_arguments)]
pub fn pick_markers(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MapCameraTag>>,
    left_drag: Res<LeftClickDrag>,
    mut contexts: EguiContexts,
    extent: Res<MapExtent>,
    markers: Query<(Entity, &Marker)>,
    mut clicks: EventWriter<MarkerClicked>,
) {
    if !buttons.just_released(MouseButton::Left) || left_drag.is_dragging {
        return;
    }
    if egui_wants_pointer(&mut contexts) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };
    let Ok(world) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };

    let point = world_to_map(world);
    let hit = nearest_within(
        markers.iter().map(|(e, m)| (e, m.anchor(&extent))),
        point,
        MARKER_RADIUS,
    );
    if let Some(marker) = hit {
        clicks.send(MarkerClicked { marker });
    }
}
