use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use campus::config::{MapExtent, CENTER_GLIDE_SECS};
use campus::markers::{FocusMarker, Marker};

use crate::egui_input_guard::egui_wants_pointer;
use crate::map_view::map_to_world;

const PAN_SPEED: f32 = 600.0;
const ZOOM_SPEED: f32 = 0.12;
const MIN_ZOOM: f32 = 0.25;
const MAX_ZOOM: f32 = 4.0;
const LEFT_DRAG_THRESHOLD: f32 = 5.0;

/// Tag for the single 2D camera that looks at the floor map.
#[derive(Component)]
pub struct MapCameraTag;

/// Camera state in world units. The floor image spans `x in [0, width]`,
/// `y in [-height, 0]`.
#[derive(Resource, Debug, Clone, Copy)]
pub struct MapCamera {
    pub focus: Vec2,
    /// Orthographic scale; larger shows more of the map.
    pub zoom: f32,
}

impl Default for MapCamera {
    fn default() -> Self {
        let extent = MapExtent::default();
        Self {
            focus: map_center(&extent),
            zoom: 1.0,
        }
    }
}

/// In-flight centering animation. A new glide replaces the old one.
#[derive(Resource, Debug, Default)]
pub struct CameraGlide {
    pub active: Option<Glide>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glide {
    pub from: Vec2,
    pub to: Vec2,
    pub elapsed: f32,
    pub duration: f32,
}

impl Glide {
    pub fn position(&self) -> Vec2 {
        let t = if self.duration <= 0.0 {
            1.0
        } else {
            self.elapsed / self.duration
        };
        self.from.lerp(self.to, ease_in_out(t))
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Cosine ease, 0 at `t = 0` and 1 at `t = 1`.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    0.5 - (t * std::f32::consts::PI).cos() / 2.0
}

pub fn map_center(extent: &MapExtent) -> Vec2 {
    Vec2::new(extent.width / 2.0, -extent.height / 2.0)
}

/// Keep the focus over the floor image.
pub fn clamp_focus(focus: Vec2, extent: &MapExtent) -> Vec2 {
    Vec2::new(
        focus.x.clamp(0.0, extent.width),
        focus.y.clamp(-extent.height, 0.0),
    )
}

#[derive(Resource, Default)]
pub struct LeftClickDrag {
    pub pressed: bool,
    pub start_pos: Vec2,
    pub last_pos: Vec2,
    /// Set once the cursor moved past the threshold; the release is then not a click.
    pub is_dragging: bool,
}

pub fn setup_camera(mut commands: Commands, camera: Res<MapCamera>) {
    commands.spawn((
        Camera2d,
        MapCameraTag,
        Transform::from_translation(camera.focus.extend(0.0)),
    ));
}

/// Start a glide toward the marker named by each [`FocusMarker`].
pub fn start_focus_glide(
    mut events: EventReader<FocusMarker>,
    markers: Query<&Marker>,
    extent: Res<MapExtent>,
    camera: Res<MapCamera>,
    mut glide: ResMut<CameraGlide>,
) {
    for event in events.read() {
        let Ok(marker) = markers.get(event.marker) else {
            continue;
        };
        let target = clamp_focus(map_to_world(marker.anchor(&extent)), &extent);
        glide.active = Some(Glide {
            from: camera.focus,
            to: target,
            elapsed: 0.0,
            duration: CENTER_GLIDE_SECS,
        });
    }
}

pub fn advance_glide(
    time: Res<Time>,
    mut glide: ResMut<CameraGlide>,
    mut camera: ResMut<MapCamera>,
) {
    let Some(active) = glide.active.as_mut() else {
        return;
    };
    active.elapsed += time.delta_secs();
    camera.focus = active.position();
    if active.finished() {
        glide.active = None;
    }
}

/// Arrow keys / WASD pan. Any manual movement cancels a glide.
pub fn camera_pan_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut contexts: EguiContexts,
    extent: Res<MapExtent>,
    mut camera: ResMut<MapCamera>,
    mut glide: ResMut<CameraGlide>,
) {
    // Typing in the search box.
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }

    let mut dir = Vec2::ZERO;
    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        dir.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        dir.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        dir.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        dir.x += 1.0;
    }
    if dir == Vec2::ZERO {
        return;
    }

    let delta = dir.normalize() * PAN_SPEED * camera.zoom * time.delta_secs();
    camera.focus = clamp_focus(camera.focus + delta, &extent);
    glide.active = None;
}

/// Left-mouse drag: pan, with a threshold so plain clicks still pick markers.
pub fn camera_left_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    extent: Res<MapExtent>,
    mut left_drag: ResMut<LeftClickDrag>,
    mut camera: ResMut<MapCamera>,
    mut glide: ResMut<CameraGlide>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) && !egui_wants_pointer(&mut contexts) {
        if let Some(pos) = window.cursor_position() {
            left_drag.pressed = true;
            left_drag.start_pos = pos;
            left_drag.last_pos = pos;
            left_drag.is_dragging = false;
        }
    }

    if buttons.just_released(MouseButton::Left) {
        left_drag.pressed = false;
        left_drag.is_dragging = false;
    }

    if !left_drag.pressed {
        return;
    }
    let Some(pos) = window.cursor_position() else {
        return;
    };
    if !left_drag.is_dragging && (pos - left_drag.start_pos).length() > LEFT_DRAG_THRESHOLD {
        left_drag.is_dragging = true;
        left_drag.last_pos = pos;
    }
    if left_drag.is_dragging {
        // Screen y grows downward, world y grows upward.
        let delta = pos - left_drag.last_pos;
        let world_delta = Vec2::new(-delta.x, delta.y) * camera.zoom;
        camera.focus = clamp_focus(camera.focus + world_delta, &extent);
        left_drag.last_pos = pos;
        glide.active = None;
    }
}

pub fn camera_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
    mut camera: ResMut<MapCamera>,
) {
    if egui_wants_pointer(&mut contexts) {
        scroll_evts.clear();
        return;
    }
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        let factor = 1.0 - dy * ZOOM_SPEED;
        camera.zoom = (camera.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }
}

/// Copy [`MapCamera`] onto the camera entity.
pub fn apply_map_camera(
    camera: Res<MapCamera>,
    mut query: Query<(&mut Transform, &mut OrthographicProjection), With<MapCameraTag>>,
) {
    if !camera.is_changed() {
        return;
    }
    let Ok((mut transform, mut projection)) = query.get_single_mut() else {
        return;
    };
    transform.translation.x = camera.focus.x;
    transform.translation.y = camera.focus.y;
    projection.scale = camera.zoom;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert!((ease_in_out(1.0) - 1.0).abs() < 1e-6);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(ease_in_out(2.0), ease_in_out(1.0));
    }

    #[test]
    fn test_ease_is_slow_at_the_ends() {
        assert!(ease_in_out(0.1) < 0.1);
        assert!(ease_in_out(0.9) > 0.9);
    }

    #[test]
    fn test_clamp_focus_keeps_point_on_map() {
        let extent = MapExtent {
            width: 800.0,
            height: 600.0,
        };
        assert_eq!(
            clamp_focus(Vec2::new(-50.0, 20.0), &extent),
            Vec2::new(0.0, 0.0)
        );
        assert_eq!(
            clamp_focus(Vec2::new(900.0, -700.0), &extent),
            Vec2::new(800.0, -600.0)
        );
        assert_eq!(
            clamp_focus(Vec2::new(400.0, -300.0), &extent),
            Vec2::new(400.0, -300.0)
        );
    }

    #[test]
    fn test_glide_reaches_target() {
        let mut glide = Glide {
            from: Vec2::ZERO,
            to: Vec2::new(100.0, -50.0),
            elapsed: 0.0,
            duration: CENTER_GLIDE_SECS,
        };
        assert_eq!(glide.position(), Vec2::ZERO);
        glide.elapsed = CENTER_GLIDE_SECS;
        assert!(glide.finished());
        assert!((glide.position() - glide.to).length() < 1e-3);
    }

    #[test]
    fn test_zero_length_glide_jumps() {
        let glide = Glide {
            from: Vec2::ZERO,
            to: Vec2::ONE,
            elapsed: 0.0,
            duration: 0.0,
        };
        assert_eq!(glide.position(), Vec2::ONE);
    }
}
