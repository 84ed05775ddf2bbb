use bevy::prelude::*;

use campus::CampusSet;

pub mod audio_playback;
pub mod camera;
pub mod egui_input_guard;
pub mod map_view;
pub mod marker_render;
pub mod picking;
pub mod route_render;

use camera::{CameraGlide, LeftClickDrag, MapCamera};

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MapCamera>()
            .init_resource::<CameraGlide>()
            .init_resource::<LeftClickDrag>()
            .add_plugins(audio_playback::AudioPlaybackPlugin)
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    map_view::spawn_floor_image,
                    marker_render::setup_marker_assets,
                ),
            )
            .add_systems(
                Update,
                (
                    picking::pick_markers,
                    camera::camera_left_drag,
                    camera::camera_pan_keyboard,
                    camera::camera_zoom,
                )
                    .chain()
                    .before(CampusSet::Handle),
            )
            .add_systems(
                Update,
                (
                    map_view::sync_map_extent,
                    marker_render::attach_marker_visuals,
                    marker_render::relayout_markers,
                    marker_render::paint_highlights,
                    route_render::attach_route_visuals,
                    route_render::relayout_route_lines,
                    camera::start_focus_glide,
                    camera::advance_glide,
                    camera::apply_map_camera,
                )
                    .chain()
                    .after(CampusSet::Handle),
            )
            .add_systems(Update, map_view::log_image_failures);
    }
}
