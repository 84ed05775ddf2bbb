use bevy::prelude::*;

use campus::config::{MapExtent, MARKER_RADIUS};
use campus::markers::{Highlighted, Marker};

use crate::map_view::map_to_world;

pub const MARKER_Z: f32 = 2.0;

const MARKER_COLOR: Color = Color::srgb(0.16, 0.38, 0.74);
const HIGHLIGHT_COLOR: Color = Color::srgb(0.98, 0.62, 0.12);
const LABEL_SIZE: f32 = 13.0;

#[derive(Resource)]
pub struct MarkerAssets {
    pub mesh: Handle<Mesh>,
    pub normal: Handle<ColorMaterial>,
    pub highlight: Handle<ColorMaterial>,
}

pub fn setup_marker_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.insert_resource(MarkerAssets {
        mesh: meshes.add(Circle::new(MARKER_RADIUS)),
        normal: materials.add(MARKER_COLOR),
        highlight: materials.add(HIGHLIGHT_COLOR),
    });
}

fn marker_translation(marker: &Marker, extent: &MapExtent) -> Vec3 {
    map_to_world(marker.anchor(extent)).extend(MARKER_Z)
}

/// Give newly spawned markers a disc and their ID label.
pub fn attach_marker_visuals(
    mut commands: Commands,
    assets: Res<MarkerAssets>,
    extent: Res<MapExtent>,
    added: Query<(Entity, &Marker), Added<Marker>>,
) {
    for (entity, marker) in &added {
        commands
            .entity(entity)
            .insert((
                Mesh2d(assets.mesh.clone()),
                MeshMaterial2d(assets.normal.clone()),
                Transform::from_translation(marker_translation(marker, &extent)),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Text2d::new(marker.label.clone()),
                    TextFont {
                        font_size: LABEL_SIZE,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    Transform::from_xyz(0.0, 0.0, 0.5),
                ));
            });
    }
}

pub fn relayout_markers(
    extent: Res<MapExtent>,
    mut markers: Query<(&Marker, &mut Transform)>,
) {
    if !extent.is_changed() {
        return;
    }
    for (marker, mut transform) in &mut markers {
        transform.translation = marker_translation(marker, &extent);
    }
}

pub fn paint_highlights(
    assets: Res<MarkerAssets>,
    mut markers: Query<(&mut MeshMaterial2d<ColorMaterial>, Has<Highlighted>), With<Marker>>,
) {
    for (mut material, highlighted) in &mut markers {
        let wanted = if highlighted {
            &assets.highlight
        } else {
            &assets.normal
        };
        if material.0 != *wanted {
            material.0 = wanted.clone();
        }
    }
}
