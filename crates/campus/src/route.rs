//! Route requests: resolve the pre-authored path, redraw its lines and
//! queue the narrated clip.

use bevy::prelude::*;

use crate::audio::{resolve_route_clip, RouteAudio, RouteAudioRequested};
use crate::config::{CampusConfig, MapExtent, ROUTE_LINE_THICKNESS};
use crate::notifications::UserNotice;
use crate::paths::Segment;
use crate::session::MapSession;
use crate::tables::MapTables;

/// Origin and destination as picked in the dropdowns. Empty means unselected.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct RouteRequested {
    pub from: String,
    pub to: String,
}

impl RouteRequested {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// One drawn line of the active route.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct RouteLine {
    /// Position within the route.
    pub index: usize,
    pub segment: Segment,
}

impl RouteLine {
    /// Pixel rectangle of the line on the map.
    pub fn rect(&self, extent: &MapExtent) -> Rect {
        self.segment.rect(extent, ROUTE_LINE_THICKNESS)
    }
}

#[allow(clippy::too_many_arguments)]
pub fn handle_route_requests(
    mut commands: Commands,
    mut events: EventReader<RouteRequested>,
    mut session: ResMut<MapSession>,
    tables: Res<MapTables>,
    config: Res<CampusConfig>,
    lines: Query<Entity, With<RouteLine>>,
    mut route_audio: ResMut<RouteAudio>,
    mut notices: EventWriter<UserNotice>,
    mut audio_requests: EventWriter<RouteAudioRequested>,
) {
    // Lines spawned earlier in this run are not visible to the query yet.
    let mut drawn: Vec<Entity> = lines.iter().collect();
    for event in events.read() {
        let (key, segments) = match session.paths.resolve(&event.from, &event.to) {
            Ok(route) => (route.key, route.segments.to_vec()),
            Err(err) => {
                debug!("Route {:?} -> {:?} rejected: {:?}", event.from, event.to, err);
                notices.send(UserNotice::new(err.to_string()));
                continue;
            }
        };

        for entity in drawn.drain(..) {
            commands.entity(entity).despawn_recursive();
        }
        info!("Drawing route {} ({} segments)", key, segments.len());
        for (index, segment) in segments.into_iter().enumerate() {
            drawn.push(commands.spawn(RouteLine { index, segment }).id());
        }

        let clip = resolve_route_clip(&key, &tables, &config.audio_extension);
        if clip.fallback {
            warn!(
                "No audio folder for origin {}; trying {}",
                key.origin(),
                clip.path
            );
        }
        route_audio.last_clip = Some(clip.clone());
        audio_requests.send(RouteAudioRequested { clip });
        session.active_route = Some(key);
    }
}
