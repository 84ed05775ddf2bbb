//! Route clip playback.
//!
//! Consumes [`RouteAudioRequested`] and keeps at most one clip playing: the
//! previous clip is stopped before the next one starts. A clip that fails to
//! load is logged and otherwise ignored.

use bevy::asset::AssetLoadFailedEvent;
use bevy::prelude::*;

use campus::audio::{RouteAudio, RouteAudioRequested};

/// Marks the entity that carries a route clip.
#[derive(Component, Debug)]
pub struct RouteClip {
    pub key: String,
}

fn play_route_clips(
    mut commands: Commands,
    mut events: EventReader<RouteAudioRequested>,
    asset_server: Res<AssetServer>,
    mut route_audio: ResMut<RouteAudio>,
    sinks: Query<&AudioSink>,
) {
    for event in events.read() {
        if let Some(previous) = route_audio.current.take() {
            if let Ok(sink) = sinks.get(previous) {
                sink.stop();
            }
            if let Some(mut entity) = commands.get_entity(previous) {
                entity.despawn();
            }
        }

        debug!("Playing route clip {}", event.clip.path);
        let entity = commands
            .spawn((
                RouteClip {
                    key: event.clip.key.clone(),
                },
                AudioPlayer::<AudioSource>(asset_server.load(event.clip.path.clone())),
                PlaybackSettings::DESPAWN,
            ))
            .id();
        route_audio.current = Some(entity);
    }
}

fn log_clip_failures(mut failures: EventReader<AssetLoadFailedEvent<AudioSource>>) {
    for failure in failures.read() {
        warn!("Route clip {} failed to load: {}", failure.path, failure.error);
    }
}

pub struct AudioPlaybackPlugin;

impl Plugin for AudioPlaybackPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostUpdate, (play_route_clips, log_clip_failures));
    }
}
