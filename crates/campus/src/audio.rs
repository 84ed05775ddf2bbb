//! Route clip resolution.
//!
//! Every drawn route has a narrated clip named after its key. Clips live in
//! a per-origin subfolder when the origin has one in [`MapTables`], and
//! directly under the audio root otherwise.

use bevy::prelude::*;

use crate::config::AUDIO_ROOT;
use crate::paths::RouteKey;
use crate::tables::MapTables;

/// Asset path of the clip for one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub key: String,
    /// Path relative to the asset root.
    pub path: String,
    /// `true` when the origin had no folder and the flat layout was used.
    pub fallback: bool,
}

/// `audios/<folder>/<key>.<ext>`, or `audios/<key>.<ext>` when the origin
/// of `key` has no folder.
pub fn resolve_route_clip(key: &RouteKey, tables: &MapTables, extension: &str) -> AudioClip {
    let name = key.to_string();
    match tables.audio_folder(key.origin()) {
        Some(folder) => AudioClip {
            path: format!("{AUDIO_ROOT}/{folder}/{name}.{extension}"),
            key: name,
            fallback: false,
        },
        None => AudioClip {
            path: format!("{AUDIO_ROOT}/{name}.{extension}"),
            key: name,
            fallback: true,
        },
    }
}

/// Sent when a route was drawn and its clip should start.
#[derive(Event, Debug, Clone)]
pub struct RouteAudioRequested {
    pub clip: AudioClip,
}

/// The route clip currently owned by the session.
///
/// Only one clip plays at a time; whoever starts a new one stops
/// `current` first.
#[derive(Resource, Debug, Default)]
pub struct RouteAudio {
    /// Entity carrying the playing clip, if any.
    pub current: Option<Entity>,
    /// Last clip requested, kept for display and tests.
    pub last_clip: Option<AudioClip>,
}
