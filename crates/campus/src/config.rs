//! Static configuration: asset locations, timings and the built-in lookup tables.
//!
//! Everything here is resolved once at startup. `CampusConfig` is the only
//! piece that reads the environment; systems receive it as a resource.

use std::path::PathBuf;

use bevy::prelude::*;

/// Location list, relative to the asset root.
pub const LOCATIONS_URL: &str = "data/aulas.json";
/// Path dictionary, relative to the asset root.
pub const PATHS_URL: &str = "data/caminos.json";
/// Optional override for the hidden-node set and audio folder map.
pub const TABLES_URL: &str = "data/tables.json";

/// Floor shown when none is configured; the bundled data describes floor 1.
pub const DEFAULT_FLOOR: i32 = 1;

/// Directory that holds the route clips.
pub const AUDIO_ROOT: &str = "audios";
pub const DEFAULT_AUDIO_EXTENSION: &str = "wav";

/// How long a marker stays highlighted after being clicked.
pub const HIGHLIGHT_SECS: f32 = 3.0;
/// Duration of the camera glide that centers a marker.
pub const CENTER_GLIDE_SECS: f32 = 0.35;

/// Fallback floor image size in pixels, used until the real image is loaded.
pub const DEFAULT_MAP_WIDTH: f32 = 1600.0;
pub const DEFAULT_MAP_HEIGHT: f32 = 1000.0;

/// Thickness of a drawn route line, in map pixels.
pub const ROUTE_LINE_THICKNESS: f32 = 4.0;
/// Hit radius of a marker, in map pixels.
pub const MARKER_RADIUS: f32 = 14.0;

/// Corridor nodes that exist only to anchor authored paths.
pub const DEFAULT_HIDDEN_IDS: &[&str] = &["P1A", "P1B", "P1C", "P1D", "P1E", "P1F", "P1G"];

/// Route clip subfolder per origin location. Folder names are lowercase, no spaces.
pub const DEFAULT_AUDIO_FOLDERS: &[(&str, &str)] = &[
    ("1", "info04"),
    ("2", "aulasg01"),
    ("3", "coordinacion"),
    ("4", "info03"),
    ("5", "info05"),
    ("6", "saladocentes1"),
    ("7", "cafeteria"),
    ("8", "patio"),
    ("9", "saladocentes2"),
    ("10", "aulasg05"),
    ("11", "cocina"),
    ("12", "banos"),
];

/// Runtime configuration for the map session.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CampusConfig {
    /// Floor whose locations are shown.
    pub floor: i32,
    /// Filesystem directory the data documents are read from (native only).
    pub asset_root: PathBuf,
    pub locations_url: String,
    pub paths_url: String,
    pub tables_url: String,
    /// Floor image, relative to the asset root.
    pub map_image: String,
    /// Extension of the route clips. Only `wav` has a decoder enabled in the
    /// workspace bevy features; another format needs its bevy audio feature.
    pub audio_extension: String,
}

impl Default for CampusConfig {
    fn default() -> Self {
        Self::for_floor(DEFAULT_FLOOR)
    }
}

impl CampusConfig {
    pub fn for_floor(floor: i32) -> Self {
        Self {
            floor,
            asset_root: PathBuf::from("assets"),
            locations_url: LOCATIONS_URL.to_string(),
            paths_url: PATHS_URL.to_string(),
            tables_url: TABLES_URL.to_string(),
            map_image: floor_image_path(floor),
            audio_extension: DEFAULT_AUDIO_EXTENSION.to_string(),
        }
    }

    /// Build the configuration from `CAMPUS_FLOOR`, `CAMPUS_ASSET_ROOT`,
    /// `CAMPUS_MAP_IMAGE` and `CAMPUS_AUDIO_EXT`, falling back to defaults.
    pub fn from_env() -> Self {
        let floor = std::env::var("CAMPUS_FLOOR")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_FLOOR);
        let mut config = Self::for_floor(floor);
        if let Ok(root) = std::env::var("CAMPUS_ASSET_ROOT") {
            config.asset_root = PathBuf::from(root);
        }
        if let Ok(image) = std::env::var("CAMPUS_MAP_IMAGE") {
            config.map_image = image;
        }
        if let Ok(ext) = std::env::var("CAMPUS_AUDIO_EXT") {
            let ext = ext.trim().trim_start_matches('.');
            if !ext.is_empty() {
                config.audio_extension = ext.to_string();
            }
        }
        config
    }
}

pub fn floor_image_path(floor: i32) -> String {
    format!("maps/floor{floor}.png")
}

/// Pixel size of the floor image. Percent positions resolve against it.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct MapExtent {
    pub width: f32,
    pub height: f32,
}

impl Default for MapExtent {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAP_WIDTH,
            height: DEFAULT_MAP_HEIGHT,
        }
    }
}

impl MapExtent {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
