//! Immutable lookup tables: hidden corridor nodes and route clip folders.

use std::collections::{HashMap, HashSet};

use bevy::prelude::*;
use serde::Deserialize;

use crate::config::{DEFAULT_AUDIO_FOLDERS, DEFAULT_HIDDEN_IDS};
use crate::error::DataError;
use crate::location::LocationId;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MapTables {
    hidden: HashSet<LocationId>,
    audio_folders: HashMap<LocationId, String>,
}

impl Default for MapTables {
    fn default() -> Self {
        Self {
            hidden: DEFAULT_HIDDEN_IDS.iter().map(|id| LocationId::from(*id)).collect(),
            audio_folders: DEFAULT_AUDIO_FOLDERS
                .iter()
                .map(|(id, folder)| (LocationId::from(*id), folder.to_string()))
                .collect(),
        }
    }
}

/// On-disk shape of `data/tables.json`. Either table may be omitted, in
/// which case the built-in one is kept.
#[derive(Debug, Deserialize)]
struct TablesDocument {
    #[serde(default)]
    hidden: Option<Vec<LocationId>>,
    #[serde(default)]
    audio_folders: Option<HashMap<String, String>>,
}

impl MapTables {
    pub fn new(
        hidden: impl IntoIterator<Item = LocationId>,
        audio_folders: impl IntoIterator<Item = (LocationId, String)>,
    ) -> Self {
        Self {
            hidden: hidden.into_iter().collect(),
            audio_folders: audio_folders.into_iter().collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let doc: TablesDocument = serde_json::from_str(json).map_err(|source| DataError::Parse {
            document: "tables document",
            source,
        })?;
        let mut tables = Self::default();
        if let Some(hidden) = doc.hidden {
            tables.hidden = hidden.into_iter().collect();
        }
        if let Some(folders) = doc.audio_folders {
            tables.audio_folders = folders
                .into_iter()
                .map(|(id, folder)| (LocationId::from(id), folder))
                .collect();
        }
        Ok(tables)
    }

    pub fn is_hidden(&self, id: &LocationId) -> bool {
        self.hidden.contains(id)
    }

    pub fn audio_folder(&self, id: &LocationId) -> Option<&str> {
        self.audio_folders.get(id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_hide_corridor_nodes() {
        let tables = MapTables::default();
        assert!(tables.is_hidden(&"P1A".into()));
        assert!(tables.is_hidden(&"P1G".into()));
        assert!(!tables.is_hidden(&"1".into()));
    }

    #[test]
    fn test_defaults_map_folders() {
        let tables = MapTables::default();
        assert_eq!(tables.audio_folder(&"1".into()), Some("info04"));
        assert_eq!(tables.audio_folder(&"12".into()), Some("banos"));
        assert_eq!(tables.audio_folder(&"13".into()), None);
    }

    #[test]
    fn test_json_overrides_only_given_tables() {
        let tables = MapTables::from_json(r#"{"audio_folders": {"13": "zonaverde"}}"#).unwrap();
        assert_eq!(tables.audio_folder(&"13".into()), Some("zonaverde"));
        assert_eq!(tables.audio_folder(&"1".into()), None);
        assert!(tables.is_hidden(&"P1A".into()));
    }

    #[test]
    fn test_json_hidden_accepts_numbers() {
        let tables = MapTables::from_json(r#"{"hidden": [99, "X"]}"#).unwrap();
        assert!(tables.is_hidden(&"99".into()));
        assert!(tables.is_hidden(&"X".into()));
        assert!(!tables.is_hidden(&"P1A".into()));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            MapTables::from_json("{"),
            Err(DataError::Parse { .. })
        ));
    }
}
