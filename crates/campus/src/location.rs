//! Locations ("aulas") as authored in the location list document.

use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::geometry::CssLength;

/// Location identifier. Authored as a small integer or a short string;
/// both spellings of the same value compare equal (`7` == `"7"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct LocationId(String);

impl LocationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LocationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl<'de> Deserialize<'de> for LocationId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => LocationId(number_to_string(&n)),
            Raw::Text(s) => LocationId(s),
        })
    }
}

/// `7.0` is written as `"7"`, matching how the IDs appear in path keys.
fn number_to_string(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Floor number of a location. Authored as a number or numeric string;
/// anything non-numeric never matches a floor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Floor(Option<f64>);

impl Floor {
    pub fn new(floor: i32) -> Self {
        Self(Some(floor as f64))
    }

    pub fn is(&self, floor: i32) -> bool {
        self.0 == Some(floor as f64)
    }
}

impl<'de> Deserialize<'de> for Floor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
            Other(serde_json::Value),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(f) => Floor(Some(f)),
            Raw::Text(s) if s.trim().is_empty() => Floor(Some(0.0)),
            Raw::Text(s) => Floor(s.trim().parse().ok()),
            Raw::Other(serde_json::Value::Null) => Floor(Some(0.0)),
            Raw::Other(_) => Floor(None),
        })
    }
}

fn empty_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// A point of interest on a floor map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    #[serde(default)]
    pub floor: Floor,
    #[serde(default)]
    pub top: CssLength,
    #[serde(default)]
    pub left: CssLength,
    /// Detail image shown in the modal, relative to the asset root.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub img: Option<String>,
}

impl Location {
    pub fn new(id: impl Into<LocationId>, name: impl Into<String>, floor: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            floor: Floor::new(floor),
            top: CssLength::default(),
            left: CssLength::default(),
            img: None,
        }
    }

    pub fn at(mut self, top: CssLength, left: CssLength) -> Self {
        self.top = top;
        self.left = left;
        self
    }

    pub fn with_image(mut self, img: impl Into<String>) -> Self {
        self.img = Some(img.into());
        self
    }
}

/// Locations on `floor`, in document order.
pub fn on_floor(locations: &[Location], floor: i32) -> Vec<Location> {
    locations
        .iter()
        .filter(|l| l.floor.is(floor))
        .cloned()
        .collect()
}
