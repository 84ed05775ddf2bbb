//! CSS-style lengths used by the data documents.
//!
//! Positions and segment lengths are authored as `"45%"` or `"120px"`
//! strings (occasionally bare numbers). Percentages resolve against the
//! floor image extent along the matching axis.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CssLength {
    /// Percent of the map extent along the relevant axis.
    Percent(f32),
    /// Absolute map pixels.
    Pixels(f32),
}

impl CssLength {
    /// Resolve to map pixels against `extent` (the map width or height).
    pub fn resolve(self, extent: f32) -> f32 {
        match self {
            CssLength::Percent(p) => p / 100.0 * extent,
            CssLength::Pixels(px) => px,
        }
    }
}

impl Default for CssLength {
    fn default() -> Self {
        CssLength::Pixels(0.0)
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssLength::Percent(p) => write!(f, "{p}%"),
            CssLength::Pixels(px) => write!(f, "{px}px"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLength(pub String);

impl fmt::Display for InvalidLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid CSS length {:?}", self.0)
    }
}

impl FromStr for CssLength {
    type Err = InvalidLength;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (number, percent) = if let Some(n) = trimmed.strip_suffix('%') {
            (n, true)
        } else if let Some(n) = trimmed.strip_suffix("px") {
            (n, false)
        } else {
            (trimmed, false)
        };
        let value: f32 = number
            .trim()
            .parse()
            .map_err(|_| InvalidLength(s.to_string()))?;
        if !value.is_finite() {
            return Err(InvalidLength(s.to_string()));
        }
        Ok(if percent {
            CssLength::Percent(value)
        } else {
            CssLength::Pixels(value)
        })
    }
}

impl<'de> Deserialize<'de> for CssLength {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(px) => Ok(CssLength::Pixels(px)),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percent_and_pixels() {
        assert_eq!("45%".parse::<CssLength>(), Ok(CssLength::Percent(45.0)));
        assert_eq!("120px".parse::<CssLength>(), Ok(CssLength::Pixels(120.0)));
        assert_eq!(" 12.5 ".parse::<CssLength>(), Ok(CssLength::Pixels(12.5)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("left".parse::<CssLength>().is_err());
        assert!("%".parse::<CssLength>().is_err());
        assert!("".parse::<CssLength>().is_err());
    }

    #[test]
    fn test_resolve_percent_against_extent() {
        assert_eq!(CssLength::Percent(50.0).resolve(800.0), 400.0);
        assert_eq!(CssLength::Pixels(30.0).resolve(800.0), 30.0);
    }

    #[test]
    fn test_deserialize_number_or_string() {
        let values: Vec<CssLength> = serde_json::from_str(r#"[10, "20%", "5px"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                CssLength::Pixels(10.0),
                CssLength::Percent(20.0),
                CssLength::Pixels(5.0)
            ]
        );
    }
}
