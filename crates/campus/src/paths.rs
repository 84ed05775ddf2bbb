//! Pre-authored route paths and direction-insensitive key resolution.
//!
//! There is no routing algorithm: a route between two locations is a list of
//! straight segments stored under the composite key `"<from>-<to>"`. A
//! lookup tries the requested direction first, then the reverse.

use std::collections::HashMap;
use std::fmt;

use bevy::math::{Rect, Vec2};
use serde::Deserialize;

use crate::config::MapExtent;
use crate::error::RouteError;
use crate::geometry::CssLength;
use crate::location::LocationId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Horizontal,
    Vertical,
}

/// One straight piece of a drawn route.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Segment {
    #[serde(rename = "type")]
    pub kind: SegmentKind,
    pub top: CssLength,
    pub left: CssLength,
    pub length: CssLength,
}

impl Segment {
    /// Pixel rectangle covered by the segment. `length` runs along x for
    /// horizontal segments and along y for vertical ones, starting at
    /// (`left`, `top`); the other side is `thickness`.
    pub fn rect(&self, extent: &MapExtent, thickness: f32) -> Rect {
        let origin = Vec2::new(
            self.left.resolve(extent.width),
            self.top.resolve(extent.height),
        );
        let size = match self.kind {
            SegmentKind::Horizontal => Vec2::new(self.length.resolve(extent.width), thickness),
            SegmentKind::Vertical => Vec2::new(thickness, self.length.resolve(extent.height)),
        };
        Rect::from_corners(origin, origin + size)
    }
}

/// Ordered pair of location IDs; `Display` renders the lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    pub from: LocationId,
    pub to: LocationId,
}

impl RouteKey {
    pub fn new(from: impl Into<LocationId>, to: impl Into<LocationId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }

    /// The endpoint whose folder holds the route clip.
    pub fn origin(&self) -> &LocationId {
        &self.from
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// A successful lookup: the key that was actually found and its segments.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRoute<'a> {
    pub key: RouteKey,
    pub segments: &'a [Segment],
}

/// Mapping from `"<from>-<to>"` to the segments of that route.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct PathDictionary {
    routes: HashMap<String, Vec<Segment>>,
}

impl PathDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &RouteKey, segments: Vec<Segment>) {
        self.routes.insert(key.to_string(), segments);
    }

    pub fn get(&self, key: &RouteKey) -> Option<&[Segment]> {
        self.routes.get(&key.to_string()).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Look up the route between two selections.
    ///
    /// Empty or identical selections are rejected before any lookup. The
    /// requested direction is tried first, then the reverse.
    pub fn resolve(&self, from: &str, to: &str) -> Result<ResolvedRoute<'_>, RouteError> {
        let (from, to) = (from.trim(), to.trim());
        if from.is_empty() || to.is_empty() {
            return Err(RouteError::MissingSelection);
        }
        if from == to {
            return Err(RouteError::SameEndpoints);
        }

        let forward = RouteKey::new(from, to);
        if let Some(segments) = self.get(&forward) {
            return Ok(ResolvedRoute {
                key: forward,
                segments,
            });
        }
        let reverse = forward.reversed();
        if let Some(segments) = self.get(&reverse) {
            return Ok(ResolvedRoute {
                key: reverse,
                segments,
            });
        }
        Err(RouteError::NoRoute {
            from: forward.from,
            to: forward.to,
        })
    }
}
