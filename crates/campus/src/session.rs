//! Session-scoped map state, rebuilt on every start.

use bevy::prelude::*;

use crate::location::{Location, LocationId};
use crate::paths::{PathDictionary, RouteKey};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Pending,
    Ready,
    Failed(String),
}

/// One entry of the origin or destination dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    pub id: LocationId,
    pub name: String,
}

/// Contents of the two route dropdowns. Both list every location on the
/// floor, hidden corridor nodes included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSelectors {
    pub origin: Vec<SelectorOption>,
    pub destination: Vec<SelectorOption>,
}

impl RouteSelectors {
    pub fn from_locations(locations: &[Location]) -> Self {
        let options: Vec<SelectorOption> = locations
            .iter()
            .map(|l| SelectorOption {
                id: l.id.clone(),
                name: l.name.clone(),
            })
            .collect();
        Self {
            origin: options.clone(),
            destination: options,
        }
    }
}

/// Everything the handlers need that is not an entity.
#[derive(Resource, Debug, Default)]
pub struct MapSession {
    pub status: LoadStatus,
    /// Floor the locations were filtered to.
    pub floor: i32,
    /// Locations on the active floor, in document order.
    pub locations: Vec<Location>,
    pub paths: PathDictionary,
    pub selectors: RouteSelectors,
    /// Key of the route currently drawn.
    pub active_route: Option<RouteKey>,
}

impl MapSession {
    pub fn is_ready(&self) -> bool {
        self.status == LoadStatus::Ready
    }

    pub fn location(&self, id: &LocationId) -> Option<&Location> {
        self.locations.iter().find(|l| &l.id == id)
    }
}
