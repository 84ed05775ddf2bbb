//! Map markers: one clickable entity per visible location.

use bevy::prelude::*;

use crate::config::{MapExtent, HIGHLIGHT_SECS};
use crate::geometry::CssLength;
use crate::location::{Location, LocationId};
use crate::modal::ModalState;
use crate::tables::MapTables;

/// A visible location on the map. Visuals are attached by the rendering crate.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: LocationId,
    /// Text drawn on the marker; always the location ID.
    pub label: String,
    pub name: String,
    pub img: Option<String>,
    pub top: CssLength,
    pub left: CssLength,
    /// Position in the location document, used as the search order.
    pub order: usize,
}

impl Marker {
    pub fn from_location(location: &Location, order: usize) -> Self {
        Self {
            id: location.id.clone(),
            label: location.id.to_string(),
            name: location.name.clone(),
            img: location.img.clone(),
            top: location.top,
            left: location.left,
            order,
        }
    }

    /// Marker center in map pixels (origin top-left, y down).
    pub fn anchor(&self, extent: &MapExtent) -> Vec2 {
        Vec2::new(
            self.left.resolve(extent.width),
            self.top.resolve(extent.height),
        )
    }
}

/// Highlight on a marker. Click highlights expire, search highlights stay
/// until the next search or click.
#[derive(Component, Debug, Clone)]
pub struct Highlighted {
    pub expires: Option<Timer>,
}

impl Highlighted {
    pub fn timed() -> Self {
        Self {
            expires: Some(Timer::from_seconds(HIGHLIGHT_SECS, TimerMode::Once)),
        }
    }

    pub fn persistent() -> Self {
        Self { expires: None }
    }
}

/// A marker was clicked on the map.
#[derive(Event, Debug, Clone, Copy)]
pub struct MarkerClicked {
    pub marker: Entity,
}

/// Request to center the view on a marker.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusMarker {
    pub marker: Entity,
}

/// Spawn markers for `locations`, skipping hidden nodes. Returns how many
/// were spawned.
pub fn spawn_markers(commands: &mut Commands, locations: &[Location], tables: &MapTables) -> usize {
    let mut spawned = 0;
    for (order, location) in locations.iter().enumerate() {
        if tables.is_hidden(&location.id) {
            continue;
        }
        commands.spawn(Marker::from_location(location, order));
        spawned += 1;
    }
    spawned
}

pub(crate) fn clear_highlights(
    commands: &mut Commands,
    highlighted: &Query<Entity, With<Highlighted>>,
) {
    for entity in highlighted {
        commands.entity(entity).remove::<Highlighted>();
    }
}

/// Open the modal for a clicked marker, highlight it alone and center it.
pub fn handle_marker_clicks(
    mut commands: Commands,
    mut events: EventReader<MarkerClicked>,
    markers: Query<&Marker>,
    highlighted: Query<Entity, With<Highlighted>>,
    mut modal: ResMut<ModalState>,
    mut focus: EventWriter<FocusMarker>,
) {
    for event in events.read() {
        let Ok(marker) = markers.get(event.marker) else {
            continue;
        };
        modal.open(marker.name.clone(), marker.img.clone());
        clear_highlights(&mut commands, &highlighted);
        commands.entity(event.marker).insert(Highlighted::timed());
        focus.send(FocusMarker {
            marker: event.marker,
        });
    }
}

pub fn expire_highlights(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Highlighted)>,
) {
    for (entity, mut highlight) in &mut query {
        let Some(timer) = highlight.expires.as_mut() else {
            continue;
        };
        if timer.tick(time.delta()).finished() {
            commands.entity(entity).remove::<Highlighted>();
        }
    }
}
