//! Free-text location search.
//!
//! Query and candidates are compared after [`normalize_text`]: lowercase,
//! with combining diacritics removed, so "cafeteria" finds "Cafetería".

use bevy::prelude::*;
use unicode_normalization::UnicodeNormalization;

use crate::markers::{clear_highlights, FocusMarker, Highlighted, Marker};
use crate::modal::ModalState;
use crate::notifications::UserNotice;

pub const NO_MATCH_TEXT: &str = "No location matches that search.";

/// Lowercase `text` and strip combining marks (U+0300..=U+036F) after NFD
/// decomposition.
pub fn normalize_text(text: &str) -> String {
    text.nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect::<String>()
        .to_lowercase()
}

/// Index of the first candidate, in order, whose name contains the query or
/// whose label equals or contains it. `None` for an empty query.
pub fn best_match<'a>(
    candidates: impl IntoIterator<Item = (&'a str, &'a str)>,
    query: &str,
) -> Option<usize> {
    let query = normalize_text(query.trim());
    if query.is_empty() {
        return None;
    }

    candidates.into_iter().position(|(name, label)| {
        let label = normalize_text(label);
        normalize_text(name).contains(&query) || label == query || label.contains(&query)
    })
}

/// Search submitted from the search box.
#[derive(Event, Debug, Clone)]
pub struct SearchRequested {
    pub query: String,
}

/// Highlight, center and open the first matching marker.
///
/// An empty query only clears highlights; no match clears highlights and
/// notifies the user.
pub fn handle_search_requests(
    mut commands: Commands,
    mut events: EventReader<SearchRequested>,
    markers: Query<(Entity, &Marker)>,
    highlighted: Query<Entity, With<Highlighted>>,
    mut modal: ResMut<ModalState>,
    mut focus: EventWriter<FocusMarker>,
    mut notices: EventWriter<UserNotice>,
) {
    for event in events.read() {
        clear_highlights(&mut commands, &highlighted);
        if event.query.trim().is_empty() {
            continue;
        }

        let mut ordered: Vec<(Entity, &Marker)> = markers.iter().collect();
        ordered.sort_by_key(|(_, marker)| marker.order);

        let found = best_match(
            ordered
                .iter()
                .map(|(_, m)| (m.name.as_str(), m.label.as_str())),
            &event.query,
        );
        match found {
            Some(index) => {
                let (entity, marker) = ordered[index];
                debug!("Search {:?} matched marker {}", event.query, marker.id);
                commands.entity(entity).insert(Highlighted::persistent());
                focus.send(FocusMarker { marker: entity });
                modal.open(marker.name.clone(), marker.img.clone());
            }
            None => {
                notices.send(UserNotice::new(NO_MATCH_TEXT));
            }
        }
    }
}
