use bevy::prelude::*;

pub mod audio;
pub mod config;
pub mod error;
pub mod geometry;
pub mod loader;
pub mod location;
pub mod markers;
pub mod modal;
pub mod notifications;
pub mod paths;
pub mod route;
pub mod search;
pub mod session;
pub mod tables;

#[cfg(test)]
pub mod test_harness;

pub use error::{DataError, RouteError};

/// Ordering of the session handlers within `Update`. Input systems in other
/// crates run before [`CampusSet::Handle`]; visuals run after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CampusSet {
    Load,
    Handle,
}

pub struct CampusPlugin;

impl Plugin for CampusPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<config::CampusConfig>()
            .init_resource::<config::MapExtent>()
            .init_resource::<tables::MapTables>()
            .init_resource::<session::MapSession>()
            .init_resource::<modal::ModalState>()
            .init_resource::<audio::RouteAudio>()
            .init_resource::<loader::LoadBuffer>()
            .add_event::<markers::MarkerClicked>()
            .add_event::<markers::FocusMarker>()
            .add_event::<search::SearchRequested>()
            .add_event::<route::RouteRequested>()
            .add_event::<audio::RouteAudioRequested>()
            .add_plugins(notifications::NotificationsPlugin)
            .configure_sets(Update, (CampusSet::Load, CampusSet::Handle).chain())
            .add_systems(Startup, loader::begin_data_load)
            .add_systems(Update, loader::poll_data_load.in_set(CampusSet::Load))
            .add_systems(
                Update,
                (
                    markers::handle_marker_clicks,
                    search::handle_search_requests,
                    route::handle_route_requests,
                    markers::expire_highlights,
                )
                    .chain()
                    .in_set(CampusSet::Handle),
            );
    }
}
