//! Loading of the location list and path dictionary.
//!
//! Both documents are requested together and joined. Natively they are read
//! from the asset directory on the I/O task pool; on the web they are fetched
//! through the browser. The async side writes its result into a shared slot
//! which [`poll_data_load`] drains once per frame.

use std::sync::{Arc, Mutex};

use bevy::prelude::*;

use crate::audio::RouteAudio;
use crate::config::CampusConfig;
use crate::error::DataError;
use crate::location::{on_floor, Location};
use crate::markers::{spawn_markers, Marker};
use crate::paths::PathDictionary;
use crate::route::RouteLine;
use crate::session::{LoadStatus, MapSession, RouteSelectors};
use crate::tables::MapTables;

/// Parsed contents of the data documents, before floor filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct CampusData {
    pub locations: Vec<Location>,
    pub paths: PathDictionary,
    /// Table override, when `data/tables.json` exists.
    pub tables: Option<MapTables>,
}

impl CampusData {
    pub fn from_documents(
        locations_json: &str,
        paths_json: &str,
        tables_json: Option<&str>,
    ) -> Result<Self, DataError> {
        let locations: Vec<Location> =
            serde_json::from_str(locations_json).map_err(|source| DataError::Parse {
                document: "location list",
                source,
            })?;
        let paths: PathDictionary =
            serde_json::from_str(paths_json).map_err(|source| DataError::Parse {
                document: "path dictionary",
                source,
            })?;
        let tables = tables_json.map(MapTables::from_json).transpose()?;
        Ok(Self {
            locations,
            paths,
            tables,
        })
    }
}

pub type LoadResult = Result<CampusData, DataError>;

/// Shared slot used to bridge the async load into the ECS world.
#[derive(Resource, Default, Clone)]
pub struct LoadBuffer(pub Arc<Mutex<Option<LoadResult>>>);

impl LoadBuffer {
    pub fn deliver(&self, result: LoadResult) {
        if let Ok(mut guard) = self.0.lock() {
            *guard = Some(result);
        }
    }

    fn take(&self) -> Option<LoadResult> {
        self.0.lock().ok().and_then(|mut guard| guard.take())
    }
}

/// Insert before the plugin to keep the startup load from touching the
/// filesystem or network. Data is then supplied through [`LoadBuffer`].
#[derive(Resource)]
pub struct SkipDataLoad;

/// Startup system: request both documents.
pub fn begin_data_load(
    config: Res<CampusConfig>,
    buffer: Res<LoadBuffer>,
    skip: Option<Res<SkipDataLoad>>,
) {
    if skip.is_some() {
        return;
    }
    info!(
        "Loading {} and {} for floor {}",
        config.locations_url, config.paths_url, config.floor
    );
    spawn_load(config.clone(), buffer.clone());
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_load(config: CampusConfig, buffer: LoadBuffer) {
    bevy::tasks::IoTaskPool::get()
        .spawn(async move {
            buffer.deliver(native::load_documents(&config).await);
        })
        .detach();
}

#[cfg(target_arch = "wasm32")]
fn spawn_load(config: CampusConfig, buffer: LoadBuffer) {
    wasm_bindgen_futures::spawn_local(async move {
        buffer.deliver(web::load_documents(&config).await);
    });
}

/// Apply a finished load: replace tables, filter to the floor, rebuild
/// markers, selectors and the path dictionary.
#[allow(clippy::too_many_arguments)]
pub fn poll_data_load(
    mut commands: Commands,
    buffer: Res<LoadBuffer>,
    config: Res<CampusConfig>,
    mut session: ResMut<MapSession>,
    mut tables: ResMut<MapTables>,
    mut route_audio: ResMut<RouteAudio>,
    markers: Query<Entity, With<Marker>>,
    lines: Query<Entity, With<RouteLine>>,
) {
    let Some(result) = buffer.take() else {
        return;
    };

    let data = match result {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to load map data: {}", e);
            session.status = LoadStatus::Failed(e.to_string());
            return;
        }
    };

    if let Some(loaded) = data.tables {
        *tables = loaded;
    }

    for entity in markers.iter().chain(lines.iter()) {
        commands.entity(entity).despawn_recursive();
    }
    // Clips belong to routes on the old data.
    if let Some(clip) = route_audio.current.take() {
        if let Some(mut entity) = commands.get_entity(clip) {
            entity.despawn();
        }
    }
    route_audio.last_clip = None;

    let on_this_floor = on_floor(&data.locations, config.floor);
    let spawned = spawn_markers(&mut commands, &on_this_floor, &tables);
    info!(
        "Map data loaded: {} locations ({} on floor {}, {} markers), {} paths",
        data.locations.len(),
        on_this_floor.len(),
        config.floor,
        spawned,
        data.paths.len(),
    );

    session.floor = config.floor;
    session.selectors = RouteSelectors::from_locations(&on_this_floor);
    session.locations = on_this_floor;
    session.paths = data.paths;
    session.active_route = None;
    session.status = LoadStatus::Ready;
}

/// A missing tables document, as opposed to one that exists but could not
/// be read.
fn is_absent(err: &DataError) -> bool {
    match err {
        DataError::Read { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
        DataError::Status { status, .. } => *status == 404,
        _ => false,
    }
}

/// The tables document is optional. The built-in tables stay in effect when
/// it is absent or unreadable.
fn optional_tables(result: Result<String, DataError>) -> Option<String> {
    match result {
        Ok(text) => Some(text),
        Err(e) if is_absent(&e) => {
            debug!("No tables document, using built-in tables: {}", e);
            None
        }
        Err(e) => {
            warn!("Ignoring tables document: {}", e);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::Path;

    use bevy::tasks::{IoTaskPool, Task};

    use super::{optional_tables, CampusData, LoadResult};
    use crate::config::CampusConfig;
    use crate::error::DataError;

    /// Each document is read on its own I/O task.
    fn read(root: &Path, relative: &str) -> Task<Result<String, DataError>> {
        let path = root.join(relative);
        IoTaskPool::get().spawn(async move {
            std::fs::read_to_string(&path).map_err(|source| DataError::Read {
                path: path.display().to_string(),
                source,
            })
        })
    }

    pub(super) async fn load_documents(config: &CampusConfig) -> LoadResult {
        let root = config.asset_root.as_path();
        let tables = read(root, &config.tables_url);
        let (locations, paths) = futures_lite::future::zip(
            read(root, &config.locations_url),
            read(root, &config.paths_url),
        )
        .await;
        let (locations, paths) = (locations?, paths?);
        let tables = optional_tables(tables.await);
        CampusData::from_documents(&locations, &paths, tables.as_deref())
    }

}

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    use super::{optional_tables, CampusData, LoadResult};
    use crate::config::CampusConfig;
    use crate::error::DataError;

    async fn fetch_text(url: &str) -> Result<String, DataError> {
        let fetch_err = |reason: String| DataError::Fetch {
            url: url.to_string(),
            reason,
        };
        let window = web_sys::window().ok_or_else(|| fetch_err("window not available".into()))?;
        let response_value = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(|e| fetch_err(format!("{:?}", e)))?;
        let response: web_sys::Response = response_value
            .dyn_into()
            .map_err(|_| fetch_err("failed to cast fetch response".into()))?;

        if !response.ok() {
            return Err(DataError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let text_promise = response
            .text()
            .map_err(|e| fetch_err(format!("response.text() failed: {:?}", e)))?;
        let text_value = JsFuture::from(text_promise)
            .await
            .map_err(|e| fetch_err(format!("await response text failed: {:?}", e)))?;
        text_value
            .as_string()
            .ok_or_else(|| fetch_err("response body is not text".into()))
    }

    /// Documents are served next to the other assets, relative to the page.
    fn asset_url(config: &CampusConfig, path: &str) -> String {
        let root = config.asset_root.to_string_lossy();
        let root = root.trim_end_matches('/');
        if root.is_empty() {
            path.to_string()
        } else {
            format!("{root}/{path}")
        }
    }

    pub(super) async fn load_documents(config: &CampusConfig) -> LoadResult {
        let (locations, paths) = futures_lite::future::zip(
            fetch_text(&asset_url(config, &config.locations_url)),
            fetch_text(&asset_url(config, &config.paths_url)),
        )
        .await;
        let (locations, paths) = (locations?, paths?);
        let tables = optional_tables(fetch_text(&asset_url(config, &config.tables_url)).await);
        CampusData::from_documents(&locations, &paths, tables.as_deref())
    }
}
