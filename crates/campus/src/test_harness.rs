//! # TestCampus: headless harness for map session tests
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + `CampusPlugin`. The
//! startup load is skipped; data is delivered through the same
//! `LoadBuffer` the real loader writes to, so tests exercise the full
//! apply path. Time advances in fixed 100 ms steps.

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::audio::{AudioClip, RouteAudio, RouteAudioRequested};
use crate::config::{CampusConfig, MapExtent};
use crate::geometry::CssLength;
use crate::loader::{CampusData, LoadBuffer, SkipDataLoad};
use crate::location::Location;
use crate::markers::{FocusMarker, Highlighted, Marker, MarkerClicked};
use crate::modal::ModalState;
use crate::notifications::NoticeLog;
use crate::paths::{PathDictionary, RouteKey, Segment, SegmentKind};
use crate::route::{RouteLine, RouteRequested};
use crate::search::SearchRequested;
use crate::session::MapSession;
use crate::tables::MapTables;
use crate::CampusPlugin;

const STEP: Duration = Duration::from_millis(100);

/// Events the session emitted for other crates, captured for assertions.
#[derive(Resource, Default)]
struct Recorded {
    audio: Vec<AudioClip>,
    focus: Vec<Entity>,
}

fn record_outgoing(
    mut audio: EventReader<RouteAudioRequested>,
    mut focus: EventReader<FocusMarker>,
    mut recorded: ResMut<Recorded>,
) {
    recorded.audio.extend(audio.read().map(|e| e.clip.clone()));
    recorded.focus.extend(focus.read().map(|e| e.marker));
}

pub struct TestCampus {
    app: App,
}

impl TestCampus {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// An empty session showing floor 1. No data is loaded.
    pub fn new() -> Self {
        Self::with_config(CampusConfig::for_floor(1), true)
    }

    pub fn on_floor(floor: i32) -> Self {
        Self::with_config(CampusConfig::for_floor(floor), true)
    }

    /// Build with an explicit config. With `skip_load == false` the startup
    /// loader reads the documents from `config.asset_root`.
    pub fn with_config(config: CampusConfig, skip_load: bool) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(STEP));
        app.insert_resource(config);
        if skip_load {
            app.insert_resource(SkipDataLoad);
        }
        app.add_plugins(CampusPlugin);
        app.init_resource::<Recorded>();
        app.add_systems(PostUpdate, record_outgoing);
        app.update();
        Self { app }
    }

    /// Session for floor 1 with [`sample_locations`] and [`sample_paths`] loaded.
    pub fn with_sample_data() -> Self {
        Self::new().with_data(sample_locations(), sample_paths())
    }

    // -----------------------------------------------------------------------
    // Setup (builder pattern, consumes and returns Self)
    // -----------------------------------------------------------------------

    pub fn with_data(mut self, locations: Vec<Location>, paths: PathDictionary) -> Self {
        self.deliver(Ok(CampusData {
            locations,
            paths,
            tables: None,
        }));
        self
    }

    /// Deliver raw JSON documents as the loader would.
    pub fn with_documents(mut self, locations_json: &str, paths_json: &str) -> Self {
        self.deliver(CampusData::from_documents(locations_json, paths_json, None));
        self
    }

    pub fn with_tables(mut self, tables: MapTables) -> Self {
        self.app.insert_resource(tables);
        self
    }

    pub fn with_extent(mut self, width: f32, height: f32) -> Self {
        self.app.insert_resource(MapExtent { width, height });
        self
    }

    fn deliver(&mut self, result: crate::loader::LoadResult) {
        self.app.world().resource::<LoadBuffer>().deliver(result);
        self.app.update();
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    pub fn update(&mut self) {
        self.app.update();
    }

    /// Advance virtual time by roughly `secs`, one 100 ms frame at a time.
    pub fn advance_secs(&mut self, secs: f32) {
        let frames = (secs / STEP.as_secs_f32()).ceil() as u32;
        for _ in 0..frames {
            self.app.update();
        }
    }

    /// Run updates until `done` holds or `max_frames` pass, sleeping briefly
    /// between frames so task-pool work can finish.
    pub fn update_until(&mut self, max_frames: u32, done: impl Fn(&mut Self) -> bool) -> bool {
        for _ in 0..max_frames {
            if done(self) {
                return true;
            }
            std::thread::sleep(Duration::from_millis(5));
            self.app.update();
        }
        done(self)
    }

    pub fn request_route(&mut self, from: &str, to: &str) {
        self.app
            .world_mut()
            .send_event(RouteRequested::new(from, to));
        self.app.update();
    }

    pub fn search(&mut self, query: &str) {
        self.app.world_mut().send_event(SearchRequested {
            query: query.to_string(),
        });
        self.app.update();
    }

    /// Click the marker labeled `label`. Panics if there is none.
    pub fn click(&mut self, label: &str) {
        let marker = self
            .marker_entity(label)
            .unwrap_or_else(|| panic!("no marker labeled {label}"));
        self.app.world_mut().send_event(MarkerClicked { marker });
        self.app.update();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn session(&self) -> &MapSession {
        self.resource::<MapSession>()
    }

    pub fn modal(&self) -> &ModalState {
        self.resource::<ModalState>()
    }

    pub fn notices(&self) -> Vec<String> {
        self.resource::<NoticeLog>().pending.iter().cloned().collect()
    }

    pub fn notice_total(&self) -> u64 {
        self.resource::<NoticeLog>().total
    }

    pub fn route_audio(&self) -> &RouteAudio {
        self.resource::<RouteAudio>()
    }

    pub fn audio_requests(&self) -> &[AudioClip] {
        &self.resource::<Recorded>().audio
    }

    pub fn focus_requests(&self) -> &[Entity] {
        &self.resource::<Recorded>().focus
    }

    pub fn marker_entity(&mut self, label: &str) -> Option<Entity> {
        let world = self.app.world_mut();
        let mut query = world.query::<(Entity, &Marker)>();
        query
            .iter(world)
            .find(|(_, m)| m.label == label)
            .map(|(e, _)| e)
    }

    /// Marker labels in document order.
    pub fn marker_labels(&mut self) -> Vec<String> {
        let world = self.app.world_mut();
        let mut query = world.query::<&Marker>();
        let mut markers: Vec<&Marker> = query.iter(world).collect();
        markers.sort_by_key(|m| m.order);
        markers.iter().map(|m| m.label.clone()).collect()
    }

    pub fn marker_count(&mut self) -> usize {
        self.marker_labels().len()
    }

    pub fn highlighted_labels(&mut self) -> Vec<String> {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&Marker, With<Highlighted>>();
        let mut labels: Vec<String> = query.iter(world).map(|m| m.label.clone()).collect();
        labels.sort();
        labels
    }

    /// Drawn route lines ordered by their position in the route.
    pub fn route_lines(&mut self) -> Vec<RouteLine> {
        let world = self.app.world_mut();
        let mut query = world.query::<&RouteLine>();
        let mut lines: Vec<RouteLine> = query.iter(world).cloned().collect();
        lines.sort_by_key(|l| l.index);
        lines
    }
}

impl Default for TestCampus {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn px(value: f32) -> CssLength {
    CssLength::Pixels(value)
}

pub fn pct(value: f32) -> CssLength {
    CssLength::Percent(value)
}

pub fn segment(kind: SegmentKind, top: CssLength, left: CssLength, length: CssLength) -> Segment {
    Segment {
        kind,
        top,
        left,
        length,
    }
}

/// Floor 1 has eight locations, two of them hidden corridor nodes; floor 2
/// has one. "Aula 17" follows "Cafetería" (7), so a search for "7" reaches
/// the exact label before the label that merely contains it.
pub fn sample_locations() -> Vec<Location> {
    vec![
        Location::new("1", "Info 04", 1).at(pct(20.0), pct(10.0)),
        Location::new("2", "Aula SG01", 1).at(pct(20.0), pct(30.0)),
        Location::new("7", "Cafetería", 1)
            .at(pct(60.0), pct(30.0))
            .with_image("img/cafeteria.jpg"),
        Location::new("17", "Aula 17", 1).at(pct(60.0), pct(80.0)),
        Location::new("12", "Baños", 1).at(pct(80.0), pct(50.0)),
        Location::new("13", "Zona Verde", 1).at(pct(90.0), pct(90.0)),
        Location::new("P1A", "Pasillo A", 1).at(pct(40.0), pct(10.0)),
        Location::new("P1B", "Pasillo B", 1).at(pct(40.0), pct(30.0)),
        Location::new("20", "Biblioteca", 2).at(pct(50.0), pct(50.0)),
    ]
}

/// `1-7` and `12-7` are authored; `13-1` has an origin without audio folder.
pub fn sample_paths() -> PathDictionary {
    let mut paths = PathDictionary::new();
    paths.insert(
        &RouteKey::new("1", "7"),
        vec![
            segment(SegmentKind::Vertical, pct(20.0), pct(10.0), pct(40.0)),
            segment(SegmentKind::Horizontal, pct(60.0), pct(10.0), pct(20.0)),
        ],
    );
    paths.insert(
        &RouteKey::new("12", "7"),
        vec![
            segment(SegmentKind::Horizontal, pct(80.0), pct(30.0), pct(20.0)),
            segment(SegmentKind::Vertical, pct(60.0), pct(30.0), pct(20.0)),
        ],
    );
    paths.insert(
        &RouteKey::new("13", "1"),
        vec![segment(SegmentKind::Horizontal, px(100.0), px(100.0), px(300.0))],
    );
    paths
}
