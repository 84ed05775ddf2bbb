//! Top bar: search box, route dropdowns and load status.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use campus::location::LocationId;
use campus::route::RouteRequested;
use campus::search::SearchRequested;
use campus::session::{LoadStatus, MapSession, SelectorOption};

/// Widget state that outlives a frame.
#[derive(Resource, Debug, Default)]
pub struct ToolbarState {
    pub query: String,
    pub origin: Option<LocationId>,
    pub destination: Option<LocationId>,
}

impl ToolbarState {
    /// Route request for the current picks; an unpicked side is empty.
    pub fn route_request(&self) -> RouteRequested {
        let id = |pick: &Option<LocationId>| {
            pick.as_ref()
                .map(|id| id.to_string())
                .unwrap_or_default()
        };
        RouteRequested::new(id(&self.origin), id(&self.destination))
    }

    /// Drop picks that no longer name a listed location.
    pub fn retain_known(&mut self, options: &[SelectorOption]) {
        let known = |pick: &Option<LocationId>| {
            pick.as_ref()
                .is_some_and(|id| options.iter().any(|o| &o.id == id))
        };
        if !known(&self.origin) {
            self.origin = None;
        }
        if !known(&self.destination) {
            self.destination = None;
        }
    }
}

fn option_label(options: &[SelectorOption], pick: &Option<LocationId>) -> String {
    pick.as_ref()
        .and_then(|id| options.iter().find(|o| &o.id == id))
        .map(|o| o.name.clone())
        .unwrap_or_else(|| "Select...".to_string())
}

fn location_combo(
    ui: &mut egui::Ui,
    salt: &str,
    options: &[SelectorOption],
    pick: &mut Option<LocationId>,
) {
    egui::ComboBox::from_id_salt(salt)
        .width(170.0)
        .selected_text(option_label(options, pick))
        .show_ui(ui, |ui| {
            for option in options {
                let selected = pick.as_ref() == Some(&option.id);
                if ui.selectable_label(selected, option.name.as_str()).clicked() {
                    *pick = Some(option.id.clone());
                }
            }
        });
}

pub fn toolbar_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<ToolbarState>,
    session: Res<MapSession>,
    mut searches: EventWriter<SearchRequested>,
    mut routes: EventWriter<RouteRequested>,
) {
    if session.is_changed() {
        state.retain_known(&session.selectors.origin);
    }

    egui::TopBottomPanel::top("campus_toolbar").show(contexts.ctx_mut(), |ui| {
        ui.horizontal(|ui| {
            ui.strong(format!("Floor {}", session.floor));
            ui.separator();

            let response = ui.add(
                egui::TextEdit::singleline(&mut state.query)
                    .hint_text("Search a location")
                    .desired_width(200.0),
            );
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if submitted || ui.button("Search").clicked() {
                searches.send(SearchRequested {
                    query: state.query.clone(),
                });
            }
            ui.separator();

            let state = &mut *state;
            ui.label("From");
            location_combo(ui, "route_origin", &session.selectors.origin, &mut state.origin);
            ui.label("To");
            location_combo(
                ui,
                "route_destination",
                &session.selectors.destination,
                &mut state.destination,
            );
            if ui.button("Generate route").clicked() {
                routes.send(state.route_request());
            }

            match &session.status {
                LoadStatus::Pending => {
                    ui.separator();
                    ui.spinner();
                    ui.label("Loading map data");
                }
                LoadStatus::Failed(_) => {
                    ui.separator();
                    ui.colored_label(egui::Color32::from_rgb(230, 120, 90), "Map data unavailable");
                }
                LoadStatus::Ready => {}
            }
        });
    });
}
