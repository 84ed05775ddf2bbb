use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod location_modal;
pub mod notice_dialog;
pub mod theme;
pub mod toolbar;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<toolbar::ToolbarState>()
            .init_resource::<location_modal::ModalImage>()
            .add_systems(Startup, theme::apply_campus_theme)
            .add_systems(
                Update,
                (
                    toolbar::toolbar_ui,
                    location_modal::location_modal_ui,
                    notice_dialog::notice_dialog_ui,
                )
                    .chain()
                    .before(campus::CampusSet::Handle),
            );
    }
}
