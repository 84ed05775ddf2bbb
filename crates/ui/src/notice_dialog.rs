//! Shows pending [`NoticeLog`] entries one at a time.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use campus::notifications::NoticeLog;

pub fn notice_dialog_ui(mut contexts: EguiContexts, mut log: ResMut<NoticeLog>) {
    let Some(text) = log.current().map(str::to_owned) else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new("notice_dialog")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 64.0))
        .default_width(320.0)
        .order(egui::Order::Tooltip)
        .show(contexts.ctx_mut(), |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(6.0);
                ui.label(text);
                ui.add_space(8.0);
                let ok = ui.add_sized(egui::vec2(96.0, 28.0), egui::Button::new("OK"));
                if ok.clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    dismissed = true;
                }
                ui.add_space(4.0);
            });
        });

    if dismissed {
        log.dismiss();
    }
}
