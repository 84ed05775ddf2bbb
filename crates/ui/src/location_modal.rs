//! Location detail modal: name and optional photo over a dimmed backdrop.
//!
//! Closes on the close button, a click on the backdrop, or Escape.

use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy_egui::egui::load::SizedTexture;
use bevy_egui::{egui, EguiContexts};

use campus::modal::ModalState;

const MAX_IMAGE_WIDTH: f32 = 360.0;

/// Texture registered with egui for the image currently in the modal.
#[derive(Resource, Default)]
pub struct ModalImage {
    path: Option<String>,
    handle: Option<Handle<Image>>,
    texture: Option<egui::TextureId>,
}

/// Fit `size` into `max_width`, keeping the aspect ratio.
pub fn fit_width(size: Vec2, max_width: f32) -> egui::Vec2 {
    if size.x <= max_width || size.x <= 0.0 {
        return egui::vec2(size.x, size.y);
    }
    let scale = max_width / size.x;
    egui::vec2(max_width, size.y * scale)
}

fn sync_modal_image(
    contexts: &mut EguiContexts,
    cache: &mut ModalImage,
    asset_server: &AssetServer,
    wanted: &Option<String>,
) {
    if &cache.path == wanted {
        return;
    }
    if let Some(old) = cache.handle.take() {
        contexts.remove_image(&old);
    }
    cache.texture = None;
    cache.path = wanted.clone();
    if let Some(path) = wanted {
        let handle: Handle<Image> = asset_server.load(path.clone());
        cache.texture = Some(contexts.add_image(handle.clone()));
        cache.handle = Some(handle);
    }
}

pub fn location_modal_ui(
    mut contexts: EguiContexts,
    mut modal: ResMut<ModalState>,
    mut cache: ResMut<ModalImage>,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
    keys: Res<ButtonInput<KeyCode>>,
) {
    if modal.is_hidden() {
        return;
    }
    if keys.just_pressed(KeyCode::Escape) {
        modal.close();
        return;
    }
    sync_modal_image(&mut contexts, &mut cache, &asset_server, &modal.image);

    let ctx = contexts.ctx_mut();
    let mut close = false;

    let screen_rect = ctx.screen_rect();
    egui::Area::new(egui::Id::new("location_modal_backdrop"))
        .fixed_pos(screen_rect.min)
        .order(egui::Order::Middle)
        .show(ctx, |ui| {
            ui.painter().rect_filled(
                screen_rect,
                egui::CornerRadius::ZERO,
                egui::Color32::from_black_alpha(140),
            );
            if ui.allocate_rect(screen_rect, egui::Sense::click()).clicked() {
                close = true;
            }
        });

    egui::Window::new("location_modal")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .min_width(280.0)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(modal.title.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Close").clicked() {
                        close = true;
                    }
                });
            });

            let (Some(texture), Some(handle)) = (cache.texture, cache.handle.as_ref()) else {
                return;
            };
            ui.add_space(8.0);
            if let Some(image) = images.get(handle) {
                let size = fit_width(image.size_f32(), MAX_IMAGE_WIDTH);
                ui.add(egui::Image::new(SizedTexture::new(texture, size)));
            } else if matches!(asset_server.load_state(handle.id()), LoadState::Failed(_)) {
                ui.weak("Photo unavailable");
            } else {
                ui.spinner();
            }
        });

    if close {
        modal.close();
    }
}
