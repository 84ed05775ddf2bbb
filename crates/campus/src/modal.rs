//! Location detail overlay state.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalVisibility {
    #[default]
    Hidden,
    Shown,
}

/// Content and visibility of the detail modal. Opening always replaces the
/// previous title and image.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ModalState {
    pub visibility: ModalVisibility,
    pub title: String,
    /// Image path relative to the asset root.
    pub image: Option<String>,
}

impl ModalState {
    pub fn open(&mut self, title: impl Into<String>, image: Option<String>) {
        self.title = title.into();
        self.image = image;
        self.visibility = ModalVisibility::Shown;
    }

    pub fn close(&mut self) {
        self.visibility = ModalVisibility::Hidden;
    }

    pub fn is_shown(&self) -> bool {
        self.visibility == ModalVisibility::Shown
    }

    /// Value of the `aria-hidden`-style flag: `true` while hidden.
    pub fn is_hidden(&self) -> bool {
        !self.is_shown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_replaces_content() {
        let mut modal = ModalState::default();
        assert!(modal.is_hidden());

        modal.open("Cafeteria", Some("img/cafeteria.jpg".into()));
        assert!(modal.is_shown());
        assert_eq!(modal.image.as_deref(), Some("img/cafeteria.jpg"));

        modal.open("Patio", None);
        assert_eq!(modal.title, "Patio");
        assert_eq!(modal.image, None);
    }

    #[test]
    fn test_close_keeps_content_but_hides() {
        let mut modal = ModalState::default();
        modal.open("Patio", None);
        modal.close();
        assert!(modal.is_hidden());
        assert_eq!(modal.title, "Patio");
    }
}
