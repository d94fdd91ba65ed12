//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models for maintainability:
//!
//! - **GalleryModel**: The ordered image store and grid cursor
//! - **ViewerModel**: Lightbox state machine and the displayed record
//! - **UiModel**: Add form, alerts, toasts, quit flag
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives on App
//! - Pure accessors: Helper methods are side-effect free

pub mod gallery;
pub mod ui;
pub mod viewer;

pub use gallery::GalleryModel;
pub use ui::{AddFormField, AddFormState, UiModel};
pub use viewer::{DisplayedRecord, ViewerModel, ViewerPhase, ViewerState};

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// The image store, its ordering, and the grid cursor
    pub gallery: GalleryModel,

    /// Lightbox viewer state
    pub viewer: ViewerModel,

    /// Dialogs, toasts, and the quit flag
    pub ui: UiModel,
}

impl Model {
    /// Create initial model with default settings
    pub fn new() -> Self {
        Self {
            gallery: GalleryModel::new(),
            viewer: ViewerModel::new(),
            ui: UiModel::new(),
        }
    }

    /// Check if any overlay is capturing input
    pub fn has_modal(&self) -> bool {
        self.viewer.is_open() || self.ui.has_modal()
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        self.ui.should_dismiss_toast()
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let model = Model::new();
        assert_eq!(model.gallery.len(), 0);
        assert!(!model.gallery.loaded);
        assert!(!model.viewer.is_open());
        assert!(!model.ui.should_quit);
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new();
        let _cloned = model.clone();
    }

    #[test]
    fn test_has_modal() {
        let mut model = Model::new();
        assert!(!model.has_modal());

        model.ui.alert = Some("Something went wrong".to_string());
        assert!(model.has_modal());

        model.ui.alert = None;
        model.viewer.open_at(0);
        assert!(model.has_modal());
    }

    #[test]
    fn test_toast() {
        let mut model = Model::new();
        assert!(model.ui.toast_message.is_none());

        model.show_toast("Test".to_string());
        assert!(model.ui.toast_message.is_some());

        model.dismiss_toast();
        assert!(model.ui.toast_message.is_none());
    }
}
