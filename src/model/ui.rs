//! UI Model
//!
//! This sub-model contains the chrome around the gallery: the add-image
//! form, blocking alerts, toasts, and the quit flag.

use std::time::Instant;

/// Which add-form field has focus
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddFormField {
    Title,
    Url,
}

/// State of the add-image form overlay
#[derive(Clone, Debug)]
pub struct AddFormState {
    pub title: String,
    pub url: String,
    pub focus: AddFormField,
}

impl AddFormState {
    /// Fresh form with empty fields and focus on the title
    pub fn new() -> Self {
        Self {
            title: String::new(),
            url: String::new(),
            focus: AddFormField::Title,
        }
    }

    /// Trimmed (title, url) when both fields carry text
    ///
    /// Whitespace-only input does not count as filled in.
    pub fn submission(&self) -> Option<(String, String)> {
        let title = self.title.trim();
        let url = self.url.trim();

        if title.is_empty() || url.is_empty() {
            return None;
        }

        Some((title.to_string(), url.to_string()))
    }

    /// Mutable handle on whichever field has focus
    pub fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            AddFormField::Title => &mut self.title,
            AddFormField::Url => &mut self.url,
        }
    }

    /// Move focus to the other field
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            AddFormField::Title => AddFormField::Url,
            AddFormField::Url => AddFormField::Title,
        };
    }
}

/// Dialogs, toasts, and transient chrome
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Add-image form overlay (None while closed)
    pub add_form: Option<AddFormState>,

    /// Blocking alert text; any key dismisses it
    pub alert: Option<String>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    // ============================================
    // VISUAL STATE
    // ============================================
    /// Whether a listing fetch is in flight
    pub loading_images: bool,

    /// Frames remaining to clear terminal for sixel graphics cleanup
    pub sixel_cleanup_frames: u8,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    /// Create initial UI model
    pub fn new() -> Self {
        Self {
            add_form: None,
            alert: None,
            toast_message: None,
            loading_images: false,
            sixel_cleanup_frames: 0,
            should_quit: false,
        }
    }

    /// Check if any modal dialog is currently showing
    pub fn has_modal(&self) -> bool {
        self.add_form.is_some() || self.alert.is_some()
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        match &self.toast_message {
            Some((_, shown_at)) => {
                crate::logic::ui::should_dismiss_toast(shown_at.elapsed().as_millis())
            }
            None => false,
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_focuses_title() {
        let form = AddFormState::new();
        assert_eq!(form.focus, AddFormField::Title);
        assert!(form.title.is_empty());
        assert!(form.url.is_empty());
    }

    #[test]
    fn test_submission_requires_both_fields() {
        let mut form = AddFormState::new();
        assert_eq!(form.submission(), None);

        form.title = "Sunset".to_string();
        assert_eq!(form.submission(), None);

        form.url = "http://example.com/s.jpg".to_string();
        assert_eq!(
            form.submission(),
            Some(("Sunset".to_string(), "http://example.com/s.jpg".to_string()))
        );
    }

    #[test]
    fn test_submission_trims_whitespace() {
        let mut form = AddFormState::new();
        form.title = "  Sunset  ".to_string();
        form.url = " http://example.com/s.jpg ".to_string();

        let (title, url) = form.submission().unwrap();
        assert_eq!(title, "Sunset");
        assert_eq!(url, "http://example.com/s.jpg");
    }

    #[test]
    fn test_whitespace_only_is_not_filled_in() {
        let mut form = AddFormState::new();
        form.title = "   ".to_string();
        form.url = "http://example.com/s.jpg".to_string();
        assert_eq!(form.submission(), None);
    }

    #[test]
    fn test_toggle_focus() {
        let mut form = AddFormState::new();
        form.toggle_focus();
        assert_eq!(form.focus, AddFormField::Url);
        form.toggle_focus();
        assert_eq!(form.focus, AddFormField::Title);
    }

    #[test]
    fn test_focused_field_mut_follows_focus() {
        let mut form = AddFormState::new();
        form.focused_field_mut().push_str("My Title");
        form.toggle_focus();
        form.focused_field_mut().push_str("http://x");

        assert_eq!(form.title, "My Title");
        assert_eq!(form.url, "http://x");
    }

    #[test]
    fn test_has_modal() {
        let mut ui = UiModel::new();
        assert!(!ui.has_modal());

        ui.add_form = Some(AddFormState::new());
        assert!(ui.has_modal());

        ui.add_form = None;
        ui.alert = Some("Error adding image".to_string());
        assert!(ui.has_modal());
    }
}
