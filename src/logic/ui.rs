//! UI state transition logic
//!
//! Pure timer checks for transient chrome.

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Delay between hiding the old viewer image and swapping in the new one
pub const FADE_OUT_MS: u128 = 200;

/// Check whether a toast has outlived its display window
///
/// # Examples
/// ```
/// use galtui::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast(0));
/// assert!(!should_dismiss_toast(1499));
/// assert!(should_dismiss_toast(1500));
/// ```
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Check whether the viewer fade delay has elapsed
///
/// The caption, counter, and image source only swap once this returns
/// true; until then rapid navigation keeps the old text on screen.
pub fn fade_complete(elapsed_ms: u128) -> bool {
    elapsed_ms >= FADE_OUT_MS
}
