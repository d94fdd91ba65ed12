// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (title, grid, legend, status areas)
// - render: Main orchestration function that coordinates all rendering
// - title_bar: Renders top title bar (app name, source url, loading state)
// - grid: Renders the thumbnail card grid
// - viewer: Renders the fullscreen lightbox overlay
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar with store metrics
// - dialogs: Renders the add form and alert dialogs
// - toast: Renders toast notifications (brief pop-up messages)

pub mod dialogs;
pub mod grid;
pub mod layout;
pub mod legend;
pub mod render;
pub mod status_bar;
pub mod title_bar;
pub mod toast;
pub mod viewer;

// Re-export main render function for convenience
pub use render::render;
