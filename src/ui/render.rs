use crate::App;
use ratatui::layout::Rect;
use ratatui::Frame;

use super::{dialogs, grid, layout, legend, status_bar, title_bar, toast, viewer};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let viewer_open = app.model.viewer.is_open();
    let form_open = app.model.ui.add_form.is_some();

    // Calculate layout
    let layout_info = layout::calculate_layout(size, viewer_open, form_open, &app.controls);

    title_bar::render_title_bar(
        f,
        layout_info.title_area,
        app.client.api_url(),
        app.model.ui.loading_images,
    );

    grid::render_grid(f, app, layout_info.grid_area);

    if let Some(legend_area) = layout_info.legend_area {
        legend::render_legend(f, legend_area, viewer_open, form_open, &app.controls);
    }

    let viewer_caption = app.model.viewer.caption_text();
    let selected_name = app
        .model
        .gallery
        .selected
        .and_then(|idx| app.model.gallery.images.get(idx))
        .map(|record| record.display_name());

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        app.model.gallery.images.len(),
        app.model.gallery.sort_order.as_str(),
        selected_name,
        viewer_caption.as_deref(),
        app.model.ui.loading_images,
    );

    // Viewer overlays the grid
    if viewer_open {
        viewer::render_viewer(f, app);
    } else {
        app.viewer_hits = viewer::ViewerHitAreas::default();
    }

    // Dialogs sit above the viewer
    if let Some(form) = app.model.ui.add_form.as_ref() {
        app.add_form_rect = dialogs::render_add_form(f, form);
    } else {
        app.add_form_rect = Rect::default();
    }

    if let Some(message) = app.model.ui.alert.as_deref() {
        dialogs::render_alert(f, message);
    }

    // Toast notification on the very top
    if let Some((message, _timestamp)) = &app.model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
