//! UI module for rendering the TUI

mod components;
mod composer;
mod layout;
mod preview;
mod saved_forms;
mod splash;
mod widgets;

use crate::app::App;
use crate::state::View;
use components::{render_confirm_dialog, render_error_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_area = layout::create_layout(area);

    // Draw main content based on current view
    match &app.state.current_view {
        View::Splash => {
            if let Some(splash_state) = &app.splash_state {
                splash::draw(frame, main_area, splash_state);
            }
            return; // No status bar during splash
        }
        View::Forms => saved_forms::draw_list(frame, main_area, app),
        View::FormDetail => saved_forms::draw_detail(frame, main_area, app),
        View::Compose => composer::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Modal overlays, topmost last
    if let Some(pending) = &app.state.pending_delete {
        render_confirm_dialog(frame, pending);
    }
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    }
}
