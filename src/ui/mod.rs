//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::store::FormStore;
use ratatui::Frame;

/// Main draw function
pub fn draw<S: FormStore>(frame: &mut Frame, app: &App<S>) {
    let screen = layout::create_layout(frame.area());

    layout::draw_header(frame, screen.header);
    layout::draw_stepper(frame, screen.stepper, app.step());
    forms::draw_wizard(frame, screen.body, app);
    layout::draw_status_bar(frame, screen.status, app);

    // Modal overlay last so it sits on top
    if app.state.pending_reset {
        components::render_reset_dialog(frame);
    }
}
