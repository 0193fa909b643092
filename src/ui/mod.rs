//! UI module for rendering the TUI

mod components;
mod forms;
mod landing;
mod layout;
mod splash;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match &app.state.current_view {
        View::Splash => {
            if let Some(splash_state) = &app.splash_state {
                splash::draw(frame, area, splash_state);
            }
        }
        View::Landing => {
            let main_area = layout::create_layout(area);
            landing::draw(frame, main_area, app);
            layout::draw_status_bar(frame, app);
        }
    }
}
