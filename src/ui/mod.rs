//! UI module for rendering the TUI

mod components;
mod contact;
mod forms;
mod hero;
mod layout;
mod popup;

use crate::app::App;
use crate::state::Section;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (nav_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_nav_bar(frame, nav_area, app);

    // One section fills the page at a time; PageUp/PageDown scroll between them
    match app.state.focus {
        Section::Hero => hero::draw(frame, main_area, app),
        Section::Contact => contact::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Popup overlays everything
    popup::draw(frame, &app.state.popup);
}
