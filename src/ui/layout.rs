//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::FORM_MIN_WIDTH;

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main layout areas (screen content on top, status bar below)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        let content_height = area.height.saturating_sub(1);
        let content_area = Rect::new(area.x, area.y, area.width, content_height);
        let status_area = Rect::new(area.x, area.y + content_height, area.width, 1);

        vec![content_area, status_area]
    }

    /// Split off a one-line heading above the screen content
    #[must_use]
    pub fn heading_layout(area: Rect) -> (Rect, Rect) {
        let heading = Rect::new(area.x, area.y, area.width, 1.min(area.height));
        let content = Rect::new(
            area.x,
            area.y + heading.height,
            area.width,
            area.height.saturating_sub(heading.height),
        );
        (heading, content)
    }

    /// Calculate the search screen layout (calendar + form side by side)
    #[must_use]
    pub fn search_layout(area: Rect, calendar_width: u16) -> Vec<Rect> {
        // Never squeeze the form below its minimum
        let calendar_width = calendar_width.min(area.width.saturating_sub(FORM_MIN_WIDTH));

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(calendar_width), Constraint::Min(0)])
            .split(area)
            .to_vec()
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate help panel dimensions based on screen size
    #[must_use]
    pub fn help_panel_dimensions(screen_width: u16, screen_height: u16) -> (u16, u16) {
        let help_width = if screen_width < 80 { 70 } else { 60 };
        let help_height = if screen_height < 40 { 80 } else { 60 };
        (help_width, help_height)
    }
}
