//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::search::SelectionPhase;
use crate::ui::app_component::{AppState, Screen};
use crate::ui::core::FocusTarget;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, state: &AppState) {
        let status_text = match &state.screen {
            Screen::Listings(_) => "Esc/b: back to search • q: quit".to_string(),
            Screen::Search => match state.focus {
                FocusTarget::Calendar => match state.form.selection.phase() {
                    SelectionPhase::PartialStart => {
                        "Enter: tap end date • ↑↓←→ move • [/]: month • Tab: filters".to_string()
                    }
                    _ => "Enter: tap day • ↑↓←→ move • [/]: month • Tab: filters • ?: help • q: quit".to_string(),
                },
                FocusTarget::Pets => "Space: toggle • Enter: search • Tab: next field • q: quit".to_string(),
                _ => "type to edit • Backspace: delete • Enter: search • Tab: next field".to_string(),
            },
        };

        let status_color = match state.form.selection.phase() {
            SelectionPhase::PartialStart if matches!(state.screen, Screen::Search) => Color::Yellow,
            _ => Color::Gray,
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
