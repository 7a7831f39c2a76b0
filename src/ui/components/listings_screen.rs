//! Listings screen: the navigation target of a search.
//!
//! Stands in for the external listings collaborator. It performs no search
//! of its own; it shows the parameter record it was navigated to with, both
//! as a readable summary and as the exact wire-shape JSON.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::constants::{HEADER_LISTINGS, LISTINGS_NO_FILTERS};
use crate::search::SearchParams;
use crate::ui::core::{actions::Action, Component};

pub struct ListingsComponent {
    params: Option<SearchParams>,
}

impl Default for ListingsComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingsComponent {
    pub fn new() -> Self {
        Self { params: None }
    }

    pub fn update_data(&mut self, params: SearchParams) {
        self.params = Some(params);
    }
}

impl Component for ListingsComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Action::NavigateBack,
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", HEADER_LISTINGS))
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .style(Style::default().fg(Color::Gray));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let Some(params) = &self.params else {
            return;
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // filter summary
                Constraint::Min(0),    // wire record
            ])
            .split(inner);

        let summary = if *params == SearchParams::all_listings() {
            LISTINGS_NO_FILTERS.to_string()
        } else {
            params.summary()
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                summary,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            rows[0],
        );

        let record = serde_json::to_string_pretty(params).unwrap_or_else(|_| "{}".to_string());
        let body = Paragraph::new(format!("Search parameters sent:\n\n{record}"))
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: false });
        f.render_widget(body, rows[1]);
    }
}
