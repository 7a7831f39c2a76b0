//! Filter form component: location, seats, gearbox, and the pets switch.
//!
//! The form never owns the canonical field values; it renders a copy of the
//! form state and translates keystrokes into edit actions for the app
//! component to apply.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::constants::{
    HEADER_FILTERS, LABEL_PETS, PLACEHOLDER_GEARBOX, PLACEHOLDER_LOCATION, PLACEHOLDER_SEATS,
};
use crate::search::FormState;
use crate::ui::core::{actions::Action, Component, FocusTarget};

pub struct SearchFormComponent {
    form: FormState,
    focus: FocusTarget,
}

impl Default for SearchFormComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchFormComponent {
    pub fn new() -> Self {
        Self {
            form: FormState::new(),
            focus: FocusTarget::default(),
        }
    }

    pub fn update_data(&mut self, form: FormState, focus: FocusTarget) {
        self.form = form;
        self.focus = focus;
    }

    /// Input paragraph with a visual block cursor on the focused field
    fn input_paragraph<'a>(&self, value: &'a str, placeholder: &'a str, target: FocusTarget) -> Paragraph<'a> {
        let focused = self.focus == target;
        let display = if focused {
            format!("{value}█")
        } else if value.is_empty() {
            placeholder.to_string()
        } else {
            value.to_string()
        };

        let text_color = if value.is_empty() && !focused {
            Color::DarkGray
        } else {
            Color::White
        };
        let border_color = if focused { Color::Cyan } else { Color::Gray };

        Paragraph::new(display)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(format!(" {} ", placeholder))
                    .title_style(Style::default().fg(border_color))
                    .style(Style::default().fg(border_color)),
            )
            .style(Style::default().fg(text_color))
    }

    fn pets_line(&self) -> Line<'_> {
        let focused = self.focus == FocusTarget::Pets;
        let switch = if self.form.pets_allowed { "[x]" } else { "[ ]" };
        let style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Line::from(vec![
            Span::styled(switch, style),
            Span::styled(format!(" {}", LABEL_PETS), style),
            if focused {
                Span::styled("  (Space to toggle)", Style::default().fg(Color::DarkGray))
            } else {
                Span::raw("")
            },
        ])
    }

    fn gearbox_hint(&self) -> Line<'static> {
        let hint = match self.form.gearbox.as_str() {
            Some(value) => format!("filter: {value}"),
            None => "filter: not set".to_string(),
        };
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)))
    }
}

impl Component for SearchFormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::Search,
            KeyCode::Backspace if self.focus.is_text_field() => Action::Backspace,
            KeyCode::Char(' ') if self.focus == FocusTarget::Pets => Action::TogglePets,
            KeyCode::Char(c) if self.focus.is_text_field() => Action::Input(c),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", HEADER_FILTERS))
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .style(Style::default().fg(Color::Gray));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // location
                Constraint::Length(3), // seats
                Constraint::Length(3), // gearbox
                Constraint::Length(1), // gearbox coercion hint
                Constraint::Length(1), // pets switch
                Constraint::Min(0),
                Constraint::Length(1), // instructions
            ])
            .split(inner);

        f.render_widget(
            self.input_paragraph(&self.form.location, PLACEHOLDER_LOCATION, FocusTarget::Location),
            rows[0],
        );
        f.render_widget(
            self.input_paragraph(&self.form.seats, PLACEHOLDER_SEATS, FocusTarget::Seats),
            rows[1],
        );
        f.render_widget(
            self.input_paragraph(&self.form.gearbox_input, PLACEHOLDER_GEARBOX, FocusTarget::Gearbox),
            rows[2],
        );
        f.render_widget(Paragraph::new(self.gearbox_hint()), rows[3]);
        f.render_widget(Paragraph::new(self.pets_line()), rows[4]);

        let instructions = Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::styled(" Search", Style::default().fg(Color::Gray)),
            Span::styled(" • ", Style::default().fg(Color::Gray)),
            Span::styled("Ctrl+A", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(" All listings", Style::default().fg(Color::Gray)),
        ]);
        f.render_widget(Paragraph::new(instructions).alignment(Alignment::Center), rows[6]);
    }
}
