//! Month-grid calendar component.
//!
//! Renders one month at a time, keeps a movable day cursor, and turns
//! Enter (or a mouse click on a day cell) into a day-tap action. All
//! period styling is driven by the highlight map derived from the
//! selection state; the component itself never decides what a tap means.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::config::Config;
use crate::constants::HEADER_DATES;
use crate::search::{highlight_map, DayHighlight, SelectionPhase, SelectionState};
use crate::ui::core::{actions::Action, Component};
use crate::utils::{color, datetime};

/// Width of one day cell in columns
const CELL_WIDTH: u16 = 4;

pub struct CalendarComponent {
    /// First day of the month currently on screen
    month: NaiveDate,
    /// Day the keyboard cursor sits on
    cursor: NaiveDate,
    today: NaiveDate,
    week_start: Weekday,
    selection: SelectionState,
    marked: HashMap<String, DayHighlight>,
    highlight_color: String,
    highlight_text_color: String,
    date_format: String,
    show_range_summary: bool,
    focused: bool,
    /// Day-grid area from the last render, for mouse hit testing
    grid_area: Option<Rect>,
}

impl CalendarComponent {
    pub fn new(config: &Config) -> Self {
        let today = datetime::today();
        Self {
            month: datetime::first_of_month(today),
            cursor: today,
            today,
            week_start: config.week_start(),
            selection: SelectionState::new(),
            marked: HashMap::new(),
            highlight_color: config.display.highlight_color.clone(),
            highlight_text_color: config.display.highlight_text_color.clone(),
            date_format: config.display.date_format.clone(),
            show_range_summary: config.display.show_range_summary,
            focused: true,
            grid_area: None,
        }
    }

    /// Refresh the derived highlight map from the current selection.
    pub fn update_data(&mut self, selection: SelectionState) {
        self.selection = selection;
        self.marked = highlight_map(&selection, &self.highlight_color, &self.highlight_text_color);
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    fn move_cursor(&mut self, days: i64) {
        self.cursor = self.cursor + Duration::days(days);
        self.month = datetime::first_of_month(self.cursor);
    }

    fn move_month(&mut self, delta: i32) {
        self.month = datetime::first_of_month(datetime::add_months(self.month, delta));
        self.cursor = datetime::clamp_to_month(self.cursor, self.month);
    }

    /// Map a click position to the day cell under it, if any.
    pub fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        let Some(grid) = self.grid_area else {
            return Action::None;
        };
        let (x, y) = (mouse.column, mouse.row);
        if x < grid.x || x >= grid.x + grid.width || y < grid.y || y >= grid.y + grid.height {
            return Action::None;
        }

        let column = ((x - grid.x) / CELL_WIDTH) as u32;
        let week = (y - grid.y) as u32;
        let offset = datetime::weekday_column(self.month, self.week_start);
        let cell = week * 7 + column;
        if cell < offset {
            return Action::None;
        }
        let day = cell - offset + 1;
        if day > datetime::days_in_month(self.month) {
            return Action::None;
        }
        match self.month.with_day(day) {
            Some(date) => {
                self.cursor = date;
                log::debug!("Calendar: clicked {}", datetime::format_ymd(date));
                Action::SelectDay(date)
            }
            None => Action::None,
        }
    }

    fn day_style(&self, date: NaiveDate) -> Style {
        let mut style = Style::default();

        if let Some(mark) = self.marked.get(&datetime::format_ymd(date)) {
            style = style
                .fg(color::convert_highlight_color(&mark.text_color))
                .bg(color::convert_highlight_color(&mark.color))
                .add_modifier(Modifier::BOLD);
        } else if self.selection.contains(date) {
            style = style.fg(color::convert_highlight_color(&self.highlight_color));
        }

        if date == self.today {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if self.focused && date == self.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }

        style
    }

    fn summary_line(&self) -> Option<String> {
        if !self.show_range_summary {
            return None;
        }
        match self.selection.phase() {
            SelectionPhase::Complete => {
                let (start, end) = self.selection.range()?;
                Some(format!(
                    "Selected: {} → {}",
                    start.format(&self.date_format),
                    end.format(&self.date_format)
                ))
            }
            SelectionPhase::PartialStart => {
                let start = self.selection.start?;
                Some(format!("Start: {} — tap an end date", datetime::format_relative(start)))
            }
            SelectionPhase::Empty => None,
        }
    }
}

impl Component for CalendarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.move_cursor(-1);
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.move_cursor(1);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-7);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(7);
                Action::None
            }
            KeyCode::PageUp | KeyCode::Char('[') => {
                self.move_month(-1);
                Action::None
            }
            KeyCode::PageDown | KeyCode::Char(']') => {
                self.move_month(1);
                Action::None
            }
            KeyCode::Home | KeyCode::Char('t') => {
                self.cursor = self.today;
                self.month = datetime::first_of_month(self.today);
                Action::None
            }
            KeyCode::Enter => {
                log::debug!("Calendar: tapped {}", datetime::format_ymd(self.cursor));
                Action::SelectDay(self.cursor)
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = if self.focused { Color::Cyan } else { Color::Gray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", HEADER_DATES))
            .title_style(Style::default().fg(border_color).add_modifier(Modifier::BOLD))
            .style(Style::default().fg(border_color));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let mut lines = Vec::new();

        // Month title and weekday header
        lines.push(Line::from(Span::styled(
            datetime::month_title(self.month),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
        let header: Vec<Span> = datetime::weekday_labels(self.week_start)
            .iter()
            .map(|label| Span::styled(format!("{:>3} ", label), Style::default().fg(Color::DarkGray)))
            .collect();
        lines.push(Line::from(header));

        // Day grid
        let offset = datetime::weekday_column(self.month, self.week_start);
        let days = datetime::days_in_month(self.month);
        let mut week: Vec<Span> = vec![Span::raw(" ".repeat((CELL_WIDTH as usize) * offset as usize))];
        for day in 1..=days {
            if let Some(date) = self.month.with_day(day) {
                week.push(Span::styled(format!("{:>3} ", day), self.day_style(date)));
                if datetime::weekday_column(date, self.week_start) == 6 {
                    lines.push(Line::from(std::mem::take(&mut week)));
                }
            }
        }
        if !week.is_empty() {
            lines.push(Line::from(week));
        }

        // The grid starts two lines in (title + header)
        let grid_height = (lines.len() as u16).saturating_sub(2);
        self.grid_area = Some(Rect::new(
            inner.x,
            inner.y + 2,
            (CELL_WIDTH * 7).min(inner.width),
            grid_height.min(inner.height.saturating_sub(2)),
        ));

        if let Some(summary) = self.summary_line() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                summary,
                Style::default()
                    .fg(color::convert_highlight_color(&self.highlight_color))
                    .add_modifier(Modifier::BOLD),
            )));
        }

        f.render_widget(Paragraph::new(lines), inner);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
