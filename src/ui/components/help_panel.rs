//! Help panel component

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::layout::LayoutManager;

/// Help panel component
pub struct HelpPanel;

const HELP_TEXT: &str = r"
RENTSCOUT - rental listings search

CALENDAR
--------
Arrows/hjkl Move the day cursor
[ / ]       Previous / next month (PgUp/PgDn work too)
t / Home    Jump to today
Enter       Tap the day under the cursor
            First tap starts a range, a later tap ends it;
            tapping before the start restarts the range.

FILTERS
-------
Tab/S-Tab   Cycle focus: calendar, location, seats, gearbox, pets
Space       Toggle pets-allowed (when focused)
Enter       Search with the current filters
Ctrl+A      All listings (no filters)

GENERAL
-------
Esc         Close this panel / go back / quit
q, Ctrl+C   Quit
";

impl HelpPanel {
    /// Render the help panel with the recent session log at the bottom
    pub fn render(f: &mut Frame, logs: &[String]) {
        let (help_width, help_height) = LayoutManager::help_panel_dimensions(f.area().width, f.area().height);
        let help_area = LayoutManager::centered_rect(help_width, help_height, f.area());
        f.render_widget(Clear, help_area);

        let mut lines: Vec<Line> = HELP_TEXT.lines().map(Line::from).collect();

        if !logs.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "RECENT ACTIVITY",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )));
            for entry in logs.iter().take(5) {
                lines.push(Line::from(Span::styled(
                    entry.clone(),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }

        let help = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Help — Esc to close ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(help, help_area);
    }
}
