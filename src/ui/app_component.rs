//! Top-level application component: owns the form state, routes input to
//! the focused component, and applies every [`Action`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::config::Config;
use crate::logger::Logger;
use crate::search::{FormState, SearchParams};
use crate::ui::components::{
    CalendarComponent, HelpPanel, ListingsComponent, SearchFormComponent, StatusBar,
};
use crate::ui::core::{actions::Action, event_handler::EventType, Component, FocusTarget};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime;

/// Which screen is on display.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Search,
    /// The listings screen, carrying the parameter record it was
    /// navigated to with.
    Listings(SearchParams),
}

/// Application state separate from UI concerns.
///
/// The form (including the date-range selection) lives here for the whole
/// run: navigating to the listings and back never resets it, so a repeated
/// search reuses the previous values.
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: FormState,
    pub focus: FocusTarget,
    pub screen: Screen,
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: FormState::new(),
            focus: FocusTarget::default(),
            screen: Screen::Search,
            show_help: false,
        }
    }
}

pub struct AppComponent {
    // Component composition
    calendar: CalendarComponent,
    search_form: SearchFormComponent,
    listings: ListingsComponent,

    // Application state
    state: AppState,

    // Services
    logger: Logger,

    // Simple UI state
    calendar_width: u16,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config) -> Self {
        Self {
            calendar: CalendarComponent::new(config),
            search_form: SearchFormComponent::new(),
            listings: ListingsComponent::new(),
            state: AppState::default(),
            logger: Logger::new(),
            calendar_width: config.ui.calendar_width,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Feed one terminal event through the component hierarchy.
    pub fn handle_event(&mut self, event: EventType) {
        let action = match event {
            EventType::Key(key) => self.handle_key(key),
            EventType::Mouse(mouse) => self.handle_mouse(mouse),
            _ => Action::None,
        };
        self.handle_app_action(action);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.state.show_help {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::ShowHelp(false),
                _ => Action::None,
            };
        }

        match self.state.screen {
            Screen::Listings(_) => match self.handle_global_key(key) {
                Action::None => self.listings.handle_key_events(key),
                action => action,
            },
            Screen::Search => {
                let action = self.handle_global_key(key);
                if action != Action::None {
                    return action;
                }
                if self.state.focus == FocusTarget::Calendar {
                    self.calendar.handle_key_events(key)
                } else {
                    self.search_form.handle_key_events(key)
                }
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        if self.state.show_help || self.state.screen != Screen::Search {
            return Action::None;
        }
        self.calendar.handle_mouse_events(mouse)
    }

    /// Keyboard shortcuts that apply regardless of the focused component.
    /// Plain letters stay off this list while a text field is focused.
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        let editing = matches!(self.state.screen, Screen::Search) && self.state.focus.is_text_field();

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Search,
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::ShowAllListings,
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrevious,
            KeyCode::Char('q') if !editing => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') if !editing => Action::ShowHelp(true),
            KeyCode::Esc if matches!(self.state.screen, Screen::Search) => {
                self.logger.log("Global key: Esc - quitting application".to_string());
                Action::Quit
            }
            _ => Action::None,
        }
    }

    /// Apply an action to the owned state. Every state change in the
    /// application funnels through here.
    pub fn handle_app_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::FocusNext => {
                self.set_focus(self.state.focus.next());
            }
            Action::FocusPrevious => {
                self.set_focus(self.state.focus.previous());
            }
            Action::Input(c) => self.apply_input(c),
            Action::Backspace => self.apply_backspace(),
            Action::TogglePets => {
                self.state.form.pets_allowed = !self.state.form.pets_allowed;
                log::debug!("Form: pets_allowed = {}", self.state.form.pets_allowed);
            }
            Action::SelectDay(date) => {
                let selection = self.state.form.selection.select_day(date);
                self.logger.log(format!(
                    "Calendar: tapped {} -> {:?}",
                    datetime::format_ymd(date),
                    selection.phase()
                ));
                log::info!("Calendar: selection is now {:?}", selection);
            }
            Action::Search => {
                let params = SearchParams::assemble(&self.state.form);
                self.navigate_to_listings(params);
            }
            Action::ShowAllListings => {
                self.navigate_to_listings(SearchParams::all_listings());
            }
            Action::NavigateBack => {
                // Back to the search screen; the form keeps its values
                self.logger.log("Navigation: back to search".to_string());
                self.state.screen = Screen::Search;
            }
            Action::ShowHelp(visible) => {
                self.state.show_help = visible;
            }
            Action::None => {}
        }

        self.sync_component_data();
    }

    fn navigate_to_listings(&mut self, params: SearchParams) {
        match serde_json::to_string(&params) {
            Ok(record) => {
                self.logger.log(format!("Navigation: listings with {record}"));
                log::info!("Navigation: listings with {record}");
            }
            Err(e) => log::warn!("Navigation: could not serialize params: {e}"),
        }
        self.listings.update_data(params.clone());
        self.state.screen = Screen::Listings(params);
    }

    fn set_focus(&mut self, focus: FocusTarget) {
        if self.state.focus == FocusTarget::Calendar {
            self.calendar.on_blur();
        }
        self.state.focus = focus;
        if focus == FocusTarget::Calendar {
            self.calendar.on_focus();
        }
    }

    fn apply_input(&mut self, c: char) {
        let form = &mut self.state.form;
        match self.state.focus {
            FocusTarget::Location => form.location.push(c),
            // The seats field asks for a numeric keyboard: digits only
            FocusTarget::Seats if c.is_ascii_digit() => form.seats.push(c),
            FocusTarget::Gearbox => {
                let mut input = form.gearbox_input.clone();
                input.push(c);
                form.set_gearbox_input(input);
            }
            _ => {}
        }
    }

    fn apply_backspace(&mut self) {
        let form = &mut self.state.form;
        match self.state.focus {
            FocusTarget::Location => {
                form.location.pop();
            }
            FocusTarget::Seats => {
                form.seats.pop();
            }
            FocusTarget::Gearbox => {
                let mut input = form.gearbox_input.clone();
                input.pop();
                form.set_gearbox_input(input);
            }
            _ => {}
        }
    }

    /// Push the owned state into the rendering components.
    fn sync_component_data(&mut self) {
        self.calendar.update_data(self.state.form.selection);
        self.search_form.update_data(self.state.form.clone(), self.state.focus);
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let layout = LayoutManager::main_layout(area);

        match &self.state.screen {
            Screen::Search => {
                let (heading, content) = LayoutManager::heading_layout(layout[0]);
                f.render_widget(
                    Paragraph::new(crate::constants::HEADER_SEARCH)
                        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                    heading,
                );
                let panes = LayoutManager::search_layout(content, self.calendar_width);
                self.calendar.render(f, panes[0]);
                self.search_form.render(f, panes[1]);
            }
            Screen::Listings(_) => {
                self.listings.render(f, layout[0]);
            }
        }

        StatusBar::render(f, layout[1], &self.state);

        if self.state.show_help {
            HelpPanel::render(f, &self.logger.get_logs());
        }
    }
}
