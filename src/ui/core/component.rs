use super::actions::Action;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Common surface for the screen's interactive widgets: translate key
/// events into [`Action`]s and paint themselves into a rect. Components
/// never mutate shared state directly; every state change travels through
/// an action.
pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn render(&mut self, f: &mut Frame, rect: Rect);

    // Optional lifecycle methods
    fn on_focus(&mut self) {}
    fn on_blur(&mut self) {}
}
