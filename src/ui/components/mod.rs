//! Reusable UI components

pub mod calendar;
pub mod help_panel;
pub mod listings_screen;
pub mod search_form;
pub mod status_bar;

// Component exports
pub use calendar::CalendarComponent;
pub use help_panel::HelpPanel;
pub use listings_screen::ListingsComponent;
pub use search_form::SearchFormComponent;
pub use status_bar::StatusBar;
