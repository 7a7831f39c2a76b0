//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// UI Section Headers
pub const HEADER_SEARCH: &str = "🔍 Search listings";
pub const HEADER_DATES: &str = "📅 Pick dates";
pub const HEADER_FILTERS: &str = "⚙️  Other filters";
pub const HEADER_LISTINGS: &str = "🚗 Listings";

// Field labels and placeholders
pub const PLACEHOLDER_LOCATION: &str = "Location (e.g. Tallinn)";
pub const PLACEHOLDER_SEATS: &str = "Number of seats";
pub const PLACEHOLDER_GEARBOX: &str = "Gearbox (Automatic/Manual)";
pub const LABEL_PETS: &str = "Pets allowed";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const LISTINGS_NO_FILTERS: &str = "Showing everything — no filters applied";

// Highlight defaults for the calendar period marking
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#007AFF";
pub const DEFAULT_HIGHLIGHT_TEXT_COLOR: &str = "#ffffff";

// UI Layout Constants
/// Minimum calendar pane width in columns
pub const CALENDAR_MIN_WIDTH: u16 = 24;
/// Default calendar pane width in columns
pub const CALENDAR_DEFAULT_WIDTH: u16 = 28;
/// Maximum calendar pane width in columns
pub const CALENDAR_MAX_WIDTH: u16 = 60;
/// Minimum form pane width to preserve usability
pub const FORM_MIN_WIDTH: u16 = 24;
