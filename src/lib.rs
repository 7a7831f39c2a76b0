//! Rentscout - a terminal search screen for rental listings
//!
//! This library provides a small TUI: the user picks a date range on a
//! month calendar, fills in a few filters (location, seats, gearbox,
//! pets-allowed), and "navigates" to a listings screen carrying the
//! assembled search parameters. The date-range selection machine, the
//! highlight-map derivation, and the parameter assembly are pure and live
//! in [`search`]; the UI is built with Ratatui.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`search`] - Selection state machine and parameter assembly
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Date handling helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// The pure search core: selection, highlights, parameters
pub mod search;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling
pub mod utils;

// Re-export core types for convenient access
pub use search::{FormState, Gearbox, SearchParams, SelectionPhase, SelectionState};
