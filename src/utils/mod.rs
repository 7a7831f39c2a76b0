//! Utility modules for the rentscout application.
//!
//! # Available Utilities
//!
//! - [`color`] - Configured color strings to terminal colors
//! - [`datetime`] - Date formatting, parsing, and month-grid arithmetic

pub mod color;
pub mod datetime;
