//! Core UI functionality for the rentscout application.
//!
//! The fundamental building blocks the components sit on:
//!
//! - [`actions`] - Action definitions and focus handling
//! - [`component`] - Base component trait
//! - [`event_handler`] - Keyboard/mouse input polling
//!
//! Components translate input into [`Action`]s; the app component applies
//! them to the single owned state struct. All transitions are synchronous.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, FocusTarget};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
