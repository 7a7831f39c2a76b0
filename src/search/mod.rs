//! The search core: selection state machine, highlight derivation, and
//! parameter assembly. Everything in here is pure and rendering-free.

pub mod form;
pub mod highlight;
pub mod params;
pub mod selection;

pub use form::{FormState, Gearbox};
pub use highlight::{highlight_map, DayHighlight};
pub use params::SearchParams;
pub use selection::{SelectionPhase, SelectionState};
