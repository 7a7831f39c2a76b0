//! Date-range selection state machine.
//!
//! Converts a stream of single-day "tap" events into a two-endpoint,
//! inclusive date range. This is deliberately free of any rendering
//! dependency so the transition rules can be tested on their own.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The two endpoints of the active date-range selection.
///
/// Invariant: whenever `end` is set, `start` is set and `end >= start`.
/// Only the boundary dates are stored; days strictly inside the range are
/// computed on demand (see [`SelectionState::contains`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Observable phase of the selection machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// No endpoint selected yet.
    Empty,
    /// Only `start` is set.
    PartialStart,
    /// Both endpoints are set.
    Complete,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one day-tap event.
    ///
    /// Rules, evaluated in order:
    /// 1. no start yet → the tap begins a new range;
    /// 2. start but no end → a tap before the start re-anchors the range,
    ///    any other tap (including the start itself) completes it;
    /// 3. both set → the tap discards the old range and begins a new one.
    ///
    /// Every input is accepted; there is no error case and no bounds check.
    pub fn select_day(&mut self, date: NaiveDate) -> Self {
        match (self.start, self.end) {
            (None, _) => {
                self.start = Some(date);
                self.end = None;
            }
            (Some(start), None) => {
                if date < start {
                    self.start = Some(date);
                    self.end = None;
                } else {
                    self.end = Some(date);
                }
            }
            (Some(_), Some(_)) => {
                self.start = Some(date);
                self.end = None;
            }
        }
        *self
    }

    pub fn phase(&self) -> SelectionPhase {
        match (self.start, self.end) {
            (None, _) => SelectionPhase::Empty,
            (Some(_), None) => SelectionPhase::PartialStart,
            (Some(_), Some(_)) => SelectionPhase::Complete,
        }
    }

    /// Whether `date` falls strictly between the two endpoints.
    ///
    /// Boundary days are not "contained"; they carry their own highlight
    /// tags (see [`crate::search::highlight`]).
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => date > start && date < end,
            _ => false,
        }
    }

    /// The completed `(start, end)` pair, if the selection is complete.
    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}
