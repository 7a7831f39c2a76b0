//! Derivation of per-day highlight descriptors from the selection state.
//!
//! The calendar widget consumes a map from ISO date string to a highlight
//! descriptor telling it how to paint each boundary day. Interior days are
//! not listed here; the widget tints them via
//! [`SelectionState::contains`](crate::search::SelectionState::contains).

use std::collections::HashMap;

use serde::Serialize;

use super::SelectionState;
use crate::utils::datetime;

/// Instructions for rendering one marked calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayHighlight {
    pub selected: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_range_start: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_range_end: bool,
    pub color: String,
    pub text_color: String,
}

impl DayHighlight {
    fn boundary(is_start: bool, is_end: bool, color: &str, text_color: &str) -> Self {
        Self {
            selected: true,
            is_range_start: is_start,
            is_range_end: is_end,
            color: color.to_string(),
            text_color: text_color.to_string(),
        }
    }
}

/// Build the boundary-day highlight map for the current selection.
///
/// The start date is tagged as the opening boundary and the end date as the
/// closing one. A single-day range produces one entry tagged as both.
pub fn highlight_map(
    selection: &SelectionState,
    color: &str,
    text_color: &str,
) -> HashMap<String, DayHighlight> {
    let mut marked = HashMap::new();

    match (selection.start, selection.end) {
        (Some(start), Some(end)) if start == end => {
            marked.insert(
                datetime::format_ymd(start),
                DayHighlight::boundary(true, true, color, text_color),
            );
        }
        (start, end) => {
            if let Some(start) = start {
                marked.insert(
                    datetime::format_ymd(start),
                    DayHighlight::boundary(true, false, color, text_color),
                );
            }
            if let Some(end) = end {
                marked.insert(
                    datetime::format_ymd(end),
                    DayHighlight::boundary(false, true, color, text_color),
                );
            }
        }
    }

    marked
}
