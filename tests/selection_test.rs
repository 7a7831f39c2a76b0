use chrono::NaiveDate;
use rentscout::{SelectionPhase, SelectionState};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_single_tap_starts_range() {
    for day in [date(2024, 6, 10), date(1999, 1, 1), date(2030, 12, 31)] {
        let mut selection = SelectionState::new();
        selection.select_day(day);
        assert_eq!(selection.start, Some(day));
        assert_eq!(selection.end, None);
        assert_eq!(selection.phase(), SelectionPhase::PartialStart);
    }
}

#[test]
fn test_forward_tap_completes_range() {
    let mut selection = SelectionState::new();
    selection.select_day(date(2024, 6, 10));
    selection.select_day(date(2024, 6, 15));
    assert_eq!(selection.start, Some(date(2024, 6, 10)));
    assert_eq!(selection.end, Some(date(2024, 6, 15)));
    assert_eq!(selection.phase(), SelectionPhase::Complete);
}

#[test]
fn test_equal_tap_makes_single_day_range() {
    let mut selection = SelectionState::new();
    selection.select_day(date(2024, 6, 10));
    selection.select_day(date(2024, 6, 10));
    assert_eq!(selection.range(), Some((date(2024, 6, 10), date(2024, 6, 10))));
}

#[test]
fn test_backward_tap_reanchors() {
    let mut selection = SelectionState::new();
    selection.select_day(date(2024, 6, 15));
    selection.select_day(date(2024, 6, 10));
    assert_eq!(selection.start, Some(date(2024, 6, 10)));
    assert_eq!(selection.end, None);
    assert_eq!(selection.phase(), SelectionPhase::PartialStart);
}

#[test]
fn test_tap_after_complete_starts_new_range() {
    let mut selection = SelectionState::new();
    selection.select_day(date(2024, 6, 10));
    selection.select_day(date(2024, 6, 15));
    // Any date restarts, whether inside, before, or after the old range
    for day in [date(2024, 6, 12), date(2024, 6, 1), date(2024, 7, 20)] {
        let mut restarted = selection;
        restarted.select_day(day);
        assert_eq!(restarted.start, Some(day));
        assert_eq!(restarted.end, None);
        assert_eq!(restarted.phase(), SelectionPhase::PartialStart);
    }
}

#[test]
fn test_contains_is_strictly_interior() {
    let mut selection = SelectionState::new();
    selection.select_day(date(2024, 6, 10));
    selection.select_day(date(2024, 6, 13));
    assert!(!selection.contains(date(2024, 6, 10)));
    assert!(selection.contains(date(2024, 6, 11)));
    assert!(selection.contains(date(2024, 6, 12)));
    assert!(!selection.contains(date(2024, 6, 13)));
    assert!(!selection.contains(date(2024, 6, 9)));
    assert!(!selection.contains(date(2024, 6, 14)));
}

#[test]
fn test_contains_is_empty_until_complete() {
    let mut selection = SelectionState::new();
    assert!(!selection.contains(date(2024, 6, 11)));
    selection.select_day(date(2024, 6, 10));
    assert!(!selection.contains(date(2024, 6, 11)));
}

#[test]
fn test_ordering_invariant_over_tap_sequences() {
    // Exhaustive three-tap sequences over a small window: the invariant
    // end >= start must hold after every single tap.
    let window: Vec<NaiveDate> = (1..=10).map(|d| date(2024, 6, d)).collect();
    for &a in &window {
        for &b in &window {
            for &c in &window {
                let mut selection = SelectionState::new();
                for tap in [a, b, c] {
                    selection.select_day(tap);
                    if let (Some(start), Some(end)) = (selection.start, selection.end) {
                        assert!(end >= start, "inverted range after taps {a} {b} {c}");
                    }
                    assert!(selection.start.is_some() || selection.end.is_none());
                }
            }
        }
    }
}

#[test]
fn test_selection_state_serializes() {
    let mut selection = SelectionState::new();
    selection.select_day(date(2024, 6, 10));
    selection.select_day(date(2024, 6, 15));
    let json = serde_json::to_value(selection).unwrap();
    assert_eq!(json["start"], "2024-06-10");
    assert_eq!(json["end"], "2024-06-15");
}
