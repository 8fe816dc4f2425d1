//! Display Helpers
//!
//! Pure functions deriving display text and classes from state.

use crate::domain::{ActivityType, ACTIVITY_TYPES};
use crate::state::FormMode;

/// `1 item` / `N items`
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

/// Price with two decimals after the currency label, e.g. `RM 15.00`
pub fn format_price(currency: &str, price: f64) -> String {
    format!("{} {:.2}", currency, price)
}

/// Badge text and class for the booking flag
pub fn booking_badge(booking_required: bool) -> (&'static str, &'static str) {
    if booking_required {
        ("Booking Required", "badge badge-amber")
    } else {
        ("No Booking", "badge badge-green")
    }
}

pub fn submit_label(mode: &FormMode) -> &'static str {
    match mode {
        FormMode::Creating => "Add to List",
        FormMode::Editing { .. } => "Update Todo",
    }
}

pub fn row_class(completed: bool) -> &'static str {
    if completed { "todo-row completed" } else { "todo-row" }
}

/// Strikethrough class for completed activity names
pub fn activity_class(completed: bool) -> &'static str {
    if completed { "activity-name done" } else { "activity-name" }
}

/// Options for the category select, paired with their selected state.
///
/// An unrecognized current type gets its own leading option so the select
/// shows what the draft holds and any known choice is a real change.
pub fn category_options(current: &ActivityType) -> Vec<(ActivityType, bool)> {
    let mut options = Vec::with_capacity(ACTIVITY_TYPES.len() + 1);
    if let ActivityType::Other(_) = current {
        options.push((current.clone(), true));
    }
    options.extend(ACTIVITY_TYPES.into_iter().map(|kind| {
        let selected = &kind == current;
        (kind, selected)
    }));
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TodoId;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0), "0 items");
        assert_eq!(count_label(1), "1 item");
        assert_eq!(count_label(2), "2 items");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("RM", 15.0), "RM 15.00");
        assert_eq!(format_price("RM", 0.0), "RM 0.00");
        assert_eq!(format_price("$", 3.456), "$ 3.46");
    }

    #[test]
    fn test_submit_label_follows_mode() {
        assert_eq!(submit_label(&FormMode::Creating), "Add to List");
        let editing = FormMode::Editing { target: TodoId::from("x") };
        assert_eq!(submit_label(&editing), "Update Todo");
    }

    #[test]
    fn test_booking_badge() {
        assert_eq!(booking_badge(true).0, "Booking Required");
        assert_eq!(booking_badge(false).0, "No Booking");
    }

    #[test]
    fn test_completed_styling() {
        assert_eq!(row_class(true), "todo-row completed");
        assert_eq!(row_class(false), "todo-row");
        assert_eq!(activity_class(true), "activity-name done");
        assert_eq!(activity_class(false), "activity-name");
    }

    #[test]
    fn test_category_options_known_type() {
        let options = category_options(&ActivityType::Music);
        assert_eq!(options.len(), 9);
        let selected: Vec<&ActivityType> = options.iter().filter(|(_, s)| *s).map(|(k, _)| k).collect();
        assert_eq!(selected, vec![&ActivityType::Music]);
    }

    #[test]
    fn test_category_options_unknown_type_gets_own_option() {
        let pottery = ActivityType::from_str("pottery");
        let options = category_options(&pottery);
        assert_eq!(options.len(), 10);
        assert_eq!(options[0], (pottery, true));
        assert!(options[1..].iter().all(|(_, selected)| !selected));
        assert_eq!(options[1].0, ActivityType::Education);
    }
}
