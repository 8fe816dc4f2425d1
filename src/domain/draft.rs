//! Todo Draft
//!
//! The in-progress, not-yet-saved form contents.

use super::accessibility::Accessibility;
use super::activity_type::ActivityType;

/// Form-backed draft of a to-do (no id, no completion flag)
#[derive(Debug, Clone, PartialEq)]
pub struct TodoDraft {
    pub activity: String,
    pub price: f64,
    pub activity_type: ActivityType,
    pub booking_required: bool,
    pub accessibility: Accessibility,
}

/// A single form field update
#[derive(Debug, Clone, PartialEq)]
pub enum DraftField {
    Activity(String),
    Price(f64),
    Type(ActivityType),
    BookingRequired(bool),
    Accessibility(f64),
}

impl Default for TodoDraft {
    fn default() -> Self {
        Self {
            activity: String::new(),
            price: 0.0,
            activity_type: ActivityType::Education,
            booking_required: false,
            accessibility: Accessibility::default(),
        }
    }
}

impl TodoDraft {
    /// Apply one field update, coercing values into range
    pub fn set(&mut self, field: DraftField) {
        match field {
            DraftField::Activity(text) => self.activity = text,
            DraftField::Price(price) => self.price = sanitize_price(price),
            DraftField::Type(kind) => self.activity_type = kind,
            DraftField::BookingRequired(flag) => self.booking_required = flag,
            DraftField::Accessibility(value) => self.accessibility = Accessibility::new(value),
        }
    }

    /// Whether the draft may be submitted
    pub fn is_submittable(&self) -> bool {
        !self.activity.trim().is_empty()
    }
}

/// Parse the raw price input. Empty, invalid and negative input become 0.
pub fn coerce_price(raw: &str) -> f64 {
    raw.trim().parse::<f64>().map(sanitize_price).unwrap_or(0.0)
}

/// Text the price input should switch to for `price`, or `None` when the
/// text already means that price (so half-typed input like `""` or `1e`
/// is left alone while the user types).
pub fn price_text_for(current: &str, price: f64) -> Option<String> {
    if coerce_price(current) == price {
        None
    } else {
        Some(price.to_string())
    }
}

fn sanitize_price(price: f64) -> f64 {
    if price.is_finite() && price > 0.0 {
        price
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let draft = TodoDraft::default();
        assert_eq!(draft.activity, "");
        assert_eq!(draft.price, 0.0);
        assert_eq!(draft.activity_type, ActivityType::Education);
        assert!(!draft.booking_required);
        assert_eq!(draft.accessibility.value(), 0.5);
    }

    #[test]
    fn test_blank_activity_not_submittable() {
        let mut draft = TodoDraft::default();
        assert!(!draft.is_submittable());
        draft.set(DraftField::Activity(" \t ".to_string()));
        assert!(!draft.is_submittable());
        draft.set(DraftField::Activity("Bake bread".to_string()));
        assert!(draft.is_submittable());
    }

    #[test]
    fn test_coerce_price() {
        assert_eq!(coerce_price("12.5"), 12.5);
        assert_eq!(coerce_price(" 3 "), 3.0);
        assert_eq!(coerce_price(""), 0.0);
        assert_eq!(coerce_price("abc"), 0.0);
        assert_eq!(coerce_price("-4"), 0.0);
        assert_eq!(coerce_price("inf"), 0.0);
    }

    #[test]
    fn test_price_text_kept_while_typing() {
        assert_eq!(price_text_for("", 0.0), None);
        assert_eq!(price_text_for("1e", 0.0), None);
        assert_eq!(price_text_for("1.50", 1.5), None);
    }

    #[test]
    fn test_price_text_follows_external_change() {
        // edit seeded a new price, or commit reset the draft
        assert_eq!(price_text_for("", 20.0), Some("20".to_string()));
        assert_eq!(price_text_for("15", 0.0), Some("0".to_string()));
    }

    #[test]
    fn test_set_clamps_numeric_fields() {
        let mut draft = TodoDraft::default();
        draft.set(DraftField::Price(-1.0));
        draft.set(DraftField::Accessibility(3.0));
        assert_eq!(draft.price, 0.0);
        assert_eq!(draft.accessibility, Accessibility::MAX);
    }
}
