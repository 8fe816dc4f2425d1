//! Repository Tests
//!
//! Codec and store behavior against the in-memory slot.

#[cfg(test)]
mod tests {
    use crate::domain::{Accessibility, ActivityType, Todo, TodoId};
    use crate::repository::{decode, encode, MemoryStore, StoreError, TodoStore};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn make_todo(id: &str, accessibility: f64, completed: bool) -> Todo {
        Todo {
            id: TodoId::from(id),
            activity: format!("Activity {}", id),
            price: 12.5,
            activity_type: ActivityType::Social,
            booking_required: completed,
            accessibility: Accessibility::new(accessibility),
            completed,
        }
    }

    #[test]
    fn test_round_trip_empty() {
        let store = MemoryStore::new();
        store.save(&[]).expect("save failed");
        assert_eq!(store.raw().as_deref(), Some("[]"));
        assert_eq!(store.load().expect("load failed"), Some(vec![]));
    }

    #[test]
    fn test_round_trip_single() {
        let store = MemoryStore::new();
        let todos = vec![make_todo("a", 0.0, false)];
        store.save(&todos).expect("save failed");
        assert_eq!(store.load().expect("load failed"), Some(todos));
    }

    #[test]
    fn test_round_trip_keeps_order_and_boundaries() {
        let store = MemoryStore::new();
        let todos = vec![
            make_todo("c", 1.0, true),
            make_todo("a", 0.0, false),
            make_todo("b", 0.5, true),
        ];
        store.save(&todos).expect("save failed");
        assert_eq!(store.load().expect("load failed"), Some(todos));
    }

    #[test]
    fn test_absent_slot_loads_none() {
        assert_eq!(MemoryStore::new().load().expect("load failed"), None);
    }

    #[test]
    fn test_malformed_slot() {
        for raw in ["", "null", "{\"id\":\"a\"}", "[{\"id\":\"a\"}]", "[1,2]"] {
            let result = MemoryStore::with_raw(raw).load();
            assert!(matches!(result, Err(StoreError::Malformed(_))), "accepted {:?}", raw);
        }
    }

    #[test]
    fn test_decodes_stored_layout() {
        let raw = r#"[{"id":"5f1c","activity":"Try pottery","price":30,"type":"pottery","bookingRequired":true,"accessibility":0.6,"completed":false}]"#;
        let todos = decode(raw).expect("decode failed");
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, TodoId::from("5f1c"));
        assert_eq!(todos[0].price, 30.0);
        assert_eq!(todos[0].activity_type, ActivityType::Other("pottery".to_string()));
        assert_eq!(todos[0].accessibility.value(), 0.6);

        let again = encode(&todos).expect("encode failed");
        assert!(again.contains(r#""type":"pottery""#));
    }

    fn arb_type() -> impl Strategy<Value = ActivityType> {
        prop_oneof![
            Just(ActivityType::Education),
            Just(ActivityType::Recreational),
            Just(ActivityType::Music),
            Just(ActivityType::Busywork),
            "[a-z]{3,10}".prop_map(ActivityType::from),
        ]
    }

    fn arb_todo() -> impl Strategy<Value = Todo> {
        (
            "[A-Za-z ]{1,20}",
            0.0f64..10_000.0,
            arb_type(),
            any::<bool>(),
            0u8..=10,
            any::<bool>(),
        )
            .prop_map(|(activity, price, activity_type, booking_required, tenths, completed)| Todo {
                id: TodoId::generate(),
                activity,
                price,
                activity_type,
                booking_required,
                accessibility: Accessibility::new(tenths as f64 / 10.0),
                completed,
            })
    }

    proptest! {
        #[test]
        fn prop_round_trip(todos in prop::collection::vec(arb_todo(), 0..8)) {
            let raw = encode(&todos).expect("encode failed");
            prop_assert_eq!(decode(&raw).expect("decode failed"), todos);
        }
    }
}
