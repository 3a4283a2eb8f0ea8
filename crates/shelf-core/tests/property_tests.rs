use proptest::prelude::*;
use shelf_catalog::ProductDraft;
use shelf_core::{FormField, Key, UiEvent};
use shelf_storage::CatalogStore;
use shelf_test_utils::{controller_with_memory_store, submit_product};
use std::time::{Duration, Instant};

fn filter_event() -> impl Strategy<Value = UiEvent> {
    prop_oneof![
        "[a-zA-Z ]{0,6}".prop_map(UiEvent::SearchInput),
        Just(UiEvent::SearchClicked),
        Just(UiEvent::SearchKeyUp(Key::Enter)),
        Just(UiEvent::SearchKeyUp(Key::Other)),
        prop_oneof![Just(String::new()), "[0-9]{1,7}", Just("abc".to_string())]
            .prop_map(UiEvent::PriceMinInput),
        prop_oneof![Just(String::new()), "[0-9]{1,7}"].prop_map(UiEvent::PriceMaxInput),
        prop_oneof![
            Just("none"),
            Just("name-asc"),
            Just("price-asc"),
            Just("price-desc"),
            Just("bogus"),
        ]
        .prop_map(|s| UiEvent::SortChanged(s.to_string())),
        Just(UiEvent::Tick),
    ]
}

fn form_event() -> impl Strategy<Value = UiEvent> {
    prop_oneof![
        Just(UiEvent::AddProductClicked),
        "[a-z]{0,8}".prop_map(|s| UiEvent::FieldInput(FormField::Name, s)),
        "[0-9.-]{0,5}".prop_map(|s| UiEvent::FieldInput(FormField::Price, s)),
        "[a-z ]{0,8}".prop_map(|s| UiEvent::FieldInput(FormField::Description, s)),
        prop_oneof![
            Just(String::new()),
            Just("nope".to_string()),
            Just("https://x.io/a.png".to_string()),
        ]
        .prop_map(|s| UiEvent::FieldInput(FormField::ImageUrl, s)),
        Just(UiEvent::Submit),
        Just(UiEvent::FormTransitionEnd),
    ]
}

proptest! {
    #[test]
    fn prop_filter_events_never_touch_catalog(
        events in prop::collection::vec(filter_event(), 0..24)
    ) {
        let (mut controller, memory) = controller_with_memory_store();
        let catalog = controller.catalog().clone();
        let mut now = Instant::now();

        for event in events {
            now += Duration::from_millis(100);
            controller.handle(event, now);
        }

        prop_assert_eq!(controller.catalog(), &catalog);
        prop_assert_eq!(CatalogStore::new(memory).load(), Some(catalog));
        prop_assert_eq!(controller.list().len(), 3);
    }

    #[test]
    fn prop_cancel_then_transition_end_leaves_form_clean(
        events in prop::collection::vec(form_event(), 0..16)
    ) {
        let (mut controller, _) = controller_with_memory_store();
        let now = Instant::now();

        for event in events {
            controller.handle(event, now);
        }
        controller.handle(UiEvent::CancelClicked, now);
        controller.handle(UiEvent::FormTransitionEnd, now);

        prop_assert!(controller.form().is_hidden());
        prop_assert!(controller.form().fields.is_empty());
        prop_assert_eq!(controller.form().error(), None);
    }

    #[test]
    fn prop_accepted_submissions_stack_newest_first(
        submissions in prop::collection::vec(("[a-z]{0,6}", "-?[0-9]{1,4}"), 1..10)
    ) {
        let (mut controller, memory) = controller_with_memory_store();
        let mut accepted = Vec::new();

        for (name, price) in &submissions {
            let expected = ProductDraft::new(name.as_str(), price.as_str()).validate();
            let result = submit_product(&mut controller, name, price, "", "");
            prop_assert_eq!(result.is_ok(), expected.is_ok());
            if let Ok(product) = expected {
                accepted.push(product);
            }
        }

        let catalog = controller.catalog();
        prop_assert_eq!(catalog.len(), 3 + accepted.len());
        for (product, expected) in catalog.iter().zip(accepted.iter().rev()) {
            prop_assert_eq!(product, expected);
        }
        let loaded = CatalogStore::new(memory).load();
        prop_assert_eq!(loaded.as_ref(), Some(catalog));
    }
}
