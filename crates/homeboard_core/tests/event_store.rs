use chrono::NaiveDate;
use homeboard_core::{
    sample_events, DateKey, Event, EventStore, EventType, EventValidationError, EventsByDate,
    MonthCursor, StoreChange, StoreError, TypeFilter,
};
use std::cell::RefCell;
use std::rc::Rc;

fn key(value: &str) -> DateKey {
    DateKey::parse(value).unwrap()
}

fn seeded() -> EventStore {
    EventStore::with_seed(sample_events()).unwrap()
}

fn ids(store: &EventStore, date: &str) -> Vec<u64> {
    store
        .events_for_date(key(date), TypeFilter::All)
        .iter()
        .map(|event| event.id)
        .collect()
}

#[test]
fn add_prepends_newest_event() {
    let mut store = seeded();
    let created = store
        .add_event(key("2025-11-20"), "Plumber", "2:00 PM", EventType::Task)
        .unwrap();

    let listed = store.events_for_date(key("2025-11-20"), TypeFilter::All);
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0], created);
    assert_eq!(listed[0].title, "Plumber");
    assert_eq!(listed[0].time, "2:00 PM");
    assert_eq!(listed[0].kind, EventType::Task);
    assert_eq!(listed[1].title, "Electrician Visit");
}

#[test]
fn add_creates_missing_date_key() {
    let mut store = EventStore::new();
    assert!(!store.contains_date(key("2026-01-01")));

    store
        .add_event(key("2026-01-01"), "New Year", "All Day", EventType::Reminder)
        .unwrap();
    assert!(store.contains_date(key("2026-01-01")));
    assert_eq!(store.len(), 1);
}

#[test]
fn add_rejects_blank_title_without_mutation() {
    let mut store = seeded();
    let err = store
        .add_event(key("2025-11-20"), "   ", "", EventType::Meeting)
        .unwrap_err();
    assert_eq!(err, StoreError::Validation(EventValidationError::EmptyTitle));
    assert_eq!(store.events(), &sample_events());
}

#[test]
fn ids_continue_after_seed_and_are_never_reused() {
    let mut store = seeded();
    let first = store
        .add_event(key("2025-11-21"), "Laundry", "", EventType::Task)
        .unwrap();
    assert_eq!(first.id, 4);

    store.delete_event(first.id, key("2025-11-21")).unwrap();
    let second = store
        .add_event(key("2025-11-21"), "Laundry again", "", EventType::Task)
        .unwrap();
    assert_eq!(second.id, 5);
}

#[test]
fn delete_removes_event_and_prunes_empty_date() {
    let mut store = seeded();
    let removed = store.delete_event(1, key("2025-11-20")).unwrap();
    assert_eq!(removed.title, "Electrician Visit");
    assert!(store.events_for_date(key("2025-11-20"), TypeFilter::All).is_empty());
    assert!(!store.contains_date(key("2025-11-20")));
}

#[test]
fn delete_keeps_date_with_remaining_events() {
    let mut store = seeded();
    store.delete_event(2, key("2025-11-22")).unwrap();
    assert_eq!(ids(&store, "2025-11-22"), vec![3]);
}

#[test]
fn delete_missing_id_is_noop() {
    let mut store = seeded();
    assert!(store.delete_event(99, key("2025-11-20")).is_none());
    assert!(store.delete_event(1, key("2025-11-22")).is_none());
    assert!(store.delete_event(1, key("2030-01-01")).is_none());
    assert_eq!(store.events(), &sample_events());
}

#[test]
fn update_same_date_keeps_position() {
    let mut store = seeded();
    let updated = store
        .update_event(
            3,
            key("2025-11-22"),
            "Mom's 60th Birthday",
            "Evening",
            EventType::Meeting,
            key("2025-11-22"),
        )
        .unwrap();

    let listed = store.events_for_date(key("2025-11-22"), TypeFilter::All);
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[1], updated);
    assert_eq!(listed[1].id, 3);
    assert_eq!(listed[1].title, "Mom's 60th Birthday");
    assert_eq!(listed[1].kind, EventType::Meeting);
}

#[test]
fn update_moves_event_and_prunes_old_date() {
    let mut store = seeded();
    store
        .update_event(
            1,
            key("2025-11-22"),
            "Electrician Visit",
            "11:00 AM",
            EventType::Meeting,
            key("2025-11-20"),
        )
        .unwrap();

    assert!(!store.contains_date(key("2025-11-20")));
    assert_eq!(ids(&store, "2025-11-22"), vec![1, 2, 3]);
    let (date, moved) = store.find(1).unwrap();
    assert_eq!(date, key("2025-11-22"));
    assert_eq!(moved.time, "11:00 AM");
}

#[test]
fn update_rejects_blank_title_without_mutation() {
    let mut store = seeded();
    let err = store
        .update_event(
            1,
            key("2025-11-25"),
            "",
            "",
            EventType::Task,
            key("2025-11-20"),
        )
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(store.events(), &sample_events());
}

#[test]
fn update_with_stale_old_date_keeps_ids_unique() {
    let mut store = seeded();
    store
        .update_event(
            2,
            key("2025-11-30"),
            "Buy Groceries",
            "7:00 PM",
            EventType::Task,
            key("2025-11-20"),
        )
        .unwrap();

    assert_eq!(ids(&store, "2025-11-20"), vec![1]);
    assert_eq!(ids(&store, "2025-11-22"), vec![3]);
    assert_eq!(ids(&store, "2025-11-30"), vec![2]);
    assert_eq!(store.len(), 3);
}

#[test]
fn update_unknown_id_still_inserts_into_new_date() {
    let mut store = seeded();
    let inserted = store
        .update_event(
            42,
            key("2025-12-01"),
            "Recovered",
            "",
            EventType::Reminder,
            key("2025-11-20"),
        )
        .unwrap();
    assert_eq!(inserted.id, 42);
    assert_eq!(ids(&store, "2025-12-01"), vec![42]);
    assert_eq!(ids(&store, "2025-11-20"), vec![1]);

    let next = store
        .add_event(key("2025-12-01"), "After", "", EventType::Task)
        .unwrap();
    assert_eq!(next.id, 43);
}

#[test]
fn filter_preserves_relative_order() {
    let mut store = seeded();
    let date = key("2025-11-22");
    store.add_event(date, "Vacuum", "", EventType::Task).unwrap();
    store.add_event(date, "School call", "", EventType::Meeting).unwrap();

    let all = store.events_for_date(date, TypeFilter::All);
    let tasks = store.events_for_date(date, TypeFilter::Only(EventType::Task));
    let expected: Vec<_> = all
        .iter()
        .filter(|event| event.kind == EventType::Task)
        .cloned()
        .collect();
    assert_eq!(tasks, expected);
    assert_eq!(
        tasks.iter().map(|e| e.title.as_str()).collect::<Vec<_>>(),
        vec!["Vacuum", "Buy Groceries"]
    );
    assert!(store
        .events_for_date(key("2025-11-23"), TypeFilter::All)
        .is_empty());
}

#[test]
fn events_in_month_skips_other_months_and_empty_matches() {
    let mut store = seeded();
    store
        .add_event(key("2025-12-01"), "Advent", "", EventType::Reminder)
        .unwrap();
    let november = MonthCursor::new(2025, 10).unwrap();

    let all = store.events_in_month(november, TypeFilter::All);
    assert_eq!(
        all.iter().map(|(date, _)| date.to_string()).collect::<Vec<_>>(),
        vec!["2025-11-20", "2025-11-22"]
    );

    let meetings = store.events_in_month(november, TypeFilter::Only(EventType::Meeting));
    assert_eq!(meetings.len(), 1);
    assert_eq!(meetings[0].0, key("2025-11-20"));
}

#[test]
fn events_in_month_handles_last_representable_month() {
    let last = DateKey::from_date(NaiveDate::MAX);
    let mut store = EventStore::new();
    store
        .add_event(last, "Far Future", "", EventType::Reminder)
        .unwrap();
    let december = MonthCursor::containing(last);

    let found = store.events_in_month(december, TypeFilter::All);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].0, last);

    let earlier = MonthCursor::new(last.year(), 10).unwrap();
    assert!(store.events_in_month(earlier, TypeFilter::All).is_empty());
}

#[test]
fn observers_receive_one_change_per_mutation() {
    let mut store = seeded();
    let seen: Rc<RefCell<Vec<StoreChange>>> = Rc::default();
    let sink = Rc::clone(&seen);
    let subscription = store.subscribe(move |change| sink.borrow_mut().push(*change));

    let created = store
        .add_event(key("2025-11-20"), "Plumber", "", EventType::Task)
        .unwrap();
    store
        .update_event(
            created.id,
            key("2025-11-21"),
            "Plumber",
            "",
            EventType::Task,
            key("2025-11-20"),
        )
        .unwrap();
    store.delete_event(created.id, key("2025-11-21"));
    store.delete_event(created.id, key("2025-11-21"));
    let _ = store.add_event(key("2025-11-21"), "", "", EventType::Task);

    assert_eq!(
        *seen.borrow(),
        vec![
            StoreChange::Added {
                id: created.id,
                date: key("2025-11-20")
            },
            StoreChange::Updated {
                id: created.id,
                from: key("2025-11-20"),
                to: key("2025-11-21")
            },
            StoreChange::Deleted {
                id: created.id,
                date: key("2025-11-21")
            },
        ]
    );

    assert!(store.unsubscribe(subscription));
    assert!(!store.unsubscribe(subscription));
    store
        .add_event(key("2025-11-21"), "Quiet", "", EventType::Task)
        .unwrap();
    assert_eq!(seen.borrow().len(), 3);
}

#[test]
fn seed_validation_rejects_duplicates_and_empty_dates() {
    let mut duplicated = sample_events();
    let copy = duplicated[&key("2025-11-20")][0].clone();
    duplicated.entry(key("2025-11-21")).or_default().push(copy);
    assert_eq!(
        EventStore::with_seed(duplicated).unwrap_err(),
        StoreError::DuplicateSeedId(1)
    );

    let mut empty = EventsByDate::new();
    empty.insert(key("2025-11-21"), Vec::new());
    assert_eq!(
        EventStore::with_seed(empty).unwrap_err(),
        StoreError::EmptySeedDate(key("2025-11-21"))
    );
}

#[test]
fn seed_titles_are_trimmed() {
    let mut seed = EventsByDate::new();
    seed.insert(
        key("2025-11-21"),
        vec![Event {
            id: 7,
            title: "  Plumber ".to_string(),
            time: "9:00 AM".to_string(),
            kind: EventType::Meeting,
        }],
    );
    let store = EventStore::with_seed(seed).unwrap();
    assert_eq!(store.find(7).unwrap().1.title, "Plumber");

    let mut blank = EventsByDate::new();
    blank.insert(
        key("2025-11-21"),
        vec![Event {
            id: 8,
            title: "   ".to_string(),
            time: String::new(),
            kind: EventType::Task,
        }],
    );
    assert_eq!(
        EventStore::with_seed(blank).unwrap_err(),
        StoreError::Validation(EventValidationError::EmptyTitle)
    );
}
