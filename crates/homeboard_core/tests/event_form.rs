use homeboard_core::{
    sample_events, DateKey, EventForm, EventStore, EventType, FormMode, TypeFilter,
};

fn key(value: &str) -> DateKey {
    DateKey::parse(value).unwrap()
}

fn seeded() -> EventStore {
    EventStore::with_seed(sample_events()).unwrap()
}

#[test]
fn add_form_starts_with_meeting_draft_on_target_date() {
    let form = EventForm::open_add(key("2025-11-20"));
    assert_eq!(form.mode(), FormMode::Add);
    assert!(!form.is_edit());
    assert_eq!(form.draft().title, "");
    assert_eq!(form.draft().time, "");
    assert_eq!(form.draft().kind, EventType::Meeting);
    assert_eq!(form.draft().date, key("2025-11-20"));
}

#[test]
fn add_form_submit_creates_event() {
    let mut store = seeded();
    let mut form = EventForm::open_add(key("2025-11-20"));
    form.set_title("Plumber");
    form.set_time("2:00 PM");
    form.set_kind(EventType::Task);

    let created = form.submit(&mut store).unwrap();
    let listed = store.events_for_date(key("2025-11-20"), TypeFilter::All);
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0], created);
}

#[test]
fn blank_title_submit_returns_session_untouched() {
    let mut store = seeded();
    let mut form = EventForm::open_add(key("2025-11-20"));
    form.set_title("   ");
    form.set_time("noon");
    let before = form.clone();

    let err = form.submit(&mut store).unwrap_err();
    assert!(err.is_empty_title());
    assert_eq!(store.events(), &sample_events());

    let mut form = err.into_form();
    assert_eq!(form, before);
    form.set_title("Lunch");
    assert_eq!(form.submit(&mut store).unwrap().time, "noon");
}

#[test]
fn edit_form_date_change_is_applied_only_on_submit() {
    let mut store = seeded();
    let (date, event) = store.find(2).map(|(d, e)| (d, e.clone())).unwrap();
    let mut form = EventForm::open_edit(&event, date);
    assert_eq!(
        form.mode(),
        FormMode::Edit {
            id: 2,
            original_date: key("2025-11-22")
        }
    );
    assert_eq!(form.draft().title, "Buy Groceries");

    form.set_date(key("2025-11-24"));
    assert_eq!(store.find(2).unwrap().0, key("2025-11-22"));

    let updated = form.submit(&mut store).unwrap();
    assert_eq!(updated.id, 2);
    assert_eq!(store.find(2).unwrap().0, key("2025-11-24"));
    assert_eq!(
        store
            .events_for_date(key("2025-11-22"), TypeFilter::All)
            .iter()
            .map(|e| e.id)
            .collect::<Vec<_>>(),
        vec![3]
    );
}

#[test]
fn cancel_discards_draft() {
    let mut store = seeded();
    let (date, event) = store.find(1).map(|(d, e)| (d, e.clone())).unwrap();
    let mut form = EventForm::open_edit(&event, date);
    form.set_title("Changed");
    form.cancel();

    assert_eq!(store.find(1).unwrap().1.title, "Electrician Visit");
    store
        .add_event(key("2025-11-20"), "Still usable", "", EventType::Task)
        .unwrap();
}

#[test]
fn delete_from_form_only_applies_in_edit_mode() {
    let mut store = seeded();
    assert!(EventForm::open_add(key("2025-11-20"))
        .delete(&mut store)
        .is_none());
    assert_eq!(store.len(), 3);

    let (date, event) = store.find(1).map(|(d, e)| (d, e.clone())).unwrap();
    let removed = EventForm::open_edit(&event, date).delete(&mut store).unwrap();
    assert_eq!(removed.id, 1);
    assert!(!store.contains_date(key("2025-11-20")));
}
