use minicrm::db::{DbPool, KeyValueStorage, MemoryStorage};
use minicrm::errors::{AppError, AppResult};
use minicrm::models::{
    Activity, ContactStatus, ContactUpdate, Currency, DealStage, DealUpdate, NewContact, NewDeal,
    SettingsUpdate, Theme, seed,
};
use minicrm::store::{CONTACTS_KEY, DEALS_KEY, RecordStore, Snapshot};
use chrono::NaiveDate;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Memory backend whose contents stay visible to the test after the store takes it.
#[derive(Clone, Default)]
struct Shared(Rc<RefCell<MemoryStorage>>);

impl KeyValueStorage for Shared {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.0.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.0.borrow_mut().set(key, value)
    }

    fn journal(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.0.borrow_mut().journal(operation, target, message)
    }
}

/// Backend that fails every call.
struct Broken;

impl KeyValueStorage for Broken {
    fn get(&self, _key: &str) -> AppResult<Option<String>> {
        Err(AppError::Export("disk on fire".into()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> AppResult<()> {
        Err(AppError::Export("disk on fire".into()))
    }
}

/// Shared backend whose writes start failing once `failing` is switched on.
/// With `only` set, just that key rejects writes and the journal keeps working.
#[derive(Clone, Default)]
struct Flaky {
    inner: Shared,
    failing: Rc<Cell<bool>>,
    only: Option<&'static str>,
}

impl Flaky {
    fn rejects(&self, key: Option<&str>) -> bool {
        self.failing.get()
            && match (self.only, key) {
                (None, _) => true,
                (Some(only), Some(key)) => only == key,
                (Some(_), None) => false,
            }
    }
}

impl KeyValueStorage for Flaky {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        if self.rejects(Some(key)) {
            return Err(AppError::Export("disk full".into()));
        }
        self.inner.set(key, value)
    }

    fn journal(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        if self.rejects(None) {
            return Err(AppError::Export("disk full".into()));
        }
        self.inner.journal(operation, target, message)
    }
}

fn journal_ops(shared: &Shared) -> Vec<(String, String)> {
    shared
        .0
        .borrow()
        .journal_entries()
        .iter()
        .map(|(op, _, msg)| (op.clone(), msg.clone()))
        .collect()
}

fn new_contact(first: &str, last: &str) -> NewContact {
    NewContact {
        first_name: first.into(),
        last_name: last.into(),
        email: format!("{}@example.com", first.to_lowercase()),
        phone: None,
        company: Some("Example Ltd".into()),
        status: ContactStatus::Lead,
        avatar: None,
    }
}

fn new_deal(name: &str, value: f64, stage: DealStage) -> NewDeal {
    NewDeal {
        name: name.into(),
        value,
        stage,
        contact_id: "1".into(),
        company: "Tech Corp".into(),
        expected_close: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
        probability: 40,
    }
}

fn memory_store() -> RecordStore {
    RecordStore::initialize(MemoryStorage::new())
}

#[test]
fn empty_store_is_seeded_in_order() {
    let store = memory_store();
    let contacts = store.list_contacts();
    let ids: Vec<&str> = contacts.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4"]);
    assert_eq!(contacts, seed::contacts());
    assert_eq!(store.list_deals(), seed::deals());
    assert_eq!(store.list_activities(), seed::activities());
    assert_eq!(store.settings(), seed::settings());
}

#[test]
fn seeding_writes_every_key_once() {
    let shared = Shared::default();
    let _store = RecordStore::initialize(shared.clone());

    let keys: Vec<String> = shared.0.borrow().keys().map(str::to_string).collect();
    assert_eq!(keys.len(), 4);
    assert!(keys.iter().any(|k| k == CONTACTS_KEY));

    // A second initialize must not overwrite what is stored.
    shared
        .0
        .borrow_mut()
        .set(CONTACTS_KEY, "[]")
        .unwrap();
    let store = RecordStore::initialize(shared.clone());
    assert!(store.list_contacts().is_empty());
}

#[test]
fn created_contact_is_prepended_and_retrievable() {
    let mut store = memory_store();
    let created = store.create_contact(new_contact("Grace", "Hopper")).unwrap();

    assert_eq!(created.last_updated, "Just now");
    assert_eq!(store.list_contacts()[0], created);
    assert_eq!(store.get_contact(&created.id), Some(created.clone()));
    assert_eq!(store.list_contacts().len(), 5);
}

#[test]
fn creation_ids_are_unique() {
    let mut store = memory_store();
    let mut ids = std::collections::HashSet::new();
    for i in 0..50 {
        let c = store
            .create_contact(new_contact("Bulk", &format!("Person{i}")))
            .unwrap();
        assert!(ids.insert(c.id));
    }
    for c in seed::contacts() {
        assert!(!ids.contains(&c.id));
    }
}

#[test]
fn creation_logs_an_activity_but_update_does_not() {
    let mut store = memory_store();
    let contact = store.create_contact(new_contact("Alan", "Turing")).unwrap();

    let latest = &store.list_activities()[0];
    assert_eq!(latest.kind, "contact_created");
    assert_eq!(latest.text, "New contact added: Alan Turing");
    assert_eq!(latest.time, "Just now");

    let deal = store
        .create_deal(new_deal("Bombe Support", 9000.0, DealStage::Proposal))
        .unwrap();
    assert_eq!(deal.id.chars().next(), Some('d'));
    assert_eq!(store.list_activities()[0].text, "New deal created: Bombe Support");

    let before = store.list_activities();
    store
        .update_contact(
            &contact.id,
            ContactUpdate {
                status: Some(ContactStatus::Customer),
                ..Default::default()
            },
        )
        .unwrap();
    store
        .update_deal(
            &deal.id,
            DealUpdate {
                stage: Some(DealStage::ClosedWon),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(store.list_activities(), before);
}

#[test]
fn update_changes_only_the_given_fields() {
    let mut store = memory_store();
    let original = store.get_contact("2").unwrap();

    let updated = store
        .update_contact(
            "2",
            ContactUpdate {
                company: Some(Some("Scale-up Inc".into())),
                ..Default::default()
            },
        )
        .unwrap()
        .unwrap();

    assert_eq!(updated.company.as_deref(), Some("Scale-up Inc"));
    assert_eq!(updated.last_updated, "Just now");
    assert_eq!(updated.first_name, original.first_name);
    assert_eq!(updated.email, original.email);
    assert_eq!(store.get_contact("2"), Some(updated));
}

#[test]
fn deal_update_keeps_other_fields() {
    let mut store = memory_store();
    let original = store.get_deal("d2").unwrap();

    let updated = store
        .update_deal(
            "d2",
            DealUpdate {
                probability: Some(95),
                ..Default::default()
            },
        )
        .unwrap()
        .unwrap();

    assert_eq!(updated.probability, 95);
    assert_eq!(updated.name, original.name);
    assert_eq!(updated.stage, original.stage);
    assert_eq!(updated.created_at, original.created_at);
}

#[test]
fn updating_missing_records_returns_none() {
    let mut store = memory_store();
    let r = store
        .update_contact("404", ContactUpdate::default())
        .unwrap();
    assert!(r.is_none());
    assert!(
        store
            .update_deal("d404", DealUpdate::default())
            .unwrap()
            .is_none()
    );
}

#[test]
fn delete_then_delete_again() {
    let mut store = memory_store();
    assert!(store.delete_contact("3"));
    assert_eq!(store.get_contact("3"), None);
    assert!(!store.delete_contact("3"));

    assert!(store.delete_deal("d1"));
    assert!(!store.delete_deal("d1"));
    assert_eq!(store.list_deals().len(), 2);
}

#[test]
fn invalid_fields_are_rejected_before_any_write() {
    let mut store = memory_store();

    let mut bad = new_contact("Jo", "Bloggs");
    bad.email = "not-an-email".into();
    assert!(matches!(
        store.create_contact(bad),
        Err(AppError::InvalidField { field: "email", .. })
    ));

    let err = store
        .create_deal(new_deal("Negative", -5.0, DealStage::Prospecting))
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidField { field: "value", .. }));

    let mut too_likely = new_deal("Sure thing", 10.0, DealStage::Proposal);
    too_likely.probability = 120;
    assert!(store.create_deal(too_likely).is_err());

    assert_eq!(store.list_contacts(), seed::contacts());
    assert_eq!(store.list_deals(), seed::deals());
    assert_eq!(store.list_activities(), seed::activities());
}

#[test]
fn activity_feed_keeps_the_twenty_most_recent() {
    let mut store = memory_store();
    for i in 0..25 {
        store.append_activity(Activity::new(
            format!("a{i}"),
            "task_completed",
            format!("Task {i}"),
            "Just now",
        ));
    }

    let feed = store.list_activities();
    assert_eq!(feed.len(), 20);
    assert_eq!(feed[0].id, "a24");
    assert_eq!(feed[19].id, "a5");
}

#[test]
fn stats_count_open_won_and_total_value() {
    let mut store = memory_store();
    let mut snapshot = store.snapshot();
    snapshot.deals.clear();
    store.restore(snapshot).unwrap();

    for (name, value, stage) in [
        ("Open", 100.0, DealStage::Prospecting),
        ("Won", 200.0, DealStage::ClosedWon),
        ("Lost", 50.0, DealStage::ClosedLost),
    ] {
        store.create_deal(new_deal(name, value, stage)).unwrap();
    }

    let stats = store.stats();
    assert_eq!(stats.total_contacts, 4);
    assert_eq!(stats.active_deals, 1);
    assert_eq!(stats.pipeline_value, 350.0);
    assert_eq!(stats.won_deals, 1);
}

#[test]
fn board_has_every_stage_in_pipeline_order() {
    let store = memory_store();
    let board = store.deals_by_stage();
    let stages: Vec<DealStage> = board.iter().map(|c| c.stage).collect();
    assert_eq!(stages, DealStage::PIPELINE);

    let proposal = &board[2];
    assert_eq!(proposal.deals.len(), 1);
    assert_eq!(proposal.total_value(), 50000.0);
    assert!(board[4].deals.is_empty());
}

#[test]
fn search_and_contact_deals() {
    let store = memory_store();
    let hits = store.search_contacts("tech");
    let ids: Vec<&str> = hits.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["1", "3"]);

    assert_eq!(store.search_contacts("").len(), 4);
    assert_eq!(store.deals_for_contact("2")[0].id, "d2");
    assert_eq!(store.deals_in_stage(DealStage::Qualification)[0].id, "d3");
}

#[test]
fn settings_merge_and_persist() {
    let shared = Shared::default();
    let mut store = RecordStore::initialize(shared.clone());

    let merged = store
        .update_settings(SettingsUpdate {
            theme: Some(Theme::Dark),
            currency: Some(Currency::Eur),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(merged.theme, Theme::Dark);
    assert_eq!(merged.company_name, "MiniCRM Inc");

    let reopened = RecordStore::initialize(shared);
    assert_eq!(reopened.settings(), merged);
}

#[test]
fn unavailable_storage_serves_seed_data_and_drops_writes() {
    let mut store = RecordStore::initialize(Broken);
    assert!(!store.is_persistent());
    assert_eq!(store.list_contacts(), seed::contacts());

    let created = store.create_contact(new_contact("Lost", "Write")).unwrap();
    assert_eq!(created.first_name, "Lost");
    assert_eq!(store.list_contacts(), seed::contacts());

    let mut offline = RecordStore::without_storage();
    assert!(offline.delete_deal("d1"));
    assert_eq!(offline.list_deals(), seed::deals());
}

#[test]
fn corrupted_collection_falls_back_to_seed() {
    let shared = Shared::default();
    let store = RecordStore::initialize(shared.clone());
    shared
        .0
        .borrow_mut()
        .set(CONTACTS_KEY, "{not json")
        .unwrap();
    assert_eq!(store.list_contacts(), seed::contacts());
}

#[test]
fn undecodable_collection_is_never_overwritten() {
    let shared = Shared::default();
    let mut store = RecordStore::initialize(shared.clone());

    let bad = r#"[{"id":"99","firstName":"Ada","lastName":"Lovelace","email":"ada@example.com","status":"vip","createdAt":"2024-01-01","lastUpdated":"today"}]"#;
    shared.0.borrow_mut().set(CONTACTS_KEY, bad).unwrap();

    let created = store.create_contact(new_contact("Grace", "Hopper")).unwrap();
    assert_eq!(created.first_name, "Grace");
    let moved = store
        .update_contact(
            "1",
            ContactUpdate {
                company: Some(Some("Elsewhere".into())),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(moved.is_some());
    assert!(store.delete_contact("2"));

    assert_eq!(shared.0.borrow().get(CONTACTS_KEY).unwrap().as_deref(), Some(bad));
    assert_eq!(store.list_contacts(), seed::contacts());
    assert!(
        journal_ops(&shared)
            .iter()
            .all(|(op, _)| !op.starts_with("contact_"))
    );
    assert_eq!(store.list_activities(), seed::activities());

    // An import is the way to replace the damaged value.
    let snapshot = store.snapshot();
    store.restore(snapshot).unwrap();
    assert_ne!(shared.0.borrow().get(CONTACTS_KEY).unwrap().as_deref(), Some(bad));
    let c = store.create_contact(new_contact("Back", "Again")).unwrap();
    assert_eq!(store.list_contacts()[0], c);
}

#[test]
fn undecodable_deals_survive_an_update() {
    let shared = Shared::default();
    let mut store = RecordStore::initialize(shared.clone());

    let bad = r#"[{"id":"d1","probability":0.5}]"#;
    shared.0.borrow_mut().set(DEALS_KEY, bad).unwrap();

    let changed = store
        .update_deal(
            "d1",
            DealUpdate {
                stage: Some(DealStage::ClosedWon),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(changed.is_some());
    assert_eq!(shared.0.borrow().get(DEALS_KEY).unwrap().as_deref(), Some(bad));
    assert_eq!(store.list_deals(), seed::deals());
}

#[test]
fn failing_writes_after_startup_keep_the_previous_state() {
    let flaky = Flaky::default();
    let mut store = RecordStore::initialize(flaky.clone());
    assert!(store.is_persistent());

    let kept = store.create_contact(new_contact("Kept", "Record")).unwrap();
    let contacts = store.list_contacts();
    let deals = store.list_deals();
    let activities = store.list_activities();
    let settings = store.settings();

    flaky.failing.set(true);

    let lost = store.create_contact(new_contact("Lost", "Record")).unwrap();
    assert_eq!(lost.first_name, "Lost");
    assert!(store.delete_contact(&kept.id));
    store
        .create_deal(new_deal("Unsaved", 10.0, DealStage::Prospecting))
        .unwrap();
    store
        .update_settings(SettingsUpdate {
            theme: Some(Theme::Dark),
            company_name: Some("Not Saved Ltd".into()),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(store.list_contacts(), contacts);
    assert_eq!(store.list_deals(), deals);
    assert_eq!(store.list_activities(), activities);
    assert_eq!(store.settings(), settings);

    let ops: Vec<String> = journal_ops(&flaky.inner)
        .into_iter()
        .map(|(op, _)| op)
        .collect();
    assert_eq!(ops, ["contact_add"]);

    flaky.failing.set(false);
    let c = store.create_contact(new_contact("Recovered", "Write")).unwrap();
    assert_eq!(store.list_contacts()[0], c);
}

#[test]
fn import_with_an_unwritten_collection_is_journaled_as_partial() {
    let flaky = Flaky {
        only: Some(DEALS_KEY),
        ..Default::default()
    };
    let mut store = RecordStore::initialize(flaky.clone());

    let mut snapshot = store.snapshot();
    snapshot.contacts.truncate(1);
    snapshot.deals.clear();

    flaky.failing.set(true);
    store.restore(snapshot).unwrap();

    assert_eq!(store.list_contacts().len(), 1);
    assert_eq!(store.list_deals(), seed::deals());

    let entries = journal_ops(&flaky.inner);
    let (op, msg) = entries.last().unwrap();
    assert_eq!(op, "import");
    assert!(msg.starts_with("Partial import"));
    assert!(msg.contains(DEALS_KEY));
    assert!(entries.iter().all(|(_, msg)| !msg.starts_with("Imported")));
}

#[test]
fn complete_import_is_journaled_with_counts() {
    let shared = Shared::default();
    let mut store = RecordStore::initialize(shared.clone());
    let snapshot = store.snapshot();
    store.restore(snapshot).unwrap();

    let (op, msg) = journal_ops(&shared).pop().unwrap();
    assert_eq!(op, "import");
    assert_eq!(
        msg,
        format!(
            "Imported {} contacts, {} deals, {} activities",
            seed::contacts().len(),
            seed::deals().len(),
            seed::activities().len()
        )
    );
}

#[test]
fn mutations_are_journaled() {
    let shared = Shared::default();
    let mut store = RecordStore::initialize(shared.clone());
    let c = store.create_contact(new_contact("Journal", "Entry")).unwrap();
    store.delete_contact(&c.id);

    let ops: Vec<String> = shared
        .0
        .borrow()
        .journal_entries()
        .iter()
        .map(|(op, _, _)| op.clone())
        .collect();
    assert_eq!(ops, ["contact_add", "contact_del"]);
}

#[test]
fn restore_rejects_duplicate_ids() {
    let mut store = memory_store();
    let mut snapshot: Snapshot = store.snapshot();
    let dup = snapshot.contacts[0].clone();
    snapshot.contacts.push(dup);

    assert!(matches!(store.restore(snapshot), Err(AppError::Import(_))));
    assert_eq!(store.list_contacts(), seed::contacts());
}

#[test]
fn sqlite_backend_survives_reopen() {
    let mut path = std::env::temp_dir();
    path.push("store_reopen_minicrm.sqlite");
    std::fs::remove_file(&path).ok();
    let db = path.to_string_lossy().to_string();

    let created = {
        let mut store = RecordStore::initialize(DbPool::open_initialized(&db).unwrap());
        store
            .create_deal(new_deal("Persisted", 1234.0, DealStage::Negotiation))
            .unwrap()
    };

    let store = RecordStore::initialize(DbPool::open_initialized(&db).unwrap());
    assert_eq!(store.get_deal(&created.id), Some(created));
    assert_eq!(store.list_deals().len(), 4);
}

#[test]
fn in_memory_sqlite_serialises_camel_case() {
    let pool = DbPool::open_in_memory().unwrap();
    let mut store = RecordStore::initialize(pool);
    store.create_contact(new_contact("Camel", "Case")).unwrap();

    let json = serde_json::to_string(&store.snapshot()).unwrap();
    assert!(json.contains("\"firstName\":\"Camel\""));
    assert!(json.contains("\"type\":\"contact_created\""));
    assert!(json.contains("\"stage\":\"proposal\""));
}
