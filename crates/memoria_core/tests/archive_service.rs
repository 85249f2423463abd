use memoria_core::{
    derive_sections, AppData, ArchiveError, ArchiveService, DividerItem, DropPosition, Item,
    ItemPatch, MemoryStore, MemoryWidget, NewMemory, NewThought, DEFAULT_DIVIDER_LABEL,
};

fn divider(id: &str, order: i64) -> Item {
    let mut divider = DividerItem::new(id, order);
    divider.id = id.to_string();
    divider.into()
}

fn memory(id: &str, order: i64) -> Item {
    let mut widget = MemoryWidget::new("img", id, order);
    widget.id = id.to_string();
    widget.into()
}

fn seeded(items: Vec<Item>) -> MemoryStore {
    MemoryStore::with_data(AppData {
        items,
        custom_phrases: Vec::new(),
    })
}

fn section_ids(data: &AppData) -> Vec<Vec<String>> {
    derive_sections(&data.items)
        .iter()
        .map(|section| {
            section
                .widgets
                .iter()
                .map(|widget| widget.id().to_string())
                .collect()
        })
        .collect()
}

#[test]
fn add_memory_lands_in_visible_section_and_shifts_followers() {
    let store = seeded(vec![
        divider("d1", 0),
        memory("a", 1),
        divider("d2", 2),
        memory("b", 3),
    ]);
    let mut service = ArchiveService::open(&store).unwrap();

    let id = service
        .add_memory(
            NewMemory {
                image_data: "data:image/png;base64,AA".to_string(),
                caption: "new".to_string(),
            },
            Some("d1"),
        )
        .unwrap();

    let data = store.snapshot();
    assert_eq!(data.find(&id).unwrap().order(), 2);
    assert_eq!(data.find("d2").unwrap().order(), 3);
    assert_eq!(data.find("b").unwrap().order(), 4);
    assert_eq!(
        section_ids(&data),
        vec![vec![], vec!["a".to_string(), id.clone()], vec!["b".to_string()]]
    );
    // one write for the shift, one for the add
    assert_eq!(store.save_count(), 2);
}

#[test]
fn add_thought_without_visible_divider_goes_before_first_divider() {
    let store = seeded(vec![memory("a", 0), divider("d1", 1)]);
    let mut service = ArchiveService::open(&store).unwrap();

    let id = service
        .add_thought(
            NewThought {
                title: "t".to_string(),
                ..NewThought::default()
            },
            None,
        )
        .unwrap();

    let sections = section_ids(service.data());
    assert_eq!(sections[0], vec!["a".to_string(), id]);
    assert!(sections[1].is_empty());
}

#[test]
fn add_at_end_skips_shift_write() {
    let store = seeded(vec![memory("a", 0)]);
    let mut service = ArchiveService::open(&store).unwrap();
    service.add_memory(NewMemory::default(), None).unwrap();
    assert_eq!(store.save_count(), 1);
    assert_eq!(service.data().items[1].order(), 1);
}

#[test]
fn add_divider_appends_with_default_label() {
    let store = seeded(vec![divider("d1", 0), memory("a", 6)]);
    let mut service = ArchiveService::open(&store).unwrap();

    let id = service.add_divider("   ").unwrap();
    let created = service.data().find(&id).unwrap();
    assert_eq!(created.order(), 7);
    assert_eq!(created.as_divider().unwrap().label, DEFAULT_DIVIDER_LABEL);
}

#[test]
fn add_item_rejects_duplicates_and_invalid_items() {
    let store = seeded(vec![memory("a", 0)]);
    let mut service = ArchiveService::open(&store).unwrap();

    let err = service.add_item(memory("a", 3)).unwrap_err();
    assert!(matches!(err, ArchiveError::DuplicateId(id) if id == "a"));

    let mut broken = MemoryWidget::new("", "", 1);
    broken.width = 0;
    let err = service.add_item(broken.into()).unwrap_err();
    assert!(matches!(err, ArchiveError::Validation(_)));
    assert_eq!(service.data().items.len(), 1);
    assert_eq!(store.save_count(), 0);
}

#[test]
fn unknown_ids_are_reported_without_writes() {
    let store = seeded(vec![memory("a", 0)]);
    let mut service = ArchiveService::open(&store).unwrap();

    assert!(!service.update_item("zzz", &ItemPatch::default()).unwrap());
    assert!(!service.delete_item("zzz").unwrap());
    assert!(!service.toggle_collapsed("zzz").unwrap());
    assert!(!service.toggle_collapsed("a").unwrap());
    assert!(!service.resize_widget("zzz", 500, 500).unwrap());
    assert!(!service.move_item("a", "zzz", DropPosition::After).unwrap());
    assert!(!service.remove_phrase(0).unwrap());
    assert_eq!(store.save_count(), 0);
}

#[test]
fn update_toggle_resize_and_delete() {
    let store = seeded(vec![divider("d1", 0), memory("a", 1)]);
    let mut service = ArchiveService::open(&store).unwrap();

    let patch = ItemPatch {
        caption: Some("edited".to_string()),
        ..ItemPatch::default()
    };
    assert!(service.update_item("a", &patch).unwrap());
    assert!(service.toggle_collapsed("d1").unwrap());
    assert!(service.resize_widget("a", 120, 640).unwrap());

    let data = store.snapshot();
    assert!(data.find("d1").unwrap().as_divider().unwrap().collapsed);
    match data.find("a").unwrap() {
        Item::Memory(memory) => {
            assert_eq!(memory.caption, "edited");
            assert_eq!((memory.width, memory.height), (200, 640));
            assert_eq!(memory.order, 1);
        }
        other => panic!("unexpected variant {other:?}"),
    }

    assert!(service.delete_item("d1").unwrap());
    assert_eq!(store.snapshot().items.len(), 1);
}

#[test]
fn move_item_renumbers_and_persists() {
    let store = seeded(vec![divider("A", 0), memory("B", 1), divider("C", 2)]);
    let mut service = ArchiveService::open(&store).unwrap();

    assert!(service.move_item("B", "C", DropPosition::After).unwrap());
    let stored: Vec<(String, i64)> = store
        .snapshot()
        .items
        .iter()
        .map(|item| (item.id().to_string(), item.order()))
        .collect();
    assert_eq!(
        stored,
        vec![
            ("A".to_string(), 0),
            ("C".to_string(), 1),
            ("B".to_string(), 2)
        ]
    );
    assert!(!service.move_item("B", "B", DropPosition::Before).unwrap());
}

#[test]
fn phrases_are_trimmed_and_removed_by_index() {
    let store = MemoryStore::new();
    let mut service = ArchiveService::open(&store).unwrap();

    assert!(matches!(
        service.add_phrase("  \n"),
        Err(ArchiveError::BlankPhrase)
    ));
    service.add_phrase("  first ").unwrap();
    service.add_phrase("second").unwrap();
    assert!(service.remove_phrase(0).unwrap());

    assert_eq!(store.snapshot().custom_phrases, vec!["second".to_string()]);
}

#[test]
fn failed_save_keeps_optimistic_state_until_refresh() {
    let store = seeded(vec![memory("a", 0)]);
    let mut service = ArchiveService::open(&store).unwrap();

    store.set_fail_saves(true);
    let err = service.delete_item("a").unwrap_err();
    assert!(matches!(err, ArchiveError::SaveFailed(_)));
    assert!(err.to_string().starts_with("save failed"));
    assert!(service.data().items.is_empty());
    assert_eq!(store.snapshot().items.len(), 1);

    store.set_fail_saves(false);
    service.refresh().unwrap();
    assert_eq!(service.data().items.len(), 1);
}

#[test]
fn refresh_picks_up_other_writers() {
    let store = MemoryStore::new();
    let mut service = ArchiveService::open(&store).unwrap();
    store.replace(AppData {
        items: vec![memory("x", 0)],
        custom_phrases: vec!["p".to_string()],
    });

    service.refresh().unwrap();
    assert!(service.data().find("x").is_some());
    assert_eq!(service.data().custom_phrases.len(), 1);
}

#[test]
fn insert_over_stored_zero_width_widget_keeps_strict_order() {
    let mut flat = MemoryWidget::new("", "m0", 0);
    flat.id = "m0".to_string();
    flat.width = 0;
    let store = seeded(vec![flat.into(), divider("d1", 1)]);
    let mut service = ArchiveService::open(&store).unwrap();

    let id = service.add_memory(NewMemory::default(), None).unwrap();

    let data = store.snapshot();
    let stored: Vec<(String, i64)> = data
        .items
        .iter()
        .map(|item| (item.id().to_string(), item.order()))
        .collect();
    assert_eq!(
        stored,
        vec![
            ("m0".to_string(), 0),
            (id.clone(), 1),
            ("d1".to_string(), 2)
        ]
    );
    assert_eq!(
        section_ids(&data),
        vec![vec!["m0".to_string(), id], vec![]]
    );

    assert!(service.move_item("d1", "m0", DropPosition::Before).unwrap());
    assert_eq!(store.snapshot().items[0].id(), "d1");
}

#[test]
fn reorder_still_validates_edited_items() {
    let store = seeded(vec![memory("a", 0)]);
    let mut service = ArchiveService::open(&store).unwrap();

    let mut edited = MemoryWidget::new("img", "a", 0);
    edited.id = "a".to_string();
    edited.height = 0;
    let err = service.reorder_items(vec![edited.into()]).unwrap_err();
    assert!(matches!(err, ArchiveError::Validation(_)));
    assert_eq!(store.save_count(), 0);
}

#[test]
fn failed_shift_write_adds_nothing() {
    let store = seeded(vec![memory("a", 0), divider("d1", 1)]);
    let mut service = ArchiveService::open(&store).unwrap();

    store.set_fail_saves(true);
    let err = service.add_memory(NewMemory::default(), None).unwrap_err();
    assert!(matches!(err, ArchiveError::SaveFailed(_)));

    let orders: Vec<(&str, i64)> = service
        .data()
        .items
        .iter()
        .map(|item| (item.id(), item.order()))
        .collect();
    assert_eq!(orders, vec![("a", 0), ("d1", 2)]);
    assert_eq!(store.snapshot().items.len(), 2);
}
