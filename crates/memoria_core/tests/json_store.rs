use memoria_core::{AppData, ArchiveService, DocumentStore, Item, JsonFileStore, NewThought};
use std::fs;

#[test]
fn missing_file_is_created_with_default_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("data.json");
    let store = JsonFileStore::new(&path);

    let data = store.load().unwrap();
    assert_eq!(data, AppData::default());
    assert!(path.exists());

    let raw = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["items"], serde_json::json!([]));
    assert_eq!(value["customPhrases"], serde_json::json!([]));
}

#[test]
fn malformed_file_loads_as_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, "{ not json").unwrap();

    let store = JsonFileStore::new(&path);
    assert_eq!(store.load().unwrap(), AppData::default());
}

#[test]
fn saved_document_is_pretty_and_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    let store = JsonFileStore::new(&path);

    let mut service = ArchiveService::open(&store).unwrap();
    service.add_divider("Осень").unwrap();
    service
        .add_thought(
            NewThought {
                title: "leaves".to_string(),
                content: "<p>gold</p>".to_string(),
                flavor_text: String::new(),
            },
            None,
        )
        .unwrap();
    service.add_phrase("ours").unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\n  \"items\": ["));
    assert!(raw.contains("\"flavorText\""));
    assert!(!dir.path().join("data.json.tmp").exists());

    let reloaded = JsonFileStore::new(&path).load().unwrap();
    assert_eq!(&reloaded, service.data());
}

#[test]
fn widgets_missing_size_or_timestamp_load_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(
        &path,
        r#"{
          "items": [
            {"id": "d1", "type": "divider", "label": "Keep me", "order": 0},
            {"id": "m1", "type": "memory", "imageData": "", "caption": "sea", "order": 1},
            {"id": "t1", "type": "thought", "title": "t", "content": "", "order": 2}
          ],
          "customPhrases": ["mine"]
        }"#,
    )
    .unwrap();

    let store = JsonFileStore::new(&path);
    let mut service = ArchiveService::open(&store).unwrap();
    assert_eq!(service.data().items.len(), 3);
    match service.data().find("m1").unwrap() {
        Item::Memory(memory) => {
            assert_eq!((memory.width, memory.height), (300, 280));
            assert_eq!(memory.created_at.timestamp(), 0);
        }
        other => panic!("unexpected variant {other:?}"),
    }
    match service.data().find("t1").unwrap() {
        Item::Thought(thought) => assert_eq!((thought.width, thought.height), (280, 220)),
        other => panic!("unexpected variant {other:?}"),
    }

    service.add_phrase("new").unwrap();
    let reloaded = JsonFileStore::new(&path).load().unwrap();
    assert_eq!(reloaded.items.len(), 3);
    assert_eq!(
        reloaded.custom_phrases,
        vec!["mine".to_string(), "new".to_string()]
    );
    assert!(!reloaded.find("d1").unwrap().as_divider().unwrap().collapsed);
}
