use super::*;

// =============================================================
// ContainerKey
// =============================================================

#[test]
fn key_from_descriptor_is_json_text() {
    let key = ContainerKey::from_descriptor(&("tier", 2)).unwrap();
    assert_eq!(key.as_str(), r#"["tier",2]"#);
}

#[test]
fn key_display_matches_raw() {
    let key = ContainerKey::from("tray");
    assert_eq!(key.to_string(), "tray");
}

#[test]
fn pattern_id_encodes_index_before_type() {
    let key = PatternId::new("tier-list-drag-container", "S").key().unwrap();
    assert_eq!(key.as_str(), r#"{"index":"S","type":"tier-list-drag-container"}"#);
}

#[test]
fn pattern_id_accepts_numeric_index() {
    let key = PatternId::new("drag", 3).key().unwrap();
    assert_eq!(key.as_str(), r#"{"index":3,"type":"drag"}"#);
}

#[test]
fn pattern_id_roundtrips_through_key_text() {
    let id = PatternId::new("drag", "tray");
    let key = id.key().unwrap();
    let back: PatternId = serde_json::from_str(key.as_str()).unwrap();
    assert_eq!(back, id);
}

// =============================================================
// Container
// =============================================================

fn tray() -> Container {
    Container::new(ContainerKey::from("tray"), vec!["x".into(), "y".into(), "z".into()])
}

#[test]
fn position_finds_items() {
    let c = tray();
    assert_eq!(c.position(&"x".into()), Some(0));
    assert_eq!(c.position(&"z".into()), Some(2));
    assert_eq!(c.position(&"w".into()), None);
}

#[test]
fn insert_past_end_appends() {
    let mut c = tray();
    let at = c.insert_at(99, "w".into());
    assert_eq!(at, 3);
    assert_eq!(c.items().last(), Some(&ItemId::from("w")));
}

#[test]
fn remove_then_insert_keeps_length() {
    let mut c = tray();
    let moved = c.remove_at(0);
    c.insert_at(1, moved);
    assert_eq!(c.len(), 3);
    let ids: Vec<&str> = c.items().iter().map(ItemId::as_str).collect();
    assert_eq!(ids, ["y", "x", "z"]);
}

#[test]
fn empty_container_reports_empty() {
    let c = Container::new(ContainerKey::from("b"), Vec::new());
    assert!(c.is_empty());
    assert_eq!(c.len(), 0);
}
