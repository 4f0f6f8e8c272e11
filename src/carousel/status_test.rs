use serde_json::json;

use super::*;

// =============================================================
// match_status
// =============================================================

#[test]
fn expected_count_equal_is_matched() {
    let refs = [ReferenceEntry::new("card-7", 2)];
    assert_eq!(match_status("card-7", Some(2), &refs), MatchStatus::Matched);
}

#[test]
fn expected_count_different_is_unmatched() {
    let refs = [ReferenceEntry::new("card-7", 1)];
    assert_eq!(match_status("card-7", Some(2), &refs), MatchStatus::Unmatched);
}

#[test]
fn no_observation_is_unknown() {
    let refs = [ReferenceEntry::new("card-7", 2)];
    assert_eq!(match_status("card-7", None, &refs), MatchStatus::Unknown);
    assert_eq!(match_status("card-7", None, &[]), MatchStatus::Unknown);
}

#[test]
fn no_matching_entry_is_unmatched() {
    let refs = [ReferenceEntry::new("card-1", 1)];
    assert_eq!(match_status("card-7", Some(0), &refs), MatchStatus::Unmatched);
    assert_eq!(match_status("card-7", Some(1), &[]), MatchStatus::Unmatched);
}

#[test]
fn repeated_entries_add_up() {
    let refs = [
        ReferenceEntry::new("card-7", 1),
        ReferenceEntry::new("card-3", 1),
        ReferenceEntry::new("card-7", 1),
    ];
    assert_eq!(match_status("card-7", Some(2), &refs), MatchStatus::Matched);
    assert_eq!(match_status("card-7", Some(1), &refs), MatchStatus::Unmatched);
}

#[test]
fn icon_classes() {
    assert_eq!(MatchStatus::Unknown.icon_class(), "");
    assert_eq!(MatchStatus::Matched.icon_class(), "fas fa-check text-success");
    assert_eq!(MatchStatus::Unmatched.icon_class(), "fas fa-xmark text-danger");
}

#[test]
fn reference_entry_defaults_count_to_one() {
    let entry: ReferenceEntry = serde_json::from_value(json!({"key": "card-2"})).unwrap();
    assert_eq!(entry, ReferenceEntry::new("card-2", 1));
}

// =============================================================
// StatusMatcher
// =============================================================

#[test]
fn default_matcher_reads_card_code() {
    let matcher = StatusMatcher::default();
    assert_eq!(matcher.key_field(), "card_code");
    let records = [json!({"card_code": "sv1-25", "name": "Pikachu"})];
    assert_eq!(matcher.entries(&records), vec![ReferenceEntry::new("sv1-25", 1)]);
}

#[test]
fn matcher_with_id_field() {
    let matcher = StatusMatcher::new("id");
    let records = [json!({"id": "a"}), json!({"id": "a"}), json!({"card_code": "a"})];
    assert_eq!(matcher.status("a", Some(2), &records), MatchStatus::Matched);
}

#[test]
fn matcher_reads_explicit_counts() {
    let matcher = StatusMatcher::default();
    let records = [
        json!({"card_code": "x", "expected_count": 3}),
        json!({"card_code": "y", "expectedCount": 2}),
    ];
    let entries = matcher.entries(&records);
    assert_eq!(entries, vec![ReferenceEntry::new("x", 3), ReferenceEntry::new("y", 2)]);
}

#[test]
fn matcher_accepts_numeric_keys() {
    let matcher = StatusMatcher::new("id");
    let records = [json!({"id": 17})];
    assert_eq!(matcher.status("17", Some(1), &records), MatchStatus::Matched);
}

#[test]
fn matcher_skips_records_without_key() {
    let matcher = StatusMatcher::default();
    let records = [json!({"name": "no code"}), json!(null), json!({"card_code": true})];
    assert!(matcher.entries(&records).is_empty());
}

#[test]
fn status_reflects_changed_records() {
    let matcher = StatusMatcher::default();
    let mut records = vec![json!({"card_code": "x"})];
    assert_eq!(matcher.status("x", Some(1), &records), MatchStatus::Matched);
    records.push(json!({"card_code": "x"}));
    assert_eq!(matcher.status("x", Some(1), &records), MatchStatus::Unmatched);
}
