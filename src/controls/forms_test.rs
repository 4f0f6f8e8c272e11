use super::*;

#[test]
fn import_and_download_gating() {
    assert!(import_disabled(""));
    assert!(!import_disabled("Pokémon: 12"));
    assert!(download_disabled(0));
    assert!(!download_disabled(3));
}

#[test]
fn best_of_one_hides_extra_games() {
    assert_eq!(best_of_classes("1"), ["mt-1", "d-none", "d-none"]);
    assert_eq!(best_of_classes("3"), ["mt-1", "mt-1", "mt-1"]);
}

#[test]
fn battle_submit_requires_all_three() {
    assert!(battle_submit_disabled(None, Some("lugia"), Some("W")));
    assert!(battle_submit_disabled(Some("gardevoir"), None, Some("W")));
    assert!(battle_submit_disabled(Some("gardevoir"), Some("lugia"), None));
    assert!(!battle_submit_disabled(Some("gardevoir"), Some("lugia"), Some("W")));
}
