use super::*;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

fn deck(id: &str) -> ArchetypeDeck {
    ArchetypeDeck { id: id.into(), name: id.into(), icons: strings(&["pikachu"]) }
}

// =============================================================
// clean_id
// =============================================================

#[test]
fn clean_id_strips_symbols_and_joins_words() {
    assert_eq!(clean_id("Charizard ex / Pidgeot!"), "charizard-ex-pidgeot");
}

#[test]
fn clean_id_collapses_whitespace_runs_without_trimming() {
    assert_eq!(clean_id("  Lost   Box  "), "-lost-box-");
}

#[test]
fn clean_id_drops_non_ascii_letters() {
    assert_eq!(clean_id("Pokémon ex"), "pokmon-ex");
}

#[test]
fn clean_id_run_survives_dropped_symbols() {
    // The symbol goes first, then the surrounding spaces form one run.
    assert_eq!(clean_id("Gardevoir & Friends"), "gardevoir-friends");
}

#[test]
fn clean_id_keeps_underscores_and_digits() {
    assert_eq!(clean_id("Deck_2 Beta"), "deck_2-beta");
}

#[test]
fn clean_id_of_symbols_only_is_empty() {
    assert_eq!(clean_id("!!!"), "");
}

// =============================================================
// add_check
// =============================================================

#[test]
fn ready_with_icons_and_new_name() {
    let check = add_check(&strings(&["mew"]), "Mew Box", &[deck("lost-box")], &[]);
    assert_eq!(check, AddCheck::Ready);
    assert!(!check.is_disabled());
    assert_eq!(check.message(), "");
}

#[test]
fn missing_icons_and_name() {
    let check = add_check(&[], "", &[], &[]);
    assert_eq!(check.message(), "Please select icons and input name.");
}

#[test]
fn missing_icons_only() {
    assert_eq!(add_check(&[], "Mew Box", &[], &[]).message(), "Please select icons.");
}

#[test]
fn missing_name_only() {
    assert_eq!(add_check(&strings(&["mew"]), "", &[], &[]).message(), "Please input name.");
}

#[test]
fn existing_id_is_rejected() {
    let check = add_check(&strings(&["mew"]), "Lost Box!", &[deck("lost-box")], &[]);
    assert_eq!(check.message(), "Name already exists, please try a different name.");
}

#[test]
fn reserved_id_is_rejected() {
    let check = add_check(&strings(&["mew"]), "Other", &[], &strings(&["other"]));
    assert!(check.is_disabled());
}

// =============================================================
// add_deck / tags
// =============================================================

#[test]
fn add_deck_waits_for_click() {
    assert_eq!(add_deck(0, &strings(&["mew"]), "Mew", &[]), None);
}

#[test]
fn add_deck_appends_slugged_entry() {
    let decks = add_deck(1, &strings(&["mew"]), "Mew Box", &[deck("lost-box")]).unwrap();
    assert_eq!(decks.len(), 2);
    assert_eq!(decks[1].id, "mew-box");
    assert_eq!(decks[1].name, "Mew Box");
    assert_eq!(decks[1].icons, strings(&["mew"]));
}

#[test]
fn tag_add_gating() {
    let current = strings(&["aggro"]);
    let others = strings(&["control"]);
    assert!(tag_add_disabled("", &current, &others));
    assert!(tag_add_disabled("aggro", &current, &others));
    assert!(tag_add_disabled("control", &current, &others));
    assert!(!tag_add_disabled("combo", &current, &others));
}
