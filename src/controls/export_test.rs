use super::*;

#[test]
fn no_export_before_click() {
    assert_eq!(export_request(0, "trainerhill", "tier-list", "2024-05-01", false), None);
}

#[test]
fn file_name_uses_date_part_of_timestamp() {
    let req = export_request(1, "trainerhill", "tier-list", "2024-05-01T13:45:00.000Z", false).unwrap();
    assert_eq!(req.file_name, "trainerhill-tier-list-2024-05-01.png");
    assert_eq!(req.node_id, "tier-list");
}

#[test]
fn short_date_is_used_as_is() {
    let req = export_request(2, "dash", "matchups", "today", true).unwrap();
    assert_eq!(req.file_name, "dash-matchups-today.png");
}

#[test]
fn background_follows_theme() {
    let dark = export_request(1, "p", "n", "2024-05-01", true).unwrap();
    let light = export_request(1, "p", "n", "2024-05-01", false).unwrap();
    assert_eq!(dark.background, "#222222");
    assert_eq!(light.background, "#ffffff");
}
