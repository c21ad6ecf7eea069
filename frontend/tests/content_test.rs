//! Landing copy helpers.

use rafiq_frontend::content::{self, initial, nav_anchor};

#[test]
fn nav_anchors_are_slugged() {
    let anchors: Vec<String> = content::NAV_ITEMS.iter().map(|i| nav_anchor(i)).collect();
    assert_eq!(
        anchors,
        vec!["#features", "#for-teachers", "#for-parents", "#about", "#contact"]
    );
}

#[test]
fn only_first_space_is_replaced() {
    assert_eq!(nav_anchor("A B C"), "#a-b c");
}

#[test]
fn initials() {
    assert_eq!(initial("Sarah Chen"), "S");
    assert_eq!(initial("Émile"), "É");
    assert_eq!(initial(""), "");
}

#[test]
fn family_snaps_progress_is_a_percentage() {
    for child in content::FAMILY_SNAPS {
        assert!(child.progress <= 100, "{}", child.name);
        assert!(child.average <= 100, "{}", child.name);
    }
}
