//! Search: normalization, match priority, highlight and modal side effects.

use crate::search::NO_MATCH_TEXT;
use crate::test_harness::TestCampus;

#[test]
fn exact_label_highlights_only_that_marker() {
    let mut campus = TestCampus::with_sample_data();
    campus.search("7");

    assert_eq!(campus.highlighted_labels(), vec!["7"]);
    assert!(campus.modal().is_shown());
    assert_eq!(campus.modal().title, "Cafetería");
    let seven = campus.marker_entity("7").unwrap();
    assert_eq!(campus.focus_requests(), &[seven]);
}

#[test]
fn unaccented_query_matches_accented_name() {
    let mut campus = TestCampus::with_sample_data();
    campus.search("cafeteria");
    let accented = campus.highlighted_labels();

    campus.search("CAFETERÍA");
    assert_eq!(campus.highlighted_labels(), accented);
    assert_eq!(accented, vec!["7"]);

    campus.search("banos");
    assert_eq!(campus.highlighted_labels(), vec!["12"]);
}

#[test]
fn first_partial_match_in_document_order_wins() {
    let mut campus = TestCampus::with_sample_data();
    campus.search("aula");
    assert_eq!(campus.highlighted_labels(), vec!["2"]);
}

#[test]
fn search_highlight_does_not_expire() {
    let mut campus = TestCampus::with_sample_data();
    campus.search("zona");
    campus.advance_secs(4.0);
    assert_eq!(campus.highlighted_labels(), vec!["13"]);
}

#[test]
fn empty_query_clears_highlights_only() {
    let mut campus = TestCampus::with_sample_data();
    campus.search("patio de comidas");
    assert_eq!(campus.notice_total(), 1);

    campus.search("info");
    assert_eq!(campus.highlighted_labels(), vec!["1"]);

    campus.search("   ");
    assert!(campus.highlighted_labels().is_empty());
    assert_eq!(campus.notice_total(), 1, "empty query never notifies");
}

#[test]
fn no_match_notifies_and_clears_highlights() {
    let mut campus = TestCampus::with_sample_data();
    campus.search("info");
    campus.search("biblioteca");

    assert!(campus.highlighted_labels().is_empty());
    assert_eq!(campus.notices(), vec![NO_MATCH_TEXT.to_string()]);
}

#[test]
fn hidden_nodes_are_not_searchable() {
    let mut campus = TestCampus::with_sample_data();
    campus.search("pasillo");
    assert!(campus.highlighted_labels().is_empty());
    assert_eq!(campus.notice_total(), 1);
}

#[test]
fn search_replaces_click_highlight() {
    let mut campus = TestCampus::with_sample_data();
    campus.click("1");
    campus.search("baños");
    assert_eq!(campus.highlighted_labels(), vec!["12"]);
}
