mod support;

use chrono::Duration;
use docshelf::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use support::{ids, now, one_hour_ago, seeded_manager};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[tokio::test]
async fn empty_criteria_returns_every_document() {
    let manager = seeded_manager().await;

    let results = manager.search(&SearchCriteria::default()).await.unwrap();

    assert_eq!(ids(&results), vec!["1", "2"]);
}

#[tokio::test]
async fn search_on_empty_store_returns_nothing() {
    let manager = DocumentManager::in_memory();

    assert!(manager.search(&SearchCriteria::default()).await.unwrap().is_empty());
}

#[rstest]
#[case::single_prefix(&["First"], &["1"])]
#[case::ignores_case(&["sECOND doc"], &["2"])]
#[case::every_prefix_must_match(&["First", "Second"], &[])]
#[case::overlapping_prefixes(&["F", "First Doc"], &["1"])]
#[case::shared_suffix_is_not_a_prefix(&["Document"], &[])]
#[case::empty_list_matches_all(&[], &["1", "2"])]
#[tokio::test]
async fn search_by_title_prefixes(#[case] prefixes: &[&str], #[case] expected: &[&str]) {
    let manager = seeded_manager().await;
    let criteria = SearchCriteria {
        title_prefixes: Some(strings(prefixes)),
        ..Default::default()
    };

    let results = manager.search(&criteria).await.unwrap();

    assert_eq!(ids(&results), strings(expected));
}

#[rstest]
#[case::lowercase(&["test"], &["1"])]
#[case::uppercase(&["TEST"], &["1"])]
#[case::shared_word(&["content"], &["1", "2"])]
#[case::every_substring_must_match(&["keyword", "without"], &["2"])]
#[case::no_match(&["missing"], &[])]
#[case::empty_list_matches_all(&[], &["1", "2"])]
#[tokio::test]
async fn search_by_contained_content(#[case] needles: &[&str], #[case] expected: &[&str]) {
    let manager = seeded_manager().await;
    let criteria = SearchCriteria {
        contains_contents: Some(strings(needles)),
        ..Default::default()
    };

    let results = manager.search(&criteria).await.unwrap();

    assert_eq!(ids(&results), strings(expected));
}

#[rstest]
#[case::single_author(&["author1"], &["1"])]
#[case::any_listed_author(&["author1", "author2"], &["1", "2"])]
#[case::unknown_author(&["author3"], &[])]
#[case::case_sensitive(&["AUTHOR1"], &[])]
#[case::empty_list_matches_none(&[], &[])]
#[tokio::test]
async fn search_by_author_ids(#[case] author_ids: &[&str], #[case] expected: &[&str]) {
    let manager = seeded_manager().await;
    let criteria = SearchCriteria {
        author_ids: Some(strings(author_ids)),
        ..Default::default()
    };

    let results = manager.search(&criteria).await.unwrap();

    assert_eq!(ids(&results), strings(expected));
}

#[tokio::test]
async fn created_from_keeps_documents_created_at_or_before_it() {
    let manager = seeded_manager().await;
    let criteria = SearchCriteria {
        created_from: Some(one_hour_ago()),
        ..Default::default()
    };

    let results = manager.search(&criteria).await.unwrap();

    assert_eq!(ids(&results), vec!["2"]);
}

#[tokio::test]
async fn created_to_keeps_documents_created_at_or_after_it() {
    let manager = seeded_manager().await;
    let criteria = SearchCriteria {
        created_to: Some(now()),
        ..Default::default()
    };

    let results = manager.search(&criteria).await.unwrap();

    assert_eq!(ids(&results), vec!["1"]);
}

#[tokio::test]
async fn created_bounds_together_select_a_window() {
    let manager = seeded_manager().await;
    let criteria = SearchCriteria {
        created_from: Some(now()),
        created_to: Some(one_hour_ago() - Duration::minutes(1)),
        ..Default::default()
    };

    let results = manager.search(&criteria).await.unwrap();

    assert_eq!(ids(&results), vec!["1", "2"]);
}

#[tokio::test]
async fn search_with_multiple_filters() {
    let manager = seeded_manager().await;
    let criteria = SearchCriteria {
        title_prefixes: Some(strings(&["First"])),
        contains_contents: Some(strings(&["Content"])),
        author_ids: Some(strings(&["author1"])),
        ..Default::default()
    };

    let results = manager.search(&criteria).await.unwrap();

    assert_eq!(ids(&results), vec!["1"]);
}

#[tokio::test]
async fn one_failing_dimension_excludes_the_document() {
    let manager = seeded_manager().await;
    let criteria = SearchCriteria {
        title_prefixes: Some(strings(&["First"])),
        author_ids: Some(strings(&["author2"])),
        ..Default::default()
    };

    assert!(manager.search(&criteria).await.unwrap().is_empty());
}

#[tokio::test]
async fn search_reflects_overwritten_documents() {
    let manager = seeded_manager().await;
    let mut renamed = manager.find_by_id("1").await.unwrap().unwrap();
    renamed.title = "Renamed".to_string();
    manager.save(renamed).await.unwrap();

    let criteria = SearchCriteria {
        title_prefixes: Some(strings(&["First"])),
        ..Default::default()
    };

    assert!(manager.search(&criteria).await.unwrap().is_empty());
}

#[tokio::test]
async fn criteria_parsed_from_json() {
    let manager = seeded_manager().await;
    let criteria = SearchCriteria::from_json(json!({
        "contains_contents": ["KEYWORD"],
        "created_to": "2024-03-01T12:00:00Z",
    }))
    .unwrap();

    let results = manager.search(&criteria).await.unwrap();

    assert_eq!(ids(&results), vec!["1"]);
}

#[tokio::test]
async fn query_supports_disjunction_across_fields() {
    let manager = seeded_manager().await;
    let filter = Filter::eq(DocumentField::Title, "First Document")
        .or(Filter::contains(DocumentField::Content, "without"));

    let results = manager.query(&filter).await.unwrap();

    assert_eq!(ids(&results), vec!["1", "2"]);
}

#[tokio::test]
async fn query_supports_negation() {
    let manager = seeded_manager().await;
    let filter = Filter::any_of(DocumentField::AuthorId, vec!["author1"]).not();

    let results = manager.query(&filter).await.unwrap();

    assert_eq!(ids(&results), vec!["2"]);
}
