//! Integration tests for gauge-settings

use gauge_settings::*;
use std::collections::HashMap;

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// 120 settings, inserted in reverse id order, spread over three categories.
fn store() -> MemoryStore {
    let mut store = MemoryStore::new();
    for id in (1..=120).rev() {
        let setting = Setting::new(id, format!("key_{id}"))
            .category(id % 3)
            .status(if id % 10 == 0 { 0 } else { 1 })
            .title(format!("Setting number {id}"));
        store.insert(setting).unwrap();
    }
    store
}

#[test]
fn test_unfiltered_search_pages_by_id() {
    let store = store();

    let first = search(&store, &HashMap::new(), 1).unwrap();
    assert_eq!(first.len(), DEFAULT_PAGE_SIZE);
    assert_eq!(first.data[0].id, 1);
    assert_eq!(first.meta.total, 120);
    assert!(first.meta.has_next);

    let last = search(&store, &HashMap::new(), 3).unwrap();
    assert_eq!(last.len(), 20);
    assert_eq!(last.data[0].id, 101);
    assert!(!last.meta.has_next);
}

#[test]
fn test_page_zero_is_first_page() {
    let page = search(&store(), &HashMap::new(), 0).unwrap();
    assert_eq!(page.meta.page, 1);
    assert_eq!(page.data[0].id, 1);
}

#[test]
fn test_page_past_the_end_is_empty() {
    let store = store();

    let page = search(&store, &HashMap::new(), usize::MAX).unwrap();
    assert!(page.is_empty());
    assert_eq!(page.meta.total, 120);

    let huge = usize::MAX.to_string();
    let pagination = Pagination::from_query_params(&params(&[("page", huge.as_str())]));
    let page = SettingsSearch::default().search(&store, pagination).unwrap();
    assert!(page.is_empty());
}

#[test]
fn test_equality_filters() {
    let store = store();

    let page = search(&store, &params(&[("status", "0")]), 1).unwrap();
    assert_eq!(page.meta.total, 12);
    assert!(page.data.iter().all(|s| s.id % 10 == 0));

    let page = search(&store, &params(&[("status", "0"), ("cat_id", "0")]), 1).unwrap();
    let ids: Vec<i64> = page.data.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![30, 60, 90, 120]);
}

#[test]
fn test_substring_filters() {
    let store = store();

    let page = search(&store, &params(&[("name", "KEY_11")]), 1).unwrap();
    let ids: Vec<i64> = page.data.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![11, 110, 111, 112, 113, 114, 115, 116, 117, 118, 119]);

    let page = search(&store, &params(&[("label", "number 42")]), 1).unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].name, "key_42");
}

#[test]
fn test_invalid_criteria_return_everything() {
    let store = store();
    let mut criteria = SettingsSearch::from_params(&params(&[("id", "abc"), ("name", "key_1")]));

    let page = criteria.search(&store, Pagination::default()).unwrap();
    assert_eq!(page.meta.total, 120);
    assert_eq!(criteria.errors().len(), 1);
    assert_eq!(criteria.errors()[0].message, "ID must be an integer.");
    assert_eq!(criteria.errors()[0].constraint, "pattern");
}

#[test]
fn test_no_match() {
    let page = search(&store(), &params(&[("id", "999")]), 1).unwrap();
    assert!(page.is_empty());
    assert_eq!(page.meta.total_pages, 0);
}

#[test]
fn test_search_json_shape() {
    let page = search(&store(), &params(&[("id", "5")]), 1).unwrap();
    let json = serde_json::to_value(&page).unwrap();

    assert_eq!(json["data"][0]["name"], "key_5");
    assert_eq!(json["meta"]["per_page"], 50);
    assert_eq!(json["meta"]["total"], 1);
}
