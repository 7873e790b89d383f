//! Locale derivation and post-filtering across the pipeline.

use super::common::{engine_with, make_link, make_post, make_result, sample_corpus};
use ferret::{derive_locale, filter_by_locale, EntryKind};

#[test]
fn en_locale_view_drops_matching_ko_post() {
    // Two posts, both matching the query; only the en one is display-eligible.
    let corpus = vec![
        make_post("Bayesian Inference 101", "en/posts/en/stats/intro"),
        make_post("Bayesian Networks", "ko/posts/ko/stats/bn"),
    ];
    let engine = engine_with(corpus, "en");

    let results = engine.search("bayesian");
    assert_eq!(results.len(), 2, "both posts fuzzy-match");

    let filtered = filter_by_locale(results, "en");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].entry.title, "Bayesian Inference 101");
}

#[test]
fn links_survive_any_locale_view() {
    let results = vec![
        make_result(make_link("Pricing", "/en/pricing", "plans cost")),
        make_result(make_post("EN Post", "en/post")),
    ];
    let filtered = filter_by_locale(results, "ko");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].entry.kind, EntryKind::Link);
}

#[test]
fn posts_literal_shifts_locale_segment() {
    assert_eq!(derive_locale("posts/en/stats/intro"), Some("en"));
    assert_eq!(derive_locale("en/posts/en/stats/intro"), Some("en"));
    assert_eq!(derive_locale("ko/anything"), Some("ko"));
}

#[test]
fn filtering_is_case_insensitive_both_ways() {
    let results = vec![make_result(make_post("Post", "EN/stats/intro"))];
    assert_eq!(filter_by_locale(results.clone(), "en").len(), 1);
    assert_eq!(filter_by_locale(results, "eN").len(), 1);
}

#[test]
fn filtering_never_reorders_survivors() {
    let engine = engine_with(sample_corpus(), "en");
    let results = engine.search("stats");
    let order_before: Vec<String> = results
        .iter()
        .filter(|r| derive_locale(&r.entry.path) == Some("en"))
        .map(|r| r.entry.path.clone())
        .collect();

    let filtered = filter_by_locale(results, "en");
    let order_after: Vec<String> = filtered.iter().map(|r| r.entry.path.clone()).collect();
    assert_eq!(order_before, order_after);
}

#[test]
fn unknown_locale_view_keeps_only_links() {
    let engine = engine_with(sample_corpus(), "en");
    let results = engine.search("bayesian");
    let filtered = filter_by_locale(results, "de");
    assert!(filtered.iter().all(|r| r.entry.kind == EntryKind::Link));
}
