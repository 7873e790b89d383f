//! Matching and ranking behavior over realistic corpora.

use super::common::{engine_with, make_post, sample_corpus};
use ferret::{FieldKey, RESULT_CAP};

#[test]
fn empty_and_whitespace_queries_return_nothing() {
    let engine = engine_with(sample_corpus(), "en");
    assert!(engine.search("").is_empty());
    assert!(engine.search("   \t  ").is_empty());
}

#[test]
fn no_match_returns_empty_not_everything() {
    let engine = engine_with(sample_corpus(), "en");
    assert!(engine.search("zzzzzzzz").is_empty());
}

#[test]
fn misspelled_query_still_surfaces_results() {
    let engine = engine_with(sample_corpus(), "en");
    // "bayesain" — transposed vowels, two edits from "bayesian"
    let results = engine.search("bayesain");
    assert!(
        results.iter().any(|r| r.entry.title.contains("Bayesian")),
        "fuzzy matching should tolerate the transposition"
    );
}

#[test]
fn title_match_outranks_description_match() {
    let engine = engine_with(sample_corpus(), "en");
    let results = engine.search("decision");
    // "Decision Intelligence in Production" has it in the title (weight 2.0);
    // nothing else mentions it at a higher-weighted field
    assert_eq!(results[0].entry.path, "en/product/decisions");
}

#[test]
fn scores_are_descending() {
    let mut entries = sample_corpus();
    for i in 0..30 {
        let mut extra = make_post("Posterior Notes", &format!("en/notes/{}", i));
        extra.body = Some("bayesian odds and ends".to_string());
        entries.push(extra);
    }
    let engine = engine_with(entries, "en");
    let results = engine.search("bayesian");
    for pair in results.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "results must be ranked by descending score"
        );
    }
}

#[test]
fn more_than_cap_matches_truncate_to_cap() {
    let entries: Vec<_> = (0..120)
        .map(|i| make_post("Bayesian Memo", &format!("en/memos/{}", i)))
        .collect();
    let engine = engine_with(entries, "en");
    assert_eq!(engine.search("bayesian").len(), RESULT_CAP);
}

#[test]
fn every_result_carries_match_spans() {
    let engine = engine_with(sample_corpus(), "en");
    for result in engine.search("bayesian") {
        assert!(!result.matches.is_empty());
        for field_match in &result.matches {
            assert!(!field_match.spans.is_empty());
            for span in &field_match.spans {
                assert!(span.start < span.end);
            }
        }
    }
}

#[test]
fn multi_term_queries_intersect() {
    let engine = engine_with(sample_corpus(), "en");
    // Both terms appear in the intro post (title + body)
    let results = engine.search("bayesian evidence");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].entry.path, "en/posts/en/stats/intro");
    // One term missing everywhere kills the entry
    assert!(engine.search("bayesian zeppelin").is_empty());
}

#[test]
fn body_match_metadata_uses_body_raw_key() {
    let engine = engine_with(sample_corpus(), "en");
    let results = engine.search("posteriors");
    let intro = results
        .iter()
        .find(|r| r.entry.path == "en/posts/en/stats/intro")
        .expect("intro post matches");
    assert!(intro
        .matches
        .iter()
        .any(|m| m.key == FieldKey::Body && m.key.as_str() == "body.raw"));
}
