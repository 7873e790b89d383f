//! Snippet window and highlighting behavior.

use super::common::{engine_with, sample_corpus};
use ferret::{snippet, snippet_for, SnippetRun, CONTEXT_RADIUS, ELLIPSIS, FALLBACK_LEN};

fn content_len(runs: &[SnippetRun]) -> usize {
    runs.iter()
        .filter(|r| r.text != ELLIPSIS)
        .map(|r| r.text.chars().count())
        .sum()
}

#[test]
fn snippet_window_is_bounded() {
    let text = format!("{}needle{}", "x".repeat(200), "y".repeat(200));
    let runs = snippet(&text, "needle", &[]);
    assert!(content_len(&runs) <= 2 * CONTEXT_RADIUS + "needle".len());
    assert_eq!(runs.first().unwrap().text, ELLIPSIS);
    assert_eq!(runs.last().unwrap().text, ELLIPSIS);
}

#[test]
fn ellipsis_only_where_clamped() {
    // Match near the start: no leading ellipsis, trailing one present
    let text = format!("needle{}", "y".repeat(200));
    let runs = snippet(&text, "needle", &[]);
    assert_ne!(runs.first().unwrap().text, ELLIPSIS);
    assert_eq!(runs.last().unwrap().text, ELLIPSIS);

    // Match near the end: leading ellipsis, no trailing one
    let text = format!("{}needle", "y".repeat(200));
    let runs = snippet(&text, "needle", &[]);
    assert_eq!(runs.first().unwrap().text, ELLIPSIS);
    assert_ne!(runs.last().unwrap().text, ELLIPSIS);
}

#[test]
fn empty_query_takes_fallback_truncation() {
    let text = "word ".repeat(50);
    let runs = snippet(&text, "", &[]);
    assert_eq!(runs.len(), 1);
    assert!(!runs[0].highlighted);
    assert_eq!(runs[0].text.chars().count(), FALLBACK_LEN + 1);
}

#[test]
fn unmatched_query_takes_fallback_truncation() {
    let runs = snippet("some body text", "absent", &[]);
    assert_eq!(runs.len(), 1);
    assert!(!runs[0].highlighted);
}

#[test]
fn metacharacter_queries_highlight_literally() {
    let text = "Configure p(x|y) before the run; p(x|y) drives the posterior.";
    let runs = snippet(text, "p(x|y)", &[]);
    let highlighted: Vec<_> = runs.iter().filter(|r| r.highlighted).collect();
    assert_eq!(highlighted.len(), 2);
    assert!(highlighted.iter().all(|r| r.text == "p(x|y)"));
}

#[test]
fn regex_metacharacters_never_panic() {
    let text = "harmless body text";
    for query in [".*", "[", "]", "(", ")", "{", "}", "|", "^", "$", "\\", "+?"] {
        let _ = snippet(text, query, &[]);
    }
}

#[test]
fn search_results_feed_the_highlighter() {
    let engine = engine_with(sample_corpus(), "en");
    let results = engine.search("priors");
    let intro = results
        .iter()
        .find(|r| r.entry.path == "en/posts/en/stats/intro")
        .expect("intro matches");
    let runs = snippet_for(intro, "priors");
    assert!(runs.iter().any(|r| r.highlighted));
    // Alternation: no two consecutive non-ellipsis runs share a highlight state
    for pair in runs.windows(2) {
        if pair[0].text != ELLIPSIS && pair[1].text != ELLIPSIS {
            assert_ne!(pair[0].highlighted, pair[1].highlighted);
        }
    }
}

#[test]
fn korean_body_highlights_without_panicking() {
    let engine = engine_with(sample_corpus(), "en");
    let results = engine.search("네트워크");
    let bn = results
        .iter()
        .find(|r| r.entry.path == "ko/posts/ko/stats/bn")
        .expect("ko post matches");
    let runs = snippet_for(bn, "네트워크");
    assert!(runs.iter().any(|r| r.highlighted && r.text == "네트워크"));
}
