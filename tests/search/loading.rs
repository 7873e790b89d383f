//! Corpus loading through the file source, end to end.

use ferret::{quick_links, Corpus, EntryKind, FileSource, SearchEngine};
use std::io::Write;

const INDEX_JSON: &str = r#"[
    {
        "title": "Bayesian Inference 101",
        "summary": "Priors and posteriors",
        "date": "2026-05-12",
        "tags": ["stats", "tutorial"],
        "path": "en/posts/en/stats/intro",
        "slug": "intro",
        "locale": "en",
        "body": {"raw": "Bayesian inference updates beliefs as evidence arrives."},
        "images": ["/img/intro.png"]
    },
    {
        "title": "베이지안 네트워크",
        "path": "ko/posts/ko/stats/bn",
        "tags": []
    }
]"#;

fn write_index(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn file_index_loads_and_searches() {
    let file = write_index(INDEX_JSON);
    let corpus = Corpus::load(&FileSource::new(file.path()), "en");
    assert!(!corpus.load_failed());
    assert_eq!(corpus.len(), 2 + quick_links("en").len());

    let engine = SearchEngine::new(corpus);
    let results = engine.search("bayesian");
    assert!(results
        .iter()
        .any(|r| r.entry.path == "en/posts/en/stats/intro"));
}

#[test]
fn unknown_wire_fields_are_ignored() {
    let file = write_index(INDEX_JSON);
    let corpus = Corpus::load(&FileSource::new(file.path()), "en");
    let intro = &corpus.entries()[0];
    assert_eq!(intro.date.as_deref(), Some("2026-05-12"));
    assert_eq!(
        intro.body.as_deref(),
        Some("Bayesian inference updates beliefs as evidence arrives.")
    );
}

#[test]
fn missing_file_gives_empty_failed_corpus() {
    let corpus = Corpus::load(&FileSource::new("/no/such/search.json"), "en");
    assert!(corpus.load_failed());
    assert!(corpus.is_empty());

    // A failed corpus still searches cleanly — it just finds nothing
    let engine = SearchEngine::new(corpus);
    assert!(engine.search("bayesian").is_empty());
}

#[test]
fn malformed_json_gives_empty_failed_corpus() {
    let file = write_index("{\"title\": \"not an array\"}");
    let corpus = Corpus::load(&FileSource::new(file.path()), "en");
    assert!(corpus.load_failed());
    assert!(corpus.is_empty());
}

#[test]
fn locale_switch_rebuilds_with_new_links() {
    let file = write_index(INDEX_JSON);
    let en = Corpus::load(&FileSource::new(file.path()), "en");
    let ko = Corpus::load(&FileSource::new(file.path()), "ko");

    let en_links: Vec<_> = en
        .entries()
        .iter()
        .filter(|e| e.kind == EntryKind::Link)
        .collect();
    let ko_links: Vec<_> = ko
        .entries()
        .iter()
        .filter(|e| e.kind == EntryKind::Link)
        .collect();

    assert!(en_links.iter().all(|l| l.path.starts_with("/en/")));
    assert!(ko_links.iter().all(|l| l.path.starts_with("/ko/")));
}
