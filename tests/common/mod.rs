//! Shared test utilities and fixtures.

#![allow(dead_code)]

use ferret::{CorpusEntry, SearchEngine};

// Re-export canonical test utilities from ferret::testing
pub use ferret::testing::{
    corpus_from, make_link, make_post, make_result, make_subscriber, subscriber_response,
    Subscriber,
};

/// Build an engine over prebuilt entries, skipping the loader.
pub fn engine_with(entries: Vec<CorpusEntry>, locale: &str) -> SearchEngine {
    SearchEngine::new(corpus_from(entries, locale))
}

/// A small bilingual corpus shaped like the real index payload.
pub fn sample_corpus() -> Vec<CorpusEntry> {
    let mut intro = make_post("Bayesian Inference 101", "en/posts/en/stats/intro");
    intro.summary = Some("A gentle introduction to priors and posteriors".to_string());
    intro.tags = vec!["stats".to_string(), "tutorial".to_string()];
    intro.body = Some(
        "Bayesian inference updates beliefs as evidence arrives. \
         Priors encode what you knew before; posteriors what you know now."
            .to_string(),
    );

    let mut networks = make_post("Bayesian Networks", "ko/posts/ko/stats/bn");
    networks.summary = Some("조건부 확률 그래프 모델".to_string());
    networks.tags = vec!["stats".to_string()];
    networks.body = Some("베이지안 네트워크는 변수 간 의존 관계를 그래프로 표현합니다.".to_string());

    let mut decisions = make_post("Decision Intelligence in Production", "en/product/decisions");
    decisions.description = Some("How EXAWin ranks actions by expected value".to_string());
    decisions.body = Some(
        "Expected value of information tells you which experiment to run next."
            .to_string(),
    );

    vec![intro, networks, decisions]
}
