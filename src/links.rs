//! Static, locale-partitioned quick-link tables.
//!
//! These are the navigation shortcuts that appear in the search modal next to
//! content hits: product pages, pricing, contact. One table per locale, built
//! once at first use, never mutated afterwards. Links are localized at
//! construction time, which is why the locale filter waves them through.

use crate::types::QuickLink;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static QUICK_LINKS: Lazy<HashMap<&'static str, Vec<QuickLink>>> = Lazy::new(|| {
    let mut tables: HashMap<&'static str, Vec<QuickLink>> = HashMap::new();

    tables.insert(
        "en",
        vec![
            QuickLink {
                name: "Product Overview",
                href: "/en/product",
                keywords: "bayesian decision intelligence platform features",
            },
            QuickLink {
                name: "Pricing",
                href: "/en/pricing",
                keywords: "plans cost enterprise license quote",
            },
            QuickLink {
                name: "Case Studies",
                href: "/en/cases",
                keywords: "customers success stories deployments",
            },
            QuickLink {
                name: "Documentation",
                href: "/en/docs",
                keywords: "guides api reference getting started",
            },
            QuickLink {
                name: "Contact Sales",
                href: "/en/contact",
                keywords: "demo inquiry sales support email",
            },
        ],
    );

    tables.insert(
        "ko",
        vec![
            QuickLink {
                name: "제품 소개",
                href: "/ko/product",
                keywords: "베이지안 의사결정 인텔리전스 플랫폼 기능",
            },
            QuickLink {
                name: "요금 안내",
                href: "/ko/pricing",
                keywords: "가격 플랜 기업 라이선스 견적",
            },
            QuickLink {
                name: "고객 사례",
                href: "/ko/cases",
                keywords: "도입 사례 고객 성공",
            },
            QuickLink {
                name: "문서",
                href: "/ko/docs",
                keywords: "가이드 API 레퍼런스 시작하기",
            },
            QuickLink {
                name: "영업 문의",
                href: "/ko/contact",
                keywords: "데모 문의 영업 지원 이메일",
            },
        ],
    );

    tables
});

/// Quick links for a locale. Unknown locales get an empty slice, not a panic.
///
/// Lookup is case-insensitive because locale codes arrive from URL segments
/// with inconsistent casing.
pub fn quick_links(locale: &str) -> &'static [QuickLink] {
    let locale = locale.to_ascii_lowercase();
    QUICK_LINKS
        .get(locale.as_str())
        .map_or(&[], Vec::as_slice)
}
