// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted multi-field fuzzy matching over a prepared corpus.
//!
//! The engine prepares folded field texts and token tables once per corpus
//! (one locale load), not per keystroke. A query is normalized, split into
//! fragments, and every fragment must land somewhere in an entry for the
//! entry to rank — multi-term queries intersect, they don't union.
//!
//! Match position carries no weight: a hit at the end of a long body scores
//! the same as a hit in the first word. Relevance comes from which field
//! matched (title beats body) and how close the spelling was.
//!
//! # INVARIANTS
//!
//! ## FIELD_WEIGHTS
//! `title (2.0) > description (1.5) = tags (1.5) > summary (1.0) > body (0.8)`
//!
//! A perfect body match must never outrank a perfect title match for the
//! same fragment; keep the title weight strictly largest.
//!
//! ## RESULT_CAP
//! Output is truncated to the top 50 results by descending score before any
//! further processing. Cost control for the render path, not correctness.

use crate::corpus::Corpus;
use crate::fuzzy::bounded_distance;
use crate::types::{FieldKey, FieldMatch, MatchResult, MatchSpan};
use crate::utils::{fold_chars, normalize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Maximum number of results returned per query.
pub const RESULT_CAP: usize = 50;

/// Query fragments shorter than this contribute no match.
pub const MIN_FRAGMENT_LEN: usize = 2;

/// Default fuzziness: one edit allowed per this many fragment characters.
///
/// Moderately loose on purpose — near-miss spellings should surface results
/// at the cost of some precision. Raise to demand closer spellings.
pub const CHARS_PER_EDIT: usize = 4;

/// Relative weight of each searchable field.
pub fn field_weight(key: FieldKey) -> f64 {
    // INVARIANT: FIELD_WEIGHTS (see module header)
    match key {
        FieldKey::Title => 2.0,
        FieldKey::Description => 1.5,
        FieldKey::Tags => 1.5,
        FieldKey::Summary => 1.0,
        FieldKey::Body => 0.8,
    }
}

/// Edit budget for a fragment of `len` characters at the default fuzziness.
///
/// One edit from three characters up, another for every additional
/// [`CHARS_PER_EDIT`].
pub fn max_edits(len: usize) -> usize {
    edit_budget(len, CHARS_PER_EDIT)
}

fn edit_budget(len: usize, chars_per_edit: usize) -> usize {
    if len < 3 {
        0
    } else {
        (len / chars_per_edit.max(1)).max(1)
    }
}

/// One field of one entry, folded and tokenized for matching.
struct PreparedField {
    key: FieldKey,
    chars: Vec<char>,
    tokens: Vec<Token>,
}

/// A word within a folded field text.
struct Token {
    start: usize,
    text: String,
    len: usize,
}

struct PreparedEntry {
    fields: Vec<PreparedField>,
}

/// Where one fragment landed in one field.
struct FieldHit {
    key: FieldKey,
    span: MatchSpan,
    quality: f64,
}

struct Candidate {
    index: usize,
    score: f64,
    matches: Vec<FieldMatch>,
}

/// The search engine: a corpus plus its prepared match tables.
pub struct SearchEngine {
    corpus: Corpus,
    prepared: Vec<PreparedEntry>,
    chars_per_edit: usize,
}

impl SearchEngine {
    /// Prepare `corpus` for searching. Runs once per corpus swap.
    pub fn new(corpus: Corpus) -> SearchEngine {
        let prepared = corpus.entries().iter().map(prepare_entry).collect();
        SearchEngine {
            corpus,
            prepared,
            chars_per_edit: CHARS_PER_EDIT,
        }
    }

    /// Override the fuzziness threshold: one edit per `chars_per_edit`
    /// fragment characters. Higher values demand closer spellings.
    pub fn with_fuzziness(mut self, chars_per_edit: usize) -> SearchEngine {
        self.chars_per_edit = chars_per_edit;
        self
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Search the corpus, returning ranked results with match spans.
    ///
    /// Empty and whitespace-only queries return nothing — the modal shows
    /// quick links through other means, never a full corpus dump.
    pub fn search(&self, query: &str) -> Vec<MatchResult> {
        let fragments: Vec<Vec<char>> = normalize(query)
            .split(' ')
            .filter(|f| f.chars().count() >= MIN_FRAGMENT_LEN)
            .map(|f| f.chars().collect())
            .collect();

        if fragments.is_empty() {
            return Vec::new();
        }

        let mut candidates = self.score_entries(&fragments);

        // Descending score; corpus order breaks ties deterministically
        candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.index.cmp(&b.index))
        });
        candidates.truncate(RESULT_CAP);

        candidates
            .into_iter()
            .map(|c| MatchResult {
                entry: self.corpus.entries()[c.index].clone(),
                score: c.score,
                matches: c.matches,
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn score_entries(&self, fragments: &[Vec<char>]) -> Vec<Candidate> {
        self.prepared
            .par_iter()
            .enumerate()
            .filter_map(|(index, entry)| score_entry(index, entry, fragments, self.chars_per_edit))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn score_entries(&self, fragments: &[Vec<char>]) -> Vec<Candidate> {
        self.prepared
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| score_entry(index, entry, fragments, self.chars_per_edit))
            .collect()
    }
}

/// Fold and tokenize every searchable field of an entry.
///
/// Tags are joined with a single space into one searchable text; spans index
/// into the joined text.
fn prepare_entry(entry: &crate::types::CorpusEntry) -> PreparedEntry {
    let mut fields = Vec::with_capacity(5);

    fields.push(prepare_field(FieldKey::Title, &entry.title));
    if let Some(description) = &entry.description {
        fields.push(prepare_field(FieldKey::Description, description));
    }
    if !entry.tags.is_empty() {
        fields.push(prepare_field(FieldKey::Tags, &entry.tags.join(" ")));
    }
    if let Some(summary) = &entry.summary {
        fields.push(prepare_field(FieldKey::Summary, summary));
    }
    if let Some(body) = &entry.body {
        fields.push(prepare_field(FieldKey::Body, body));
    }

    PreparedEntry { fields }
}

fn prepare_field(key: FieldKey, text: &str) -> PreparedField {
    let chars: Vec<char> = fold_chars(text).chars().collect();
    let tokens = tokenize(&chars);
    PreparedField { key, chars, tokens }
}

/// Split folded chars into alphanumeric runs, remembering where each starts.
fn tokenize(chars: &[char]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (i, c) in chars.iter().enumerate() {
        if c.is_alphanumeric() {
            start.get_or_insert(i);
        } else if let Some(s) = start.take() {
            tokens.push(Token {
                start: s,
                text: chars[s..i].iter().collect(),
                len: i - s,
            });
        }
    }
    if let Some(s) = start {
        tokens.push(Token {
            start: s,
            text: chars[s..].iter().collect(),
            len: chars.len() - s,
        });
    }

    tokens
}

/// Score one entry against all fragments; `None` when any fragment misses.
fn score_entry(
    index: usize,
    entry: &PreparedEntry,
    fragments: &[Vec<char>],
    chars_per_edit: usize,
) -> Option<Candidate> {
    let mut score = 0.0;
    let mut hits: Vec<FieldHit> = Vec::new();

    for fragment in fragments {
        let mut best = 0.0f64;
        let mut matched = false;

        for field in &entry.fields {
            if let Some(hit) = match_fragment(field, fragment, chars_per_edit) {
                matched = true;
                let contribution = field_weight(hit.key) * hit.quality;
                if contribution > best {
                    best = contribution;
                }
                hits.push(hit);
            }
        }

        if !matched {
            return None; // intersection semantics: every fragment must land
        }
        score += best;
    }

    Some(Candidate {
        index,
        score,
        matches: group_hits(hits),
    })
}

/// Find the best location of `fragment` within one field.
///
/// Exact (case-folded) substring occurrences win with quality 1.0; otherwise
/// each token is tried under the fragment's edit budget, and the closest
/// spelling wins with quality scaled by distance. First occurrence is enough:
/// position never affects the score, and the highlighter only needs one
/// anchor per field.
fn match_fragment(
    field: &PreparedField,
    fragment: &[char],
    chars_per_edit: usize,
) -> Option<FieldHit> {
    // Substring scan first: catches prefixes of longer words too
    if let Some(start) = find_subsequence(&field.chars, fragment) {
        return Some(FieldHit {
            key: field.key,
            span: MatchSpan::new(start, start + fragment.len()),
            quality: 1.0,
        });
    }

    // Fuzzy: whole tokens within the edit budget
    let budget = edit_budget(fragment.len(), chars_per_edit);
    if budget == 0 {
        return None;
    }

    let fragment_text: String = fragment.iter().collect();
    let mut best: Option<(usize, &Token)> = None;

    for token in &field.tokens {
        if let Some(distance) = bounded_distance(&fragment_text, &token.text, budget) {
            let better = match best {
                Some((d, _)) => distance < d,
                None => true,
            };
            if better {
                best = Some((distance, token));
            }
        }
    }

    best.map(|(distance, token)| FieldHit {
        key: field.key,
        span: MatchSpan::new(token.start, token.start + token.len),
        quality: 1.0 - distance as f64 / fragment.len() as f64,
    })
}

/// First character offset where `needle` occurs in `haystack`.
fn find_subsequence(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len()).find(|&i| haystack[i..i + needle.len()] == *needle)
}

/// Merge per-fragment hits into one `FieldMatch` per field key.
fn group_hits(hits: Vec<FieldHit>) -> Vec<FieldMatch> {
    let mut matches: Vec<FieldMatch> = Vec::new();

    for hit in hits {
        match matches.iter_mut().find(|m| m.key == hit.key) {
            Some(m) => {
                if !m.spans.contains(&hit.span) {
                    m.spans.push(hit.span);
                }
            }
            None => matches.push(FieldMatch {
                key: hit.key,
                spans: vec![hit.span],
            }),
        }
    }

    for m in &mut matches {
        m.spans.sort_by_key(|s| s.start);
    }
    matches
}
