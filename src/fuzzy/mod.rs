// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate string matching primitives.

mod levenshtein;

pub use levenshtein::bounded_distance;
