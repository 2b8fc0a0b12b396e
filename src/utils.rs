// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

/// Split a raw query into lower-cased, non-empty terms.
///
/// Runs of whitespace count as one separator, so `"a   b"` and `"a b"` produce
/// the same terms. No diacritic stripping or script-aware segmentation: input
/// is compared the way the reader typed it, just case-folded.
pub fn terms(value: &str) -> Vec<String> {
    value
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
