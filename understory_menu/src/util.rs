// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Whether the open spans `[a0, a1)` and `[b0, b1)` share any length.
///
/// Spans that only touch at an edge do not overlap.
#[inline]
pub(crate) fn spans_overlap(a0: f64, a1: f64, b0: f64, b1: f64) -> bool {
    a0 < b1 && b0 < a1
}

/// Edge-to-edge distance between two spans, or `0.0` when they overlap.
#[inline]
pub(crate) fn span_gap(a0: f64, a1: f64, b0: f64, b1: f64) -> f64 {
    if spans_overlap(a0, a1, b0, b1) {
        0.0
    } else if b0 >= a1 {
        b0 - a1
    } else {
        a0 - b1
    }
}
