// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible-range computation.

use core::ops::Range;

use crate::{Scalar, WindowConfig};

/// Rows intersecting the viewport, plus the overscanned rows around them.
///
/// Both intervals are half-open and always satisfy
/// `overscan_head <= head <= tail <= overscan_tail <= row_count`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct VisibleRange {
    /// First row intersecting the viewport.
    pub head: usize,
    /// One past the last row needed to cover the viewport.
    pub tail: usize,
    /// First row to materialize.
    pub overscan_head: usize,
    /// One past the last row to materialize.
    pub overscan_tail: usize,
}

impl VisibleRange {
    /// The range of an empty list.
    pub const EMPTY: Self = Self {
        head: 0,
        tail: 0,
        overscan_head: 0,
        overscan_tail: 0,
    };

    /// Rows intersecting the viewport.
    #[must_use]
    pub fn visible(&self) -> Range<usize> {
        self.head..self.tail
    }

    /// Rows that should be materialized by the host.
    #[must_use]
    pub fn materialized(&self) -> Range<usize> {
        self.overscan_head..self.overscan_tail
    }

    /// Number of rows to materialize.
    #[must_use]
    pub fn materialized_len(&self) -> usize {
        self.overscan_tail - self.overscan_head
    }

    /// Returns `true` when nothing needs to be materialized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overscan_head == self.overscan_tail
    }

    /// Returns `true` if `index` falls inside the materialized range.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.materialized().contains(&index)
    }
}

/// Clamps a scroll offset into `[0, max_scroll_offset]`. NaN maps to zero.
#[must_use]
pub fn clamp_scroll_offset<S: Scalar>(config: &WindowConfig<S>, offset: S, row_count: usize) -> S {
    offset
        .sanitize_non_negative()
        .min(config.max_scroll_offset(row_count))
}

/// Computes which rows to show for a scroll offset.
///
/// The head row is `floor(offset / item_height)` and the visible span is
/// `ceil(viewport_height / item_height)` rows. Offsets past the end are clamped,
/// so scrolling beyond the content pins the range to the last full viewport.
///
/// ```rust
/// use sightline_window::{WindowConfig, compute_visible_range};
///
/// let config = WindowConfig::new(50.0_f64, 200.0).unwrap();
/// let range = compute_visible_range(&config, 5_000.0, 1_000);
/// assert_eq!((range.head, range.tail), (100, 104));
/// assert_eq!((range.overscan_head, range.overscan_tail), (95, 109));
/// ```
#[must_use]
pub fn compute_visible_range<S: Scalar>(
    config: &WindowConfig<S>,
    scroll_offset: S,
    row_count: usize,
) -> VisibleRange {
    if row_count == 0 {
        return VisibleRange::EMPTY;
    }

    let span = config.rows_per_viewport();
    let last_head = row_count.saturating_sub(span);
    let offset = clamp_scroll_offset(config, scroll_offset, row_count);
    // At the end, the floored quotient can land one row short in floating point.
    let head = if offset >= config.max_scroll_offset(row_count) {
        last_head
    } else {
        (offset / config.item_height())
            .floor_to_usize()
            .min(last_head)
    };
    let tail = head.saturating_add(span).min(row_count);

    VisibleRange {
        head,
        tail,
        overscan_head: head.saturating_sub(config.overscan()),
        overscan_tail: tail.saturating_add(config.overscan()).min(row_count),
    }
}
