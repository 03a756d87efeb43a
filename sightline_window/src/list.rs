// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-driven windowed list controller.

use alloc::vec::Vec;

use crate::{
    InvalidConfiguration, MaterializedRow, RowSource, Scalar, VisibleRange, WindowConfig,
    clamp_scroll_offset, compute_visible_range,
};

/// Where a row should land when scrolled into view.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollAlign {
    /// Align the row's top edge with the viewport top.
    Start,
    /// Align the row's bottom edge with the viewport bottom.
    End,
    /// Center the row in the viewport.
    Center,
    /// Scroll the minimum distance that makes the row fully visible.
    #[default]
    Nearest,
}

/// Owns the viewport state of one windowed list and caches its [`VisibleRange`].
///
/// The list never owns the rows. Hosts report scroll offsets through
/// [`WindowedList::on_scroll`] and row-count changes through
/// [`WindowedList::sync_row_count`] or [`WindowedList::append_rows`], then pass
/// the rows to [`WindowedList::materialize`] on each render pass.
///
/// Every mutating method returns `true` only if the cached range changed, so
/// hosts can skip re-rendering on sub-row scroll deltas.
///
/// ```rust
/// use sightline_window::{WindowConfig, WindowedList};
///
/// let config = WindowConfig::new(50.0_f64, 200.0).unwrap();
/// let mut list = WindowedList::with_row_count(config, 1_000);
///
/// assert!(list.on_scroll(5_000.0));
/// assert!(!list.on_scroll(5_020.0));
///
/// let rows: Vec<u32> = (0..1_000).collect();
/// let window = list.materialize(&rows, |row| *row);
/// assert_eq!(window.first().map(|row| row.index), Some(95));
/// assert_eq!(list.render_offset(), 4_750.0);
/// assert_eq!(list.total_extent(), 50_000.0);
/// ```
#[derive(Clone, Debug)]
pub struct WindowedList<S: Scalar> {
    config: WindowConfig<S>,
    scroll_offset: S,
    row_count: usize,
    range: VisibleRange,
    follow: bool,
    tail_epsilon: S,
}

impl<S: Scalar> WindowedList<S> {
    /// Creates an empty list scrolled to the top, with tail follow enabled.
    #[must_use]
    pub fn new(config: WindowConfig<S>) -> Self {
        Self {
            config,
            scroll_offset: S::zero(),
            row_count: 0,
            range: VisibleRange::EMPTY,
            follow: true,
            tail_epsilon: S::from_usize(1),
        }
    }

    /// Creates a list that already knows its row count.
    #[must_use]
    pub fn with_row_count(config: WindowConfig<S>, row_count: usize) -> Self {
        let mut list = Self::new(config);
        list.sync_row_count(row_count);
        list
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &WindowConfig<S> {
        &self.config
    }

    /// Most recently computed range.
    #[must_use]
    pub fn range(&self) -> VisibleRange {
        self.range
    }

    /// Row count the range was last computed for.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Effective scroll offset, clamped to the scrollable extent.
    #[must_use]
    pub fn scroll_offset(&self) -> S {
        clamp_scroll_offset(&self.config, self.scroll_offset, self.row_count)
    }

    /// Records a scroll event from the host.
    pub fn on_scroll(&mut self, offset: S) -> bool {
        self.scroll_offset = offset.sanitize_non_negative();
        self.refresh()
    }

    /// Records the current number of rows in the source.
    pub fn sync_row_count(&mut self, row_count: usize) -> bool {
        self.row_count = row_count;
        self.refresh()
    }

    /// Records a new viewport height.
    ///
    /// Negative heights clamp to zero; non-finite heights are rejected and
    /// leave the list untouched.
    pub fn set_viewport_height(&mut self, height: S) -> Result<bool, InvalidConfiguration> {
        self.config.set_viewport_height(height)?;
        Ok(self.refresh())
    }

    /// Changes the overscan row count.
    pub fn set_overscan(&mut self, overscan: usize) -> bool {
        self.config.set_overscan(overscan);
        self.refresh()
    }

    /// Height of the scroll container's content.
    #[must_use]
    pub fn total_extent(&self) -> S {
        self.config.total_extent(self.row_count)
    }

    /// Vertical translation for the materialized rows.
    #[must_use]
    pub fn render_offset(&self) -> S {
        self.config.render_offset(self.range.overscan_head)
    }

    /// Largest reachable scroll offset.
    #[must_use]
    pub fn max_scroll_offset(&self) -> S {
        self.config.max_scroll_offset(self.row_count)
    }

    /// Collects the rows the host should build views for, keyed by `get_key`.
    ///
    /// If `source` has a different length than the last synced row count, the
    /// range is recomputed for the source's current length first. The cached
    /// range is not updated in that case; call [`WindowedList::sync_row_count`]
    /// to do so. Until then [`WindowedList::render_offset`] still describes the
    /// cached range, so position rows by their absolute
    /// [`MaterializedRow::top`] instead.
    pub fn materialize<'a, R, K, F>(
        &self,
        source: &'a R,
        get_key: F,
    ) -> Vec<MaterializedRow<'a, S, K, R::Item>>
    where
        R: RowSource + ?Sized,
        F: Fn(&R::Item) -> K,
    {
        let len = source.row_count();
        let range = if len == self.row_count {
            self.range
        } else {
            compute_visible_range(&self.config, self.scroll_offset, len)
        };
        range
            .materialized()
            .filter_map(|index| {
                let item = source.row(index)?;
                Some(MaterializedRow {
                    index,
                    key: get_key(item),
                    top: self.config.render_offset(index),
                    item,
                })
            })
            .collect()
    }

    /// Returns `true` if tail follow is enabled.
    #[must_use]
    pub fn follow(&self) -> bool {
        self.follow
    }

    /// Enables or disables re-pinning to the tail in [`WindowedList::append_rows`].
    pub fn set_follow(&mut self, follow: bool) {
        self.follow = follow;
    }

    /// Distance from the tail that still counts as pinned.
    #[must_use]
    pub fn tail_epsilon(&self) -> S {
        self.tail_epsilon
    }

    /// Sets the pinned-to-tail tolerance. Negative values clamp to zero.
    pub fn set_tail_epsilon(&mut self, epsilon: S) {
        self.tail_epsilon = epsilon.sanitize_non_negative();
    }

    /// Returns `true` if the viewport is within `tail_epsilon` of the end.
    #[must_use]
    pub fn is_at_tail(&self) -> bool {
        self.scroll_offset() + self.tail_epsilon >= self.max_scroll_offset()
    }

    /// Scrolls so the last rows fill the viewport.
    pub fn scroll_to_tail(&mut self) -> bool {
        self.scroll_offset = self.max_scroll_offset();
        self.refresh()
    }

    /// Records a grown (or shrunk) source, keeping the view pinned to the tail
    /// if it was pinned before and follow is enabled.
    pub fn append_rows(&mut self, row_count: usize) -> bool {
        let pinned = self.follow && self.is_at_tail();
        let changed = self.sync_row_count(row_count);
        if pinned {
            self.scroll_to_tail() || changed
        } else {
            changed
        }
    }

    /// Scrolls row `index` into view. Indices past the end target the last row.
    ///
    /// Read [`WindowedList::scroll_offset`] afterwards to move the host's
    /// scroll container.
    pub fn scroll_to_index(&mut self, index: usize, align: ScrollAlign) -> bool {
        if self.row_count == 0 {
            return false;
        }
        let index = index.min(self.row_count - 1);
        let item_height = self.config.item_height();
        let viewport = self.config.viewport_height();
        let top = S::from_usize(index) * item_height;
        let bottom = top + item_height;
        let current = self.scroll_offset();

        let target = match align {
            ScrollAlign::Start => top,
            ScrollAlign::End => bottom - viewport,
            ScrollAlign::Center => top + (item_height - viewport) / S::from_usize(2),
            ScrollAlign::Nearest => {
                if top < current {
                    top
                } else if bottom > current + viewport {
                    bottom - viewport
                } else {
                    current
                }
            }
        };

        self.scroll_offset = clamp_scroll_offset(&self.config, target, self.row_count);
        self.refresh()
    }

    /// Maps a content-space y coordinate to the row under it.
    #[must_use]
    pub fn index_at_offset(&self, y: S) -> Option<usize> {
        if !y.is_finite() || y < S::zero() || y >= self.total_extent() {
            return None;
        }
        let index = (y / self.config.item_height()).floor_to_usize();
        Some(index.min(self.row_count.checked_sub(1)?))
    }

    fn refresh(&mut self) -> bool {
        let next = compute_visible_range(&self.config, self.scroll_offset, self.row_count);
        if next == self.range {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(
            head = next.head,
            tail = next.tail,
            overscan_head = next.overscan_head,
            overscan_tail = next.overscan_tail,
            row_count = self.row_count,
            "visible range changed"
        );
        self.range = next;
        true
    }
}
