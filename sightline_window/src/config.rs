// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window configuration and its validation error.

use core::fmt;

use crate::Scalar;

/// Rows rendered past each edge of the visible range unless configured otherwise.
pub const DEFAULT_OVERSCAN: usize = 5;

/// Error returned when a [`WindowConfig`] cannot be built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InvalidConfiguration {
    /// The row height was zero or negative.
    NonPositiveItemHeight,
    /// The row height was NaN or infinite.
    NonFiniteItemHeight,
    /// The viewport height was NaN or infinite.
    NonFiniteViewport,
}

impl fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveItemHeight => f.write_str("item height must be greater than zero"),
            Self::NonFiniteItemHeight => f.write_str("item height must be finite"),
            Self::NonFiniteViewport => f.write_str("viewport height must be finite"),
        }
    }
}

impl core::error::Error for InvalidConfiguration {}

/// Validated geometry for a windowed list of uniform rows.
///
/// `item_height` is always finite and strictly positive, and `viewport_height`
/// is always finite and non-negative. Negative viewport heights are clamped to
/// zero rather than rejected.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WindowConfig<S: Scalar> {
    item_height: S,
    viewport_height: S,
    overscan: usize,
}

impl<S: Scalar> WindowConfig<S> {
    /// Creates a configuration with the [default overscan](DEFAULT_OVERSCAN).
    pub fn new(item_height: S, viewport_height: S) -> Result<Self, InvalidConfiguration> {
        if !item_height.is_finite() {
            return Err(InvalidConfiguration::NonFiniteItemHeight);
        }
        if item_height <= S::zero() {
            return Err(InvalidConfiguration::NonPositiveItemHeight);
        }
        Ok(Self {
            item_height,
            viewport_height: validate_viewport(viewport_height)?,
            overscan: DEFAULT_OVERSCAN,
        })
    }

    /// Sets the number of extra rows rendered beyond each visible edge.
    #[must_use]
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Height of every row.
    #[must_use]
    pub fn item_height(&self) -> S {
        self.item_height
    }

    /// Height of the visible scroll container.
    #[must_use]
    pub fn viewport_height(&self) -> S {
        self.viewport_height
    }

    /// Extra rows materialized on each side of the visible range.
    #[must_use]
    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Minimum number of rows needed to cover the viewport.
    #[must_use]
    pub fn rows_per_viewport(&self) -> usize {
        (self.viewport_height / self.item_height).ceil_to_usize()
    }

    /// Full scrollable height for `row_count` rows.
    #[must_use]
    pub fn total_extent(&self, row_count: usize) -> S {
        S::from_usize(row_count) * self.item_height
    }

    /// Vertical translation that places row `overscan_head` at its absolute position.
    #[must_use]
    pub fn render_offset(&self, overscan_head: usize) -> S {
        S::from_usize(overscan_head) * self.item_height
    }

    /// Largest meaningful scroll offset for `row_count` rows.
    ///
    /// Zero when the rows fit inside the viewport.
    #[must_use]
    pub fn max_scroll_offset(&self, row_count: usize) -> S {
        (self.total_extent(row_count) - self.viewport_height).sanitize_non_negative()
    }

    pub(crate) fn set_viewport_height(&mut self, height: S) -> Result<(), InvalidConfiguration> {
        self.viewport_height = validate_viewport(height)?;
        Ok(())
    }

    pub(crate) fn set_overscan(&mut self, overscan: usize) {
        self.overscan = overscan;
    }
}

fn validate_viewport<S: Scalar>(height: S) -> Result<S, InvalidConfiguration> {
    if height.is_finite() {
        Ok(height.sanitize_non_negative())
    } else {
        Err(InvalidConfiguration::NonFiniteViewport)
    }
}
