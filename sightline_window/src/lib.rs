// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sightline_window --heading-base-level=0

//! Sightline Window: windowed rendering for long lists of fixed-height rows.
//!
//! Command logs in an inspector grow without bound, but only a screenful of
//! rows is ever visible. This crate computes which rows a host should actually
//! build views for, and where to put them, so that the scrollbar and row
//! positions look exactly as if every row were rendered.
//!
//! The core pieces are:
//!
//! - [`WindowConfig`]: validated row height, viewport height, and overscan.
//! - [`compute_visible_range`]: a pure function from scroll offset and row
//!   count to a [`VisibleRange`].
//! - [`WindowedList`]: owns the viewport state for one list, caches the most
//!   recent range, and only reports a change when the visible `head`/`tail`
//!   actually moves. It also handles tail follow for append-only logs and
//!   scrolling a row into view with a [`ScrollAlign`].
//! - [`RowSource`]: the read-only, index-stable row sequence passed in on each
//!   render pass. Implemented for slices, `Vec`, and `VecDeque`.
//!
//! Hosts are responsible for:
//!
//! - Sizing the scroll content to [`WindowedList::total_extent`].
//! - Translating the materialized rows by [`WindowedList::render_offset`].
//! - Forwarding scroll events to [`WindowedList::on_scroll`] and re-rendering
//!   only when it returns `true`.
//!
//! ## Minimal example
//!
//! ```rust
//! use sightline_window::{WindowConfig, WindowedList};
//!
//! // 50px rows in a 200px viewport, default overscan of 5 rows.
//! let config = WindowConfig::new(50.0_f64, 200.0).unwrap();
//! let mut list = WindowedList::with_row_count(config, 1_000);
//!
//! list.on_scroll(5_000.0);
//! let range = list.range();
//! assert_eq!(range.visible(), 100..104);
//! assert_eq!(range.materialized(), 95..109);
//! assert_eq!(list.render_offset(), 95.0 * 50.0);
//! ```
//!
//! All heights and offsets live in a caller-chosen coordinate space (typically
//! logical pixels). Invalid inputs are clamped at runtime; only a non-positive
//! or non-finite row height is rejected, when the [`WindowConfig`] is built.
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod list;
mod range;
mod scalar;
mod source;

pub use config::{DEFAULT_OVERSCAN, InvalidConfiguration, WindowConfig};
pub use list::{ScrollAlign, WindowedList};
pub use range::{VisibleRange, clamp_scroll_offset, compute_visible_range};
pub use scalar::Scalar;
pub use source::{MaterializedRow, RowSource};
