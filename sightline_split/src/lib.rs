// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sightline_split --heading-base-level=0

//! Sightline Split: state for a two-pane layout with a draggable divider.
//!
//! Inspector screens put a list on the leading side and a detail view on the
//! trailing side. This crate tracks the divider position:
//!
//! - [`SplitPane`]: the leading width, the drag in progress, and whether the
//!   user has ever resized. Moves that would shrink either pane below its
//!   minimum are rejected.
//! - [`ResizeDebounce`]: coalesces bursts of host window-resize notifications.
//! - [`SplitLayout`]: re-seeds the pane from the window width after each
//!   debounced resize, until the user drags the divider.
//!
//! Pointer positions and container bounds are [`kurbo`] types. Timestamps are
//! plain [`Duration`](core::time::Duration)s supplied by the host.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod debounce;
mod layout;
mod pane;

pub use debounce::{DEFAULT_RESIZE_DEBOUNCE, ResizeDebounce};
pub use layout::SplitLayout;
pub use pane::{InvalidSplitConfig, SplitConfig, SplitPane};
