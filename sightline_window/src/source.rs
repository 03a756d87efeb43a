// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row sources and materialized rows.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

/// An ordered, index-stable sequence of rows.
///
/// Sources may grow between render passes, but rows that already exist must
/// keep their index.
pub trait RowSource {
    /// Row type.
    type Item;

    /// Number of rows currently available.
    fn row_count(&self) -> usize;

    /// Row at `index`, if it exists.
    fn row(&self, index: usize) -> Option<&Self::Item>;
}

impl<T> RowSource for [T] {
    type Item = T;

    fn row_count(&self) -> usize {
        self.len()
    }

    fn row(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> RowSource for Vec<T> {
    type Item = T;

    fn row_count(&self) -> usize {
        self.len()
    }

    fn row(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> RowSource for VecDeque<T> {
    type Item = T;

    fn row_count(&self) -> usize {
        self.len()
    }

    fn row(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

/// A row selected for materialization.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MaterializedRow<'a, S, K, T> {
    /// Index of the row in its source.
    pub index: usize,
    /// Stable identity of the row, from the caller's key function.
    pub key: K,
    /// Absolute top edge of the row within the full-extent container.
    pub top: S,
    /// The row itself.
    pub item: &'a T,
}
