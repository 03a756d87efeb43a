// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction for row heights, offsets, and extents.
//!
//! Only `f32` and `f64` implement [`Scalar`]. Rounding is done without `libm`
//! so the crate stays usable under `no_std`.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// Floating-point coordinate used for heights and scroll positions.
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity.
    fn zero() -> Self;

    /// Lossy conversion from a row count or index.
    fn from_usize(value: usize) -> Self;

    /// Returns `true` if the value is neither NaN nor infinite.
    fn is_finite(self) -> bool;

    /// Truncating conversion toward zero, saturating at the `usize` bounds.
    ///
    /// NaN maps to `0`, negative values map to `0`.
    fn trunc_to_usize(self) -> usize;

    /// Returns the larger of two values, ignoring NaN on either side.
    fn max(self, other: Self) -> Self;

    /// Returns the smaller of two values, ignoring NaN on either side.
    fn min(self, other: Self) -> Self;

    /// Maps NaN and negative values (including `-0.0`) to zero.
    fn sanitize_non_negative(self) -> Self {
        if self > Self::zero() {
            self
        } else {
            Self::zero()
        }
    }

    /// Floor of a non-negative value as an index.
    fn floor_to_usize(self) -> usize {
        self.sanitize_non_negative().trunc_to_usize()
    }

    /// Ceiling of a non-negative value as a count.
    fn ceil_to_usize(self) -> usize {
        let value = self.sanitize_non_negative();
        let floor = value.trunc_to_usize();
        if Self::from_usize(floor) < value {
            floor.saturating_add(1)
        } else {
            floor
        }
    }
}

macro_rules! impl_scalar {
    ($ty:ty) => {
        impl Scalar for $ty {
            fn zero() -> Self {
                0.0
            }

            fn from_usize(value: usize) -> Self {
                value as Self
            }

            fn is_finite(self) -> bool {
                Self::is_finite(self)
            }

            fn trunc_to_usize(self) -> usize {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "float-to-int `as` saturates and maps NaN to zero, which is the clamp we want"
                )]
                {
                    self as usize
                }
            }

            fn max(self, other: Self) -> Self {
                Self::max(self, other)
            }

            fn min(self, other: Self) -> Self {
                Self::min(self, other)
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);
