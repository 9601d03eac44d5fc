// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported for invalid configurations and jumps.

use core::fmt;

use crate::axis::Axis;

/// Error returned when a pager configuration or a programmatic jump is invalid.
///
/// Gesture callbacks never return errors; these only arise from values the
/// host supplies directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PagerError {
    /// A bounded axis was given a negative page count.
    NegativePageCount {
        /// The offending axis.
        axis: Axis,
        /// The page count that was supplied.
        count: i64,
    },
    /// A page coordinate lies outside `0..total` on a bounded axis.
    CoordinateOutOfRange {
        /// The offending axis.
        axis: Axis,
        /// The index that was supplied.
        index: i64,
        /// The page count of that axis.
        total: i64,
    },
    /// A commit threshold ratio is negative, NaN, or infinite.
    InvalidThresholdRatio {
        /// The offending axis.
        axis: Axis,
        /// The ratio that was supplied.
        ratio: f64,
    },
}

impl fmt::Display for PagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativePageCount { axis, count } => {
                write!(f, "page count {count} on {axis:?} axis is negative")
            }
            Self::CoordinateOutOfRange { axis, index, total } => write!(
                f,
                "page index {index} on {axis:?} axis is outside 0..{total}"
            ),
            Self::InvalidThresholdRatio { axis, ratio } => write!(
                f,
                "threshold ratio {ratio} on {axis:?} axis must be finite and non-negative"
            ),
        }
    }
}

impl core::error::Error for PagerError {}
