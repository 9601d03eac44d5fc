// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid slots around the current page and their visibility signals.
//!
//! A host renders up to five pages in a plus-shaped grid: the current page in
//! the center and one neighbor on each side. [`PageSlot`] names those cells,
//! and [`PagingReducer::page_for_slot`](crate::PagingReducer::page_for_slot)
//! resolves each one to a page coordinate.
//!
//! While a drag is in progress, pages can observe how much of them is on
//! screen through [`PageSlot::visibility`], fed with the reducer's
//! [`VisibilityInfo`].

use kurbo::{Size, Vec2};

use crate::axis::{Axis, DragDirection, Step};

/// One cell of the neighbor grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageSlot {
    /// The committed page, in the center.
    Current,
    /// The previous page on the horizontal axis, left of center.
    Leading,
    /// The next page on the horizontal axis, right of center.
    Trailing,
    /// The previous page on the vertical axis, above center.
    Top,
    /// The next page on the vertical axis, below center.
    Bottom,
}

impl PageSlot {
    /// All slots, center first.
    pub const ALL: [Self; 5] = [
        Self::Current,
        Self::Leading,
        Self::Trailing,
        Self::Top,
        Self::Bottom,
    ];

    /// Returns the axis and step leading from the current page to this slot.
    ///
    /// The center slot has none.
    #[must_use]
    pub fn neighbor(self) -> Option<(Axis, Step)> {
        match self {
            Self::Current => None,
            Self::Leading => Some((Axis::Horizontal, Step::Backward)),
            Self::Trailing => Some((Axis::Horizontal, Step::Forward)),
            Self::Top => Some((Axis::Vertical, Step::Backward)),
            Self::Bottom => Some((Axis::Vertical, Step::Forward)),
        }
    }

    /// Returns this slot's displacement from the center cell for pages of
    /// `size`.
    #[must_use]
    pub fn origin(self, size: Size) -> Vec2 {
        match self.neighbor() {
            None => Vec2::ZERO,
            Some((axis, step)) => axis.vector(axis.extent(size) * step.delta() as f64),
        }
    }

    /// Converts the main page's visibility signal into this slot's.
    ///
    /// Returns how much of the slot is on screen in `[0, 1]`:
    /// - The center slot reports `1 - |p|`.
    /// - The leading/top slot reports `p` while content moves towards it
    ///   being revealed (`p > 0`), and `0` otherwise.
    /// - The trailing/bottom slot reports `-p` while `p < 0`, and `0`
    ///   otherwise.
    ///
    /// Slots on the axis that is not being dragged return `None`.
    #[must_use]
    pub fn visibility(self, info: VisibilityInfo) -> Option<f64> {
        let percent = info.main_page_percent;
        let (axis, step) = match self.neighbor() {
            None => return Some(1.0 - percent.abs()),
            Some(neighbor) => neighbor,
        };
        if info.direction.axis() != Some(axis) {
            return None;
        }
        Some(match step {
            Step::Backward if percent > 0.0 => percent,
            Step::Forward if percent < 0.0 => -percent,
            _ => 0.0,
        })
    }
}

/// Main-page visibility published by the reducer.
///
/// `main_page_percent` is `0` when the current page is fully on screen,
/// approaching `-1` as it leaves towards the left/top and `+1` towards the
/// right/bottom.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct VisibilityInfo {
    /// Signed fraction of the current page pushed off screen.
    pub main_page_percent: f64,
    /// Direction of the gesture producing it.
    pub direction: DragDirection,
}
