// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis, direction, and per-axis value types.

use kurbo::{Size, Vec2};

/// One of the two paging axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right paging; reads the `x` / `width` components.
    Horizontal,
    /// Up/down paging; reads the `y` / `height` components.
    Vertical,
}

impl Axis {
    /// Returns the component of `v` along this axis.
    #[must_use]
    pub fn component(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }

    /// Returns the extent of `size` along this axis.
    #[must_use]
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Builds a vector with `value` on this axis and zero on the other.
    #[must_use]
    pub fn vector(self, value: f64) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(value, 0.0),
            Self::Vertical => Vec2::new(0.0, value),
        }
    }
}

/// Direction a gesture was locked to when it started.
///
/// The direction is chosen once per gesture from the first drag update and
/// held until the gesture settles. [`DragDirection::None`] means no gesture is
/// in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DragDirection {
    /// No gesture is in progress.
    #[default]
    None,
    /// Content is being dragged towards the left edge.
    Left,
    /// Content is being dragged towards the right edge.
    Right,
    /// Content is being dragged towards the top edge.
    Top,
    /// Content is being dragged towards the bottom edge.
    Bottom,
}

impl DragDirection {
    /// Picks a direction from the first translation of a gesture.
    ///
    /// The horizontal axis wins only when `|x| > |y|`, so equal magnitudes
    /// (including a zero translation) lock vertically.
    #[must_use]
    pub fn from_translation(translation: Vec2) -> Self {
        if translation.x.abs() > translation.y.abs() {
            if translation.x > 0.0 {
                Self::Right
            } else {
                Self::Left
            }
        } else if translation.y > 0.0 {
            Self::Bottom
        } else {
            Self::Top
        }
    }

    /// Returns the locked axis, or `None` when no gesture is in progress.
    #[must_use]
    pub fn axis(self) -> Option<Axis> {
        match self {
            Self::Left | Self::Right => Some(Axis::Horizontal),
            Self::Top | Self::Bottom => Some(Axis::Vertical),
            Self::None => None,
        }
    }

    /// Returns `true` for [`DragDirection::Left`] and [`DragDirection::Right`].
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        self.axis() == Some(Axis::Horizontal)
    }

    /// Returns `true` for [`DragDirection::Top`] and [`DragDirection::Bottom`].
    #[must_use]
    pub fn is_vertical(self) -> bool {
        self.axis() == Some(Axis::Vertical)
    }
}

/// A single page step along an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Towards index `0` (or towards negative indices on an unbounded axis).
    Backward,
    /// Towards higher indices.
    Forward,
}

impl Step {
    /// Returns `-1` or `+1`.
    #[must_use]
    pub fn delta(self) -> i64 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }

    /// Derives the commit step from a released translation.
    ///
    /// Dragging content towards negative coordinates reveals the next page,
    /// so a negative translation steps forward. Zero and NaN have no step.
    #[must_use]
    pub fn from_translation(translation: f64) -> Option<Self> {
        if translation < 0.0 {
            Some(Self::Forward)
        } else if translation > 0.0 {
            Some(Self::Backward)
        } else {
            None
        }
    }
}

/// A value per paging axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct AxisPair<V> {
    /// Value for the horizontal axis.
    pub horizontal: V,
    /// Value for the vertical axis.
    pub vertical: V,
}

/// A page coordinate.
pub type PageCoord = AxisPair<i64>;

/// Page counts per axis; `None` marks an unbounded axis.
pub type PageCounts = AxisPair<Option<i64>>;

impl<V> AxisPair<V> {
    /// Creates a pair from its two components.
    pub const fn new(horizontal: V, vertical: V) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Returns a reference to the value for `axis`.
    #[must_use]
    pub fn get(&self, axis: Axis) -> &V {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    /// Returns a mutable reference to the value for `axis`.
    pub fn get_mut(&mut self, axis: Axis) -> &mut V {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    /// Returns a copy with the value for `axis` replaced.
    #[must_use]
    pub fn with(mut self, axis: Axis, value: V) -> Self {
        *self.get_mut(axis) = value;
        self
    }
}

impl<V: Copy> AxisPair<V> {
    /// Returns the value for `axis`.
    #[must_use]
    pub fn on(&self, axis: Axis) -> V {
        *self.get(axis)
    }
}
