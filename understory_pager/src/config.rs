// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pager configuration and the settle animation hint.

use core::time::Duration;

use crate::axis::{Axis, AxisPair, PageCoord, PageCounts};
use crate::error::PagerError;

/// Animation parameters for a settle transition.
///
/// The pager never interpolates on its own. These values are handed back to
/// the host in each [`Settle`](crate::Settle) so the host can drive the motion
/// with its own animation system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SettleAnimation {
    /// Constant-speed motion over `duration`.
    Linear {
        /// Total duration of the motion.
        duration: Duration,
    },
    /// Decelerating motion over `duration`.
    EaseOut {
        /// Total duration of the motion.
        duration: Duration,
    },
    /// Spring motion that settles in roughly `duration`.
    ///
    /// `bounce` of `0.0` is critically damped; positive values overshoot.
    Spring {
        /// Perceptual duration of the spring.
        duration: Duration,
        /// Extra bounciness in `[0, 1)`.
        bounce: f64,
    },
}

impl SettleAnimation {
    /// Primary animation used to finish a committed page change.
    pub const PAGE: Self = Self::EaseOut {
        duration: Duration::from_millis(220),
    };

    /// Animation used to snap back after a cancelled gesture.
    pub const SMOOTH: Self = Self::Spring {
        duration: Duration::from_millis(500),
        bounce: 0.0,
    };

    /// Returns the nominal duration of the animation.
    #[must_use]
    pub fn duration(&self) -> Duration {
        match *self {
            Self::Linear { duration } | Self::EaseOut { duration } => duration,
            Self::Spring { duration, .. } => duration,
        }
    }
}

/// Construction-time configuration for a [`PagingReducer`](crate::PagingReducer).
///
/// All fields are fixed once the reducer is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PagerConfig {
    /// Page coordinate shown first.
    pub initial: PageCoord,
    /// Page count per axis; `None` makes that axis unbounded.
    pub total_pages: PageCounts,
    /// Fraction of the container size a released drag must travel (after
    /// edge damping) to commit a page change.
    pub threshold_ratio: AxisPair<f64>,
    /// Animation for committed page changes.
    pub animation: SettleAnimation,
    /// Animation for snapping back to the current page.
    pub bounce_animation: SettleAnimation,
    /// Whether the host should clip page content to the container.
    ///
    /// Clipping lets the host render a ring of extra placeholder pages
    /// outside the container, which hides gaps during fast swipes and large
    /// bounces. The reducer only stores this flag.
    pub clip_content: bool,
    /// Whether [`PagingReducer::page_visibility`](crate::PagingReducer::page_visibility)
    /// reports live values.
    pub page_visibility: bool,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            initial: PageCoord::new(0, 0),
            total_pages: PageCounts::new(None, None),
            threshold_ratio: AxisPair::new(0.33, 0.25),
            animation: SettleAnimation::PAGE,
            bounce_animation: SettleAnimation::SMOOTH,
            clip_content: true,
            page_visibility: false,
        }
    }
}

impl PagerConfig {
    /// Checks page counts, the initial coordinate, and threshold ratios.
    pub fn validate(&self) -> Result<(), PagerError> {
        for axis in [Axis::Horizontal, Axis::Vertical] {
            if let Some(count) = self.total_pages.on(axis).filter(|&count| count < 0) {
                return Err(PagerError::NegativePageCount { axis, count });
            }

            let ratio = self.threshold_ratio.on(axis);
            if !ratio.is_finite() || ratio < 0.0 {
                return Err(PagerError::InvalidThresholdRatio { axis, ratio });
            }
        }
        check_coord(self.initial, self.total_pages)
    }
}

/// Checks that `coord` is addressable on every bounded, non-empty axis.
pub(crate) fn check_coord(coord: PageCoord, total: PageCounts) -> Result<(), PagerError> {
    for axis in [Axis::Horizontal, Axis::Vertical] {
        let index = coord.on(axis);
        match total.on(axis) {
            Some(total) if total > 0 && !(0..total).contains(&index) => {
                return Err(PagerError::CoordinateOutOfRange { axis, index, total });
            }
            _ => {}
        }
    }
    Ok(())
}
