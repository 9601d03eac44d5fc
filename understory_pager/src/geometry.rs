// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar paging helpers: edge damping, boundary tests, and index stepping.
//!
//! These operate on a single axis and know nothing about gestures. A bounded
//! axis is described by `Some(total)`; `None` is unbounded.

use crate::axis::Step;

/// Fraction of the page size over which edge damping ramps up.
const DAMPING_RAMP: f64 = 0.5;

/// Strongest damping applied at an edge: over-drag past the ramp moves at
/// half speed.
const MAX_DAMPING: f64 = 0.5;

/// Returns `true` if `current` has no neighbor in the `step` direction.
///
/// Unbounded axes only have an edge at the limits of `i64`. An axis with
/// zero pages is at an edge in both directions.
#[must_use]
pub fn is_at_edge(current: i64, total: Option<i64>, step: Step) -> bool {
    let Some(total) = total else {
        return current.checked_add(step.delta()).is_none();
    };
    match step {
        Step::Backward => current <= 0,
        Step::Forward => current >= total - 1,
    }
}

/// Applies rubber-band damping to a drag `offset` that pushes past an edge.
///
/// The offset is damped only when the axis is bounded and the drag reveals
/// the non-existent page before index `0` (positive offset) or after the last
/// index (negative offset). The damping factor falls linearly from `1.0` with
/// no over-drag to `0.5` at half a page, and stays at `0.5` beyond that.
/// All other offsets are returned unchanged.
#[must_use]
pub fn bounded_offset(offset: f64, page_size: f64, current: i64, total: Option<i64>) -> f64 {
    let over_edge = (offset > 0.0 && is_at_edge(current, total, Step::Backward))
        || (offset < 0.0 && is_at_edge(current, total, Step::Forward));
    if total.is_none() || !over_edge {
        return offset;
    }

    let ramp = page_size * DAMPING_RAMP;
    let magnitude = offset.abs();
    // A zero page size yields +inf here, which `min` folds to full damping.
    let progress = (magnitude / ramp).min(1.0);
    let damped = magnitude * (1.0 - progress * MAX_DAMPING);
    if offset > 0.0 { damped } else { -damped }
}

/// Returns the index reached by committing one `step` from `current`.
///
/// Bounded axes wrap around; unbounded axes move until the limits of `i64`,
/// where they stay put. An axis with zero pages keeps `current`.
#[must_use]
pub fn step_index(current: i64, total: Option<i64>, step: Step) -> i64 {
    let next = current.saturating_add(step.delta());
    match total {
        Some(total) if total > 0 => next.rem_euclid(total),
        Some(_) => current,
        None => next,
    }
}

/// Returns the index adjacent to `current` in the `step` direction.
///
/// Unlike [`step_index`] this does not wrap: on a bounded axis the lookup
/// past either edge is `None`, as is a lookup past the limits of `i64`.
#[must_use]
pub fn neighbor_index(current: i64, total: Option<i64>, step: Step) -> Option<i64> {
    let next = current.checked_add(step.delta())?;
    match total {
        Some(total) => (0..total).contains(&next).then_some(next),
        None => Some(next),
    }
}
