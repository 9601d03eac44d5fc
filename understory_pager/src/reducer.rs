// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paging state machine and the settle transitions it hands to the host.

use kurbo::{Size, Vec2};
use tracing::{debug, trace};

use crate::axis::{Axis, AxisPair, DragDirection, PageCoord, PageCounts, Step};
use crate::changes::PagerChanges;
use crate::config::{PagerConfig, SettleAnimation, check_coord};
use crate::error::PagerError;
use crate::geometry::{bounded_offset, is_at_edge, neighbor_index, step_index};
use crate::slots::{PageSlot, VisibilityInfo};

/// What a settle transition does once it completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleOutcome {
    /// Move to `target`, one `step` along `axis` from the previous page.
    Commit {
        /// Axis the page change happens on.
        axis: Axis,
        /// Direction of the page change.
        step: Step,
        /// Page coordinate after the change.
        target: PageCoord,
    },
    /// Return to the current page.
    Cancel,
}

/// A pending settle transition produced by [`PagingReducer::on_drag_end`].
///
/// The reducer already reports `to` as its offset. The host animates from
/// `from` to `to` with `animation` and calls
/// [`PagingReducer::complete_settle`] when the motion finishes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settle {
    /// Offset when the gesture was released.
    pub from: Vec2,
    /// Offset the transition ends at.
    pub to: Vec2,
    /// Animation parameters for the motion.
    pub animation: SettleAnimation,
    /// What completing the transition does.
    pub outcome: SettleOutcome,
}

impl Settle {
    /// Returns `true` if completing this transition changes the page.
    #[must_use]
    pub fn is_commit(&self) -> bool {
        matches!(self.outcome, SettleOutcome::Commit { .. })
    }

    /// Returns the offset at eased progress `t`.
    ///
    /// `t` is clamped to `[0, 1]`; easing itself is up to the host.
    #[must_use]
    pub fn offset_at(&self, t: f64) -> Vec2 {
        self.from.lerp(self.to, t.clamp(0.0, 1.0))
    }
}

/// Headless state for a four-directional pager.
///
/// Pages are addressed by an `(horizontal, vertical)` [`PageCoord`]. Each axis
/// is either bounded (a fixed page count, wrapping on commit) or unbounded.
///
/// The reducer is fed three kinds of input:
/// - [`set_container_size`](Self::set_container_size) whenever layout changes.
/// - [`on_drag_changed`](Self::on_drag_changed) with the cumulative
///   translation of the active gesture.
/// - [`on_drag_end`](Self::on_drag_end) with the predicted end translation.
///
/// The first drag update locks the gesture to one axis. While dragging, the
/// offset follows the translation on that axis, damped at bounded edges. On
/// release the reducer decides between committing a page change and snapping
/// back, and returns a [`Settle`] for the host to animate.
#[derive(Clone, Debug)]
pub struct PagingReducer {
    config: PagerConfig,
    current: PageCoord,
    offset: Vec2,
    drag_direction: DragDirection,
    container_size: Size,
    pending: Option<Settle>,
    revision: u64,
}

impl Default for PagingReducer {
    fn default() -> Self {
        Self::from_valid(PagerConfig::default())
    }
}

impl PagingReducer {
    /// Creates a reducer after validating `config`.
    pub fn new(config: PagerConfig) -> Result<Self, PagerError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: PagerConfig) -> Self {
        Self {
            current: config.initial,
            config,
            offset: Vec2::ZERO,
            drag_direction: DragDirection::None,
            container_size: Size::ZERO,
            pending: None,
            revision: 0,
        }
    }

    /// Returns the configuration the reducer was built with.
    #[must_use]
    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// Returns the committed page coordinate.
    #[must_use]
    pub fn current(&self) -> PageCoord {
        self.current
    }

    /// Returns the visual displacement from the committed page.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the locked drag direction.
    #[must_use]
    pub fn drag_direction(&self) -> DragDirection {
        self.drag_direction
    }

    /// Returns the last container size reported by the host.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container_size
    }

    /// Returns the page count per axis.
    #[must_use]
    pub fn total_pages(&self) -> PageCounts {
        self.config.total_pages
    }

    /// Returns the commit threshold per axis.
    #[must_use]
    pub fn threshold_ratio(&self) -> AxisPair<f64> {
        self.config.threshold_ratio
    }

    /// Returns the settle transition waiting for completion, if any.
    #[must_use]
    pub fn pending_settle(&self) -> Option<&Settle> {
        self.pending.as_ref()
    }

    /// Returns `true` while a gesture is locked and not yet released.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_direction != DragDirection::None && self.pending.is_none()
    }

    /// Returns `true` while a settle transition is pending.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns a counter that increases whenever any state changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the fraction of the current page pushed off screen.
    ///
    /// This is the offset divided by the container extent on the locked axis,
    /// or `0` with no gesture or a zero-sized container.
    #[must_use]
    pub fn visible_percent(&self) -> f64 {
        let Some(axis) = self.drag_direction.axis() else {
            return 0.0;
        };
        let extent = axis.extent(self.container_size);
        if extent == 0.0 {
            return 0.0;
        }
        axis.component(self.offset) / extent
    }

    /// Returns the visibility signal to publish to page content.
    ///
    /// When page visibility is disabled in the configuration this always
    /// reports the resting value.
    #[must_use]
    pub fn page_visibility(&self) -> VisibilityInfo {
        if !self.config.page_visibility {
            return VisibilityInfo::default();
        }
        VisibilityInfo {
            main_page_percent: self.visible_percent(),
            direction: self.drag_direction,
        }
    }

    /// Returns `true` if the locked axis has no page in the `step` direction.
    ///
    /// Always `false` without a locked axis. An unbounded axis only reports a
    /// boundary at the limits of `i64`.
    #[must_use]
    pub fn is_at_boundary(&self, step: Step) -> bool {
        match self.drag_direction.axis() {
            Some(axis) => is_at_edge(
                self.current.on(axis),
                self.config.total_pages.on(axis),
                step,
            ),
            None => false,
        }
    }

    /// Returns the page to render in `slot`, or `None` past a bounded edge.
    #[must_use]
    pub fn page_for_slot(&self, slot: PageSlot) -> Option<PageCoord> {
        let Some((axis, step)) = slot.neighbor() else {
            return Some(self.current);
        };
        let index = neighbor_index(
            self.current.on(axis),
            self.config.total_pages.on(axis),
            step,
        )?;
        Some(self.current.with(axis, index))
    }

    /// Iterates the populated grid slots with their page coordinates.
    pub fn slot_pages(&self) -> impl Iterator<Item = (PageSlot, PageCoord)> + '_ {
        PageSlot::ALL
            .into_iter()
            .filter_map(|slot| self.page_for_slot(slot).map(|page| (slot, page)))
    }

    /// Records the container size measured by the host.
    pub fn set_container_size(&mut self, size: Size) -> PagerChanges {
        if self.container_size == size {
            return PagerChanges::empty();
        }
        trace!(width = size.width, height = size.height, "container resized");
        self.container_size = size;
        self.bump(PagerChanges::SIZE)
    }

    /// Handles a drag update carrying the translation since the gesture began.
    ///
    /// The first update of a gesture locks its axis; later updates keep that
    /// axis even if the other component grows larger. A pending settle is
    /// interrupted first, as with [`cancel_gesture`](Self::cancel_gesture).
    pub fn on_drag_changed(&mut self, translation: Vec2) -> PagerChanges {
        let mut changes = PagerChanges::empty();
        if self.pending.is_some() {
            changes |= self.reset_gesture();
            debug!("settle interrupted by a new gesture");
        }

        let axis = match self.drag_direction.axis() {
            Some(axis) => axis,
            None => {
                self.drag_direction = DragDirection::from_translation(translation);
                changes |= PagerChanges::DIRECTION;
                debug!(direction = ?self.drag_direction, "drag direction locked");
                match self.drag_direction.axis() {
                    Some(axis) => axis,
                    None => unreachable!("a locked drag direction always has an axis"),
                }
            }
        };

        let offset = axis.vector(bounded_offset(
            axis.component(translation),
            axis.extent(self.container_size),
            self.current.on(axis),
            self.config.total_pages.on(axis),
        ));
        trace!(x = offset.x, y = offset.y, "drag offset");
        changes |= self.set_offset(offset);
        self.bump(changes)
    }

    /// Handles the end of a gesture and decides whether to change page.
    ///
    /// The page changes when the damped `predicted` translation on the locked
    /// axis exceeds the threshold fraction of the container, the translation
    /// is non-zero, and the page is not at a bounded edge in that direction.
    /// Otherwise the gesture snaps back.
    ///
    /// The offset jumps to the settle end point immediately; the commit itself
    /// waits for [`complete_settle`](Self::complete_settle). Returns `None`
    /// without a locked gesture or while a settle is already pending.
    pub fn on_drag_end(&mut self, predicted: Vec2) -> Option<Settle> {
        if self.pending.is_some() {
            return None;
        }
        let axis = self.drag_direction.axis()?;

        let translation = axis.component(predicted);
        let page_size = axis.extent(self.container_size);
        let current = self.current.on(axis);
        let total = self.config.total_pages.on(axis);
        let threshold = page_size * self.config.threshold_ratio.on(axis);
        let bounded = bounded_offset(translation, page_size, current, total);

        let commit = Step::from_translation(translation)
            .filter(|&step| bounded.abs() > threshold && !self.is_at_boundary(step));

        let settle = match commit {
            Some(step) => {
                let target = self
                    .current
                    .with(axis, step_index(current, total, step));
                debug!(?axis, ?step, ?target, "committing page change");
                Settle {
                    from: self.offset,
                    to: axis.vector(-(step.delta() as f64) * page_size),
                    animation: self.config.animation,
                    outcome: SettleOutcome::Commit { axis, step, target },
                }
            }
            None => {
                debug!(?axis, translation, "snapping back");
                Settle {
                    from: self.offset,
                    to: Vec2::ZERO,
                    animation: self.config.bounce_animation,
                    outcome: SettleOutcome::Cancel,
                }
            }
        };

        let changes = self.set_offset(settle.to);
        self.pending = Some(settle);
        self.bump(changes);
        Some(settle)
    }

    /// Finishes the pending settle transition.
    ///
    /// Applies a committed page change, zeroes the offset, and releases the
    /// axis lock. Does nothing when no settle is pending.
    pub fn complete_settle(&mut self) -> PagerChanges {
        let Some(settle) = self.pending.take() else {
            return PagerChanges::empty();
        };
        let mut changes = PagerChanges::empty();
        if let SettleOutcome::Commit { target, .. } = settle.outcome {
            if self.current != target {
                self.current = target;
                changes |= PagerChanges::CURRENT;
            }
        }
        changes |= self.set_offset(Vec2::ZERO);
        changes |= self.set_direction(DragDirection::None);
        debug!(current = ?self.current, "settle completed");
        self.bump(changes)
    }

    /// Handles a gesture interrupted without a clean end event.
    ///
    /// Any pending settle is dropped without applying its commit. The offset
    /// returns to zero and the axis lock is released.
    pub fn cancel_gesture(&mut self) -> PagerChanges {
        let changes = self.reset_gesture();
        if !changes.is_empty() {
            debug!("gesture cancelled");
        }
        self.bump(changes)
    }

    /// Moves directly to `page`, abandoning any gesture in progress.
    ///
    /// Fails if `page` is outside a bounded, non-empty axis.
    pub fn jump_to(&mut self, page: PageCoord) -> Result<PagerChanges, PagerError> {
        check_coord(page, self.config.total_pages)?;
        let mut changes = self.reset_gesture();
        if self.current != page {
            debug!(from = ?self.current, to = ?page, "jumping to page");
            self.current = page;
            changes |= PagerChanges::CURRENT;
        }
        Ok(self.bump(changes))
    }

    /// Returns a snapshot of the reducer state for debugging and tooling.
    #[must_use]
    pub fn debug_info(&self) -> PagerDebugInfo {
        PagerDebugInfo {
            current: self.current,
            offset: self.offset,
            drag_direction: self.drag_direction,
            container_size: self.container_size,
            total_pages: self.config.total_pages,
            threshold_ratio: self.config.threshold_ratio,
            visible_percent: self.visible_percent(),
            pending_settle: self.pending,
            revision: self.revision,
        }
    }

    fn reset_gesture(&mut self) -> PagerChanges {
        self.pending = None;
        self.set_offset(Vec2::ZERO) | self.set_direction(DragDirection::None)
    }

    fn set_offset(&mut self, offset: Vec2) -> PagerChanges {
        if self.offset == offset {
            return PagerChanges::empty();
        }
        self.offset = offset;
        PagerChanges::OFFSET
    }

    fn set_direction(&mut self, direction: DragDirection) -> PagerChanges {
        if self.drag_direction == direction {
            return PagerChanges::empty();
        }
        self.drag_direction = direction;
        PagerChanges::DIRECTION
    }

    fn bump(&mut self, changes: PagerChanges) -> PagerChanges {
        if !changes.is_empty() {
            self.revision += 1;
        }
        changes
    }
}

/// Snapshot of [`PagingReducer`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PagerDebugInfo {
    /// Committed page coordinate.
    pub current: PageCoord,
    /// Visual offset from the committed page.
    pub offset: Vec2,
    /// Locked drag direction.
    pub drag_direction: DragDirection,
    /// Last reported container size.
    pub container_size: Size,
    /// Page count per axis.
    pub total_pages: PageCounts,
    /// Commit threshold per axis.
    pub threshold_ratio: AxisPair<f64>,
    /// Result of [`PagingReducer::visible_percent`].
    pub visible_percent: f64,
    /// Pending settle transition.
    pub pending_settle: Option<Settle>,
    /// Current revision counter.
    pub revision: u64,
}
