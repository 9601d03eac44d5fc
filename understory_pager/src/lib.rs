// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pager --heading-base-level=0

//! Understory Pager: headless state for four-directional paging.
//!
//! This crate models a view that swipes between pages laid out on a 2D grid,
//! addressed by an `(horizontal, vertical)` integer coordinate. Each axis is
//! either bounded (a fixed page count that wraps on commit) or unbounded.
//!
//! The core type is [`PagingReducer`]. It tracks:
//! - The committed page coordinate.
//! - The visual offset of the page stack during a drag.
//! - The axis a gesture is locked to.
//! - The container size used to turn offsets into page fractions.
//!
//! It does **not** recognize gestures, render pages, or run animations.
//! Callers are expected to:
//! - Feed cumulative drag translations and the predicted end translation from
//!   their own gesture recognizer.
//! - Report the container size whenever layout changes.
//! - Animate [`Settle`] transitions with their own animation system and call
//!   [`PagingReducer::complete_settle`] when the motion ends.
//! - Read back the offset, the current coordinate, and the per-slot pages to
//!   position content.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use understory_pager::{
//!     DragDirection, PageCoord, PageCounts, PagerConfig, PagingReducer,
//! };
//!
//! // Unbounded horizontally, five pages vertically.
//! let mut pager = PagingReducer::new(PagerConfig {
//!     total_pages: PageCounts::new(None, Some(5)),
//!     ..PagerConfig::default()
//! })
//! .unwrap();
//! pager.set_container_size(Size::new(300.0, 600.0));
//!
//! // The first update locks the gesture to the horizontal axis.
//! pager.on_drag_changed(Vec2::new(-150.0, 0.0));
//! assert_eq!(pager.drag_direction(), DragDirection::Left);
//! assert_eq!(pager.offset(), Vec2::new(-150.0, 0.0));
//!
//! // Releasing past a third of the width commits the next page.
//! let settle = pager.on_drag_end(Vec2::new(-200.0, 0.0)).unwrap();
//! assert!(settle.is_commit());
//!
//! // ...the host animates `settle.from` to `settle.to`, then:
//! pager.complete_settle();
//! assert_eq!(pager.current(), PageCoord::new(1, 0));
//! assert_eq!(pager.offset(), Vec2::ZERO);
//! ```
//!
//! ## Edges
//!
//! On a bounded axis, dragging past the first or last page is damped: the
//! offset moves at full speed at first and at half speed once the over-drag
//! reaches half a page (see [`geometry::bounded_offset`]). Releasing at an
//! edge always snaps back.
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use understory_pager::{PageCounts, PagerConfig, PagingReducer, SettleOutcome};
//!
//! let mut pager = PagingReducer::new(PagerConfig {
//!     total_pages: PageCounts::new(Some(5), None),
//!     ..PagerConfig::default()
//! })
//! .unwrap();
//! pager.set_container_size(Size::new(300.0, 600.0));
//!
//! pager.on_drag_changed(Vec2::new(150.0, 0.0));
//! assert_eq!(pager.offset(), Vec2::new(75.0, 0.0));
//!
//! let settle = pager.on_drag_end(Vec2::new(500.0, 0.0)).unwrap();
//! assert_eq!(settle.outcome, SettleOutcome::Cancel);
//! ```
//!
//! ## Interruptions
//!
//! If the host's recognizer drops a gesture without an end event, call
//! [`PagingReducer::cancel_gesture`]. A new drag that starts while a settle is
//! still pending interrupts it the same way: the offset returns to zero and
//! the pending page change is discarded.
//!
//! ## Change tracking
//!
//! Every mutating call returns [`PagerChanges`] describing what changed, and
//! [`PagingReducer::revision`] increases with each effective change, so hosts
//! may either react to return values or poll.
//!
//! ## Logging
//!
//! State transitions are reported through `tracing` at `debug` level and drag
//! updates at `trace` level. No subscriber is installed by this crate.
//!
//! This crate is `no_std`.

#![no_std]

mod axis;
mod changes;
mod config;
mod error;
pub mod geometry;
mod reducer;
mod slots;

pub use axis::{Axis, AxisPair, DragDirection, PageCoord, PageCounts, Step};
pub use changes::PagerChanges;
pub use config::{PagerConfig, SettleAnimation};
pub use error::PagerError;
pub use reducer::{PagerDebugInfo, PagingReducer, Settle, SettleOutcome};
pub use slots::{PageSlot, VisibilityInfo};
