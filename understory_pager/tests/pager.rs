// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_pager` crate.
//!
//! These drive whole gestures through `PagingReducer` the way a host would:
//! size, a stream of drag updates, a release, and the settle completion.

use kurbo::{Size, Vec2};
use understory_pager::geometry::bounded_offset;
use understory_pager::{
    DragDirection, PageCoord, PageCounts, PageSlot, PagerChanges, PagerConfig, PagingReducer,
    SettleOutcome, Step,
};

const SIZE: Size = Size::new(300.0, 600.0);

fn pager(total: PageCounts, initial: PageCoord) -> PagingReducer {
    let mut pager = PagingReducer::new(PagerConfig {
        initial,
        total_pages: total,
        ..PagerConfig::default()
    })
    .unwrap();
    pager.set_container_size(SIZE);
    pager
}

/// Runs one full gesture: a few drag updates towards `release`, then settle.
fn swipe(pager: &mut PagingReducer, release: Vec2) -> Option<SettleOutcome> {
    for t in [0.25, 0.5, 0.75] {
        pager.on_drag_changed(release * t);
    }
    let settle = pager.on_drag_end(release)?;
    pager.complete_settle();
    Some(settle.outcome)
}

#[test]
fn end_to_end_horizontal_commit() {
    let mut pager = pager(PageCounts::new(None, Some(5)), PageCoord::new(0, 0));

    pager.on_drag_changed(Vec2::new(-150.0, 0.0));
    assert_eq!(pager.drag_direction(), DragDirection::Left);
    assert_eq!(pager.offset(), Vec2::new(-150.0, 0.0));

    let settle = pager.on_drag_end(Vec2::new(-200.0, 0.0)).unwrap();
    assert!(settle.is_commit());
    assert_eq!(pager.offset(), Vec2::new(-300.0, 0.0));
    // Still locked until the host reports the animation finished.
    assert_eq!(pager.drag_direction(), DragDirection::Left);
    assert_eq!(pager.current(), PageCoord::new(0, 0));

    pager.complete_settle();
    assert_eq!(pager.current(), PageCoord::new(1, 0));
    assert_eq!(pager.offset(), Vec2::ZERO);
    assert_eq!(pager.drag_direction(), DragDirection::None);
}

#[test]
fn bounded_commits_reach_both_ends() {
    // Releasing at either end snaps back, so gestures stay within 0..total.
    for total in 2..=6 {
        let mut p = pager(PageCounts::new(Some(total), None), PageCoord::new(total - 2, 0));
        assert!(swipe(&mut p, Vec2::new(-200.0, 0.0)).is_some());
        assert_eq!(p.current().horizontal, total - 1);

        let mut p = pager(PageCounts::new(Some(total), None), PageCoord::new(1, 0));
        swipe(&mut p, Vec2::new(200.0, 0.0));
        assert_eq!(p.current().horizontal, 0);
    }
}

#[test]
fn unbounded_axis_grows_without_limit() {
    let mut p = pager(PageCounts::new(None, None), PageCoord::new(0, 0));
    for expected in 1..=25 {
        swipe(&mut p, Vec2::new(0.0, -400.0));
        assert_eq!(p.current(), PageCoord::new(0, expected));
    }
    for expected in (-25..25).rev() {
        swipe(&mut p, Vec2::new(0.0, 400.0));
        assert_eq!(p.current(), PageCoord::new(0, expected));
    }
}

#[test]
fn threshold_decides_commit() {
    let mut p = pager(PageCounts::new(Some(5), None), PageCoord::new(2, 0));
    assert!(matches!(
        swipe(&mut p, Vec2::new(-120.0, 0.0)),
        Some(SettleOutcome::Commit {
            step: Step::Forward,
            ..
        })
    ));
    assert_eq!(p.current(), PageCoord::new(3, 0));

    assert_eq!(
        swipe(&mut p, Vec2::new(-80.0, 0.0)),
        Some(SettleOutcome::Cancel)
    );
    assert_eq!(p.current(), PageCoord::new(3, 0));
    assert_eq!(p.offset(), Vec2::ZERO);
}

#[test]
fn vertical_threshold_uses_vertical_ratio() {
    // 600 * 0.25 = 150.
    let mut p = pager(PageCounts::new(None, None), PageCoord::new(0, 0));
    assert_eq!(
        swipe(&mut p, Vec2::new(0.0, -140.0)),
        Some(SettleOutcome::Cancel)
    );
    assert!(swipe(&mut p, Vec2::new(0.0, -160.0)).is_some());
    assert_eq!(p.current(), PageCoord::new(0, 1));
}

#[test]
fn edge_blocks_commit_regardless_of_magnitude() {
    let mut p = pager(PageCounts::new(Some(5), None), PageCoord::new(0, 0));
    for magnitude in [100.0, 500.0, 5_000.0] {
        assert_eq!(
            swipe(&mut p, Vec2::new(magnitude, 0.0)),
            Some(SettleOutcome::Cancel)
        );
        assert_eq!(p.current(), PageCoord::new(0, 0));
    }

    let mut p = pager(PageCounts::new(Some(5), None), PageCoord::new(4, 0));
    assert_eq!(
        swipe(&mut p, Vec2::new(-5_000.0, 0.0)),
        Some(SettleOutcome::Cancel)
    );
    assert_eq!(p.current(), PageCoord::new(4, 0));
}

#[test]
fn damping_threshold_compares_damped_distance() {
    // Single page: both directions are edges, so the commit check sees the
    // damped value but the edge test still wins.
    let mut p = pager(PageCounts::new(Some(1), Some(1)), PageCoord::new(0, 0));
    p.on_drag_changed(Vec2::new(-90.0, 0.0));
    assert_eq!(
        p.offset().x,
        bounded_offset(-90.0, SIZE.width, 0, Some(1))
    );
    assert!(p.offset().x > -90.0);
    let settle = p.on_drag_end(Vec2::new(-400.0, 0.0)).unwrap();
    assert_eq!(settle.outcome, SettleOutcome::Cancel);
}

#[test]
fn interrupted_gesture_does_not_double_commit() {
    let mut p = pager(PageCounts::new(None, None), PageCoord::new(0, 0));
    p.on_drag_changed(Vec2::new(-150.0, 0.0));
    p.on_drag_end(Vec2::new(-200.0, 0.0)).unwrap();

    // Host recognizer reports an interruption before the settle finished.
    p.cancel_gesture();
    assert_eq!(p.complete_settle(), PagerChanges::empty());
    assert_eq!(p.current(), PageCoord::new(0, 0));
    assert_eq!(p.offset(), Vec2::ZERO);

    // The next gesture starts clean.
    assert!(swipe(&mut p, Vec2::new(-200.0, 0.0)).is_some());
    assert_eq!(p.current(), PageCoord::new(1, 0));
}

#[test]
fn slots_follow_commits() {
    let mut p = pager(PageCounts::new(Some(3), Some(3)), PageCoord::new(0, 0));
    let slots: Vec<_> = p.slot_pages().collect();
    assert_eq!(
        slots,
        vec![
            (PageSlot::Current, PageCoord::new(0, 0)),
            (PageSlot::Trailing, PageCoord::new(1, 0)),
            (PageSlot::Bottom, PageCoord::new(0, 1)),
        ]
    );

    swipe(&mut p, Vec2::new(-200.0, 0.0));
    assert_eq!(p.page_for_slot(PageSlot::Leading), Some(PageCoord::new(0, 0)));
    assert_eq!(p.page_for_slot(PageSlot::Trailing), Some(PageCoord::new(2, 0)));
}

#[test]
fn visibility_signal_during_drag() {
    let mut p = PagingReducer::new(PagerConfig {
        page_visibility: true,
        ..PagerConfig::default()
    })
    .unwrap();
    p.set_container_size(SIZE);
    p.on_drag_changed(Vec2::new(-150.0, 0.0));

    let info = p.page_visibility();
    assert_eq!(PageSlot::Current.visibility(info), Some(0.5));
    assert_eq!(PageSlot::Trailing.visibility(info), Some(0.5));
    assert_eq!(PageSlot::Leading.visibility(info), Some(0.0));
    assert_eq!(PageSlot::Top.visibility(info), None);
}
