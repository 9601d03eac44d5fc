// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless pager demo.
//!
//! Plays a scripted sequence of gestures against a `PagingReducer`, animating
//! each settle with a host-side ease-out curve, and prints the state a
//! renderer would consume. Run with `RUST_LOG=understory_pager=debug` to see
//! the reducer's own transitions.

use std::time::Duration;

use kurbo::{Size, Vec2};
use tracing::info;
use understory_pager::{
    PageCoord, PageCounts, PageSlot, PagerConfig, PagingReducer, Settle, SettleAnimation,
};

const FRAME: Duration = Duration::from_millis(16);

/// A gesture as the host's recognizer would report it.
struct Gesture {
    name: &'static str,
    /// Cumulative translations, one per frame.
    updates: Vec<Vec2>,
    /// Predicted end translation at release; `None` models an interruption.
    release: Option<Vec2>,
}

fn drag(name: &'static str, to: Vec2, release: Option<Vec2>) -> Gesture {
    let updates = (1..=6).map(|i| to * (f64::from(i) / 6.0)).collect();
    Gesture {
        name,
        updates,
        release,
    }
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("info,understory_pager=debug") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("info"),
        },
    };
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn ease(animation: SettleAnimation, t: f64) -> f64 {
    match animation {
        SettleAnimation::Linear { .. } => t,
        SettleAnimation::EaseOut { .. } => 1.0 - (1.0 - t).powi(3),
        // Critically damped approximation; bounce is ignored here.
        SettleAnimation::Spring { .. } => 1.0 - (1.0 + 6.0 * t) * (-6.0 * t).exp(),
    }
}

fn animate(settle: &Settle) {
    let total = settle.animation.duration().as_micros();
    let frames = u32::try_from(total.div_ceil(FRAME.as_micros()))
        .unwrap_or(u32::MAX)
        .max(1);
    for frame in (0..=frames).step_by(4) {
        let t = f64::from(frame) / f64::from(frames);
        let offset = settle.offset_at(ease(settle.animation, t));
        info!(frame, x = offset.x, y = offset.y, "settle frame");
    }
}

fn report(pager: &PagingReducer) {
    let visibility = pager.page_visibility();
    for (slot, page) in pager.slot_pages() {
        let shown = slot
            .visibility(visibility)
            .map_or_else(|| "-".to_owned(), |v| format!("{v:.2}"));
        println!(
            "  {slot:?}: ({}, {}) visible={shown}",
            page.horizontal, page.vertical
        );
    }
}

fn main() {
    init_tracing();

    let config = PagerConfig {
        initial: PageCoord::new(0, 2),
        total_pages: PageCounts::new(None, Some(5)),
        page_visibility: true,
        ..PagerConfig::default()
    };
    let mut pager = match PagingReducer::new(config) {
        Ok(pager) => pager,
        Err(err) => {
            eprintln!("invalid pager configuration: {err}");
            std::process::exit(1);
        }
    };
    pager.set_container_size(Size::new(390.0, 844.0));

    let script = [
        drag("swipe left", Vec2::new(-180.0, 12.0), Some(Vec2::new(-260.0, 15.0))),
        drag("short nudge", Vec2::new(-60.0, 4.0), Some(Vec2::new(-80.0, 5.0))),
        drag("swipe up", Vec2::new(6.0, -300.0), Some(Vec2::new(8.0, -420.0))),
        drag("swipe up", Vec2::new(6.0, -300.0), Some(Vec2::new(8.0, -420.0))),
        drag("over-drag bottom edge", Vec2::new(0.0, -500.0), Some(Vec2::new(0.0, -900.0))),
        drag("interrupted", Vec2::new(150.0, 0.0), None),
    ];

    for gesture in script {
        println!("{}", gesture.name);
        for translation in &gesture.updates {
            pager.on_drag_changed(*translation);
        }
        let info = pager.debug_info();
        println!(
            "  dragging: offset=({:.1}, {:.1}) percent={:.3}",
            info.offset.x, info.offset.y, info.visible_percent
        );
        report(&pager);

        match gesture.release {
            Some(release) => {
                if let Some(settle) = pager.on_drag_end(release) {
                    println!("  settle: {:?}", settle.outcome);
                    animate(&settle);
                    pager.complete_settle();
                }
            }
            None => {
                pager.cancel_gesture();
                println!("  cancelled");
            }
        }
        let current = pager.current();
        println!(
            "  current=({}, {}) revision={}",
            current.horizontal,
            current.vertical,
            pager.revision()
        );
    }

    if let Some(slot_page) = pager.page_for_slot(PageSlot::Bottom) {
        println!("next page down: {slot_page:?}");
    } else {
        println!("at the last page of the vertical axis");
    }
}
