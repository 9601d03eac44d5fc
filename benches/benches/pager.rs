// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Size, Vec2};
use understory_pager::geometry::bounded_offset;
use understory_pager::{PageCoord, PageCounts, PagerConfig, PagingReducer};

fn reducer(total: PageCounts) -> PagingReducer {
    let mut pager = PagingReducer::new(PagerConfig {
        initial: PageCoord::new(0, 0),
        total_pages: total,
        ..PagerConfig::default()
    })
    .unwrap();
    pager.set_container_size(Size::new(1_080.0, 1_920.0));
    pager
}

fn bench_drag_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("pager/drag_updates");

    // A gesture is a stream of cumulative translations; at the first page of a
    // bounded axis every positive update goes through edge damping.
    for updates in [16usize, 120, 1_000] {
        let translations: Vec<Vec2> = (0..updates)
            .map(|i| Vec2::new(i as f64 * 2.0, i as f64 * 0.25))
            .collect();
        group.throughput(Throughput::Elements(updates as u64));

        for (name, total) in [
            ("unbounded", PageCounts::new(None, None)),
            ("bounded_edge", PageCounts::new(Some(5), Some(5))),
        ] {
            group.bench_with_input(
                BenchmarkId::new(name, updates),
                &translations,
                |b, translations| {
                    b.iter_batched(
                        || reducer(total),
                        |mut pager| {
                            for &t in translations {
                                black_box(pager.on_drag_changed(t));
                            }
                            black_box(pager.on_drag_end(Vec2::new(updates as f64, 0.0)));
                            black_box(pager.complete_settle());
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }

    group.finish();
}

fn bench_bounded_offset(c: &mut Criterion) {
    let offsets: Vec<f64> = (-2_000..2_000).map(|i| f64::from(i) * 0.5).collect();
    c.bench_function("pager/bounded_offset", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for &o in &offsets {
                sum += bounded_offset(black_box(o), 1_080.0, 0, Some(3));
            }
            black_box(sum)
        });
    });
}

criterion_group!(benches, bench_drag_updates, bench_bounded_offset);
criterion_main!(benches);
