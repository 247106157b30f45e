// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_hotbox::HotboxConfig;
use understory_hotbox::hit::{HitTester, TransformLocalizer};
use understory_hotbox::menu::Menu;
use understory_hotbox::types::{Element, ElementGeometry, PointerEvent};

/// `n` 40x40 buttons evenly spaced on a ring of `radius` around (200, 200), plus a center.
fn gen_ring(n: u32, radius: f64) -> Vec<Element<u32, u32>> {
    let mut out = Vec::with_capacity(n as usize + 1);
    for i in 0..n {
        let angle = f64::from(i) / f64::from(n) * core::f64::consts::TAU;
        let cx = 200.0 + radius * angle.cos();
        let cy = 200.0 + radius * angle.sin();
        let rect = Rect::new(cx - 20.0, cy - 20.0, cx + 20.0, cy + 20.0);
        out.push(Element::ring(i + 1, ElementGeometry::from_rect(rect), i + 1));
    }
    out.push(Element::center(
        0,
        ElementGeometry::ellipse(Rect::new(180.0, 180.0, 220.0, 220.0)),
        0,
    ));
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_points(count: usize, seed: u64) -> Vec<Point> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * 400.0, rng.next_f64() * 400.0))
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let points = gen_points(1024, 0x5eed);
    for n in [6_u32, 12, 24] {
        let elements = gen_ring(n, 140.0);
        let hit = HitTester::new(TransformLocalizer);
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(format!("ring_n{}", n), |b| {
            b.iter(|| {
                let mut hits = 0_usize;
                for &pt in &points {
                    if hit.resolve(black_box(pt), &elements).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }
    group.finish();
}

fn bench_pointer_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("menu");
    let points = gen_points(1024, 0xfeed);
    let events: Vec<PointerEvent> = points
        .iter()
        .enumerate()
        .map(|(i, &pt)| match i % 16 {
            7 => PointerEvent::Down(pt),
            8 => PointerEvent::Up(pt),
            _ => PointerEvent::Move(pt),
        })
        .collect();
    group.throughput(Throughput::Elements(events.len() as u64));
    for diagnostics in [false, true] {
        group.bench_function(format!("stream_diagnostics_{}", diagnostics), |b| {
            b.iter_batched(
                || {
                    let config = HotboxConfig {
                        diagnostics,
                        ..HotboxConfig::default()
                    };
                    let mut menu = Menu::new(config, gen_ring(12, 140.0)).unwrap();
                    menu.show();
                    menu
                },
                |mut menu| {
                    let mut fired = 0_usize;
                    for &ev in &events {
                        if menu.handle(ev).is_some() {
                            fired += 1;
                        }
                    }
                    black_box(fired)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_pointer_stream);
criterion_main!(benches);
