// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use loupe_gesture::{GestureEvent, GestureScript, GestureSource, Recognizers};
use loupe_view::{Geometry, TransformEngine, TransformRequest, ViewportState, magnify_at};
use loupe_widget::{GeometryProvider, ImageLoader, RenderSink, Transition, ZoomConfig, ZoomWidget};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn random_events(n: usize, seed: u64) -> Vec<GestureEvent> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| {
            let center = Point::new(rng.next_f64() * 300.0, rng.next_f64() * 300.0);
            match rng.next_f64() {
                p if p < 0.4 => GestureEvent::Pan {
                    delta: Vec2::new(rng.next_f64() * 60.0 - 30.0, rng.next_f64() * 60.0 - 30.0),
                },
                p if p < 0.45 => GestureEvent::PinchStart { center },
                p if p < 0.98 => GestureEvent::Pinch {
                    scale: rng.next_f64() * 2.0 + 0.5,
                    center,
                },
                _ => GestureEvent::DoubleTap { center },
            }
        })
        .collect()
}

fn loaded_state() -> ViewportState {
    let mut state = ViewportState::new();
    state.mark_loaded();
    state
}

/// Host that discards everything, so the widget bench measures dispatch only.
struct NullHost {
    transforms: usize,
}

impl GeometryProvider for NullHost {
    fn container_size(&self) -> Size {
        Size::new(300.0, 300.0)
    }

    fn container_offset(&self) -> Point {
        Point::ZERO
    }

    fn image_natural_size(&self) -> Option<Size> {
        Some(Size::new(1200.0, 900.0))
    }
}

impl RenderSink for NullHost {
    fn insert_overlay(&mut self, _size: Size) {}

    fn apply_transform(&mut self, transform: TransformRequest, _transition: Transition) {
        black_box(transform);
        self.transforms += 1;
    }

    fn move_overlay(&mut self, _offset: Vec2) {}

    fn set_overlay_visible(&mut self, _visible: bool) {}

    fn remove_overlay(&mut self) {}
}

impl ImageLoader for NullHost {
    fn source_attribute(&self, _name: &str) -> Option<String> {
        Some("/full.jpg".into())
    }

    fn fetch(&mut self, _url: &str) {}
}

impl GestureSource for NullHost {
    fn subscribe(&mut self, _recognizers: Recognizers) {}

    fn unsubscribe(&mut self) {}
}

fn bench_engine(c: &mut Criterion) {
    let engine = TransformEngine::default();
    let geometry = Geometry::new(
        Point::new(40.0, 80.0),
        Size::new(300.0, 300.0),
        Size::new(1200.0, 900.0),
    );

    let mut group = c.benchmark_group("engine");
    for &n in &[1_000_usize, 10_000] {
        let events = random_events(n, 0x5eed);
        group.bench_function(format!("mixed_stream_{n}"), |b| {
            b.iter(|| {
                let mut state = loaded_state();
                for event in &events {
                    state = match *event {
                        GestureEvent::Pan { delta } => engine.pan(state, -delta / 3.0, &geometry),
                        GestureEvent::PinchStart { center } => engine.pinch_start(state, center),
                        GestureEvent::Pinch { scale, .. } => engine.pinch(state, scale, &geometry),
                        GestureEvent::DoubleTap { center } => {
                            engine.double_tap(state, center, &geometry)
                        }
                        _ => state,
                    };
                }
                black_box(state)
            });
        });
    }

    group.bench_function("pinch_out_to_max", |b| {
        let ratios: Vec<f64> = (1..=60).map(|i| 1.0 + f64::from(i) * 0.05).collect();
        b.iter(|| {
            let mut state = engine.pinch_start(loaded_state(), Point::new(190.0, 230.0));
            for &ratio in &ratios {
                state = engine.pinch(state, ratio, &geometry);
            }
            black_box(state)
        });
    });
    group.finish();
}

fn bench_magnify(c: &mut Criterion) {
    let container = Size::new(200.0, 200.0);
    let image = Size::new(800.0, 800.0);
    let mut rng = Lcg::new(42);
    let pointers: Vec<Point> = (0..4_096)
        .map(|_| Point::new(rng.next_f64() * 240.0 - 20.0, rng.next_f64() * 240.0 - 20.0))
        .collect();

    c.bench_function("magnify/4096_moves", |b| {
        b.iter(|| {
            let mut sum = Vec2::ZERO;
            for &pointer in &pointers {
                if let Some(offset) = magnify_at(pointer, container, image) {
                    sum += offset;
                }
            }
            black_box(sum)
        });
    });
}

fn bench_widget(c: &mut Criterion) {
    let script: Vec<GestureEvent> = GestureScript::new()
        .pinch(Point::new(150.0, 150.0), (1..=30).map(|i| 1.0 + f64::from(i) * 0.05))
        .pan(Vec2::new(-12.0, 9.0))
        .pan(Vec2::new(30.0, -4.0))
        .double_tap(Point::new(10.0, 10.0))
        .double_tap(Point::new(200.0, 120.0))
        .into_events();

    c.bench_function("widget/scripted_session", |b| {
        b.iter_batched(
            || {
                let mut widget = ZoomWidget::new(NullHost { transforms: 0 }, ZoomConfig::default())
                    .expect("default options are valid");
                let _ = widget.request_load();
                widget.on_image_loaded();
                widget
            },
            |mut widget| {
                for event in &script {
                    widget.handle(*event);
                }
                black_box(widget.host().transforms)
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_engine, bench_magnify, bench_widget);
criterion_main!(benches);
