// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use loupe_widget::{MagnifyConfig, ZoomConfig};

const ZOOM_OPTIONS: &str = r#"{
    "lazyLoad": false,
    "deltaScale": 0.04,
    "pan": 12,
    "panDamping": 2.5,
    "url": "/images/full/0042.jpg",
    "supportsDestroy": true,
    "directionalPanEvents": true
}"#;

const MAGNIFY_OPTIONS: &str = r#"{ "source": "/images/full/0042.jpg", "touchSupport": false }"#;

fn bench_parse(c: &mut Criterion) {
    c.bench_function("config/zoom_from_json", |b| {
        b.iter(|| {
            let config: ZoomConfig =
                serde_json::from_str(black_box(ZOOM_OPTIONS)).expect("options parse");
            black_box(config.validate().is_ok())
        });
    });

    c.bench_function("config/magnify_from_json", |b| {
        b.iter(|| {
            let config: MagnifyConfig =
                serde_json::from_str(black_box(MAGNIFY_OPTIONS)).expect("options parse");
            black_box(config.recognizers())
        });
    });

    c.bench_function("config/zoom_defaults_from_empty_object", |b| {
        b.iter(|| {
            let config: ZoomConfig = serde_json::from_str(black_box("{}")).expect("options parse");
            black_box(config)
        });
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
