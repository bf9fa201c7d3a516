//! Layout benchmark: Measure resize and render cost of a full border layout.
//!
//! Target: resize well under 1µs, bordered 200×50 view under 100µs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use termborder::{BorderKind, BorderLayout, RegionId, Rgb, Size, Style, Text};

fn create_layout(style: Option<Style>) -> BorderLayout {
    let builder = BorderLayout::builder()
        .region(RegionId::North, Text::new("North component"), 0, 4)
        .region(RegionId::West, Text::new("West component"), 24, 0)
        .region(RegionId::Center, Text::new("Center component\n  - type [n/s/e/w/c]"), 0, 0)
        .region(RegionId::East, Text::new("East component"), 24, 0)
        .region(RegionId::South, Text::new("South component"), 0, 4);
    match style {
        Some(style) => builder.style(style).build(),
        None => builder.build(),
    }
}

fn resize_full_layout(c: &mut Criterion) {
    let mut layout = create_layout(None);

    c.bench_function("resize_80x24", |b| {
        b.iter(|| layout.resize(black_box(Size::new(80, 24))));
    });
}

fn toggle_regions(c: &mut Criterion) {
    let mut layout = create_layout(None);
    layout.resize(Size::new(80, 24));

    c.bench_function("toggle_west_east", |b| {
        b.iter(|| layout.toggle(black_box(&[RegionId::West, RegionId::East])));
    });
}

fn view_various_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_sizes");
    let style = Style::new()
        .with_border(BorderKind::Normal)
        .with_border_fg(Rgb::TEAL)
        .with_size_annotation(true);

    for (width, height) in [(80, 24), (120, 40), (200, 50)] {
        let mut plain = create_layout(None);
        plain.resize(Size::new(width, height));
        group.bench_with_input(
            BenchmarkId::new("plain", format!("{width}x{height}")),
            &(),
            |b, _| b.iter(|| black_box(plain.view())),
        );

        let mut bordered = create_layout(Some(style.clone()));
        bordered.resize(Size::new(width, height));
        group.bench_with_input(
            BenchmarkId::new("bordered", format!("{width}x{height}")),
            &(),
            |b, _| b.iter(|| black_box(bordered.view())),
        );
    }

    group.finish();
}

criterion_group!(benches, resize_full_layout, toggle_regions, view_various_sizes);
criterion_main!(benches);
