//! Benchmarks for class and attribute resolution.
//!
//! Run with: cargo bench -p swatch_atelier

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use swatch_atelier::{Args, IdPolicy, RenderContext, Responsive, Styled};
use swatch_palette::{Declaration, Palette, SwatchConfig};

// =============================================================================
// Test Data
// =============================================================================

fn palette() -> Palette {
    let palette = Palette::new();
    palette
        .declare(
            Declaration::new("Button")
                .identifier("button")
                .base_class("btn")
                .modifiers([
                    ("neutral", "btn-neutral"),
                    ("primary", "btn-primary"),
                    ("secondary", "btn-secondary"),
                    ("accent", "btn-accent"),
                    ("ghost", "btn-ghost"),
                    ("link", "btn-link"),
                    ("outline", "btn-outline"),
                    ("xs", "btn-xs"),
                    ("sm", "btn-sm"),
                    ("md", "btn-md"),
                    ("lg", "btn-lg"),
                    ("wide", "btn-wide"),
                    ("block", "btn-block"),
                ]),
        )
        .expect("declare Button");
    palette
}

fn simple_args() -> Args {
    Args::new().modifier("primary")
}

fn complex_args() -> Args {
    Args::with_modifiers(["primary", "outline"])
        .flag("lg", true)
        .flag("ghost", false)
        .responsive("sm", [Responsive::Base])
        .responsive("md", ["wide", "block"])
        .class("w-full shadow")
        .attr("type", "submit")
        .data("turbo", false)
        .id("save")
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_resolve(c: &mut Criterion) {
    let palette = palette();
    let plain = SwatchConfig::default();
    let prefixed = SwatchConfig::default()
        .with_prefix("tw-")
        .with_global_modifiers([("primary", "bg-primary text-primary-content")]);

    let mut group = c.benchmark_group("resolve");

    group.bench_function("simple", |b| {
        let cx = RenderContext::new(&palette, &plain);
        b.iter(|| cx.resolve("Button", black_box(simple_args()), IdPolicy::Element))
    });

    group.bench_function("complex", |b| {
        let cx = RenderContext::new(&palette, &plain);
        b.iter(|| cx.resolve("Button", black_box(complex_args()), IdPolicy::Element))
    });

    group.bench_function("complex_prefixed", |b| {
        let cx = RenderContext::new(&palette, &prefixed);
        b.iter(|| cx.resolve("Button", black_box(complex_args()), IdPolicy::Element))
    });

    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
