#[macro_use]
extern crate criterion;
extern crate mandelview;
extern crate num;

use criterion::{black_box, Criterion};
use mandelview::{escape_time, Color, Renderer, Viewport};
use num::Complex;

fn bench_escape(c: &mut Criterion) {
    c.bench_function("escape interior point", |b| {
        b.iter(|| escape_time(black_box(Complex::new(-0.7, 0.0))))
    });
    c.bench_function("escape exterior point", |b| {
        b.iter(|| escape_time(black_box(Complex::new(0.3, 0.6))))
    });
}

fn bench_render(c: &mut Criterion) {
    let renderer = Renderer::new(320, 180).unwrap();
    let view = Viewport::new(0.012, Complex::new(-0.7, 0.0)).unwrap();
    let mut cells = vec![Color::default(); 320 * 180];
    c.bench_function("render 320x180 frame", move |b| {
        b.iter(|| renderer.render(&view, &mut cells))
    });
}

criterion_group!(benches, bench_escape, bench_render);
criterion_main!(benches);
