// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#[macro_use]
extern crate criterion;

use complexplot::special::{gamma, riemann_zeta};
use complexplot::{preset, Complex, Renderer};
use criterion::{black_box, Criterion};

fn renderer(name: &str) -> Renderer {
    let config = preset(name)
        .and_then(|builder| builder.size(160, 120).build())
        .unwrap();
    Renderer::new(config)
}

fn special_functions(c: &mut Criterion) {
    let z = Complex::new(0.5, 14.134725);
    c.bench_function("gamma", move |b| b.iter(|| gamma(black_box(z))));
    c.bench_function("zeta", move |b| b.iter(|| riemann_zeta(black_box(z))));
}

fn renders(c: &mut Criterion) {
    let mandelbrot = renderer("mandelbrot");
    c.bench_function("mandelbrot 160x120", move |b| b.iter(|| mandelbrot.render()));
    let newton = renderer("newton-cubic");
    c.bench_function("newton-cubic 160x120", move |b| b.iter(|| newton.render()));
    let threaded = renderer("mandelbrot");
    let threads = num_cpus::get();
    c.bench_function("mandelbrot 160x120 threaded", move |b| {
        b.iter(|| threaded.render_threaded(threads, None))
    });
}

criterion_group!(benches, special_functions, renders);
criterion_main!(benches);
