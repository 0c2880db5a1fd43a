// PiValue - Pi approximation algorithms and benchmark harness
//
// Copyright (c) 2025 PiValue contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Criterion benchmarks for each algorithm at reduced parameters.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pivalue_core::{Algorithm, Params};

fn bench_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("series");

    for &n in &[10u64, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("leibniz", n), &n, |b, &n| {
            b.iter(|| Algorithm::Leibniz.run(&Params::new().iterations(black_box(n))))
        });
        group.bench_with_input(BenchmarkId::new("euler", n), &n, |b, &n| {
            b.iter(|| Algorithm::Euler.run(&Params::new().iterations(black_box(n))))
        });
    }

    for &n in &[10u64, 50, 100] {
        group.bench_with_input(BenchmarkId::new("bailey", n), &n, |b, &n| {
            b.iter(|| Algorithm::Bailey.run(&Params::new().iterations(black_box(n))))
        });
    }

    group.finish();
}

fn bench_closed_form(c: &mut Criterion) {
    c.bench_function("machin", |b| b.iter(|| Algorithm::Machin.run_default()));
    c.bench_function("liu_hui", |b| b.iter(|| Algorithm::LiuHui.run_default()));
}

fn bench_precision(c: &mut Criterion) {
    let mut group = c.benchmark_group("precision");

    for &digits in &[2u32, 3, 4] {
        group.bench_with_input(BenchmarkId::new("mandelbrot", digits), &digits, |b, &d| {
            b.iter(|| Algorithm::Mandelbrot.run(&Params::new().digits(black_box(d))))
        });
    }

    for &precision in &[50u32, 100, 500] {
        group.bench_with_input(
            BenchmarkId::new("ramanujan", precision),
            &precision,
            |b, &p| {
                b.iter(|| {
                    Algorithm::Ramanujan.run(&Params::new().iterations(10).precision(black_box(p)))
                })
            },
        );
    }

    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    c.bench_function("relative_prime_1000", |b| {
        b.iter(|| Algorithm::RelativePrime.run(&Params::new().samples(1_000).seed(1)))
    });
}

criterion_group!(benches, bench_series, bench_closed_form, bench_precision, bench_sampling);
criterion_main!(benches);
