// SPDX-License-Identifier: MIT
//
// Copyright (c) 2026 The deltri developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Benchmarks for the triangulation build.

use criterion::{Criterion, criterion_group, criterion_main};
use deltri::generate::random_points;
use deltri::{World, triangulate, triangulate_par};

fn bench_sequential(c: &mut Criterion) {
    for n in [1_000usize, 10_000] {
        let points = random_points(n, &World::default(), 42);
        c.bench_function(&format!("triangulate_{n}"), |b| {
            b.iter(|| triangulate(&points).unwrap());
        });
    }
}

fn bench_parallel(c: &mut Criterion) {
    for n in [10_000usize, 100_000] {
        let points = random_points(n, &World::default(), 42);
        c.bench_function(&format!("triangulate_par_{n}"), |b| {
            b.iter(|| triangulate_par(&points).unwrap());
        });
    }
}

criterion_group!(benches, bench_sequential, bench_parallel);
criterion_main!(benches);
