//! 256-bit Integer Benchmark.

//
// MIT License
//
// Copyright (c) 2019 Fuzzbed Developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use criterion::{black_box as bb, criterion_group, criterion_main, Bencher, Criterion};
use fuzzbed_crypto::bignum::{format, U256};
use rand::thread_rng;
use simple_logger;
use std::time::Duration;

fn divmod58(b: &mut Bencher) {
    simple_logger::init_with_level(log::Level::Debug).unwrap_or_default();

    b.iter_with_setup(
        || U256::random(&mut thread_rng()),
        |mut a| {
            while !a.is_zero() {
                bb(a.divmod58());
            }
        },
    );
}

fn format_max(b: &mut Bencher) {
    simple_logger::init_with_level(log::Level::Debug).unwrap_or_default();

    let a = U256::max_value();
    let mut buf = [0u8; 128];
    b.iter(|| format(bb(&a), Some("prefix"), Some("suffix"), 18, 0, false, &mut buf));
}

fn mul_mod(b: &mut Bencher) {
    simple_logger::init_with_level(log::Level::Debug).unwrap_or_default();

    let n = U256::from_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141")
        .expect("valid hex");
    b.iter_with_setup(
        || {
            let mut rng = thread_rng();
            (
                U256::random_in_range(&mut rng, &n),
                U256::random_in_range(&mut rng, &n),
            )
        },
        |(mut x, y)| {
            x.mul_mod(bb(&y), &n);
            x
        },
    );
}

fn bignum_benchmark(c: &mut Criterion) {
    c.bench_function("bignum::divmod58", divmod58);
    c.bench_function("bignum::format", format_max);
    c.bench_function("bignum::mul_mod", mul_mod);
}

criterion_group! {
     name = benches;
     config = Criterion::default().measurement_time(Duration::from_secs(10)).warm_up_time(Duration::from_secs(3)).sample_size(100);
     targets = bignum_benchmark
}

criterion_main!(benches);
