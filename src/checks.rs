//! Randomized property checks.

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

use crate::amount::{format_amount, parse_amount};
use crate::config::ChecksConfig;
use fuzzbed_crypto::bignum::{Format, U256};
use log::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Failures reported with error!() before going quiet.
const MAX_LOGGED_FAILURES: u64 = 10;

/// Outcome of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Seed the generator was started from.
    pub seed: u64,
    /// Evaluated law instances.
    pub checks: u64,
    /// Violated law instances.
    pub failures: u64,
}

impl Report {
    pub fn is_ok(&self) -> bool {
        self.failures == 0
    }

    fn record(&mut self, law: &str, ok: bool, input: &dyn fmt::Display) {
        self.checks += 1;
        if ok {
            return;
        }
        self.failures += 1;
        if self.failures <= MAX_LOGGED_FAILURES {
            error!("Law '{}' violated: seed={}, input={}", law, self.seed, input);
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "seed={}, checks={}, failures={}",
            self.seed, self.checks, self.failures
        )
    }
}

/// Run `cfg.iterations` rounds of every law.
pub fn run(cfg: &ChecksConfig) -> Report {
    let seed = if cfg.seed == 0 {
        rand::thread_rng().gen()
    } else {
        cfg.seed
    };
    debug!("Running {} iterations with seed={}", cfg.iterations, seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut report = Report {
        seed,
        ..Default::default()
    };
    for i in 0..cfg.iterations {
        trace!("Iteration {}", i);
        check_codec(&mut rng, &mut report);
        check_order(&mut rng, &mut report);
        check_divmod(&mut rng, &mut report);
        check_native(&mut rng, &mut report);
        check_format(&mut rng, &mut report);
        check_modular(&mut rng, &mut report);
        check_amount(&mut rng, &mut report);
    }
    debug!("Finished: {}", report);
    report
}

fn check_codec(rng: &mut StdRng, report: &mut Report) {
    let a = U256::random(rng);
    let be = a.write_be();
    let le = a.write_le();
    report.record("be round-trip", U256::read_be(&be) == a, &a);
    report.record("le round-trip", U256::read_le(&le) == a, &a);
    let mut reversed = be;
    reversed.reverse();
    report.record("le is reversed be", reversed == le, &a);
    report.record("hex round-trip", U256::from_hex(&a.to_hex()) == Ok(a), &a);
}

fn check_order(rng: &mut StdRng, report: &mut Report) {
    let a = U256::random(rng);
    // Share the top words now and then, so the low words decide.
    let mut b = U256::random(rng);
    if rng.gen() {
        let mut bytes = b.write_be();
        bytes[..16].copy_from_slice(&a.write_be()[..16]);
        b = U256::read_be(&bytes);
    }
    report.record("equality is reflexive", a.is_equal(&a), &a);
    let outcomes = [a.is_less(&b), a.is_equal(&b), b.is_less(&a)];
    let holds = outcomes.iter().filter(|x| **x).count() == 1;
    report.record("trichotomy", holds, &a);
    report.record("parity", a.is_even() != a.is_odd(), &a);
}

fn check_divmod(rng: &mut StdRng, report: &mut Report) {
    let v: u128 = rng.gen();
    let d: u32 = rng.gen::<u32>().max(1);
    let mut q = U256::from(v);
    let r = q.divmod(d);
    let holds = q == U256::from(v / u128::from(d)) && u128::from(r) == v % u128::from(d);
    report.record("divmod matches u128", holds, &v);

    let a = U256::random(rng);
    let base = rng.gen_range(2, 1001);
    let mut acc = U256::zero();
    for digit in a.digits(base).iter().rev() {
        acc.mul_small(base);
        acc.addi(*digit);
    }
    report.record("digits reassemble", acc == a, &a);
}

fn check_native(rng: &mut StdRng, report: &mut Report) {
    let v: u64 = rng.gen();
    report.record("u64 round-trip", U256::read_uint64(v).write_uint64() == v, &v);
    let v: u32 = rng.gen();
    report.record("u32 round-trip", U256::read_uint32(v).write_uint32() == v, &v);
}

fn check_format(rng: &mut StdRng, report: &mut Report) {
    let v: u128 = rng.gen::<u128>() >> rng.gen_range(0u32, 128);
    let s = U256::from(v).to_decimal(&Format::default());
    report.record("format matches u128", s == v.to_string(), &v);

    let a = U256::random(rng);
    let len = a.formatted_len(&Format::default());
    report.record("length is digitcount", len == a.digitcount() as usize, &a);
}

fn check_modular(rng: &mut StdRng, report: &mut Report) {
    let m: u128 = (rng.gen::<u128>() >> 1).max(1);
    let x: u128 = rng.gen::<u128>() >> 1;
    let y: u128 = rng.gen::<u128>() >> 1;
    let mut a = U256::from(x);
    a.add_mod(&U256::from(y), &U256::from(m));
    report.record("add_mod matches u128", a == U256::from((x + y) % m), &x);

    let mut a = U256::random(rng);
    // Clear a leading run of bytes to vary the modulus width.
    let mut bytes = U256::random(rng).write_be();
    for b in bytes.iter_mut().take(rng.gen_range(0, 32)) {
        *b = 0;
    }
    let mut m = U256::read_be(&bytes);
    if m.is_zero() {
        m = U256::one();
    }
    a.reduce_mod(&m);
    report.record("reduce_mod below modulus", a.is_less(&m), &a);
}

fn check_amount(rng: &mut StdRng, report: &mut Report) {
    let a = U256::random(rng);
    let decimals = rng.gen_range(0, 20);
    let s = format_amount(&a, decimals);
    let holds = match parse_amount(&s, decimals) {
        Ok(b) => b == a,
        Err(_) => false,
    };
    report.record("amount round-trip", holds, &s);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_run() {
        let cfg = ChecksConfig {
            iterations: 50,
            seed: 12345,
        };
        let report = run(&cfg);
        assert!(report.is_ok(), "{}", report);
        assert_eq!(report.seed, 12345);
        assert_eq!(report.checks, 50 * 16);
        assert_eq!(report, run(&cfg));
    }

    #[test]
    fn entropy_seed() {
        let cfg = ChecksConfig {
            iterations: 1,
            seed: 0,
        };
        let report = run(&cfg);
        assert!(report.is_ok());
        assert_eq!(report.checks, 16);
    }

    #[test]
    fn record() {
        let mut report = Report::default();
        report.record("ok", true, &1);
        report.record("broken", false, &2);
        assert_eq!(report.checks, 2);
        assert_eq!(report.failures, 1);
        assert!(!report.is_ok());
        assert_eq!(report.to_string(), "seed=0, checks=2, failures=1");
    }
}
