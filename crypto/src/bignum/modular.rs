//! modular.rs - scalar arithmetic modulo an externally supplied modulus

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

use super::u256::{add_carry, div2, mul2, sub_borrow, U256, WORDS};

// -----------------------------------------------------------------
// These operations are what a curve layer needs for scalars: reduce an
// arbitrary 256-bit value, then add/sub/mul/invert modulo the group order.
// Operands don't have to be reduced beforehand, every result is in
// [0, modulus).
//
// A zero modulus is a contract violation and panics.

impl U256 {
    /// `self := self mod modulus`.
    pub fn reduce_mod(&mut self, modulus: &U256) {
        assert!(!modulus.is_zero(), "zero modulus");
        if *self < *modulus {
            return;
        }
        let mut r = U256::zero();
        for i in (0..self.bitcount() as usize).rev() {
            let top = mul2(&mut r.0);
            if self.testbit(i) {
                r.0[0] |= 1;
            }
            // r < 2 * modulus here, so one subtraction is enough. If the
            // shift overflowed the borrow cancels the lost top bit.
            if top != 0 || r >= *modulus {
                sub_borrow(&mut r.0, &modulus.0);
            }
        }
        *self = r;
    }

    /// `self := (self + other) mod modulus`.
    pub fn add_mod(&mut self, other: &U256, modulus: &U256) {
        self.reduce_mod(modulus);
        let mut b = *other;
        b.reduce_mod(modulus);
        let carry = add_carry(&mut self.0, &b.0);
        if carry != 0 || *self >= *modulus {
            sub_borrow(&mut self.0, &modulus.0);
        }
    }

    /// `self := (self - other) mod modulus`.
    pub fn sub_mod(&mut self, other: &U256, modulus: &U256) {
        self.reduce_mod(modulus);
        let mut b = *other;
        b.reduce_mod(modulus);
        if *self < b {
            add_carry(&mut self.0, &modulus.0);
        }
        sub_borrow(&mut self.0, &b.0);
    }

    /// `self := -self mod modulus`.
    pub fn neg_mod(&mut self, modulus: &U256) {
        self.reduce_mod(modulus);
        if !self.is_zero() {
            let mut tmp = *modulus;
            sub_borrow(&mut tmp.0, &self.0);
            *self = tmp;
        }
    }

    /// `self := (self * other) mod modulus`, via the full 512-bit product.
    pub fn mul_mod(&mut self, other: &U256, modulus: &U256) {
        assert!(!modulus.is_zero(), "zero modulus");
        let mut wide = [0u64; 2 * WORDS];
        for (i, xi) in self.0.iter().enumerate() {
            mac_digit(&mut wide[i..], &other.0, *xi);
        }
        *self = reduce_wide(&wide, modulus);
    }

    /// Multiplicative inverse modulo an odd `modulus`.
    ///
    /// Returns `None` if `self` is not invertible, i.e. shares a factor with
    /// the modulus (zero included).
    ///
    /// # Panics
    ///
    /// Panics if the modulus is even.
    pub fn invert_mod(&self, modulus: &U256) -> Option<U256> {
        // Guajardo Kumar Paar Pelzl
        // Efficient Software-Implementation of Finite Fields with Applications to Cryptography
        // Algorithm 16 (BEA for Inversion in Fp)
        assert!(modulus.is_odd(), "modulus must be odd");

        let mut u = *self;
        u.reduce_mod(modulus);
        let mut v = *modulus;
        let mut b = U256::one();
        let mut c = U256::zero();

        while !u.is_one() && !v.is_one() {
            if u.is_zero() || v.is_zero() {
                return None;
            }
            while u.is_even() {
                div2(&mut u.0);
                half_mod(&mut b, modulus);
            }
            while v.is_even() {
                div2(&mut v.0);
                half_mod(&mut c, modulus);
            }
            if u >= v {
                sub_borrow(&mut u.0, &v.0);
                b.sub_mod(&c, modulus);
            } else {
                sub_borrow(&mut v.0, &u.0);
                c.sub_mod(&b, modulus);
            }
        }

        let mut inv = if u.is_one() { b } else { c };
        inv.reduce_mod(modulus);
        Some(inv)
    }
}

/// `x := x / 2 mod modulus` for odd modulus and `x < modulus`.
fn half_mod(x: &mut U256, modulus: &U256) {
    if x.is_even() {
        div2(&mut x.0);
    } else {
        let carry = add_carry(&mut x.0, &modulus.0);
        div2(&mut x.0);
        x.0[WORDS - 1] |= carry << 63;
    }
}

/// `acc += b * c`, carrying into the rest of `acc`.
fn mac_digit(acc: &mut [u64], b: &[u64], c: u64) {
    if c == 0 {
        return;
    }

    let mut b_iter = b.iter();
    let mut carry = 0u64;
    for ai in acc.iter_mut() {
        let bi = match b_iter.next() {
            Some(bi) => *bi,
            None if carry != 0 => 0,
            None => break,
        };
        let t = u128::from(*ai) + u128::from(bi) * u128::from(c) + u128::from(carry);
        *ai = t as u64;
        carry = (t >> 64) as u64;
    }

    debug_assert!(carry == 0);
}

/// Reduce a little-endian 512-bit value modulo `modulus`.
fn reduce_wide(wide: &[u64; 2 * WORDS], modulus: &U256) -> U256 {
    let mut r = U256::zero();
    for i in (0..2 * WORDS * 64).rev() {
        let top = mul2(&mut r.0);
        r.0[0] |= (wide[i / 64] >> (i % 64)) & 1;
        if top != 0 || r >= *modulus {
            sub_borrow(&mut r.0, &modulus.0);
        }
    }
    r
}
