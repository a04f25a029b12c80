//! u256.rs - 256-bit unsigned value stored as a little-endian [u64; 4]

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

use rand::Rng;
use std::cmp::Ordering;
use std::fmt;

// -----------------------------------------------------------------
// U256 word chunks represent a 256-bit bignum as a little-endian u64 vector.
//
// The word layout is private. Everything outside of this module talks to
// the value through the byte codec, the native integer bridge or the
// arithmetic below.

pub(crate) const WORDS: usize = 4;

/// Fixed-width 256-bit unsigned integer.
///
/// Plain value type: copying is assignment, every mutation goes through
/// `&mut self`. Arithmetic that would leave the 256-bit range wraps.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct U256(pub(crate) [u64; WORDS]);

impl U256 {
    /// The additive identity.
    pub const fn zero() -> U256 {
        U256([0; WORDS])
    }

    /// The value 1.
    pub const fn one() -> U256 {
        U256([1, 0, 0, 0])
    }

    /// 2^256 - 1.
    pub const fn max_value() -> U256 {
        U256([u64::max_value(); WORDS])
    }

    /// Uniformly random value.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> U256 {
        U256(rng.gen::<[u64; WORDS]>())
    }

    /// Random value below `range`, obtained by halving until it fits.
    /// The distribution is not uniform.
    pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, range: &U256) -> U256 {
        assert!(!range.is_zero(), "empty range");
        let mut x = Self::random(rng);
        while x >= *range {
            div2(&mut x.0);
        }
        x
    }

    /// Multiply by two, dropping the bit shifted out of the top word.
    #[inline]
    pub fn lshift(&mut self) {
        mul2(&mut self.0);
    }

    /// Divide by two, rounding down.
    #[inline]
    pub fn rshift(&mut self) {
        div2(&mut self.0);
    }

    /// Add a small integer, wrapping at 2^256.
    pub fn addi(&mut self, a: u32) {
        let mut carry = u64::from(a);
        for w in self.0.iter_mut() {
            if carry == 0 {
                break;
            }
            *w = adc(*w, 0, &mut carry);
        }
    }

    /// Subtract a small integer, wrapping below zero.
    pub fn subi(&mut self, a: u32) {
        let mut borrow = 0;
        let mut b = u64::from(a);
        for w in self.0.iter_mut() {
            *w = sbb(*w, b, &mut borrow);
            b = 0;
            if borrow == 0 {
                break;
            }
        }
    }

    /// Multiply by a small integer in place. Returns the word that was
    /// shifted out of the top, i.e. zero unless the product overflowed.
    pub fn mul_small(&mut self, m: u32) -> u32 {
        let mut carry = 0u64;
        for w in self.0.iter_mut() {
            let cur = u128::from(*w) * u128::from(m) + u128::from(carry);
            *w = cur as u64;
            carry = (cur >> 64) as u64;
        }
        carry as u32
    }

    pub fn overflowing_add(&self, other: &U256) -> (U256, bool) {
        let mut res = *self;
        let carry = add_carry(&mut res.0, &other.0);
        (res, carry != 0)
    }

    pub fn overflowing_sub(&self, other: &U256) -> (U256, bool) {
        let mut res = *self;
        let borrow = sub_borrow(&mut res.0, &other.0);
        (res, borrow != 0)
    }

    pub fn wrapping_add(&self, other: &U256) -> U256 {
        self.overflowing_add(other).0
    }

    pub fn wrapping_sub(&self, other: &U256) -> U256 {
        self.overflowing_sub(other).0
    }
}

// -------------------------------------------

impl fmt::Debug for U256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "U256([{:016x}, {:016x}, {:016x}, {:016x}])",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.to_decimal(&Default::default()))
    }
}

// -------------------------------------------

impl Ord for U256 {
    fn cmp(&self, other: &U256) -> Ordering {
        for (a, b) in self.0.iter().zip(other.0.iter()).rev() {
            if *a < *b {
                return Ordering::Less;
            } else if *a > *b {
                return Ordering::Greater;
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &U256) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// -------------------------------------------------------------------------
// Primitive ops for U256, on raw arrays of 4 x u64

/// Divide by two
#[inline]
pub(crate) fn div2(a: &mut [u64; WORDS]) {
    let mut carry = 0;
    for w in a.iter_mut().rev() {
        let tmp = *w << 63;
        *w = (*w >> 1) | carry;
        carry = tmp;
    }
}

/// Multiply by two, returning the bit shifted out of the top word.
#[inline]
pub(crate) fn mul2(a: &mut [u64; WORDS]) -> u64 {
    let mut last = 0;
    for w in a.iter_mut() {
        let tmp = *w >> 63;
        *w = (*w << 1) | last;
        last = tmp;
    }
    last
}

#[inline]
pub(crate) fn adc(a: u64, b: u64, carry: &mut u64) -> u64 {
    let t = u128::from(a) + u128::from(b) + u128::from(*carry);
    *carry = (t >> 64) as u64;
    t as u64
}

#[inline]
pub(crate) fn sbb(a: u64, b: u64, borrow: &mut u64) -> u64 {
    let t = (1u128 << 64) + u128::from(a) - u128::from(b) - u128::from(*borrow);
    *borrow = ((t >> 64) == 0) as u64;
    t as u64
}

/// `a += b`, returns the carry out of the top word.
pub(crate) fn add_carry(a: &mut [u64; WORDS], b: &[u64; WORDS]) -> u64 {
    let mut carry = 0;
    for (a, b) in a.iter_mut().zip(b.iter()) {
        *a = adc(*a, *b, &mut carry);
    }
    carry
}

/// `a -= b`, returns the borrow out of the top word.
pub(crate) fn sub_borrow(a: &mut [u64; WORDS], b: &[u64; WORDS]) -> u64 {
    let mut borrow = 0;
    for (a, b) in a.iter_mut().zip(b.iter()) {
        *a = sbb(*a, *b, &mut borrow);
    }
    borrow
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shifts() {
        let mut a = U256::one();
        for _ in 0..255 {
            a.lshift();
        }
        assert_eq!(a, U256([0, 0, 0, 1 << 63]));
        // Top bit is dropped.
        a.lshift();
        assert!(a.is_zero());

        let mut b = U256::max_value();
        b.rshift();
        assert_eq!(b, U256([!0, !0, !0, !0 >> 1]));
    }

    #[test]
    fn small_add_sub() {
        let mut a = U256([!0, !0, 0, 0]);
        a.addi(1);
        assert_eq!(a, U256([0, 0, 1, 0]));
        a.subi(1);
        assert_eq!(a, U256([!0, !0, 0, 0]));

        let mut m = U256::max_value();
        m.addi(1);
        assert!(m.is_zero());
        m.subi(2);
        assert_eq!(m, U256([!0 - 1, !0, !0, !0]));
    }

    #[test]
    fn mul_small() {
        let mut a = U256::from(0xffff_ffff_ffff_ffffu64);
        assert_eq!(a.mul_small(1000), 0);
        assert_eq!(a, U256([0xffff_ffff_ffff_fc18, 999, 0, 0]));

        let mut m = U256::max_value();
        assert_eq!(m.mul_small(10), 9);
        assert_eq!(m, U256([!0 - 9, !0, !0, !0]));
    }

    #[test]
    fn add_sub_overflow() {
        let (s, c) = U256::max_value().overflowing_add(&U256::one());
        assert!(s.is_zero());
        assert!(c);
        let (d, b) = U256::zero().overflowing_sub(&U256::one());
        assert_eq!(d, U256::max_value());
        assert!(b);

        let mut rng = StdRng::seed_from_u64(0x256);
        for _ in 0..100 {
            let x = U256::random(&mut rng);
            let y = U256::random(&mut rng);
            assert_eq!(x.wrapping_add(&y).wrapping_sub(&y), x);
            let (_, borrow) = x.overflowing_sub(&y);
            assert_eq!(borrow, x < y);
        }
    }

    #[test]
    fn ordering() {
        let a = U256([0, 0, 0, 1]);
        let b = U256([!0, !0, !0, 0]);
        assert!(b < a);
        assert!(a > b);
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }

    #[test]
    fn random_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = U256::from(1000u32);
        for _ in 0..100 {
            assert!(U256::random_in_range(&mut rng, &range) < range);
        }
    }
}
