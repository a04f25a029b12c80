//! predicates.rs - comparison, parity and length queries on U256

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

use super::u256::U256;

impl U256 {
    /// Same as `==`.
    #[inline]
    pub fn is_equal(&self, other: &U256) -> bool {
        self == other
    }

    /// Strict unsigned less-than, same as `<`.
    #[inline]
    pub fn is_less(&self, other: &U256) -> bool {
        self < other
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|w| *w == 0)
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        *self == U256::one()
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        self.0[0] & 1 == 0
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Number of bits in the minimal binary representation, 0 for zero.
    pub fn bitcount(&self) -> u32 {
        for (i, w) in self.0.iter().enumerate().rev() {
            if *w != 0 {
                return 64 * i as u32 + (64 - w.leading_zeros());
            }
        }
        0
    }

    /// Number of digits in the minimal decimal representation, 1 for zero.
    pub fn digitcount(&self) -> u32 {
        let mut x = *self;
        let mut count = 0;
        loop {
            let group = x.divmod1000();
            if x.is_zero() {
                return count
                    + match group {
                        0..=9 => 1,
                        10..=99 => 2,
                        _ => 3,
                    };
            }
            count += 3;
        }
    }

    pub fn testbit(&self, i: usize) -> bool {
        assert!(i < 256, "bit index out of range: {}", i);
        (self.0[i / 64] >> (i % 64)) & 1 == 1
    }

    pub fn setbit(&mut self, i: usize) {
        assert!(i < 256, "bit index out of range: {}", i);
        self.0[i / 64] |= 1 << (i % 64);
    }

    pub fn clearbit(&mut self, i: usize) {
        assert!(i < 256, "bit index out of range: {}", i);
        self.0[i / 64] &= !(1 << (i % 64));
    }
}
