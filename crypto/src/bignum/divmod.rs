//! divmod.rs - division by a small native divisor

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
    /// Divide `self` by `d` in place and return the remainder.
    ///
    /// Afterwards `old == self * d + rem` and `rem < d`. Calling it until
    /// the value reaches zero yields the base-`d` digits, least significant
    /// first.
    ///
    /// # Panics
    ///
    /// Panics if `d` is zero.
    pub fn divmod(&mut self, d: u32) -> u32 {
        assert!(d != 0, "division by zero");
        let d = u128::from(d);
        let mut rem = 0u128;
        for w in self.0.iter_mut().rev() {
            let cur = (rem << 64) | u128::from(*w);
            *w = (cur / d) as u64;
            rem = cur % d;
        }
        rem as u32
    }

    #[inline]
    pub fn divmod58(&mut self) -> u32 {
        self.divmod(58)
    }

    #[inline]
    pub fn divmod1000(&mut self) -> u32 {
        self.divmod(1000)
    }

    #[inline]
    pub fn divmod10(&mut self) -> u32 {
        self.divmod(10)
    }

    /// Full base-`d` digit sequence, least significant first. Zero has the
    /// single digit 0.
    pub fn digits(&self, d: u32) -> Vec<u32> {
        let mut x = *self;
        let mut out = Vec::new();
        loop {
            out.push(x.divmod(d));
            if x.is_zero() {
                return out;
            }
        }
    }
}
