//! native.rs - conversions between U256 and native unsigned integers

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
    pub fn read_uint32(v: u32) -> U256 {
        U256([u64::from(v), 0, 0, 0])
    }

    pub fn read_uint64(v: u64) -> U256 {
        U256([v, 0, 0, 0])
    }

    /// Low 32 bits of the value. Larger values are truncated, use
    /// `checked_uint32` to detect that.
    pub fn write_uint32(&self) -> u32 {
        self.0[0] as u32
    }

    /// Low 64 bits of the value. Larger values are truncated, use
    /// `checked_uint64` to detect that.
    pub fn write_uint64(&self) -> u64 {
        self.0[0]
    }

    pub fn checked_uint32(&self) -> Option<u32> {
        if self.bitcount() <= 32 {
            Some(self.write_uint32())
        } else {
            None
        }
    }

    pub fn checked_uint64(&self) -> Option<u64> {
        if self.bitcount() <= 64 {
            Some(self.write_uint64())
        } else {
            None
        }
    }
}

impl From<u32> for U256 {
    fn from(v: u32) -> U256 {
        U256::read_uint32(v)
    }
}

impl From<u64> for U256 {
    fn from(v: u64) -> U256 {
        U256::read_uint64(v)
    }
}

impl From<u128> for U256 {
    fn from(v: u128) -> U256 {
        U256([v as u64, (v >> 64) as u64, 0, 0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn hex(s: &str) -> U256 {
        U256::from_hex(s).unwrap()
    }

    // (big-endian hex, value)
    const VECTORS64: [(&str, u64); 5] = [
        // lowest 30 bits set
        (
            "000000000000000000000000000000000000000000000000000000003fffffff",
            0x3fffffff,
        ),
        // bit 31 set
        (
            "0000000000000000000000000000000000000000000000000000000040000000",
            0x40000000,
        ),
        // bit 33 set
        (
            "0000000000000000000000000000000000000000000000000000000100000000",
            0x100000000,
        ),
        // bit 61 set
        (
            "0000000000000000000000000000000000000000000000002000000000000000",
            0x2000000000000000,
        ),
        // all 64 bits set
        (
            "000000000000000000000000000000000000000000000000ffffffffffffffff",
            0xffffffffffffffff,
        ),
    ];

    #[test]
    fn uint32_read_write() {
        let mut rng = StdRng::seed_from_u64(32);
        for _ in 0..1000 {
            let input: u32 = rng.gen();
            assert_eq!(U256::read_uint32(input).write_uint32(), input);
        }
        assert_eq!(U256::read_uint32(u32::max_value()).write_uint32(), u32::max_value());
        assert_eq!(U256::read_uint32(0).write_uint32(), 0);
    }

    #[test]
    fn uint32_vectors() {
        for (s, v) in VECTORS64.iter().take(2) {
            let a = hex(s);
            assert_eq!(a, U256::read_uint32(*v as u32));
            assert_eq!(a.write_uint32(), *v as u32);
        }
    }

    #[test]
    fn uint64_read_write() {
        let mut rng = StdRng::seed_from_u64(64);
        for _ in 0..1000 {
            let input: u64 = rng.gen();
            assert_eq!(U256::read_uint64(input).write_uint64(), input);
        }
    }

    #[test]
    fn uint64_vectors() {
        for (s, v) in VECTORS64.iter() {
            let a = hex(s);
            assert_eq!(a, U256::read_uint64(*v));
            assert_eq!(a.write_uint64(), *v);
        }
    }

    #[test]
    fn out_of_range() {
        let a = hex("0000000000000000000000000000000000000000000000000000000100000005");
        assert_eq!(a.write_uint32(), 5);
        assert_eq!(a.checked_uint32(), None);
        assert_eq!(a.checked_uint64(), Some(0x100000005));
        assert_eq!(U256::max_value().write_uint64(), u64::max_value());
        assert_eq!(U256::max_value().checked_uint64(), None);
        assert_eq!(U256::from(7u32).checked_uint32(), Some(7));
    }
}
