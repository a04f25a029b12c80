//! codec.rs - 32-byte big-endian and little-endian encodings of U256

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

use super::u256::{U256, WORDS};
use crate::utils::{hexstr_to_bev_u8, u8v_to_hexstr};
use crate::CryptoError;

/// Size of the fixed binary encoding.
pub const U256_BYTES: usize = 32;

impl U256 {
    /// Interpret 32 octets as a big-endian unsigned integer.
    pub fn read_be(bytes: &[u8; U256_BYTES]) -> U256 {
        let mut words = [0u64; WORDS];
        for (i, w) in words.iter_mut().enumerate() {
            let mut chunk = [0u8; 8];
            let end = U256_BYTES - 8 * i;
            chunk.copy_from_slice(&bytes[end - 8..end]);
            *w = u64::from_be_bytes(chunk);
        }
        U256(words)
    }

    /// Interpret 32 octets as a little-endian unsigned integer.
    pub fn read_le(bytes: &[u8; U256_BYTES]) -> U256 {
        let mut words = [0u64; WORDS];
        for (i, w) in words.iter_mut().enumerate() {
            let mut chunk = [0u8; 8];
            chunk.copy_from_slice(&bytes[8 * i..8 * i + 8]);
            *w = u64::from_le_bytes(chunk);
        }
        U256(words)
    }

    pub fn write_be(&self) -> [u8; U256_BYTES] {
        let mut ans = [0u8; U256_BYTES];
        for (i, w) in self.0.iter().enumerate() {
            let end = U256_BYTES - 8 * i;
            ans[end - 8..end].copy_from_slice(&w.to_be_bytes());
        }
        ans
    }

    pub fn write_le(&self) -> [u8; U256_BYTES] {
        let mut ans = [0u8; U256_BYTES];
        for (i, w) in self.0.iter().enumerate() {
            ans[8 * i..8 * i + 8].copy_from_slice(&w.to_le_bytes());
        }
        ans
    }

    /// Parse exactly 64 hex digits holding the big-endian encoding.
    pub fn from_hex(s: &str) -> Result<U256, CryptoError> {
        let mut x = [0u8; U256_BYTES];
        hexstr_to_bev_u8(s, &mut x)?;
        Ok(U256::read_be(&x))
    }

    /// 64 lowercase hex digits of the big-endian encoding.
    pub fn to_hex(&self) -> String {
        u8v_to_hexstr(&self.write_be())
    }
}
