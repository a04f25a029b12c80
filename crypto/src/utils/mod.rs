//! mod.rs - hex helpers for fixed-size byte vectors

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

use crate::CryptoError;

// -------------------------------------------------------------------
// general utility functions

/// Collect a big-endian vector of 8-bit values from a hex string.
/// The string must encode exactly `x.len()` bytes.
pub fn hexstr_to_bev_u8(s: &str, x: &mut [u8]) -> Result<(), CryptoError> {
    let v = hex::decode(s)?;
    if x.len() != v.len() {
        return Err(CryptoError::InvalidHexLength);
    }
    x.copy_from_slice(&v);
    Ok(())
}

/// Produce a hexnum string from a byte vector.
pub fn u8v_to_hexstr(x: &[u8]) -> String {
    hex::encode(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bev() {
        let mut be = [0u8; 4];
        hexstr_to_bev_u8("01020a0B", &mut be).unwrap();
        assert_eq!(be, [0x01, 0x02, 0x0a, 0x0b]);
        assert_eq!(u8v_to_hexstr(&be), "01020a0b");
    }

    #[test]
    fn bad_hex() {
        let mut x = [0u8; 2];
        assert_eq!(hexstr_to_bev_u8("0g00", &mut x), Err(CryptoError::InvalidHexCharacter));
        assert_eq!(hexstr_to_bev_u8("000", &mut x), Err(CryptoError::OddHexLength));
        assert_eq!(hexstr_to_bev_u8("000000", &mut x), Err(CryptoError::InvalidHexLength));
    }
}
