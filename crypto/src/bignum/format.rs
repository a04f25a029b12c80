//! format.rs - decorated fixed-point decimal rendering of U256

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
use crate::CryptoError;

/// Number of decimal digits of 2^256 - 1.
const MAX_DIGITS: usize = 78;

/// Options of the decimal formatter.
///
/// * `prefix`, `suffix` - copied verbatim around the number.
/// * `decimals` - number of digits placed after the decimal point. Zero means
///   no decimal point at all.
/// * `exponent` - the value is multiplied by `10^exponent` before placing the
///   point. A negative exponent drops the lowest digits.
/// * `trailing` - keep trailing zeros of the fraction. Otherwise they are
///   stripped down to a single fractional digit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Format<'a> {
    pub prefix: Option<&'a str>,
    pub suffix: Option<&'a str>,
    pub decimals: u32,
    pub exponent: i32,
    pub trailing: bool,
}

// -----------------------------------------------------------------
// Decimal digits of the value, least significant first, plus the digit
// positions implied by exponent, decimals and trailing.

struct Layout {
    digits: [u8; MAX_DIGITS],
    /// Number of significant digits kept in `digits`.
    ndigits: usize,
    /// Lowest digits dropped by a negative exponent.
    skip: usize,
    /// Zeros appended by a positive exponent.
    zeros: usize,
    /// Digits in the integer and fractional parts combined, after padding.
    total: usize,
    decimals: usize,
    /// Fractional digits actually printed.
    frac: usize,
}

impl Layout {
    fn new(value: &U256, fmt: &Format) -> Layout {
        let mut digits = [b'0'; MAX_DIGITS];
        let mut ndigits = 0;
        let mut x = *value;
        loop {
            let mut group = x.divmod1000();
            if x.is_zero() {
                loop {
                    digits[ndigits] = b'0' + (group % 10) as u8;
                    ndigits += 1;
                    group /= 10;
                    if group == 0 {
                        break;
                    }
                }
                break;
            }
            for _ in 0..3 {
                digits[ndigits] = b'0' + (group % 10) as u8;
                ndigits += 1;
                group /= 10;
            }
        }

        let (mut skip, mut zeros) = (0, 0);
        if !value.is_zero() {
            if fmt.exponent >= 0 {
                zeros = fmt.exponent as usize;
            } else {
                skip = (-i64::from(fmt.exponent)) as usize;
                if skip >= ndigits {
                    // Everything is dropped, what remains is plain zero.
                    digits[0] = b'0';
                    ndigits = 1;
                    skip = 0;
                }
            }
        }

        let len = (ndigits - skip).saturating_add(zeros);
        let decimals = fmt.decimals as usize;
        let total = if decimals > 0 {
            len.max(decimals.saturating_add(1))
        } else {
            len
        };

        let mut layout = Layout {
            digits,
            ndigits,
            skip,
            zeros,
            total,
            decimals,
            frac: decimals,
        };
        if !fmt.trailing && decimals > 0 {
            // Only significant digits can be nonzero, so the lowest one
            // decides how much of the fraction survives.
            let lowest = (skip..ndigits)
                .find(|j| layout.digits[*j] != b'0')
                .map(|j| zeros.saturating_add(j - skip));
            layout.frac = match lowest {
                Some(p) if p < decimals => (decimals - p).max(1),
                _ => 1,
            };
        }
        layout
    }

    /// ASCII digit at position `i`, counting from the least significant.
    fn digit(&self, i: usize) -> u8 {
        if i < self.zeros {
            return b'0';
        }
        let j = i - self.zeros + self.skip;
        if j < self.ndigits {
            self.digits[j]
        } else {
            b'0'
        }
    }

    /// Length of the rendered number without prefix and suffix.
    fn len(&self) -> usize {
        if self.decimals > 0 {
            self.total - self.decimals + 1 + self.frac
        } else {
            self.total
        }
    }

    /// Feed the rendered number to `out`, most significant first.
    fn emit<F: FnMut(u8)>(&self, mut out: F) {
        for i in (self.decimals..self.total).rev() {
            out(self.digit(i));
        }
        if self.decimals > 0 {
            out(b'.');
            for i in (self.decimals - self.frac..self.decimals).rev() {
                out(self.digit(i));
            }
        }
    }
}

impl U256 {
    /// Length of the decorated string, without the terminator.
    pub fn formatted_len(&self, fmt: &Format) -> usize {
        let prefix = fmt.prefix.map_or(0, str::len);
        let suffix = fmt.suffix.map_or(0, str::len);
        Layout::new(self, fmt)
            .len()
            .saturating_add(prefix)
            .saturating_add(suffix)
    }

    /// Write the decorated decimal string followed by a NUL byte into `out`.
    ///
    /// Returns the number of bytes written, not counting the terminator.
    /// If the result does not fit, `out` is left untouched and
    /// `CryptoError::BufferTooSmall` is returned.
    pub fn format_into(&self, fmt: &Format, out: &mut [u8]) -> Result<usize, CryptoError> {
        let layout = Layout::new(self, fmt);
        let prefix = fmt.prefix.unwrap_or("").as_bytes();
        let suffix = fmt.suffix.unwrap_or("").as_bytes();
        let len = layout
            .len()
            .saturating_add(prefix.len())
            .saturating_add(suffix.len());
        if len >= out.len() {
            return Err(CryptoError::BufferTooSmall(len.saturating_add(1), out.len()));
        }

        out[..prefix.len()].copy_from_slice(prefix);
        let mut pos = prefix.len();
        layout.emit(|c| {
            out[pos] = c;
            pos += 1;
        });
        out[pos..pos + suffix.len()].copy_from_slice(suffix);
        pos += suffix.len();
        out[pos] = 0;
        debug_assert_eq!(pos, len);
        Ok(len)
    }

    /// Decorated decimal string as an owned `String`.
    pub fn to_decimal(&self, fmt: &Format) -> String {
        let layout = Layout::new(self, fmt);
        let mut s = String::with_capacity(self.formatted_len(fmt));
        s.push_str(fmt.prefix.unwrap_or(""));
        layout.emit(|c| s.push(char::from(c)));
        s.push_str(fmt.suffix.unwrap_or(""));
        s
    }
}

/// Render `value` into `output` as a NUL terminated decorated decimal string.
///
/// Returns the length of the string without the terminator, or 0 when
/// `output` is too small. On failure `output` is not modified.
pub fn format(
    value: &U256,
    prefix: Option<&str>,
    suffix: Option<&str>,
    decimals: u32,
    exponent: i32,
    trailing: bool,
    output: &mut [u8],
) -> usize {
    let fmt = Format {
        prefix,
        suffix,
        decimals,
        exponent,
        trailing,
    };
    value.format_into(&fmt, output).unwrap_or(0)
}

/// Same as `format` for a native 64-bit amount.
pub fn format_uint64(
    amount: u64,
    prefix: Option<&str>,
    suffix: Option<&str>,
    decimals: u32,
    exponent: i32,
    trailing: bool,
    output: &mut [u8],
) -> usize {
    format(
        &U256::read_uint64(amount),
        prefix,
        suffix,
        decimals,
        exponent,
        trailing,
        output,
    )
}
