//! Decimal amount parser.

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

use failure::{bail, Error};
use fuzzbed_crypto::bignum::{Format, U256};

/// Render `amount` scaled by `10^decimals` as a decimal string.
/// Integral amounts are printed without a fractional part.
pub fn format_amount(amount: &U256, decimals: u32) -> String {
    let fmt = Format {
        decimals,
        ..Default::default()
    };
    let mut s = amount.to_decimal(&fmt);
    if decimals > 0 && s.ends_with(".0") {
        s.truncate(s.len() - 2);
    }
    s
}

/// Parse `digits[.digits]` into a fixed-point value with `decimals`
/// fractional digits.
pub fn parse_amount(amount: &str, decimals: u32) -> Result<U256, Error> {
    let (main, frac) = match amount.rfind('.') {
        Some(sep) => {
            let (main, frac) = amount.split_at(sep);
            (main, &frac[1..]) // skip separator itself.
        }
        None => (amount, ""),
    };

    if main.is_empty() {
        bail!("Invalid amount '{}': missing main part", amount);
    }
    if frac.len() > decimals as usize {
        bail!(
            "Invalid amount '{}': too many digits after decimal point",
            amount
        );
    }
    if amount.len() > main.len() && frac.is_empty() {
        bail!("Invalid amount '{}': missing fractional part", amount);
    }

    let mut value = U256::zero();
    for c in main.bytes().chain(frac.bytes()) {
        if !c.is_ascii_digit() {
            bail!("Invalid amount '{}': unexpected character", amount);
        }
        if value.mul_small(10) != 0 {
            bail!("Invalid amount '{}': too large", amount);
        }
        let (sum, overflow) = value.overflowing_add(&U256::from(u32::from(c - b'0')));
        if overflow {
            bail!("Invalid amount '{}': too large", amount);
        }
        value = sum;
    }

    // Scale up to `decimals`. Zero stays zero, anything else overflows
    // after at most 78 steps.
    if !value.is_zero() {
        for _ in frac.len()..decimals as usize {
            if value.mul_small(10) != 0 {
                bail!("Invalid amount '{}': too large", amount);
            }
        }
    }
    Ok(value)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn amount() {
        let test_values = vec![
            ("0", 0u64, "0"),
            ("5", 5_000_000, "5"),
            ("5.0", 5_000_000, "5"),
            ("5.000000", 5_000_000, "5"),
            ("5.9", 5_900_000, "5.9"),
            ("5.99", 5_990_000, "5.99"),
            ("5.999999", 5_999_999, "5.999999"),
            ("5.3", 5_300_000, "5.3"),
            ("5.03", 5_030_000, "5.03"),
            ("5.000003", 5_000_003, "5.000003"),
            ("05.10", 5_100_000, "5.1"),
            ("999999999999", 999_999_999_999_000_000, "999999999999"),
            (
                "999999999999.999999",
                999_999_999_999_999_999,
                "999999999999.999999",
            ),
        ];

        for (sval, ival, sval2) in test_values {
            let ival2 = parse_amount(sval, 6).expect("valid");
            assert_eq!(U256::from(ival), ival2);
            assert_eq!(sval2, format_amount(&ival2, 6));
        }

        parse_amount("0.0000000", 6).unwrap_err();
        parse_amount("a.0", 6).unwrap_err();
        parse_amount("0.b", 6).unwrap_err();
        parse_amount("", 6).unwrap_err();
        parse_amount(".5", 6).unwrap_err();
        parse_amount("5.", 6).unwrap_err();
        parse_amount("-5", 6).unwrap_err();
        parse_amount("1.5", 0).unwrap_err();
    }

    #[test]
    fn no_decimals() {
        assert_eq!(parse_amount("1000", 0).unwrap(), U256::from(1000u32));
        assert_eq!(format_amount(&U256::from(1000u32), 0), "1000");
        assert_eq!(format_amount(&U256::zero(), 3), "0");
    }

    #[test]
    fn huge_decimals() {
        let max = u32::max_value();
        assert_eq!(parse_amount("0", max).unwrap(), U256::zero());
        assert_eq!(parse_amount("000.000", max).unwrap(), U256::zero());
        parse_amount("1", max).unwrap_err();
        parse_amount("0.001", max).unwrap_err();
        parse_amount("0.x", max).unwrap_err();
        // Largest power of ten that fits.
        let mut ten77 = U256::one();
        for _ in 0..77 {
            ten77.mul_small(10);
        }
        assert_eq!(parse_amount("1", 77).unwrap(), ten77);
        parse_amount("1", 78).unwrap_err();
    }

    #[test]
    fn limits() {
        let max = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
        assert_eq!(parse_amount(max, 0).unwrap(), U256::max_value());
        parse_amount("115792089237316195423570985008687907853269984665640564039457584007913129639936", 0)
            .unwrap_err();
        parse_amount("1157920892373161954235709850086879078532699846656405640394575840079131296399350", 0)
            .unwrap_err();
        assert_eq!(
            parse_amount("11579208923731619542357098500868790785326998466564056403945758400791312963993.5", 1)
                .unwrap(),
            U256::max_value()
        );
        assert_eq!(
            format_amount(&U256::max_value(), 1),
            "11579208923731619542357098500868790785326998466564056403945758400791312963993.5"
        );
    }

    #[test]
    fn round_trip() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let x = U256::random(&mut rng);
            let d = rng.gen_range(0, 20);
            let s = format_amount(&x, d);
            assert_eq!(parse_amount(&s, d).unwrap(), x, "{} / {}", s, d);
        }
    }
}
