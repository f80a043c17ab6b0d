//! Radix rendering for timestamps and random fractions.
//!
//! Fractions are rendered the way ECMAScript engines implement
//! `Number.prototype.toString(radix)`: digits are emitted until the value is
//! uniquely identified among neighbouring doubles, with the last digit rounded
//! half-to-even. Codes built from these strings keep that engine's shapes,
//! including short segments for fractions with few digits.

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Integers from 2^53 upward can no longer hold a unit digit exactly.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

fn check_radix(radix: u32) {
    assert!((2..=36).contains(&radix), "radix must be within 2..=36, got {radix}");
}

/// Render `value` in `radix` using lowercase digits.
pub fn encode_integer(value: u64, radix: u32) -> String {
    check_radix(radix);
    let radix = u64::from(radix);
    let mut rest = value;
    let mut digits = Vec::new();
    loop {
        digits.push(DIGITS[(rest % radix) as usize]);
        rest /= radix;
        if rest == 0 {
            break;
        }
    }
    digits.iter().rev().map(|&d| d as char).collect()
}

/// Smallest double strictly greater than a finite, non-negative `x`.
fn next_up(x: f64) -> f64 {
    f64::from_bits(x.to_bits() + 1)
}

/// Render a double in `radix`, matching `Number.prototype.toString(radix)`.
pub fn encode_fraction(value: f64, radix: u32) -> String {
    check_radix(radix);
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let negative = value < 0.0;
    let value = value.abs();
    let base = f64::from(radix);

    let mut integer = value.floor();
    let mut fraction = value - integer;
    let mut delta = (0.5 * (next_up(value) - value)).max(next_up(0.0));
    let mut fraction_digits: Vec<u32> = Vec::new();

    if fraction >= delta {
        loop {
            fraction *= base;
            delta *= base;
            let digit = fraction as u32;
            fraction_digits.push(digit);
            fraction -= f64::from(digit);

            if (fraction > 0.5 || (fraction == 0.5 && (digit & 1) == 1)) && fraction + delta > 1.0 {
                // Round up, carrying through any run of maximal digits.
                loop {
                    match fraction_digits.pop() {
                        None => {
                            integer += 1.0;
                            break;
                        }
                        Some(d) if d + 1 < radix => {
                            fraction_digits.push(d + 1);
                            break;
                        }
                        Some(_) => {}
                    }
                }
                break;
            }
            if fraction < delta {
                break;
            }
        }
    }

    let mut integer_digits = Vec::new();
    while integer / base >= EXACT_INTEGER_LIMIT {
        integer /= base;
        integer_digits.push(b'0');
    }
    loop {
        let remainder = integer % base;
        integer_digits.push(DIGITS[remainder as usize]);
        integer = (integer - remainder) / base;
        if integer <= 0.0 {
            break;
        }
    }

    let mut out = String::with_capacity(integer_digits.len() + fraction_digits.len() + 2);
    if negative {
        out.push('-');
    }
    out.extend(integer_digits.iter().rev().map(|&d| d as char));
    if !fraction_digits.is_empty() {
        out.push('.');
        out.extend(fraction_digits.iter().map(|&d| DIGITS[d as usize] as char));
    }
    out
}

/// Uppercased base-36 rendering of `value`.
pub fn base36(value: u64) -> String {
    encode_integer(value, 36).to_ascii_uppercase()
}

/// Up to `len` base-36 digits of a `[0,1)` fraction, taken after its `0.`
/// prefix and uppercased. Not padded: `0.5` renders as `0.i` and yields `I`.
pub fn random_segment(fraction: f64, len: usize) -> String {
    encode_fraction(fraction, 36)
        .chars()
        .skip(2)
        .take(len)
        .collect::<String>()
        .to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_integer() {
        assert_eq!(encode_integer(0, 36), "0");
        assert_eq!(encode_integer(35, 36), "z");
        assert_eq!(encode_integer(36, 36), "10");
        assert_eq!(encode_integer(255, 16), "ff");
        assert_eq!(encode_integer(5, 2), "101");
        assert_eq!(encode_integer(1_709_596_800_000, 36), "ltdlslc0");
    }

    #[test]
    fn test_encode_fraction_exact_dyadics() {
        assert_eq!(encode_fraction(0.5, 36), "0.i");
        assert_eq!(encode_fraction(0.25, 36), "0.9");
        assert_eq!(encode_fraction(0.125, 36), "0.4i");
        assert_eq!(encode_fraction(0.375, 36), "0.di");
        assert_eq!(encode_fraction(1.0 / 256.0, 36), "0.0529");
        assert_eq!(encode_fraction(141.0 / 256.0, 36), "0.jtt9");
        assert_eq!(encode_fraction(200.0 / 256.0, 36), "0.s4i");
    }

    #[test]
    fn test_encode_fraction_shortest_digits() {
        assert_eq!(encode_fraction(0.1, 36), "0.3lllllllllm");
        assert_eq!(encode_fraction(1.0 / 3.0, 36), "0.c");
        assert_eq!(encode_fraction(2.0 / 3.0, 36), "0.o");
        assert_eq!(encode_fraction(1.0 - f64::EPSILON / 2.0, 36), "0.zzzzzzzzzza");
    }

    #[test]
    fn test_encode_fraction_whole_and_special_values() {
        assert_eq!(encode_fraction(0.0, 36), "0");
        assert_eq!(encode_fraction(42.0, 36), "16");
        assert_eq!(encode_fraction(-0.5, 36), "-0.i");
        assert_eq!(encode_fraction(1.5, 2), "1.1");
        assert_eq!(encode_fraction(f64::NAN, 36), "NaN");
        assert_eq!(encode_fraction(f64::INFINITY, 36), "Infinity");
        assert_eq!(encode_fraction(f64::NEG_INFINITY, 36), "-Infinity");
    }

    #[test]
    fn test_base36_uppercases() {
        assert_eq!(base36(1_709_596_800_000), "LTDLSLC0");
        assert_eq!(base36(0), "0");
    }

    #[test]
    fn test_random_segment_truncates_without_padding() {
        assert_eq!(random_segment(141.0 / 256.0, 4), "JTT9");
        assert_eq!(random_segment(141.0 / 256.0, 2), "JT");
        assert_eq!(random_segment(141.0 / 256.0, 1), "J");
        assert_eq!(random_segment(0.1, 4), "3LLL");
        assert_eq!(random_segment(0.5, 4), "I");
        assert_eq!(random_segment(200.0 / 256.0, 4), "S4I");
        assert_eq!(random_segment(0.0, 4), "");
    }

    #[test]
    #[should_panic(expected = "radix must be within 2..=36")]
    fn test_rejects_out_of_range_radix() {
        encode_integer(10, 37);
    }
}
