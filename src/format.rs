//! Fixed-width numeric renderings for the stage trace.
//!
//! The encoder deals in values with documented bit widths; these helpers
//! print them zero-padded so stage dumps line up column for column. They
//! operate on ASCII digit strings only.

use std::fmt;

use num_bigint::BigUint;

/// Binary rendering, zero-padded on the left to at least `min_digits`.
pub fn to_bin<T: fmt::Binary>(value: &T, min_digits: usize) -> String {
    pad(format!("{:b}", value), min_digits)
}

/// Hexadecimal rendering, zero-padded on the left to at least `min_digits`.
pub fn to_hex<T: fmt::LowerHex>(value: &T, min_digits: usize) -> String {
    pad(format!("{:x}", value), min_digits)
}

/// Quaternary rendering of an arbitrary-width value: one digit per bar when
/// applied to the packed barcode integer.
pub fn to_quat(value: &BigUint, min_digits: usize) -> String {
    pad(value.to_str_radix(4), min_digits)
}

/// Splits `digits` into `group_size`-character groups joined by
/// `separator`; a short group, if any, comes first.
pub fn group(digits: &str, group_size: usize, separator: &str) -> String {
    if group_size == 0 || digits.is_empty() {
        return digits.to_string();
    }
    let remainder = digits.len() % group_size;
    let mut groups = Vec::with_capacity(digits.len() / group_size + 1);
    if remainder > 0 {
        groups.push(&digits[..remainder]);
    }
    let mut start = remainder;
    while start < digits.len() {
        groups.push(&digits[start..start + group_size]);
        start += group_size;
    }
    groups.join(separator)
}

fn pad(digits: String, min_digits: usize) -> String {
    if digits.len() >= min_digits {
        digits
    } else {
        let mut padded = "0".repeat(min_digits - digits.len());
        padded.push_str(&digits);
        padded
    }
}
