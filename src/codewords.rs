use num_bigint::BigUint;
use num_integer::Integer;

use crate::crc;

/// Number of codewords (and characters) in the symbol.
pub(crate) const CODEWORD_COUNT: usize = 10;

/// Radix of codewords 1 through 8.
const RADIX: u32 = 1365;
/// Codeword 9 carries the orientation bit, so it draws from a narrower
/// symbol range.
const TRAILING_RADIX: u32 = 636;
/// Offset added to codeword 0 when the FCS high bit is set.
const FCS_OFFSET: u16 = 659;

/// Splits the binary data into ten codewords by mixed-radix division,
/// least significant first: radix 636 for codeword 9, radix 1365 for
/// codewords 8 through 1, and the surviving quotient as codeword 0. The
/// orientation and FCS adjustments shift codewords 9 and 0 into ranges
/// disjoint from the raw decomposition's.
pub(crate) fn decompose(
    binary_data: &BigUint,
    frame_check_sequence: u16,
) -> [u16; CODEWORD_COUNT] {
    let mut codewords = [0u16; CODEWORD_COUNT];

    let (mut data, remainder) = binary_data.div_rem(&BigUint::from(TRAILING_RADIX));
    codewords[9] = low_u16(&remainder);
    let radix = BigUint::from(RADIX);
    for slot in (1..=8).rev() {
        let (quotient, remainder) = data.div_rem(&radix);
        codewords[slot] = low_u16(&remainder);
        data = quotient;
    }
    codewords[0] = low_u16(&data);

    codewords[9] *= 2;
    if frame_check_sequence & crc::HIGH_BIT != 0 {
        codewords[0] += FCS_OFFSET;
    }

    codewords
}

fn low_u16(value: &BigUint) -> u16 {
    let digits = value.to_u64_digits();
    if digits.is_empty() { 0 } else { digits[0] as u16 }
}
