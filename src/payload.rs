use num_bigint::BigUint;

use crate::routing::RoutingCode;

/// Width of the CRC input frame. The 102-bit payload rides in a 104-bit
/// frame, so the leading byte never fills past its low six bits.
pub(crate) const FRAME_BYTES: usize = 13;

/// Folds the routing integer and the two barcode-id digits ahead of the
/// tracking code into the 102-bit binary data value.
pub(crate) fn binary_data(
    routing_code: &RoutingCode,
    barcode_id: u8,
    tracking_code: &BigUint,
) -> BigUint {
    let prefix = (routing_code.to_integer() * 10 + u64::from(barcode_id / 10)) * 5
        + u64::from(barcode_id % 10);
    BigUint::from(prefix) * 1_000_000_000_000_000_000u64 + tracking_code
}

/// Renders the binary data as the big-endian frame the CRC runs over.
pub(crate) fn frame(binary_data: &BigUint) -> [u8; FRAME_BYTES] {
    let bytes = binary_data.to_bytes_be();
    let mut frame = [0u8; FRAME_BYTES];
    frame[FRAME_BYTES - bytes.len()..].copy_from_slice(&bytes);
    frame
}
