use num_bigint::BigUint;

use crate::error::EncodeError;

/// Composes the decimal tracking value from the four tracking fields,
/// validating each against its documented range.
///
/// Mailer ids come in two widths. A six-digit id (below 899 999) pairs with
/// a nine-digit serial number; a nine-digit id (900 000 000 up to but not
/// including 999 999 999) pairs with a six-digit serial. Together with the
/// two barcode-id digits folded in by the payload, the fields always total
/// twenty digits.
pub(crate) fn compose(
    barcode_id: u8,
    service_type: u16,
    mailer_id: u32,
    serial_number: u32,
) -> Result<BigUint, EncodeError> {
    if barcode_id > 94 || barcode_id % 10 > 4 {
        return Err(EncodeError::InvalidField {
            field: "barcode id",
            value: barcode_id.into(),
            expected: "00-94 with second digit 0-4",
        });
    }
    if service_type > 999 {
        return Err(EncodeError::InvalidField {
            field: "service type",
            value: service_type.into(),
            expected: "000-999",
        });
    }
    let tracking = BigUint::from(service_type);
    if mailer_id < 899_999 {
        if serial_number > 999_999_999 {
            return Err(EncodeError::InvalidField {
                field: "serial number",
                value: serial_number.into(),
                expected: "000000000-999999999 for a six-digit mailer id",
            });
        }
        Ok((tracking * 1_000_000u32 + mailer_id) * 1_000_000_000u32 + serial_number)
    } else if (900_000_000..999_999_999).contains(&mailer_id) {
        if serial_number > 999_999 {
            return Err(EncodeError::InvalidField {
                field: "serial number",
                value: serial_number.into(),
                expected: "000000-999999 for a nine-digit mailer id",
            });
        }
        Ok((tracking * 1_000_000_000u32 + mailer_id) * 1_000_000u32 + serial_number)
    } else {
        Err(EncodeError::InvalidField {
            field: "mailer id",
            value: mailer_id.into(),
            expected: "000000-899998 or 900000000-999999998",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_digit_mailer_layout() {
        let tracking = compose(0, 700, 123_456, 123_456_789).unwrap();
        assert_eq!(tracking, BigUint::from(700_123_456_123_456_789u64));
    }

    #[test]
    fn test_nine_digit_mailer_layout() {
        let tracking = compose(0, 4, 900_000_000, 999_999).unwrap();
        assert_eq!(tracking, BigUint::from(4_900_000_000_999_999u64));
    }

    #[test]
    fn test_six_digit_regime_boundaries() {
        assert!(compose(0, 0, 899_998, 999_999_999).is_ok());
        assert!(matches!(
            compose(0, 0, 899_998, 1_000_000_000),
            Err(EncodeError::InvalidField {
                field: "serial number",
                ..
            })
        ));
    }

    #[test]
    fn test_nine_digit_regime_boundaries() {
        assert!(compose(0, 0, 999_999_998, 999_999).is_ok());
        assert!(matches!(
            compose(0, 0, 900_000_000, 1_000_000),
            Err(EncodeError::InvalidField {
                field: "serial number",
                ..
            })
        ));
    }

    #[test]
    fn test_mailer_id_gap_is_rejected() {
        // Both regime ranges are half-open, so these edges fall in the gap.
        for mailer_id in [899_999, 899_999_999, 999_999_999] {
            assert!(matches!(
                compose(0, 0, mailer_id, 0),
                Err(EncodeError::InvalidField {
                    field: "mailer id",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_barcode_id_validation() {
        assert!(compose(94, 0, 0, 0).is_ok());
        assert!(compose(95, 0, 0, 0).is_err());
        // 19 is inside 0-94 but its second digit exceeds 4
        assert!(compose(19, 0, 0, 0).is_err());
    }

    #[test]
    fn test_service_type_validation() {
        assert!(compose(0, 999, 0, 0).is_ok());
        assert!(matches!(
            compose(0, 1_000, 0, 0),
            Err(EncodeError::InvalidField {
                field: "service type",
                ..
            })
        ));
    }
}
