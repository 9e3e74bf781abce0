use std::fmt;
use std::str::FromStr;

use crate::error::EncodeError;

/// A delivery-point routing code: ZIP, ZIP+4, or ZIP+4 plus a two-digit
/// delivery point.
///
/// The fields form a prefix chain: `plus4` may only be present when `zip`
/// is, and `delivery_point` only when `plus4` is. Values are immutable after
/// construction; the encoder consumes them through [`RoutingCode::to_integer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoutingCode {
    zip: Option<u32>,
    plus4: Option<u16>,
    delivery_point: Option<u8>,
}

impl RoutingCode {
    /// Creates a routing code from up to three fields; any suffix may be
    /// omitted.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidField`] if a field is out of range or
    /// present without its prefix (a plus4 without a ZIP, or a delivery
    /// point without a plus4).
    pub fn new(
        zip: Option<u32>,
        plus4: Option<u16>,
        delivery_point: Option<u8>,
    ) -> Result<Self, EncodeError> {
        if let Some(zip) = zip {
            if zip > 99_999 {
                return Err(EncodeError::InvalidField {
                    field: "zip",
                    value: zip.into(),
                    expected: "00000-99999",
                });
            }
        }
        if let Some(plus4) = plus4 {
            if zip.is_none() {
                return Err(EncodeError::InvalidField {
                    field: "plus4",
                    value: plus4.into(),
                    expected: "preceded by a zip",
                });
            }
            if plus4 > 9_999 {
                return Err(EncodeError::InvalidField {
                    field: "plus4",
                    value: plus4.into(),
                    expected: "0000-9999",
                });
            }
        }
        if let Some(delivery_point) = delivery_point {
            if plus4.is_none() {
                return Err(EncodeError::InvalidField {
                    field: "delivery point",
                    value: delivery_point.into(),
                    expected: "preceded by a plus4",
                });
            }
            if delivery_point > 99 {
                return Err(EncodeError::InvalidField {
                    field: "delivery point",
                    value: delivery_point.into(),
                    expected: "00-99",
                });
            }
        }
        Ok(RoutingCode {
            zip,
            plus4,
            delivery_point,
        })
    }

    pub fn zip(&self) -> Option<u32> {
        self.zip
    }

    pub fn plus4(&self) -> Option<u16> {
        self.plus4
    }

    pub fn delivery_point(&self) -> Option<u8> {
        self.delivery_point
    }

    /// The normalized routing value consumed by the payload.
    ///
    /// The USPS reduction collapses the three optionality cases into one
    /// integer space: each wider case's range lies strictly above the
    /// narrower case's.
    pub fn to_integer(&self) -> u64 {
        match (self.zip, self.plus4, self.delivery_point) {
            (Some(zip), Some(plus4), Some(delivery_point)) => {
                u64::from(zip) * 1_000_000
                    + u64::from(plus4) * 100
                    + u64::from(delivery_point)
                    + 1_000_100_001
            }
            (Some(zip), Some(plus4), None) => u64::from(zip) * 10_000 + u64::from(plus4) + 100_001,
            (Some(zip), None, None) => u64::from(zip) + 1,
            _ => 0,
        }
    }
}

impl FromStr for RoutingCode {
    type Err = EncodeError;

    /// Parses a routing code from a digit string, ignoring punctuation.
    ///
    /// After stripping non-digits the string must be exactly 5, 9, or 11
    /// digits long; anything else is [`EncodeError::InvalidRoutingLength`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: Vec<u8> = s
            .bytes()
            .filter(|b| b.is_ascii_digit())
            .map(|b| b - b'0')
            .collect();
        let (zip, plus4, delivery_point) = match digits.len() {
            5 => (digits_value(&digits[..5]) as u32, None, None),
            9 => (
                digits_value(&digits[..5]) as u32,
                Some(digits_value(&digits[5..9]) as u16),
                None,
            ),
            11 => (
                digits_value(&digits[..5]) as u32,
                Some(digits_value(&digits[5..9]) as u16),
                Some(digits_value(&digits[9..11]) as u8),
            ),
            length => return Err(EncodeError::InvalidRoutingLength { length }),
        };
        Ok(RoutingCode {
            zip: Some(zip),
            plus4,
            delivery_point,
        })
    }
}

impl fmt::Display for RoutingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(zip) = self.zip {
            write!(f, "{:05}", zip)?;
        }
        if let Some(plus4) = self.plus4 {
            write!(f, "{:04}", plus4)?;
        }
        if let Some(delivery_point) = self.delivery_point {
            write!(f, "{:02}", delivery_point)?;
        }
        Ok(())
    }
}

fn digits_value(digits: &[u8]) -> u64 {
    digits.iter().fold(0, |acc, &d| acc * 10 + u64::from(d))
}
