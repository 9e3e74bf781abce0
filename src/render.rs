//! Output renderings of an encoded barcode.

use std::fmt::{self, Write};

use num_bigint::BigUint;
use num_traits::Zero;

use crate::barcode::IntelligentMailBarcode;
use crate::table::BAR_COUNT;

impl IntelligentMailBarcode {
    /// Packs the 65 bar values into one integer, two bits per bar, most
    /// significant bar first.
    pub fn to_integer(&self) -> BigUint {
        self.bars()
            .iter()
            .fold(BigUint::zero(), |acc, bar| (acc << 2usize) + bar.value())
    }

    /// Renders the barcode as three fixed-width lines: the ascender row,
    /// the tracker row, and the descender row.
    pub fn draw(&self) -> String {
        let mut ascenders = String::with_capacity(BAR_COUNT);
        let mut descenders = String::with_capacity(BAR_COUNT);
        for bar in self.bars() {
            ascenders.push(if bar.has_ascender() { '|' } else { ' ' });
            descenders.push(if bar.has_descender() { '|' } else { ' ' });
        }
        format!("{}\n{}\n{}", ascenders, "|".repeat(BAR_COUNT), descenders)
    }
}

/// One `TDAF` letter per bar.
impl fmt::Display for IntelligentMailBarcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bar in self.bars() {
            f.write_char(bar.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::routing::RoutingCode;

    use super::*;

    fn sample() -> IntelligentMailBarcode {
        let routing: RoutingCode = "12345-6789-12".parse().unwrap();
        IntelligentMailBarcode::new(0, 700, 123_456, 123_456_789, routing).unwrap()
    }

    #[test]
    fn test_display_length_and_alphabet() {
        let rendered = sample().to_string();
        assert_eq!(rendered.len(), BAR_COUNT);
        assert!(rendered.chars().all(|c| "TDAF".contains(c)));
    }

    #[test]
    fn test_to_integer_matches_string() {
        let barcode = sample();
        let mut expected = BigUint::zero();
        for c in barcode.to_string().chars() {
            let value = "TDAF".find(c).unwrap();
            expected = (expected << 2usize) + value;
        }
        assert_eq!(barcode.to_integer(), expected);
    }

    #[test]
    fn test_draw_rows_agree_with_bars() {
        let barcode = sample();
        let drawing = barcode.draw();
        let rows: Vec<&str> = drawing.lines().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], "|".repeat(BAR_COUNT));
        for (index, bar) in barcode.bars().iter().enumerate() {
            let ascender = rows[0].as_bytes()[index] == b'|';
            let descender = rows[2].as_bytes()[index] == b'|';
            assert_eq!(ascender, bar.has_ascender());
            assert_eq!(descender, bar.has_descender());
        }
    }
}
