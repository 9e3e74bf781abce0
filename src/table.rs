use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use crate::codewords::CODEWORD_COUNT;

/// Number of entries in the character table.
pub const CHARACTER_COUNT: usize = 1365;
/// Number of bar positions in the symbol.
pub const BAR_COUNT: usize = 65;
/// Width of one barcode character in bits.
pub const CHARACTER_BITS: usize = 13;

/// Bit sources for one bar position, each a `(character index, bit index)`
/// pair: one for the descender half, one for the ascender half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BarSources {
    pub descender: (usize, u8),
    pub ascender: (usize, u8),
}

/// The read-only symbology data the encoder consumes: the 1365 thirteen-bit
/// characters in USPS combinatorial order plus the 65-entry bar map.
///
/// A table is parsed from TOML, validated structurally, and never mutated
/// afterward; one instance may serve any number of concurrent encodes.
#[derive(Debug, Clone, Deserialize)]
pub struct SymbologyTable {
    characters: Vec<u16>,
    bars: Vec<BarSources>,
}

impl SymbologyTable {
    /// Parses and validates a table from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Parse`] for malformed TOML and
    /// [`TableError::Shape`] when the data fails a structural check: wrong
    /// array lengths, characters wider than 13 bits, bar sources out of
    /// range, or a character bit feeding more than one half-bar.
    pub fn from_toml(content: &str) -> Result<Self, TableError> {
        let table: SymbologyTable = toml::from_str(content).map_err(TableError::Parse)?;
        table.validate()?;
        Ok(table)
    }

    /// Loads a table from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, TableError> {
        let content = std::fs::read_to_string(path).map_err(TableError::Io)?;
        Self::from_toml(&content)
    }

    /// The table bundled with the crate, parsed once per process.
    pub fn bundled() -> &'static SymbologyTable {
        static TABLE: OnceLock<SymbologyTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            SymbologyTable::from_toml(include_str!("../tables/usps-4cb.toml"))
                .expect("bundled symbology table is malformed")
        })
    }

    /// The thirteen-bit character at `index`, if the index is in range.
    pub fn character(&self, index: usize) -> Option<u16> {
        self.characters.get(index).copied()
    }

    /// The bar map, one entry per bar position.
    pub fn bars(&self) -> &[BarSources] {
        &self.bars
    }

    fn validate(&self) -> Result<(), TableError> {
        if self.characters.len() != CHARACTER_COUNT {
            return Err(TableError::Shape(format!(
                "expected {} characters, got {}",
                CHARACTER_COUNT,
                self.characters.len()
            )));
        }
        if let Some(&value) = self
            .characters
            .iter()
            .find(|&&value| usize::from(value) >= 1 << CHARACTER_BITS)
        {
            return Err(TableError::Shape(format!(
                "character {:#06x} is wider than {} bits",
                value, CHARACTER_BITS
            )));
        }
        if self.bars.len() != BAR_COUNT {
            return Err(TableError::Shape(format!(
                "expected {} bar entries, got {}",
                BAR_COUNT,
                self.bars.len()
            )));
        }
        let mut seen = [false; CODEWORD_COUNT * CHARACTER_BITS];
        for sources in &self.bars {
            for (character, bit) in [sources.descender, sources.ascender] {
                if character >= CODEWORD_COUNT || usize::from(bit) >= CHARACTER_BITS {
                    return Err(TableError::Shape(format!(
                        "bar source ({}, {}) is out of range",
                        character, bit
                    )));
                }
                let slot = character * CHARACTER_BITS + usize::from(bit);
                if seen[slot] {
                    return Err(TableError::Shape(format!(
                        "character bit ({}, {}) feeds more than one half-bar",
                        character, bit
                    )));
                }
                seen[slot] = true;
            }
        }
        Ok(())
    }
}

/// Errors raised while loading or validating a symbology table.
#[derive(Debug)]
pub enum TableError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Shape(String),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Io(err) => write!(f, "failed to read symbology table: {}", err),
            TableError::Parse(err) => write!(f, "failed to parse symbology table: {}", err),
            TableError::Shape(detail) => write!(f, "malformed symbology table: {}", detail),
        }
    }
}

impl std::error::Error for TableError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_table_loads() {
        let table = SymbologyTable::bundled();
        assert_eq!(table.bars().len(), BAR_COUNT);
        // First and last entries of the combinatorial ordering: the lowest
        // five-of-thirteen pair and the tail of the two-of-thirteen block.
        assert_eq!(table.character(0), Some(31));
        assert_eq!(table.character(1), Some(7936));
        assert_eq!(table.character(1287), Some(3));
        assert_eq!(table.character(1364), Some(160));
        assert_eq!(table.character(CHARACTER_COUNT), None);
    }

    #[test]
    fn test_bundled_characters_have_expected_populations() {
        let table = SymbologyTable::bundled();
        for index in 0..CHARACTER_COUNT {
            let ones = table.character(index).unwrap().count_ones();
            if index < 1287 {
                assert_eq!(ones, 5, "character {}", index);
            } else {
                assert_eq!(ones, 2, "character {}", index);
            }
        }
    }

    #[test]
    fn test_rejects_wrong_character_count() {
        let err = SymbologyTable::from_toml("characters = [1, 2, 3]\nbars = []").unwrap_err();
        assert!(matches!(err, TableError::Shape(_)));
    }

    #[test]
    fn test_rejects_wide_character() {
        let mut characters = vec![0u16; CHARACTER_COUNT];
        characters[7] = 0x2000;
        let toml = format!(
            "characters = {:?}\nbars = []",
            characters
        );
        let err = SymbologyTable::from_toml(&toml).unwrap_err();
        assert!(matches!(err, TableError::Shape(_)));
    }

    #[test]
    fn test_rejects_duplicate_bar_source() {
        let characters = format!("{:?}", vec![0u16; CHARACTER_COUNT]);
        let toml = format!(
            "characters = {}\nbars = [{}]",
            characters,
            "{ descender = [0, 0], ascender = [0, 0] },".repeat(BAR_COUNT)
        );
        let err = SymbologyTable::from_toml(&toml).unwrap_err();
        match err {
            TableError::Shape(detail) => assert!(detail.contains("more than one half-bar")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unparseable_toml() {
        assert!(matches!(
            SymbologyTable::from_toml("characters = ["),
            Err(TableError::Parse(_))
        ));
    }
}
