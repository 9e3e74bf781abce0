//! USPS Intelligent Mail barcode encoding.
//!
//! Encodes a routing code (ZIP, ZIP+4, or ZIP+4 plus a delivery point) and
//! the four tracking fields (barcode id, service type, mailer id, serial
//! number) into the 65-bar four-state Intelligent Mail symbol.
//!
//! The pipeline runs once at construction: routing normalization, tracking
//! composition, 102-bit payload assembly, CRC-11, mixed-radix codeword
//! decomposition, character lookup, bar mapping. The resulting value is
//! immutable, and the symbology lookup table it consumes is read-only, so
//! encoding concurrently from many threads is safe.
//!
//! # Example
//!
//! ```
//! use onecode::{IntelligentMailBarcode, RoutingCode};
//!
//! let routing: RoutingCode = "12345-6789-12".parse().unwrap();
//! let barcode = IntelligentMailBarcode::new(0, 700, 123456, 123456789, routing).unwrap();
//! assert_eq!(barcode.to_string().len(), 65);
//! ```

mod barcode;
mod codewords;
mod crc;
mod error;
pub mod format;
mod payload;
mod render;
mod routing;
mod symbols;
mod table;
mod tracking;

pub use barcode::IntelligentMailBarcode;
pub use error::EncodeError;
pub use routing::RoutingCode;
pub use symbols::Bar;
pub use table::{BAR_COUNT, BarSources, CHARACTER_COUNT, SymbologyTable, TableError};
