use num_bigint::BigUint;

use crate::codewords::{self, CODEWORD_COUNT};
use crate::crc;
use crate::error::EncodeError;
use crate::payload;
use crate::routing::RoutingCode;
use crate::symbols::{self, Bar};
use crate::table::{BAR_COUNT, SymbologyTable};
use crate::tracking;

/// An encoded Intelligent Mail barcode.
///
/// Construction validates every input, then runs the full derivation chain
/// in dependency order (tracking code, binary data, frame check sequence,
/// codewords, characters, bars) and caches the results. Instances are
/// immutable; changing any input means encoding a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntelligentMailBarcode {
    barcode_id: u8,
    service_type: u16,
    mailer_id: u32,
    serial_number: u32,
    routing_code: RoutingCode,
    tracking_code: BigUint,
    binary_data: BigUint,
    frame_check_sequence: u16,
    codewords: [u16; CODEWORD_COUNT],
    characters: [u16; CODEWORD_COUNT],
    bars: [Bar; BAR_COUNT],
}

impl IntelligentMailBarcode {
    /// Encodes a barcode using the bundled symbology table.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidField`] when a tracking field is
    /// outside its documented range (see [`crate::RoutingCode`] for the
    /// routing-side checks), and [`EncodeError::LookupOutOfRange`] if a
    /// codeword escapes the character table.
    pub fn new(
        barcode_id: u8,
        service_type: u16,
        mailer_id: u32,
        serial_number: u32,
        routing_code: RoutingCode,
    ) -> Result<Self, EncodeError> {
        Self::with_table(
            barcode_id,
            service_type,
            mailer_id,
            serial_number,
            routing_code,
            SymbologyTable::bundled(),
        )
    }

    /// Encodes a barcode against a caller-supplied symbology table.
    pub fn with_table(
        barcode_id: u8,
        service_type: u16,
        mailer_id: u32,
        serial_number: u32,
        routing_code: RoutingCode,
        table: &SymbologyTable,
    ) -> Result<Self, EncodeError> {
        let tracking_code = tracking::compose(barcode_id, service_type, mailer_id, serial_number)?;
        let binary_data = payload::binary_data(&routing_code, barcode_id, &tracking_code);
        let frame_check_sequence = crc::frame_check_sequence(&payload::frame(&binary_data));
        let codewords = codewords::decompose(&binary_data, frame_check_sequence);
        let characters = symbols::characters(&codewords, frame_check_sequence, table)?;
        let bars = symbols::bars(&characters, table);
        Ok(IntelligentMailBarcode {
            barcode_id,
            service_type,
            mailer_id,
            serial_number,
            routing_code,
            tracking_code,
            binary_data,
            frame_check_sequence,
            codewords,
            characters,
            bars,
        })
    }

    pub fn barcode_id(&self) -> u8 {
        self.barcode_id
    }

    pub fn service_type(&self) -> u16 {
        self.service_type
    }

    pub fn mailer_id(&self) -> u32 {
        self.mailer_id
    }

    pub fn serial_number(&self) -> u32 {
        self.serial_number
    }

    pub fn routing_code(&self) -> &RoutingCode {
        &self.routing_code
    }

    /// The composed decimal tracking value.
    pub fn tracking_code(&self) -> &BigUint {
        &self.tracking_code
    }

    /// The 102-bit value the CRC and decomposition consume.
    pub fn binary_data(&self) -> &BigUint {
        &self.binary_data
    }

    /// The 11-bit CRC over the binary data.
    pub fn frame_check_sequence(&self) -> u16 {
        self.frame_check_sequence
    }

    /// The ten codewords after orientation and FCS adjustments.
    pub fn codewords(&self) -> &[u16; CODEWORD_COUNT] {
        &self.codewords
    }

    /// The ten thirteen-bit characters after FCS negation.
    pub fn characters(&self) -> &[u16; CODEWORD_COUNT] {
        &self.characters
    }

    /// The 65 bars of the finished symbol.
    pub fn bars(&self) -> &[Bar; BAR_COUNT] {
        &self.bars
    }
}
