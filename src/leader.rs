//! MARC record leader and record format detection.
//!
//! The MARC leader is a 24-byte fixed-length field at the start of every
//! MARC record. Its raw text is kept as-is: the detailed decoding in
//! [`crate::leader_details`] works on character positions, and re-deriving
//! the text from a parsed struct would lose malformed input that the
//! decoders are expected to tolerate.
//!
//! Position 6 (type of record) determines the record format. Each of the
//! five MARC 21 formats reserves its own set of type codes, so the byte
//! doubles as a format discriminator:
//!
//! - `z` — Authority
//! - `w` — Classification
//! - `q` — Community Information
//! - `u`, `v`, `x`, `y` — Holdings
//! - `a`..`t` (bibliographic type letters) — Bibliography

use crate::material::MaterialType;
use serde::{Deserialize, Serialize};

/// The top-level MARC 21 record category.
///
/// Determines which leader layout and which 008 layout applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordFormat {
    /// MARC 21 Format for Bibliographic Data.
    Bibliography,
    /// MARC 21 Format for Holdings Data.
    Holdings,
    /// MARC 21 Format for Authority Data.
    Authority,
    /// MARC 21 Format for Classification Data.
    Classification,
    /// MARC 21 Format for Community Information.
    Community,
    /// Unrecognized type-of-record code. Decoders yield empty sets.
    Unknown,
}

/// MARC Leader - the raw 24-character field at the start of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
    /// Raw leader text. Normally exactly 24 characters, but shorter or
    /// malformed text is accepted and decoded best-effort.
    pub text: String,
}

impl Leader {
    /// Wrap raw leader text.
    pub fn new(text: impl Into<String>) -> Self {
        Leader { text: text.into() }
    }

    fn byte_at(&self, i: usize) -> Option<char> {
        self.text.as_bytes().get(i).map(|b| *b as char)
    }

    /// Record length from positions 0-4, when numeric.
    #[must_use]
    pub fn record_length(&self) -> Option<usize> {
        self.text.get(0..5).and_then(|s| s.parse().ok())
    }

    /// Record status code at position 5.
    #[must_use]
    pub fn record_status(&self) -> Option<char> {
        self.byte_at(5)
    }

    /// Type-of-record code at position 6.
    #[must_use]
    pub fn type_of_record(&self) -> Option<char> {
        self.byte_at(6)
    }

    /// Bibliographic level at position 7 (Bibliography format only).
    #[must_use]
    pub fn bibliographic_level(&self) -> Option<char> {
        self.byte_at(7)
    }

    /// Base address of data from positions 12-16, when numeric.
    #[must_use]
    pub fn base_address(&self) -> Option<usize> {
        self.text.get(12..17).and_then(|s| s.parse().ok())
    }

    /// Determine the record format from the type-of-record code.
    #[must_use]
    pub fn record_format(&self) -> RecordFormat {
        match self.type_of_record() {
            Some('z') => RecordFormat::Authority,
            Some('w') => RecordFormat::Classification,
            Some('q') => RecordFormat::Community,
            Some('u' | 'v' | 'x' | 'y') => RecordFormat::Holdings,
            Some(
                'a' | 'c' | 'd' | 'e' | 'f' | 'g' | 'i' | 'j' | 'k' | 'm' | 'o' | 'p' | 'r' | 't',
            ) => RecordFormat::Bibliography,
            _ => RecordFormat::Unknown,
        }
    }

    /// Resolve the material type governing 008 positions 18-34.
    ///
    /// Defined for Bibliography records only; the other formats have no
    /// material-specific 008 segment in this decoder.
    #[must_use]
    pub fn material_type(&self) -> Option<MaterialType> {
        if self.record_format() != RecordFormat::Bibliography {
            return None;
        }
        MaterialType::from_leader(self.type_of_record()?, self.bibliographic_level()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_format_detection() {
        assert_eq!(
            Leader::new("00925naa a2200229 c 4500").record_format(),
            RecordFormat::Bibliography
        );
        assert_eq!(
            Leader::new("00925nz  a2200229 c 4500").record_format(),
            RecordFormat::Authority
        );
        assert_eq!(
            Leader::new("00925nw  a2200229 c 4500").record_format(),
            RecordFormat::Classification
        );
        assert_eq!(
            Leader::new("00925nq  a2200229 c 4500").record_format(),
            RecordFormat::Community
        );
        assert_eq!(
            Leader::new("00925ny  a2200229 c 4500").record_format(),
            RecordFormat::Holdings
        );
        assert_eq!(
            Leader::new("00925n8  a2200229 c 4500").record_format(),
            RecordFormat::Unknown
        );
    }

    #[test]
    fn test_record_format_short_leader() {
        assert_eq!(Leader::new("0092").record_format(), RecordFormat::Unknown);
        assert_eq!(Leader::new("").record_format(), RecordFormat::Unknown);
    }

    #[test]
    fn test_numeric_accessors() {
        let ldr = Leader::new("00925naa a2200229 c 4500");
        assert_eq!(ldr.record_length(), Some(925));
        assert_eq!(ldr.base_address(), Some(229));
        assert_eq!(ldr.record_status(), Some('n'));
    }

    #[test]
    fn test_numeric_accessors_garbage() {
        let ldr = Leader::new("xxxxxnaa a22yyyyy c 4500");
        assert_eq!(ldr.record_length(), None);
        assert_eq!(ldr.base_address(), None);
    }

    #[test]
    fn test_material_type_from_leader() {
        let ldr = Leader::new("00925naa a2200229 c 4500");
        assert_eq!(ldr.material_type(), Some(MaterialType::Book));

        let serial = Leader::new("00925nas a2200229 c 4500");
        assert_eq!(
            serial.material_type(),
            Some(MaterialType::ContinuingResource)
        );

        let authority = Leader::new("00925nz  a2200229 c 4500");
        assert_eq!(authority.material_type(), None);
    }
}
