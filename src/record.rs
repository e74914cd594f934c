//! MARC record structures.
//!
//! This module provides the record types the fixed-field decoders consume:
//! - [`Record`] — leader plus control and data fields
//! - [`Field`] — variable data fields (010+)
//! - [`Subfield`] — named data elements within fields
//!
//! Control fields are stored per tag as a list of occurrences: 006 and 007
//! legitimately repeat (one 006 per additional material characteristic,
//! one 007 per physical carrier). Fields are stored in insertion order
//! using `IndexMap`, preserving the order in which they appear in the
//! source record.

use crate::leader::{Leader, RecordFormat};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A MARC record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Record leader (24 characters).
    pub leader: Leader,
    /// Control fields (001-009) - tag -> occurrences, in insertion order.
    pub control_fields: IndexMap<String, Vec<String>>,
    /// Data fields (010+) - tag -> fields, in insertion order.
    pub fields: IndexMap<String, Vec<Field>>,
}

/// A data field in a MARC record (fields 010 and higher).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field tag (3 digits).
    pub tag: String,
    /// First indicator.
    pub indicator1: char,
    /// Second indicator.
    pub indicator2: char,
    /// Subfields (`SmallVec` avoids allocation for typical fields with 4 or fewer subfields).
    pub subfields: SmallVec<[Subfield; 4]>,
}

/// A subfield within a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subfield {
    /// Subfield code (single character).
    pub code: char,
    /// Subfield value.
    pub value: String,
}

impl Record {
    /// Create a new MARC record with the given leader.
    #[must_use]
    pub fn new(leader: Leader) -> Self {
        Record {
            leader,
            control_fields: IndexMap::new(),
            fields: IndexMap::new(),
        }
    }

    /// The record's format, derived from the leader.
    #[must_use]
    pub fn record_format(&self) -> RecordFormat {
        self.leader.record_format()
    }

    /// Add a control field occurrence (001-009).
    pub fn add_control_field(&mut self, tag: String, value: String) {
        self.control_fields.entry(tag).or_default().push(value);
    }

    /// Add a control field occurrence using string slices.
    pub fn add_control_field_str(&mut self, tag: &str, value: &str) {
        self.add_control_field(tag.to_string(), value.to_string());
    }

    /// First occurrence of a control field, if present.
    #[must_use]
    pub fn control_field(&self, tag: &str) -> Option<&str> {
        self.control_fields
            .get(tag)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    /// All occurrences of a control field, in record order.
    #[must_use]
    pub fn control_fields(&self, tag: &str) -> &[String] {
        self.control_fields.get(tag).map_or(&[], Vec::as_slice)
    }

    /// Add a data field.
    pub fn add_field(&mut self, field: Field) {
        self.fields.entry(field.tag.clone()).or_default().push(field);
    }

    /// All data fields with the given tag, in record order.
    #[must_use]
    pub fn fields_by_tag(&self, tag: &str) -> &[Field] {
        self.fields.get(tag).map_or(&[], Vec::as_slice)
    }
}

impl Field {
    /// Create a new data field with the given tag and indicators.
    #[must_use]
    pub fn new(tag: String, indicator1: char, indicator2: char) -> Self {
        Field {
            tag,
            indicator1,
            indicator2,
            subfields: SmallVec::new(),
        }
    }

    /// Append a subfield.
    pub fn add_subfield(&mut self, code: char, value: String) {
        self.subfields.push(Subfield { code, value });
    }

    /// First subfield value with the given code, if present.
    #[must_use]
    pub fn get_subfield(&self, code: char) -> Option<&str> {
        self.subfields
            .iter()
            .find(|sf| sf.code == code)
            .map(|sf| sf.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        Record::new(Leader::new("00925naa a2200229 c 4500"))
    }

    #[test]
    fn test_control_field_occurrences() {
        let mut rec = sample_record();
        rec.add_control_field_str("001", "ocm12345678");
        rec.add_control_field_str("007", "ta");
        rec.add_control_field_str("007", "cr");

        assert_eq!(rec.control_field("001"), Some("ocm12345678"));
        assert_eq!(rec.control_fields("007"), &["ta", "cr"]);
        assert!(rec.control_fields("008").is_empty());
        assert_eq!(rec.control_field("008"), None);
    }

    #[test]
    fn test_data_field_subfields() {
        let mut rec = sample_record();
        let mut field = Field::new("245".to_string(), '1', '0');
        field.add_subfield('a', "A title".to_string());
        field.add_subfield('c', "An author".to_string());
        rec.add_field(field);

        let fields = rec.fields_by_tag("245");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].get_subfield('a'), Some("A title"));
        assert_eq!(fields[0].get_subfield('b'), None);
    }

    #[test]
    fn test_record_format_delegates_to_leader() {
        assert_eq!(sample_record().record_format(), RecordFormat::Bibliography);
    }
}
