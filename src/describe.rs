//! Building blocks for fixed-position field decoding.
//!
//! Every fixed-position field (the Leader and control fields 006, 007,
//! and 008) is described as a set of labeled sub-ranges. This module
//! provides the byte-range extractor, the code-table lookup, and the
//! [`CodeValue`] descriptor those decoders produce.
//!
//! Descriptor sets are keyed by label strings of the form
//! `"(NN/WW) Description"` so that lexicographic label order equals
//! offset order. Callers choose their own display order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A static `code -> label` table for one fixed-field position.
///
/// Tables are compiled-in constant data and never mutate. They are small
/// (a few dozen entries at most), so lookup is a linear scan.
pub type CodeTable = &'static [(&'static str, &'static str)];

/// A decoded fixed-field sub-range.
///
/// Pairs the raw positional code with its resolved descriptive label and
/// the sub-range's offset and width within the source field. The label is
/// empty when the position is a free-form value (record length, dates) or
/// when the code has no table entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeValue {
    /// Raw code text extracted at the sub-range. Empty when the source
    /// field was too short to cover the sub-range.
    pub code: String,
    /// Resolved descriptive label, or empty.
    pub label: String,
    /// Sub-range offset within the field.
    pub offset: usize,
    /// Sub-range width in bytes.
    pub width: usize,
}

/// Decoded Leader contents, keyed by field label.
pub type LdrDesc = IndexMap<String, CodeValue>;

/// Decoded contents of one 007 occurrence, keyed by field label.
pub type Cf007Desc = IndexMap<String, CodeValue>;

/// Decoded 008 contents, keyed by field label.
///
/// Values are lists so that a label shared by several interpretations can
/// hold all of them; index 0 is the primary interpretation.
pub type Cf008Desc = IndexMap<String, Vec<CodeValue>>;

/// Decoded 006 contents. Multiple 006 occurrences merge into one map,
/// appending under labels their layouts share.
pub type Cf006Desc = Cf008Desc;

/// One sub-range of a fixed-field layout: where it sits, what it is
/// called, and which code table (if any) resolves its value.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LayoutEntry {
    pub offset: usize,
    pub width: usize,
    pub name: &'static str,
    pub table: Option<CodeTable>,
}

/// Extract `width` bytes at `offset` from a fixed-position field.
///
/// A width of 0 is treated as a single-byte extraction. When the text is
/// too short to cover the whole sub-range the result is empty rather than
/// partial; absence of data is represented as an empty string.
pub fn pluck_bytes(text: &str, offset: usize, width: usize) -> String {
    let width = width.max(1);
    text.get(offset..offset + width).unwrap_or("").to_string()
}

/// Extract a sub-range and resolve it through a code table.
///
/// An empty extraction means "no code present" and never consults the
/// table (a legitimate blank code is a single space, not an empty
/// string). Codes without a table entry keep an empty label; local and
/// experimental codes are common in real-world data.
pub fn code_lookup(table: CodeTable, text: &str, offset: usize, width: usize) -> (String, String) {
    let code = pluck_bytes(text, offset, width);
    let label = if code.is_empty() {
        String::new()
    } else {
        table
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, l)| (*l).to_string())
            .unwrap_or_default()
    };
    (code, label)
}

/// Build the `(label, CodeValue)` pair for a layout entry, with the
/// sub-range placed at `pos` in the source field.
///
/// `pos` normally equals `entry.offset`; 006 decoding rebases the shared
/// 008 material layouts to the field's own positions.
pub(crate) fn describe_at(text: &str, pos: usize, entry: &LayoutEntry) -> (String, CodeValue) {
    let label_key = format!("({:02}/{:02}) {}", pos, entry.width, entry.name);
    let (code, label) = match entry.table {
        Some(table) => code_lookup(table, text, pos, entry.width),
        None => (pluck_bytes(text, pos, entry.width), String::new()),
    };
    (
        label_key,
        CodeValue {
            code,
            label,
            offset: pos,
            width: entry.width.max(1),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const COLORS: CodeTable = &[("a", "One color"), ("c", "Multicolored")];

    #[test]
    fn test_pluck_bytes_in_range() {
        assert_eq!(pluck_bytes("00925naa", 0, 5), "00925");
        assert_eq!(pluck_bytes("00925naa", 5, 1), "n");
        assert_eq!(pluck_bytes("00925naa", 6, 2), "aa");
    }

    #[test]
    fn test_pluck_bytes_zero_width_is_single_byte() {
        assert_eq!(pluck_bytes("abc", 1, 0), "b");
    }

    #[test]
    fn test_pluck_bytes_short_input_is_empty() {
        assert_eq!(pluck_bytes("abc", 2, 2), "");
        assert_eq!(pluck_bytes("abc", 3, 1), "");
        assert_eq!(pluck_bytes("", 0, 1), "");
    }

    #[test]
    fn test_code_lookup_known_code() {
        let (code, label) = code_lookup(COLORS, "xcz", 1, 1);
        assert_eq!(code, "c");
        assert_eq!(label, "Multicolored");
    }

    #[test]
    fn test_code_lookup_unknown_code_keeps_code() {
        let (code, label) = code_lookup(COLORS, "xqz", 1, 1);
        assert_eq!(code, "q");
        assert_eq!(label, "");
    }

    #[test]
    fn test_code_lookup_space_is_a_code() {
        const CODING: CodeTable = &[(" ", "MARC-8")];
        let (code, label) = code_lookup(CODING, "x z", 1, 1);
        assert_eq!(code, " ");
        assert_eq!(label, "MARC-8");
    }

    #[test]
    fn test_code_lookup_missing_data_has_no_label() {
        let (code, label) = code_lookup(COLORS, "x", 5, 1);
        assert_eq!(code, "");
        assert_eq!(label, "");
    }

    #[test]
    fn test_describe_at_uncoded_entry() {
        let entry = LayoutEntry {
            offset: 0,
            width: 5,
            name: "Record length",
            table: None,
        };
        let (key, cv) = describe_at("00925naa", 0, &entry);
        assert_eq!(key, "(00/05) Record length");
        assert_eq!(cv.code, "00925");
        assert_eq!(cv.label, "");
        assert_eq!(cv.offset, 0);
        assert_eq!(cv.width, 5);
    }

    proptest! {
        #[test]
        fn pluck_bytes_is_pure(text in "[ -~]{0,40}", offset in 0usize..50, width in 0usize..10) {
            let a = pluck_bytes(&text, offset, width);
            let b = pluck_bytes(&text, offset, width);
            prop_assert_eq!(&a, &b);
            prop_assert!(a.len() <= width.max(1));
        }

        #[test]
        fn pluck_bytes_empty_text_is_empty(offset in 0usize..50, width in 0usize..10) {
            prop_assert_eq!(pluck_bytes("", offset, width), "");
        }
    }
}
