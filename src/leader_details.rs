//! Detailed decoding of the 24-character Leader.
//!
//! While the general leader layout is the same for the five MARC 21
//! formats there are differences: all formats share positions 00-04
//! (record length), 09 (character coding scheme), 10-11 (indicator and
//! subfield code counts), 12-16 (base address of data), and 20-23 (entry
//! map), and diverge at positions 05-08 and 17-19 where each format plugs
//! in its own code tables.
//!
//! Layout references:
//! - <http://www.loc.gov/marc/bibliographic/bdleader.html>
//! - <http://www.loc.gov/marc/holdings/hdleader.html>
//! - <http://www.loc.gov/marc/authority/adleader.html>
//! - <http://www.loc.gov/marc/classification/cdleader.html>
//! - <http://www.loc.gov/marc/community/cileader.html>

use crate::describe::{describe_at, CodeTable, LayoutEntry, LdrDesc};
use crate::leader::RecordFormat;
use crate::record::Record;

/// Character coding scheme at position 09. The one table that is
/// identical for all five record formats, shared by reference.
pub(crate) const CHARACTER_CODING_SCHEME: CodeTable =
    &[(" ", "MARC-8"), ("a", "UCS/Unicode")];

////////////////////////////////////////////////////////////////////////
// Bibliography

const BIBLIOGRAPHY_RECORD_STATUS: CodeTable = &[
    ("a", "Increase in encoding level"),
    ("c", "Corrected or revised"),
    ("d", "Deleted"),
    ("n", "New"),
    ("p", "Increase in encoding level from prepublication"),
];

const BIBLIOGRAPHY_TYPE_OF_RECORD: CodeTable = &[
    ("a", "Language material"),
    ("c", "Notated music"),
    ("d", "Manuscript notated music"),
    ("e", "Cartographic material"),
    ("f", "Manuscript cartographic material"),
    ("g", "Projected medium"),
    ("i", "Nonmusical sound recording"),
    ("j", "Musical sound recording"),
    ("k", "Two-dimensional nonprojectable graphic"),
    ("m", "Computer file"),
    ("o", "Kit"),
    ("p", "Mixed material"),
    ("r", "Three-dimensional artifact or naturally occurring object"),
    ("t", "Manuscript language material"),
];

const BIBLIOGRAPHIC_LEVEL: CodeTable = &[
    ("a", "Monographic component part"),
    ("b", "Serial component part"),
    ("c", "Collection"),
    ("d", "Subunit"),
    ("i", "Integrating resource"),
    ("m", "Monograph/item"),
    ("s", "Serial"),
];

const TYPE_OF_CONTROL: CodeTable = &[(" ", "No specific type"), ("a", "Archival")];

const BIBLIOGRAPHY_ENCODING_LEVEL: CodeTable = &[
    (" ", "Full level"),
    ("1", "Full level, material not examined"),
    ("2", "Less-than-full level, material not examined"),
    ("3", "Abbreviated level"),
    ("4", "Core level"),
    ("5", "Partial (preliminary) level"),
    ("7", "Minimal level"),
    ("8", "Prepublication level"),
    ("u", "Unknown"),
    ("z", "Not applicable"),
];

const DESCRIPTIVE_CATALOGING_FORM: CodeTable = &[
    (" ", "Non-ISBD"),
    ("a", "AACR 2"),
    ("c", "ISBD punctuation omitted"),
    ("i", "ISBD punctuation included"),
    ("n", "Non-ISBD punctuation omitted"),
    ("u", "Unknown"),
];

const MULTIPART_RESOURCE_RECORD_LEVEL: CodeTable = &[
    (" ", "Not specified or not applicable"),
    ("a", "Set"),
    ("b", "Part with independent title"),
    ("c", "Part with dependent title"),
];

const BIBLIOGRAPHY_LDR_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 0, width: 5, name: "Logical record length", table: None },
    LayoutEntry { offset: 5, width: 1, name: "Record status", table: Some(BIBLIOGRAPHY_RECORD_STATUS) },
    LayoutEntry { offset: 6, width: 1, name: "Type of record", table: Some(BIBLIOGRAPHY_TYPE_OF_RECORD) },
    LayoutEntry { offset: 7, width: 1, name: "Bibliographic level", table: Some(BIBLIOGRAPHIC_LEVEL) },
    LayoutEntry { offset: 8, width: 1, name: "Type of control", table: Some(TYPE_OF_CONTROL) },
    LayoutEntry { offset: 9, width: 1, name: "Character coding scheme", table: Some(CHARACTER_CODING_SCHEME) },
    LayoutEntry { offset: 10, width: 1, name: "Indicator count", table: None },
    LayoutEntry { offset: 11, width: 1, name: "Subfield code count", table: None },
    LayoutEntry { offset: 12, width: 5, name: "Base address of data", table: None },
    LayoutEntry { offset: 17, width: 1, name: "Encoding level", table: Some(BIBLIOGRAPHY_ENCODING_LEVEL) },
    LayoutEntry { offset: 18, width: 1, name: "Descriptive cataloging form", table: Some(DESCRIPTIVE_CATALOGING_FORM) },
    LayoutEntry { offset: 19, width: 1, name: "Multipart resource record level", table: Some(MULTIPART_RESOURCE_RECORD_LEVEL) },
    // (20/04) Entry map
    LayoutEntry { offset: 20, width: 1, name: "Length of the length-of-field portion", table: None },
    LayoutEntry { offset: 21, width: 1, name: "Length of the starting-character-position portion", table: None },
    LayoutEntry { offset: 22, width: 1, name: "Length of the implementation-defined portion", table: None },
    LayoutEntry { offset: 23, width: 1, name: "Undefined Entry map character position", table: None },
];

////////////////////////////////////////////////////////////////////////
// Holdings

const HOLDINGS_RECORD_STATUS: CodeTable = &[
    ("c", "Corrected or revised"),
    ("d", "Deleted"),
    ("n", "New"),
];

const HOLDINGS_TYPE_OF_RECORD: CodeTable = &[
    ("u", "Unknown"),
    ("v", "Multipart item holdings"),
    ("x", "Single-part item holdings"),
    ("y", "Serial item holdings"),
];

const HOLDINGS_ENCODING_LEVEL: CodeTable = &[
    ("1", "Holdings level 1"),
    ("2", "Holdings level 2"),
    ("3", "Holdings level 3"),
    ("4", "Holdings level 4"),
    ("5", "Holdings level 4 with piece designation"),
    ("m", "Mixed level"),
    ("u", "Unknown"),
    ("z", "Other level"),
];

const ITEM_INFORMATION_IN_RECORD: CodeTable =
    &[("i", "Item information"), ("n", "No item information")];

const HOLDINGS_LDR_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 0, width: 5, name: "Record length", table: None },
    LayoutEntry { offset: 5, width: 1, name: "Record status", table: Some(HOLDINGS_RECORD_STATUS) },
    LayoutEntry { offset: 6, width: 1, name: "Type of record", table: Some(HOLDINGS_TYPE_OF_RECORD) },
    LayoutEntry { offset: 7, width: 2, name: "Undefined character positions", table: None },
    LayoutEntry { offset: 9, width: 1, name: "Character coding scheme", table: Some(CHARACTER_CODING_SCHEME) },
    LayoutEntry { offset: 10, width: 1, name: "Indicator count", table: None },
    LayoutEntry { offset: 11, width: 1, name: "Subfield code length", table: None },
    LayoutEntry { offset: 12, width: 5, name: "Base address of data", table: None },
    LayoutEntry { offset: 17, width: 1, name: "Encoding level", table: Some(HOLDINGS_ENCODING_LEVEL) },
    LayoutEntry { offset: 18, width: 1, name: "Item information in record", table: Some(ITEM_INFORMATION_IN_RECORD) },
    LayoutEntry { offset: 19, width: 1, name: "Undefined character position", table: None },
    // (20/04) Entry map
    LayoutEntry { offset: 20, width: 1, name: "Length of the length-of-field portion", table: None },
    LayoutEntry { offset: 21, width: 1, name: "Length of the starting-character-position portion", table: None },
    LayoutEntry { offset: 22, width: 1, name: "Length of the implementation-defined portion", table: None },
    LayoutEntry { offset: 23, width: 1, name: "Undefined", table: None },
];

////////////////////////////////////////////////////////////////////////
// Authority

const AUTHORITY_RECORD_STATUS: CodeTable = &[
    ("a", "Increase in encoding level"),
    ("c", "Corrected or revised"),
    ("d", "Deleted"),
    ("n", "New"),
    ("o", "Obsolete"),
    ("s", "Deleted; heading split into two or more headings"),
    ("x", "Deleted; heading replaced by another heading"),
];

const AUTHORITY_TYPE_OF_RECORD: CodeTable = &[("z", "Authority data")];

const AUTHORITY_ENCODING_LEVEL: CodeTable = &[
    ("n", "Complete authority record"),
    ("o", "Incomplete authority record"),
];

const PUNCTUATION_POLICY: CodeTable = &[
    (" ", "No information provided"),
    ("c", "Punctuation omitted"),
    ("i", "Punctuation included"),
    ("u", "Unknown"),
];

const AUTHORITY_LDR_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 0, width: 5, name: "Record length", table: None },
    LayoutEntry { offset: 5, width: 1, name: "Record status", table: Some(AUTHORITY_RECORD_STATUS) },
    LayoutEntry { offset: 6, width: 1, name: "Type of record", table: Some(AUTHORITY_TYPE_OF_RECORD) },
    LayoutEntry { offset: 7, width: 2, name: "Undefined character positions", table: None },
    LayoutEntry { offset: 9, width: 1, name: "Character coding scheme", table: Some(CHARACTER_CODING_SCHEME) },
    LayoutEntry { offset: 10, width: 1, name: "Indicator count", table: None },
    LayoutEntry { offset: 11, width: 1, name: "Subfield code length", table: None },
    LayoutEntry { offset: 12, width: 5, name: "Base address of data", table: None },
    LayoutEntry { offset: 17, width: 1, name: "Encoding level", table: Some(AUTHORITY_ENCODING_LEVEL) },
    LayoutEntry { offset: 18, width: 1, name: "Punctuation policy", table: Some(PUNCTUATION_POLICY) },
    LayoutEntry { offset: 19, width: 1, name: "Undefined", table: None },
    // (20/04) Entry map
    LayoutEntry { offset: 20, width: 1, name: "Length of the length-of-field portion", table: None },
    LayoutEntry { offset: 21, width: 1, name: "Length of the starting-character-position portion", table: None },
    LayoutEntry { offset: 22, width: 1, name: "Length of the implementation-defined portion", table: None },
    LayoutEntry { offset: 23, width: 1, name: "Undefined", table: None },
];

////////////////////////////////////////////////////////////////////////
// Classification

const CLASSIFICATION_RECORD_STATUS: CodeTable = &[
    ("a", "Increase in encoding level"),
    ("c", "Corrected or revised"),
    ("d", "Deleted"),
    ("n", "New"),
];

const CLASSIFICATION_TYPE_OF_RECORD: CodeTable = &[("w", "Classification data")];

const CLASSIFICATION_ENCODING_LEVEL: CodeTable = &[
    ("n", "Complete classification record"),
    ("o", "Incomplete classification record"),
];

const CLASSIFICATION_LDR_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 0, width: 5, name: "Record length", table: None },
    LayoutEntry { offset: 5, width: 1, name: "Record status", table: Some(CLASSIFICATION_RECORD_STATUS) },
    LayoutEntry { offset: 6, width: 1, name: "Type of record", table: Some(CLASSIFICATION_TYPE_OF_RECORD) },
    LayoutEntry { offset: 7, width: 2, name: "Undefined character positions", table: None },
    LayoutEntry { offset: 9, width: 1, name: "Character coding scheme", table: Some(CHARACTER_CODING_SCHEME) },
    LayoutEntry { offset: 10, width: 1, name: "Indicator count", table: None },
    LayoutEntry { offset: 11, width: 1, name: "Subfield code length", table: None },
    LayoutEntry { offset: 12, width: 5, name: "Base address of data", table: None },
    LayoutEntry { offset: 17, width: 1, name: "Encoding level", table: Some(CLASSIFICATION_ENCODING_LEVEL) },
    LayoutEntry { offset: 18, width: 2, name: "Undefined character positions", table: None },
    // (20/04) Entry map
    LayoutEntry { offset: 20, width: 1, name: "Length of the length-of-field portion", table: None },
    LayoutEntry { offset: 21, width: 1, name: "Length of the starting-character-position portion", table: None },
    LayoutEntry { offset: 22, width: 1, name: "Length of the implementation-defined portion", table: None },
    LayoutEntry { offset: 23, width: 1, name: "Undefined", table: None },
];

////////////////////////////////////////////////////////////////////////
// Community Information

const COMMUNITY_RECORD_STATUS: CodeTable = &[
    ("c", "Corrected or revised"),
    ("d", "Deleted"),
    ("n", "New"),
];

const COMMUNITY_TYPE_OF_RECORD: CodeTable = &[("q", "Community information")];

const KIND_OF_DATA: CodeTable = &[
    ("n", "Individual"),
    ("o", "Organization"),
    ("p", "Program or service"),
    ("q", "Event"),
    ("z", "Other"),
];

const COMMUNITY_LDR_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 0, width: 5, name: "Record length", table: None },
    LayoutEntry { offset: 5, width: 1, name: "Record status", table: Some(COMMUNITY_RECORD_STATUS) },
    LayoutEntry { offset: 6, width: 1, name: "Type of record", table: Some(COMMUNITY_TYPE_OF_RECORD) },
    LayoutEntry { offset: 7, width: 1, name: "Kind of data", table: Some(KIND_OF_DATA) },
    LayoutEntry { offset: 8, width: 1, name: "Undefined character position", table: None },
    LayoutEntry { offset: 9, width: 1, name: "Character coding scheme", table: Some(CHARACTER_CODING_SCHEME) },
    LayoutEntry { offset: 10, width: 1, name: "Indicator count", table: None },
    LayoutEntry { offset: 11, width: 1, name: "Subfield code length", table: None },
    LayoutEntry { offset: 12, width: 5, name: "Base address of data", table: None },
    LayoutEntry { offset: 17, width: 3, name: "Undefined character positions", table: None },
    // (20/04) Entry map
    LayoutEntry { offset: 20, width: 1, name: "Length of the length-of-field portion", table: None },
    LayoutEntry { offset: 21, width: 1, name: "Length of the starting-character-position portion", table: None },
    LayoutEntry { offset: 22, width: 1, name: "Length of the implementation-defined portion", table: None },
    LayoutEntry { offset: 23, width: 1, name: "Undefined", table: None },
];

fn leader_layout(format: RecordFormat) -> &'static [LayoutEntry] {
    match format {
        RecordFormat::Bibliography => BIBLIOGRAPHY_LDR_LAYOUT,
        RecordFormat::Holdings => HOLDINGS_LDR_LAYOUT,
        RecordFormat::Authority => AUTHORITY_LDR_LAYOUT,
        RecordFormat::Classification => CLASSIFICATION_LDR_LAYOUT,
        RecordFormat::Community => COMMUNITY_LDR_LAYOUT,
        RecordFormat::Unknown => &[],
    }
}

/// Decode a record's Leader into a, hopefully, human readable
/// translation of the contents.
///
/// An unrecognized record format yields an empty set rather than an
/// error: some record streams carry variants this decoder does not model.
#[must_use]
pub fn describe_leader(record: &Record) -> LdrDesc {
    describe_leader_text(&record.leader.text, record.record_format())
}

/// Decode raw leader text under an explicit record format.
#[must_use]
pub fn describe_leader_text(text: &str, format: RecordFormat) -> LdrDesc {
    let mut ldr = LdrDesc::new();
    for entry in leader_layout(format) {
        let (label, cv) = describe_at(text, entry.offset, entry);
        ldr.insert(label, cv);
    }
    ldr
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leader::Leader;

    const BIB_LEADER: &str = "00925naa a2200229 c 4500";

    fn bib_record() -> Record {
        Record::new(Leader::new(BIB_LEADER))
    }

    #[test]
    fn test_bibliography_leader_entry_count() {
        let ldr = describe_leader(&bib_record());
        assert_eq!(ldr.len(), 16);
    }

    #[test]
    fn test_bibliography_leader_values() {
        let ldr = describe_leader(&bib_record());

        let length = &ldr["(00/05) Logical record length"];
        assert_eq!(length.code, "00925");
        assert_eq!(length.label, "");
        assert_eq!((length.offset, length.width), (0, 5));

        let tor = &ldr["(06/01) Type of record"];
        assert_eq!(tor.code, "a");
        assert_eq!(tor.label, "Language material");

        let level = &ldr["(07/01) Bibliographic level"];
        assert_eq!(level.code, "a");
        assert_eq!(level.label, "Monographic component part");

        let coding = &ldr["(09/01) Character coding scheme"];
        assert_eq!(coding.code, "a");
        assert_eq!(coding.label, "UCS/Unicode");
    }

    #[test]
    fn test_leader_layouts_cover_all_24_positions() {
        for format in [
            RecordFormat::Bibliography,
            RecordFormat::Holdings,
            RecordFormat::Authority,
            RecordFormat::Classification,
            RecordFormat::Community,
        ] {
            let mut next = 0;
            for entry in leader_layout(format) {
                assert_eq!(entry.offset, next, "gap or overlap in {format:?}");
                next = entry.offset + entry.width;
            }
            assert_eq!(next, 24, "leader layout for {format:?} must cover 24 bytes");
        }
    }

    #[test]
    fn test_serial_type_of_record_and_level() {
        let record = Record::new(Leader::new("01234cas a2200337 a 4500"));
        let ldr = describe_leader(&record);
        assert_eq!(ldr["(06/01) Type of record"].label, "Language material");
        assert_eq!(ldr["(07/01) Bibliographic level"].label, "Serial");
    }

    #[test]
    fn test_character_coding_scheme_shared_across_formats() {
        for leader_text in [
            "00925naa a2200229 c 4500",
            "00925ny  a2200229 c 4500",
            "00925nz  a2200229 c 4500",
            "00925nw  a2200229 c 4500",
            "00925nq  a2200229 c 4500",
        ] {
            let marc8 = leader_text.replace("a22", " 22");
            let record = Record::new(Leader::new(marc8));
            let ldr = describe_leader(&record);
            let coding = &ldr["(09/01) Character coding scheme"];
            assert_eq!(coding.code, " ");
            assert_eq!(coding.label, "MARC-8");
        }
    }

    #[test]
    fn test_unknown_format_yields_empty_set() {
        let record = Record::new(Leader::new("00925n8a a2200229 c 4500"));
        assert!(describe_leader(&record).is_empty());
    }

    #[test]
    fn test_short_leader_degrades_to_empty_codes() {
        let ldr = describe_leader_text("00925na", RecordFormat::Bibliography);
        assert_eq!(ldr.len(), 16);
        assert_eq!(ldr["(05/01) Record status"].code, "n");
        assert_eq!(ldr["(07/01) Bibliographic level"].code, "");
        assert_eq!(ldr["(07/01) Bibliographic level"].label, "");
        assert_eq!(ldr["(12/05) Base address of data"].code, "");
    }
}
