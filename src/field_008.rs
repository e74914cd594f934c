//! Detailed decoding of control field 008 (General Information).
//!
//! Positions 00-17 and 35-39 carry the same meaning for every record
//! format; positions 18-34 are interpreted according to the material type
//! resolved from the Leader (not from anything inside 008 itself). A
//! record carries exactly one 008.
//!
//! Place of publication (15-17) and language (35-37) come from the
//! separately published MARC country and language code lists and decode
//! as raw values without a label.

use crate::describe::{describe_at, Cf008Desc, CodeTable, LayoutEntry};
use crate::material::MaterialType;
use crate::record::Record;

const TYPE_OF_DATE: CodeTable = &[
    ("b", "No dates given; B.C. date involved"),
    ("c", "Continuing resource currently published"),
    ("d", "Continuing resource ceased publication"),
    ("e", "Detailed date"),
    ("i", "Inclusive dates of collection"),
    ("k", "Range of years of bulk of collection"),
    ("m", "Multiple dates"),
    ("n", "Dates unknown"),
    ("p", "Date of distribution/release/issue and production/recording session when different"),
    ("q", "Questionable date"),
    ("r", "Reprint/reissue date and original date"),
    ("s", "Single known date/probable date"),
    ("t", "Publication date and copyright date"),
    ("u", "Continuing resource status unknown"),
    ("|", "No attempt to code"),
];

const MODIFIED_RECORD: CodeTable = &[
    (" ", "Not modified"),
    ("d", "Dashed-on information omitted"),
    ("o", "Completely romanized/printed cards romanized"),
    ("r", "Completely romanized/printed cards in script"),
    ("s", "Shortened"),
    ("x", "Missing characters"),
    ("|", "No attempt to code"),
];

const CATALOGING_SOURCE: CodeTable = &[
    (" ", "National bibliographic agency"),
    ("c", "Cooperative cataloging program"),
    ("d", "Other"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

/// Positions shared by every record format and material type.
const LEADING_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 0, width: 6, name: "Date entered on file", table: None },
    LayoutEntry { offset: 6, width: 1, name: "Type of date/Publication status", table: Some(TYPE_OF_DATE) },
    LayoutEntry { offset: 7, width: 4, name: "Date 1", table: None },
    LayoutEntry { offset: 11, width: 4, name: "Date 2", table: None },
    LayoutEntry { offset: 15, width: 3, name: "Place of publication, production, or execution", table: None },
];

const TRAILING_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 35, width: 3, name: "Language", table: None },
    LayoutEntry { offset: 38, width: 1, name: "Modified record", table: Some(MODIFIED_RECORD) },
    LayoutEntry { offset: 39, width: 1, name: "Cataloging source", table: Some(CATALOGING_SOURCE) },
];

/// Decode a record's 008 field.
///
/// The material type for positions 18-34 is taken from the record's
/// Leader. Non-Bibliography formats and unrecognized material types
/// decode the format-invariant positions alone; an absent 008 yields
/// entries with empty codes rather than an error.
#[must_use]
pub fn describe_008(record: &Record) -> Cf008Desc {
    let text = record.control_field("008").unwrap_or("");
    describe_008_text(text, record.leader.material_type())
}

/// Decode raw 008 text under an explicit material type.
#[must_use]
pub fn describe_008_text(text: &str, material: Option<MaterialType>) -> Cf008Desc {
    let mut desc = Cf008Desc::new();
    for entry in LEADING_LAYOUT {
        push_entry(&mut desc, text, entry.offset, entry);
    }
    if let Some(material) = material {
        for entry in material.layout() {
            push_entry(&mut desc, text, entry.offset, entry);
        }
    }
    for entry in TRAILING_LAYOUT {
        push_entry(&mut desc, text, entry.offset, entry);
    }
    desc
}

pub(crate) fn push_entry(desc: &mut Cf008Desc, text: &str, pos: usize, entry: &LayoutEntry) {
    let (label, cv) = describe_at(text, pos, entry);
    desc.entry(label).or_default().push(cv);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leader::Leader;

    const BOOK_008: &str = "950803s1995    mnua          000 0 eng d";

    fn book_record() -> Record {
        let mut rec = Record::new(Leader::new("00925nam a2200229 a 4500"));
        rec.add_control_field_str("008", BOOK_008);
        rec
    }

    #[test]
    fn test_invariant_positions() {
        let desc = describe_008(&book_record());

        assert_eq!(desc["(00/06) Date entered on file"][0].code, "950803");
        let tod = &desc["(06/01) Type of date/Publication status"][0];
        assert_eq!(tod.code, "s");
        assert_eq!(tod.label, "Single known date/probable date");
        assert_eq!(desc["(07/04) Date 1"][0].code, "1995");
        assert_eq!(desc["(11/04) Date 2"][0].code, "    ");
        assert_eq!(
            desc["(15/03) Place of publication, production, or execution"][0].code,
            "mnu"
        );
        assert_eq!(desc["(35/03) Language"][0].code, "eng");
        assert_eq!(desc["(35/03) Language"][0].label, "");
        assert_eq!(desc["(39/01) Cataloging source"][0].label, "Other");
    }

    #[test]
    fn test_book_material_positions() {
        let desc = describe_008(&book_record());

        let ill = &desc["(18/01) Illustrations"][0];
        assert_eq!(ill.code, "a");
        assert_eq!(ill.label, "Illustrations");
        assert_eq!(desc["(33/01) Literary form"][0].code, "0");
        assert_eq!(
            desc["(33/01) Literary form"][0].label,
            "Not fiction (not further specified)"
        );
    }

    #[test]
    fn test_non_bibliography_format_decodes_invariants_only() {
        let mut rec = Record::new(Leader::new("00925nz  a2200229 a 4500"));
        rec.add_control_field_str("008", "950803n| acannaabn          |a aaa      ");
        let desc = describe_008(&rec);

        assert!(desc.contains_key("(00/06) Date entered on file"));
        assert!(desc.contains_key("(39/01) Cataloging source"));
        // Invariant layout only: 5 leading + 3 trailing labels.
        assert_eq!(desc.len(), 8);
    }

    #[test]
    fn test_short_008_decodes_prefix_only() {
        let desc = describe_008_text("950803s1995", Some(MaterialType::Book));

        assert_eq!(desc["(00/06) Date entered on file"][0].code, "950803");
        assert_eq!(desc["(07/04) Date 1"][0].code, "1995");
        // Positions beyond the available text degrade to empty codes.
        assert_eq!(desc["(11/04) Date 2"][0].code, "");
        assert_eq!(desc["(22/01) Target audience"][0].code, "");
        assert_eq!(desc["(22/01) Target audience"][0].label, "");
        assert_eq!(desc["(35/03) Language"][0].code, "");
    }

    #[test]
    fn test_absent_008_yields_empty_codes() {
        let rec = Record::new(Leader::new("00925nam a2200229 a 4500"));
        let desc = describe_008(&rec);
        assert!(!desc.is_empty());
        assert!(desc.values().all(|v| v.iter().all(|cv| cv.code.is_empty())));
    }

    #[test]
    fn test_every_entry_is_single_valued() {
        let desc = describe_008(&book_record());
        assert!(desc.values().all(|v| v.len() == 1));
    }
}
