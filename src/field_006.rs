//! Detailed decoding of control field 006 (Additional Material
//! Characteristics).
//!
//! A 006 is 18 bytes: byte 00 is a form-of-material selector (the same
//! alphabet as Leader byte 06, plus `s` for serials), and bytes 01-17
//! mirror 008 positions 18-34 for the selected material. The field is
//! repeatable; a bibliographic record carries one 006 per additional
//! material aspect.
//!
//! All occurrences merge into a single descriptor set. Labels shared by
//! several occurrences' layouts (form of item, government publication,
//! and the like) accumulate their `CodeValue`s in occurrence order, the
//! first occurrence being the primary interpretation.

use crate::describe::{Cf006Desc, LayoutEntry};
use crate::field_008::push_entry;
use crate::material::{MaterialType, FORM_OF_MATERIAL};
use crate::record::Record;

// Bytes 01-17 of a 006 carry the material layout defined at 008
// positions 18-34, so entries rebase by this much.
const REBASE: usize = 17;

const FORM_OF_MATERIAL_ENTRY: LayoutEntry = LayoutEntry {
    offset: 0,
    width: 1,
    name: "Form of material",
    table: Some(FORM_OF_MATERIAL),
};

/// Decode all 006 occurrences of a record into one merged set.
///
/// A record without a 006 yields an empty set. An occurrence with an
/// unrecognized form-of-material code contributes only its byte 00 entry.
#[must_use]
pub fn describe_006(record: &Record) -> Cf006Desc {
    let mut desc = Cf006Desc::new();
    for occurrence in record.control_fields("006") {
        describe_006_occurrence(occurrence, &mut desc);
    }
    desc
}

/// Decode one 006 occurrence into an existing descriptor set.
pub fn describe_006_occurrence(text: &str, desc: &mut Cf006Desc) {
    push_entry(desc, text, 0, &FORM_OF_MATERIAL_ENTRY);

    let material = text
        .chars()
        .next()
        .and_then(MaterialType::from_006_code);
    let Some(material) = material else {
        return;
    };
    for entry in material.layout() {
        push_entry(desc, text, entry.offset - REBASE, entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leader::Leader;

    // Serial aspect of an online resource: byte 00 's', then bytes 01-17.
    const SERIAL_006: &str = "ser     0    0   ";
    // Computer-file aspect: byte 00 'm', type of file 'd' at byte 09.
    const COMPUTER_006: &str = "m        d        ";

    fn record_with_006(occurrences: &[&str]) -> Record {
        let mut rec = Record::new(Leader::new("00925nam a2200229 a 4500"));
        for text in occurrences {
            rec.add_control_field_str("006", text);
        }
        rec
    }

    #[test]
    fn test_no_006_yields_empty_set() {
        let rec = record_with_006(&[]);
        assert!(describe_006(&rec).is_empty());
    }

    #[test]
    fn test_single_serial_006() {
        let desc = describe_006(&record_with_006(&[SERIAL_006]));

        let form = &desc["(00/01) Form of material"][0];
        assert_eq!(form.code, "s");
        assert_eq!(form.label, "Serial/Integrating resource");

        // 008/18 Frequency lands at 006/01.
        let freq = &desc["(01/01) Frequency"][0];
        assert_eq!(freq.code, "e");
        assert_eq!(freq.label, "Biweekly");
        assert_eq!((freq.offset, freq.width), (1, 1));

        let reg = &desc["(02/01) Regularity"][0];
        assert_eq!(reg.code, "r");
        assert_eq!(reg.label, "Regular");
    }

    #[test]
    fn test_computer_file_006() {
        let desc = describe_006(&record_with_006(&[COMPUTER_006]));
        let kind = &desc["(09/01) Type of computer file"][0];
        assert_eq!(kind.code, "d");
        assert_eq!(kind.label, "Document");
    }

    #[test]
    fn test_two_occurrences_merge_under_shared_labels() {
        let desc = describe_006(&record_with_006(&[SERIAL_006, COMPUTER_006]));

        // Byte 00 is shared by every layout: one entry per occurrence.
        let forms = &desc["(00/01) Form of material"];
        assert_eq!(forms.len(), 2);
        assert_eq!(forms[0].code, "s");
        assert_eq!(forms[1].code, "m");

        // Both layouts define 006/06 Form of item.
        assert_eq!(desc["(06/01) Form of item"].len(), 2);

        // Frequency exists only in the serial layout.
        assert_eq!(desc["(01/01) Frequency"].len(), 1);
        // Type of computer file exists only in the computer-file layout.
        assert_eq!(desc["(09/01) Type of computer file"].len(), 1);
    }

    #[test]
    fn test_unrecognized_form_of_material_is_partial() {
        let desc = describe_006(&record_with_006(&["q                 "]));
        assert_eq!(desc.len(), 1);
        let form = &desc["(00/01) Form of material"][0];
        assert_eq!(form.code, "q");
        assert_eq!(form.label, "");
    }

    #[test]
    fn test_truncated_006_degrades_to_empty_codes() {
        let desc = describe_006(&record_with_006(&["se"]));
        assert_eq!(desc["(01/01) Frequency"][0].code, "e");
        assert_eq!(desc["(02/01) Regularity"][0].code, "");
        assert_eq!(desc["(02/01) Regularity"][0].label, "");
    }
}
