//! Integration tests for the mrdc library: read ISO 2709 records and
//! decode their fixed fields end to end.

use std::io::{Cursor, Seek, SeekFrom, Write};

use mrdc::{
    describe_006, describe_007, describe_008, describe_leader, MarcReader, MaterialType,
    RecordFormat,
};

const FIELD_TERMINATOR: u8 = 0x1E;

/// Assemble an ISO 2709 record from a leader template and (tag, body)
/// pairs. The template's record length and base address placeholders are
/// filled in; data field bodies must already carry indicators and
/// subfield delimiters.
fn build_record(leader_template: &str, fields: &[(&str, &str)]) -> Vec<u8> {
    let mut directory = Vec::new();
    let mut data = Vec::new();
    for (tag, body) in fields {
        let start = data.len();
        data.extend_from_slice(body.as_bytes());
        data.push(FIELD_TERMINATOR);
        directory.extend_from_slice(format!("{tag}{:04}{start:05}", body.len() + 1).as_bytes());
    }
    directory.push(FIELD_TERMINATOR);
    data.push(FIELD_TERMINATOR);

    let base_address = 24 + directory.len();
    let record_length = base_address + data.len();
    let leader = format!(
        "{record_length:05}{}{base_address:05}{}",
        &leader_template[5..12],
        &leader_template[17..24]
    );

    let mut out = leader.into_bytes();
    out.extend_from_slice(&directory);
    out.extend_from_slice(&data);
    out
}

fn book_record_bytes() -> Vec<u8> {
    build_record(
        "00000nam a2200000 a 4500",
        &[
            ("001", "ocm00000123"),
            ("006", "m        d        "),
            ("007", "ta"),
            ("007", "cr un---------"),
            ("008", "950803s1995    mnua          000 0 eng d"),
            ("245", "10\x1faA title\x1fcAn author"),
        ],
    )
}

#[test]
fn test_decode_book_record_end_to_end() {
    let mut reader = MarcReader::new(Cursor::new(book_record_bytes()));
    let record = reader.read_record().unwrap().unwrap();

    assert_eq!(record.record_format(), RecordFormat::Bibliography);
    assert_eq!(record.leader.material_type(), Some(MaterialType::Book));

    let ldr = describe_leader(&record);
    assert_eq!(ldr["(05/01) Record status"].label, "New");
    assert_eq!(ldr["(06/01) Type of record"].label, "Language material");
    assert_eq!(ldr["(07/01) Bibliographic level"].label, "Monograph/item");
    assert_eq!(ldr["(09/01) Character coding scheme"].label, "UCS/Unicode");

    let p8 = describe_008(&record);
    assert_eq!(p8["(07/04) Date 1"][0].code, "1995");
    assert_eq!(p8["(18/01) Illustrations"][0].label, "Illustrations");
    assert_eq!(
        p8["(33/01) Literary form"][0].label,
        "Not fiction (not further specified)"
    );
    assert_eq!(p8["(35/03) Language"][0].code, "eng");

    let p6 = describe_006(&record);
    assert_eq!(p6["(00/01) Form of material"][0].code, "m");
    assert_eq!(p6["(09/01) Type of computer file"][0].label, "Document");

    let p7 = describe_007(&record);
    assert_eq!(p7.len(), 2);
    assert_eq!(p7[0]["(00/01) Category of material"].label, "Text");
    assert_eq!(
        p7[1]["(00/01) Category of material"].label,
        "Electronic resource"
    );
    assert_eq!(
        p7[1]["(01/01) Specific material designation"].label,
        "Remote"
    );
}

#[test]
fn test_decode_from_file_on_disk() {
    let mut file = tempfile::tempfile().unwrap();
    file.write_all(&book_record_bytes()).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let mut reader = MarcReader::new(file);
    let record = reader.read_record().unwrap().unwrap();
    assert_eq!(record.control_field("001"), Some("ocm00000123"));
    assert_eq!(
        describe_008(&record)["(00/06) Date entered on file"][0].code,
        "950803"
    );
    assert!(reader.read_record().unwrap().is_none());
}

#[test]
fn test_decode_multiple_records_and_formats() {
    let mut bytes = book_record_bytes();
    bytes.extend(build_record(
        "00000nz  a2200000n  4500",
        &[
            ("001", "auth00001"),
            ("008", "950803n| acannaabn          |a aaa      "),
        ],
    ));

    let mut reader = MarcReader::new(Cursor::new(bytes));
    let first = reader.read_record().unwrap().unwrap();
    let second = reader.read_record().unwrap().unwrap();
    assert!(reader.read_record().unwrap().is_none());

    assert_eq!(first.record_format(), RecordFormat::Bibliography);
    assert_eq!(second.record_format(), RecordFormat::Authority);
    assert_eq!(second.leader.material_type(), None);

    // Authority leaders decode with their own position names.
    let ldr = describe_leader(&second);
    assert_eq!(ldr["(06/01) Type of record"].label, "Authority data");

    // Authority 008s decode format-invariant positions only.
    let p8 = describe_008(&second);
    assert_eq!(p8.len(), 8);
    assert_eq!(p8["(00/06) Date entered on file"][0].code, "950803");
}

#[test]
fn test_decode_serial_with_merged_006() {
    let bytes = build_record(
        "00000nas a2200000 a 4500",
        &[
            ("001", "ser00001"),
            ("006", "ser     0    0   "),
            ("006", "m        d        "),
            ("008", "950803c19959999mnuer p       0   a0eng d"),
        ],
    );
    let mut reader = MarcReader::new(Cursor::new(bytes));
    let record = reader.read_record().unwrap().unwrap();

    assert_eq!(
        record.leader.material_type(),
        Some(MaterialType::ContinuingResource)
    );

    let p8 = describe_008(&record);
    assert_eq!(p8["(18/01) Frequency"][0].label, "Biweekly");
    assert_eq!(p8["(19/01) Regularity"][0].label, "Regular");

    let p6 = describe_006(&record);
    let forms = &p6["(00/01) Form of material"];
    assert_eq!(forms.len(), 2);
    assert_eq!(forms[0].label, "Serial/Integrating resource");
    assert_eq!(forms[1].label, "Computer file/Electronic resource");
    // Both layouts define form of item; occurrences merge in order.
    assert_eq!(p6["(06/01) Form of item"].len(), 2);
}

#[test]
fn test_dumprec_without_arguments_prints_usage() {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_dumprec"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("<MARC file to search>"));
}

#[test]
fn test_degraded_records_still_decode() {
    // A record with no 006/007/008 and a leader with unusual codes.
    let bytes = build_record("00000n8x a2200000 a 4500", &[("001", "odd00001")]);
    let mut reader = MarcReader::new(Cursor::new(bytes));
    let record = reader.read_record().unwrap().unwrap();

    assert_eq!(record.record_format(), RecordFormat::Unknown);
    assert!(describe_leader(&record).is_empty());
    assert!(describe_006(&record).is_empty());
    assert!(describe_007(&record).is_empty());

    // 008 decoding of an absent field yields empty codes, not an error.
    let p8 = describe_008(&record);
    assert!(p8.values().flatten().all(|cv| cv.code.is_empty()));
}
