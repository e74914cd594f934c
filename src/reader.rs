//! Reading MARC records from binary streams.
//!
//! This module provides [`MarcReader`] for reading ISO 2709 formatted MARC
//! records from any source that implements [`std::io::Read`].
//!
//! # Examples
//!
//! ```no_run
//! use mrdc::MarcReader;
//! use std::fs::File;
//!
//! let file = File::open("records.mrc")?;
//! let mut reader = MarcReader::new(file);
//!
//! while let Some(record) = reader.read_record()? {
//!     println!("Format: {:?}", record.record_format());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::error::{MarcError, Result};
use crate::leader::Leader;
use crate::record::{Field, Record};
use std::io::Read;

const FIELD_TERMINATOR: u8 = 0x1E;
const SUBFIELD_DELIMITER: u8 = 0x1F;

/// Reader for ISO 2709 binary MARC format.
///
/// Reads one MARC record at a time from any source implementing
/// [`std::io::Read`].
#[derive(Debug)]
pub struct MarcReader<R: Read> {
    reader: R,
}

impl<R: Read> MarcReader<R> {
    /// Create a new MARC reader.
    pub fn new(reader: R) -> Self {
        MarcReader { reader }
    }

    /// Read a single MARC record.
    ///
    /// Returns `Ok(Some(record))` if a record was successfully read,
    /// `Ok(None)` if EOF was reached.
    ///
    /// # Errors
    ///
    /// Returns an error if the leader is not decodable, the record is
    /// truncated, or an I/O error occurs.
    pub fn read_record(&mut self) -> Result<Option<Record>> {
        // Read the leader (24 bytes)
        let mut leader_bytes = [0u8; 24];
        match self.reader.read_exact(&mut leader_bytes) {
            Ok(()) => {},
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                return Ok(None);
            },
            Err(e) => return Err(MarcError::IoError(e)),
        }

        let leader = Leader::new(String::from_utf8_lossy(&leader_bytes).to_string());
        let record_length = leader.record_length().ok_or_else(|| {
            MarcError::InvalidLeader(format!("Non-numeric record length in {:?}", leader.text))
        })?;
        let base_address = leader.base_address().ok_or_else(|| {
            MarcError::InvalidLeader(format!("Non-numeric base address in {:?}", leader.text))
        })?;
        if record_length < 24 || base_address < 24 || base_address > record_length {
            return Err(MarcError::InvalidLeader(format!(
                "Implausible lengths in {:?}",
                leader.text
            )));
        }

        let mut record_data = vec![0u8; record_length - 24];
        match self.reader.read_exact(&mut record_data) {
            Ok(()) => {},
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                return Err(MarcError::TruncatedRecord(
                    "Unexpected end of file while reading record data".to_string(),
                ));
            },
            Err(e) => return Err(MarcError::IoError(e)),
        }

        let directory = &record_data[..base_address - 24];
        let data = &record_data[base_address - 24..];

        let mut record = Record::new(leader);

        // Directory entries are 12 bytes: tag(3) + length(4) + start(5),
        // terminated with FIELD_TERMINATOR.
        let mut pos = 0;
        while pos < directory.len() {
            if directory[pos] == FIELD_TERMINATOR {
                break;
            }
            if pos + 12 > directory.len() {
                return Err(MarcError::InvalidRecord(
                    "Incomplete directory entry".to_string(),
                ));
            }

            let entry = &directory[pos..pos + 12];
            let tag = String::from_utf8_lossy(&entry[0..3]).to_string();
            let field_length = parse_digits(&entry[3..7])?;
            let start_position = parse_digits(&entry[7..12])?;
            pos += 12;

            let end_position = start_position + field_length;
            if end_position > data.len() {
                return Err(MarcError::InvalidRecord(format!(
                    "Field {tag} exceeds data area"
                )));
            }
            let field_data = &data[start_position..end_position];

            if is_control_tag(&tag) {
                // Control field (001-009); strip the trailing terminator
                let value = String::from_utf8_lossy(
                    field_data.strip_suffix(&[FIELD_TERMINATOR]).unwrap_or(field_data),
                )
                .to_string();
                record.add_control_field(tag, value);
            } else {
                record.add_field(parse_data_field(field_data, &tag)?);
            }
        }

        Ok(Some(record))
    }
}

fn is_control_tag(tag: &str) -> bool {
    tag.starts_with('0') && tag.chars().all(char::is_numeric) && tag < "010"
}

fn parse_digits(bytes: &[u8]) -> Result<usize> {
    let s = std::str::from_utf8(bytes)
        .map_err(|_| MarcError::InvalidRecord("Non-ASCII directory entry".to_string()))?;
    s.trim()
        .parse()
        .map_err(|_| MarcError::InvalidRecord(format!("Non-numeric directory value {s:?}")))
}

fn parse_data_field(field_data: &[u8], tag: &str) -> Result<Field> {
    if field_data.len() < 2 {
        return Err(MarcError::InvalidField(format!(
            "Field {tag} too short for indicators"
        )));
    }
    let indicator1 = field_data[0] as char;
    let indicator2 = field_data[1] as char;
    let mut field = Field::new(tag.to_string(), indicator1, indicator2);

    let body = &field_data[2..];
    let body = body.strip_suffix(&[FIELD_TERMINATOR]).unwrap_or(body);
    for chunk in body.split(|b| *b == SUBFIELD_DELIMITER) {
        if chunk.is_empty() {
            continue;
        }
        let code = chunk[0] as char;
        let value = String::from_utf8_lossy(&chunk[1..]).to_string();
        field.add_subfield(code, value);
    }

    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Assemble a minimal ISO 2709 record from a leader template and
    /// (tag, body) pairs. Bodies for data fields must already carry
    /// indicators and subfield delimiters.
    pub(crate) fn build_marc(fields: &[(&str, &str)]) -> Vec<u8> {
        let mut directory = Vec::new();
        let mut data = Vec::new();
        for (tag, body) in fields {
            let start = data.len();
            data.extend_from_slice(body.as_bytes());
            data.push(FIELD_TERMINATOR);
            directory.extend_from_slice(
                format!("{tag}{:04}{start:05}", body.len() + 1).as_bytes(),
            );
        }
        directory.push(FIELD_TERMINATOR);
        data.push(FIELD_TERMINATOR); // record terminator

        let base_address = 24 + directory.len();
        let record_length = base_address + data.len();
        let leader = format!("{record_length:05}naa a22{base_address:05} c 4500");

        let mut out = leader.into_bytes();
        out.extend_from_slice(&directory);
        out.extend_from_slice(&data);
        out
    }

    #[test]
    fn test_read_record_control_and_data_fields() {
        let bytes = build_marc(&[
            ("001", "ocm12345678"),
            ("008", "950803s1995    mnu           000 0 eng  "),
            ("245", "10\x1faA title\x1fcAn author"),
        ]);
        let mut reader = MarcReader::new(Cursor::new(bytes));
        let record = reader.read_record().unwrap().unwrap();

        assert_eq!(record.control_field("001"), Some("ocm12345678"));
        assert_eq!(
            record.control_field("008"),
            Some("950803s1995    mnu           000 0 eng  ")
        );
        let f245 = record.fields_by_tag("245");
        assert_eq!(f245.len(), 1);
        assert_eq!(f245[0].indicator1, '1');
        assert_eq!(f245[0].get_subfield('a'), Some("A title"));
        assert_eq!(f245[0].get_subfield('c'), Some("An author"));

        assert!(reader.read_record().unwrap().is_none());
    }

    #[test]
    fn test_read_record_repeated_control_fields() {
        let bytes = build_marc(&[("007", "ta"), ("007", "cr un---------")]);
        let mut reader = MarcReader::new(Cursor::new(bytes));
        let record = reader.read_record().unwrap().unwrap();
        assert_eq!(record.control_fields("007").len(), 2);
        assert_eq!(record.control_fields("007")[1], "cr un---------");
    }

    #[test]
    fn test_read_record_truncated_data() {
        let mut bytes = build_marc(&[("001", "x")]);
        bytes.truncate(30);
        let mut reader = MarcReader::new(Cursor::new(bytes));
        assert!(matches!(
            reader.read_record(),
            Err(MarcError::TruncatedRecord(_))
        ));
    }

    #[test]
    fn test_read_record_bad_leader() {
        let mut reader = MarcReader::new(Cursor::new(b"xxxxxnaa a22xxxxx c 4500".to_vec()));
        assert!(matches!(
            reader.read_record(),
            Err(MarcError::InvalidLeader(_))
        ));
    }

    #[test]
    fn test_read_record_eof() {
        let mut reader = MarcReader::new(Cursor::new(Vec::new()));
        assert!(reader.read_record().unwrap().is_none());
    }
}
