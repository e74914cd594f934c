#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # MRDC: MARC Record Details Crate
//!
//! A Rust library for decoding the fixed-length coded fields of MARC 21
//! records: the 24-byte Leader and control fields 006, 007, and 008.
//! Every coded byte position decodes into a [`CodeValue`] carrying the
//! raw code, its human-readable meaning, and where in the field it came
//! from.
//!
//! ## Quick Start
//!
//! ```ignore
//! use mrdc::{describe_008, MarcReader};
//! use std::fs::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = File::open("records.mrc")?;
//! let mut reader = MarcReader::new(file);
//!
//! while let Some(record) = reader.read_record()? {
//!     for (label, values) in describe_008(&record) {
//!         for cv in values {
//!             println!("{label}: {} = {:?}", cv.code, cv.label);
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`record`] — Core MARC record structures (`Record`, `Field`, `Subfield`)
//! - [`reader`] — Reading MARC records from ISO 2709 binary streams
//! - [`leader`] — MARC record leader and record-format detection
//! - [`leader_details`] — Per-format decoding of all 24 Leader positions
//! - [`material`] — Material types and their 008/18-34 layouts
//! - [`field_006`] — Additional Material Characteristics decoding
//! - [`field_007`] — Physical Description Fixed Field decoding
//! - [`field_008`] — General Information decoding
//! - [`describe`] — The `CodeValue` descriptor and decoding primitives
//! - [`error`] — Error types and result type
//!
//! ## Decoding model
//!
//! The decoders never fail: a truncated field yields descriptors with
//! empty codes, and a code absent from its table yields an empty label.
//! Descriptor labels are prefixed `(NN/WW)` with the zero-padded byte
//! offset and width, so sorting labels lexicographically recovers byte
//! order.

pub mod describe;
pub mod error;
pub mod field_006;
pub mod field_007;
pub mod field_008;
pub mod leader;
pub mod leader_details;
pub mod material;
pub mod reader;
/// Core MARC record structures (`Record`, `Field`, `Subfield`)
pub mod record;

pub use describe::{Cf006Desc, Cf007Desc, Cf008Desc, CodeValue, LdrDesc};
pub use error::{MarcError, Result};
pub use field_006::describe_006;
pub use field_007::describe_007;
pub use field_008::describe_008;
pub use leader::{Leader, RecordFormat};
pub use leader_details::describe_leader;
pub use material::MaterialType;
pub use reader::MarcReader;
pub use record::{Field, Record, Subfield};
