//! Detailed decoding of control field 007 (Physical Description Fixed
//! Field).
//!
//! A 007 describes one physical carrier; its own byte 00 selects one of
//! fifteen category-of-material layouts. The field is repeatable and
//! occurrence order is meaningful (a book with an accompanying disc
//! carries one 007 per carrier, in sequence), so each occurrence decodes
//! into its own descriptor set and the sets are returned in input order.
//!
//! Layouts and code tables follow
//! <https://www.loc.gov/marc/bibliographic/bd007.html>

use crate::describe::{describe_at, Cf007Desc, CodeTable, LayoutEntry};
use crate::record::Record;

/// 007 byte 00, category of material.
const CATEGORY_OF_MATERIAL: CodeTable = &[
    ("a", "Map"),
    ("c", "Electronic resource"),
    ("d", "Globe"),
    ("f", "Tactile material"),
    ("g", "Projected graphic"),
    ("h", "Microform"),
    ("k", "Nonprojected graphic"),
    ("m", "Motion picture"),
    ("o", "Kit"),
    ("q", "Notated music"),
    ("r", "Remote-sensing image"),
    ("s", "Sound recording"),
    ("t", "Text"),
    ("v", "Videorecording"),
    ("z", "Unspecified"),
];

const CATEGORY_ENTRY: LayoutEntry = LayoutEntry {
    offset: 0,
    width: 1,
    name: "Category of material",
    table: Some(CATEGORY_OF_MATERIAL),
};

////////////////////////////////////////////////////////////////////////
// Map

const MAP_SMD: CodeTable = &[
    ("d", "Atlas"),
    ("g", "Diagram"),
    ("j", "Map"),
    ("k", "Profile"),
    ("q", "Model"),
    ("r", "Remote-sensing image"),
    ("s", "Section"),
    ("u", "Unspecified"),
    ("y", "View"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MAP_COLOR: CodeTable = &[
    ("a", "One color"),
    ("c", "Multicolored"),
    ("|", "No attempt to code"),
];

const MAP_PHYSICAL_MEDIUM: CodeTable = &[
    ("a", "Paper"),
    ("b", "Wood"),
    ("c", "Stone"),
    ("d", "Metal"),
    ("e", "Synthetic"),
    ("f", "Skin"),
    ("g", "Textile"),
    ("i", "Plastic"),
    ("j", "Glass"),
    ("l", "Vinyl"),
    ("n", "Vellum"),
    ("p", "Plaster"),
    ("q", "Flexible base photographic, positive"),
    ("r", "Flexible base photographic, negative"),
    ("s", "Non-flexible base photographic, positive"),
    ("t", "Non-flexible base photographic, negative"),
    ("u", "Unknown"),
    ("v", "Leather"),
    ("w", "Parchment"),
    ("y", "Other photographic medium"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MAP_TYPE_OF_REPRODUCTION: CodeTable = &[
    ("f", "Facsimile"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MAP_PRODUCTION_DETAILS: CodeTable = &[
    ("a", "Photocopy, blueline print"),
    ("b", "Photocopy"),
    ("c", "Pre-production"),
    ("d", "Film"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MAP_POSITIVE_NEGATIVE: CodeTable = &[
    ("a", "Positive"),
    ("b", "Negative"),
    ("m", "Mixed polarity"),
    ("n", "Not applicable"),
    ("|", "No attempt to code"),
];

const MAP_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 1, width: 1, name: "Specific material designation", table: Some(MAP_SMD) },
    LayoutEntry { offset: 2, width: 1, name: "Undefined", table: None },
    LayoutEntry { offset: 3, width: 1, name: "Color", table: Some(MAP_COLOR) },
    LayoutEntry { offset: 4, width: 1, name: "Physical medium", table: Some(MAP_PHYSICAL_MEDIUM) },
    LayoutEntry { offset: 5, width: 1, name: "Type of reproduction", table: Some(MAP_TYPE_OF_REPRODUCTION) },
    LayoutEntry { offset: 6, width: 1, name: "Production/reproduction details", table: Some(MAP_PRODUCTION_DETAILS) },
    LayoutEntry { offset: 7, width: 1, name: "Positive/negative aspect", table: Some(MAP_POSITIVE_NEGATIVE) },
];

////////////////////////////////////////////////////////////////////////
// Electronic resource

const ELECTRONIC_SMD: CodeTable = &[
    ("a", "Tape cartridge"),
    ("b", "Chip cartridge"),
    ("c", "Computer optical disc cartridge"),
    ("d", "Computer disc, type unspecified"),
    ("e", "Computer disc cartridge, type unspecified"),
    ("f", "Tape cassette"),
    ("h", "Tape reel"),
    ("j", "Magnetic disk"),
    ("k", "Computer card"),
    ("m", "Magneto-optical disc"),
    ("o", "Optical disc"),
    ("r", "Remote"),
    ("s", "Standalone device"),
    ("u", "Unspecified"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const ELECTRONIC_COLOR: CodeTable = &[
    ("a", "One color"),
    ("b", "Black-and-white"),
    ("c", "Multicolored"),
    ("g", "Gray scale"),
    ("m", "Mixed"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const ELECTRONIC_DIMENSIONS: CodeTable = &[
    ("a", "3 1/2 in."),
    ("e", "12 in."),
    ("g", "4 3/4 in. or 12 cm."),
    ("i", "1 1/8 x 2 3/8 in."),
    ("j", "3 7/8 x 2 1/2 in."),
    ("n", "Not applicable"),
    ("o", "5 1/4 in."),
    ("u", "Unknown"),
    ("v", "8 in."),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const ELECTRONIC_SOUND: CodeTable = &[
    (" ", "No sound (silent)"),
    ("a", "Sound"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

const ELECTRONIC_IMAGE_BIT_DEPTH: CodeTable = &[
    ("mmm", "Multiple"),
    ("nnn", "Not applicable"),
    ("---", "Unknown"),
    ("|||", "No attempt to code"),
];

const ELECTRONIC_FILE_FORMATS: CodeTable = &[
    ("a", "One file format"),
    ("m", "Multiple file formats"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

const ELECTRONIC_QUALITY_TARGETS: CodeTable = &[
    ("a", "Absent"),
    ("n", "Not applicable"),
    ("p", "Present"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

const ELECTRONIC_ANTECEDENT: CodeTable = &[
    ("a", "File reproduced from original"),
    ("b", "File reproduced from microform"),
    ("c", "File reproduced from an electronic resource"),
    ("d", "File reproduced from an intermediate (not microform)"),
    ("m", "Mixed"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

const ELECTRONIC_COMPRESSION: CodeTable = &[
    ("a", "Uncompressed"),
    ("b", "Lossless"),
    ("d", "Lossy"),
    ("m", "Mixed"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

const ELECTRONIC_REFORMATTING_QUALITY: CodeTable = &[
    ("a", "Access"),
    ("n", "Not applicable"),
    ("p", "Preservation"),
    ("r", "Replacement"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

const ELECTRONIC_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 1, width: 1, name: "Specific material designation", table: Some(ELECTRONIC_SMD) },
    LayoutEntry { offset: 2, width: 1, name: "Undefined", table: None },
    LayoutEntry { offset: 3, width: 1, name: "Color", table: Some(ELECTRONIC_COLOR) },
    LayoutEntry { offset: 4, width: 1, name: "Dimensions", table: Some(ELECTRONIC_DIMENSIONS) },
    LayoutEntry { offset: 5, width: 1, name: "Sound", table: Some(ELECTRONIC_SOUND) },
    LayoutEntry { offset: 6, width: 3, name: "Image bit depth", table: Some(ELECTRONIC_IMAGE_BIT_DEPTH) },
    LayoutEntry { offset: 9, width: 1, name: "File formats", table: Some(ELECTRONIC_FILE_FORMATS) },
    LayoutEntry { offset: 10, width: 1, name: "Quality assurance targets", table: Some(ELECTRONIC_QUALITY_TARGETS) },
    LayoutEntry { offset: 11, width: 1, name: "Antecedent/source", table: Some(ELECTRONIC_ANTECEDENT) },
    LayoutEntry { offset: 12, width: 1, name: "Level of compression", table: Some(ELECTRONIC_COMPRESSION) },
    LayoutEntry { offset: 13, width: 1, name: "Reformatting quality", table: Some(ELECTRONIC_REFORMATTING_QUALITY) },
];

////////////////////////////////////////////////////////////////////////
// Globe

const GLOBE_SMD: CodeTable = &[
    ("a", "Celestial globe"),
    ("b", "Planetary or lunar globe"),
    ("c", "Terrestrial globe"),
    ("e", "Earth moon globe"),
    ("u", "Unspecified"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const GLOBE_COLOR: CodeTable = &[
    ("a", "One color"),
    ("c", "Multicolored"),
    ("|", "No attempt to code"),
];

const GLOBE_PHYSICAL_MEDIUM: CodeTable = &[
    ("a", "Paper"),
    ("b", "Wood"),
    ("c", "Stone"),
    ("d", "Metal"),
    ("e", "Synthetic"),
    ("f", "Skin"),
    ("g", "Textile"),
    ("i", "Plastic"),
    ("l", "Vinyl"),
    ("n", "Vellum"),
    ("p", "Plaster"),
    ("u", "Unknown"),
    ("v", "Leather"),
    ("w", "Parchment"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const GLOBE_TYPE_OF_REPRODUCTION: CodeTable = &[
    ("f", "Facsimile"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const GLOBE_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 1, width: 1, name: "Specific material designation", table: Some(GLOBE_SMD) },
    LayoutEntry { offset: 2, width: 1, name: "Undefined", table: None },
    LayoutEntry { offset: 3, width: 1, name: "Color", table: Some(GLOBE_COLOR) },
    LayoutEntry { offset: 4, width: 1, name: "Physical medium", table: Some(GLOBE_PHYSICAL_MEDIUM) },
    LayoutEntry { offset: 5, width: 1, name: "Type of reproduction", table: Some(GLOBE_TYPE_OF_REPRODUCTION) },
];

////////////////////////////////////////////////////////////////////////
// Tactile material

const TACTILE_SMD: CodeTable = &[
    ("a", "Moon"),
    ("b", "Braille"),
    ("c", "Combination"),
    ("d", "Tactile, with no writing system"),
    ("u", "Unspecified"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const TACTILE_CLASS_OF_BRAILLE: CodeTable = &[
    (" ", "No specified class of braille writing"),
    ("a", "Literary braille"),
    ("b", "Format code braille"),
    ("c", "Mathematics and scientific braille"),
    ("d", "Computer braille"),
    ("e", "Music braille"),
    ("m", "Multiple braille types"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const TACTILE_CONTRACTION: CodeTable = &[
    ("a", "Uncontracted"),
    ("b", "Contracted"),
    ("m", "Combination"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const TACTILE_BRAILLE_MUSIC_FORMAT: CodeTable = &[
    (" ", "No specified braille music format"),
    ("a", "Bar over bar"),
    ("b", "Bar by bar"),
    ("c", "Line over line"),
    ("d", "Paragraph"),
    ("e", "Single line"),
    ("f", "Section by section"),
    ("g", "Line by line"),
    ("h", "Open score"),
    ("i", "Spanner short form scoring"),
    ("j", "Short form scoring"),
    ("k", "Outline"),
    ("l", "Vertical score"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const TACTILE_SPECIAL_PHYSICAL: CodeTable = &[
    ("a", "Print/braille"),
    ("b", "Jumbo or enlarged braille"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const TACTILE_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 1, width: 1, name: "Specific material designation", table: Some(TACTILE_SMD) },
    LayoutEntry { offset: 2, width: 1, name: "Undefined", table: None },
    LayoutEntry { offset: 3, width: 1, name: "Class of braille writing", table: Some(TACTILE_CLASS_OF_BRAILLE) },
    LayoutEntry { offset: 4, width: 1, name: "Class of braille writing", table: Some(TACTILE_CLASS_OF_BRAILLE) },
    LayoutEntry { offset: 5, width: 1, name: "Level of contraction", table: Some(TACTILE_CONTRACTION) },
    LayoutEntry { offset: 6, width: 1, name: "Braille music format", table: Some(TACTILE_BRAILLE_MUSIC_FORMAT) },
    LayoutEntry { offset: 7, width: 1, name: "Braille music format", table: Some(TACTILE_BRAILLE_MUSIC_FORMAT) },
    LayoutEntry { offset: 8, width: 1, name: "Braille music format", table: Some(TACTILE_BRAILLE_MUSIC_FORMAT) },
    LayoutEntry { offset: 9, width: 1, name: "Special physical characteristics", table: Some(TACTILE_SPECIAL_PHYSICAL) },
];

////////////////////////////////////////////////////////////////////////
// Projected graphic

const PROJECTED_SMD: CodeTable = &[
    ("c", "Filmstrip cartridge"),
    ("d", "Filmslip"),
    ("f", "Filmstrip, type unspecified"),
    ("o", "Filmstrip roll"),
    ("s", "Slide"),
    ("t", "Transparency"),
    ("u", "Unspecified"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const PROJECTED_COLOR: CodeTable = &[
    ("a", "One color"),
    ("b", "Black-and-white"),
    ("c", "Multicolored"),
    ("h", "Hand colored"),
    ("m", "Mixed"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const PROJECTED_BASE_OF_EMULSION: CodeTable = &[
    ("d", "Glass"),
    ("e", "Synthetic"),
    ("j", "Safety film"),
    ("k", "Film base, other than safety film"),
    ("m", "Mixed collection"),
    ("o", "Paper"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const PROJECTED_SOUND_ON_MEDIUM: CodeTable = &[
    (" ", "No sound (silent)"),
    ("a", "Sound on medium"),
    ("b", "Sound separate from medium"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

const PROJECTED_MEDIUM_FOR_SOUND: CodeTable = &[
    (" ", "No sound (silent)"),
    ("a", "Optical sound track on motion picture film"),
    ("b", "Magnetic sound track on motion picture film"),
    ("c", "Magnetic audio tape in cartridge"),
    ("d", "Sound disc"),
    ("e", "Magnetic audio tape on reel"),
    ("f", "Magnetic audio tape in cassette"),
    ("g", "Optical and magnetic sound track on motion picture film"),
    ("h", "Videotape"),
    ("i", "Videodisc"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const PROJECTED_DIMENSIONS: CodeTable = &[
    ("a", "Standard 8 mm. film width"),
    ("b", "Super 8 mm./single 8 mm. film width"),
    ("c", "9.5 mm. film width"),
    ("d", "16 mm. film width"),
    ("e", "28 mm. film width"),
    ("f", "35 mm. film width"),
    ("g", "70 mm. film width"),
    ("j", "2x2 in. or 5x5 cm. slide"),
    ("k", "2 1/4 x 2 1/4 in. or 6x6 cm. slide"),
    ("s", "4x5 in. or 10x13 cm. transparency"),
    ("t", "5x7 in. or 13x18 cm. transparency"),
    ("v", "8x10 in. or 21x26 cm. transparency"),
    ("w", "9x9 in. or 23x23 cm. transparency"),
    ("x", "10x10 in. or 26x26 cm. transparency"),
    ("y", "7x7 in. or 18x18 cm. transparency"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const PROJECTED_SECONDARY_SUPPORT: CodeTable = &[
    (" ", "No secondary support"),
    ("c", "Cardboard"),
    ("d", "Glass"),
    ("e", "Synthetic"),
    ("h", "Metal"),
    ("j", "Metal and glass"),
    ("k", "Synthetic and glass"),
    ("m", "Mixed collection"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const PROJECTED_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 1, width: 1, name: "Specific material designation", table: Some(PROJECTED_SMD) },
    LayoutEntry { offset: 2, width: 1, name: "Undefined", table: None },
    LayoutEntry { offset: 3, width: 1, name: "Color", table: Some(PROJECTED_COLOR) },
    LayoutEntry { offset: 4, width: 1, name: "Base of emulsion", table: Some(PROJECTED_BASE_OF_EMULSION) },
    LayoutEntry { offset: 5, width: 1, name: "Sound on medium or separate", table: Some(PROJECTED_SOUND_ON_MEDIUM) },
    LayoutEntry { offset: 6, width: 1, name: "Medium for sound", table: Some(PROJECTED_MEDIUM_FOR_SOUND) },
    LayoutEntry { offset: 7, width: 1, name: "Dimensions", table: Some(PROJECTED_DIMENSIONS) },
    LayoutEntry { offset: 8, width: 1, name: "Secondary support material", table: Some(PROJECTED_SECONDARY_SUPPORT) },
];

////////////////////////////////////////////////////////////////////////
// Microform

const MICROFORM_SMD: CodeTable = &[
    ("a", "Aperture card"),
    ("b", "Microfilm cartridge"),
    ("c", "Microfilm cassette"),
    ("d", "Microfilm reel"),
    ("e", "Microfiche"),
    ("f", "Microfiche cassette"),
    ("g", "Microopaque"),
    ("h", "Microfilm slip"),
    ("j", "Microfilm roll"),
    ("u", "Unspecified"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MICROFORM_POSITIVE_NEGATIVE: CodeTable = &[
    ("a", "Positive"),
    ("b", "Negative"),
    ("m", "Mixed polarity"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

const MICROFORM_DIMENSIONS: CodeTable = &[
    ("a", "8 mm."),
    ("d", "16 mm."),
    ("f", "35 mm."),
    ("g", "70 mm."),
    ("h", "105 mm."),
    ("l", "3x5 in. or 8x13 cm."),
    ("m", "4x6 in. or 11x15 cm."),
    ("o", "6x9 in. or 16x23 cm."),
    ("p", "3 1/4 x 7 3/8 in. or 9x19 cm."),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MICROFORM_REDUCTION_RANGE: CodeTable = &[
    ("a", "Low reduction ratio"),
    ("b", "Normal reduction"),
    ("c", "High reduction"),
    ("d", "Very high reduction"),
    ("e", "Ultra high reduction"),
    ("u", "Unknown"),
    ("v", "Reduction rate varies"),
    ("|", "No attempt to code"),
];

const MICROFORM_COLOR: CodeTable = &[
    ("b", "Black-and-white"),
    ("c", "Multicolored"),
    ("m", "Mixed"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MICROFORM_EMULSION: CodeTable = &[
    ("a", "Silver halide"),
    ("b", "Diazo"),
    ("c", "Vesicular"),
    ("m", "Mixed emulsion"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MICROFORM_GENERATION: CodeTable = &[
    ("a", "First generation (master)"),
    ("b", "Printing master"),
    ("c", "Service copy"),
    ("m", "Mixed generation"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

const MICROFORM_BASE_OF_FILM: CodeTable = &[
    ("a", "Safety base, undetermined"),
    ("c", "Safety base, acetate undetermined"),
    ("d", "Safety base, diacetate"),
    ("i", "Nitrate base"),
    ("m", "Mixed base (nitrate and safety)"),
    ("n", "Not applicable"),
    ("p", "Safety base, polyester"),
    ("r", "Safety base, mixed"),
    ("t", "Safety base, triacetate"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MICROFORM_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 1, width: 1, name: "Specific material designation", table: Some(MICROFORM_SMD) },
    LayoutEntry { offset: 2, width: 1, name: "Undefined", table: None },
    LayoutEntry { offset: 3, width: 1, name: "Positive/negative aspect", table: Some(MICROFORM_POSITIVE_NEGATIVE) },
    LayoutEntry { offset: 4, width: 1, name: "Dimensions", table: Some(MICROFORM_DIMENSIONS) },
    LayoutEntry { offset: 5, width: 1, name: "Reduction ratio range", table: Some(MICROFORM_REDUCTION_RANGE) },
    LayoutEntry { offset: 6, width: 3, name: "Reduction ratio", table: None },
    LayoutEntry { offset: 9, width: 1, name: "Color", table: Some(MICROFORM_COLOR) },
    LayoutEntry { offset: 10, width: 1, name: "Emulsion on film", table: Some(MICROFORM_EMULSION) },
    LayoutEntry { offset: 11, width: 1, name: "Generation", table: Some(MICROFORM_GENERATION) },
    LayoutEntry { offset: 12, width: 1, name: "Base of film", table: Some(MICROFORM_BASE_OF_FILM) },
];

////////////////////////////////////////////////////////////////////////
// Nonprojected graphic

const NONPROJECTED_SMD: CodeTable = &[
    ("a", "Activity card"),
    ("c", "Collage"),
    ("d", "Drawing"),
    ("e", "Painting"),
    ("f", "Photomechanical print"),
    ("g", "Photonegative"),
    ("h", "Photoprint"),
    ("i", "Picture"),
    ("j", "Print"),
    ("k", "Poster"),
    ("l", "Technical drawing"),
    ("n", "Chart"),
    ("o", "Flash card"),
    ("p", "Postcard"),
    ("q", "Icon"),
    ("r", "Radiograph"),
    ("s", "Study print"),
    ("u", "Unspecified"),
    ("v", "Photograph, type unspecified"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const NONPROJECTED_COLOR: CodeTable = &[
    ("a", "One color"),
    ("b", "Black-and-white"),
    ("c", "Multicolored"),
    ("h", "Hand colored"),
    ("m", "Mixed"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const NONPROJECTED_SUPPORT: CodeTable = &[
    (" ", "No secondary support"),
    ("a", "Canvas"),
    ("b", "Bristol board"),
    ("c", "Cardboard/illustration board"),
    ("d", "Glass"),
    ("e", "Synthetic"),
    ("f", "Skin"),
    ("g", "Textile"),
    ("h", "Metal"),
    ("i", "Plastic"),
    ("l", "Vinyl"),
    ("m", "Mixed collection"),
    ("n", "Vellum"),
    ("o", "Paper"),
    ("p", "Plaster"),
    ("q", "Hardboard"),
    ("r", "Porcelain"),
    ("s", "Stone"),
    ("t", "Wood"),
    ("u", "Unknown"),
    ("v", "Leather"),
    ("w", "Parchment"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const NONPROJECTED_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 1, width: 1, name: "Specific material designation", table: Some(NONPROJECTED_SMD) },
    LayoutEntry { offset: 2, width: 1, name: "Undefined", table: None },
    LayoutEntry { offset: 3, width: 1, name: "Color", table: Some(NONPROJECTED_COLOR) },
    LayoutEntry { offset: 4, width: 1, name: "Primary support material", table: Some(NONPROJECTED_SUPPORT) },
    LayoutEntry { offset: 5, width: 1, name: "Secondary support material", table: Some(NONPROJECTED_SUPPORT) },
];

////////////////////////////////////////////////////////////////////////
// Motion picture

const MOTION_PICTURE_SMD: CodeTable = &[
    ("c", "Film cartridge"),
    ("f", "Film cassette"),
    ("o", "Film roll"),
    ("r", "Film reel"),
    ("u", "Unspecified"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MOTION_PICTURE_COLOR: CodeTable = &[
    ("b", "Black-and-white"),
    ("c", "Multicolored"),
    ("h", "Hand colored"),
    ("m", "Mixed"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MOTION_PICTURE_PRESENTATION_FORMAT: CodeTable = &[
    ("a", "Standard sound aperture (reduced frame)"),
    ("b", "Nonanamorphic (wide-screen)"),
    ("c", "3D"),
    ("d", "Anamorphic (wide-screen)"),
    ("e", "Other wide-screen format"),
    ("f", "Standard silent aperture (full frame)"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MOTION_PICTURE_SOUND_ON_MEDIUM: CodeTable = &[
    (" ", "No sound (silent)"),
    ("a", "Sound on medium"),
    ("b", "Sound separate from medium"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

const MOTION_PICTURE_MEDIUM_FOR_SOUND: CodeTable = &[
    (" ", "No sound (silent)"),
    ("a", "Optical sound track on motion picture film"),
    ("b", "Magnetic sound track on motion picture film"),
    ("c", "Magnetic audio tape in cartridge"),
    ("d", "Sound disc"),
    ("e", "Magnetic audio tape on reel"),
    ("f", "Magnetic audio tape in cassette"),
    ("g", "Optical and magnetic sound track on motion picture film"),
    ("h", "Videotape"),
    ("i", "Videodisc"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MOTION_PICTURE_DIMENSIONS: CodeTable = &[
    ("a", "Standard 8 mm."),
    ("b", "Super 8 mm./single 8 mm."),
    ("c", "9.5 mm."),
    ("d", "16 mm."),
    ("e", "28 mm."),
    ("f", "35 mm."),
    ("g", "70 mm."),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MOTION_PICTURE_PLAYBACK_CHANNELS: CodeTable = &[
    ("k", "Mixed"),
    ("m", "Monaural"),
    ("n", "Not applicable"),
    ("q", "Quadraphonic, multichannel, or surround"),
    ("s", "Stereophonic"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MOTION_PICTURE_PRODUCTION_ELEMENTS: CodeTable = &[
    ("a", "Workprint"),
    ("b", "Trims"),
    ("c", "Outtakes"),
    ("d", "Rushes"),
    ("e", "Mixing tracks"),
    ("f", "Title bands/intertitle rolls"),
    ("g", "Production rolls"),
    ("n", "Not applicable"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MOTION_PICTURE_POSITIVE_NEGATIVE: CodeTable = &[
    ("a", "Positive"),
    ("b", "Negative"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MOTION_PICTURE_GENERATION: CodeTable = &[
    ("d", "Duplicate"),
    ("e", "Master"),
    ("o", "Original"),
    ("r", "Reference print/viewing copy"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MOTION_PICTURE_BASE_OF_FILM: CodeTable = &[
    ("a", "Safety base, undetermined"),
    ("c", "Safety base, acetate undetermined"),
    ("d", "Safety base, diacetate"),
    ("i", "Nitrate base"),
    ("m", "Mixed base (nitrate and safety)"),
    ("n", "Not applicable"),
    ("p", "Safety base, polyester"),
    ("r", "Safety base, mixed"),
    ("t", "Safety base, triacetate"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MOTION_PICTURE_REFINED_COLOR: CodeTable = &[
    ("a", "3 layer color"),
    ("b", "2 color, single strip"),
    ("c", "Undetermined 2 color"),
    ("d", "Undetermined 3 color"),
    ("e", "3 strip color"),
    ("f", "2 strip color"),
    ("g", "Red strip"),
    ("h", "Blue or green strip"),
    ("i", "Cyan strip"),
    ("j", "Magenta strip"),
    ("k", "Yellow strip"),
    ("l", "S E N 2"),
    ("m", "S E N 3"),
    ("n", "Not applicable"),
    ("p", "Sepia tone"),
    ("q", "Other tone"),
    ("r", "Tint"),
    ("s", "Tinted and toned"),
    ("t", "Stencil color"),
    ("u", "Unknown"),
    ("v", "Hand colored"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MOTION_PICTURE_COLOR_STOCK: CodeTable = &[
    ("a", "Imbibition dye transfer prints"),
    ("b", "Three-layer stock"),
    ("c", "Three layer stock, low fade"),
    ("d", "Duplitized stock"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MOTION_PICTURE_DETERIORATION: CodeTable = &[
    ("a", "None apparent"),
    ("b", "Nitrate: suspicious odor"),
    ("c", "Nitrate: pungent odor"),
    ("d", "Nitrate: brownish, discoloration, fading, dusty"),
    ("e", "Nitrate: sticky"),
    ("f", "Nitrate: frothy, bubbles, blisters"),
    ("g", "Nitrate: congealed"),
    ("h", "Nitrate: powder"),
    ("k", "Non-nitrate: detectable deterioration"),
    ("l", "Non-nitrate: advanced deterioration"),
    ("m", "Non-nitrate: disaster"),
    ("|", "No attempt to code"),
];

const MOTION_PICTURE_COMPLETENESS: CodeTable = &[
    ("c", "Complete"),
    ("i", "Incomplete"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

const MOTION_PICTURE_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 1, width: 1, name: "Specific material designation", table: Some(MOTION_PICTURE_SMD) },
    LayoutEntry { offset: 2, width: 1, name: "Undefined", table: None },
    LayoutEntry { offset: 3, width: 1, name: "Color", table: Some(MOTION_PICTURE_COLOR) },
    LayoutEntry { offset: 4, width: 1, name: "Motion picture presentation format", table: Some(MOTION_PICTURE_PRESENTATION_FORMAT) },
    LayoutEntry { offset: 5, width: 1, name: "Sound on medium or separate", table: Some(MOTION_PICTURE_SOUND_ON_MEDIUM) },
    LayoutEntry { offset: 6, width: 1, name: "Medium for sound", table: Some(MOTION_PICTURE_MEDIUM_FOR_SOUND) },
    LayoutEntry { offset: 7, width: 1, name: "Dimensions", table: Some(MOTION_PICTURE_DIMENSIONS) },
    LayoutEntry { offset: 8, width: 1, name: "Configuration of playback channels", table: Some(MOTION_PICTURE_PLAYBACK_CHANNELS) },
    LayoutEntry { offset: 9, width: 1, name: "Production elements", table: Some(MOTION_PICTURE_PRODUCTION_ELEMENTS) },
    LayoutEntry { offset: 10, width: 1, name: "Positive/negative aspect", table: Some(MOTION_PICTURE_POSITIVE_NEGATIVE) },
    LayoutEntry { offset: 11, width: 1, name: "Generation", table: Some(MOTION_PICTURE_GENERATION) },
    LayoutEntry { offset: 12, width: 1, name: "Base of film", table: Some(MOTION_PICTURE_BASE_OF_FILM) },
    LayoutEntry { offset: 13, width: 1, name: "Refined categories of color", table: Some(MOTION_PICTURE_REFINED_COLOR) },
    LayoutEntry { offset: 14, width: 1, name: "Kind of color stock or print", table: Some(MOTION_PICTURE_COLOR_STOCK) },
    LayoutEntry { offset: 15, width: 1, name: "Deterioration stage", table: Some(MOTION_PICTURE_DETERIORATION) },
    LayoutEntry { offset: 16, width: 1, name: "Completeness", table: Some(MOTION_PICTURE_COMPLETENESS) },
    LayoutEntry { offset: 17, width: 6, name: "Film inspection date", table: None },
];

////////////////////////////////////////////////////////////////////////
// Kit

const KIT_SMD: CodeTable = &[
    ("u", "Unspecified"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const KIT_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 1, width: 1, name: "Specific material designation", table: Some(KIT_SMD) },
];

////////////////////////////////////////////////////////////////////////
// Notated music

const NOTATED_MUSIC_SMD: CodeTable = &[
    ("u", "Unspecified"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const NOTATED_MUSIC_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 1, width: 1, name: "Specific material designation", table: Some(NOTATED_MUSIC_SMD) },
];

////////////////////////////////////////////////////////////////////////
// Remote-sensing image

const REMOTE_SENSING_SMD: CodeTable = &[("u", "Unspecified"), ("|", "No attempt to code")];

const REMOTE_SENSING_ALTITUDE: CodeTable = &[
    ("a", "Surface"),
    ("b", "Airborne"),
    ("c", "Spaceborne"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const REMOTE_SENSING_ATTITUDE: CodeTable = &[
    ("a", "Low oblique"),
    ("b", "High oblique"),
    ("c", "Vertical"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

const REMOTE_SENSING_CLOUD_COVER: CodeTable = &[
    ("0", "0-9%"),
    ("1", "10-19%"),
    ("2", "20-29%"),
    ("3", "30-39%"),
    ("4", "40-49%"),
    ("5", "50-59%"),
    ("6", "60-69%"),
    ("7", "70-79%"),
    ("8", "80-89%"),
    ("9", "90-100%"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

const REMOTE_SENSING_PLATFORM_CONSTRUCTION: CodeTable = &[
    ("a", "Balloon"),
    ("b", "Aircraft--low altitude"),
    ("c", "Aircraft--medium altitude"),
    ("d", "Aircraft--high altitude"),
    ("e", "Manned spacecraft"),
    ("f", "Unmanned spacecraft"),
    ("g", "Land-based remote-sensing device"),
    ("h", "Water surface-based remote-sensing device"),
    ("i", "Submersible remote-sensing device"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const REMOTE_SENSING_PLATFORM_USE: CodeTable = &[
    ("a", "Meteorological"),
    ("b", "Surface observing"),
    ("c", "Space observing"),
    ("m", "Mixed uses"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const REMOTE_SENSING_SENSOR_TYPE: CodeTable = &[
    ("a", "Active"),
    ("b", "Passive"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const REMOTE_SENSING_DATA_TYPE: CodeTable = &[
    ("aa", "Visible light"),
    ("da", "Near infrared"),
    ("db", "Middle infrared"),
    ("dc", "Far infrared"),
    ("dd", "Thermal infrared"),
    ("de", "Shortwave infrared (SWIR)"),
    ("df", "Reflective infrared"),
    ("dv", "Combinations"),
    ("dz", "Other infrared data"),
    ("ga", "Sidelooking airborne radar (SLAR)"),
    ("gb", "Synthetic aperture radar (SAR)-single frequency"),
    ("gc", "SAR-multi-frequency (multichannel)"),
    ("gd", "SAR-like polarization"),
    ("ge", "SAR-cross polarization"),
    ("gf", "Infometric SAR"),
    ("gg", "Polarmetric SAR"),
    ("gu", "Passive microwave mapping"),
    ("gz", "Other microwave data"),
    ("ja", "Far ultraviolet"),
    ("jb", "Middle ultraviolet"),
    ("jc", "Near ultraviolet"),
    ("jv", "Ultraviolet combinations"),
    ("jz", "Other ultraviolet data"),
    ("ma", "Multi-spectral, multidata"),
    ("mb", "Multi-temporal"),
    ("mm", "Combination of various data types"),
    ("nn", "Not applicable"),
    ("pa", "Sonar--water depth"),
    ("pb", "Sonar--bottom topography images, sidescan"),
    ("pc", "Sonar--bottom topography, near surface"),
    ("pd", "Sonar--bottom topography, near bottom"),
    ("pe", "Seismic surveys"),
    ("pz", "Other acoustical data"),
    ("ra", "Gravity anomalies (general)"),
    ("rb", "Free-air"),
    ("rc", "Bouger"),
    ("rd", "Isostatic"),
    ("sa", "Magnetic field"),
    ("ta", "Radiometric surveys"),
    ("uu", "Unknown"),
    ("zz", "Other"),
    ("||", "No attempt to code"),
];

const REMOTE_SENSING_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 1, width: 1, name: "Specific material designation", table: Some(REMOTE_SENSING_SMD) },
    LayoutEntry { offset: 2, width: 1, name: "Undefined", table: None },
    LayoutEntry { offset: 3, width: 1, name: "Altitude of sensor", table: Some(REMOTE_SENSING_ALTITUDE) },
    LayoutEntry { offset: 4, width: 1, name: "Attitude of sensor", table: Some(REMOTE_SENSING_ATTITUDE) },
    LayoutEntry { offset: 5, width: 1, name: "Cloud cover", table: Some(REMOTE_SENSING_CLOUD_COVER) },
    LayoutEntry { offset: 6, width: 1, name: "Platform construction type", table: Some(REMOTE_SENSING_PLATFORM_CONSTRUCTION) },
    LayoutEntry { offset: 7, width: 1, name: "Platform use category", table: Some(REMOTE_SENSING_PLATFORM_USE) },
    LayoutEntry { offset: 8, width: 1, name: "Sensor type", table: Some(REMOTE_SENSING_SENSOR_TYPE) },
    LayoutEntry { offset: 9, width: 2, name: "Data type", table: Some(REMOTE_SENSING_DATA_TYPE) },
];

////////////////////////////////////////////////////////////////////////
// Sound recording

const SOUND_SMD: CodeTable = &[
    ("d", "Sound disc"),
    ("e", "Cylinder"),
    ("g", "Sound cartridge"),
    ("i", "Sound-track film"),
    ("q", "Roll"),
    ("r", "Remote"),
    ("s", "Sound cassette"),
    ("t", "Sound-tape reel"),
    ("u", "Unspecified"),
    ("w", "Wire recording"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const SOUND_SPEED: CodeTable = &[
    ("a", "16 rpm (discs)"),
    ("b", "33 1/3 rpm (discs)"),
    ("c", "45 rpm (discs)"),
    ("d", "78 rpm (discs)"),
    ("e", "8 rpm (discs)"),
    ("f", "1.4 m. per second (discs)"),
    ("h", "120 rpm (cylinders)"),
    ("i", "160 rpm (cylinders)"),
    ("k", "15/16 ips (tapes)"),
    ("l", "1 7/8 ips (tapes)"),
    ("m", "3 3/4 ips (tapes)"),
    ("n", "Not applicable"),
    ("o", "7 1/2 ips (tapes)"),
    ("p", "15 ips (tapes)"),
    ("r", "30 ips (tape)"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const SOUND_PLAYBACK_CHANNELS: CodeTable = &[
    ("m", "Monaural"),
    ("q", "Quadraphonic, multichannel, or surround"),
    ("s", "Stereophonic"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const SOUND_GROOVE: CodeTable = &[
    ("m", "Microgroove/fine"),
    ("n", "Not applicable"),
    ("s", "Coarse/standard"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const SOUND_DIMENSIONS: CodeTable = &[
    ("a", "3 in. diameter"),
    ("b", "5 in. diameter"),
    ("c", "7 in. diameter"),
    ("d", "10 in. diameter"),
    ("e", "12 in. diameter"),
    ("f", "16 in. diameter"),
    ("g", "4 3/4 in. or 12 cm. diameter"),
    ("j", "3 7/8 x 2 1/2 in."),
    ("n", "Not applicable"),
    ("o", "5 1/4 x 3 7/8 in."),
    ("s", "2 3/4 x 4 in."),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const SOUND_TAPE_WIDTH: CodeTable = &[
    ("l", "1/8 in."),
    ("m", "1/4 in."),
    ("n", "Not applicable"),
    ("o", "1/2 in."),
    ("p", "1 in."),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const SOUND_TAPE_CONFIGURATION: CodeTable = &[
    ("a", "Full (1) track"),
    ("b", "Half (2) track"),
    ("c", "Quarter (4) track"),
    ("d", "Eight track"),
    ("e", "Twelve track"),
    ("f", "Sixteen track"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const SOUND_KIND_OF_DISC: CodeTable = &[
    ("a", "Master tape"),
    ("b", "Tape duplication master"),
    ("d", "Disc master (negative)"),
    ("i", "Instantaneous recording"),
    ("m", "Mass-produced"),
    ("n", "Not applicable"),
    ("r", "Mother (positive)"),
    ("s", "Stamper (negative)"),
    ("t", "Test pressing"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const SOUND_KIND_OF_MATERIAL: CodeTable = &[
    ("a", "Lacquer coating"),
    ("b", "Cellulose nitrate"),
    ("c", "Acetate tape with ferrous oxide"),
    ("g", "Glass with lacquer"),
    ("i", "Aluminum with lacquer"),
    ("l", "Metal"),
    ("m", "Plastic with metal"),
    ("n", "Not applicable"),
    ("p", "Plastic"),
    ("r", "Paper with lacquer or ferrous oxide"),
    ("s", "Shellac"),
    ("u", "Unknown"),
    ("w", "Wax"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const SOUND_KIND_OF_CUTTING: CodeTable = &[
    ("h", "Hill-and-dale cutting"),
    ("l", "Lateral or combined cutting"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

const SOUND_PLAYBACK_CHARACTERISTICS: CodeTable = &[
    ("a", "NAB standard"),
    ("b", "CCIR standard"),
    ("c", "Dolby-B encoded"),
    ("d", "dbx encoded"),
    ("e", "Digital recording"),
    ("f", "Dolby-A encoded"),
    ("g", "Dolby-C encoded"),
    ("h", "CX encoded"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const SOUND_CAPTURE_AND_STORAGE: CodeTable = &[
    ("a", "Acoustical capture, direct storage"),
    ("b", "Direct storage, not acoustical"),
    ("d", "Digital storage"),
    ("e", "Analog electrical storage"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const SOUND_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 1, width: 1, name: "Specific material designation", table: Some(SOUND_SMD) },
    LayoutEntry { offset: 2, width: 1, name: "Undefined", table: None },
    LayoutEntry { offset: 3, width: 1, name: "Speed", table: Some(SOUND_SPEED) },
    LayoutEntry { offset: 4, width: 1, name: "Configuration of playback channels", table: Some(SOUND_PLAYBACK_CHANNELS) },
    LayoutEntry { offset: 5, width: 1, name: "Groove width/groove pitch", table: Some(SOUND_GROOVE) },
    LayoutEntry { offset: 6, width: 1, name: "Dimensions", table: Some(SOUND_DIMENSIONS) },
    LayoutEntry { offset: 7, width: 1, name: "Tape width", table: Some(SOUND_TAPE_WIDTH) },
    LayoutEntry { offset: 8, width: 1, name: "Tape configuration", table: Some(SOUND_TAPE_CONFIGURATION) },
    LayoutEntry { offset: 9, width: 1, name: "Kind of disc, cylinder, or tape", table: Some(SOUND_KIND_OF_DISC) },
    LayoutEntry { offset: 10, width: 1, name: "Kind of material", table: Some(SOUND_KIND_OF_MATERIAL) },
    LayoutEntry { offset: 11, width: 1, name: "Kind of cutting", table: Some(SOUND_KIND_OF_CUTTING) },
    LayoutEntry { offset: 12, width: 1, name: "Special playback characteristics", table: Some(SOUND_PLAYBACK_CHARACTERISTICS) },
    LayoutEntry { offset: 13, width: 1, name: "Capture and storage technique", table: Some(SOUND_CAPTURE_AND_STORAGE) },
];

////////////////////////////////////////////////////////////////////////
// Text

const TEXT_SMD: CodeTable = &[
    ("a", "Regular print"),
    ("b", "Large print"),
    ("c", "Braille"),
    ("d", "Loose-leaf"),
    ("u", "Unspecified"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const TEXT_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 1, width: 1, name: "Specific material designation", table: Some(TEXT_SMD) },
];

////////////////////////////////////////////////////////////////////////
// Videorecording

const VIDEO_SMD: CodeTable = &[
    ("c", "Videocartridge"),
    ("d", "Videodisc"),
    ("f", "Videocassette"),
    ("r", "Videoreel"),
    ("u", "Unspecified"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const VIDEO_COLOR: CodeTable = &[
    ("a", "One color"),
    ("b", "Black-and-white"),
    ("c", "Multicolored"),
    ("m", "Mixed"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const VIDEO_FORMAT: CodeTable = &[
    ("a", "Beta (1/2 in., videocassette)"),
    ("b", "VHS (1/2 in., videocassette)"),
    ("c", "U-matic (3/4 in., videocassette)"),
    ("d", "EIAJ (1/2 in., reel)"),
    ("e", "Type C (1 in., reel)"),
    ("f", "Quadruplex (1 in. or 2 in., reel)"),
    ("g", "Laserdisc"),
    ("h", "CED (Capacitance Electronic Disc) videodisc"),
    ("i", "Betacam (1/2 in., videocassette)"),
    ("j", "Betacam SP (1/2 in., videocassette)"),
    ("k", "Super-VHS (1/2 in., videocassette)"),
    ("m", "M-II (1/2 in., videocassette)"),
    ("o", "D-2 (3/4 in., videocassette)"),
    ("p", "8 mm."),
    ("q", "Hi-8 mm."),
    ("s", "Blu-ray disc"),
    ("u", "Unknown"),
    ("v", "DVD"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const VIDEO_SOUND_ON_MEDIUM: CodeTable = &[
    (" ", "No sound (silent)"),
    ("a", "Sound on medium"),
    ("b", "Sound separate from medium"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

const VIDEO_MEDIUM_FOR_SOUND: CodeTable = &[
    (" ", "No sound (silent)"),
    ("a", "Optical sound track on motion picture film"),
    ("b", "Magnetic sound track on motion picture film"),
    ("c", "Magnetic audio tape in cartridge"),
    ("d", "Sound disc"),
    ("e", "Magnetic audio tape on reel"),
    ("f", "Magnetic audio tape in cassette"),
    ("g", "Optical and magnetic sound track on motion picture film"),
    ("h", "Videotape"),
    ("i", "Videodisc"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const VIDEO_DIMENSIONS: CodeTable = &[
    ("a", "8 mm."),
    ("m", "1/4 in."),
    ("o", "1/2 in."),
    ("p", "1 in."),
    ("q", "2 in."),
    ("r", "3/4 in."),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const VIDEO_PLAYBACK_CHANNELS: CodeTable = &[
    ("k", "Mixed"),
    ("m", "Monaural"),
    ("n", "Not applicable"),
    ("q", "Quadraphonic, multichannel, or surround"),
    ("s", "Stereophonic"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const VIDEO_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 1, width: 1, name: "Specific material designation", table: Some(VIDEO_SMD) },
    LayoutEntry { offset: 2, width: 1, name: "Undefined", table: None },
    LayoutEntry { offset: 3, width: 1, name: "Color", table: Some(VIDEO_COLOR) },
    LayoutEntry { offset: 4, width: 1, name: "Videorecording format", table: Some(VIDEO_FORMAT) },
    LayoutEntry { offset: 5, width: 1, name: "Sound on medium or separate", table: Some(VIDEO_SOUND_ON_MEDIUM) },
    LayoutEntry { offset: 6, width: 1, name: "Medium for sound", table: Some(VIDEO_MEDIUM_FOR_SOUND) },
    LayoutEntry { offset: 7, width: 1, name: "Dimensions", table: Some(VIDEO_DIMENSIONS) },
    LayoutEntry { offset: 8, width: 1, name: "Configuration of playback channels", table: Some(VIDEO_PLAYBACK_CHANNELS) },
];

////////////////////////////////////////////////////////////////////////
// Unspecified

const UNSPECIFIED_SMD: CodeTable = &[
    ("m", "Multiple physical forms"),
    ("u", "Unspecified"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const UNSPECIFIED_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 1, width: 1, name: "Specific material designation", table: Some(UNSPECIFIED_SMD) },
];

fn category_layout(category: char) -> &'static [LayoutEntry] {
    match category {
        'a' => MAP_LAYOUT,
        'c' => ELECTRONIC_LAYOUT,
        'd' => GLOBE_LAYOUT,
        'f' => TACTILE_LAYOUT,
        'g' => PROJECTED_LAYOUT,
        'h' => MICROFORM_LAYOUT,
        'k' => NONPROJECTED_LAYOUT,
        'm' => MOTION_PICTURE_LAYOUT,
        'o' => KIT_LAYOUT,
        'q' => NOTATED_MUSIC_LAYOUT,
        'r' => REMOTE_SENSING_LAYOUT,
        's' => SOUND_LAYOUT,
        't' => TEXT_LAYOUT,
        'v' => VIDEO_LAYOUT,
        'z' => UNSPECIFIED_LAYOUT,
        _ => &[],
    }
}

/// Decode all 007 occurrences of a record, one descriptor set per
/// occurrence, in record order. A record without a 007 yields an empty
/// sequence.
#[must_use]
pub fn describe_007(record: &Record) -> Vec<Cf007Desc> {
    record
        .control_fields("007")
        .iter()
        .map(|text| describe_007_occurrence(text))
        .collect()
}

/// Decode one 007 occurrence.
///
/// An unrecognized category of material yields just the byte 00 entry;
/// the rest of the field has no defined interpretation.
#[must_use]
pub fn describe_007_occurrence(text: &str) -> Cf007Desc {
    let mut desc = Cf007Desc::new();
    let (label, cv) = describe_at(text, 0, &CATEGORY_ENTRY);
    desc.insert(label, cv);

    let category = text.chars().next().unwrap_or('\0');
    for entry in category_layout(category) {
        let (label, cv) = describe_at(text, entry.offset, entry);
        desc.insert(label, cv);
    }
    desc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leader::Leader;

    #[test]
    fn test_no_007_yields_empty_sequence() {
        let rec = Record::new(Leader::new("00925nam a2200229 a 4500"));
        assert!(describe_007(&rec).is_empty());
    }

    #[test]
    fn test_text_007() {
        let desc = describe_007_occurrence("ta");
        assert_eq!(desc.len(), 2);
        assert_eq!(desc["(00/01) Category of material"].label, "Text");
        assert_eq!(
            desc["(01/01) Specific material designation"].label,
            "Regular print"
        );
    }

    #[test]
    fn test_electronic_resource_007() {
        let desc = describe_007_occurrence("cr un---------");
        assert_eq!(
            desc["(00/01) Category of material"].label,
            "Electronic resource"
        );
        assert_eq!(desc["(01/01) Specific material designation"].label, "Remote");
        assert_eq!(desc["(03/01) Color"].code, "u");
        assert_eq!(desc["(03/01) Color"].label, "Unknown");
        assert_eq!(desc["(04/01) Dimensions"].label, "Not applicable");
        let depth = &desc["(06/03) Image bit depth"];
        assert_eq!(depth.code, "---");
        assert_eq!(depth.label, "Unknown");
        assert_eq!((depth.offset, depth.width), (6, 3));
    }

    #[test]
    fn test_videorecording_007() {
        let desc = describe_007_occurrence("vd cvaizq");
        assert_eq!(desc["(00/01) Category of material"].label, "Videorecording");
        assert_eq!(desc["(04/01) Videorecording format"].label, "DVD");
        assert_eq!(desc["(03/01) Color"].label, "Multicolored");
    }

    #[test]
    fn test_multiple_occurrences_preserve_order() {
        let mut rec = Record::new(Leader::new("00925nam a2200229 a 4500"));
        rec.add_control_field_str("007", "ta");
        rec.add_control_field_str("007", "sd fsngnnmmned");
        let sets = describe_007(&rec);
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0]["(00/01) Category of material"].label, "Text");
        assert_eq!(
            sets[1]["(00/01) Category of material"].label,
            "Sound recording"
        );
        assert_eq!(
            sets[1]["(01/01) Specific material designation"].label,
            "Sound disc"
        );
    }

    #[test]
    fn test_unrecognized_category_is_partial() {
        let desc = describe_007_occurrence("xq");
        assert_eq!(desc.len(), 1);
        assert_eq!(desc["(00/01) Category of material"].code, "x");
        assert_eq!(desc["(00/01) Category of material"].label, "");
    }

    #[test]
    fn test_empty_007_still_has_category_entry() {
        let desc = describe_007_occurrence("");
        assert_eq!(desc.len(), 1);
        assert_eq!(desc["(00/01) Category of material"].code, "");
    }

    #[test]
    fn test_truncated_007_degrades_to_empty_codes() {
        let desc = describe_007_occurrence("sd");
        assert_eq!(desc["(03/01) Speed"].code, "");
        assert_eq!(desc["(03/01) Speed"].label, "");
    }
}
