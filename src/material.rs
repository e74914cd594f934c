//! Material types and the material-specific fixed-field layouts.
//!
//! Control fields 006 and 008 interpret part of their contents according
//! to a material type: seven byte-layout variants covering books, computer
//! files, maps, music, continuing resources, visual materials, and mixed
//! materials. For 008 the material type is resolved from the Leader (type
//! of record, and for language material also the bibliographic level);
//! for 006 it is resolved from the field's own first byte.
//!
//! The layouts here are expressed at 008 positions 18-34. A 006 field
//! carries the same positions shifted to 01-17, so the 006 decoder reuses
//! these layouts rebased by -17.
//!
//! Code tables follow the MARC 21 fixed-field documentation:
//! <https://www.loc.gov/marc/bibliographic/bd008.html>

use crate::describe::{CodeTable, LayoutEntry};
use serde::{Deserialize, Serialize};

/// Material-type variant selector for 006/008 positions 18-34.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialType {
    /// Books (language material that is not a continuing resource).
    Book,
    /// Computer files / electronic resources.
    ComputerFile,
    /// Maps and other cartographic material.
    Map,
    /// Notated music and sound recordings.
    Music,
    /// Continuing resources (serials and integrating resources).
    ContinuingResource,
    /// Visual materials.
    VisualMaterial,
    /// Mixed materials.
    MixedMaterial,
}

impl MaterialType {
    /// Resolve the material type from Leader bytes 6 and 7.
    ///
    /// Language material (`a`) splits on the bibliographic level: serial
    /// levels select the continuing-resources layout, monographic levels
    /// the books layout. Unrecognized combinations yield `None`.
    #[must_use]
    pub fn from_leader(type_of_record: char, bibliographic_level: char) -> Option<Self> {
        match type_of_record {
            'a' => match bibliographic_level {
                'a' | 'c' | 'd' | 'm' => Some(MaterialType::Book),
                'b' | 'i' | 's' => Some(MaterialType::ContinuingResource),
                _ => None,
            },
            't' => Some(MaterialType::Book),
            'm' => Some(MaterialType::ComputerFile),
            'e' | 'f' => Some(MaterialType::Map),
            'c' | 'd' | 'i' | 'j' => Some(MaterialType::Music),
            'g' | 'k' | 'o' | 'r' => Some(MaterialType::VisualMaterial),
            'p' => Some(MaterialType::MixedMaterial),
            _ => None,
        }
    }

    /// Resolve the material type from a 006 form-of-material code (byte 0).
    ///
    /// Unlike the Leader, 006 has an explicit code (`s`) for continuing
    /// resources, so no bibliographic level is involved.
    #[must_use]
    pub fn from_006_code(code: char) -> Option<Self> {
        match code {
            'a' | 't' => Some(MaterialType::Book),
            'm' => Some(MaterialType::ComputerFile),
            'e' | 'f' => Some(MaterialType::Map),
            'c' | 'd' | 'i' | 'j' => Some(MaterialType::Music),
            's' => Some(MaterialType::ContinuingResource),
            'g' | 'k' | 'o' | 'r' => Some(MaterialType::VisualMaterial),
            'p' => Some(MaterialType::MixedMaterial),
            _ => None,
        }
    }

    /// The layout for 008 positions 18-34 under this material type.
    pub(crate) fn layout(self) -> &'static [LayoutEntry] {
        match self {
            MaterialType::Book => BOOK_LAYOUT,
            MaterialType::ComputerFile => COMPUTER_FILE_LAYOUT,
            MaterialType::Map => MAP_LAYOUT,
            MaterialType::Music => MUSIC_LAYOUT,
            MaterialType::ContinuingResource => CONTINUING_RESOURCE_LAYOUT,
            MaterialType::VisualMaterial => VISUAL_MATERIAL_LAYOUT,
            MaterialType::MixedMaterial => MIXED_MATERIAL_LAYOUT,
        }
    }
}

/// 006 byte 0, form of material.
pub(crate) const FORM_OF_MATERIAL: CodeTable = &[
    ("a", "Language material"),
    ("c", "Notated music"),
    ("d", "Manuscript notated music"),
    ("e", "Cartographic material"),
    ("f", "Manuscript cartographic material"),
    ("g", "Projected medium"),
    ("i", "Nonmusical sound recording"),
    ("j", "Musical sound recording"),
    ("k", "Two-dimensional nonprojectable graphic"),
    ("m", "Computer file/Electronic resource"),
    ("o", "Kit"),
    ("p", "Mixed materials"),
    ("r", "Three-dimensional artifact or naturally occurring object"),
    ("s", "Serial/Integrating resource"),
    ("t", "Manuscript language material"),
];

////////////////////////////////////////////////////////////////////////
// Books

const BOOK_ILLUSTRATIONS: CodeTable = &[
    (" ", "No illustrations"),
    ("a", "Illustrations"),
    ("b", "Maps"),
    ("c", "Portraits"),
    ("d", "Charts"),
    ("e", "Plans"),
    ("f", "Plates"),
    ("g", "Music"),
    ("h", "Facsimiles"),
    ("i", "Coats of arms"),
    ("j", "Genealogical tables"),
    ("k", "Forms"),
    ("l", "Samples"),
    ("m", "Phonodisc, phonowire, etc."),
    ("o", "Photographs"),
    ("p", "Illuminations"),
    ("|", "No attempt to code"),
];

const BOOK_TARGET_AUDIENCE: CodeTable = &[
    (" ", "Unknown or not specified"),
    ("a", "Preschool"),
    ("b", "Primary"),
    ("c", "Pre-adolescent"),
    ("d", "Adolescent"),
    ("e", "Adult"),
    ("f", "Specialized"),
    ("g", "General"),
    ("j", "Juvenile"),
    ("|", "No attempt to code"),
];

const BOOK_FORM_OF_ITEM: CodeTable = &[
    (" ", "None of the following"),
    ("a", "Microfilm"),
    ("b", "Microfiche"),
    ("c", "Microopaque"),
    ("d", "Large print"),
    ("f", "Braille"),
    ("o", "Online"),
    ("q", "Direct electronic"),
    ("r", "Regular print reproduction"),
    ("s", "Electronic"),
    ("|", "No attempt to code"),
];

const BOOK_NATURE_OF_CONTENTS: CodeTable = &[
    (" ", "No specified nature of contents"),
    ("a", "Abstracts/summaries"),
    ("b", "Bibliographies"),
    ("c", "Catalogs"),
    ("d", "Dictionaries"),
    ("e", "Encyclopedias"),
    ("f", "Handbooks"),
    ("g", "Legal articles"),
    ("i", "Indexes"),
    ("j", "Patent document"),
    ("k", "Discographies"),
    ("l", "Legislation"),
    ("m", "Theses"),
    ("n", "Surveys of literature in a subject area"),
    ("o", "Reviews"),
    ("p", "Programmed texts"),
    ("q", "Filmographies"),
    ("r", "Directories"),
    ("s", "Statistics"),
    ("t", "Technical reports"),
    ("u", "Standards/specifications"),
    ("v", "Legal cases and case notes"),
    ("w", "Law reports and digests"),
    ("y", "Yearbooks"),
    ("z", "Treaties"),
    ("2", "Offprints"),
    ("5", "Calendars"),
    ("6", "Comics/graphic novels"),
    ("|", "No attempt to code"),
];

const BOOK_GOVERNMENT_PUBLICATION: CodeTable = &[
    (" ", "Not a government publication"),
    ("a", "Autonomous or semi-autonomous component"),
    ("c", "Multilocal"),
    ("f", "Federal/national"),
    ("i", "International intergovernmental"),
    ("l", "Local"),
    ("m", "Multistate"),
    ("o", "Government publication-level undetermined"),
    ("s", "State, provincial, territorial, dependent, etc."),
    ("u", "Unknown if item is government publication"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const BOOK_CONFERENCE_PUBLICATION: CodeTable = &[
    ("0", "Not a conference publication"),
    ("1", "Conference publication"),
    ("|", "No attempt to code"),
];

const FESTSCHRIFT: CodeTable = &[
    ("0", "Not a festschrift"),
    ("1", "Festschrift"),
    ("|", "No attempt to code"),
];

const BOOK_INDEX: CodeTable = &[
    ("0", "No index"),
    ("1", "Index present"),
    ("|", "No attempt to code"),
];

const LITERARY_FORM: CodeTable = &[
    ("0", "Not fiction (not further specified)"),
    ("1", "Fiction (not further specified)"),
    ("d", "Dramas"),
    ("e", "Essays"),
    ("f", "Novels"),
    ("h", "Humor, satires, etc."),
    ("i", "Letters"),
    ("j", "Short stories"),
    ("m", "Mixed forms"),
    ("p", "Poetry"),
    ("s", "Speeches"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

const BIOGRAPHY: CodeTable = &[
    (" ", "No biographical material"),
    ("a", "Autobiography"),
    ("b", "Individual biography"),
    ("c", "Collective biography"),
    ("d", "Contains biographical information"),
    ("|", "No attempt to code"),
];

const BOOK_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 18, width: 1, name: "Illustrations", table: Some(BOOK_ILLUSTRATIONS) },
    LayoutEntry { offset: 19, width: 1, name: "Illustrations", table: Some(BOOK_ILLUSTRATIONS) },
    LayoutEntry { offset: 20, width: 1, name: "Illustrations", table: Some(BOOK_ILLUSTRATIONS) },
    LayoutEntry { offset: 21, width: 1, name: "Illustrations", table: Some(BOOK_ILLUSTRATIONS) },
    LayoutEntry { offset: 22, width: 1, name: "Target audience", table: Some(BOOK_TARGET_AUDIENCE) },
    LayoutEntry { offset: 23, width: 1, name: "Form of item", table: Some(BOOK_FORM_OF_ITEM) },
    LayoutEntry { offset: 24, width: 1, name: "Nature of contents", table: Some(BOOK_NATURE_OF_CONTENTS) },
    LayoutEntry { offset: 25, width: 1, name: "Nature of contents", table: Some(BOOK_NATURE_OF_CONTENTS) },
    LayoutEntry { offset: 26, width: 1, name: "Nature of contents", table: Some(BOOK_NATURE_OF_CONTENTS) },
    LayoutEntry { offset: 27, width: 1, name: "Nature of contents", table: Some(BOOK_NATURE_OF_CONTENTS) },
    LayoutEntry { offset: 28, width: 1, name: "Government publication", table: Some(BOOK_GOVERNMENT_PUBLICATION) },
    LayoutEntry { offset: 29, width: 1, name: "Conference publication", table: Some(BOOK_CONFERENCE_PUBLICATION) },
    LayoutEntry { offset: 30, width: 1, name: "Festschrift", table: Some(FESTSCHRIFT) },
    LayoutEntry { offset: 31, width: 1, name: "Index", table: Some(BOOK_INDEX) },
    LayoutEntry { offset: 32, width: 1, name: "Undefined", table: None },
    LayoutEntry { offset: 33, width: 1, name: "Literary form", table: Some(LITERARY_FORM) },
    LayoutEntry { offset: 34, width: 1, name: "Biography", table: Some(BIOGRAPHY) },
];

////////////////////////////////////////////////////////////////////////
// Computer files

const COMPUTER_FILE_TARGET_AUDIENCE: CodeTable = &[
    (" ", "Unknown or not specified"),
    ("a", "Preschool"),
    ("b", "Primary"),
    ("c", "Pre-adolescent"),
    ("d", "Adolescent"),
    ("e", "Adult"),
    ("f", "Specialized"),
    ("g", "General"),
    ("j", "Juvenile"),
    ("|", "No attempt to code"),
];

const COMPUTER_FILE_FORM_OF_ITEM: CodeTable = &[
    (" ", "Unknown or not specified"),
    ("o", "Online"),
    ("q", "Direct electronic"),
    ("|", "No attempt to code"),
];

const COMPUTER_FILE_GOVERNMENT_PUBLICATION: CodeTable = &[
    (" ", "Not a government publication"),
    ("a", "Autonomous or semi-autonomous component"),
    ("c", "Multilocal"),
    ("f", "Federal/national"),
    ("i", "International intergovernmental"),
    ("l", "Local"),
    ("m", "Multistate"),
    ("o", "Government publication-level undetermined"),
    ("s", "State, provincial, territorial, dependent, etc."),
    ("u", "Unknown if item is government publication"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const TYPE_OF_COMPUTER_FILE: CodeTable = &[
    ("a", "Numeric data"),
    ("b", "Computer program"),
    ("c", "Representational"),
    ("d", "Document"),
    ("e", "Bibliographic data"),
    ("f", "Font"),
    ("g", "Game"),
    ("h", "Sound"),
    ("i", "Interactive multimedia"),
    ("j", "Online system or service"),
    ("m", "Combination"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const COMPUTER_FILE_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 18, width: 4, name: "Undefined", table: None },
    LayoutEntry { offset: 22, width: 1, name: "Target audience", table: Some(COMPUTER_FILE_TARGET_AUDIENCE) },
    LayoutEntry { offset: 23, width: 1, name: "Form of item", table: Some(COMPUTER_FILE_FORM_OF_ITEM) },
    LayoutEntry { offset: 24, width: 2, name: "Undefined", table: None },
    LayoutEntry { offset: 26, width: 1, name: "Type of computer file", table: Some(TYPE_OF_COMPUTER_FILE) },
    LayoutEntry { offset: 27, width: 1, name: "Undefined", table: None },
    LayoutEntry { offset: 28, width: 1, name: "Government publication", table: Some(COMPUTER_FILE_GOVERNMENT_PUBLICATION) },
    LayoutEntry { offset: 29, width: 6, name: "Undefined", table: None },
];

////////////////////////////////////////////////////////////////////////
// Maps

const MAP_RELIEF: CodeTable = &[
    (" ", "No relief shown"),
    ("a", "Contours"),
    ("b", "Shading"),
    ("c", "Gradient and bathymetric tints"),
    ("d", "Hachures"),
    ("e", "Bathymetry/soundings"),
    ("f", "Form lines"),
    ("g", "Spot heights"),
    ("i", "Pictorially"),
    ("j", "Land forms"),
    ("k", "Bathymetry/isolines"),
    ("m", "Rock drawings"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MAP_PROJECTION: CodeTable = &[
    ("  ", "Projection not specified"),
    ("aa", "Aitoff"),
    ("ab", "Gnomonic"),
    ("ac", "Lambert's azimuthal equal area"),
    ("ad", "Orthographic"),
    ("ae", "Azimuthal equidistant"),
    ("af", "Stereographic"),
    ("ag", "General vertical near-sided"),
    ("am", "Modified stereographic for Alaska"),
    ("an", "Chamberlin trimetric"),
    ("ap", "Polar stereographic"),
    ("au", "Azimuthal, specific type unknown"),
    ("az", "Azimuthal, other"),
    ("ba", "Gall"),
    ("bb", "Goode's homolographic"),
    ("bc", "Lambert's cylindrical equal area"),
    ("bd", "Mercator"),
    ("be", "Miller"),
    ("bf", "Mollweide"),
    ("bg", "Sinusoidal"),
    ("bh", "Transverse Mercator"),
    ("bi", "Gauss-Kruger"),
    ("bj", "Equirectangular"),
    ("bk", "Krovak"),
    ("bl", "Cassini-Soldner"),
    ("bo", "Oblique Mercator"),
    ("br", "Robinson"),
    ("bs", "Space oblique Mercator"),
    ("bu", "Cylindrical, specific type unknown"),
    ("bz", "Cylindrical, other"),
    ("ca", "Albers equal area"),
    ("cb", "Bonne"),
    ("cc", "Lambert's conformal conic"),
    ("ce", "Equidistant conic"),
    ("cp", "Polyconic"),
    ("cu", "Conic, specific type unknown"),
    ("cz", "Conic, other"),
    ("da", "Armadillo"),
    ("db", "Butterfly"),
    ("dc", "Eckert"),
    ("dd", "Goode's homolosine"),
    ("de", "Miller's bipolar oblique conformal conic"),
    ("df", "Van Der Grinten"),
    ("dg", "Dimaxion"),
    ("dh", "Cordiform"),
    ("dl", "Lambert conformal"),
    ("zz", "Other"),
    ("||", "No attempt to code"),
];

const TYPE_OF_CARTOGRAPHIC_MATERIAL: CodeTable = &[
    ("a", "Single map"),
    ("b", "Map series"),
    ("c", "Map serial"),
    ("d", "Globe"),
    ("e", "Atlas"),
    ("f", "Separate supplement to another work"),
    ("g", "Bound as part of another work"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MAP_GOVERNMENT_PUBLICATION: CodeTable = &[
    (" ", "Not a government publication"),
    ("a", "Autonomous or semi-autonomous component"),
    ("c", "Multilocal"),
    ("f", "Federal/national"),
    ("i", "International intergovernmental"),
    ("l", "Local"),
    ("m", "Multistate"),
    ("o", "Government publication-level undetermined"),
    ("s", "State, provincial, territorial, dependent, etc."),
    ("u", "Unknown if item is government publication"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MAP_FORM_OF_ITEM: CodeTable = &[
    (" ", "None of the following"),
    ("a", "Microfilm"),
    ("b", "Microfiche"),
    ("c", "Microopaque"),
    ("d", "Large print"),
    ("f", "Braille"),
    ("o", "Online"),
    ("q", "Direct electronic"),
    ("r", "Regular print reproduction"),
    ("s", "Electronic"),
    ("|", "No attempt to code"),
];

const MAP_INDEX: CodeTable = &[
    ("0", "No index"),
    ("1", "Index present"),
    ("|", "No attempt to code"),
];

const MAP_SPECIAL_FORMAT: CodeTable = &[
    (" ", "No specified special format characteristics"),
    ("e", "Manuscript"),
    ("j", "Picture card, post card"),
    ("k", "Calendar"),
    ("l", "Puzzle"),
    ("n", "Game"),
    ("o", "Wall map"),
    ("p", "Playing cards"),
    ("r", "Loose-leaf"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MAP_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 18, width: 1, name: "Relief", table: Some(MAP_RELIEF) },
    LayoutEntry { offset: 19, width: 1, name: "Relief", table: Some(MAP_RELIEF) },
    LayoutEntry { offset: 20, width: 1, name: "Relief", table: Some(MAP_RELIEF) },
    LayoutEntry { offset: 21, width: 1, name: "Relief", table: Some(MAP_RELIEF) },
    LayoutEntry { offset: 22, width: 2, name: "Projection", table: Some(MAP_PROJECTION) },
    LayoutEntry { offset: 24, width: 1, name: "Undefined", table: None },
    LayoutEntry { offset: 25, width: 1, name: "Type of cartographic material", table: Some(TYPE_OF_CARTOGRAPHIC_MATERIAL) },
    LayoutEntry { offset: 26, width: 2, name: "Undefined", table: None },
    LayoutEntry { offset: 28, width: 1, name: "Government publication", table: Some(MAP_GOVERNMENT_PUBLICATION) },
    LayoutEntry { offset: 29, width: 1, name: "Form of item", table: Some(MAP_FORM_OF_ITEM) },
    LayoutEntry { offset: 30, width: 1, name: "Undefined", table: None },
    LayoutEntry { offset: 31, width: 1, name: "Index", table: Some(MAP_INDEX) },
    LayoutEntry { offset: 32, width: 1, name: "Undefined", table: None },
    LayoutEntry { offset: 33, width: 1, name: "Special format characteristics", table: Some(MAP_SPECIAL_FORMAT) },
    LayoutEntry { offset: 34, width: 1, name: "Special format characteristics", table: Some(MAP_SPECIAL_FORMAT) },
];

////////////////////////////////////////////////////////////////////////
// Music

const FORM_OF_COMPOSITION: CodeTable = &[
    ("an", "Anthems"),
    ("bd", "Ballads"),
    ("bg", "Bluegrass music"),
    ("bl", "Blues"),
    ("bt", "Ballets"),
    ("ca", "Chaconnes"),
    ("cb", "Chants, other religions"),
    ("cc", "Chant, Christian"),
    ("cg", "Concerti grossi"),
    ("ch", "Chorales"),
    ("cl", "Chorale preludes"),
    ("cn", "Canons and rounds"),
    ("co", "Concertos"),
    ("cp", "Chansons, polyphonic"),
    ("cr", "Carols"),
    ("cs", "Chance compositions"),
    ("ct", "Cantatas"),
    ("cy", "Country music"),
    ("cz", "Canzonas"),
    ("df", "Dance forms"),
    ("dv", "Divertimentos, serenades, cassations, divertissements, and notturni"),
    ("fg", "Fugues"),
    ("fl", "Flamenco"),
    ("fm", "Folk music"),
    ("ft", "Fantasias"),
    ("gm", "Gospel music"),
    ("hy", "Hymns"),
    ("jz", "Jazz"),
    ("mc", "Musical revues and comedies"),
    ("md", "Madrigals"),
    ("mi", "Minuets"),
    ("mo", "Motets"),
    ("mp", "Motion picture music"),
    ("mr", "Marches"),
    ("ms", "Masses"),
    ("mu", "Multiple forms"),
    ("mz", "Mazurkas"),
    ("nc", "Nocturnes"),
    ("nn", "Not applicable"),
    ("op", "Operas"),
    ("or", "Oratorios"),
    ("ov", "Overtures"),
    ("pg", "Program music"),
    ("pm", "Passion music"),
    ("po", "Polonaises"),
    ("pp", "Popular music"),
    ("pr", "Preludes"),
    ("ps", "Passacaglias"),
    ("pt", "Part-songs"),
    ("pv", "Pavans"),
    ("rc", "Rock music"),
    ("rd", "Rondos"),
    ("rg", "Ragtime music"),
    ("ri", "Ricercars"),
    ("rp", "Rhapsodies"),
    ("rq", "Requiems"),
    ("sd", "Square dance music"),
    ("sg", "Songs"),
    ("sn", "Sonatas"),
    ("sp", "Symphonic poems"),
    ("st", "Studies and exercises"),
    ("su", "Suites"),
    ("sy", "Symphonies"),
    ("tc", "Toccatas"),
    ("tl", "Teatro lirico"),
    ("ts", "Trio-sonatas"),
    ("uu", "Unknown"),
    ("vi", "Villancicos"),
    ("vr", "Variations"),
    ("wz", "Waltzes"),
    ("za", "Zarzuelas"),
    ("zz", "Other"),
    ("||", "No attempt to code"),
];

const FORMAT_OF_MUSIC: CodeTable = &[
    ("a", "Full score"),
    ("b", "Miniature or study score"),
    ("c", "Accompaniment reduced for keyboard"),
    ("d", "Voice score with accompaniment omitted"),
    ("e", "Condensed score or piano-conductor score"),
    ("g", "Close score"),
    ("h", "Chorus score"),
    ("i", "Condensed score"),
    ("j", "Performer-conductor part"),
    ("k", "Vocal score"),
    ("l", "Score"),
    ("m", "Multiple score formats"),
    ("n", "Not applicable"),
    ("p", "Piano score"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MUSIC_TARGET_AUDIENCE: CodeTable = &[
    (" ", "Unknown or not specified"),
    ("a", "Preschool"),
    ("b", "Primary"),
    ("c", "Pre-adolescent"),
    ("d", "Adolescent"),
    ("e", "Adult"),
    ("f", "Specialized"),
    ("g", "General"),
    ("j", "Juvenile"),
    ("|", "No attempt to code"),
];

const MUSIC_FORM_OF_ITEM: CodeTable = &[
    (" ", "None of the following"),
    ("a", "Microfilm"),
    ("b", "Microfiche"),
    ("c", "Microopaque"),
    ("d", "Large print"),
    ("f", "Braille"),
    ("o", "Online"),
    ("q", "Direct electronic"),
    ("r", "Regular print reproduction"),
    ("s", "Electronic"),
    ("|", "No attempt to code"),
];

const MUSIC_PARTS: CodeTable = &[
    (" ", "No parts in hand or not specified"),
    ("d", "Instrumental and vocal parts"),
    ("e", "Instrumental parts"),
    ("f", "Vocal parts"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

const ACCOMPANYING_MATTER: CodeTable = &[
    (" ", "No accompanying matter"),
    ("a", "Discography"),
    ("b", "Bibliography"),
    ("c", "Thematic index"),
    ("d", "Libretto or text"),
    ("e", "Biography of composer or author"),
    ("f", "Biography of performer or history of ensemble"),
    ("g", "Technical and/or historical information on instruments"),
    ("h", "Technical information on music"),
    ("i", "Historical information"),
    ("k", "Ethnological information"),
    ("r", "Instructional materials"),
    ("s", "Music"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const LITERARY_TEXT_FOR_SOUND_RECORDINGS: CodeTable = &[
    (" ", "Item is a music sound recording"),
    ("a", "Autobiography"),
    ("b", "Biography"),
    ("c", "Conference proceedings"),
    ("d", "Drama"),
    ("e", "Essays"),
    ("f", "Fiction"),
    ("g", "Reporting"),
    ("h", "History"),
    ("i", "Instruction"),
    ("j", "Language instruction"),
    ("k", "Comedy"),
    ("l", "Lectures, speeches"),
    ("m", "Memoirs"),
    ("n", "Nature sounds"),
    ("o", "Folktales"),
    ("p", "Poetry"),
    ("r", "Rehearsals"),
    ("s", "Sounds"),
    ("t", "Interviews"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const TRANSPOSITION_AND_ARRANGEMENT: CodeTable = &[
    (" ", "Not arrangement or transposition or not specified"),
    ("a", "Transposition"),
    ("b", "Arrangement"),
    ("c", "Both transposed and arranged"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

const MUSIC_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 18, width: 2, name: "Form of composition", table: Some(FORM_OF_COMPOSITION) },
    LayoutEntry { offset: 20, width: 1, name: "Format of music", table: Some(FORMAT_OF_MUSIC) },
    LayoutEntry { offset: 21, width: 1, name: "Music parts", table: Some(MUSIC_PARTS) },
    LayoutEntry { offset: 22, width: 1, name: "Target audience", table: Some(MUSIC_TARGET_AUDIENCE) },
    LayoutEntry { offset: 23, width: 1, name: "Form of item", table: Some(MUSIC_FORM_OF_ITEM) },
    LayoutEntry { offset: 24, width: 1, name: "Accompanying matter", table: Some(ACCOMPANYING_MATTER) },
    LayoutEntry { offset: 25, width: 1, name: "Accompanying matter", table: Some(ACCOMPANYING_MATTER) },
    LayoutEntry { offset: 26, width: 1, name: "Accompanying matter", table: Some(ACCOMPANYING_MATTER) },
    LayoutEntry { offset: 27, width: 1, name: "Accompanying matter", table: Some(ACCOMPANYING_MATTER) },
    LayoutEntry { offset: 28, width: 1, name: "Accompanying matter", table: Some(ACCOMPANYING_MATTER) },
    LayoutEntry { offset: 29, width: 1, name: "Accompanying matter", table: Some(ACCOMPANYING_MATTER) },
    LayoutEntry { offset: 30, width: 1, name: "Literary text for sound recordings", table: Some(LITERARY_TEXT_FOR_SOUND_RECORDINGS) },
    LayoutEntry { offset: 31, width: 1, name: "Literary text for sound recordings", table: Some(LITERARY_TEXT_FOR_SOUND_RECORDINGS) },
    LayoutEntry { offset: 32, width: 1, name: "Undefined", table: None },
    LayoutEntry { offset: 33, width: 1, name: "Transposition and arrangement", table: Some(TRANSPOSITION_AND_ARRANGEMENT) },
    LayoutEntry { offset: 34, width: 1, name: "Undefined", table: None },
];

////////////////////////////////////////////////////////////////////////
// Continuing resources

const CR_FREQUENCY: CodeTable = &[
    (" ", "No determinable frequency"),
    ("a", "Annual"),
    ("b", "Bimonthly"),
    ("c", "Semiweekly"),
    ("d", "Daily"),
    ("e", "Biweekly"),
    ("f", "Semiannual"),
    ("g", "Biennial"),
    ("h", "Triennial"),
    ("i", "Three times a week"),
    ("j", "Three times a month"),
    ("k", "Continuously updated"),
    ("m", "Monthly"),
    ("q", "Quarterly"),
    ("s", "Semimonthly"),
    ("t", "Three times a year"),
    ("u", "Unknown"),
    ("w", "Weekly"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const CR_REGULARITY: CodeTable = &[
    ("n", "Normalized irregular"),
    ("r", "Regular"),
    ("u", "Unknown"),
    ("x", "Completely irregular"),
    ("|", "No attempt to code"),
];

const TYPE_OF_CONTINUING_RESOURCE: CodeTable = &[
    (" ", "None of the following"),
    ("d", "Updating database"),
    ("g", "Magazine"),
    ("h", "Blog"),
    ("j", "Journal"),
    ("l", "Updating loose-leaf"),
    ("m", "Monographic series"),
    ("n", "Newspaper"),
    ("p", "Periodical"),
    ("r", "Repository"),
    ("s", "Newsletter"),
    ("t", "Directory"),
    ("w", "Updating Web site"),
    ("|", "No attempt to code"),
];

const FORM_OF_ORIGINAL_ITEM: CodeTable = &[
    (" ", "None of the following"),
    ("a", "Microfilm"),
    ("b", "Microfiche"),
    ("c", "Microopaque"),
    ("d", "Large print"),
    ("e", "Newspaper format"),
    ("f", "Braille"),
    ("o", "Online"),
    ("q", "Direct electronic"),
    ("s", "Electronic"),
    ("|", "No attempt to code"),
];

const CR_FORM_OF_ITEM: CodeTable = &[
    (" ", "None of the following"),
    ("a", "Microfilm"),
    ("b", "Microfiche"),
    ("c", "Microopaque"),
    ("d", "Large print"),
    ("f", "Braille"),
    ("o", "Online"),
    ("q", "Direct electronic"),
    ("r", "Regular print reproduction"),
    ("s", "Electronic"),
    ("|", "No attempt to code"),
];

const CR_GOVERNMENT_PUBLICATION: CodeTable = &[
    (" ", "Not a government publication"),
    ("a", "Autonomous or semi-autonomous component"),
    ("c", "Multilocal"),
    ("f", "Federal/national"),
    ("i", "International intergovernmental"),
    ("l", "Local"),
    ("m", "Multistate"),
    ("o", "Government publication-level undetermined"),
    ("s", "State, provincial, territorial, dependent, etc."),
    ("u", "Unknown if item is government publication"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const CR_CONFERENCE_PUBLICATION: CodeTable = &[
    ("0", "Not a conference publication"),
    ("1", "Conference publication"),
    ("|", "No attempt to code"),
];

const CR_NATURE_OF_CONTENTS: CodeTable = &[
    (" ", "No specified nature of contents"),
    ("a", "Abstracts/summaries"),
    ("b", "Bibliographies"),
    ("c", "Catalogs"),
    ("d", "Dictionaries"),
    ("e", "Encyclopedias"),
    ("f", "Handbooks"),
    ("g", "Legal articles"),
    ("h", "Biography"),
    ("i", "Indexes"),
    ("k", "Discographies"),
    ("l", "Legislation"),
    ("m", "Theses"),
    ("n", "Surveys of literature in a subject area"),
    ("o", "Reviews"),
    ("p", "Programmed texts"),
    ("q", "Filmographies"),
    ("r", "Directories"),
    ("s", "Statistics"),
    ("t", "Technical reports"),
    ("u", "Standards/specifications"),
    ("v", "Legal cases and case notes"),
    ("w", "Law reports and digests"),
    ("y", "Yearbooks"),
    ("z", "Treaties"),
    ("5", "Calendars"),
    ("6", "Comics/graphic novels"),
    ("|", "No attempt to code"),
];

const ORIGINAL_ALPHABET_OR_SCRIPT: CodeTable = &[
    (" ", "No alphabet or script given/No key title"),
    ("a", "Basic roman"),
    ("b", "Extended roman"),
    ("c", "Cyrillic"),
    ("d", "Japanese"),
    ("e", "Chinese"),
    ("f", "Arabic"),
    ("g", "Greek"),
    ("h", "Hebrew"),
    ("i", "Thai"),
    ("j", "Devanagari"),
    ("k", "Korean"),
    ("l", "Tamil"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const ENTRY_CONVENTION: CodeTable = &[
    ("0", "Successive entry"),
    ("1", "Latest entry"),
    ("2", "Integrated entry"),
    ("|", "No attempt to code"),
];

const CONTINUING_RESOURCE_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 18, width: 1, name: "Frequency", table: Some(CR_FREQUENCY) },
    LayoutEntry { offset: 19, width: 1, name: "Regularity", table: Some(CR_REGULARITY) },
    LayoutEntry { offset: 20, width: 1, name: "Undefined", table: None },
    LayoutEntry { offset: 21, width: 1, name: "Type of continuing resource", table: Some(TYPE_OF_CONTINUING_RESOURCE) },
    LayoutEntry { offset: 22, width: 1, name: "Form of original item", table: Some(FORM_OF_ORIGINAL_ITEM) },
    LayoutEntry { offset: 23, width: 1, name: "Form of item", table: Some(CR_FORM_OF_ITEM) },
    LayoutEntry { offset: 24, width: 1, name: "Nature of entire work", table: Some(CR_NATURE_OF_CONTENTS) },
    LayoutEntry { offset: 25, width: 1, name: "Nature of contents", table: Some(CR_NATURE_OF_CONTENTS) },
    LayoutEntry { offset: 26, width: 1, name: "Nature of contents", table: Some(CR_NATURE_OF_CONTENTS) },
    LayoutEntry { offset: 27, width: 1, name: "Nature of contents", table: Some(CR_NATURE_OF_CONTENTS) },
    LayoutEntry { offset: 28, width: 1, name: "Government publication", table: Some(CR_GOVERNMENT_PUBLICATION) },
    LayoutEntry { offset: 29, width: 1, name: "Conference publication", table: Some(CR_CONFERENCE_PUBLICATION) },
    LayoutEntry { offset: 30, width: 3, name: "Undefined", table: None },
    LayoutEntry { offset: 33, width: 1, name: "Original alphabet or script of title", table: Some(ORIGINAL_ALPHABET_OR_SCRIPT) },
    LayoutEntry { offset: 34, width: 1, name: "Entry convention", table: Some(ENTRY_CONVENTION) },
];

////////////////////////////////////////////////////////////////////////
// Visual materials

const RUNNING_TIME: CodeTable = &[
    ("000", "Running time exceeds three characters"),
    ("nnn", "Not applicable"),
    ("---", "Unknown"),
    ("|||", "No attempt to code"),
];

const VISUAL_TARGET_AUDIENCE: CodeTable = &[
    (" ", "Unknown or not specified"),
    ("a", "Preschool"),
    ("b", "Primary"),
    ("c", "Pre-adolescent"),
    ("d", "Adolescent"),
    ("e", "Adult"),
    ("f", "Specialized"),
    ("g", "General"),
    ("j", "Juvenile"),
    ("|", "No attempt to code"),
];

const VISUAL_GOVERNMENT_PUBLICATION: CodeTable = &[
    (" ", "Not a government publication"),
    ("a", "Autonomous or semi-autonomous component"),
    ("c", "Multilocal"),
    ("f", "Federal/national"),
    ("i", "International intergovernmental"),
    ("l", "Local"),
    ("m", "Multistate"),
    ("o", "Government publication-level undetermined"),
    ("s", "State, provincial, territorial, dependent, etc."),
    ("u", "Unknown if item is government publication"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const VISUAL_FORM_OF_ITEM: CodeTable = &[
    (" ", "None of the following"),
    ("a", "Microfilm"),
    ("b", "Microfiche"),
    ("c", "Microopaque"),
    ("d", "Large print"),
    ("f", "Braille"),
    ("o", "Online"),
    ("q", "Direct electronic"),
    ("r", "Regular print reproduction"),
    ("s", "Electronic"),
    ("|", "No attempt to code"),
];

const TYPE_OF_VISUAL_MATERIAL: CodeTable = &[
    ("a", "Art original"),
    ("b", "Kit"),
    ("c", "Art reproduction"),
    ("d", "Diorama"),
    ("f", "Filmstrip"),
    ("g", "Game"),
    ("i", "Picture"),
    ("k", "Graphic"),
    ("l", "Technical drawing"),
    ("m", "Motion picture"),
    ("n", "Chart"),
    ("o", "Flash card"),
    ("p", "Microscope slide"),
    ("q", "Model"),
    ("r", "Realia"),
    ("s", "Slide"),
    ("t", "Transparency"),
    ("v", "Videorecording"),
    ("w", "Toy"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const TECHNIQUE: CodeTable = &[
    ("a", "Animation"),
    ("c", "Animation and live action"),
    ("l", "Live action"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const VISUAL_MATERIAL_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 18, width: 3, name: "Running time for motion pictures and videorecordings", table: Some(RUNNING_TIME) },
    LayoutEntry { offset: 21, width: 1, name: "Undefined", table: None },
    LayoutEntry { offset: 22, width: 1, name: "Target audience", table: Some(VISUAL_TARGET_AUDIENCE) },
    LayoutEntry { offset: 23, width: 5, name: "Undefined", table: None },
    LayoutEntry { offset: 28, width: 1, name: "Government publication", table: Some(VISUAL_GOVERNMENT_PUBLICATION) },
    LayoutEntry { offset: 29, width: 1, name: "Form of item", table: Some(VISUAL_FORM_OF_ITEM) },
    LayoutEntry { offset: 30, width: 3, name: "Undefined", table: None },
    LayoutEntry { offset: 33, width: 1, name: "Type of visual material", table: Some(TYPE_OF_VISUAL_MATERIAL) },
    LayoutEntry { offset: 34, width: 1, name: "Technique", table: Some(TECHNIQUE) },
];

////////////////////////////////////////////////////////////////////////
// Mixed materials

const MIXED_FORM_OF_ITEM: CodeTable = &[
    (" ", "None of the following"),
    ("a", "Microfilm"),
    ("b", "Microfiche"),
    ("c", "Microopaque"),
    ("d", "Large print"),
    ("f", "Braille"),
    ("o", "Online"),
    ("q", "Direct electronic"),
    ("r", "Regular print reproduction"),
    ("s", "Electronic"),
    ("|", "No attempt to code"),
];

const MIXED_MATERIAL_LAYOUT: &[LayoutEntry] = &[
    LayoutEntry { offset: 18, width: 5, name: "Undefined", table: None },
    LayoutEntry { offset: 23, width: 1, name: "Form of item", table: Some(MIXED_FORM_OF_ITEM) },
    LayoutEntry { offset: 24, width: 11, name: "Undefined", table: None },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_leader_language_material_splits_on_level() {
        assert_eq!(
            MaterialType::from_leader('a', 'm'),
            Some(MaterialType::Book)
        );
        assert_eq!(
            MaterialType::from_leader('a', 's'),
            Some(MaterialType::ContinuingResource)
        );
        assert_eq!(MaterialType::from_leader('a', 'z'), None);
    }

    #[test]
    fn test_from_leader_non_language_material() {
        assert_eq!(
            MaterialType::from_leader('m', 'm'),
            Some(MaterialType::ComputerFile)
        );
        assert_eq!(MaterialType::from_leader('e', 'm'), Some(MaterialType::Map));
        assert_eq!(
            MaterialType::from_leader('j', 'm'),
            Some(MaterialType::Music)
        );
        assert_eq!(
            MaterialType::from_leader('g', 'm'),
            Some(MaterialType::VisualMaterial)
        );
        assert_eq!(
            MaterialType::from_leader('p', 'c'),
            Some(MaterialType::MixedMaterial)
        );
        assert_eq!(MaterialType::from_leader('z', 'm'), None);
    }

    #[test]
    fn test_from_006_code_serial_is_explicit() {
        assert_eq!(
            MaterialType::from_006_code('s'),
            Some(MaterialType::ContinuingResource)
        );
        assert_eq!(MaterialType::from_006_code('a'), Some(MaterialType::Book));
        assert_eq!(MaterialType::from_006_code('q'), None);
    }

    #[test]
    fn test_layouts_cover_positions_18_to_34() {
        for material in [
            MaterialType::Book,
            MaterialType::ComputerFile,
            MaterialType::Map,
            MaterialType::Music,
            MaterialType::ContinuingResource,
            MaterialType::VisualMaterial,
            MaterialType::MixedMaterial,
        ] {
            let layout = material.layout();
            let mut next = 18;
            for entry in layout {
                assert_eq!(entry.offset, next, "gap or overlap in {material:?}");
                next = entry.offset + entry.width;
            }
            assert_eq!(next, 35, "layout for {material:?} must end at position 35");
        }
    }
}
