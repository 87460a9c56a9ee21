//! CampusQA corpus synthesis
//!
//! Expands the three upstream institutional documents (academic schedule,
//! placement data, faculty directory) into a paraphrase-diverse set of
//! question/answer pairs, including derived aggregate facts.

pub mod loader;
pub mod records;
pub mod synth;
pub mod templates;

pub use loader::SourceDocuments;
pub use records::{AcademicEvent, FacultyMember, PlacementRecord, Record};
pub use synth::{synthesize, Corpus, QaEntry};
