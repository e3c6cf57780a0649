//! Core of the `json2stems` converter.
//!
//! Turns a source-file metadata document and a design hierarchy
//! ("netlist") document, both JSON, into the flat stem text format read by
//! hierarchy browsers. The pipeline is:
//!
//!   two parsed JSON documents
//!     -> classify  (which one is the metadata table)
//!     -> index     (file-id -> path, module address -> name)
//!     -> emit      (`++ module` / `++ comp` records, input order)
//!
//! Front-ends (the CLI) should depend on this crate rather than
//! reimplementing the pipeline.

// ---------------------------------------------------------------------
// Error handling
// ---------------------------------------------------------------------

pub mod error;

// ---------------------------------------------------------------------
// Input: document loading, views and classification
// ---------------------------------------------------------------------

pub mod document;
pub mod classify;

// ---------------------------------------------------------------------
// Resolution: lookup tables and location strings
// ---------------------------------------------------------------------

pub mod index;
pub mod location;

// ---------------------------------------------------------------------
// Output: stem records, emission and file-level orchestration
// ---------------------------------------------------------------------

pub mod stem;
pub mod emit;
pub mod convert;

// ---------------------------------------------------------------------
// Public API re-exports
// ---------------------------------------------------------------------

pub use classify::classify;
pub use convert::convert_files;
pub use document::{Address, MetadataDocument, NetlistDocument, read_document};
pub use emit::{ConversionSummary, stem_records, write_stems};
pub use error::CoreError;
pub use stem::{StemRecord, UNRESOLVED_TYPE};
