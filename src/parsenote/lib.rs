//! # parsenote
//!
//! Parse an xml note and print it in a readable format.
//!
//! The crate is a library first: the `parsenote` binary is a thin shell over
//! the functions exported here, and other programs can reuse them directly.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                │
//! │  - argument classification, help, exit codes │
//! └──────────────────────────────────────────────┘
//!                      │
//!                      ▼
//! ┌──────────────────────────────────────────────┐
//! │  Loader (loader.rs)                          │
//! │  - XML document → FieldMap                   │
//! └──────────────────────────────────────────────┘
//!                      │
//!                      ▼
//! ┌──────────────────────────────────────────────┐
//! │  Model (model.rs)                            │
//! │  - FieldMap → Note, missing fields rejected  │
//! └──────────────────────────────────────────────┘
//!                      │
//!                      ▼
//! ┌──────────────────────────────────────────────┐
//! │  Formatter (format.rs)                       │
//! │  - Note → "Note from A (D)  -->  C"          │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Only the CLI layer writes to stderr or decides exit codes. Library
//! functions return [`Result`] and leave reporting to the caller.
//!
//! ## Library usage
//!
//! ```no_run
//! let note = parsenote::load_note("note.xml")?;
//! parsenote::print_formatted_note(&note)?;
//! # Ok::<(), parsenote::NoteError>(())
//! ```

pub mod error;
pub mod format;
pub mod loader;
pub mod model;

pub use error::{NoteError, Result};
pub use format::{format_note, print_formatted_note, write_note};
pub use loader::{decode_document, load_fields, load_note, parse_fields};
pub use model::{FieldMap, Note};
