//! GLS intermediate representation for the tsgls transformation core.
//!
//! - `IrCommand`/`Argument`: one IR line and its arguments
//! - `Transformation`, `Complaint`, `Fragment`: per-node results
//! - `TransformationsPrinter`: nested results to a flat line list
//! - `LineIndenter`: flat lines to indented text
//! - `CommandVocabulary`/`CommandCatalog`: command metadata

pub mod command;
pub use command::{Argument, IrCommand};

pub mod command_names;

pub mod catalog;
pub use catalog::{CatalogError, CommandCatalog, CommandMetadata, CommandVocabulary};

pub mod transformation;
pub use transformation::{Complaint, Fragment, Output, Transformation};

pub mod printer;
pub use printer::{Line, PrintedProgram, TransformationsPrinter};

pub mod indenter;
pub use indenter::{DEFAULT_INDENT_UNIT, IndentError, LineIndenter};
