//! magrename - A renamer for vendor-named IEEE magazine PDF files
//!
//! This library recognizes the filename conventions used by several IEEE
//! magazine download portals, rebuilds each name as
//! `"<Series> YYYY-MM[ Edition].pdf"`, and renames the files in place.

pub mod cli;
pub mod config;
pub mod error;
pub mod file_renamer;
pub mod lookup;
pub mod output;
pub mod reconstruct;
pub mod shape;

pub use config::{ConfigError, RenamerConfig};
pub use error::{RenameError, StartupError};
pub use file_renamer::{FileRenamer, ParsedFilename, RenamePlan, SkipReason};
pub use lookup::{edition_to_label, month_to_number};
pub use reconstruct::reconstruct;
pub use shape::{FilenameShape, ShapeClassifier, classify};

pub use cli::{Args, RunOptions, RunReport, run_batch, run_cli};
