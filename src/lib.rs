//! Core crate exports for the `modules-json` converter.
//!
//! The pipeline is strictly linear: a YAML [`ConfigDocument`] is loaded from a
//! [`Source`], its `modules` entry is pulled out as a [`ModuleList`], and the
//! list is rendered as JSON text embedded as a string inside a single-key JSON
//! envelope. [`convert`] runs all three steps with one set of options.

pub mod document;
pub mod encode;
pub mod error;
pub mod logging;
pub mod modules;
mod pipeline;

pub use document::{ConfigDocument, Source};
pub use encode::{RenderOptions, render};
pub use error::ModulesError;
pub use modules::{ModuleList, ShapePolicy, extract};
pub use pipeline::{ConvertOptions, convert};

/// Key looked up in the top-level mapping when none is configured.
pub const DEFAULT_KEY: &str = "modules";

/// Name of the single envelope field when none is configured.
pub const DEFAULT_FIELD: &str = "modules_json";

/// Document read when no input is configured.
pub const DEFAULT_INPUT: &str = "modules.yaml";
