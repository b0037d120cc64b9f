//! XML handling layer.
//!
//! # Submodules
//!
//! - [`sanitize`][]: Textual pre-pass that escapes custom entity references
//! - [`tree`][]: Generic attributed element tree and the builder that produces it

pub mod sanitize;
pub mod tree;

pub use tree::{Element, QuickXmlTreeBuilder, TreeBuilder, TreeError, ValueProcessor};
