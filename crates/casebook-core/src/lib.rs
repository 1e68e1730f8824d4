//! Casebook Core - turns test suites into readable documentation
//!
//! This crate provides the core functionality:
//! - Model: plain-data description of a test module supplied by a host binding
//! - Naming: identifier tokenization and title casing
//! - Extract: the documentation fallback chain (doc text, external comment,
//!   internal comment)
//! - Document: the visitor that converts traversal events into formatter calls
//! - Finder: stable-order traversal of test classes and test methods
//! - Render: output formatters (wiki, reStructuredText, ANSI terminal)

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Source model - plain-data entities describing a test module
pub mod model;

/// Naming module - identifier tokenization and title casing
pub mod naming;

/// Extraction module - documentation fallback chain
pub mod extract;

/// Documenter module - traversal events to formatter calls
pub mod document;

/// Finder module - stable-order traversal of a test module
pub mod finder;

/// Rendering module - output formatters
pub mod render;

/// Convenience re-export of the documenter
pub use document::Documenter;

/// Convenience re-export of the traversal entry point
pub use finder::{find_tests, Collector};

/// Convenience re-export of the doc extractor
pub use extract::extract_docs;

/// Convenience re-export of the model types
pub use model::{SourceBlock, SourceEntity, SourceUnavailable, TestClass, TestMethod, TestModule};

/// Convenience re-export of the formatters
pub use render::{Formatter, RestFormatter, TerminalFormatter, WikiFormatter};

/// Convenience re-export of the naming helpers
pub use naming::{class_title, method_title, split_name, title_case};
