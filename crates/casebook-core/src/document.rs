//! The documenter: traversal events in, formatter calls out

use std::io;

use crate::extract::extract_docs;
use crate::finder::Collector;
use crate::model::{SourceEntity, TestClass, TestMethod, TestModule};
use crate::naming::{class_title, method_title};
use crate::render::Formatter;

/// Converts traversal events into document structure.
///
/// The module maps to the title (raw name), each test class to a section
/// and each test method to a subsection, with identifiers rewritten as
/// natural-language titles. Whenever the extraction chain finds
/// documentation for the entity, it follows as a paragraph. The documenter
/// holds no state beyond the injected formatter.
pub struct Documenter<F: Formatter> {
    formatter: F,
}

impl<F: Formatter> Documenter<F> {
    /// Create a documenter driving `formatter`
    pub fn new(formatter: F) -> Self {
        Self { formatter }
    }

    /// Consume the documenter and return the formatter
    pub fn into_formatter(self) -> F {
        self.formatter
    }

    fn append_docs(&mut self, entity: &dyn SourceEntity) -> io::Result<()> {
        if let Some(docs) = extract_docs(entity) {
            self.formatter.paragraph(&docs)?;
        }
        Ok(())
    }
}

impl<F: Formatter> Collector for Documenter<F> {
    fn got_module(&mut self, module: &TestModule) -> io::Result<()> {
        self.formatter.title(&module.name)?;
        self.append_docs(module)
    }

    fn got_test_class(&mut self, class: &TestClass) -> io::Result<()> {
        self.formatter.section(&class_title(&class.name))?;
        self.append_docs(class)
    }

    fn got_test(&mut self, method: &TestMethod) -> io::Result<()> {
        self.formatter.subsection(&method_title(&method.name))?;
        self.append_docs(method)
    }
}
