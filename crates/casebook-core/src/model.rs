//! Plain-data model of a test module under documentation
//!
//! A host binding (a test-framework integration, or the JSON loader in the
//! CLI) resolves a module and describes it with these types: names, source
//! positions, doc text, comment text and raw source lines. The core never
//! introspects anything live; everything it needs is captured here.

use serde::Deserialize;
use thiserror::Error;

/// Raised when the raw source text for an entity cannot be recovered,
/// e.g. for a generated method with no backing file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("source unavailable for `{name}`")]
pub struct SourceUnavailable {
    /// Name of the entity whose source was requested
    pub name: String,
}

/// Raw source lines for an entity plus the index of its definition line.
///
/// For a module the definition line is its first line (index 0); for classes
/// and methods it is the line carrying the definition header. Comment
/// scanning starts on the line after `def_index`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SourceBlock {
    /// The entity's source, one entry per line, without trailing newlines
    pub lines: Vec<String>,
    /// Index into `lines` of the definition line
    #[serde(default)]
    pub def_index: usize,
}

impl SourceBlock {
    /// Create a source block from owned lines
    #[must_use]
    pub fn new(lines: Vec<String>, def_index: usize) -> Self {
        Self { lines, def_index }
    }

    /// Create a source block by splitting a text blob into lines
    #[must_use]
    pub fn from_text(text: &str, def_index: usize) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
            def_index,
        }
    }
}

/// Common lookup surface over modules, classes and methods.
///
/// These are the host lookups the extraction chain depends on. Every method
/// is a read of already-captured data; nothing is computed lazily.
pub trait SourceEntity {
    /// The raw identifier of the entity
    fn name(&self) -> &str;

    /// Line number of the definition in its enclosing file
    fn source_line(&self) -> usize;

    /// Documentation text declared directly on the entity, if any
    fn declared_doc(&self) -> Option<&str>;

    /// Comment block immediately preceding the definition, if any
    fn preceding_comment(&self) -> Option<&str>;

    /// Raw source lines and definition line index
    ///
    /// # Errors
    /// Returns [`SourceUnavailable`] when the binding could not recover
    /// source text for this entity.
    fn source_block(&self) -> Result<&SourceBlock, SourceUnavailable>;
}

/// A module containing test classes.
///
/// `classes` holds every class visible as a member of the module, including
/// imported ones; the finder filters on [`TestClass::defined_in`] and
/// [`TestClass::is_test_case`].
#[derive(Debug, Clone, Deserialize)]
pub struct TestModule {
    /// Dotted module name
    pub name: String,
    /// Module docstring equivalent
    #[serde(default)]
    pub declared_doc: Option<String>,
    /// Comment block at the very top of the file, before any code
    #[serde(default)]
    pub preceding_comment: Option<String>,
    /// Full module source; `def_index` is 0 for modules
    #[serde(default)]
    pub source: Option<SourceBlock>,
    /// Classes reachable as members of the module
    #[serde(default)]
    pub classes: Vec<TestClass>,
}

impl TestModule {
    /// Create an empty module model
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_doc: None,
            preceding_comment: None,
            source: None,
            classes: Vec::new(),
        }
    }

    /// Set the declared documentation text
    #[must_use]
    pub fn with_declared_doc(mut self, doc: impl Into<String>) -> Self {
        self.declared_doc = Some(doc.into());
        self
    }

    /// Set the module source
    #[must_use]
    pub fn with_source(mut self, source: SourceBlock) -> Self {
        self.source = Some(source);
        self
    }

    /// Add a member class
    pub fn add_class(&mut self, class: TestClass) {
        self.classes.push(class);
    }
}

impl SourceEntity for TestModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn source_line(&self) -> usize {
        0
    }

    fn declared_doc(&self) -> Option<&str> {
        self.declared_doc.as_deref()
    }

    fn preceding_comment(&self) -> Option<&str> {
        self.preceding_comment.as_deref()
    }

    fn source_block(&self) -> Result<&SourceBlock, SourceUnavailable> {
        self.source.as_ref().ok_or_else(|| SourceUnavailable {
            name: self.name.clone(),
        })
    }
}

/// A class-like entity belonging to a module.
///
/// `methods` holds only the methods defined directly on the class; inherited
/// methods are reached through `bases`, which carries the inheritance chain
/// as owned nested models in declaration order.
#[derive(Debug, Clone, Deserialize)]
pub struct TestClass {
    /// Class name
    pub name: String,
    /// Name of the module that defines the class
    pub defined_in: String,
    /// Line of the class definition in its defining file
    pub source_line: usize,
    /// Whether the class is-a recognized test base type
    #[serde(default)]
    pub is_test_case: bool,
    /// Class docstring equivalent
    #[serde(default)]
    pub declared_doc: Option<String>,
    /// Comment block immediately preceding the class definition
    #[serde(default)]
    pub preceding_comment: Option<String>,
    /// Class source; `def_index` points at the definition header line
    #[serde(default)]
    pub source: Option<SourceBlock>,
    /// Base classes, leftmost first
    #[serde(default)]
    pub bases: Vec<TestClass>,
    /// Methods defined directly on this class
    #[serde(default)]
    pub methods: Vec<TestMethod>,
}

impl TestClass {
    /// Create a class model with no members
    #[must_use]
    pub fn new(name: impl Into<String>, defined_in: impl Into<String>, source_line: usize) -> Self {
        Self {
            name: name.into(),
            defined_in: defined_in.into(),
            source_line,
            is_test_case: false,
            declared_doc: None,
            preceding_comment: None,
            source: None,
            bases: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Mark the class as a recognized test case class
    #[must_use]
    pub fn test_case(mut self) -> Self {
        self.is_test_case = true;
        self
    }

    /// Set the declared documentation text
    #[must_use]
    pub fn with_declared_doc(mut self, doc: impl Into<String>) -> Self {
        self.declared_doc = Some(doc.into());
        self
    }

    /// Set the preceding comment block
    #[must_use]
    pub fn with_preceding_comment(mut self, comment: impl Into<String>) -> Self {
        self.preceding_comment = Some(comment.into());
        self
    }

    /// Set the class source
    #[must_use]
    pub fn with_source(mut self, source: SourceBlock) -> Self {
        self.source = Some(source);
        self
    }

    /// Add a base class at the end of the base list
    pub fn add_base(&mut self, base: TestClass) {
        self.bases.push(base);
    }

    /// Add a method defined directly on this class
    pub fn add_method(&mut self, method: TestMethod) {
        self.methods.push(method);
    }

    /// Look up a method defined directly on this class
    #[must_use]
    pub fn own_method(&self, name: &str) -> Option<&TestMethod> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Resolve a method name the way attribute lookup would: this class
    /// first, then each base depth-first in declaration order.
    #[must_use]
    pub fn resolve_method(&self, name: &str) -> Option<&TestMethod> {
        if let Some(method) = self.own_method(name) {
            return Some(method);
        }
        self.bases.iter().find_map(|base| base.resolve_method(name))
    }
}

impl SourceEntity for TestClass {
    fn name(&self) -> &str {
        &self.name
    }

    fn source_line(&self) -> usize {
        self.source_line
    }

    fn declared_doc(&self) -> Option<&str> {
        self.declared_doc.as_deref()
    }

    fn preceding_comment(&self) -> Option<&str> {
        self.preceding_comment.as_deref()
    }

    fn source_block(&self) -> Result<&SourceBlock, SourceUnavailable> {
        self.source.as_ref().ok_or_else(|| SourceUnavailable {
            name: self.name.clone(),
        })
    }
}

/// A callable belonging to a test class
#[derive(Debug, Clone, Deserialize)]
pub struct TestMethod {
    /// Method name, including any `test` prefix
    pub name: String,
    /// Line of the method definition in its defining file
    pub source_line: usize,
    /// Method docstring equivalent
    #[serde(default)]
    pub declared_doc: Option<String>,
    /// Comment block immediately preceding the method definition
    #[serde(default)]
    pub preceding_comment: Option<String>,
    /// Method source; `def_index` points at the definition header line
    #[serde(default)]
    pub source: Option<SourceBlock>,
}

impl TestMethod {
    /// Create a method model
    #[must_use]
    pub fn new(name: impl Into<String>, source_line: usize) -> Self {
        Self {
            name: name.into(),
            source_line,
            declared_doc: None,
            preceding_comment: None,
            source: None,
        }
    }

    /// Set the declared documentation text
    #[must_use]
    pub fn with_declared_doc(mut self, doc: impl Into<String>) -> Self {
        self.declared_doc = Some(doc.into());
        self
    }

    /// Set the preceding comment block
    #[must_use]
    pub fn with_preceding_comment(mut self, comment: impl Into<String>) -> Self {
        self.preceding_comment = Some(comment.into());
        self
    }

    /// Set the method source
    #[must_use]
    pub fn with_source(mut self, source: SourceBlock) -> Self {
        self.source = Some(source);
        self
    }
}

impl SourceEntity for TestMethod {
    fn name(&self) -> &str {
        &self.name
    }

    fn source_line(&self) -> usize {
        self.source_line
    }

    fn declared_doc(&self) -> Option<&str> {
        self.declared_doc.as_deref()
    }

    fn preceding_comment(&self) -> Option<&str> {
        self.preceding_comment.as_deref()
    }

    fn source_block(&self) -> Result<&SourceBlock, SourceUnavailable> {
        self.source.as_ref().ok_or_else(|| SourceUnavailable {
            name: self.name.clone(),
        })
    }
}
