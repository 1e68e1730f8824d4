//! Stable-order traversal of a test module
//!
//! [`find_tests`] walks one module depth-first: the module itself, then each
//! test class in source order, then each class's test methods in source
//! order. The walk emits events to a [`Collector`] and nothing else.

use std::collections::BTreeSet;
use std::io;

use crate::model::{TestClass, TestMethod, TestModule};

/// Prefix marking a method as a test
pub const TEST_PREFIX: &str = "test";

/// Receiver for traversal events, normally a
/// [`Documenter`](crate::Documenter)
pub trait Collector {
    /// The walk entered the module
    fn got_module(&mut self, module: &TestModule) -> io::Result<()>;

    /// The walk entered a test class of the module
    fn got_test_class(&mut self, class: &TestClass) -> io::Result<()>;

    /// The walk entered a test method of the current class
    fn got_test(&mut self, method: &TestMethod) -> io::Result<()>;
}

/// Walk `module` and emit one event per module, test class and test method.
///
/// Classes count only when they are test case classes defined in this very
/// module; imported classes would otherwise be documented once per importing
/// module. Classes sort by source position. Methods are discovered through
/// the whole inheritance chain and sort by the source position of the
/// resolved callable, so an inherited method keeps its base-class position
/// and can interleave with locally defined ones.
pub fn find_tests(collector: &mut dyn Collector, module: &TestModule) -> io::Result<()> {
    collector.got_module(module)?;

    let mut classes: Vec<&TestClass> = module
        .classes
        .iter()
        .filter(|class| class.is_test_case && class.defined_in == module.name)
        .collect();
    classes.sort_by_key(|class| class.source_line);

    for class in classes {
        collector.got_test_class(class)?;

        let mut methods: Vec<&TestMethod> = test_method_names(class)
            .iter()
            .filter_map(|name| class.resolve_method(name))
            .collect();
        methods.sort_by_key(|method| method.source_line);

        for method in methods {
            collector.got_test(method)?;
        }
    }
    Ok(())
}

/// Names of test methods defined anywhere in the inheritance chain.
///
/// Base classes are walked first and each call returns its own set; the
/// caller merges. A name counts when it carries the test prefix followed by
/// at least one character. The ordered set makes downstream line-number
/// sorting deterministic when lines tie.
fn test_method_names(class: &TestClass) -> BTreeSet<String> {
    let mut names: BTreeSet<String> = class
        .bases
        .iter()
        .flat_map(test_method_names)
        .collect();
    for method in &class.methods {
        if method.name.len() > TEST_PREFIX.len() && method.name.starts_with(TEST_PREFIX) {
            names.insert(method.name.clone());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TestClass, TestMethod, TestModule};

    /// Records traversal events by entity name
    #[derive(Default)]
    struct MockCollector {
        log: Vec<(&'static str, String)>,
    }

    impl Collector for MockCollector {
        fn got_module(&mut self, module: &TestModule) -> io::Result<()> {
            self.log.push(("module", module.name.clone()));
            Ok(())
        }

        fn got_test_class(&mut self, class: &TestClass) -> io::Result<()> {
            self.log.push(("class", class.name.clone()));
            Ok(())
        }

        fn got_test(&mut self, method: &TestMethod) -> io::Result<()> {
            self.log.push(("method", method.name.clone()));
            Ok(())
        }
    }

    fn walk(module: &TestModule) -> Vec<(&'static str, String)> {
        let mut collector = MockCollector::default();
        find_tests(&mut collector, module).unwrap();
        collector.log
    }

    fn event(kind: &'static str, name: &str) -> (&'static str, String) {
        (kind, name.to_string())
    }

    /// The two-class fixture from the documentation examples: `SomeTest`
    /// before `AnotherTest`, methods in source order.
    fn hastests() -> TestModule {
        let mut module = TestModule::new("sample.hastests");

        let mut some = TestClass::new("SomeTest", "sample.hastests", 5).test_case();
        some.add_method(TestMethod::new("test_foo_handles_qux", 8));
        some.add_method(TestMethod::new("test_bar", 11));
        module.add_class(some);

        let mut another = TestClass::new("AnotherTest", "sample.hastests", 15).test_case();
        another.add_method(TestMethod::new("test_baz", 16));
        module.add_class(another);

        module
    }

    #[test]
    fn test_empty_module() {
        let module = TestModule::new("sample.empty");
        assert_eq!(walk(&module), [event("module", "sample.empty")]);
    }

    #[test]
    fn test_class_without_methods() {
        let mut module = TestModule::new("sample.hasemptycase");
        module.add_class(TestClass::new("SomeTest", "sample.hasemptycase", 4).test_case());
        assert_eq!(
            walk(&module),
            [
                event("module", "sample.hasemptycase"),
                event("class", "SomeTest"),
            ]
        );
    }

    #[test]
    fn test_classes_and_methods_in_source_order() {
        assert_eq!(
            walk(&hastests()),
            [
                event("module", "sample.hastests"),
                event("class", "SomeTest"),
                event("method", "test_foo_handles_qux"),
                event("method", "test_bar"),
                event("class", "AnotherTest"),
                event("method", "test_baz"),
            ]
        );
    }

    #[test]
    fn test_non_test_classes_are_skipped() {
        let mut module = TestModule::new("sample.mixed");
        module.add_class(TestClass::new("Helper", "sample.mixed", 3));
        let mut case = TestClass::new("RealTest", "sample.mixed", 9).test_case();
        case.add_method(TestMethod::new("test_it", 10));
        module.add_class(case);

        assert_eq!(
            walk(&module),
            [
                event("module", "sample.mixed"),
                event("class", "RealTest"),
                event("method", "test_it"),
            ]
        );
    }

    #[test]
    fn test_imported_classes_are_excluded() {
        let mut module = TestModule::new("sample.importer");
        module.add_class(TestClass::new("ImportedTest", "sample.elsewhere", 2).test_case());
        assert_eq!(walk(&module), [event("module", "sample.importer")]);
    }

    // An inherited method keeps the line number of its base-class
    // definition, so it can sort ahead of methods defined on the subclass.
    #[test]
    fn test_inherited_methods_interleave_by_original_line() {
        let mut base = TestClass::new("SharedTest", "sample.base", 1).test_case();
        base.add_method(TestMethod::new("test_inherited", 2));

        let mut derived = TestClass::new("DerivedTest", "sample.derived", 30).test_case();
        derived.add_method(TestMethod::new("test_local", 31));
        derived.add_base(base);

        let mut module = TestModule::new("sample.derived");
        module.add_class(derived);

        assert_eq!(
            walk(&module),
            [
                event("module", "sample.derived"),
                event("class", "DerivedTest"),
                event("method", "test_inherited"),
                event("method", "test_local"),
            ]
        );
    }

    // Overriding resolves to the subclass implementation without
    // duplicating the entry.
    #[test]
    fn test_overridden_method_counts_once() {
        let mut base = TestClass::new("SharedTest", "sample.base", 1).test_case();
        base.add_method(TestMethod::new("test_shared", 2));

        let mut derived = TestClass::new("DerivedTest", "sample.derived", 10).test_case();
        derived.add_method(TestMethod::new("test_shared", 12));
        derived.add_base(base);

        let mut module = TestModule::new("sample.derived");
        module.add_class(derived);

        assert_eq!(
            walk(&module),
            [
                event("module", "sample.derived"),
                event("class", "DerivedTest"),
                event("method", "test_shared"),
            ]
        );
    }

    // A method named exactly `test` has no suffix and is not a test.
    #[test]
    fn test_bare_prefix_is_not_a_test() {
        let mut module = TestModule::new("sample.bare");
        let mut case = TestClass::new("BareTest", "sample.bare", 1).test_case();
        case.add_method(TestMethod::new("test", 2));
        case.add_method(TestMethod::new("test_real", 3));
        module.add_class(case);

        assert_eq!(
            walk(&module),
            [
                event("module", "sample.bare"),
                event("class", "BareTest"),
                event("method", "test_real"),
            ]
        );
    }
}
