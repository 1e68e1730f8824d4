//! Documentation extraction fallback chain
//!
//! Modules, classes and methods can be documented in several ways: declared
//! doc text, a comment block preceding the definition, or a comment block
//! opening the definition body. [`extract_docs`] tries each in that fixed
//! order and returns the first hit.

use crate::model::{SourceBlock, SourceEntity};

/// Comment marker recognized by the comment-stripping steps
const COMMENT_MARKER: char = '#';

/// Extract the best available documentation for an entity.
///
/// Priority: declared doc text (trimmed, otherwise untouched), then the
/// external comment preceding the definition, then the internal comment
/// block at the top of the definition body. `None` when nothing matched.
/// Unavailable source counts as "no internal comment", not as a failure.
pub fn extract_docs(entity: &dyn SourceEntity) -> Option<String> {
    if let Some(doc) = entity.declared_doc() {
        return Some(doc.trim().to_string());
    }
    if let Some(comment) = entity.preceding_comment() {
        return Some(strip_comment_markers(comment));
    }
    internal_comments(entity).map(|comment| strip_comment_markers(&comment))
}

/// Remove one leading comment marker and surrounding whitespace per line
fn strip_comment_markers(comment: &str) -> String {
    comment
        .lines()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix(COMMENT_MARKER).unwrap_or(line).trim()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collect the comment block opening the entity's body.
///
/// A line belongs to the block only while its indentation matches the first
/// line after the definition and it starts with the comment marker; the
/// first line breaking either rule (blank lines included) ends the scan.
fn internal_comments(entity: &dyn SourceEntity) -> Option<String> {
    let SourceBlock { lines, def_index } = entity.source_block().ok()?;
    if lines.len() <= def_index + 1 {
        // Nothing after the definition line, e.g. an empty module.
        return None;
    }
    let indent = indent_size(&lines[def_index + 1]);

    let mut comments = Vec::new();
    for line in &lines[def_index + 1..] {
        let stripped = line.trim();
        if indent_size(line) == indent && stripped.starts_with(COMMENT_MARKER) {
            comments.push(stripped);
        } else {
            break;
        }
    }
    if comments.is_empty() {
        None
    } else {
        Some(comments.join("\n"))
    }
}

/// Width of a line's leading whitespace, tabs expanded to 8 columns
fn indent_size(line: &str) -> usize {
    let mut width = 0;
    for c in line.chars() {
        match c {
            ' ' => width += 1,
            '\t' => width += 8 - width % 8,
            _ => break,
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TestMethod;

    fn bare(name: &str) -> TestMethod {
        TestMethod::new(name, 1)
    }

    // An undocumented entity with recoverable source still yields nothing.
    #[test]
    fn test_no_documentation() {
        let method = bare("test_undocumented")
            .with_source(SourceBlock::from_text("def undocumented():\n    pass\n", 0));
        assert_eq!(extract_docs(&method), None);
    }

    #[test]
    fn test_extracts_declared_doc() {
        let method = bare("test_documented").with_declared_doc("docstring");
        assert_eq!(extract_docs(&method).as_deref(), Some("docstring"));
    }

    #[test]
    fn test_declared_doc_is_trimmed_only() {
        let method = bare("test_documented").with_declared_doc("\nfirst line\n  second\n");
        assert_eq!(extract_docs(&method).as_deref(), Some("first line\n  second"));
    }

    #[test]
    fn test_extracts_preceding_comment() {
        let method = bare("test_precommented")
            .with_preceding_comment("# pre-commented\n# multi-lines");
        assert_eq!(
            extract_docs(&method).as_deref(),
            Some("pre-commented\nmulti-lines")
        );
    }

    // The first non-comment line (even a blank one) terminates the block.
    #[test]
    fn test_extracts_internal_comment() {
        let source = "def commented():\n    # line 1\n    # line 2\n    #\n    # line 4\n\n    # not part of the main comment\n    pass\n";
        let method = bare("test_commented").with_source(SourceBlock::from_text(source, 0));
        assert_eq!(
            extract_docs(&method).as_deref(),
            Some("line 1\nline 2\n\nline 4")
        );
    }

    #[test]
    fn test_internal_comment_requires_matching_indent() {
        let source = "def commented():\n    # belongs\n        # indented differently\n    pass\n";
        let method = bare("test_commented").with_source(SourceBlock::from_text(source, 0));
        assert_eq!(extract_docs(&method).as_deref(), Some("belongs"));
    }

    #[test]
    fn test_declared_doc_preferred_over_comments() {
        let method = bare("test_both")
            .with_declared_doc("docstring")
            .with_preceding_comment("# comment");
        assert_eq!(extract_docs(&method).as_deref(), Some("docstring"));
    }

    #[test]
    fn test_external_comment_preferred_over_internal() {
        let source = "def commented():\n    # internal\n    pass\n";
        let method = bare("test_commented")
            .with_preceding_comment("# external")
            .with_source(SourceBlock::from_text(source, 0));
        assert_eq!(extract_docs(&method).as_deref(), Some("external"));
    }

    // A generated callable with no recoverable source falls through to
    // absent instead of failing the extraction.
    #[test]
    fn test_source_unavailable_is_absent() {
        let method = bare("test_generated");
        assert_eq!(extract_docs(&method), None);
    }

    #[test]
    fn test_empty_body_after_definition() {
        let method = bare("test_empty").with_source(SourceBlock::from_text("def empty():", 0));
        assert_eq!(extract_docs(&method), None);
    }

    #[test]
    fn test_extraction_is_pure() {
        let source = "def commented():\n    # internal\n    pass\n";
        let method = bare("test_commented").with_source(SourceBlock::from_text(source, 0));
        assert_eq!(extract_docs(&method), extract_docs(&method));
    }

    #[test]
    fn test_tab_indentation_expands() {
        let source = "def commented():\n\t# tab indented\n        # eight spaces\n\tpass\n";
        let method = bare("test_commented").with_source(SourceBlock::from_text(source, 0));
        assert_eq!(
            extract_docs(&method).as_deref(),
            Some("tab indented\neight spaces")
        );
    }
}
