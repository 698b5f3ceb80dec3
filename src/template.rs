//! Template files and the literal placeholder substitutions applied to them.
//!
//! Templates are handled as raw bytes: lines that aren't valid UTF-8 are
//! copied unchanged.

use crate::error::Error;
use bstr::ByteSlice;
use std::{borrow::Cow, fs, path::Path};

/// Replaced by the class name in the header template.
pub const CLASS_NAME_PLACEHOLDER: &str = "####";
/// Marks the lines of the field template that get emitted.
pub const FIELD_MARKER: &str = "field###";
/// Replaced by the field index on marked lines.
pub const INDEX_PLACEHOLDER: &str = "###";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Header,
    Field,
    Footer,
}

impl Template {
    pub fn file_name(self) -> &'static str {
        match self {
            Template::Header => "header",
            Template::Field => "field",
            Template::Footer => "footer",
        }
    }
}

pub(crate) fn read_template(path: &Path) -> Result<Vec<u8>, Error> {
    fs::read(path).map_err(|error| Error::template_io_error(path, error))
}

/// Splits a template into lines, keeping each line's terminator.
pub(crate) fn lines(template: &[u8]) -> impl Iterator<Item = &[u8]> {
    template.lines_with_terminator()
}

pub fn substitute_class_name<'a>(line: &'a [u8], class_name: &str) -> Cow<'a, [u8]> {
    if line.contains_str(CLASS_NAME_PLACEHOLDER) {
        Cow::Owned(line.replace(CLASS_NAME_PLACEHOLDER, class_name))
    } else {
        Cow::Borrowed(line)
    }
}

/// Returns `None` for lines without the field marker: those are dropped
/// from the output.
pub fn substitute_field_index(line: &[u8], index: i64) -> Option<Vec<u8>> {
    if line.contains_str(FIELD_MARKER) {
        Some(line.replace(INDEX_PLACEHOLDER, index.to_string()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bstr::{BString, B};
    use pretty_assertions::assert_eq;

    fn field(line: &str, index: i64) -> Option<BString> {
        substitute_field_index(line.as_bytes(), index).map(BString::from)
    }

    #[test]
    fn class_name_replaces_every_occurrence() {
        assert_eq!(
            substitute_class_name(b"public class #### { // ####\n", "LargeObj").as_bstr(),
            "public class LargeObj { // LargeObj\n"
        );
    }

    #[test]
    fn lines_without_class_name_placeholder_are_borrowed() {
        assert!(matches!(
            substitute_class_name(b"import java.util.*;\n", "LargeObj"),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn class_name_substitution_leaves_other_bytes_alone() {
        assert_eq!(
            &*substitute_class_name(b"class #### { // caf\xe9\n", "Cafe"),
            B(b"class Cafe { // caf\xe9\n")
        );
    }

    #[test]
    fn field_index_is_formatted_without_padding() {
        assert_eq!(
            field("    long field###;\n", 0),
            Some(BString::from("    long field0;\n"))
        );
        assert_eq!(
            field("    long field###;\n", 31),
            Some(BString::from("    long field31;\n"))
        );
    }

    #[test]
    fn field_index_replaces_every_index_token_on_marked_lines() {
        assert_eq!(
            field("long field### = ###L;\n", 4),
            Some(BString::from("long field4 = 4L;\n"))
        );
    }

    #[test]
    fn unmarked_field_lines_are_skipped() {
        assert_eq!(field("    // comment ###\n", 3), None);
        assert_eq!(field("\n", 3), None);
    }

    #[test]
    fn lines_keep_their_terminators() {
        let template = b"a\r\nb\n\nc";
        assert_eq!(
            lines(template).collect::<Vec<_>>(),
            vec![B("a\r\n"), B("b\n"), B("\n"), B("c")]
        );
        assert_eq!(lines(template).collect::<Vec<_>>().concat(), template);
    }

    #[test]
    fn empty_templates_have_no_lines() {
        assert_eq!(lines(b"").count(), 0);
    }

    #[test]
    fn reading_a_missing_template_is_a_template_not_found_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join(Template::Header.file_name());
        match read_template(&path) {
            Err(Error::TemplateNotFound { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected TemplateNotFound, got {:?}", other),
        }
    }

    #[test]
    fn templates_are_read_as_bytes() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join(Template::Footer.file_name());
        fs::write(&path, b"} // \xff\xfe\n").unwrap();
        assert_eq!(read_template(&path).unwrap(), b"} // \xff\xfe\n");
    }
}
