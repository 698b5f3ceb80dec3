use crate::template::Template;
use std::path::PathBuf;

/// Byte width of a single generated field (a java `long`).
pub const FIELD_WIDTH: i64 = 8;

/// Everything a single [`generate`](crate::generate) call needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub class_name: String,
    /// Target size of one instance in bytes. Not range-checked.
    pub object_size: i64,
    pub template_directory: PathBuf,
    pub output_directory: PathBuf,
    pub extension: String,
    pub log_progress: bool,
}

impl Config {
    pub fn new(class_name: impl Into<String>, object_size: i64) -> Config {
        Config {
            class_name: class_name.into(),
            object_size,
            template_directory: PathBuf::from("."),
            output_directory: PathBuf::from("."),
            extension: "java".to_string(),
            log_progress: false,
        }
    }

    /// Number of fields to emit. Floor division, so negative sizes
    /// produce a negative count.
    pub fn field_count(&self) -> i64 {
        self.object_size.div_euclid(FIELD_WIDTH)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_directory
            .join(format!("{}.{}", self.class_name, self.extension))
    }

    pub(crate) fn template_path(&self, template: Template) -> PathBuf {
        self.template_directory.join(template.file_name())
    }
}
