//! Writes the three parts of a generated class to an output sink.

use crate::{
    config::Config,
    error::Error,
    template::{self, Template},
};
use std::io::Write;

/// Appends header, fields and footer to `output`.
/// The emitter never closes or flushes the output, that is up to the caller.
pub(crate) struct Emitter<'a, W> {
    config: &'a Config,
    output: &'a mut W,
}

impl<'a, W: Write> Emitter<'a, W> {
    pub(crate) fn new(config: &'a Config, output: &'a mut W) -> Self {
        Emitter { config, output }
    }

    /// Copies every header line, substituting the class name.
    pub(crate) fn header(&mut self) -> Result<(), Error> {
        let header = template::read_template(&self.config.template_path(Template::Header))?;
        for line in template::lines(&header) {
            let line = template::substitute_class_name(line, &self.config.class_name);
            self.write(&line)?;
        }
        Ok(())
    }

    /// Emits the marked lines of the field template once per index in
    /// `0..count`. The template is read again for every index.
    pub(crate) fn fields(&mut self, count: i64) -> Result<(), Error> {
        let path = self.config.template_path(Template::Field);
        for index in 0..count {
            let field = template::read_template(&path)?;
            for line in template::lines(&field) {
                if let Some(line) = template::substitute_field_index(line, index) {
                    self.write(&line)?;
                }
            }
        }
        Ok(())
    }

    pub(crate) fn footer(&mut self) -> Result<(), Error> {
        let footer = template::read_template(&self.config.template_path(Template::Footer))?;
        self.write(&footer)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.output
            .write_all(bytes)
            .map_err(|error| Error::output_io_error(&self.config.output_path(), error))
    }
}
