#![deny(missing_debug_implementations)]

//! `classgen` generates java classes whose instances take up roughly a
//! given number of bytes. They serve as allocation fixtures of known size
//! for memory and GC benchmarks.
//!
//! A class is assembled from three template files, `header`, `field` and
//! `footer`, found in the working directory:
//!
//! - every line of `header` is copied, with all occurrences of `####`
//!   replaced by the class name,
//! - `field` is emitted once per field. Only lines containing `field###`
//!   are kept, with every `###` on them replaced by the field index,
//! - `footer` is copied verbatim.
//!
//! The number of fields is the object size divided by 8, the size of a
//! java `long`, rounded down. The layout a JVM actually picks is not
//! taken into account, so sizes are approximate.
//!
//! ```
//! # let temp_dir = tempfile::TempDir::new().unwrap();
//! # std::env::set_current_dir(&temp_dir).unwrap();
//! use classgen::prelude::*;
//! use std::fs;
//!
//! fs::write("header", "public class #### {\n").unwrap();
//! fs::write("field", "    long field###;\n").unwrap();
//! fs::write("footer", "}\n").unwrap();
//!
//! let generated = generate(&mut Context::production(), &Config::new("Pair", 16)).unwrap();
//! assert_eq!(generated.field_count, 2);
//! assert_eq!(
//!     fs::read_to_string("Pair.java").unwrap(),
//!     "public class Pair {\n    long field0;\n    long field1;\n}\n"
//! );
//! ```
//!
//! # Command line
//!
//! The `classgen` binary wraps [`run_main`]:
//!
//! ```text
//! classgen -n <class_name> -s <object_size>
//! ```
//!
//! `-n`/`--cname` sets the class name, `-s`/`--osize` the size in bytes,
//! `-v`/`--verbose` logs progress to stderr and `-h`/`--help` prints the
//! usage line. Unknown flags print the usage line and exit with status 1.
//!
//! # Errors
//!
//! Nothing is retried or cleaned up. A missing template aborts the run
//! with [`Error::TemplateNotFound`](error::Error::TemplateNotFound) and
//! leaves whatever was written so far in the output file.

pub mod args;
pub mod config;
pub mod context;
mod emit;
pub mod error;
pub mod prelude;
pub mod template;
#[cfg(test)]
mod test_utils;

use crate::{args::Action, config::Config, context::Context, emit::Emitter};
pub use error::Error;
use std::{
    ffi::OsString,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Summary of a finished [`generate`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub path: PathBuf,
    pub field_count: i64,
}

/// Writes the class described by `config` to
/// [`config.output_path()`](Config::output_path), replacing any existing file.
pub fn generate<Stdout, Stderr>(
    context: &mut Context<Stdout, Stderr>,
    config: &Config,
) -> Result<Generated, Error>
where
    Stdout: Write,
    Stderr: Write,
{
    let path = config.output_path();
    let field_count = config.field_count();
    let file = File::create(&path).map_err(|error| Error::output_io_error(&path, error))?;
    let mut output = BufWriter::new(file);
    {
        let mut emitter = Emitter::new(config, &mut output);
        log(context, config, || format!("header -> {}", path.display()))?;
        emitter.header()?;
        log(context, config, || {
            format!("{} fields -> {}", field_count.max(0), path.display())
        })?;
        emitter.fields(field_count)?;
        log(context, config, || format!("footer -> {}", path.display()))?;
        emitter.footer()?;
    }
    output
        .flush()
        .map_err(|error| Error::output_io_error(&path, error))?;
    Ok(Generated { path, field_count })
}

fn log<Stdout, Stderr, F>(
    context: &mut Context<Stdout, Stderr>,
    config: &Config,
    message: F,
) -> Result<(), Error>
where
    Stderr: Write,
    F: FnOnce() -> String,
{
    if config.log_progress {
        writeln!(context.stderr, "+ {}", message())
            .map_err(|error| Error::output_io_error(Path::new("<stderr>"), error))?;
    }
    Ok(())
}

/// Runs the command line tool on `args` (including the program name)
/// and returns the process exit status.
pub fn run_main<Stdout, Stderr, I, T>(mut context: Context<Stdout, Stderr>, args: I) -> i32
where
    Stdout: Write,
    Stderr: Write,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let result = args::parse(args).and_then(|action| match action {
        Action::Help => {
            print_usage(&mut context);
            Ok(0)
        }
        Action::Generate(config) => generate(&mut context, &config).map(|_| 0),
    });
    match result {
        Ok(status) => status,
        Err(error) => {
            if let Error::Usage { .. } = error {
                print_usage(&mut context);
            }
            let _ = writeln!(context.stderr, "classgen: {}", error);
            1
        }
    }
}

fn print_usage<Stdout, Stderr>(context: &mut Context<Stdout, Stderr>)
where
    Stdout: Write,
{
    let _ = writeln!(context.stdout, "{}", args::USAGE);
}
