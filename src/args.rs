//! Command line parsing.

use crate::{config::Config, error::Error};
use clap::Parser;
use std::ffi::OsString;

pub const USAGE: &str = "classgen -n <class_name> -s <object_size>";

#[derive(Parser, Debug)]
#[command(
    name = "classgen",
    disable_help_flag = true,
    disable_version_flag = true,
    infer_long_args = true,
    args_override_self = true
)]
struct Arguments {
    #[arg(short = 'h', long = "help")]
    help: bool,

    #[arg(short = 'n', long = "cname", allow_hyphen_values = true)]
    class_name: Option<String>,

    /// Object size in bytes, as given on the command line.
    #[arg(short = 's', long = "osize", allow_hyphen_values = true)]
    object_size: Option<String>,

    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Operands after the flags. Unused.
    #[arg(hide = true)]
    operands: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Help,
    Generate(Config),
}

/// Parses a full argument list, including the program name.
pub fn parse<I, T>(args: I) -> Result<Action, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let arguments =
        Arguments::try_parse_from(args).map_err(|error| Error::usage(clap_reason(&error)))?;
    if arguments.help {
        return Ok(Action::Help);
    }
    let class_name = match arguments.class_name {
        Some(class_name) if !class_name.is_empty() => class_name,
        Some(_) => return Err(Error::usage("class name must not be empty")),
        None => return Err(Error::usage("missing class name (-n/--cname)")),
    };
    let object_size = match arguments.object_size {
        Some(object_size) => parse_object_size(&object_size)?,
        None => return Err(Error::usage("missing object size (-s/--osize)")),
    };
    let mut config = Config::new(class_name, object_size);
    config.log_progress = arguments.verbose;
    Ok(Action::Generate(config))
}

fn parse_object_size(value: &str) -> Result<i64, Error> {
    value
        .trim()
        .parse()
        .map_err(|source| Error::InvalidObjectSize {
            value: value.to_string(),
            source,
        })
}

fn clap_reason(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string()
}
