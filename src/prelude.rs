//! `classgen`'s `prelude` module.
//! It re-exports the most commonly used items from classgen.
//! We recommend importing classgen like this:
//! `use classgen::prelude::*;`

pub use crate::{
    args::{Action, USAGE},
    config::{Config, FIELD_WIDTH},
    context::Context,
    error::Error,
    generate, run_main,
    template::Template,
    Generated,
};
