//! Generates the object size classes the GC and allocation benchmarks use.
//!
//! Usage: `generate <template_directory> [classgen_executable]`
//!
//! Run from the workspace root after `cargo build --release`.

use anyhow::{bail, Context as _, Result};
use classgen::config::Config;
use cradle::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

const SIZE_CLASSES: &[(&str, i64)] = &[
    ("SmallObj", 8),
    ("AverageObj", 48),
    ("LargeObj", 256),
    ("HugeObj", 4096 * 2),
];

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let template_directory = match args.next() {
        Some(directory) => PathBuf::from(directory),
        None => bail!("usage: generate <template_directory> [classgen_executable]"),
    };
    let executable = fs::canonicalize(
        args.next()
            .unwrap_or_else(|| "./target/release/classgen".to_string()),
    )
    .context("cannot find the classgen executable, run `cargo build --release` first")?;
    generate_size_classes(&executable, &template_directory)?;
    Ok(())
}

/// Runs `executable` once per size class inside `template_directory`
/// and returns the paths of the generated files.
fn generate_size_classes(executable: &Path, template_directory: &Path) -> Result<Vec<PathBuf>> {
    SIZE_CLASSES
        .iter()
        .map(|(class_name, object_size)| {
            generate(executable, template_directory, class_name, *object_size)
        })
        .collect()
}

fn generate(
    executable: &Path,
    template_directory: &Path,
    class_name: &str,
    object_size: i64,
) -> Result<PathBuf> {
    let (Status(status), Stderr(stderr)) = run_output!(
        executable,
        ("-n", class_name),
        ("-s", object_size.to_string()),
        CurrentDir(template_directory)
    );
    if !status.success() {
        eprint!("{}", stderr);
        bail!("generating {} failed: {}", class_name, status);
    }
    let config = Config {
        output_directory: template_directory.to_owned(),
        ..Config::new(class_name, object_size)
    };
    let path = config.output_path();
    let bytes = fs::metadata(&path)
        .with_context(|| format!("{} was not generated", path.display()))?
        .len();
    eprintln!(
        "{}: {} fields, {} bytes of source",
        path.display(),
        config.field_count(),
        bytes
    );
    Ok(path)
}
