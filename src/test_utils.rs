//! Helpers shared by the unit tests.

use lazy_static::lazy_static;
use std::{
    env::{current_dir, set_current_dir},
    panic::{catch_unwind, resume_unwind, UnwindSafe},
    sync::Mutex,
};
use tempfile::TempDir;

lazy_static! {
    static ref CURRENT_DIR_LOCK: Mutex<()> = Mutex::new(());
}

/// Runs `f` with a fresh, empty working directory. Calls are serialized,
/// since the working directory is shared by all test threads.
pub(crate) fn in_temporary_directory<F, T>(f: F) -> T
where
    F: FnOnce() -> T + UnwindSafe,
{
    let _lock = CURRENT_DIR_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let temp_dir = TempDir::new().unwrap();
    let original_working_directory = current_dir().unwrap();
    set_current_dir(&temp_dir).unwrap();
    let result = catch_unwind(f);
    set_current_dir(original_working_directory).unwrap();
    result.unwrap_or_else(|panic| resume_unwind(panic))
}
