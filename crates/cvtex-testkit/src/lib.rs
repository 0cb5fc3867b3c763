//! Test utilities for cvtex
//!
//! This crate provides shared testing utilities used across the cvtex workspace.

pub mod compiler;
pub mod fixtures;

use std::ffi::OsString;
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

/// Environment variable the compiler resolver reads
pub const COMPILER_ENV_VAR: &str = "CVTEX_PDFLATEX";

/// Static mutex to serialize tests that modify environment variables
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// This keeps all test temporary files in a single gitignored location that is
/// easy to clean up manually if needed.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or `.tmp/` cannot be
/// created.
///
/// # Examples
///
/// ```rust
/// use cvtex_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("data.json");
/// std::fs::write(&file_path, "{}").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// Run `f` with `CVTEX_PDFLATEX` set to `compiler` (or removed for `None`)
///
/// Holds [`ENV_LOCK`] for the duration and restores the previous value
/// afterwards, so in-process tests never see each other's compiler.
pub fn with_compiler_env<F, R>(compiler: Option<&Path>, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let original: Option<OsString> = std::env::var_os(COMPILER_ENV_VAR);

    // SAFETY: ENV_LOCK serializes every test that touches the environment
    unsafe {
        match compiler {
            Some(path) => std::env::set_var(COMPILER_ENV_VAR, path),
            None => std::env::remove_var(COMPILER_ENV_VAR),
        }
    }

    let result = f();

    // SAFETY: still holding ENV_LOCK
    unsafe {
        match original {
            Some(value) => std::env::set_var(COMPILER_ENV_VAR, value),
            None => std::env::remove_var(COMPILER_ENV_VAR),
        }
    }

    result
}
