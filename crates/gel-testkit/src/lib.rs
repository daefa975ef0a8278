//! Test utilities for gel
//!
//! This crate provides shared testing utilities used across the gel workspace:
//! scratch directories, template fixtures, and access to a Go toolchain for
//! end-to-end checks of generated code.

pub mod fixtures;
pub mod go;

pub use fixtures::{write_fixture, Fixture, FIXTURES};
pub use go::{go_toolchain, main_go, run_go, GoRun};

use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// Cargo runs tests from the crate root, so everything ends up under
/// `<crate>/.tmp/`, which is gitignored.
///
/// # Panics
///
/// Panics if:
/// - Unable to determine current directory
/// - Unable to create `.tmp/` directory
/// - Unable to create temporary subdirectory
///
/// # Examples
///
/// ```rust
/// use gel_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("hello.gel");
/// std::fs::write(&file_path, "package: main\nfunc: F\n---\nhi").unwrap();
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
