//! Go toolchain access for end-to-end tests
//!
//! Tests that execute generated code call [`go_toolchain`] first and return
//! early when it is `None`, so the suite still passes on machines without Go.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Environment variable pointing at a specific `go` binary
pub const GO_BINARY_ENV: &str = "GEL_GO_BINARY";

/// Locate a Go toolchain: `GEL_GO_BINARY` first, then `PATH`
pub fn go_toolchain() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(GO_BINARY_ENV) {
        let path = PathBuf::from(path);
        return path.exists().then_some(path);
    }
    which::which("go").ok()
}

/// Go `main` program that runs each call against a fresh buffer and prints
/// the buffer's contents
pub fn main_go(calls: &[&str]) -> String {
    let mut out = String::from(
        "package main\n\nimport (\n\t\"bytes\"\n\t\"fmt\"\n)\n\nfunc main() {\n",
    );
    for call in calls {
        out.push_str("\t{\n\t\tvar b bytes.Buffer\n");
        out.push_str(&format!("\t\tif err := {}; err != nil {{\n\t\t\tpanic(err)\n\t\t}}\n", call));
        out.push_str("\t\tfmt.Print(b.String())\n\t}\n");
    }
    out.push_str("}\n");
    out
}

/// Output of a `go run`
#[derive(Debug)]
pub struct GoRun {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// `go run` the given files inside `dir`
pub fn run_go(go: &Path, dir: &Path, files: &[&str]) -> std::io::Result<GoRun> {
    let output = Command::new(go)
        .arg("run")
        .args(files)
        .current_dir(dir)
        .env("GOTOOLCHAIN", "local")
        .output()?;

    Ok(GoRun {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_go_wraps_each_call() {
        let program = main_go(&["A(&b)", "B(&b, 1)"]);
        assert!(program.starts_with("package main\n"));
        assert!(program.contains("if err := A(&b); err != nil {"));
        assert!(program.contains("if err := B(&b, 1); err != nil {"));
        assert_eq!(program.matches("var b bytes.Buffer").count(), 2);
    }
}
