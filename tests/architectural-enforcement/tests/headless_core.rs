//! Integration Test: Headless Core
//!
//! **Policy**: `ledger-core` is pure domain state and must stay usable from
//! any surface. It MUST NOT reference ratatui, crossterm, or an async
//! runtime; all of that belongs to the TUI crate.

use std::fs;
use std::path::{Path, PathBuf};

/// Crates the headless core must never mention
const FORBIDDEN_IN_CORE: &[&str] = &["ratatui", "crossterm", "tokio"];

#[test]
fn test_core_has_no_ui_or_runtime_references() {
    let violations = find_violations(&core_src_dir());

    if !violations.is_empty() {
        eprintln!("\nUI/runtime references found in the headless core:");
        for violation in &violations {
            eprintln!("  {}", violation);
        }
        eprintln!("\nMove surface concerns into tui/; the core stays headless.");

        panic!(
            "Found {} headless-core violation(s). Fix these before merging!",
            violations.len()
        );
    }
}

#[test]
fn test_core_manifest_has_no_ui_or_runtime_deps() {
    let manifest = core_src_dir()
        .parent()
        .map(|dir| dir.join("Cargo.toml"))
        .expect("core manifest path");
    let contents = fs::read_to_string(&manifest).expect("read core Cargo.toml");

    for forbidden in FORBIDDEN_IN_CORE {
        assert!(
            !contents.contains(forbidden),
            "ledger-core Cargo.toml must not depend on `{forbidden}`"
        );
    }
}

/// `ledger/core/src`, resolved relative to this package
fn core_src_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../ledger/core/src")
}

fn find_violations(dir: &Path) -> Vec<String> {
    let mut violations = Vec::new();

    for entry in walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.path().extension().and_then(|s| s.to_str()) == Some("rs") {
            check_file(entry.path(), &mut violations);
        }
    }

    violations
}

fn check_file(path: &Path, violations: &mut Vec<String>) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for (line_no, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("//") {
            continue;
        }
        for forbidden in FORBIDDEN_IN_CORE {
            if trimmed.contains(forbidden) {
                violations.push(format!(
                    "{}:{}: {}",
                    path.display(),
                    line_no + 1,
                    trimmed
                ));
            }
        }
    }
}
