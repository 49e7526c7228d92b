//! Hygiene: enforces coding standards at test time.
//!
//! Scans `src/` for patterns the portfolio crate does not allow in production
//! code. A panic in the WASM module stops every controller on the page, and a
//! swallowed error hides why a widget went quiet, so both budgets stay at
//! zero. Budgets never grow: fix an existing hit before adding a new one.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0 },
    Budget { pattern: ".expect(", max: 0 },
    Budget { pattern: "panic!(", max: 0 },
    Budget { pattern: "unreachable!(", max: 0 },
    Budget { pattern: "todo!(", max: 0 },
    Budget { pattern: "unimplemented!(", max: 0 },
    Budget { pattern: "let _ =", max: 0 },
    Budget { pattern: ".ok()", max: 0 },
    Budget { pattern: "#[allow(dead_code)]", max: 0 },
    Budget { pattern: "println!(", max: 0 },
];

struct SourceFile {
    path: PathBuf,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
fn production_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files.retain(|file| !file.path.to_string_lossy().ends_with("_test.rs"));
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path, content });
            }
        }
    }
}

#[test]
fn production_source_stays_within_budgets() {
    let files = production_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let mut failures = Vec::new();
    for budget in BUDGETS {
        let hits = files
            .iter()
            .map(|file| (file, file.content.lines().filter(|line| line.contains(budget.pattern)).count()))
            .filter(|(_, count)| *count > 0)
            .collect::<Vec<_>>();
        let total = hits.iter().map(|(_, count)| count).sum::<usize>();
        if total > budget.max {
            let detail = hits
                .iter()
                .map(|(file, count)| format!("    {}: {count}", file.path.display()))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("  `{}` found {total}, max {}\n{detail}", budget.pattern, budget.max));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn pure_modules_have_sibling_tests() {
    let mut missing = Vec::new();
    for dir in ["src/state", "src/util"] {
        let Ok(entries) = fs::read_dir(dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if stem == "mod" || stem.ends_with("_test") {
                continue;
            }
            if !path.with_file_name(format!("{stem}_test.rs")).exists() {
                missing.push(path.display().to_string());
            }
        }
    }
    assert!(missing.is_empty(), "modules without a sibling _test.rs:\n  {}", missing.join("\n  "));
}

#[test]
fn browser_apis_stay_behind_hydrate() {
    let offenders = production_files()
        .into_iter()
        .filter(|file| !file.path.starts_with("src/components"))
        .filter(|file| file.content.contains("web_sys::") || file.content.contains("wasm_bindgen::"))
        .filter(|file| !file.content.contains("#[cfg(feature = \"hydrate\")]"))
        .map(|file| file.path.display().to_string())
        .collect::<Vec<_>>();
    assert!(offenders.is_empty(), "browser APIs used without a hydrate gate:\n  {}", offenders.join("\n  "));
}
