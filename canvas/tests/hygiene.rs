//! Hygiene — enforces coding standards at test time
//!
//! Scans the crate's production sources for antipatterns. Each pattern has a
//! budget (zero unless noted); a budget never grows, it only ratchets down.

use std::fs;
use std::path::Path;

/// (pattern, budget, why it is banned)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics crash the host; propagate or handle"),
    (".expect(", 0, "panics crash the host; propagate or handle"),
    ("panic!(", 0, "panics crash the host; propagate or handle"),
    ("unreachable!(", 0, "prove it with types instead"),
    ("todo!(", 0, "stubs do not ship"),
    ("unimplemented!(", 0, "stubs do not ship"),
    ("let _ =", 0, "silently discards a value worth inspecting"),
    (".ok()", 0, "silently discards the error"),
    ("#[allow(dead_code)]", 0, "delete it or wire it up"),
];

fn production_sources() -> Vec<(String, String)> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let name = path.to_string_lossy().to_string();
            if name.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((name, content));
            }
        }
    }
}

#[test]
fn antipattern_budgets_hold() {
    let files = production_sources();
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let mut violations = Vec::new();
    for (pattern, budget, reason) in BUDGETS {
        let hits: Vec<String> = files
            .iter()
            .flat_map(|(path, content)| {
                content
                    .lines()
                    .enumerate()
                    .filter(|(_, line)| line.contains(pattern))
                    .map(|(n, _)| format!("  {path}:{}", n + 1))
                    .collect::<Vec<_>>()
            })
            .collect();
        if hits.len() > *budget {
            violations.push(format!(
                "`{pattern}` over budget ({} > {budget}; {reason}):\n{}",
                hits.len(),
                hits.join("\n")
            ));
        }
    }
    assert!(violations.is_empty(), "\n{}", violations.join("\n\n"));
}
