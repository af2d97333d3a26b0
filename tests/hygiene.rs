//! Source layout rules for `src/`.
//!
//! The native core (`state`, `util`, `config`, `consts`) must build and test
//! without browser bindings, JS interop stays in the modules that own
//! listener lifetimes, and production code neither panics nor casts numbers
//! with `as`. Comment lines are not scanned.

use std::fs;
use std::path::Path;

struct SourceFile {
    /// Path relative to the crate root with `/` separators, e.g. `src/util/color.rs`.
    path: String,
    content: String,
    is_test: bool,
}

struct Rule {
    pattern: &'static str,
    /// Exact paths, or directory prefixes ending in `/`.
    allowed_in: &'static [&'static str],
}

const BROWSER_DIR: &str = "src/browser/";

/// Modules that create JS closures and leak them for the page lifetime.
const LISTENER_OWNERS: &[&str] = &["src/browser/dom.rs", "src/browser/animation.rs"];

fn sources() -> Vec<SourceFile> {
    let mut files = Vec::new();
    walk(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    files
}

fn walk(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };
            let path = path.to_string_lossy().replace('\\', "/");
            let is_test = path.ends_with("_test.rs");
            out.push(SourceFile { path, content, is_test });
        }
    }
}

fn is_allowed(path: &str, allowed_in: &[&str]) -> bool {
    allowed_in
        .iter()
        .any(|allowed| if allowed.ends_with('/') { path.starts_with(allowed) } else { path == *allowed })
}

/// `path:line: text` for every production code line breaking one of `rules`.
fn violations(rules: &[Rule]) -> Vec<String> {
    let mut found = Vec::new();
    for file in sources().iter().filter(|f| !f.is_test) {
        for (number, line) in file.content.lines().enumerate() {
            let code = line.trim_start();
            if code.starts_with("//") {
                continue;
            }
            for rule in rules {
                if code.contains(rule.pattern) && !is_allowed(&file.path, rule.allowed_in) {
                    found.push(format!("  {}:{}: {}", file.path, number + 1, code));
                }
            }
        }
    }
    found
}

fn assert_clean(what: &str, rules: &[Rule]) {
    let found = violations(rules);
    assert!(found.is_empty(), "{what}:\n{}", found.join("\n"));
}

#[test]
fn core_modules_stay_free_of_browser_bindings() {
    assert_clean(
        "browser bindings outside src/browser",
        &[
            Rule { pattern: "web_sys", allowed_in: &[BROWSER_DIR] },
            Rule { pattern: "js_sys", allowed_in: &[BROWSER_DIR] },
            Rule { pattern: "gloo_timers", allowed_in: &[BROWSER_DIR] },
            Rule { pattern: "wasm_bindgen", allowed_in: &[BROWSER_DIR, "src/error.rs"] },
        ],
    );
}

#[test]
fn window_is_reached_only_through_dom_helpers() {
    assert_clean(
        "direct web_sys::window() outside dom.rs",
        &[Rule { pattern: "web_sys::window()", allowed_in: &["src/browser/dom.rs"] }],
    );
}

#[test]
fn leaked_closures_stay_in_listener_owners() {
    assert_clean(
        "closures created or leaked outside dom::listen / mount_entrance",
        &[
            Rule { pattern: "Closure::", allowed_in: LISTENER_OWNERS },
            Rule { pattern: ".forget()", allowed_in: LISTENER_OWNERS },
        ],
    );
}

#[test]
fn no_numeric_as_casts() {
    assert_clean(
        "numeric `as` casts; use From/TryFrom",
        &[
            Rule { pattern: " as u8", allowed_in: &[] },
            Rule { pattern: " as u16", allowed_in: &[] },
            Rule { pattern: " as u32", allowed_in: &[] },
            Rule { pattern: " as u64", allowed_in: &[] },
            Rule { pattern: " as usize", allowed_in: &[] },
            Rule { pattern: " as i32", allowed_in: &[] },
            Rule { pattern: " as i64", allowed_in: &[] },
            Rule { pattern: " as f32", allowed_in: &[] },
            Rule { pattern: " as f64", allowed_in: &[] },
        ],
    );
}

#[test]
fn production_code_does_not_panic_or_discard() {
    assert_clean(
        "panicking or discarding calls",
        &[
            Rule { pattern: ".unwrap()", allowed_in: &[] },
            Rule { pattern: ".expect(", allowed_in: &[] },
            Rule { pattern: "panic!(", allowed_in: &[] },
            Rule { pattern: "todo!(", allowed_in: &[] },
            Rule { pattern: "unimplemented!(", allowed_in: &[] },
            Rule { pattern: "unreachable!(", allowed_in: &[] },
            Rule { pattern: "let _ =", allowed_in: &[] },
        ],
    );
}

#[test]
fn every_test_file_is_wired_into_its_module() {
    let files = sources();
    let missing = files
        .iter()
        .filter(|f| f.is_test)
        .filter(|test| {
            let name = test.path.rsplit('/').next().unwrap_or_default();
            let dir = &test.path[..test.path.len() - name.len()];
            let include = format!("#[path = \"{name}\"]");
            !files
                .iter()
                .any(|f| !f.is_test && f.path.starts_with(dir) && !f.path[dir.len()..].contains('/') && f.content.contains(&include))
        })
        .map(|test| format!("  {}", test.path))
        .collect::<Vec<_>>();
    assert!(missing.is_empty(), "test files never compiled (no #[path] include):\n{}", missing.join("\n"));
}
