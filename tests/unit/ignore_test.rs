//! Tests for the ignore matcher
//!
//! Only literal patterns become directory exclusions; anything with a
//! leading or trailing wildcard belongs to the template copy step.

use std::path::Path;

use scaffold_check::config::ValidatorConfig;
use scaffold_check::ignore::IgnoreSpec;

// =============================================================================
// build
// =============================================================================

#[test]
fn keeps_exactly_the_literal_patterns() {
    let patterns = ["dist", "*.lock", ".env*", "*", "out", "Dockerfile*", ".git"];
    let spec = IgnoreSpec::build(patterns);

    for pattern in patterns {
        let literal = !pattern.starts_with('*') && !pattern.ends_with('*');
        assert_eq!(spec.contains(pattern), literal, "pattern {pattern}");
    }
    assert_eq!(spec.len(), 3);
}

#[test]
fn default_config_patterns() {
    let spec = IgnoreSpec::build(&ValidatorConfig::default().ignore_patterns);

    assert!(spec.contains("node_modules"));
    assert!(spec.contains(".git"));
    assert!(spec.contains("package-lock.json"));
    assert!(!spec.contains("*.pyc"));
    assert!(!spec.contains("*.lock"));
    assert!(spec.names().all(|n| !n.contains('*')));
}

#[test]
fn empty_patterns_build_empty_spec() {
    let spec = IgnoreSpec::build(Vec::<String>::new());
    assert!(spec.is_empty());
    assert!(!spec.is_ignored(Path::new("node_modules/pkg/index.js")));
}

// =============================================================================
// is_ignored
// =============================================================================

#[test]
fn matches_any_component() {
    let spec = IgnoreSpec::build(["node_modules", ".DS_Store"]);

    assert!(spec.is_ignored(Path::new("node_modules")));
    assert!(spec.is_ignored(Path::new("web/node_modules/react/index.js")));
    assert!(spec.is_ignored(Path::new("assets/.DS_Store")));
}

#[test]
fn requires_exact_component() {
    let spec = IgnoreSpec::build(["out"]);

    assert!(!spec.is_ignored(Path::new("layout/page.tsx")));
    assert!(!spec.is_ignored(Path::new("output/report.md")));
    assert!(!spec.is_ignored(Path::new("src/out.rs")));
    assert!(spec.is_ignored(Path::new("src/out/main.js")));
}

#[test]
fn wildcard_pattern_does_not_match_literally() {
    let spec = IgnoreSpec::build(["*.pyc"]);
    assert!(!spec.is_ignored(Path::new("app/*.pyc")));
    assert!(!spec.is_ignored(Path::new("app/main.pyc")));
}
