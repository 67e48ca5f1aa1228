//! Tests for the placeholder scanner

use std::path::PathBuf;

use scaffold_check::config::ValidatorConfig;
use scaffold_check::ignore::IgnoreSpec;
use scaffold_check::scanner::{self, FileVerdict, PlaceholderScanner, SkipReason};

use crate::common::TestProject;

fn default_scan(project: &TestProject) -> scaffold_check::models::CheckResult {
    let config = ValidatorConfig::default();
    let ignore = IgnoreSpec::build(&config.ignore_patterns);
    scanner::scan(project.path(), &ignore, &config.exempt_dirs, &config.exempt_files)
}

#[test]
fn clean_project_passes() {
    let project = TestProject::complete();
    let result = default_scan(&project);

    assert!(result.passed);
    assert_eq!(result.name, "No placeholders");
    assert!(result.message.is_empty());
}

#[test]
fn reports_single_offender_relative_to_root() {
    let project = TestProject::complete();
    project.add_file("src/config.json", "{\"name\": \"{{PROJECT_NAME}}\"}\n");

    let result = default_scan(&project);

    assert!(!result.passed);
    assert_eq!(
        result.message,
        "1 file(s) have unreplaced placeholders: src/config.json"
    );
}

#[test]
fn offenders_follow_lexical_walk_order() {
    let project = TestProject::empty();
    project.add_file("c.yml", "port: {{PROJECT_PORT_BACKEND}}");
    project.add_file("b.md", "{{CREATION_DATE}}");
    project.add_file("a/z.sh", "echo {{PROJECT_PATH}}");

    let result = default_scan(&project);

    assert_eq!(
        result.message,
        "3 file(s) have unreplaced placeholders: a/z.sh, b.md, c.yml"
    );
}

#[test]
fn ignored_directories_never_reported() {
    let project = TestProject::empty();
    project.add_file("node_modules/pkg/index.js", "{{PROJECT_NAME}}");
    project.add_file("web/dist/app.js", "{{PROJECT_NAME}}");
    project.add_file("package-lock.json", "{{PROJECT_NAME}}");
    project.add_file(".git/description", "{{PROJECT_NAME}}");

    let result = default_scan(&project);
    assert!(result.passed, "unexpected: {}", result.message);
}

#[test]
fn exempt_directories_never_reported() {
    let project = TestProject::empty();
    project.add_file(".config/template.env", "{{PROJECT_NAME}}");
    project.add_file("docs/guide.md", "{{PROJECT_NAME}}");
    project.add_file(".githooks/pre-commit", "{{PROJECT_NAME}}");
    project.add_file("technical/architecture/overview.md", "{{PROJECT_NAME}}");

    let result = default_scan(&project);
    assert!(result.passed, "unexpected: {}", result.message);
}

#[test]
fn exempt_file_name_skipped_at_any_depth() {
    let project = TestProject::empty();
    project.add_file("README.md", "# {{PROJECT_NAME}}");
    project.add_file("product/README.md", "# {{PROJECT_NAME}}");

    let result = default_scan(&project);
    assert!(result.passed, "unexpected: {}", result.message);
}

#[test]
fn exempt_dir_name_applies_to_directories_only() {
    let project = TestProject::empty();
    project.add_file("docs", "{{PROJECT_NAME}}");

    let result = default_scan(&project);
    assert_eq!(result.message, "1 file(s) have unreplaced placeholders: docs");
}

#[test]
fn ancestors_of_root_do_not_exclude() {
    let project = TestProject::empty_under("build");
    project.add_file("app.yml", "name: {{PROJECT_NAME}}");

    let result = default_scan(&project);
    assert_eq!(result.message, "1 file(s) have unreplaced placeholders: app.yml");
}

#[test]
fn lowercase_and_spaced_braces_are_not_placeholders() {
    let project = TestProject::empty();
    project.add_file("template.hbs", "{{name}} {{ PROJECT_NAME }} {PROJECT_NAME}");

    let result = default_scan(&project);
    assert!(result.passed, "unexpected: {}", result.message);
}

#[test]
fn binary_file_skipped_not_reported() {
    let project = TestProject::empty();
    let mut bytes = b"{{PROJECT_NAME}}".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe, 0x00, 0x80]);
    project.add_bytes("logo.png", &bytes);

    let config = ValidatorConfig::default();
    let ignore = IgnoreSpec::build(&config.ignore_patterns);
    let report = PlaceholderScanner::new(&ignore, &config.exempt_dirs, &config.exempt_files)
        .scan_tree(project.path());

    assert!(report.offenders.is_empty());
    assert_eq!(report.skipped, [(PathBuf::from("logo.png"), SkipReason::NotText)]);
    assert!(report.into_check_result().passed);
}

#[test]
fn scan_report_counts_scanned_files() {
    let project = TestProject::complete();
    project.add_file("src/main.py", "print('{{PROJECT_NAME}}')");

    let config = ValidatorConfig::default();
    let ignore = IgnoreSpec::build(&config.ignore_patterns);
    let report = PlaceholderScanner::new(&ignore, &config.exempt_dirs, &config.exempt_files)
        .scan_tree(project.path());

    // CLAUDE.md, _START-HERE.md, .gitignore, workspace, product/roadmap.md, src/main.py
    assert_eq!(report.files_scanned, 6);
    assert_eq!(report.offenders, [PathBuf::from("src/main.py")]);
}

#[test]
fn scan_file_verdicts() {
    let project = TestProject::empty();
    project.add_file("clean.txt", "nothing here");
    project.add_file("dirty.txt", "{{TENANT_MODEL}}");
    project.add_bytes("blob.bin", &[0xc3, 0x28]);

    assert_eq!(scanner::scan_file(&project.path().join("clean.txt")), FileVerdict::Clean);
    assert_eq!(scanner::scan_file(&project.path().join("dirty.txt")), FileVerdict::Placeholder);
    assert_eq!(
        scanner::scan_file(&project.path().join("blob.bin")),
        FileVerdict::Skipped(SkipReason::NotText)
    );
    assert_eq!(
        scanner::scan_file(&project.path().join("missing.txt")),
        FileVerdict::Skipped(SkipReason::Unreadable)
    );
}
