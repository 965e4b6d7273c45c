mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn default_is_markdown_whitepaper_with_full_layout() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("technical")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Generated 1 files:"));

    let files = ctx.files_in(&ctx.technical_dir());
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("MIZ_OKI_3.0_Technical_Whitepaper_"));
    assert!(files[0].ends_with(".md"));

    for dir in ["api_docs", "architecture", "deployment"] {
        assert!(ctx.technical_dir().join(dir).is_dir(), "{dir} should exist");
    }

    let text = ctx.read_single(&ctx.technical_dir());
    assert!(text.starts_with("# MIZ OKI 3.0™"));
    assert!(text.contains("\n## TECHNICAL SUPPORT\n"));
}

#[test]
fn api_reference_goes_to_api_docs() {
    let ctx = TestContext::new();

    ctx.cli().args(["t", "--type", "api"]).assert().success();

    let files = ctx.files_in(&ctx.technical_dir().join("api_docs"));
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("MIZ_OKI_API_Reference_"));
    assert!(ctx.files_in(&ctx.technical_dir()).is_empty());

    let text = ctx.read_single(&ctx.technical_dir().join("api_docs"));
    assert!(text.starts_with("# MIZ OKI 3.0™ API Reference\n## Version 3.0.1\n"));
}

#[test]
fn deployment_guide_ignores_missing_backend() {
    let ctx = TestContext::new();
    ctx.disable_backend();

    ctx.cli()
        .args(["technical", "-t", "deployment", "-f", "word"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning:").not());

    let files = ctx.files_in(&ctx.technical_dir().join("deployment"));
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("MIZ_OKI_Deployment_Guide_"));
}

#[test]
fn all_markdown_writes_three_documents() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["technical", "-t", "all"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Generated 3 files:"));

    assert_eq!(ctx.files_in(&ctx.technical_dir()).len(), 1);
    assert_eq!(ctx.files_in(&ctx.technical_dir().join("api_docs")).len(), 1);
    assert_eq!(ctx.files_in(&ctx.technical_dir().join("deployment")).len(), 1);
    assert!(ctx.files_in(&ctx.technical_dir().join("architecture")).is_empty());
}

#[test]
fn all_both_without_backend_warns() {
    let ctx = TestContext::new();
    ctx.disable_backend();

    ctx.cli()
        .args(["technical", "-t", "all", "-f", "both"])
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("Generated 3 files:"))
        .stderr(predicate::str::contains("Warning: Structured document backend"));
}

#[test]
fn whitepaper_word_without_backend_fails() {
    let ctx = TestContext::new();
    ctx.disable_backend();

    ctx.cli()
        .args(["technical", "-f", "word"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Structured document backend 'docx' is not available"));

    assert!(ctx.files_in(&ctx.technical_dir()).is_empty());
}

#[test]
fn output_flag_overrides_whitepaper_name() {
    let ctx = TestContext::new();

    ctx.cli().args(["technical", "-o", "architecture.md"]).assert().success();

    assert_eq!(ctx.files_in(&ctx.technical_dir()), vec!["architecture.md".to_string()]);
}

#[test]
fn output_flag_rejects_paths() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["technical", "-o", "../escape.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Output filename must be a plain file name"));

    assert!(!ctx.work_dir().join("escape.md").exists());
    assert!(!ctx.technical_dir().exists());
}

#[test]
fn configured_directory_is_used() {
    let ctx = TestContext::new();
    ctx.write_config("[output]\ntechnical_dir = \"docs\"\n");

    ctx.cli().args(["technical", "-t", "api"]).assert().success();

    assert_eq!(ctx.files_in(&ctx.work_dir().join("docs").join("api_docs")).len(), 1);
    assert!(!ctx.technical_dir().exists());
}

#[test]
fn invalid_config_is_fatal() {
    let ctx = TestContext::new();
    ctx.write_config("[output]\nunknown = true\n");

    ctx.cli()
        .arg("technical")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: TOML parse error"));
}

#[cfg(feature = "docx")]
#[test]
fn all_both_writes_four_documents() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["technical", "-t", "all", "-f", "both"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Generated 4 files:"));

    let files = ctx.files_in(&ctx.technical_dir());
    assert_eq!(files.len(), 2, "{files:?}");
    assert!(files.iter().any(|f| f.ends_with(".md")));
    assert!(files.iter().any(|f| f.ends_with(".docx")));
}
