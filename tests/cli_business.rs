mod common;

use common::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn healthcare_markdown_contains_record_literals() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["business", "--industry", "healthcare", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Generated 1 files:\n  - "))
        .stdout(predicate::str::contains("MIZ_OKI_3.0_Whitepaper_healthcare_"));

    let files = ctx.files_in(&ctx.business_dir());
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("MIZ_OKI_3.0_Whitepaper_healthcare_"));
    assert!(files[0].ends_with(".md"));

    let text = ctx.read_single(&ctx.business_dir());
    assert!(text.contains("1,187% 3-year ROI"));
    assert!(text.contains(
        "Chief Medical Officers, Healthcare CIOs, Hospital Administrators, Medical Directors"
    ));
}

#[test]
fn both_without_backend_writes_markdown_and_warns() {
    let ctx = TestContext::new();
    ctx.disable_backend();

    ctx.cli()
        .args(["business", "-i", "healthcare", "-f", "both"])
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("Generated 1 files:"))
        .stderr(predicate::str::contains("Warning: Structured document backend 'docx' is not available"));

    let files = ctx.files_in(&ctx.business_dir());
    assert_eq!(files.len(), 1, "{files:?}");
    assert!(files[0].ends_with(".md"));
}

#[test]
fn warnings_are_printed_once() {
    let ctx = TestContext::new();
    ctx.disable_backend();

    let output =
        ctx.cli().args(["business", "-i", "healthcare", "-f", "both"]).output().expect("run wpgen");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("is not available").count(), 1, "{stderr}");
}

#[test]
fn fixed_variant_with_both_fails_without_backend() {
    let ctx = TestContext::new();
    ctx.disable_backend();

    for variant in ["premium", "technical"] {
        ctx.cli()
            .args(["business", "-t", variant, "-f", "both"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "Error: Structured document backend 'docx' is not available",
            ));
    }

    assert!(ctx.files_in(&ctx.business_dir()).is_empty());
}

#[test]
fn word_without_backend_fails() {
    let ctx = TestContext::new();
    ctx.disable_backend();

    ctx.cli()
        .args(["business", "-i", "healthcare", "-f", "word"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Structured document backend 'docx' is not available"));

    assert!(ctx.files_in(&ctx.business_dir()).is_empty());
}

#[test]
fn unknown_industry_is_rejected_by_the_parser() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["b", "-i", "aerospace", "-f", "md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'aerospace'"))
        .stderr(predicate::str::contains("healthcare"));

    assert!(ctx.files_in(&ctx.business_dir()).is_empty());
}

#[test]
fn premium_markdown_writes_nothing() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["business", "--type", "premium", "--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Generated 0 files:"))
        .stderr(predicate::str::contains("Warning: The premium whitepaper is only available"));

    assert!(ctx.files_in(&ctx.business_dir()).is_empty());
}

#[test]
fn workspace_flag_redirects_output() {
    let ctx = TestContext::new();
    let other = ctx.work_dir().join("elsewhere");
    fs::create_dir_all(&other).expect("create workspace");

    ctx.cli()
        .args(["business", "-f", "markdown", "-w"])
        .arg(&other)
        .assert()
        .success();

    assert!(ctx.files_in(&ctx.business_dir()).is_empty());
    assert_eq!(ctx.files_in(&other.join("generated_whitepapers")).len(), 1);
}

#[test]
fn json_report_lists_files() {
    let ctx = TestContext::new();

    let output = ctx
        .cli()
        .args(["business", "-i", "media_buying", "-f", "markdown", "--json"])
        .output()
        .expect("run wpgen");
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json report");
    let files = report["files"].as_array().expect("files array");
    assert_eq!(files.len(), 1);
    assert!(files[0].as_str().expect("path").contains("MIZ_OKI_3.0_Whitepaper_media_buying_"));
    assert_eq!(report["warnings"].as_array().map(Vec::len), Some(0));
}

#[test]
fn invalid_format_is_rejected_by_the_parser() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["business", "-f", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'pdf'"));
}

#[cfg(feature = "docx")]
mod word {
    use super::*;

    #[test]
    fn default_format_is_a_word_package() {
        let ctx = TestContext::new();

        ctx.cli().arg("business").assert().success();

        let files = ctx.files_in(&ctx.business_dir());
        assert_eq!(files.len(), 1);
        assert!(files[0].starts_with("MIZ_OKI_3.0_Whitepaper_general_business_"));
        assert!(files[0].ends_with(".docx"));

        let bytes = fs::read(ctx.business_dir().join(&files[0])).expect("read docx");
        assert!(bytes.starts_with(b"PK\x03\x04"), "zip container");
    }

    #[test]
    fn fixed_variants_have_their_own_names() {
        let ctx = TestContext::new();

        ctx.cli().args(["business", "-t", "premium"]).assert().success();
        ctx.cli().args(["business", "-t", "technical", "-f", "docx"]).assert().success();

        let files = ctx.files_in(&ctx.business_dir());
        assert_eq!(files.len(), 2, "{files:?}");
        assert!(files.iter().any(|f| f.starts_with("MIZ_OKI_3.0_Premium_Whitepaper_")));
        assert!(files.iter().any(|f| f.starts_with("MIZ_OKI_3.0_Technical_Whitepaper_")));
    }
}
