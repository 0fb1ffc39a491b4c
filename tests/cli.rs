use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const ACCOUNT_CARD: &str = r#"'use client';
import React from 'react';
import { ComponentDoc } from './component-documentation-hub';

export const SUGGESTED_FILE = "AccountCard.tsx";
export const SUGGESTED_DISPLAYNAME = "Account Card";

export default function AccountCard() {
  return <div />;
}

export const examplesAccountCard: ComponentDoc[] = [];
"#;

const PLAIN: &str = "export default function Plain() { return <div />; }\n";

const PAGE: &str = "app/accounts/docs/components/account-card/page.tsx";
const NAV: &str = "app/accounts/docs/components/navLinks.json";

fn cmd(root: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_compdoc")));
    cmd.env("NO_COLOR", "1").arg("--path").arg(root);
    cmd
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Project with one documented and one plain component.
fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "app/global.ts", "export const APPNAME = 'accounts';\n");
    write(tmp.path(), "components/account-card.tsx", ACCOUNT_CARD);
    write(tmp.path(), "components/plain.tsx", PLAIN);
    tmp
}

fn last_json_line(stdout: &[u8]) -> Value {
    let text = String::from_utf8_lossy(stdout);
    let line = text.lines().last().expect("no output");
    serde_json::from_str(line).unwrap_or_else(|e| panic!("not JSON ({e}): {line}"))
}

#[test]
fn list_reports_inventory() {
    let tmp = project();
    cmd(tmp.path())
        .args(["docs", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account Card: Not documented"))
        .stderr(predicate::str::contains("plain.tsx: No metadata found"));
}

#[test]
fn generate_writes_page_nav_and_metadata() {
    let tmp = project();
    cmd(tmp.path())
        .args(["docs", "generate"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Documentation generated for 1 component(s).",
        ));

    let page = fs::read_to_string(tmp.path().join(PAGE)).unwrap();
    assert!(page.contains("export default function AccountCardDocumentation()"));

    let nav: Value = serde_json::from_str(&fs::read_to_string(tmp.path().join(NAV)).unwrap()).unwrap();
    assert_eq!(
        nav,
        serde_json::json!([{"href": "/tools/docs/components/account-card", "label": "Account Card"}])
    );

    let metadata: Value =
        serde_json::from_str(&fs::read_to_string(tmp.path().join("metadata.json")).unwrap()).unwrap();
    assert_eq!(metadata["Account Card"]["filename"], "AccountCard.tsx");

    cmd(tmp.path())
        .args(["docs", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account Card: Documented"));
}

#[test]
fn second_generate_skips_existing_page() {
    let tmp = project();
    cmd(tmp.path()).args(["docs", "generate"]).assert().success();
    fs::write(tmp.path().join(PAGE), "hand edited").unwrap();

    cmd(tmp.path())
        .args(["--verbose", "docs", "generate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force to overwrite."));
    assert_eq!(fs::read_to_string(tmp.path().join(PAGE)).unwrap(), "hand edited");

    cmd(tmp.path())
        .args(["docs", "generate", "--force"])
        .assert()
        .success();
    assert!(
        fs::read_to_string(tmp.path().join(PAGE))
            .unwrap()
            .contains("examplesAccountCard")
    );
}

#[test]
fn json_output_is_final_stdout_line() {
    let tmp = project();
    let output = cmd(tmp.path())
        .args(["--output", "json", "docs", "generate"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report = last_json_line(&output.stdout);
    assert_eq!(
        report["successes"],
        serde_json::json!(["Documentation generated for 1 component(s)."])
    );
    assert_eq!(report["errors"], serde_json::json!([]));
}

#[test]
fn json_output_on_failure() {
    let tmp = TempDir::new().unwrap();
    let output = cmd(tmp.path())
        .args(["--output", "json", "docs", "list"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let report = last_json_line(&output.stdout);
    let error = report["errors"][0].as_str().unwrap();
    assert!(error.starts_with("Error: "), "got {error}");
    assert!(error.contains("Global file not found"), "got {error}");
}

#[test]
fn missing_global_file_fails() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "components/account-card.tsx", ACCOUNT_CARD);

    cmd(tmp.path())
        .args(["docs", "generate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Global file not found"));
    assert!(!tmp.path().join("metadata.json").exists());
}

#[test]
fn missing_app_name_constant_fails() {
    let tmp = project();
    write(tmp.path(), "app/global.ts", "export const OTHER = 'x';\n");

    cmd(tmp.path())
        .args(["docs", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("APPNAME constant not found"));
}

#[test]
fn unknown_component_fails_without_writing() {
    let tmp = project();
    cmd(tmp.path())
        .args(["docs", "generate", "--component", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Component \"Nope\" not found."));
    assert!(!tmp.path().join("metadata.json").exists());
    assert!(!tmp.path().join(PAGE).exists());
}

#[test]
fn check_reports_missing_page() {
    let tmp = project();
    cmd(tmp.path())
        .args(["docs", "check", "account-card"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Documentation for account-card needs updating",
        ));

    cmd(tmp.path()).args(["docs", "generate"]).assert().success();
    cmd(tmp.path())
        .args(["docs", "check", "account-card.tsx"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Documentation for account-card.tsx is up to date.",
        ));
}

#[test]
fn check_unknown_component_fails() {
    let tmp = project();
    cmd(tmp.path())
        .args(["docs", "check", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Component file not found"));
}

#[test]
fn created_component_is_documented() {
    let tmp = project();
    cmd(tmp.path())
        .args(["component", "create", "MyWidget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Component created"));
    assert!(tmp.path().join("components/my-widget.tsx").exists());

    cmd(tmp.path())
        .args(["docs", "generate", "--component", "My Widget"])
        .assert()
        .success();
    assert!(
        tmp.path()
            .join("app/accounts/docs/components/my-widget/page.tsx")
            .exists()
    );
}

#[test]
fn config_overrides_layout() {
    let tmp = project();
    write(
        tmp.path(),
        "compdoc.toml",
        "route_prefix = \"/docs\"\nmetadata_manifest = \"meta/components.json\"\n",
    );

    cmd(tmp.path()).args(["docs", "generate"]).assert().success();

    let nav = fs::read_to_string(tmp.path().join(NAV)).unwrap();
    assert!(nav.contains("\"/docs/account-card\""));
    assert!(tmp.path().join("meta/components.json").exists());
}

#[test]
fn unknown_config_key_fails() {
    let tmp = project();
    write(tmp.path(), "compdoc.toml", "no_such_key = 1\n");
    cmd(tmp.path())
        .args(["docs", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn short_path_and_output_flags() {
    let tmp = project();
    let output = assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_compdoc")))
        .env("NO_COLOR", "1")
        .arg("-p")
        .arg(tmp.path())
        .args(["-o", "json", "docs", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report = last_json_line(&output.stdout);
    assert_eq!(report["logs"], serde_json::json!(["Account Card: Not documented"]));
    assert_eq!(report["warnings"], serde_json::json!(["plain.tsx: No metadata found"]));
}

#[test]
fn missing_components_dir_warns_once() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "app/global.ts", "export const APPNAME = 'accounts';\n");

    cmd(tmp.path())
        .args(["docs", "list"])
        .assert()
        .success()
        .stderr(predicate::function(|stderr: &str| {
            stderr.matches("Components directory not found").count() == 1
        }))
        .stderr(predicate::str::contains("does not exist").not());
}

#[test]
fn component_yaml_round_trip() {
    let tmp = project();
    cmd(tmp.path())
        .args(["component", "export", "account-card"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Component exported"));
    let yaml = fs::read_to_string(tmp.path().join("exports/account-card.yaml")).unwrap();
    assert!(yaml.contains("name: account-card"));

    fs::remove_file(tmp.path().join("components/account-card.tsx")).unwrap();
    cmd(tmp.path())
        .args(["component", "import", "exports/account-card.yaml"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(tmp.path().join("components/account-card.tsx")).unwrap(),
        ACCOUNT_CARD
    );

    cmd(tmp.path())
        .args(["component", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("account-card"))
        .stdout(predicate::str::contains("plain"));
}

#[test]
fn gen_config_prints_stock_toml() {
    let tmp = TempDir::new().unwrap();
    cmd(tmp.path())
        .arg("gen-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("components_dir = \"components\""))
        .stdout(predicate::str::contains("route_prefix = \"/tools/docs/components\""));
}
