//! End-to-end CLI tests.
//!
//! Only offline paths are exercised here: local format rules, conflict
//! detection, and output plumbing. Anything that would reach the platform
//! or GitHub is covered by unit tests against mock/static adapters.

use assert_cmd::Command;
use predicates::prelude::*;

fn nimbus() -> Command {
    Command::cargo_bin("nimbus").unwrap()
}

// ── basic surface ─────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    nimbus()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("deploy"))
        .stdout(predicate::str::contains("project"))
        .stdout(predicate::str::contains("provider"))
        .stdout(predicate::str::contains("user"));
}

#[test]
fn version_flag_prints_version() {
    nimbus()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_shows_help_and_fails() {
    nimbus().assert().failure().code(2);
}

// ── deploy ────────────────────────────────────────────────────────────────────

#[test]
fn deploy_version_and_index_url_conflict() {
    nimbus()
        .args([
            "deploy",
            "--version",
            "1.2.3",
            "--index-url",
            "https://example.com/index.json",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("mutually exclusive"));
}

#[test]
fn deploy_rejects_malformed_version() {
    nimbus()
        .args(["deploy", "--version", "1.2"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("version"));
}

#[test]
fn deploy_principal_name_requires_password() {
    nimbus()
        .args(["deploy", "--principal-name", "svc-app"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("principal_password"));
}

#[test]
fn deploy_with_skipped_name_check_succeeds_offline() {
    nimbus()
        .args(["deploy", "-n", "My_Cool Name!", "--skip-name-validation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mycoolname"));
}

#[test]
fn deploy_rejects_malformed_auth_code() {
    nimbus()
        .args([
            "deploy",
            "-n",
            "demo",
            "--skip-name-validation",
            "--auth-code",
            "not+valid",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("auth_code"));
}

#[test]
fn deploy_rejects_malformed_base_url() {
    nimbus()
        .args([
            "deploy",
            "-n",
            "demo",
            "--skip-name-validation",
            "-u",
            "ftp://not-http",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("base_url"));
}

#[test]
fn quiet_deploy_prints_nothing_on_success() {
    nimbus()
        .args(["-q", "deploy", "-n", "demo-name", "--skip-name-validation"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ── project ───────────────────────────────────────────────────────────────────

#[test]
fn project_create_validates_subscription_ids() {
    nimbus()
        .args([
            "project",
            "create",
            "-n",
            "web-shop",
            "--subscriptions",
            "2e9b0c56-2f26-4d95-9300-54a3bfd7f234",
            "not-a-uuid",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not-a-uuid"));
}

#[test]
fn project_create_accepts_valid_name_and_subscriptions() {
    nimbus()
        .args([
            "project",
            "create",
            "-n",
            "web-shop",
            "--subscriptions",
            "2e9b0c56-2f26-4d95-9300-54a3bfd7f234",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("web-shop"));
}

#[test]
fn project_show_rejects_too_short_name() {
    nimbus()
        .args(["project", "show", "-p", "abc"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("between 4 and 30"));
}

// ── provider ──────────────────────────────────────────────────────────────────

#[test]
fn provider_register_rejects_bad_type_id() {
    nimbus()
        .args(["provider", "register", "-n", "My.Provider"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("name"));
}

#[test]
fn provider_register_rejects_bad_event_id() {
    nimbus()
        .args([
            "provider",
            "register",
            "-n",
            "azure.devops",
            "--events",
            "Not An Event",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("event"));
}

// ── user ──────────────────────────────────────────────────────────────────────

#[test]
fn user_show_strips_login_url_scheme() {
    nimbus()
        .args(["user", "show", "--user", "https://login.example.com/me"])
        .assert()
        .success()
        .stdout(predicate::str::contains("login.example.com/me"));
}

#[test]
fn user_show_rejects_bad_tracking_id() {
    nimbus()
        .args([
            "user",
            "show",
            "--user",
            "user@example.com",
            "-t",
            "not-a-uuid",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("tracking"));
}

#[test]
fn user_show_folds_properties_into_record() {
    nimbus()
        .args([
            "user",
            "show",
            "--user",
            "user@example.com",
            "--properties",
            "team=core",
            "region=eu=west",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"team\": \"core\""))
        .stdout(predicate::str::contains("\"region\": \"eu=west\""));
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn completions_emit_bash_script() {
    nimbus()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nimbus"));
}
