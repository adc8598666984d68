//! End-to-end tests for the `ct` binary against an isolated store.

use anyhow::Result;
use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

fn ct(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ct").unwrap();
    cmd.arg("--db").arg(db);
    cmd
}

fn init_store(db: &Path) {
    ct(db).arg("init").assert().success();
}

fn register_and_login(db: &Path, email: &str) {
    ct(db)
        .args([
            "register",
            "--name",
            "Test User",
            "--email",
            email,
            "--password",
            "abcdef",
        ])
        .assert()
        .success();
    ct(db)
        .args(["login", email, "--password", "abcdef"])
        .assert()
        .success();
}

#[test]
fn init_seeds_demo_issues() -> Result<()> {
    let dir = TempDir::new()?;
    let db = dir.path().join("civictrack.db");
    init_store(&db);

    let output = ct(&db).args(["--json", "issue", "list"]).output()?;
    assert!(output.status.success());

    let listing: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(listing["total"], 6);
    assert_eq!(listing["page"], 1);
    assert_eq!(listing["pageCount"], 1);
    Ok(())
}

#[test]
fn init_refuses_second_run_without_force() -> Result<()> {
    let dir = TempDir::new()?;
    let db = dir.path().join("civictrack.db");
    init_store(&db);

    let output = ct(&db).arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));

    ct(&db).args(["init", "--force"]).assert().success();
    Ok(())
}

#[test]
fn commands_require_an_initialized_store() -> Result<()> {
    let dir = TempDir::new()?;
    let db = dir.path().join("missing.db");

    let output = ct(&db).args(["--json", "issue", "list"]).output()?;
    assert_eq!(output.status.code(), Some(2));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr)?;
    assert_eq!(err["error"]["code"], "NOT_INITIALIZED");
    Ok(())
}

#[test]
fn register_login_report_list_round_trip() -> Result<()> {
    let dir = TempDir::new()?;
    let db = dir.path().join("civictrack.db");
    init_store(&db);
    register_and_login(&db, "test@example.com");

    // whoami reflects the session, without any hash material
    let output = ct(&db).args(["--json", "whoami"]).output()?;
    let whoami: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(whoami["session"]["email"], "test@example.com");
    assert!(whoami["session"].get("passwordHash").is_none());

    // File a report
    let output = ct(&db)
        .args([
            "--json",
            "report",
            "--title",
            "Fallen Tree Blocking Sidewalk",
            "--description",
            "Storm debris on the 5th Ave sidewalk.",
            "--category",
            "environment",
        ])
        .output()?;
    assert!(output.status.success());
    let issue: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(issue["id"], 7);
    assert_eq!(issue["status"], "reported");
    assert_eq!(issue["reportedBy"], "test@example.com");
    // Default city-hall coordinate
    assert_eq!(issue["location"]["lat"], 40.7128);

    // Search finds it; mine lists exactly it
    let output = ct(&db)
        .args(["--json", "issue", "list", "--search", "fallen tree"])
        .output()?;
    let listing: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(listing["total"], 1);
    assert_eq!(listing["issues"][0]["id"], 7);

    let output = ct(&db).args(["--json", "issue", "mine"]).output()?;
    let mine: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(mine["total"], 1);
    Ok(())
}

#[test]
fn report_requires_login() -> Result<()> {
    let dir = TempDir::new()?;
    let db = dir.path().join("civictrack.db");
    init_store(&db);

    let output = ct(&db)
        .args([
            "--json",
            "report",
            "--title",
            "t",
            "--description",
            "d",
            "--category",
            "safety",
        ])
        .output()?;
    assert_eq!(output.status.code(), Some(5));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr)?;
    assert_eq!(err["error"]["code"], "NOT_LOGGED_IN");
    Ok(())
}

#[test]
fn failed_login_is_ambiguous_and_exits_5() -> Result<()> {
    let dir = TempDir::new()?;
    let db = dir.path().join("civictrack.db");
    init_store(&db);
    register_and_login(&db, "a@b.com");

    let wrong_password = ct(&db)
        .args(["--json", "login", "a@b.com", "--password", "wrong!"])
        .output()?;
    let unknown_email = ct(&db)
        .args(["--json", "login", "nobody@b.com", "--password", "abcdef"])
        .output()?;

    assert_eq!(wrong_password.status.code(), Some(5));
    assert_eq!(unknown_email.status.code(), Some(5));

    // Same message either way
    let e1: serde_json::Value = serde_json::from_slice(&wrong_password.stderr)?;
    let e2: serde_json::Value = serde_json::from_slice(&unknown_email.stderr)?;
    assert_eq!(e1["error"]["message"], e2["error"]["message"]);
    assert_eq!(e1["error"]["code"], "AUTH_FAILURE");
    Ok(())
}

#[test]
fn duplicate_registration_exits_4() -> Result<()> {
    let dir = TempDir::new()?;
    let db = dir.path().join("civictrack.db");
    init_store(&db);
    register_and_login(&db, "a@b.com");

    let output = ct(&db)
        .args([
            "--json",
            "register",
            "--name",
            "Again",
            "--email",
            "A@B.COM",
            "--password",
            "abcdef",
        ])
        .output()?;
    assert_eq!(output.status.code(), Some(4));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr)?;
    assert_eq!(err["error"]["code"], "DUPLICATE_EMAIL");
    Ok(())
}

#[test]
fn category_filter_and_show() -> Result<()> {
    let dir = TempDir::new()?;
    let db = dir.path().join("civictrack.db");
    init_store(&db);

    let output = ct(&db)
        .args(["--json", "issue", "list", "--category", "safety"])
        .output()?;
    let listing: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(listing["total"], 2);
    assert_eq!(listing["issues"][0]["title"], "Broken Streetlight");
    assert_eq!(
        listing["issues"][1]["title"],
        "Damaged Playground Equipment"
    );

    let output = ct(&db).args(["--json", "issue", "show", "2"]).output()?;
    let issue: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(issue["title"], "Broken Streetlight");

    let output = ct(&db).args(["--json", "issue", "show", "99"]).output()?;
    assert_eq!(output.status.code(), Some(3));
    Ok(())
}

#[test]
fn out_of_range_page_falls_back_to_page_1() -> Result<()> {
    let dir = TempDir::new()?;
    let db = dir.path().join("civictrack.db");
    init_store(&db);

    let output = ct(&db)
        .args(["--json", "issue", "list", "--page", "9"])
        .output()?;
    assert!(output.status.success());

    let listing: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(listing["page"], 1);
    assert_eq!(listing["issues"].as_array().unwrap().len(), 6);
    Ok(())
}

#[test]
fn user_clear_requires_force() -> Result<()> {
    let dir = TempDir::new()?;
    let db = dir.path().join("civictrack.db");
    init_store(&db);
    register_and_login(&db, "a@b.com");

    let output = ct(&db).args(["--json", "user", "clear"]).output()?;
    assert_eq!(output.status.code(), Some(4));

    let output = ct(&db)
        .args(["--json", "user", "clear", "--force"])
        .output()?;
    assert!(output.status.success());
    let cleared: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(cleared["removed"], 1);

    // Session is gone too
    let output = ct(&db).args(["--json", "whoami"]).output()?;
    let whoami: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert!(whoami["session"].is_null());
    Ok(())
}

#[test]
fn user_export_counts_issues() -> Result<()> {
    let dir = TempDir::new()?;
    let db = dir.path().join("civictrack.db");
    init_store(&db);
    register_and_login(&db, "a@b.com");

    ct(&db)
        .args([
            "report",
            "--title",
            "Leaning utility pole",
            "--description",
            "Pole at 3rd and Pine leaning badly.",
            "--category",
            "utilities",
        ])
        .assert()
        .success();

    let out_path = dir.path().join("export.json");
    ct(&db)
        .args(["user", "export", "--output"])
        .arg(&out_path)
        .assert()
        .success();

    let doc: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out_path)?)?;
    assert_eq!(doc["totalIssues"], 7);
    assert_eq!(doc["accounts"][0]["email"], "a@b.com");
    assert_eq!(doc["accounts"][0]["issueCount"], 1);
    assert!(doc["accounts"][0].get("passwordHash").is_none());
    Ok(())
}

#[test]
fn logout_is_idempotent() -> Result<()> {
    let dir = TempDir::new()?;
    let db = dir.path().join("civictrack.db");
    init_store(&db);
    register_and_login(&db, "a@b.com");

    ct(&db).arg("logout").assert().success();
    ct(&db).arg("logout").assert().success();
    Ok(())
}

#[test]
fn version_reports_store_path() -> Result<()> {
    let dir = TempDir::new()?;
    let db = dir.path().join("civictrack.db");

    let output = ct(&db).args(["--json", "version"]).output()?;
    assert!(output.status.success());
    let version: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(version["schema_version"], 1);
    assert_eq!(version["store_exists"], false);
    Ok(())
}
