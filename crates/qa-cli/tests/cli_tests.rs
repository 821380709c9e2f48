use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CASES_FILE: &str = r#"{
  "feature": "Login",
  "testCases": [
    {"id": "TC-001", "title": "Valid login", "steps": ["Open app", "Enter creds", "Submit"], "expectedResult": "Dashboard shown", "priority": "High"},
    {"id": "TC-002", "title": "Wrong password", "steps": "Submit bad password", "expectedResult": "Error shown"}
  ]
}"#;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn qa_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("qa").expect("Failed to find qa binary");
    cmd.env_remove("QA_API_KEY")
        .env_remove("QA_CREDENTIAL_MODE")
        .env_remove("QA_ENDPOINT")
        .arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

/// Imports the login cases into a fresh database
fn import_login_cases(temp_dir: &TempDir) -> std::path::PathBuf {
    let db_path = temp_dir.path().join("cli_test.db");
    let cases_path = temp_dir.path().join("login.json");
    fs::write(&cases_path, CASES_FILE).expect("Failed to write cases file");

    qa_cmd(&db_path)
        .args(["exec", "import"])
        .arg(&cases_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Prepared 2 test cases for 'Login'"));

    db_path
}

#[test]
fn test_cli_default_shows_empty_session() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    qa_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No test cases yet."));
}

#[test]
fn test_cli_import_and_list() {
    let temp_dir = create_cli_test_environment();
    let db_path = import_login_cases(&temp_dir);

    qa_cmd(&db_path)
        .args(["exec", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Login"))
        .stdout(predicate::str::contains("- **Progress**: 0/2 (0%)"))
        .stdout(predicate::str::contains("### 1. TC-001 Valid login"))
        .stdout(predicate::str::contains("### 2. TC-002 Wrong password"))
        .stdout(predicate::str::contains("- **Last saved**:"));
}

#[test]
fn test_cli_import_bare_array_uses_file_name() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let cases_path = temp_dir.path().join("checkout.json");
    fs::write(&cases_path, r#"[{"title": "Pay with card"}, {"title": "Pay with voucher"}]"#)
        .expect("Failed to write cases file");

    qa_cmd(&db_path)
        .args(["exec", "import"])
        .arg(&cases_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("for 'checkout'"))
        .stdout(predicate::str::contains("TC-001 Pay with card"))
        .stdout(predicate::str::contains("TC-002 Pay with voucher"));
}

#[test]
fn test_cli_import_rejects_malformed_file() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let cases_path = temp_dir.path().join("broken.json");
    fs::write(&cases_path, "these are not test cases").expect("Failed to write cases file");

    qa_cmd(&db_path)
        .args(["exec", "import"])
        .arg(&cases_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn test_cli_set_status_fail_expands_case() {
    let temp_dir = create_cli_test_environment();
    let db_path = import_login_cases(&temp_dir);

    qa_cmd(&db_path)
        .args(["exec", "status", "1", "fail"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated test case TC-001"))
        .stdout(predicate::str::contains("Status set to ✗ Fail"));

    // The failed case now shows its steps in the listing
    qa_cmd(&db_path)
        .args(["exec", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Progress**: 1/2 (50%)"))
        .stdout(predicate::str::contains("1. Open app"));
}

#[test]
fn test_cli_set_status_by_id() {
    let temp_dir = create_cli_test_environment();
    let db_path = import_login_cases(&temp_dir);

    qa_cmd(&db_path)
        .args(["exec", "status", "TC-002", "pass"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated test case TC-002"));

    qa_cmd(&db_path)
        .args(["exec", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| 2 | 1 | 0 | 0 | 0 | 1 |"))
        .stdout(predicate::str::contains("- **Pass Rate**: 50%"));
}

#[test]
fn test_cli_notes_and_show() {
    let temp_dir = create_cli_test_environment();
    let db_path = import_login_cases(&temp_dir);

    qa_cmd(&db_path)
        .args(["exec", "notes", "1", "crashes on iOS"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes updated"));

    qa_cmd(&db_path)
        .args(["exec", "show", "TC-001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## TC-001 Valid login"))
        .stdout(predicate::str::contains("**Notes**: crashes on iOS"));
}

#[test]
fn test_cli_toggle_details() {
    let temp_dir = create_cli_test_environment();
    let db_path = import_login_cases(&temp_dir);

    qa_cmd(&db_path)
        .args(["exec", "toggle", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Details shown in the listing"));

    qa_cmd(&db_path)
        .args(["exec", "toggle", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Details hidden in the listing"));
}

#[test]
fn test_cli_out_of_range_position() {
    let temp_dir = create_cli_test_environment();
    let db_path = import_login_cases(&temp_dir);

    qa_cmd(&db_path)
        .args(["exec", "status", "5", "pass"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    qa_cmd(&db_path)
        .args(["exec", "status", "0", "pass"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positions start at 1"));
}

#[test]
fn test_cli_unknown_id() {
    let temp_dir = create_cli_test_environment();
    let db_path = import_login_cases(&temp_dir);

    qa_cmd(&db_path)
        .args(["exec", "show", "TC-999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Test case with ID 'TC-999' not found"));
}

#[test]
fn test_cli_bug_draft() {
    let temp_dir = create_cli_test_environment();
    let db_path = import_login_cases(&temp_dir);

    qa_cmd(&db_path)
        .args(["exec", "notes", "TC-001", "Spinner never stops"])
        .assert()
        .success();

    qa_cmd(&db_path)
        .args(["exec", "bug", "1", "--severity", "critical", "--environment", "iOS 17"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Title**: [FAIL] Valid login"))
        .stdout(predicate::str::contains("- **Severity**: critical"))
        .stdout(predicate::str::contains("- **Environment**: iOS 17"))
        .stdout(predicate::str::contains("- **Actual**: Spinner never stops"))
        .stdout(predicate::str::contains("- **Expected**: Dashboard shown"));
}

#[test]
fn test_cli_clear_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    let db_path = import_login_cases(&temp_dir);

    qa_cmd(&db_path)
        .args(["exec", "clear"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--confirm"));

    qa_cmd(&db_path)
        .args(["exec", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TC-001"));
}

#[test]
fn test_cli_clear_with_confirmation() {
    let temp_dir = create_cli_test_environment();
    let db_path = import_login_cases(&temp_dir);

    qa_cmd(&db_path)
        .args(["exec", "clear", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared session 'Login' (2 test cases)"));

    qa_cmd(&db_path)
        .args(["exec", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No test cases yet."));
}

#[test]
fn test_cli_direct_mode_requires_api_key() {
    let temp_dir = create_cli_test_environment();
    let db_path = import_login_cases(&temp_dir);

    qa_cmd(&db_path)
        .args(["--credential-mode", "direct", "exec", "summary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid generator configuration"));
}

#[test]
fn test_cli_blank_endpoint_is_rejected() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    qa_cmd(&db_path)
        .args(["--endpoint", " ", "gen", "plan", "Checkout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid generator configuration"));
}

#[test]
fn test_cli_help_lists_commands() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    qa_cmd(&db_path)
        .args(["exec", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("clear"));
}

#[test]
fn test_cli_numeric_id_wins_over_position() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let cases_path = temp_dir.path().join("numbered.json");
    fs::write(
        &cases_path,
        r#"[{"id": "2", "title": "Second"}, {"id": "1", "title": "First"}]"#,
    )
    .expect("Failed to write cases file");

    qa_cmd(&db_path)
        .args(["exec", "import"])
        .arg(&cases_path)
        .assert()
        .success();

    qa_cmd(&db_path)
        .args(["exec", "status", "1", "pass"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated test case 1"));

    qa_cmd(&db_path)
        .args(["exec", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## 2 Second (—)"));
}
