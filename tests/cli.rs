use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSES_TRACKER_DIR", temp_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn validate_accepts_plain_decimals() {
    let temp_dir = TempDir::new().unwrap();
    expenses(&temp_dir)
        .args(["validate", "12.50"])
        .assert()
        .success()
        .stdout("valid\n");
}

#[test]
fn validate_writes_no_settings() {
    let temp_dir = TempDir::new().unwrap();
    expenses(&temp_dir)
        .args(["validate", "abc"])
        .assert()
        .code(1);
    assert!(!temp_dir.path().join("config.json").exists());
}

#[test]
fn overflowing_totals_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    expenses(&temp_dir)
        .args(["run", "-", "--keep-going"])
        .write_stdin("income a 92233720368547758.07\nincome b 0.01\ntotals\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("total would overflow"))
        .stdout(predicate::str::ends_with(
            "Total Balance: 92233720368547758.07 €\nIncome:        92233720368547758.07 €\nExpenses:      0.00 €\n",
        ));
}

#[test]
fn add_accepts_a_direction_word() {
    let temp_dir = TempDir::new().unwrap();
    expenses(&temp_dir)
        .args(["run", "-"])
        .write_stdin("add Salary 100 in\nadd Rent 40 expense\ntotals\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "Total Balance: 60.00 €\nIncome:        100.00 €\nExpenses:      40.00 €\n",
        ));
}

#[test]
fn validate_rejects_commas_and_words() {
    let temp_dir = TempDir::new().unwrap();
    for raw in ["12,50", "abc", "", "-5"] {
        expenses(&temp_dir)
            .args(["validate", raw])
            .assert()
            .code(1)
            .stdout("invalid\n");
    }
}

#[test]
fn run_script_from_stdin_prints_totals() {
    let temp_dir = TempDir::new().unwrap();
    expenses(&temp_dir)
        .args(["run", "-"])
        .write_stdin("add Salary 1500.00\nexpense Groceries 50.00\nexpense Transport 20.00\ntotals\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "Total Balance: 1430.00 €\nIncome:        1500.00 €\nExpenses:      70.00 €\n",
        ));
}

#[test]
fn run_script_stops_at_invalid_amount() {
    let temp_dir = TempDir::new().unwrap();
    expenses(&temp_dir)
        .args(["run", "-"])
        .write_stdin("add Salary 10\nexpense Lunch 12,50\ntotals\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"))
        .stdout(predicate::str::contains("Total Balance").count(1));
}

#[test]
fn run_script_keep_going_reports_each_failure() {
    let temp_dir = TempDir::new().unwrap();
    expenses(&temp_dir)
        .args(["run", "-", "--keep-going"])
        .write_stdin("expense Lunch 12,50\nincome Gift abc\nincome Gift 5\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount: '12,50'"))
        .stderr(predicate::str::contains("Invalid amount: 'abc'"))
        .stdout(predicate::str::contains("Total Balance: 5.00 €"));
}

#[test]
fn run_script_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let script = temp_dir.path().join("session.txt");
    std::fs::write(&script, "# monthly\nincome Salary 100\nlist\n").unwrap();

    expenses(&temp_dir)
        .arg("run")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("+100.00 €"));
}

#[test]
fn shell_reads_piped_input_without_prompt() {
    let temp_dir = TempDir::new().unwrap();
    expenses(&temp_dir)
        .write_stdin("income Salary 20\nfrobnicate\ntotals\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("> ").not())
        .stdout(predicate::str::ends_with(
            "Total Balance: 20.00 €\nIncome:        20.00 €\nExpenses:      0.00 €\n",
        ))
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn session_writes_audit_log_and_settings() {
    let temp_dir = TempDir::new().unwrap();
    expenses(&temp_dir)
        .arg("shell")
        .write_stdin("income Salary 20\n")
        .assert()
        .success();

    assert!(temp_dir.path().join("config.json").exists());
    let audit = std::fs::read_to_string(temp_dir.path().join("audit.log")).unwrap();
    assert_eq!(audit.lines().count(), 1);
    assert!(audit.contains("Salary"));
}

#[test]
fn config_shows_paths() {
    let temp_dir = TempDir::new().unwrap();
    expenses(&temp_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Audit log:"))
        .stdout(predicate::str::contains("Currency symbol: €"));
}
