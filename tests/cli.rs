use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_BOSS_CONFIG_DIR", config_dir.path())
        .env_remove("GEMINI_API_KEY")
        .env_remove("API_KEY")
        .env_remove("BUDGET_BOSS_LOG");
    cmd
}

#[test]
fn plan_rejects_invalid_income() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["plan", "--income", "abc", "--expense", "Rent=1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please enter a valid monthly income.",
        ));
}

#[test]
fn plan_requires_an_expense() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["plan", "--income", "3000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter at least one expense."));
}

#[test]
fn plan_rejects_fixed_expenses_over_income() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["plan", "--income", "2000", "--expense", "Rent=2500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Your fixed expenses ($2,500.00) exceed your income.",
        ));
}

#[test]
fn plan_rejects_goal_that_is_too_high() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args([
            "plan", "--income", "3000", "--goal", "2900", "-e", "Rent=1000", "-e", "Food=50",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Your savings goal is too high. After fixed expenses you have $2,000.00 left each month.",
        ));
}

#[test]
fn plan_rejects_malformed_expense_argument() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["plan", "--income", "3000", "--expense", "Rent 1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CATEGORY=AMOUNT"));
}

#[test]
fn plan_rejects_amount_without_leading_digit() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["plan", "--income", "3000", "--expense", "Coffee=.5", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please ensure all expense rows have a valid category and a positive amount.",
        ));
}

#[test]
fn dry_run_prints_request() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args([
            "plan",
            "--income",
            "4500",
            "--expense",
            "Rent=1500",
            "--expense",
            "Food=300",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode:         Standard"))
        .stdout(predicate::str::contains("Rent 1500, Food 300"))
        .stdout(predicate::str::contains("$4,500.00"));
}

#[test]
fn dry_run_json_in_minimalist_mode_drops_goal() {
    let dir = TempDir::new().unwrap();
    let output = budget(&dir)
        .args([
            "plan",
            "--income",
            "4500",
            "--goal",
            "500",
            "--mode",
            "minimalist",
            "--expense",
            "Streaming=15",
            "--dry-run",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["income"], 4500.0);
    assert_eq!(json["expenses"], "Streaming 15");
    assert!(json.get("savingsGoal").is_none());
}

#[test]
fn plan_without_key_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["plan", "--income", "3000", "--expense", "Rent=1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No API key configured"));
}

#[test]
fn plan_reports_unreachable_service() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"api_base_url": "http://127.0.0.1:9", "request_timeout_secs": 5}"#,
    )
    .unwrap();

    budget(&dir)
        .env("GEMINI_API_KEY", "test-key")
        .args(["plan", "--income", "3000", "--expense", "Rent=1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to generate budget plan:"));
}

#[test]
fn classify_prints_category_kind() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["classify", "Car Payment", "Groceries", "Concerts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Car Payment: fixed (inflexible)"))
        .stdout(predicate::str::contains("Groceries: essential (survival)"))
        .stdout(predicate::str::contains("Concerts: discretionary"));
}

#[test]
fn init_writes_settings_and_config_shows_them() {
    let dir = TempDir::new().unwrap();
    budget(&dir).arg("init").assert().success();
    assert!(dir.path().join("config.json").exists());

    budget(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("gemini-2.5-flash"))
        .stdout(predicate::str::contains("Initialized:      yes"));
}
