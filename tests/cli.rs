use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TODAY: &str = "2025-06-15";

fn gastos(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gastos").expect("binary exists");
    cmd.env("GASTOS_DATA_DIR", data_dir.path())
        .env("GASTOS_TODAY", TODAY);
    cmd
}

fn extract_id(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    text.lines()
        .find(|line| line.trim_start().starts_with("ID:"))
        .and_then(|line| line.split_whitespace().last())
        .expect("output contains an ID line")
        .to_string()
}

#[test]
fn add_expense_expands_installments() {
    let dir = TempDir::new().unwrap();

    gastos(&dir)
        .args([
            "expense",
            "add",
            "Sofá",
            "1000.00",
            "-m",
            "cartão de crédito",
            "--due",
            "2025-01-31",
            "-i",
            "4",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Created 4 installments totalling R$1000.00")
                .and(predicate::str::contains("2025-01-31"))
                .and(predicate::str::contains("2025-02-28"))
                .and(predicate::str::contains("2025-04-30")),
        );

    gastos(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Sofá - Parcela 1/4")
                .and(predicate::str::contains("Overdue"))
                .and(predicate::str::contains("Page 1 of 1 (4 records)")),
        );
}

#[test]
fn installment_remainder_lands_on_last() {
    let dir = TempDir::new().unwrap();

    gastos(&dir)
        .args([
            "expense", "add", "Celular", "1000.00", "-m", "pix", "--due", "2025-07-01", "-i", "3",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("R$333.33").and(predicate::str::contains("R$333.34")),
        );
}

#[test]
fn add_rejects_zero_installments() {
    let dir = TempDir::new().unwrap();

    gastos(&dir)
        .args([
            "expense", "add", "Sofá", "1000.00", "-m", "pix", "-i", "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("installments must be at least 1"));
}

#[test]
fn add_rejects_bad_date() {
    let dir = TempDir::new().unwrap();

    gastos(&dir)
        .args([
            "expense",
            "add",
            "Sofá",
            "1000.00",
            "-m",
            "pix",
            "--due",
            "31/01/2025",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid due date"));
}

#[test]
fn paid_flag_round_trip_through_status_filter() {
    let dir = TempDir::new().unwrap();

    let output = gastos(&dir)
        .args([
            "expense", "add", "Mercado", "250.00", "-m", "pix", "--due", "2025-06-17",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let id = extract_id(&output);

    gastos(&dir)
        .args(["expense", "paid", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked as paid: Mercado"));

    gastos(&dir)
        .args(["expense", "list", "--status", "paid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mercado").and(predicate::str::contains("(1 record)")));

    gastos(&dir)
        .args(["expense", "list", "--status", "due-soon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found"));
}

#[test]
fn list_rejects_unknown_status() {
    let dir = TempDir::new().unwrap();

    gastos(&dir)
        .args(["expense", "list", "--status", "esperando"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid status"));
}

#[test]
fn delete_requires_force() {
    let dir = TempDir::new().unwrap();

    let output = gastos(&dir)
        .args([
            "expense", "add", "Teclado", "350.00", "-m", "pix", "--due", "2025-06-20",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let id = extract_id(&output);

    gastos(&dir)
        .args(["expense", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force to confirm deletion"));

    gastos(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Teclado"));

    gastos(&dir)
        .args(["expense", "delete", &id, "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense: Teclado"));

    gastos(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found"));
}

#[test]
fn fixed_bill_cycle_marker() {
    let dir = TempDir::new().unwrap();

    let output = gastos(&dir)
        .args([
            "fixed", "add", "Aluguel", "1200.00", "-m", "boleto", "-d", "20",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Created fixed expense")
                .and(predicate::str::contains("Next due: 2025-06-20")),
        )
        .get_output()
        .stdout
        .clone();
    let id = extract_id(&output);

    // Five days out, inside the due-soon window
    gastos(&dir)
        .args(["fixed", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Due soon").and(predicate::str::contains("Aluguel")));

    gastos(&dir)
        .args(["fixed", "paid", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("paid through 2025-06"));

    gastos(&dir)
        .args(["fixed", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Paid"));

    gastos(&dir)
        .args(["fixed", "unpaid", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared paid marker"));
}

#[test]
fn disabled_bill_leaves_dashboard_totals() {
    let dir = TempDir::new().unwrap();

    let output = gastos(&dir)
        .args([
            "fixed", "add", "Academia", "150.00", "-m", "débito", "-d", "25",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let id = extract_id(&output);

    gastos(&dir)
        .args(["fixed", "disable", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deactivated 'Academia'"));

    gastos(&dir)
        .args(["fixed", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Inactive")
                .and(predicate::str::contains("Active monthly total: R$0.00")),
        );

    gastos(&dir)
        .args(["dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Three-month average: R$0.00"));
}

#[test]
fn dashboard_groups_current_month_by_method() {
    let dir = TempDir::new().unwrap();

    gastos(&dir)
        .args([
            "expense", "add", "Mercado", "300.00", "-m", "pix", "--due", "2025-06-20",
        ])
        .assert()
        .success();

    gastos(&dir)
        .args([
            "fixed",
            "add",
            "Streaming",
            "100.00",
            "-m",
            "cartão de crédito",
            "-d",
            "20",
        ])
        .assert()
        .success();

    gastos(&dir)
        .args(["dashboard"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Dashboard: 2025-06")
                .and(predicate::str::contains("Pix"))
                .and(predicate::str::contains("R$300.00"))
                .and(predicate::str::contains("Cartão de Crédito"))
                .and(predicate::str::contains("R$100.00"))
                .and(predicate::str::contains("Card total")),
        );
}

#[test]
fn export_writes_csv_file() {
    let dir = TempDir::new().unwrap();
    let out_path = dir.path().join("expenses.csv");

    gastos(&dir)
        .args([
            "expense", "add", "Sofá", "1000.00", "-m", "pix", "--due", "2025-01-31", "-i", "2",
        ])
        .assert()
        .success();

    gastos(&dir)
        .args(["export", "expenses"])
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 expenses"));

    let csv = std::fs::read_to_string(&out_path).unwrap();
    assert!(csv.contains("ID,Description,Amount"));
    assert!(csv.contains("Sofá - Parcela 1/2"));
}

#[test]
fn history_records_changes() {
    let dir = TempDir::new().unwrap();

    gastos(&dir)
        .args([
            "expense", "add", "Mercado", "250.00", "-m", "pix", "--due", "2025-06-17",
        ])
        .assert()
        .success();

    gastos(&dir)
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE").and(predicate::str::contains("Mercado")));
}

#[test]
fn data_dir_isolates_state() {
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();

    gastos(&dir_a)
        .args([
            "expense", "add", "Mercado", "250.00", "-m", "pix", "--due", "2025-06-17",
        ])
        .assert()
        .success();

    gastos(&dir_b)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    gastos(&dir)
        .args(["config"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Data directory")
                .and(predicate::str::contains("Currency symbol:   R$")),
        );
}
