use assert_cmd::Command;
use predicates::prelude::*;

fn alcancia(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("alcancia").unwrap();
    cmd.env("ALCANCIA_DATA_DIR", data_dir);
    cmd
}

#[test]
fn add_then_list_shows_the_transaction() {
    let dir = tempfile::tempdir().unwrap();

    alcancia(dir.path())
        .args([
            "add", "Supermercado", "--amount", "12500,50", "--type", "expense",
            "--category", "Alimentación", "--date", "2024-05-05",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Supermercado"));

    alcancia(dir.path())
        .args(["list", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mayo 2024"))
        .stdout(predicate::str::contains("Supermercado"))
        .stdout(predicate::str::contains("12.500,50"));
}

#[test]
fn summary_computes_balance_and_currency_totals() {
    let dir = tempfile::tempdir().unwrap();

    alcancia(dir.path())
        .args([
            "add", "Sueldo", "--amount", "1000", "--type", "income",
            "--category", "Salario", "--date", "2024-05-01",
        ])
        .assert()
        .success();
    alcancia(dir.path())
        .args([
            "add", "Súper", "--amount", "300", "--type", "expense",
            "--category", "Alimentación", "--date", "2024-05-05",
        ])
        .assert()
        .success();
    alcancia(dir.path())
        .args([
            "add", "Dólares", "--amount", "100", "--type", "saving",
            "--category", "Compra Dólares", "--date", "2024-05-10",
            "--currency", "usd",
        ])
        .assert()
        .success();

    alcancia(dir.path())
        .args(["summary", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$ 1.000,00 ARS"))
        .stdout(predicate::str::contains("US$ 100,00 USD"))
        .stdout(predicate::str::contains("$ 700,00 ARS"));
}

#[test]
fn unknown_category_is_rejected_before_the_repository() {
    let dir = tempfile::tempdir().unwrap();

    alcancia(dir.path())
        .args([
            "add", "Misterio", "--amount", "10", "--type", "expense",
            "--category", "NoExiste", "--date", "2024-05-05",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));

    // Nothing was persisted.
    alcancia(dir.path())
        .args(["list", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sin movimientos"));
}

#[test]
fn habitual_expense_missing_next_month_is_reported() {
    let dir = tempfile::tempdir().unwrap();

    alcancia(dir.path())
        .args([
            "add", "Netflix", "--amount", "11900", "--type", "expense",
            "--category", "Entretenimiento", "--date", "2024-04-09", "--habitual",
        ])
        .assert()
        .success();

    alcancia(dir.path())
        .args(["list", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recordatorio"))
        .stdout(predicate::str::contains("Netflix"));

    // Registering it in May clears the reminder.
    alcancia(dir.path())
        .args([
            "add", "netflix", "--amount", "11900", "--type", "expense",
            "--category", "Entretenimiento", "--date", "2024-05-09",
        ])
        .assert()
        .success();
    alcancia(dir.path())
        .args(["list", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recordatorio").not());
}

#[test]
fn delete_with_yes_removes_the_record() {
    let dir = tempfile::tempdir().unwrap();

    alcancia(dir.path())
        .args([
            "add", "Luz", "--amount", "45", "--type", "expense",
            "--category", "Vivienda", "--date", "2024-05-03",
        ])
        .assert()
        .success();

    // Recover the generated id from the export.
    let out = dir.path().join("export.csv");
    alcancia(dir.path())
        .args(["export", "--output", out.to_str().unwrap()])
        .assert()
        .success();
    let csv = std::fs::read_to_string(&out).unwrap();
    let id = csv.lines().nth(1).unwrap().split(',').next().unwrap().to_string();

    alcancia(dir.path())
        .args(["delete", &id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("eliminada"));

    alcancia(dir.path())
        .args(["list", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sin movimientos"));
}

#[test]
fn export_writes_header_and_full_rows() {
    let dir = tempfile::tempdir().unwrap();

    alcancia(dir.path())
        .args([
            "add", "Supermercado", "--amount", "12.500,50", "--type", "expense",
            "--category", "Alimentación", "--date", "2024-05-05", "--habitual",
        ])
        .assert()
        .success();

    let out = dir.path().join("mayo.csv");
    alcancia(dir.path())
        .args(["export", "--month", "2024-05", "--output", out.to_str().unwrap()])
        .assert()
        .success();

    let csv = std::fs::read_to_string(&out).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,fecha,tipo,descripcion,categoria,monto,moneda,habitual,objetivo"
    );
    let row = lines.next().unwrap();
    assert!(row.ends_with(",2024-05-05,Gasto,Supermercado,Alimentación,12500.50,ARS,si,"));
    assert!(lines.next().is_none());
}

#[test]
fn goals_edit_renames_and_retargets() {
    let dir = tempfile::tempdir().unwrap();

    alcancia(dir.path())
        .args(["goals", "add", "Vacaciones", "--target", "100000"])
        .assert()
        .success();

    alcancia(dir.path())
        .args([
            "goals", "edit", "Vacaciones", "--name", "Vacaciones 2025",
            "--target", "200000",
        ])
        .assert()
        .failure();

    // Goals are addressed by id, not name; recover it from the listing.
    let list = alcancia(dir.path()).args(["goals", "list"]).output().unwrap();
    let stdout = String::from_utf8(list.stdout).unwrap();
    let id = stdout
        .lines()
        .find(|l| l.contains("Vacaciones"))
        .unwrap()
        .split_whitespace()
        .find(|w| w.chars().all(|c| c.is_ascii_hexdigit()) && w.len() == 8)
        .unwrap()
        .to_string();

    alcancia(dir.path())
        .args([
            "goals", "edit", &id, "--name", "Vacaciones 2025",
            "--target", "200000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("actualizado"));

    alcancia(dir.path())
        .args(["goals", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vacaciones 2025"))
        .stdout(predicate::str::contains("$ 200.000,00"));
}

#[test]
fn goals_track_linked_ars_savings() {
    let dir = tempfile::tempdir().unwrap();

    alcancia(dir.path())
        .args(["goals", "add", "Vacaciones", "--target", "100000"])
        .assert()
        .success();

    alcancia(dir.path())
        .args([
            "add", "Plazo fijo", "--amount", "25000", "--type", "saving",
            "--category", "Plazo Fijo", "--date", "2024-05-05", "--goal", "Vacaciones",
        ])
        .assert()
        .success();

    alcancia(dir.path())
        .args(["goals", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vacaciones"))
        .stdout(predicate::str::contains("25.0%"));
}
