use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::advisor::{Advisor, FALLBACK_MESSAGE};
use crate::aggregate::{month_totals, MonthTotals};
use crate::cli::resolve_month;
use crate::error::Result;
use crate::fmt::{money, money_with_code, month_name_es, render_markdown};
use crate::models::Currency;
use crate::report::{build_report, render_prompt, MonthlyReport};
use crate::repository::TransactionRepository;
use crate::settings::{get_data_dir, load_settings};
use crate::store::{load_categories, JsonStore};

pub fn summary(month: Option<String>) -> Result<()> {
    let (year, month) = resolve_month(&month)?;
    let repo = TransactionRepository::open(JsonStore::new(get_data_dir()));
    let totals = month_totals(&repo.for_month(year, month));
    println!("{}", format_summary(&totals, year, month));
    Ok(())
}

pub fn report(month: Option<String>, analyze: bool) -> Result<()> {
    let (year, month) = resolve_month(&month)?;
    let repo = TransactionRepository::open(JsonStore::new(get_data_dir()));
    let categories = load_categories(&JsonStore::new(get_data_dir()));
    let month_txns = repo.for_month(year, month);
    let report = build_report(&month_txns, &categories);

    println!("{}", format_report(&report, year, month));

    if analyze {
        println!();
        println!("{}", "Análisis Financiero con IA".bold());
        println!("{}", "Analizando tus finanzas...".dimmed());
        let analysis = run_analysis(&report);
        println!("{}", render_markdown(&analysis, 80));
    }
    Ok(())
}

/// All advisor failures degrade to the fixed fallback text; the concrete
/// error (missing credential vs transport vs provider) only reaches the
/// diagnostics stream.
fn run_analysis(report: &MonthlyReport) -> String {
    let settings = load_settings();
    let advisor = match Advisor::from_settings(&settings) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Warning: {e}");
            return FALLBACK_MESSAGE.to_string();
        }
    };
    match advisor.analyze(&render_prompt(report)) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Warning: {e}");
            FALLBACK_MESSAGE.to_string()
        }
    }
}

// ---------------------------------------------------------------------------
// Pure formatting functions (report data → String)
// ---------------------------------------------------------------------------

pub fn format_summary(totals: &MonthTotals, year: i32, month: u32) -> String {
    let mut table = Table::new();
    table.set_header(vec!["", "Total"]);
    table.add_row(vec![
        Cell::new("Ingresos del Mes".green()),
        Cell::new(money_with_code(totals.income, Currency::ARS)),
    ]);
    table.add_row(vec![
        Cell::new("Gastos del Mes".red()),
        Cell::new(money_with_code(totals.expense, Currency::ARS)),
    ]);
    table.add_row(vec![
        Cell::new("Ahorros del Mes".blue()),
        Cell::new(money_with_code(totals.savings_ars, Currency::ARS)),
    ]);
    if totals.savings_usd > 0 {
        table.add_row(vec![
            Cell::new("Ahorros del Mes (USD)".blue()),
            Cell::new(money_with_code(totals.savings_usd, Currency::USD)),
        ]);
    }
    let balance = totals.balance();
    let balance_cell = if balance >= 0 {
        money_with_code(balance, Currency::ARS).green().bold().to_string()
    } else {
        money_with_code(balance, Currency::ARS).red().bold().to_string()
    };
    table.add_row(vec![Cell::new("Balance".bold()), Cell::new(balance_cell)]);

    format!("Resumen — {} {}\n{}", month_name_es(month), year, table)
}

pub fn format_report(report: &MonthlyReport, year: i32, month: u32) -> String {
    let mut out = format_summary(&report.totals, year, month);
    out = out.replacen("Resumen", "Reporte Mensual", 1);

    if report.expenses_by_category.is_empty() {
        out.push_str("\n\nSin gastos este mes.");
    } else {
        let mut table = Table::new();
        table.set_header(vec!["Categoría", "Monto", "%"]);
        for line in &report.expenses_by_category {
            table.add_row(vec![
                Cell::new(&line.name),
                Cell::new(money(line.total, Currency::ARS)),
                Cell::new(format!("{:.1}%", line.pct)),
            ]);
        }
        out.push_str(&format!("\n\nGastos por Categoría\n{table}"));
    }

    if report.savings_by_category.is_empty() {
        out.push_str("\n\nSin ahorros este mes.");
    } else {
        let mut table = Table::new();
        table.set_header(vec!["Categoría", "Moneda", "Monto", "%"]);
        for line in &report.savings_by_category {
            table.add_row(vec![
                Cell::new(&line.name),
                Cell::new(line.currency.code()),
                Cell::new(money(line.total, line.currency)),
                Cell::new(format!("{:.1}%", line.pct)),
            ]);
        }
        out.push_str(&format!("\n\nAhorros por Categoría\n{table}"));
    }
    out
}
