use std::collections::BTreeMap;

use crate::aggregate::{month_totals, MonthTotals};
use crate::fmt::{money, pct};
use crate::models::{Category, Currency, Transaction, TransactionType};

/// Bucket label for transactions whose category no longer exists. A
/// dangling reference is never an error.
pub const UNCATEGORIZED: &str = "Sin Categoría";

pub fn category_name<'a>(categories: &'a [Category], id: &str) -> &'a str {
    categories
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.as_str())
        .unwrap_or(UNCATEGORIZED)
}

pub struct ExpenseLine {
    pub name: String,
    pub total: i64,
    /// Share of the month's total expenses; 0 when there are none.
    pub pct: f64,
}

pub struct SavingsLine {
    pub name: String,
    pub currency: Currency,
    pub total: i64,
    /// Share of the savings total *for this line's currency*, never of a
    /// mixed-currency sum.
    pub pct: f64,
}

pub struct MonthlyReport {
    pub totals: MonthTotals,
    pub expenses_by_category: Vec<ExpenseLine>,
    pub savings_by_category: Vec<SavingsLine>,
}

/// Aggregate a transaction set (typically one month) into per-category
/// breakdowns, sorted by amount descending.
pub fn build_report(transactions: &[Transaction], categories: &[Category]) -> MonthlyReport {
    let totals = month_totals(transactions);

    let mut expense_buckets: BTreeMap<String, i64> = BTreeMap::new();
    let mut savings_buckets: BTreeMap<(String, Currency), i64> = BTreeMap::new();
    for t in transactions {
        let name = category_name(categories, &t.category_id).to_string();
        match t.txn_type {
            TransactionType::Expense => {
                *expense_buckets.entry(name).or_insert(0) += t.amount;
            }
            TransactionType::Saving => {
                *savings_buckets.entry((name, t.currency())).or_insert(0) += t.amount;
            }
            TransactionType::Income => {}
        }
    }

    let mut expenses_by_category: Vec<ExpenseLine> = expense_buckets
        .into_iter()
        .map(|(name, total)| ExpenseLine {
            name,
            total,
            pct: pct(total, totals.expense),
        })
        .collect();
    expenses_by_category.sort_by(|a, b| b.total.cmp(&a.total));

    let mut savings_by_category: Vec<SavingsLine> = savings_buckets
        .into_iter()
        .map(|((name, currency), total)| {
            let denominator = match currency {
                Currency::ARS => totals.savings_ars,
                Currency::USD => totals.savings_usd,
            };
            SavingsLine {
                name,
                currency,
                total,
                pct: pct(total, denominator),
            }
        })
        .collect();
    savings_by_category.sort_by(|a, b| b.total.cmp(&a.total));

    MonthlyReport {
        totals,
        expenses_by_category,
        savings_by_category,
    }
}

/// Serialize the report into the fixed text block handed to the advisor.
pub fn render_prompt(report: &MonthlyReport) -> String {
    let t = &report.totals;
    let mut out = String::new();
    out.push_str(&format!("- Ingresos Totales: {}\n", money(t.income, Currency::ARS)));
    out.push_str(&format!("- Gastos Totales: {}\n", money(t.expense, Currency::ARS)));
    out.push_str(&format!("- Ahorros Totales (ARS): {}\n", money(t.savings_ars, Currency::ARS)));
    out.push_str(&format!("- Ahorros Totales (USD): {}\n", money(t.savings_usd, Currency::USD)));
    out.push_str(&format!(
        "- Balance (Ingresos - Gastos): {}\n",
        money(t.balance(), Currency::ARS)
    ));

    out.push_str("- Desglose de Gastos por Categoría:\n");
    for line in &report.expenses_by_category {
        out.push_str(&format!("    {}: {}\n", line.name, money(line.total, Currency::ARS)));
    }
    out.push_str("- Desglose de Ahorros por Categoría:\n");
    for line in &report.savings_by_category {
        out.push_str(&format!(
            "    {} ({}): {}\n",
            line.name,
            line.currency.code(),
            money(line.total, line.currency)
        ));
    }
    out
}
