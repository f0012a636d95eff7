use chrono::NaiveDate;
use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::{resolve_month, CurrencyArg, TypeArg};
use crate::error::{AlcanciaError, Result};
use crate::fmt::{money, month_name_es, parse_amount, short_id};
use crate::models::{Category, NewTransaction, Transaction, TransactionType};
use crate::reconciler::missing_habitual;
use crate::report::category_name;
use crate::repository::{GoalRepository, TransactionRepository};
use crate::settings::get_data_dir;
use crate::store::{load_categories, JsonStore};

fn open_repo() -> TransactionRepository {
    TransactionRepository::open(JsonStore::new(get_data_dir()))
}

fn categories() -> Vec<Category> {
    load_categories(&JsonStore::new(get_data_dir()))
}

fn parse_date(input: &str) -> Result<NaiveDate> {
    input
        .parse()
        .map_err(|_| AlcanciaError::InvalidDate(input.to_string()))
}

/// Resolve a category by id or case-insensitive name, restricted to the
/// transaction's type. Dangling references are tolerated at display time,
/// but new entries must point at a real category.
fn resolve_category(categories: &[Category], input: &str, txn_type: TransactionType) -> Result<String> {
    categories
        .iter()
        .filter(|c| c.category_type == txn_type)
        .find(|c| c.id == input || c.name.to_lowercase() == input.trim().to_lowercase())
        .map(|c| c.id.clone())
        .ok_or_else(|| AlcanciaError::UnknownCategory(input.to_string()))
}

fn resolve_goal(input: &str) -> Result<String> {
    let goals = GoalRepository::open(JsonStore::new(get_data_dir()));
    goals
        .all()
        .iter()
        .find(|g| g.name.to_lowercase() == input.trim().to_lowercase())
        .map(|g| g.id.clone())
        .or_else(|| goals.find(input).map(|g| g.id.clone()))
        .ok_or_else(|| AlcanciaError::UnknownGoal(input.to_string()))
}

fn confirm(question: &str) -> bool {
    println!("{question} [s/N]: ");
    let mut input = String::new();
    std::io::stdin().read_line(&mut input).ok();
    matches!(input.trim().to_lowercase().as_str(), "s" | "si" | "sí" | "y" | "yes")
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
pub fn add(
    description: &str,
    amount: &str,
    txn_type: TypeArg,
    category: &str,
    date: Option<String>,
    habitual: bool,
    currency: Option<CurrencyArg>,
    goal: Option<String>,
) -> Result<()> {
    let txn_type: TransactionType = txn_type.into();

    let description = description.trim();
    if description.is_empty() {
        return Err(AlcanciaError::Validation(
            "La descripción es obligatoria.".to_string(),
        ));
    }
    if habitual && txn_type == TransactionType::Income {
        return Err(AlcanciaError::Validation(
            "Un ingreso no puede marcarse como habitual.".to_string(),
        ));
    }
    if currency.is_some() && txn_type != TransactionType::Saving {
        return Err(AlcanciaError::Validation(
            "La moneda solo aplica a ahorros.".to_string(),
        ));
    }
    if goal.is_some() && txn_type != TransactionType::Saving {
        return Err(AlcanciaError::Validation(
            "Los objetivos solo aplican a ahorros.".to_string(),
        ));
    }

    let amount = parse_amount(amount)?;
    let date = match date {
        Some(d) => parse_date(&d)?,
        None => chrono::Local::now().date_naive(),
    };
    let category_id = resolve_category(&categories(), category, txn_type)?;
    let goal_id = goal.as_deref().map(resolve_goal).transpose()?;

    let mut repo = open_repo();
    let added = repo.add(NewTransaction {
        description: description.to_string(),
        amount,
        date,
        category_id,
        txn_type,
        is_habitual: habitual,
        currency: currency.map(Into::into),
        goal_id,
    });

    println!(
        "{} {} registrado: {} — {} ({})",
        "✓".green(),
        added.txn_type.label_es(),
        added.description,
        money(added.amount, added.currency()),
        short_id(&added.id)
    );
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn edit(
    id: &str,
    description: Option<String>,
    amount: Option<String>,
    date: Option<String>,
    category: Option<String>,
    habitual: Option<bool>,
    currency: Option<CurrencyArg>,
    goal: Option<String>,
) -> Result<()> {
    let mut repo = open_repo();
    let mut txn = repo
        .find(id)
        .cloned()
        .ok_or_else(|| AlcanciaError::UnknownTransaction(id.to_string()))?;

    if let Some(d) = description {
        let d = d.trim().to_string();
        if d.is_empty() {
            return Err(AlcanciaError::Validation(
                "La descripción es obligatoria.".to_string(),
            ));
        }
        txn.description = d;
    }
    if let Some(a) = amount {
        txn.amount = parse_amount(&a)?;
    }
    if let Some(d) = date {
        txn.date = parse_date(&d)?;
    }
    if let Some(c) = category {
        txn.category_id = resolve_category(&categories(), &c, txn.txn_type)?;
    }
    if let Some(h) = habitual {
        if h && txn.txn_type == TransactionType::Income {
            return Err(AlcanciaError::Validation(
                "Un ingreso no puede marcarse como habitual.".to_string(),
            ));
        }
        txn.is_habitual = h;
    }
    if let Some(c) = currency {
        if txn.txn_type != TransactionType::Saving {
            return Err(AlcanciaError::Validation(
                "La moneda solo aplica a ahorros.".to_string(),
            ));
        }
        txn.currency = Some(c.into());
    }
    if let Some(g) = goal {
        if g.eq_ignore_ascii_case("none") {
            txn.goal_id = None;
        } else {
            if txn.txn_type != TransactionType::Saving {
                return Err(AlcanciaError::Validation(
                    "Los objetivos solo aplican a ahorros.".to_string(),
                ));
            }
            txn.goal_id = Some(resolve_goal(&g)?);
        }
    }

    let full_id = txn.id.clone();
    repo.update(txn);
    println!("{} Transacción {} actualizada.", "✓".green(), short_id(&full_id));
    Ok(())
}

pub fn delete(id: &str, yes: bool) -> Result<()> {
    let mut repo = open_repo();
    let txn = repo
        .find(id)
        .cloned()
        .ok_or_else(|| AlcanciaError::UnknownTransaction(id.to_string()))?;

    if !yes
        && !confirm(&format!(
            "¿Estás seguro de que quieres eliminar \"{}\" del {}?",
            txn.description, txn.date
        ))
    {
        println!("Cancelado.");
        return Ok(());
    }

    repo.remove(&txn.id);
    println!("{} Transacción eliminada.", "✓".green());
    Ok(())
}

pub fn list(month: Option<String>) -> Result<()> {
    let (year, month) = resolve_month(&month)?;
    let repo = open_repo();
    let categories = categories();
    let month_txns = repo.for_month(year, month);

    println!("{} {}", month_name_es(month).bold(), year);
    if month_txns.is_empty() {
        println!("Sin movimientos este mes.");
    } else {
        println!("{}", format_transactions(&month_txns, &categories));
    }

    let missing = missing_habitual(repo.all(), year, month);
    if !missing.is_empty() {
        println!();
        println!(
            "{} Gastos habituales del mes pasado sin registrar:",
            "Recordatorio:".yellow().bold()
        );
        for t in &missing {
            println!(
                "  - {} ({} el {})",
                t.description,
                money(t.amount, t.currency()),
                t.date
            );
        }
    }
    Ok(())
}

pub fn format_transactions(transactions: &[Transaction], categories: &[Category]) -> String {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Fecha", "Descripción", "Categoría", "Tipo", "Monto"]);
    for t in transactions {
        let amount = match t.txn_type {
            TransactionType::Income => money(t.amount, t.currency()).green().to_string(),
            TransactionType::Expense => money(t.amount, t.currency()).red().to_string(),
            TransactionType::Saving => money(t.amount, t.currency()).blue().to_string(),
        };
        let mut description = t.description.clone();
        if t.is_habitual {
            description.push_str(" ↻");
        }
        table.add_row(vec![
            Cell::new(short_id(&t.id)),
            Cell::new(t.date),
            Cell::new(description),
            Cell::new(category_name(categories, &t.category_id)),
            Cell::new(t.txn_type.label_es()),
            Cell::new(amount),
        ]);
    }
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::default_categories;

    #[test]
    fn test_resolve_category_by_name_ignores_case() {
        let cats = default_categories();
        let id = resolve_category(&cats, "alimentación", TransactionType::Expense).unwrap();
        assert_eq!(id, "cat-exp-3");
    }

    #[test]
    fn test_resolve_category_requires_matching_type() {
        let cats = default_categories();
        assert!(resolve_category(&cats, "Salario", TransactionType::Expense).is_err());
        assert!(resolve_category(&cats, "Salario", TransactionType::Income).is_ok());
    }

    #[test]
    fn test_resolve_category_by_id() {
        let cats = default_categories();
        let id = resolve_category(&cats, "cat-sav-2", TransactionType::Saving).unwrap();
        assert_eq!(id, "cat-sav-2");
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2024-05-01").is_ok());
        assert!(parse_date("01/05/2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
    }
}
