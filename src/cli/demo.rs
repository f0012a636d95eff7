use chrono::{Datelike, Local, NaiveDate};
use colored::Colorize;

use crate::error::Result;
use crate::models::{Currency, NewTransaction, TransactionType};
use crate::reconciler::previous_month;
use crate::repository::{GoalRepository, TransactionRepository};
use crate::settings::get_data_dir;
use crate::store::{load_categories, JsonStore};

struct DemoTxn {
    day: u32,
    description: &'static str,
    /// Minor units.
    amount: i64,
    category_id: &'static str,
    txn_type: TransactionType,
    habitual: bool,
    currency: Option<Currency>,
    /// Counts toward the demo goal.
    toward_goal: bool,
}

const fn txn(
    day: u32,
    description: &'static str,
    amount: i64,
    category_id: &'static str,
    txn_type: TransactionType,
    habitual: bool,
) -> DemoTxn {
    DemoTxn {
        day,
        description,
        amount,
        category_id,
        txn_type,
        habitual,
        currency: None,
        toward_goal: false,
    }
}

/// Entries repeated in both demo months.
const EVERY_MONTH: &[DemoTxn] = &[
    txn(1, "Sueldo", 95_000_000, "cat-inc-1", TransactionType::Income, false),
    txn(3, "Alquiler", 38_000_000, "cat-exp-1", TransactionType::Expense, true),
    txn(6, "Supermercado", 12_450_000, "cat-exp-3", TransactionType::Expense, false),
    txn(10, "SUBE", 1_800_000, "cat-exp-2", TransactionType::Expense, false),
    txn(15, "Obra social", 6_500_000, "cat-exp-4", TransactionType::Expense, true),
];

/// Entries present only in the previous month, so the habitual ones show
/// up in the current month's reminder.
const PREVIOUS_ONLY: &[DemoTxn] = &[
    txn(9, "Netflix", 1_190_000, "cat-exp-5", TransactionType::Expense, true),
    txn(12, "Gimnasio", 2_500_000, "cat-exp-4", TransactionType::Expense, true),
    txn(20, "Curso de inglés", 4_000_000, "cat-exp-6", TransactionType::Expense, false),
];

const SAVINGS: &[DemoTxn] = &[
    DemoTxn {
        day: 5,
        description: "Plazo fijo",
        amount: 10_000_000,
        category_id: "cat-sav-1",
        txn_type: TransactionType::Saving,
        habitual: false,
        currency: None,
        toward_goal: true,
    },
    DemoTxn {
        day: 22,
        description: "Compra de dólares",
        amount: 20_000,
        category_id: "cat-sav-2",
        txn_type: TransactionType::Saving,
        habitual: false,
        currency: Some(Currency::USD),
        toward_goal: false,
    },
];

/// Clamp a day to the last valid day of the given year/month.
fn clamp_day(year: i32, month: u32, day: u32) -> NaiveDate {
    let last_day = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap()
        .checked_add_months(chrono::Months::new(1))
        .unwrap()
        .pred_opt()
        .unwrap()
        .day();
    NaiveDate::from_ymd_opt(year, month, day.min(last_day)).unwrap()
}

pub fn run() -> Result<()> {
    let store = JsonStore::new(get_data_dir());
    load_categories(&store);

    let mut goals = GoalRepository::open(JsonStore::new(get_data_dir()));
    let goal_id = goals
        .add(
            "Vacaciones de verano".to_string(),
            "Un viaje a la costa".to_string(),
            50_000_000,
        )
        .id
        .clone();

    let today = Local::now().date_naive();
    let (cur_year, cur_month) = (today.year(), today.month());
    let (prev_year, prev_month) = previous_month(cur_year, cur_month);

    let mut repo = TransactionRepository::open(store);
    let mut count = 0usize;
    let mut insert = |year: i32, month: u32, entries: &[DemoTxn]| {
        for e in entries {
            repo.add(NewTransaction {
                description: e.description.to_string(),
                amount: e.amount,
                date: clamp_day(year, month, e.day),
                category_id: e.category_id.to_string(),
                txn_type: e.txn_type,
                is_habitual: e.habitual,
                currency: e.currency,
                goal_id: e.toward_goal.then(|| goal_id.clone()),
            });
            count += 1;
        }
    };

    insert(prev_year, prev_month, EVERY_MONTH);
    insert(prev_year, prev_month, PREVIOUS_ONLY);
    insert(prev_year, prev_month, SAVINGS);
    insert(cur_year, cur_month, EVERY_MONTH);
    insert(cur_year, cur_month, SAVINGS);

    println!("{} {count} transacciones de ejemplo cargadas.", "✓".green());
    println!("Probá `alcancia list`, `alcancia report` y `alcancia goals list`.");
    Ok(())
}
