use crate::models::{Currency, Transaction, TransactionType};

/// Totals over a transaction set, in minor units. Savings are allocated
/// funds, not spent funds, so they never enter the balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthTotals {
    pub income: i64,
    pub expense: i64,
    pub savings_ars: i64,
    pub savings_usd: i64,
}

impl MonthTotals {
    pub fn balance(&self) -> i64 {
        self.income - self.expense
    }
}

pub fn month_totals(transactions: &[Transaction]) -> MonthTotals {
    let mut totals = MonthTotals::default();
    for t in transactions {
        match t.txn_type {
            TransactionType::Income => totals.income += t.amount,
            TransactionType::Expense => totals.expense += t.amount,
            TransactionType::Saving => match t.currency() {
                Currency::ARS => totals.savings_ars += t.amount,
                Currency::USD => totals.savings_usd += t.amount,
            },
        }
    }
    totals
}
