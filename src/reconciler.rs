use std::collections::HashSet;

use chrono::Datelike;

use crate::models::Transaction;

/// Calendar month before (year, month 1-12); January rolls to December
/// of the prior year.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

fn normalize(description: &str) -> String {
    description.trim().to_lowercase()
}

/// Previous-month habitual transactions with no same-description entry in
/// the given month. Matching is case-insensitive and whitespace-trimmed,
/// against current-month transactions of any type.
///
/// Pure and idempotent: a derived view, never a mutation. Recompute it
/// whenever the visible month or the transaction set changes.
pub fn missing_habitual(transactions: &[Transaction], year: i32, month: u32) -> Vec<Transaction> {
    let (prev_year, prev_month) = previous_month(year, month);

    let current_descriptions: HashSet<String> = transactions
        .iter()
        .filter(|t| t.date.year() == year && t.date.month() == month)
        .map(|t| normalize(&t.description))
        .collect();

    transactions
        .iter()
        .filter(|t| t.is_habitual && t.date.year() == prev_year && t.date.month() == prev_month)
        .filter(|t| !current_descriptions.contains(&normalize(&t.description)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;
    use chrono::NaiveDate;

    fn txn(desc: &str, date: &str, habitual: bool) -> Transaction {
        Transaction {
            id: format!("{desc}-{date}"),
            description: desc.to_string(),
            amount: 1_000,
            date: date.parse::<NaiveDate>().unwrap(),
            category_id: "cat-exp-5".to_string(),
            txn_type: TransactionType::Expense,
            is_habitual: habitual,
            currency: None,
            goal_id: None,
        }
    }

    #[test]
    fn test_previous_month_rollover() {
        assert_eq!(previous_month(2024, 1), (2023, 12));
        assert_eq!(previous_month(2024, 5), (2024, 4));
        assert_eq!(previous_month(2024, 12), (2024, 11));
    }

    #[test]
    fn test_reports_unrepeated_habitual_expense() {
        let txns = vec![
            txn("Netflix", "2024-04-10", true),
            txn("Supermercado", "2024-04-12", false),
            txn("Alquiler", "2024-05-01", false),
        ];
        let missing = missing_habitual(&txns, 2024, 5);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].description, "Netflix");
    }

    #[test]
    fn test_match_is_case_insensitive_and_trimmed() {
        let txns = vec![
            txn("Netflix", "2024-04-10", true),
            txn("  NETFLIX ", "2024-05-09", false),
        ];
        assert!(missing_habitual(&txns, 2024, 5).is_empty());
    }

    #[test]
    fn test_adding_matching_entry_clears_it() {
        let mut txns = vec![txn("Netflix", "2024-04-10", true)];
        assert_eq!(missing_habitual(&txns, 2024, 5).len(), 1);
        txns.push(txn("netflix", "2024-05-11", false));
        assert!(missing_habitual(&txns, 2024, 5).is_empty());
    }

    #[test]
    fn test_idempotent_on_unchanged_data() {
        let txns = vec![
            txn("Netflix", "2024-04-10", true),
            txn("Spotify", "2024-04-11", true),
        ];
        let first = missing_habitual(&txns, 2024, 5);
        let second = missing_habitual(&txns, 2024, 5);
        let ids = |v: &[Transaction]| v.iter().map(|t| t.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_first_month_has_no_missing_entries() {
        let txns = vec![txn("Alquiler", "2024-05-01", false)];
        assert!(missing_habitual(&txns, 2024, 5).is_empty());
        assert!(missing_habitual(&[], 2024, 5).is_empty());
    }

    #[test]
    fn test_january_checks_december_of_prior_year() {
        let txns = vec![txn("Gimnasio", "2023-12-05", true)];
        let missing = missing_habitual(&txns, 2024, 1);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].description, "Gimnasio");
    }
}
