use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
    Saving,
}

impl TransactionType {
    pub fn label_es(&self) -> &'static str {
        match self {
            TransactionType::Income => "Ingreso",
            TransactionType::Expense => "Gasto",
            TransactionType::Saving => "Ahorro",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Currency {
    ARS,
    USD,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::ARS => "ARS",
            Currency::USD => "USD",
        }
    }
}

/// A single money movement. Amounts are integer minor units (centavos),
/// never floats.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub description: String,
    /// Minor units; always >= 0, the type carries the sign semantics.
    pub amount: i64,
    pub date: NaiveDate,
    pub category_id: String,
    #[serde(rename = "type")]
    pub txn_type: TransactionType,
    #[serde(default)]
    pub is_habitual: bool,
    /// Only meaningful for SAVING; absent means ARS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Optional SAVING-to-goal attribution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<String>,
}

impl Transaction {
    pub fn currency(&self) -> Currency {
        self.currency.unwrap_or(Currency::ARS)
    }

    /// Enforce per-type field invariants: income is never habitual, and
    /// currency/goal attribution exist only on savings.
    pub fn normalize(&mut self) {
        match self.txn_type {
            TransactionType::Income => {
                self.is_habitual = false;
                self.currency = None;
                self.goal_id = None;
            }
            TransactionType::Expense => {
                self.currency = None;
                self.goal_id = None;
            }
            TransactionType::Saving => {}
        }
    }
}

/// Transaction as submitted by the user, before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub description: String,
    pub amount: i64,
    pub date: NaiveDate,
    pub category_id: String,
    pub txn_type: TransactionType,
    pub is_habitual: bool,
    pub currency: Option<Currency>,
    pub goal_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: TransactionType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Minor units, ARS.
    pub target_amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(txn_type: TransactionType) -> Transaction {
        Transaction {
            id: "t1".to_string(),
            description: "Netflix".to_string(),
            amount: 1000,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            category_id: "cat-exp-5".to_string(),
            txn_type,
            is_habitual: true,
            currency: Some(Currency::USD),
            goal_id: Some("g1".to_string()),
        }
    }

    #[test]
    fn test_normalize_income_clears_habitual_and_currency() {
        let mut t = txn(TransactionType::Income);
        t.normalize();
        assert!(!t.is_habitual);
        assert!(t.currency.is_none());
        assert!(t.goal_id.is_none());
    }

    #[test]
    fn test_normalize_expense_keeps_habitual() {
        let mut t = txn(TransactionType::Expense);
        t.normalize();
        assert!(t.is_habitual);
        assert!(t.currency.is_none());
    }

    #[test]
    fn test_normalize_saving_keeps_currency() {
        let mut t = txn(TransactionType::Saving);
        t.normalize();
        assert_eq!(t.currency, Some(Currency::USD));
        assert_eq!(t.goal_id.as_deref(), Some("g1"));
    }

    #[test]
    fn test_serde_layout_is_camel_case() {
        let t = txn(TransactionType::Saving);
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["type"], "SAVING");
        assert_eq!(json["categoryId"], "cat-exp-5");
        assert_eq!(json["isHabitual"], true);
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["date"], "2024-05-01");
    }

    #[test]
    fn test_missing_currency_defaults_to_ars() {
        let json = r#"{
            "id": "a", "description": "Plazo fijo", "amount": 50000,
            "date": "2024-03-10", "categoryId": "cat-sav-1", "type": "SAVING"
        }"#;
        let t: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(t.currency(), Currency::ARS);
        assert!(!t.is_habitual);
    }
}
