use chrono::Datelike;
use uuid::Uuid;

use crate::models::{Currency, Goal, NewTransaction, Transaction, TransactionType};
use crate::store::{JsonStore, GOALS_KEY, TRANSACTIONS_KEY};

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

/// In-memory transaction list mirrored to the store. The in-memory state
/// is authoritative; a failed write is logged and swallowed so the
/// session keeps working (it is just not durable).
pub struct TransactionRepository {
    store: JsonStore,
    transactions: Vec<Transaction>,
}

impl TransactionRepository {
    pub fn open(store: JsonStore) -> Self {
        let transactions = store.load_or(TRANSACTIONS_KEY, Vec::new());
        Self { store, transactions }
    }

    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Find by full id or unique short-id prefix.
    pub fn find(&self, id: &str) -> Option<&Transaction> {
        if let Some(t) = self.get(id) {
            return Some(t);
        }
        let mut matches = self.transactions.iter().filter(|t| t.id.starts_with(id));
        match (matches.next(), matches.next()) {
            (Some(t), None) => Some(t),
            _ => None,
        }
    }

    pub fn add(&mut self, new: NewTransaction) -> &Transaction {
        let mut txn = Transaction {
            id: Uuid::new_v4().to_string(),
            description: new.description,
            amount: new.amount,
            date: new.date,
            category_id: new.category_id,
            txn_type: new.txn_type,
            is_habitual: new.is_habitual,
            currency: new.currency,
            goal_id: new.goal_id,
        };
        txn.normalize();
        self.transactions.push(txn);
        self.persist();
        self.transactions.last().unwrap()
    }

    /// Replace the record with a matching id; no-op when absent. The type
    /// is fixed at creation, so the stored type wins over the caller's.
    pub fn update(&mut self, mut updated: Transaction) {
        let Some(existing) = self.transactions.iter_mut().find(|t| t.id == updated.id) else {
            return;
        };
        updated.txn_type = existing.txn_type;
        updated.normalize();
        *existing = updated;
        self.persist();
    }

    pub fn remove(&mut self, id: &str) {
        self.transactions.retain(|t| t.id != id);
        self.persist();
    }

    /// Transactions dated in the given calendar month (1-12), most recent
    /// first. The sort is stable, so same-day records keep their stored
    /// order.
    pub fn for_month(&self, year: i32, month: u32) -> Vec<Transaction> {
        let mut month_txns: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|t| t.date.year() == year && t.date.month() == month)
            .cloned()
            .collect();
        month_txns.sort_by(|a, b| b.date.cmp(&a.date));
        month_txns
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(TRANSACTIONS_KEY, &self.transactions) {
            eprintln!("Warning: could not persist transactions: {e}");
        }
    }
}

// ---------------------------------------------------------------------------
// Goals
// ---------------------------------------------------------------------------

pub struct GoalRepository {
    store: JsonStore,
    goals: Vec<Goal>,
}

impl GoalRepository {
    pub fn open(store: JsonStore) -> Self {
        let goals = store.load_or(GOALS_KEY, Vec::new());
        Self { store, goals }
    }

    pub fn all(&self) -> &[Goal] {
        &self.goals
    }

    pub fn find(&self, id: &str) -> Option<&Goal> {
        self.goals
            .iter()
            .find(|g| g.id == id)
            .or_else(|| {
                let mut matches = self.goals.iter().filter(|g| g.id.starts_with(id));
                match (matches.next(), matches.next()) {
                    (Some(g), None) => Some(g),
                    _ => None,
                }
            })
    }

    pub fn add(&mut self, name: String, description: String, target_amount: i64) -> &Goal {
        self.goals.push(Goal {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            target_amount,
        });
        self.persist();
        self.goals.last().unwrap()
    }

    /// Replace the goal with a matching id; no-op when absent.
    pub fn update(&mut self, updated: Goal) {
        let Some(existing) = self.goals.iter_mut().find(|g| g.id == updated.id) else {
            return;
        };
        *existing = updated;
        self.persist();
    }

    pub fn remove(&mut self, id: &str) {
        self.goals.retain(|g| g.id != id);
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(GOALS_KEY, &self.goals) {
            eprintln!("Warning: could not persist goals: {e}");
        }
    }
}

/// Saved amount toward a goal: ARS savings carrying the goal's id. Goal
/// targets are ARS, so USD savings never count toward progress.
pub fn goal_progress(goal: &Goal, transactions: &[Transaction]) -> i64 {
    transactions
        .iter()
        .filter(|t| {
            t.txn_type == TransactionType::Saving
                && t.currency() == Currency::ARS
                && t.goal_id.as_deref() == Some(goal.id.as_str())
        })
        .map(|t| t.amount)
        .sum()
}
