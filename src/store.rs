use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::models::{Category, TransactionType};

pub const TRANSACTIONS_KEY: &str = "transactions";
pub const CATEGORIES_KEY: &str = "categories";
pub const GOALS_KEY: &str = "goals";

// (id, name, type)
const DEFAULT_CATEGORIES: &[(&str, &str, TransactionType)] = &[
    // Income
    ("cat-inc-1", "Salario", TransactionType::Income),
    ("cat-inc-2", "Bonos", TransactionType::Income),
    ("cat-inc-3", "Inversiones", TransactionType::Income),
    ("cat-inc-4", "Otro Ingreso", TransactionType::Income),
    // Expense
    ("cat-exp-1", "Vivienda", TransactionType::Expense),
    ("cat-exp-2", "Transporte", TransactionType::Expense),
    ("cat-exp-3", "Alimentación", TransactionType::Expense),
    ("cat-exp-4", "Salud", TransactionType::Expense),
    ("cat-exp-5", "Entretenimiento", TransactionType::Expense),
    ("cat-exp-6", "Educación", TransactionType::Expense),
    ("cat-exp-7", "Deudas", TransactionType::Expense),
    ("cat-exp-8", "Otro Gasto", TransactionType::Expense),
    // Savings
    ("cat-sav-1", "Plazo Fijo", TransactionType::Saving),
    ("cat-sav-2", "Compra Dólares", TransactionType::Saving),
    ("cat-sav-3", "Otras Inversiones", TransactionType::Saving),
    ("cat-sav-4", "Otro Ahorro", TransactionType::Saving),
];

/// Key → JSON file persistence under a single data directory.
///
/// Constructed once at startup and injected into the repositories; there
/// are no module-level globals. Writes are last-write-wins with no
/// cross-process coordination — two processes sharing a data dir is an
/// explicit non-guarantee.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read a key, falling back to `default` when the file is missing,
    /// unreadable, or corrupt. Never fails: a broken store must not take
    /// down aggregation or reconciliation.
    pub fn load_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let path = self.path(key);
        if !path.exists() {
            return default;
        }
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Warning: could not read {}: {e}", path.display());
                return default;
            }
        };
        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                eprintln!("Warning: {} is corrupt ({e}); using defaults", path.display());
                default
            }
        }
    }

    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(value)?;
        std::fs::write(self.path(key), format!("{json}\n"))?;
        Ok(())
    }
}

pub fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|(id, name, category_type)| Category {
            id: id.to_string(),
            name: name.to_string(),
            category_type: *category_type,
        })
        .collect()
}

/// Load the category list, writing the fixed seed set on first run. The
/// file is never mutated afterwards.
pub fn load_categories(store: &JsonStore) -> Vec<Category> {
    if !store.path(CATEGORIES_KEY).exists() {
        let categories = default_categories();
        if let Err(e) = store.save(CATEGORIES_KEY, &categories) {
            eprintln!("Warning: could not seed categories: {e}");
        }
        return categories;
    }
    store.load_or(CATEGORIES_KEY, default_categories())
}
