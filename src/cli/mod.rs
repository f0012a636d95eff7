pub mod categories;
pub mod demo;
pub mod export;
pub mod goals;
pub mod init;
pub mod report;
pub mod status;
pub mod transactions;

use chrono::Datelike;
use clap::{Parser, Subcommand, ValueEnum};

use crate::error::{AlcanciaError, Result};
use crate::models::{Currency, TransactionType};

/// Parse an optional `YYYY-MM`; defaults to the current month.
pub(crate) fn resolve_month(month: &Option<String>) -> Result<(i32, u32)> {
    match month {
        Some(m) => {
            let parts: Vec<&str> = m.split('-').collect();
            if parts.len() == 2 {
                if let (Ok(year), Ok(mo)) = (parts[0].parse::<i32>(), parts[1].parse::<u32>()) {
                    if (1..=12).contains(&mo) {
                        return Ok((year, mo));
                    }
                }
            }
            Err(AlcanciaError::Validation(format!(
                "Mes inválido: {m} (se espera YYYY-MM)"
            )))
        }
        None => {
            let today = chrono::Local::now().date_naive();
            Ok((today.year(), today.month()))
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TypeArg {
    Income,
    Expense,
    Saving,
}

impl From<TypeArg> for TransactionType {
    fn from(value: TypeArg) -> Self {
        match value {
            TypeArg::Income => TransactionType::Income,
            TypeArg::Expense => TransactionType::Expense,
            TypeArg::Saving => TransactionType::Saving,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CurrencyArg {
    Ars,
    Usd,
}

impl From<CurrencyArg> for Currency {
    fn from(value: CurrencyArg) -> Self {
        match value {
            CurrencyArg::Ars => Currency::ARS,
            CurrencyArg::Usd => Currency::USD,
        }
    }
}

#[derive(Parser)]
#[command(name = "alcancia", about = "Household finance tracker: record, browse and analyze monthly movements.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up alcancia: choose a data directory and seed categories.
    Init {
        /// Path for alcancia data (default: ~/Documents/alcancia)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Record a transaction.
    Add {
        /// What the money was for (e.g. "Supermercado")
        description: String,
        /// Amount (e.g. 1234.56, 1234,56 or 12.500,50), never negative
        #[arg(long)]
        amount: String,
        /// Transaction kind
        #[arg(long = "type", value_enum)]
        txn_type: TypeArg,
        /// Category name or id
        #[arg(long)]
        category: String,
        /// Date: YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Flag as recurring, to be reminded if absent next month
        #[arg(long)]
        habitual: bool,
        /// Savings currency (default: ars)
        #[arg(long, value_enum)]
        currency: Option<CurrencyArg>,
        /// Goal name or id this saving counts toward
        #[arg(long)]
        goal: Option<String>,
    },
    /// Edit a transaction (the type is fixed at creation).
    Edit {
        /// Transaction id (or unique prefix)
        id: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        amount: Option<String>,
        /// Date: YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
        /// Category name or id
        #[arg(long)]
        category: Option<String>,
        /// true/false
        #[arg(long)]
        habitual: Option<bool>,
        #[arg(long, value_enum)]
        currency: Option<CurrencyArg>,
        /// Goal name or id ("none" clears it)
        #[arg(long)]
        goal: Option<String>,
    },
    /// Delete a transaction.
    Delete {
        /// Transaction id (or unique prefix)
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// List a month's transactions, most recent first.
    List {
        /// Month: YYYY-MM (default: current month)
        #[arg(long)]
        month: Option<String>,
    },
    /// Show a month's totals.
    Summary {
        /// Month: YYYY-MM (default: current month)
        #[arg(long)]
        month: Option<String>,
    },
    /// Monthly report with category breakdowns.
    Report {
        /// Month: YYYY-MM (default: current month)
        #[arg(long)]
        month: Option<String>,
        /// Request an AI financial analysis (needs GEMINI_API_KEY)
        #[arg(long)]
        analyze: bool,
    },
    /// Manage savings goals.
    Goals {
        #[command(subcommand)]
        command: GoalsCommands,
    },
    /// List the category set.
    Categories,
    /// Export transactions to CSV.
    Export {
        /// Month: YYYY-MM (default: everything)
        #[arg(long)]
        month: Option<String>,
        /// Output path (default: <data_dir>/exports/...)
        #[arg(long)]
        output: Option<String>,
    },
    /// Load sample data to explore alcancia.
    Demo,
    /// Show the data directory and record counts.
    Status,
}

#[derive(Subcommand)]
pub enum GoalsCommands {
    /// Create a goal.
    Add {
        /// Goal name (e.g. "Vacaciones de verano")
        name: String,
        /// Target amount in ARS
        #[arg(long)]
        target: String,
        /// Optional description
        #[arg(long)]
        description: Option<String>,
    },
    /// Edit a goal.
    Edit {
        /// Goal id (or unique prefix)
        id: String,
        #[arg(long)]
        name: Option<String>,
        /// Target amount in ARS
        #[arg(long)]
        target: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// List goals with saved progress.
    List,
    /// Delete a goal.
    Delete {
        /// Goal id (or unique prefix)
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}
