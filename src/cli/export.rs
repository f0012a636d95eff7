use std::path::PathBuf;

use crate::cli::resolve_month;
use crate::error::Result;
use crate::report::category_name;
use crate::repository::TransactionRepository;
use crate::settings::get_data_dir;
use crate::store::{load_categories, JsonStore};

/// Minor units as a plain decimal string ("1234.56") for spreadsheets.
fn decimal(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, (cents % 100).abs())
}

pub fn run(month: Option<String>, output: Option<String>) -> Result<()> {
    let repo = TransactionRepository::open(JsonStore::new(get_data_dir()));
    let categories = load_categories(&JsonStore::new(get_data_dir()));

    let (rows, default_name) = match &month {
        Some(_) => {
            let (year, mo) = resolve_month(&month)?;
            (repo.for_month(year, mo), format!("alcancia-{year:04}-{mo:02}.csv"))
        }
        None => (repo.all().to_vec(), "alcancia-todo.csv".to_string()),
    };

    let path = match output {
        Some(p) => PathBuf::from(p),
        None => {
            let dir = get_data_dir().join("exports");
            std::fs::create_dir_all(&dir)?;
            dir.join(default_name)
        }
    };

    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record([
        "id",
        "fecha",
        "tipo",
        "descripcion",
        "categoria",
        "monto",
        "moneda",
        "habitual",
        "objetivo",
    ])?;
    for t in &rows {
        let date = t.date.to_string();
        let amount = decimal(t.amount);
        writer.write_record([
            t.id.as_str(),
            date.as_str(),
            t.txn_type.label_es(),
            t.description.as_str(),
            category_name(&categories, &t.category_id),
            amount.as_str(),
            t.currency().code(),
            if t.is_habitual { "si" } else { "no" },
            t.goal_id.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush()?;

    println!("{} transacciones exportadas a {}", rows.len(), path.display());
    Ok(())
}
