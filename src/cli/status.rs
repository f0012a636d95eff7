use crate::error::Result;
use crate::models::{Goal, Transaction};
use crate::settings::get_data_dir;
use crate::store::{JsonStore, CATEGORIES_KEY, GOALS_KEY, TRANSACTIONS_KEY};

fn file_size(store: &JsonStore, key: &str) -> String {
    let path = store.path(key);
    match std::fs::metadata(&path) {
        Ok(meta) => {
            let bytes = meta.len();
            if bytes < 1024 {
                format!("{bytes} B")
            } else {
                format!("{:.1} KB", bytes as f64 / 1024.0)
            }
        }
        Err(_) => "(no existe)".to_string(),
    }
}

pub fn run() -> Result<()> {
    let data_dir = get_data_dir();
    let store = JsonStore::new(&data_dir);

    println!("Directorio de datos: {}", data_dir.display());
    for key in [TRANSACTIONS_KEY, CATEGORIES_KEY, GOALS_KEY] {
        println!("  {key}.json: {}", file_size(&store, key));
    }

    let transactions: Vec<Transaction> = store.load_or(TRANSACTIONS_KEY, Vec::new());
    let goals: Vec<Goal> = store.load_or(GOALS_KEY, Vec::new());
    let habitual = transactions.iter().filter(|t| t.is_habitual).count();

    println!();
    println!("Transacciones: {}", transactions.len());
    println!("Habituales:    {habitual}");
    println!("Objetivos:     {}", goals.len());

    if transactions.is_empty() {
        println!();
        println!("Sin datos. Ejecutá `alcancia init` y después `alcancia add` o `alcancia demo`.");
    }
    Ok(())
}
