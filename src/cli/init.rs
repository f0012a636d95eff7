use std::path::PathBuf;

use crate::error::Result;
use crate::settings::{load_settings, save_settings, shellexpand_path, Settings};
use crate::store::{load_categories, JsonStore};

pub fn run(data_dir: Option<String>) -> Result<()> {
    let mut settings = load_settings();
    let defaults = Settings::default();

    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(&dir);
    } else if settings.data_dir == defaults.data_dir {
        // First run — prompt for data dir
        println!("Directorio de datos [{}]: ", settings.data_dir);
        let mut input = String::new();
        std::io::stdin().read_line(&mut input).ok();
        let chosen = input.trim();
        if !chosen.is_empty() {
            settings.data_dir = shellexpand_path(chosen);
        }
    }

    save_settings(&settings)?;

    let resolved = PathBuf::from(&settings.data_dir);
    std::fs::create_dir_all(&resolved)?;
    std::fs::create_dir_all(resolved.join("exports"))?;

    let categories = load_categories(&JsonStore::new(&resolved));

    println!("Alcancía inicializada en {}", resolved.display());
    println!("{} categorías disponibles.", categories.len());
    Ok(())
}
