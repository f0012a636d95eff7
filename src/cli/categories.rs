use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::settings::get_data_dir;
use crate::store::{load_categories, JsonStore};

pub fn list() -> Result<()> {
    let categories = load_categories(&JsonStore::new(get_data_dir()));

    let mut table = Table::new();
    table.set_header(vec!["ID", "Nombre", "Tipo"]);
    for c in &categories {
        table.add_row(vec![
            Cell::new(&c.id),
            Cell::new(&c.name),
            Cell::new(c.category_type.label_es()),
        ]);
    }
    println!("{table}");
    Ok(())
}
