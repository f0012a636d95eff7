use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::{AlcanciaError, Result};
use crate::fmt::{money, parse_amount, pct, short_id};
use crate::models::Currency;
use crate::repository::{goal_progress, GoalRepository, TransactionRepository};
use crate::settings::get_data_dir;
use crate::store::JsonStore;

fn open_goals() -> GoalRepository {
    GoalRepository::open(JsonStore::new(get_data_dir()))
}

pub fn add(name: &str, target: &str, description: Option<String>) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AlcanciaError::Validation(
            "Por favor, complete el nombre y el monto objetivo.".to_string(),
        ));
    }
    let target = parse_amount(target)?;
    if target == 0 {
        return Err(AlcanciaError::Validation(
            "El monto objetivo debe ser mayor a cero.".to_string(),
        ));
    }

    let mut goals = open_goals();
    let goal = goals.add(name.to_string(), description.unwrap_or_default(), target);
    println!(
        "{} Objetivo creado: {} — {} ({})",
        "✓".green(),
        goal.name,
        money(goal.target_amount, Currency::ARS),
        short_id(&goal.id)
    );
    Ok(())
}

pub fn edit(
    id: &str,
    name: Option<String>,
    target: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let mut goals = open_goals();
    let mut goal = goals
        .find(id)
        .cloned()
        .ok_or_else(|| AlcanciaError::UnknownGoal(id.to_string()))?;

    if let Some(n) = name {
        let n = n.trim().to_string();
        if n.is_empty() {
            return Err(AlcanciaError::Validation(
                "Por favor, complete el nombre y el monto objetivo.".to_string(),
            ));
        }
        goal.name = n;
    }
    if let Some(t) = target {
        let t = parse_amount(&t)?;
        if t == 0 {
            return Err(AlcanciaError::Validation(
                "El monto objetivo debe ser mayor a cero.".to_string(),
            ));
        }
        goal.target_amount = t;
    }
    if let Some(d) = description {
        goal.description = d;
    }

    let full_id = goal.id.clone();
    goals.update(goal);
    println!("{} Objetivo {} actualizado.", "✓".green(), short_id(&full_id));
    Ok(())
}

pub fn list() -> Result<()> {
    let goals = open_goals();
    if goals.all().is_empty() {
        println!("Sin objetivos. Creá uno con `alcancia goals add`.");
        return Ok(());
    }

    let repo = TransactionRepository::open(JsonStore::new(get_data_dir()));
    let mut table = Table::new();
    table.set_header(vec!["ID", "Objetivo", "Ahorrado", "Meta", "Progreso"]);
    for goal in goals.all() {
        let saved = goal_progress(goal, repo.all());
        let progress = pct(saved, goal.target_amount).min(100.0);
        let mut name = goal.name.clone();
        if !goal.description.is_empty() {
            name.push_str(&format!("\n{}", goal.description.dimmed()));
        }
        table.add_row(vec![
            Cell::new(short_id(&goal.id)),
            Cell::new(name),
            Cell::new(money(saved, Currency::ARS)),
            Cell::new(money(goal.target_amount, Currency::ARS)),
            Cell::new(format!("{} {:.1}%", progress_bar(progress), progress)),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn delete(id: &str, yes: bool) -> Result<()> {
    let mut goals = open_goals();
    let goal = goals
        .find(id)
        .cloned()
        .ok_or_else(|| AlcanciaError::UnknownGoal(id.to_string()))?;

    if !yes {
        println!(
            "¿Eliminar el objetivo \"{}\"? Los ahorros asociados no se tocan. [s/N]: ",
            goal.name
        );
        let mut input = String::new();
        std::io::stdin().read_line(&mut input).ok();
        if !matches!(input.trim().to_lowercase().as_str(), "s" | "si" | "sí" | "y" | "yes") {
            println!("Cancelado.");
            return Ok(());
        }
    }

    goals.remove(&goal.id);
    println!("{} Objetivo eliminado.", "✓".green());
    Ok(())
}

fn progress_bar(progress: f64) -> String {
    const WIDTH: usize = 10;
    let filled = ((progress / 100.0) * WIDTH as f64).round() as usize;
    let filled = filled.min(WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(WIDTH - filled))
}
