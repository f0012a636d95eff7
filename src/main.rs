mod advisor;
mod aggregate;
mod cli;
mod error;
mod fmt;
mod models;
mod reconciler;
mod report;
mod repository;
mod settings;
mod store;

use clap::Parser;

use cli::{Cli, Commands, GoalsCommands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Add {
            description,
            amount,
            txn_type,
            category,
            date,
            habitual,
            currency,
            goal,
        } => cli::transactions::add(
            &description,
            &amount,
            txn_type,
            &category,
            date,
            habitual,
            currency,
            goal,
        ),
        Commands::Edit {
            id,
            description,
            amount,
            date,
            category,
            habitual,
            currency,
            goal,
        } => cli::transactions::edit(
            &id,
            description,
            amount,
            date,
            category,
            habitual,
            currency,
            goal,
        ),
        Commands::Delete { id, yes } => cli::transactions::delete(&id, yes),
        Commands::List { month } => cli::transactions::list(month),
        Commands::Summary { month } => cli::report::summary(month),
        Commands::Report { month, analyze } => cli::report::report(month, analyze),
        Commands::Goals { command } => match command {
            GoalsCommands::Add {
                name,
                target,
                description,
            } => cli::goals::add(&name, &target, description),
            GoalsCommands::Edit {
                id,
                name,
                target,
                description,
            } => cli::goals::edit(&id, name, target, description),
            GoalsCommands::List => cli::goals::list(),
            GoalsCommands::Delete { id, yes } => cli::goals::delete(&id, yes),
        },
        Commands::Categories => cli::categories::list(),
        Commands::Export { month, output } => cli::export::run(month, output),
        Commands::Demo => cli::demo::run(),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
