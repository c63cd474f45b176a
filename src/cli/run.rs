use crate::{
    cli::display_upcoming,
    prelude::{
        AppError, ContactStore, JsonStorage,
        command::{Cli, Commands},
    },
};
use clap::Parser;
use dotenv::dotenv;
use log::debug;

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    debug!("using contact file {}", cli.data_file);
    let mut store = ContactStore::open(JsonStorage::new(&cli.data_file))?;

    if let Some(warning) = store.load_warning() {
        eprintln!("Warning: {}", warning);
    }

    match cli.command {
        Commands::Add {
            name,
            birth_date,
            email,
        } => {
            store.add_contact(&name, birth_date, &email)?;

            println!("Birthday of {} added successfully", name);
            Ok(())
        }

        Commands::List => {
            let report = store.load_and_list()?;

            if report.is_empty() {
                println!("No birthdays recorded yet");
                return Ok(());
            }

            for upcoming in &report.upcoming {
                println!("{}", display_upcoming(upcoming));
            }

            for err in &report.invalid {
                eprintln!("{}", err);
            }
            Ok(())
        }

        Commands::Delete { name } => {
            let removed = store.remove_contact(&name)?;

            if removed == 0 {
                eprintln!("{}", AppError::NotFound(format!("Contact {}", name)));
                return Ok(());
            }

            println!("Contact {} deleted successfully", name);
            Ok(())
        }

        Commands::Names => {
            let names = store.list_names();

            if names.is_empty() {
                println!("No contacts to delete");
                return Ok(());
            }

            for name in names {
                println!("{}", name);
            }
            Ok(())
        }
    }
}
