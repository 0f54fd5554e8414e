//! Bookbox - Main Entry Point

use std::io;

use bookbox_cli::tracing::prefix;
use bookbox_cli::{AppConfig, Args, Database, Prompter, Session};
use bookbox_core::{seed::default_books, Catalog};
use bookbox_sqlite::SqliteStore;
use clap::Parser;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::try_from(Args::parse())?;

    bookbox_cli::tracing::init_with_filter(&config.log_level);
    info!("{} Starting bookbox {}", prefix::OPEN, env!("CARGO_PKG_VERSION"));

    let mut store = match &config.database {
        Database::File(path) => SqliteStore::open(path)?,
        Database::InMemory => SqliteStore::in_memory()?,
    };

    if config.seed {
        let seeded = store.seed_if_empty(&default_books())?;
        if seeded > 0 {
            info!("{} loaded {} default books", prefix::DB, seeded);
        }
    }

    let mut catalog = Catalog::new(store);

    if config.dump {
        println!("{}", serde_json::to_string_pretty(&catalog.all()?)?);
        return Ok(());
    }

    let oracle = config.oracle.build();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        &mut catalog,
        oracle.as_ref(),
        Prompter::new(stdin.lock(), stdout.lock()),
    );
    session.run()?;

    info!("{} Session closed", prefix::CLOSE);
    Ok(())
}
