//! Command-line configuration

use std::path::PathBuf;

use bookbox_core::{LexicalOracle, NgramOracle, SimilarityOracle};
use clap::{Parser, ValueEnum};

use crate::error::{Error, Result};

#[derive(Parser, Debug)]
#[command(name = "bookbox")]
#[command(about = "Bookstore inventory manager with fuzzy title and author search")]
#[command(version)]
pub struct Args {
    /// SQLite database file
    #[arg(long, default_value = "ebookstore.db")]
    pub db: PathBuf,

    /// Use a transient in-memory database
    #[arg(long, conflicts_with = "db")]
    pub in_memory: bool,

    /// Similarity scorer for title and author search
    #[arg(long, value_enum, default_value_t = OracleKind::Ngram)]
    pub oracle: OracleKind,

    /// Do not load the default books into an empty catalog
    #[arg(long)]
    pub no_seed: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Print the catalog as JSON and exit
    #[arg(long)]
    pub dump: bool,
}

/// Available similarity oracles
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OracleKind {
    /// Character-trigram cosine similarity
    Ngram,
    /// Exact/prefix/substring/edit-distance cascade
    Lexical,
}

impl OracleKind {
    pub fn build(self) -> Box<dyn SimilarityOracle> {
        match self {
            OracleKind::Ngram => Box::new(NgramOracle::new()),
            OracleKind::Lexical => Box::new(LexicalOracle::new()),
        }
    }
}

/// Where the catalog lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Database {
    File(PathBuf),
    InMemory,
}

/// Validated application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: Database,
    pub oracle: OracleKind,
    pub seed: bool,
    pub log_level: String,
    pub dump: bool,
}

impl TryFrom<Args> for AppConfig {
    type Error = Error;

    fn try_from(args: Args) -> Result<Self> {
        let database = if args.in_memory {
            Database::InMemory
        } else if args.db.as_os_str().is_empty() {
            return Err(Error::Config("--db must not be empty".to_string()));
        } else {
            Database::File(args.db)
        };

        Ok(Self {
            database,
            oracle: args.oracle,
            seed: !args.no_seed,
            log_level: args.log_level,
            dump: args.dump,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> AppConfig {
        let args = Args::try_parse_from(std::iter::once("bookbox").chain(argv.iter().copied()))
            .unwrap();
        AppConfig::try_from(args).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]);
        assert_eq!(config.database, Database::File(PathBuf::from("ebookstore.db")));
        assert_eq!(config.oracle, OracleKind::Ngram);
        assert!(config.seed);
        assert!(!config.dump);
    }

    #[test]
    fn test_overrides() {
        let config = parse(&["--in-memory", "--oracle", "lexical", "--no-seed", "--dump"]);
        assert_eq!(config.database, Database::InMemory);
        assert_eq!(config.oracle, OracleKind::Lexical);
        assert!(!config.seed);
        assert!(config.dump);
    }

    #[test]
    fn test_empty_db_path_rejected() {
        let args = Args::try_parse_from(["bookbox", "--db", ""]).unwrap();
        assert!(matches!(AppConfig::try_from(args), Err(Error::Config(_))));
    }

    #[test]
    fn test_unknown_oracle_rejected() {
        assert!(Args::try_parse_from(["bookbox", "--oracle", "spacy"]).is_err());
    }
}
