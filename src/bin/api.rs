//! Catalog API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;

use catalog::api::{self, ApiError, Config};
use catalog::db::{DbError, MemoryDatabase, MongoDatabase, mongo};
use clap::{Parser, ValueEnum};
use miette::Diagnostic;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(catalog::binary::database))]
    Database(#[from] DbError),

    #[error("MONGO_URI is not set")]
    #[diagnostic(
        code(catalog::binary::missing_uri),
        help("Set MONGO_URI or pass --mongo-uri, or run with --store memory")
    )]
    MissingUri,

    #[error("API server error: {0}")]
    #[diagnostic(code(catalog::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Store {
    /// MongoDB at MONGO_URI
    Mongo,
    /// Process memory; records are lost on exit
    Memory,
}

#[derive(Parser)]
#[command(name = "catalog-api")]
#[command(author, version, about = "Catalog API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = api::DEFAULT_PORT)]
    port: u16,

    /// Storage backend
    #[arg(long, value_enum, default_value = "mongo")]
    store: Store,

    /// MongoDB connection string
    #[arg(long, env = "MONGO_URI", hide_env_values = true)]
    mongo_uri: Option<String>,

    /// MongoDB database name
    #[arg(long, env = "MONGO_DATABASE", default_value = mongo::DEFAULT_DATABASE)]
    database: String,

    /// MongoDB collection name
    #[arg(long, env = "MONGO_COLLECTION", default_value = mongo::DEFAULT_COLLECTION)]
    collection: String,
}

impl Cli {
    /// Server config with precedence: CLI flag > env var > default
    fn server_config(&self) -> Config {
        Config::default().with_host(self.host).with_port(self.port)
    }
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();
    api::init_tracing();

    let config = cli.server_config();

    match cli.store {
        Store::Mongo => {
            let uri = cli.mongo_uri.as_deref().ok_or(BinaryError::MissingUri)?;
            let db = MongoDatabase::connect(uri, &cli.database, &cli.collection).await?;
            info!(
                database = %cli.database,
                collection = %cli.collection,
                "Using MongoDB store"
            );
            api::run(config, db).await?;
        }
        Store::Memory => {
            warn!("Using in-memory store; records will be lost on exit");
            api::run(config, MemoryDatabase::new()).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        unsafe {
            env::remove_var("HOST");
            env::remove_var("PORT");
        }
    }

    #[test]
    #[serial]
    fn defaults_listen_on_all_interfaces_port_9050() {
        clear_env();
        let cli = Cli::try_parse_from(["catalog-api"]).unwrap();
        assert_eq!(cli.server_config(), Config::default());
    }

    #[test]
    #[serial]
    fn env_vars_set_host_and_port() {
        unsafe {
            env::set_var("PORT", "8123");
            env::set_var("HOST", "127.0.0.1");
        }

        let config = Cli::try_parse_from(["catalog-api"]).unwrap().server_config();
        assert_eq!(config.addr(), "127.0.0.1:8123");

        clear_env();
    }

    #[test]
    #[serial]
    fn flag_overrides_env_var() {
        unsafe {
            env::set_var("PORT", "7000");
        }

        let cli = Cli::try_parse_from(["catalog-api", "--port", "7100"]).unwrap();
        assert_eq!(cli.server_config().port, 7100);

        clear_env();
    }

    #[test]
    #[serial]
    fn invalid_port_env_is_rejected() {
        unsafe {
            env::set_var("PORT", "80a");
        }

        let result = Cli::try_parse_from(["catalog-api"]);
        assert!(result.is_err(), "PORT=80a must not fall back to a default");

        clear_env();
    }

    #[test]
    #[serial]
    fn invalid_host_env_is_rejected() {
        unsafe {
            env::set_var("HOST", "not-an-ip");
        }

        assert!(Cli::try_parse_from(["catalog-api"]).is_err());

        clear_env();
    }
}
