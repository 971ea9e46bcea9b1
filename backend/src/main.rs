//! Server entry-point: reads settings, prepares the database and serves HTTP.

use std::io;

use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use yelp_camp::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use yelp_camp::server::{RepositoryPorts, ServerConfig, create_server};
use yelp_camp::settings::Settings;

/// Serve until terminated.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(%error, "tracing init failed");
    }

    let settings = Settings::from_env(&DefaultEnv::new())
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;
    info!(environment = ?settings.environment, "starting yelp-camp");

    if settings.run_migrations {
        run_pending_migrations(&settings.database_url)
            .await
            .map_err(io::Error::other)?;
    }

    let pool = DbPool::new(PoolConfig::new(&settings.database_url))
        .await
        .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;

    let config = ServerConfig::from_settings(&settings, RepositoryPorts::diesel(&pool));
    create_server(config)?.await
}
