//! Replace every campground with a freshly generated batch.
//!
//! # Examples
//! ```sh
//! cargo run --manifest-path backend/Cargo.toml --bin seed-campgrounds -- --count 50 --seed 7
//! ```
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io;
use std::sync::Arc;

use clap::Parser;
use mockable::{DefaultEnv, Env};
use seed_data::{DEFAULT_CAMPGROUND_COUNT, SeedCatalogue, random_seed};
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use yelp_camp::domain::CampgroundSeeder;
use yelp_camp::outbound::persistence::{DbPool, DieselCampgroundSeedRepository, PoolConfig};
use yelp_camp::settings::database_url_from_env;

/// `seed-campgrounds` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seed-campgrounds",
    about = "Delete every campground and insert a generated batch",
    version
)]
struct CliArgs {
    /// Number of campgrounds to generate.
    #[arg(long, default_value_t = DEFAULT_CAMPGROUND_COUNT)]
    count: usize,
    /// RNG seed; a random one is drawn when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Database connection URL. Falls back to `DB_URL`, then the default.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
}

fn main() -> io::Result<()> {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(%error, "tracing init failed");
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let database_url = resolve_database_url(args.database_url, &DefaultEnv::new())?;
    let pool = DbPool::new(PoolConfig::new(&database_url).with_max_size(1))
        .await
        .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;

    let seeder = CampgroundSeeder::new(Arc::new(DieselCampgroundSeedRepository::new(pool)));
    let seed = args.seed.unwrap_or_else(random_seed);
    let outcome = seeder
        .seed(&SeedCatalogue::standard(), args.count, seed)
        .await
        .map_err(|error| io::Error::other(format!("seeding failed: {error}")))?;

    info!(
        seed = outcome.seed,
        inserted = outcome.inserted,
        "campgrounds replaced"
    );
    Ok(())
}

fn resolve_database_url(explicit: Option<String>, env: &impl Env) -> io::Result<String> {
    match explicit {
        Some(value) if value.trim().is_empty() => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "--database-url must not be empty when provided",
        )),
        Some(value) => Ok(value),
        None => Ok(database_url_from_env(env)),
    }
}
