// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use nodue_persistence::Persistence;
use nodue_seed::{SeedConfig, SeedSummary, seed_database};
use tracing::info;

/// No-Due Seed - wipes a database and fills it with a demo campus
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file to seed
    #[arg(short, long, env = "NODUE_DATABASE")]
    database: String,

    /// Students enrolled in every class
    #[arg(long, default_value_t = 5)]
    students_per_class: u32,

    /// Password shared by every seeded account
    #[arg(long, default_value = "password123")]
    password: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!(database = %args.database, "Starting seeding");

    let mut persistence: Persistence = Persistence::new_with_file(&args.database)?;
    let config: SeedConfig = SeedConfig {
        students_per_class: args.students_per_class,
        password: args.password,
        ..SeedConfig::default()
    };

    let summary: SeedSummary =
        seed_database(&mut persistence, &config, rand::random::<bool>)?;

    info!(
        students = summary.students,
        records = summary.records,
        "Seeded database at {}",
        args.database
    );

    Ok(())
}
