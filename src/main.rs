//! Entry point: load configuration, run the import, report the outcome.

use clap::Parser;
use ffl_history::espn::{Credentials, EspnApi};
use ffl_history::import::run_import;
use ffl_history::{Config, Result, Season};

#[derive(Debug, Parser)]
#[clap(
    name = "ffl-history",
    about = "Import historical ESPN Fantasy Football league data",
    after_help = "Required environment variables (a .env file is honored):\n  \
                  DATABASE_URL     path to the SQLite database file\n  \
                  ESPN_S2          espn_s2 browser cookie\n  \
                  ESPN_SWID        SWID browser cookie\n  \
                  ESPN_LEAGUE_ID   numeric league id"
)]
struct ImportArgs {
    /// Print per-team detail while importing.
    #[clap(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let args = ImportArgs::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: ImportArgs) -> Result<()> {
    let config = Config::from_env()?;

    println!("ESPN Fantasy Football Import");
    println!("League ID: {}", config.league_id);
    println!();

    let credentials = Credentials {
        espn_s2: config.espn_s2.clone(),
        swid: config.swid.clone(),
    };
    let api = EspnApi::new(config.league_id, &credentials)?;

    let summary = run_import(&api, &config.database_url, Season::current(), args.verbose).await?;

    println!();
    println!("{}", "=".repeat(50));
    println!("Import complete!");
    println!("  Seasons: {}", summary.seasons);
    println!("  Team records: {}", summary.teams);
    println!("  Matchups: {}", summary.matchups);
    println!("{}", "=".repeat(50));

    Ok(())
}
