//! Catalog pipeline CLI.
//!
//! Three independent subcommands, one per pipeline stage: collect product
//! data from the vendor catalog API, render stored products to text, and
//! generate the concatenated output artifact.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use catalog_pipeline::api::GraphQLClient;
use catalog_pipeline::db;
use catalog_pipeline::models::config::AppConfig;
use catalog_pipeline::repository::{DieselRepository, ProductReader};
use catalog_pipeline::services::collector;
use catalog_pipeline::services::formatter::ProductFormatter;
use catalog_pipeline::services::output::{self, OutputTarget};

/// Vendor catalog collection and formatting pipeline.
#[derive(Parser)]
#[command(name = "catalog-pipeline", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Collect products from the catalog API into the local database.
    CollectProducts {
        /// Maximum number of products to collect.
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Print each stored product as a formatted block.
    FormatProducts,
    /// Write all formatted product blocks to a single output artifact.
    GenerateOutput {
        /// Output file path; defaults to the configured path, `-` for stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = AppConfig::load()?;

    let pool = db::establish_connection_pool(&config.database_url)?;
    {
        let mut conn = pool.get()?;
        db::run_migrations(&mut conn)?;
    }
    let repo = DieselRepository::new(pool);

    match cli.command {
        Command::CollectProducts { limit } => {
            let client = GraphQLClient::new(&config);
            let report = collector::collect_all(&client, &repo, limit)?;
            for failure in &report.failures {
                log::warn!("Not collected {}: {}", failure.uid, failure.error);
            }
            log::info!(
                "Collection finished: {} stored, {} failed",
                report.collected,
                report.failures.len()
            );
        }
        Command::FormatProducts => {
            let products = repo.list_products()?;
            let formatter = ProductFormatter::new()?;
            let blocks = formatter.format_all(&products)?;
            println!("{}", blocks.join("\n---\n"));
        }
        Command::GenerateOutput { output } => {
            let products = repo.list_products()?;
            let formatter = ProductFormatter::new()?;
            let blocks = formatter.format_all(&products)?;
            let target = match output {
                Some(path) if path.to_str() == Some("-") => OutputTarget::Stdout,
                Some(path) => OutputTarget::File(path),
                None => OutputTarget::File(config.output_path.clone()),
            };
            output::generate(&blocks, &target)?;
            log::info!("Generated output for {} products", blocks.len());
        }
    }

    Ok(())
}
