use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use samsung_phone_advisor::{
    catalog::Catalog, config::DatabaseConfig, init_tracing, seed_data::sample_catalog,
};

#[derive(Parser)]
#[command(name = "advisor-setup", about = "Prepare the Samsung phone catalog")]
struct Cli {
    /// SQLite database file (defaults to DB_PATH or ~/.samsung-advisor/data/catalog.db)
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Test the connection, create the table and load the sample phones
    Setup,
    /// Drop the table and reload the sample phones
    Reset,
    /// Print every phone in the catalog
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let db_path = cli
        .db_path
        .unwrap_or_else(|| DatabaseConfig::from_env().path);

    println!("==========================================");
    println!("   SAMSUNG PHONE ADVISOR - CATALOG SETUP  ");
    println!("==========================================");

    println!("[1/3] Testing database connection...");
    let catalog = Catalog::open(&db_path)
        .await
        .with_context(|| format!("cannot open catalog database at {}", db_path.display()))?;
    catalog
        .ping()
        .await
        .context("catalog database connection test failed")?;
    println!("Connected to {}", db_path.display());

    match cli.command.unwrap_or(Command::Setup) {
        Command::Setup => seed(&catalog).await?,
        Command::Reset => {
            println!("\nDropping existing catalog...");
            catalog.reset().await?;
            seed(&catalog).await?;
        }
        Command::List => {
            println!("\n[2/3] Reading catalog...");
            let phones = catalog.list_all().await;
            println!("\n[3/3] {} phones:", phones.len());
            for phone in phones {
                println!(
                    "  {:<32} {:>7}  {}",
                    phone.model_name,
                    phone.price.as_deref().unwrap_or("-"),
                    phone.display.as_deref().unwrap_or("-"),
                );
            }
        }
    }

    Ok(())
}

async fn seed(catalog: &Catalog) -> anyhow::Result<()> {
    let phones = sample_catalog();
    println!("\n[2/3] Loading {} sample phones...", phones.len());
    let report = catalog.seed(&phones).await?;
    println!(
        "Inserted {}, skipped {} already present",
        report.inserted, report.skipped
    );

    println!("\n[3/3] Catalog now holds {} phones", catalog.count().await?);
    println!("\nSetup complete. Start the server and try:");
    println!("  curl -X POST http://localhost:8000/ask -H 'Content-Type: application/json' \\");
    println!("       -d '{{\"question\": \"Tell me about the Galaxy S24 Ultra\"}}'");
    Ok(())
}
