use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use demoscrape::config::AppConfig;
use demoscrape::logging;
use demoscrape::pipeline::Scraper;

#[derive(Parser)]
#[command(name = "demoscrape")]
#[command(about = "Marketplace and practice-site scraper with demo-data fallback")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, help = "Enable verbose logging")]
    verbose: bool,

    #[arg(short, long, help = "Configuration file path")]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape marketplace search results
    Products {
        #[arg(help = "Search query (defaults to the configured query)")]
        query: Option<String>,

        #[arg(short, long, help = "Maximum number of products")]
        max_products: Option<usize>,

        #[arg(short, long, help = "Output file path")]
        output: Option<String>,
    },

    /// Scrape the practice sites (catalog, quotes, team statistics)
    Sites {
        #[arg(short, long, help = "Output file path")]
        output: Option<String>,
    },

    /// Scrape everything with the configured defaults
    All,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;
    info!("demoscrape v{}", env!("CARGO_PKG_VERSION"));

    let mut config = AppConfig::load(cli.config.as_deref()).await?;

    print_banner();

    match cli.command.unwrap_or(Commands::All) {
        Commands::Products { query, max_products, output } => {
            if let Some(query) = query {
                config.targets.search_query = query;
            }
            if let Some(max) = max_products {
                config.targets.max_products = max;
            }
            config.validate()?;

            let output = output.unwrap_or_else(|| config.output.products_file.clone());
            let scraper = Scraper::new(config)?;

            let count = scraper.run_marketplace(&output).await?;
            print_summary(&[(count, output.as_str())]);
        }

        Commands::Sites { output } => {
            let output = output.unwrap_or_else(|| config.output.site_data_file.clone());
            let scraper = Scraper::new(config)?;

            let count = scraper.run_sites(&output).await?;
            print_summary(&[(count, output.as_str())]);
        }

        Commands::All => {
            let products_file = config.output.products_file.clone();
            let site_data_file = config.output.site_data_file.clone();
            let scraper = Scraper::new(config)?;

            let product_count = scraper.run_marketplace(&products_file).await?;
            let item_count = scraper.run_sites(&site_data_file).await?;

            print_summary(&[
                (product_count, products_file.as_str()),
                (item_count, site_data_file.as_str()),
            ]);
        }
    }

    Ok(())
}

fn print_banner() {
    println!("{}", "=".repeat(50));
    println!("demoscrape - product and practice-site scraper");
    println!("{}", "=".repeat(50));
}

fn print_summary(results: &[(usize, &str)]) {
    println!("\n{}", "=".repeat(50));
    for (count, path) in results {
        println!("Scraped {} records -> {}", count, path);
    }
    println!("{}", "=".repeat(50));
}
