//! Product Catalog Dashboard
//!
//! CLI for managing a product catalog over its REST backend: list with
//! local filtering, show, add, edit and delete products.

use clap::{Parser, Subcommand};
use domain_catalog::{
    AvailabilityFilter, CatalogService, DraftProduct, ProductFilter, RestCatalogClient,
};
use eyre::{Result, WrapErr};
use uuid::Uuid;

mod commands;
mod config;
mod telemetry;

use config::Config;

#[derive(Parser)]
#[command(name = "dashboard")]
#[command(about = "Manage a product catalog over its REST backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog, narrowed by locally applied filters
    List {
        /// Inclusive lower price bound
        #[arg(long)]
        min_price: Option<f64>,

        /// Inclusive upper price bound
        #[arg(long)]
        max_price: Option<f64>,

        /// Case-insensitive category substring
        #[arg(long)]
        category: Option<String>,

        /// any, available or unavailable
        #[arg(long, default_value = "any")]
        availability: String,
    },

    /// Show a single product
    Show { id: Uuid },

    /// Add a product
    Add {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        price: String,

        #[arg(long, default_value = "")]
        category: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Mark the product as not available for sale
        #[arg(long)]
        unavailable: bool,
    },

    /// Edit an existing product (only the provided fields change)
    Edit {
        id: Uuid,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        price: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        available: Option<bool>,
    },

    /// Delete a product
    Delete {
        id: Uuid,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::install_color_eyre();

    let config = Config::from_env()?;
    telemetry::init_tracing(&config.environment);

    let cli = Cli::parse();

    let http = reqwest::Client::builder()
        .timeout(config.api.timeout)
        .build()?;
    let client = RestCatalogClient::with_client(http, &config.api.base_url);
    let service = CatalogService::new(client);

    match cli.command {
        Commands::List {
            min_price,
            max_price,
            category,
            availability,
        } => {
            let availability: AvailabilityFilter = availability
                .parse()
                .wrap_err("availability must be any, available or unavailable")?;
            let filter = ProductFilter {
                min_price,
                max_price,
                category,
                availability,
            };
            commands::list(&service, filter).await
        }

        Commands::Show { id } => commands::show(&service, id).await,

        Commands::Add {
            name,
            price,
            category,
            description,
            unavailable,
        } => {
            let draft = DraftProduct {
                name,
                price,
                category,
                description,
                available: !unavailable,
            };
            commands::add(&service, draft).await
        }

        Commands::Edit {
            id,
            name,
            price,
            category,
            description,
            available,
        } => commands::edit(&service, id, name, price, category, description, available).await,

        Commands::Delete { id, yes } => commands::delete(&service, id, yes).await,
    }
}
