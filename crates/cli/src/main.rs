//! Descsync CLI - generate Shopify product descriptions from metafields.
//!
//! # Usage
//!
//! ```bash
//! # Show which store the token points at
//! descsync shop
//!
//! # Preview the generated description for one product
//! descsync products preview collagen
//!
//! # Push generated descriptions for every catalog product
//! descsync products update --all-catalog
//!
//! # Append a product's current descriptions to a file
//! descsync products export 7601000743171 --out descriptions.txt
//! ```
//!
//! # Commands
//!
//! - `shop` - Shop name and primary domain
//! - `products` - List, show, preview, update and export products
//! - `metaobject` - Look up a metaobject's display name
//! - `apps` - List installed apps and sales channels
//! - `catalog` - List the known product aliases
//!
//! # Logging
//!
//! `RUST_LOG` controls verbosity (default `descsync_admin=info,descsync_cli=info`).
//! Set `DESCSYNC_LOG_JSON=1` for JSON output.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use descsync_admin::{DEFAULT_EXPORT_FILE, MAX_PAGE_SIZE};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "descsync")]
#[command(author, version, about = "Generate Shopify product descriptions from metafields")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show shop name and primary domain
    Shop,
    /// Read and rewrite products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Show a metaobject's display name
    Metaobject {
        /// Numeric ID or global ID (gid://shopify/Metaobject/...)
        id: String,
    },
    /// Inspect installed apps and sales channels
    Apps {
        #[command(subcommand)]
        action: AppAction,
    },
    /// List the known product aliases
    Catalog,
}

#[derive(Subcommand)]
enum ProductAction {
    /// List the first page of products
    List {
        /// Number of products to return (1-250)
        #[arg(short, long, default_value_t = MAX_PAGE_SIZE)]
        first: i64,
    },
    /// Show a product's title, handle and descriptions
    Show {
        /// Catalog alias, numeric ID or global ID
        product: String,
    },
    /// Compose a product's description from metafields without pushing it
    Preview {
        /// Catalog alias, numeric ID or global ID
        product: String,
    },
    /// Compose descriptions from metafields and push them
    Update {
        /// Catalog aliases, numeric IDs or global IDs
        #[arg(required_unless_present = "all_catalog", conflicts_with = "all_catalog")]
        products: Vec<String>,

        /// Update every product in the catalog
        #[arg(long)]
        all_catalog: bool,
    },
    /// Append a product's plain-text and HTML descriptions to a file
    Export {
        /// Catalog alias, numeric ID or global ID
        product: String,

        /// File to append to
        #[arg(short, long, default_value = DEFAULT_EXPORT_FILE)]
        out: std::path::PathBuf,
    },
}

#[derive(Subcommand)]
enum AppAction {
    /// List installed apps
    List {
        /// Number of apps to return (1-250)
        #[arg(short, long, default_value_t = MAX_PAGE_SIZE)]
        first: i64,
    },
    /// Show one app
    Show {
        /// Numeric ID or global ID (gid://shopify/App/...)
        id: String,
    },
    /// List sales channels (publications)
    Channels {
        /// Number of channels to return (1-250)
        #[arg(short, long, default_value_t = MAX_PAGE_SIZE)]
        first: i64,
    },
}

fn init_tracing() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "descsync_admin=info,descsync_cli=info".into());

    // JSON for log collectors, text for terminals
    let json = std::env::var("DESCSYNC_LOG_JSON").is_ok();
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Shop => commands::shop::show().await?,
        Commands::Products { action } => match action {
            ProductAction::List { first } => commands::products::list(first).await?,
            ProductAction::Show { product } => commands::products::show(&product).await?,
            ProductAction::Preview { product } => commands::products::preview(&product).await?,
            ProductAction::Update {
                products,
                all_catalog,
            } => commands::products::update(&products, all_catalog).await?,
            ProductAction::Export { product, out } => {
                commands::products::export(&product, &out).await?;
            }
        },
        Commands::Metaobject { id } => commands::metaobject::show(&id).await?,
        Commands::Apps { action } => match action {
            AppAction::List { first } => commands::apps::list(first).await?,
            AppAction::Show { id } => commands::apps::show(&id).await?,
            AppAction::Channels { first } => commands::apps::channels(first).await?,
        },
        Commands::Catalog => commands::catalog::list(),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_update_requires_products_or_all_catalog() {
        assert!(Cli::try_parse_from(["descsync", "products", "update"]).is_err());
        assert!(Cli::try_parse_from(["descsync", "products", "update", "collagen"]).is_ok());
        assert!(Cli::try_parse_from(["descsync", "products", "update", "--all-catalog"]).is_ok());
        assert!(
            Cli::try_parse_from(["descsync", "products", "update", "collagen", "--all-catalog"])
                .is_err()
        );
    }

    #[test]
    fn test_export_default_file() {
        let cli = Cli::try_parse_from(["descsync", "products", "export", "collagen"]).ok();
        let Some(Cli {
            command:
                Commands::Products {
                    action: ProductAction::Export { out, .. },
                },
        }) = cli
        else {
            panic!("expected products export");
        };
        assert_eq!(out, std::path::PathBuf::from(DEFAULT_EXPORT_FILE));
    }
}
