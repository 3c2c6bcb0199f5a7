//! Storefront CLI - renders product pages and promotes content paths
//!
//! `render` prints the head fragment, JSON-LD or full HTML for one product.
//! `publish` and `unpublish` run the preview/live admin sequence for content
//! paths and print the per-path results as JSON.
//!
//! Logging goes to stderr, controlled by `RUST_LOG` and `LOG_FORMAT`.

#![allow(
    clippy::multiple_crate_versions,
    reason = "transitive dependencies from reqwest and tokio"
)]

mod observability;

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand, ValueEnum};
use storefront_bridge::{
    admin,
    catalog::{Product, Variant},
    config::SiteConfig,
    template::Context,
    transport::HttpTransport,
};
use tracing::info;

use crate::observability::{LogFormat, init_observability};

#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(version, about = "Storefront product rendering and content publishing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render one product for the configured site
    Render {
        /// Site configuration (TOML)
        #[arg(short, long, env = "STOREFRONT_CONFIG")]
        config: PathBuf,

        /// Product JSON file
        #[arg(short, long)]
        product: PathBuf,

        /// Variants JSON file (array)
        #[arg(long)]
        variants: Option<PathBuf>,

        /// Output to produce
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
    },

    /// Preview, then publish content paths
    Publish {
        /// Site configuration (TOML)
        #[arg(short, long, env = "STOREFRONT_CONFIG")]
        config: PathBuf,

        /// Paths processed at the same time
        #[arg(long, default_value_t = 4)]
        concurrency: usize,

        /// Content paths
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Remove content paths from live and preview
    Unpublish {
        /// Site configuration (TOML)
        #[arg(short, long, env = "STOREFRONT_CONFIG")]
        config: PathBuf,

        /// Paths processed at the same time
        #[arg(long, default_value_t = 4)]
        concurrency: usize,

        /// Content paths
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// `<head>` meta tag fragment
    Head,
    /// schema.org JSON-LD
    JsonLd,
    /// Full HTML document
    Html,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_observability(LogFormat::from_env());

    let cli = Cli::parse();
    match cli.command {
        Commands::Render { config, product, variants, format } => {
            let output = render(&config, &product, variants.as_deref(), format)?;
            println!("{output}");
        }
        Commands::Publish { config, concurrency, paths } => {
            let config = load_config(&config)?;
            let transport = HttpTransport::with_config(&config.http)?;
            let results = admin::publish(&transport, &config.admin, &paths, concurrency).await?;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Commands::Unpublish { config, concurrency, paths } => {
            let config = load_config(&config)?;
            let transport = HttpTransport::with_config(&config.http)?;
            let results = admin::unpublish(&transport, &config.admin, &paths, concurrency).await?;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<SiteConfig> {
    let config = SiteConfig::from_file(path)?;
    info!(site = %config.site_key, path = %path.display(), "configuration loaded");
    Ok(config)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("invalid JSON in {}", path.display()))
}

fn render(
    config: &Path,
    product: &Path,
    variants: Option<&Path>,
    format: OutputFormat,
) -> Result<String> {
    let config = load_config(config)?;
    let product: Product = read_json(product)?;
    let variants: Vec<Variant> = variants.map(read_json).transpose()?.unwrap_or_default();

    let mut context = Context::new(Arc::new(config));
    let template = context.json_template(&product, &variants);
    info!(site = template.site_key(), sku = %product.sku, ?format, "rendering product");

    let output = match format {
        OutputFormat::Head => template.render_head()?,
        OutputFormat::JsonLd => serde_json::to_string_pretty(&template.render_json_ld()?)?,
        OutputFormat::Html => template.render_html()?,
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "storefront", "render", "--config", "site.toml", "--product", "p.json", "--format", "json-ld",
        ])
        .expect("valid arguments");

        match cli.command {
            Commands::Render { format, variants, .. } => {
                assert_eq!(format, OutputFormat::JsonLd);
                assert!(variants.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_publish_paths() {
        let cli = Cli::try_parse_from([
            "storefront", "publish", "--config", "site.toml", "--concurrency", "8", "/a", "/b",
        ])
        .expect("valid arguments");

        match cli.command {
            Commands::Publish { concurrency, paths, .. } => {
                assert_eq!(concurrency, 8);
                assert_eq!(paths, ["/a", "/b"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unpublish_requires_paths() {
        let result = Cli::try_parse_from(["storefront", "unpublish", "--config", "site.toml"]);
        assert!(result.is_err());
    }
}
