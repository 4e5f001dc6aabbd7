//! Arbor CLI - run property-value queries over a JSON dataset

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use arbor_api::PropertyValuesService;
use arbor_store::{Dataset, MemoryStore};
use commands::{completions, linked, query, values};
use config::Config;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "arbor")]
#[command(author, version, about = "Property-value and linked-graph queries over a knowledge graph")]
pub struct Cli {
    /// Config file (default: ~/.arbor/config.toml)
    #[arg(short, long, global = true, env = "ARBOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Dataset file, overrides `data_file` from the config
    #[arg(short, long, global = true, env = "ARBOR_DATA")]
    pub data: Option<PathBuf>,

    /// Output format: json, compact
    #[arg(short, long, default_value = "json", global = true)]
    pub format: String,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from(self.format.as_str())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch property values of nodes
    Values(values::ValuesArgs),
    /// Traverse a linked property (containment closure, group ancestors)
    Linked(linked::LinkedArgs),
    /// Evaluate a property expression such as `<-containedInPlace+{typeOf:City}`
    Query(query::QueryArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context with the loaded service
pub struct AppContext {
    pub service: PropertyValuesService<MemoryStore>,
    pub config: Config,
}

impl AppContext {
    pub fn new(cli: &Cli, config: Config) -> anyhow::Result<Self> {
        let data_file = cli.data.clone().unwrap_or_else(|| config.data_file.clone());
        if !data_file.exists() {
            anyhow::bail!(
                "Dataset not found at {}. Pass --data or set data_file in the config.",
                data_file.display()
            );
        }
        tracing::debug!("Using dataset at: {:?}", data_file);

        let dataset = Dataset::load(&data_file)?;
        let store = MemoryStore::from_dataset(&dataset, config.namespaces.clone())?;
        let hierarchy = Arc::new(dataset.hierarchy);
        let service = PropertyValuesService::new(Arc::new(store), hierarchy)
            .with_options(config.service_options());

        Ok(Self { service, config })
    }

    /// Page size for a request, falling back to the configured default
    pub fn limit(&self, requested: usize) -> usize {
        if requested == 0 {
            self.config.default_limit
        } else {
            requested
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting arbor CLI");

    let config = Config::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Config(args) => commands::config::run(args, &cli, &config)?,
        Commands::Completions(args) => completions::run(args)?,
        Commands::Values(args) => {
            let ctx = AppContext::new(&cli, config)?;
            values::run(args, &cli, &ctx).await?
        }
        Commands::Linked(args) => {
            let ctx = AppContext::new(&cli, config)?;
            linked::run(args, &cli, &ctx).await?
        }
        Commands::Query(args) => {
            let ctx = AppContext::new(&cli, config)?;
            query::run(args, &cli, &ctx).await?
        }
    }

    Ok(())
}
