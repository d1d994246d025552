use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wikimeta::config::Config;
use wikimeta::dbpedia::{self, DbpediaClient};
use wikimeta::models::{GetDataOptions, MetadataResult};
use wikimeta::utils::truncate_text;

#[derive(Parser)]
#[command(
    name = "wikimeta",
    version,
    about = "Wikipedia topic metadata from DBPedia, normalized into a flat summary",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// TOML configuration file (environment variables are used otherwise)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the DBPedia resource URI for a Wikipedia URL or page name
    Resolve {
        /// Wikipedia URL, DBPedia URL or page name
        input: String,
    },

    /// Fetch a resource from DBPedia and print its summary
    Summary {
        /// Wikipedia URL, DBPedia URL or page name
        input: String,

        /// Include the raw RDF/JSON graph in JSON output
        #[arg(long, default_value = "false")]
        raw: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        output: OutputFormat,
    },

    /// Fetch a resource from DBPedia and list its predicates
    Properties {
        /// Wikipedia URL, DBPedia URL or page name
        input: String,
    },

    /// Summarize a saved RDF/JSON document without network access
    Extract {
        /// RDF/JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Subject as Wikipedia URL, DBPedia URL or page name
        #[arg(short, long)]
        subject: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        output: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    config.validate()?;

    // Initialize tracing/logging
    setup_tracing(&config.logging.level, &config.logging.format, cli.verbose)?;

    match cli.command {
        Commands::Resolve { input } => {
            tracing::debug!(input = %input, "Starting resolve command");
            println!("{}", dbpedia::resolve(&input));
        }

        Commands::Summary { input, raw, output } => {
            tracing::info!(input = %input, raw = %raw, "Starting summary command");
            let client = DbpediaClient::from_config(&config.dbpedia)?;
            let result =
                dbpedia::get_data(&client, &input, GetDataOptions { include_raw: raw }).await?;
            print_result(&result, output)?;
        }

        Commands::Properties { input } => {
            tracing::info!(input = %input, "Starting properties command");
            let client = DbpediaClient::from_config(&config.dbpedia)?;
            let (dbpedia_url, graph) = dbpedia::fetch_graph(&client, &input).await?;
            let names = dbpedia::property_names(&graph, &dbpedia_url);

            println!("{dbpedia_url}");
            println!("  Properties: {}", names.len());
            for name in names {
                println!("  {name}");
            }
        }

        Commands::Extract {
            file,
            subject,
            output,
        } => {
            tracing::info!(file = %file.display(), subject = %subject, "Starting extract command");
            let raw = dbpedia::read_document(&file)
                .await
                .with_context(|| format!("Failed to load RDF/JSON file: {}", file.display()))?;

            let result = dbpedia::summarize(
                dbpedia::resolve(&subject),
                raw,
                GetDataOptions { include_raw: false },
            )?;
            print_result(&result, output)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path),
        None => Config::from_env(),
    }
}

fn setup_tracing(level: &str, format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("wikimeta=debug,info")
    } else {
        tracing_subscriber::EnvFilter::try_new(format!("wikimeta={level},warn"))
            .context("Invalid log level")?
    };

    // Logs go to stderr so stdout stays machine-readable
    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}

fn print_result(result: &MetadataResult, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputFormat::Text => {
            println!("{}", result.dbpedia_url);
            if let Some(error) = &result.error {
                println!("  Error: {error}");
            }
            if let Some(summary) = &result.summary {
                for (name, value) in summary.fields() {
                    println!("  {name}: {}", truncate_text(&value.to_string(), 200));
                }
            }
        }
    }

    Ok(())
}
