use anyhow::Result;
use campusqa_common::{logger, AppConfig};
use campusqa_corpus::{synthesize, SourceDocuments};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "campusqa")]
#[command(about = "CampusQA - semantic Q&A over institutional records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the corpus and index, then start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,

        /// Directory containing the three source JSON documents
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Synthesize the Q&A corpus and write it to a JSON file
    BuildCorpus {
        /// Directory containing the three source JSON documents
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Output file
        #[arg(long, default_value = "qa_corpus.json")]
        output: PathBuf,
    },
}

fn apply_overrides(
    config: &mut AppConfig,
    host: Option<String>,
    port: Option<u16>,
    data_dir: Option<PathBuf>,
) {
    if let Some(host) = host {
        config.server_host = host;
    }
    if let Some(port) = port {
        config.server_port = port;
    }
    if let Some(data_dir) = data_dir {
        config.data_dir = data_dir;
    }
}

fn build_corpus(config: &AppConfig, output: &PathBuf) -> Result<()> {
    let documents = SourceDocuments::load(config)?;
    let records = documents.records();
    let corpus = synthesize(&records);

    if corpus.is_empty() {
        anyhow::bail!("Synthesized corpus is empty; check the source documents");
    }

    let data = serde_json::to_string_pretty(&corpus)?;
    std::fs::write(output, data)?;

    tracing::info!("Corpus written to {} ({} entries)", output.display(), corpus.len());
    println!("Corpus saved as {}", output.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve {
            host,
            port,
            data_dir,
        }) => {
            let mut config = AppConfig::from_env()?;
            apply_overrides(&mut config, host, port, data_dir);
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("CampusQA starting...");
            tracing::info!("  Bind: {}", config.server_bind_address());
            tracing::info!("  Data: {}", config.data_dir.display());
            tracing::info!("  Backend: {:?}", config.embedder_backend);

            println!("Server listening on http://{}", config.server_bind_address());
            campusqa_server::start_server(config).await?;
        }
        Some(Commands::BuildCorpus { data_dir, output }) => {
            let mut config = AppConfig::from_env()?;
            apply_overrides(&mut config, None, None, data_dir);
            logger::setup_console_logging(&config.log_level)?;

            build_corpus(&config, &output)?;
        }
        None => {
            // Default: serve with env configuration
            let config = AppConfig::from_env()?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("CampusQA starting with default configuration...");
            println!("Server listening on http://{}", config.server_bind_address());
            campusqa_server::start_server(config).await?;
        }
    }

    Ok(())
}
