//! Protein function prediction server — entry point.

use std::sync::Arc;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use protein_function::{extract_features, Predictor};
use protein_function_server::config::{ConfigArgs, ServerConfig};
use protein_function_server::ontology::OntologyClient;
use protein_function_server::service::PredictionService;
use protein_function_server::transport::HttpTransport;

#[derive(Parser)]
#[command(
    name = "protein-function-server",
    about = "Prediction service for protein function — amino-acid sequence in, GO term out",
    version
)]
struct Cli {
    /// Path to the ONNX classifier model.
    #[arg(long, global = true)]
    model: Option<String>,

    /// Path to the JSON label table.
    #[arg(long, global = true)]
    labels: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP prediction server (default).
    Serve {
        /// Listen address (host:port).
        #[arg(long)]
        addr: Option<String>,

        /// Base URL of the GO ontology service.
        #[arg(long)]
        ontology_url: Option<String>,

        /// Timeout for GO term name lookups, in milliseconds.
        #[arg(long)]
        lookup_timeout_ms: Option<u64>,
    },

    /// Print the feature vector for a sequence as JSON.
    Features {
        /// Amino-acid sequence.
        sequence: String,
    },

    /// Load the model and label table and check they belong together.
    Validate,

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   protein-function-server completions bash > ~/.local/share/bash-completion/completions/protein-function-server
    ///   protein-function-server completions zsh > ~/.zfunc/_protein-function-server
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Serve {
        addr: None,
        ontology_url: None,
        lookup_timeout_ms: None,
    }) {
        Commands::Serve {
            addr,
            ontology_url,
            lookup_timeout_ms,
        } => {
            let config = ServerConfig::resolve(ConfigArgs {
                addr,
                model: cli.model,
                labels: cli.labels,
                ontology_url,
                lookup_timeout_ms,
            })?;

            tracing::info!("Protein function server");
            tracing::info!("Model: {}", config.model_path.display());
            tracing::info!("Labels: {}", config.labels_path.display());
            tracing::info!("Ontology: {}", config.ontology_url);

            let predictor = Predictor::open(&config.model_path, &config.labels_path)?;
            predictor.verify()?;

            let ontology = OntologyClient::new(&config.ontology_url, config.lookup_timeout)?;
            let service = PredictionService::new(Arc::new(predictor), ontology);
            let transport = HttpTransport::new(service);
            transport.run(&config.addr).await?;
        }

        Commands::Features { sequence } => {
            let features = extract_features(&sequence)?;
            let out = serde_json::json!({
                "sequence_length": sequence.chars().count(),
                "features": features,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }

        Commands::Validate => {
            let config = ServerConfig::resolve(ConfigArgs {
                model: cli.model,
                labels: cli.labels,
                ..ConfigArgs::default()
            })?;
            match Predictor::open(&config.model_path, &config.labels_path)
                .and_then(|p| p.verify().map(|_| p))
            {
                Ok(predictor) => {
                    println!("Valid artifacts");
                    println!("  Model: {}", config.model_path.display());
                    println!("  Labels: {}", config.labels_path.display());
                    println!("  Classes: {}", predictor.labels().len());
                }
                Err(e) => {
                    eprintln!("Invalid artifacts: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(
                shell,
                &mut cmd,
                "protein-function-server",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}
