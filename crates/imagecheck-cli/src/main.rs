//! imagecheck CLI
//!
//! Three small tools over hosted inference endpoints: a gender classifier,
//! an AI-image detector, and an artificial-image verdict built on the
//! detector. Each invocation uploads one image, waits for one response, and
//! renders the predictions; errors degrade to a message and a non-zero exit
//! so the user can simply retry with another image.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};

use imagecheck_client::{encode_jpeg, token_from_env, ClientConfig, InferenceClient, ToolConfig};
use imagecheck_core::{top_prediction, ArtificialPolicy, Error, Result};

mod report;

#[derive(Parser, Debug)]
#[command(name = "imagecheck")]
#[command(author, version, about = "Classify images against hosted inference endpoints")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "imagecheck.yaml")]
    config: String,

    /// Override the endpoint URL for the chosen tool
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Override the request timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify the apparent gender in an image
    Gender {
        /// Image file (JPEG or PNG)
        image: PathBuf,
    },

    /// Ask the detector whether an image is AI-generated
    Detect {
        /// Image file (JPEG or PNG)
        image: PathBuf,
    },

    /// Apply the artificial-image policy and report a verdict
    Artificial {
        /// Image file (JPEG or PNG)
        image: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Pick up HUGGINGFACE_API_KEY from a local .env, if present
    let _ = dotenvy::dotenv();

    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", report::user_message(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = ToolConfig::load(&cli.config)?;
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }

    let token = token_from_env();
    let client = InferenceClient::new()?;

    match &cli.command {
        Commands::Gender { image } => {
            let mut endpoint = config.gender_endpoint(token);
            apply_endpoint_override(&mut endpoint, &cli);

            let predictions = classify_file(&client, image, &endpoint).await?;
            print!("{}", report::render_predictions(&predictions));

            let top = top_prediction(&predictions).ok_or(Error::EmptyResult)?;
            println!("{}", report::gender_verdict(top));
        }

        Commands::Detect { image } => {
            let mut endpoint = config.detector_endpoint(token);
            apply_endpoint_override(&mut endpoint, &cli);

            let predictions = classify_file(&client, image, &endpoint).await?;
            print!("{}", report::render_predictions(&predictions));

            let top = top_prediction(&predictions).ok_or(Error::EmptyResult)?;
            println!("{}", report::detector_verdict(top));
        }

        Commands::Artificial { image } => {
            let mut endpoint = config.detector_endpoint(token);
            apply_endpoint_override(&mut endpoint, &cli);

            let predictions = classify_file(&client, image, &endpoint).await?;
            let policy = ArtificialPolicy::from(&config.artificial);

            debug!(
                label = %policy.label,
                threshold = policy.threshold,
                "applying artificial-image policy"
            );
            println!("{}", report::artificial_verdict(policy.is_artificial(&predictions)));
        }
    }

    Ok(())
}

/// Read an image from disk, normalize it to JPEG, and classify it
async fn classify_file(
    client: &InferenceClient,
    image: &Path,
    endpoint: &ClientConfig,
) -> Result<Vec<imagecheck_core::Prediction>> {
    let raw = std::fs::read(image)?;
    let jpeg = encode_jpeg(&raw)?;

    info!(
        image = %image.display(),
        endpoint = %endpoint.endpoint_url,
        "classifying image"
    );

    client.classify(&jpeg, endpoint).await
}

fn apply_endpoint_override(endpoint: &mut ClientConfig, cli: &Cli) {
    if let Some(url) = &cli.endpoint {
        endpoint.endpoint_url = url.clone();
    }
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("warn,imagecheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("imagecheck=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
