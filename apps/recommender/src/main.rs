use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use recommender::client::HttpRecommendationClient;
use recommender::config::{parse_endpoint, Config};
use recommender::controller::RecommendationController;
use recommender::display;
use recommender::models::form::{FormInput, JobLevel, UseCase};
use recommender::view::{TextView, LOADING_TEXT};

/// Get assessment recommendations for a job role.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// e.g. "Software Developer"
    #[arg(long)]
    job_title: String,

    /// Entry, Mid or Senior
    #[arg(long, default_value = "Entry")]
    level: JobLevel,

    /// Hiring or Development
    #[arg(long, default_value = "Hiring")]
    use_case: UseCase,

    /// Comma-separated, e.g. "python,sql,data analysis"
    #[arg(long)]
    skills: String,

    /// Overrides RECOMMENDER_API_URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Print the cards as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;

    // Logs go to stderr; stdout carries only the rendered list.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = parse_endpoint(endpoint)?;
    }

    let input = FormInput {
        job_title: cli.job_title,
        level: cli.level,
        use_case: cli.use_case,
        key_skills: cli.skills,
    };
    input.validate()?;

    let client = HttpRecommendationClient::new(config.endpoint.clone(), config.timeout)
        .context("Failed to build HTTP client")?;
    info!(
        "Starting recommender v{} against {}",
        env!("CARGO_PKG_VERSION"),
        client.endpoint()
    );
    let controller = RecommendationController::new(Arc::new(client), config.ordering);

    let mut updates = controller.subscribe();
    let progress = tokio::spawn(async move {
        if updates.wait_for(|state| state.in_flight).await.is_ok() {
            eprintln!("{LOADING_TEXT}");
        }
    });

    controller.submit(input).await;
    progress.abort();

    let state = controller.snapshot();
    if cli.json {
        let cards = display::cards(&state.recommendations);
        println!("{}", serde_json::to_string_pretty(&cards)?);
    } else {
        print!("{}", TextView(&state));
    }

    Ok(())
}
