mod config;
mod document;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use factcheck::{
    DocumentTextExtractor, FactCheckError, Pipeline, PipelineConfig, SearcherExt, TavilySearcher,
    WebSearcher,
};
use openai_client::OpenAIClient;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Check the factual claims in a document against live web evidence.
#[derive(Debug, Parser)]
#[command(name = "factcheck", version, about)]
struct Args {
    /// Document to check (PDF or plain text)
    file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Claims verified concurrently (overrides FACTCHECK_MAX_CONCURRENCY)
    #[arg(long)]
    concurrency: Option<usize>,

    /// Abort on the first claim that cannot be checked
    #[arg(long)]
    fail_fast: bool,

    /// Print the extracted document text before verification
    #[arg(long)]
    show_text: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,factcheck=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    let bytes = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let text = document::extractor_for(&args.file, &bytes)
        .extract_text(&bytes)
        .with_context(|| format!("Failed to extract text from {}", args.file.display()))?;

    tracing::info!(
        file = %args.file.display(),
        chars = text.chars().count(),
        "Document loaded"
    );

    if args.show_text {
        println!("{}\n", text);
    }

    let pipeline_config = pipeline_config(&config, &args);
    let llm = language_model(&config, &pipeline_config)?;
    tracing::info!(
        base_url = llm.base_url(),
        extraction_model = %pipeline_config.extraction_model,
        classification_model = %pipeline_config.classification_model,
        "Language model configured"
    );

    let tavily = TavilySearcher::new(config.tavily_api_key.expose())
        .context("Failed to build search client")?;
    let searcher: Arc<dyn WebSearcher> = match config.search_rps {
        Some(rps) => Arc::new(tavily.rate_limited(rps)),
        None => Arc::new(tavily),
    };

    let pipeline = Pipeline::new(Arc::new(llm), searcher, pipeline_config);

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, cancelling fact check");
            ctrl_c.cancel();
        }
    });

    let outcome = match pipeline.run_with_cancel(&text, cancel).await {
        Ok(outcome) => outcome,
        Err(FactCheckError::Cancelled) => {
            eprintln!("Fact check cancelled.");
            std::process::exit(130);
        }
        Err(e) => return Err(e).context("Fact check failed"),
    };

    match args.format {
        OutputFormat::Text => print!("{}", render::render_text(&outcome)),
        OutputFormat::Json => println!(
            "{}",
            render::render_json(&outcome).context("Failed to serialize report")?
        ),
    }

    Ok(())
}

/// Environment settings with command-line overrides applied.
fn pipeline_config(config: &Config, args: &Args) -> PipelineConfig {
    let mut pipeline_config = config.pipeline_config();
    if let Some(n) = args.concurrency {
        pipeline_config = pipeline_config.with_max_concurrency(n);
    }
    if args.fail_fast {
        pipeline_config = pipeline_config.with_isolate_failures(false);
    }
    pipeline_config
}

fn language_model(config: &Config, pipeline_config: &PipelineConfig) -> Result<OpenAIClient> {
    OpenAIClient::new(config.groq_api_key.expose())
        .with_base_url(&config.llm_base_url)
        .with_timeout(pipeline_config.call_timeout())
        .context("Failed to build language model client")
}
