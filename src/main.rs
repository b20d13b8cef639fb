use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use docsim::config::{clamp_top_k, Config};
use docsim::source::web::HttpFetcher;
use docsim::source::{resolve, DocumentInput};

/// Document similarity checker.
///
/// Scores how similar two text documents are using TF-IDF vectors and
/// cosine similarity, and shows the keywords behind the score.
#[derive(Parser)]
#[command(name = "docsim", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two documents given as text, files, or URLs
    Compare {
        #[command(flatten)]
        doc1: Doc1Args,

        #[command(flatten)]
        doc2: Doc2Args,

        /// Entries in each top-K list (default: DOCSIM_TOP_K or 5)
        #[arg(long)]
        top: Option<usize>,

        /// Print the report as JSON instead of the terminal view
        #[arg(long)]
        json: bool,
    },

    /// Start the web form
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: PORT or 8080)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: DOCSIM_BIND or 127.0.0.1)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[derive(Args)]
#[group(required = true, multiple = true)]
struct Doc1Args {
    /// Inline text for document 1
    #[arg(long)]
    text1: Option<String>,

    /// Text file for document 1
    #[arg(long)]
    file1: Option<PathBuf>,

    /// Web page for document 1 (paragraph text is used)
    #[arg(long)]
    url1: Option<String>,
}

#[derive(Args)]
#[group(required = true, multiple = true)]
struct Doc2Args {
    /// Inline text for document 2
    #[arg(long)]
    text2: Option<String>,

    /// Text file for document 2
    #[arg(long)]
    file2: Option<PathBuf>,

    /// Web page for document 2 (paragraph text is used)
    #[arg(long)]
    url2: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("docsim=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            doc1,
            doc2,
            top,
            json,
        } => {
            let config = Config::load()?;
            config.require_fetch_timeout()?;
            let fetcher = HttpFetcher::new(config.fetch_timeout, &config.user_agent)?;

            let input1 = DocumentInput::choose(doc1.text1, doc1.file1, doc1.url1);
            let input2 = DocumentInput::choose(doc2.text2, doc2.file2, doc2.url2);

            let (text1, text2) = match (input1, input2) {
                (Some(a), Some(b)) => tokio::join!(resolve(&a, &fetcher), resolve(&b, &fetcher)),
                _ => (String::new(), String::new()),
            };

            if text1.trim().is_empty() || text2.trim().is_empty() {
                println!(
                    "{}",
                    "Both documents need text to compare. Check the files or URLs above.".yellow()
                );
                return Ok(());
            }

            let top_k = clamp_top_k(top.unwrap_or(config.top_k));

            let spinner = analysis_spinner(json);
            let report = docsim::analysis::analyze(&text1, &text2, top_k);
            spinner.finish_and_clear();

            info!(
                similarity = report.similarity,
                band = %report.band,
                "Analysis complete"
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                docsim::output::terminal::display_report(&report);
            }
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let mut config = Config::load()?;
            config.require_fetch_timeout()?;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind = bind;
            }

            let fetcher = HttpFetcher::new(config.fetch_timeout, &config.user_agent)?;
            docsim::web::run_server(config, std::sync::Arc::new(fetcher)).await?;
        }
    }

    Ok(())
}

/// Spinner shown while the pipeline runs. Hidden when printing JSON so
/// stdout stays machine-readable.
fn analysis_spinner(json: bool) -> ProgressBar {
    if json {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Analyzing similarity...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
