use std::sync::Arc;

use clap::{Parser, Subcommand};

use tavxng::api;
use tavxng::config::Config;
use tavxng::models::SearchRequest;
use tavxng::pipeline::SearchPipeline;

#[derive(Parser)]
#[command(name = "tavxng", version, about = "Tavily-compatible search API backed by SearXNG")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve,
    /// Run one search and print the response envelope as JSON
    Search {
        query: String,
        /// Cap on returned results (defaults to DEFAULT_MAX_RESULTS)
        #[arg(long)]
        max_results: Option<usize>,
        /// Fetch each result page and attach its extracted text
        #[arg(long)]
        include_raw_content: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Command::Serve => {
            let addr = format!("{}:{}", config.server_host, config.server_port);
            let pipeline = Arc::new(SearchPipeline::new(config)?);
            let router = api::create_router(pipeline);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            log::info!("listening on {addr}");
            axum::serve(listener, router).await?;
        }
        Command::Search {
            query,
            max_results,
            include_raw_content,
        } => {
            let pipeline = SearchPipeline::new(config)?;
            let request = SearchRequest {
                query,
                max_results,
                include_raw_content,
            };
            let response = pipeline.search(&request).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }
    Ok(())
}
