use std::collections::HashMap;

use futures::future::join_all;
use reqwest::{Client, StatusCode};

use crate::config::ScraperConfig;
use crate::error::{FetchFailure, SearchError};
use crate::extractor::extract_text;

/// Fetches every candidate URL concurrently and returns url -> extracted
/// text for the fetches that produced non-empty content.
///
/// One task per URL; a failed or timed-out fetch costs only its own entry
/// and never aborts the siblings. The call returns once every task has
/// resolved, so total wall clock is bounded by the slowest fetch. The only
/// fatal error is failing to build the shared HTTP client before any fetch
/// is launched.
pub async fn enrich(
    urls: &[String],
    config: &ScraperConfig,
) -> Result<HashMap<String, String>, SearchError> {
    if urls.is_empty() {
        return Ok(HashMap::new());
    }

    let client = Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| SearchError::ScrapeClient(e.to_string()))?;

    let mut handles = Vec::with_capacity(urls.len());
    for url in urls {
        let client = client.clone();
        let url = url.clone();
        let max_length = config.max_content_length;
        handles.push(tokio::spawn(async move {
            let outcome = fetch_page(&client, &url, max_length).await;
            (url, outcome)
        }));
    }

    // The map is written only here, after each task has resolved.
    let mut contents = HashMap::new();
    for joined in join_all(handles).await {
        match joined {
            Ok((url, Ok(text))) => {
                if !text.is_empty() {
                    contents.insert(url, text);
                }
            }
            Ok((url, Err(failure))) => {
                log::debug!("no raw content for {url}: {failure}");
            }
            Err(e) => {
                log::error!("enrichment task failed to join: {e}");
            }
        }
    }
    Ok(contents)
}

async fn fetch_page(client: &Client, url: &str, max_length: usize) -> Result<String, FetchFailure> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchFailure::Status(status.as_u16()));
    }
    let html = response.text().await?;
    Ok(extract_text(&html, max_length))
}
