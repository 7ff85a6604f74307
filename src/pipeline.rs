use std::collections::HashMap;
use std::time::Instant;

use uuid::Uuid;

use crate::config::Config;
use crate::error::SearchError;
use crate::models::{SearchRequest, TavilyResponse, TavilyResult};
use crate::scrapper;
use crate::searx::{SearxClient, SearxResult};

/// The whole relay behind one entry point: backend query, optional
/// enrichment fan-out, Tavily-shaped assembly. Both the HTTP handler and
/// the CLI `search` subcommand call this.
pub struct SearchPipeline {
    config: Config,
    searx: SearxClient,
}

impl SearchPipeline {
    pub fn new(config: Config) -> Result<SearchPipeline, SearchError> {
        let searx = SearxClient::new(
            config.searxng_url.clone(),
            config.default_engines.clone(),
        )?;
        Ok(SearchPipeline { config, searx })
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<TavilyResponse, SearchError> {
        let start = Instant::now();
        let request_id = Uuid::new_v4().to_string();
        log::info!("search request: {}", request.query);

        let max_results = request
            .max_results
            .unwrap_or(self.config.default_max_results);
        let mut hits = self.searx.search(&request.query).await?;
        hits.truncate(max_results);

        let raw_contents = if request.include_raw_content && !hits.is_empty() {
            let urls: Vec<String> = hits
                .iter()
                .filter(|hit| !hit.url.is_empty())
                .map(|hit| hit.url.clone())
                .collect();
            scrapper::enrich(&urls, &self.config.scraper).await?
        } else {
            HashMap::new()
        };

        let results = assemble_results(hits, &raw_contents, request.include_raw_content);
        let response_time = start.elapsed().as_secs_f64();
        log::info!(
            "search completed: {} results in {:.2}s",
            results.len(),
            response_time
        );

        Ok(TavilyResponse::new(
            request.query.clone(),
            results,
            response_time,
            request_id,
        ))
    }
}

/// Zips the capped backend hits with the enrichment output. Hits without a
/// url are dropped and do not consume a score slot; `raw_content` is looked
/// up by url, absent meaning the fetch failed or was never requested.
fn assemble_results(
    hits: Vec<SearxResult>,
    raw_contents: &HashMap<String, String>,
    include_raw_content: bool,
) -> Vec<TavilyResult> {
    let mut results = Vec::with_capacity(hits.len());
    for hit in hits {
        if hit.url.is_empty() {
            continue;
        }
        let raw_content = if include_raw_content {
            raw_contents.get(&hit.url).cloned()
        } else {
            None
        };
        results.push(TavilyResult {
            score: 0.9 - 0.05 * results.len() as f64,
            url: hit.url,
            title: hit.title,
            content: hit.content,
            raw_content,
        });
    }
    results
}
