use serde::{Deserialize, Serialize};

/// Inbound search request in Tavily's shape.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    /// Falls back to the configured default when omitted.
    #[serde(default)]
    pub max_results: Option<usize>,
    #[serde(default)]
    pub include_raw_content: bool,
}

/// One scored hit in Tavily's shape. `raw_content` serializes as `null`
/// when enrichment was not requested or produced nothing for this URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TavilyResult {
    pub url: String,
    pub title: String,
    pub content: String,
    pub score: f64,
    pub raw_content: Option<String>,
}

/// The Tavily response envelope. `follow_up_questions`, `answer` and
/// `images` are companion fields the upstream API always carries; this
/// relay never populates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TavilyResponse {
    pub query: String,
    pub follow_up_questions: Option<Vec<String>>,
    pub answer: Option<String>,
    pub images: Vec<String>,
    pub results: Vec<TavilyResult>,
    pub response_time: f64,
    pub request_id: String,
}

impl TavilyResponse {
    pub fn new(
        query: String,
        results: Vec<TavilyResult>,
        response_time: f64,
        request_id: String,
    ) -> TavilyResponse {
        TavilyResponse {
            query,
            follow_up_questions: None,
            answer: None,
            images: Vec::new(),
            results,
            response_time,
            request_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request: SearchRequest = serde_json::from_str(r#"{"query": "rust"}"#).unwrap();
        assert_eq!(request.query, "rust");
        assert_eq!(request.max_results, None);
        assert!(!request.include_raw_content);
    }

    #[test]
    fn test_request_all_fields() {
        let json = r#"{"query": "rust", "max_results": 5, "include_raw_content": true}"#;
        let request: SearchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.max_results, Some(5));
        assert!(request.include_raw_content);
    }

    #[test]
    fn test_request_missing_query_rejected() {
        let parsed = serde_json::from_str::<SearchRequest>(r#"{"max_results": 5}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_envelope_fixed_companions() {
        let response = TavilyResponse::new("rust".to_string(), vec![], 0.42, "id-1".to_string());
        let value = serde_json::to_value(&response).unwrap();
        assert!(value["follow_up_questions"].is_null());
        assert!(value["answer"].is_null());
        assert_eq!(value["images"], serde_json::json!([]));
        assert_eq!(value["query"], "rust");
        assert_eq!(value["request_id"], "id-1");
    }

    #[test]
    fn test_raw_content_serializes_as_null_when_absent() {
        let result = TavilyResult {
            url: "https://example.com".to_string(),
            title: "Example".to_string(),
            content: "snippet".to_string(),
            score: 0.9,
            raw_content: None,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert!(value["raw_content"].is_null());

        let enriched = TavilyResult {
            raw_content: Some("page text".to_string()),
            ..result
        };
        let value = serde_json::to_value(&enriched).unwrap();
        assert_eq!(value["raw_content"], "page text");
    }
}
