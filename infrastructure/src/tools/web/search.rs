//! `web_search` tool — look up current information via DuckDuckGo.
//!
//! Uses the [DuckDuckGo Instant Answer API](https://api.duckduckgo.com/),
//! which needs no API key and returns abstracts, direct answers,
//! definitions, and related topics as JSON.
//!
//! The tool contract is free text in both directions: one natural-language
//! query in, a plain-text result summary out. A provider failure becomes a
//! failed [`ToolResult`] (`EXECUTION_FAILED`) — the search-unavailable
//! condition — which the caller relays to the model unchanged.

use scout_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    value_objects::{ToolError, ToolResult},
};
use std::time::Instant;

/// Canonical name of the web search tool.
pub const WEB_SEARCH: &str = "web_search";

/// DuckDuckGo Instant Answer API endpoint (no API key required).
const DDG_API_URL: &str = "https://api.duckduckgo.com/";

/// How many related-topic lines to include in the summary.
const MAX_RELATED_TOPICS: usize = 5;

/// Create the [`ToolDefinition`] for `web_search`.
pub fn web_search_definition() -> ToolDefinition {
    ToolDefinition::new(
        WEB_SEARCH,
        "A search engine tool to look up current information on the internet. \
         Input MUST be a single, clear search query string (question or keywords). \
         Useful when you need real-time facts, news, stats, or verification.",
    )
    .with_parameter(ToolParameter::new("query", "The search query", true))
}

/// Execute the `web_search` tool — query DuckDuckGo and summarize results.
pub async fn execute_web_search(client: &reqwest::Client, call: &ToolCall) -> ToolResult {
    let start = Instant::now();

    let query = match call.require_string("query") {
        Ok(q) => q.trim(),
        Err(e) => {
            return ToolResult::failure(WEB_SEARCH, ToolError::invalid_argument(e));
        }
    };
    if query.is_empty() {
        return ToolResult::failure(
            WEB_SEARCH,
            ToolError::invalid_argument("Argument 'query' must be a non-empty string"),
        );
    }

    tracing::info!(query = %query, "web_search");

    let response = match client
        .get(DDG_API_URL)
        .query(&[
            ("q", query),
            ("format", "json"),
            ("no_html", "1"),
            ("skip_disambig", "1"),
        ])
        .send()
        .await
    {
        Ok(r) => r,
        Err(e) => {
            return ToolResult::failure(
                WEB_SEARCH,
                ToolError::execution_failed(format!("Search request failed: {}", e)),
            );
        }
    };

    if !response.status().is_success() {
        return ToolResult::failure(
            WEB_SEARCH,
            ToolError::execution_failed(format!(
                "Search provider returned HTTP {}",
                response.status()
            )),
        );
    }

    let body: serde_json::Value = match response.json().await {
        Ok(j) => j,
        Err(e) => {
            return ToolResult::failure(
                WEB_SEARCH,
                ToolError::execution_failed(format!("Failed to parse search results: {}", e)),
            );
        }
    };

    let output = summarize_results(query, &body);
    let elapsed = start.elapsed().as_millis() as u64;
    let bytes = output.len();

    let mut result = ToolResult::success(WEB_SEARCH, output).with_duration(elapsed);
    result.metadata.bytes = Some(bytes);
    result
}

/// Render the DuckDuckGo JSON payload into a plain-text summary.
///
/// Populated fields become labeled paragraphs; an empty payload yields a
/// "no instant answer" line so the model knows the search came up dry
/// rather than failed.
fn summarize_results(query: &str, data: &serde_json::Value) -> String {
    let mut parts: Vec<String> = Vec::new();

    let field = |key: &str| data[key].as_str().filter(|s| !s.is_empty());

    if let Some(text) = field("AbstractText") {
        let source = field("AbstractSource").unwrap_or("unknown source");
        let url = field("AbstractURL").unwrap_or("");
        parts.push(format!("{} (source: {} {})", text, source, url));
    }

    if let Some(answer) = field("Answer") {
        parts.push(format!("Direct answer: {}", answer));
    }

    if let Some(definition) = field("Definition") {
        let source = field("DefinitionSource").unwrap_or("unknown source");
        parts.push(format!("Definition ({}): {}", source, definition));
    }

    if let Some(topics) = data["RelatedTopics"].as_array() {
        let lines: Vec<String> = topics
            .iter()
            .filter_map(|topic| {
                let text = topic["Text"].as_str().filter(|s| !s.is_empty())?;
                let url = topic["FirstURL"].as_str().unwrap_or("");
                Some(format!("* {} ({})", text, url))
            })
            .take(MAX_RELATED_TOPICS)
            .collect();

        if !lines.is_empty() {
            parts.push(format!("Related topics:\n{}", lines.join("\n")));
        }
    }

    if parts.is_empty() {
        return format!(
            "No instant answer available for \"{}\". The information may exist but \
             was not surfaced by the search provider.",
            query
        );
    }

    format!("Search results for \"{}\":\n\n{}", query, parts.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_with_abstract() {
        let data = serde_json::json!({
            "AbstractText": "Rust is a systems programming language.",
            "AbstractSource": "Wikipedia",
            "AbstractURL": "https://en.wikipedia.org/wiki/Rust_(programming_language)",
            "Answer": "",
            "Definition": "",
            "RelatedTopics": [],
        });

        let output = summarize_results("rust language", &data);
        assert!(output.contains("rust language"));
        assert!(output.contains("systems programming language"));
        assert!(output.contains("Wikipedia"));
    }

    #[test]
    fn test_summarize_with_direct_answer() {
        let data = serde_json::json!({
            "AbstractText": "",
            "Answer": "4",
            "Definition": "",
            "RelatedTopics": [],
        });

        let output = summarize_results("2+2", &data);
        assert!(output.contains("Direct answer: 4"));
    }

    #[test]
    fn test_summarize_empty_payload() {
        let data = serde_json::json!({
            "AbstractText": "",
            "Answer": "",
            "Definition": "",
            "RelatedTopics": [],
        });

        let output = summarize_results("obscure query", &data);
        assert!(output.contains("No instant answer available"));
        assert!(output.contains("obscure query"));
    }

    #[test]
    fn test_summarize_caps_related_topics() {
        let topics: Vec<serde_json::Value> = (0..10)
            .map(|i| {
                serde_json::json!({
                    "Text": format!("Topic {}", i),
                    "FirstURL": format!("https://example.com/{}", i),
                })
            })
            .collect();
        let data = serde_json::json!({
            "AbstractText": "",
            "Answer": "",
            "Definition": "",
            "RelatedTopics": topics,
        });

        let output = summarize_results("many topics", &data);
        assert!(output.contains("Topic 0"));
        assert!(output.contains("Topic 4"));
        assert!(!output.contains("Topic 5"));
    }

    #[test]
    fn test_topic_groups_without_text_are_skipped() {
        let data = serde_json::json!({
            "AbstractText": "",
            "Answer": "",
            "Definition": "",
            "RelatedTopics": [
                { "Name": "Category group without Text" },
                { "Text": "Real topic", "FirstURL": "https://example.com" }
            ],
        });

        let output = summarize_results("mixed", &data);
        assert!(output.contains("Real topic"));
        assert!(!output.contains("Category group"));
    }
}
