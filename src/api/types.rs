use serde::{Deserialize, Serialize};

use crate::cli::Level;

/// Request body for the Responses API.
///
/// The tools list is a tagged enum so the web-search declaration carries
/// its extra field without any untyped escape hatch.
#[derive(Debug, Serialize)]
pub struct ResponseRequest<'a> {
    pub model: &'a str,
    pub input: &'a str,
    pub instructions: &'a str,
    pub reasoning: Reasoning,
    pub tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
pub struct Reasoning {
    pub effort: Level,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Tool {
    WebSearchPreview { search_context_size: Level },
}

// Response structures for the Responses API

#[derive(Debug, Deserialize)]
pub struct Response {
    pub output: Vec<OutputItem>,
}

/// One item of the response output.
///
/// The service interleaves reasoning traces, web-search call records and
/// message items; only message items carry user-visible text.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputItem {
    Message { content: Vec<ContentPart> },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    OutputText { text: String },
    #[serde(other)]
    Other,
}

impl Response {
    /// Concatenate every output_text part across message items, in order.
    ///
    /// Mirrors the aggregated text field the service's SDKs expose.
    pub fn output_text(&self) -> String {
        let mut text = String::new();
        for item in &self.output {
            if let OutputItem::Message { content } = item {
                for part in content {
                    if let ContentPart::OutputText { text: part_text } = part {
                        text.push_str(part_text);
                    }
                }
            }
        }
        text
    }
}

/// Error envelope returned by the service on failed requests
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
