//! Output formatting utilities

use arbor_api::ApiError;
use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Compact,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "compact" => Self::Compact,
            _ => Self::Json,
        }
    }
}

/// Format output based on format type
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> anyhow::Result<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(data)?,
        OutputFormat::Compact => serde_json::to_string(data)?,
    };
    Ok(text)
}

/// Attach the API status code to an error for the terminal
pub fn api_error(e: ApiError) -> anyhow::Error {
    anyhow::anyhow!("[{}] {}", e.code(), e)
}
