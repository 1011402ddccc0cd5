//! Synopsis texts used when no real summary can be produced

pub const NO_CONTENT: &str = "No README content available.";
pub const README_NOT_FOUND: &str = "README not found for this project.";
pub const NON_JSON_RESPONSE: &str = "Summarizer returned non-JSON response.";
pub const UNRECOGNIZED_RESPONSE: &str = "Couldn't parse summarizer response.";
pub const REQUEST_FAILED: &str = "Summarizer request failed.";

pub fn summarizer_error(message: &str) -> String {
    format!("Summarizer error: {}", message)
}

pub fn summarizer_status(status: u16) -> String {
    summarizer_error(&format!("HTTP {}", status))
}
