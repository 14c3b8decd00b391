// src/types/job.rs
use serde::{Deserialize, Serialize};

/// Job posting data extracted from the target page, or placeholder values
/// when the page could not be fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobData {
    pub title: String,
    pub description: String,
    pub company: String,
    pub url: String,
}

pub const PLACEHOLDER_TITLE: &str = "Software Engineer Position";
pub const PLACEHOLDER_DESCRIPTION: &str =
    "Exciting opportunity to join a growing team working on impactful products.";

impl JobData {
    /// Fallback job data used when the posting cannot be scraped
    pub fn placeholder(company: String, url: &str) -> Self {
        Self {
            title: PLACEHOLDER_TITLE.to_string(),
            description: PLACEHOLDER_DESCRIPTION.to_string(),
            company,
            url: url.to_string(),
        }
    }
}
