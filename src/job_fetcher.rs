// src/job_fetcher.rs
//! Best-effort job posting fetcher.
//!
//! Retrieves the target page through a public CORS-proxy passthrough and
//! extracts a title and description from the HTML. The public surface never
//! fails: any error (malformed URL, network, missing elements) degrades to
//! placeholder job data so the automation run can continue.

use crate::types::job::{JobData, PLACEHOLDER_DESCRIPTION, PLACEHOLDER_TITLE};
use anyhow::{Context, Result};
use reqwest::{Client, Url};
use scraper::{Html, Selector};
use tracing::{info, warn};

/// Passthrough proxy returning the target page's raw HTML
pub const DEFAULT_PROXY_BASE: &str = "https://api.allorigins.win/raw";

pub struct JobFetcher {
    client: Client,
    proxy_base: String,
}

impl JobFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            proxy_base: DEFAULT_PROXY_BASE.to_string(),
        }
    }

    pub fn with_proxy_base(mut self, base: impl Into<String>) -> Self {
        self.proxy_base = base.into();
        self
    }

    /// Fetch job data for a posting URL. Never fails: on any error the
    /// placeholder job data is returned and the failure is only logged.
    pub async fn fetch(&self, url: &str) -> JobData {
        match self.try_fetch(url).await {
            Ok(job) => {
                info!("Extracted job: {} at {}", job.title, job.company);
                job
            }
            Err(e) => {
                warn!("Job page fetch failed, using placeholder data: {:#}", e);
                JobData::placeholder(company_from_url(url), url)
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<JobData> {
        let target = Url::parse(url).context("Invalid job URL")?;

        info!("Fetching job post: {}", url);
        let response = self
            .client
            .get(&self.proxy_base)
            .query(&[("url", target.as_str())])
            .send()
            .await
            .context("Failed to fetch job page")?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP error: {}", response.status());
        }

        let html = response
            .text()
            .await
            .context("Failed to read response body")?;
        let document = Html::parse_document(&html);

        let title = first_text(&document, "h1")
            .unwrap_or_else(|| PLACEHOLDER_TITLE.to_string());
        let description = meta_description(&document)
            .unwrap_or_else(|| PLACEHOLDER_DESCRIPTION.to_string());

        Ok(JobData {
            title,
            description,
            company: host_company(&target),
            url: url.to_string(),
        })
    }
}

impl Default for JobFetcher {
    fn default() -> Self {
        Self::new()
    }
}

fn first_text(document: &Html, selector_str: &str) -> Option<String> {
    let selector = Selector::parse(selector_str).ok()?;
    let element = document.select(&selector).next()?;
    let text = clean_text(&element.text().collect::<Vec<_>>().join(" "));
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn meta_description(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"meta[name="description"]"#).ok()?;
    let element = document.select(&selector).next()?;
    let content = clean_text(element.value().attr("content")?);
    if content.is_empty() {
        None
    } else {
        Some(content)
    }
}

fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn host_company(url: &Url) -> String {
    match url.host_str() {
        Some(host) => {
            let host = host.to_lowercase();
            host.strip_prefix("www.").unwrap_or(&host).to_string()
        }
        None => "the company".to_string(),
    }
}

/// Derive a company name from a raw URL string, tolerating malformed input
pub fn company_from_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => host_company(&parsed),
        Err(_) => "the company".to_string(),
    }
}
