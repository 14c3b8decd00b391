use anyhow::Result;

pub mod cli;
pub mod job_fetcher;
pub mod pipeline;
pub mod script_generator;
pub mod steps;
pub mod types;
pub mod utils;

pub use pipeline::{AutomationConfig, AutomationInput, AutomationOutcome, AutomationPipeline};
pub use steps::{ProcessingStep, StepStatus, StepTracker};
pub use types::{JobData, ResumeData};

/// Convenience function for a one-shot run with default settings
pub async fn run_automation(job_url: &str, resume_json: &str) -> Result<AutomationOutcome> {
    let pipeline = AutomationPipeline::new(AutomationConfig::default());
    pipeline
        .run(&AutomationInput {
            job_url: job_url.to_string(),
            resume_json: resume_json.to_string(),
        })
        .await
}
