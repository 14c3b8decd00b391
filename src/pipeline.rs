// src/pipeline.rs
//! Sequential automation run: validate input, walk the five steps with a
//! fixed delay between transitions, fetch the job page on the first step and
//! generate the script on the last.

use crate::job_fetcher::{company_from_url, JobFetcher};
use crate::script_generator::{generate_script_with_features, ScriptFeatures};
use crate::steps::{ProcessingStep, StepTracker};
use crate::types::{JobData, ResumeData};
use anyhow::{bail, Result};
use std::time::Duration;
use tracing::info;

/// Run settings. The default step delay matches the original two-second
/// pacing that gives the user perceptible phased feedback.
#[derive(Debug, Clone, Copy)]
pub struct AutomationConfig {
    pub step_delay: Duration,
    pub features: ScriptFeatures,
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(2000),
            features: ScriptFeatures::default(),
        }
    }
}

impl AutomationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    pub fn with_features(mut self, features: ScriptFeatures) -> Self {
        self.features = features;
        self
    }
}

pub struct AutomationInput {
    pub job_url: String,
    pub resume_json: String,
}

#[derive(Debug)]
pub struct AutomationOutcome {
    pub job: JobData,
    pub script: String,
    pub steps: Vec<ProcessingStep>,
}

pub struct AutomationPipeline {
    config: AutomationConfig,
    fetcher: JobFetcher,
}

impl AutomationPipeline {
    pub fn new(config: AutomationConfig) -> Self {
        Self {
            config,
            fetcher: JobFetcher::new(),
        }
    }

    pub fn with_fetcher(mut self, fetcher: JobFetcher) -> Self {
        self.fetcher = fetcher;
        self
    }

    pub async fn run(&self, input: &AutomationInput) -> Result<AutomationOutcome> {
        self.run_with_progress(input, |_, _| {}).await
    }

    /// Run the pipeline, invoking `on_step` with the index of the step that
    /// changed and a snapshot of the whole step list after every transition.
    pub async fn run_with_progress<F>(
        &self,
        input: &AutomationInput,
        mut on_step: F,
    ) -> Result<AutomationOutcome>
    where
        F: FnMut(usize, &[ProcessingStep]),
    {
        // Both rejections happen before any step leaves pending.
        if input.job_url.trim().is_empty() || input.resume_json.trim().is_empty() {
            bail!("Missing information: provide both a job URL and resume data");
        }
        let resume = ResumeData::from_json(&input.resume_json)?;

        let mut tracker = StepTracker::new();
        let total = tracker.len();
        let mut job = JobData::placeholder(company_from_url(&input.job_url), &input.job_url);
        let mut script = String::new();

        for i in 0..total {
            tracker.begin(i)?;
            on_step(i, tracker.steps());
            info!("Step {}/{}: {}", i + 1, total, tracker.steps()[i].title);

            if i == 0 {
                // Fetch failure degrades to placeholder data inside the
                // fetcher; the run continues either way.
                job = self.fetcher.fetch(&input.job_url).await;
            } else if i == total - 1 {
                script = generate_script_with_features(&resume, &job, self.config.features);
            }

            tokio::time::sleep(self.config.step_delay).await;
            tracker.complete(i)?;
            on_step(i, tracker.steps());
        }

        info!(
            "Automation ready: script generated for {} at {}",
            job.title, job.company
        );

        Ok(AutomationOutcome {
            job,
            script,
            steps: tracker.steps().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::StepStatus;
    use crate::types::resume::sample_resume_json;

    fn offline_pipeline() -> AutomationPipeline {
        // Proxy pointed at an unreachable local port so no external traffic
        // leaves the test; the fetch step falls back to placeholder data.
        AutomationPipeline::new(
            AutomationConfig::new().with_step_delay(Duration::from_millis(0)),
        )
        .with_fetcher(JobFetcher::new().with_proxy_base("http://127.0.0.1:9"))
    }

    #[tokio::test]
    async fn test_valid_input_completes_all_steps_in_order() {
        let input = AutomationInput {
            job_url: "https://acme.io/careers/42".to_string(),
            resume_json: sample_resume_json(),
        };

        let mut completed_order = Vec::new();
        let outcome = offline_pipeline()
            .run_with_progress(&input, |i, steps| {
                let processing = steps
                    .iter()
                    .filter(|s| s.status == StepStatus::Processing)
                    .count();
                assert!(processing <= 1, "more than one step processing");
                if steps[i].status == StepStatus::Completed {
                    completed_order.push(i);
                }
            })
            .await
            .unwrap();

        assert_eq!(completed_order, vec![0, 1, 2, 3, 4]);
        assert!(outcome
            .steps
            .iter()
            .all(|s| s.status == StepStatus::Completed));
        assert_eq!(outcome.job.company, "acme.io");
        assert!(outcome.script.contains("https://acme.io/careers/42"));
        assert!(outcome.script.contains("Alex Developer"));
    }

    #[tokio::test]
    async fn test_empty_url_rejected_before_any_step() {
        let input = AutomationInput {
            job_url: "".to_string(),
            resume_json: sample_resume_json(),
        };

        let mut transitions = 0;
        let result = offline_pipeline()
            .run_with_progress(&input, |_, _| transitions += 1)
            .await;

        assert!(result.is_err());
        assert_eq!(transitions, 0, "no step may leave pending");
    }

    #[tokio::test]
    async fn test_malformed_resume_rejected_before_any_step() {
        let input = AutomationInput {
            job_url: "https://acme.io/careers/42".to_string(),
            resume_json: "{not valid json".to_string(),
        };

        let mut transitions = 0;
        let result = offline_pipeline()
            .run_with_progress(&input, |_, _| transitions += 1)
            .await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid resume JSON"));
        assert_eq!(transitions, 0);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_swallowed_and_run_completes() {
        let input = AutomationInput {
            job_url: "https://unreachable.invalid/job".to_string(),
            resume_json: sample_resume_json(),
        };

        let outcome = offline_pipeline().run(&input).await.unwrap();
        assert!(outcome
            .steps
            .iter()
            .all(|s| s.status == StepStatus::Completed));
        assert_eq!(outcome.job.company, "unreachable.invalid");
        assert!(!outcome.job.title.is_empty());
    }
}
