// src/steps.rs
//! Sequential processing-step state machine driving the automation run.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Pending,
    Processing,
    Completed,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingStep {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: StepStatus,
}

impl ProcessingStep {
    fn new(id: &str, title: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            status: StepStatus::Pending,
        }
    }
}

/// The five fixed pipeline steps, in run order
pub fn default_steps() -> Vec<ProcessingStep> {
    vec![
        ProcessingStep::new(
            "1",
            "Fetch Job Description",
            "Scraping job posting content...",
        ),
        ProcessingStep::new(
            "2",
            "Analyze Requirements",
            "Extracting key requirements and preferences...",
        ),
        ProcessingStep::new(
            "3",
            "Match Resume Data",
            "Mapping your experience to job requirements...",
        ),
        ProcessingStep::new(
            "4",
            "Generate Responses",
            "Creating personalized answers using AI...",
        ),
        ProcessingStep::new(
            "5",
            "Create Automation Script",
            "Building the automation workflow...",
        ),
    ]
}

/// Ordered step list with enforced transition rules: at most one step is
/// processing at a time, steps complete strictly in index order, and a
/// completed step never goes back to pending.
pub struct StepTracker {
    steps: Vec<ProcessingStep>,
}

impl StepTracker {
    pub fn new() -> Self {
        Self::with_steps(default_steps())
    }

    pub fn with_steps(steps: Vec<ProcessingStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[ProcessingStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the step currently processing, if any
    pub fn current(&self) -> Option<usize> {
        self.steps
            .iter()
            .position(|s| s.status == StepStatus::Processing)
    }

    pub fn all_completed(&self) -> bool {
        self.steps.iter().all(|s| s.status == StepStatus::Completed)
    }

    /// Mark step `index` as processing. Every earlier step must already be
    /// completed and no other step may be in flight.
    pub fn begin(&mut self, index: usize) -> Result<()> {
        if index >= self.steps.len() {
            bail!("Step index out of range: {}", index);
        }
        if let Some(active) = self.current() {
            bail!(
                "Cannot start step {} while step {} is still processing",
                index,
                active
            );
        }
        if self.steps[index].status != StepStatus::Pending {
            bail!("Step {} has already run", index);
        }
        if self.steps[..index]
            .iter()
            .any(|s| s.status != StepStatus::Completed)
        {
            bail!("Cannot start step {} before earlier steps complete", index);
        }
        self.steps[index].status = StepStatus::Processing;
        Ok(())
    }

    /// Mark the processing step `index` as completed
    pub fn complete(&mut self, index: usize) -> Result<()> {
        if index >= self.steps.len() {
            bail!("Step index out of range: {}", index);
        }
        if self.steps[index].status != StepStatus::Processing {
            bail!("Step {} is not processing", index);
        }
        self.steps[index].status = StepStatus::Completed;
        Ok(())
    }

    /// Mark the processing step `index` as failed. Declared for completeness
    /// of the status set; the run loop never drives a step here (fetch
    /// failures degrade to placeholder data instead).
    pub fn fail(&mut self, index: usize) -> Result<()> {
        if index >= self.steps.len() {
            bail!("Step index out of range: {}", index);
        }
        if self.steps[index].status != StepStatus::Processing {
            bail!("Step {} is not processing", index);
        }
        self.steps[index].status = StepStatus::Error;
        Ok(())
    }
}

impl Default for StepTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_steps_are_five_and_pending() {
        let steps = default_steps();
        assert_eq!(steps.len(), 5);
        assert!(steps.iter().all(|s| s.status == StepStatus::Pending));
        assert_eq!(steps[0].title, "Fetch Job Description");
        assert_eq!(steps[4].title, "Create Automation Script");
    }

    #[test]
    fn test_steps_complete_in_order() {
        let mut tracker = StepTracker::new();
        for i in 0..tracker.len() {
            tracker.begin(i).unwrap();
            assert_eq!(tracker.current(), Some(i));
            tracker.complete(i).unwrap();
        }
        assert!(tracker.all_completed());
    }

    #[test]
    fn test_cannot_skip_a_step() {
        let mut tracker = StepTracker::new();
        assert!(tracker.begin(1).is_err());
        tracker.begin(0).unwrap();
        tracker.complete(0).unwrap();
        assert!(tracker.begin(2).is_err());
    }

    #[test]
    fn test_only_one_step_processing_at_a_time() {
        let mut tracker = StepTracker::new();
        tracker.begin(0).unwrap();
        assert!(tracker.begin(1).is_err());
        tracker.complete(0).unwrap();
        tracker.begin(1).unwrap();
        assert_eq!(tracker.current(), Some(1));
    }

    #[test]
    fn test_completed_step_cannot_restart() {
        let mut tracker = StepTracker::new();
        tracker.begin(0).unwrap();
        tracker.complete(0).unwrap();
        assert!(tracker.begin(0).is_err());
        assert_eq!(tracker.steps()[0].status, StepStatus::Completed);
    }

    #[test]
    fn test_complete_requires_processing() {
        let mut tracker = StepTracker::new();
        assert!(tracker.complete(0).is_err());
    }

    #[test]
    fn test_fail_transitions_to_error() {
        let mut tracker = StepTracker::new();
        tracker.begin(0).unwrap();
        tracker.fail(0).unwrap();
        assert_eq!(tracker.steps()[0].status, StepStatus::Error);
    }
}
