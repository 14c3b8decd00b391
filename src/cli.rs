// src/cli.rs
use crate::pipeline::{AutomationConfig, AutomationInput, AutomationPipeline};
use crate::steps::StepStatus;
use crate::types::resume::sample_resume_json;
use crate::utils::write_script_file;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "autoapply")]
#[command(about = "Generate a job application automation script from a resume")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the automation pipeline against a job posting
    Run {
        /// Job posting URL
        #[arg(long)]
        url: String,

        /// Path to the resume JSON file, or - to read from stdin
        #[arg(long)]
        resume: PathBuf,

        /// Directory the generated script is written to
        #[arg(long, default_value = "output")]
        output_dir: PathBuf,

        /// Delay between pipeline steps in milliseconds
        #[arg(long, default_value_t = 2000)]
        delay_ms: u64,

        /// Also print the generated script to stdout
        #[arg(long)]
        print: bool,
    },
    /// Print the sample resume JSON document
    Sample,
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Run {
            url,
            resume,
            output_dir,
            delay_ms,
            print,
        } => {
            let resume_json = read_resume(&resume)?;
            let input = AutomationInput {
                job_url: url,
                resume_json,
            };

            let config =
                AutomationConfig::new().with_step_delay(Duration::from_millis(delay_ms));
            let pipeline = AutomationPipeline::new(config);

            let outcome = pipeline
                .run_with_progress(&input, |i, steps| {
                    let step = &steps[i];
                    match step.status {
                        StepStatus::Processing => {
                            println!(
                                "[{}/{}] {} - {}",
                                i + 1,
                                steps.len(),
                                step.title,
                                step.description
                            );
                        }
                        StepStatus::Completed => {
                            println!("[{}/{}] ✓ {}", i + 1, steps.len(), step.title);
                        }
                        _ => {}
                    }
                })
                .await?;

            let path = write_script_file(&output_dir, &outcome.job.company, &outcome.script)
                .await?;

            println!();
            println!("✓ Automation script ready!");
            println!("  Job:     {} at {}", outcome.job.title, outcome.job.company);
            println!("  Source:  {}", outcome.job.url);
            println!("  Script:  {}", path.display());
            println!("  The script fills forms but never submits; review it before use.");

            if print {
                println!();
                println!("{}", outcome.script);
            }

            Ok(())
        }

        Command::Sample => {
            println!("{}", sample_resume_json());
            Ok(())
        }
    }
}

fn read_resume(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read resume from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read resume file: {}", path.display()))
    }
}
