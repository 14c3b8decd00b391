// src/types/resume.rs
//! Resume data structures as supplied by the user in JSON form

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Structured resume document.
///
/// Field names mirror the JSON the user pastes in (camelCase keys). Every
/// section defaults to empty so a document is accepted as long as it parses
/// as JSON with the right shape where fields are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub year: String,
}

impl ResumeData {
    /// Parse a resume from its JSON text form
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid resume JSON")
    }
}

/// Fixed sample resume for the "load sample" action
pub fn sample_resume() -> ResumeData {
    ResumeData {
        personal_info: PersonalInfo {
            name: "Alex Developer".to_string(),
            email: "alex@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
        },
        experience: vec![Experience {
            company: "TechCorp Inc.".to_string(),
            position: "Senior Software Engineer".to_string(),
            duration: "2021 - Present".to_string(),
            description: "Led development of cloud-native applications using React, Node.js, \
                          and AWS. Improved system performance by 40% and mentored junior \
                          developers."
                .to_string(),
        }],
        skills: vec![
            "JavaScript".to_string(),
            "React".to_string(),
            "Node.js".to_string(),
            "Python".to_string(),
            "AWS".to_string(),
            "Docker".to_string(),
        ],
        education: vec![Education {
            institution: "Stanford University".to_string(),
            degree: "B.S. Computer Science".to_string(),
            year: "2020".to_string(),
        }],
    }
}

/// Pretty-printed JSON form of the sample resume
pub fn sample_resume_json() -> String {
    serde_json::to_string_pretty(&sample_resume())
        .unwrap_or_else(|_| "{}".to_string())
}
