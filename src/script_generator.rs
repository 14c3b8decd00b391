// src/script_generator.rs
//! Generates the Puppeteer automation script from resume and job data.
//!
//! Pure text assembly: identical inputs always produce identical output.
//! Every user-supplied value is escaped as a JavaScript string literal before
//! interpolation so quotes, backslashes, or template delimiters in resume
//! fields cannot corrupt the script syntax.

use crate::types::{JobData, ResumeData};

/// Toggles for the optional sections of the generated script
#[derive(Debug, Clone, Copy)]
pub struct ScriptFeatures {
    /// Fill cover-letter / free-text answer fields
    pub ai_responses: bool,
    /// Attach a resume file to upload inputs
    pub resume_upload: bool,
    /// Fill standard personal-info form fields
    pub form_autofill: bool,
}

impl Default for ScriptFeatures {
    fn default() -> Self {
        Self {
            ai_responses: true,
            resume_upload: true,
            form_autofill: true,
        }
    }
}

/// Generate the automation script with all features enabled
pub fn generate_script(resume: &ResumeData, job: &JobData) -> String {
    generate_script_with_features(resume, job, ScriptFeatures::default())
}

pub fn generate_script_with_features(
    resume: &ResumeData,
    job: &JobData,
    features: ScriptFeatures,
) -> String {
    let experience_summary = resume
        .experience
        .iter()
        .map(|e| e.description.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let skills_list = resume.skills.join(", ");
    let cover_letter = build_cover_letter(resume, job);

    let mut script = String::new();

    script.push_str("// Job Application Automation Script\n");
    script.push_str(&format!(
        "// Target: {} at {}\n",
        comment_safe(&job.title),
        comment_safe(&job.company)
    ));
    script.push_str(&format!("// Source: {}\n", comment_safe(&job.url)));
    script.push_str("//\n");
    script.push_str("// Requires Node.js with Puppeteer installed:\n");
    script.push_str("//   npm install puppeteer\n");
    script.push_str("//   node apply.js\n");
    script.push_str("//\n");
    script.push_str("// The script fills the application form but never submits it.\n");
    script.push_str("// Review everything in the opened browser before sending.\n\n");

    script.push_str("const puppeteer = require('puppeteer');\n\n");

    script.push_str(&format!("const jobUrl = {};\n\n", js_str(&job.url)));

    script.push_str("const applicant = {\n");
    script.push_str(&format!(
        "  name: {},\n",
        js_str(&resume.personal_info.name)
    ));
    script.push_str(&format!(
        "  email: {},\n",
        js_str(&resume.personal_info.email)
    ));
    script.push_str(&format!(
        "  phone: {},\n",
        js_str(&resume.personal_info.phone)
    ));
    script.push_str(&format!(
        "  location: {},\n",
        js_str(&resume.personal_info.location)
    ));
    script.push_str("};\n\n");

    script.push_str(&format!(
        "const experienceSummary = {};\n\n",
        js_str(&experience_summary)
    ));
    script.push_str(&format!("const skills = {};\n\n", js_str(&skills_list)));
    script.push_str(&format!(
        "const coverLetter = {};\n\n",
        js_str(&cover_letter)
    ));

    script.push_str("async function fillField(page, selectors, value) {\n");
    script.push_str("  for (const selector of selectors) {\n");
    script.push_str("    const field = await page.$(selector);\n");
    script.push_str("    if (field) {\n");
    script.push_str("      await field.click({ clickCount: 3 });\n");
    script.push_str("      await field.type(value, { delay: 50 });\n");
    script.push_str("      return true;\n");
    script.push_str("    }\n");
    script.push_str("  }\n");
    script.push_str("  return false;\n");
    script.push_str("}\n\n");

    script.push_str("(async () => {\n");
    script.push_str("  const browser = await puppeteer.launch({ headless: false });\n");
    script.push_str("  const page = await browser.newPage();\n");
    script.push_str("  await page.goto(jobUrl, { waitUntil: 'networkidle2' });\n\n");

    if features.form_autofill {
        script.push_str("  // Standard personal-info fields\n");
        script.push_str(
            "  await fillField(page, ['input[name*=\"name\" i]', 'input[id*=\"name\" i]'], applicant.name);\n",
        );
        script.push_str(
            "  await fillField(page, ['input[type=\"email\"]', 'input[name*=\"email\" i]'], applicant.email);\n",
        );
        script.push_str(
            "  await fillField(page, ['input[type=\"tel\"]', 'input[name*=\"phone\" i]'], applicant.phone);\n",
        );
        script.push_str(
            "  await fillField(page, ['input[name*=\"location\" i]', 'input[name*=\"city\" i]'], applicant.location);\n\n",
        );
    }

    if features.resume_upload {
        script.push_str("  // Resume upload (expects resume.pdf next to this script)\n");
        script.push_str("  const upload = await page.$('input[type=\"file\"]');\n");
        script.push_str("  if (upload) {\n");
        script.push_str("    await upload.uploadFile('./resume.pdf');\n");
        script.push_str("  }\n\n");
    }

    if features.ai_responses {
        script.push_str("  // Cover letter / free-text answers\n");
        script.push_str(
            "  await fillField(page, ['textarea[name*=\"cover\" i]', 'textarea[id*=\"cover\" i]', 'textarea'], coverLetter);\n\n",
        );
    }

    script.push_str(
        "  console.log('Form prepared for ' + applicant.name + '. Review before submitting.');\n",
    );
    script.push_str("})();\n");

    script
}

/// Fixed-form cover-letter paragraph built from the first experience entry
/// and the first three skills
fn build_cover_letter(resume: &ResumeData, job: &JobData) -> String {
    let mut letter = String::new();

    letter.push_str("Dear Hiring Manager,\n\n");
    letter.push_str(&format!(
        "I am excited to apply for the {} position at {}. ",
        job.title, job.company
    ));

    if let Some(first) = resume.experience.first() {
        letter.push_str(&format!(
            "In my role as {} at {} ({}), {} ",
            first.position, first.company, first.duration, first.description
        ));
    }

    let top_skills = resume
        .skills
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>();
    if !top_skills.is_empty() {
        letter.push_str(&format!(
            "My experience with {} aligns closely with what you are looking for. ",
            top_skills.join(", ")
        ));
    }

    letter.push_str(
        "I would welcome the opportunity to discuss how my background can contribute to your team.",
    );
    letter.push_str("\n\nBest regards,\n");
    letter.push_str(&resume.personal_info.name);

    letter
}

/// Render a value as a single-quoted JavaScript string literal
fn js_str(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '`' => out.push_str("\\`"),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Values interpolated into `//` comment lines must stay on one line
fn comment_safe(value: &str) -> String {
    value.replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{sample_resume, JobData, ResumeData};

    fn job() -> JobData {
        JobData {
            title: "Backend Engineer".to_string(),
            description: "Build services.".to_string(),
            company: "acme.io".to_string(),
            url: "https://acme.io/careers/42".to_string(),
        }
    }

    #[test]
    fn test_output_is_deterministic() {
        let resume = sample_resume();
        let a = generate_script(&resume, &job());
        let b = generate_script(&resume, &job());
        assert_eq!(a, b);
    }

    #[test]
    fn test_output_contains_job_fields() {
        let script = generate_script(&sample_resume(), &job());
        assert!(script.contains("Backend Engineer"));
        assert!(script.contains("acme.io"));
        assert!(script.contains("https://acme.io/careers/42"));
    }

    #[test]
    fn test_output_contains_resume_fields() {
        let resume = ResumeData::from_json(
            r#"{"personalInfo":{"name":"Jane Doe","email":"jane@acme.io","phone":"","location":""},
                "experience":[],"skills":["Go","SQL"],"education":[]}"#,
        )
        .unwrap();
        let script = generate_script(&resume, &job());
        assert!(script.contains("Jane Doe"));
        assert!(script.contains("Go, SQL"));
    }

    #[test]
    fn test_cover_letter_uses_first_experience_and_top_skills() {
        let resume = sample_resume();
        let script = generate_script(&resume, &job());
        assert!(script.contains("Senior Software Engineer at TechCorp Inc."));
        assert!(script.contains("JavaScript, React, Node.js"));
        assert!(!script.contains("Python, AWS"));
    }

    #[test]
    fn test_hostile_values_are_escaped() {
        let mut resume = sample_resume();
        resume.personal_info.name = "O'Brien `${x}`\nLine2".to_string();
        let script = generate_script(&resume, &job());
        assert!(script.contains(r"O\'Brien \`\${x}\`\nLine2"));
        assert!(!script.contains("O'Brien `"));
    }

    #[test]
    fn test_feature_flags_gate_sections() {
        let resume = sample_resume();
        let features = ScriptFeatures {
            ai_responses: false,
            resume_upload: false,
            form_autofill: true,
        };
        let script = generate_script_with_features(&resume, &job(), features);
        assert!(script.contains("Standard personal-info fields"));
        assert!(!script.contains("uploadFile"));
        assert!(!script.contains("Cover letter / free-text answers"));
    }

    #[test]
    fn test_empty_resume_still_generates() {
        let resume = ResumeData::default();
        let script = generate_script(&resume, &job());
        assert!(script.contains("const coverLetter"));
        assert!(script.contains("https://acme.io/careers/42"));
    }
}
