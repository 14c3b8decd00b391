// src/utils.rs
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Normalize a company name for file system usage
pub fn normalize_company_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Output file name for a generated script, derived from the company
pub fn script_file_name(company: &str) -> String {
    format!("{}_application_script.js", normalize_company_name(company))
}

/// Ensure directory exists
pub async fn ensure_directory(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path)
        .await
        .with_context(|| format!("Failed to create directory: {}", path.display()))
}

/// Write the generated script under `dir`, named from the company
pub async fn write_script_file(dir: &Path, company: &str, content: &str) -> Result<PathBuf> {
    ensure_directory(dir).await?;
    let path = dir.join(script_file_name(company));
    tokio::fs::write(&path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(path)
}
