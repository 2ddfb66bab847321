//! CLI command implementations

pub mod analyse;
pub mod weather;

use crate::errors::AppResult;
use crate::report::OutputFormat;
use std::path::{Path, PathBuf};

/// Write output to file with safe directory creation
fn write_output_to_file(path: &Path, content: &str, description: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    println!("{} written to: {}", description, path.display());
    Ok(())
}

/// Deliver formatted output: explicit path, default export path for
/// machine-readable formats, or stdout for the console format
fn deliver_output(
    content: &str,
    format: &OutputFormat,
    output_path: &Option<PathBuf>,
    default_path: PathBuf,
    description: &str,
) -> AppResult<()> {
    if let Some(path) = output_path {
        write_output_to_file(path, content, description)?;
    } else if *format != OutputFormat::Console {
        write_output_to_file(&default_path, content, description)?;
    } else {
        print!("{}", content);
    }
    Ok(())
}

/// Lowercase alphanumeric slug for default export filenames
fn filename_slug(name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let trimmed = slug.trim_matches('_');
    if trimmed.is_empty() {
        "report".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_slug() {
        assert_eq!(filename_slug("Test Bldg #4"), "test_bldg__4");
        assert_eq!(filename_slug("  "), "report");
        assert_eq!(filename_slug("plant"), "plant");
    }
}
