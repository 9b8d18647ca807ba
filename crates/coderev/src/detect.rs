use crate::prelude::{eprintln, println, *};
use coderev_core::language::{detect_language, display_name};
use colored::Colorize;
use std::path::PathBuf;

use crate::input::read_code;

#[derive(Debug, clap::Args)]
pub struct DetectOptions {
    /// File containing the snippet to inspect. Reads stdin when omitted.
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: DetectOptions, global: crate::Global) -> Result<()> {
    let code = read_code(options.file.as_deref()).await?;

    if global.verbose {
        eprintln!("Snippet: {} bytes", code.len());
    }

    let detected = detect_language(&code);

    if options.json {
        println!("{}", format_detection_json(detected)?);
    } else {
        println!("{}", format_detection_text(detected));
    }

    Ok(())
}

fn format_detection_json(detected: Option<&str>) -> Result<String> {
    serde_json::to_string_pretty(&serde_json::json!({ "language": detected }))
        .map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn format_detection_text(detected: Option<&str>) -> String {
    match detected {
        Some(id) => format!(
            "{}: {}",
            "Detected".green(),
            display_name(id).unwrap_or(id).bright_white().bold()
        ),
        None => "No language signature matched.".yellow().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection_text_with_match() {
        let result = format_detection_text(Some("python"));
        assert!(result.contains("Detected"));
        assert!(result.contains("Python"));
    }

    #[test]
    fn test_format_detection_text_without_match() {
        assert!(format_detection_text(None).contains("No language signature matched."));
    }

    #[test]
    fn test_format_detection_json() {
        let value: serde_json::Value =
            serde_json::from_str(&format_detection_json(Some("go")).unwrap()).unwrap();
        assert_eq!(value["language"], "go");

        let value: serde_json::Value =
            serde_json::from_str(&format_detection_json(None).unwrap()).unwrap();
        assert!(value["language"].is_null());
    }
}
