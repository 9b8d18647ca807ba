use crate::prelude::{eprintln, println, *};
use coderev_core::language::{detect_language, display_name};
use coderev_core::sections::{extract_review_sections, ReviewSections};
use colored::Colorize;
use std::path::PathBuf;

use crate::input::read_code;
use crate::upstream::{Upstream, UpstreamOptions};

#[derive(Debug, clap::Args)]
pub struct ReviewOptions {
    /// File containing the snippet to review. Reads stdin when omitted.
    pub file: Option<PathBuf>,

    /// Language of the snippet, or "auto" to guess from its shape
    #[clap(short, long, default_value = "auto")]
    pub language: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[clap(flatten)]
    pub upstream: UpstreamOptions,
}

/// How the language hint for a snippet was settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageResolution {
    /// The heuristic matched a signature.
    Detected(&'static str),
    /// The caller named the language explicitly.
    Specified(String),
    /// Auto-detection was requested and nothing matched.
    Unknown,
}

impl LanguageResolution {
    fn label(&self) -> String {
        match self {
            LanguageResolution::Detected(id) => {
                format!("{} (detected)", display_name(id).unwrap_or(id))
            }
            LanguageResolution::Specified(id) => id.clone(),
            LanguageResolution::Unknown => "unknown".to_string(),
        }
    }

    fn id(&self) -> Option<&str> {
        match self {
            LanguageResolution::Detected(id) => Some(id),
            LanguageResolution::Specified(id) => Some(id),
            LanguageResolution::Unknown => None,
        }
    }
}

/// Resolve the language hint: explicit choices pass through, "auto" runs the
/// detection heuristic over the snippet.
pub fn resolve_language(selected: &str, code: &str) -> LanguageResolution {
    if selected != "auto" {
        return LanguageResolution::Specified(selected.to_string());
    }

    match detect_language(code) {
        Some(id) => LanguageResolution::Detected(id),
        None => LanguageResolution::Unknown,
    }
}

pub async fn run(options: ReviewOptions, global: crate::Global) -> Result<()> {
    let code = read_code(options.file.as_deref()).await?;

    if code.trim().is_empty() {
        return Err(eyre!(Error::NoCode));
    }

    let language = resolve_language(&options.language, &code);

    if global.verbose {
        eprintln!("Language: {}", language.label());
        eprintln!("Snippet: {} bytes", code.len());
    }

    let upstream = Upstream::new(options.upstream);
    let review = upstream.complete(&code).await.map_err(|e| eyre!(e))?;
    let sections = extract_review_sections(&review);

    if options.json {
        println!("{}", format_review_json(&language, &review, &sections)?);
    } else {
        print!("{}", format_review_text(&language, &sections));
    }

    Ok(())
}

/// Build the JSON output: the resolved language, the raw model answer, and
/// the extracted section mapping.
fn format_review_json(
    language: &LanguageResolution,
    review: &str,
    sections: &ReviewSections,
) -> Result<String> {
    let output = serde_json::json!({
        "language": language.id(),
        "review": review,
        "sections": sections,
    });

    serde_json::to_string_pretty(&output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Build the formatted text output: one labeled block per review section.
fn format_review_text(language: &LanguageResolution, sections: &ReviewSections) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!("{}\n", "CODE REVIEW".bright_cyan().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}: {}\n",
        "Language".green(),
        language.label().bright_white()
    ));

    let blocks = [
        ("CORRECTED CODE", &sections.corrected_code),
        ("SUGGESTIONS", &sections.suggestions),
        ("EXPLANATIONS", &sections.explanations),
        ("EXPECTED OUTPUT", &sections.expected_output),
    ];

    for (title, content) in blocks {
        result.push_str(&format!("\n{}\n", "-".repeat(80).bright_magenta()));
        result.push_str(&format!("{}\n", title.bright_magenta().bold()));
        result.push_str(&format!("{}\n", "-".repeat(80).bright_magenta()));
        result.push_str(&format!("{}\n", content.white()));
    }

    result.push('\n');

    result
}
