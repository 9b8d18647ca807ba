use crate::prelude::{println, *};
use coderev_core::language::LANGUAGE_NAMES;
use colored::Colorize;

#[derive(Debug, clap::Args)]
pub struct LanguagesOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: LanguagesOptions, _global: crate::Global) -> Result<()> {
    if options.json {
        let languages: Vec<serde_json::Value> = LANGUAGE_NAMES
            .iter()
            .map(|(id, name)| serde_json::json!({ "id": id, "name": name }))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&languages)
                .map_err(|e| eyre!("JSON serialization failed: {}", e))?
        );
        return Ok(());
    }

    println!(
        "\n{}",
        "Languages, in detection precedence order:".bright_white().bold()
    );

    let mut table = new_table();
    table.add_row(prettytable::row!["ID".bold().cyan(), "Name".bold().cyan()]);
    for (id, name) in LANGUAGE_NAMES {
        table.add_row(prettytable::row![id, name.bright_white().to_string()]);
    }
    table.printstd();

    Ok(())
}
