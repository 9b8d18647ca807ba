use crate::prelude::*;
use clap::Parser;

mod detect;
mod error;
mod input;
mod languages;
mod prelude;
mod review;
mod serve;
mod upstream;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "LLM-powered code review from the terminal or over HTTP"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "CODEREV_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Review a code snippet through the upstream completion API
    Review(crate::review::ReviewOptions),

    /// Run the HTTP relay exposing POST /api/review
    Serve(crate::serve::ServeOptions),

    /// Guess the language of a code snippet
    Detect(crate::detect::DetectOptions),

    /// List the languages the detection heuristic knows about
    Languages(crate::languages::LanguagesOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Review(options) => crate::review::run(options, app.global).await,
        SubCommands::Serve(options) => crate::serve::run(options, app.global).await,
        SubCommands::Detect(options) => crate::detect::run(options, app.global).await,
        SubCommands::Languages(options) => crate::languages::run(options, app.global),
    }
}
