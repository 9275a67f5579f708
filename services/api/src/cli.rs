use crate::demo::{run_demo, run_score, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand, ValueEnum};
use virtual_narrative::error::AppError;
use virtual_narrative::workflows::assessment::DocumentFormat;

#[derive(Parser, Debug)]
#[command(
    name = "The Virtual Narrative",
    about = "Score data maturity assessments and serve the assessment API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a CSV of questionnaire answers and print the report
    Score(ScoreArgs),
    /// Walk a sample respondent through the full assessment flow
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

/// How reports are printed on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl OutputFormat {
    /// Renderer for document formats; `None` means raw JSON.
    pub(crate) fn document_format(self) -> Option<DocumentFormat> {
        match self {
            Self::Text => Some(DocumentFormat::Text),
            Self::Markdown => Some(DocumentFormat::Markdown),
            Self::Json => None,
        }
    }
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}
