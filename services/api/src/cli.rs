use crate::commands::{run_export, run_fill, run_print, run_questions, run_score};
use crate::server;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use pams::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pams",
    about = "Fill in, score and export the PAMS management skills questionnaire",
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
    /// Print the 84 questionnaire items grouped by section
    Questions,
    /// Score a saved answer file and print the grouped results
    Score(ScoreArgs),
    /// Write the JSON document and both CSV tables for an answer file
    Export(ExportArgs),
    /// Render the printable HTML results page
    Print(PrintArgs),
    /// Answer the questionnaire interactively
    Fill(FillArgs),
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

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Answers as CSV (`id,text,answer`) or JSON (`.json`)
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// List every unanswered item, not only the last few
    #[arg(long)]
    pub(crate) list_missing: bool,
    /// Date printed on the report (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// Answers as CSV (`id,text,answer`) or JSON (`.json`)
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Target directory (defaults to PAMS_EXPORT_DIR)
    #[arg(long)]
    pub(crate) out_dir: Option<PathBuf>,
    /// Date stamped into file names (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct PrintArgs {
    /// Answers as CSV (`id,text,answer`) or JSON (`.json`)
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Write the HTML here instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Date printed on the page (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct FillArgs {
    /// Resume from a previously exported answer file
    #[arg(long)]
    pub(crate) answers: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Questions => run_questions(),
        Command::Score(args) => run_score(args),
        Command::Export(args) => run_export(args),
        Command::Print(args) => run_print(args),
        Command::Fill(args) => run_fill(args),
    }
}
