use crate::cli::{ExportArgs, FillArgs, PrintArgs, ScoreArgs};
use crate::infra::timestamp_for;
use crate::session::{run_interactive, FillSession};
use chrono::Local;
use pams::config::AppConfig;
use pams::error::AppError;
use pams::export::{load_answers, ExportBundle};
use pams::questionnaire::{AnswerSheet, AssessmentReport, ScaleCatalog};
use pams::render::{render_page, render_questionnaire, render_report, PageOptions};
use pams::telemetry;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

fn prepare() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config)
}

pub(crate) fn run_questions() -> Result<(), AppError> {
    prepare()?;
    print!("{}", render_questionnaire(&AnswerSheet::new()));
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = prepare()?;
    let answers = load_answers(&args.answers)?;
    let report = AssessmentReport::build(&ScaleCatalog::standard(), &answers);

    let mut options = config.assessment.report_options();
    if args.list_missing {
        options.missing_list_threshold = usize::MAX;
    }

    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    print!("{}", render_report(&report.summary(&options), date));
    Ok(())
}

pub(crate) fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let config = prepare()?;
    let answers = load_answers(&args.answers)?;
    let report = AssessmentReport::build(&ScaleCatalog::standard(), &answers);
    let bundle = ExportBundle::render(&answers, &report, timestamp_for(args.date))?;

    let dir = args.out_dir.unwrap_or(config.assessment.export_dir);
    for path in bundle.write_to_dir(&dir)? {
        println!("{}", path.display());
    }
    Ok(())
}

pub(crate) fn run_print(args: PrintArgs) -> Result<(), AppError> {
    let config = prepare()?;
    let answers = load_answers(&args.answers)?;
    let report = AssessmentReport::build(&ScaleCatalog::standard(), &answers);
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let html = render_page(
        &answers,
        &report.summary(&config.assessment.report_options()),
        date,
        &PageOptions::print_only(),
    );

    match args.output {
        Some(path) => write_page(&path, &html)?,
        None => print!("{html}"),
    }
    Ok(())
}

fn write_page(path: &Path, html: &str) -> Result<(), AppError> {
    fs::write(path, html).map_err(|err| {
        warn!(path = %path.display(), error = %err, "print failed");
        AppError::Io(err)
    })?;
    info!(path = %path.display(), "wrote printable results");
    Ok(())
}

pub(crate) fn run_fill(args: FillArgs) -> Result<(), AppError> {
    let config = prepare()?;
    let answers = match args.answers {
        Some(path) => load_answers(path)?,
        None => AnswerSheet::new(),
    };

    let mut session = FillSession::new(
        answers,
        config.assessment.report_options(),
        config.assessment.export_dir,
    );
    let mut stdout = io::stdout();
    run_interactive(&mut session, &mut stdout)?;
    Ok(())
}
