use crate::infra::timestamp_for;
use chrono::Local;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use pams::export::ExportBundle;
use pams::questionnaire::{
    question, AnswerSheet, AssessmentReport, Question, Rating, ReportOptions, ScaleCatalog,
    QUESTION_COUNT,
};
use pams::render::{render_questionnaire, render_report};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::warn;

/// One change or query against the session, however it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionAction {
    Answer { id: u8, rating: Rating },
    Clear(u8),
    ClearAll,
    Questions,
    Missing,
    Results,
    Export(PathBuf),
}

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AnswerRemaining,
    AnswerOne,
    ClearOne,
    ClearAll,
    Questions,
    Missing,
    Results,
    Export,
    Quit,
}

impl MenuChoice {
    const fn ordered() -> [Self; 9] {
        [
            Self::AnswerRemaining,
            Self::AnswerOne,
            Self::ClearOne,
            Self::ClearAll,
            Self::Questions,
            Self::Missing,
            Self::Results,
            Self::Export,
            Self::Quit,
        ]
    }

    const fn label(self) -> &'static str {
        match self {
            Self::AnswerRemaining => "Answer unanswered items",
            Self::AnswerOne => "Answer or change one item",
            Self::ClearOne => "Clear one answer",
            Self::ClearAll => "Clear every answer",
            Self::Questions => "List the questionnaire",
            Self::Missing => "List unanswered items",
            Self::Results => "Show results",
            Self::Export => "Export JSON and CSV",
            Self::Quit => "Quit",
        }
    }
}

/// Answer state for the `fill` command plus where its exports go.
pub(crate) struct FillSession {
    answers: AnswerSheet,
    catalog: ScaleCatalog,
    options: ReportOptions,
    export_dir: PathBuf,
}

impl FillSession {
    pub(crate) fn new(answers: AnswerSheet, options: ReportOptions, export_dir: PathBuf) -> Self {
        Self {
            answers,
            catalog: ScaleCatalog::standard(),
            options,
            export_dir,
        }
    }

    pub(crate) fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    /// Applies `action`, writing feedback to `out`. Rejected input and failed
    /// exports are reported, never returned; only write errors on `out` are.
    pub(crate) fn apply<W: Write>(&mut self, action: SessionAction, out: &mut W) -> io::Result<()> {
        match action {
            SessionAction::Answer { id, rating } => match self.answers.answer(id, rating) {
                Ok(_) => writeln!(out, "{id}. -> {rating} ({})", rating.label())?,
                Err(err) => writeln!(out, "Error: {err}")?,
            },
            SessionAction::Clear(id) => {
                if question(id).is_none() {
                    writeln!(out, "Error: question {id} does not exist")?;
                } else if self.answers.clear(id).is_some() {
                    writeln!(out, "Cleared question {id}.")?;
                } else {
                    writeln!(out, "Question {id} was not answered.")?;
                }
            }
            SessionAction::ClearAll => {
                self.answers.clear_all();
                writeln!(out, "All answers cleared.")?;
            }
            SessionAction::Questions => write!(out, "{}", render_questionnaire(&self.answers))?,
            SessionAction::Missing => {
                let missing = self.answers.missing_ids();
                if missing.is_empty() {
                    writeln!(out, "Every question is answered.")?;
                } else {
                    let listed: Vec<String> = missing.iter().map(u8::to_string).collect();
                    writeln!(out, "Missing ({}): {}", missing.len(), listed.join(", "))?;
                }
            }
            SessionAction::Results => {
                let summary = self.report().summary(&self.options);
                write!(out, "{}", render_report(&summary, Local::now().date_naive()))?;
            }
            SessionAction::Export(dir) => {
                let report = self.report();
                let written = ExportBundle::render(&self.answers, &report, timestamp_for(None))
                    .and_then(|bundle| bundle.write_to_dir(&dir));
                match written {
                    Ok(paths) => {
                        for path in paths {
                            writeln!(out, "Wrote {}", path.display())?;
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, "session export failed");
                        writeln!(out, "Error: {err}")?;
                    }
                }
            }
        }
        Ok(())
    }

    fn report(&self) -> AssessmentReport {
        AssessmentReport::build(&self.catalog, &self.answers)
    }
}

/// Drives `session` from terminal prompts until the user quits or cancels.
pub(crate) fn run_interactive<W: Write>(session: &mut FillSession, out: &mut W) -> io::Result<()> {
    let theme = ColorfulTheme::default();
    let menu: Vec<&str> = MenuChoice::ordered().iter().map(|choice| choice.label()).collect();

    loop {
        let prompt = format!(
            "Kitöltött: {}/{}",
            session.answers().answered_count(),
            QUESTION_COUNT
        );
        let selection = match Select::with_theme(&theme)
            .with_prompt(prompt)
            .items(&menu)
            .default(0)
            .interact_opt()
        {
            Ok(Some(index)) => index,
            Ok(None) => break,
            Err(err) if is_cancelled(&err) => break,
            Err(err) => return Err(prompt_error(err)),
        };

        let action = match MenuChoice::ordered()[selection] {
            MenuChoice::Quit => break,
            MenuChoice::AnswerRemaining => {
                for id in session.answers().missing_ids() {
                    let Some(item) = question(id) else {
                        continue;
                    };
                    match ask_rating(&theme, item, None)? {
                        Some(rating) => session.apply(SessionAction::Answer { id, rating }, out)?,
                        None => break,
                    }
                }
                continue;
            }
            MenuChoice::AnswerOne => {
                let id = ask_question_id(&theme)?;
                let Some(item) = question(id) else {
                    continue;
                };
                match ask_rating(&theme, item, session.answers().get(id))? {
                    Some(rating) => SessionAction::Answer { id, rating },
                    None => continue,
                }
            }
            MenuChoice::ClearOne => SessionAction::Clear(ask_question_id(&theme)?),
            MenuChoice::ClearAll => SessionAction::ClearAll,
            MenuChoice::Questions => SessionAction::Questions,
            MenuChoice::Missing => SessionAction::Missing,
            MenuChoice::Results => SessionAction::Results,
            MenuChoice::Export => {
                let dir: String = Input::with_theme(&theme)
                    .with_prompt("Export directory")
                    .default(session.export_dir.display().to_string())
                    .interact_text()
                    .map_err(prompt_error)?;
                SessionAction::Export(PathBuf::from(dir))
            }
        };
        session.apply(action, out)?;
        out.flush()?;
    }
    Ok(())
}

/// Six-way choice for one item; `None` when the user backs out with Esc.
fn ask_rating(
    theme: &ColorfulTheme,
    item: &Question,
    current: Option<Rating>,
) -> io::Result<Option<Rating>> {
    let labels: Vec<String> = Rating::all()
        .map(|rating| format!("{} = {}", rating.value(), rating.label()))
        .collect();
    let default = current.map_or(0, |rating| usize::from(rating.value() - Rating::MIN));

    let selection = match Select::with_theme(theme)
        .with_prompt(format!("{}. {}", item.id, item.text))
        .items(&labels)
        .default(default)
        .interact_opt()
    {
        Ok(selection) => selection,
        Err(err) if is_cancelled(&err) => None,
        Err(err) => return Err(prompt_error(err)),
    };

    Ok(selection.and_then(|index| Rating::all().nth(index)))
}

fn ask_question_id(theme: &ColorfulTheme) -> io::Result<u8> {
    Input::<u8>::with_theme(theme)
        .with_prompt(format!("Question number (1-{QUESTION_COUNT})"))
        .validate_with(|id: &u8| -> Result<(), String> {
            match question(*id) {
                Some(_) => Ok(()),
                None => Err(format!("question {id} does not exist")),
            }
        })
        .interact_text()
        .map_err(prompt_error)
}

fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == io::ErrorKind::Interrupted)
}

fn prompt_error(err: dialoguer::Error) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err)
}
