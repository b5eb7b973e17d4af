//! Search runs and the line-oriented interactive form.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use vendorhub_core::Field;
use vendorhub_search::{render, Dashboard, RatingSource, SearchController, Submission};

use crate::output::{format_screen, trigger_notice};

/// One parsed line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionCommand {
    Set { field: Field, value: String },
    Submit,
    Show,
    Help,
    Quit,
    Blank,
    Unknown(String),
}

/// Parses one input line.
///
/// For field commands everything after the first space is the value,
/// verbatim; a bare `product` clears the field.
pub(crate) fn parse_command(line: &str) -> SessionCommand {
    let line = line.trim_end_matches(['\r', '\n']);
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));

    if let Ok(field) = word.parse::<Field>() {
        return SessionCommand::Set {
            field,
            value: rest.to_string(),
        };
    }
    match word.trim() {
        "" => SessionCommand::Blank,
        "submit" => SessionCommand::Submit,
        "show" => SessionCommand::Show,
        "help" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => SessionCommand::Unknown(other.to_string()),
    }
}

pub(crate) const HELP: &str = "\
commands:
  product <text>    set the product field
  quantity <text>   set the quantity field
  location <text>   set the location field
  submit            search for suppliers
  show              redraw the form and results
  quit              leave the session
";

/// Runs one search through the trigger, printing the loading screen while
/// the request is in flight and the settled screen afterwards.
///
/// A disabled trigger prints its notice instead and sends nothing.
pub(crate) async fn trigger_search<W, R>(
    controller: &mut SearchController,
    ratings: &mut R,
    out: &mut W,
) -> anyhow::Result<Submission>
where
    W: Write,
    R: RatingSource + ?Sized,
{
    let dashboard = Dashboard::demo();
    if let Some(notice) = trigger_notice(controller) {
        writeln!(out, "{notice}")?;
        return Ok(Submission::Skipped);
    }
    let Some(pending) = controller.begin_search() else {
        return Ok(Submission::Skipped);
    };

    write!(out, "{}", format_screen(&render(controller.state(), ratings), &dashboard))?;
    out.flush()?;

    let outcome = controller.client().find_suppliers(pending.request()).await;
    let submission = controller.settle(pending, outcome);

    write!(out, "{}", format_screen(&render(controller.state(), ratings), &dashboard))?;
    Ok(submission)
}

fn write_form<W: Write>(controller: &SearchController, out: &mut W) -> std::io::Result<()> {
    let form = &controller.state().form;
    for field in Field::ALL {
        let label = format!("{field}:");
        writeln!(out, "{label:<9} {:?}", form.get(field))?;
    }
    writeln!(out, "[{}]", controller.trigger_label())
}

/// Reads commands until `quit` or end of input.
pub(crate) async fn run_session<I, W, R>(
    controller: &mut SearchController,
    ratings: &mut R,
    input: I,
    out: &mut W,
) -> anyhow::Result<()>
where
    I: AsyncBufRead + Unpin,
    W: Write,
    R: RatingSource + ?Sized,
{
    let mut lines = input.lines();
    write!(out, "{HELP}")?;

    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            SessionCommand::Set { field, value } => controller.update_field(field, value),
            SessionCommand::Submit => {
                trigger_search(controller, ratings, out).await?;
            }
            SessionCommand::Show => {
                write_form(controller, out)?;
                let view = render(controller.state(), ratings);
                write!(out, "{}", format_screen(&view, &Dashboard::demo()))?;
            }
            SessionCommand::Help => write!(out, "{HELP}")?,
            SessionCommand::Quit => break,
            SessionCommand::Blank => {}
            SessionCommand::Unknown(word) => {
                writeln!(out, "unknown command '{word}' (type 'help')")?;
            }
        }
        out.flush()?;
    }
    Ok(())
}
