//! Line-oriented compose session.
//!
//! Each input line is one edit on a [`Draft`]. Paragraphs are addressed by the
//! local ids shown by `show`. The draft is saved on `save` or at end of input;
//! a failed save keeps the draft and the session goes on.

use super::print::{render_draft, render_messages};
use folio::api::CmdResult;
use folio::draft::{Draft, ParagraphId};
use folio::error::{FolioError, Result};
use std::io::{self, BufRead, Write};

pub(super) const HELP: &str = "\
Commands:
  title TEXT        set the page title
  add TEXT          append a paragraph
  set ID TEXT       replace the text of paragraph ID
  rm ID             remove paragraph ID
  mv SRC DST        move paragraph SRC to where DST is
  show              print the draft
  save              save the page and finish
  abort             discard the draft
  help              this text
End of input saves.
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ComposeCommand {
    Title(String),
    Add(String),
    Set(ParagraphId, String),
    Remove(ParagraphId),
    Move(ParagraphId, ParagraphId),
    Show,
    Save,
    Abort,
    Help,
}

#[derive(Debug)]
pub(super) enum Outcome {
    Saved(CmdResult),
    Aborted,
    /// Input ended and the final save failed.
    Unsaved(FolioError),
}

fn parse_id(token: Option<&str>) -> std::result::Result<ParagraphId, String> {
    let token = token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| "missing paragraph id".to_string())?;
    token
        .parse::<u32>()
        .map(ParagraphId)
        .map_err(|_| format!("not a paragraph id: {}", token))
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub(super) fn parse_line(line: &str) -> std::result::Result<Option<ComposeCommand>, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    let command = match word {
        "title" => ComposeCommand::Title(rest.to_string()),
        "add" => ComposeCommand::Add(rest.to_string()),
        "set" => {
            let rest = rest.trim_start();
            let (id, text) = rest
                .split_once(char::is_whitespace)
                .map(|(id, text)| (id, text.trim_start()))
                .unwrap_or((rest, ""));
            ComposeCommand::Set(parse_id(Some(id))?, text.to_string())
        }
        "rm" => ComposeCommand::Remove(parse_id(rest.split_whitespace().next())?),
        "mv" => {
            let mut ids = rest.split_whitespace();
            let source = parse_id(ids.next())?;
            let target = parse_id(ids.next())?;
            ComposeCommand::Move(source, target)
        }
        "show" | "ls" => ComposeCommand::Show,
        "save" => ComposeCommand::Save,
        "abort" | "quit" => ComposeCommand::Abort,
        "help" | "?" => ComposeCommand::Help,
        other => return Err(format!("unknown command: {} (try `help`)", other)),
    };
    Ok(Some(command))
}

fn try_save<W: Write>(
    out: &mut W,
    draft: &Draft,
    save: &mut impl FnMut(&Draft) -> Result<CmdResult>,
) -> io::Result<std::result::Result<CmdResult, FolioError>> {
    match save(&*draft) {
        Ok(result) => {
            write!(out, "{}", render_messages(&result.messages))?;
            Ok(Ok(result))
        }
        Err(e) => {
            writeln!(out, "Error: {}", e)?;
            Ok(Err(e))
        }
    }
}

/// Drives a session until `save` succeeds, `abort`, or end of input.
pub(super) fn run_session<R, W, F>(
    mut input: R,
    out: &mut W,
    draft: &mut Draft,
    interactive: bool,
    mut save: F,
) -> io::Result<Outcome>
where
    R: BufRead,
    W: Write,
    F: FnMut(&Draft) -> Result<CmdResult>,
{
    if interactive {
        write!(out, "{}", HELP)?;
    }

    let mut line = String::new();
    loop {
        if interactive {
            write!(out, "> ")?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "{}", message)?;
                continue;
            }
        };

        match command {
            ComposeCommand::Title(title) => draft.set_title(title),
            ComposeCommand::Add(text) => {
                let id = draft.append(text);
                if interactive {
                    writeln!(out, "added [{}]", id)?;
                }
            }
            ComposeCommand::Set(id, text) => draft.update(id, text),
            ComposeCommand::Remove(id) => draft.remove(id),
            ComposeCommand::Move(source, target) => draft.reorder(source, target),
            ComposeCommand::Show => write!(out, "{}", render_draft(draft))?,
            ComposeCommand::Help => write!(out, "{}", HELP)?,
            ComposeCommand::Abort => {
                writeln!(out, "Draft discarded.")?;
                return Ok(Outcome::Aborted);
            }
            ComposeCommand::Save => {
                if let Ok(result) = try_save(out, draft, &mut save)? {
                    return Ok(Outcome::Saved(result));
                }
                writeln!(out, "Draft kept; `save` again to retry.")?;
            }
        }
    }

    if draft.title().is_empty() && draft.is_empty() {
        writeln!(out, "Nothing to save.")?;
        return Ok(Outcome::Aborted);
    }

    match save(&*draft) {
        Ok(result) => {
            write!(out, "{}", render_messages(&result.messages))?;
            Ok(Outcome::Saved(result))
        }
        Err(e) => Ok(Outcome::Unsaved(e)),
    }
}
