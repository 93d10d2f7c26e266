//! Line-oriented command scripts driven against a live list.
//!
//! One command per line. Positions are 1-based over every item in list
//! order, hidden or not. Blank lines and `# ` comments are skipped; a bare
//! `#/...` is never a comment because routes start with `#`.

use crate::cli::output::Snapshot;
use crate::controller::Key;
use crate::dom::TemplateError;
use crate::dom::ItemId;
use crate::session::Session;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: `{command}` needs {what}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        what: &'static str,
    },
    #[error("line {line}: `{text}` is not a position")]
    BadPosition { line: usize, text: String },
    #[error("line {line}: no item at position {position}")]
    NoSuchItem { line: usize, position: usize },
    #[error("line {line}: {source}")]
    Template {
        line: usize,
        #[source]
        source: TemplateError,
    },
}

/// A parsed script command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(usize),
    Complete(usize),
    Edit(usize, String),
    Destroy(usize),
    ToggleAll,
    ClearCompleted,
    Route(String),
    Show,
}

/// Parse one line. `Ok(None)` for blank lines and comments.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Command>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line == "#" || line.starts_with("# ") {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    let position = |command: &'static str, text: &str| -> Result<usize, ScriptError> {
        if text.is_empty() {
            return Err(ScriptError::MissingArgument {
                line: line_no,
                command,
                what: "a position",
            });
        }
        match text.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ScriptError::BadPosition {
                line: line_no,
                text: text.to_string(),
            }),
        }
    };
    let text = |command: &'static str, text: &str| -> Result<String, ScriptError> {
        if text.is_empty() {
            Err(ScriptError::MissingArgument {
                line: line_no,
                command,
                what: "text",
            })
        } else {
            Ok(text.to_string())
        }
    };

    let cmd = match word {
        "add" => Command::Add(text("add", rest)?),
        "toggle" => Command::Toggle(position("toggle", rest)?),
        "complete" => Command::Complete(position("complete", rest)?),
        "destroy" => Command::Destroy(position("destroy", rest)?),
        "edit" => {
            let (pos, new_text) = match rest.split_once(char::is_whitespace) {
                Some((p, t)) => (p, t.trim()),
                None => (rest, ""),
            };
            Command::Edit(position("edit", pos)?, text("edit", new_text)?)
        }
        "toggle-all" => Command::ToggleAll,
        "clear-completed" => Command::ClearCompleted,
        "route" => Command::Route(rest.to_string()),
        "show" => Command::Show,
        other => {
            return Err(ScriptError::UnknownCommand {
                line: line_no,
                command: other.to_string(),
            });
        }
    };
    Ok(Some(cmd))
}

/// Run every line of `script` against the session. Returns one snapshot
/// per `show` plus a final snapshot of the end state.
pub fn run_script(session: &mut Session, script: &str) -> Result<Vec<Snapshot>, ScriptError> {
    let mut snapshots = Vec::new();
    for (i, line) in script.lines().enumerate() {
        let line_no = i + 1;
        let Some(cmd) = parse_line(line_no, line)? else {
            continue;
        };
        tracing::debug!(line = line_no, ?cmd, "script command");
        if cmd == Command::Show {
            session.settle();
            snapshots.push(Snapshot::capture(&session.list));
            continue;
        }
        apply(session, line_no, cmd)?;
        session.settle();
    }
    snapshots.push(Snapshot::capture(&session.list));
    Ok(snapshots)
}

fn apply(session: &mut Session, line: usize, cmd: Command) -> Result<(), ScriptError> {
    let list = &mut session.list;
    match cmd {
        Command::Add(text) => {
            list.set_new_todo(&text);
            list.new_todo_keydown(Key::Enter)
                .map_err(|source| ScriptError::Template { line, source })?;
            session.mark_stale();
        }
        Command::Toggle(pos) => {
            let id = item_at(session, line, pos)?;
            if let Some(mut item) = session.list.item(id) {
                item.toggle_completed();
            }
        }
        Command::Complete(pos) => {
            let id = item_at(session, line, pos)?;
            if let Some(mut item) = session.list.item(id) {
                item.set_completed(true);
            }
        }
        Command::Edit(pos, text) => {
            let id = item_at(session, line, pos)?;
            if let Some(mut item) = session.list.item(id) {
                item.edit();
                item.editor_mut().set_value(&text);
            }
            session.list.commit_edit(id);
        }
        Command::Destroy(pos) => {
            let id = item_at(session, line, pos)?;
            if let Some(item) = session.list.item(id) {
                item.destroy();
            }
        }
        Command::ToggleAll => list.toggle_all(),
        Command::ClearCompleted => {
            list.clear_completed();
        }
        Command::Route(hash) => {
            list.navigate(&hash);
        }
        Command::Show => {}
    }
    Ok(())
}

fn item_at(session: &Session, line: usize, position: usize) -> Result<ItemId, ScriptError> {
    session
        .list
        .views()
        .get(position - 1)
        .map(|v| v.id)
        .ok_or(ScriptError::NoSuchItem { line, position })
}
