//! Interactive terminal front-end.

use std::io::{self, BufRead, Write};

use miette::Diagnostic;
use tracing::debug;

use crate::{App, Config, DatabaseError, db::session::Refresh};

pub mod command;
pub mod terminal;

pub use command::{Command, Keyword, help_text};
pub use terminal::TerminalPresenter;

/// Runs the read-eval-print loop until `exit` or end of input.
///
/// Only I/O failures on the prompt end the loop early; everything else is
/// reported to the user and the loop carries on.
pub fn run<R: BufRead, W: Write>(
    app: &mut App<TerminalPresenter<R, W>>,
    config: &Config,
) -> io::Result<()> {
    app.presenter_mut()
        .write_line("Type `help` to see the available commands.");

    while let Some(line) = app.presenter_mut().read_line(&config.prompt)? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                report(app, &err);
                continue;
            }
        };
        debug!(?command, "shell command");

        match command {
            Command::List => app.choose_profile(),
            Command::Use(name) => {
                let resolved = resolve_profile(app, &name);
                app.select_profile(&resolved);
            }
            Command::Show => app.refresh(Refresh::Schema),
            Command::Info => app.show_info(),
            Command::Select(row) => {
                select_row(app, row);
            }
            Command::Add => app.add_record(),
            Command::Edit(row) => {
                if select_given(app, row) {
                    app.edit_record();
                }
            }
            Command::Delete(row) => {
                if select_given(app, row) {
                    app.delete_record();
                }
            }
            Command::Help => app.presenter_mut().write_line(&help_text()),
            Command::Exit => break,
        }
    }

    Ok(())
}

/// Maps a case-insensitive name onto the session's spelling.
fn resolve_profile<R: BufRead, W: Write>(
    app: &App<TerminalPresenter<R, W>>,
    name: &str,
) -> String {
    app.session()
        .profile_names()
        .into_iter()
        .find(|candidate| candidate.eq_ignore_ascii_case(name))
        .unwrap_or(name)
        .to_string()
}

/// Selects `row` if it exists in the active profile.
fn select_row<R: BufRead, W: Write>(
    app: &mut App<TerminalPresenter<R, W>>,
    row: usize,
) -> bool {
    let len = match app.session().current_records() {
        Ok(records) => records.len(),
        Err(err) => {
            report(app, &err);
            return false;
        }
    };

    if row >= len {
        let err = DatabaseError::InvalidCommand(format!(
            "row {} does not exist; the table has {len} rows",
            row + 1
        ));
        report(app, &err);
        return false;
    }

    app.presenter_mut().select(row);
    true
}

/// Selects `row` when one was typed; otherwise keeps the current selection.
fn select_given<R: BufRead, W: Write>(
    app: &mut App<TerminalPresenter<R, W>>,
    row: Option<usize>,
) -> bool {
    match row {
        Some(row) => select_row(app, row),
        None => true,
    }
}

fn report<R: BufRead, W: Write>(app: &mut App<TerminalPresenter<R, W>>, err: &DatabaseError) {
    let presenter = app.presenter_mut();
    presenter.write_line(&format!("! {err}"));
    if let Some(help) = err.help() {
        presenter.write_line(&format!("  help: {help}"));
    }
}
