use std::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::DatabaseError;

/// Command words understood by the shell.
///
/// Matching is case-insensitive, so `ADD`, `Add` and `add` are the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Keyword {
    List,
    Use,
    Show,
    Info,
    Select,
    Add,
    Edit,
    Delete,
    Help,
    #[strum(to_string = "exit", serialize = "quit")]
    Exit,
}

impl Keyword {
    /// Argument synopsis shown in the help listing.
    pub fn usage(self) -> &'static str {
        match self {
            Self::Use => "<profile>",
            Self::Select => "<row>",
            Self::Edit | Self::Delete => "[row]",
            _ => "",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::List => "choose a database system from the list",
            Self::Use => "switch to a database system by name",
            Self::Show => "print the records of the active system",
            Self::Info => "explain why this system fits its use case",
            Self::Select => "select a row for edit/delete",
            Self::Add => "create a new record",
            Self::Edit => "update the selected (or given) row",
            Self::Delete => "delete the selected (or given) row",
            Self::Help => "show this help",
            Self::Exit => "leave the shell (also `quit`)",
        }
    }
}

/// One parsed line of shell input.
///
/// Row numbers are typed 1-based, as displayed, and stored 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Use(String),
    Show,
    Info,
    Select(usize),
    Add,
    Edit(Option<usize>),
    Delete(Option<usize>),
    Help,
    Exit,
}

fn parse_row(arg: &str) -> Result<usize, DatabaseError> {
    match arg.parse::<usize>() {
        Ok(row) if row > 0 => Ok(row - 1),
        _ => Err(DatabaseError::InvalidCommand(format!(
            "`{arg}` is not a row number"
        ))),
    }
}

fn optional_row(arg: &str) -> Result<Option<usize>, DatabaseError> {
    if arg.is_empty() {
        Ok(None)
    } else {
        parse_row(arg).map(Some)
    }
}

impl FromStr for Command {
    type Err = DatabaseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        if word.is_empty() {
            return Err(DatabaseError::InvalidCommand("empty input".to_string()));
        }

        let keyword = Keyword::from_str(word)
            .map_err(|_| DatabaseError::InvalidCommand(format!("unknown command `{word}`")))?;

        let takes_args = matches!(
            keyword,
            Keyword::Use | Keyword::Select | Keyword::Edit | Keyword::Delete
        );
        if !takes_args && !rest.is_empty() {
            return Err(DatabaseError::InvalidCommand(format!(
                "`{keyword}` takes no arguments"
            )));
        }

        let command = match keyword {
            Keyword::List => Command::List,
            Keyword::Use if rest.is_empty() => {
                return Err(DatabaseError::InvalidCommand(
                    "`use` needs a profile name".to_string(),
                ));
            }
            Keyword::Use => Command::Use(rest.to_string()),
            Keyword::Show => Command::Show,
            Keyword::Info => Command::Info,
            Keyword::Select => Command::Select(parse_row(rest)?),
            Keyword::Add => Command::Add,
            Keyword::Edit => Command::Edit(optional_row(rest)?),
            Keyword::Delete => Command::Delete(optional_row(rest)?),
            Keyword::Help => Command::Help,
            Keyword::Exit => Command::Exit,
        };

        Ok(command)
    }
}

/// The help listing, one line per command.
pub fn help_text() -> String {
    Keyword::iter()
        .map(|keyword| {
            let synopsis = format!("{keyword} {}", keyword.usage());
            format!("  {: <14} {}", synopsis.trim_end(), keyword.description())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
