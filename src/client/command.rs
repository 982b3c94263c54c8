// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Terminal command parsing for the interactive client.

/// One line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Reload the activity list.
    List,
    /// Fill in the signup form and submit it.
    Signup { email: String, activity: String },
    /// Click the unregister control on a participant row.
    Unregister { email: String, activity: String },
    /// Print the page as text.
    Show,
    /// Print the page as HTML.
    Html,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  list                               reload activities
  signup <email> <activity name>     sign up for an activity
  unregister <email> <activity name> remove a participant
  show                               print the page
  html                               print the page as HTML
  quit";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty input")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("usage: {0} <email> <activity name>")]
    MissingArguments(&'static str),
}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "list" | "reload" => Ok(Command::List),
            "show" => Ok(Command::Show),
            "html" => Ok(Command::Html),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "signup" => {
                let (email, activity) =
                    email_and_activity(rest).ok_or(CommandError::MissingArguments("signup"))?;
                Ok(Command::Signup { email, activity })
            }
            "unregister" => {
                let (email, activity) = email_and_activity(rest)
                    .ok_or(CommandError::MissingArguments("unregister"))?;
                Ok(Command::Unregister { email, activity })
            }
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Split `<email> <activity name...>`; the name may contain spaces.
fn email_and_activity(rest: &str) -> Option<(String, String)> {
    let (email, activity) = rest.split_once(char::is_whitespace)?;
    let activity = activity.trim();
    if activity.is_empty() {
        return None;
    }
    Some((email.to_string(), activity.to_string()))
}
