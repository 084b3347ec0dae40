//! Line-oriented interactive shell.
//!
//! Reads one command per line (stdin or a script file), maps it to an
//! [`InputEvent`], and prints every document the driver presents. The
//! terminal stays in cooked mode; a full-screen backend is deliberately out
//! of scope.

use std::fs;
use std::io::{self, BufRead, Write};

use sift_core::{InputEvent, Value};
use sift_runtime::Outcome;

use crate::app::{NEW_COUNT_KEY, STATION_KEY, SWITCH_KEY, Viewer};
use crate::cli::Cli;
use crate::error::{Result, ViewerError};

const HELP_TEXT: &str = "\
COMMANDS:
    rows N        Show the first N rows
    station NAME  Filter the subset to station NAME
    toggle        Flip the switch
    state         Print the session state as JSON
    help          Show this help
    quit          Exit";

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Rows(i64),
    Station(String),
    Toggle,
    State,
    Help,
    Quit,
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (head, rest) = line
        .split_once(char::is_whitespace)
        .map(|(h, r)| (h, r.trim()))
        .unwrap_or((line, ""));
    let command = match (head, rest) {
        ("rows", n) => Command::Rows(
            n.parse()
                .map_err(|_| ViewerError::bad_command(line))?,
        ),
        ("station", name) if !name.is_empty() => Command::Station(name.to_owned()),
        ("toggle", "") => Command::Toggle,
        ("state", "") => Command::State,
        ("help", "") => Command::Help,
        ("quit" | "exit" | "q", "") => Command::Quit,
        _ => return Err(ViewerError::bad_command(line)),
    };
    Ok(Some(command))
}

/// Drive the viewer from an input source until quit or end of input.
pub fn run(mut viewer: Viewer, cli: &Cli) -> Result<()> {
    let mut out = io::stdout().lock();

    let doc = viewer.driver.rerun()?;
    writeln!(out, "{doc}")?;

    let reader: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(io::BufReader::new(fs::File::open(path)?)),
        None => Box::new(io::BufReader::new(io::stdin())),
    };

    for line in reader.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err @ ViewerError::BadCommand { .. }) => {
                writeln!(out, "{err}")?;
                writeln!(out, "{HELP_TEXT}")?;
                continue;
            }
            Err(err) => return Err(err),
        };
        let event = match command {
            Command::Help => {
                writeln!(out, "{HELP_TEXT}")?;
                continue;
            }
            Command::State => {
                let snapshot = viewer.driver.session().snapshot();
                writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?;
                continue;
            }
            Command::Rows(value) => InputEvent::Slider {
                key: NEW_COUNT_KEY.into(),
                value,
            },
            Command::Station(name) => InputEvent::Select {
                key: STATION_KEY.into(),
                value: Value::Str(name),
            },
            Command::Toggle => {
                let current = viewer
                    .driver
                    .session()
                    .get(SWITCH_KEY)
                    .and_then(Value::as_bool)
                    .unwrap_or(false);
                InputEvent::Toggle {
                    key: SWITCH_KEY.into(),
                    value: !current,
                }
            }
            Command::Quit => InputEvent::Quit,
        };
        match viewer.driver.run_once(event)? {
            Outcome::Rendered(doc) => writeln!(out, "{doc}")?,
            Outcome::Quit => break,
        }
    }

    if cli.dump_state {
        let snapshot = viewer.driver.session().snapshot();
        writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows() {
        assert_eq!(parse_command("rows 10").unwrap(), Some(Command::Rows(10)));
        assert_eq!(parse_command("  rows   3 ").unwrap(), Some(Command::Rows(3)));
    }

    #[test]
    fn parses_station_with_spaces() {
        assert_eq!(
            parse_command("station Grove St PATH").unwrap(),
            Some(Command::Station("Grove St PATH".into()))
        );
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse_command("toggle").unwrap(), Some(Command::Toggle));
        assert_eq!(parse_command("state").unwrap(), Some(Command::State));
        assert_eq!(parse_command("help").unwrap(), Some(Command::Help));
        assert_eq!(parse_command("q").unwrap(), Some(Command::Quit));
        assert_eq!(parse_command("exit").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_command("").unwrap(), None);
        assert_eq!(parse_command("   ").unwrap(), None);
        assert_eq!(parse_command("# note").unwrap(), None);
    }

    #[test]
    fn bad_input_is_rejected() {
        assert!(parse_command("rows ten").is_err());
        assert!(parse_command("station").is_err());
        assert!(parse_command("frobnicate").is_err());
    }
}
