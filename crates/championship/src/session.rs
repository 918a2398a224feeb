//! Interactive match lookup session
//!
//! The session is a two-state machine. [`step`] performs one transition:
//! ask whether to look up a match, read the answer, and either query the
//! results, finish, or complain and ask again. Input and output are passed
//! in, so the whole session runs against in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use crate::error::QueryError;
use crate::results::ChampionshipResults;

pub const ANSWER_PROMPT: &str = "Show match details? (y/n): ";
pub const QUERY_PROMPT: &str = "Enter two team names separated by a comma and a space: ";
pub const MALFORMED_QUERY_MESSAGE: &str = "Check the query format!";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Oops! Something broke:";
pub const INVALID_ANSWER_MESSAGE: &str = "Invalid answer!";

/// Accepted "yes" answers, compared after trimming and lowercasing
pub const YES_ANSWERS: [&str; 4] = ["y", "yes", "д", "да"];
/// Accepted "no" answers, compared after trimming and lowercasing
pub const NO_ANSWERS: [&str; 4] = ["n", "no", "н", "нет"];

/// Separator between the two team names of a query
pub const QUERY_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for a yes/no answer
    Prompting,
    /// Terminal
    Done,
}

/// A parsed yes/no answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Invalid,
}

impl Answer {
    pub fn parse(input: &str) -> Self {
        let answer = input.trim().to_lowercase();
        if YES_ANSWERS.contains(&answer.as_str()) {
            Answer::Yes
        } else if NO_ANSWERS.contains(&answer.as_str()) {
            Answer::No
        } else {
            Answer::Invalid
        }
    }
}

/// Split a query line into exactly two team names
pub fn parse_query(line: &str) -> Result<(String, String), QueryError> {
    let parts: Vec<&str> = line.split(QUERY_SEPARATOR).collect();
    match parts.as_slice() {
        [team1, team2] => Ok((team1.to_string(), team2.to_string())),
        _ => Err(QueryError::Malformed { tokens: parts.len() }),
    }
}

/// Perform one transition of the session.
///
/// Only failures to write `output` are returned as errors; everything that
/// goes wrong on the input side is reported to the user instead.
pub fn step<R: BufRead, W: Write>(
    state: SessionState,
    results: &ChampionshipResults,
    input: &mut R,
    output: &mut W,
) -> io::Result<SessionState> {
    if state == SessionState::Done {
        return Ok(SessionState::Done);
    }

    write!(output, "{}", ANSWER_PROMPT)?;
    output.flush()?;

    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(0) => {
            // Input closed, nobody is left to answer
            writeln!(output)?;
            return Ok(SessionState::Done);
        }
        Ok(_) => {}
        // The undecodable line is already consumed
        Err(err) if err.kind() == io::ErrorKind::InvalidData => {
            tracing::debug!(error = %err, "undecodable answer");
            writeln!(output, "\t{}", INVALID_ANSWER_MESSAGE)?;
            return Ok(SessionState::Prompting);
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to read answer, ending session");
            writeln!(output, "\t{}", UNEXPECTED_ERROR_MESSAGE)?;
            writeln!(output, "\t{}", err)?;
            return Ok(SessionState::Done);
        }
    }

    match Answer::parse(&answer) {
        Answer::Yes => {
            write!(output, "{}", QUERY_PROMPT)?;
            output.flush()?;

            match read_query(input) {
                Ok((team1, team2)) => {
                    let description = results.describe(&team1, &team2);
                    tracing::debug!(%team1, %team2, result = %description, "match lookup");
                    writeln!(output, "\t{}", description)?;
                }
                Err(QueryError::Malformed { tokens }) => {
                    tracing::debug!(tokens, "malformed match query");
                    writeln!(output, "\t{}", MALFORMED_QUERY_MESSAGE)?;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "failed to read match query");
                    writeln!(output, "\t{}", UNEXPECTED_ERROR_MESSAGE)?;
                    writeln!(output, "\t{}", err)?;
                }
            }
            Ok(SessionState::Prompting)
        }
        Answer::No => Ok(SessionState::Done),
        Answer::Invalid => {
            writeln!(output, "\t{}", INVALID_ANSWER_MESSAGE)?;
            Ok(SessionState::Prompting)
        }
    }
}

/// Run the session from `Prompting` until it reaches `Done`
pub fn run_session<R: BufRead, W: Write>(
    results: &ChampionshipResults,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    let mut state = SessionState::Prompting;
    while state != SessionState::Done {
        state = step(state, results, &mut input, &mut output)?;
    }
    Ok(())
}

fn read_query<R: BufRead>(input: &mut R) -> Result<(String, String), QueryError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(QueryError::InputEnded);
    }
    parse_query(trim_line_ending(&line))
}

fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
