use itertools::Itertools;
use tracing::warn;

#[cfg(feature = "json")]
use serde::Serialize;

use crate::errors::{ParseError, ParseFailure};
use crate::types::fstr;

use super::tokens::{tokenize, Token};
use super::Command;

/// One parsed drawing instruction: a command and exactly `command.arity()`
/// numeric parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct Segment {
    command: Command,
    data: Vec<f64>,
}

impl Segment {
    /// Build a segment, checking `data` holds exactly the parameters `command` takes.
    pub fn new(command: Command, data: Vec<f64>) -> Result<Self, ParseError> {
        if data.len() != command.arity() {
            return Err(ParseError::WrongArity {
                command,
                expected: command.arity(),
                found: data.len(),
            });
        }
        Ok(Self { command, data })
    }

    /// Caller guarantees `data.len() == command.arity()`.
    pub(crate) fn from_parts(command: Command, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), command.arity());
        Self { command, data }
    }

    pub fn command(&self) -> Command {
        self.command
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// The command letter of this segment.
    pub fn key(&self) -> char {
        self.command.key()
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command)?;
        if !self.data.is_empty() {
            write!(f, " {}", self.data.iter().map(|v| fstr(*v)).join(" "))?;
        }
        Ok(())
    }
}

/// Parse path data into segments.
///
/// On failure the returned `ParseFailure` holds whatever segments were read
/// before the fault; a tokenization failure has no partial segments.
pub fn parse_path(data: &str) -> Result<Vec<Segment>, ParseFailure> {
    let tokens = tokenize(data).map_err(|error| {
        warn!("{error}");
        ParseFailure {
            error,
            partial: Vec::new(),
        }
    })?;
    parse_tokens(&tokens)
}

/// Group a token stream into segments.
///
/// The stream ends at the first `Token::End`, or at the end of `tokens` if
/// there is none. Path data must start with a moveto; if it doesn't, it is
/// treated as though it were preceded by `M0,0`.
pub fn parse_tokens(tokens: &[Token]) -> Result<Vec<Segment>, ParseFailure> {
    match tokens.first() {
        None | Some(Token::End) => return Ok(Vec::new()),
        Some(Token::Command(c)) if c.is_move() => {}
        Some(_) => {
            let mut prefixed = vec![
                Token::Command(Command::MoveTo),
                Token::Number(0.),
                Token::Number(0.),
            ];
            prefixed.extend_from_slice(tokens);
            return parse_tokens(&prefixed);
        }
    }

    let end = tokens
        .iter()
        .position(|t| *t == Token::End)
        .unwrap_or(tokens.len());
    let tokens = &tokens[..end];

    let mut segments = Vec::new();
    let fail = |error: ParseError, partial: Vec<Segment>| {
        warn!("{error}");
        Err(ParseFailure { error, partial })
    };

    let mut index = 0;
    // "The command letter can be eliminated on subsequent commands if the same
    // command is used multiple times in a row"
    let mut active: Option<Command> = None;
    while let Some(token) = tokens.get(index) {
        let command = match (token, active) {
            (Token::End, _) => break,
            (Token::Command(c), _) => {
                index += 1;
                *c
            }
            (Token::Number(_), Some(c)) => {
                if c.arity() == 0 {
                    return fail(ParseError::BadSegment { command: c }, segments);
                }
                c
            }
            (Token::Number(_), None) => {
                // unreachable given the leading moveto check above
                return fail(
                    ParseError::NotANumber {
                        command: Command::MoveTo,
                        found: token.text(),
                    },
                    segments,
                );
            }
        };

        let needed = command.arity();
        if index + needed > tokens.len() {
            return fail(
                ParseError::EndedShort {
                    command,
                    needed,
                    available: tokens.len() - index,
                },
                segments,
            );
        }

        let mut data = Vec::with_capacity(needed);
        for param in &tokens[index..index + needed] {
            match param {
                Token::Number(n) => data.push(*n),
                other => {
                    return fail(
                        ParseError::NotANumber {
                            command,
                            found: other.text(),
                        },
                        segments,
                    );
                }
            }
        }
        segments.push(Segment::from_parts(command, data));
        index += needed;
        active = Some(command.implicit_next());
    }
    Ok(segments)
}
