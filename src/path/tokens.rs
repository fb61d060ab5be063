use crate::errors::ParseError;
use crate::types::{fstr, strp};

use super::Command;

/// Lexical unit of path data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Command(Command),
    Number(f64),
    End,
}

impl Token {
    /// Text form of the token: the exact command letter, or the canonical
    /// string form of a number.
    pub fn text(&self) -> String {
        match self {
            Token::Command(c) => c.key().to_string(),
            Token::Number(n) => fstr(*n),
            Token::End => String::new(),
        }
    }
}

pub struct SvgPathSyntax {
    data: Vec<char>,
    index: usize,
}

impl SvgPathSyntax {
    pub fn new(data: &str) -> Self {
        Self {
            data: data.chars().collect(),
            index: 0,
        }
    }
}

impl PathSyntax for SvgPathSyntax {
    fn peek(&self, offset: usize) -> Option<char> {
        self.data.get(self.index + offset).copied()
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn position(&self) -> usize {
        self.index
    }

    fn remaining(&self) -> String {
        self.data[self.index.min(self.data.len())..].iter().collect()
    }
}

pub trait PathSyntax {
    fn peek(&self, offset: usize) -> Option<char>;
    fn advance(&mut self);
    fn position(&self) -> usize;
    fn remaining(&self) -> String;

    fn current(&self) -> Option<char> {
        self.peek(0)
    }

    fn at_end(&self) -> bool {
        self.current().is_none()
    }

    /// Skip any run of separators; returns true if anything was skipped.
    fn skip_wsp_comma(&mut self) -> bool {
        let start = self.position();
        while matches!(self.current(), Some(' ' | '\t' | '\r' | '\n' | ',')) {
            self.advance();
        }
        self.position() != start
    }

    fn read_command(&mut self) -> Option<Command> {
        let command = self.current().and_then(Command::from_char)?;
        self.advance();
        Some(command)
    }

    /// Length (in chars) of the number literal at the cursor, if there is one.
    ///
    /// Matches `[+-]?(digits(.digits*)?|.digits)([eE][+-]?digits)?`; an
    /// exponent marker without digits is not part of the literal.
    fn number_len(&self) -> Option<usize> {
        let digits_from = |mut i: usize| {
            let start = i;
            while self.peek(i).is_some_and(|c| c.is_ascii_digit()) {
                i += 1;
            }
            (i, i - start)
        };

        let mut i = 0;
        if matches!(self.peek(i), Some('+' | '-')) {
            i += 1;
        }
        let (next, int_digits) = digits_from(i);
        i = next;
        let mut frac_digits = 0;
        if self.peek(i) == Some('.') {
            let (next, count) = digits_from(i + 1);
            // a lone '.' without digits on either side is not a number
            if int_digits > 0 || count > 0 {
                i = next;
                frac_digits = count;
            }
        }
        if int_digits == 0 && frac_digits == 0 {
            return None;
        }
        if matches!(self.peek(i), Some('e' | 'E')) {
            let mut j = i + 1;
            if matches!(self.peek(j), Some('+' | '-')) {
                j += 1;
            }
            let (next, exp_digits) = digits_from(j);
            if exp_digits > 0 {
                i = next;
            }
        }
        Some(i)
    }

    fn read_number(&mut self) -> Option<f64> {
        let len = self.number_len()?;
        let mut s = String::with_capacity(len);
        for _ in 0..len {
            s.extend(self.current());
            self.advance();
        }
        strp(&s).ok()
    }
}

/// Split path data into tokens, terminated by a single `Token::End`.
///
/// Any input which is not a separator, command letter or number fails the
/// whole tokenization; no partial token list is returned.
pub fn tokenize(data: &str) -> Result<Vec<Token>, ParseError> {
    let mut syntax = SvgPathSyntax::new(data);
    let mut tokens = Vec::new();
    loop {
        syntax.skip_wsp_comma();
        if syntax.at_end() {
            break;
        }
        let offset = syntax.position();
        if let Some(command) = syntax.read_command() {
            tokens.push(Token::Command(command));
        } else if let Some(number) = syntax.read_number() {
            tokens.push(Token::Number(number));
        } else {
            return Err(ParseError::Tokenize {
                offset,
                remaining: syntax.remaining(),
            });
        }
    }
    tokens.push(Token::End);
    Ok(tokens)
}
