use std::mem;
use std::str::CharIndices;

use crate::commands;
use crate::error::{LatexErrKind, LatexError};
use crate::ops;
use crate::token::{TokLoc, Token};

/// One character of lookahead.
#[derive(Debug, Clone, Copy)]
struct Peek {
    /// 0-based character offset of `ch`. Diagnostics are reported in
    /// characters, not bytes.
    pos: usize,
    /// Byte offset of `ch`, or the input length at end of input. Used for
    /// slicing command names out of the source.
    byte: usize,
    /// `None` at end of input.
    ch: Option<char>,
}

pub(crate) struct Lexer<'source> {
    input: &'source str,
    iter: CharIndices<'source>,
    peek: Peek,
    next_pos: usize,
    /// Number of currently open `{` groups.
    brace_nesting_level: usize,
    /// Character offset of the most recently seen `{`. When the input ends
    /// with open groups remaining, the unmatched-brace report points here.
    last_open_brace: usize,
}

impl<'source> Lexer<'source> {
    pub(crate) fn new(input: &'source str) -> Self {
        let mut lexer = Lexer {
            input,
            iter: input.char_indices(),
            peek: Peek {
                pos: 0,
                byte: 0,
                ch: None,
            },
            next_pos: 0,
            brace_nesting_level: 0,
            last_open_brace: 0,
        };
        lexer.bump();
        lexer
    }

    /// Advances the lookahead by one character and returns the previous one.
    fn bump(&mut self) -> Peek {
        let next = match self.iter.next() {
            Some((byte, ch)) => {
                let peek = Peek {
                    pos: self.next_pos,
                    byte,
                    ch: Some(ch),
                };
                self.next_pos += 1;
                peek
            }
            None => Peek {
                pos: self.next_pos,
                byte: self.input.len(),
                ch: None,
            },
        };
        mem::replace(&mut self.peek, next)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek.ch, Some(ch) if ch.is_ascii_whitespace()) {
            self.bump();
        }
    }

    /// Reads the command whose backslash `start` points to. The backslash
    /// itself has already been consumed.
    fn read_command(&mut self, start: Peek) -> Result<Token, LatexError<'source>> {
        let Some(first) = self.peek.ch else {
            // Backslash at the very end of the input.
            return Err(LatexError(start.pos, LatexErrKind::IllegalFinalBackslash));
        };
        if first.is_ascii_alphabetic() {
            let name_start = self.peek.byte;
            while matches!(self.peek.ch, Some(ch) if ch.is_ascii_alphabetic()) {
                self.bump();
            }
            let name = &self.input[name_start..self.peek.byte];
            commands::get_command(name)
                .ok_or(LatexError(start.pos, LatexErrKind::UnrecognisedCommand(name)))
        } else {
            let escaped = self.bump();
            let name = &self.input[escaped.byte..self.peek.byte];
            // Escaping a character that is not a known escape is treated
            // the same as a trailing backslash.
            commands::get_command(name)
                .ok_or(LatexError(start.pos, LatexErrKind::IllegalFinalBackslash))
        }
    }

    pub(crate) fn next_token(&mut self) -> Result<TokLoc, LatexError<'source>> {
        self.skip_whitespace();
        let cur = self.bump();
        let Some(ch) = cur.ch else {
            if self.brace_nesting_level > 0 {
                return Err(LatexError(
                    self.last_open_brace,
                    LatexErrKind::UnmatchedOpenBrace,
                ));
            }
            return Ok(TokLoc(cur.pos, Token::Eof));
        };
        let token = match ch {
            '{' => {
                self.brace_nesting_level += 1;
                self.last_open_brace = cur.pos;
                Token::GroupBegin
            }
            '}' => {
                if self.brace_nesting_level == 0 {
                    return Err(LatexError(cur.pos, LatexErrKind::UnmatchedCloseBrace));
                }
                self.brace_nesting_level -= 1;
                Token::GroupEnd
            }
            '\\' => self.read_command(cur)?,
            '_' => Token::Underscore,
            '^' => Token::Circumflex,
            '(' => Token::Open(ops::LEFT_PARENTHESIS),
            ')' => Token::Close(ops::RIGHT_PARENTHESIS),
            '[' => Token::Open(ops::LEFT_SQUARE_BRACKET),
            ']' => Token::Close(ops::RIGHT_SQUARE_BRACKET),
            '|' => Token::Ord(ops::VERTICAL_LINE),
            '=' => Token::Relation(ops::EQUALS_SIGN),
            '<' => Token::Relation(ops::LESS_THAN_SIGN),
            '>' => Token::Relation(ops::GREATER_THAN_SIGN),
            ':' => Token::Relation(ops::COLON),
            '+' => Token::BinaryOp(ops::PLUS_SIGN),
            '-' => Token::BinaryOp(ops::HYPHEN_MINUS),
            '*' => Token::BinaryOp(ops::ASTERISK),
            '/' => Token::BinaryOp(ops::SOLIDUS),
            ',' => Token::Punctuation(ops::COMMA),
            '.' => Token::Punctuation(ops::FULL_STOP),
            ';' => Token::Punctuation(ops::SEMICOLON),
            '!' => Token::Punctuation(ops::EXCLAMATION_MARK),
            '~' => Token::Space("0.3333"),
            '0'..='9' => Token::Digit(ch),
            _ => Token::Letter(ch),
        };
        Ok(TokLoc(cur.pos, token))
    }
}
