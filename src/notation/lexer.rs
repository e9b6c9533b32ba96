//! Lexer (tokenizer) for arithmetic expressions
//!
//! Converts an expression string into a flat [`Token`] stream. The same lexer
//! scans both infix input (for the translator) and postfix input (for the
//! evaluator); the two notations use the same alphabet of digit runs, the four
//! operators, and whitespace.

use crate::errors::CalcError;
use crate::memory::entry::Operator;
use std::fmt;

/// All token variants produced by the lexer.
///
/// Every variant carries the 1-based column where it starts so errors can
/// point at the offending character.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A run of consecutive ASCII digits, kept verbatim alongside its value
    Number {
        text: String,
        value: f64,
        column: usize,
    },
    Operator(Operator, usize),
    Eof(usize),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number { text, .. } => write!(f, "number {}", text),
            Token::Operator(op, _) => write!(f, "'{}'", op),
            Token::Eof(_) => write!(f, "end of input"),
        }
    }
}

/// Lexer for expression text
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    /// Create a new lexer for the given expression string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, CalcError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let at_end = matches!(token, Token::Eof(_));
            tokens.push(token);
            if at_end {
                break;
            }
        }

        Ok(tokens)
    }

    /// Get next token, skipping whitespace.
    ///
    /// Returns [`Token::Eof`] once the input is exhausted, and keeps returning
    /// it on further calls.
    pub fn next_token(&mut self) -> Result<Token, CalcError> {
        self.skip_whitespace();

        let column = self.current_column();
        let ch = match self.peek() {
            Some(ch) => ch,
            None => return Ok(Token::Eof(column)),
        };

        if ch.is_ascii_digit() {
            return Ok(self.number());
        }

        match Operator::from_char(ch) {
            Some(op) => {
                self.advance();
                Ok(Token::Operator(op, column))
            }
            None => Err(CalcError::InvalidToken { ch, column }),
        }
    }

    /// Consume a digit run as one operand
    fn number(&mut self) -> Token {
        let column = self.current_column();
        let mut text = String::new();
        let mut value = 0.0_f64;

        while let Some(ch) = self.peek() {
            match ch.to_digit(10) {
                Some(digit) if ch.is_ascii_digit() => {
                    text.push(ch);
                    value = value * 10.0 + f64::from(digit);
                    self.advance();
                }
                _ => break,
            }
        }

        Token::Number {
            text,
            value,
            column,
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    /// Column of the next unread character
    pub fn current_column(&self) -> usize {
        self.position + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tokens() {
        let mut lexer = Lexer::new("12+8");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Number { ref text, value, column: 1 } if text == "12" && value == 12.0));
        assert!(matches!(tokens[1], Token::Operator(Operator::Add, 3)));
        assert!(matches!(tokens[2], Token::Number { value, column: 4, .. } if value == 8.0));
        assert!(matches!(tokens[3], Token::Eof(5)));
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_whitespace_skipped() {
        let mut lexer = Lexer::new(" 1 \t*\n 2 ");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Number { column: 2, .. }));
        assert!(matches!(tokens[1], Token::Operator(Operator::Mul, 5)));
        assert!(matches!(tokens[2], Token::Number { column: 8, .. }));
        assert!(matches!(tokens[3], Token::Eof(_)));
    }

    #[test]
    fn test_invalid_character() {
        let mut lexer = Lexer::new("3+x");
        let err = lexer.tokenize().unwrap_err();
        assert_eq!(err, CalcError::InvalidToken { ch: 'x', column: 3 });
    }

    #[test]
    fn test_leading_zeros_kept_in_text() {
        let mut lexer = Lexer::new("007");
        match lexer.next_token().unwrap() {
            Token::Number { text, value, .. } => {
                assert_eq!(text, "007");
                assert_eq!(value, 7.0);
            }
            other => panic!("Expected number, got {}", other),
        }
    }

    #[test]
    fn test_eof_repeats() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next_token(), Ok(Token::Eof(1)));
        assert_eq!(lexer.next_token(), Ok(Token::Eof(1)));
    }
}
