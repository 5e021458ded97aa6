use std::io::BufRead;

use super::source::CharSource;
use super::token::Token;
use crate::error::Result;

/// Default upper bound for the length of a name token
pub const MAX_NAME_LENGTH: usize = 30;

/// Classifier turning characters from a [`CharSource`] into tokens
///
/// Tokens are produced on demand, one per `next_symbol` call, so the reader
/// can evaluate a list as soon as its closing parenthesis arrives.
pub struct SymbolScanner<R> {
    /// Character source
    source: CharSource<R>,
    /// Last classified token
    current: Token,
    /// Names longer than this are truncated
    max_name_length: usize,
    /// Parentheses opened and not yet closed
    depth: usize,
}

impl<R: BufRead> SymbolScanner<R> {
    /// Creates a scanner over a character source
    pub fn new(source: CharSource<R>) -> Self {
        SymbolScanner {
            source,
            current: Token::Invalid('\0'),
            max_name_length: MAX_NAME_LENGTH,
            depth: 0,
        }
    }

    /// Sets the maximum name length
    pub fn with_max_name_length(mut self, max_name_length: usize) -> Self {
        self.max_name_length = max_name_length.max(1);
        self
    }

    /// Consumes input and classifies exactly one token
    pub fn next_symbol(&mut self) -> Result<&Token> {
        let token = match self.source.next_char()? {
            None => Token::EndOfFile,
            Some('\n') | Some('\r') => Token::EndOfLine,
            Some(' ') | Some('\t') => Token::Space,
            Some('(') => Token::LeftParen,
            Some(')') => Token::RightParen,
            Some('\'') => Token::Quote,
            Some(c) if c.is_control() => Token::Invalid(c),
            Some(c) => self.scan_name(c)?,
        };

        match token {
            Token::LeftParen => self.depth += 1,
            Token::RightParen => self.depth = self.depth.saturating_sub(1),
            _ => {}
        }

        tracing::trace!(token = ?token, depth = self.depth, "scanned");
        self.current = token;
        Ok(&self.current)
    }

    /// Returns the last classified token without consuming input
    pub fn current_symbol(&self) -> &Token {
        &self.current
    }

    /// Number of `(` scanned so far without a matching `)`
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Gives access to the underlying character source
    pub fn source(&self) -> &CharSource<R> {
        &self.source
    }

    /// Gives mutable access to the underlying character source
    pub fn source_mut(&mut self) -> &mut CharSource<R> {
        &mut self.source
    }

    fn scan_name(&mut self, first: char) -> Result<Token> {
        let mut text = String::new();
        let mut length = 1;
        text.extend(first.to_uppercase());

        while let Some(c) = self.source.current_char()? {
            if !is_name_char(c) {
                break;
            }
            self.source.next_char()?;
            length += 1;
            if length <= self.max_name_length {
                text.extend(c.to_uppercase());
            }
        }

        if length > self.max_name_length {
            tracing::warn!(
                name = %text,
                length,
                max = self.max_name_length,
                "name truncated"
            );
        }

        Ok(Token::Name(text))
    }
}

/// Characters that continue a name: anything but whitespace and parentheses
fn is_name_char(c: char) -> bool {
    !c.is_whitespace() && c != '(' && c != ')'
}
