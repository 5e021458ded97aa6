use std::io::BufRead;

use super::ast::Node;
use crate::error::{Error, Result};
use crate::lexer::{SymbolScanner, Token};
use crate::runtime::LispEvaluator;

/// Name of the builtin whose nested arguments are read without evaluation
const QUOTE_FORM: &str = "QUOTE";

/// How a list is treated once its closing parenthesis is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Evaluate the list as a call
    Evaluate,
    /// Keep the list, and everything nested in it, as data
    Quoted,
}

/// Recursive-descent reader that evaluates each list as soon as it is complete
///
/// Nested lists are read and evaluated first; their results become plain
/// arguments of the enclosing call.
pub struct Reader<'a, R> {
    /// Token source
    scanner: &'a mut SymbolScanner<R>,
    /// Evaluator for completed lists
    evaluator: &'a mut LispEvaluator,
}

impl<'a, R: BufRead> Reader<'a, R> {
    /// Creates a reader over a scanner positioned on `(`
    pub fn new(scanner: &'a mut SymbolScanner<R>, evaluator: &'a mut LispEvaluator) -> Self {
        Reader { scanner, evaluator }
    }

    /// Reads the list opened by the current `(` and returns its result
    pub fn read_list(&mut self, mode: ReadMode) -> Result<Node> {
        debug_assert_eq!(self.scanner.current_symbol(), &Token::LeftParen);

        let mut items: Vec<Node> = Vec::new();
        let mut quote_next = false;

        loop {
            let token = self.scanner.next_symbol()?.clone();
            match token {
                Token::EndOfFile => return Err(Error::syntax("Missing )")),
                Token::RightParen => break,
                Token::LeftParen => {
                    let nested = if mode == ReadMode::Quoted || quote_next || quotes_rest(&items)
                    {
                        ReadMode::Quoted
                    } else {
                        ReadMode::Evaluate
                    };
                    quote_next = false;
                    items.push(self.read_list(nested)?);
                }
                Token::Name(text) => {
                    quote_next = false;
                    items.push(Node::atom(text));
                }
                Token::Quote => quote_next = true,
                Token::Space | Token::EndOfLine | Token::Invalid(_) => {}
            }
        }

        if items.is_empty() {
            return Ok(Node::Nil);
        }

        match mode {
            ReadMode::Quoted => Ok(Node::Quoted(items)),
            ReadMode::Evaluate => self.evaluator.evaluate(Node::List(items)),
        }
    }
}

/// A list headed by `QUOTE` keeps its nested lists unevaluated
fn quotes_rest(items: &[Node]) -> bool {
    items.first().and_then(Node::text) == Some(QUOTE_FORM)
}
