//! Top-level read-eval-print driver

use std::io::{BufRead, Write};

use crate::error::{Error, ErrorSeverity, Result};
use crate::lexer::{CharSource, SymbolScanner, Token};
use crate::parser::{is_variable_name, Node, ReadMode, Reader};
use crate::runtime::{EchoMode, Environment, LispEvaluator, SessionConfig};

/// Outcome of evaluating one top-level form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A form was evaluated and printed; more input may follow
    Continue,
    /// The input is exhausted
    EndOfInput,
    /// `QUIT` or `EXIT` was evaluated
    Quit,
}

/// Interpreter session: input stream, output stream, environment and builtins
pub struct Session<R, W> {
    /// Token source over the input
    scanner: SymbolScanner<R>,
    /// Evaluator owning the environment
    evaluator: LispEvaluator,
    /// Result output
    out: W,
    /// Session configuration
    config: SessionConfig,
    /// Number of prompts / transcript lines printed so far
    line_no: usize,
    /// Set once `shutdown` ran
    closed: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading from `input` and printing to `out`
    pub fn new(input: R, out: W, config: SessionConfig) -> Self {
        let source = CharSource::with_max_line_length(input, config.max_line_length);
        let scanner = SymbolScanner::new(source).with_max_name_length(config.max_name_length);

        Session {
            scanner,
            evaluator: LispEvaluator::new(),
            out,
            config,
            line_no: 0,
            closed: false,
        }
    }

    /// Reads, evaluates and prints one top-level form
    pub fn eval_line(&mut self) -> Result<Step> {
        if self.config.echo == EchoMode::Prompt {
            self.line_no += 1;
            write!(self.out, "[{}]> ", self.line_no)?;
            self.out.flush()?;
        }

        let node = match self.read_form() {
            Ok(Some(node)) => node,
            Ok(None) => return Ok(Step::EndOfInput),
            Err(Error::Quit) => return Ok(Step::Quit),
            Err(err) => return Err(err),
        };

        if self.config.echo == EchoMode::Transcript {
            self.line_no += 1;
            let line = self.scanner.source().current_line();
            write!(self.out, "[{}]> {}", self.line_no, line)?;
            if !line.ends_with('\n') {
                writeln!(self.out)?;
            }
        }

        writeln!(self.out, "{}", node)?;
        Ok(Step::Continue)
    }

    /// Evaluates forms until the input ends, `QUIT` is called or a fault stops the session
    ///
    /// With `recover_errors` set, recoverable faults are handed to `report`, the rest
    /// of the offending form and of its last line is skipped and reading resumes.
    /// The session is shut down before returning in every case; a fault that stopped
    /// the session wins over a failing shutdown.
    pub fn run(&mut self, mut report: impl FnMut(&Error)) -> Result<()> {
        tracing::info!(echo = ?self.config.echo, "session started");

        match self.eval_all(&mut report) {
            Ok(()) => self.shutdown(),
            Err(err) => {
                tracing::debug!(error = %err, "session aborted");
                if let Err(shutdown_err) = self.shutdown() {
                    tracing::warn!(error = %shutdown_err, "shutdown after fault failed");
                }
                Err(err)
            }
        }
    }

    fn eval_all<F: FnMut(&Error)>(&mut self, report: &mut F) -> Result<()> {
        loop {
            match self.eval_line() {
                Ok(Step::Continue) => {}
                Ok(step) => {
                    tracing::info!(?step, "session finished");
                    return Ok(());
                }
                Err(err)
                    if self.config.recover_errors
                        && err.classify() == ErrorSeverity::Recoverable =>
                {
                    tracing::warn!(error = %err, "recovered from fault");
                    report(&err);
                    self.skip_abandoned_form()?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Consumes input up to the `)` closing the form a fault interrupted, then
    /// the rest of that line
    fn skip_abandoned_form(&mut self) -> Result<()> {
        while self.scanner.depth() > 0 {
            if self.scanner.next_symbol()? == &Token::EndOfFile {
                break;
            }
        }
        self.scanner.source_mut().discard_line();
        Ok(())
    }

    /// Releases the environment and prints the farewell line once
    pub fn shutdown(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.evaluator.env.clear();

        if self.config.farewell {
            writeln!(self.out, "Bye.")?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Variable environment of this session
    pub fn environment(&self) -> &Environment {
        &self.evaluator.env
    }

    /// Gives back the output stream
    pub fn into_output(self) -> W {
        self.out
    }

    /// Reads the next top-level form; `None` at end of input
    fn read_form(&mut self) -> Result<Option<Node>> {
        let mut quoted = false;

        loop {
            let token = self.scanner.next_symbol()?.clone();
            match token {
                Token::EndOfFile => return Ok(None),
                Token::Quote => quoted = true,
                Token::Name(text) => return Ok(Some(self.resolve_atom(text, quoted))),
                Token::LeftParen => {
                    let mode = if quoted {
                        ReadMode::Quoted
                    } else {
                        ReadMode::Evaluate
                    };
                    let node = Reader::new(&mut self.scanner, &mut self.evaluator).read_list(mode)?;
                    return Ok(Some(node));
                }
                Token::RightParen | Token::Space | Token::EndOfLine | Token::Invalid(_) => {}
            }
        }
    }

    /// A bare atom: letter-leading names are variable references, anything else a literal
    fn resolve_atom(&self, text: String, quoted: bool) -> Node {
        if quoted {
            return Node::atom(text);
        }
        if !is_variable_name(&text) {
            return Node::Value(text);
        }

        let env = &self.evaluator.env;
        if env.has(&text) {
            Node::integer(env.get(&text))
        } else {
            Node::Nil
        }
    }
}

/// Evaluates every form in `source` and returns the printed results
///
/// Runs a silent session; the first fault is returned as the error.
pub fn evaluate_source(source: &str) -> Result<Vec<String>> {
    let mut out = Vec::new();
    {
        let mut session = Session::new(source.as_bytes(), &mut out, SessionConfig::silent());
        session.run(|_| {})?;
    }
    Ok(String::from_utf8_lossy(&out)
        .lines()
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(source: &str) -> String {
        let config = SessionConfig::default().with_echo(EchoMode::Transcript);
        let mut session = Session::new(source.as_bytes(), Vec::new(), config);
        session.run(|_| {}).unwrap();
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn test_set_then_use() {
        assert_eq!(
            evaluate_source("(SET X 10)\n(+ X 5)\n").unwrap(),
            vec!["10", "15"]
        );
    }

    #[test]
    fn test_bare_atoms() {
        assert_eq!(
            evaluate_source("(set x 5)\nx\ny\n42\n'z\n").unwrap(),
            vec!["5", "5", "NIL", "42", "Z"]
        );
    }

    #[test]
    fn test_several_forms_on_one_line() {
        assert_eq!(
            evaluate_source("(+ 1 2) (* 2 3)").unwrap(),
            vec!["3", "6"]
        );
    }

    #[test]
    fn test_transcript_echoes_source_lines() {
        assert_eq!(
            transcript("(SET X 10)\n(+ X 5)\n"),
            "[1]> (SET X 10)\n10\n[2]> (+ X 5)\n15\nBye.\n"
        );
    }

    #[test]
    fn test_transcript_terminates_last_line() {
        assert_eq!(transcript("(+ 1 1)"), "[1]> (+ 1 1)\n2\nBye.\n");
    }

    #[test]
    fn test_prompt_mode() {
        let mut session = Session::new(
            "(+ 1 2)\n".as_bytes(),
            Vec::new(),
            SessionConfig::default(),
        );
        session.run(|_| {}).unwrap();
        let out = String::from_utf8(session.into_output()).unwrap();
        assert_eq!(out, "[1]> 3\n[2]> Bye.\n");
    }

    #[test]
    fn test_quit_stops_reading() {
        let config = SessionConfig::silent();
        let mut session = Session::new("(+ 1 2)\n(QUIT)\n(+ 3 4)\n".as_bytes(), Vec::new(), config);
        assert_eq!(session.eval_line().unwrap(), Step::Continue);
        assert_eq!(session.eval_line().unwrap(), Step::Quit);
        assert_eq!(String::from_utf8(session.into_output()).unwrap(), "3\n");
    }

    #[test]
    fn test_fault_stops_session() {
        let err = evaluate_source("(+ 1 2)\n(FOO 1)\n(+ 3 4)\n").unwrap_err();
        assert_eq!(err.to_string(), "Syntax error: Undefined function: FOO");
    }

    #[test]
    fn test_recovery_skips_rest_of_line() {
        let config = SessionConfig::silent().with_recovery(true);
        let mut session = Session::new(
            "(+ (FOO) 2)\n(/ 1 0)\n(+ 3 4)\n".as_bytes(),
            Vec::new(),
            config,
        );
        let mut faults = Vec::new();
        session.run(|err| faults.push(err.to_string())).unwrap();

        assert_eq!(
            faults,
            vec!["Syntax error: Undefined function: FOO", "Division by zero"]
        );
        assert_eq!(String::from_utf8(session.into_output()).unwrap(), "7\n");
    }

    #[test]
    fn test_recovery_skips_multi_line_form() {
        let config = SessionConfig::silent().with_recovery(true);
        let mut session = Session::new(
            "(+ (FOO)\n 2\n (* 3\n 4))\n(+ 3 4)\n".as_bytes(),
            Vec::new(),
            config,
        );
        let mut faults = Vec::new();
        session.run(|err| faults.push(err.to_string())).unwrap();

        assert_eq!(faults, vec!["Syntax error: Undefined function: FOO"]);
        assert_eq!(String::from_utf8(session.into_output()).unwrap(), "7\n");
    }

    #[test]
    fn test_fault_survives_failed_shutdown() {
        struct BrokenPipe;

        impl Write for BrokenPipe {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let config = SessionConfig::default().with_echo(EchoMode::Silent);
        let mut session = Session::new("(FOO)\n".as_bytes(), BrokenPipe, config);
        let err = session.run(|_| {}).unwrap_err();
        assert_eq!(
            err,
            Error::UndefinedFunction {
                name: "FOO".to_string()
            }
        );
    }

    #[test]
    fn test_configured_limits_reach_the_scanner() {
        let config = SessionConfig::silent()
            .with_max_name_length(3)
            .with_max_line_length(8);
        let mut session = Session::new("'abcdef\n".as_bytes(), Vec::new(), config);
        session.run(|_| {}).unwrap();
        assert_eq!(String::from_utf8(session.into_output()).unwrap(), "ABC\n");
    }

    #[test]
    fn test_shutdown_clears_environment_once() {
        let config = SessionConfig::default().with_echo(EchoMode::Silent);
        let mut session = Session::new("(SET A 1)\n".as_bytes(), Vec::new(), config);
        session.eval_line().unwrap();
        assert_eq!(session.environment().get("A"), 1);

        session.shutdown().unwrap();
        session.shutdown().unwrap();
        assert!(session.environment().is_empty());
        assert_eq!(
            String::from_utf8(session.into_output()).unwrap(),
            "1\nBye.\n"
        );
    }

    #[test]
    fn test_stray_close_paren_is_ignored() {
        assert_eq!(evaluate_source(") (+ 2 2)").unwrap(), vec!["4"]);
    }
}
