//! Runtime for Lispline: environment, evaluator and the session driver

mod config;
mod environment;
mod lisp_evaluator;
mod session;

pub use config::{EchoMode, SessionConfig};
pub use environment::Environment;
pub use lisp_evaluator::LispEvaluator;
pub use session::{evaluate_source, Session, Step};
