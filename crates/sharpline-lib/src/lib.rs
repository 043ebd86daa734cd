//! Sharpline: registry-driven parser for C#-family expressions.
//!
//! The grammar is a set of named rules ([`csharp::grammar`]) run by a small
//! PEG interpreter ([`Parser`]). Any rule can be an entry point, which is how
//! individual productions are tested in isolation.
//!
//! # Example
//!
//! ```
//! use sharpline_lib::parse_expression;
//!
//! let outcome = parse_expression("x => x.Name == \"a\" && x.Age > 30").expect("valid grammar");
//! let parse = outcome.parse().expect("expression matches");
//! assert_eq!(parse.syntax().to_string(), "x => x.Name == \"a\" && x.Age > 30");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod csharp;
pub mod engine;
mod invariants;
pub mod printer;
pub mod span_tree;

#[cfg(test)]
pub mod test_utils;

use std::sync::OnceLock;

use sharpline_core::{Grammar, GrammarError, lex};

pub use engine::{DEFAULT_RECURSION_FUEL, NoMatch, Parse, ParseOutcome, Parser, PrefixMatch};
pub use printer::CstPrinter;
pub use span_tree::SpanNode;

/// Errors that stop a parse outright. Input that simply doesn't match is a
/// [`ParseOutcome::NoMatch`], not an error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("no rule named `{0}`")]
    UnknownRule(String),

    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

/// Result type for parse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Expression grammar built on first use and shared afterwards.
pub fn shared_grammar() -> &'static Grammar {
    static GRAMMAR: OnceLock<Grammar> = OnceLock::new();
    GRAMMAR.get_or_init(csharp::grammar)
}

/// Lexes `source` and parses it as one complete expression.
pub fn parse_expression(source: &str) -> Result<ParseOutcome> {
    let tokens = lex(source);
    Parser::new(shared_grammar()).parse(csharp::ENTRY_RULE, source, &tokens)
}
