//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use sharpline_core::{Grammar, GrammarError};

/// The built-in grammar is fixed at compile time; failing to build it is a bug.
pub(crate) fn ensure_valid_grammar(result: Result<Grammar, GrammarError>) -> Grammar {
    match result {
        Ok(grammar) => grammar,
        Err(err) => panic!("csharp: built-in grammar is invalid: {err}"),
    }
}
