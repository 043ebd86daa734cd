//! Core data structures for the Sharpline expression parser.
//!
//! - `syntax`: token and node kinds shared by the lexer, grammars and trees
//! - `lexer`: reference tokenizer producing span-based tokens
//! - `grammar`: named rule registry that grammars are written against
//! - `line_index`: byte offset to line/column mapping

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod grammar;
pub mod lexer;
pub mod line_index;
pub mod syntax;

#[cfg(test)]
mod lexer_tests;

pub use grammar::{Grammar, GrammarBuilder, GrammarError, Rule, RuleId, Suffix};
pub use lexer::{Token, lex, token_text};
pub use line_index::{LineCol, LineIndex};
pub use rowan::{TextRange, TextSize};
pub use syntax::{SharpLang, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, TokenSet};
