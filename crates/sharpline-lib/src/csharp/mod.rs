//! C# expression grammar.
//!
//! Every production is a named rule in one registry, so any rule can be used as
//! an entry point and any referenced rule can be swapped for a stand-in with
//! [`Grammar::with_substitutions`].
//!
//! Data flow, lowest precedence first:
//!
//! ```text
//! expression
//! ├─ assignment
//! └─ nonAssignmentExpression
//!    ├─ lambdaExpression
//!    ├─ queryExpression
//!    └─ conditionalExpression → nullCoalescing → ||, && → |, ^, & → equality
//!       → relational (with is/as) → shift → additive → multiplicative
//!       → unaryExpression → primaryExpression (primaryStart + postfix chain)
//! ```
//!
//! Ambiguities are settled by alternative order (first match wins) and by
//! greedy postfix folding. Two token-follower rules from the C# language
//! specification also apply: `(T) x` is a cast only when `x` starts with a
//! token in `CAST_FOLLOWERS`, and `Name<T>` keeps its type arguments only when
//! followed by a token in `TYPE_ARGUMENT_FOLLOWERS`.

mod creation;
mod lambda;
mod operators;
mod primary;
mod query;
mod types;

#[cfg(test)]
mod creation_tests;
#[cfg(test)]
mod lambda_tests;
#[cfg(test)]
mod primary_tests;

use sharpline_core::{Grammar, GrammarBuilder, Rule, SyntaxKind};

/// Rule that parses a complete expression.
pub const ENTRY_RULE: &str = "expression";

/// Grammar builder with every expression rule defined, for callers that want
/// to extend or override rules before building.
pub fn builder() -> GrammarBuilder {
    let mut b = Grammar::builder("csharp");
    operators::define(&mut b);
    primary::define(&mut b);
    types::define(&mut b);
    lambda::define(&mut b);
    query::define(&mut b);
    creation::define(&mut b);
    b
}

/// Builds the expression grammar. Build it once and share it; it is immutable.
pub fn grammar() -> Grammar {
    crate::invariants::ensure_valid_grammar(builder().build())
}

fn sym(name: &str) -> Rule {
    Rule::symbol(name)
}

fn tok(kind: SyntaxKind) -> Rule {
    Rule::token(kind)
}

/// Contextual keyword, lexed as an identifier.
fn kw(text: &str) -> Rule {
    Rule::word(text)
}

/// `item (, item)* ,?`
fn comma_list_trailing(item: Rule) -> Rule {
    Rule::seq([
        Rule::separated(item, tok(SyntaxKind::Comma)),
        Rule::optional(tok(SyntaxKind::Comma)),
    ])
}
