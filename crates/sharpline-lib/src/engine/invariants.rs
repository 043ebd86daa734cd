//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use sharpline_core::{Grammar, Rule, RuleId, SyntaxNode};

use crate::ast::Root;

pub(super) fn ensure_rule(grammar: &Grammar, id: RuleId) -> (&str, &Rule) {
    grammar.rule(id).unwrap_or_else(|| {
        panic!(
            "engine: rule #{} not found in grammar `{}` (ids are only valid for the grammar that issued them)",
            id.index(),
            grammar.name()
        )
    })
}

pub(super) fn ensure_root(node: SyntaxNode) -> Root {
    Root::cast(node).expect("engine always produces Root")
}
