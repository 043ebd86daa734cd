//! Helpers for rule-level parser tests.

use rowan::NodeOrToken;
use sharpline_core::{Grammar, Rule, SyntaxKind, SyntaxNode, lex};

use crate::{NoMatch, Parse, ParseOutcome, Parser, shared_grammar};

/// Printed as bare text by [`sexp`] when they have no child nodes.
fn is_leaf(node: &SyntaxNode) -> bool {
    matches!(
        node.kind(),
        SyntaxKind::SimpleName
            | SyntaxKind::Literal
            | SyntaxKind::PredefinedType
            | SyntaxKind::NamedType
            | SyntaxKind::ThisExpr
    ) && node.children().next().is_none()
}

/// Expression grammar with the named rules replaced by identifiers spelled
/// like the rule, so `shiftExpression` in the input stands for any operand.
pub fn stubbed(names: &[&str]) -> Grammar {
    shared_grammar()
        .with_substitutions(names.iter().map(|name| (*name, Rule::word(*name))))
        .unwrap()
}

pub fn parse_with(grammar: &Grammar, rule: &str, input: &str) -> ParseOutcome {
    let tokens = lex(input);
    Parser::new(grammar).parse(rule, input, &tokens).unwrap()
}

fn expect_parse(grammar: &Grammar, rule: &str, input: &str) -> Parse {
    match parse_with(grammar, rule, input) {
        ParseOutcome::Match(parse) => parse,
        ParseOutcome::NoMatch(no_match) => {
            panic!("expected `{rule}` to match {input:?}, got {no_match:?}")
        }
    }
}

/// CST dump of a successful parse.
pub fn expect_cst(rule: &str, input: &str) -> String {
    expect_parse(shared_grammar(), rule, input).dump_cst()
}

/// Compact form of a successful parse: `(Kind child ...)` per node, bare text
/// for tokens and simple leaves. The `Root` wrapper is left out.
pub fn expect_sexp(rule: &str, input: &str) -> String {
    expect_sexp_with(shared_grammar(), rule, input)
}

pub fn expect_sexp_with(grammar: &Grammar, rule: &str, input: &str) -> String {
    let parse = expect_parse(grammar, rule, input);
    sexp_children(&parse.syntax())
}

pub fn expect_no_match(rule: &str, input: &str) -> NoMatch {
    expect_no_match_with(shared_grammar(), rule, input)
}

pub fn expect_no_match_with(grammar: &Grammar, rule: &str, input: &str) -> NoMatch {
    match parse_with(grammar, rule, input) {
        ParseOutcome::Match(parse) => panic!(
            "expected `{rule}` to reject {input:?}, got:\n{}",
            parse.dump_cst()
        ),
        ParseOutcome::NoMatch(no_match) => no_match,
    }
}

pub fn sexp(node: &SyntaxNode) -> String {
    if is_leaf(node) {
        return leaf_text(node);
    }
    let inner = sexp_children(node);
    if inner.is_empty() {
        format!("({:?})", node.kind())
    } else {
        format!("({:?} {})", node.kind(), inner)
    }
}

fn sexp_children(node: &SyntaxNode) -> String {
    node.children_with_tokens()
        .filter_map(|child| match child {
            NodeOrToken::Node(n) => Some(sexp(&n)),
            NodeOrToken::Token(t) if t.kind().is_trivia() => None,
            NodeOrToken::Token(t) => Some(t.text().to_owned()),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn leaf_text(node: &SyntaxNode) -> String {
    node.descendants_with_tokens()
        .filter_map(|it| it.into_token())
        .filter(|t| !t.kind().is_trivia())
        .map(|t| t.text().to_owned())
        .collect()
}
