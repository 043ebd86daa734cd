//! Assignment, conditional, and the binary operator ladder down to unary.
//!
//! Each binary tier is a `Fold` over the next tier up, so equal-precedence
//! chains come out left-leaning: `a % b * c` is `(a % b) * c`.
//! `??` and `?:` recurse on their right operand instead and associate right.

use sharpline_core::syntax::token_sets::{ASSIGNMENT_OPERATORS, CAST_FOLLOWERS};
use sharpline_core::{GrammarBuilder, Rule, Suffix, SyntaxKind::*};

use super::query::query_keyword;
use super::{sym, tok};

/// `operand (op operand)*`, folded to the left.
fn binary_tier(operand: &str, operators: Rule) -> Rule {
    Rule::fold(
        sym(operand),
        [Suffix::new(BinaryExpr, Rule::seq([operators, sym(operand)]))],
    )
}

pub(super) fn define(b: &mut GrammarBuilder) {
    b.define(
        "expression",
        Rule::choice([sym("assignment"), sym("nonAssignmentExpression")]),
    )
    .define(
        "nonAssignmentExpression",
        Rule::choice([
            sym("lambdaExpression"),
            sym("queryExpression"),
            sym("conditionalExpression"),
        ]),
    )
    .define(
        "assignment",
        Rule::node(
            AssignmentExpr,
            Rule::seq([
                sym("unaryExpression"),
                sym("assignmentOperator"),
                sym("expression"),
            ]),
        ),
    )
    .define(
        "assignmentOperator",
        Rule::choice([
            Rule::one_of(ASSIGNMENT_OPERATORS.iter()),
            Rule::joined([Gt, GtEq]),
        ]),
    )
    .define(
        "conditionalExpression",
        Rule::fold(
            sym("nullCoalescingExpression"),
            [Suffix::new(
                ConditionalExpr,
                Rule::seq([
                    tok(Question),
                    sym("conditionalExpression"),
                    tok(Colon),
                    sym("conditionalExpression"),
                ]),
            )],
        ),
    )
    .define(
        "nullCoalescingExpression",
        Rule::fold(
            sym("conditionalOrExpression"),
            [Suffix::new(
                BinaryExpr,
                Rule::seq([tok(QuestionQuestion), sym("nullCoalescingExpression")]),
            )],
        ),
    )
    .define(
        "conditionalOrExpression",
        binary_tier("conditionalAndExpression", tok(PipePipe)),
    )
    .define(
        "conditionalAndExpression",
        binary_tier("inclusiveOrExpression", tok(AmpAmp)),
    )
    .define(
        "inclusiveOrExpression",
        binary_tier("exclusiveOrExpression", tok(Pipe)),
    )
    .define(
        "exclusiveOrExpression",
        binary_tier("andExpression", tok(Caret)),
    )
    .define(
        "andExpression",
        binary_tier("equalityExpression", tok(Amp)),
    )
    .define(
        "equalityExpression",
        binary_tier("relationalExpression", Rule::one_of([EqEq, BangEq])),
    )
    // Comparisons and type tests share one loop: `a < b is T as U >= c`.
    .define(
        "relationalExpression",
        Rule::fold(
            sym("shiftExpression"),
            [
                Suffix::new(
                    BinaryExpr,
                    Rule::seq([Rule::one_of([LtEq, GtEq, Lt, Gt]), sym("shiftExpression")]),
                ),
                Suffix::new(IsExpr, Rule::seq([tok(KwIs), sym("type")])),
                Suffix::new(AsExpr, Rule::seq([tok(KwAs), sym("type")])),
            ],
        ),
    )
    .define(
        "shiftExpression",
        binary_tier(
            "additiveExpression",
            Rule::choice([tok(LtLt), Rule::joined([Gt, Gt])]),
        ),
    )
    .define(
        "additiveExpression",
        binary_tier("multiplicativeExpression", Rule::one_of([Plus, Minus])),
    )
    .define(
        "multiplicativeExpression",
        binary_tier("unaryExpression", Rule::one_of([Star, Slash, Percent])),
    )
    .define(
        "unaryExpression",
        Rule::choice([
            Rule::node(
                PrefixUnaryExpr,
                Rule::seq([
                    Rule::one_of([Plus, Minus, Bang, Tilde, PlusPlus, MinusMinus]),
                    sym("unaryExpression"),
                ]),
            ),
            sym("castExpression"),
            sym("primaryExpression"),
        ]),
    )
    // `(int)-x` casts, `(x)-y` subtracts.
    .define(
        "castExpression",
        Rule::node(
            CastExpr,
            Rule::choice([
                Rule::seq([
                    tok(ParenOpen),
                    Rule::followed_by(sym("predefinedType")),
                    sym("type"),
                    tok(ParenClose),
                    sym("unaryExpression"),
                ]),
                Rule::seq([
                    tok(ParenOpen),
                    sym("type"),
                    tok(ParenClose),
                    // `(x) select x` closes an operand inside a query
                    Rule::not_followed_by(query_keyword()),
                    Rule::followed_by(Rule::one_of(CAST_FOLLOWERS.iter())),
                    sym("unaryExpression"),
                ]),
            ]),
        ),
    );
}
