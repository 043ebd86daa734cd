//! Primary expressions and the postfix chain.

use sharpline_core::syntax::token_sets::{LITERALS, TYPE_ARGUMENT_FOLLOWERS};
use sharpline_core::{GrammarBuilder, Rule, Suffix, SyntaxKind, SyntaxKind::*};

use super::{sym, tok};

/// Tried left to right after a primary start until none applies.
fn postfix_suffixes() -> Vec<Suffix> {
    vec![
        Suffix::new(MemberAccess, Rule::seq([tok(Dot), sym("simpleName")])),
        Suffix::new(InvocationExpr, sym("argumentList")),
        Suffix::new(ElementAccess, sym("bracketedArgumentList")),
        Suffix::new(PostIncrementExpr, tok(PlusPlus)),
        Suffix::new(PostDecrementExpr, tok(MinusMinus)),
    ]
}

fn parenthesized(keyword: SyntaxKind, inner: Rule) -> Rule {
    Rule::seq([tok(keyword), tok(ParenOpen), inner, tok(ParenClose)])
}

pub(super) fn define(b: &mut GrammarBuilder) {
    b.define(
        "primaryExpression",
        Rule::fold(sym("primaryStart"), postfix_suffixes()),
    )
    // Order matters: literal and keyword forms, then names, then parentheses.
    .define(
        "primaryStart",
        Rule::choice([
            sym("literal"),
            Rule::seq([sym("predefinedType"), Rule::followed_by(tok(Dot))]),
            sym("qualifiedAliasMember"),
            sym("simpleName"),
            Rule::node(ThisExpr, tok(KwThis)),
            sym("baseAccess"),
            sym("creationExpression"),
            sym("typeofExpression"),
            sym("sizeofExpression"),
            sym("defaultValueExpression"),
            sym("checkedExpression"),
            sym("uncheckedExpression"),
            sym("anonymousMethodExpression"),
            sym("parenthesizedExpression"),
        ]),
    )
    .define("literal", Rule::node(Literal, Rule::one_of(LITERALS.iter())))
    .define(
        "simpleName",
        Rule::node(
            SimpleName,
            Rule::seq([
                tok(Id),
                Rule::optional(Rule::seq([
                    sym("typeArgumentList"),
                    Rule::followed_by(Rule::choice([
                        Rule::one_of(TYPE_ARGUMENT_FOLLOWERS.iter()),
                        Rule::End,
                    ])),
                ])),
            ]),
        ),
    )
    .define(
        "qualifiedAliasMember",
        Rule::node(
            QualifiedAliasMember,
            Rule::seq([tok(Id), tok(DoubleColon), sym("simpleName")]),
        ),
    )
    .define(
        "baseAccess",
        Rule::node(
            BaseAccess,
            Rule::seq([
                tok(KwBase),
                Rule::choice([
                    Rule::seq([tok(Dot), sym("simpleName")]),
                    sym("bracketedArgumentList"),
                ]),
            ]),
        ),
    )
    .define(
        "parenthesizedExpression",
        Rule::node(
            ParenExpr,
            Rule::seq([tok(ParenOpen), sym("expression"), tok(ParenClose)]),
        ),
    )
    .define(
        "typeofExpression",
        Rule::node(
            TypeofExpr,
            Rule::seq([
                tok(KwTypeof),
                tok(ParenOpen),
                Rule::choice([
                    Rule::seq([sym("type"), tok(ParenClose)]),
                    Rule::seq([sym("unboundTypeName"), tok(ParenClose)]),
                    Rule::seq([tok(KwVoid), tok(ParenClose)]),
                ]),
            ]),
        ),
    )
    .define(
        "sizeofExpression",
        Rule::node(SizeofExpr, parenthesized(KwSizeof, sym("type"))),
    )
    .define(
        "defaultValueExpression",
        Rule::node(DefaultValueExpr, parenthesized(KwDefault, sym("type"))),
    )
    .define(
        "checkedExpression",
        Rule::node(CheckedExpr, parenthesized(KwChecked, sym("expression"))),
    )
    .define(
        "uncheckedExpression",
        Rule::node(UncheckedExpr, parenthesized(KwUnchecked, sym("expression"))),
    )
    .define(
        "argumentList",
        Rule::node(
            ArgumentList,
            Rule::seq([
                tok(ParenOpen),
                Rule::optional(Rule::separated(sym("argument"), tok(Comma))),
                tok(ParenClose),
            ]),
        ),
    )
    .define(
        "bracketedArgumentList",
        Rule::node(
            BracketedArgumentList,
            Rule::seq([
                tok(BracketOpen),
                Rule::separated(sym("argument"), tok(Comma)),
                tok(BracketClose),
            ]),
        ),
    )
    .define(
        "argument",
        Rule::node(
            Argument,
            Rule::seq([
                Rule::optional(Rule::seq([tok(Id), tok(Colon)])),
                Rule::optional(Rule::one_of([KwRef, KwOut])),
                sym("expression"),
            ]),
        ),
    )
    // Standalone access rules. Member access is tried before invocation and
    // neither includes the other's suffixes, so `memberAccess` rejects `a().b`
    // and `invocationExpression` rejects `a.b().c()`. `primaryExpression`
    // folds any mix of suffixes and accepts both.
    .define(
        "memberAccess",
        Rule::seq([
            Rule::followed_by(Rule::seq([sym("primaryStart"), tok(Dot)])),
            Rule::fold(
                sym("primaryStart"),
                [Suffix::new(
                    MemberAccess,
                    Rule::seq([tok(Dot), sym("simpleName")]),
                )],
            ),
        ]),
    )
    .define(
        "invocationExpression",
        Rule::node(
            InvocationExpr,
            Rule::seq([
                Rule::choice([sym("memberAccess"), sym("primaryStart")]),
                sym("argumentList"),
            ]),
        ),
    );
}
