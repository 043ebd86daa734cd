//! Lambdas and anonymous methods.
//!
//! Statements are out of scope, so a block body is kept as a balanced run of
//! braces with its tokens as-is.

use sharpline_core::{GrammarBuilder, Rule, SyntaxKind::*};

use super::{sym, tok};

pub(super) fn define(b: &mut GrammarBuilder) {
    b.define(
        "lambdaExpression",
        Rule::node(
            LambdaExpr,
            Rule::seq([
                sym("anonymousFunctionSignature"),
                tok(Arrow),
                sym("anonymousFunctionBody"),
            ]),
        ),
    )
    .define(
        "anonymousFunctionSignature",
        Rule::choice([
            sym("explicitAnonymousFunctionSignature"),
            sym("implicitAnonymousFunctionSignature"),
        ]),
    )
    .define(
        "explicitAnonymousFunctionSignature",
        Rule::node(
            ParameterList,
            Rule::seq([
                tok(ParenOpen),
                Rule::optional(Rule::separated(
                    sym("anonymousFunctionParameter"),
                    tok(Comma),
                )),
                tok(ParenClose),
            ]),
        ),
    )
    // `ref int x`, `string s`, or just `x` when the type is inferred.
    .define(
        "anonymousFunctionParameter",
        Rule::node(
            Parameter,
            Rule::choice([
                Rule::seq([
                    Rule::optional(Rule::one_of([KwRef, KwOut])),
                    sym("type"),
                    tok(Id),
                ]),
                tok(Id),
            ]),
        ),
    )
    .define(
        "implicitAnonymousFunctionSignature",
        Rule::node(Parameter, tok(Id)),
    )
    .define(
        "anonymousFunctionBody",
        Rule::choice([sym("expression"), sym("block")]),
    )
    .define(
        "anonymousMethodExpression",
        Rule::node(
            AnonymousMethodExpr,
            Rule::seq([
                tok(KwDelegate),
                Rule::optional(sym("explicitAnonymousFunctionSignature")),
                sym("block"),
            ]),
        ),
    )
    .define(
        "block",
        Rule::node(
            Block,
            Rule::seq([
                tok(BraceOpen),
                Rule::repeat(sym("blockContent")),
                tok(BraceClose),
            ]),
        ),
    )
    .define(
        "blockContent",
        Rule::choice([
            Rule::seq([
                tok(BraceOpen),
                Rule::repeat(sym("blockContent")),
                tok(BraceClose),
            ]),
            Rule::seq([
                Rule::not_followed_by(Rule::one_of([BraceOpen, BraceClose])),
                Rule::Any,
            ]),
        ]),
    );
}
