//! Type syntax: predefined, named, nullable, array, and unbound generic names.

use sharpline_core::syntax::token_sets::PREDEFINED_TYPES;
use sharpline_core::{GrammarBuilder, Rule, SyntaxKind::*};

use super::{sym, tok};

/// `?` of a nullable type. Rejected when an operand follows, so the `?` of a
/// conditional after `x is T` stays with the conditional.
fn nullable_marker() -> Rule {
    Rule::seq([
        tok(Question),
        Rule::not_followed_by(sym("unaryExpression")),
    ])
}

/// `<>`, `<,>`, `<,,>` ...
fn generic_dimension_specifier() -> Rule {
    Rule::seq([tok(Lt), Rule::repeat(tok(Comma)), tok(Gt)])
}

pub(super) fn define(b: &mut GrammarBuilder) {
    b.define(
        "type",
        Rule::choice([sym("arrayType"), sym("nullableType"), sym("nonArrayType")]),
    )
    .define(
        "nonArrayType",
        Rule::choice([sym("predefinedType"), sym("namedType")]),
    )
    .define(
        "predefinedType",
        Rule::node(PredefinedType, Rule::one_of(PREDEFINED_TYPES.iter())),
    )
    .define(
        "namedType",
        {
            let segment = Rule::seq([tok(Id), Rule::optional(sym("typeArgumentList"))]);
            Rule::node(
                NamedType,
                Rule::seq([
                    Rule::optional(Rule::seq([tok(Id), tok(DoubleColon)])),
                    segment.clone(),
                    Rule::repeat(Rule::seq([tok(Dot), segment])),
                ]),
            )
        },
    )
    .define(
        "nullableType",
        Rule::node(NullableType, Rule::seq([sym("nonArrayType"), nullable_marker()])),
    )
    .define(
        "arrayType",
        Rule::node(
            ArrayType,
            Rule::seq([
                sym("nonArrayType"),
                Rule::optional(nullable_marker()),
                Rule::repeat1(sym("rankSpecifier")),
            ]),
        ),
    )
    .define(
        "rankSpecifier",
        Rule::node(
            RankSpecifier,
            Rule::seq([tok(BracketOpen), Rule::repeat(tok(Comma)), tok(BracketClose)]),
        ),
    )
    .define(
        "typeArgumentList",
        Rule::node(
            TypeArgumentList,
            Rule::seq([tok(Lt), Rule::separated(sym("type"), tok(Comma)), tok(Gt)]),
        ),
    )
    .define(
        "unboundTypeName",
        Rule::node(
            UnboundTypeName,
            Rule::seq([
                tok(Id),
                Rule::optional(generic_dimension_specifier()),
                Rule::repeat(Rule::seq([
                    tok(Dot),
                    tok(Id),
                    Rule::optional(generic_dimension_specifier()),
                ])),
            ]),
        ),
    );
}
