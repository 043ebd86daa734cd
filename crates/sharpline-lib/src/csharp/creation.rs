//! `new` expressions and their initializers.

use sharpline_core::{GrammarBuilder, Rule, SyntaxKind, SyntaxKind::*};

use super::{comma_list_trailing, sym, tok};

/// `{ item, item, }` with the trailing comma allowed and the list optional.
fn braced(kind: SyntaxKind, item: Rule) -> Rule {
    Rule::node(
        kind,
        Rule::seq([
            tok(BraceOpen),
            Rule::optional(comma_list_trailing(item)),
            tok(BraceClose),
        ]),
    )
}

pub(super) fn define(b: &mut GrammarBuilder) {
    b.define(
        "creationExpression",
        Rule::choice([
            sym("arrayCreationExpression"),
            sym("implicitArrayCreationExpression"),
            sym("anonymousObjectCreationExpression"),
            sym("objectCreationExpression"),
        ]),
    )
    // An array type alone is not enough: either sizes or an initializer.
    .define(
        "arrayCreationExpression",
        Rule::node(
            ArrayCreationExpr,
            Rule::choice([
                Rule::seq([
                    tok(KwNew),
                    sym("nonArrayType"),
                    tok(BracketOpen),
                    Rule::separated(sym("expression"), tok(Comma)),
                    tok(BracketClose),
                    Rule::repeat(sym("rankSpecifier")),
                    Rule::optional(sym("arrayInitializer")),
                ]),
                Rule::seq([tok(KwNew), sym("arrayType"), sym("arrayInitializer")]),
            ]),
        ),
    )
    .define(
        "implicitArrayCreationExpression",
        Rule::node(
            ImplicitArrayCreationExpr,
            Rule::seq([tok(KwNew), sym("rankSpecifier"), sym("arrayInitializer")]),
        ),
    )
    .define(
        "anonymousObjectCreationExpression",
        Rule::node(
            AnonymousObjectCreationExpr,
            Rule::seq([
                tok(KwNew),
                tok(BraceOpen),
                Rule::optional(comma_list_trailing(sym("memberDeclarator"))),
                tok(BraceClose),
            ]),
        ),
    )
    // `Name = value`, or a projection like `c.Country` that takes its name
    // from the last member.
    .define(
        "memberDeclarator",
        Rule::node(
            MemberDeclarator,
            Rule::choice([
                Rule::seq([tok(Id), tok(Eq), sym("expression")]),
                sym("primaryExpression"),
            ]),
        ),
    )
    // Without an argument list only a collection initializer may follow.
    .define(
        "objectCreationExpression",
        Rule::node(
            ObjectCreationExpr,
            Rule::choice([
                Rule::seq([
                    tok(KwNew),
                    sym("type"),
                    sym("argumentList"),
                    Rule::optional(sym("objectOrCollectionInitializer")),
                ]),
                Rule::seq([tok(KwNew), sym("type"), sym("collectionInitializer")]),
            ]),
        ),
    )
    .define(
        "objectOrCollectionInitializer",
        Rule::choice([sym("objectInitializer"), sym("collectionInitializer")]),
    )
    .define(
        "objectInitializer",
        braced(ObjectInitializer, sym("memberInitializer")),
    )
    .define(
        "memberInitializer",
        Rule::node(
            MemberInitializer,
            Rule::seq([
                tok(Id),
                tok(Eq),
                Rule::choice([sym("expression"), sym("objectOrCollectionInitializer")]),
            ]),
        ),
    )
    .define(
        "collectionInitializer",
        Rule::node(
            CollectionInitializer,
            Rule::seq([
                tok(BraceOpen),
                comma_list_trailing(sym("elementInitializer")),
                tok(BraceClose),
            ]),
        ),
    )
    .define(
        "elementInitializer",
        Rule::choice([
            sym("nonAssignmentExpression"),
            Rule::node(
                ElementInitializer,
                Rule::seq([
                    tok(BraceOpen),
                    Rule::separated(sym("expression"), tok(Comma)),
                    tok(BraceClose),
                ]),
            ),
        ]),
    )
    .define(
        "arrayInitializer",
        braced(ArrayInitializer, sym("variableInitializer")),
    )
    .define(
        "variableInitializer",
        Rule::choice([sym("expression"), sym("arrayInitializer")]),
    );
}
