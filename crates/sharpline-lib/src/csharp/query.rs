//! Query expressions (`from ... select ...`).
//!
//! Query keywords are contextual: they lex as identifiers and are matched by
//! text, so `from` and `select` stay usable as ordinary names elsewhere.

use sharpline_core::{GrammarBuilder, Rule, SyntaxKind::*};

use super::{kw, sym, tok};

const QUERY_KEYWORDS: &[&str] = &[
    "from",
    "let",
    "where",
    "join",
    "on",
    "equals",
    "into",
    "orderby",
    "ascending",
    "descending",
    "select",
    "group",
    "by",
];

/// Any contextual query keyword.
pub(super) fn query_keyword() -> Rule {
    Rule::choice(QUERY_KEYWORDS.iter().map(|word| kw(word)))
}

/// Optional explicit range variable type: `from int x in ...`.
fn typed_range_variable() -> Rule {
    Rule::seq([
        Rule::optional(Rule::seq([sym("type"), Rule::followed_by(tok(Id))])),
        tok(Id),
    ])
}

/// `join [type] x in source on left equals right`
fn join_head() -> Vec<Rule> {
    vec![
        kw("join"),
        typed_range_variable(),
        tok(KwIn),
        sym("expression"),
        kw("on"),
        sym("expression"),
        kw("equals"),
        sym("expression"),
    ]
}

pub(super) fn define(b: &mut GrammarBuilder) {
    b.define(
        "queryExpression",
        Rule::node(QueryExpr, Rule::seq([sym("fromClause"), sym("queryBody")])),
    )
    .define(
        "fromClause",
        Rule::node(
            FromClause,
            Rule::seq([
                kw("from"),
                typed_range_variable(),
                tok(KwIn),
                sym("expression"),
            ]),
        ),
    )
    .define(
        "queryBody",
        Rule::node(
            QueryBody,
            Rule::seq([
                Rule::repeat(sym("queryBodyClause")),
                sym("selectOrGroupClause"),
                Rule::optional(sym("queryContinuation")),
            ]),
        ),
    )
    // `join ... into` must be tried before plain `join`.
    .define(
        "queryBodyClause",
        Rule::choice([
            sym("fromClause"),
            sym("letClause"),
            sym("whereClause"),
            sym("joinIntoClause"),
            sym("joinClause"),
            sym("orderbyClause"),
        ]),
    )
    .define(
        "letClause",
        Rule::node(
            LetClause,
            Rule::seq([kw("let"), tok(Id), tok(Eq), sym("expression")]),
        ),
    )
    .define(
        "whereClause",
        Rule::node(WhereClause, Rule::seq([kw("where"), sym("expression")])),
    )
    .define("joinClause", Rule::node(JoinClause, Rule::seq(join_head())))
    .define(
        "joinIntoClause",
        Rule::node(
            JoinIntoClause,
            Rule::seq(join_head().into_iter().chain([kw("into"), tok(Id)])),
        ),
    )
    .define(
        "orderbyClause",
        Rule::node(
            OrderByClause,
            Rule::seq([
                kw("orderby"),
                Rule::separated(sym("ordering"), tok(Comma)),
            ]),
        ),
    )
    .define(
        "ordering",
        Rule::node(
            Ordering,
            Rule::seq([
                sym("expression"),
                Rule::optional(Rule::choice([kw("ascending"), kw("descending")])),
            ]),
        ),
    )
    .define(
        "selectOrGroupClause",
        Rule::choice([sym("selectClause"), sym("groupClause")]),
    )
    .define(
        "selectClause",
        Rule::node(SelectClause, Rule::seq([kw("select"), sym("expression")])),
    )
    .define(
        "groupClause",
        Rule::node(
            GroupClause,
            Rule::seq([kw("group"), sym("expression"), kw("by"), sym("expression")]),
        ),
    )
    .define(
        "queryContinuation",
        Rule::node(
            QueryContinuation,
            Rule::seq([kw("into"), tok(Id), sym("queryBody")]),
        ),
    );
}
