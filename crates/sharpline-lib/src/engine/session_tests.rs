use indoc::indoc;
use rowan::TextSize;
use sharpline_core::{Grammar, Rule, Suffix, SyntaxKind::*, lex};

use super::*;
use crate::Error;
use crate::test_utils::expect_sexp_with;

fn arith() -> Grammar {
    let mut b = Grammar::builder("arith");
    b.define(
        "sum",
        Rule::fold(
            Rule::symbol("atom"),
            [Suffix::new(
                BinaryExpr,
                Rule::seq([Rule::one_of([Plus, Minus]), Rule::symbol("atom")]),
            )],
        ),
    )
    .define(
        "atom",
        Rule::choice([
            Rule::node(Literal, Rule::token(IntegerLiteral)),
            Rule::node(SimpleName, Rule::token(Id)),
            Rule::node(
                ParenExpr,
                Rule::seq([
                    Rule::token(ParenOpen),
                    Rule::symbol("sum"),
                    Rule::token(ParenClose),
                ]),
            ),
        ]),
    );
    b.build().unwrap()
}

fn single(name: &str, rule: Rule) -> Grammar {
    let mut b = Grammar::builder("single");
    b.define(name, rule);
    b.build().unwrap()
}

fn run(grammar: &Grammar, rule: &str, input: &str) -> ParseOutcome {
    let tokens = lex(input);
    Parser::new(grammar).parse(rule, input, &tokens).unwrap()
}

#[test]
fn fold_builds_left_leaning_tree() {
    let parse = run(&arith(), "sum", "1 + 2 - x").into_parse().unwrap();

    insta::assert_snapshot!(parse.dump_cst(), @r#"
    Root
      BinaryExpr
        BinaryExpr
          Literal
            IntegerLiteral "1"
          Plus "+"
          Literal
            IntegerLiteral "2"
        Minus "-"
        SimpleName
          Id "x"
    "#);
}

#[test]
fn trivia_goes_before_the_next_node() {
    let parse = run(&arith(), "sum", "1 + x").into_parse().unwrap();
    let out = parse.printer().with_trivia(true).with_spans(true).dump();

    insta::assert_snapshot!(out, @r#"
    Root [0..5]
      BinaryExpr [0..5]
        Literal [0..1]
          IntegerLiteral [0..1] "1"
        Whitespace [1..2] " "
        Plus [2..3] "+"
        Whitespace [3..4] " "
        SimpleName [4..5]
          Id [4..5] "x"
    "#);
}

#[test]
fn leading_and_trailing_trivia_stay_in_root() {
    let parse = run(&arith(), "atom", " x ").into_parse().unwrap();
    let out = parse.printer().with_trivia(true).with_spans(true).dump();

    insta::assert_snapshot!(out, @r#"
    Root [0..3]
      Whitespace [0..1] " "
      SimpleName [1..2]
        Id [1..2] "x"
      Whitespace [2..3] " "
    "#);
}

#[test]
fn tree_is_lossless() {
    let input = indoc! {"
        (a /* first */ +
          1) - b // done
    "};
    let parse = run(&arith(), "sum", input).into_parse().unwrap();
    assert_eq!(parse.syntax().to_string(), input);
}

#[test]
fn first_alternative_wins() {
    let grammar = single(
        "pick",
        Rule::choice([
            Rule::token(Id),
            Rule::seq([Rule::token(Id), Rule::token(Dot), Rule::token(Id)]),
        ]),
    );
    let tokens = lex("a.b");

    let prefix = Parser::new(&grammar)
        .parse_prefix("pick", "a.b", &tokens)
        .unwrap()
        .unwrap();
    assert_eq!(prefix.end, 1);

    let outcome = run(&grammar, "pick", "a.b");
    assert_eq!(
        outcome.no_match(),
        Some(&NoMatch {
            rule: "pick".to_owned(),
            offset: TextSize::from(1),
            found: Some(Dot),
        })
    );
}

#[test]
fn failed_alternative_leaves_no_nodes() {
    let grammar = single(
        "r",
        Rule::choice([
            Rule::seq([Rule::node(SimpleName, Rule::token(Id)), Rule::token(Comma)]),
            Rule::node(
                MemberAccess,
                Rule::seq([Rule::node(SimpleName, Rule::token(Id)), Rule::token(Dot)]),
            ),
        ]),
    );

    insta::assert_snapshot!(expect_sexp_with(&grammar, "r", "a."), @"(MemberAccess a .)");
}

#[test]
fn lookahead_consumes_nothing() {
    let grammar = single(
        "r",
        Rule::seq([
            Rule::followed_by(Rule::token(Id)),
            Rule::token(Id),
            Rule::not_followed_by(Rule::token(Dot)),
        ]),
    );

    assert!(run(&grammar, "r", "a").is_match());

    let outcome = run(&grammar, "r", "a.b");
    let no_match = outcome.no_match().unwrap();
    assert_eq!(no_match.offset, TextSize::from(1));
    assert_eq!(no_match.found, Some(Dot));
}

#[test]
fn joined_tokens_must_touch() {
    let name = || Rule::node(SimpleName, Rule::token(Id));
    let grammar = single(
        "shift",
        Rule::seq([name(), Rule::joined([Gt, Gt]), name()]),
    );

    assert!(run(&grammar, "shift", "a >> b").is_match());

    let outcome = run(&grammar, "shift", "a > > b");
    let no_match = outcome.no_match().unwrap();
    assert_eq!(no_match.offset, TextSize::from(4));
    assert_eq!(no_match.found, Some(Gt));
}

#[test]
fn words_match_identifier_text() {
    let grammar = single("from", Rule::seq([Rule::word("from"), Rule::token(Id)]));

    assert!(run(&grammar, "from", "from x").is_match());
    assert!(!run(&grammar, "from", "form x").is_match());
    assert!(!run(&grammar, "from", "@from x").is_match());
}

#[test]
fn unconsumed_input_is_no_match() {
    let outcome = run(&arith(), "sum", "1 + 2 3");
    let no_match = outcome.no_match().unwrap();
    assert_eq!(no_match.rule, "sum");
    assert_eq!(no_match.offset, TextSize::from(6));
    assert_eq!(no_match.found, Some(IntegerLiteral));
}

#[test]
fn running_out_of_input_reports_end() {
    let outcome = run(&arith(), "sum", "1 +");
    let no_match = outcome.no_match().unwrap();
    assert_eq!(no_match.offset, TextSize::from(3));
    assert_eq!(no_match.found, None);

    let outcome = run(&arith(), "atom", "");
    assert_eq!(outcome.no_match().unwrap().offset, TextSize::from(0));
}

#[test]
fn zero_width_repetition_terminates() {
    let grammar = single("r", Rule::repeat(Rule::optional(Rule::token(Id))));

    assert!(run(&grammar, "r", "").is_match());
    assert!(run(&grammar, "r", "a b c").is_match());
}

#[test]
fn unknown_entry_rule_is_an_error() {
    let grammar = arith();
    let err = Parser::new(&grammar).parse("product", "1", &lex("1")).unwrap_err();

    assert!(matches!(&err, Error::UnknownRule(name) if name == "product"));
    insta::assert_snapshot!(err, @"no rule named `product`");
}

#[test]
fn recursion_fuel_bounds_nesting() {
    let input = format!("{}x{}", "(".repeat(200), ")".repeat(200));
    let grammar = arith();
    let tokens = lex(&input);

    let err = Parser::new(&grammar)
        .with_recursion_fuel(Some(50))
        .parse("sum", &input, &tokens)
        .unwrap_err();
    assert!(matches!(err, Error::RecursionLimitExceeded));

    let outcome = Parser::new(&grammar).parse("sum", &input, &tokens).unwrap();
    assert!(outcome.is_match());
}

#[test]
fn deep_nesting_grows_the_stack() {
    let input = format!("{}x{}", "(".repeat(1000), ")".repeat(1000));
    let grammar = arith();
    let tokens = lex(&input);

    let outcome = Parser::new(&grammar)
        .with_recursion_fuel(None)
        .parse("sum", &input, &tokens)
        .unwrap();
    assert_eq!(outcome.parse().unwrap().syntax().to_string(), input);
}

#[test]
fn memoization_does_not_change_the_tree() {
    let grammar = arith();
    let input = "(a + (b - 1)) - (a + (b - 1))";
    let tokens = lex(input);

    let with_memo = Parser::new(&grammar).parse("sum", input, &tokens).unwrap();
    let without = Parser::new(&grammar)
        .with_memoization(false)
        .parse("sum", input, &tokens)
        .unwrap();

    assert_eq!(
        with_memo.parse().unwrap().green(),
        without.parse().unwrap().green()
    );
}

#[test]
fn memoized_failures_still_count_toward_no_match() {
    let mut b = Grammar::builder("pairs");
    b.define(
        "start",
        Rule::choice([
            Rule::seq([Rule::followed_by(Rule::symbol("pair")), Rule::token(Dot)]),
            Rule::symbol("pair"),
        ]),
    )
    .define(
        "pair",
        Rule::seq([Rule::token(Id), Rule::token(Comma), Rule::token(Id)]),
    );
    let grammar = b.build().unwrap();
    let input = "a , .";
    let tokens = lex(input);

    for memoize in [true, false] {
        let outcome = Parser::new(&grammar)
            .with_memoization(memoize)
            .parse("start", input, &tokens)
            .unwrap();
        let no_match = outcome.no_match().unwrap();
        assert_eq!(no_match.offset, TextSize::from(4), "memoize: {memoize}");
        assert_eq!(no_match.found, Some(Dot));
    }
}

#[test]
fn failures_inside_lookahead_are_not_reported() {
    let grammar = single(
        "r",
        Rule::seq([
            Rule::not_followed_by(Rule::seq([
                Rule::token(Id),
                Rule::token(Dot),
                Rule::token(Id),
            ])),
            Rule::token(Id),
        ]),
    );

    let no_match = run(&grammar, "r", "a . 1").no_match().cloned().unwrap();
    assert_eq!(no_match.offset, TextSize::from(2));
    assert_eq!(no_match.found, Some(Dot));
}

#[test]
fn prefix_match_stops_at_last_consumed_token() {
    let grammar = arith();
    let input = "1 + 2 ) rest";
    let tokens = lex(input);

    let prefix = Parser::new(&grammar)
        .parse_prefix("sum", input, &tokens)
        .unwrap()
        .unwrap();
    assert_eq!(prefix.end, 5);
    assert_eq!(prefix.parse.syntax().to_string(), "1 + 2");
    assert_eq!(prefix.parse.rule(), "sum");

    let none = Parser::new(&grammar)
        .parse_prefix("sum", "+ 1", &lex("+ 1"))
        .unwrap();
    assert!(none.is_none());
}
