use crate::lexer::{lex, token_text};
use crate::syntax::SyntaxKind::{self, *};

fn snapshot(input: &str) -> String {
    lex(input)
        .iter()
        .map(|t| format!("{:?} {:?}", t.kind, token_text(input, t)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn kinds(input: &str) -> Vec<SyntaxKind> {
    lex(input)
        .into_iter()
        .map(|t| t.kind)
        .filter(|k| !k.is_trivia())
        .collect()
}

#[test]
fn simple_binary_expression() {
    insta::assert_snapshot!(snapshot("a + b * 2"), @r#"
    Id "a"
    Whitespace " "
    Plus "+"
    Whitespace " "
    Id "b"
    Whitespace " "
    Star "*"
    Whitespace " "
    IntegerLiteral "2"
    "#);
}

#[test]
fn shift_right_is_two_tokens() {
    insta::assert_snapshot!(snapshot("a >>= b >> c"), @r#"
    Id "a"
    Whitespace " "
    Gt ">"
    GtEq ">="
    Whitespace " "
    Id "b"
    Whitespace " "
    Gt ">"
    Gt ">"
    Whitespace " "
    Id "c"
    "#);
}

#[test]
fn nested_type_arguments() {
    assert_eq!(
        kinds("List<List<int>>"),
        vec![Id, Lt, Id, Lt, KwInt, Gt, Gt]
    );
}

#[test]
fn query_words_are_identifiers() {
    assert_eq!(
        kinds("from x in xs where x select x"),
        vec![Id, Id, KwIn, Id, Id, Id, Id, Id]
    );
}

#[test]
fn keywords_take_precedence_over_identifiers() {
    assert_eq!(
        kinds("int integer is isValid new newer"),
        vec![KwInt, Id, KwIs, Id, KwNew, Id]
    );
}

#[test]
fn escaped_identifier() {
    assert_eq!(kinds("@class _ __x"), vec![Id, Id, Id]);
}

#[test]
fn numeric_literals() {
    assert_eq!(
        kinds("42 0x1F 12UL 3u 1.5 .5 2e10 1.5e-3f 10m 7d"),
        vec![
            IntegerLiteral,
            IntegerLiteral,
            IntegerLiteral,
            IntegerLiteral,
            RealLiteral,
            RealLiteral,
            RealLiteral,
            RealLiteral,
            RealLiteral,
            RealLiteral,
        ]
    );
}

#[test]
fn integer_member_access_is_not_real() {
    assert_eq!(kinds("1.ToString()"), vec![IntegerLiteral, Dot, Id, ParenOpen, ParenClose]);
}

#[test]
fn string_and_char_literals() {
    let input = r#"'c' '\n' "plain" "esc\"aped" @"C:\dir" @"say ""hi""""#;
    assert_eq!(
        kinds(input),
        vec![
            CharLiteral,
            CharLiteral,
            StringLiteral,
            StringLiteral,
            StringLiteral,
            StringLiteral,
        ]
    );
}

#[test]
fn punctuation_longest_match() {
    assert_eq!(
        kinds("?? ? :: : => == = <<= << <= != ! && & || | ++ -- += -= %= ^="),
        vec![
            QuestionQuestion,
            Question,
            DoubleColon,
            Colon,
            Arrow,
            EqEq,
            Eq,
            LtLtEq,
            LtLt,
            LtEq,
            BangEq,
            Bang,
            AmpAmp,
            Amp,
            PipePipe,
            Pipe,
            PlusPlus,
            MinusMinus,
            PlusEq,
            MinusEq,
            PercentEq,
            CaretEq,
        ]
    );
}

#[test]
fn comments_and_newlines() {
    insta::assert_snapshot!(snapshot("a // tail\r\n/* b */c"), @r#"
    Id "a"
    Whitespace " "
    LineComment "// tail"
    Newline "\r\n"
    BlockComment "/* b */"
    Id "c"
    "#);
}

#[test]
fn block_comment_with_stars() {
    assert_eq!(kinds("/** doc **/ x"), vec![Id]);
}

#[test]
fn garbage_is_coalesced() {
    insta::assert_snapshot!(snapshot("a $$ b #"), @r##"
    Id "a"
    Whitespace " "
    Garbage "$$"
    Whitespace " "
    Id "b"
    Whitespace " "
    Garbage "#"
    "##);
}

#[test]
fn garbage_before_first_token() {
    insta::assert_snapshot!(snapshot("$#x"), @r#"
    Garbage "$#"
    Id "x"
    "#);
}

#[test]
fn spans_cover_source() {
    let input = "x.y(1)";
    let tokens = lex(input);
    let rebuilt: String = tokens.iter().map(|t| token_text(input, t)).collect();
    assert_eq!(rebuilt, input);
    assert_eq!(u32::from(tokens[2].span.start()), 2);
}

#[test]
fn empty_input() {
    assert!(lex("").is_empty());
}
