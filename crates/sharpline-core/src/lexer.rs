//! Reference lexer for C#-family expressions.
//!
//! Every literal is one token: integer and real literals keep their type
//! suffixes (`10UL`, `1.5m`), and regular and verbatim strings (`"a\n"`,
//! `@"C:\dir"`) are never split. Query words such as `from` or `orderby`
//! come out as plain `Id` tokens; the grammar matches them by text. `>` is
//! always a single token, even in `>>` and `>>=`.
//!
//! Characters no token accepts are grouped: each run of them becomes one
//! `Garbage` token, which no grammar rule matches.

use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

use crate::syntax::SyntaxKind;

/// A token kind and its byte span. Text comes from [`token_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes `source`, trivia included. The tokens cover it without gaps.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = SyntaxKind::lexer(source);
    let mut garbage_from: Option<usize> = None;

    while let Some(next) = lexer.next() {
        let span = lexer.span();
        match next {
            Ok(kind) => {
                if let Some(start) = garbage_from.take() {
                    tokens.push(Token::new(SyntaxKind::Garbage, text_range(start..span.start)));
                }
                tokens.push(Token::new(kind, text_range(span)));
            }
            Err(()) => {
                garbage_from.get_or_insert(span.start);
            }
        }
    }
    if let Some(start) = garbage_from {
        tokens.push(Token::new(SyntaxKind::Garbage, text_range(start..source.len())));
    }

    tokens
}

/// The slice of `source` a token covers.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
