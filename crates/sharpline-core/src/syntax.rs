//! Syntax kinds for C#-family expressions.
//!
//! `SyntaxKind` serves dual roles: token kinds (from the lexer) and node kinds (from the parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! `SharpLang` implements Rowan's `Language` trait for tree construction.
//!
//! Contextual keywords (`from`, `where`, `select`, ...) are not listed here: the lexer
//! produces `Id` for them and grammar rules match them by text.

use logos::Logos;
use rowan::Language;
use serde::{Deserialize, Serialize};

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(
    Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(".")]
    Dot,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    /// `::` for alias-qualified names (`global::System`).
    #[token("::")]
    DoubleColon,

    #[token(";")]
    Semicolon,

    #[token("?")]
    Question,

    #[token("??")]
    QuestionQuestion,

    #[token("=>")]
    Arrow,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token("&")]
    Amp,

    #[token("|")]
    Pipe,

    #[token("^")]
    Caret,

    #[token("!")]
    Bang,

    #[token("~")]
    Tilde,

    #[token("=")]
    Eq,

    #[token("<")]
    Lt,

    /// `>` is never merged with a following `>` or `>=`: that would break nested
    /// type argument lists (`List<List<int>>`). The grammar joins adjacent tokens
    /// for shift-right and `>>=` instead.
    #[token(">")]
    Gt,

    #[token("++")]
    PlusPlus,

    #[token("--")]
    MinusMinus,

    #[token("&&")]
    AmpAmp,

    #[token("||")]
    PipePipe,

    #[token("==")]
    EqEq,

    #[token("!=")]
    BangEq,

    #[token("<=")]
    LtEq,

    #[token(">=")]
    GtEq,

    #[token("<<")]
    LtLt,

    #[token("+=")]
    PlusEq,

    #[token("-=")]
    MinusEq,

    #[token("*=")]
    StarEq,

    #[token("/=")]
    SlashEq,

    #[token("%=")]
    PercentEq,

    #[token("&=")]
    AmpEq,

    #[token("|=")]
    PipeEq,

    #[token("^=")]
    CaretEq,

    #[token("<<=")]
    LtLtEq,

    #[regex(r"[0-9]+(?:[uU][lL]?|[lL][uU]?)?")]
    #[regex(r"0[xX][0-9a-fA-F]+(?:[uU][lL]?|[lL][uU]?)?")]
    IntegerLiteral,

    #[regex(r"[0-9]*\.[0-9]+(?:[eE][+-]?[0-9]+)?[fFdDmM]?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+[fFdDmM]?")]
    #[regex(r"[0-9]+[fFdDmM]")]
    RealLiteral,

    #[regex(r"'(?:[^'\\\n]|\\.)+'")]
    CharLiteral,

    /// Regular (`"a\n"`) and verbatim (`@"C:\dir"`) strings.
    #[regex(r#""(?:[^"\\\n]|\\.)*""#)]
    #[regex(r#"@"(?:[^"]|"")*""#, allow_greedy = true)]
    StringLiteral,

    #[token("as")]
    KwAs,

    #[token("base")]
    KwBase,

    #[token("bool")]
    KwBool,

    #[token("byte")]
    KwByte,

    #[token("char")]
    KwChar,

    #[token("checked")]
    KwChecked,

    #[token("decimal")]
    KwDecimal,

    #[token("default")]
    KwDefault,

    #[token("delegate")]
    KwDelegate,

    #[token("double")]
    KwDouble,

    #[token("false")]
    KwFalse,

    #[token("float")]
    KwFloat,

    #[token("in")]
    KwIn,

    #[token("int")]
    KwInt,

    #[token("is")]
    KwIs,

    #[token("long")]
    KwLong,

    #[token("new")]
    KwNew,

    #[token("null")]
    KwNull,

    #[token("object")]
    KwObject,

    #[token("out")]
    KwOut,

    #[token("params")]
    KwParams,

    #[token("ref")]
    KwRef,

    #[token("sbyte")]
    KwSbyte,

    #[token("short")]
    KwShort,

    #[token("sizeof")]
    KwSizeof,

    #[token("string")]
    KwString,

    #[token("this")]
    KwThis,

    #[token("true")]
    KwTrue,

    #[token("typeof")]
    KwTypeof,

    #[token("uint")]
    KwUint,

    #[token("ulong")]
    KwUlong,

    #[token("unchecked")]
    KwUnchecked,

    #[token("ushort")]
    KwUshort,

    #[token("void")]
    KwVoid,

    /// Identifier, optionally `@`-escaped. Defined after keywords so they take precedence.
    #[regex(r"@?[a-zA-Z_][a-zA-Z0-9_]*")]
    Id,

    #[regex(r"[ \t\x0C]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    #[token("\r")]
    Newline,

    #[regex(r"//[^\r\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/", allow_greedy = true)]
    BlockComment,

    /// Coalesced unrecognized characters
    Garbage,
    Error,

    // --- Node kinds (non-terminals) ---
    Root,
    Literal,
    SimpleName,
    TypeArgumentList,
    PredefinedType,
    NamedType,
    UnboundTypeName,
    NullableType,
    ArrayType,
    RankSpecifier,
    QualifiedAliasMember,
    ThisExpr,
    BaseAccess,
    ParenExpr,
    MemberAccess,
    InvocationExpr,
    ElementAccess,
    PostIncrementExpr,
    PostDecrementExpr,
    ArgumentList,
    BracketedArgumentList,
    Argument,
    TypeofExpr,
    SizeofExpr,
    DefaultValueExpr,
    CheckedExpr,
    UncheckedExpr,
    PrefixUnaryExpr,
    CastExpr,
    BinaryExpr,
    IsExpr,
    AsExpr,
    ConditionalExpr,
    AssignmentExpr,
    LambdaExpr,
    AnonymousMethodExpr,
    ParameterList,
    Parameter,
    Block,
    QueryExpr,
    FromClause,
    QueryBody,
    LetClause,
    WhereClause,
    JoinClause,
    JoinIntoClause,
    OrderByClause,
    Ordering,
    SelectClause,
    GroupClause,
    QueryContinuation,
    ObjectCreationExpr,
    ArrayCreationExpr,
    ImplicitArrayCreationExpr,
    AnonymousObjectCreationExpr,
    ObjectInitializer,
    MemberInitializer,
    CollectionInitializer,
    ElementInitializer,
    ArrayInitializer,
    MemberDeclarator,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | LineComment | BlockComment)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage)
    }

    #[inline]
    pub fn is_token(self) -> bool {
        (self as u16) < (Root as u16)
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        token_sets::KEYWORDS.contains(self)
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        token_sets::LITERALS.contains(self)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SharpLang {}

impl Language for SharpLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<SharpLang>;
pub type SyntaxToken = rowan::SyntaxToken<SharpLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 128-bit bitset of token `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 128.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 128, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 128, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 128 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }

    #[inline]
    pub const fn difference(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 & !other.0)
    }

    /// Kinds in discriminant order.
    pub fn iter(self) -> impl Iterator<Item = SyntaxKind> {
        (0..128u16)
            .filter(move |&i| i < __LAST as u16 && self.0 & (1u128 << i) != 0)
            // SAFETY: bounded by `__LAST` above, and SyntaxKind is repr(u16)
            .map(|i| unsafe { std::mem::transmute::<u16, SyntaxKind>(i) })
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Pre-defined token sets used by the expression grammar.
pub mod token_sets {
    use super::*;

    pub const LITERALS: TokenSet = TokenSet::new(&[
        IntegerLiteral,
        RealLiteral,
        CharLiteral,
        StringLiteral,
        KwTrue,
        KwFalse,
        KwNull,
    ]);

    /// Keywords naming built-in types. `void` is excluded: it is only valid in `typeof`.
    pub const PREDEFINED_TYPES: TokenSet = TokenSet::new(&[
        KwBool, KwByte, KwChar, KwDecimal, KwDouble, KwFloat, KwInt, KwLong, KwObject, KwSbyte,
        KwShort, KwString, KwUint, KwUlong, KwUshort,
    ]);

    pub const KEYWORDS: TokenSet = TokenSet::new(&[
        KwAs,
        KwBase,
        KwChecked,
        KwDefault,
        KwDelegate,
        KwFalse,
        KwIn,
        KwIs,
        KwNew,
        KwNull,
        KwOut,
        KwParams,
        KwRef,
        KwSizeof,
        KwThis,
        KwTrue,
        KwTypeof,
        KwUnchecked,
        KwVoid,
    ])
    .union(PREDEFINED_TYPES);

    /// Tokens that may follow `(T)` for it to be read as a cast rather than a
    /// parenthesized expression.
    pub const CAST_FOLLOWERS: TokenSet = TokenSet::new(&[Tilde, Bang, ParenOpen, Id])
        .union(LITERALS)
        .union(KEYWORDS.difference(TokenSet::new(&[KwAs, KwIs])));

    /// Tokens that may follow `Name<...>` for the angle brackets to be read as a
    /// type argument list rather than comparisons.
    pub const TYPE_ARGUMENT_FOLLOWERS: TokenSet = TokenSet::new(&[
        ParenOpen,
        ParenClose,
        BracketClose,
        BraceClose,
        Colon,
        Semicolon,
        Comma,
        Dot,
        Question,
        EqEq,
        BangEq,
        Pipe,
        Caret,
        AmpAmp,
        PipePipe,
        Amp,
    ]);

    pub const ASSIGNMENT_OPERATORS: TokenSet = TokenSet::new(&[
        Eq, PlusEq, MinusEq, StarEq, SlashEq, PercentEq, AmpEq, PipeEq, CaretEq, LtLtEq,
    ]);

    pub const TRIVIA: TokenSet = TokenSet::new(&[Whitespace, Newline, LineComment, BlockComment]);
}
