//! Grammar rule expressions.

use crate::syntax::SyntaxKind;

/// Rule expression variants.
///
/// Rules refer to each other through [`Rule::Symbol`] names, so a grammar may be
/// cyclic; names are resolved against the registry when the rule runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Epsilon (empty match).
    Blank,
    /// Matches only when no significant tokens remain.
    End,
    /// Any single significant token.
    Any,
    /// Token of the given kind.
    Token(SyntaxKind),
    /// Identifier with exactly this text. Used for contextual keywords
    /// and for stand-in productions in isolated rule tests.
    Word(String),
    /// Tokens that must be adjacent in the source, with no trivia in between.
    Joined(Vec<SyntaxKind>),
    /// Reference to another rule.
    Symbol(String),
    /// Sequence of rules (must match in order).
    Seq(Vec<Rule>),
    /// Alternation (first matching wins).
    Choice(Vec<Rule>),
    /// Zero or one occurrence.
    Optional(Box<Rule>),
    /// Zero or more repetitions.
    Repeat(Box<Rule>),
    /// One or more repetitions.
    Repeat1(Box<Rule>),
    /// Wraps everything `content` produces in a node of `kind`.
    Node { kind: SyntaxKind, content: Box<Rule> },
    /// Left fold: match `operand`, then keep applying the first suffix that
    /// matches, wrapping the result so far and the suffix in a new node.
    Fold {
        operand: Box<Rule>,
        suffixes: Vec<Suffix>,
    },
    /// Positive lookahead; consumes nothing.
    FollowedBy(Box<Rule>),
    /// Negative lookahead; consumes nothing.
    NotFollowedBy(Box<Rule>),
}

/// One postfix continuation of a [`Rule::Fold`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suffix {
    pub kind: SyntaxKind,
    pub content: Rule,
}

impl Suffix {
    pub fn new(kind: SyntaxKind, content: Rule) -> Self {
        Self { kind, content }
    }
}

impl Rule {
    pub fn token(kind: SyntaxKind) -> Self {
        Rule::Token(kind)
    }

    pub fn word(text: impl Into<String>) -> Self {
        Rule::Word(text.into())
    }

    pub fn joined(kinds: impl IntoIterator<Item = SyntaxKind>) -> Self {
        Rule::Joined(kinds.into_iter().collect())
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Rule::Symbol(name.into())
    }

    pub fn seq(members: impl IntoIterator<Item = Rule>) -> Self {
        Rule::Seq(members.into_iter().collect())
    }

    pub fn choice(members: impl IntoIterator<Item = Rule>) -> Self {
        Rule::Choice(members.into_iter().collect())
    }

    /// Choice over single tokens.
    pub fn one_of(kinds: impl IntoIterator<Item = SyntaxKind>) -> Self {
        Rule::Choice(kinds.into_iter().map(Rule::Token).collect())
    }

    pub fn optional(content: Rule) -> Self {
        Rule::Optional(Box::new(content))
    }

    pub fn repeat(content: Rule) -> Self {
        Rule::Repeat(Box::new(content))
    }

    pub fn repeat1(content: Rule) -> Self {
        Rule::Repeat1(Box::new(content))
    }

    pub fn node(kind: SyntaxKind, content: Rule) -> Self {
        Rule::Node {
            kind,
            content: Box::new(content),
        }
    }

    pub fn fold(operand: Rule, suffixes: impl IntoIterator<Item = Suffix>) -> Self {
        Rule::Fold {
            operand: Box::new(operand),
            suffixes: suffixes.into_iter().collect(),
        }
    }

    pub fn followed_by(content: Rule) -> Self {
        Rule::FollowedBy(Box::new(content))
    }

    pub fn not_followed_by(content: Rule) -> Self {
        Rule::NotFollowedBy(Box::new(content))
    }

    /// `item (separator item)*`
    pub fn separated(item: Rule, separator: Rule) -> Self {
        Rule::seq([item.clone(), Rule::repeat(Rule::seq([separator, item]))])
    }

    /// Calls `f` with every rule name referenced from this expression, in order.
    pub fn for_each_symbol<'a>(&'a self, f: &mut impl FnMut(&'a str)) {
        match self {
            Rule::Blank
            | Rule::End
            | Rule::Any
            | Rule::Token(_)
            | Rule::Word(_)
            | Rule::Joined(_) => {}
            Rule::Symbol(name) => f(name),
            Rule::Seq(members) | Rule::Choice(members) => {
                for member in members {
                    member.for_each_symbol(f);
                }
            }
            Rule::Optional(content)
            | Rule::Repeat(content)
            | Rule::Repeat1(content)
            | Rule::Node { content, .. }
            | Rule::FollowedBy(content)
            | Rule::NotFollowedBy(content) => content.for_each_symbol(f),
            Rule::Fold { operand, suffixes } => {
                operand.for_each_symbol(f);
                for suffix in suffixes {
                    suffix.content.for_each_symbol(f);
                }
            }
        }
    }
}
