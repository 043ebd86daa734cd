//! JSON form of a grammar.
//!
//! Mirrors tree-sitter's `grammar.json` layout: internally tagged rules with a
//! `type` field, rules kept in definition order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::registry::{Grammar, GrammarError};
use super::types::{Rule, Suffix};
use crate::syntax::SyntaxKind;

impl Grammar {
    /// Parse and validate a grammar from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, GrammarError> {
        let raw: RawGrammar = serde_json::from_str(json)?;
        let mut builder = Grammar::builder(raw.name);
        for (name, rule) in raw.rules {
            builder.define(name, rule.into());
        }
        builder.build()
    }

    pub fn to_json(&self) -> Result<String, GrammarError> {
        let raw = RawGrammar {
            name: self.name().to_owned(),
            rules: self
                .rules()
                .map(|(name, rule)| (name.to_owned(), RawRule::from(rule)))
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&raw)?)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct RawGrammar {
    name: String,
    rules: IndexMap<String, RawRule>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
#[allow(clippy::upper_case_acronyms, non_camel_case_types)]
enum RawRule {
    BLANK,
    END,
    ANY,
    TOKEN {
        kind: SyntaxKind,
    },
    WORD {
        value: String,
    },
    JOINED {
        kinds: Vec<SyntaxKind>,
    },
    SYMBOL {
        name: String,
    },
    SEQ {
        members: Vec<RawRule>,
    },
    CHOICE {
        members: Vec<RawRule>,
    },
    OPTIONAL {
        content: Box<RawRule>,
    },
    REPEAT {
        content: Box<RawRule>,
    },
    REPEAT1 {
        content: Box<RawRule>,
    },
    NODE {
        kind: SyntaxKind,
        content: Box<RawRule>,
    },
    FOLD {
        operand: Box<RawRule>,
        suffixes: Vec<RawSuffix>,
    },
    FOLLOWED_BY {
        content: Box<RawRule>,
    },
    NOT_FOLLOWED_BY {
        content: Box<RawRule>,
    },
}

#[derive(Debug, Serialize, Deserialize)]
struct RawSuffix {
    kind: SyntaxKind,
    content: RawRule,
}

impl From<RawRule> for Rule {
    fn from(raw: RawRule) -> Self {
        #[allow(clippy::boxed_local)] // Fields are Box<RawRule>, output needs Box<Rule>
        fn conv(content: Box<RawRule>) -> Box<Rule> {
            Box::new(Rule::from(*content))
        }

        match raw {
            RawRule::BLANK => Rule::Blank,
            RawRule::END => Rule::End,
            RawRule::ANY => Rule::Any,
            RawRule::TOKEN { kind } => Rule::Token(kind),
            RawRule::WORD { value } => Rule::Word(value),
            RawRule::JOINED { kinds } => Rule::Joined(kinds),
            RawRule::SYMBOL { name } => Rule::Symbol(name),
            RawRule::SEQ { members } => Rule::Seq(members.into_iter().map(Into::into).collect()),
            RawRule::CHOICE { members } => {
                Rule::Choice(members.into_iter().map(Into::into).collect())
            }
            RawRule::OPTIONAL { content } => Rule::Optional(conv(content)),
            RawRule::REPEAT { content } => Rule::Repeat(conv(content)),
            RawRule::REPEAT1 { content } => Rule::Repeat1(conv(content)),
            RawRule::NODE { kind, content } => Rule::Node {
                kind,
                content: conv(content),
            },
            RawRule::FOLD { operand, suffixes } => Rule::Fold {
                operand: conv(operand),
                suffixes: suffixes
                    .into_iter()
                    .map(|s| Suffix::new(s.kind, s.content.into()))
                    .collect(),
            },
            RawRule::FOLLOWED_BY { content } => Rule::FollowedBy(conv(content)),
            RawRule::NOT_FOLLOWED_BY { content } => Rule::NotFollowedBy(conv(content)),
        }
    }
}

impl From<&Rule> for RawRule {
    fn from(rule: &Rule) -> Self {
        fn conv(content: &Rule) -> Box<RawRule> {
            Box::new(RawRule::from(content))
        }

        match rule {
            Rule::Blank => RawRule::BLANK,
            Rule::End => RawRule::END,
            Rule::Any => RawRule::ANY,
            Rule::Token(kind) => RawRule::TOKEN { kind: *kind },
            Rule::Word(value) => RawRule::WORD {
                value: value.clone(),
            },
            Rule::Joined(kinds) => RawRule::JOINED {
                kinds: kinds.clone(),
            },
            Rule::Symbol(name) => RawRule::SYMBOL { name: name.clone() },
            Rule::Seq(members) => RawRule::SEQ {
                members: members.iter().map(Into::into).collect(),
            },
            Rule::Choice(members) => RawRule::CHOICE {
                members: members.iter().map(Into::into).collect(),
            },
            Rule::Optional(content) => RawRule::OPTIONAL {
                content: conv(content),
            },
            Rule::Repeat(content) => RawRule::REPEAT {
                content: conv(content),
            },
            Rule::Repeat1(content) => RawRule::REPEAT1 {
                content: conv(content),
            },
            Rule::Node { kind, content } => RawRule::NODE {
                kind: *kind,
                content: conv(content),
            },
            Rule::Fold { operand, suffixes } => RawRule::FOLD {
                operand: conv(operand),
                suffixes: suffixes
                    .iter()
                    .map(|s| RawSuffix {
                        kind: s.kind,
                        content: RawRule::from(&s.content),
                    })
                    .collect(),
            },
            Rule::FollowedBy(content) => RawRule::FOLLOWED_BY {
                content: conv(content),
            },
            Rule::NotFollowedBy(content) => RawRule::NOT_FOLLOWED_BY {
                content: conv(content),
            },
        }
    }
}
