//! Named rule registry.
//!
//! A [`Grammar`] is an immutable, validated map from rule names to rule
//! expressions. It is built once through [`GrammarBuilder`] and then shared by
//! every parse; it holds no interior mutability and is `Send + Sync`.

use indexmap::IndexMap;

use super::types::Rule;

/// Error while building or loading a grammar.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("rule `{name}` is referenced by `{referenced_by}` but never defined")]
    UndefinedRule { name: String, referenced_by: String },

    #[error("no rule named `{0}`")]
    UnknownRule(String),

    #[error("rule `{rule}` contains a choice with no alternatives")]
    EmptyChoice { rule: String },

    #[error("rule `{rule}` contains a fold with no suffixes")]
    EmptyFold { rule: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Handle to a rule within one grammar. Only meaningful for the grammar that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleId(u32);

impl RuleId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    name: String,
    /// Preserves definition order.
    rules: IndexMap<String, Rule>,
}

impl Grammar {
    pub fn builder(name: impl Into<String>) -> GrammarBuilder {
        GrammarBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn rules(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    pub fn resolve(&self, name: &str) -> Result<RuleId, GrammarError> {
        self.rules
            .get_index_of(name)
            .map(|index| RuleId(index as u32))
            .ok_or_else(|| GrammarError::UnknownRule(name.to_owned()))
    }

    pub fn rule(&self, id: RuleId) -> Option<(&str, &Rule)> {
        self.rules
            .get_index(id.index())
            .map(|(name, rule)| (name.as_str(), rule))
    }

    /// Distinct names referenced by a rule, in first-reference order.
    pub fn references(&self, name: &str) -> Vec<&str> {
        let Some(rule) = self.rules.get(name) else {
            return Vec::new();
        };
        let mut refs: Vec<&str> = Vec::new();
        rule.for_each_symbol(&mut |sym| {
            if !refs.contains(&sym) {
                refs.push(sym);
            }
        });
        refs
    }

    pub fn to_builder(&self) -> GrammarBuilder {
        GrammarBuilder {
            name: self.name.clone(),
            rules: self.rules.clone(),
        }
    }

    /// Derives a grammar where the given rules are replaced by stand-ins.
    ///
    /// Dependents keep referring to the same names, so they run against the
    /// stand-ins without their own definitions changing.
    pub fn with_substitutions<N: Into<String>>(
        &self,
        substitutions: impl IntoIterator<Item = (N, Rule)>,
    ) -> Result<Grammar, GrammarError> {
        let mut builder = self.to_builder();
        for (name, rule) in substitutions {
            builder.define(name, rule);
        }
        builder.build()
    }
}

#[derive(Debug, Clone, Default)]
pub struct GrammarBuilder {
    name: String,
    rules: IndexMap<String, Rule>,
}

impl GrammarBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: IndexMap::new(),
        }
    }

    /// Registers a rule. Redefining a name replaces the rule but keeps its position.
    pub fn define(&mut self, name: impl Into<String>, rule: Rule) -> &mut Self {
        self.rules.insert(name.into(), rule);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn build(self) -> Result<Grammar, GrammarError> {
        for (name, rule) in &self.rules {
            self.validate(name, rule)?;
        }
        Ok(Grammar {
            name: self.name,
            rules: self.rules,
        })
    }

    fn validate(&self, rule_name: &str, rule: &Rule) -> Result<(), GrammarError> {
        match rule {
            Rule::Blank
            | Rule::End
            | Rule::Any
            | Rule::Token(_)
            | Rule::Word(_)
            | Rule::Joined(_) => Ok(()),
            Rule::Symbol(name) => {
                if self.rules.contains_key(name) {
                    Ok(())
                } else {
                    Err(GrammarError::UndefinedRule {
                        name: name.clone(),
                        referenced_by: rule_name.to_owned(),
                    })
                }
            }
            Rule::Choice(members) if members.is_empty() => Err(GrammarError::EmptyChoice {
                rule: rule_name.to_owned(),
            }),
            Rule::Seq(members) | Rule::Choice(members) => members
                .iter()
                .try_for_each(|member| self.validate(rule_name, member)),
            Rule::Optional(content)
            | Rule::Repeat(content)
            | Rule::Repeat1(content)
            | Rule::Node { content, .. }
            | Rule::FollowedBy(content)
            | Rule::NotFollowedBy(content) => self.validate(rule_name, content),
            Rule::Fold { suffixes, .. } if suffixes.is_empty() => Err(GrammarError::EmptyFold {
                rule: rule_name.to_owned(),
            }),
            Rule::Fold { operand, suffixes } => {
                self.validate(rule_name, operand)?;
                suffixes
                    .iter()
                    .try_for_each(|suffix| self.validate(rule_name, &suffix.content))
            }
        }
    }
}
