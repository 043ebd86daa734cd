//! Grammar interpreter.
//!
//! # Architecture
//!
//! A [`Grammar`] is run directly as a parsing expression grammar:
//!
//! - Ordered choice: the first alternative that matches wins, later ones are never tried
//! - Greedy repetition without backtracking into the repeated part
//! - `Fold` rules loop over postfix/operator suffixes and build left-leaning nodes
//! - Lookahead predicates (`FollowedBy`/`NotFollowedBy`) consume nothing
//!
//! Trivia is invisible to rules. Matching works on the significant tokens only;
//! trivia is re-attached when the green tree is built.
//!
//! A failed alternative leaves no trace in the output: every matcher truncates
//! what it pushed before reporting failure. Results of rule calls are memoized
//! per invocation, keyed by rule and position, so re-trying the same rule at the
//! same position from a different alternative is a lookup.
//!
//! Recursion fuel bounds nested rule calls and returns an actual error when
//! exhausted; the native stack grows on demand below that bound.

mod invariants;
mod session;
mod tree;

#[cfg(test)]
mod session_tests;

use rowan::{GreenNode, TextSize};
use sharpline_core::{Grammar, LineIndex, SyntaxKind, SyntaxNode, Token};
use tracing::debug;

use crate::ast::Root;
use crate::printer::CstPrinter;
use crate::span_tree::SpanNode;
use crate::{Error, Result};
use session::Session;
use tree::TreeSink;

/// Default nesting bound for rule calls.
pub const DEFAULT_RECURSION_FUEL: u32 = 4096;

/// Runs rules of one grammar. Cheap to copy; holds no per-parse state.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'g> {
    grammar: &'g Grammar,
    recursion_fuel_limit: Option<u32>,
    memoize: bool,
}

impl<'g> Parser<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            recursion_fuel_limit: Some(DEFAULT_RECURSION_FUEL),
            memoize: true,
        }
    }

    /// `None` disables the bound.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    pub fn with_memoization(mut self, enabled: bool) -> Self {
        self.memoize = enabled;
        self
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// Matches `rule` against the whole token stream.
    ///
    /// Trailing significant tokens the rule does not consume make the parse a
    /// [`ParseOutcome::NoMatch`].
    pub fn parse(&self, rule: &str, source: &str, tokens: &[Token]) -> Result<ParseOutcome> {
        let id = self
            .grammar
            .resolve(rule)
            .map_err(|_| Error::UnknownRule(rule.to_owned()))?;
        let mut session = self.session(source, tokens);
        debug!(rule, tokens = tokens.len(), "parse");

        let result = session.run(id);
        if let Some(err) = session.take_fatal_error() {
            return Err(err);
        }

        let outcome = match result {
            Some((end, elements)) if end == session.significant_len() => {
                let green = TreeSink::new(source, tokens).finish(&elements, tokens.len());
                ParseOutcome::Match(Parse::new(rule, green))
            }
            Some((end, _)) => {
                session.note_failure(end);
                ParseOutcome::NoMatch(session.no_match(rule))
            }
            None => ParseOutcome::NoMatch(session.no_match(rule)),
        };
        debug!(
            rule,
            matched = outcome.is_match(),
            memo_entries = session.memo_len(),
            "parse finished"
        );
        Ok(outcome)
    }

    /// Matches `rule` at the start of the token stream without requiring it to
    /// consume everything. For grammars that embed expressions.
    pub fn parse_prefix(
        &self,
        rule: &str,
        source: &str,
        tokens: &[Token],
    ) -> Result<Option<PrefixMatch>> {
        let id = self
            .grammar
            .resolve(rule)
            .map_err(|_| Error::UnknownRule(rule.to_owned()))?;
        let mut session = self.session(source, tokens);
        debug!(rule, tokens = tokens.len(), "parse prefix");

        let result = session.run(id);
        if let Some(err) = session.take_fatal_error() {
            return Err(err);
        }

        Ok(result.map(|(end, elements)| {
            let end = session.raw_end(end);
            let green = TreeSink::new(source, tokens).finish(&elements, end);
            PrefixMatch {
                parse: Parse::new(rule, green),
                end,
            }
        }))
    }

    fn session<'a>(&self, source: &'a str, tokens: &'a [Token]) -> Session<'a>
    where
        'g: 'a,
    {
        Session::new(
            self.grammar,
            source,
            tokens,
            self.recursion_fuel_limit,
            self.memoize,
        )
    }
}

#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Match(Parse),
    NoMatch(NoMatch),
}

impl ParseOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, ParseOutcome::Match(_))
    }

    pub fn parse(&self) -> Option<&Parse> {
        match self {
            ParseOutcome::Match(parse) => Some(parse),
            ParseOutcome::NoMatch(_) => None,
        }
    }

    pub fn into_parse(self) -> Option<Parse> {
        match self {
            ParseOutcome::Match(parse) => Some(parse),
            ParseOutcome::NoMatch(_) => None,
        }
    }

    pub fn no_match(&self) -> Option<&NoMatch> {
        match self {
            ParseOutcome::Match(_) => None,
            ParseOutcome::NoMatch(no_match) => Some(no_match),
        }
    }
}

/// Where matching gave up: the furthest significant token any rule failed on.
///
/// Carries positions only; rendering a message is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoMatch {
    pub rule: String,
    pub offset: TextSize,
    /// `None` when input ran out.
    pub found: Option<SyntaxKind>,
}

/// Successful match of a prefix of the token stream.
#[derive(Debug, Clone)]
pub struct PrefixMatch {
    pub parse: Parse,
    /// Index into the token slice just past the last consumed token.
    pub end: usize,
}

/// Lossless tree for one successful match, rooted at a `Root` node that wraps
/// whatever the entry rule produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    rule: String,
    green: GreenNode,
}

impl Parse {
    fn new(rule: &str, green: GreenNode) -> Self {
        Self {
            rule: rule.to_owned(),
            green,
        }
    }

    /// Entry rule this tree was produced by.
    pub fn rule(&self) -> &str {
        &self.rule
    }

    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn root(&self) -> Root {
        invariants::ensure_root(self.syntax())
    }

    pub fn printer(&self) -> CstPrinter {
        CstPrinter::new(self.syntax())
    }

    pub fn dump_cst(&self) -> String {
        self.printer().dump()
    }

    pub fn span_tree(&self, index: &LineIndex) -> SpanNode {
        SpanNode::build(&self.syntax(), index)
    }
}
