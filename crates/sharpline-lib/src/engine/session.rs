//! Per-invocation matching state.

use std::collections::HashMap;
use std::rc::Rc;

use rowan::TextSize;
use sharpline_core::{Grammar, Rule, RuleId, SyntaxKind, Token, token_text};
use tracing::trace;

use super::NoMatch;
use super::invariants::ensure_rule;
use super::tree::{Element, Tree};
use crate::Error;

/// Minimum stack space to keep available before descending into a rule.
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing.
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[derive(Clone)]
struct MemoEntry {
    matched: Option<(u32, Rc<[Element]>)>,
    /// Furthest failure recorded while matching, outside the rule's own lookaheads.
    furthest_failure: Option<u32>,
}

/// Positions are indices into `significant`, not into `tokens`.
pub(super) struct Session<'a> {
    grammar: &'a Grammar,
    source: &'a str,
    tokens: &'a [Token],
    /// Raw indices of non-trivia tokens.
    significant: Vec<u32>,
    memo: HashMap<(RuleId, u32), MemoEntry>,
    memoize: bool,
    depth: u32,
    recursion_fuel_limit: Option<u32>,
    /// Inside `FollowedBy`/`NotFollowedBy`; failures there are not reported.
    lookahead: u32,
    furthest: u32,
    /// Furthest failure of the rule being matched, at lookahead depth `scan_level`.
    scan: Option<u32>,
    scan_level: u32,
    fatal_error: Option<Error>,
}

impl<'a> Session<'a> {
    pub(super) fn new(
        grammar: &'a Grammar,
        source: &'a str,
        tokens: &'a [Token],
        recursion_fuel_limit: Option<u32>,
        memoize: bool,
    ) -> Self {
        let significant = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.kind.is_trivia())
            .map(|(i, _)| i as u32)
            .collect();
        Self {
            grammar,
            source,
            tokens,
            significant,
            memo: HashMap::new(),
            memoize,
            depth: 0,
            recursion_fuel_limit,
            lookahead: 0,
            furthest: 0,
            scan: None,
            scan_level: 0,
            fatal_error: None,
        }
    }

    pub(super) fn run(&mut self, id: RuleId) -> Option<(u32, Vec<Element>)> {
        let mut out = Vec::new();
        let end = self.call_rule(id, 0, &mut out)?;
        Some((end, out))
    }

    pub(super) fn significant_len(&self) -> u32 {
        self.significant.len() as u32
    }

    pub(super) fn memo_len(&self) -> usize {
        self.memo.len()
    }

    pub(super) fn take_fatal_error(&mut self) -> Option<Error> {
        self.fatal_error.take()
    }

    /// Raw token index just past the `end`-th significant token.
    pub(super) fn raw_end(&self, end: u32) -> usize {
        match end.checked_sub(1) {
            Some(last) => self.significant[last as usize] as usize + 1,
            None => 0,
        }
    }

    pub(super) fn note_failure(&mut self, pos: u32) {
        if self.lookahead == 0 {
            self.furthest = self.furthest.max(pos);
        }
        if self.lookahead == self.scan_level {
            self.scan = self.scan.max(Some(pos));
        }
    }

    pub(super) fn no_match(&self, rule: &str) -> NoMatch {
        match self.significant.get(self.furthest as usize) {
            Some(&raw) => {
                let token = self.tokens[raw as usize];
                NoMatch {
                    rule: rule.to_owned(),
                    offset: token.span.start(),
                    found: Some(token.kind),
                }
            }
            None => NoMatch {
                rule: rule.to_owned(),
                offset: TextSize::from(self.source.len() as u32),
                found: None,
            },
        }
    }

    fn kind_at(&self, pos: u32) -> Option<SyntaxKind> {
        self.significant
            .get(pos as usize)
            .map(|&raw| self.tokens[raw as usize].kind)
    }

    fn fail(&mut self, pos: u32) -> Option<u32> {
        self.note_failure(pos);
        None
    }

    fn bump(&mut self, pos: u32, out: &mut Vec<Element>) -> Option<u32> {
        out.push(Element::Token(self.significant[pos as usize]));
        Some(pos + 1)
    }

    fn enter_recursion(&mut self) -> bool {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            if self.fatal_error.is_none() {
                self.fatal_error = Some(Error::RecursionLimitExceeded);
            }
            return false;
        }
        self.depth += 1;
        true
    }

    fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn call_rule(&mut self, id: RuleId, pos: u32, out: &mut Vec<Element>) -> Option<u32> {
        if self.fatal_error.is_some() {
            return None;
        }
        if self.memoize
            && let Some(entry) = self.memo.get(&(id, pos)).cloned()
        {
            if let Some(failed) = entry.furthest_failure {
                self.note_failure(failed);
            }
            let (end, elements) = entry.matched?;
            out.extend(elements.iter().cloned());
            return Some(end);
        }

        let grammar = self.grammar;
        let (name, rule) = ensure_rule(grammar, id);
        if !self.enter_recursion() {
            return None;
        }
        trace!(rule = name, pos, depth = self.depth, "enter");

        let outer_scan = self.scan.take();
        let outer_level = std::mem::replace(&mut self.scan_level, self.lookahead);
        let mut local = Vec::new();
        let result = ensure_sufficient_stack(|| self.match_rule(rule, pos, &mut local));
        let furthest_failure = std::mem::replace(&mut self.scan, outer_scan);
        self.scan_level = outer_level;
        if self.lookahead == self.scan_level {
            self.scan = self.scan.max(furthest_failure);
        }
        self.exit_recursion();
        if self.fatal_error.is_some() {
            return None;
        }
        trace!(rule = name, pos, end = ?result, "exit");

        let Some(end) = result else {
            if self.memoize {
                let entry = MemoEntry {
                    matched: None,
                    furthest_failure,
                };
                self.memo.insert((id, pos), entry);
            }
            return None;
        };
        if self.memoize {
            let elements: Rc<[Element]> = local.into();
            out.extend(elements.iter().cloned());
            let entry = MemoEntry {
                matched: Some((end, elements)),
                furthest_failure,
            };
            self.memo.insert((id, pos), entry);
        } else {
            out.extend(local);
        }
        Some(end)
    }

    /// On failure, `out` is left exactly as it was.
    fn match_rule(&mut self, rule: &'a Rule, pos: u32, out: &mut Vec<Element>) -> Option<u32> {
        match rule {
            Rule::Blank => Some(pos),

            Rule::End => {
                if pos == self.significant_len() {
                    Some(pos)
                } else {
                    self.fail(pos)
                }
            }

            Rule::Any => {
                if pos < self.significant_len() {
                    self.bump(pos, out)
                } else {
                    self.fail(pos)
                }
            }

            Rule::Token(kind) => {
                if self.kind_at(pos) == Some(*kind) {
                    self.bump(pos, out)
                } else {
                    self.fail(pos)
                }
            }

            Rule::Word(text) => {
                let matches = self.kind_at(pos) == Some(SyntaxKind::Id) && {
                    let raw = self.significant[pos as usize] as usize;
                    token_text(self.source, &self.tokens[raw]) == text
                };
                if matches {
                    self.bump(pos, out)
                } else {
                    self.fail(pos)
                }
            }

            Rule::Joined(kinds) => {
                for (i, kind) in kinds.iter().enumerate() {
                    let at = pos + i as u32;
                    if self.kind_at(at) != Some(*kind) {
                        return self.fail(at);
                    }
                    // adjacent in the raw stream: no trivia in between
                    if i > 0 && self.significant[at as usize] != self.significant[at as usize - 1] + 1
                    {
                        return self.fail(at);
                    }
                }
                let mut end = pos;
                for _ in kinds {
                    end = self.bump(end, out)?;
                }
                Some(end)
            }

            Rule::Symbol(name) => match self.grammar.resolve(name) {
                Ok(id) => self.call_rule(id, pos, out),
                Err(err) => {
                    self.fatal_error.get_or_insert(Error::Grammar(err));
                    None
                }
            },

            Rule::Seq(members) => {
                let mark = out.len();
                let mut at = pos;
                for member in members {
                    match self.match_rule(member, at, out) {
                        Some(next) => at = next,
                        None => {
                            out.truncate(mark);
                            return None;
                        }
                    }
                }
                Some(at)
            }

            Rule::Choice(members) => members
                .iter()
                .find_map(|member| self.match_rule(member, pos, out)),

            Rule::Optional(content) => self.match_rule(content, pos, out).or(Some(pos)),

            Rule::Repeat(content) => Some(self.match_many(content, pos, out)),

            Rule::Repeat1(content) => {
                let first = self.match_rule(content, pos, out)?;
                Some(self.match_many(content, first, out))
            }

            Rule::Node { kind, content } => {
                let mut children = Vec::new();
                let end = self.match_rule(content, pos, &mut children)?;
                out.push(Element::Node(Rc::new(Tree {
                    kind: *kind,
                    children,
                })));
                Some(end)
            }

            Rule::Fold { operand, suffixes } => {
                let mut acc = Vec::new();
                let mut at = self.match_rule(operand, pos, &mut acc)?;
                'fold: loop {
                    for suffix in suffixes {
                        let mut tail = Vec::new();
                        if let Some(next) = self.match_rule(&suffix.content, at, &mut tail)
                            && next > at
                        {
                            let mut children = std::mem::take(&mut acc);
                            children.append(&mut tail);
                            acc.push(Element::Node(Rc::new(Tree {
                                kind: suffix.kind,
                                children,
                            })));
                            at = next;
                            continue 'fold;
                        }
                    }
                    break;
                }
                out.append(&mut acc);
                Some(at)
            }

            Rule::FollowedBy(content) => {
                self.lookahead += 1;
                let matched = self.match_rule(content, pos, &mut Vec::new());
                self.lookahead -= 1;
                match matched {
                    Some(_) => Some(pos),
                    None => self.fail(pos),
                }
            }

            Rule::NotFollowedBy(content) => {
                self.lookahead += 1;
                let matched = self.match_rule(content, pos, &mut Vec::new());
                self.lookahead -= 1;
                match matched {
                    Some(_) => self.fail(pos),
                    None => Some(pos),
                }
            }
        }
    }

    /// Zero-width iterations stop the loop.
    fn match_many(&mut self, content: &'a Rule, pos: u32, out: &mut Vec<Element>) -> u32 {
        let mut at = pos;
        while let Some(next) = self.match_rule(content, at, out) {
            if next == at {
                break;
            }
            at = next;
        }
        at
    }
}
