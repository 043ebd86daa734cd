//! Owned match results and their conversion to a green tree.
//!
//! Matching builds cheap reference-counted nodes so memoized results can be
//! spliced into several parents. Only the final, successful result is turned
//! into a Rowan green tree.

use std::rc::Rc;

use rowan::{GreenNode, GreenNodeBuilder};
use sharpline_core::{SyntaxKind, Token, token_text};

#[derive(Debug, Clone)]
pub(super) enum Element {
    /// Raw index into the token slice.
    Token(u32),
    Node(Rc<Tree>),
}

#[derive(Debug)]
pub(super) struct Tree {
    pub(super) kind: SyntaxKind,
    pub(super) children: Vec<Element>,
}

impl Element {
    fn first_token(&self) -> Option<u32> {
        match self {
            Element::Token(raw) => Some(*raw),
            Element::Node(tree) => tree.children.iter().find_map(Element::first_token),
        }
    }
}

/// Trivia tokens are flushed right before the next node or token, so leading
/// trivia ends up outside the node that follows it.
pub(super) struct TreeSink<'a> {
    source: &'a str,
    tokens: &'a [Token],
    cursor: usize,
    builder: GreenNodeBuilder<'static>,
}

impl<'a> TreeSink<'a> {
    pub(super) fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        Self {
            source,
            tokens,
            cursor: 0,
            builder: GreenNodeBuilder::new(),
        }
    }

    /// Tokens in `..until` that the elements don't cover go into `Root`.
    pub(super) fn finish(mut self, elements: &[Element], until: usize) -> GreenNode {
        self.builder.start_node(SyntaxKind::Root.into());
        for element in elements {
            self.element(element);
        }
        self.flush_until(until);
        self.builder.finish_node();
        self.builder.finish()
    }

    fn element(&mut self, element: &Element) {
        match element {
            Element::Token(raw) => {
                self.flush_until(*raw as usize);
                self.token(*raw as usize);
            }
            Element::Node(tree) => {
                if let Some(first) = element.first_token() {
                    self.flush_until(first as usize);
                }
                self.builder.start_node(tree.kind.into());
                for child in &tree.children {
                    stacker::maybe_grow(64 * 1024, 1024 * 1024, || self.element(child));
                }
                self.builder.finish_node();
            }
        }
    }

    fn flush_until(&mut self, until: usize) {
        while self.cursor < until {
            self.token(self.cursor);
        }
    }

    fn token(&mut self, raw: usize) {
        let token = self.tokens[raw];
        self.builder
            .token(token.kind.into(), token_text(self.source, &token));
        self.cursor = raw + 1;
    }
}
