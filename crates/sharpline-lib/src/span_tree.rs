//! Serializable parse tree with line/column positions, for tooling that
//! consumes JSON rather than Rowan trees.

use rowan::NodeOrToken;
use serde::Serialize;
use sharpline_core::{LineCol, LineIndex, SyntaxKind, SyntaxNode};

/// One node or token. Tokens carry their text; trivia is left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanNode {
    pub kind: SyntaxKind,
    pub start: LineCol,
    pub end: LineCol,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SpanNode>,
}

impl SpanNode {
    pub fn build(node: &SyntaxNode, index: &LineIndex) -> Self {
        let range = node.text_range();
        let children = node
            .children_with_tokens()
            .filter_map(|child| match child {
                NodeOrToken::Node(n) => Some(Self::build(&n, index)),
                NodeOrToken::Token(t) if t.kind().is_trivia() => None,
                NodeOrToken::Token(t) => {
                    let range = t.text_range();
                    Some(SpanNode {
                        kind: t.kind(),
                        start: index.line_col(range.start()),
                        end: index.line_col(range.end()),
                        text: Some(t.text().to_owned()),
                        children: Vec::new(),
                    })
                }
            })
            .collect();
        SpanNode {
            kind: node.kind(),
            start: index.line_col(range.start()),
            end: index.line_col(range.end()),
            text: None,
            children,
        }
    }

    /// Nodes and tokens in pre-order.
    pub fn walk(&self) -> Vec<&SpanNode> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.walk());
        }
        out
    }
}
