use std::fmt::{self, Write};

use crate::attribute::{MathSpacing, MathVariant, OpClass};
use crate::ops::Op;

/// AST node. The tree is built once by the parser, owned top to bottom,
/// and walked once by the emitter.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    /// A run of consecutive digits, one `<mn>`.
    Number(String),
    SingleLetterIdent(char, Option<MathVariant>),
    /// A named function like `sin`, one `<mi>`.
    MultiLetterIdent(&'static str),
    Operator(Op, OpClass),
    Subscript(Box<Node>, Box<Node>),
    Superscript(Box<Node>, Box<Node>),
    SubSup {
        target: Box<Node>,
        sub: Box<Node>,
        sup: Box<Node>,
    },
    /// Explicit spacing, width in `em` units.
    Space(&'static str),
    Row(Vec<Node>),
}

/// Serializes a [`Node`] tree into MathML, appending to a caller-owned
/// buffer.
pub(crate) struct MathMLEmitter<'buf> {
    s: &'buf mut String,
    /// Explicit `<mo>` spacing attributes, or `None` for the renderer's
    /// defaults.
    spacing: Option<MathSpacing>,
}

impl<'buf> MathMLEmitter<'buf> {
    pub(crate) fn new(s: &'buf mut String, spacing: Option<MathSpacing>) -> Self {
        MathMLEmitter { s, spacing }
    }

    pub(crate) fn emit(&mut self, node: &Node) -> fmt::Result {
        match node {
            Node::Number(number) => write!(self.s, "<mn>{number}</mn>")?,
            Node::SingleLetterIdent(letter, variant) => {
                self.s.push_str("<mi");
                if let Some(variant) = variant {
                    self.s.push_str(<&str>::from(variant));
                }
                self.s.push('>');
                push_escaped(self.s, *letter);
                self.s.push_str("</mi>");
            }
            Node::MultiLetterIdent(name) => write!(self.s, "<mi>{name}</mi>")?,
            Node::Operator(op, class) => {
                self.s.push_str("<mo");
                match class {
                    // Bracket-like operators must not stretch in this
                    // inline context.
                    OpClass::Fence => self.s.push_str(r#" stretchy="false""#),
                    OpClass::BinaryOp | OpClass::Relation => {
                        if let Some(spacing) = self.spacing {
                            self.s.push_str(<&str>::from(spacing));
                        }
                    }
                    OpClass::Punctuation => {}
                }
                self.s.push('>');
                push_escaped(self.s, op.char());
                self.s.push_str("</mo>");
            }
            Node::Subscript(target, script) => {
                self.s.push_str("<msub>");
                self.emit(target)?;
                self.emit(script)?;
                self.s.push_str("</msub>");
            }
            Node::Superscript(target, script) => {
                self.s.push_str("<msup>");
                self.emit(target)?;
                self.emit(script)?;
                self.s.push_str("</msup>");
            }
            Node::SubSup { target, sub, sup } => {
                self.s.push_str("<msubsup>");
                self.emit(target)?;
                self.emit(sub)?;
                self.emit(sup)?;
                self.s.push_str("</msubsup>");
            }
            Node::Space(width) => write!(self.s, r#"<mspace width="{width}em"/>"#)?,
            Node::Row(nodes) => {
                // A row of one is the node itself.
                if let [node] = nodes.as_slice() {
                    self.emit(node)?;
                } else {
                    self.s.push_str("<mrow>");
                    for node in nodes {
                        self.emit(node)?;
                    }
                    self.s.push_str("</mrow>");
                }
            }
        }
        Ok(())
    }
}

/// Unicode symbols go out as literal characters; after XML parsing these are
/// canonically equivalent to numeric character references. Only the XML
/// metacharacters need escaping.
fn push_escaped(s: &mut String, ch: char) {
    match ch {
        '<' => s.push_str("&lt;"),
        '>' => s.push_str("&gt;"),
        '&' => s.push_str("&amp;"),
        _ => s.push(ch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops;

    fn render(node: &Node, spacing: Option<MathSpacing>) -> String {
        let mut s = String::new();
        MathMLEmitter::new(&mut s, spacing).emit(node).unwrap();
        s
    }

    #[test]
    fn row_of_one_collapses() {
        let node = Node::Row(vec![Node::SingleLetterIdent('x', None)]);
        assert_eq!(render(&node, None), "<mi>x</mi>");
    }

    #[test]
    fn fences_are_never_stretchy() {
        let node = Node::Operator(ops::LEFT_PARENTHESIS, OpClass::Fence);
        assert_eq!(render(&node, None), r#"<mo stretchy="false">(</mo>"#);
    }

    #[test]
    fn xml_metacharacters_are_escaped() {
        let node = Node::Operator(ops::LESS_THAN_SIGN, OpClass::Relation);
        assert_eq!(render(&node, None), "<mo>&lt;</mo>");
    }

    #[test]
    fn explicit_spacing_applies_to_bin_and_rel_only() {
        let row = Node::Row(vec![
            Node::Operator(ops::PLUS_SIGN, OpClass::BinaryOp),
            Node::Operator(ops::EQUALS_SIGN, OpClass::Relation),
            Node::Operator(ops::COMMA, OpClass::Punctuation),
            Node::Operator(ops::VERTICAL_LINE, OpClass::Fence),
        ]);
        assert_eq!(
            render(&row, Some(MathSpacing::Zero)),
            concat!(
                "<mrow>",
                r#"<mo lspace="0" rspace="0">+</mo>"#,
                r#"<mo lspace="0" rspace="0">=</mo>"#,
                "<mo>,</mo>",
                r#"<mo stretchy="false">|</mo>"#,
                "</mrow>"
            )
        );
    }

    #[test]
    fn subsup_shape() {
        let node = Node::SubSup {
            target: Box::new(Node::SingleLetterIdent('x', None)),
            sub: Box::new(Node::Number("0".to_string())),
            sup: Box::new(Node::Number("2".to_string())),
        };
        assert_eq!(
            render(&node, None),
            "<msubsup><mi>x</mi><mn>0</mn><mn>2</mn></msubsup>"
        );
    }

    #[test]
    fn variant_attribute() {
        let node = Node::SingleLetterIdent('Z', Some(MathVariant::DoubleStruck));
        assert_eq!(
            render(&node, None),
            r#"<mi mathvariant="double-struck">Z</mi>"#
        );
    }
}
