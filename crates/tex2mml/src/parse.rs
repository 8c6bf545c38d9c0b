use crate::ast::Node;
use crate::attribute::{MathVariant, OpClass};
use crate::error::{LatexErrKind, LatexError};
use crate::lexer::Lexer;
use crate::token::{TokLoc, Token};

/// What terminates the sequence currently being parsed.
enum SequenceEnd {
    Eof,
    GroupEnd,
}

impl SequenceEnd {
    fn matches(&self, token: &Token) -> bool {
        matches!(
            (self, token),
            (SequenceEnd::Eof, Token::Eof) | (SequenceEnd::GroupEnd, Token::GroupEnd)
        )
    }
}

pub(crate) struct Parser<'source> {
    l: Lexer<'source>,
    peek: Option<TokLoc>,
}

impl<'source> Parser<'source> {
    pub(crate) fn new(l: Lexer<'source>) -> Self {
        Parser { l, peek: None }
    }

    fn next_token(&mut self) -> Result<TokLoc, LatexError<'source>> {
        match self.peek.take() {
            Some(tokloc) => Ok(tokloc),
            None => self.l.next_token(),
        }
    }

    fn peek_token(&mut self) -> Result<&TokLoc, LatexError<'source>> {
        if self.peek.is_none() {
            self.peek = Some(self.l.next_token()?);
        }
        match self.peek.as_ref() {
            Some(tokloc) => Ok(tokloc),
            None => Err(LatexError(0, LatexErrKind::Internal)),
        }
    }

    pub(crate) fn parse(&mut self) -> Result<Vec<Node>, LatexError<'source>> {
        self.parse_sequence(SequenceEnd::Eof)
    }

    /// Parses nodes until the given terminator, consuming the terminator.
    ///
    /// The lexer reports unmatched braces itself, so a `GroupEnd` is only
    /// ever seen inside a group and `Eof` only at the top level.
    fn parse_sequence(&mut self, end: SequenceEnd) -> Result<Vec<Node>, LatexError<'source>> {
        let mut nodes = Vec::new();
        loop {
            let tokloc = self.peek_token()?;
            if end.matches(tokloc.token()) {
                self.next_token()?;
                break;
            }
            let node = self.parse_node()?;
            nodes.push(node);
        }
        Ok(nodes)
    }

    /// Parses a primary together with any `_` and `^` bounds, which may
    /// come in either order.
    fn parse_node(&mut self) -> Result<Node, LatexError<'source>> {
        let target = self.parse_primary()?;
        let mut sub: Option<Node> = None;
        let mut sup: Option<Node> = None;
        loop {
            let TokLoc(loc, token) = *self.peek_token()?;
            match token {
                Token::Underscore => {
                    self.next_token()?;
                    if sub.is_some() {
                        return Err(LatexError(loc, LatexErrKind::DoubleSubscript));
                    }
                    sub = Some(self.parse_script_operand(loc)?);
                }
                Token::Circumflex => {
                    self.next_token()?;
                    if sup.is_some() {
                        return Err(LatexError(loc, LatexErrKind::DoubleSuperscript));
                    }
                    sup = Some(self.parse_script_operand(loc)?);
                }
                _ => break,
            }
        }
        Ok(match (sub, sup) {
            (None, None) => target,
            (Some(sub), None) => Node::Subscript(Box::new(target), Box::new(sub)),
            (None, Some(sup)) => Node::Superscript(Box::new(target), Box::new(sup)),
            (Some(sub), Some(sup)) => Node::SubSup {
                target: Box::new(target),
                sub: Box::new(sub),
                sup: Box::new(sup),
            },
        })
    }

    /// The operand of a `_` or `^` at `marker_loc`.
    fn parse_script_operand(&mut self, marker_loc: usize) -> Result<Node, LatexError<'source>> {
        match self.peek_token()?.token() {
            Token::Eof | Token::GroupEnd | Token::Underscore | Token::Circumflex => {
                Err(LatexError(marker_loc, LatexErrKind::MissingScriptOperand))
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<Node, LatexError<'source>> {
        let TokLoc(loc, token) = self.next_token()?;
        Ok(match token {
            Token::Digit(first) => {
                let mut number = String::new();
                number.push(first);
                while let Token::Digit(digit) = *self.peek_token()?.token() {
                    number.push(digit);
                    self.next_token()?;
                }
                Node::Number(number)
            }
            Token::Letter(letter) => Node::SingleLetterIdent(letter, None),
            Token::Function(name) => Node::MultiLetterIdent(name),
            Token::Relation(op) => Node::Operator(op, OpClass::Relation),
            Token::BinaryOp(op) => Node::Operator(op, OpClass::BinaryOp),
            Token::Punctuation(op) => Node::Operator(op, OpClass::Punctuation),
            Token::Open(op) | Token::Close(op) | Token::Ord(op) => {
                Node::Operator(op, OpClass::Fence)
            }
            Token::Space(width) => Node::Space(width),
            Token::GroupBegin => {
                let content = self.parse_sequence(SequenceEnd::GroupEnd)?;
                squeeze(content)
            }
            Token::Transform(variant, name) => self.parse_transform_arg(loc, variant, name)?,
            Token::Underscore | Token::Circumflex => {
                return Err(LatexError(loc, LatexErrKind::MissingScriptBase));
            }
            // Sequence terminators are consumed by `parse_sequence` and
            // rejected by `parse_script_operand`.
            Token::Eof | Token::GroupEnd => {
                return Err(LatexError(loc, LatexErrKind::Internal));
            }
        })
    }

    /// The argument of a font-variant directive: a single letter or a
    /// braced group.
    fn parse_transform_arg(
        &mut self,
        loc: usize,
        variant: MathVariant,
        name: &'static str,
    ) -> Result<Node, LatexError<'source>> {
        let TokLoc(_, token) = *self.peek_token()?;
        match token {
            Token::Letter(letter) => {
                self.next_token()?;
                Ok(Node::SingleLetterIdent(letter, Some(variant)))
            }
            Token::GroupBegin => {
                self.next_token()?;
                let content = self.parse_sequence(SequenceEnd::GroupEnd)?;
                Ok(set_variant(squeeze(content), variant))
            }
            _ => Err(LatexError(loc, LatexErrKind::MissingCommandArgument(name))),
        }
    }
}

/// A group with exactly one child is that child; everything else is a row.
fn squeeze(mut nodes: Vec<Node>) -> Node {
    if nodes.len() == 1 {
        if let Some(node) = nodes.pop() {
            return node;
        }
    }
    Node::Row(nodes)
}

/// Applies a font variant to every letter in the subtree.
fn set_variant(node: Node, variant: MathVariant) -> Node {
    match node {
        Node::SingleLetterIdent(letter, _) => Node::SingleLetterIdent(letter, Some(variant)),
        Node::Row(nodes) => Node::Row(
            nodes
                .into_iter()
                .map(|node| set_variant(node, variant))
                .collect(),
        ),
        node => node,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops;

    fn parse(input: &str) -> Result<Vec<Node>, LatexError<'_>> {
        Parser::new(Lexer::new(input)).parse()
    }

    #[test]
    fn digit_runs_merge() {
        assert_eq!(
            parse("10!").unwrap(),
            vec![
                Node::Number("10".to_string()),
                Node::Operator(ops::EXCLAMATION_MARK, OpClass::Punctuation),
            ]
        );
    }

    #[test]
    fn scripts_in_either_order() {
        let expected = vec![Node::SubSup {
            target: Box::new(Node::SingleLetterIdent('x', None)),
            sub: Box::new(Node::Number("0".to_string())),
            sup: Box::new(Node::Number("2".to_string())),
        }];
        assert_eq!(parse("x_0^2").unwrap(), expected);
        assert_eq!(parse("x^2_0").unwrap(), expected);
    }

    #[test]
    fn group_of_one_collapses() {
        assert_eq!(
            parse("{x}").unwrap(),
            vec![Node::SingleLetterIdent('x', None)]
        );
        // Collapse is idempotent across nesting.
        assert_eq!(
            parse("{{x}}").unwrap(),
            vec![Node::SingleLetterIdent('x', None)]
        );
    }

    #[test]
    fn script_group_stays_a_row() {
        assert_eq!(
            parse("2^{h+1}").unwrap(),
            vec![Node::Superscript(
                Box::new(Node::Number("2".to_string())),
                Box::new(Node::Row(vec![
                    Node::SingleLetterIdent('h', None),
                    Node::Operator(ops::PLUS_SIGN, OpClass::BinaryOp),
                    Node::Number("1".to_string()),
                ])),
            )]
        );
    }

    #[test]
    fn variant_applies_to_group_letters() {
        assert_eq!(
            parse(r"\mathbb{R}").unwrap(),
            vec![Node::SingleLetterIdent(
                'R',
                Some(MathVariant::DoubleStruck)
            )]
        );
        assert_eq!(
            parse(r"\mathbf{ab}").unwrap(),
            vec![Node::Row(vec![
                Node::SingleLetterIdent('a', Some(MathVariant::Bold)),
                Node::SingleLetterIdent('b', Some(MathVariant::Bold)),
            ])]
        );
    }

    #[test]
    fn double_scripts_are_rejected() {
        assert_eq!(
            parse("x_1_2"),
            Err(LatexError(3, LatexErrKind::DoubleSubscript))
        );
        assert_eq!(
            parse("x^1^2"),
            Err(LatexError(3, LatexErrKind::DoubleSuperscript))
        );
    }

    #[test]
    fn script_without_base() {
        assert_eq!(
            parse("_2"),
            Err(LatexError(0, LatexErrKind::MissingScriptBase))
        );
    }

    #[test]
    fn script_without_operand() {
        assert_eq!(
            parse("x^"),
            Err(LatexError(1, LatexErrKind::MissingScriptOperand))
        );
        assert_eq!(
            parse("{x^}"),
            Err(LatexError(2, LatexErrKind::MissingScriptOperand))
        );
    }

    #[test]
    fn transform_without_argument() {
        let err = parse(r"\mathbb").unwrap_err();
        assert_eq!(err, LatexError(0, LatexErrKind::MissingCommandArgument("mathbb")));
        assert_eq!(err.length(), 7);
    }
}
