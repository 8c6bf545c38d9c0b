use crate::attribute::MathVariant;
use crate::ops::Op;

/// A lexed token.
///
/// Tokens never borrow from the source string; commands resolve to their
/// semantic meaning (a symbol, an operator class, a variant directive) at
/// lexing time via the command table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Eof,
    /// `{` used for grouping (a literal brace comes in as `Open`/`Close`).
    GroupBegin,
    GroupEnd,
    Underscore,
    Circumflex,
    Letter(char),
    Digit(char),
    /// A multi-letter function name like `\sin`, rendered as one `<mi>`.
    Function(&'static str),
    Relation(Op),
    BinaryOp(Op),
    Punctuation(Op),
    Open(Op),
    Close(Op),
    /// A fence-like ordinary symbol such as `|`: rendered as `<mo>` but
    /// never stretchy.
    Ord(Op),
    /// A font-variant directive such as `\mathbb`. Carries the command name
    /// so diagnostics can report the full command span.
    Transform(MathVariant, &'static str),
    /// Explicit spacing, width in `em` units.
    Space(&'static str),
}

/// A token together with its 0-based character offset in the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokLoc(pub usize, pub Token);

impl TokLoc {
    #[inline]
    pub fn token(&self) -> &Token {
        &self.1
    }

    #[inline]
    pub fn location(&self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_small() {
        // Tokens are copied around freely; keep them register-sized.
        assert!(std::mem::size_of::<Token>() <= 3 * std::mem::size_of::<usize>());
    }
}
