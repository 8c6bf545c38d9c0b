use std::fmt::{self, Write};

use strum_macros::IntoStaticStr;

/// An error that occurred during lexing or parsing.
///
/// The first field is the 0-based character offset into the original input
/// that the error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatexError<'source>(pub usize, pub LatexErrKind<'source>);

/// The closed set of error kinds.
///
/// The `IntoStaticStr` derive yields exactly the variant name, which doubles
/// as the stable `id` field of the serialized diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, IntoStaticStr)]
pub enum LatexErrKind<'source> {
    /// A `{` that was never closed. Reported at the most recently seen `{`
    /// when the input ends with open groups remaining.
    UnmatchedOpenBrace,
    /// A `}` with no matching `{`, reported at its own position.
    UnmatchedCloseBrace,
    /// A backslash at the end of the input, or escaping a character that is
    /// not a known escape.
    IllegalFinalBackslash,
    /// A well-formed command name that is not in the command table. Carries
    /// the name (without the backslash); the diagnostic spans the full
    /// command text.
    UnrecognisedCommand(&'source str),
    /// A second `_` on a base that already has a subscript.
    DoubleSubscript,
    /// A second `^` on a base that already has a superscript.
    DoubleSuperscript,
    /// `_` or `^` with nothing to attach to.
    MissingScriptBase,
    /// `_` or `^` followed by `}`, end of input, or another script marker.
    MissingScriptOperand,
    /// A command that requires an argument (e.g. `\mathbb`) without one.
    /// Carries the command name so the diagnostic spans the command text.
    MissingCommandArgument(&'static str),
    /// Formatter failure while serializing the output. Not reachable for
    /// any input; kept so that emission errors propagate instead of
    /// panicking.
    RenderError,
    /// A parser invariant was violated. Not reachable for any input.
    Internal,
}

impl LatexErrKind<'_> {
    /// Human-readable message.
    pub fn string(&self) -> String {
        match self {
            LatexErrKind::UnmatchedOpenBrace => "Unmatched opening brace.".to_string(),
            LatexErrKind::UnmatchedCloseBrace => "Unmatched closing brace.".to_string(),
            LatexErrKind::IllegalFinalBackslash => {
                "Backslash with nothing to escape.".to_string()
            }
            LatexErrKind::UnrecognisedCommand(name) => {
                "Unknown command \"\\".to_string() + name + "\"."
            }
            LatexErrKind::DoubleSubscript => "Double subscript.".to_string(),
            LatexErrKind::DoubleSuperscript => "Double superscript.".to_string(),
            LatexErrKind::MissingScriptBase => {
                "Subscript or superscript with nothing to attach to.".to_string()
            }
            LatexErrKind::MissingScriptOperand => {
                "Expected an operand after \"_\" or \"^\".".to_string()
            }
            LatexErrKind::MissingCommandArgument(name) => {
                "Expected an argument after \"\\".to_string() + name + "\"."
            }
            LatexErrKind::RenderError => "Render error.".to_string(),
            LatexErrKind::Internal => "Internal parser error.".to_string(),
        }
    }

    /// Number of input characters the error spans, always at least 1.
    pub fn length(&self) -> usize {
        match self {
            LatexErrKind::UnrecognisedCommand(name) => name.chars().count() + 1,
            LatexErrKind::MissingCommandArgument(name) => name.len() + 1,
            _ => 1,
        }
    }
}

impl LatexError<'_> {
    /// The stable error-kind identifier.
    #[inline]
    pub fn id(&self) -> &'static str {
        <&str>::from(&self.1)
    }

    /// 0-based character offset of the error in the original input.
    #[inline]
    pub fn start_pos(&self) -> usize {
        self.0
    }

    /// Number of characters the error spans.
    #[inline]
    pub fn length(&self) -> usize {
        self.1.length()
    }

    /// Serialize as the diagnostic XML document that is emitted in place of
    /// MathML when translation fails.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<error><id>{}</id><startPos>{}</startPos><length>{}</length></error>",
            self.id(),
            self.start_pos(),
            self.length()
        );
        out
    }
}

impl fmt::Display for LatexError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.0, self.1.string())
    }
}

impl std::error::Error for LatexError<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_variant_name() {
        let err = LatexError(2, LatexErrKind::UnmatchedOpenBrace);
        assert_eq!(err.id(), "UnmatchedOpenBrace");
        let err = LatexError(4, LatexErrKind::UnrecognisedCommand("testingwrongcommand"));
        assert_eq!(err.id(), "UnrecognisedCommand");
    }

    #[test]
    fn unrecognised_command_spans_backslash_and_name() {
        let err = LatexError(4, LatexErrKind::UnrecognisedCommand("testingwrongcommand"));
        assert_eq!(err.length(), 20);
    }

    #[test]
    fn xml_serialization() {
        let err = LatexError(2, LatexErrKind::UnmatchedOpenBrace);
        assert_eq!(
            err.to_xml(),
            "<error><id>UnmatchedOpenBrace</id><startPos>2</startPos><length>1</length></error>"
        );
    }

    #[test]
    fn display_includes_position() {
        let err = LatexError(1, LatexErrKind::IllegalFinalBackslash);
        assert_eq!(err.to_string(), "1: Backslash with nothing to escape.");
    }
}
