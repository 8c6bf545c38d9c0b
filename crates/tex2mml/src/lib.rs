//! Convert a restricted subset of LaTeX math notation into MathML.
//!
//! The input is a single math-mode formula (no surrounding `$`), and the
//! output is a complete `<math>` element in the MathML namespace. When the
//! input is not valid under the restricted grammar, [`translate`] returns a
//! [`LatexError`] that identifies the error kind and its exact character
//! range in the input; [`LatexError::to_xml`] serializes it as the
//! structured diagnostic document consumed by embedding tools.
//!
//! ```rust
//! let config = tex2mml::Config::default();
//! let mathml = tex2mml::translate("x = 1", &config)?;
//! assert_eq!(
//!     mathml,
//!     r#"<math xmlns="http://www.w3.org/1998/Math/MathML"><mrow><mi>x</mi><mo>=</mo><mn>1</mn></mrow></math>"#,
//! );
//! # Ok::<(), tex2mml::LatexError>(())
//! ```

mod ast;
mod attribute;
mod commands;
mod error;
mod lexer;
mod ops;
mod parse;
mod token;

use crate::ast::{MathMLEmitter, Node};
use crate::attribute::MathSpacing;
use crate::lexer::Lexer;
use crate::parse::Parser;

pub use crate::error::{LatexErrKind, LatexError};

/// Horizontal spacing policy for operators.
///
/// `Moderate` leaves spacing to the MathML renderer's operator dictionary;
/// the other two levels pin `lspace`/`rspace` on binary-operator- and
/// relation-class `<mo>` elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Spacing {
    Tight,
    #[default]
    Moderate,
    Wide,
}

impl Spacing {
    fn explicit_spacing(self) -> Option<MathSpacing> {
        match self {
            Spacing::Tight => Some(MathSpacing::Zero),
            Spacing::Moderate => None,
            Spacing::Wide => Some(MathSpacing::FiveMu),
        }
    }
}

/// Translation options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub spacing: Spacing,
}

/// Translates one formula into a MathML document.
///
/// All parsed nodes are wrapped in a single row, which collapses away when
/// the formula is a single node, so `W_3` comes out as a bare `<msub>`
/// directly under `<math>`.
pub fn translate<'source>(
    latex: &'source str,
    config: &Config,
) -> Result<String, LatexError<'source>> {
    let mut parser = Parser::new(Lexer::new(latex));
    let nodes = parser.parse()?;
    let row = Node::Row(nodes);
    let mut output = String::from(r#"<math xmlns="http://www.w3.org/1998/Math/MathML">"#);
    MathMLEmitter::new(&mut output, config.spacing.explicit_spacing())
        .emit(&row)
        .map_err(|_| LatexError(0, LatexErrKind::RenderError))?;
    output.push_str("</math>");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    fn convert(latex: &str) -> String {
        match translate(latex, &Config::default()) {
            Ok(mathml) => mathml,
            Err(err) => panic!("failed to translate {latex:?}: {err}"),
        }
    }

    #[test]
    fn letters_split_per_char() {
        assert_snapshot!(convert("test"), @r#"<math xmlns="http://www.w3.org/1998/Math/MathML"><mrow><mi>t</mi><mi>e</mi><mi>s</mi><mi>t</mi></mrow></math>"#);
    }

    #[test]
    fn simple_equation() {
        assert_snapshot!(convert("n = 1"), @r#"<math xmlns="http://www.w3.org/1998/Math/MathML"><mrow><mi>n</mi><mo>=</mo><mn>1</mn></mrow></math>"#);
    }

    #[test]
    fn superscript_group() {
        assert_snapshot!(convert("n = 2^{h+1} - 1"), @r#"<math xmlns="http://www.w3.org/1998/Math/MathML"><mrow><mi>n</mi><mo>=</mo><msup><mn>2</mn><mrow><mi>h</mi><mo>+</mo><mn>1</mn></mrow></msup><mo>-</mo><mn>1</mn></mrow></math>"#);
    }

    #[test]
    fn single_node_has_no_outer_row() {
        assert_snapshot!(convert("W_3"), @r#"<math xmlns="http://www.w3.org/1998/Math/MathML"><msub><mi>W</mi><mn>3</mn></msub></math>"#);
    }

    #[test]
    fn double_struck_with_superscript() {
        assert_snapshot!(convert(r"k \in \mathbb{Z}^+"), @r#"<math xmlns="http://www.w3.org/1998/Math/MathML"><mrow><mi>k</mi><mo>∈</mo><msup><mi mathvariant="double-struck">Z</mi><mo>+</mo></msup></mrow></math>"#);
    }

    #[test]
    fn escaped_braces_are_fences() {
        assert_snapshot!(convert(r"S = G - \{ e \}"), @r#"<math xmlns="http://www.w3.org/1998/Math/MathML"><mrow><mi>S</mi><mo>=</mo><mi>G</mi><mo>-</mo><mo stretchy="false">{</mo><mi>e</mi><mo stretchy="false">}</mo></mrow></math>"#);
    }

    #[test]
    fn named_function() {
        assert_snapshot!(convert(r"\sin x"), @r#"<math xmlns="http://www.w3.org/1998/Math/MathML"><mrow><mi>sin</mi><mi>x</mi></mrow></math>"#);
    }

    #[test]
    fn explicit_space() {
        assert_snapshot!(convert(r"a \, b"), @r#"<math xmlns="http://www.w3.org/1998/Math/MathML"><mrow><mi>a</mi><mspace width="0.1667em"/><mi>b</mi></mrow></math>"#);
    }

    #[test]
    fn empty_input_is_an_empty_row() {
        assert_snapshot!(convert(""), @r#"<math xmlns="http://www.w3.org/1998/Math/MathML"><mrow></mrow></math>"#);
    }

    #[test]
    fn tight_spacing() {
        let config = Config {
            spacing: Spacing::Tight,
        };
        assert_snapshot!(translate("a + b = c", &config).unwrap(), @r#"<math xmlns="http://www.w3.org/1998/Math/MathML"><mrow><mi>a</mi><mo lspace="0" rspace="0">+</mo><mi>b</mi><mo lspace="0" rspace="0">=</mo><mi>c</mi></mrow></math>"#);
    }

    #[test]
    fn wide_spacing() {
        let config = Config {
            spacing: Spacing::Wide,
        };
        assert_snapshot!(translate("a + b", &config).unwrap(), @r#"<math xmlns="http://www.w3.org/1998/Math/MathML"><mrow><mi>a</mi><mo lspace="0.2778em" rspace="0.2778em">+</mo><mi>b</mi></mrow></math>"#);
    }

    #[test]
    fn error_positions_are_chars_not_bytes() {
        let err = translate(r"α \nosuch", &Config::default()).unwrap_err();
        assert_eq!(err, LatexError(2, LatexErrKind::UnrecognisedCommand("nosuch")));
        assert_eq!(err.length(), 7);
    }
}
