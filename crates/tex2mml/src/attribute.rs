use strum_macros::IntoStaticStr;

/// `<mi>` mathvariant attribute, serialized as the complete attribute string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum MathVariant {
    #[strum(serialize = r#" mathvariant="double-struck""#)]
    DoubleStruck,
    #[strum(serialize = r#" mathvariant="bold""#)]
    Bold,
    #[strum(serialize = r#" mathvariant="italic""#)]
    Italic,
    #[strum(serialize = r#" mathvariant="normal""#)]
    Normal,
    #[strum(serialize = r#" mathvariant="script""#)]
    Script,
    #[strum(serialize = r#" mathvariant="fraktur""#)]
    Fraktur,
    #[strum(serialize = r#" mathvariant="sans-serif""#)]
    SansSerif,
    #[strum(serialize = r#" mathvariant="monospace""#)]
    Monospace,
}

/// LaTeX-style spacing class of an operator.
///
/// The class decides which `<mo>` elements get explicit spacing attributes
/// under the non-default spacing policies, and which ones are rendered with
/// `stretchy="false"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpClass {
    /// `mathbin`: `+`, `-`, `\times`, ...
    BinaryOp,
    /// `mathrel`: `=`, `\neq`, `\in`, arrows, ...
    Relation,
    /// `mathpunct` and postfix marks: `,`, `.`, `!`, ...
    Punctuation,
    /// Bracket-like operators: `(`, `)`, `|`, literal braces. Never stretchy
    /// in this inline context.
    Fence,
}

/// Explicit `<mo>` spacing attributes, serialized as complete attribute strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum MathSpacing {
    #[strum(serialize = r#" lspace="0" rspace="0""#)]
    Zero,
    #[strum(serialize = r#" lspace="0.2778em" rspace="0.2778em""#)]
    FiveMu, // 5/18 em
}
