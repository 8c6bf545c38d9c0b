//! The command table: a static mapping from command name to token.
//!
//! The table is compiled into the binary, is never mutated, and can be
//! consulted from any number of threads without locking.

use phf::phf_map;

use crate::attribute::MathVariant;
use crate::ops;
use crate::token::Token;

static COMMANDS: phf::Map<&'static str, Token> = phf_map! {
    // Lowercase Greek letters.
    "alpha" => Token::Letter('α'),
    "beta" => Token::Letter('β'),
    "gamma" => Token::Letter('γ'),
    "delta" => Token::Letter('δ'),
    "epsilon" => Token::Letter('ϵ'),
    "varepsilon" => Token::Letter('ε'),
    "zeta" => Token::Letter('ζ'),
    "eta" => Token::Letter('η'),
    "theta" => Token::Letter('θ'),
    "vartheta" => Token::Letter('ϑ'),
    "iota" => Token::Letter('ι'),
    "kappa" => Token::Letter('κ'),
    "lambda" => Token::Letter('λ'),
    "mu" => Token::Letter('μ'),
    "nu" => Token::Letter('ν'),
    "xi" => Token::Letter('ξ'),
    "pi" => Token::Letter('π'),
    "varpi" => Token::Letter('ϖ'),
    "rho" => Token::Letter('ρ'),
    "varrho" => Token::Letter('ϱ'),
    "sigma" => Token::Letter('σ'),
    "varsigma" => Token::Letter('ς'),
    "tau" => Token::Letter('τ'),
    "upsilon" => Token::Letter('υ'),
    "phi" => Token::Letter('ϕ'),
    "varphi" => Token::Letter('φ'),
    "chi" => Token::Letter('χ'),
    "psi" => Token::Letter('ψ'),
    "omega" => Token::Letter('ω'),
    // Uppercase Greek letters.
    "Gamma" => Token::Letter('Γ'),
    "Delta" => Token::Letter('Δ'),
    "Theta" => Token::Letter('Θ'),
    "Lambda" => Token::Letter('Λ'),
    "Xi" => Token::Letter('Ξ'),
    "Pi" => Token::Letter('Π'),
    "Sigma" => Token::Letter('Σ'),
    "Upsilon" => Token::Letter('ϒ'),
    "Phi" => Token::Letter('Φ'),
    "Psi" => Token::Letter('Ψ'),
    "Omega" => Token::Letter('Ω'),
    // Ordinary symbols.
    "infty" => Token::Letter('∞'),
    "partial" => Token::Letter('∂'),
    "nabla" => Token::Letter('∇'),
    "emptyset" => Token::Letter('∅'),
    "varnothing" => Token::Letter('∅'),
    "forall" => Token::Letter('∀'),
    "exists" => Token::Letter('∃'),
    "neg" => Token::Letter('¬'),
    "lnot" => Token::Letter('¬'),
    "aleph" => Token::Letter('ℵ'),
    "hbar" => Token::Letter('ℏ'),
    "ell" => Token::Letter('ℓ'),
    "angle" => Token::Letter('∠'),
    "prime" => Token::Letter('′'),
    // Relations.
    "neq" => Token::Relation(ops::NOT_EQUAL_TO),
    "ne" => Token::Relation(ops::NOT_EQUAL_TO),
    "leq" => Token::Relation(ops::LESS_THAN_OR_EQUAL_TO),
    "le" => Token::Relation(ops::LESS_THAN_OR_EQUAL_TO),
    "geq" => Token::Relation(ops::GREATER_THAN_OR_EQUAL_TO),
    "ge" => Token::Relation(ops::GREATER_THAN_OR_EQUAL_TO),
    "equiv" => Token::Relation(ops::IDENTICAL_TO),
    "approx" => Token::Relation(ops::ALMOST_EQUAL_TO),
    "sim" => Token::Relation(ops::TILDE_OPERATOR),
    "simeq" => Token::Relation(ops::ASYMPTOTICALLY_EQUAL_TO),
    "cong" => Token::Relation(ops::APPROXIMATELY_EQUAL_TO),
    "propto" => Token::Relation(ops::PROPORTIONAL_TO),
    "ll" => Token::Relation(ops::MUCH_LESS_THAN),
    "gg" => Token::Relation(ops::MUCH_GREATER_THAN),
    "prec" => Token::Relation(ops::PRECEDES),
    "succ" => Token::Relation(ops::SUCCEEDS),
    "subset" => Token::Relation(ops::SUBSET_OF),
    "supset" => Token::Relation(ops::SUPERSET_OF),
    "subseteq" => Token::Relation(ops::SUBSET_OF_OR_EQUAL_TO),
    "supseteq" => Token::Relation(ops::SUPERSET_OF_OR_EQUAL_TO),
    "in" => Token::Relation(ops::ELEMENT_OF),
    "ni" => Token::Relation(ops::CONTAINS_AS_MEMBER),
    "notin" => Token::Relation(ops::NOT_AN_ELEMENT_OF),
    "mid" => Token::Relation(ops::DIVIDES),
    "parallel" => Token::Relation(ops::PARALLEL_TO),
    "perp" => Token::Relation(ops::UP_TACK),
    "colon" => Token::Relation(ops::COLON),
    // Arrows (relations as well).
    "rightarrow" => Token::Relation(ops::RIGHTWARDS_ARROW),
    "to" => Token::Relation(ops::RIGHTWARDS_ARROW),
    "leftarrow" => Token::Relation(ops::LEFTWARDS_ARROW),
    "gets" => Token::Relation(ops::LEFTWARDS_ARROW),
    "leftrightarrow" => Token::Relation(ops::LEFT_RIGHT_ARROW),
    "Rightarrow" => Token::Relation(ops::RIGHTWARDS_DOUBLE_ARROW),
    "Leftarrow" => Token::Relation(ops::LEFTWARDS_DOUBLE_ARROW),
    "Leftrightarrow" => Token::Relation(ops::LEFT_RIGHT_DOUBLE_ARROW),
    "implies" => Token::Relation(ops::RIGHTWARDS_DOUBLE_ARROW),
    "iff" => Token::Relation(ops::LEFT_RIGHT_DOUBLE_ARROW),
    "mapsto" => Token::Relation(ops::RIGHTWARDS_ARROW_FROM_BAR),
    "uparrow" => Token::Relation(ops::UPWARDS_ARROW),
    "downarrow" => Token::Relation(ops::DOWNWARDS_ARROW),
    // Binary operations.
    "pm" => Token::BinaryOp(ops::PLUS_MINUS_SIGN),
    "mp" => Token::BinaryOp(ops::MINUS_OR_PLUS_SIGN),
    "times" => Token::BinaryOp(ops::MULTIPLICATION_SIGN),
    "div" => Token::BinaryOp(ops::DIVISION_SIGN),
    "cdot" => Token::BinaryOp(ops::DOT_OPERATOR),
    "ast" => Token::BinaryOp(ops::ASTERISK_OPERATOR),
    "star" => Token::BinaryOp(ops::STAR_OPERATOR),
    "circ" => Token::BinaryOp(ops::RING_OPERATOR),
    "bullet" => Token::BinaryOp(ops::BULLET_OPERATOR),
    "cup" => Token::BinaryOp(ops::UNION),
    "cap" => Token::BinaryOp(ops::INTERSECTION),
    "setminus" => Token::BinaryOp(ops::SET_MINUS),
    "vee" => Token::BinaryOp(ops::LOGICAL_OR),
    "lor" => Token::BinaryOp(ops::LOGICAL_OR),
    "wedge" => Token::BinaryOp(ops::LOGICAL_AND),
    "land" => Token::BinaryOp(ops::LOGICAL_AND),
    "oplus" => Token::BinaryOp(ops::CIRCLED_PLUS),
    "ominus" => Token::BinaryOp(ops::CIRCLED_MINUS),
    "otimes" => Token::BinaryOp(ops::CIRCLED_TIMES),
    "odot" => Token::BinaryOp(ops::CIRCLED_DOT_OPERATOR),
    // Dots.
    "ldots" => Token::Punctuation(ops::HORIZONTAL_ELLIPSIS),
    "dots" => Token::Punctuation(ops::HORIZONTAL_ELLIPSIS),
    "cdots" => Token::Punctuation(ops::MIDLINE_HORIZONTAL_ELLIPSIS),
    // Named functions, rendered as one `<mi>`.
    "sin" => Token::Function("sin"),
    "cos" => Token::Function("cos"),
    "tan" => Token::Function("tan"),
    "cot" => Token::Function("cot"),
    "sec" => Token::Function("sec"),
    "csc" => Token::Function("csc"),
    "log" => Token::Function("log"),
    "ln" => Token::Function("ln"),
    "exp" => Token::Function("exp"),
    "lim" => Token::Function("lim"),
    "max" => Token::Function("max"),
    "min" => Token::Function("min"),
    "sup" => Token::Function("sup"),
    "inf" => Token::Function("inf"),
    "det" => Token::Function("det"),
    "gcd" => Token::Function("gcd"),
    "deg" => Token::Function("deg"),
    "dim" => Token::Function("dim"),
    "arg" => Token::Function("arg"),
    "mod" => Token::Function("mod"),
    // Escaped delimiters; these render visibly, unlike grouping braces.
    "{" => Token::Open(ops::LEFT_CURLY_BRACKET),
    "}" => Token::Close(ops::RIGHT_CURLY_BRACKET),
    "lbrace" => Token::Open(ops::LEFT_CURLY_BRACKET),
    "rbrace" => Token::Close(ops::RIGHT_CURLY_BRACKET),
    "|" => Token::Ord(ops::DOUBLE_VERTICAL_LINE),
    "vert" => Token::Ord(ops::VERTICAL_LINE),
    "Vert" => Token::Ord(ops::DOUBLE_VERTICAL_LINE),
    "langle" => Token::Open(ops::LEFT_ANGLE_BRACKET),
    "rangle" => Token::Close(ops::RIGHT_ANGLE_BRACKET),
    "lceil" => Token::Open(ops::LEFT_CEILING),
    "rceil" => Token::Close(ops::RIGHT_CEILING),
    "lfloor" => Token::Open(ops::LEFT_FLOOR),
    "rfloor" => Token::Close(ops::RIGHT_FLOOR),
    // Font-variant directives.
    "mathbb" => Token::Transform(MathVariant::DoubleStruck, "mathbb"),
    "mathbf" => Token::Transform(MathVariant::Bold, "mathbf"),
    "mathit" => Token::Transform(MathVariant::Italic, "mathit"),
    "mathrm" => Token::Transform(MathVariant::Normal, "mathrm"),
    "mathcal" => Token::Transform(MathVariant::Script, "mathcal"),
    "mathscr" => Token::Transform(MathVariant::Script, "mathscr"),
    "mathfrak" => Token::Transform(MathVariant::Fraktur, "mathfrak"),
    "mathsf" => Token::Transform(MathVariant::SansSerif, "mathsf"),
    "mathtt" => Token::Transform(MathVariant::Monospace, "mathtt"),
    // Spacing commands, widths in em.
    "," => Token::Space("0.1667"),
    ":" => Token::Space("0.2222"),
    ";" => Token::Space("0.2778"),
    "!" => Token::Space("-0.1667"),
    " " => Token::Space("0.3333"),
    "quad" => Token::Space("1"),
    "qquad" => Token::Space("2"),
};

/// Look up a command name (without the leading backslash).
pub(crate) fn get_command(name: &str) -> Option<Token> {
    COMMANDS.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() {
        assert_eq!(get_command("neq"), Some(Token::Relation(ops::NOT_EQUAL_TO)));
        assert_eq!(get_command("theta"), Some(Token::Letter('θ')));
        assert_eq!(get_command("{"), Some(Token::Open(ops::LEFT_CURLY_BRACKET)));
        assert_eq!(get_command("testingwrongcommand"), None);
        assert_eq!(get_command(""), None);
    }
}
