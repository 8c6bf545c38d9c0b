//! Operator characters that can appear in `<mo>` elements.

/// A single operator character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Op(pub char);

impl Op {
    #[inline]
    pub fn char(self) -> char {
        self.0
    }
}

// ASCII operators and punctuation.
pub const EQUALS_SIGN: Op = Op('=');
pub const PLUS_SIGN: Op = Op('+');
pub const HYPHEN_MINUS: Op = Op('-');
pub const ASTERISK: Op = Op('*');
pub const SOLIDUS: Op = Op('/');
pub const EXCLAMATION_MARK: Op = Op('!');
pub const COMMA: Op = Op(',');
pub const FULL_STOP: Op = Op('.');
pub const SEMICOLON: Op = Op(';');
pub const COLON: Op = Op(':');
pub const LESS_THAN_SIGN: Op = Op('<');
pub const GREATER_THAN_SIGN: Op = Op('>');
pub const VERTICAL_LINE: Op = Op('|');
pub const LEFT_PARENTHESIS: Op = Op('(');
pub const RIGHT_PARENTHESIS: Op = Op(')');
pub const LEFT_SQUARE_BRACKET: Op = Op('[');
pub const RIGHT_SQUARE_BRACKET: Op = Op(']');
pub const LEFT_CURLY_BRACKET: Op = Op('{');
pub const RIGHT_CURLY_BRACKET: Op = Op('}');

// Relations.
pub const NOT_EQUAL_TO: Op = Op('≠');
pub const LESS_THAN_OR_EQUAL_TO: Op = Op('≤');
pub const GREATER_THAN_OR_EQUAL_TO: Op = Op('≥');
pub const IDENTICAL_TO: Op = Op('≡');
pub const ALMOST_EQUAL_TO: Op = Op('≈');
pub const TILDE_OPERATOR: Op = Op('∼');
pub const ASYMPTOTICALLY_EQUAL_TO: Op = Op('≃');
pub const APPROXIMATELY_EQUAL_TO: Op = Op('≅');
pub const PROPORTIONAL_TO: Op = Op('∝');
pub const MUCH_LESS_THAN: Op = Op('≪');
pub const MUCH_GREATER_THAN: Op = Op('≫');
pub const PRECEDES: Op = Op('≺');
pub const SUCCEEDS: Op = Op('≻');
pub const SUBSET_OF: Op = Op('⊂');
pub const SUPERSET_OF: Op = Op('⊃');
pub const SUBSET_OF_OR_EQUAL_TO: Op = Op('⊆');
pub const SUPERSET_OF_OR_EQUAL_TO: Op = Op('⊇');
pub const ELEMENT_OF: Op = Op('∈');
pub const CONTAINS_AS_MEMBER: Op = Op('∋');
pub const NOT_AN_ELEMENT_OF: Op = Op('∉');
pub const DIVIDES: Op = Op('∣');
pub const PARALLEL_TO: Op = Op('∥');
pub const UP_TACK: Op = Op('⊥');

// Arrows.
pub const RIGHTWARDS_ARROW: Op = Op('→');
pub const LEFTWARDS_ARROW: Op = Op('←');
pub const LEFT_RIGHT_ARROW: Op = Op('↔');
pub const RIGHTWARDS_DOUBLE_ARROW: Op = Op('⇒');
pub const LEFTWARDS_DOUBLE_ARROW: Op = Op('⇐');
pub const LEFT_RIGHT_DOUBLE_ARROW: Op = Op('⇔');
pub const RIGHTWARDS_ARROW_FROM_BAR: Op = Op('↦');
pub const UPWARDS_ARROW: Op = Op('↑');
pub const DOWNWARDS_ARROW: Op = Op('↓');

// Binary operations.
pub const PLUS_MINUS_SIGN: Op = Op('±');
pub const MINUS_OR_PLUS_SIGN: Op = Op('∓');
pub const MULTIPLICATION_SIGN: Op = Op('×');
pub const DIVISION_SIGN: Op = Op('÷');
pub const DOT_OPERATOR: Op = Op('⋅');
pub const ASTERISK_OPERATOR: Op = Op('∗');
pub const STAR_OPERATOR: Op = Op('⋆');
pub const RING_OPERATOR: Op = Op('∘');
pub const BULLET_OPERATOR: Op = Op('∙');
pub const UNION: Op = Op('∪');
pub const INTERSECTION: Op = Op('∩');
pub const SET_MINUS: Op = Op('∖');
pub const LOGICAL_OR: Op = Op('∨');
pub const LOGICAL_AND: Op = Op('∧');
pub const CIRCLED_PLUS: Op = Op('⊕');
pub const CIRCLED_MINUS: Op = Op('⊖');
pub const CIRCLED_TIMES: Op = Op('⊗');
pub const CIRCLED_DOT_OPERATOR: Op = Op('⊙');

// Dots.
pub const HORIZONTAL_ELLIPSIS: Op = Op('…');
pub const MIDLINE_HORIZONTAL_ELLIPSIS: Op = Op('⋯');

// Delimiters reachable only through commands.
pub const DOUBLE_VERTICAL_LINE: Op = Op('‖');
pub const LEFT_ANGLE_BRACKET: Op = Op('⟨');
pub const RIGHT_ANGLE_BRACKET: Op = Op('⟩');
pub const LEFT_CEILING: Op = Op('⌈');
pub const RIGHT_CEILING: Op = Op('⌉');
pub const LEFT_FLOOR: Op = Op('⌊');
pub const RIGHT_FLOOR: Op = Op('⌋');
