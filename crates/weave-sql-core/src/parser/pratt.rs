//! Pratt expression parser for operator precedence.

use crate::ast::{BinaryOp, UnaryOp};
use crate::lexer::{Keyword, TokenKind};

/// Binding power of the `::` cast, tighter than every infix operator.
pub const CAST_BINDING_POWER: u8 = 19;

/// Returns the prefix binding power for a unary operator token.
///
/// Returns `None` if the token is not a unary operator.
#[must_use]
pub const fn prefix_binding_power(kind: &TokenKind) -> Option<u8> {
    match kind {
        // Unary minus, plus and bitwise NOT
        TokenKind::Minus | TokenKind::Plus | TokenKind::BitNot => Some(17),
        // NOT sits between AND and the comparisons
        TokenKind::Keyword(Keyword::Not) => Some(5),
        _ => None,
    }
}

/// Returns the infix binding power for a token.
///
/// Returns `(left_bp, right_bp)` where:
/// - Higher binding power = binds tighter
/// - Left associative: left_bp < right_bp
/// - Right associative: left_bp > right_bp
///
/// Returns `None` if the token is not an infix operator.
#[must_use]
pub const fn infix_binding_power(kind: &TokenKind) -> Option<(u8, u8)> {
    match kind {
        // Logical OR (lowest precedence)
        TokenKind::Keyword(Keyword::Or) => Some((1, 2)),

        // Logical AND
        TokenKind::Keyword(Keyword::And) => Some((3, 4)),

        // Comparison operators
        TokenKind::Eq
        | TokenKind::NotEq
        | TokenKind::Lt
        | TokenKind::LtEq
        | TokenKind::Gt
        | TokenKind::GtEq
        | TokenKind::Contains
        | TokenKind::ContainedBy => Some((5, 6)),

        // IS, [NOT] IN, BETWEEN, LIKE, ILIKE
        TokenKind::Keyword(
            Keyword::Is
            | Keyword::Not
            | Keyword::In
            | Keyword::Between
            | Keyword::Like
            | Keyword::Ilike,
        ) => Some((5, 6)),

        // Bitwise OR
        TokenKind::BitOr => Some((7, 8)),

        // Bitwise AND
        TokenKind::BitAnd => Some((9, 10)),

        // Bit shifts
        TokenKind::LeftShift | TokenKind::RightShift => Some((11, 12)),

        // Additive (string concat has same precedence as addition)
        TokenKind::Plus | TokenKind::Minus | TokenKind::Concat => Some((13, 14)),

        // Multiplicative
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => Some((15, 16)),

        _ => None,
    }
}

/// Converts a token to a binary operator.
#[must_use]
pub const fn token_to_binary_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        TokenKind::Percent => Some(BinaryOp::Mod),
        TokenKind::Eq => Some(BinaryOp::Eq),
        TokenKind::NotEq => Some(BinaryOp::NotEq),
        TokenKind::Lt => Some(BinaryOp::Lt),
        TokenKind::LtEq => Some(BinaryOp::LtEq),
        TokenKind::Gt => Some(BinaryOp::Gt),
        TokenKind::GtEq => Some(BinaryOp::GtEq),
        TokenKind::Contains => Some(BinaryOp::Contains),
        TokenKind::ContainedBy => Some(BinaryOp::ContainedBy),
        TokenKind::Keyword(Keyword::And) => Some(BinaryOp::And),
        TokenKind::Keyword(Keyword::Or) => Some(BinaryOp::Or),
        TokenKind::Concat => Some(BinaryOp::Concat),
        TokenKind::BitAnd => Some(BinaryOp::BitAnd),
        TokenKind::BitOr => Some(BinaryOp::BitOr),
        TokenKind::LeftShift => Some(BinaryOp::LeftShift),
        TokenKind::RightShift => Some(BinaryOp::RightShift),
        _ => None,
    }
}

/// Converts a token to a unary operator.
#[must_use]
pub const fn token_to_unary_op(kind: &TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Minus => Some(UnaryOp::Neg),
        TokenKind::Plus => Some(UnaryOp::Plus),
        TokenKind::Keyword(Keyword::Not) => Some(UnaryOp::Not),
        TokenKind::BitNot => Some(UnaryOp::BitNot),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_ordering() {
        // Multiplication should bind tighter than addition
        let add_bp = infix_binding_power(&TokenKind::Plus).unwrap();
        let mul_bp = infix_binding_power(&TokenKind::Star).unwrap();
        assert!(mul_bp.0 > add_bp.0);

        // AND should bind tighter than OR
        let and_bp = infix_binding_power(&TokenKind::Keyword(Keyword::And)).unwrap();
        let or_bp = infix_binding_power(&TokenKind::Keyword(Keyword::Or)).unwrap();
        assert!(and_bp.0 > or_bp.0);

        // Comparison should bind tighter than logical operators
        let eq_bp = infix_binding_power(&TokenKind::Eq).unwrap();
        assert!(eq_bp.0 > and_bp.0);
    }

    #[test]
    fn test_not_binds_between_and_and_comparison() {
        let not_bp = prefix_binding_power(&TokenKind::Keyword(Keyword::Not)).unwrap();
        let and_bp = infix_binding_power(&TokenKind::Keyword(Keyword::And)).unwrap();
        let eq_bp = infix_binding_power(&TokenKind::Eq).unwrap();
        assert!(not_bp > and_bp.0);
        assert!(not_bp <= eq_bp.0);
    }

    #[test]
    fn test_contains_is_a_comparison() {
        assert_eq!(
            infix_binding_power(&TokenKind::Contains),
            infix_binding_power(&TokenKind::Eq)
        );
        assert_eq!(
            token_to_binary_op(&TokenKind::ContainedBy),
            Some(BinaryOp::ContainedBy)
        );
    }

    #[test]
    fn test_left_associativity() {
        // Binary operators should be left-associative
        let (left, right) = infix_binding_power(&TokenKind::Plus).unwrap();
        assert!(left < right);
    }

    #[test]
    fn test_cast_binds_tightest() {
        let mul_bp = infix_binding_power(&TokenKind::Star).unwrap();
        assert!(CAST_BINDING_POWER > mul_bp.1);
    }

    #[test]
    fn test_token_to_unary_op() {
        assert_eq!(token_to_unary_op(&TokenKind::Minus), Some(UnaryOp::Neg));
        assert_eq!(
            token_to_unary_op(&TokenKind::Keyword(Keyword::Not)),
            Some(UnaryOp::Not)
        );
        assert_eq!(token_to_unary_op(&TokenKind::Eq), None);
    }
}
