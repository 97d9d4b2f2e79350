//! Recognizer for the fixed two-variable grammar.
//!
//! One objective shape and five constraint shapes; anything else is
//! rejected. These are pure predicates: malformed input yields `false`,
//! never an error.

use crate::lexer::{Lexer, Token, TokenKind};

/// Token cursor. `Copy` so each candidate shape matches from a fresh
/// position without explicit backtracking.
#[derive(Clone, Copy)]
struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> TokenKind {
        self.tokens.get(self.pos).map(|t| t.kind).unwrap_or(TokenKind::Eof)
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek() == kind {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_sign(&mut self) -> bool {
        self.eat(TokenKind::Plus) || self.eat(TokenKind::Minus)
    }

    // Coefficients default to 1 when omitted
    fn eat_coefficient(&mut self) {
        self.eat(TokenKind::Number);
    }

    fn eat_relop(&mut self) -> bool {
        self.eat(TokenKind::Le) || self.eat(TokenKind::Ge) || self.eat(TokenKind::Eq)
    }

    fn at_end(&self) -> bool {
        self.peek() == TokenKind::Eof
    }
}

/// `[sign] [coef] var` with both sign and coefficient optional
fn term(c: &mut Cursor, var: TokenKind) -> bool {
    c.eat_sign();
    c.eat_coefficient();
    c.eat(var)
}

/// `sign [coef] var` with the sign mandatory
fn signed_term(c: &mut Cursor, var: TokenKind) -> bool {
    if !c.eat_sign() {
        return false;
    }
    c.eat_coefficient();
    c.eat(var)
}

/// `[sign] number` constant right-hand side
fn signed_constant(c: &mut Cursor) -> bool {
    c.eat_sign();
    c.eat(TokenKind::Number)
}

// The five constraint shapes. Each takes the cursor by value and must
// consume the whole line.

fn two_variable(mut c: Cursor) -> bool {
    term(&mut c, TokenKind::X)
        && signed_term(&mut c, TokenKind::Y)
        && c.eat_relop()
        && signed_constant(&mut c)
        && c.at_end()
}

fn single_variable(mut c: Cursor, var: TokenKind) -> bool {
    term(&mut c, var) && c.eat_relop() && signed_constant(&mut c) && c.at_end()
}

fn variable_pair(mut c: Cursor, lhs: TokenKind, rhs: TokenKind) -> bool {
    term(&mut c, lhs) && c.eat_relop() && term(&mut c, rhs) && c.at_end()
}

/// Reports whether `text` is a well-formed objective function:
/// `(max|min|maximizar|minimizar) z = [sign][coef]x [+|-][coef]y`,
/// case-insensitive, matched against the whole string.
pub fn validate_objective(text: &str) -> bool {
    // Newlines count as plain whitespace in an objective
    let tokens: Vec<Token> = Lexer::tokenize(text)
        .into_iter()
        .filter(|t| t.kind != TokenKind::Newline)
        .collect();
    let mut c = Cursor::new(&tokens);
    if !(c.eat(TokenKind::Max) || c.eat(TokenKind::Min)) {
        return false;
    }
    if !c.eat(TokenKind::Z) || !c.eat(TokenKind::Eq) {
        return false;
    }
    term(&mut c, TokenKind::X) && signed_term(&mut c, TokenKind::Y) && c.at_end()
}

/// Reports whether a single constraint line matches one of the five
/// supported shapes. A blank line does not match.
pub fn validate_constraint_line(line: &str) -> bool {
    let tokens = Lexer::tokenize(line);
    let c = Cursor::new(&tokens);
    two_variable(c)
        || single_variable(c, TokenKind::X)
        || single_variable(c, TokenKind::Y)
        || variable_pair(c, TokenKind::X, TokenKind::Y)
        || variable_pair(c, TokenKind::Y, TokenKind::X)
}

/// Reports whether every non-blank line of `text` is a well-formed
/// constraint. An empty set is invalid; the first bad line rejects the
/// whole input.
pub fn validate_constraints(text: &str) -> bool {
    let mut seen = false;
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        seen = true;
        if !validate_constraint_line(line) {
            return false;
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objective_basic() {
        assert!(validate_objective("maximizar z = 3x + 2y"));
        assert!(validate_objective("minimizar z = 2x + 3y"));
        assert!(validate_objective("max z = 3x - 2y"));
        assert!(validate_objective("min z = x + y"));
    }

    #[test]
    fn test_objective_case_insensitive() {
        assert!(validate_objective("MAXIMIZAR Z = 3X + 2Y"));
        assert!(validate_objective("Max z = 3x + 2y"));
    }

    #[test]
    fn test_objective_optional_coefficients_and_signs() {
        assert!(validate_objective("max z = x + 4y"));
        assert!(validate_objective("max z = -x + y"));
        assert!(validate_objective("max z = +2.5x - 0.5y"));
        assert!(validate_objective("min z = .5x + y"));
    }

    #[test]
    fn test_objective_whitespace_insignificant() {
        assert!(validate_objective("  max   z =  3 x  +  2 y  "));
        assert!(validate_objective("max z =\n3x + 2y"));
    }

    #[test]
    fn test_objective_rejects() {
        assert!(!validate_objective(""));
        // Missing y term
        assert!(!validate_objective("max z = 3x"));
        // Missing keyword
        assert!(!validate_objective("z = 3x + 2y"));
        // Missing sign before the y term
        assert!(!validate_objective("max z = 3x 2y"));
        // Trailing garbage: whole-string match only
        assert!(!validate_objective("max z = 3x + 2y + 1"));
        assert!(!validate_objective("max w = 3x + 2y"));
    }

    #[test]
    fn test_constraint_two_variable() {
        assert!(validate_constraints("x + 2y <= 8"));
        assert!(validate_constraints("2x + y <= 10"));
        assert!(validate_constraints("-x + 3y >= 2"));
        assert!(validate_constraints("2.5x - 0.5y = 1"));
    }

    #[test]
    fn test_constraint_single_variable() {
        assert!(validate_constraints("x >= 0"));
        assert!(validate_constraints("y >= 0"));
        assert!(validate_constraints("2y <= 6"));
        assert!(validate_constraints("x <= -4"));
    }

    #[test]
    fn test_constraint_variable_pair() {
        assert!(validate_constraints("x <= y"));
        assert!(validate_constraints("y >= x"));
        assert!(validate_constraints("2x >= 3y"));
    }

    #[test]
    fn test_constraint_unicode_operators() {
        assert!(validate_constraints("x + 2y ≤ 8"));
        assert!(validate_constraints("x ≥ 0"));
    }

    #[test]
    fn test_constraint_multi_line() {
        assert!(validate_constraints("x + 2y <= 8\n2x + y <= 10\nx >= 0\ny >= 0"));
        // Blank lines are discarded, not rejected
        assert!(validate_constraints("x >= 0\n\n  \ny >= 0"));
    }

    #[test]
    fn test_constraint_rejects() {
        // Empty set is invalid
        assert!(!validate_constraints(""));
        assert!(!validate_constraints("   \n  "));
        // No operator or right-hand side
        assert!(!validate_constraints("x + y"));
        // Strict inequality is not in the grammar
        assert!(!validate_constraints("x < 4"));
        // Right-hand side must be a constant or the other variable
        assert!(!validate_constraints("x <= y + 1"));
        // Third variable
        assert!(!validate_constraints("x + w <= 4"));
    }

    #[test]
    fn test_one_bad_line_rejects_the_set() {
        assert!(!validate_constraints("x >= 0\nx + y\ny >= 0"));
    }

    #[test]
    fn test_predicates_are_idempotent() {
        let objective = "maximizar z = 3x + 2y";
        let constraints = "x + 2y <= 8\n2x + y <= 10";
        assert_eq!(validate_objective(objective), validate_objective(objective));
        assert_eq!(
            validate_constraints(constraints),
            validate_constraints(constraints)
        );
    }

    #[test]
    fn test_end_to_end_example() {
        assert!(validate_objective("maximizar z = 3x + 2y"));
        assert!(validate_constraints("x + 2y <= 8\n2x + y <= 10\nx >= 0\ny >= 0"));
    }
}
