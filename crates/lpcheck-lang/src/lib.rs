pub mod grammar;
pub mod lexer;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use grammar::{validate_constraint_line, validate_constraints, validate_objective};
pub use lexer::{Lexer, Span, Token, TokenKind};
