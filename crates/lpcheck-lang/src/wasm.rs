//! WASM bindings for lpcheck
//!
//! JavaScript-friendly wrappers so browser form handlers can validate
//! fields on input events without a round trip to the server.

use wasm_bindgen::prelude::*;

use crate::lexer::Lexer;

/// Validate an objective-function string
#[wasm_bindgen(js_name = validateObjective)]
pub fn validate_objective(source: &str) -> bool {
    crate::grammar::validate_objective(source)
}

/// Validate a newline-delimited constraint list
#[wasm_bindgen(js_name = validateConstraints)]
pub fn validate_constraints(source: &str) -> bool {
    crate::grammar::validate_constraints(source)
}

/// Validate a single constraint line
#[wasm_bindgen(js_name = validateConstraintLine)]
pub fn validate_constraint_line(source: &str) -> bool {
    crate::grammar::validate_constraint_line(source)
}

/// Tokenize source text and return tokens as JSON
#[wasm_bindgen]
pub fn tokenize(source: &str) -> Result<JsValue, JsValue> {
    let tokens: Vec<TokenInfo> = Lexer::tokenize(source)
        .into_iter()
        .map(|t| TokenInfo {
            kind: format!("{:?}", t.kind),
            text: t.text,
            start: t.span.start,
            end: t.span.end,
        })
        .collect();
    serde_wasm_bindgen::to_value(&tokens).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Token information for JavaScript
#[derive(serde::Serialize)]
struct TokenInfo {
    kind: String,
    text: String,
    start: usize,
    end: usize,
}
