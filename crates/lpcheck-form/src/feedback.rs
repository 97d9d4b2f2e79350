//! Per-field validation feedback for the input form.

use lpcheck_lang::{validate_constraints, validate_objective};

pub const OBJECTIVE_FIELD: &str = "objective";
pub const CONSTRAINTS_FIELD: &str = "constraints";

/// Hint shown under the objective field when it fails to validate
pub const OBJECTIVE_FORMAT_HINT: &str = "Expected format: \"maximizar z = 3x + 2y\"";
/// Hint shown under the constraints field when any line fails
pub const CONSTRAINT_FORMAT_HINT: &str = "Expected format: \"x + 2y <= 8\"";

/// Outcome of checking one form field
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub field: String,
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    fn ok(field: &str) -> Self {
        Self {
            field: field.to_string(),
            valid: true,
            message: None,
        }
    }

    fn invalid(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            valid: false,
            message: Some(message.to_string()),
        }
    }
}

/// Check the objective field, attaching the format hint on failure
pub fn check_objective_field(text: &str) -> ValidationResult {
    if validate_objective(text) {
        ValidationResult::ok(OBJECTIVE_FIELD)
    } else {
        ValidationResult::invalid(OBJECTIVE_FIELD, OBJECTIVE_FORMAT_HINT)
    }
}

/// Check the constraints field, attaching the format hint on failure
pub fn check_constraints_field(text: &str) -> ValidationResult {
    if validate_constraints(text) {
        ValidationResult::ok(CONSTRAINTS_FIELD)
    } else {
        ValidationResult::invalid(CONSTRAINTS_FIELD, CONSTRAINT_FORMAT_HINT)
    }
}

/// Aggregated report over both form fields
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormReport {
    pub results: Vec<ValidationResult>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|r| r.valid)
    }

    /// Results for fields that failed, in form order
    pub fn failures(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(|r| !r.valid)
    }
}

/// Check both fields the way a form submit handler would
pub fn check_form(objective: &str, constraints: &str) -> FormReport {
    FormReport {
        results: vec![
            check_objective_field(objective),
            check_constraints_field(constraints),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_fields_carry_no_message() {
        let result = check_objective_field("maximizar z = 3x + 2y");
        assert!(result.valid);
        assert_eq!(result.field, OBJECTIVE_FIELD);
        assert_eq!(result.message, None);
    }

    #[test]
    fn test_invalid_objective_gets_hint() {
        let result = check_objective_field("max z = 3x");
        assert!(!result.valid);
        assert_eq!(result.message.as_deref(), Some(OBJECTIVE_FORMAT_HINT));
    }

    #[test]
    fn test_invalid_constraints_get_hint() {
        let result = check_constraints_field("x + y");
        assert!(!result.valid);
        assert_eq!(result.message.as_deref(), Some(CONSTRAINT_FORMAT_HINT));
    }

    #[test]
    fn test_form_report() {
        let report = check_form(
            "maximizar z = 3x + 2y",
            "x + 2y <= 8\n2x + y <= 10\nx >= 0\ny >= 0",
        );
        assert!(report.is_valid());
        assert_eq!(report.results.len(), 2);

        let report = check_form("nope", "x >= 0");
        assert!(!report.is_valid());
        let failed: Vec<_> = report.failures().map(|r| r.field.as_str()).collect();
        assert_eq!(failed, vec![OBJECTIVE_FIELD]);
    }

    #[test]
    fn test_empty_form_fails_both_fields() {
        let report = check_form("", "");
        assert!(!report.is_valid());
        assert_eq!(report.failures().count(), 2);
    }
}
