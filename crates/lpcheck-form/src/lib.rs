pub mod examples;
pub mod feedback;
pub mod store;

pub use examples::{pick_example, random_example, Example, EXAMPLES};
pub use feedback::{
    check_constraints_field, check_form, check_objective_field, FormReport, ValidationResult,
    CONSTRAINTS_FIELD, CONSTRAINT_FORMAT_HINT, OBJECTIVE_FIELD, OBJECTIVE_FORMAT_HINT,
};
pub use store::{
    dark_mode_enabled, set_dark_mode, stash_example, take_stashed_example, KeyValueStore,
    MemoryStore, StoreError, DARK_MODE_KEY, EXAMPLE_CONSTRAINTS_KEY, EXAMPLE_OBJECTIVE_KEY,
};
