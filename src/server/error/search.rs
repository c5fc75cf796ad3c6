use thiserror::Error;

use crate::server::search::{
    field::{FieldKind, Operator},
    policy::{MAX_PAGE, MAX_SIZE},
};

/// Client input errors raised while parsing or compiling a search request.
///
/// Every variant results in a 400 Bad Request with the error message as body.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Query key is neither reserved nor registered for the resource.
    #[error("Unknown search parameter '{0}'")]
    UnknownField(String),

    /// Operator prefix of a query key is not recognized.
    #[error("Unknown operator '{operator}' in parameter '{param}'")]
    UnknownOperator { param: String, operator: String },

    /// Filter parameter was given without a value.
    #[error("Parameter '{0}' requires a value")]
    EmptyValue(String),

    /// Value cannot be coerced to the field's type.
    #[error("Value '{value}' of parameter '{key}' is not a valid {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: FieldKind,
    },

    /// Operator is not allowed on the field (e.g. a range on an equality-only field).
    #[error("Operator '{operator}' is not supported for parameter '{key}'")]
    UnsupportedOperator { key: String, operator: Operator },

    /// Criterion value type does not match the field type.
    #[error("Parameter '{key}' expects a {expected} value, got {got}")]
    TypeMismatch {
        key: String,
        expected: FieldKind,
        got: &'static str,
    },

    /// Sort key is unknown or refers to a joined column.
    #[error("Cannot sort by '{0}'")]
    UnsortableField(String),

    #[error("Page '{0}' is incorrect, expected a non-negative integer up to {max}", max = MAX_PAGE)]
    InvalidPage(String),

    #[error("Size '{0}' is incorrect, expected a positive integer up to {max}", max = MAX_SIZE)]
    InvalidSize(String),

    #[error("Order '{0}' is incorrect, expected 'asc' or 'desc'")]
    InvalidOrder(String),

    #[error("Fold '{0}' is incorrect, expected 'true', 'false', 'on' or 'off'")]
    InvalidFold(String),

    /// Reserved parameter was given more than once.
    #[error("Parameter '{0}' must not be repeated")]
    DuplicateParameter(String),
}
