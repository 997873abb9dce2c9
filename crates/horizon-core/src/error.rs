use thiserror::Error;

#[derive(Debug, Error)]
pub enum HorizonError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid constant: {name} — {reason}")]
    InvalidConstant { name: String, reason: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Arithmetic overflow in {context}")]
    Overflow { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl HorizonError {
    pub(crate) fn invalid_input(field: &str, reason: impl Into<String>) -> Self {
        HorizonError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(context: &str) -> Self {
        HorizonError::Overflow {
            context: context.into(),
        }
    }

    pub(crate) fn invalid_constant(name: &str, reason: impl Into<String>) -> Self {
        HorizonError::InvalidConstant {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for HorizonError {
    fn from(e: serde_json::Error) -> Self {
        HorizonError::SerializationError(e.to_string())
    }
}
