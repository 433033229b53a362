use thiserror::Error;

/// Classified failure of a single expression evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("{function}({argument}) is outside the function's domain")]
    InvalidDomain {
        function: &'static str,
        argument: f64,
    },

    #[error("invalid numeric literal '{0}'")]
    NumericParse(String),
}

impl EvaluationError {
    pub(crate) fn syntax(message: impl Into<String>) -> Self {
        EvaluationError::Syntax(message.into())
    }

    /// Short machine-friendly name of the error class.
    pub fn kind(&self) -> &'static str {
        match self {
            EvaluationError::Syntax(_) => "SyntaxError",
            EvaluationError::DivisionByZero => "DivisionByZero",
            EvaluationError::InvalidDomain { .. } => "InvalidDomain",
            EvaluationError::NumericParse(_) => "NumericParseError",
        }
    }
}
