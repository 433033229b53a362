pub mod ast;
pub mod config;
pub mod error;
pub mod functions;
pub mod session;
pub mod store;
pub mod tools;

use ast::Evaluator;
use rayon::prelude::*;

pub use config::Config;
pub use error::EvaluationError;
pub use session::{Calculator, SessionError};

/// Evaluates one arithmetic expression.
///
/// Accepts `+ - * / ^`, the keypad glyphs `×` and `÷`, parentheses, unary
/// minus, the constants `π` and `e`, and the functions `sin`, `cos`, `tan`,
/// `log`, `ln` and `sqrt`. Whitespace is ignored.
pub fn evaluate(expression: &str) -> Result<f64, EvaluationError> {
    Evaluator::new().evaluate_expression(expression)
}

/// Evaluates many independent expressions in parallel, preserving order.
pub fn evaluate_batch<S>(expressions: &[S]) -> Vec<Result<f64, EvaluationError>>
where
    S: AsRef<str> + Sync,
{
    expressions
        .par_iter()
        .map(|expression| evaluate(expression.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate() {
        assert_eq!(evaluate("2+3*4"), Ok(14.0));
        assert_eq!(evaluate("5/0"), Err(EvaluationError::DivisionByZero));
    }

    #[test]
    fn test_batch_preserves_order() {
        let expressions: Vec<String> = (0..500).map(|i| format!("{}*2", i)).collect();
        let results = evaluate_batch(&expressions);

        assert_eq!(results.len(), 500);
        for (i, result) in results.into_iter().enumerate() {
            assert_eq!(result, Ok(i as f64 * 2.0));
        }
    }

    #[test]
    fn test_batch_keeps_errors_in_place() {
        let results = evaluate_batch(&["1+1", "sqrt(-4)", "(", "9^0.5"]);
        assert_eq!(results[0], Ok(2.0));
        assert!(matches!(results[1], Err(EvaluationError::InvalidDomain { .. })));
        assert!(matches!(results[2], Err(EvaluationError::Syntax(_))));
        assert_eq!(results[3], Ok(3.0));
    }
}
