use crate::ast::{ASTNode, Parser};
use crate::error::EvaluationError;

/// Walks an [`ASTNode`] tree and computes its value.
///
/// The evaluator holds no state; every call is a pure function of the tree
/// and the fixed operator, function and constant tables, so one value can be
/// shared freely between threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Parse an expression string into an AST.
    pub fn parse_expression(&self, expression: &str) -> Result<ASTNode, EvaluationError> {
        Parser::parse_expression(expression)
    }

    /// Evaluates a given expression string.
    ///
    /// # Arguments
    ///
    /// * `expression` - The raw expression as typed, keypad glyphs and spaces included.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` if parsing and evaluation succeed.
    /// * `Err(EvaluationError)` classifying why they did not.
    pub fn evaluate_expression(&self, expression: &str) -> Result<f64, EvaluationError> {
        let ast = self.parse_expression(expression)?;
        self.evaluate(&ast)
    }

    /// Evaluates an already parsed tree.
    pub fn evaluate(&self, ast: &ASTNode) -> Result<f64, EvaluationError> {
        match ast {
            ASTNode::Number(n) => Ok(*n),

            ASTNode::Constant(constant) => Ok(constant.value()),

            ASTNode::Negate(inner) => Ok(-self.evaluate(inner)?),

            ASTNode::BinaryOperation { .. } => {
                let (first, rest) = ast.left_spine();
                let mut value = self.evaluate(first)?;
                for (operator, right) in rest {
                    value = operator.apply(value, self.evaluate(right)?)?;
                }
                Ok(value)
            }

            ASTNode::FunctionCall { function, argument } => {
                let value = self.evaluate(argument)?;
                function.apply(value)
            }

            ASTNode::Group(inner) => self.evaluate(inner),
        }
    }
}
