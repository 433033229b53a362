use crate::error::EvaluationError;
use crate::functions::{Constant, Function};
use std::fmt;

mod cache;
mod evaluator;
mod parser;
mod token;

pub use cache::ExpressionCache;
pub use evaluator::Evaluator;
pub use parser::ExpressionParser as Parser;
pub use token::{preprocess, tokenize, Token};

#[derive(Debug, Clone, PartialEq)]
pub enum ASTNode {
    Number(f64),
    Constant(Constant),
    Negate(Box<ASTNode>),
    BinaryOperation {
        left: Box<ASTNode>,
        operator: Operator,
        right: Box<ASTNode>,
    },
    FunctionCall {
        function: Function,
        argument: Box<ASTNode>,
    },
    Group(Box<ASTNode>),
}

impl ASTNode {
    pub(crate) fn binary(left: ASTNode, operator: Operator, right: ASTNode) -> Self {
        ASTNode::BinaryOperation {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    /// Splits a left-nested chain of binary operations into its leftmost
    /// operand and the `(operator, right operand)` pairs applied to it, in
    /// application order. Any other node is returned with no pairs.
    ///
    /// Flat chains like `1+2+3+...` nest only along their left edge, so
    /// walking that edge in a loop keeps recursion bounded by real nesting.
    pub fn left_spine(&self) -> (&ASTNode, Vec<(Operator, &ASTNode)>) {
        let mut pending = Vec::new();
        let mut node = self;
        while let ASTNode::BinaryOperation {
            left,
            operator,
            right,
        } = node
        {
            pending.push((*operator, right.as_ref()));
            node = left;
        }
        pending.reverse();
        (node, pending)
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            ASTNode::Number(_) | ASTNode::Constant(_) => 1,
            ASTNode::Negate(inner) | ASTNode::Group(inner) => 1 + inner.size(),
            ASTNode::FunctionCall { argument, .. } => 1 + argument.size(),
            ASTNode::BinaryOperation { .. } => {
                let (first, rest) = self.left_spine();
                rest.iter()
                    .fold(first.size(), |total, (_, right)| total + 1 + right.size())
            }
        }
    }

    fn take_children(&mut self, out: &mut Vec<ASTNode>) {
        match self {
            ASTNode::Number(_) | ASTNode::Constant(_) => {}
            ASTNode::Negate(inner) | ASTNode::Group(inner) => detach(inner, out),
            ASTNode::FunctionCall { argument, .. } => detach(argument, out),
            ASTNode::BinaryOperation { left, right, .. } => {
                detach(left, out);
                detach(right, out);
            }
        }
    }
}

/// Moves a non-leaf child out into `out`, leaving a leaf in its place.
fn detach(child: &mut ASTNode, out: &mut Vec<ASTNode>) {
    if !matches!(child, ASTNode::Number(_) | ASTNode::Constant(_)) {
        out.push(std::mem::replace(child, ASTNode::Number(0.0)));
    }
}

impl Drop for ASTNode {
    // Iterative, so dropping a long chain does not recurse once per node.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.take_children(&mut pending);
        }
    }
}

impl fmt::Display for ASTNode {
    /// Renders the tree fully parenthesized, which makes grouping visible.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ASTNode::Number(n) => write!(f, "{}", n),
            ASTNode::Constant(c) => f.write_str(c.symbol()),
            ASTNode::Negate(inner) => write!(f, "(-{})", inner),
            ASTNode::BinaryOperation { .. } => {
                let (first, rest) = self.left_spine();
                for _ in 0..rest.len() {
                    f.write_str("(")?;
                }
                write!(f, "{}", first)?;
                for (operator, right) in rest {
                    write!(f, " {} {})", operator, right)?;
                }
                Ok(())
            }
            ASTNode::FunctionCall { function, argument } => {
                write!(f, "{}({})", function, argument)
            }
            ASTNode::Group(inner) => write!(f, "{}", inner),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub const fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
        }
    }

    /// Binding strength; higher binds tighter.
    pub const fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
            Operator::Power => 3,
        }
    }

    pub const fn associativity(&self) -> Associativity {
        match self {
            Operator::Power => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    pub fn apply(&self, left: f64, right: f64) -> Result<f64, EvaluationError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide => {
                if right == 0.0 {
                    Err(EvaluationError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
            Operator::Power => Ok(left.powf(right)),
        }
    }
}

impl TryFrom<&str> for Operator {
    type Error = EvaluationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" | "×" => Ok(Operator::Multiply),
            "/" | "÷" => Ok(Operator::Divide),
            "^" => Ok(Operator::Power),
            _ => Err(EvaluationError::syntax(format!(
                "unknown operator '{}'",
                value
            ))),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_table() {
        assert!(Operator::Power.precedence() > Operator::Multiply.precedence());
        assert_eq!(Operator::Multiply.precedence(), Operator::Divide.precedence());
        assert!(Operator::Divide.precedence() > Operator::Add.precedence());
        assert_eq!(Operator::Add.precedence(), Operator::Subtract.precedence());
        assert_eq!(Operator::Power.associativity(), Associativity::Right);
        assert_eq!(Operator::Subtract.associativity(), Associativity::Left);
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), Ok(-1.0));
        assert_eq!(Operator::Multiply.apply(2.0, 3.0), Ok(6.0));
        assert_eq!(Operator::Divide.apply(3.0, 2.0), Ok(1.5));
        assert_eq!(Operator::Power.apply(2.0, 10.0), Ok(1024.0));
        assert_eq!(
            Operator::Divide.apply(1.0, 0.0),
            Err(EvaluationError::DivisionByZero)
        );
        assert_eq!(
            Operator::Divide.apply(1.0, -0.0),
            Err(EvaluationError::DivisionByZero)
        );
    }

    #[test]
    fn test_power_propagates_ieee_results() {
        assert!(Operator::Power.apply(-8.0, 1.0 / 3.0).unwrap().is_nan());
        assert_eq!(Operator::Power.apply(0.0, -1.0), Ok(f64::INFINITY));
    }

    #[test]
    fn test_operator_from_symbol() {
        assert_eq!(Operator::try_from("×"), Ok(Operator::Multiply));
        assert_eq!(Operator::try_from("÷"), Ok(Operator::Divide));
        assert!(Operator::try_from("%").is_err());
    }

    #[test]
    fn test_display_is_fully_parenthesized() {
        let ast = ASTNode::binary(
            ASTNode::Number(2.0),
            Operator::Power,
            ASTNode::binary(ASTNode::Number(3.0), Operator::Power, ASTNode::Number(2.0)),
        );
        assert_eq!(ast.to_string(), "(2 ^ (3 ^ 2))");
        assert_eq!(ast.size(), 5);
    }

    #[test]
    fn test_left_spine() {
        let ast = ASTNode::binary(
            ASTNode::binary(ASTNode::Number(1.0), Operator::Subtract, ASTNode::Number(2.0)),
            Operator::Add,
            ASTNode::Number(3.0),
        );
        let (first, rest) = ast.left_spine();
        assert_eq!(first, &ASTNode::Number(1.0));
        assert_eq!(
            rest,
            vec![
                (Operator::Subtract, &ASTNode::Number(2.0)),
                (Operator::Add, &ASTNode::Number(3.0)),
            ]
        );
        assert_eq!(ast.to_string(), "((1 - 2) + 3)");
        assert_eq!(ast.size(), 5);
    }

    #[test]
    fn test_long_chain_display_and_drop() {
        let mut ast = ASTNode::Number(0.0);
        for i in 1..=100_000 {
            ast = ASTNode::binary(ast, Operator::Add, ASTNode::Number(i as f64));
        }
        assert_eq!(ast.size(), 200_001);
        let rendered = ast.to_string();
        assert!(rendered.starts_with("((((0 + 1) + 2)"));
        assert!(rendered.ends_with(" + 100000)"));
        drop(ast);
    }
}
