use crate::ast::{preprocess, tokenize, ASTNode, Associativity, Operator, Token};
use crate::error::EvaluationError;
use crate::functions::{Constant, Function};
use log::debug;

/// Groups, function arguments and exponent towers nested deeper than this
/// are rejected, keeping recursion well inside the default thread stack.
/// Flat operator chains of any length are unaffected.
pub const MAX_NESTING_DEPTH: usize = 512;

/// Recursive-descent parser over a token slice.
///
/// Binary operators are handled by precedence climbing driven by
/// [`Operator::precedence`] and [`Operator::associativity`]. Unary minus
/// binds tighter than every binary operator, so `-2^2` is `(-2)^2`.
pub struct ExpressionParser<'a> {
    tokens: &'a [Token],
    position: usize,
    depth: usize,
}

impl<'a> ExpressionParser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    /// Preprocesses, tokenizes and parses a raw expression.
    pub fn parse_expression(input: &str) -> Result<ASTNode, EvaluationError> {
        debug!("Parsing expression: {}", input);
        let tokens = tokenize(&preprocess(input))?;
        let ast = ExpressionParser::new(&tokens).parse()?;
        debug!("Parse result: {}", ast);
        Ok(ast)
    }

    /// Parses the whole token slice into a single expression tree.
    pub fn parse(mut self) -> Result<ASTNode, EvaluationError> {
        if self.tokens.is_empty() {
            return Err(EvaluationError::syntax("empty expression"));
        }

        let node = self.parse_binary(1)?;

        match self.peek() {
            None => Ok(node),
            Some(Token::RightParen) => Err(EvaluationError::syntax(format!(
                "unmatched ')' at token {}",
                self.position + 1
            ))),
            Some(token) => Err(EvaluationError::syntax(format!(
                "unexpected {} at token {}",
                describe(token),
                self.position + 1
            ))),
        }
    }

    fn parse_binary(&mut self, min_precedence: u8) -> Result<ASTNode, EvaluationError> {
        let mut node = self.parse_unary()?;

        while let Some(&Token::Operator(operator)) = self.peek() {
            let precedence = operator.precedence();
            if precedence < min_precedence {
                break;
            }
            self.position += 1;

            // Left-associative chains are folded by this loop; only a
            // right-associative operand recurses into a deeper tree.
            let right = match operator.associativity() {
                Associativity::Left => self.parse_binary(precedence + 1)?,
                Associativity::Right => {
                    self.enter()?;
                    let right = self.parse_binary(precedence)?;
                    self.leave();
                    right
                }
            };

            node = ASTNode::binary(node, operator, right);
        }

        Ok(node)
    }

    fn parse_unary(&mut self) -> Result<ASTNode, EvaluationError> {
        let mut negations = 0usize;
        while let Some(Token::Operator(Operator::Subtract)) = self.peek() {
            negations += 1;
            self.position += 1;
        }

        let operand = self.parse_primary()?;
        if negations % 2 == 1 {
            Ok(ASTNode::Negate(Box::new(operand)))
        } else {
            Ok(operand)
        }
    }

    fn parse_primary(&mut self) -> Result<ASTNode, EvaluationError> {
        let token = self
            .next()
            .ok_or_else(|| EvaluationError::syntax("unexpected end of expression"))?;

        match token {
            Token::Number(value) => Ok(ASTNode::Number(*value)),
            Token::LeftParen => {
                let inner = self.parse_parenthesized()?;
                Ok(ASTNode::Group(Box::new(inner)))
            }
            Token::Identifier(name) => {
                if let Ok(function) = Function::try_from(name.as_str()) {
                    if self.peek() != Some(&Token::LeftParen) {
                        return Err(EvaluationError::syntax(format!(
                            "function '{}' must be followed by a parenthesized argument",
                            name
                        )));
                    }
                    self.position += 1;
                    let argument = self.parse_parenthesized()?;
                    Ok(ASTNode::FunctionCall {
                        function,
                        argument: Box::new(argument),
                    })
                } else if let Ok(constant) = Constant::try_from(name.as_str()) {
                    Ok(ASTNode::Constant(constant))
                } else {
                    Err(EvaluationError::syntax(format!(
                        "unknown identifier '{}'",
                        name
                    )))
                }
            }
            Token::RightParen => Err(EvaluationError::syntax(format!(
                "unmatched ')' at token {}",
                self.position
            ))),
            Token::Operator(operator) => Err(EvaluationError::syntax(format!(
                "operator '{}' is missing its left operand",
                operator
            ))),
        }
    }

    /// Parses the body of a group whose '(' was already consumed, including
    /// the closing ')'.
    fn parse_parenthesized(&mut self) -> Result<ASTNode, EvaluationError> {
        self.enter()?;
        let inner = self.parse_binary(1)?;
        self.leave();

        match self.next() {
            Some(Token::RightParen) => Ok(inner),
            Some(token) => Err(EvaluationError::syntax(format!(
                "expected ')' but found {}",
                describe(token)
            ))),
            None => Err(EvaluationError::syntax("unmatched '('")),
        }
    }

    fn enter(&mut self) -> Result<(), EvaluationError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(EvaluationError::syntax(format!(
                "expression nested deeper than {} levels",
                MAX_NESTING_DEPTH
            )));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.position);
        if token.is_some() {
            self.position += 1;
        }
        token
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Number(n) => format!("number {}", n),
        Token::Operator(op) => format!("operator '{}'", op),
        Token::LeftParen => "'('".to_string(),
        Token::RightParen => "')'".to_string(),
        Token::Identifier(name) => format!("identifier '{}'", name),
    }
}
