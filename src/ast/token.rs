use crate::ast::Operator;
use crate::error::EvaluationError;
use log::debug;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "ast/expression.pest"]
struct ExpressionLexer;

/// Lexical unit of an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    LeftParen,
    RightParen,
    Identifier(String),
}

/// Strips whitespace and maps the keypad glyphs `×` and `÷` to `*` and `/`.
pub fn preprocess(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            other => other,
        })
        .collect()
}

/// Splits a preprocessed expression into tokens.
///
/// Input is expected to have gone through [`preprocess`]; any whitespace left
/// in it is reported as an unexpected character.
pub fn tokenize(input: &str) -> Result<Vec<Token>, EvaluationError> {
    let pairs = ExpressionLexer::parse(Rule::tokens, input).map_err(|e| {
        let column = match e.line_col {
            pest::error::LineColLocation::Pos((_, col)) => col,
            pest::error::LineColLocation::Span((_, col), _) => col,
        };
        EvaluationError::syntax(format!("unexpected character at column {}", column))
    })?;

    let mut tokens = Vec::new();
    for pair in pairs.flatten() {
        let token = match pair.as_rule() {
            Rule::number => {
                let text = pair.as_str();
                let value = text
                    .parse::<f64>()
                    .map_err(|_| EvaluationError::NumericParse(text.to_string()))?;
                Token::Number(value)
            }
            Rule::operator => Token::Operator(Operator::try_from(pair.as_str())?),
            Rule::lparen => Token::LeftParen,
            Rule::rparen => Token::RightParen,
            Rule::identifier => Token::Identifier(pair.as_str().to_string()),
            _ => continue,
        };
        tokens.push(token);
    }

    debug!("Tokenized {:?} into {:?}", input, tokens);
    Ok(tokens)
}
