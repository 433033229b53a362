use calcpad::ast::Parser;
use std::env;

fn main() {
    pretty_env_logger::init();

    let expression = env::args()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ");
    let expression = if expression.is_empty() {
        "2 × (3 + 4) ÷ 7 + sqrt(16)".to_string()
    } else {
        expression
    };

    match Parser::parse_expression(&expression) {
        Ok(ast) => println!("Parsed: {}", ast),
        Err(err) => println!("Error: {}", err),
    }

    match calcpad::evaluate(&expression) {
        Ok(result) => println!("Result: {}", calcpad::session::format_result(result)),
        Err(err) => println!("{}: {}", err.kind(), err),
    }
}
