use calcpad::ast::ExpressionCache;
use calcpad::Config;

fn main() {
    pretty_env_logger::init();

    let expressions = vec![
        "2 + 3 * 4",
        "2 ^ 3 ^ 2",
        "(1 + 2) ÷ 0",
        "sqrt(-1)",
        "log(1000) + ln(e)",
        "sin(π / 2)",
        "3 +",
    ];

    for (expression, result) in expressions.iter().zip(calcpad::evaluate_batch(&expressions)) {
        match result {
            Ok(value) => println!("{:<20} = {}", expression, value),
            Err(err) => println!("{:<20} ! {}", expression, err),
        }
    }

    let mut cache = ExpressionCache::with_config(&Config::default());
    for _ in 0..3 {
        for expression in &expressions {
            let _ = cache.evaluate(expression);
        }
    }
    println!("Cached trees: {}", cache.len());
}
