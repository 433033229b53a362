use calcpad::session::format_result;
use calcpad::{evaluate, evaluate_batch, EvaluationError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_reference_results() {
    assert_eq!(evaluate("2+3*4"), Ok(14.0));
    assert_eq!(evaluate("2^3^2"), Ok(512.0));
    assert_eq!(evaluate("10-3-2"), Ok(5.0));
    assert_eq!(evaluate("(2+3)*4"), Ok(20.0));
    assert_eq!(evaluate(" 6 × 7 ÷ 2 "), Ok(21.0));
}

#[test]
fn test_reference_errors() {
    assert_eq!(evaluate("5/0"), Err(EvaluationError::DivisionByZero));
    assert!(matches!(
        evaluate("sqrt(-1)"),
        Err(EvaluationError::InvalidDomain { function: "sqrt", .. })
    ));
    assert!(matches!(
        evaluate("log(0)"),
        Err(EvaluationError::InvalidDomain { function: "log", .. })
    ));
    assert!(matches!(evaluate("2+"), Err(EvaluationError::Syntax(_))));
    assert!(matches!(evaluate("(1+2"), Err(EvaluationError::Syntax(_))));
    assert!(matches!(evaluate(""), Err(EvaluationError::Syntax(_))));
}

#[test]
fn test_result_text_evaluates_to_itself() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..2000 {
        let value: f64 = match rng.random_range(0..3) {
            0 => rng.random_range(-1e9..1e9),
            1 => rng.random_range(-1.0..1.0),
            _ => f64::from(rng.random_range(-1000..1000)),
        };

        assert_eq!(evaluate(&value.to_string()), Ok(value), "{}", value);
        assert_eq!(evaluate(&format_result(value)), Ok(value), "{}", value);
    }
}

#[test]
fn test_evaluated_results_round_trip() {
    for expression in ["1/3", "2^0.5", "sin(1)", "-ln(10)", "π*e", "1"] {
        let first = evaluate(expression).unwrap();
        assert_eq!(evaluate(&first.to_string()), Ok(first), "{}", expression);
    }
}

#[test]
fn test_batch_matches_sequential() {
    let expressions = ["1+1", "2^10", "(", "1/0", "sqrt(2)", "cos(π)", "4÷2×3"];
    let sequential: Vec<_> = expressions.iter().map(|e| evaluate(e)).collect();
    assert_eq!(evaluate_batch(&expressions), sequential);
}
