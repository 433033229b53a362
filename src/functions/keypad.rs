use crate::error::EvaluationError;
use crate::functions::{Constant, Function};

/// Scientific keypad buttons that act on the number currently displayed.
///
/// Unlike [`Function`] inside an expression, the keypad trigonometry works
/// in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ScientificKey {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Sqrt,
    Square,
    Cube,
    Pi,
    E,
}

impl ScientificKey {
    pub fn apply(&self, display_value: f64) -> Result<f64, EvaluationError> {
        match self {
            ScientificKey::Sin => Function::Sin.apply(display_value.to_radians()),
            ScientificKey::Cos => Function::Cos.apply(display_value.to_radians()),
            ScientificKey::Tan => Function::Tan.apply(display_value.to_radians()),
            ScientificKey::Log => Function::Log.apply(display_value),
            ScientificKey::Ln => Function::Ln.apply(display_value),
            ScientificKey::Sqrt => Function::Sqrt.apply(display_value),
            ScientificKey::Square => Ok(display_value * display_value),
            ScientificKey::Cube => Ok(display_value.powi(3)),
            ScientificKey::Pi => Ok(Constant::Pi.value()),
            ScientificKey::E => Ok(Constant::E.value()),
        }
    }

    /// Whether the key ignores the displayed value.
    pub fn is_constant(&self) -> bool {
        matches!(self, ScientificKey::Pi | ScientificKey::E)
    }
}

impl TryFrom<&str> for ScientificKey {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "sin" => Ok(ScientificKey::Sin),
            "cos" => Ok(ScientificKey::Cos),
            "tan" => Ok(ScientificKey::Tan),
            "log" => Ok(ScientificKey::Log),
            "ln" => Ok(ScientificKey::Ln),
            "sqrt" | "√" => Ok(ScientificKey::Sqrt),
            "square" | "x²" => Ok(ScientificKey::Square),
            "cube" | "x³" => Ok(ScientificKey::Cube),
            "pi" | "π" => Ok(ScientificKey::Pi),
            "e" => Ok(ScientificKey::E),
            _ => Err(format!("Unknown scientific key: {}", value)),
        }
    }
}
