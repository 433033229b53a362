use crate::error::EvaluationError;
use std::fmt;

/// Unary functions callable as `name(argument)`.
///
/// Trigonometric functions take radians. The logarithms and `sqrt` check
/// their domain up front so that an out-of-range argument is reported as
/// [`EvaluationError::InvalidDomain`] instead of quietly becoming `NaN`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Sqrt,
}

impl Function {
    pub const ALL: [Function; 6] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Log,
        Function::Ln,
        Function::Sqrt,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Log => "log",
            Function::Ln => "ln",
            Function::Sqrt => "sqrt",
        }
    }

    /// Whether `x` lies inside the function's domain.
    pub fn accepts(&self, x: f64) -> bool {
        match self {
            Function::Log | Function::Ln => x > 0.0,
            Function::Sqrt => x >= 0.0,
            Function::Sin | Function::Cos | Function::Tan => true,
        }
    }

    pub fn apply(&self, x: f64) -> Result<f64, EvaluationError> {
        if !self.accepts(x) {
            return Err(EvaluationError::InvalidDomain {
                function: self.name(),
                argument: x,
            });
        }

        Ok(match self {
            Function::Sin => x.sin(),
            Function::Cos => x.cos(),
            Function::Tan => x.tan(),
            Function::Log => x.log10(),
            Function::Ln => x.ln(),
            Function::Sqrt => x.sqrt(),
        })
    }
}

impl TryFrom<&str> for Function {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "sin" => Ok(Function::Sin),
            "cos" => Ok(Function::Cos),
            "tan" => Ok(Function::Tan),
            "log" => Ok(Function::Log),
            "ln" => Ok(Function::Ln),
            "sqrt" => Ok(Function::Sqrt),
            _ => Err(format!("Unknown function: {}", value)),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_lookup_by_name() {
        for function in Function::ALL {
            assert_eq!(Function::try_from(function.name()), Ok(function));
        }
        assert!(Function::try_from("exp").is_err());
        assert!(Function::try_from("SIN").is_err());
    }

    #[test]
    fn test_trig_uses_radians() {
        assert!((Function::Sin.apply(PI / 2.0).unwrap() - 1.0).abs() < 1e-12);
        assert!((Function::Cos.apply(PI).unwrap() + 1.0).abs() < 1e-12);
        assert!(Function::Tan.apply(0.0).unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_logarithms() {
        assert_eq!(Function::Log.apply(1000.0).unwrap(), 3.0);
        assert!((Function::Ln.apply(std::f64::consts::E).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_domain_guards() {
        assert_eq!(
            Function::Log.apply(0.0),
            Err(EvaluationError::InvalidDomain {
                function: "log",
                argument: 0.0
            })
        );
        assert!(Function::Ln.apply(-2.0).is_err());
        assert!(Function::Sqrt.apply(-0.5).is_err());
        assert_eq!(Function::Sqrt.apply(0.0).unwrap(), 0.0);
        assert_eq!(Function::Sqrt.apply(16.0).unwrap(), 4.0);
    }

    #[test]
    fn test_nan_argument_is_rejected_by_guarded_functions() {
        assert!(Function::Sqrt.apply(f64::NAN).is_err());
        assert!(Function::Log.apply(f64::NAN).is_err());
        assert!(Function::Sin.apply(f64::NAN).unwrap().is_nan());
    }
}
