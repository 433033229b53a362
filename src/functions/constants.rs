use std::f64::consts;

/// Named constants usable wherever a number literal is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub const fn symbol(&self) -> &'static str {
        match self {
            Constant::Pi => "π",
            Constant::E => "e",
        }
    }

    pub const fn value(&self) -> f64 {
        match self {
            Constant::Pi => consts::PI,
            Constant::E => consts::E,
        }
    }
}

impl TryFrom<&str> for Constant {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "π" => Ok(Constant::Pi),
            "e" => Ok(Constant::E),
            _ => Err(format!("Unknown constant: {}", value)),
        }
    }
}
