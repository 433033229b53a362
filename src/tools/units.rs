use crate::tools::format_trimmed;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Length,
    Mass,
    Temperature,
    Area,
    Volume,
    Data,
}

/// How a unit maps onto its category's base unit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Scale {
    /// Base value is `value * factor`.
    Factor(f64),
    Fahrenheit,
    Kelvin,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Unit {
    pub name: &'static str,
    pub symbol: &'static str,
    pub scale: Scale,
}

const fn unit(name: &'static str, symbol: &'static str, factor: f64) -> Unit {
    Unit {
        name,
        symbol,
        scale: Scale::Factor(factor),
    }
}

const LENGTH: &[Unit] = &[
    unit("Meter", "m", 1.0),
    unit("Kilometer", "km", 1000.0),
    unit("Centimeter", "cm", 0.01),
    unit("Millimeter", "mm", 0.001),
    unit("Mile", "mi", 1609.34),
    unit("Yard", "yd", 0.9144),
    unit("Foot", "ft", 0.3048),
    unit("Inch", "in", 0.0254),
];

const MASS: &[Unit] = &[
    unit("Kilogram", "kg", 1.0),
    unit("Gram", "g", 0.001),
    unit("Milligram", "mg", 0.000001),
    unit("Metric Ton", "t", 1000.0),
    unit("Pound", "lb", 0.453592),
    unit("Ounce", "oz", 0.0283495),
];

const TEMPERATURE: &[Unit] = &[
    unit("Celsius", "°C", 1.0),
    Unit {
        name: "Fahrenheit",
        symbol: "°F",
        scale: Scale::Fahrenheit,
    },
    Unit {
        name: "Kelvin",
        symbol: "K",
        scale: Scale::Kelvin,
    },
];

const AREA: &[Unit] = &[
    unit("Square Meter", "m²", 1.0),
    unit("Square Kilometer", "km²", 1_000_000.0),
    unit("Square Centimeter", "cm²", 0.0001),
    unit("Hectare", "ha", 10_000.0),
    unit("Acre", "ac", 4046.86),
    unit("Square Mile", "mi²", 2_589_988.0),
    unit("Square Foot", "ft²", 0.092903),
];

const VOLUME: &[Unit] = &[
    unit("Liter", "L", 1.0),
    unit("Milliliter", "mL", 0.001),
    unit("Cubic Meter", "m³", 1000.0),
    unit("Gallon (US)", "gal", 3.78541),
    unit("Quart (US)", "qt", 0.946353),
    unit("Pint (US)", "pt", 0.473176),
    unit("Cup (US)", "cup", 0.236588),
];

const DATA: &[Unit] = &[
    unit("Byte", "B", 1.0),
    unit("Kilobyte", "KB", 1024.0),
    unit("Megabyte", "MB", 1_048_576.0),
    unit("Gigabyte", "GB", 1_073_741_824.0),
    unit("Terabyte", "TB", 1_099_511_627_776.0),
];

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Length,
        Category::Mass,
        Category::Temperature,
        Category::Area,
        Category::Volume,
        Category::Data,
    ];

    /// Units of the category; the first one is the base unit.
    pub fn units(&self) -> &'static [Unit] {
        match self {
            Category::Length => LENGTH,
            Category::Mass => MASS,
            Category::Temperature => TEMPERATURE,
            Category::Area => AREA,
            Category::Volume => VOLUME,
            Category::Data => DATA,
        }
    }

    pub fn unit(&self, symbol: &str) -> Option<&'static Unit> {
        self.units().iter().find(|unit| unit.symbol == symbol)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Mass => "mass",
            Category::Temperature => "temperature",
            Category::Area => "area",
            Category::Volume => "volume",
            Category::Data => "data",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Unit {
    pub fn to_base(&self, value: f64) -> f64 {
        match self.scale {
            Scale::Factor(factor) => value * factor,
            Scale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            Scale::Kelvin => value - 273.15,
        }
    }

    pub fn from_base(&self, value: f64) -> f64 {
        match self.scale {
            Scale::Factor(factor) => value / factor,
            Scale::Fahrenheit => value * 9.0 / 5.0 + 32.0,
            Scale::Kelvin => value + 273.15,
        }
    }
}

/// Converts `value` between two units of `category` given by symbol.
pub fn convert(category: Category, from: &str, to: &str, value: f64) -> Option<f64> {
    let from = category.unit(from)?;
    let to = category.unit(to)?;
    Some(to.from_base(from.to_base(value)))
}

/// Six decimals, trailing zeros removed.
pub fn format_converted(value: f64) -> String {
    format_trimmed(value, 6)
}
