//! Headless model of the keypad calculator.
//!
//! [`Calculator`] owns everything the screen shows: the main display, the
//! equation line, the history list and the theme. Evaluation itself is
//! delegated to the stateless [`crate::evaluate`].

use crate::config::Config;
use crate::error::EvaluationError;
use crate::functions::ScientificKey;
use crate::store::{History, KeyValueStore, StoreError, Theme};
use log::{info, warn};
use thiserror::Error;

pub const ERROR_DISPLAY: &str = "Error";

const OPERATOR_KEYS: [&str; 5] = ["+", "-", "×", "÷", "^"];

const DIGIT_KEYS: [&str; 13] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "(", ")",
];

/// Why a keypad action ended on the `Error` display.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    /// The value is infinite or NaN and cannot be typed back in.
    #[error("result {0} is out of range")]
    NotFinite(f64),
}

#[derive(Debug, Clone)]
pub struct Calculator {
    display: String,
    equation: String,
    is_result: bool,
    history: History,
    theme: Theme,
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            display: "0".to_string(),
            equation: String::new(),
            is_result: false,
            history: History::new(config.history_limit),
            theme: Theme::default(),
        }
    }

    /// Builds a calculator from saved preferences. A history entry that can
    /// no longer be decoded is dropped rather than failing the session.
    pub fn restore(store: &impl KeyValueStore, config: &Config) -> Self {
        let mut calculator = Self::with_config(config);
        calculator.theme = Theme::load(store);
        match History::load(store, config.history_limit) {
            Ok(history) => calculator.history = history,
            Err(e) => warn!("Discarding unreadable history: {}", e),
        }
        calculator
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StoreError> {
        self.theme.save(store)?;
        self.history.save(store)
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn equation(&self) -> &str {
        &self.equation
    }

    pub fn is_result(&self) -> bool {
        self.is_result
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Digits, the decimal point and parentheses. Any other label is ignored.
    pub fn press_digit(&mut self, digit: &str) {
        if !DIGIT_KEYS.contains(&digit) {
            return;
        }
        if self.display == ERROR_DISPLAY || self.is_result {
            let start = if digit == "." { "0." } else { digit };
            self.display = start.to_string();
            self.equation = start.to_string();
            self.is_result = false;
        } else if self.display == "0" {
            if digit == "." {
                if !self.equation.ends_with('0') {
                    self.equation.push('0');
                }
                self.display = "0.".to_string();
                self.equation.push('.');
            } else {
                // The placeholder zero is replaced, not extended.
                if self.equation.ends_with('0') {
                    self.equation.pop();
                }
                self.display = digit.to_string();
                self.equation.push_str(digit);
            }
        } else {
            self.display.push_str(digit);
            self.equation.push_str(digit);
        }
    }

    /// One of `+ - × ÷ ^`. Any other label is ignored.
    pub fn press_operator(&mut self, operator: &str) {
        if self.display == ERROR_DISPLAY || !OPERATOR_KEYS.contains(&operator) {
            return;
        }
        if self.equation.is_empty() {
            self.equation = self.display.clone();
        }
        self.equation.push_str(&format!(" {} ", operator));
        self.display = "0".to_string();
        self.is_result = false;
    }

    /// Dispatches a keypad label the way the button grid does. Labels that
    /// are not on the keypad leave the state untouched.
    pub fn press(&mut self, key: &str) -> Option<Result<f64, SessionError>> {
        match key {
            "=" => return self.equals(),
            "C" => self.clear(),
            "⌫" => self.delete(),
            op if OPERATOR_KEYS.contains(&op) => self.press_operator(op),
            other => match ScientificKey::try_from(other) {
                Ok(scientific) => return Some(self.apply_scientific(scientific)),
                Err(_) => self.press_digit(other),
            },
        }
        None
    }

    pub fn clear(&mut self) {
        self.display = "0".to_string();
        self.equation.clear();
        self.is_result = false;
    }

    /// Removes the last character of the operand being typed.
    pub fn delete(&mut self) {
        if self.display == ERROR_DISPLAY {
            self.clear();
            return;
        }
        if self.display == "0" {
            return;
        }

        self.display.pop();
        self.equation.pop();
        if self.display.is_empty() {
            self.display = "0".to_string();
        }
    }

    /// Evaluates the pending equation.
    ///
    /// Returns `None` when there is nothing to evaluate: a blank equation or
    /// one still waiting for the right operand of an operator.
    pub fn equals(&mut self) -> Option<Result<f64, SessionError>> {
        if self.equation.trim().is_empty() || self.awaiting_operand() {
            return None;
        }

        match crate::evaluate(&self.equation) {
            Ok(value) if !value.is_finite() => {
                warn!("{:?} evaluated to {}", self.equation, value);
                self.show_error();
                Some(Err(SessionError::NotFinite(value)))
            }
            Ok(value) => {
                let formatted = format_result(value);
                self.history.push(&self.equation, &formatted);
                info!("{} = {}", self.equation.trim(), formatted);
                self.display = formatted.clone();
                self.equation = formatted;
                self.is_result = true;
                Some(Ok(value))
            }
            Err(e) => {
                warn!("Calculation error for {:?}: {}", self.equation, e);
                self.show_error();
                Some(Err(e.into()))
            }
        }
    }

    /// Applies a scientific key to the displayed number.
    pub fn apply_scientific(&mut self, key: ScientificKey) -> Result<f64, SessionError> {
        let input = if key.is_constant() {
            0.0
        } else {
            match self.display.parse::<f64>() {
                Ok(value) => value,
                Err(_) => {
                    let rejected = self.display.clone();
                    self.show_error();
                    return Err(EvaluationError::NumericParse(rejected).into());
                }
            }
        };

        match key.apply(input) {
            Ok(value) if !value.is_finite() => {
                self.show_error();
                Err(SessionError::NotFinite(value))
            }
            Ok(value) => {
                let formatted = format_result(value);
                self.display = formatted.clone();
                self.equation = formatted;
                self.is_result = true;
                Ok(value)
            }
            Err(e) => {
                self.show_error();
                Err(e.into())
            }
        }
    }

    /// Loads the result of a history entry into the display.
    pub fn recall(&mut self, index: usize) -> bool {
        match self.history.result_at(index).map(str::to_string) {
            Some(result) => {
                self.display = result.clone();
                self.equation = result;
                self.is_result = true;
                true
            }
            None => false,
        }
    }

    fn awaiting_operand(&self) -> bool {
        let trimmed = self.equation.trim_end();
        trimmed.len() < self.equation.len()
            && OPERATOR_KEYS.iter().any(|op| trimmed.ends_with(op))
    }

    fn show_error(&mut self) {
        self.display = ERROR_DISPLAY.to_string();
        self.equation.clear();
        self.is_result = false;
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a result the way the display shows it: the shortest decimal that
/// reads back as the same `f64`.
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        // Avoid showing "-0".
        return "0".to_string();
    }
    value.to_string()
}
