use crate::error::AssistantError;
use crate::types::Calculation;
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("valid number pattern"));

static OPERATOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"plus|minus|times|divided|\+|-|\*|/").expect("valid operator pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "plus" | "+" => Some(Operator::Add),
            "minus" | "-" => Some(Operator::Subtract),
            "times" | "*" => Some(Operator::Multiply),
            "divided" | "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }
}

/// Operands and operators pulled out of a command by two independent scans.
/// They are paired by index only, not by where they sit in the sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub operands: Vec<f64>,
    pub operators: Vec<Operator>,
}

impl Expression {
    pub fn extract(command: &str) -> Self {
        let operands = NUMBER_RE
            .find_iter(command)
            .filter_map(|m| m.as_str().parse::<f64>().ok())
            .collect();

        let operators = OPERATOR_RE
            .find_iter(command)
            .filter_map(|m| Operator::from_token(m.as_str()))
            .collect();

        Self {
            operands,
            operators,
        }
    }

    /// Fold left to right. Operators without a following operand and
    /// operands without a preceding operator are ignored.
    pub fn evaluate(&self) -> Result<Calculation, AssistantError> {
        if self.operands.len() < 2 {
            return Err(AssistantError::InputTooSparse);
        }

        let mut value = self.operands[0];
        let mut trace = format_number(value);

        for (op, &next) in self.operators.iter().zip(&self.operands[1..]) {
            match op {
                Operator::Add => value += next,
                Operator::Subtract => value -= next,
                Operator::Multiply => value *= next,
                Operator::Divide => {
                    if next == 0.0 {
                        return Err(AssistantError::DivisionByZero);
                    }
                    value /= next;
                }
            }
            trace.push_str(&format!(" {} {}", op.symbol(), format_number(next)));
        }

        trace.push_str(&format!(" = {}", format_number(value)));

        Ok(Calculation { value, trace })
    }
}

/// Render a number the way a person would say it: no trailing ".0", no
/// negative zero
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        format!("{}", value)
    }
}

/// Arithmetic evaluator with an append-only history of successful traces
#[derive(Debug, Default)]
pub struct Calculator {
    history: Vec<String>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evaluate(&mut self, command: &str) -> Result<Calculation, AssistantError> {
        let calculation = Expression::extract(command).evaluate()?;
        self.history.push(calculation.trace.clone());
        Ok(calculation)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}
