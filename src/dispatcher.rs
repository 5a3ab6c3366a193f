use std::cmp::Ordering;

use log::debug;

use crate::prelude::*;

#[derive(Debug)]
pub struct Dispatcher {
    current: Fraction,
}

#[derive(Debug, PartialEq, Eq)]
pub enum DispatchResult {
    Success(Option<String>),
    Failure(String),
}

impl Dispatcher {
    pub fn new() -> Self {
        Dispatcher {
            current: Fraction::ZERO,
        }
    }

    pub fn current(&self) -> Fraction {
        self.current
    }

    pub fn dispatch(&mut self, input: &str) -> DispatchResult {
        debug!("dispatching {:?} on {}", input, self.current);

        let tokens: Vec<&str> = input.split_whitespace().collect();

        match self.execute(&tokens) {
            Ok(message) => DispatchResult::Success(message),
            Err(message) => DispatchResult::Failure(message),
        }
    }

    // The current value is only replaced once the new one is known to be valid.
    fn execute(&mut self, tokens: &[&str]) -> Result<Option<String>, String> {
        match tokens {
            [] => Ok(None),
            ["++"] => self.replace(self.current.try_add(1i64)),
            ["--"] => self.replace(self.current.try_sub(1i64)),
            ["reset"] => self.replace(Ok(Fraction::ZERO)),
            ["float"] => Ok(Some(self.current.to_float().to_string())),
            ["int"] => Ok(Some(self.current.to_integer().to_string())),
            ["cmp", operand @ ..] => {
                let rhs = parse_operand(operand)?;
                let symbol = match self.current.cmp(&rhs) {
                    Ordering::Less => "<",
                    Ordering::Equal => "=",
                    Ordering::Greater => ">",
                };

                Ok(Some(format!("{} {} {}", self.current, symbol, rhs)))
            }
            [op @ ("+" | "-" | "*" | "/"), operand @ ..] => {
                let rhs = parse_operand(operand)?;
                let result = match *op {
                    "+" => self.current.try_add(rhs),
                    "-" => self.current.try_sub(rhs),
                    "*" => self.current.try_mul(rhs),
                    _ => self.current.try_div(rhs),
                };

                self.replace(result)
            }
            [numerator, denominator] if is_integer(numerator) && is_integer(denominator) => {
                let value = read_fraction(&tokens.join(" ")).map_err(|e| e.to_string())?;

                self.replace(Ok(value))
            }
            _ => Err(format!("unknown command `{}`", tokens.join(" "))),
        }
    }

    fn replace(&mut self, value: Result<Fraction, FractionError>) -> Result<Option<String>, String> {
        self.current = value.map_err(|e| e.to_string())?;

        Ok(Some(self.current.to_string()))
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

// Shape check only, so an out-of-range value still reports why it failed.
fn is_integer(token: &str) -> bool {
    let digits = token.strip_prefix(['-', '+']).unwrap_or(token);

    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

// `<n>`, `<n> <d>` or a decimal such as `0.25`
fn parse_operand(tokens: &[&str]) -> Result<Fraction, String> {
    match tokens {
        [value] => match value.parse::<i64>() {
            Ok(n) => Ok(Fraction::from(n)),
            Err(_) => {
                let x = value
                    .parse::<f64>()
                    .map_err(|_| format!("invalid operand `{}`", value))?;

                Fraction::approximate(x).map_err(|e| e.to_string())
            }
        },
        [_, _] => read_fraction(&tokens.join(" ")).map_err(|e| e.to_string()),
        _ => Err("expected an operand: `<n>`, `<n> <d>` or a decimal".to_string()),
    }
}
