use crate::core::Calculator;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Debug, Clone, Parser)]
#[command(name = "small-calc")]
#[command(about = "Basic integer arithmetic from the command line")]
pub struct CliConfig {
    #[command(subcommand)]
    pub operation: Operation,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Print the result as a JSON object")]
    pub json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Operation {
    /// Add two integers
    Add {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    /// Divide a by b as a floating-point quotient (fails when b is 0)
    Divide {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    /// Square an integer
    Square {
        #[arg(allow_negative_numbers = true)]
        a: i64,
    },
    /// Square root of an integer (NaN for negative input)
    Sqrt {
        #[arg(allow_negative_numbers = true)]
        a: i64,
    },
    /// Logarithm of VALUE in base BASE
    Log {
        #[arg(allow_negative_numbers = true)]
        base: i64,
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
}

/// Outcome of an operation. Integer-valued operations stay integers so the
/// plain and JSON outputs match the operand types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Computed {
    Int(i64),
    Float(f64),
}

impl std::fmt::Display for Computed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Computed::Int(v) => write!(f, "{}", v),
            Computed::Float(v) => write!(f, "{}", v),
        }
    }
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add { .. } => "add",
            Operation::Divide { .. } => "divide",
            Operation::Square { .. } => "square",
            Operation::Sqrt { .. } => "sqrt",
            Operation::Log { .. } => "log",
        }
    }

    pub fn evaluate(&self, calc: &Calculator) -> Result<Computed> {
        tracing::debug!("Evaluating operation: {:?}", self);
        let computed = match *self {
            Operation::Add { a, b } => Computed::Int(calc.add(a, b)),
            Operation::Divide { a, b } => Computed::Float(calc.divide(a, b)?),
            Operation::Square { a } => Computed::Int(calc.square(a)),
            Operation::Sqrt { a } => Computed::Float(calc.square_root(a)),
            Operation::Log { base, value } => Computed::Float(calc.log(base, value)),
        };
        Ok(computed)
    }
}
