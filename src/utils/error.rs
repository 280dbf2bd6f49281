use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Division by zero: cannot divide {numerator} by zero")]
    DivisionByZero { numerator: i64 },
}

pub type Result<T> = std::result::Result<T, CalcError>;
