use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CalcError {
    #[error("Cannot divide by zero.")]
    DivisionByZero,
}

pub type CalcResult<T> = Result<T, CalcError>;
