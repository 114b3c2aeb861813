use thiserror::Error;

/// Errors raised by the primitive value constructors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("Division by zero")]
    DivisionByZero,
}
