use thiserror::Error;

/// Errors raised when text cannot be parsed into an expression.
///
/// Positions are byte offsets into the source text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("expression is empty")]
    Empty,

    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number '{text}' at position {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("unknown identifier '{name}' at position {pos} (the variable is `x`)")]
    UnknownIdentifier { name: String, pos: usize },

    #[error("unknown function '{name}' at position {pos}")]
    UnknownFunction { name: String, pos: usize },

    #[error("`{name}` takes {expected} argument(s), found {found} at position {pos}")]
    WrongArgCount {
        name: &'static str,
        expected: String,
        found: usize,
        pos: usize,
    },

    #[error("unbalanced parentheses at position {pos}")]
    UnbalancedParens { pos: usize },

    #[error("unexpected '{token}' at position {pos}")]
    UnexpectedToken { token: String, pos: usize },

    #[error("expression ends unexpectedly after position {pos}")]
    UnexpectedEnd { pos: usize },
}

/// Errors raised while evaluating an expression at a point.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EvalError {
    #[error("no expression has been set")]
    NoExpression,

    #[error("division by zero")]
    DivisionByZero,

    #[error("`{function}` is undefined for {arg}")]
    Domain { function: &'static str, arg: f64 },

    #[error("`{op}` produced a non-finite value ({value})")]
    NonFinite { op: &'static str, value: f64 },
}
