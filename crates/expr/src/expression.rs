use std::{fmt, str::FromStr};

use regula_core::Model;

use crate::{
    EvalError, Expr, ParseError,
    rpn::{from_rpn, to_rpn},
    token::tokenize,
};

/// An immutable, parsed formula in the variable `x`.
///
/// Once parsed, evaluating at a finite `x` either yields a finite value or an
/// [`EvalError`]; the same `x` always gives the same result.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    root: Expr,
}

impl Expression {
    /// Parses a formula.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first problem found.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let tokens = tokenize(text)?;
        let rpn = to_rpn(&tokens)?;
        let root = from_rpn(rpn)?;
        Ok(Self {
            source: text.trim().to_owned(),
            root,
        })
    }

    /// Returns the (trimmed) text the expression was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the parsed tree.
    #[must_use]
    pub fn root(&self) -> &Expr {
        &self.root
    }

    /// Evaluates the expression at `x`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] on division by zero, a domain error, or a
    /// non-finite intermediate value.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        self.root.eval(x)
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Model for Expression {
    type Input = f64;
    type Output = f64;
    type Error = EvalError;

    fn call(&self, x: &f64) -> Result<f64, EvalError> {
        self.eval(*x)
    }
}
