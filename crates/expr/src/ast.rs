use std::fmt;

use crate::{EvalError, Function, function::power};

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Plus,
}

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    /// Floored remainder: the result takes the sign of the divisor.
    Rem,
    Pow,
}

/// A parsed expression tree over the single variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Const(f64),
    Var,
    Unary(UnaryOp, Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    Call(Function, Vec<Expr>),
}

impl UnaryOp {
    fn symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Plus => "+",
        }
    }

    fn apply(self, a: f64) -> f64 {
        match self {
            Self::Neg => -a,
            Self::Plus => a,
        }
    }
}

impl BinaryOp {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Pow => "^",
        }
    }

    fn apply(self, a: f64, b: f64) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Sub => Ok(a - b),
            Self::Mul => Ok(a * b),
            Self::Div | Self::Rem if b == 0.0 => Err(EvalError::DivisionByZero),
            Self::Div => Ok(a / b),
            Self::Rem => Ok(a - b * (a / b).floor()),
            Self::Pow => power(a, b),
        }
    }
}

impl Expr {
    /// Evaluates the tree at `x`.
    ///
    /// Every intermediate value must be finite; the first NaN or infinity is
    /// reported with the operation that produced it.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] on division by zero, a domain error, or a
    /// non-finite intermediate value.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        match self {
            Self::Const(c) => Ok(*c),
            Self::Var => Ok(x),
            Self::Unary(op, operand) => Ok(op.apply(operand.eval(x)?)),
            Self::Binary(op, lhs, rhs) => {
                let value = op.apply(lhs.eval(x)?, rhs.eval(x)?)?;
                finite(op.symbol(), value)
            }
            Self::Call(function, args) => {
                let values = args
                    .iter()
                    .map(|arg| arg.eval(x))
                    .collect::<Result<Vec<_>, _>>()?;
                finite(function.name(), function.apply(&values)?)
            }
        }
    }
}

fn finite(op: &'static str, value: f64) -> Result<f64, EvalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite { op, value })
    }
}

/// Fully parenthesized rendering, useful for checking how text was grouped.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Const(c) => write!(f, "{c}"),
            Self::Var => f.write_str("x"),
            Self::Unary(op, operand) => write!(f, "({}{operand})", op.symbol()),
            Self::Binary(op, lhs, rhs) => write!(f, "({lhs} {} {rhs})", op.symbol()),
            Self::Call(function, args) => {
                write!(f, "{function}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn boxed(e: Expr) -> Box<Expr> {
        Box::new(e)
    }

    #[test]
    fn evaluates_polynomial() {
        // x^2 - 4
        let expr = Expr::Binary(
            BinaryOp::Sub,
            boxed(Expr::Binary(
                BinaryOp::Pow,
                boxed(Expr::Var),
                boxed(Expr::Const(2.0)),
            )),
            boxed(Expr::Const(4.0)),
        );

        assert_relative_eq!(expr.eval(3.0).unwrap(), 5.0);
        assert_relative_eq!(expr.eval(-2.0).unwrap(), 0.0);
        assert_eq!(expr.to_string(), "((x ^ 2) - 4)");
    }

    #[test]
    fn division_by_zero_is_an_error() {
        let expr = Expr::Binary(BinaryOp::Div, boxed(Expr::Const(1.0)), boxed(Expr::Var));
        assert_eq!(expr.eval(0.0), Err(EvalError::DivisionByZero));
        assert_relative_eq!(expr.eval(4.0).unwrap(), 0.25);
    }

    #[test]
    fn remainder_is_floored() {
        let expr = Expr::Binary(BinaryOp::Rem, boxed(Expr::Var), boxed(Expr::Const(3.0)));
        assert_relative_eq!(expr.eval(-1.0).unwrap(), 2.0);
        assert_relative_eq!(expr.eval(7.0).unwrap(), 1.0);
    }

    #[test]
    fn overflow_is_reported() {
        let expr = Expr::Call(Function::Exp, vec![Expr::Var]);
        assert!(matches!(
            expr.eval(1000.0),
            Err(EvalError::NonFinite { op: "exp", .. })
        ));
    }
}
