use std::fmt;

use crate::EvalError;

/// Named functions callable from an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    Sqrt,
    Cbrt,
    Exp,
    Ln,
    /// Natural logarithm, or `log(x, base)` with two arguments.
    Log,
    Log10,
    Log2,
    Abs,
    Sign,
    Floor,
    Ceil,
    Round,
    Trunc,
    Atan2,
    Pow,
    Hypot,
    Min,
    Max,
}

/// The number of arguments a [`Function`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    Between(usize, usize),
    AtLeast(usize),
}

impl Arity {
    /// Returns true if `count` arguments are acceptable.
    #[must_use]
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exactly(n) => count == n,
            Self::Between(lo, hi) => (lo..=hi).contains(&count),
            Self::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "{n}"),
            Self::Between(lo, hi) => write!(f, "{lo} to {hi}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

impl Function {
    /// Looks up a function by its (lowercase) name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let f = match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" => Self::Asin,
            "acos" => Self::Acos,
            "atan" => Self::Atan,
            "sinh" => Self::Sinh,
            "cosh" => Self::Cosh,
            "tanh" => Self::Tanh,
            "asinh" => Self::Asinh,
            "acosh" => Self::Acosh,
            "atanh" => Self::Atanh,
            "sqrt" => Self::Sqrt,
            "cbrt" => Self::Cbrt,
            "exp" => Self::Exp,
            "ln" => Self::Ln,
            "log" => Self::Log,
            "log10" => Self::Log10,
            "log2" => Self::Log2,
            "abs" => Self::Abs,
            "sign" => Self::Sign,
            "floor" => Self::Floor,
            "ceil" => Self::Ceil,
            "round" => Self::Round,
            "trunc" => Self::Trunc,
            "atan2" => Self::Atan2,
            "pow" => Self::Pow,
            "hypot" => Self::Hypot,
            "min" => Self::Min,
            "max" => Self::Max,
            _ => return None,
        };
        Some(f)
    }

    /// Returns the name used to call this function.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Asinh => "asinh",
            Self::Acosh => "acosh",
            Self::Atanh => "atanh",
            Self::Sqrt => "sqrt",
            Self::Cbrt => "cbrt",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Log => "log",
            Self::Log10 => "log10",
            Self::Log2 => "log2",
            Self::Abs => "abs",
            Self::Sign => "sign",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Round => "round",
            Self::Trunc => "trunc",
            Self::Atan2 => "atan2",
            Self::Pow => "pow",
            Self::Hypot => "hypot",
            Self::Min => "min",
            Self::Max => "max",
        }
    }

    /// Returns the accepted argument count.
    #[must_use]
    pub fn arity(self) -> Arity {
        match self {
            Self::Log => Arity::Between(1, 2),
            Self::Atan2 | Self::Pow | Self::Hypot => Arity::Exactly(2),
            Self::Min | Self::Max => Arity::AtLeast(1),
            _ => Arity::Exactly(1),
        }
    }

    /// Applies the function to already-evaluated arguments.
    ///
    /// The argument count is checked at parse time; missing arguments
    /// evaluate as NaN and are caught by the non-finite check.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::Domain`] when an argument lies outside the
    /// function's real domain.
    pub fn apply(self, args: &[f64]) -> Result<f64, EvalError> {
        let a = args.first().copied().unwrap_or(f64::NAN);
        let b = args.get(1).copied();
        let domain = |ok: bool, arg: f64| {
            if ok {
                Ok(())
            } else {
                Err(EvalError::Domain {
                    function: self.name(),
                    arg,
                })
            }
        };

        let value = match self {
            Self::Sin => a.sin(),
            Self::Cos => a.cos(),
            Self::Tan => a.tan(),
            Self::Asin => {
                domain((-1.0..=1.0).contains(&a), a)?;
                a.asin()
            }
            Self::Acos => {
                domain((-1.0..=1.0).contains(&a), a)?;
                a.acos()
            }
            Self::Atan => a.atan(),
            Self::Sinh => a.sinh(),
            Self::Cosh => a.cosh(),
            Self::Tanh => a.tanh(),
            Self::Asinh => a.asinh(),
            Self::Acosh => {
                domain(a >= 1.0, a)?;
                a.acosh()
            }
            Self::Atanh => {
                domain(a > -1.0 && a < 1.0, a)?;
                a.atanh()
            }
            Self::Sqrt => {
                domain(a >= 0.0, a)?;
                a.sqrt()
            }
            Self::Cbrt => a.cbrt(),
            Self::Exp => a.exp(),
            Self::Ln => {
                domain(a > 0.0, a)?;
                a.ln()
            }
            Self::Log => {
                domain(a > 0.0, a)?;
                match b {
                    Some(base) => {
                        domain(base > 0.0 && (base - 1.0).abs() > 0.0, base)?;
                        a.ln() / base.ln()
                    }
                    None => a.ln(),
                }
            }
            Self::Log10 => {
                domain(a > 0.0, a)?;
                a.log10()
            }
            Self::Log2 => {
                domain(a > 0.0, a)?;
                a.log2()
            }
            Self::Abs => a.abs(),
            Self::Sign => {
                if a == 0.0 {
                    0.0
                } else {
                    a.signum()
                }
            }
            Self::Floor => a.floor(),
            Self::Ceil => a.ceil(),
            Self::Round => a.round(),
            Self::Trunc => a.trunc(),
            Self::Atan2 => a.atan2(b.unwrap_or(f64::NAN)),
            Self::Pow => power(a, b.unwrap_or(f64::NAN))?,
            Self::Hypot => a.hypot(b.unwrap_or(f64::NAN)),
            Self::Min => args.iter().copied().fold(f64::INFINITY, f64::min),
            Self::Max => args.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        };

        Ok(value)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raises `base` to `exp` over the reals.
///
/// # Errors
///
/// Zero to a negative power is a division by zero, and a negative base with a
/// non-integer exponent has no real value.
pub(crate) fn power(base: f64, exp: f64) -> Result<f64, EvalError> {
    if base == 0.0 && exp < 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    if base < 0.0 && exp.fract() != 0.0 {
        return Err(EvalError::Domain {
            function: "^",
            arg: base,
        });
    }
    Ok(base.powf(exp))
}
