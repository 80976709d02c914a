//! Shunting-yard conversion to reverse Polish notation, and folding of the
//! RPN sequence into an [`Expr`] tree.
//!
//! Rules:
//! - an identifier directly followed by `(` is a function call; its argument
//!   count is tracked per parenthesis level and checked on `)`
//! - any other identifier is the variable `x` or a named constant
//! - `+`/`-` where an operand is expected are unary; they bind tighter than
//!   `*` and `/` but looser than `^`, so `-x^2` is `-(x^2)`
//! - `^` is right-associative

use crate::{
    BinaryOp, Expr, Function, ParseError, UnaryOp,
    token::{Tok, Token},
};

/// One item of the RPN output.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Rpn {
    Num(f64),
    Var,
    Unary(UnaryOp),
    Binary(BinaryOp),
    Call(Function, usize),
}

/// Items waiting on the operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Unary(UnaryOp),
    Binary(BinaryOp),
    /// An open parenthesis; `call` is set when it opens a function call.
    Open { pos: usize, call: Option<Call> },
}

#[derive(Debug, Clone, Copy)]
struct Call {
    function: Function,
    pos: usize,
    commas: usize,
}

fn precedence(p: &Pending) -> u8 {
    match p {
        Pending::Binary(BinaryOp::Add | BinaryOp::Sub) => 1,
        Pending::Binary(BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem) => 2,
        Pending::Unary(_) => 3,
        Pending::Binary(BinaryOp::Pow) => 4,
        Pending::Open { .. } => 0,
    }
}

fn is_right_associative(p: &Pending) -> bool {
    matches!(p, Pending::Unary(_) | Pending::Binary(BinaryOp::Pow))
}

fn binary_op(tok: &Tok) -> Option<BinaryOp> {
    match tok {
        Tok::Plus => Some(BinaryOp::Add),
        Tok::Minus => Some(BinaryOp::Sub),
        Tok::Star => Some(BinaryOp::Mul),
        Tok::Slash => Some(BinaryOp::Div),
        Tok::Percent => Some(BinaryOp::Rem),
        Tok::Caret => Some(BinaryOp::Pow),
        _ => None,
    }
}

fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(std::f64::consts::PI),
        "e" => Some(std::f64::consts::E),
        _ => None,
    }
}

fn unexpected(token: &Token) -> ParseError {
    ParseError::UnexpectedToken {
        token: token.tok.to_string(),
        pos: token.pos,
    }
}

/// Converts tokens into RPN, validating operand/operator alternation,
/// parenthesis balance, identifiers, and function arity along the way.
pub(crate) fn to_rpn(tokens: &[Token]) -> Result<Vec<Rpn>, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut out: Vec<Rpn> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Pending> = Vec::new();

    // True when the next token must start an operand.
    let mut expect_operand = true;
    let mut iter = tokens.iter().peekable();

    while let Some(token) = iter.next() {
        match &token.tok {
            Tok::Num(n) => {
                if !expect_operand {
                    return Err(unexpected(token));
                }
                out.push(Rpn::Num(*n));
                expect_operand = false;
            }

            Tok::Ident(name) => {
                if !expect_operand {
                    return Err(unexpected(token));
                }

                let opens_call = iter.peek().is_some_and(|next| next.tok == Tok::LPar);
                if opens_call {
                    let function =
                        Function::from_name(name).ok_or_else(|| ParseError::UnknownFunction {
                            name: name.clone(),
                            pos: token.pos,
                        })?;
                    let Some(open) = iter.next() else {
                        return Err(ParseError::UnexpectedEnd { pos: token.pos });
                    };
                    ops.push(Pending::Open {
                        pos: open.pos,
                        call: Some(Call {
                            function,
                            pos: token.pos,
                            commas: 0,
                        }),
                    });
                    // Stays in operand position; `f()` is caught on `)`.
                    continue;
                }

                if name == "x" {
                    out.push(Rpn::Var);
                } else if let Some(value) = constant(name) {
                    out.push(Rpn::Num(value));
                } else if let Some(function) = Function::from_name(name) {
                    return Err(ParseError::WrongArgCount {
                        name: function.name(),
                        expected: function.arity().to_string(),
                        found: 0,
                        pos: token.pos,
                    });
                } else {
                    return Err(ParseError::UnknownIdentifier {
                        name: name.clone(),
                        pos: token.pos,
                    });
                }
                expect_operand = false;
            }

            Tok::LPar => {
                if !expect_operand {
                    return Err(unexpected(token));
                }
                ops.push(Pending::Open {
                    pos: token.pos,
                    call: None,
                });
            }

            Tok::Comma => {
                if expect_operand {
                    return Err(unexpected(token));
                }
                drain_until_open(&mut ops, &mut out);
                match ops.last_mut() {
                    Some(Pending::Open {
                        call: Some(call), ..
                    }) => call.commas += 1,
                    _ => return Err(unexpected(token)),
                }
                expect_operand = true;
            }

            Tok::RPar => {
                drain_until_open(&mut ops, &mut out);
                let Some(Pending::Open { call, .. }) = ops.pop() else {
                    return Err(ParseError::UnbalancedParens { pos: token.pos });
                };

                match call {
                    Some(call) => {
                        let argc = if expect_operand {
                            // Only `f()` may close in operand position.
                            if call.commas > 0 {
                                return Err(unexpected(token));
                            }
                            0
                        } else {
                            call.commas + 1
                        };
                        if !call.function.arity().accepts(argc) {
                            return Err(ParseError::WrongArgCount {
                                name: call.function.name(),
                                expected: call.function.arity().to_string(),
                                found: argc,
                                pos: call.pos,
                            });
                        }
                        out.push(Rpn::Call(call.function, argc));
                    }
                    None if expect_operand => return Err(unexpected(token)),
                    None => {}
                }
                expect_operand = false;
            }

            tok => {
                let Some(op) = binary_op(tok) else {
                    return Err(unexpected(token));
                };

                if expect_operand {
                    let unary = match op {
                        BinaryOp::Sub => UnaryOp::Neg,
                        BinaryOp::Add => UnaryOp::Plus,
                        _ => return Err(unexpected(token)),
                    };
                    // Prefix operators never pop what precedes them.
                    ops.push(Pending::Unary(unary));
                    continue;
                }

                let incoming = Pending::Binary(op);
                while let Some(top) = ops.last() {
                    if matches!(top, Pending::Open { .. }) {
                        break;
                    }
                    let should_pop = if is_right_associative(&incoming) {
                        precedence(top) > precedence(&incoming)
                    } else {
                        precedence(top) >= precedence(&incoming)
                    };
                    if !should_pop {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        emit(top, &mut out);
                    }
                }
                ops.push(incoming);
                expect_operand = true;
            }
        }
    }

    let end = tokens.last().map_or(0, |t| t.pos);
    if expect_operand {
        return Err(ParseError::UnexpectedEnd { pos: end });
    }

    while let Some(pending) = ops.pop() {
        if let Pending::Open { pos, .. } = pending {
            return Err(ParseError::UnbalancedParens { pos });
        }
        emit(pending, &mut out);
    }

    Ok(out)
}

/// Moves operators to the output until an open parenthesis (left in place)
/// or the bottom of the stack.
fn drain_until_open(ops: &mut Vec<Pending>, out: &mut Vec<Rpn>) {
    while let Some(top) = ops.last() {
        if matches!(top, Pending::Open { .. }) {
            break;
        }
        if let Some(top) = ops.pop() {
            emit(top, out);
        }
    }
}

fn emit(pending: Pending, out: &mut Vec<Rpn>) {
    match pending {
        Pending::Unary(op) => out.push(Rpn::Unary(op)),
        Pending::Binary(op) => out.push(Rpn::Binary(op)),
        Pending::Open { .. } => {}
    }
}

/// Folds an RPN sequence into an expression tree.
///
/// Sequences produced by [`to_rpn`] are always well formed; a malformed one
/// is reported as an unexpected end rather than panicking.
pub(crate) fn from_rpn(rpn: Vec<Rpn>) -> Result<Expr, ParseError> {
    let malformed = ParseError::UnexpectedEnd { pos: 0 };
    let mut stack: Vec<Expr> = Vec::new();

    for item in rpn {
        let expr = match item {
            Rpn::Num(n) => Expr::Const(n),
            Rpn::Var => Expr::Var,
            Rpn::Unary(op) => {
                let operand = stack.pop().ok_or_else(|| malformed.clone())?;
                Expr::Unary(op, Box::new(operand))
            }
            Rpn::Binary(op) => {
                let rhs = stack.pop().ok_or_else(|| malformed.clone())?;
                let lhs = stack.pop().ok_or_else(|| malformed.clone())?;
                Expr::Binary(op, Box::new(lhs), Box::new(rhs))
            }
            Rpn::Call(function, argc) => {
                if stack.len() < argc {
                    return Err(malformed);
                }
                let args = stack.split_off(stack.len() - argc);
                Expr::Call(function, args)
            }
        };
        stack.push(expr);
    }

    match (stack.pop(), stack.is_empty()) {
        (Some(expr), true) => Ok(expr),
        _ => Err(malformed),
    }
}
