use super::errors::RpnError;
use tracing::trace;

/// Binary operators understood by [`eval_rpn`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            "^" => Some(Operator::Pow),
            _   => None,
        }
    }

    #[inline]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
            Operator::Pow => lhs.powf(rhs),
        }
    }
}


/// Evaluates a whitespace-separated postfix expression, e.g. `"3 4 + 2 *"`.
///
/// Operands are parsed as `f64`; division follows IEEE rules
/// (`1 0 /` is `inf`).
///
/// # Errors
/// - [`RpnError::EmptyExpression`]  : no tokens
/// - [`RpnError::InvalidToken`]     : token is neither an operator nor a number
/// - [`RpnError::StackUnderflow`]   : operator with fewer than two operands
/// - [`RpnError::TrailingOperands`] : more than one value left at the end
pub fn eval_rpn(src: &str) -> Result<f64, RpnError> {
    let mut operands: Vec<f64> = Vec::new();

    for (position, token) in src.split_whitespace().enumerate() {
        if let Some(op) = Operator::from_token(token) {
            let (Some(rhs), Some(lhs)) = (operands.pop(), operands.pop()) else {
                return Err(RpnError::StackUnderflow { token: token.to_owned(), position });
            };
            let result = op.apply(lhs, rhs);
            trace!(?op, lhs, rhs, result, "rpn apply");
            operands.push(result);
            continue;
        }

        let value = token
            .parse::<f64>()
            .map_err(|_| RpnError::InvalidToken { token: token.to_owned(), position })?;
        operands.push(value);
    }

    match operands.as_slice() {
        []       => Err(RpnError::EmptyExpression),
        [result] => Ok(*result),
        rest     => Err(RpnError::TrailingOperands { remaining: rest.len() }),
    }
}
