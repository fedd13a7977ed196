//! Precedence-climbing evaluation over a token slice.
//!
//! Sub-expressions are folded into `f64` values as they are parsed; no syntax tree is
//! built. Binding powers, from loosest to tightest: `+`/`-`, then `*`/`/`, then `**`
//! (right-associative), then unary sign.

use super::builtins;
use super::errors::EvalError;
use super::lexer::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Star => Some(Self::Mul),
            Token::Slash => Some(Self::Div),
            Token::DoubleStar => Some(Self::Pow),
            _ => None,
        }
    }

    fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    fn is_right_assoc(self) -> bool {
        matches!(self, Self::Pow)
    }

    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }
}

struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;

        Some(token)
    }

    fn expect(&mut self, expected: &Token) -> Result<(), EvalError> {
        match self.advance() {
            Some(token) if token == expected => Ok(()),
            Some(token) => Err(EvalError::Syntax(format!(
                "expected \"{}\", found \"{}\"",
                expected, token
            ))),
            None => Err(EvalError::Syntax(format!(
                "expected \"{}\", found end of input",
                expected
            ))),
        }
    }
}

/// Evaluate a complete token stream, rejecting trailing tokens.
pub(crate) fn evaluate(tokens: &[Token]) -> Result<f64, EvalError> {
    let mut cursor = Cursor::new(tokens);
    let value = expression(&mut cursor, 0)?;

    match cursor.peek() {
        Some(token) => Err(EvalError::Syntax(format!(
            "unexpected trailing token \"{}\"",
            token
        ))),
        None => Ok(value),
    }
}

fn expression(cursor: &mut Cursor, min_prec: u8) -> Result<f64, EvalError> {
    let mut lhs = operand(cursor)?;

    while let Some(op) = cursor.peek().and_then(BinOp::from_token) {
        if op.precedence() < min_prec {
            break;
        }

        cursor.advance();

        let next_min = if op.is_right_assoc() {
            op.precedence()
        } else {
            op.precedence() + 1
        };

        let rhs = expression(cursor, next_min)?;
        lhs = op.apply(lhs, rhs);
    }

    Ok(lhs)
}

fn operand(cursor: &mut Cursor) -> Result<f64, EvalError> {
    match cursor.advance() {
        Some(Token::Number(value)) => Ok(*value),
        Some(Token::Plus) => operand(cursor),
        Some(Token::Minus) => Ok(-operand(cursor)?),
        Some(Token::LParen) => {
            let value = expression(cursor, 0)?;
            cursor.expect(&Token::RParen)?;

            Ok(value)
        }
        Some(Token::Ident(name)) => match cursor.peek() {
            Some(Token::LParen) => call(cursor, name),
            _ => builtins::constant(name)
                .ok_or_else(|| EvalError::UnknownIdentifier(name.clone())),
        },
        Some(token) => Err(EvalError::Syntax(format!(
            "expected an operand, found \"{}\"",
            token
        ))),
        None => Err(EvalError::Syntax(
            "expected an operand, found end of input".to_string(),
        )),
    }
}

fn call(cursor: &mut Cursor, name: &str) -> Result<f64, EvalError> {
    let function =
        builtins::function(name).ok_or_else(|| EvalError::UnknownIdentifier(name.to_string()))?;

    cursor.expect(&Token::LParen)?;

    let mut args = vec![expression(cursor, 0)?];

    while matches!(cursor.peek(), Some(Token::Comma)) {
        cursor.advance();
        args.push(expression(cursor, 0)?);
    }

    cursor.expect(&Token::RParen)?;
    function.call(name, &args)
}

#[cfg(test)]
mod tests {
    use super::super::lexer::tokenize;
    use super::evaluate;
    use crate::math::EvalError;

    fn eval(input: &str) -> Result<f64, EvalError> {
        evaluate(&tokenize(input)?)
    }

    #[test]
    fn same_precedence_is_left_to_right() -> Result<(), EvalError> {
        assert_eq!(eval("6/2*(1+2)")?, 9.0);
        assert_eq!(eval("10 - 4 - 3")?, 3.0);

        Ok(())
    }

    #[test]
    fn power_is_right_associative() -> Result<(), EvalError> {
        assert_eq!(eval("2**3**2")?, 512.0);

        Ok(())
    }

    #[test]
    fn unary_sign_binds_tighter_than_power() -> Result<(), EvalError> {
        assert_eq!(eval("-2**2")?, 4.0);
        assert_eq!(eval("+3 - -2")?, 5.0);

        Ok(())
    }

    #[test]
    fn unbalanced_parens() {
        assert!(matches!(eval("(1 + 2"), Err(EvalError::Syntax(_))));
        assert!(matches!(eval("1 + 2)"), Err(EvalError::Syntax(_))));
    }

    #[test]
    fn missing_operand() {
        assert!(matches!(eval("1 +"), Err(EvalError::Syntax(_))));
        assert!(matches!(eval(""), Err(EvalError::Syntax(_))));
        assert!(matches!(eval("min()"), Err(EvalError::Syntax(_))));
    }

    #[test]
    fn trailing_tokens() {
        assert!(matches!(eval("1 2"), Err(EvalError::Syntax(_))));
    }

    #[test]
    fn unknown_identifier_aborts() {
        let error = eval("1 + bogus * 2").unwrap_err();

        assert_eq!(error, EvalError::UnknownIdentifier("bogus".to_string()));
        assert_eq!(error.to_string(), "Unknown Variable: bogus");
    }
}
