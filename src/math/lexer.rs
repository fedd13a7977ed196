use std::fmt::{Display, Formatter};
use std::str::FromStr;

use nom::branch::alt;
use nom::bytes::complete::{tag, take_while1};
use nom::character::complete::{digit1, multispace0};
use nom::combinator::{map, map_res, opt, recognize, value};
use nom::multi::many0;
use nom::sequence::{delimited, pair};
use nom::{Finish, IResult};

use super::errors::EvalError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    DoubleStar,
    LParen,
    RParen,
    Comma,
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{}", number),
            Self::Ident(name) => f.write_str(name),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::DoubleStar => f.write_str("**"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Comma => f.write_str(","),
        }
    }
}

fn number(input: &str) -> IResult<&str, Token> {
    let make_number = |(front, back): (&str, Option<&str>)| {
        let num_str = front.to_string() + back.unwrap_or("");
        f64::from_str(&num_str)
    };

    let back_parser = pair(tag("."), digit1);
    let num_parser = pair(digit1, opt(recognize(back_parser)));
    let mut parser = map(map_res(num_parser, make_number), Token::Number);

    parser(input)
}

fn ident(input: &str) -> IResult<&str, Token> {
    // Identifiers: start with ASCII letter or '_', followed by any combination
    // of ASCII letters, digits, or '_' (e.g., `pi`, `nPr`, `max`).
    fn is_ident_start(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_'
    }
    fn is_ident_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }

    let mut parser = recognize(pair(take_while1(is_ident_start), opt(take_while1(is_ident_char))));
    let (rest, name) = parser(input)?;

    Ok((rest, Token::Ident(name.to_string())))
}

fn symbol(input: &str) -> IResult<&str, Token> {
    // `**` must come before `*`.
    alt((
        value(Token::DoubleStar, tag("**")),
        value(Token::Star, tag("*")),
        value(Token::Slash, tag("/")),
        value(Token::Plus, tag("+")),
        value(Token::Minus, tag("-")),
        value(Token::LParen, tag("(")),
        value(Token::RParen, tag(")")),
        value(Token::Comma, tag(",")),
    ))(input)
}

/// Split an expression into tokens, discarding whitespace.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let token = delimited(multispace0, alt((number, ident, symbol)), multispace0);

    match many0(token)(input).finish() {
        Ok((rest, _)) if !rest.trim_start().is_empty() => Err(EvalError::Syntax(format!(
            "unrecognized input \"{}\"",
            rest.trim_start()
        ))),
        Ok((_, tokens)) => Ok(tokens),
        Err(err) => Err(EvalError::Syntax(format!(
            "unrecognized input \"{}\"",
            err.input
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::{tokenize, Token};
    use crate::math::EvalError;

    #[test]
    fn tokenize_expression() -> Result<(), EvalError> {
        let tokens = tokenize("6/2*(1+2)")?;

        assert_eq!(
            tokens,
            vec![
                Token::Number(6.0),
                Token::Slash,
                Token::Number(2.0),
                Token::Star,
                Token::LParen,
                Token::Number(1.0),
                Token::Plus,
                Token::Number(2.0),
                Token::RParen,
            ],
        );

        Ok(())
    }

    #[test]
    fn tokenize_power() -> Result<(), EvalError> {
        let tokens = tokenize("2 ** 3")?;

        assert_eq!(
            tokens,
            vec![Token::Number(2.0), Token::DoubleStar, Token::Number(3.0)],
        );

        Ok(())
    }

    #[test]
    fn tokenize_call() -> Result<(), EvalError> {
        let tokens = tokenize("min(4, 2.5)")?;

        assert_eq!(
            tokens,
            vec![
                Token::Ident("min".to_string()),
                Token::LParen,
                Token::Number(4.0),
                Token::Comma,
                Token::Number(2.5),
                Token::RParen,
            ],
        );

        Ok(())
    }

    #[test]
    fn tokenize_unrecognized_input() {
        let error = tokenize("1 + $").unwrap_err();

        assert_eq!(
            error,
            EvalError::Syntax("unrecognized input \"$\"".to_string()),
        );
    }

    #[test]
    fn tokenize_blank_input() -> Result<(), EvalError> {
        assert!(tokenize("   ")?.is_empty());

        Ok(())
    }
}
