use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, one_of};
use nom::combinator::{map, opt, value, verify};
use nom::multi::many1;
use nom::sequence::{pair, preceded, tuple};

use super::{Input, ParseResult};
use crate::value::number::Number;
use crate::value::Value;
use num::bigint::BigInt;
use num::Zero;

// The numeric alternatives share prefixes (a digit may begin an integer, a
// float, a ratio or a complex), so the longer forms go first and failures
// backtrack.

pub fn parse(input: Input) -> ParseResult<Value> {
    let number = alt((parse_complex, parse_ratio, parse_float, parse_integer));

    map(number, Value::Number)(input)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Plus,
    Minus,
}

fn parse_sign(input: Input) -> ParseResult<Sign> {
    let (s, sign) = opt(alt((
        value(Sign::Plus, char('+')),
        value(Sign::Minus, char('-')),
    )))(input)?;

    Ok((s, sign.unwrap_or(Sign::Plus)))
}

fn apply_sign(sign: Sign, n: BigInt) -> BigInt {
    match sign {
        Sign::Minus => -n,
        Sign::Plus => n,
    }
}

// <integer> -> <sign> <digit 10>+ | #d <sign> <digit 10>+ |
//              #x <digit 16>+ | #o <digit 8>+ | #b <digit 2>+
fn parse_integer(input: Input) -> ParseResult<Number> {
    map(
        alt((
            preceded(tag("#x"), parse_digits(16)),
            preceded(tag("#o"), parse_digits(8)),
            preceded(tag("#b"), parse_digits(2)),
            preceded(tag("#d"), parse_signed_decimal),
            parse_signed_decimal,
        )),
        Number::Fixnum,
    )(input)
}

fn parse_signed_decimal(input: Input) -> ParseResult<BigInt> {
    map(pair(parse_sign, parse_digits(10)), |(sign, n)| {
        apply_sign(sign, n)
    })(input)
}

fn parse_digits<'a>(radix: u32) -> impl FnMut(Input<'a>) -> ParseResult<'a, BigInt> {
    map(many1(parse_digit(radix)), move |digits| {
        let digits: String = digits.into_iter().collect();

        BigInt::parse_bytes(digits.as_bytes(), radix).expect("parsing digits can't fail")
    })
}

fn parse_digit<'a>(radix: u32) -> impl FnMut(Input<'a>) -> ParseResult<'a, char> {
    let digits = match radix {
        2 => "01",
        8 => "01234567",
        16 => "0123456789abcdefABCDEF",
        _ => "0123456789",
    };

    one_of(digits)
}

// <float> -> <sign> <digit 10>+ . <digit 10>+
fn parse_float(input: Input) -> ParseResult<Number> {
    map(parse_decimal_literal, Number::flonum)(input)
}

fn parse_decimal_literal(input: Input) -> ParseResult<f64> {
    let (s, (sign, int_part, _, frac_part)) =
        tuple((parse_sign, digit1, char('.'), digit1))(input)?;

    let decimal = format!("{}.{}", int_part.fragment(), frac_part.fragment())
        .parse::<f64>()
        .expect("parsing f64 can't fail");

    let decimal = match sign {
        Sign::Minus => -decimal,
        Sign::Plus => decimal,
    };

    Ok((s, decimal))
}

// <ratio> -> <sign> <digit 10>+ / <digit 10>+  with a non-zero denominator
fn parse_ratio(input: Input) -> ParseResult<Number> {
    let nonzero_digits = verify(parse_digits(10), |d: &BigInt| !d.is_zero());
    let (s, (sign, numer, _, denom)) =
        tuple((parse_sign, parse_digits(10), char('/'), nonzero_digits))(input)?;

    Ok((s, Number::fraction(apply_sign(sign, numer), denom)))
}

// <complex> -> (<float> | <integer>) + (<float> | <integer>) i
fn parse_complex(input: Input) -> ParseResult<Number> {
    let (s, (re, _, im, _)) = tuple((
        parse_real_literal,
        char('+'),
        parse_real_literal,
        char('i'),
    ))(input)?;

    Ok((s, Number::complex(re, im)))
}

fn parse_real_literal(input: Input) -> ParseResult<f64> {
    alt((parse_decimal_literal, parse_decimal_as_f64))(input)
}

fn parse_decimal_as_f64(input: Input) -> ParseResult<f64> {
    let (s, (sign, digits)) = pair(parse_sign, digit1)(input)?;
    let n = digits
        .fragment()
        .parse::<f64>()
        .expect("parsing f64 can't fail");

    let n = match sign {
        Sign::Minus => -n,
        Sign::Plus => n,
    };

    Ok((s, n))
}
