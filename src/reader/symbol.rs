use nom::branch::alt;
use nom::character::complete::{anychar, one_of};
use nom::combinator::{map, verify};
use nom::multi::many0;
use nom::sequence::pair;

use super::{Input, ParseResult};
use crate::value::Value;

pub const SYMBOL_SPECIAL_CHARS: &str = "!$%&|*+-/:<=>?@^_~";

pub fn parse(input: Input) -> ParseResult<Value> {
    map(parse_identifier, Value::symbol)(input)
}

fn parse_identifier(input: Input) -> ParseResult<String> {
    let (s, (init, subseq)) = pair(parse_initial, many0(parse_subsequent))(input)?;

    let mut identifier = String::new();
    identifier.push(init);
    identifier.extend(subseq.iter());

    Ok((s, identifier))
}

#[inline]
fn parse_initial(input: Input) -> ParseResult<char> {
    let letter = verify(anychar, |c| c.is_alphabetic());
    let special_initial = one_of(SYMBOL_SPECIAL_CHARS);

    alt((letter, special_initial))(input)
}

#[inline]
fn parse_subsequent(input: Input) -> ParseResult<char> {
    let digit = verify(anychar, |c| c.is_ascii_digit());

    alt((parse_initial, digit))(input)
}
