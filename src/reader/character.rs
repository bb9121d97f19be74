use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::anychar;
use nom::combinator::{map, not, value, verify};
use nom::sequence::{preceded, terminated};

use super::{Input, ParseResult};
use crate::value::Value;

/// Character parser
///
/// The named literals win over the single-character form, and a bare
/// character must not run into an alphanumeric (`#\ab` is not a datum).
pub fn parse(input: Input) -> ParseResult<Value> {
    let char_literal = preceded(
        tag("#\\"),
        alt((parse_named_char_literal, parse_single_char_literal)),
    );

    map(char_literal, Value::character)(input)
}

#[inline]
fn parse_named_char_literal(input: Input) -> ParseResult<char> {
    alt((value(' ', tag("space")), value('\n', tag("newline"))))(input)
}

#[inline]
fn parse_single_char_literal(input: Input) -> ParseResult<char> {
    terminated(anychar, not(verify(anychar, |c| c.is_alphanumeric())))(input)
}
