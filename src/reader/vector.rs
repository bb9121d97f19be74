use nom::bytes::complete::tag;
use nom::character::complete::char;
use nom::combinator::map;
use nom::multi::many0;
use nom::sequence::delimited;

use super::whitespace::parse_inter_token_space;
use super::{parse_datum, Input, ParseResult};
use crate::value::Value;

// <vector> -> #(<datum>*)

#[inline]
pub fn parse(input: Input) -> ParseResult<Value> {
    let vector_elements = delimited(
        parse_inter_token_space,
        parse_datum,
        parse_inter_token_space,
    );
    let vector = delimited(tag("#("), many0(vector_elements), char(')'));

    map(vector, Value::vector)(input)
}
