use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::combinator::{map, value};

use super::{Input, ParseResult};
use crate::value::Value;

pub fn parse(input: Input) -> ParseResult<Value> {
    let bool_literal = alt((value(true, tag("#t")), value(false, tag("#f"))));

    map(bool_literal, Value::boolean)(input)
}
