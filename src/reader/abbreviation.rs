use nom::branch::alt;
use nom::character::complete::char;
use nom::combinator::{map, value};
use nom::sequence::pair;

use super::{parse_datum, Input, ParseResult};
use crate::value::Value;

// 'x -> (quote x), `x -> (quasiquote x), ,x -> (unquote x)

#[inline]
pub fn parse(input: Input) -> ParseResult<Value> {
    let abbrev = pair(parse_abbrev_prefix, parse_datum);

    map(abbrev, |(abbr, datum)| Value::list(vec![abbr, datum]))(input)
}

#[inline]
fn parse_abbrev_prefix(input: Input) -> ParseResult<Value> {
    alt((
        value(Value::symbol("quote"), char('\'')),
        value(Value::symbol("quasiquote"), char('`')),
        value(Value::symbol("unquote"), char(',')),
    ))(input)
}
