use nom::character::complete::char;
use nom::combinator::map;
use nom::multi::{many0, many1};
use nom::sequence::{delimited, tuple};

use super::whitespace::parse_inter_token_space;
use super::{parse_datum, Input, ParseResult};
use crate::value::Value;

// <list> -> (<datum>*) | (<datum>+ . <datum>)

#[inline]
pub fn parse_proper_list(input: Input) -> ParseResult<Value> {
    let list_elements = delimited(
        parse_inter_token_space,
        parse_datum,
        parse_inter_token_space,
    );
    let list = delimited(char('('), many0(list_elements), char(')'));

    map(list, Value::list)(input)
}

#[inline]
pub fn parse_improper_list(input: Input) -> ParseResult<Value> {
    let improper_head = many1(delimited(
        parse_inter_token_space,
        parse_datum,
        parse_inter_token_space,
    ));

    let improper_tail = delimited(
        parse_inter_token_space,
        parse_datum,
        parse_inter_token_space,
    );
    let improper_elements = tuple((improper_head, char('.'), improper_tail));
    let improper_list = delimited(char('('), improper_elements, char(')'));

    map(improper_list, |(head, _, tail)| {
        Value::improper_list(head, tail)
    })(input)
}
