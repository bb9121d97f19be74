pub mod abbreviation;
pub mod boolean;
pub mod character;
pub mod error;
pub mod list;
pub mod number;
pub mod string;
pub mod symbol;
pub mod vector;
pub mod whitespace;

use crate::value::Value;
use nom::branch::alt;
use nom::combinator::{all_consuming, value};
use nom::error::{context, VerboseError};
use nom::multi::many1;
use nom::sequence::{delimited, preceded, terminated};
use nom::IResult;
use nom_locate::LocatedSpan;

pub(crate) type Input<'a> = LocatedSpan<&'a str>;
pub(crate) type ParseResult<'a, T> = IResult<Input<'a>, T, VerboseError<Input<'a>>>;

/// Parse exactly one expression; surrounding inter-token space is allowed
/// but nothing else may follow.
pub fn parse(input: &str) -> crate::Result<Value> {
    let span = Input::new(input);
    let one_datum = delimited(
        whitespace::parse_inter_token_space,
        parse_datum,
        whitespace::parse_inter_token_space,
    );
    let (_rest, datum) = all_consuming(one_datum)(span).map_err(error::to_parse_error)?;
    Ok(datum)
}

/// Parse a whole program: one or more expressions separated by inter-token
/// space.
pub fn parse_program(input: &str) -> crate::Result<Vec<Value>> {
    let span = Input::new(input);
    let program = terminated(
        context("program", many1(parse_datum)),
        whitespace::parse_inter_token_space,
    );
    let (_rest, data) = all_consuming(program)(span).map_err(error::to_parse_error)?;
    Ok(data)
}

pub(crate) fn parse_datum(input: Input) -> ParseResult<Value> {
    let datum = context("datum", alt((parse_simple_datum, parse_compound_datum)));
    preceded(whitespace::parse_inter_token_space, datum)(input)
}

#[inline]
fn parse_simple_datum(input: Input) -> ParseResult<Value> {
    context(
        "simple datum",
        alt((
            context("number", number::parse),
            context("character", character::parse),
            context("boolean", boolean::parse),
            context("symbol", symbol::parse),
            context("string", string::parse),
        )),
    )(input)
}

#[inline]
fn parse_compound_datum(input: Input) -> ParseResult<Value> {
    context(
        "compound datum",
        alt((
            context("vector", vector::parse),
            context("improper list", list::parse_improper_list),
            context("list", list::parse_proper_list),
            context("abbreviation", abbreviation::parse),
        )),
    )(input)
}

#[inline]
pub(crate) fn unit<'a, O, F>(parser: F) -> impl FnMut(Input<'a>) -> ParseResult<'a, ()>
where
    F: FnMut(Input<'a>) -> ParseResult<'a, O>,
{
    value((), parser)
}
