use nom::branch::alt;
use nom::character::complete::{anychar, char, line_ending};
use nom::combinator::{eof, verify};
use nom::error::context;
use nom::multi::{many0, many_till};
use nom::sequence::preceded;

use super::{unit, Input, ParseResult};

#[inline]
pub fn parse_inter_token_space(input: Input) -> ParseResult<()> {
    let atmosphere = alt((parse_white_space, parse_comment));
    unit(many0(atmosphere))(input)
}

#[inline]
pub fn parse_white_space(input: Input) -> ParseResult<()> {
    unit(verify(anychar, |c| c.is_whitespace()))(input)
}

// line comments run to the line ending or the end of input
#[inline]
pub fn parse_comment(input: Input) -> ParseResult<()> {
    context(
        "comment",
        unit(preceded(
            char(';'),
            many_till(anychar, alt((unit(line_ending), unit(eof)))),
        )),
    )(input)
}
