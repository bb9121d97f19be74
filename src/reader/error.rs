use nom::error::{VerboseError, VerboseErrorKind};
use nom::Err;

use super::Input;
use crate::error::{Error, ParseDetail};

type NomError<'a> = VerboseError<Input<'a>>;

/// Flatten a nom error stack into the crate's parser error: the position of
/// the deepest failure plus the nearest context label.
pub(crate) fn to_parse_error(e: Err<NomError>) -> Error {
    match e {
        Err::Incomplete(_) => Error::Parser(ParseDetail::new(0, 0, "more input")),
        Err::Error(e) | Err::Failure(e) => from_verbose(e),
    }
}

fn from_verbose(e: NomError) -> Error {
    let (line, column) = e
        .errors
        .first()
        .map(|(input, _)| (input.location_line(), input.get_utf8_column()))
        .unwrap_or((1, 1));

    let context = e
        .errors
        .iter()
        .find_map(|(_, kind)| match kind {
            VerboseErrorKind::Context(label) => Some(*label),
            _ => None,
        })
        .unwrap_or("datum");

    Error::Parser(ParseDetail::new(line, column, context))
}
