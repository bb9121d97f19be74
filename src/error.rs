use crate::value::Value;
use thiserror::Error;

/// Where in the input the reader gave up.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseDetail {
    pub line: u32,
    pub column: usize,
    pub context: String,
}

impl ParseDetail {
    pub fn new<C: Into<String>>(line: u32, column: usize, context: C) -> Self {
        Self {
            line,
            column,
            context: context.into(),
        }
    }
}

impl std::fmt::Display for ParseDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {}, column {}: expected {}",
            self.line, self.column, self.context
        )
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Expected {0} args; found values {}", unwords(.1))]
    NumArgs(usize, Vec<Value>),
    #[error("Invalid type: expected {0}, found {1}")]
    TypeMismatch(String, Value),
    #[error("Parse error at {0}")]
    Parser(ParseDetail),
    #[error("{0}: {1}")]
    BadSpecialForm(String, Value),
    #[error("{0}: {1}")]
    NotFunction(String, String),
    #[error("{0}: {1}")]
    UnboundVar(String, String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("{0}")]
    Default(String),
}

fn unwords(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn num_args<I: Into<Vec<Value>>>(expected: usize, found: I) -> Error {
    Error::NumArgs(expected, found.into())
}

pub fn type_mismatch<T: Into<String>>(expected: T, found: &Value) -> Error {
    Error::TypeMismatch(expected.into(), found.clone())
}

pub fn bad_special_form<T: Into<String>>(message: T, form: &Value) -> Error {
    Error::BadSpecialForm(message.into(), form.clone())
}

pub fn not_function<M: Into<String>, N: Into<String>>(message: M, name: N) -> Error {
    Error::NotFunction(message.into(), name.into())
}

pub fn unbound_var<M: Into<String>, N: Into<String>>(message: M, name: N) -> Error {
    Error::UnboundVar(message.into(), name.into())
}

pub fn io_error<T: std::fmt::Display>(e: T) -> Error {
    Error::Io(e.to_string())
}

pub fn default_error<T: Into<String>>(message: T) -> Error {
    Error::Default(message.into())
}
