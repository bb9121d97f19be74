use crate::value::procedure::Procedure;
use crate::value::Value;

/// Canonical external representation of values.
pub struct Writer;

impl Writer {
    pub fn external_representation(&self, v: &Value) -> String {
        v.to_string()
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Symbol(name) => f.write_str(name),
            Value::Number(n) => write!(f, "{}", n),
            Value::Bool(true) => f.write_str("#t"),
            Value::Bool(false) => f.write_str("#f"),
            Value::Char(' ') => f.write_str("#\\space"),
            Value::Char('\n') => f.write_str("#\\newline"),
            Value::Char(c) => write!(f, "#\\{}", c),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::List(elements) => write!(f, "({})", unwords(elements)),
            Value::ImproperList(head, tail) => {
                write!(f, "({} . {})", unwords(head), tail)
            }
            Value::Vector(elements) => write!(f, "#({})", unwords(elements)),
            Value::Procedure(Procedure::Primitive(_)) => f.write_str("<primitive>"),
            Value::Procedure(Procedure::Io(_)) => f.write_str("<IO primitive>"),
            Value::Procedure(Procedure::Lambda(lambda)) => {
                let params = lambda.params.join(" ");
                match &lambda.vararg {
                    Some(rest) => write!(f, "(lambda ({} . {}) ...)", params, rest),
                    None => write!(f, "(lambda ({}) ...)", params),
                }
            }
            Value::Port(_) => f.write_str("<IO port>"),
        }
    }
}

fn unwords(elements: &[Value]) -> String {
    elements
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
