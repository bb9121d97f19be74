use crate::core::{binary_procedure, unpack_string};
use crate::value::Value;
use crate::Interpreter;

pub fn register(interpreter: &mut Interpreter) {
    super::register_primitive!(interpreter, "string=?", string_eq);
    super::register_primitive!(interpreter, "string<?", string_lt);
    super::register_primitive!(interpreter, "string>?", string_gt);
    super::register_primitive!(interpreter, "string<=?", string_le);
    super::register_primitive!(interpreter, "string>=?", string_ge);
}

fn string_comparison<F>(args: Vec<Value>, op: F) -> crate::Result<Value>
where
    F: Fn(&str, &str) -> bool,
{
    let (lhs, rhs) = binary_procedure(&args)?;

    Ok(Value::boolean(op(
        &unpack_string(lhs)?,
        &unpack_string(rhs)?,
    )))
}

fn string_eq(args: Vec<Value>) -> crate::Result<Value> {
    string_comparison(args, |lhs, rhs| lhs == rhs)
}

fn string_lt(args: Vec<Value>) -> crate::Result<Value> {
    string_comparison(args, |lhs, rhs| lhs < rhs)
}

fn string_gt(args: Vec<Value>) -> crate::Result<Value> {
    string_comparison(args, |lhs, rhs| lhs > rhs)
}

fn string_le(args: Vec<Value>) -> crate::Result<Value> {
    string_comparison(args, |lhs, rhs| lhs <= rhs)
}

fn string_ge(args: Vec<Value>) -> crate::Result<Value> {
    string_comparison(args, |lhs, rhs| lhs >= rhs)
}
