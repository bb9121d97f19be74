pub mod equivalence;
pub mod numbers;
pub mod pairs;
pub mod ports;
pub mod strings;

use crate::error;
use crate::value::number::Number;
use crate::value::Value;
use crate::Interpreter;
use num::bigint::BigInt;

macro_rules! register_primitive {
    ($interpreter:expr, $name:literal, $func:expr) => {
        $interpreter.register_primitive(crate::value::procedure::Primitive::new($name, $func))
    };
}

macro_rules! register_io_primitive {
    ($interpreter:expr, $name:literal, $func:expr) => {
        $interpreter.register_io_primitive(crate::value::procedure::IoPrimitive::new($name, $func))
    };
}

pub(crate) use register_io_primitive;
pub(crate) use register_primitive;

/// Populate the global environment with the builtin table.
pub fn register(interpreter: &mut Interpreter) {
    register_primitive!(interpreter, "symbol?", symbol_p);
    register_primitive!(interpreter, "string?", string_p);
    register_primitive!(interpreter, "number?", number_p);
    register_primitive!(interpreter, "bool?", bool_p);
    register_primitive!(interpreter, "list?", list_p);

    numbers::register(interpreter);
    strings::register(interpreter);
    pairs::register(interpreter);
    equivalence::register(interpreter);
    ports::register(interpreter);
}

// argument helpers

pub fn unary_procedure(args: &[Value]) -> crate::Result<&Value> {
    match args {
        [first] => Ok(first),
        _ => Err(error::num_args(1, args.to_vec())),
    }
}

pub fn binary_procedure(args: &[Value]) -> crate::Result<(&Value, &Value)> {
    match args {
        [first, second] => Ok((first, second)),
        _ => Err(error::num_args(2, args.to_vec())),
    }
}

// weakly typed unpackers shared by the operator table and `equal?`

/// Fixnums pass through, a string reading as an integer counts, and a
/// single-element list unwraps recursively.
pub fn unpack_number(v: &Value) -> crate::Result<BigInt> {
    match v {
        Value::Number(Number::Fixnum(n)) => Ok(n.clone()),
        Value::String(s) => s
            .parse::<BigInt>()
            .map_err(|_| error::type_mismatch("number", v)),
        Value::List(elements) if elements.len() == 1 => unpack_number(&elements[0]),
        _ => Err(error::type_mismatch("number", v)),
    }
}

/// Strings pass through, fixnums and booleans coerce to their printed form.
pub fn unpack_string(v: &Value) -> crate::Result<String> {
    match v {
        Value::String(s) => Ok(s.clone()),
        Value::Number(Number::Fixnum(n)) => Ok(n.to_string()),
        Value::Bool(b) => Ok(if *b { "#t" } else { "#f" }.to_string()),
        _ => Err(error::type_mismatch("string", v)),
    }
}

pub fn unpack_boolean(v: &Value) -> crate::Result<bool> {
    match v {
        Value::Bool(b) => Ok(*b),
        _ => Err(error::type_mismatch("boolean", v)),
    }
}

// type predicates

fn symbol_p(args: Vec<Value>) -> crate::Result<Value> {
    match unary_procedure(&args)? {
        Value::Symbol(_) => Ok(Value::boolean(true)),
        _ => Ok(Value::boolean(false)),
    }
}

fn string_p(args: Vec<Value>) -> crate::Result<Value> {
    match unary_procedure(&args)? {
        Value::String(_) => Ok(Value::boolean(true)),
        _ => Ok(Value::boolean(false)),
    }
}

fn number_p(args: Vec<Value>) -> crate::Result<Value> {
    match unary_procedure(&args)? {
        Value::Number(_) => Ok(Value::boolean(true)),
        _ => Ok(Value::boolean(false)),
    }
}

fn bool_p(args: Vec<Value>) -> crate::Result<Value> {
    match unary_procedure(&args)? {
        Value::Bool(_) => Ok(Value::boolean(true)),
        _ => Ok(Value::boolean(false)),
    }
}

// improper lists count as lists here
fn list_p(args: Vec<Value>) -> crate::Result<Value> {
    match unary_procedure(&args)? {
        Value::List(_) | Value::ImproperList(_, _) => Ok(Value::boolean(true)),
        _ => Ok(Value::boolean(false)),
    }
}
