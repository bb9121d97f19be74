use crate::core::{binary_procedure, unpack_boolean, unpack_number, unpack_string};
use crate::value::equality::SchemeEqual;
use crate::value::Value;
use crate::Interpreter;

pub fn register(interpreter: &mut Interpreter) {
    super::register_primitive!(interpreter, "eq?", eq);
    super::register_primitive!(interpreter, "eqv?", eqv);
    super::register_primitive!(interpreter, "equal?", equal);
}

fn eq(args: Vec<Value>) -> crate::Result<Value> {
    let (lhs, rhs) = binary_procedure(&args)?;
    Ok(Value::boolean(lhs.is_eq(rhs)))
}

fn eqv(args: Vec<Value>) -> crate::Result<Value> {
    let (lhs, rhs) = binary_procedure(&args)?;
    Ok(Value::boolean(lhs.is_eqv(rhs)))
}

fn equal(args: Vec<Value>) -> crate::Result<Value> {
    let (lhs, rhs) = binary_procedure(&args)?;
    Ok(Value::boolean(is_deep_equal(lhs, rhs)))
}

/// Equality up to the weak coercions: leaves are `equal?` when `eqv?` holds
/// or when any one unpacker succeeds on both sides with the same result.
pub(crate) fn is_deep_equal(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::List(lhs), Value::List(rhs)) => {
            lhs.len() == rhs.len() && lhs.iter().zip(rhs.iter()).all(|(l, r)| is_deep_equal(l, r))
        }
        (Value::ImproperList(_, _), Value::ImproperList(_, _)) => {
            is_deep_equal(&lhs.clone().into_flattened(), &rhs.clone().into_flattened())
        }
        _ => lhs.is_eqv(rhs) || coerced_equal(lhs, rhs),
    }
}

// each unpacker is probed independently; a failed probe is just "not equal
// via this coercion"
fn coerced_equal(lhs: &Value, rhs: &Value) -> bool {
    if let (Ok(l), Ok(r)) = (unpack_number(lhs), unpack_number(rhs)) {
        if l == r {
            return true;
        }
    }

    if let (Ok(l), Ok(r)) = (unpack_string(lhs), unpack_string(rhs)) {
        if l == r {
            return true;
        }
    }

    if let (Ok(l), Ok(r)) = (unpack_boolean(lhs), unpack_boolean(rhs)) {
        if l == r {
            return true;
        }
    }

    false
}
