use crate::core::{binary_procedure, unpack_boolean, unpack_number};
use crate::error;
use crate::value::Value;
use crate::Interpreter;
use num::bigint::BigInt;
use num::Integer;
use num::Zero;

pub fn register(interpreter: &mut Interpreter) {
    super::register_primitive!(interpreter, "+", add);
    super::register_primitive!(interpreter, "-", sub);
    super::register_primitive!(interpreter, "*", mul);
    super::register_primitive!(interpreter, "/", div);
    super::register_primitive!(interpreter, "mod", modulo);
    super::register_primitive!(interpreter, "quotient", quotient);
    super::register_primitive!(interpreter, "remainder", remainder);

    super::register_primitive!(interpreter, "=", num_eq);
    super::register_primitive!(interpreter, "<", num_lt);
    super::register_primitive!(interpreter, ">", num_gt);
    super::register_primitive!(interpreter, "/=", num_ne);
    super::register_primitive!(interpreter, ">=", num_ge);
    super::register_primitive!(interpreter, "<=", num_le);

    super::register_primitive!(interpreter, "&&", bool_and);
    super::register_primitive!(interpreter, "||", bool_or);
}

// Operators fold left over at least two fixnum operands.
fn numeric_fold<F>(args: Vec<Value>, op: F) -> crate::Result<Value>
where
    F: Fn(BigInt, BigInt) -> crate::Result<BigInt>,
{
    if args.len() < 2 {
        return Err(error::num_args(2, args));
    }

    let mut acc = unpack_number(&args[0])?;
    for operand in &args[1..] {
        acc = op(acc, unpack_number(operand)?)?;
    }

    Ok(Value::fixnum(acc))
}

fn nonzero(n: BigInt) -> crate::Result<BigInt> {
    if n.is_zero() {
        Err(error::default_error("division by zero"))
    } else {
        Ok(n)
    }
}

fn add(args: Vec<Value>) -> crate::Result<Value> {
    numeric_fold(args, |lhs, rhs| Ok(lhs + rhs))
}

fn sub(args: Vec<Value>) -> crate::Result<Value> {
    numeric_fold(args, |lhs, rhs| Ok(lhs - rhs))
}

fn mul(args: Vec<Value>) -> crate::Result<Value> {
    numeric_fold(args, |lhs, rhs| Ok(lhs * rhs))
}

// `/` floors while `quotient` truncates toward zero
fn div(args: Vec<Value>) -> crate::Result<Value> {
    numeric_fold(args, |lhs, rhs| Ok(lhs.div_floor(&nonzero(rhs)?)))
}

fn modulo(args: Vec<Value>) -> crate::Result<Value> {
    numeric_fold(args, |lhs, rhs| Ok(lhs.mod_floor(&nonzero(rhs)?)))
}

fn quotient(args: Vec<Value>) -> crate::Result<Value> {
    numeric_fold(args, |lhs, rhs| Ok(lhs / nonzero(rhs)?))
}

fn remainder(args: Vec<Value>) -> crate::Result<Value> {
    numeric_fold(args, |lhs, rhs| Ok(lhs % nonzero(rhs)?))
}

fn numeric_comparison<F>(args: Vec<Value>, op: F) -> crate::Result<Value>
where
    F: Fn(&BigInt, &BigInt) -> bool,
{
    let (lhs, rhs) = binary_procedure(&args)?;

    Ok(Value::boolean(op(
        &unpack_number(lhs)?,
        &unpack_number(rhs)?,
    )))
}

fn num_eq(args: Vec<Value>) -> crate::Result<Value> {
    numeric_comparison(args, |lhs, rhs| lhs == rhs)
}

fn num_lt(args: Vec<Value>) -> crate::Result<Value> {
    numeric_comparison(args, |lhs, rhs| lhs < rhs)
}

fn num_gt(args: Vec<Value>) -> crate::Result<Value> {
    numeric_comparison(args, |lhs, rhs| lhs > rhs)
}

fn num_ne(args: Vec<Value>) -> crate::Result<Value> {
    numeric_comparison(args, |lhs, rhs| lhs != rhs)
}

fn num_ge(args: Vec<Value>) -> crate::Result<Value> {
    numeric_comparison(args, |lhs, rhs| lhs >= rhs)
}

fn num_le(args: Vec<Value>) -> crate::Result<Value> {
    numeric_comparison(args, |lhs, rhs| lhs <= rhs)
}

fn boolean_binop<F>(args: Vec<Value>, op: F) -> crate::Result<Value>
where
    F: Fn(bool, bool) -> bool,
{
    let (lhs, rhs) = binary_procedure(&args)?;

    Ok(Value::boolean(op(
        unpack_boolean(lhs)?,
        unpack_boolean(rhs)?,
    )))
}

fn bool_and(args: Vec<Value>) -> crate::Result<Value> {
    boolean_binop(args, |lhs, rhs| lhs && rhs)
}

fn bool_or(args: Vec<Value>) -> crate::Result<Value> {
    boolean_binop(args, |lhs, rhs| lhs || rhs)
}
