use crate::core::{binary_procedure, unary_procedure};
use crate::error;
use crate::value::Value;
use crate::Interpreter;

pub fn register(interpreter: &mut Interpreter) {
    super::register_primitive!(interpreter, "car", car);
    super::register_primitive!(interpreter, "cdr", cdr);
    super::register_primitive!(interpreter, "cons", cons);
}

fn car(args: Vec<Value>) -> crate::Result<Value> {
    match unary_procedure(&args)? {
        Value::List(elements) if !elements.is_empty() => Ok(elements[0].clone()),
        Value::ImproperList(head, _) => Ok(head[0].clone()),
        v => Err(error::type_mismatch("pair", v)),
    }
}

fn cdr(args: Vec<Value>) -> crate::Result<Value> {
    match unary_procedure(&args)? {
        Value::List(elements) if !elements.is_empty() => Ok(Value::list(elements[1..].to_vec())),
        Value::ImproperList(head, tail) if head.len() == 1 => Ok((**tail).clone()),
        Value::ImproperList(head, tail) => {
            Ok(Value::improper_list(head[1..].to_vec(), (**tail).clone()))
        }
        v => Err(error::type_mismatch("pair", v)),
    }
}

fn cons(args: Vec<Value>) -> crate::Result<Value> {
    let (head, tail) = binary_procedure(&args)?;

    match tail {
        Value::List(elements) => {
            let mut out = Vec::with_capacity(elements.len() + 1);
            out.push(head.clone());
            out.extend(elements.iter().cloned());
            Ok(Value::list(out))
        }
        tail => Ok(Value::improper_list(vec![head.clone()], tail.clone())),
    }
}
