use crate::core::unary_procedure;
use crate::error;
use crate::reader;
use crate::value::port::Port;
use crate::value::Value;
use crate::Interpreter;
use std::fs::File;
use std::io::BufRead;
use std::rc::Rc;

pub fn register(interpreter: &mut Interpreter) {
    super::register_io_primitive!(interpreter, "apply", apply);
    super::register_io_primitive!(interpreter, "open-input-file", open_input_file);
    super::register_io_primitive!(interpreter, "open-output-file", open_output_file);
    super::register_io_primitive!(interpreter, "close-input-port", close_port);
    super::register_io_primitive!(interpreter, "close-output-port", close_port);
    super::register_io_primitive!(interpreter, "read", read);
    super::register_io_primitive!(interpreter, "write", write);
    super::register_io_primitive!(interpreter, "read-contents", read_contents);
    super::register_io_primitive!(interpreter, "read-all", read_all);
}

// (apply f (a b c)) or (apply f a b c)
fn apply(interpreter: &mut Interpreter, args: Vec<Value>) -> crate::Result<Value> {
    match args.as_slice() {
        [] => Err(error::num_args(2, vec![])),
        [callee, Value::List(elements)] => {
            let callee = callee.clone();
            let elements = elements.clone();
            interpreter.apply(&callee, elements)
        }
        [callee, rest @ ..] => {
            let callee = callee.clone();
            let rest = rest.to_vec();
            interpreter.apply(&callee, rest)
        }
    }
}

fn open_input_file(_interpreter: &mut Interpreter, args: Vec<Value>) -> crate::Result<Value> {
    match unary_procedure(&args)? {
        Value::String(path) => {
            let file = File::open(path).map_err(error::io_error)?;
            Ok(Value::Port(Rc::new(Port::input(file))))
        }
        v => Err(error::type_mismatch("string", v)),
    }
}

fn open_output_file(_interpreter: &mut Interpreter, args: Vec<Value>) -> crate::Result<Value> {
    match unary_procedure(&args)? {
        Value::String(path) => {
            let file = File::create(path).map_err(error::io_error)?;
            Ok(Value::Port(Rc::new(Port::output(file))))
        }
        v => Err(error::type_mismatch("string", v)),
    }
}

// closing is idempotent and answers whether the argument was a port at all
fn close_port(_interpreter: &mut Interpreter, args: Vec<Value>) -> crate::Result<Value> {
    match unary_procedure(&args)? {
        Value::Port(port) => {
            port.close();
            Ok(Value::boolean(true))
        }
        _ => Ok(Value::boolean(false)),
    }
}

// one line from the port (stdin when absent), parsed as a single expression
fn read(_interpreter: &mut Interpreter, args: Vec<Value>) -> crate::Result<Value> {
    match args.as_slice() {
        [] => {
            let mut line = String::new();
            let read = std::io::stdin()
                .lock()
                .read_line(&mut line)
                .map_err(error::io_error)?;
            if read == 0 {
                return Err(error::io_error("unexpected end of file"));
            }
            reader::parse(&line)
        }
        [Value::Port(port)] => {
            let line = port.read_line()?;
            reader::parse(&line)
        }
        [v] => Err(error::type_mismatch("port", v)),
        rest => Err(error::num_args(1, rest.to_vec())),
    }
}

// canonical print to the port (stdout when absent); yields #t
fn write(interpreter: &mut Interpreter, args: Vec<Value>) -> crate::Result<Value> {
    match args.as_slice() {
        [v] => {
            println!("{}", interpreter.write(v));
            Ok(Value::boolean(true))
        }
        [v, Value::Port(port)] => {
            port.write_line(&interpreter.write(v))?;
            Ok(Value::boolean(true))
        }
        [_, other] => Err(error::type_mismatch("port", other)),
        rest => Err(error::num_args(1, rest.to_vec())),
    }
}

fn read_contents(_interpreter: &mut Interpreter, args: Vec<Value>) -> crate::Result<Value> {
    match unary_procedure(&args)? {
        Value::String(path) => {
            let contents = std::fs::read_to_string(path).map_err(error::io_error)?;
            Ok(Value::string(contents))
        }
        v => Err(error::type_mismatch("string", v)),
    }
}

fn read_all(_interpreter: &mut Interpreter, args: Vec<Value>) -> crate::Result<Value> {
    match unary_procedure(&args)? {
        Value::String(path) => {
            let contents = std::fs::read_to_string(path).map_err(error::io_error)?;
            Ok(Value::list(reader::parse_program(&contents)?))
        }
        v => Err(error::type_mismatch("string", v)),
    }
}
