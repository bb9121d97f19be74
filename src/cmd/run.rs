use crate::value::Value;
use crate::Interpreter;

/// File mode: evaluate `(load "<input>")` with the trailing command line
/// arguments bound to `args`, reporting the outcome on the diagnostic
/// stream.
pub fn execute(input: &str, args: &[String]) {
    let mut interpreter = Interpreter::new();

    let args = args
        .iter()
        .map(|arg| Value::string(arg.clone()))
        .collect::<Vec<_>>();
    interpreter.define_global("args", Value::list(args));

    let form = Value::list(vec![Value::symbol("load"), Value::string(input)]);
    let env = interpreter.global_env();

    match interpreter.eval(&env, &form) {
        Ok(v) => eprintln!("{}", interpreter.write(&v)),
        Err(e) => eprintln!("{}", e),
    }
}
