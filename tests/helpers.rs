use arbor::value::Value;
use arbor::Interpreter;
pub use arbor::Error;
pub use arbor::Result;
pub use matches::assert_matches;

pub fn run_code(interpreter: &mut Interpreter, code: &str) -> Result<Value> {
    interpreter.run_string(code)
}

pub fn assert_result_eq(interpreter: &mut Interpreter, code: &str, expected: Value) {
    assert_eq!(run_code(interpreter, code).unwrap(), expected)
}

/// What the REPL would print for the result of `code`.
pub fn printed_result(interpreter: &mut Interpreter, code: &str) -> String {
    let result = run_code(interpreter, code).unwrap();
    interpreter.write(&result)
}
