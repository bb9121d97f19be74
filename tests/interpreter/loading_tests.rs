use crate::helpers::*;
use arbor::value::Value;
use arbor::Interpreter;

fn scratch_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("arbor-{}-{}", std::process::id(), name))
}

#[test]
fn test_load_evaluates_a_program() {
    let path = scratch_path("load.scm");
    std::fs::write(&path, "(define x 40)\n(+ x 2)\n").unwrap();

    let mut interpreter = Interpreter::new();
    let code = format!("(load \"{}\")", path.display());
    assert_result_eq(&mut interpreter, &code, Value::fixnum(42));

    // definitions from the file stay visible
    assert_result_eq(&mut interpreter, "x", Value::fixnum(40));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_run_file() {
    let path = scratch_path("run.scm");
    std::fs::write(&path, "(define (dbl n) (* n 2))\n(dbl 21)\n").unwrap();

    let mut interpreter = Interpreter::new();
    assert_eq!(interpreter.run_file(&path).unwrap(), Value::fixnum(42));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_missing_file() {
    let mut interpreter = Interpreter::new();

    let result = run_code(&mut interpreter, "(load \"no-such-file.scm\")");
    assert_matches!(result, Err(Error::Io(_)));
}

#[test]
fn test_load_requires_a_string() {
    let mut interpreter = Interpreter::new();

    let result = run_code(&mut interpreter, "(load 'file)");
    assert_matches!(result, Err(Error::TypeMismatch(expected, _)) if expected == "string");
}

#[test]
fn test_read_contents_and_read_all() {
    let path = scratch_path("contents.scm");
    std::fs::write(&path, "(+ 1 2) foo").unwrap();

    let mut interpreter = Interpreter::new();

    let code = format!("(read-contents \"{}\")", path.display());
    assert_result_eq(&mut interpreter, &code, Value::string("(+ 1 2) foo"));

    let code = format!("(read-all \"{}\")", path.display());
    assert_result_eq(
        &mut interpreter,
        &code,
        Value::list(vec![
            Value::list(vec![Value::symbol("+"), Value::fixnum(1), Value::fixnum(2)]),
            Value::symbol("foo"),
        ]),
    );

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_ports_round_trip() {
    let path = scratch_path("port.scm");
    let mut interpreter = Interpreter::new();

    let code = format!(
        r#"
        (define out (open-output-file "{path}"))
        (write "hello" out)
        (close-output-port out)
        "#,
        path = path.display()
    );
    assert_result_eq(&mut interpreter, &code, Value::boolean(true));

    let code = format!(
        r#"
        (define in (open-input-file "{path}"))
        (read in)
        "#,
        path = path.display()
    );
    assert_result_eq(&mut interpreter, &code, Value::string("hello"));

    assert_result_eq(&mut interpreter, "(close-input-port in)", Value::boolean(true));
    // closing twice is fine, closing a non-port answers #f
    assert_result_eq(&mut interpreter, "(close-input-port in)", Value::boolean(true));
    assert_result_eq(&mut interpreter, "(close-input-port 3)", Value::boolean(false));

    // the handle is gone after close
    let result = run_code(&mut interpreter, "(read in)");
    assert_matches!(result, Err(Error::Default(_)));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_open_missing_input_file() {
    let mut interpreter = Interpreter::new();

    let result = run_code(&mut interpreter, "(open-input-file \"no-such-file.scm\")");
    assert_matches!(result, Err(Error::Io(_)));
}
