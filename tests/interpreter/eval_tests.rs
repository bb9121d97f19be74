use crate::helpers::*;
use arbor::value::Value;
use arbor::Interpreter;

#[test]
fn test_literals_self_evaluate() {
    let mut interpreter = Interpreter::new();

    assert_result_eq(&mut interpreter, "#t", Value::boolean(true));
    assert_result_eq(&mut interpreter, "#f", Value::boolean(false));
    assert_result_eq(&mut interpreter, "#\\c", Value::character('c'));
    assert_result_eq(&mut interpreter, "\"foo\"", Value::string("foo"));
    assert_result_eq(&mut interpreter, "3", Value::fixnum(3));
    assert_result_eq(&mut interpreter, "1.5", Value::flonum(1.5));
    assert_result_eq(
        &mut interpreter,
        "#(1 2)",
        Value::vector(vec![Value::fixnum(1), Value::fixnum(2)]),
    );
}

#[test]
fn test_radix_literals() {
    let mut interpreter = Interpreter::new();

    assert_result_eq(&mut interpreter, "#b1011", Value::fixnum(11));
    assert_result_eq(&mut interpreter, "#x1F", Value::fixnum(31));
    assert_result_eq(&mut interpreter, "#o17", Value::fixnum(15));
}

#[test]
fn test_quote() {
    let mut interpreter = Interpreter::new();

    assert_result_eq(&mut interpreter, "'foo", Value::symbol("foo"));
    assert_result_eq(&mut interpreter, "(quote foo)", Value::symbol("foo"));
    assert_result_eq(
        &mut interpreter,
        "'(1 2)",
        Value::list(vec![Value::fixnum(1), Value::fixnum(2)]),
    );
    assert_result_eq(
        &mut interpreter,
        "'(if #t 1 2)",
        Value::list(vec![
            Value::symbol("if"),
            Value::boolean(true),
            Value::fixnum(1),
            Value::fixnum(2),
        ]),
    );
}

#[test]
fn test_if_picks_one_branch() {
    let mut interpreter = Interpreter::new();

    assert_result_eq(&mut interpreter, "(if #f \"a\" \"b\")", Value::string("b"));
    assert_result_eq(&mut interpreter, "(if #t \"a\" \"b\")", Value::string("a"));

    // the untaken branch is never evaluated
    assert_result_eq(&mut interpreter, "(if #t 'ok (undefined))", Value::symbol("ok"));
}

#[test]
fn test_if_requires_a_boolean() {
    let mut interpreter = Interpreter::new();

    let result = run_code(&mut interpreter, "(if 0 \"a\" \"b\")");
    assert_matches!(result, Err(Error::TypeMismatch(expected, _)) if expected == "bool");
}

#[test]
fn test_define_returns_the_value() {
    let mut interpreter = Interpreter::new();

    assert_result_eq(&mut interpreter, "(define x 7)", Value::fixnum(7));
    assert_result_eq(&mut interpreter, "x", Value::fixnum(7));
}

#[test]
fn test_set_requires_an_existing_binding() {
    let mut interpreter = Interpreter::new();

    let result = run_code(&mut interpreter, "(set! nowhere 1)");
    assert_matches!(result, Err(Error::UnboundVar(_, _)));

    assert_result_eq(&mut interpreter, "(define x 1) (set! x 2)", Value::fixnum(2));
    assert_result_eq(&mut interpreter, "x", Value::fixnum(2));
}

#[test]
fn test_unbound_variable() {
    let mut interpreter = Interpreter::new();

    let result = run_code(&mut interpreter, "nowhere");
    assert_matches!(result, Err(Error::UnboundVar(_, name)) if name == "nowhere");
}

#[test]
fn test_recursive_define() {
    let mut interpreter = Interpreter::new();

    assert_result_eq(
        &mut interpreter,
        "(define (fact n) (if (= n 0) 1 (* n (fact (- n 1))))) (fact 5)",
        Value::fixnum(120),
    );
}

#[test]
fn test_cond_takes_the_first_true_clause() {
    let mut interpreter = Interpreter::new();

    assert_result_eq(
        &mut interpreter,
        "(cond ((= 1 2) 'a) ((= 1 1) 'b) (else 'c))",
        Value::symbol("b"),
    );
    assert_result_eq(
        &mut interpreter,
        "(cond ((= 1 2) 'a) ((= 3 4) 'b) (else 'c))",
        Value::symbol("c"),
    );
}

#[test]
fn test_cond_errors() {
    let mut interpreter = Interpreter::new();

    let result = run_code(&mut interpreter, "(cond ((= 1 2) 'a))");
    assert_matches!(result, Err(Error::Default(msg)) if msg == "Not viable alternative in cond");

    let result = run_code(&mut interpreter, "(cond (1 'a))");
    assert_matches!(result, Err(Error::TypeMismatch(expected, _)) if expected == "bool");

    let result = run_code(&mut interpreter, "(cond ((= 1 1) 'a 'b))");
    assert_matches!(result, Err(Error::NumArgs(2, _)));

    let result = run_code(&mut interpreter, "(cond (else 'a) ((= 1 1) 'b))");
    assert_matches!(result, Err(Error::BadSpecialForm(_, _)));
}

#[test]
fn test_bad_special_forms() {
    let mut interpreter = Interpreter::new();

    assert_matches!(
        run_code(&mut interpreter, "()"),
        Err(Error::BadSpecialForm(_, _))
    );
    assert_matches!(
        run_code(&mut interpreter, "(quote a b)"),
        Err(Error::BadSpecialForm(_, _))
    );
    assert_matches!(
        run_code(&mut interpreter, "(if #t)"),
        Err(Error::BadSpecialForm(_, _))
    );
    assert_matches!(
        run_code(&mut interpreter, "(lambda (x))"),
        Err(Error::BadSpecialForm(_, _))
    );
    assert_matches!(
        run_code(&mut interpreter, "(define)"),
        Err(Error::BadSpecialForm(_, _))
    );
}

#[test]
fn test_applying_a_non_function() {
    let mut interpreter = Interpreter::new();

    let result = run_code(&mut interpreter, "(1 2 3)");
    assert_matches!(result, Err(Error::NotFunction(_, _)));
}

#[test]
fn test_parse_errors_surface() {
    let mut interpreter = Interpreter::new();

    let result = run_code(&mut interpreter, "(+ 1");
    assert_matches!(result, Err(Error::Parser(_)));
}

#[test]
fn test_arguments_evaluate_left_to_right() {
    let mut interpreter = Interpreter::new();

    assert_result_eq(
        &mut interpreter,
        r#"
        (define trace '())
        (define (note n) (set! trace (cons n trace)) n)
        (+ (note 1) (note 2) (note 3))
        trace
        "#,
        Value::list(vec![Value::fixnum(3), Value::fixnum(2), Value::fixnum(1)]),
    );
}
