use crate::helpers::*;
use arbor::value::Value;
use arbor::Interpreter;

#[test]
fn test_lambda_fixed_arity() {
    let mut interpreter = Interpreter::new();

    assert_result_eq(&mut interpreter, "((lambda (x) x) #f)", Value::boolean(false));
    assert_result_eq(
        &mut interpreter,
        "(define id (lambda (x) x)) (id #t)",
        Value::boolean(true),
    );

    let result = run_code(&mut interpreter, "((lambda (x) x))");
    assert_matches!(result, Err(Error::NumArgs(1, _)));

    let result = run_code(&mut interpreter, "((lambda (x) x) 1 2)");
    assert_matches!(result, Err(Error::NumArgs(1, _)));
}

#[test]
fn test_lambda_formals() {
    let mut interpreter = Interpreter::new();

    assert_result_eq(
        &mut interpreter,
        "(define test (lambda x x)) (test)",
        Value::list(vec![]),
    );
    assert_result_eq(
        &mut interpreter,
        "(define test (lambda x x)) (test 1 2)",
        Value::list(vec![Value::fixnum(1), Value::fixnum(2)]),
    );

    assert_result_eq(
        &mut interpreter,
        "(define test (lambda (x . rest) rest)) (test 1)",
        Value::list(vec![]),
    );
    assert_result_eq(
        &mut interpreter,
        "(define test (lambda (x . rest) rest)) (test 1 2 3)",
        Value::list(vec![Value::fixnum(2), Value::fixnum(3)]),
    );

    // a vararg procedure still requires its fixed parameters
    let result = run_code(&mut interpreter, "(define test (lambda (x y . rest) x)) (test 1)");
    assert_matches!(result, Err(Error::NumArgs(2, _)));
}

#[test]
fn test_define_procedure_forms() {
    let mut interpreter = Interpreter::new();

    assert_result_eq(
        &mut interpreter,
        "(define (snd a b) b) (snd 1 2)",
        Value::fixnum(2),
    );
    assert_result_eq(
        &mut interpreter,
        "(define (rest a . more) more) (rest 1 2 3)",
        Value::list(vec![Value::fixnum(2), Value::fixnum(3)]),
    );
}

#[test]
fn test_closures_capture_their_definition_scope() {
    let mut interpreter = Interpreter::new();

    assert_result_eq(
        &mut interpreter,
        r#"
        (define (make-adder n) (lambda (x) (+ x n)))
        (define add2 (make-adder 2))
        (define n 100)
        (add2 1)
        "#,
        Value::fixnum(3),
    );
}

#[test]
fn test_set_is_visible_through_captured_frames() {
    let mut interpreter = Interpreter::new();

    assert_result_eq(
        &mut interpreter,
        r#"
        (define x 1)
        (define get (lambda () x))
        (set! x 2)
        (get)
        "#,
        Value::fixnum(2),
    );
}

#[test]
fn test_counter_closure() {
    let mut interpreter = Interpreter::new();

    assert_result_eq(
        &mut interpreter,
        r#"
        (define (mk) (define x 0) (lambda () (set! x (+ x 1)) x))
        (define c (mk))
        (c) (c) (c)
        "#,
        Value::fixnum(3),
    );
}

#[test]
fn test_counters_are_independent() {
    let mut interpreter = Interpreter::new();

    assert_result_eq(
        &mut interpreter,
        r#"
        (define (mk) (define x 0) (lambda () (set! x (+ x 1)) x))
        (define a (mk))
        (define b (mk))
        (a) (a)
        (b)
        "#,
        Value::fixnum(1),
    );
}

#[test]
fn test_inner_define_shadows_without_leaking() {
    let mut interpreter = Interpreter::new();

    assert_result_eq(
        &mut interpreter,
        r#"
        (define x 1)
        (define (shadow) (define x 2) x)
        (shadow)
        x
        "#,
        Value::fixnum(1),
    );
}

#[test]
fn test_set_inside_lambda_reaches_outward() {
    let mut interpreter = Interpreter::new();

    assert_result_eq(
        &mut interpreter,
        r#"
        (define x 1)
        (define (bump) (set! x (+ x 1)))
        (bump) (bump)
        x
        "#,
        Value::fixnum(3),
    );
}
