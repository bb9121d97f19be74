pub mod environment;

use crate::core;
use crate::error;
use crate::reader;
use crate::value::procedure::{IoPrimitive, Lambda, Primitive, Procedure};
use crate::value::Value;
use crate::writer::Writer;
use self::environment::{Environment, EnvironmentRef};
use log::debug;

/// The tree walker.
///
/// Owns the global environment with the builtin table and interprets
/// `Value` trees directly: lists are combinations, symbols are variable
/// references, everything else evaluates to itself.
pub struct Interpreter {
    global: EnvironmentRef,
    writer: Writer,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        let mut interpreter = Self {
            global: Environment::new().into_ref(),
            writer: Writer,
        };
        core::register(&mut interpreter);
        interpreter
    }

    pub fn global_env(&self) -> EnvironmentRef {
        self.global.clone()
    }

    pub fn define_global(&mut self, name: &str, value: Value) {
        self.global.borrow_mut().define(name, value);
    }

    pub fn register_primitive(&mut self, primitive: Primitive) {
        let name = primitive.name.clone();
        self.define_global(&name, Value::Procedure(Procedure::primitive(primitive)));
    }

    pub fn register_io_primitive(&mut self, primitive: IoPrimitive) {
        let name = primitive.name.clone();
        self.define_global(&name, Value::Procedure(Procedure::io(primitive)));
    }

    pub fn binding_names(&self) -> Vec<String> {
        self.global.borrow().binding_names()
    }

    pub fn write(&self, value: &Value) -> String {
        self.writer.external_representation(value)
    }

    /// Parse `source` as a program and evaluate its forms in order,
    /// returning the value of the last one.
    pub fn run_string(&mut self, source: &str) -> crate::Result<Value> {
        let program = reader::parse_program(source)?;
        let env = self.global.clone();
        self.eval_sequence(&env, &program)
    }

    pub fn run_file<P: AsRef<std::path::Path>>(&mut self, path: P) -> crate::Result<Value> {
        let env = self.global.clone();
        self.load(&env, &path.as_ref().to_string_lossy())
    }

    pub fn load(&mut self, env: &EnvironmentRef, path: &str) -> crate::Result<Value> {
        debug!("loading {}", path);
        let source = std::fs::read_to_string(path).map_err(error::io_error)?;
        let program = reader::parse_program(&source)?;
        self.eval_sequence(env, &program)
    }

    fn eval_sequence(&mut self, env: &EnvironmentRef, forms: &[Value]) -> crate::Result<Value> {
        let mut result = Value::boolean(false);
        for form in forms {
            result = self.eval(env, form)?;
        }
        Ok(result)
    }

    pub fn eval(&mut self, env: &EnvironmentRef, form: &Value) -> crate::Result<Value> {
        match form {
            Value::Symbol(name) => env
                .borrow()
                .get(name)
                .ok_or_else(|| error::unbound_var("Getting an unbound variable", name)),
            Value::List(elements) => self.eval_combination(env, form, elements),
            Value::ImproperList(_, _) => {
                Err(error::bad_special_form("Unrecognized special form", form))
            }
            self_evaluating => Ok(self_evaluating.clone()),
        }
    }

    // Special forms dispatch structurally before anything is treated as an
    // application.
    fn eval_combination(
        &mut self,
        env: &EnvironmentRef,
        form: &Value,
        elements: &[Value],
    ) -> crate::Result<Value> {
        match elements {
            [] => Err(error::bad_special_form("Unrecognized special form", form)),
            [Value::Symbol(operator), rest @ ..] => match (operator.as_str(), rest) {
                ("quote", [datum]) => Ok(datum.clone()),
                ("quote", _) => Err(error::bad_special_form("Malformed quote", form)),
                ("if", [predicate, consequent, alternative]) => {
                    self.eval_if(env, predicate, consequent, alternative)
                }
                ("if", _) => Err(error::bad_special_form("Malformed if", form)),
                ("set!", [Value::Symbol(name), expr]) => {
                    let value = self.eval(env, expr)?;
                    env.borrow_mut().set(name, value)
                }
                ("set!", _) => Err(error::bad_special_form("Malformed set!", form)),
                ("define", [Value::Symbol(name), expr]) => {
                    let value = self.eval(env, expr)?;
                    env.borrow_mut().define(name, value.clone());
                    Ok(value)
                }
                ("define", [Value::List(signature), body @ ..]) => {
                    self.eval_define_procedure(env, form, signature, None, body)
                }
                ("define", [Value::ImproperList(signature, vararg), body @ ..]) => {
                    self.eval_define_procedure(env, form, signature, Some(vararg.as_ref()), body)
                }
                ("define", _) => Err(error::bad_special_form("Malformed define", form)),
                ("lambda", [formals, body @ ..]) => self.eval_lambda(env, form, formals, body),
                ("lambda", _) => Err(error::bad_special_form("Malformed lambda", form)),
                ("cond", clauses) => self.eval_cond(env, clauses),
                ("load", [Value::String(path)]) => {
                    let path = path.clone();
                    self.load(env, &path)
                }
                ("load", [other]) => Err(error::type_mismatch("string", other)),
                ("load", _) => Err(error::bad_special_form("Malformed load", form)),
                _ => self.eval_application(env, &elements[0], rest),
            },
            [operator, operands @ ..] => self.eval_application(env, operator, operands),
        }
    }

    fn eval_if(
        &mut self,
        env: &EnvironmentRef,
        predicate: &Value,
        consequent: &Value,
        alternative: &Value,
    ) -> crate::Result<Value> {
        match self.eval(env, predicate)? {
            Value::Bool(false) => self.eval(env, alternative),
            Value::Bool(true) => self.eval(env, consequent),
            v => Err(error::type_mismatch("bool", &v)),
        }
    }

    fn eval_define_procedure(
        &mut self,
        env: &EnvironmentRef,
        form: &Value,
        signature: &[Value],
        vararg: Option<&Value>,
        body: &[Value],
    ) -> crate::Result<Value> {
        match signature {
            [Value::Symbol(name), params @ ..] => {
                let lambda = self.make_lambda(env, form, params, vararg, body)?;
                env.borrow_mut().define(name, lambda.clone());
                Ok(lambda)
            }
            _ => Err(error::bad_special_form("Malformed define", form)),
        }
    }

    fn eval_lambda(
        &mut self,
        env: &EnvironmentRef,
        form: &Value,
        formals: &Value,
        body: &[Value],
    ) -> crate::Result<Value> {
        match formals {
            Value::List(params) => self.make_lambda(env, form, params, None, body),
            Value::ImproperList(params, vararg) => {
                self.make_lambda(env, form, params, Some(vararg.as_ref()), body)
            }
            Value::Symbol(_) => self.make_lambda(env, form, &[], Some(formals), body),
            _ => Err(error::bad_special_form("Malformed formals list", form)),
        }
    }

    fn make_lambda(
        &self,
        env: &EnvironmentRef,
        form: &Value,
        params: &[Value],
        vararg: Option<&Value>,
        body: &[Value],
    ) -> crate::Result<Value> {
        if body.is_empty() {
            return Err(error::bad_special_form("Body must be non-empty", form));
        }

        let mut names = Vec::with_capacity(params.len());
        for param in params {
            match param {
                Value::Symbol(name) => names.push(name.clone()),
                _ => return Err(error::bad_special_form("Malformed formals list", form)),
            }
        }

        let rest = match vararg {
            Some(Value::Symbol(name)) => Some(name.clone()),
            Some(_) => return Err(error::bad_special_form("Malformed formals list", form)),
            None => None,
        };

        Ok(Value::Procedure(Procedure::lambda(
            names,
            rest,
            body.to_vec(),
            env.clone(),
        )))
    }

    // Clauses are tried in order; `else` matches unconditionally and is only
    // permitted as the last clause.
    fn eval_cond(&mut self, env: &EnvironmentRef, clauses: &[Value]) -> crate::Result<Value> {
        for (index, clause) in clauses.iter().enumerate() {
            let elements = clause
                .list_slice()
                .ok_or_else(|| error::num_args(2, vec![clause.clone()]))?;

            match elements {
                [Value::Symbol(keyword), expr] if keyword == "else" => {
                    if index + 1 != clauses.len() {
                        return Err(error::bad_special_form(
                            "else clause must be last in cond",
                            clause,
                        ));
                    }
                    return self.eval(env, expr);
                }
                [test, expr] => match self.eval(env, test)? {
                    Value::Bool(true) => return self.eval(env, expr),
                    Value::Bool(false) => (),
                    v => return Err(error::type_mismatch("bool", &v)),
                },
                _ => return Err(error::num_args(2, elements.to_vec())),
            }
        }

        Err(error::default_error("Not viable alternative in cond"))
    }

    // Strict left to right evaluation: the operator first, then every
    // operand, then the application itself.
    fn eval_application(
        &mut self,
        env: &EnvironmentRef,
        operator: &Value,
        operands: &[Value],
    ) -> crate::Result<Value> {
        let callee = self.eval(env, operator)?;

        let mut args = Vec::with_capacity(operands.len());
        for operand in operands {
            args.push(self.eval(env, operand)?);
        }

        self.apply(&callee, args)
    }

    pub fn apply(&mut self, callee: &Value, args: Vec<Value>) -> crate::Result<Value> {
        match callee {
            Value::Procedure(Procedure::Primitive(primitive)) => primitive.call(args),
            Value::Procedure(Procedure::Io(primitive)) => {
                let primitive = primitive.clone();
                primitive.call(self, args)
            }
            Value::Procedure(Procedure::Lambda(lambda)) => {
                let lambda = lambda.clone();
                self.apply_lambda(&lambda, args)
            }
            v => Err(error::not_function(
                "Attempted to apply a non-function",
                v.to_string(),
            )),
        }
    }

    fn apply_lambda(&mut self, lambda: &Lambda, args: Vec<Value>) -> crate::Result<Value> {
        let fixed = lambda.params.len();
        let arity_mismatch = match lambda.vararg {
            None => args.len() != fixed,
            Some(_) => args.len() < fixed,
        };
        if arity_mismatch {
            return Err(error::num_args(fixed, args));
        }

        let mut bindings: Vec<(String, Value)> = lambda
            .params
            .iter()
            .cloned()
            .zip(args.iter().take(fixed).cloned())
            .collect();

        if let Some(rest) = &lambda.vararg {
            bindings.push((rest.clone(), Value::list(args[fixed..].to_vec())));
        }

        let frame = Environment::extend(lambda.env.clone(), bindings);
        self.eval_sequence(&frame, &lambda.body)
    }
}
