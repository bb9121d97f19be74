use crate::interpreter::environment::EnvironmentRef;
use crate::interpreter::Interpreter;
use crate::value::Value;
use std::rc::Rc;

/// Everything the evaluator can apply.
#[derive(Debug, Clone)]
pub enum Procedure {
    /// Pure builtin, computes from its arguments alone
    Primitive(Rc<Primitive>),
    /// Effectful builtin, may touch the host and re-enter the evaluator
    Io(Rc<IoPrimitive>),
    /// User procedure closing over its defining environment
    Lambda(Rc<Lambda>),
}

impl Procedure {
    pub fn primitive(proc: Primitive) -> Self {
        Self::Primitive(Rc::new(proc))
    }

    pub fn io(proc: IoPrimitive) -> Self {
        Self::Io(Rc::new(proc))
    }

    pub fn lambda(
        params: Vec<String>,
        vararg: Option<String>,
        body: Vec<Value>,
        env: EnvironmentRef,
    ) -> Self {
        Self::Lambda(Rc::new(Lambda {
            params,
            vararg,
            body,
            env,
        }))
    }
}

// procedures are equal only to themselves
impl PartialEq for Procedure {
    fn eq(&self, other: &Procedure) -> bool {
        match (self, other) {
            (Self::Primitive(lhs), Self::Primitive(rhs)) => Rc::ptr_eq(lhs, rhs),
            (Self::Io(lhs), Self::Io(rhs)) => Rc::ptr_eq(lhs, rhs),
            (Self::Lambda(lhs), Self::Lambda(rhs)) => Rc::ptr_eq(lhs, rhs),
            _ => false,
        }
    }
}

pub type PrimitiveImpl = dyn Fn(Vec<Value>) -> crate::Result<Value>;

pub struct Primitive {
    pub name: String,
    proc: Box<PrimitiveImpl>,
}

impl Primitive {
    pub fn new<S, I>(name: S, op: I) -> Self
    where
        S: Into<String>,
        I: 'static + Fn(Vec<Value>) -> crate::Result<Value>,
    {
        Self {
            name: name.into(),
            proc: Box::new(op),
        }
    }

    pub fn call(&self, arguments: Vec<Value>) -> crate::Result<Value> {
        (self.proc)(arguments)
    }
}

impl std::fmt::Debug for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format!("Primitive({})", self.name))
    }
}

pub type IoPrimitiveImpl = dyn Fn(&mut Interpreter, Vec<Value>) -> crate::Result<Value>;

pub struct IoPrimitive {
    pub name: String,
    proc: Box<IoPrimitiveImpl>,
}

impl IoPrimitive {
    pub fn new<S, I>(name: S, op: I) -> Self
    where
        S: Into<String>,
        I: 'static + Fn(&mut Interpreter, Vec<Value>) -> crate::Result<Value>,
    {
        Self {
            name: name.into(),
            proc: Box::new(op),
        }
    }

    pub fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Value>) -> crate::Result<Value> {
        (self.proc)(interpreter, arguments)
    }
}

impl std::fmt::Debug for IoPrimitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format!("IoPrimitive({})", self.name))
    }
}

pub struct Lambda {
    pub params: Vec<String>,
    pub vararg: Option<String>,
    pub body: Vec<Value>,
    pub env: EnvironmentRef,
}

// the captured environment may reach back to this very lambda, so Debug
// stays shallow
impl std::fmt::Debug for Lambda {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format!(
            "Lambda(params: {:?}, vararg: {:?})",
            self.params, self.vararg
        ))
    }
}
