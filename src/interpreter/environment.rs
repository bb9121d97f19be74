use crate::error;
use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared handle to a frame. Closures clone this handle, so a frame lives
/// as long as any closure that captured it and mutations through one handle
/// are visible through all of them.
pub type EnvironmentRef = Rc<RefCell<Environment>>;

/// One frame of the lexical scope chain.
#[derive(Debug, Default)]
pub struct Environment {
    parent: Option<EnvironmentRef>,
    bindings: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            parent: None,
            bindings: HashMap::new(),
        }
    }

    pub fn child(parent: EnvironmentRef) -> Self {
        Self {
            parent: Some(parent),
            bindings: HashMap::new(),
        }
    }

    pub fn into_ref(self) -> EnvironmentRef {
        Rc::new(RefCell::new(self))
    }

    /// Push a fresh frame populated with `bindings`; used for procedure
    /// application.
    pub fn extend(parent: EnvironmentRef, bindings: Vec<(String, Value)>) -> EnvironmentRef {
        let mut env = Self::child(parent);
        for (name, value) in bindings {
            env.define(&name, value);
        }
        env.into_ref()
    }

    /// Innermost-first lookup.
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.bindings.get(name) {
            Some(value) => Some(value.clone()),
            None => match &self.parent {
                Some(parent) => parent.borrow().get(name),
                None => None,
            },
        }
    }

    /// Overwrite the binding wherever it lives in the chain; defining a new
    /// binding is not `set`'s job.
    pub fn set(&mut self, name: &str, value: Value) -> crate::Result<Value> {
        if self.bindings.contains_key(name) {
            self.bindings.insert(name.to_string(), value.clone());
            Ok(value)
        } else {
            match &self.parent {
                Some(parent) => parent.borrow_mut().set(name, value),
                None => Err(error::unbound_var("Setting an unbound variable", name)),
            }
        }
    }

    /// Add to, or overwrite in, this innermost frame only.
    pub fn define(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), value);
    }

    /// All names visible from this frame; seeds REPL completion.
    pub fn binding_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.bindings.keys().cloned().collect();
        if let Some(parent) = &self.parent {
            names.extend(parent.borrow().binding_names());
        }
        names.sort();
        names.dedup();
        names
    }
}
