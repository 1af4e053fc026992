use std::{cell::RefCell, collections::HashMap, rc::Rc};

use super::object::Value;

/// A chained name→value scope. Lookups walk outward through the parent
/// link; writes always target the innermost map, never an ancestor.
///
/// Environments are handed around as `Rc<RefCell<Environment>>`: a scope
/// stays alive as long as any closure or active call frame still refers to
/// it, which is what lets a returned function keep using its defining
/// scope.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// The top-level scope. One of these is created per session and shared
    /// across successive evaluations so bindings persist.
    pub fn new() -> Self {
        Environment {
            store: HashMap::new(),
            outer: None,
        }
    }

    /// A child scope. Function calls pass the callee's *captured*
    /// environment here (not the caller's), which is what makes closures
    /// resolve definition-time scope.
    pub fn new_enclosed(outer: Rc<RefCell<Environment>>) -> Self {
        Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self
                .outer
                .as_ref()
                .and_then(|outer| outer.borrow().get(name)),
        }
    }

    pub fn set(&mut self, name: String, value: Value) {
        self.store.insert(name, value);
    }
}
