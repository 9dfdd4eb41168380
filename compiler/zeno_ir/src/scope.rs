//! Lexical scope stack.
//!
//! Lookup walks from the innermost scope outwards and returns the first
//! binding found. Popped scopes are kept and reused by the next push.

use crate::map::IndexMap;
use crate::Name;

pub struct ScopeStack<V> {
    scopes: Vec<IndexMap<Name, V>>,
    spare: Vec<IndexMap<Name, V>>,
}

impl<V> Default for ScopeStack<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ScopeStack<V> {
    pub fn new() -> Self {
        ScopeStack {
            scopes: Vec::new(),
            spare: Vec::new(),
        }
    }

    /// Number of open scopes.
    #[inline]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn push(&mut self) {
        let scope = self.spare.pop().unwrap_or_default();
        self.scopes.push(scope);
    }

    /// # Panics
    ///
    /// Panics if no scope is open.
    pub fn pop(&mut self) {
        match self.scopes.pop() {
            Some(mut scope) => {
                scope.clear();
                self.spare.push(scope);
            }
            None => panic!("pop on an empty scope stack"),
        }
    }

    /// Bind `name` in the innermost scope, shadowing outer bindings.
    ///
    /// # Panics
    ///
    /// Panics if no scope is open.
    pub fn insert(&mut self, name: Name, value: V) {
        match self.scopes.last_mut() {
            Some(scope) => {
                scope.set(name, value);
            }
            None => panic!("insert into an empty scope stack"),
        }
    }

    pub fn lookup(&self, name: Name) -> Option<&V> {
        self.scopes.iter().rev().find_map(|scope| scope.get(&name))
    }
}

#[cfg(test)]
mod tests;
