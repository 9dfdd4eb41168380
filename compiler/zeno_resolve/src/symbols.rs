//! Name environment for resolution.

use zeno_ir::ast::DeclId;
use zeno_ir::{Name, Prelude, ScopeStack};

/// Scope stack mapping names to declarations.
pub struct SymbolTable {
    scopes: ScopeStack<DeclId>,
}

impl SymbolTable {
    /// A table with no open scopes.
    pub fn new() -> Self {
        SymbolTable {
            scopes: ScopeStack::new(),
        }
    }

    /// A table with one open scope holding the prelude bindings.
    pub fn with_prelude(prelude: &Prelude) -> Self {
        let mut table = Self::new();
        table.push_scope();
        for entry in prelude.entries() {
            table.declare(entry.name, entry.binding);
        }
        table
    }

    pub fn depth(&self) -> usize {
        self.scopes.depth()
    }

    pub fn push_scope(&mut self) {
        self.scopes.push();
    }

    pub fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    pub fn declare(&mut self, name: Name, decl: DeclId) {
        self.scopes.insert(name, decl);
    }

    pub fn lookup(&self, name: Name) -> Option<DeclId> {
        self.scopes.lookup(name).copied()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
