//! Memoized constant evaluation, type lifting and expression typing.
//!
//! All three queries cache their answer in the context's side tables, the
//! "no answer" outcome included, so every expression is evaluated, lifted
//! and typed at most once per context. Errors are never cached: a failed
//! query leaves its slot empty.

use tracing::{debug, trace};
use zeno_ir::ast::{DeclKind, ExprId, ExprKind, Item, ItemId, SimpleTypeKind, Type, TypeId};
use zeno_ir::{AstContext, Name, Prelude, ScopeStack};
use zeno_stack::ensure_sufficient_stack;

use crate::TypeError;

/// A constant in scope.
#[derive(Copy, Clone, Debug)]
struct ConstBinding {
    value: ExprId,
    ty: TypeId,
}

pub struct TypeChecker<'ctx> {
    ctx: &'ctx mut AstContext,
    scopes: ScopeStack<ConstBinding>,
    /// Declared return type of the function body being typed.
    return_type: Option<TypeId>,
}

impl<'ctx> TypeChecker<'ctx> {
    /// A checker whose outermost scope holds the prelude constants.
    pub fn new(ctx: &'ctx mut AstContext, prelude: &Prelude) -> Self {
        let mut scopes = ScopeStack::new();
        scopes.push();
        for entry in prelude.entries() {
            if let DeclKind::Const { value, ty } = ctx.decl(entry.constant).kind {
                scopes.insert(entry.name, ConstBinding { value, ty });
            }
        }
        TypeChecker {
            ctx,
            scopes,
            return_type: None,
        }
    }

    pub fn ctx(&self) -> &AstContext {
        self.ctx
    }

    pub fn scope_depth(&self) -> usize {
        self.scopes.depth()
    }

    fn lookup(&self, expr: ExprId, name: Name) -> Result<ConstBinding, TypeError> {
        self.scopes
            .lookup(name)
            .copied()
            .ok_or(TypeError::UndeclaredName {
                name,
                pos: self.ctx.expr(expr).pos,
            })
    }

    // === Constant evaluation ===

    /// Canonical constant form of `expr`, or `None` if it has none.
    pub fn const_eval(&mut self, expr: ExprId) -> Result<Option<ExprId>, TypeError> {
        if let Some(memo) = self.ctx.const_eval_memo(expr) {
            return Ok(memo);
        }
        let value = ensure_sufficient_stack(|| self.const_eval_uncached(expr))?;
        self.ctx.set_const_eval_memo(expr, value);
        Ok(value)
    }

    fn const_eval_uncached(&mut self, expr: ExprId) -> Result<Option<ExprId>, TypeError> {
        let node = self.ctx.expr(expr);
        let pos = node.pos;
        match node.kind {
            ExprKind::IntLiteral(_) | ExprKind::SimpleType(_) => Ok(Some(expr)),
            ExprKind::Name(name) => Ok(Some(self.lookup(expr, name)?.value)),
            ExprKind::FunctionType { return_type } => {
                let Some(return_type) = self.const_eval(return_type)? else {
                    return Ok(None);
                };
                Ok(Some(self.ctx.function_type_expr(return_type, pos)))
            }
            ExprKind::Return { .. } => Ok(None),
        }
    }

    // === Type lifting ===

    /// The type a constant-evaluated expression denotes, or `None`.
    pub fn as_type(&mut self, expr: ExprId) -> Option<TypeId> {
        if let Some(memo) = self.ctx.as_type_memo(expr) {
            return memo;
        }
        let ty = ensure_sufficient_stack(|| self.as_type_uncached(expr));
        self.ctx.set_as_type_memo(expr, ty);
        ty
    }

    fn as_type_uncached(&mut self, expr: ExprId) -> Option<TypeId> {
        match self.ctx.expr(expr).kind {
            ExprKind::SimpleType(kind) => Some(self.ctx.simple_type(kind)),
            ExprKind::FunctionType { return_type } => {
                let return_type = self.as_type(return_type)?;
                Some(self.ctx.function_type(return_type))
            }
            ExprKind::IntLiteral(_) | ExprKind::Return { .. } | ExprKind::Name(_) => None,
        }
    }

    // === Typing ===

    pub fn type_expr(&mut self, expr: ExprId) -> Result<TypeId, TypeError> {
        if let Some(ty) = self.ctx.type_memo(expr) {
            trace!(?expr, "type memo hit");
            return Ok(ty);
        }
        let ty = ensure_sufficient_stack(|| self.type_expr_uncached(expr))?;
        self.ctx.set_type_memo(expr, ty);
        Ok(ty)
    }

    fn type_expr_uncached(&mut self, expr: ExprId) -> Result<TypeId, TypeError> {
        let node = self.ctx.expr(expr);
        let pos = node.pos;
        match node.kind {
            ExprKind::IntLiteral(_) => Ok(self.ctx.simple_type(SimpleTypeKind::Int32)),
            ExprKind::Return { value } => {
                let expected = self
                    .return_type
                    .ok_or(TypeError::ReturnOutsideFunction { pos })?;
                let actual = self.type_expr(value)?;
                if !self.ctx.types_equal(expected, actual) {
                    return Err(TypeError::ExpectedType {
                        expected,
                        actual,
                        pos: self.ctx.expr(value).pos,
                    });
                }
                Ok(self.ctx.simple_type(SimpleTypeKind::Never))
            }
            ExprKind::Name(name) => Ok(self.lookup(expr, name)?.ty),
            ExprKind::SimpleType(_) | ExprKind::FunctionType { .. } => {
                Ok(self.ctx.simple_type(SimpleTypeKind::Type))
            }
        }
    }

    // === Items ===

    /// Check a function's signature, then its body against the declared
    /// return type.
    ///
    /// # Panics
    ///
    /// Panics if the signature lifts to something other than a function
    /// type. Parsed items always carry a function type expression.
    pub fn check_function(&mut self, item: ItemId) -> Result<(), TypeError> {
        let Item::Function(func) = self.ctx.item(item);
        let (signature, body) = (func.ty, func.body);
        let type_type = self.ctx.simple_type(SimpleTypeKind::Type);

        let evaluated = self.const_eval(signature)?.unwrap_or(signature);
        let signature_type = self.type_expr(evaluated)?;
        if !self.ctx.types_equal(signature_type, type_type) {
            return Err(TypeError::ExpectedType {
                expected: type_type,
                actual: signature_type,
                pos: self.ctx.expr(signature).pos,
            });
        }

        let Some(function_type) = self.as_type(evaluated) else {
            return Err(self.lift_failure(evaluated));
        };
        let return_type = match *self.ctx.ty(function_type) {
            Type::Function { return_type } => return_type,
            Type::Simple(kind) => panic!("function signature lifted to `{}`", kind.name()),
        };
        debug!(
            return_type = %self.ctx.type_name(return_type),
            "checking function body"
        );

        self.scopes.push();
        let outer = self.return_type.replace(return_type);
        let result = self.type_expr(body);
        self.return_type = outer;
        self.scopes.pop();
        result.map(|_| ())
    }

    /// Error for a signature whose return type does not denote a type.
    fn lift_failure(&mut self, signature: ExprId) -> TypeError {
        let target = match self.ctx.expr(signature).kind {
            ExprKind::FunctionType { return_type } => return_type,
            _ => signature,
        };
        let expected = self.ctx.simple_type(SimpleTypeKind::Type);
        match self.type_expr(target) {
            Ok(actual) => TypeError::ExpectedType {
                expected,
                actual,
                pos: self.ctx.expr(target).pos,
            },
            Err(err) => err,
        }
    }
}
