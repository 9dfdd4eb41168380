//! Allocation and identity authority for one compilation unit.
//!
//! [`AstContext`] owns every node, every interned string and every loaded
//! source file. Nodes are stored in per-kind vectors and addressed by typed
//! ids, so nothing handed out by the context can outlive it.
//!
//! Facts computed by later phases are kept in set-once side tables indexed
//! by node id. Setting a slot twice is a bug in the caller and panics.

use crate::ast::{
    Decl, DeclId, Expr, ExprId, ExprKind, FunctionItem, Item, ItemId, SimpleTypeKind, Type,
    TypeId,
};
use crate::source::{SourceBuffer, SourceFile, SourceId};
use crate::{IntValue, Name, SourcePos, StringInterner, StringLookup};

/// Path shown for sources read from standard input.
pub const STDIN_PATH: &str = "<stdin>";

/// Per-expression facts filled in by the binder and the type checker.
#[derive(Clone, Copy, Debug, Default)]
struct ExprFacts {
    referent: Option<DeclId>,
    /// `Some(None)` records that the expression has no constant form.
    const_eval: Option<Option<ExprId>>,
    ty: Option<TypeId>,
    /// `Some(None)` records that the expression does not denote a type.
    as_type: Option<Option<TypeId>>,
}

fn set_once<T: Copy>(slot: &mut Option<T>, value: T, what: &str) {
    assert!(slot.is_none(), "{what} already set");
    *slot = Some(value);
}

pub struct AstContext {
    interner: StringInterner,
    files: Vec<SourceFile>,
    items: Vec<Item>,
    item_decls: Vec<Option<DeclId>>,
    exprs: Vec<Expr>,
    expr_facts: Vec<ExprFacts>,
    types: Vec<Type>,
    decls: Vec<Decl>,
    simple_types: [TypeId; 4],
    simple_type_exprs: [ExprId; 4],
}

impl Default for AstContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AstContext {
    pub fn new() -> Self {
        let mut ctx = AstContext {
            interner: StringInterner::new(),
            files: Vec::new(),
            items: Vec::new(),
            item_decls: Vec::new(),
            exprs: Vec::new(),
            expr_facts: Vec::new(),
            types: Vec::new(),
            decls: Vec::new(),
            simple_types: [TypeId::from_index(0); 4],
            simple_type_exprs: [ExprId::from_index(0); 4],
        };
        for kind in SimpleTypeKind::ALL {
            ctx.simple_types[kind.slot()] = ctx.push_type(Type::Simple(kind));
            ctx.simple_type_exprs[kind.slot()] =
                ctx.alloc_expr(ExprKind::SimpleType(kind), SourcePos::NONE);
        }
        ctx
    }

    // === Strings ===

    pub fn intern(&mut self, text: &str) -> Name {
        self.interner.intern(text)
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn name_text(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }

    // === Sources ===

    /// Copy `bytes` into a nul-terminated buffer owned by the context.
    ///
    /// The path `-` names standard input and is recorded as `<stdin>`.
    pub fn load_source(&mut self, path: &str, bytes: &[u8]) -> SourceId {
        let path = if path == "-" { STDIN_PATH } else { path };
        let file = SourceFile {
            path: self.interner.intern(path),
            buffer: SourceBuffer::from_bytes(bytes),
        };
        let id = SourceId::new(u32::try_from(self.files.len()).unwrap_or(u32::MAX));
        self.files.push(file);
        id
    }

    pub fn source(&self, id: SourceId) -> &SourceFile {
        &self.files[id.index()]
    }

    pub fn source_path(&self, id: SourceId) -> &str {
        self.interner.lookup(self.source(id).path)
    }

    /// Borrow a source buffer together with the interner, for lexing.
    pub fn source_and_interner(&mut self, id: SourceId) -> (&SourceBuffer, &mut StringInterner) {
        (&self.files[id.index()].buffer, &mut self.interner)
    }

    // === Node construction ===

    pub fn alloc_item(&mut self, item: Item) -> ItemId {
        let id = ItemId::from_index(self.items.len());
        self.items.push(item);
        self.item_decls.push(None);
        id
    }

    pub fn function_item(&mut self, name: Name, ty: ExprId, body: ExprId, pos: SourcePos) -> ItemId {
        self.alloc_item(Item::Function(FunctionItem {
            name,
            ty,
            body,
            pos,
        }))
    }

    /// Allocate an expression with empty side-table slots.
    ///
    /// Simple type expressions should come from
    /// [`simple_type_expr`](Self::simple_type_expr) instead.
    pub fn alloc_expr(&mut self, kind: ExprKind, pos: SourcePos) -> ExprId {
        let id = ExprId::from_index(self.exprs.len());
        self.exprs.push(Expr { kind, pos });
        self.expr_facts.push(ExprFacts::default());
        id
    }

    pub fn int_literal_expr(&mut self, value: IntValue, pos: SourcePos) -> ExprId {
        self.alloc_expr(ExprKind::IntLiteral(value), pos)
    }

    pub fn return_expr(&mut self, value: ExprId, pos: SourcePos) -> ExprId {
        self.alloc_expr(ExprKind::Return { value }, pos)
    }

    pub fn name_expr(&mut self, name: Name, pos: SourcePos) -> ExprId {
        self.alloc_expr(ExprKind::Name(name), pos)
    }

    pub fn function_type_expr(&mut self, return_type: ExprId, pos: SourcePos) -> ExprId {
        self.alloc_expr(ExprKind::FunctionType { return_type }, pos)
    }

    /// Canonical expression for a simple type.
    #[inline]
    pub fn simple_type_expr(&self, kind: SimpleTypeKind) -> ExprId {
        self.simple_type_exprs[kind.slot()]
    }

    fn push_type(&mut self, ty: Type) -> TypeId {
        let id = TypeId::from_index(self.types.len());
        self.types.push(ty);
        id
    }

    /// Canonical type for a simple kind; equal kinds share one id.
    #[inline]
    pub fn simple_type(&self, kind: SimpleTypeKind) -> TypeId {
        self.simple_types[kind.slot()]
    }

    pub fn function_type(&mut self, return_type: TypeId) -> TypeId {
        self.push_type(Type::Function { return_type })
    }

    pub fn alloc_decl(&mut self, decl: Decl) -> DeclId {
        let id = DeclId::from_index(self.decls.len());
        self.decls.push(decl);
        id
    }

    // === Node access ===

    #[inline]
    pub fn item(&self, id: ItemId) -> &Item {
        &self.items[id.index()]
    }

    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn ty(&self, id: TypeId) -> &Type {
        &self.types[id.index()]
    }

    #[inline]
    pub fn decl(&self, id: DeclId) -> &Decl {
        &self.decls[id.index()]
    }

    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn decl_count(&self) -> usize {
        self.decls.len()
    }

    // === Side tables ===

    pub fn item_decl(&self, id: ItemId) -> Option<DeclId> {
        self.item_decls[id.index()]
    }

    pub fn set_item_decl(&mut self, id: ItemId, decl: DeclId) {
        set_once(&mut self.item_decls[id.index()], decl, "item declaration");
    }

    pub fn referent(&self, id: ExprId) -> Option<DeclId> {
        self.expr_facts[id.index()].referent
    }

    pub fn set_referent(&mut self, id: ExprId, decl: DeclId) {
        set_once(&mut self.expr_facts[id.index()].referent, decl, "referent");
    }

    /// Memoized constant form: `None` if not computed yet.
    pub fn const_eval_memo(&self, id: ExprId) -> Option<Option<ExprId>> {
        self.expr_facts[id.index()].const_eval
    }

    pub fn set_const_eval_memo(&mut self, id: ExprId, value: Option<ExprId>) {
        set_once(&mut self.expr_facts[id.index()].const_eval, value, "const_eval");
    }

    /// Memoized checked type: `None` if not computed yet.
    pub fn type_memo(&self, id: ExprId) -> Option<TypeId> {
        self.expr_facts[id.index()].ty
    }

    pub fn set_type_memo(&mut self, id: ExprId, ty: TypeId) {
        set_once(&mut self.expr_facts[id.index()].ty, ty, "type");
    }

    /// Memoized lifted type: `None` if not computed yet.
    pub fn as_type_memo(&self, id: ExprId) -> Option<Option<TypeId>> {
        self.expr_facts[id.index()].as_type
    }

    pub fn set_as_type_memo(&mut self, id: ExprId, ty: Option<TypeId>) {
        set_once(&mut self.expr_facts[id.index()].as_type, ty, "as_type");
    }

    // === Types ===

    /// Structural type equality.
    pub fn types_equal(&self, a: TypeId, b: TypeId) -> bool {
        let (mut a, mut b) = (a, b);
        loop {
            if a == b {
                return true;
            }
            match (self.ty(a), self.ty(b)) {
                (Type::Simple(x), Type::Simple(y)) => return x == y,
                (Type::Function { return_type: x }, Type::Function { return_type: y }) => {
                    a = *x;
                    b = *y;
                }
                _ => return false,
            }
        }
    }

    /// Canonical spelling of a type, e.g. `Int32` or `() -> Int32`.
    pub fn type_name(&self, id: TypeId) -> String {
        let mut name = String::new();
        let mut current = id;
        loop {
            match self.ty(current) {
                Type::Simple(kind) => {
                    name.push_str(kind.name());
                    return name;
                }
                Type::Function { return_type } => {
                    name.push_str("() -> ");
                    current = *return_type;
                }
            }
        }
    }
}

impl StringLookup for AstContext {
    fn lookup(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }
}
