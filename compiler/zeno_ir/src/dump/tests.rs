use super::*;
use crate::ast::SimpleTypeKind;
use crate::token::{Token, TokenKind};
use crate::{IntValue, SourcePos};
use pretty_assertions::assert_eq;

fn sample(ctx: &mut AstContext) -> (ItemId, ExprId) {
    let f = ctx.intern("f");
    let int32 = ctx.intern("Int32");
    let ret_ty = ctx.name_expr(int32, SourcePos::new(1, 12));
    let ty = ctx.function_type_expr(ret_ty, SourcePos::new(1, 6));
    let lit = ctx.int_literal_expr(IntValue::Small(42), SourcePos::new(1, 27));
    let body = ctx.return_expr(lit, SourcePos::new(1, 20));
    (ctx.function_item(f, ty, body, SourcePos::START), ret_ty)
}

#[test]
fn untyped_function_item() {
    let mut ctx = AstContext::new();
    let (item, _) = sample(&mut ctx);
    assert_eq!(
        dump_item(&ctx, item),
        "FunctionItem(
  name = \"f\",
  type = FunctionTypeExpr(
    return_type = NameExpr(name = \"Int32\"),
  ),
  body = ReturnExpr(
    value = IntLiteralExpr(value = 42),
  ),
)
"
    );
}

#[test]
fn evaluated_form_and_types_are_shown() {
    let mut ctx = AstContext::new();
    let (item, ret_ty) = sample(&mut ctx);
    let int32_expr = ctx.simple_type_expr(SimpleTypeKind::Int32);
    let type_ty = ctx.simple_type(SimpleTypeKind::Type);
    ctx.set_const_eval_memo(ret_ty, Some(int32_expr));
    ctx.set_type_memo(int32_expr, type_ty);
    let out = dump_item(&ctx, item);
    assert!(out.contains("return_type = Int32Expr(type = Type()),"), "{out}");
}

#[test]
fn function_type_rendering() {
    let mut ctx = AstContext::new();
    let int32 = ctx.simple_type(SimpleTypeKind::Int32);
    let f = ctx.function_type(int32);
    let dumper = AstDumper::new(&ctx);
    assert_eq!(dumper.ty(f), "FunctionType(return_type = Int32())");
}

#[test]
fn oversized_literal_prints_placeholder() {
    let mut ctx = AstContext::new();
    let digits = ctx.intern("99999999999999999999");
    let lit = ctx.int_literal_expr(IntValue::Oversized { digits, radix: 10 }, SourcePos::START);
    let mut dumper = AstDumper::new(&ctx);
    dumper.expr(lit, 0);
    assert_eq!(dumper.out, "IntLiteralExpr(value = <bigint>)");
}

// === Deep nesting ===

fn deep_signature(ctx: &mut AstContext, depth: usize) -> ItemId {
    let f = ctx.intern("f");
    let int32 = ctx.intern("Int32");
    let mut ty = ctx.name_expr(int32, SourcePos::START);
    for _ in 0..depth {
        ty = ctx.function_type_expr(ty, SourcePos::START);
    }
    let lit = ctx.int_literal_expr(IntValue::Small(1), SourcePos::START);
    let body = ctx.return_expr(lit, SourcePos::START);
    ctx.function_item(f, ty, body, SourcePos::START)
}

#[test]
fn indentation_stops_at_cap() {
    let mut ctx = AstContext::new();
    let item = deep_signature(&mut ctx, 40);
    let out = dump_item(&ctx, item);
    let widest = out
        .lines()
        .map(|line| line.len() - line.trim_start().len())
        .max()
        .unwrap();
    assert_eq!(widest, 2 * MAX_INDENT);
    let leaf = format!("{}return_type = NameExpr(name = \"Int32\"),", " ".repeat(2 * MAX_INDENT));
    assert!(out.lines().any(|line| line == leaf), "{out}");
    assert!(out.ends_with("  body = ReturnExpr(\n    value = IntLiteralExpr(value = 1),\n  ),\n)\n"));
}

#[test]
fn deeply_nested_signature_dumps() {
    let depth = 200_000;
    let mut ctx = AstContext::new();
    let item = deep_signature(&mut ctx, depth);
    let out = dump_item(&ctx, item);
    // One opening and one closing line per function type, plus the item frame.
    assert_eq!(out.lines().count(), 2 * depth + 7);
    assert_eq!(
        out.lines().filter(|line| line.ends_with("FunctionTypeExpr(")).count(),
        depth
    );
}

#[test]
fn token_dump_lines() {
    let mut ctx = AstContext::new();
    let f = ctx.intern("f");
    let tokens = TokenList::from_vec(vec![
        Token::new(TokenKind::Def, SourcePos::new(1, 1)),
        Token::ident(f, SourcePos::new(1, 5)),
        Token::int(IntValue::Small(7), SourcePos::new(2, 3)),
        Token::new(TokenKind::EndOfFile, SourcePos::new(2, 4)),
    ]);
    assert_eq!(
        dump_tokens(&ctx, &tokens),
        "1:1 Def\n1:5 Identifier \"f\"\n2:3 IntLiteral 7\n2:4 EndOfFile\n"
    );
}
