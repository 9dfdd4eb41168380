use super::*;
use crate::StringInterner;
use pretty_assertions::assert_eq;

#[test]
fn lookup_walks_outwards() {
    let mut names = StringInterner::new();
    let x = names.intern("x");
    let y = names.intern("y");
    let mut scopes = ScopeStack::new();
    scopes.push();
    scopes.insert(x, 1);
    scopes.push();
    scopes.insert(y, 2);
    assert_eq!(scopes.depth(), 2);
    assert_eq!(scopes.lookup(x), Some(&1));
    assert_eq!(scopes.lookup(y), Some(&2));
    scopes.pop();
    assert_eq!(scopes.lookup(y), None);
}

#[test]
fn inner_binding_shadows_outer() {
    let mut names = StringInterner::new();
    let x = names.intern("x");
    let mut scopes = ScopeStack::new();
    scopes.push();
    scopes.insert(x, "outer");
    scopes.push();
    scopes.insert(x, "inner");
    assert_eq!(scopes.lookup(x), Some(&"inner"));
    scopes.pop();
    assert_eq!(scopes.lookup(x), Some(&"outer"));
}

#[test]
fn reused_scopes_start_empty() {
    let mut names = StringInterner::new();
    let x = names.intern("x");
    let mut scopes = ScopeStack::new();
    scopes.push();
    scopes.insert(x, 1);
    scopes.pop();
    assert_eq!(scopes.depth(), 0);
    scopes.push();
    assert_eq!(scopes.lookup(x), None);
}

#[test]
#[should_panic(expected = "pop on an empty scope stack")]
fn pop_without_push() {
    let mut scopes: ScopeStack<u32> = ScopeStack::new();
    scopes.pop();
}
