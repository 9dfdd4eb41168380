//! Zeno IR: the data structures shared by every front-end phase.
//!
//! - [`IndexMap`]: insertion-ordered open-addressing map with stable ids
//! - [`StringInterner`] and [`Name`]: deduplicated identifier text
//! - [`SourceBuffer`]: nul-terminated source bytes for the lexer
//! - [`Token`] and [`TokenList`]: lexer output
//! - [`ast`]: item, expression, type and declaration nodes
//! - [`AstContext`]: owner of every node, string and source of a unit
//! - [`ScopeStack`] and [`Prelude`]: name environments for the binder and checker
//!
//! # Design
//!
//! - **Index everything**: nodes refer to each other through `u32` ids
//! - **Immutable nodes**: facts computed later live in set-once side tables

mod context;
mod int;
mod interner;
mod name;
mod pos;
mod prelude;
mod scope;
mod source;
mod token;

pub mod ast;
pub mod dump;
pub mod map;

pub use context::{AstContext, STDIN_PATH};
pub use int::{IntValue, SMALL_INT_MAX};
pub use interner::{StringInterner, StringLookup};
pub use map::{EntryId, IndexMap, IndexSet};
pub use name::Name;
pub use pos::SourcePos;
pub use prelude::{Prelude, PreludeEntry};
pub use scope::ScopeStack;
pub use source::{SourceBuffer, SourceFile, SourceId, UTF8_BOM};
pub use token::{Token, TokenKind, TokenList, TokenValue};
