use super::*;
use pretty_assertions::assert_eq;

#[test]
fn builder_sets_fields() {
    let diag = Diagnostic::error(Category::Parse, "expected item, found end of file")
        .with_source("main.zn")
        .at(SourcePos::new(3, 7));
    assert_eq!(
        diag,
        Diagnostic {
            level: Level::Error,
            category: Category::Parse,
            source: "main.zn".to_string(),
            line: 3,
            column: 7,
            message: "expected item, found end of file".to_string(),
        }
    );
    assert!(diag.has_position());
    assert!(diag.is_error());
}

#[test]
fn no_position_by_default() {
    let diag = Diagnostic::new(Level::Warning, Category::Driver, "ignored");
    assert!(!diag.has_position());
    assert!(!diag.is_error());
    assert!(!diag.at(SourcePos::NONE).has_position());
}

#[test]
fn names() {
    assert_eq!(
        [Level::Info, Level::Warning, Level::Error].map(Level::as_str),
        ["info", "warning", "error"]
    );
    assert_eq!(
        [
            Category::Driver,
            Category::System,
            Category::Tokenize,
            Category::Parse,
            Category::Typecheck,
        ]
        .map(|c| c.to_string()),
        ["driver", "system", "tokenize", "parse", "typecheck"]
    );
    assert!(Level::Error > Level::Warning);
}
