use super::*;
use pretty_assertions::assert_eq;

#[test]
fn new_is_recoverable() {
    let diag = Diagnostic::new("grammar.ebnf", 3, "non-terminal cannot contain ' '");
    assert_eq!(diag.severity(), Severity::Recoverable);
    assert!(!diag.is_fatal());
    assert_eq!(diag.line(), 3);
    assert_eq!(diag.file(), Path::new("grammar.ebnf"));
}

#[test]
fn display_includes_location_and_severity() {
    let diag = Diagnostic::with_severity(
        "rules/expr.ebnf",
        12,
        "no matcher accepted input '@@@'",
        Severity::Fatal,
    );
    assert_eq!(
        diag.to_string(),
        "rules/expr.ebnf:12: fatal: no matcher accepted input '@@@'"
    );
}

#[test]
fn recoverable_displays_as_error() {
    let diag = Diagnostic::new("a.ebnf", 1, "oops");
    assert_eq!(diag.to_string(), "a.ebnf:1: error: oops");
}
