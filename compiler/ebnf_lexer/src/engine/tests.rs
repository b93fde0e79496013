use super::*;
use crate::token::{Span, TokenKind};
use ebnf_diagnostic::Diagnostic;
use pretty_assertions::assert_eq;

const FILE: &str = "grammar.ebnf";

struct Scan {
    tokens: Vec<(TokenKind, String)>,
    error: Option<ScanError>,
    diagnostics: Vec<Diagnostic>,
}

fn scan(source: &str, config: ScanConfig) -> Scan {
    let sink = DiagnosticSink::new();
    let mut scanner = Scanner::new(source, Path::new(FILE), &sink, config);
    let mut tokens = Vec::new();
    let error = loop {
        match scanner.next_token() {
            Ok(Some(token)) => tokens.push((token.kind, token.text.to_owned())),
            Ok(None) => break None,
            Err(error) => break Some(error),
        }
    };
    Scan {
        tokens,
        error,
        diagnostics: sink.snapshot(),
    }
}

fn kinds(source: &str) -> Vec<TokenKind> {
    let result = scan(source, ScanConfig::default());
    assert_eq!(result.error, None, "unexpected failure for {source:?}");
    result.tokens.into_iter().map(|(kind, _)| kind).collect()
}

// === Activation table ===

#[test]
fn table_covers_every_activation_symbol() {
    let table = ActivationTable::new();
    assert_eq!(table.symbol_count(), 16);
    assert_eq!(
        table.candidates('/'),
        Some(&[Matcher::LineComment, Matcher::BlockComment][..])
    );
    assert_eq!(table.candidates('\n'), Some(&[Matcher::Whitespace][..]));
    assert_eq!(table.candidates(':'), Some(&[Matcher::Definition][..]));
    assert_eq!(table.candidates('a'), None);
    assert_eq!(table.candidates('>'), None);
}

#[test]
fn global_table_is_built_once() {
    assert!(std::ptr::eq(global_table(), global_table()));
}

// === Token stream ===

#[test]
fn simple_rule() {
    use TokenKind::*;
    let result = scan(r#"<a> ::= "b" | "c" ;"#, ScanConfig::default());
    assert_eq!(result.error, None);
    assert_eq!(
        result.tokens,
        vec![
            (NonTerminalElement, "a".to_owned()),
            (DefinitionStart, "::=".to_owned()),
            (TerminalElement, "b".to_owned()),
            (Alternative, "|".to_owned()),
            (TerminalElement, "c".to_owned()),
            (DefinitionEnd, ";".to_owned()),
        ]
    );
    assert!(result.diagnostics.is_empty());
}

#[test]
fn all_delimiters() {
    use TokenKind::*;
    assert_eq!(
        kinds("<r> ::= ( <a> ) [ <b> ] { <c> } ;"),
        vec![
            NonTerminalElement,
            DefinitionStart,
            GroupingStart,
            NonTerminalElement,
            GroupingEnd,
            OptionalStart,
            NonTerminalElement,
            OptionalEnd,
            RepetitionStart,
            NonTerminalElement,
            RepetitionEnd,
            DefinitionEnd,
        ]
    );
}

#[test]
fn trivia_is_elided_by_default() {
    use TokenKind::*;
    let source = "// header\n<a> /* inline */ ::= <b>\n\t;\n";
    assert_eq!(
        kinds(source),
        vec![NonTerminalElement, DefinitionStart, NonTerminalElement, DefinitionEnd]
    );
}

#[test]
fn trivia_is_yielded_when_retained() {
    use TokenKind::*;
    let result = scan("<a> // c\n;", ScanConfig::default().with_trivia(true));
    assert_eq!(result.error, None);
    assert_eq!(
        result.tokens,
        vec![
            (NonTerminalElement, "a".to_owned()),
            (Whitespace, " ".to_owned()),
            (SingleLineComment, " c".to_owned()),
            (DefinitionEnd, ";".to_owned()),
        ]
    );
}

#[test]
fn empty_and_blank_inputs() {
    assert_eq!(kinds(""), vec![]);
    assert_eq!(kinds(" \n\t\r\n "), vec![]);
    assert_eq!(kinds("/* only a comment */"), vec![]);
}

#[test]
fn token_positions() {
    let sink = DiagnosticSink::new();
    let source = "<a> ::=\n  \"x\" ;";
    let tokens: Vec<_> = Scanner::new(source, Path::new(FILE), &sink, ScanConfig::default())
        .collect::<Result<_, _>>()
        .unwrap();
    let positions: Vec<_> = tokens.iter().map(|t| (t.line, t.column, t.span)).collect();
    assert_eq!(
        positions,
        vec![
            (1, 1, Span::new(0, 3)),
            (1, 5, Span::new(4, 7)),
            (2, 3, Span::new(10, 13)),
            (2, 7, Span::new(14, 15)),
        ]
    );
}

#[test]
fn recoverable_diagnostics_do_not_stop_the_scan() {
    let result = scan("<a b> ::= <c.d> ;", ScanConfig::default());
    assert_eq!(result.error, None);
    assert_eq!(result.tokens.len(), 4);
    assert_eq!(result.diagnostics.len(), 2);
    assert!(result.diagnostics.iter().all(|d| !d.is_fatal()));
}

// === Fatal conditions ===

#[test]
fn unknown_activation_symbol_is_fatal() {
    let result = scan("<a> ::= b ;", ScanConfig::default());
    assert_eq!(result.tokens.len(), 2);
    assert_eq!(
        result.error,
        Some(ScanError::NoActivation {
            file: FILE.into(),
            line: 1,
            symbol: 'b',
            preview: "b ;".to_owned(),
        })
    );
    assert_eq!(result.diagnostics.len(), 1);
    let fatal = &result.diagnostics[0];
    assert!(fatal.is_fatal());
    assert_eq!(
        fatal.message(),
        "no matcher for activation symbol 'b' at 'b ;'"
    );
}

#[test]
fn rejected_by_every_candidate_is_fatal() {
    let result = scan("<a> ::=\n\"open", ScanConfig::default());
    assert_eq!(result.tokens.len(), 2);
    assert_eq!(
        result.error,
        Some(ScanError::NoMatch {
            file: FILE.into(),
            line: 2,
            preview: "\"open".to_owned(),
        })
    );
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].line(), 2);
    assert_eq!(
        result.diagnostics[0].message(),
        "no matcher accepted input '\"open'"
    );
}

#[test]
fn lone_colon_is_fatal() {
    let result = scan("<a> : <b>", ScanConfig::default());
    assert!(matches!(result.error, Some(ScanError::NoMatch { .. })));
}

#[test]
fn preview_is_bounded() {
    let source = "\"abcdefghijklmnopqrstuvwxyz";
    let result = scan(source, ScanConfig::default());
    let Some(ScanError::NoMatch { preview, .. }) = result.error else {
        panic!("expected NoMatch, got {:?}", result.error);
    };
    assert_eq!(preview, "\"abcdefghijklmnopqrs...");
    assert_eq!(preview.chars().count(), 23);
}

#[test]
fn preview_length_is_configurable() {
    let result = scan("\"abcdef", ScanConfig::default().with_preview_len(3));
    let Some(ScanError::NoMatch { preview, .. }) = result.error else {
        panic!("expected NoMatch, got {:?}", result.error);
    };
    assert_eq!(preview, "\"ab...");
}

#[test]
fn preview_exactly_at_limit_is_not_marked() {
    let result = scan("\"abc", ScanConfig::default().with_preview_len(4));
    let Some(ScanError::NoMatch { preview, .. }) = result.error else {
        panic!("expected NoMatch, got {:?}", result.error);
    };
    assert_eq!(preview, "\"abc");
}

#[test]
fn scanner_is_fused_after_failure() {
    let sink = DiagnosticSink::new();
    let mut scanner = Scanner::new("<a> ? <b>", Path::new(FILE), &sink, ScanConfig::default());
    assert!(matches!(scanner.next_token(), Ok(Some(_))));
    assert!(scanner.next_token().is_err());
    assert!(scanner.failed());
    assert_eq!(scanner.next_token(), Ok(None));
    assert!(scanner.next().is_none());
    assert_eq!(sink.len(), 1);
}

#[test]
fn iterator_stops_after_error() {
    let sink = DiagnosticSink::new();
    let items: Vec<_> =
        Scanner::new("<a> ; @", Path::new(FILE), &sink, ScanConfig::default()).collect();
    assert_eq!(items.len(), 3);
    assert!(items[0].is_ok());
    assert!(items[1].is_ok());
    assert!(items[2].is_err());
}

#[test]
fn scanner_reports_config_and_position() {
    let sink = DiagnosticSink::new();
    let config = ScanConfig::predictive().with_preview_len(5);
    let mut scanner = Scanner::new("<a>\n  ;", Path::new(FILE), &sink, config);
    assert_eq!(scanner.config(), &config);
    assert_eq!((scanner.line(), scanner.column(), scanner.offset()), (1, 1, 0));
    assert!(matches!(scanner.next_token(), Ok(Some(_))));
    assert_eq!((scanner.line(), scanner.column(), scanner.offset()), (1, 4, 3));
    assert!(matches!(scanner.next_token(), Ok(Some(_))));
    assert_eq!((scanner.line(), scanner.column(), scanner.offset()), (2, 4, 7));
}

#[test]
fn end_of_input_is_not_an_error() {
    let sink = DiagnosticSink::new();
    let mut scanner = Scanner::new("<a>", Path::new(FILE), &sink, ScanConfig::default());
    assert!(matches!(scanner.next_token(), Ok(Some(_))));
    assert_eq!(scanner.next_token(), Ok(None));
    assert_eq!(scanner.next_token(), Ok(None));
    assert!(!scanner.failed());
    assert!(sink.is_empty());
}

// === Strategies ===

#[test]
fn predictive_falls_back_on_follow_set_miss() {
    // `|` never expects another `|`, `;` never expects `;`.
    use TokenKind::*;
    let result = scan("<a> ::= | | ;;", ScanConfig::predictive());
    assert_eq!(result.error, None);
    let kinds: Vec<_> = result.tokens.into_iter().map(|(k, _)| k).collect();
    assert_eq!(
        kinds,
        vec![
            NonTerminalElement,
            DefinitionStart,
            Alternative,
            Alternative,
            DefinitionEnd,
            DefinitionEnd,
        ]
    );
}

#[test]
fn strategies_agree() {
    let sources = [
        r#"<a> ::= "b" | "c" ;"#,
        "<a b> ::= <c\nd> ; // tail",
        "<x> ::= { \"a\\\"\" } [ <y> ] ;\n/* multi\nline */",
        "<a> ::= ;; || ::= /* x */ // y\n",
        "<a> ::= \"unterminated",
        "<a> ::= \"x\\\ny\" ;",
        "<a> ::= ? ;",
        "/* never closed",
    ];
    for source in sources {
        for trivia in [false, true] {
            let pattern = scan(source, ScanConfig::default().with_trivia(trivia));
            let predictive = scan(source, ScanConfig::predictive().with_trivia(trivia));
            assert_eq!(pattern.tokens, predictive.tokens, "tokens for {source:?}");
            assert_eq!(pattern.error, predictive.error, "error for {source:?}");
            assert_eq!(
                pattern.diagnostics, predictive.diagnostics,
                "diagnostics for {source:?}"
            );
        }
    }
}
