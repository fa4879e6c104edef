//! Integration tests for the front end.
//!
//! These tests run whole programs through tokenization and parsing, print the
//! resulting tree back as source, and check the rendered diagnostics.

use goscript::{
    ast::{ast::to_source, statements::Stmt},
    display_error,
    errors::errors::{ErrorImpl, ErrorKind},
    lexer::lexer::tokenize,
    parser::parser::{parse, parse_source},
};

const PROGRAM: &str = "\
// Sums the even numbers below ten.
var count int
total := 0
for i := 0; i < 10; i = i + 1 {
    if i % 2 == 0 && !(i > 5) {
        total = total + i
    } else if i == 7 {
        continue
    } else {
        break
    }
}
add := func(a, b int) int { return a + b }
";

const CANONICAL: &str = "\
var count int
total := 0
for i := 0; i < 10; i = i + 1 {
    if i % 2 == 0 && !(i > 5) {
        total = total + i
    } else if i == 7 {
        continue
    } else {
        break
    }
}
add := func(a int, b int) int {
    return a + b
}
";

#[test]
fn test_parse_whole_program() {
    let tokens = tokenize(PROGRAM.to_string(), Some("sum.gs".to_string())).unwrap();
    let program = parse(tokens).unwrap();

    // The comment line parses as an empty statement.
    assert_eq!(program.len(), 5);
    assert!(matches!(program[0], Stmt::Empty(_)));
    assert!(matches!(program[1], Stmt::VarDecl(_)));
    assert!(matches!(program[2], Stmt::Define(_)));
    assert!(matches!(program[3], Stmt::For(_)));
    assert!(matches!(program[4], Stmt::Define(_)));
}

#[test]
fn test_print_canonical_source() {
    let program = parse_source(PROGRAM, "sum.gs").unwrap();
    let printed = to_source(&program);

    assert_eq!(printed.trim_start_matches('\n'), CANONICAL);
}

#[test]
fn test_printed_source_parses_to_same_tree() {
    let sources = [
        PROGRAM,
        "x := -(a - b) * -c\ny := a - (b - c)\nz := (a || b) && !c\n",
        "for {\n}\nfor ; ; {\n}\nfor x < 3 {\n    x = x + 1;\n}\n",
        "var f func(int, func(bool) int) (int, bool) = func(n int, g func(bool) int) (int, bool) {\n    return n, true\n}\n",
        "{\n    ;\n    a, b = b, a\n\n    return\n}\n",
    ];

    for source in sources {
        let first = parse_source(source, "round.gs").unwrap();
        let printed = to_source(&first);
        let second = parse_source(&printed, "round.gs")
            .unwrap_or_else(|error| panic!("printed source failed to parse: {}\n{}", error, printed));

        assert_eq!(first, second, "tree changed after printing:\n{}", printed);
        assert_eq!(printed, to_source(&second));
    }
}

#[test]
fn test_minimal_parentheses() {
    let program = parse_source("x := ((a + b)) + (c * d) - (e - f)\n", "test.gs").unwrap();
    assert_eq!(to_source(&program), "x := a + b + c * d - (e - f)\n");
}

#[test]
fn test_semicolons_and_single_line_blocks() {
    let program = parse_source("a;\nif a { b; }\n", "test.gs").unwrap();
    assert_eq!(to_source(&program), "a;\nif a {\n    b;\n}\n");
}

#[test]
fn test_display_error() {
    let source = "x := 1\nvar y\n";
    let error = parse_source(source, "main.gs").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(
        display_error(&error, source),
        "Error: UnexpectedToken (expected `=`, found newline)\n\
         -> main.gs:2:6\n  \
         |\n\
         2 | var y\n  \
         | -----^\n"
    );
}

#[test]
fn test_display_error_strips_indentation() {
    let source = "for {\n        x := 1 +\n}\n";
    let error = parse_source(source, "main.gs").unwrap_err();
    let rendered = display_error(&error, source);

    assert!(rendered.contains("2 | x := 1 +\n"), "{}", rendered);
    assert!(rendered.ends_with("  | --------^\n"), "{}", rendered);
}

#[test]
fn test_lexer_errors_surface_through_parse_source() {
    let error = parse_source("x := 1 @ 2\n", "main.gs").unwrap_err();
    assert!(matches!(error.get_impl(), ErrorImpl::UnrecognisedToken { .. }));
    assert_eq!(error.to_string().split(':').take(3).collect::<Vec<_>>(), ["main.gs", "1", "8"]);
}

#[test]
fn test_define_errors_name_the_expression() {
    let error = parse_source("a, b + 1 := 1, 2\n", "main.gs").unwrap_err();
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::NonNameOnLeftOfDefine {
            expr: "b + 1".to_string(),
        }
    );
}
