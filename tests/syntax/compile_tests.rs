//! Compile-time behavior: errors, introspection, idempotence.

use mudlark_syntax::{CompiledSyntax, SyntaxError};

#[test]
fn unterminated_capture() {
    // The first `<` scans to the first `>` in the template, swallowing the
    // second capture and producing a name that is not a valid token.
    let err = CompiledSyntax::compile("give <thing to <who>").unwrap_err();
    assert!(matches!(err, SyntaxError::InvalidCaptureName { .. }));

    let err = CompiledSyntax::compile("give <thing").unwrap_err();
    assert!(matches!(err, SyntaxError::UnterminatedCapture { offset: 5 }));
}

#[test]
fn unclosed_optional() {
    let err = CompiledSyntax::compile("look [at <thing>").unwrap_err();
    assert!(matches!(
        err,
        SyntaxError::MissingClosing { expected: ']', .. }
    ));
}

#[test]
fn unclosed_choice() {
    let err = CompiledSyntax::compile("{on|off").unwrap_err();
    assert!(matches!(
        err,
        SyntaxError::MissingClosing { expected: '}', .. }
    ));
}

#[test]
fn stray_closers() {
    assert!(matches!(
        CompiledSyntax::compile("on]").unwrap_err(),
        SyntaxError::UnexpectedClosing { found: ']', .. }
    ));
    assert!(matches!(
        CompiledSyntax::compile("on}").unwrap_err(),
        SyntaxError::UnexpectedClosing { found: '}', .. }
    ));
    // A closer of the wrong kind at the top of the stack is also an error.
    assert!(matches!(
        CompiledSyntax::compile("[a}").unwrap_err(),
        SyntaxError::UnexpectedClosing { found: '}', .. }
    ));
}

#[test]
fn duplicate_capture_names() {
    let err = CompiledSyntax::compile("<x> <x>").unwrap_err();
    assert!(matches!(err, SyntaxError::DuplicateCapture { .. }));

    // Uniqueness applies across nesting, too.
    let err = CompiledSyntax::compile("<x> [{a <x>|b}]").unwrap_err();
    assert!(matches!(err, SyntaxError::DuplicateCapture { .. }));
}

#[test]
fn invalid_capture_pattern_reports_offset() {
    let err = CompiledSyntax::compile("wait <turns:[0-9>").unwrap_err();
    let SyntaxError::InvalidCapturePattern { offset, .. } = err else {
        panic!("expected invalid pattern error, got {err:?}");
    };
    assert_eq!(offset, 5);
}

#[test]
fn capture_names_in_order_of_appearance() {
    let syntax = CompiledSyntax::compile("<class> {named|called|=} <names>")
        .expect("template compiles");
    let names: Vec<&str> = syntax.capture_names().collect();
    assert_eq!(names, vec!["class", "names"]);
    assert_eq!(syntax.optset_count(), 1);
}

#[test]
fn natural_is_preserved() {
    let template = "look [[at] <something>]";
    let syntax = CompiledSyntax::compile(template).expect("template compiles");
    assert_eq!(syntax.natural(), template);
}

#[test]
fn compilation_is_idempotent() {
    let template = "<class> {named|called|=} <names>";
    let first = CompiledSyntax::compile(template).expect("template compiles");
    let second = CompiledSyntax::compile(template).expect("template compiles");

    for input in [
        "thing named foo",
        "thing called Foo",
        "sword = Excalibur",
        "not a match",
    ] {
        assert_eq!(first.parse(input), second.parse(input), "input: {input}");
    }
    assert_eq!(first.regex_source(), second.regex_source());
}

#[test]
fn optsets_numbered_by_declaration_order() {
    let syntax = CompiledSyntax::compile("{a|b} [{c|d}] {e|f}").expect("template compiles");
    assert_eq!(syntax.optset_count(), 3);

    let args = syntax.parse("a c e").expect("should match");
    assert_eq!(args.optset(1).expect("first group").text, "a");
    assert_eq!(args.optset(2).expect("second group").text, "c");
    assert_eq!(args.optset(3).expect("third group").text, "e");

    let args = syntax.parse("b f").expect("should match");
    assert!(args.optset(2).is_none());
    assert_eq!(args.optset(3).expect("third group").branch, 1);
}
