mod common;

#[test]
fn string_literal_prints_without_quotes() {
    assert_eq!(common::run(r#"print "hello";"#), "hello\n");
}

#[test]
fn plus_concatenates_two_strings() {
    assert_eq!(common::run(r#"print "foo" + "bar";"#), "foobar\n");
}

#[test]
fn adding_a_string_and_a_number_is_a_runtime_error() {
    let (_, _, runtime_error) = common::run_err(r#"print "foo" + 1;"#);
    assert!(runtime_error);
}

#[test]
fn unterminated_string_is_a_compile_error() {
    let (_, compile_error, _) = common::run_err("\"unterminated");
    assert!(compile_error);
}

#[test]
fn multiline_string_literal_is_allowed() {
    let output = common::run("print \"a\nb\";");
    assert_eq!(output, "a\nb\n");
}
