mod common;

#[test]
fn literals_print_as_true_and_false() {
    assert_eq!(common::run("print true;"), "true\n");
    assert_eq!(common::run("print false;"), "false\n");
}

#[test]
fn bang_negates() {
    assert_eq!(common::run("print !true;"), "false\n");
    assert_eq!(common::run("print !false;"), "true\n");
}

#[test]
fn only_nil_and_false_are_falsy() {
    let output = common::run(
        r#"
        print !nil;
        print !0;
        print !"";
        "#,
    );
    assert_eq!(output, "true\nfalse\nfalse\n");
}

#[test]
fn bang_never_errors_on_non_literal_truthy_values() {
    let output = common::run(
        r#"
        class Foo {}
        fun bar() {}
        print !Foo;
        print !Foo();
        print !bar;
        "#,
    );
    assert_eq!(output, "false\nfalse\nfalse\n");
}

#[test]
fn equality_compares_by_value() {
    let output = common::run(
        r#"
        print true == true;
        print true == false;
        print true == 1;
        "#,
    );
    assert_eq!(output, "true\nfalse\nfalse\n");
}
