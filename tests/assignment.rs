mod common;

#[test]
fn assigns_to_an_existing_global() {
    let output = common::run(
        r#"
        var a = 1;
        a = 2;
        print a;
        "#,
    );
    assert_eq!(output, "2\n");
}

#[test]
fn assignment_is_an_expression_that_yields_the_value() {
    let output = common::run(
        r#"
        var a = 1;
        print a = 2;
        "#,
    );
    assert_eq!(output, "2\n");
}

#[test]
fn chained_assignment_is_right_associative() {
    let output = common::run(
        r#"
        var a = 1;
        var b = 2;
        a = b = 3;
        print a;
        print b;
        "#,
    );
    assert_eq!(output, "3\n3\n");
}

#[test]
fn assigning_to_an_undeclared_name_is_a_runtime_error() {
    let (_, compile_error, runtime_error) = common::run_err("x = 1;");
    assert!(!compile_error);
    assert!(runtime_error);
}

#[test]
fn invalid_assignment_target_is_a_compile_error() {
    let (_, compile_error, _) = common::run_err("1 = 2;");
    assert!(compile_error);
}
