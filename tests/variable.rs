mod common;

#[test]
fn uninitialized_variable_defaults_to_nil() {
    assert_eq!(common::run("var a; print a;"), "nil\n");
}

#[test]
fn variable_can_reference_another_during_initialization() {
    let output = common::run(
        r#"
        var a = 1;
        var b = a + 1;
        print b;
        "#,
    );
    assert_eq!(output, "2\n");
}

#[test]
fn redeclaring_a_global_is_allowed() {
    let output = common::run(
        r#"
        var a = 1;
        var a = 2;
        print a;
        "#,
    );
    assert_eq!(output, "2\n");
}

#[test]
fn redeclaring_a_local_in_the_same_scope_is_a_compile_error() {
    let (_, compile_error, _) = common::run_err(
        r#"
        {
            var a = 1;
            var a = 2;
        }
        "#,
    );
    assert!(compile_error);
}

#[test]
fn self_referencing_initializer_is_a_compile_error() {
    let (_, compile_error, _) = common::run_err(
        r#"
        {
            var a = a;
        }
        "#,
    );
    assert!(compile_error);
}

#[test]
fn using_an_undefined_variable_is_a_runtime_error() {
    let (_, _, runtime_error) = common::run_err("print undefined_name;");
    assert!(runtime_error);
}
