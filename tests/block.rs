mod common;

#[test]
fn block_scoped_variable_shadows_outer() {
    let output = common::run(
        r#"
        var a = "outer";
        {
            var a = "inner";
            print a;
        }
        print a;
        "#,
    );
    assert_eq!(output, "inner\nouter\n");
}

#[test]
fn nested_blocks_see_enclosing_scopes() {
    let output = common::run(
        r#"
        var a = 1;
        {
            var b = 2;
            {
                print a + b;
            }
        }
        "#,
    );
    assert_eq!(output, "3\n");
}

#[test]
fn block_locals_do_not_leak_out() {
    let (_, _, runtime_error) = common::run_err(
        r#"
        {
            var a = 1;
        }
        print a;
        "#,
    );
    assert!(runtime_error);
}
