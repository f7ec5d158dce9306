mod common;

#[test]
fn for_loop_desugars_to_a_while_loop() {
    let output = common::run(
        r#"
        for (var i = 0; i < 3; i = i + 1) {
            print i;
        }
        "#,
    );
    assert_eq!(output, "0\n1\n2\n");
}

#[test]
fn for_loop_clauses_are_all_optional() {
    let output = common::run(
        r#"
        var i = 0;
        for (; i < 3;) {
            print i;
            i = i + 1;
        }
        "#,
    );
    assert_eq!(output, "0\n1\n2\n");
}

#[test]
fn for_loop_variable_is_scoped_to_the_loop() {
    let (_, _, runtime_error) = common::run_err(
        r#"
        for (var i = 0; i < 1; i = i + 1) {}
        print i;
        "#,
    );
    assert!(runtime_error);
}
