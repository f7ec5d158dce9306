mod common;

#[test]
fn function_without_return_yields_nil() {
    let output = common::run(
        r#"
        fun noop() {}
        print noop();
        "#,
    );
    assert_eq!(output, "nil\n");
}

#[test]
fn recursive_function_computes_fibonacci() {
    let output = common::run(
        r#"
        fun fib(n) {
            if (n < 2) return n;
            return fib(n - 1) + fib(n - 2);
        }
        print fib(10);
        "#,
    );
    assert_eq!(output, "55\n");
}

#[test]
fn function_value_prints_its_name() {
    let output = common::run(
        r#"
        fun greet() {}
        print greet;
        "#,
    );
    assert!(output.contains("greet"));
}

#[test]
fn parameters_shadow_outer_variables() {
    let output = common::run(
        r#"
        var a = "outer";
        fun show(a) {
            print a;
        }
        show("inner");
        print a;
        "#,
    );
    assert_eq!(output, "inner\nouter\n");
}
