mod common;

#[test]
fn calling_a_number_is_a_runtime_error() {
    let (_, _, runtime_error) = common::run_err("var a = 1; a();");
    assert!(runtime_error);
}

#[test]
fn wrong_argument_count_is_a_runtime_error() {
    let (_, _, runtime_error) = common::run_err(
        r#"
        fun add(a, b) { return a + b; }
        add(1);
        "#,
    );
    assert!(runtime_error);
}

#[test]
fn calls_can_be_chained_off_a_returned_function() {
    let output = common::run(
        r#"
        fun make_adder(a) {
            fun adder(b) {
                return a + b;
            }
            return adder;
        }
        print make_adder(1)(2);
        "#,
    );
    assert_eq!(output, "3\n");
}

#[test]
fn clock_native_returns_a_number() {
    let output = common::run("print clock() >= 0;");
    assert_eq!(output, "true\n");
}

#[test]
fn native_function_value_prints_without_its_name() {
    assert_eq!(common::run("print clock;"), "<native fn>\n");
}
