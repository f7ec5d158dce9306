mod common;

#[test]
fn comparison_operators() {
    assert_eq!(common::run("print 1 < 2;"), "true\n");
    assert_eq!(common::run("print 2 <= 2;"), "true\n");
    assert_eq!(common::run("print 3 > 2;"), "true\n");
    assert_eq!(common::run("print 2 >= 3;"), "false\n");
}

#[test]
fn equality_across_types_is_always_false() {
    assert_eq!(common::run(r#"print 1 == "1";"#), "false\n");
    assert_eq!(common::run("print nil == false;"), "false\n");
}

#[test]
fn not_equal_is_the_negation_of_equal() {
    assert_eq!(common::run("print 1 != 2;"), "true\n");
    assert_eq!(common::run("print 1 != 1;"), "false\n");
}

#[test]
fn comparing_non_numbers_is_a_runtime_error() {
    let (_, _, runtime_error) = common::run_err(r#"print "a" < "b";"#);
    assert!(runtime_error);
}

#[test]
fn negating_a_non_number_is_a_runtime_error() {
    let (_, _, runtime_error) = common::run_err(r#"print -"a";"#);
    assert!(runtime_error);
}
