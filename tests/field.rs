mod common;

#[test]
fn fields_can_be_set_and_read_back() {
    let output = common::run(
        r#"
        class Box {}
        var b = Box();
        b.value = 42;
        print b.value;
        "#,
    );
    assert_eq!(output, "42\n");
}

#[test]
fn reading_an_unset_field_is_a_runtime_error() {
    let (_, _, runtime_error) = common::run_err(
        r#"
        class Box {}
        var b = Box();
        print b.value;
        "#,
    );
    assert!(runtime_error);
}

#[test]
fn setting_a_field_on_a_non_instance_is_a_runtime_error() {
    let (_, _, runtime_error) = common::run_err("var a = 1; a.value = 1;");
    assert!(runtime_error);
}

#[test]
fn getting_a_field_on_a_non_instance_is_a_runtime_error() {
    let (_, _, runtime_error) = common::run_err("var a = 1; print a.value;");
    assert!(runtime_error);
}

#[test]
fn fields_can_store_any_object_including_functions() {
    let output = common::run(
        r#"
        class Box {}
        fun greet() { print "hi"; }
        var b = Box();
        b.action = greet;
        b.action();
        "#,
    );
    assert_eq!(output, "hi\n");
}
