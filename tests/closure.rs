mod common;

#[test]
fn closure_captures_its_defining_environment() {
    let output = common::run(
        r#"
        fun make_counter() {
            var count = 0;
            fun increment() {
                count = count + 1;
                print count;
            }
            return increment;
        }
        var counter = make_counter();
        counter();
        counter();
        counter();
        "#,
    );
    assert_eq!(output, "1\n2\n3\n");
}

#[test]
fn independent_closures_do_not_share_state() {
    let output = common::run(
        r#"
        fun make_counter() {
            var count = 0;
            fun increment() {
                count = count + 1;
                return count;
            }
            return increment;
        }
        var a = make_counter();
        var b = make_counter();
        a();
        a();
        print a();
        print b();
        "#,
    );
    assert_eq!(output, "3\n1\n");
}

#[test]
fn closure_sees_variable_value_at_call_time_not_definition_time() {
    let output = common::run(
        r#"
        var a = "before";
        fun show() { print a; }
        a = "after";
        show();
        "#,
    );
    assert_eq!(output, "after\n");
}
