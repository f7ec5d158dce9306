mod common;

#[test]
fn init_runs_automatically_on_construction() {
    let output = common::run(
        r#"
        class Point {
            init(x, y) {
                this.x = x;
                this.y = y;
            }
        }
        var p = Point(1, 2);
        print p.x;
        print p.y;
        "#,
    );
    assert_eq!(output, "1\n2\n");
}

#[test]
fn init_arity_matches_the_constructor_call() {
    let (_, _, runtime_error) = common::run_err(
        r#"
        class Point {
            init(x, y) {
                this.x = x;
                this.y = y;
            }
        }
        Point(1);
        "#,
    );
    assert!(runtime_error);
}

#[test]
fn calling_init_directly_returns_this() {
    let output = common::run(
        r#"
        class Box {
            init(value) {
                this.value = value;
            }
        }
        var b = Box(1);
        print b.init(2) == b;
        print b.value;
        "#,
    );
    assert_eq!(output, "true\n2\n");
}
