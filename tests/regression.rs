mod common;

#[test]
fn deeply_nested_closures_each_keep_their_own_binding() {
    let output = common::run(
        r#"
        fun outer() {
            var x = "outer";
            fun middle() {
                var x = "middle";
                fun inner() {
                    print x;
                }
                inner();
            }
            middle();
        }
        outer();
        "#,
    );
    assert_eq!(output, "middle\n");
}

#[test]
fn class_method_can_return_a_closure_over_this() {
    let output = common::run(
        r#"
        class Thing {
            init(name) { this.name = name; }
            getter() {
                fun get() { return this.name; }
                return get;
            }
        }
        var t = Thing("widget");
        var get_name = t.getter();
        print get_name();
        "#,
    );
    assert_eq!(output, "widget\n");
}

#[test]
fn recursive_class_methods_via_this() {
    let output = common::run(
        r#"
        class Countdown {
            init(n) { this.n = n; }
            run() {
                if (this.n <= 0) {
                    print "done";
                    return;
                }
                print this.n;
                this.n = this.n - 1;
                this.run();
            }
        }
        Countdown(2).run();
        "#,
    );
    assert_eq!(output, "2\n1\ndone\n");
}
