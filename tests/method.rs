mod common;

#[test]
fn method_can_be_called_on_an_instance() {
    let output = common::run(
        r#"
        class Greeter {
            greet() {
                print "hello";
            }
        }
        Greeter().greet();
        "#,
    );
    assert_eq!(output, "hello\n");
}

#[test]
fn method_sees_its_own_instance_fields_through_this() {
    let output = common::run(
        r#"
        class Counter {
            init() { this.count = 0; }
            increment() {
                this.count = this.count + 1;
                return this.count;
            }
        }
        var c = Counter();
        print c.increment();
        print c.increment();
        "#,
    );
    assert_eq!(output, "1\n2\n");
}

#[test]
fn bound_method_extracted_to_a_variable_keeps_its_receiver() {
    let output = common::run(
        r#"
        class Counter {
            init() { this.count = 0; }
            increment() {
                this.count = this.count + 1;
                return this.count;
            }
        }
        var c = Counter();
        var bound = c.increment;
        print bound();
        print bound();
        "#,
    );
    assert_eq!(output, "1\n2\n");
}

#[test]
fn calling_an_undefined_method_is_a_runtime_error() {
    let (_, _, runtime_error) = common::run_err(
        r#"
        class Empty {}
        Empty().missing();
        "#,
    );
    assert!(runtime_error);
}
