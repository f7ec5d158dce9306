mod common;

#[test]
fn super_calls_the_overridden_superclass_method() {
    let output = common::run(
        r#"
        class Animal {
            speak() { print "..."; }
        }
        class Dog < Animal {
            speak() {
                super.speak();
                print "woof";
            }
        }
        Dog().speak();
        "#,
    );
    assert_eq!(output, "...\nwoof\n");
}

#[test]
fn super_resolves_relative_to_where_it_is_written_not_the_receiver() {
    let output = common::run(
        r#"
        class A {
            method() { print "A"; }
        }
        class B < A {
            method() { print "B"; }
            test() { super.method(); }
        }
        class C < B {
            method() { print "C"; }
        }
        C().test();
        "#,
    );
    assert_eq!(output, "A\n");
}

#[test]
fn super_outside_a_class_is_a_compile_error() {
    let (_, compile_error, _) = common::run_err("super.method();");
    assert!(compile_error);
}

#[test]
fn super_in_a_class_with_no_superclass_is_a_compile_error() {
    let (_, compile_error, _) = common::run_err(
        r#"
        class Lonely {
            method() { super.method(); }
        }
        "#,
    );
    assert!(compile_error);
}
