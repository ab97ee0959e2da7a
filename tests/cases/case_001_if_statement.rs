use casebook::{Case, Descriptor, Value};

pub fn case() -> Case<i32> {
    Case {
        description: String::from("If statement"),
        args: vec![],
        expected: Value::from(3),
        setup: Box::new(|| {
            let mut a = 2;
            let guard = true;
            if guard {
                a += 1;
            }
            Ok(a)
        }),
        run: Box::new(|a, _args| Ok(Value::from(*a))),
    }
}

#[test]
fn test() {
    let loaded = case().load().expect("fixture setup failed");
    assert_eq!(*loaded.state(), 3);
    assert_eq!(loaded.description(), "If statement");
    assert!(loaded.args().is_empty());
    assert_eq!(loaded.invoke(&[]).unwrap(), Value::from(3));

    // Repeated checks within one load see the same fixture state
    assert!(loaded.check().is_pass());
    assert!(loaded.check().is_pass());
}
