use casebook::{Case, Value};

pub fn case() -> Case<i32> {
    Case {
        description: String::from("Summation loop"),
        args: vec![],
        expected: Value::from(5050),
        setup: Box::new(|| Ok((1..=100).sum::<i32>())),
        run: Box::new(|total, _args| Ok(Value::from(*total))),
    }
}

#[test]
fn test() {
    assert!(case().check().outcome.is_pass());
}
